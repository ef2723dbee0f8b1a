//! Declarative `<head>` builder.
//!
//! Build the head of an HTML document from structured calls (title, meta,
//! Open Graph, Twitter Card, links and JSON-LD) instead of string
//! concatenation. Output is escaped and emitted in a deterministic group
//! order; missing `og:*`/`twitter:*` tags are derived from the title and
//! description.
//!
//! ```
//! use serde_json::json;
//! use tola_head::{Group, HeaderBuilder};
//!
//! let mut head = HeaderBuilder::new();
//! head.title("Release notes")
//!     .meta("robots", "index, follow")
//!     .link("canonical", "https://example.com/notes/");
//! head.jsonld(&json!({"@context": "https://schema.org", "@type": "WebPage"}))?;
//!
//! let html = head.render();
//! assert!(html.contains(r#"<link rel="canonical" href="https://example.com/notes/">"#));
//! assert_eq!(head.render_only(&[Group::Title]), "<title>Release notes</title>");
//! # Ok::<(), tola_head::HeadError>(())
//! ```

pub mod config;
pub mod error;
pub mod head;
pub mod logger;
pub mod utils;

pub use error::{HeadError, Result};
pub use head::{Attrs, Group, HeaderBuilder, TagValue};
