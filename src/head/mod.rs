//! `<head>` builder.
//!
//! Collects title, meta, Open Graph, Twitter Card, link and JSON-LD tags
//! through declarative calls and renders them in a deterministic group order.
//!
//! # Module Structure
//!
//! ```text
//! head/
//! ├── group.rs    # Group enum and default order
//! ├── store.rs    # Grouped, keyed tag storage
//! ├── tag.rs      # Tag construction and TagValue
//! ├── social.rs   # og:/twitter: derivation
//! └── mod.rs      # HeaderBuilder (this file)
//! ```
//!
//! # Example
//!
//! ```
//! use tola_head::HeaderBuilder;
//!
//! let mut head = HeaderBuilder::new();
//! head.title("Hello   World").meta_description("A page about greetings.");
//! let html = head.render();
//! assert!(html.starts_with("<title>Hello World</title>"));
//! assert!(html.contains(r#"<meta property="og:title" content="Hello World">"#));
//! ```

mod group;
mod social;
mod store;
mod tag;


pub use group::{Group, UnknownGroup};
pub use social::{
    OG_DESCRIPTION_MAX, OG_TITLE_MAX, TWITTER_CARD, TWITTER_DESCRIPTION_MAX, TWITTER_TITLE_MAX,
};
pub use tag::{Attrs, TagValue, create_tag};

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::debug;
use crate::error::{HeadError, Result};
use crate::utils::text::{normalize, truncate};
use store::TagStore;
use tag::{jsonld_tag, title_tag};

/// Maximum length of `<meta name="description">`, in code points.
pub const DESCRIPTION_MAX: usize = 153;

/// Indentation of pretty-printed JSON-LD payloads.
const JSONLD_INDENT: &[u8] = b"    ";

/// Builds the markup of an HTML `<head>`.
///
/// Registration calls never fail on empty or absent input; they are no-ops.
/// Every call returns `&mut Self` for chaining.
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    order: Vec<Group>,
    tags: TagStore,
    title: Option<String>,
    description: Option<String>,
    automatic_open_graph: bool,
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self {
            order: Group::DEFAULT_ORDER.to_vec(),
            tags: TagStore::new(),
            title: None,
            description: None,
            automatic_open_graph: true,
        }
    }
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Set the document title, replacing any previous one.
    pub fn title<'a>(&mut self, value: impl Into<Option<&'a str>>) -> &mut Self {
        let Some(value) = value.into() else {
            return self;
        };
        let title = normalize(value);
        if title.is_empty() {
            debug!("head"; "title is empty after normalization, skipped");
            return self;
        }

        self.tags.replace(Group::Title, title_tag(&title));
        self.title = Some(title);
        self
    }

    /// Set `<meta name="description">` and remember it for derivation.
    pub fn meta_description(&mut self, content: &str) -> &mut Self {
        let description = normalize(content);
        if description.is_empty() {
            debug!("head"; "description is empty after normalization, skipped");
            return self;
        }

        self.description = Some(truncate(&description, DESCRIPTION_MAX).into_owned());
        self.meta("description", description)
    }

    /// Register `<meta name="{key}" ...>`.
    ///
    /// A scalar value becomes `content`; a map is merged over `name`.
    /// A scalar `description` is truncated to [`DESCRIPTION_MAX`].
    pub fn meta(&mut self, key: &str, value: impl Into<TagValue>) -> &mut Self {
        let value = value.into();
        if value.is_empty() {
            return self;
        }

        let mut attrs = Attrs::new();
        attrs.insert("name".into(), Some(key.to_string()));
        match value {
            TagValue::Text(content) => {
                let content = if key == "description" {
                    truncate(&content, DESCRIPTION_MAX).into_owned()
                } else {
                    content
                };
                attrs.insert("content".into(), Some(content));
            }
            TagValue::Attrs(extra) => attrs.extend(extra),
        }

        self.tags.upsert(Group::Meta, key, create_tag("meta", attrs));
        self
    }

    /// Register `<meta property="og:{key}" content="{value}">`.
    pub fn og(&mut self, key: &str, value: &str) -> &mut Self {
        self.og_with(key, value, true)
    }

    /// Like [`og`](Self::og), with control over the `og:` prefix.
    pub fn og_with(&mut self, key: &str, value: &str, prefixed: bool) -> &mut Self {
        self.social(Group::Og, "property", "og:", key, value, prefixed)
    }

    /// Register `<meta name="twitter:{key}" content="{value}">`.
    pub fn twitter(&mut self, key: &str, value: &str) -> &mut Self {
        self.twitter_with(key, value, true)
    }

    /// Like [`twitter`](Self::twitter), with control over the `twitter:` prefix.
    pub fn twitter_with(&mut self, key: &str, value: &str, prefixed: bool) -> &mut Self {
        self.social(Group::Twitter, "name", "twitter:", key, value, prefixed)
    }

    fn social(
        &mut self,
        group: Group,
        attr: &str,
        prefix: &str,
        key: &str,
        value: &str,
        prefixed: bool,
    ) -> &mut Self {
        if value.is_empty() {
            return self;
        }

        let key = if prefixed {
            format!("{prefix}{key}")
        } else {
            key.to_string()
        };
        let tag = create_tag("meta", [(attr, Some(key.as_str())), ("content", Some(value))]);
        self.tags.upsert(group, &key, tag);
        self
    }

    /// Register `<link rel="{key}" ...>`.
    ///
    /// A scalar value becomes `href`; a map is merged over `rel`.
    pub fn link(&mut self, key: &str, value: impl Into<TagValue>) -> &mut Self {
        let value = value.into();
        if value.is_empty() {
            return self;
        }

        let mut attrs = Attrs::new();
        attrs.insert("rel".into(), Some(key.to_string()));
        match value {
            TagValue::Text(href) => {
                attrs.insert("href".into(), Some(href));
            }
            TagValue::Attrs(extra) => attrs.extend(extra),
        }

        self.tags.upsert(Group::Link, key, create_tag("link", attrs));
        self
    }

    /// Append a `<script type="application/ld+json">` block.
    ///
    /// The schema is pretty-printed with its own key order. Empty maps,
    /// empty sequences and `null` are skipped. On failure nothing is appended.
    pub fn jsonld<T: Serialize + ?Sized>(&mut self, schema: &T) -> Result<&mut Self> {
        let value = serde_json::to_value(schema).map_err(|e| {
            debug!("head"; "json-ld serialization failed: {}", e);
            HeadError::invalid_input(e)
        })?;
        let is_empty = match &value {
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            serde_json::Value::Null => true,
            _ => false,
        };
        if is_empty {
            return Ok(self);
        }

        let json = to_pretty_json(&value)?;
        self.tags.push(Group::JsonLd, jsonld_tag(&json));
        Ok(self)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the render order with group names.
    ///
    /// Unknown names render nothing, so they are dropped here.
    pub fn set_custom_ordering_strategy<I, S>(&mut self, order: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.order = parse_groups(order);
        self
    }

    /// Replace the render order.
    pub fn set_order(&mut self, order: Vec<Group>) -> &mut Self {
        self.order = order;
        self
    }

    /// Toggle the og:/twitter: derivation pass. Enabled by default.
    pub fn set_automatic_open_graph(&mut self, enabled: bool) -> &mut Self {
        self.automatic_open_graph = enabled;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The normalized title, if one was set.
    pub fn title_value(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The normalized, truncated description, if one was set.
    pub fn description_value(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn order(&self) -> &[Group] {
        &self.order
    }

    pub fn is_automatic_open_graph(&self) -> bool {
        self.automatic_open_graph
    }

    /// Whether `key` is registered in a keyed group (`og:title`, `canonical`, ...).
    pub fn contains(&self, group: Group, key: &str) -> bool {
        self.tags.contains(group, key)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render every group in the configured order.
    pub fn render(&mut self) -> String {
        let order = self.order.clone();
        self.render_only(&order)
    }

    /// Render only `groups`, in the given order.
    pub fn render_only(&mut self, groups: &[Group]) -> String {
        if self.automatic_open_graph {
            self.derive_social();
        }

        let out: String = groups
            .iter()
            .map(|&group| self.tags.render_group(group))
            .collect();
        out.trim().to_string()
    }

    /// Render only the named groups; unknown names render nothing.
    pub fn render_named<I, S>(&mut self, groups: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = parse_groups(groups);
        self.render_only(&groups)
    }
}

/// Renders a copy; derived tags are not stored back into `self`.
impl fmt::Display for HeaderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clone().render())
    }
}

fn parse_groups<I, S>(names: I) -> Vec<Group>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| match name.as_ref().parse::<Group>() {
            Ok(group) => Some(group),
            Err(e) => {
                debug!("head"; "{}, skipped", e);
                None
            }
        })
        .collect()
}

/// Pretty-print with four-space indentation. Forward slashes stay unescaped.
fn to_pretty_json(value: &serde_json::Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSONLD_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(HeadError::invalid_input)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
