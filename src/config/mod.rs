//! Page head description in `head.toml`.
//!
//! # Example
//!
//! ```toml
//! [head]
//! title = "My Page"
//! description = "About my page"
//! auto_og = true
//! order = ["title", "meta", "og", "twitter", "link", "json-ld"]
//!
//! [head.meta]
//! robots = "index, follow"
//! viewport = { content = "width=device-width" }
//!
//! [head.og]
//! type = "website"
//!
//! [head.twitter]
//! site = "@tola"
//!
//! [[head.link]]
//! rel = "canonical"
//! href = "https://example.com/"
//!
//! [[head.jsonld]]
//! "@context" = "https://schema.org"
//! "@type" = "WebSite"
//! ```
//!
//! Table key order is preserved, so tags render in the order they are written.

mod error;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use util::find_config_file;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::{Table, Value};

use crate::debug;
use crate::head::{Attrs, Group, HeaderBuilder, TagValue};

/// Default config file name.
pub const DEFAULT_CONFIG: &str = "head.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing head.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// `[head]` section
    pub head: HeadSection,
}

/// `[head]` section: everything the builder is fed with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadSection {
    /// Document title.
    pub title: Option<String>,

    /// Meta description, also the source for og/twitter descriptions.
    pub description: Option<String>,

    /// Derive missing og:/twitter: tags from title and description.
    pub auto_og: bool,

    /// Render order (group names). Defaults to the builder's order.
    pub order: Option<Vec<String>>,

    /// `<meta name=...>` tags: string content or a table of attributes.
    pub meta: Table,

    /// `og:` prefixed properties.
    pub og: Table,

    /// `twitter:` prefixed properties.
    pub twitter: Table,

    /// `<link>` tags; each entry needs `rel`.
    pub link: Vec<Table>,

    /// JSON-LD objects, appended in order.
    pub jsonld: Vec<Value>,
}

impl Default for HeadSection {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            auto_og: true,
            order: None,
            meta: Table::new(),
            og: Table::new(),
            twitter: Table::new(),
            link: Vec::new(),
            jsonld: Vec::new(),
        }
    }
}

impl HeadConfig {
    /// Load and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config = Self::parse(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse and validate config content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config
            .validate()
            .into_result()
            .map_err(ConfigError::Diagnostics)?;
        Ok(config)
    }

    /// Collect every problem in the `[head]` section.
    pub fn validate(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        let head = &self.head;

        if let Some(order) = &head.order {
            for (i, name) in order.iter().enumerate() {
                if let Err(e) = name.parse::<Group>() {
                    diag.error_with_hint(
                        format!("head.order[{i}]"),
                        e.to_string(),
                        "valid groups: title, meta, og, twitter, link, json-ld",
                    );
                }
            }
        }

        for (key, value) in &head.meta {
            let field = format!("head.meta.{key}");
            match value {
                Value::String(_) => {}
                Value::Table(attrs) => check_attrs(&mut diag, &field, attrs),
                _ => diag.error_with_hint(
                    field,
                    "must be a string or a table of attributes",
                    format!("e.g. {key} = \"...\" or {key} = {{ content = \"...\" }}"),
                ),
            }
        }

        for (section, table) in [("og", &head.og), ("twitter", &head.twitter)] {
            for (key, value) in table {
                if !value.is_str() {
                    diag.error(format!("head.{section}.{key}"), "must be a string");
                }
            }
        }

        for (i, link) in head.link.iter().enumerate() {
            let field = format!("head.link[{i}]");
            if !link.get("rel").is_some_and(Value::is_str) {
                diag.error_with_hint(
                    field.clone(),
                    "missing `rel`",
                    "add e.g. rel = \"canonical\"",
                );
            }
            check_attrs(&mut diag, &field, link);
        }

        diag
    }

    /// Feed the `[head]` section into `builder`.
    ///
    /// Calls are issued in a fixed order: title, description, meta, og,
    /// twitter, link, jsonld, then order and derivation settings.
    pub fn apply(&self, builder: &mut HeaderBuilder) -> Result<(), ConfigError> {
        let head = &self.head;

        builder.title(head.title.as_deref());
        if let Some(description) = &head.description {
            builder.meta_description(description);
        }

        for (key, value) in &head.meta {
            builder.meta(key, to_tag_value(value));
        }
        for (key, value) in &head.og {
            builder.og(key, value.as_str().unwrap_or_default());
        }
        for (key, value) in &head.twitter {
            builder.twitter(key, value.as_str().unwrap_or_default());
        }

        for link in &head.link {
            let Some(rel) = link.get("rel").and_then(Value::as_str) else {
                continue;
            };
            let attrs: Attrs = link
                .iter()
                .filter(|(name, _)| name.as_str() != "rel")
                .map(|(name, value)| (name.clone(), value.as_str().map(str::to_string)))
                .collect();
            builder.link(rel, attrs);
        }

        for schema in &head.jsonld {
            builder.jsonld(&to_json(schema))?;
        }

        if let Some(order) = &head.order {
            builder.set_custom_ordering_strategy(order);
        }
        builder.set_automatic_open_graph(head.auto_og);

        debug!("config"; "applied {}", self.config_path.display());
        Ok(())
    }

    /// Build a fresh `HeaderBuilder` from this config.
    pub fn to_builder(&self) -> Result<HeaderBuilder, ConfigError> {
        let mut builder = HeaderBuilder::new();
        self.apply(&mut builder)?;
        Ok(builder)
    }
}

/// Attribute tables only hold strings.
fn check_attrs(diag: &mut ConfigDiagnostics, field: &str, attrs: &Table) {
    for (name, value) in attrs {
        if !value.is_str() {
            diag.error(format!("{field}.{name}"), "attribute values must be strings");
        }
    }
}

fn to_tag_value(value: &Value) -> TagValue {
    match value {
        Value::Table(table) => TagValue::Attrs(
            table
                .iter()
                .map(|(name, value)| (name.clone(), value.as_str().map(str::to_string)))
                .collect(),
        ),
        other => TagValue::Text(other.as_str().unwrap_or_default().to_string()),
    }
}

/// Convert a TOML value into JSON for JSON-LD output.
///
/// TOML datetimes become their RFC 3339 string, the form schema.org expects
/// for `datePublished` and friends. Non-finite floats become `null`.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FULL: &str = r#"
[head]
title = "My   Page"
description = "About my page"
order = ["title", "meta", "og", "twitter", "link", "json-ld"]

[head.meta]
robots = "index, follow"
viewport = { content = "width=device-width" }

[head.og]
type = "website"

[head.twitter]
site = "@tola"

[[head.link]]
rel = "canonical"
href = "https://example.com/"

[[head.link]]
rel = "alternate"
href = "https://example.com/de/"
hreflang = "de"

[[head.jsonld]]
"@context" = "https://schema.org"
"@type" = "WebSite"
"#;

    #[test]
    fn test_parse_defaults() {
        let config = HeadConfig::parse("").unwrap();
        assert!(config.head.auto_og);
        assert!(config.head.title.is_none());
        assert!(config.head.link.is_empty());
    }

    #[test]
    fn test_full_config_renders() {
        let config = HeadConfig::parse(FULL).unwrap();
        let mut builder = config.to_builder().unwrap();
        let html = builder.render();

        let expected_prefix = "<title>My Page</title>\n\
            <meta name=\"description\" content=\"About my page\">\n\
            <meta name=\"robots\" content=\"index, follow\">\n\
            <meta name=\"viewport\" content=\"width=device-width\">\n\
            <meta property=\"og:type\" content=\"website\">\n\
            <meta property=\"og:title\" content=\"My Page\">\n\
            <meta property=\"og:description\" content=\"About my page\">\n\
            <meta name=\"twitter:site\" content=\"@tola\">\n\
            <meta name=\"twitter:card\" content=\"summary\">\n\
            <meta name=\"twitter:title\" content=\"My Page\">\n\
            <meta name=\"twitter:description\" content=\"About my page\">\n\
            <link rel=\"canonical\" href=\"https://example.com/\">\n\
            <link rel=\"alternate\" href=\"https://example.com/de/\" hreflang=\"de\">\n\
            <script type=\"application/ld+json\">";
        assert!(html.starts_with(expected_prefix), "{html}");
        assert!(html.ends_with("</script>"));
    }

    #[test]
    fn test_custom_order_and_auto_og_off() {
        let config = HeadConfig::parse(
            r#"
[head]
title = "T"
auto_og = false
order = ["link", "title"]

[[head.link]]
rel = "icon"
href = "/favicon.ico"
"#,
        )
        .unwrap();
        let mut builder = config.to_builder().unwrap();
        assert_eq!(
            builder.render(),
            "<link rel=\"icon\" href=\"/favicon.ico\">\n<title>T</title>"
        );
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let err = HeadConfig::parse(
            r#"
[head]
order = ["title", "jsonld"]

[head.meta]
count = 3
viewport = { content = 1 }

[head.og]
image = ["a", "b"]

[[head.link]]
href = "/no-rel"
"#,
        )
        .unwrap_err();

        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics, got {err:?}");
        };
        let fields: Vec<_> = diag.errors().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "head.order[1]",
                "head.meta.count",
                "head.meta.viewport.content",
                "head.og.image",
                "head.link[0]",
            ]
        );
    }

    #[test]
    fn test_jsonld_dates_render_as_strings() {
        let config = HeadConfig::parse(
            r#"
[head]
auto_og = false

[[head.jsonld]]
"@type" = "Article"
datePublished = 2024-01-02
dateModified = 2024-01-03T10:20:30Z
wordCount = 1200
keywords = ["rust", "html"]
"#,
        )
        .unwrap();
        let html = config.to_builder().unwrap().render();

        assert!(html.contains(r#""datePublished": "2024-01-02""#), "{html}");
        assert!(html.contains(r#""dateModified": "2024-01-03T10:20:30Z""#), "{html}");
        assert!(html.contains(r#""wordCount": 1200"#));
        assert!(!html.contains("toml_private"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = HeadConfig::parse("[head\ntitle = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG);
        fs::write(&path, "[head]\ntitle = \"From file\"\n").unwrap();

        let config = HeadConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.head.title.as_deref(), Some("From file"));
    }

    #[test]
    fn test_from_path_missing() {
        let temp = TempDir::new().unwrap();
        let err = HeadConfig::from_path(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
