//! Tag construction.
//!
//! Tags are rendered void-style (`<meta name="x" content="y">`), with
//! attributes in insertion order and values attribute-escaped.

use indexmap::IndexMap;

use crate::utils::html::{escape_attr, escape_text, guard_backtick};

/// Insertion-ordered attribute map. `None` values are skipped when rendering.
pub type Attrs = IndexMap<String, Option<String>>;

/// Value accepted by `meta()` and `link()`.
///
/// A scalar becomes `content` (meta) or `href` (link); a map is merged over
/// the tag's base attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    Attrs(Attrs),
}

impl TagValue {
    /// Empty strings and empty maps register nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Attrs(attrs) => attrs.is_empty(),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for TagValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Attrs> for TagValue {
    fn from(attrs: Attrs) -> Self {
        Self::Attrs(attrs)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for TagValue {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::Attrs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for TagValue {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::Attrs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

/// Absent values behave like empty ones.
impl<T: Into<TagValue>> From<Option<T>> for TagValue {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(|| Self::Text(String::new()), Into::into)
    }
}

/// Build an opening tag from `name` and ordered attributes.
///
/// # Example
/// ```ignore
/// let tag = create_tag("link", [("rel", Some("icon")), ("href", Some("/a.png"))]);
/// assert_eq!(tag, r#"<link rel="icon" href="/a.png">"#);
/// ```
pub fn create_tag<I, K, V>(name: &str, attrs: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = format!("<{name}");
    for (key, value) in attrs {
        let Some(value) = value else {
            continue;
        };
        let guarded = guard_backtick(value.as_ref());
        out.push(' ');
        out.push_str(key.as_ref());
        out.push_str("=\"");
        out.push_str(&escape_attr(&guarded));
        out.push('"');
    }
    out.push('>');
    out
}

/// `<title>` element with escaped text content.
pub fn title_tag(text: &str) -> String {
    format!("<title>{}</title>", escape_text(text))
}

/// `<script type="application/ld+json">` block around a serialized payload.
pub fn jsonld_tag(json: &str) -> String {
    format!("<script type=\"application/ld+json\">{json}</script>")
}
