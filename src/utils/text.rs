//! Plain-text helpers for head metadata.
//!
//! - `normalize()` - strip markup and collapse decoration/whitespace
//! - `truncate()` - code-point aware truncation with word boundaries
//! - `char_len()` - length in Unicode scalar values

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Default ellipsis appended by `truncate()`.
pub const ELLIPSIS: &str = "…";

/// Markup tags and comments. A `<` followed by whitespace is not a tag.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|$)|<[A-Za-z/!?][^>]*(?:>|$)").expect("valid tag regex")
});

/// Runs of two or more `*`, `-` or `=` (markdown rules, underlines).
static DECORATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*\-=]{2,}").expect("valid decoration regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Number of Unicode code points in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Normalize free text for `<title>` and description use.
///
/// ```ignore
/// assert_eq!(normalize("<b>Hello</b> ---   World"), "Hello World");
/// ```
pub fn normalize(text: &str) -> String {
    let text = TAG_RE.replace_all(text, "");
    let text = DECORATION_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Whether `c` ends a word for truncation purposes.
///
/// Whitespace plus the ASCII punctuation ranges
/// ` `..`/`, `:`..`@`, `[`..`` ` `` and `{`..`~`.
#[inline]
fn is_boundary(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, ' '..='/' | ':'..='@' | '['..='`' | '{'..='~')
}

/// Truncate `s` to at most `max_len` code points using the default ellipsis.
#[inline]
pub fn truncate(s: &str, max_len: usize) -> Cow<'_, str> {
    truncate_with(s, max_len, ELLIPSIS)
}

/// Truncate `s` to at most `max_len` code points, ellipsis included.
///
/// Prefers cutting right before a word boundary; falls back to a hard cut.
/// Returns the input unchanged when it already fits.
pub fn truncate_with<'a>(s: &'a str, max_len: usize, ellipsis: &str) -> Cow<'a, str> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        return Cow::Borrowed(s);
    }

    let budget = max_len.saturating_sub(char_len(ellipsis));
    if budget < 1 {
        return Cow::Owned(ellipsis.to_string());
    }

    // chars.len() > max_len >= budget, so chars[budget] exists.
    let cut = (1..=budget)
        .rev()
        .find(|&len| is_boundary(chars[len]))
        .unwrap_or(budget);

    let mut out: String = chars[..cut].iter().collect();
    out.push_str(ellipsis);
    Cow::Owned(out)
}
