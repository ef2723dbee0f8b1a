//! HTML escaping for `<head>` tags.
//!
//! - `escape_text()` - element text content (`<title>`), quotes untouched
//! - `escape_attr()` - quoted attribute values, quotes escaped
//! - `guard_backtick()` - trailing-space guard for backtick-only values

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters escaped in text content.
const TEXT_CHARS: [char; 3] = ['<', '>', '&'];

/// Characters escaped in attribute values.
const ATTR_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Characters whose presence makes a backtick harmless in an attribute value.
const BACKTICK_SAFE: [char; 5] = [' ', '<', '>', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape text content of an element.
///
/// Quote characters are left alone since text content has no attribute
/// boundary to break out of.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_text("Tom & \"Jerry\""), "Tom &amp; \"Jerry\"");
/// ```
#[inline]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_CHARS)
}

/// Escape a double-quoted attribute value.
///
/// Both quote styles are escaped, so the value is safe in either quoting.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_CHARS)
}

/// Append a space to values that contain a backtick but none of
/// space, `<`, `>`, `"` or `'`.
///
/// Some downstream consumers treat a backtick as an attribute delimiter,
/// letting a bare backtick value close an unquoted context.
#[inline]
pub fn guard_backtick(s: &str) -> Cow<'_, str> {
    if s.contains('`') && !s.contains(BACKTICK_SAFE) {
        Cow::Owned(format!("{s} "))
    } else {
        Cow::Borrowed(s)
    }
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c).filter(|_| chars.contains(&c)) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Tests
// =============================================================================
