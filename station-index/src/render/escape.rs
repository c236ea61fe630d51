//! HTML escaping helpers.
//!
//! Body text only has `&` and `<` escaped; `>` and quotes are written as
//! they are. Attribute values additionally get `"` escaped.

use std::borrow::Cow;

/// Escape `&` and `<` in body text.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('&', "&amp;").replace('<', "&lt;"))
}

/// Escape `"` in text that is already body-escaped, for use inside a
/// double-quoted attribute.
pub fn escape_quotes(text: &str) -> Cow<'_, str> {
    if !text.contains('"') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('"', "&quot;"))
}
