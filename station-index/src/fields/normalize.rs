//! Kilometer-marker spacing.

use std::sync::LazyLock;

use regex::Regex;

/// Non-breaking space placed before the two-digit group.
pub const NBSP: char = '\u{00A0}';

/// Narrow no-break space placed between the two- and three-digit groups.
pub const NARROW_NBSP: char = '\u{202F}';

static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([0-9]{2}) ([0-9]{3})").unwrap());

/// Tie kilometer markers like `"km 12 345"` together so they never wrap.
///
/// Every occurrence of a space, two digits, a space and three digits has its
/// first space replaced by [`NBSP`] and its second by [`NARROW_NBSP`]. Only
/// ASCII digits match. Applying the function twice gives the same result as
/// applying it once, since the substituted spaces are no longer plain spaces.
///
/// # Examples
///
/// ```
/// use station_index::fields::normalize_spaces;
///
/// assert_eq!(normalize_spaces("km 12 345"), "km\u{a0}12\u{202f}345");
/// assert_eq!(normalize_spaces("12 345"), "12 345");
/// ```
pub fn normalize_spaces(value: &str) -> String {
    MARKER_PATTERN
        .replace_all(value, format!("{NBSP}${{1}}{NARROW_NBSP}${{2}}").as_str())
        .into_owned()
}
