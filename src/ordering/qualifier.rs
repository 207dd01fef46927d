//! Index qualifier handling for member paths.
//!
//! An index qualifier is a bracketed integer segment such as `[3]`. Members
//! of a root-level collection item have paths starting with one, e.g.
//! `[0].Name`.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single leading `[<digits>].` qualifier.
const LEADING_QUALIFIER_PATTERN: &str = r"^\[\d+\]\.";

static LEADING_QUALIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LEADING_QUALIFIER_PATTERN).expect("valid regex"));

/// Returns `true` if `path` contains both `[` and `]`, anywhere.
pub fn contains_index_qualifiers(path: &str) -> bool {
    path.contains('[') && path.contains(']')
}

/// Byte length of the `[<digits>].` qualifier at the start of `path`, if any.
pub fn leading_index_qualifier_len(path: &str) -> Option<usize> {
    LEADING_QUALIFIER_RE.find(path).map(|m| m.end())
}

/// Removes at most one leading `[<digits>].` qualifier from `path`.
///
/// ```
/// use u_equivalency::ordering::strip_leading_index_qualifier;
///
/// assert_eq!(strip_leading_index_qualifier("[2].Name"), "Name");
/// assert_eq!(strip_leading_index_qualifier("[2].[3].Name"), "[3].Name");
/// assert_eq!(strip_leading_index_qualifier("Orders[2].Name"), "Orders[2].Name");
/// ```
pub fn strip_leading_index_qualifier(path: &str) -> &str {
    match leading_index_qualifier_len(path) {
        Some(len) => &path[len..],
        None => path,
    }
}
