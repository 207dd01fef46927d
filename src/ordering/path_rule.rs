//! Path-based ordering rule.

use std::fmt;

use super::qualifier::{
    contains_index_qualifiers, leading_index_qualifier_len, strip_leading_index_qualifier,
};
use super::types::OrderingRule;

/// Enforces strict ordering for the collection at one configured member path.
///
/// The configured path is compared case-insensitively against the path of
/// the member being inspected. When the configured path has no index
/// qualifiers, a single leading `[<n>].` on the candidate is ignored, so
/// `Name` also covers `[0].Name`, `[1].Name`, ... for members of root-level
/// collection items. A configured path that carries index qualifiers only
/// matches candidates that carry the same ones.
///
/// # Examples
///
/// ```
/// use u_equivalency::ordering::{OrderingRule, PathOrderingRule};
///
/// let rule = PathOrderingRule::new("Orders.Name");
/// assert!(rule.applies_to("ORDERS.NAME"));
/// assert!(rule.applies_to("[3].Orders.Name"));
/// assert!(!rule.applies_to("Orders.Total"));
///
/// let indexed = PathOrderingRule::new("[0].Name");
/// assert!(indexed.applies_to("[0].Name"));
/// assert!(!indexed.applies_to("Name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathOrderingRule {
    path: String,
}

impl PathOrderingRule {
    /// Creates a rule for `path`. Any string is accepted, including an empty one.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The configured path, verbatim.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn remove_initial_index_qualifier<'a>(&self, candidate: &'a str) -> &'a str {
        if leading_index_qualifier_len(&self.path).is_some() {
            candidate
        } else {
            strip_leading_index_qualifier(candidate)
        }
    }
}

impl OrderingRule for PathOrderingRule {
    fn applies_to(&self, path: &str) -> bool {
        let candidate = if contains_index_qualifiers(&self.path) {
            path
        } else {
            self.remove_initial_index_qualifier(path)
        };

        eq_ignore_case(candidate, &self.path)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathOrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Be strict about the order of collection items when path is {}",
            self.path
        )
    }
}

/// Full-string equality under Unicode lowercase mapping.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
