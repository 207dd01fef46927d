//! Non-path ordering rules.

use std::fmt;

use super::types::OrderingRule;

/// Enforces strict ordering for every collection in the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchAllOrderingRule;

impl OrderingRule for MatchAllOrderingRule {
    fn applies_to(&self, _path: &str) -> bool {
        true
    }

    fn describe(&self) -> String {
        "Be strict about the order of collection items".into()
    }
}

/// Enforces strict ordering wherever a caller-supplied predicate on the
/// member path holds.
///
/// # Examples
///
/// ```
/// use u_equivalency::ordering::{OrderingRule, PredicateOrderingRule};
///
/// let rule = PredicateOrderingRule::new("path ends with History", |path| {
///     path.ends_with("History")
/// });
/// assert!(rule.applies_to("Customer.OrderHistory"));
/// assert!(!rule.applies_to("Customer.Orders"));
/// ```
pub struct PredicateOrderingRule {
    description: String,
    predicate: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl PredicateOrderingRule {
    /// Creates a rule from a predicate and a text describing what it selects.
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl fmt::Debug for PredicateOrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateOrderingRule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl OrderingRule for PredicateOrderingRule {
    fn applies_to(&self, path: &str) -> bool {
        (self.predicate)(path)
    }

    fn describe(&self) -> String {
        format!(
            "Be strict about the order of collection items when {}",
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all() {
        let rule = MatchAllOrderingRule;
        assert!(rule.applies_to(""));
        assert!(rule.applies_to("[0].Name"));
        assert!(rule.applies_to("Orders[2].Items.Name"));
        assert_eq!(
            rule.describe(),
            "Be strict about the order of collection items"
        );
    }

    #[test]
    fn test_predicate() {
        let rule = PredicateOrderingRule::new("path starts with Orders", |p| {
            p.starts_with("Orders")
        });
        assert!(rule.applies_to("Orders[1].Items"));
        assert!(!rule.applies_to("Customers"));
        assert_eq!(
            rule.describe(),
            "Be strict about the order of collection items when path starts with Orders"
        );
    }

    #[test]
    fn test_predicate_captures_state() {
        let wanted = vec!["A".to_string(), "B".to_string()];
        let rule = PredicateOrderingRule::new("path is A or B", move |p| {
            wanted.iter().any(|w| w == p)
        });
        assert!(rule.applies_to("B"));
        assert!(!rule.applies_to("C"));
    }

    #[test]
    fn test_predicate_debug_hides_closure() {
        let rule = PredicateOrderingRule::new("always", |_| true);
        let dbg = format!("{rule:?}");
        assert!(dbg.contains("PredicateOrderingRule"));
        assert!(dbg.contains("always"));
    }
}
