//! Ordered rule collection.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::OrderingConfig;
use super::path_rule::PathOrderingRule;
use super::rules::MatchAllOrderingRule;
use super::types::OrderingRule;
use crate::error::ConfigError;

/// The ordering rules consulted by the equivalency engine.
///
/// A member's collection is compared with strict ordering when any rule
/// applies to its path. Rules are kept in insertion order; that order is
/// what [`descriptions`](Self::descriptions) and
/// [`matching_rule`](Self::matching_rule) report, not a priority.
///
/// # Examples
///
/// ```
/// use u_equivalency::ordering::{OrderingRules, PredicateOrderingRule};
///
/// let rules = OrderingRules::new()
///     .with_strict_path("Orders")
///     .with_rule(PredicateOrderingRule::new("path ends with History", |p| {
///         p.ends_with("History")
///     }));
///
/// assert!(rules.is_strict_for("[0].Orders"));
/// assert!(rules.is_strict_for("Customer.History"));
/// assert!(!rules.is_strict_for("Customer.Addresses"));
/// ```
#[derive(Debug, Default)]
pub struct OrderingRules {
    rules: Vec<Box<dyn OrderingRule>>,
}

impl OrderingRules {
    /// Creates an empty collection. Nothing is strict.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds a collection from a validated configuration.
    ///
    /// A match-all rule comes first when `strict_for_all` is set, followed
    /// by one [`PathOrderingRule`] per configured path.
    pub fn from_config(config: &OrderingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rules = Self::new();
        if config.strict_for_all {
            rules.push(MatchAllOrderingRule);
        }
        for path in &config.strict_paths {
            rules.push(PathOrderingRule::new(path.as_str()));
        }

        debug!(rule_count = rules.rule_count(), "built ordering rules");
        Ok(rules)
    }

    /// Adds a rule.
    pub fn with_rule<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.push(rule);
        self
    }

    /// Adds a [`PathOrderingRule`] for `path`.
    pub fn with_strict_path(self, path: impl Into<String>) -> Self {
        self.with_rule(PathOrderingRule::new(path))
    }

    /// Adds a rule in place.
    pub fn push<R: OrderingRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Returns the number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the description of every rule, in insertion order.
    pub fn descriptions(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.describe()).collect()
    }

    /// Returns the first rule, in insertion order, that applies to `path`.
    pub fn matching_rule(&self, path: &str) -> Option<&dyn OrderingRule> {
        self.rules
            .iter()
            .find(|r| r.applies_to(path))
            .map(|r| r.as_ref())
    }

    /// Returns `true` if the collection at `path` must be compared with
    /// strict ordering.
    pub fn is_strict_for(&self, path: &str) -> bool {
        match self.matching_rule(path) {
            Some(rule) => {
                trace!(path, rule = %rule.describe(), "strict ordering");
                true
            }
            None => false,
        }
    }

    /// Evaluates [`is_strict_for`](Self::is_strict_for) for each path.
    #[cfg(not(feature = "parallel"))]
    pub fn strict_flags(&self, paths: &[&str]) -> Vec<bool> {
        paths.iter().map(|p| self.is_strict_for(p)).collect()
    }

    /// Evaluates [`is_strict_for`](Self::is_strict_for) for each path in
    /// parallel. Output order matches `paths`.
    #[cfg(feature = "parallel")]
    pub fn strict_flags(&self, paths: &[&str]) -> Vec<bool> {
        paths.par_iter().map(|p| self.is_strict_for(p)).collect()
    }
}
