//! Collection ordering rules.
//!
//! When the equivalency engine compares two collections it has to decide
//! whether item order matters. By default it does not; ordering rules opt
//! individual members (or the whole graph) into strict ordering:
//!
//! - **Path rules**: [`PathOrderingRule`] matches one member path, ignoring
//!   a leading `[<n>].` qualifier unless the path is written with index
//!   qualifiers itself.
//! - **Match-all**: [`MatchAllOrderingRule`] makes every collection strict.
//! - **Predicates**: [`PredicateOrderingRule`] wraps arbitrary path logic.
//!
//! [`OrderingRules`] holds the rules for one comparison and answers whether
//! any of them applies to a member path.

mod config;
mod engine;
mod path_rule;
mod qualifier;
mod rules;
mod types;

pub use config::OrderingConfig;
pub use engine::OrderingRules;
pub use path_rule::PathOrderingRule;
pub use qualifier::{
    contains_index_qualifiers, leading_index_qualifier_len, strip_leading_index_qualifier,
};
pub use rules::{MatchAllOrderingRule, PredicateOrderingRule};
pub use types::OrderingRule;
