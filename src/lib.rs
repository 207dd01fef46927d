//! Collection ordering rules for object-graph equivalency assertions.
//!
//! An equivalency assertion walks two object graphs member by member. For
//! every collection member it needs to know whether the items must appear
//! in the same order. This crate provides the rules that answer that
//! question, keyed on the member path (`Orders[2].Items`, `[0].Name`, ...):
//!
//! - **[`ordering::OrderingRule`]**: the rule contract, `applies_to` plus a
//!   description for failure messages.
//! - **Rule variants**: path-based, match-all and predicate-based rules.
//! - **[`ordering::OrderingRules`]**: the ordered rule list consulted per
//!   member, buildable from an [`ordering::OrderingConfig`].
//!
//! # Architecture
//!
//! Graph traversal, member selection and failure reporting belong to the
//! consuming assertion engine. This crate holds no state beyond the
//! configured rules, which are immutable and `Send + Sync`.

pub mod error;
pub mod ordering;

pub use error::ConfigError;
