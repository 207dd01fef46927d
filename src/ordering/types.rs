//! Core trait for ordering rules.

use std::fmt::Debug;

/// Decides whether the collection at a member path must be compared with
/// strict item ordering.
///
/// The equivalency engine consults a list of these rules for every
/// collection it encounters. A member path is the dotted/bracketed
/// location of the member inside the object graph, e.g. `Orders[2].Items`
/// or `[0].Name` for a member of a root-level collection item.
///
/// # Examples
///
/// ```ignore
/// // Strict ordering for every member whose name ends in "History"
/// #[derive(Debug)]
/// struct HistoryRule;
///
/// impl OrderingRule for HistoryRule {
///     fn applies_to(&self, path: &str) -> bool {
///         path.ends_with("History")
///     }
///     fn describe(&self) -> String {
///         "Be strict about the order of history collections".into()
///     }
/// }
/// ```
pub trait OrderingRule: Send + Sync + Debug {
    /// Returns `true` if ordering is relevant for the member at `path`.
    fn applies_to(&self, path: &str) -> bool;

    /// Human-readable description used in assertion failure messages.
    fn describe(&self) -> String;
}
