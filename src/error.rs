//! Error types.

use thiserror::Error;

/// Rejected ordering configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("strict path at index {index} is empty")]
    EmptyPath { index: usize },

    #[error("strict path has unbalanced index brackets: {path}")]
    UnbalancedBrackets { path: String },
}
