//! Declarative ordering configuration.

use crate::error::ConfigError;

/// Configuration from which an [`OrderingRules`](super::OrderingRules)
/// collection is built.
///
/// # Examples
///
/// ```
/// use u_equivalency::ordering::{OrderingConfig, OrderingRules};
///
/// let config = OrderingConfig::default()
///     .with_strict_path("Orders")
///     .with_strict_path("Customers[0].Addresses");
/// assert!(config.validate().is_ok());
///
/// let rules = OrderingRules::from_config(&config).unwrap();
/// assert_eq!(rules.rule_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrderingConfig {
    /// Compare every collection with strict ordering.
    pub strict_for_all: bool,

    /// Member paths whose collections are compared with strict ordering.
    pub strict_paths: Vec<String>,
}

impl OrderingConfig {
    pub fn with_strict_for_all(mut self, strict: bool) -> Self {
        self.strict_for_all = strict;
        self
    }

    pub fn with_strict_path(mut self, path: impl Into<String>) -> Self {
        self.strict_paths.push(path.into());
        self
    }

    /// Validates the configuration.
    ///
    /// Rejects blank paths and paths whose index brackets are unbalanced
    /// or nested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, path) in self.strict_paths.iter().enumerate() {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyPath { index });
            }
            if !brackets_balanced(path) {
                return Err(ConfigError::UnbalancedBrackets { path: path.clone() });
            }
        }
        Ok(())
    }
}

fn brackets_balanced(path: &str) -> bool {
    let mut open = false;
    for c in path.chars() {
        match c {
            '[' if open => return false,
            '[' => open = true,
            ']' if !open => return false,
            ']' => open = false,
            _ => {}
        }
    }
    !open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrderingConfig::default();
        assert!(!config.strict_for_all);
        assert!(config.strict_paths.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = OrderingConfig::default()
            .with_strict_for_all(true)
            .with_strict_path("A")
            .with_strict_path("B[1].C");
        assert!(config.strict_for_all);
        assert_eq!(config.strict_paths, vec!["A", "B[1].C"]);
    }

    #[test]
    fn test_validate_empty_path() {
        let config = OrderingConfig::default()
            .with_strict_path("Orders")
            .with_strict_path("   ");
        assert_eq!(config.validate(), Err(ConfigError::EmptyPath { index: 1 }));
    }

    #[test]
    fn test_validate_unbalanced() {
        for path in ["Orders[0.Name", "Orders]0[.Name", "Orders[[0]].Name", "Orders]"] {
            let config = OrderingConfig::default().with_strict_path(path);
            assert_eq!(
                config.validate(),
                Err(ConfigError::UnbalancedBrackets { path: path.into() }),
                "{path}"
            );
        }
    }

    #[test]
    fn test_validate_indexed_ok() {
        let config = OrderingConfig::default()
            .with_strict_path("[0].Name")
            .with_strict_path("Orders[1].Items[2].Name");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::UnbalancedBrackets {
            path: "A[".into(),
        };
        assert_eq!(
            err.to_string(),
            "strict path has unbalanced index brackets: A["
        );
        assert_eq!(
            ConfigError::EmptyPath { index: 3 }.to_string(),
            "strict path at index 3 is empty"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let config: OrderingConfig =
            serde_json::from_str(r#"{"strict_paths":["Orders"]}"#).unwrap();
        assert!(!config.strict_for_all);
        assert_eq!(config.strict_paths, vec!["Orders"]);
    }
}
