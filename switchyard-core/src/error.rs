//! Error types for switchyard.
//!
//! Evaluation never fails: a subject nothing matches resolves through the
//! default action. The only failure is rejecting a table that could not
//! produce a result at all.

use thiserror::Error;

/// Errors raised while constructing a dispatch table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The table has no rules and no default action.
    #[error("dispatch table has no rules and no default action")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        assert_eq!(
            ConfigurationError::Empty.to_string(),
            "dispatch table has no rules and no default action"
        );
    }

    #[test]
    fn test_configuration_error_is_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(ConfigurationError::Empty);
        assert!(err.source().is_none());
    }
}
