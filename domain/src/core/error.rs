//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All variants are precondition failures: they are raised while validating
/// caller input, before any stage runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Model identifier cannot be empty")]
    EmptyModel,

    #[error("API key cannot be empty")]
    EmptyCredential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyTopic.to_string(), "Topic cannot be empty");
        assert_eq!(
            DomainError::EmptyModel.to_string(),
            "Model identifier cannot be empty"
        );
        assert_eq!(
            DomainError::EmptyCredential.to_string(),
            "API key cannot be empty"
        );
    }
}
