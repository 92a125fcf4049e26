//! Credential value object

use super::error::DomainError;

/// Bearer credential for the completion service
///
/// The secret is never printed: both `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a secret, trimming whitespace and rejecting blank values
    pub fn try_new(secret: impl Into<String>) -> Result<Self, DomainError> {
        let secret = secret.into();
        let trimmed = secret.trim();
        if trimmed.is_empty() {
            Err(DomainError::EmptyCredential)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Expose the raw secret for building the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}
