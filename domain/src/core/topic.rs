//! Topic value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// An essay topic (Value Object)
///
/// Free text supplied by the caller. Surrounding whitespace is removed and a
/// blank topic is rejected before any stage runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Try to create a new topic, rejecting blank input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            Err(DomainError::EmptyTopic)
        } else {
            Ok(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the topic text
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let topic = Topic::try_new("Climate change").unwrap();
        assert_eq!(topic.content(), "Climate change");
    }

    #[test]
    fn test_topic_trimmed() {
        let topic: Topic = "  Ocean plastic pollution \n".parse().unwrap();
        assert_eq!(topic.content(), "Ocean plastic pollution");
    }

    #[test]
    fn test_blank_topic_rejected() {
        assert_eq!(Topic::try_new(""), Err(DomainError::EmptyTopic));
        assert_eq!(Topic::try_new(" \t "), Err(DomainError::EmptyTopic));
    }
}
