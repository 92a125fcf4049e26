//! LLM Gateway port
//!
//! Defines the interface for communicating with the chat-completion provider.

use async_trait::async_trait;
use draftsmith_domain::{ChatMessage, Model};
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Http { status: u16, body: String },

    #[error("Completion returned no content in choices[0].message.content")]
    EmptyResponse,
}

impl GatewayError {
    /// HTTP status code, when the provider answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Gateway for LLM communication
///
/// One call is one blocking (from the caller's perspective) request/response
/// round trip: no retries and no streaming. Implementations own the
/// credential and endpoint; callers only choose the model and messages.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `messages` to `model` and return the reply text, trimmed.
    ///
    /// `messages` must not be empty.
    async fn complete(&self, model: &Model, messages: &[ChatMessage])
    -> Result<String, GatewayError>;
}
