//! OpenRouter adapter
//!
//! Implements the [`LlmGateway`](draftsmith_application::LlmGateway) port
//! against the OpenAI-compatible `/chat/completions` endpoint.

pub mod gateway;
pub mod protocol;

pub use gateway::OpenRouterGateway;
