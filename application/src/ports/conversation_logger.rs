//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording every completion
//! request and reply of a run to a structured transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! conversation in a machine-readable format (JSONL).

use draftsmith_domain::{Model, Stage};
use serde_json::{Value, json};

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. Adapters add the timestamp when the event is written.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "stage_request", "stage_response").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A completion request is about to be sent for `stage`.
    pub fn stage_request(stage: Stage, model: &Model, messages: usize, bytes: usize) -> Self {
        Self::new(
            "stage_request",
            json!({
                "stage": stage.as_str(),
                "model": model.as_str(),
                "messages": messages,
                "bytes": bytes,
            }),
        )
    }

    /// `stage` produced `text`.
    pub fn stage_response(stage: Stage, model: &Model, text: &str) -> Self {
        Self::new(
            "stage_response",
            json!({
                "stage": stage.as_str(),
                "model": model.as_str(),
                "bytes": text.len(),
                "text": text,
            }),
        )
    }

    /// `stage` failed with `error`.
    pub fn stage_failed(stage: Stage, model: &Model, error: &str) -> Self {
        Self::new(
            "stage_failed",
            json!({
                "stage": stage.as_str(),
                "model": model.as_str(),
                "error": error,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `log` is synchronous and infallible; a failed write never affects the run.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
