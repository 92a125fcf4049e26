//! Structured conversation transcripts.
//!
//! Provides [`JsonlConversationLogger`], the JSONL adapter for the
//! [`ConversationLogger`](draftsmith_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
