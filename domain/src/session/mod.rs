//! Chat message domain.
//!
//! - [`entities::ChatMessage`]: a single message sent to the completion service
//! - [`entities::Role`]: who authored a message

pub mod entities;
