//! Interactive topic input

mod topic;

pub use topic::{TopicPrompt, usage};
