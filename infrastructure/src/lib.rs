//! Infrastructure layer for draftsmith
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod openrouter;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileModelsConfig, FileOpenRouterConfig,
    FileOutputConfig, FilePromptsConfig, ResolvedConfig,
};
pub use logging::JsonlConversationLogger;
pub use openrouter::OpenRouterGateway;
pub use storage::{FsRunStore, sanitize_topic};
