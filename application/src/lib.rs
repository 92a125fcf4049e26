//! Application layer for draftsmith
//!
//! This crate contains the pipeline use case and the port definitions the
//! infrastructure layer implements. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    run_store::{RunStore, RunStoreError},
};
pub use use_cases::essay_roles::EssayRoles;
pub use use_cases::run_pipeline::{FailedCompletion, RunPipelineInput, RunPipelineUseCase};
