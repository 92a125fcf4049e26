//! Domain layer for draftsmith
//!
//! This crate contains the core entities, value objects and prompt templates.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Essay Pipeline
//!
//! A run takes a [`Topic`] through three stages, each one a single chat
//! completion:
//!
//! - **Draft**: the writer model produces an essay from the topic
//! - **Review**: the reviewer model critiques the draft
//! - **Revise**: the writer model rewrites the draft using the review
//!
//! [`PipelineState`] enforces that order; [`PipelineResult`] holds the three
//! artifacts once the run completes.
//!
//! ## Personas
//!
//! [`RolePrompts`] holds the Writer and Reviewer system prompts and builds the
//! [`ChatMessage`] sequence for every stage.

pub mod config;
pub mod core;
pub mod pipeline;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{credential::ApiKey, error::DomainError, model::Model, topic::Topic};
pub use pipeline::{
    entities::{PipelineState, Stage},
    role_models::RoleModels,
    value_objects::PipelineResult,
};
pub use prompt::RolePrompts;
pub use session::entities::{ChatMessage, Role};
