//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod essay_roles;
pub mod run_pipeline;
