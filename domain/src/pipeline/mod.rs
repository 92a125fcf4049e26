//! Essay pipeline domain
//!
//! The pipeline runs three dependent stages against the completion service:
//!
//! ```text
//! topic ──▶ [Draft] ──draft──▶ [Review] ──draft, review──▶ [Revise] ──▶ final
//!            writer             reviewer                     writer
//! ```
//!
//! - [`entities::Stage`]: one of the three steps
//! - [`entities::PipelineState`]: linear state machine threading outputs forward
//! - [`role_models::RoleModels`]: which model plays which role
//! - [`value_objects::PipelineResult`]: the three artifacts of a completed run

pub mod entities;
pub mod role_models;
pub mod value_objects;
