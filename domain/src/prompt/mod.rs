//! Prompt domain
//!
//! Persona prompts and the message sequences built from them for each stage
//! of the essay pipeline.

mod template;

pub use template::RolePrompts;
