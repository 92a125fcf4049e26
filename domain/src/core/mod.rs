//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: provider model identifier (e.g. `openai/gpt-4o-mini`)
//! - [`topic::Topic`]: a validated essay topic
//! - [`credential::ApiKey`]: bearer credential for the completion service
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod topic;
