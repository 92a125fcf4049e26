//! Run persistence port
//!
//! Receives the artifacts of a completed run. The pipeline itself knows
//! nothing about paths or naming; adapters decide where the files land.

use draftsmith_domain::{PipelineResult, Topic};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving a run
#[derive(Error, Debug)]
pub enum RunStoreError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Storage for completed pipeline runs
pub trait RunStore: Send + Sync {
    /// Persist `result` and return the location it was written to
    fn save(&self, topic: &Topic, result: &PipelineResult) -> Result<PathBuf, RunStoreError>;
}
