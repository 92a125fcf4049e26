//! Pipeline value objects - immutable result types.

use serde::{Deserialize, Serialize};

/// The three artifacts of a completed pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Stage 1: the writer's first draft
    pub draft: String,
    /// Stage 2: the reviewer's structured feedback
    pub review: String,
    /// Stage 3: the writer's revised essay
    #[serde(rename = "final")]
    pub final_text: String,
}

impl PipelineResult {
    pub fn new(
        draft: impl Into<String>,
        review: impl Into<String>,
        final_text: impl Into<String>,
    ) -> Self {
        Self {
            draft: draft.into(),
            review: review.into(),
            final_text: final_text.into(),
        }
    }
}
