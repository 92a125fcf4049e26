//! Pipeline domain entities

use super::value_objects::PipelineResult;
use serde::{Deserialize, Serialize};

/// Stage of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Writer produces a first draft from the topic
    Draft,
    /// Reviewer critiques the draft
    Review,
    /// Writer revises the draft using the review
    Revise,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 3] = [Stage::Draft, Stage::Review, Stage::Revise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Draft => "draft",
            Stage::Review => "review",
            Stage::Revise => "revise",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Draft => "Draft",
            Stage::Review => "Review",
            Stage::Revise => "Revision",
        }
    }

    /// One-based position in the pipeline
    pub fn number(&self) -> usize {
        match self {
            Stage::Draft => 1,
            Stage::Review => 2,
            Stage::Revise => 3,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress of a single pipeline run.
///
/// Each variant carries exactly the texts produced so far, so a stage can
/// only be reached once its predecessors have succeeded. Failure is not a
/// state here: the orchestrator abandons the state value and returns a
/// stage-tagged error instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PipelineState {
    /// Nothing produced yet
    #[default]
    Start,
    /// The draft exists
    Drafted { draft: String },
    /// The draft and its review exist
    Reviewed { draft: String, review: String },
    /// All three artifacts exist
    Completed(PipelineResult),
}

impl PipelineState {
    /// Short lowercase label, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            PipelineState::Start => "start",
            PipelineState::Drafted { .. } => "drafted",
            PipelineState::Reviewed { .. } => "reviewed",
            PipelineState::Completed(_) => "completed",
        }
    }

    /// The stage that must run next, or `None` once the run is complete
    pub fn next_stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Start => Some(Stage::Draft),
            PipelineState::Drafted { .. } => Some(Stage::Review),
            PipelineState::Reviewed { .. } => Some(Stage::Revise),
            PipelineState::Completed(_) => None,
        }
    }

    /// Record the output of the pending stage and move to the following state.
    ///
    /// `Completed` is terminal: advancing it returns it unchanged.
    pub fn advance(self, output: String) -> Self {
        match self {
            PipelineState::Start => PipelineState::Drafted { draft: output },
            PipelineState::Drafted { draft } => PipelineState::Reviewed {
                draft,
                review: output,
            },
            PipelineState::Reviewed { draft, review } => {
                PipelineState::Completed(PipelineResult::new(draft, review, output))
            }
            done @ PipelineState::Completed(_) => done,
        }
    }
}
