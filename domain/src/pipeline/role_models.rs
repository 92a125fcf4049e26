//! Role-based model configuration.
//!
//! [`RoleModels`] records which model plays each persona. It is a static value
//! object: once created, the models do not change for the rest of the run.

use super::entities::Stage;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Model assignment per persona.
///
/// - **Writer**: drafts the essay and later revises it
/// - **Reviewer**: critiques the draft
///
/// # Example
///
/// ```
/// use draftsmith_domain::{Model, RoleModels, Stage};
///
/// let models = RoleModels::new(
///     Model::try_new("openai/gpt-4o-mini").unwrap(),
///     Model::try_new("anthropic/claude-3-haiku").unwrap(),
/// );
///
/// assert_eq!(models.for_stage(Stage::Revise).as_str(), "openai/gpt-4o-mini");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleModels {
    /// Model for the draft and revise stages.
    pub writer: Model,
    /// Model for the review stage.
    pub reviewer: Model,
}

impl RoleModels {
    pub fn new(writer: Model, reviewer: Model) -> Self {
        Self { writer, reviewer }
    }

    /// The model that runs `stage`
    pub fn for_stage(&self, stage: Stage) -> &Model {
        match stage {
            Stage::Draft | Stage::Revise => &self.writer,
            Stage::Review => &self.reviewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &str) -> Model {
        Model::try_new(id).unwrap()
    }

    #[test]
    fn test_for_stage() {
        let models = RoleModels::new(model("w/writer"), model("r/reviewer"));
        assert_eq!(models.for_stage(Stage::Draft), &model("w/writer"));
        assert_eq!(models.for_stage(Stage::Review), &model("r/reviewer"));
        assert_eq!(models.for_stage(Stage::Revise), &model("w/writer"));
    }
}
