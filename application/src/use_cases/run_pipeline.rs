//! Run Pipeline use case
//!
//! Orchestrates the draft → review → revise flow for one topic.

use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::essay_roles::EssayRoles;
use draftsmith_domain::{PipelineResult, PipelineState, RoleModels, RolePrompts, Stage, Topic};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A completion call failed; the whole run is abandoned.
///
/// Carries the stage that failed and the gateway error exactly as it was
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} stage failed: {source}")]
pub struct FailedCompletion {
    pub stage: Stage,
    #[source]
    pub source: GatewayError,
}

impl FailedCompletion {
    pub fn new(stage: Stage, source: GatewayError) -> Self {
        Self { stage, source }
    }

    /// Descriptive message without the stage prefix
    pub fn message(&self) -> String {
        self.source.to_string()
    }
}

/// Input for the RunPipeline use case
#[derive(Debug, Clone)]
pub struct RunPipelineInput {
    /// The essay topic
    pub topic: Topic,
    /// Model configuration (`writer` drafts and revises, `reviewer` reviews)
    pub models: RoleModels,
}

impl RunPipelineInput {
    pub fn new(topic: Topic, models: RoleModels) -> Self {
        Self { topic, models }
    }
}

/// Use case for running the essay pipeline
pub struct RunPipelineUseCase<G: LlmGateway + 'static> {
    roles: EssayRoles<G>,
}

impl<G: LlmGateway + 'static> RunPipelineUseCase<G> {
    pub fn new(gateway: Arc<G>, prompts: RolePrompts) -> Self {
        Self {
            roles: EssayRoles::new(gateway, prompts),
        }
    }

    /// Record every request and reply of the run to `logger`
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.roles = self.roles.with_conversation_logger(logger);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunPipelineInput) -> Result<PipelineResult, FailedCompletion> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Stages run strictly in order; the first failure aborts the run and no
    /// later stage is attempted.
    pub async fn execute_with_progress(
        &self,
        input: RunPipelineInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PipelineResult, FailedCompletion> {
        info!(
            topic = %input.topic,
            writer = %input.models.writer,
            reviewer = %input.models.reviewer,
            "Starting pipeline"
        );

        let mut state = PipelineState::default();
        loop {
            state = match state {
                PipelineState::Completed(result) => {
                    info!("Pipeline completed");
                    return Ok(result);
                }
                pending => self.run_stage(pending, &input, progress).await?,
            };
        }
    }

    /// Run the stage pending in `state` and return the following state
    async fn run_stage(
        &self,
        state: PipelineState,
        input: &RunPipelineInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PipelineState, FailedCompletion> {
        let Some(stage) = state.next_stage() else {
            return Ok(state);
        };
        debug!(state = state.name(), %stage, "Advancing pipeline");
        let model = input.models.for_stage(stage);

        info!("Stage {}: {}", stage.number(), stage.display_name());
        progress.on_stage_start(stage, model);

        let output = match &state {
            PipelineState::Start => self.roles.draft(model, input.topic.content()).await,
            PipelineState::Drafted { draft } => self.roles.review(model, draft).await,
            PipelineState::Reviewed { draft, review } => {
                self.roles.revise(model, draft, review).await
            }
            PipelineState::Completed(_) => return Ok(state),
        };

        match output {
            Ok(text) => {
                progress.on_stage_complete(stage, model, true);
                Ok(state.advance(text))
            }
            Err(e) => {
                warn!("Stage {} failed with model {}: {}", stage, model, e);
                progress.on_stage_complete(stage, model, false);
                Err(FailedCompletion::new(stage, e))
            }
        }
    }
}
