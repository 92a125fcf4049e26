//! Progress notification port
//!
//! Defines the interface for reporting progress during a pipeline run.

use draftsmith_domain::{Model, Stage};

/// Callback for progress updates during a pipeline run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called right before a stage's completion request is sent
    fn on_stage_start(&self, stage: Stage, model: &Model);

    /// Called when a stage finishes, successfully or not
    fn on_stage_complete(&self, stage: Stage, model: &Model, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _model: &Model) {}
    fn on_stage_complete(&self, _stage: Stage, _model: &Model, _success: bool) {}
}
