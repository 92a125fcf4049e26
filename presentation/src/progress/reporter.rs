//! Progress reporting for pipeline execution

use colored::Colorize;
use draftsmith_application::ports::progress::ProgressNotifier;
use draftsmith_domain::{Model, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Status line shown while `stage` is running
pub fn stage_message(stage: Stage) -> &'static str {
    match stage {
        Stage::Draft => "Writing draft...",
        Stage::Review => "Getting review...",
        Stage::Revise => "Revising essay...",
    }
}

fn stage_prefix(stage: Stage) -> String {
    format!("[{}/{}]", stage.number(), Stage::ALL.len())
}

/// Reports progress with a spinner per stage
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(stage_prefix(stage));
        pb.set_message(format!("{} {}", stage_message(stage), model.to_string().dimmed()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock() {
            *current = Some(pb);
        }
    }

    fn on_stage_complete(&self, stage: Stage, model: &Model, success: bool) {
        let Some(pb) = self.current.lock().ok().and_then(|mut c| c.take()) else {
            return;
        };
        let status = if success {
            format!("{} {} ({})", "v".green(), stage.display_name(), model)
        } else {
            format!("{} {} failed ({})", "x".red(), stage.display_name(), model)
        };
        pb.finish_with_message(status);
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout only carries the essay.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, _model: &Model) {
        eprintln!("{}", stage_message(stage));
    }

    fn on_stage_complete(&self, stage: Stage, model: &Model, success: bool) {
        if !success {
            eprintln!("  {} {} failed ({})", "x".red(), stage.display_name(), model);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_messages() {
        assert_eq!(stage_message(Stage::Draft), "Writing draft...");
        assert_eq!(stage_message(Stage::Review), "Getting review...");
        assert_eq!(stage_message(Stage::Revise), "Revising essay...");
    }

    #[test]
    fn test_stage_prefix() {
        assert_eq!(stage_prefix(Stage::Draft), "[1/3]");
        assert_eq!(stage_prefix(Stage::Revise), "[3/3]");
    }

    #[test]
    fn test_reporter_clears_finished_stage() {
        let reporter = ProgressReporter::new();
        let model = Model::try_new("openai/gpt-4o-mini").unwrap();

        reporter.on_stage_start(Stage::Draft, &model);
        assert!(reporter.current.lock().unwrap().is_some());

        reporter.on_stage_complete(Stage::Draft, &model, true);
        assert!(reporter.current.lock().unwrap().is_none());
    }
}
