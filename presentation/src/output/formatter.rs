//! Output formatter trait

use draftsmith_domain::{OutputFormat, PipelineResult};

/// Trait for formatting a finished run
pub trait OutputFormatter {
    /// Draft, review and final essay as labelled sections
    fn format_full(&self, topic: &str, result: &PipelineResult) -> String;

    /// Only the final essay
    fn format_final(&self, result: &PipelineResult) -> String;

    /// Pretty-printed JSON
    fn format_json(&self, result: &PipelineResult) -> String;

    /// Dispatch on `format`
    fn render(&self, format: OutputFormat, topic: &str, result: &PipelineResult) -> String {
        match format {
            OutputFormat::Full => self.format_full(topic, result),
            OutputFormat::Final => self.format_final(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
