//! Console output formatter for pipeline results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use draftsmith_domain::PipelineResult;

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// All three artifacts, in pipeline order
    pub fn format_full(topic: &str, result: &PipelineResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Essay Pipeline Results"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), topic));

        output.push_str(&Self::section_header("Stage 1: Draft"));
        output.push_str(&format!("\n{}\n", result.draft));

        output.push_str(&Self::section_header("Stage 2: Review"));
        output.push_str(&format!("\n{}\n", result.review));

        output.push_str(&Self::section_header("Stage 3: Final Essay"));
        output.push_str(&format!("\n{}\n", result.final_text));

        output.push_str(&Self::footer());
        output
    }

    pub fn format_final(result: &PipelineResult) -> String {
        format!("{}\n", result.final_text)
    }

    pub fn format_json(result: &PipelineResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Closing status line naming the run directory
    pub fn saved_line(run_dir: &std::path::Path) -> String {
        format!(
            "{} Results saved to: {}",
            "Done.".green().bold(),
            run_dir.display()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, topic: &str, result: &PipelineResult) -> String {
        Self::format_full(topic, result)
    }

    fn format_final(&self, result: &PipelineResult) -> String {
        Self::format_final(result)
    }

    fn format_json(&self, result: &PipelineResult) -> String {
        Self::format_json(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftsmith_domain::OutputFormat;

    fn result() -> PipelineResult {
        PipelineResult::new("DRAFT_TEXT", "REVIEW_TEXT", "FINAL_TEXT")
    }

    #[test]
    fn test_full_contains_sections_in_order() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_full("Tides", &result());

        let draft = output.find("DRAFT_TEXT").unwrap();
        let review = output.find("REVIEW_TEXT").unwrap();
        let final_text = output.find("FINAL_TEXT").unwrap();
        assert!(draft < review && review < final_text);
        assert!(output.contains("Topic: Tides"));
    }

    #[test]
    fn test_final_only() {
        assert_eq!(ConsoleFormatter::format_final(&result()), "FINAL_TEXT\n");
    }

    #[test]
    fn test_json_uses_final_key() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&result())).unwrap();
        assert_eq!(value["draft"], "DRAFT_TEXT");
        assert_eq!(value["review"], "REVIEW_TEXT");
        assert_eq!(value["final"], "FINAL_TEXT");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let formatter = ConsoleFormatter;
        assert_eq!(
            formatter.render(OutputFormat::Final, "Tides", &result()),
            "FINAL_TEXT\n"
        );
        assert!(
            formatter
                .render(OutputFormat::Json, "Tides", &result())
                .contains("\"final\"")
        );
    }
}
