//! Persona prompts for the essay pipeline

use crate::session::entities::ChatMessage;
use serde::{Deserialize, Serialize};

const WRITER_SYSTEM: &str = "You are a clear, thoughtful essay writer. \
Write in well-structured paragraphs. \
Use the language requested by the user (or English if not specified).";

const REVIEWER_SYSTEM: &str = r#"You are an expert essay reviewer. For the given essay, provide structured feedback in plain text with clear sections:
1. Strengths — what works well.
2. Areas to improve — what could be better (structure, clarity, arguments, evidence).
3. Specific suggestions — concrete edits or rewrites the author could apply.

Be constructive and specific. Write in the same language as the essay."#;

/// System prompts for the Writer and Reviewer personas.
///
/// Built once at startup (defaults, optionally overridden from configuration)
/// and read-only afterwards. Each builder returns a fresh two-message
/// sequence: the persona's system prompt followed by the task as a user
/// message. Input text is embedded in full; nothing is truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePrompts {
    writer_system: String,
    reviewer_system: String,
}

impl Default for RolePrompts {
    fn default() -> Self {
        Self {
            writer_system: WRITER_SYSTEM.to_string(),
            reviewer_system: REVIEWER_SYSTEM.to_string(),
        }
    }
}

impl RolePrompts {
    pub fn new(writer_system: impl Into<String>, reviewer_system: impl Into<String>) -> Self {
        Self {
            writer_system: writer_system.into(),
            reviewer_system: reviewer_system.into(),
        }
    }

    /// Replace the writer persona
    pub fn with_writer_system(mut self, prompt: impl Into<String>) -> Self {
        self.writer_system = prompt.into();
        self
    }

    /// Replace the reviewer persona
    pub fn with_reviewer_system(mut self, prompt: impl Into<String>) -> Self {
        self.reviewer_system = prompt.into();
        self
    }

    pub fn writer_system(&self) -> &str {
        &self.writer_system
    }

    pub fn reviewer_system(&self) -> &str {
        &self.reviewer_system
    }

    /// Messages asking the writer for a first draft on `topic`
    pub fn draft_messages(&self, topic: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.writer_system.as_str()),
            ChatMessage::user(format!(
                "Write an essay on the following topic. Output only the essay, no preamble.\n\nTopic: {}",
                topic
            )),
        ]
    }

    /// Messages asking the reviewer for three-part feedback on `essay`
    pub fn review_messages(&self, essay: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.reviewer_system.as_str()),
            ChatMessage::user(format!(
                "Review the following essay and provide structured feedback as described in your instructions.\n\n--- Essay ---\n{}",
                essay
            )),
        ]
    }

    /// Messages asking the writer to revise `draft` according to `review`
    pub fn revise_messages(&self, draft: &str, review: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.writer_system.as_str()),
            ChatMessage::user(format!(
                "Below is your draft essay and then feedback from a reviewer. \
Revise the essay to address the feedback. Output only the revised essay, no preamble.\n\n\
--- Draft ---\n{}\n\n--- Reviewer feedback ---\n{}",
                draft, review
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::entities::Role;

    #[test]
    fn test_draft_messages_format() {
        let messages = RolePrompts::default().draft_messages("Climate change");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[1].role(), Role::User);
        assert!(messages[1].content().contains("Climate change"));
        assert!(messages[1].content().contains("Output only the essay"));
    }

    #[test]
    fn test_review_messages_embed_essay() {
        let essay = "Plastic waste is everywhere.\n\nSecond paragraph.";
        let messages = RolePrompts::default().review_messages(essay);
        assert_eq!(messages[0].role(), Role::System);
        assert!(messages[0].content().contains("Strengths"));
        assert!(messages[0].content().contains("Areas to improve"));
        assert!(messages[0].content().contains("Specific suggestions"));
        assert!(messages[0].content().contains("same language as the essay"));
        assert!(messages[1].content().ends_with(essay));
    }

    #[test]
    fn test_revise_messages_embed_draft_and_review() {
        let messages = RolePrompts::default().revise_messages("D", "R");
        assert_eq!(messages[0].role(), Role::System);
        let user = messages[1].content();
        assert!(user.contains("--- Draft ---\nD"));
        assert!(user.contains("--- Reviewer feedback ---\nR"));
        assert!(user.contains("Output only the revised essay"));
    }

    #[test]
    fn test_default_personas_verbatim() {
        let prompts = RolePrompts::default();
        assert_eq!(
            prompts.writer_system(),
            "You are a clear, thoughtful essay writer. Write in well-structured paragraphs. \
Use the language requested by the user (or English if not specified)."
        );
        assert_eq!(
            prompts.reviewer_system(),
            "You are an expert essay reviewer. For the given essay, provide structured feedback in plain text with clear sections:\n\
1. Strengths — what works well.\n\
2. Areas to improve — what could be better (structure, clarity, arguments, evidence).\n\
3. Specific suggestions — concrete edits or rewrites the author could apply.\n\
\n\
Be constructive and specific. Write in the same language as the essay."
        );
    }

    #[test]
    fn test_long_input_not_truncated() {
        let essay = "word ".repeat(50_000);
        let messages = RolePrompts::default().review_messages(&essay);
        assert!(messages[1].content().contains(&essay));
    }

    #[test]
    fn test_writer_prompt_used_for_draft_and_revise() {
        let prompts = RolePrompts::default()
            .with_writer_system("WRITER")
            .with_reviewer_system("REVIEWER");
        assert_eq!(prompts.draft_messages("t")[0].content(), "WRITER");
        assert_eq!(prompts.revise_messages("d", "r")[0].content(), "WRITER");
        assert_eq!(prompts.review_messages("e")[0].content(), "REVIEWER");
    }
}
