//! Readline prompt for the essay topic

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

const PROMPT: &str = "Essay topic: ";

/// Usage text shown when no topic was given
pub fn usage() -> String {
    [
        "Usage: draftsmith [OPTIONS] <TOPIC>",
        "Example: draftsmith \"Climate change and renewable energy\"",
    ]
    .join("\n")
}

/// Asks for the topic on the terminal
pub struct TopicPrompt {
    editor: DefaultEditor,
}

impl TopicPrompt {
    pub fn new() -> RlResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one line. Ctrl-C, Ctrl-D and blank input all yield `None`.
    pub fn read(&mut self) -> RlResult<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => Ok(non_blank(&line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn non_blank(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
