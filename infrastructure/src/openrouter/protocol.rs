//! Wire types for the chat completions endpoint.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! response is ignored.

use draftsmith_domain::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body: `{"model": ..., "messages": [{"role", "content"}, ...]}`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    /// Kept untyped so a non-string `content` is reported as missing text
    /// rather than as a parse failure.
    #[serde(default)]
    pub content: Option<Value>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, trimmed, if it is a non-empty string
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_ref()?
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
