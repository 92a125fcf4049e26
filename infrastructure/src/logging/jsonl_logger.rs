//! JSONL transcript writer.
//!
//! Every [`ConversationEvent`] of a run becomes one JSON object on its own
//! line, carrying the event's payload fields plus `type` and `timestamp`.

use draftsmith_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Conversation logger appending one JSON object per line to a file.
///
/// Each line is flushed as soon as it is written so an aborted run still
/// leaves a readable transcript behind.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Create (or truncate) the transcript file at `path`.
    ///
    /// Missing parent directories are created.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::String(event.event_type.to_string()));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let line = match serde_json::to_string(&Self::record(event)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize conversation event: {}", e);
                return;
            }
        };

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Could not write to {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftsmith_domain::{Model, Stage};

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.conversation.jsonl");
        let logger = JsonlConversationLogger::create(&path).unwrap();
        let model = Model::try_new("openai/gpt-4o-mini").unwrap();

        logger.log(ConversationEvent::stage_request(Stage::Draft, &model, 2, 300));
        logger.log(ConversationEvent::stage_response(
            Stage::Draft,
            &model,
            "An essay.",
        ));
        logger.log(ConversationEvent::stage_failed(
            Stage::Review,
            &model,
            "API error (429): rate limited",
        ));

        let records = read_lines(&path);
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(record["timestamp"].is_string());
        }

        assert_eq!(records[0]["type"], "stage_request");
        assert_eq!(records[0]["messages"], 2);
        assert_eq!(records[1]["type"], "stage_response");
        assert_eq!(records[1]["text"], "An essay.");
        assert_eq!(records[2]["type"], "stage_failed");
        assert_eq!(records[2]["stage"], "review");
    }

    #[test]
    fn test_non_object_payload_wrapped_in_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.jsonl");
        let logger = JsonlConversationLogger::create(&path).unwrap();

        logger.log(ConversationEvent::new("note", serde_json::json!("plain")));

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "note");
        assert_eq!(records[0]["data"], "plain");
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("t.jsonl");

        let logger = JsonlConversationLogger::create(&path).unwrap();

        assert_eq!(logger.path(), path.as_path());
        assert!(path.exists());
    }
}
