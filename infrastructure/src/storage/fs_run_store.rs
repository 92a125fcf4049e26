//! File-system run store.

use draftsmith_application::ports::run_store::{RunStore, RunStoreError};
use draftsmith_domain::{PipelineResult, Topic};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Longest directory-name prefix taken from the topic, in characters
const MAX_TOPIC_CHARS: usize = 50;

/// Name used when nothing of the topic survives sanitization
const FALLBACK_NAME: &str = "essay";

/// Turn a topic into a directory-name fragment.
///
/// Keeps ASCII letters and digits, Cyrillic letters, `-` and whitespace,
/// collapses each whitespace run into a single `_`, then keeps the first
/// 50 characters.
pub fn sanitize_topic(topic: &str) -> String {
    let mut safe = String::with_capacity(topic.len());
    let mut in_whitespace = false;

    for c in topic.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                safe.push('_');
                in_whitespace = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '-' || ('\u{0400}'..='\u{04FF}').contains(&c) {
            safe.push(c);
            in_whitespace = false;
        }
    }

    let safe: String = safe.chars().take(MAX_TOPIC_CHARS).collect();
    if safe.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        safe
    }
}

/// Writes `draft.txt`, `review.txt` and `final.txt` into
/// `<root>/<sanitized topic>_<unix seconds>/`.
pub struct FsRunStore {
    root: PathBuf,
}

impl FsRunStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory a run of `topic` started at `unix_secs` is written to
    pub fn run_dir(&self, topic: &Topic, unix_secs: i64) -> PathBuf {
        self.root
            .join(format!("{}_{}", sanitize_topic(topic.content()), unix_secs))
    }

    /// Save with an explicit timestamp
    pub fn save_at(
        &self,
        topic: &Topic,
        result: &PipelineResult,
        unix_secs: i64,
    ) -> Result<PathBuf, RunStoreError> {
        let run_dir = self.run_dir(topic, unix_secs);
        create_dir(&run_dir)?;

        for (name, text) in [
            ("draft.txt", &result.draft),
            ("review.txt", &result.review),
            ("final.txt", &result.final_text),
        ] {
            let path = run_dir.join(name);
            std::fs::write(&path, text).map_err(|source| RunStoreError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = text.len(), "Wrote run file");
        }

        info!("Saved run to {}", run_dir.display());
        Ok(run_dir)
    }
}

impl RunStore for FsRunStore {
    fn save(&self, topic: &Topic, result: &PipelineResult) -> Result<PathBuf, RunStoreError> {
        self.save_at(topic, result, chrono::Utc::now().timestamp())
    }
}

fn create_dir(path: &Path) -> Result<(), RunStoreError> {
    std::fs::create_dir_all(path).map_err(|source| RunStoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(text: &str) -> Topic {
        Topic::try_new(text).unwrap()
    }

    fn result() -> PipelineResult {
        PipelineResult::new("the draft", "the review", "the final essay")
    }

    #[test]
    fn test_sanitize_topic() {
        assert_eq!(sanitize_topic("Climate change"), "Climate_change");
        assert_eq!(sanitize_topic("What is AI? (2024 edition)"), "What_is_AI_2024_edition");
        assert_eq!(sanitize_topic("a \t\n b"), "a_b");
        assert_eq!(sanitize_topic("a ! b"), "a_b");
        assert_eq!(sanitize_topic("self-driving cars"), "self-driving_cars");
        assert_eq!(sanitize_topic("Изменение климата"), "Изменение_климата");
    }

    #[test]
    fn test_sanitize_topic_fallback() {
        assert_eq!(sanitize_topic("?!*"), "essay");
        assert_eq!(sanitize_topic("日本語"), "essay");
    }

    #[test]
    fn test_sanitize_topic_truncates_by_chars() {
        let long = "ж".repeat(80);
        let safe = sanitize_topic(&long);
        assert_eq!(safe.chars().count(), 50);
    }

    #[test]
    fn test_save_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("output");
        let store = FsRunStore::new(&root);

        let run_dir = store
            .save_at(&topic("Ocean plastic pollution"), &result(), 1_707_123_456)
            .unwrap();

        assert_eq!(run_dir, root.join("Ocean_plastic_pollution_1707123456"));
        assert_eq!(
            std::fs::read_to_string(run_dir.join("draft.txt")).unwrap(),
            "the draft"
        );
        assert_eq!(
            std::fs::read_to_string(run_dir.join("review.txt")).unwrap(),
            "the review"
        );
        assert_eq!(
            std::fs::read_to_string(run_dir.join("final.txt")).unwrap(),
            "the final essay"
        );
    }

    #[test]
    fn test_save_uses_current_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsRunStore::new(dir.path());

        let run_dir = store.save(&topic("Tides"), &result()).unwrap();

        let name = run_dir.file_name().unwrap().to_string_lossy().to_string();
        let secs: i64 = name.strip_prefix("Tides_").unwrap().parse().unwrap();
        assert!(secs > 1_700_000_000);
        assert!(run_dir.join("final.txt").exists());
    }

    #[test]
    fn test_save_reports_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FsRunStore::new(&blocker);

        let err = store.save_at(&topic("Tides"), &result(), 1).unwrap_err();

        let RunStoreError::Io { path, .. } = &err;
        assert!(path.starts_with(&blocker));
        assert!(err.to_string().starts_with("Failed to write"));
    }
}
