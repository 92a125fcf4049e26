//! Raw TOML configuration data types
//!
//! These structs mirror the config file section by section. Everything is
//! optional at this level; [`FileConfig::validate`] turns the raw values into
//! the domain types a run needs.

use crate::openrouter::gateway::DEFAULT_BASE_URL;
use draftsmith_domain::{ApiKey, Model, OutputFormat, RoleModels, RolePrompts};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error(
        "OpenRouter API key is not set. Set openrouter.api_key in the config file or export {env}"
    )]
    MissingApiKey { env: String },

    #[error("{key} must be a non-empty model id (e.g. \"openai/gpt-4o-mini\")")]
    MissingModel { key: &'static str },

    #[error("openrouter.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("openrouter.request_timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("output.dir cannot be empty")]
    EmptyOutputDir,
}

/// `[openrouter]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenRouterConfig {
    /// Direct API key (prefer the environment variable)
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set
    pub api_key_env: String,
    /// API root; `/chat/completions` is appended
    pub base_url: String,
    /// Whole-request timeout. `None` keeps the HTTP client default.
    pub request_timeout_seconds: Option<u64>,
}

impl Default for FileOpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: None,
        }
    }
}

/// `[models]` section
///
/// ```toml
/// [models]
/// writer = "openai/gpt-4o-mini"          # Draft + Revise
/// reviewer = "anthropic/claude-3-haiku"  # Review
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub writer: Option<String>,
    pub reviewer: Option<String>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Root directory for run directories
    pub dir: PathBuf,
    /// What to print once the run completes
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            format: None,
            color: true,
        }
    }
}

/// `[prompts]` section: persona overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    pub writer_system: Option<String>,
    pub reviewer_system: Option<String>,
}

impl FilePromptsConfig {
    /// Built-in personas with any non-blank overrides applied
    pub fn to_role_prompts(&self) -> RolePrompts {
        let mut prompts = RolePrompts::default();
        if let Some(writer) = non_blank(self.writer_system.as_deref()) {
            prompts = prompts.with_writer_system(writer);
        }
        if let Some(reviewer) = non_blank(self.reviewer_system.as_deref()) {
            prompts = prompts.with_reviewer_system(reviewer);
        }
        prompts
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub openrouter: FileOpenRouterConfig,
    pub models: FileModelsConfig,
    pub output: FileOutputConfig,
    pub prompts: FilePromptsConfig,
}

/// Everything a run needs, validated
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: ApiKey,
    pub models: RoleModels,
    pub prompts: RolePrompts,
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

impl FileConfig {
    /// Validate against the process environment
    pub fn validate(&self) -> Result<ResolvedConfig, ConfigValidationError> {
        self.validate_with(|name| std::env::var(name).ok())
    }

    /// Validate, looking up environment variables through `env`
    ///
    /// Problems are reported in file order: key, models, endpoint, output.
    pub fn validate_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedConfig, ConfigValidationError> {
        let api_key = self.resolve_api_key(env)?;
        let writer = parse_model("models.writer", self.models.writer.as_deref())?;
        let reviewer = parse_model("models.reviewer", self.models.reviewer.as_deref())?;

        let base_url = self.openrouter.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        let request_timeout = match self.openrouter.request_timeout_seconds {
            Some(0) => return Err(ConfigValidationError::InvalidTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        if self.output.dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyOutputDir);
        }

        Ok(ResolvedConfig {
            api_key,
            models: RoleModels::new(writer, reviewer),
            prompts: self.prompts.to_role_prompts(),
            base_url: base_url.to_string(),
            request_timeout,
            output_dir: self.output.dir.clone(),
            format: self.output.format.unwrap_or_default(),
        })
    }

    /// `openrouter.api_key` if set, otherwise the variable named by
    /// `openrouter.api_key_env`
    pub fn resolve_api_key(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ApiKey, ConfigValidationError> {
        let from_file = non_blank(self.openrouter.api_key.as_deref()).map(str::to_string);
        let secret = from_file.or_else(|| {
            let name = self.openrouter.api_key_env.trim();
            if name.is_empty() { None } else { env(name) }
        });

        secret
            .and_then(|s| ApiKey::try_new(s).ok())
            .ok_or_else(|| ConfigValidationError::MissingApiKey {
                env: self.openrouter.api_key_env.clone(),
            })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_model(key: &'static str, value: Option<&str>) -> Result<Model, ConfigValidationError> {
    value
        .and_then(|v| Model::try_new(v).ok())
        .ok_or(ConfigValidationError::MissingModel { key })
}
