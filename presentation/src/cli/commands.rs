//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What to print once the essay is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Draft, review and final essay
    Full,
    /// Only the final essay
    Final,
    /// JSON object with draft, review and final
    Json,
}

impl From<OutputFormat> for draftsmith_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Final => Self::Final,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for draftsmith
#[derive(Parser, Debug)]
#[command(name = "draftsmith")]
#[command(author, version, about = "Draft, review and revise an essay with two LLMs")]
#[command(long_about = r#"
Draftsmith writes an essay in three stages:
1. Draft:  the writer model drafts an essay on the topic
2. Review: the reviewer model critiques the draft
3. Revise: the writer model rewrites the draft using the review

The draft, review and final essay are saved to
<output dir>/<topic>_<unix seconds>/{draft,review,final}.txt

Configuration files are loaded from (in priority order):
1. DRAFTSMITH_* environment variables (e.g. DRAFTSMITH_MODELS__WRITER)
2. --config <path>        Explicit config file
3. ./draftsmith.toml      Project-level config
4. ~/.config/draftsmith/config.toml   Global config

The OpenRouter API key is read from openrouter.api_key or $OPENROUTER_API_KEY.

Example:
  draftsmith "Climate change and renewable energy"
  draftsmith --writer-model openai/gpt-4o --reviewer-model anthropic/claude-3-haiku "Tides"
"#)]
pub struct Cli {
    /// The essay topic (prompted for when omitted)
    pub topic: Option<String>,

    /// Model that drafts and revises the essay
    #[arg(long, value_name = "MODEL")]
    pub writer_model: Option<String>,

    /// Model that reviews the draft
    #[arg(long, value_name = "MODEL")]
    pub reviewer_model: Option<String>,

    /// Root directory for run directories
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format (defaults to the config file value, then `final`)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Plain line-by-line progress instead of spinners
    #[arg(long)]
    pub plain: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Record every request and reply as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,
}

impl Cli {
    /// The positional topic, trimmed; `None` when absent or blank
    pub fn topic_arg(&self) -> Option<&str> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
    }
}
