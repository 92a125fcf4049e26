//! Configuration file loading for draftsmith
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `DRAFTSMITH_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./draftsmith.toml` or `./.draftsmith.toml`
//! 4. Global: `$XDG_CONFIG_HOME/draftsmith/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileModelsConfig, FileOpenRouterConfig, FileOutputConfig,
    FilePromptsConfig, ResolvedConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
