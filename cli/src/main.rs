//! CLI entrypoint for draftsmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use draftsmith_application::{RunPipelineInput, RunPipelineUseCase, RunStore};
use draftsmith_domain::Topic;
use draftsmith_infrastructure::{
    ConfigLoader, FileConfig, FsRunStore, JsonlConversationLogger, OpenRouterGateway,
};
use draftsmith_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress, TopicPrompt, usage,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting draftsmith");

    // === Configuration ===
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    apply_cli_overrides(&mut file_config, &cli);

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    let config = file_config.validate()?;

    // === Topic ===
    let topic = match read_topic(&cli)? {
        Some(topic) => topic,
        None => bail!("No essay topic given.\n{}", usage()),
    };
    let topic = Topic::try_new(topic)?;

    // === Dependency Injection ===
    let gateway = Arc::new(OpenRouterGateway::new(
        config.api_key,
        &config.base_url,
        config.request_timeout,
    )?);

    let mut use_case = RunPipelineUseCase::new(gateway, config.prompts);
    if let Some(path) = &cli.log_conversation {
        let logger = JsonlConversationLogger::create(path).with_context(|| {
            format!("Failed to create conversation log {}", path.display())
        })?;
        info!("Recording conversation to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    let input = RunPipelineInput::new(topic.clone(), config.models);

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else if cli.plain {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    let store = FsRunStore::new(config.output_dir);
    let run_dir = store.save(&topic, &result)?;

    print!(
        "{}",
        ConsoleFormatter.render(config.format, topic.content(), &result)
    );
    eprintln!("{}", ConsoleFormatter::saved_line(&run_dir));

    Ok(())
}

/// Command-line values take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(writer) = &cli.writer_model {
        config.models.writer = Some(writer.clone());
    }
    if let Some(reviewer) = &cli.reviewer_model {
        config.models.reviewer = Some(reviewer.clone());
    }
    if let Some(dir) = &cli.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
}

/// Topic from the command line, or from an interactive prompt when stdin is
/// a terminal
fn read_topic(cli: &Cli) -> Result<Option<String>> {
    if let Some(topic) = cli.topic_arg() {
        return Ok(Some(topic.to_string()));
    }
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut prompt = TopicPrompt::new().context("Failed to open the topic prompt")?;
    prompt.read().context("Failed to read the topic")
}
