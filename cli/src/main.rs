//! CLI entrypoint for botbench
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use botbench_application::RunSessionUseCase;
use botbench_infrastructure::{ConfigLoader, HttpBotTransport, OpenAiSimulator};
use botbench_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Run parameters: config file values with CLI overrides on top
    let mut params = config.run_params();
    if let Some(rounds) = cli.rounds {
        params = params.with_rounds(rounds);
    }
    if let Some(id) = cli.bot_id {
        params = params.with_bot_id(id);
    }
    if let Some(endpoint) = &cli.endpoint {
        params = params.with_endpoint(endpoint);
    }
    if let Some(channel) = &cli.channel {
        params = params.with_channel(channel);
    }
    if let Some(workers) = cli.workers {
        params = params.with_max_workers(workers);
    }
    if let Some(steering) = &cli.steering {
        params = params.with_steering_prompt(steering);
    }
    if cli.live {
        params = params.with_test_mode(false);
    }

    // Seed prompts: config file first, then positional arguments
    let mut seeds = config.prompts.seeds.clone();
    seeds.extend(cli.prompts.iter().cloned());
    if seeds.is_empty() {
        bail!(
            "No seed prompts. Add a [prompts] seeds list to the config file \
             or pass prompts as arguments."
        );
    }

    // The whole run is refused when the credential is missing; nothing
    // is launched partially.
    let api_key = config
        .generation
        .api_key
        .clone()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .unwrap_or_default();
    if api_key.trim().is_empty() {
        bail!(
            "Generation API key missing. Set [generation] api_key in the \
             config file or the OPENAI_API_KEY environment variable."
        );
    }

    info!("Starting botbench");

    // === Dependency Injection ===
    let transport = Arc::new(HttpBotTransport::new(
        &params,
        &config.lookup.base_url,
        &config.lookup.token,
    )?);

    let model = cli.model.as_deref().unwrap_or(&config.generation.model);
    let simulator = Arc::new(
        OpenAiSimulator::new(api_key)?
            .with_model(model)
            .with_base_url(&config.generation.base_url),
    );

    if !cli.quiet {
        println!();
        println!("Endpoint: {}", params.endpoint);
        println!(
            "Bot: {} | Channel: {} | Rounds: {} | Workers: {}",
            params.bot_id, params.channel, params.rounds, params.max_workers
        );
        println!("Conversations: {}", seeds.len());
        println!();
    }

    // Create use case with injected adapters
    let use_case = RunSessionUseCase::new(transport, simulator);

    // Execute with or without progress reporting
    let transcripts = if cli.quiet {
        use_case.execute(&seeds, &params).await?
    } else {
        let progress = ProgressReporter::new();
        use_case
            .execute_with_progress(&seeds, &params, &progress)
            .await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&transcripts),
        OutputFormat::Json => ConsoleFormatter::format_json(&transcripts),
    };

    println!("{}", output);

    Ok(())
}
