//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for transcripts
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Numbered headings with the full transcript of every conversation
    Full,
    /// JSON array of transcripts
    Json,
}

/// CLI arguments for botbench
#[derive(Parser, Debug)]
#[command(name = "botbench")]
#[command(author, version, about = "Parallel conversation tests against a chat bot")]
#[command(long_about = r#"
Botbench drives scripted multi-turn conversations against a bot's HTTP
endpoint. Each seed prompt starts one conversation; an LLM plays the
customer side, and every conversation is logged into a transcript for
inspection.

Seed prompts come from the [prompts] section of the config file and/or
positional arguments. The generation API key comes from the config file
or the OPENAI_API_KEY environment variable.

Configuration files are loaded from (in priority order):
1. --config <path>    Explicit config file
2. ./botbench.toml    Project-level config
3. ~/.config/botbench/config.toml   Global config

Example:
  botbench "Hi, I'd like to return a product"
  botbench --rounds 3 --workers 2 "Do you ship abroad?" "Where is my order?"
"#)]
pub struct Cli {
    /// Seed prompts, one conversation each (appended to config prompts)
    pub prompts: Vec<String>,

    /// Number of rounds per conversation
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Bot id to test against
    #[arg(short, long, value_name = "ID")]
    pub bot_id: Option<u64>,

    /// Turn endpoint URL
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Channel label sent with every payload
    #[arg(long, value_name = "CHANNEL")]
    pub channel: Option<String>,

    /// Worker pool capacity (conversations running at once)
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Send live traffic (clears the test-mode flag)
    #[arg(long)]
    pub live: bool,

    /// Steering prompt for the generated customer messages
    #[arg(short, long, value_name = "TEXT")]
    pub steering: Option<String>,

    /// Generation model
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
