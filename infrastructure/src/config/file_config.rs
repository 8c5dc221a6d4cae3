//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field has a default, so a missing file or a partial
//! file always yields a usable configuration.
//!
//! Example configuration:
//!
//! ```toml
//! [bot]
//! id = 873
//! endpoint = "https://motor-ai.example.com/web/web"
//! channel = "WEB"
//! test_mode = true
//!
//! [run]
//! rounds = 6
//! max_workers = 5
//! steering_prompt = "Act like a curious first-time customer."
//!
//! [generation]
//! model = "gpt-4o-mini"
//!
//! [prompts]
//! seeds = ["Hi, I need help with my order", "Do you ship abroad?"]
//! ```

use botbench_application::RunParams;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Bot under test
    pub bot: FileBotConfig,
    /// Run shape (rounds, workers, steering prompt)
    pub run: FileRunConfig,
    /// Chat-id lookup endpoint
    pub lookup: FileLookupConfig,
    /// Customer-message generation
    pub generation: FileGenerationConfig,
    /// Seed prompts
    pub prompts: FilePromptsConfig,
}

impl FileConfig {
    /// Collapse the bot and run sections into the immutable [`RunParams`]
    /// handed to the runner.
    pub fn run_params(&self) -> RunParams {
        RunParams::default()
            .with_bot_id(self.bot.id)
            .with_endpoint(&self.bot.endpoint)
            .with_channel(&self.bot.channel)
            .with_test_mode(self.bot.test_mode)
            .with_rounds(self.run.rounds)
            .with_max_workers(self.run.max_workers)
            .with_steering_prompt(&self.run.steering_prompt)
    }
}

/// `[bot]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBotConfig {
    /// Numeric bot id
    pub id: u64,
    /// Turn endpoint URL
    pub endpoint: String,
    /// Channel label
    pub channel: String,
    /// Test-mode flag
    pub test_mode: bool,
}

impl Default for FileBotConfig {
    fn default() -> Self {
        Self {
            id: 873,
            endpoint: "https://motor-ai.calmsmoke-f5ed124e.eastus2.azurecontainerapps.io/web/web"
                .to_string(),
            channel: "WEB".to_string(),
            test_mode: true,
        }
    }
}

/// `[run]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRunConfig {
    /// Rounds per conversation
    pub rounds: usize,
    /// Worker pool capacity
    pub max_workers: usize,
    /// Steering prompt for generated customer messages
    pub steering_prompt: String,
}

impl Default for FileRunConfig {
    fn default() -> Self {
        Self {
            rounds: 6,
            max_workers: 5,
            steering_prompt: "Generate a test message based on the conversation history."
                .to_string(),
        }
    }
}

/// `[lookup]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// Base URL of the chat-id lookup endpoint
    pub base_url: String,
    /// Static token sent in the lookup request header
    pub token: String,
}

impl Default for FileLookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://backend.krino.ai/chat/get_chat_by_ip".to_string(),
            token: String::new(),
        }
    }
}

/// `[generation]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// API key; may also come from the OPENAI_API_KEY environment variable
    pub api_key: Option<String>,
    /// Model used to generate customer messages
    pub model: String,
    /// API base URL
    pub base_url: String,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

/// `[prompts]` section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    /// Seed prompts, one conversation each
    pub seeds: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.bot.id, 873);
        assert_eq!(config.bot.channel, "WEB");
        assert!(config.bot.test_mode);
        assert_eq!(config.run.rounds, 6);
        assert_eq!(config.run.max_workers, 5);
        assert_eq!(config.generation.model, "gpt-4o-mini");
        assert!(config.generation.api_key.is_none());
        assert!(config.prompts.seeds.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults_elsewhere() {
        let toml_str = r#"
[bot]
id = 42
endpoint = "http://localhost:8080/web/web"

[prompts]
seeds = ["Hola"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bot.id, 42);
        assert_eq!(config.bot.channel, "WEB");
        assert_eq!(config.run.rounds, 6);
        assert_eq!(config.prompts.seeds, vec!["Hola".to_string()]);
    }

    #[test]
    fn test_run_params_mapping() {
        let toml_str = r#"
[bot]
id = 7
endpoint = "http://localhost/web"
channel = "APP"
test_mode = false

[run]
rounds = 3
max_workers = 2
steering_prompt = "Be terse."
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.run_params();
        assert_eq!(params.bot_id, 7);
        assert_eq!(params.endpoint, "http://localhost/web");
        assert_eq!(params.channel, "APP");
        assert!(!params.test_mode);
        assert_eq!(params.rounds, 3);
        assert_eq!(params.max_workers, 2);
        assert_eq!(params.steering_prompt, "Be terse.");
    }
}
