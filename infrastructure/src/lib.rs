//! Infrastructure layer for botbench
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP transport to the bot under test, the
//! chat-completions customer simulator, and configuration file loading.

pub mod bot;
pub mod config;
pub mod generation;

// Re-export commonly used types
pub use bot::client::HttpBotTransport;
pub use config::{
    ConfigLoader, FileBotConfig, FileConfig, FileGenerationConfig, FileLookupConfig,
    FilePromptsConfig, FileRunConfig,
};
pub use generation::openai::OpenAiSimulator;
