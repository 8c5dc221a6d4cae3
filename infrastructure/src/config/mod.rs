//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileBotConfig, FileConfig, FileGenerationConfig, FileLookupConfig, FilePromptsConfig,
    FileRunConfig,
};
pub use loader::ConfigLoader;
