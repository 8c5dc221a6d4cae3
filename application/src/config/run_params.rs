//! Run parameters: one immutable bundle per test run.
//!
//! [`RunParams`] groups everything the driver and runner need to know
//! about a run: where the bot lives, how the payload is tagged, how many
//! rounds each conversation plays, and how wide the worker pool is.
//! Supplied externally before the run starts and read-only afterwards.

use serde::{Deserialize, Serialize};

/// Immutable configuration shared by every conversation in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    /// Numeric id of the bot under test.
    pub bot_id: u64,
    /// Turn endpoint URL.
    pub endpoint: String,
    /// Channel label sent with every payload.
    pub channel: String,
    /// Test-mode flag sent with every payload.
    pub test_mode: bool,
    /// Number of request/response/generate rounds per conversation.
    pub rounds: usize,
    /// Worker pool capacity, i.e. conversations running at once.
    pub max_workers: usize,
    /// Steering prompt conditioning the generated customer messages.
    pub steering_prompt: String,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            bot_id: 873,
            endpoint: String::new(),
            channel: "WEB".to_string(),
            test_mode: true,
            rounds: 6,
            max_workers: 5,
            steering_prompt: "Generate a test message based on the conversation history."
                .to_string(),
        }
    }
}

impl RunParams {
    // ==================== Builder Methods ====================

    pub fn with_bot_id(mut self, id: u64) -> Self {
        self.bot_id = id;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = workers.max(1);
        self
    }

    pub fn with_steering_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.steering_prompt = prompt.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = RunParams::default();
        assert_eq!(params.bot_id, 873);
        assert_eq!(params.channel, "WEB");
        assert!(params.test_mode);
        assert_eq!(params.rounds, 6);
        assert_eq!(params.max_workers, 5);
    }

    #[test]
    fn test_builder() {
        let params = RunParams::default()
            .with_bot_id(42)
            .with_endpoint("http://localhost:8080/web/web")
            .with_rounds(2)
            .with_max_workers(3);

        assert_eq!(params.bot_id, 42);
        assert_eq!(params.endpoint, "http://localhost:8080/web/web");
        assert_eq!(params.rounds, 2);
        assert_eq!(params.max_workers, 3);
    }

    #[test]
    fn test_builder_clamps_to_minimum_one() {
        let params = RunParams::default().with_rounds(0).with_max_workers(0);
        assert_eq!(params.rounds, 1);
        assert_eq!(params.max_workers, 1);
    }
}
