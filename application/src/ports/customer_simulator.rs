//! Customer simulator port
//!
//! Defines the interface for generating the next synthetic customer
//! message from the conversation so far.

use async_trait::async_trait;
use botbench_domain::Message;
use thiserror::Error;

/// Errors that can occur while generating a customer message
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Generation credential missing")]
    MissingCredential,

    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    #[error("Generation response invalid: {0}")]
    InvalidResponse(String),
}

/// Synthesizes the customer side of the conversation
///
/// Implementations call an external text-generation model in single-shot
/// mode. The handle is shared read-only across all conversations of a
/// run, so implementations must be safe for concurrent invocation.
#[async_trait]
pub trait CustomerSimulator: Send + Sync {
    /// Produce the next customer message.
    ///
    /// `history` is borrowed and never mutated; implementations build
    /// their own prompt context from the steering prompt plus a copy of
    /// the history. A failure here is not retried.
    async fn next_message(
        &self,
        history: &[Message],
        steering_prompt: &str,
    ) -> Result<String, SimulatorError>;
}
