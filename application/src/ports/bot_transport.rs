//! Bot transport port
//!
//! Defines the interface for exchanging one conversational turn with the
//! bot endpoint and for the best-effort chat-id lookup.

use async_trait::async_trait;
use botbench_domain::{BotTurn, CorrelationId};

/// Chat identifier resolved from a correlation id.
pub type ChatId = String;

/// Transport to the bot under test
///
/// One implementation call equals one network attempt: no retries, no
/// backoff. The adapter lives in the infrastructure layer; the driver
/// only sees the classified [`BotTurn`] outcome.
#[async_trait]
pub trait BotTransport: Send + Sync {
    /// Send one customer message and classify the bot's answer.
    ///
    /// The returned strings are the log lines recorded during the
    /// exchange (request timing, at minimum), emitted regardless of
    /// outcome so the transcript always shows how long the attempt took.
    async fn send_turn(
        &self,
        correlation_id: &CorrelationId,
        message: &str,
    ) -> (BotTurn, Vec<String>);

    /// Resolve the chat id the backend assigned to this conversation.
    ///
    /// Best-effort enrichment: any transport or parse failure yields
    /// `None`, silently. Callers must not treat `None` as an error.
    async fn resolve_chat_id(&self, correlation_id: &CorrelationId) -> Option<ChatId>;
}
