//! Classification of bot turn-endpoint responses.
//!
//! The turn endpoint is loose about its response shape: it may return a
//! single JSON object, or a list whose first element is that object, and
//! misbehaving deployments have been seen returning raw strings. This
//! module provides the tagged result type the transport adapter produces
//! and the driver consumes exhaustively.
//!
//! # Types
//!
//! - [`BotTurn`] - Outcome of one request/response exchange with the bot.
//! - [`BotReply`] - The reply object itself, with accessors for the
//!   `sentence` and `error` keys.
//! - [`classify_body`] - Pure function mapping a parsed JSON body to a
//!   [`BotTurn`].

use serde_json::Value;

/// Placeholder used when a reply object carries no `sentence` key.
pub const NO_REPLY_PLACEHOLDER: &str = "No reply.";

/// Outcome of one turn exchange with the bot endpoint.
///
/// Produced by the transport adapter, consumed exhaustively by the
/// conversation driver:
///
/// - `Reply` → inspect the object for `error` / `sentence`
/// - `TransportFailed` → terminal for the conversation, logged
/// - `Malformed` → terminal for the conversation, logged
#[derive(Debug, Clone, PartialEq)]
pub enum BotTurn {
    /// The endpoint answered with a reply object (directly, or as the
    /// first element of a list).
    Reply(BotReply),
    /// Connection error, timeout, or non-2xx status. Carries the failure
    /// description.
    TransportFailed(String),
    /// The body was neither a list nor an object. Carries a description
    /// embedding the unexpected payload.
    Malformed(String),
}

/// A reply object returned by the bot endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply(Value);

impl BotReply {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The bot's utterance, or a fixed placeholder when the `sentence`
    /// key is absent.
    pub fn sentence(&self) -> String {
        self.0
            .get("sentence")
            .and_then(Value::as_str)
            .unwrap_or(NO_REPLY_PLACEHOLDER)
            .to_string()
    }

    /// The `error` value, if the bot reported one.
    pub fn error(&self) -> Option<String> {
        self.0.get("error").map(|e| match e.as_str() {
            Some(s) => s.to_string(),
            None => e.to_string(),
        })
    }
}

/// Classify a parsed turn-endpoint body by its JSON shape.
///
/// A list takes its first element as the reply; an object is used
/// directly; anything else (including an empty list) is malformed. Pure
/// function, called once per turn by the transport adapter.
pub fn classify_body(body: Value) -> BotTurn {
    match body {
        Value::Array(mut items) => {
            if items.is_empty() {
                BotTurn::Malformed("Unexpected response format: []".to_string())
            } else {
                BotTurn::Reply(BotReply::new(items.remove(0)))
            }
        }
        Value::Object(_) => BotTurn::Reply(BotReply::new(body)),
        other => BotTurn::Malformed(format!("Unexpected response format: {}", other)),
    }
}
