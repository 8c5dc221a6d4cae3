//! Conversation domain entities

use crate::core::correlation::CorrelationId;
use serde::{Deserialize, Serialize};

/// Role of a message within the simulation
///
/// Roles label message origin inside the simulated exchange, not the
/// bot's own perspective: the seed prompt and every bot reply are `User`
/// (they are what the "customer" side sends next), while generated
/// next-customer messages are `Assistant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

/// A message in a conversation history (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One simulated conversation against the bot (Entity)
///
/// Holds the correlation id (generated at start, stable for the
/// conversation's lifetime) and the ordered message history. The history
/// is seeded with the initial customer prompt and grows by two entries
/// per successful round: the bot's reply and the generated next customer
/// message.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: CorrelationId,
    history: Vec<Message>,
}

impl Conversation {
    /// Start a conversation from a seed prompt
    pub fn new(seed_prompt: impl Into<String>) -> Self {
        Self {
            id: CorrelationId::generate(),
            history: vec![Message::user(seed_prompt)],
        }
    }

    pub fn id(&self) -> &CorrelationId {
        &self.id
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// The most recent customer-side utterance, i.e. what gets sent to
    /// the bot on the next turn. On round one this is the seed prompt;
    /// afterwards it is the generated next customer message, which sits
    /// at the end of the history.
    pub fn last_message(&self) -> &str {
        self.history
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.history.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.history.push(Message::assistant(content));
    }
}
