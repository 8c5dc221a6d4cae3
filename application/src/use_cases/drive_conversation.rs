//! Drive Conversation use case
//!
//! Runs one full conversation against the bot: a fixed number of rounds,
//! each sending the latest customer message, classifying the bot's
//! answer, and generating the next customer message. The accumulated
//! log becomes the conversation's transcript.

use crate::config::RunParams;
use crate::ports::bot_transport::BotTransport;
use crate::ports::customer_simulator::{CustomerSimulator, SimulatorError};
use botbench_domain::{BotTurn, Conversation, Transcript, TurnLog};
use std::sync::Arc;
use tracing::debug;

/// A conversation cut short by a simulator failure.
///
/// The driver deliberately does not absorb generation failures; they
/// surface here, carrying every log line recorded up to the failure so
/// the runner can still produce a transcript for this conversation.
#[derive(Debug)]
pub struct ConversationAborted {
    pub log: TurnLog,
    pub source: SimulatorError,
}

/// Use case for driving a single conversation
///
/// State machine over `params.rounds` rounds. Any transport failure,
/// malformed body, or bot-reported error is terminal for the
/// conversation: remaining rounds are skipped, no retry, and the log so
/// far is returned as the transcript.
pub struct DriveConversationUseCase<T: BotTransport, S: CustomerSimulator> {
    transport: Arc<T>,
    simulator: Arc<S>,
}

impl<T: BotTransport, S: CustomerSimulator> DriveConversationUseCase<T, S> {
    pub fn new(transport: Arc<T>, simulator: Arc<S>) -> Self {
        Self {
            transport,
            simulator,
        }
    }

    /// Execute the conversation seeded with `seed_prompt`.
    pub async fn execute(
        &self,
        seed_prompt: &str,
        params: &RunParams,
    ) -> Result<Transcript, ConversationAborted> {
        let mut log = TurnLog::new();
        let mut conversation = Conversation::new(seed_prompt);
        log.push(format!("Conversation ID: {}", conversation.id()));

        let mut chat_resolved = false;

        for round in 1..=params.rounds {
            log.push(format!("\n--- Round {} ---", round));

            let outgoing = conversation.last_message().to_string();
            let (turn, transport_log) =
                self.transport.send_turn(conversation.id(), &outgoing).await;
            log.extend(transport_log);

            // Resolved on the first round only, whatever the turn's
            // outcome. Best-effort: a missing id is logged, not fatal.
            if !chat_resolved {
                match self.transport.resolve_chat_id(conversation.id()).await {
                    Some(id) => log.push(format!("Chat ID: {}", id)),
                    None => log.push("Chat ID: none".to_string()),
                }
                chat_resolved = true;
            }

            match turn {
                BotTurn::TransportFailed(e) => {
                    log.push(format!("Error sending message: {}", e));
                    break;
                }
                BotTurn::Malformed(description) => {
                    log.push(description);
                    break;
                }
                BotTurn::Reply(reply) => {
                    if let Some(error) = reply.error() {
                        log.push(format!("Error received: {}", error));
                        break;
                    }

                    let sentence = reply.sentence();
                    log.push(format!("Bot: {}", sentence));
                    conversation.push_user(&sentence);

                    let next = match self
                        .simulator
                        .next_message(conversation.history(), &params.steering_prompt)
                        .await
                    {
                        Ok(text) => text,
                        Err(source) => return Err(ConversationAborted { log, source }),
                    };
                    log.push(format!("Next customer message: {}", next));
                    conversation.push_assistant(next);
                }
            }
        }

        debug!(id = %conversation.id(), "Conversation finished");
        Ok(log.into_transcript())
    }
}
