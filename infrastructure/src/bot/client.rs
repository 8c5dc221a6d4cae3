//! HTTP transport to the bot's turn endpoint and chat-id lookup.
//!
//! One [`HttpBotTransport::send_turn`] call is one POST attempt: a fixed
//! 360-second timeout, no retry, and the wall-clock elapsed time recorded
//! as a log line whatever the outcome. The payload field names are fixed
//! by the bot's existing API and are kept verbatim on the wire.

use async_trait::async_trait;
use botbench_application::RunParams;
use botbench_application::ports::bot_transport::{BotTransport, ChatId};
use botbench_domain::{BotTurn, CorrelationId, classify_body};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Per-request timeout on the turn endpoint.
const TURN_TIMEOUT: Duration = Duration::from_secs(360);

/// Message-type tag sent with every turn.
const MESSAGE_TYPE: &str = "text";

/// Turn-endpoint payload (wire names fixed by the bot API).
#[derive(Serialize)]
struct TurnPayload<'a> {
    data: TurnData<'a>,
    #[serde(rename = "canal")]
    channel: &'a str,
    test: bool,
}

#[derive(Serialize)]
struct TurnData<'a> {
    #[serde(rename = "identificador")]
    identifier: &'a str,
    bot: u64,
    #[serde(rename = "mensaje")]
    message: &'a str,
    #[serde(rename = "tipo")]
    message_type: &'a str,
}

/// HTTP implementation of the [`BotTransport`] port.
pub struct HttpBotTransport {
    client: reqwest::Client,
    endpoint: String,
    bot_id: u64,
    channel: String,
    test_mode: bool,
    lookup_base: String,
    lookup_token: String,
}

impl HttpBotTransport {
    /// Build a transport for one run.
    ///
    /// `lookup_base` and `lookup_token` configure the best-effort chat-id
    /// resolver; an empty token is sent as-is.
    pub fn new(
        params: &RunParams,
        lookup_base: impl Into<String>,
        lookup_token: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(TURN_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: params.endpoint.clone(),
            bot_id: params.bot_id,
            channel: params.channel.clone(),
            test_mode: params.test_mode,
            lookup_base: lookup_base.into(),
            lookup_token: lookup_token.into(),
        })
    }
}

#[async_trait]
impl BotTransport for HttpBotTransport {
    async fn send_turn(
        &self,
        correlation_id: &CorrelationId,
        message: &str,
    ) -> (BotTurn, Vec<String>) {
        let payload = TurnPayload {
            data: TurnData {
                identifier: correlation_id.as_str(),
                bot: self.bot_id,
                message,
                message_type: MESSAGE_TYPE,
            },
            channel: &self.channel,
            test: self.test_mode,
        };

        let started = Instant::now();
        let result = self.client.post(&self.endpoint).json(&payload).send().await;
        let lines = vec![format!("Request time: {:.2?}", started.elapsed())];

        let response = match result {
            Ok(r) => r,
            Err(e) => return (BotTurn::TransportFailed(e.to_string()), lines),
        };

        let status = response.status();
        if !status.is_success() {
            return (
                BotTurn::TransportFailed(format!(
                    "HTTP error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )),
                lines,
            );
        }

        match response.json::<Value>().await {
            Ok(body) => (classify_body(body), lines),
            Err(e) => (
                BotTurn::Malformed(format!("Unexpected response format: {}", e)),
                lines,
            ),
        }
    }

    async fn resolve_chat_id(&self, correlation_id: &CorrelationId) -> Option<ChatId> {
        let url = format!(
            "{}/{}_{}",
            self.lookup_base.trim_end_matches('/'),
            correlation_id,
            self.bot_id
        );

        let response = match self
            .client
            .get(&url)
            .header("token", &self.lookup_token)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                debug!("Chat-id lookup failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            debug!("Chat-id lookup returned {}", response.status());
            return None;
        }

        let body: Value = response.json().await.ok()?;
        match body.get("id") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}
