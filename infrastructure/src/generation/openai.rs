//! OpenAI-backed customer simulator.
//!
//! Calls the Chat Completions API directly over REST in single-shot
//! (non-streaming) mode. The low temperature keeps generated customer
//! messages consistent across runs of the same seed prompts.
//!
//! Configuration priority: explicit api key > OPENAI_API_KEY environment
//! variable.

use async_trait::async_trait;
use botbench_application::ports::customer_simulator::{CustomerSimulator, SimulatorError};
use botbench_domain::{Message, Role};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Sampling temperature for generated customer messages.
const TEMPERATURE: f64 = 0.2;

/// Fixed directive appended to the steering prompt.
const NEXT_MESSAGE_DIRECTIVE: &str =
    "Generate the next message based on the previous conversation:";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceContent,
}

#[derive(Deserialize)]
struct ChatChoiceContent {
    content: String,
}

/// [`CustomerSimulator`] implementation backed by the OpenAI API.
///
/// The handle is stateless between calls and safe to share across all
/// conversations of a run.
pub struct OpenAiSimulator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiSimulator {
    /// Creates a simulator with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SimulatorError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SimulatorError::MissingCredential);
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Loads the API key from the `OPENAI_API_KEY` environment variable.
    pub fn try_from_env() -> Result<Self, SimulatorError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| SimulatorError::MissingCredential)?;
        Self::new(api_key)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the API base URL (tests point this at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_messages(&self, history: &[Message], steering_prompt: &str) -> Vec<ChatMessage> {
        // Leading instruction, then a copy of the history. The caller's
        // history is never touched.
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage {
            role: "assistant".to_string(),
            content: format!("{}\n\n{}", steering_prompt, NEXT_MESSAGE_DIRECTIVE),
        });
        messages.extend(history.iter().map(|m| ChatMessage {
            role: match m.role {
                Role::User => "user".to_string(),
                Role::Assistant => "assistant".to_string(),
            },
            content: m.content.clone(),
        }));
        messages
    }
}

#[async_trait]
impl CustomerSimulator for OpenAiSimulator {
    async fn next_message(
        &self,
        history: &[Message],
        steering_prompt: &str,
    ) -> Result<String, SimulatorError> {
        let request = ChatRequest {
            model: &self.model,
            messages: self.build_messages(history, steering_prompt),
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SimulatorError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SimulatorError::RequestFailed(format!(
                "status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| SimulatorError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| SimulatorError::InvalidResponse("response had no choices".to_string()))
    }
}
