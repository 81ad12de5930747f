//! DeepSeek backend — OpenAI-style chat completions.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm_client::{ChatBackend, LlmError};

const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/chat/completions";
const DEEPSEEK_MODEL: &str = "deepseek-chat";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Extracts the content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// DeepSeek client. Same lazy-credential contract as the Gemini client:
/// a missing key fails the call before any outbound request.
#[derive(Clone)]
pub struct DeepSeekClient {
    client: Client,
    api_key: Option<String>,
}

impl DeepSeekClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ChatBackend for DeepSeekClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: DEEPSEEK_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(DEEPSEEK_API_URL)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        debug!(
            choices = chat_response.choices.len(),
            "DeepSeek call succeeded"
        );

        chat_response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
