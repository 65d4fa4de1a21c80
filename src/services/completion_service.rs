use reqwest::Client;

use crate::config::CompletionConfig;
use crate::error::ItineraryError;
use crate::models::completion::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
};

/// Client for an OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct CompletionClient {
    http_client: Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, ItineraryError> {
        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Sends `prompt` as a single user message in JSON-object mode and
    /// returns the raw content of the first choice.
    pub async fn complete(&self, prompt: &str) -> Result<String, ItineraryError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ItineraryError::Upstream("OPENAI_API_KEY not set".to_string()))?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .http_client
            .post(self.chat_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&response_text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("Completion service returned status {}", status));
            return Err(ItineraryError::Upstream(message));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&response_text)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ItineraryError::Upstream("Completion response contained no choices".to_string()))
    }
}
