//! HTTP client for an OpenAI-compatible chat-completions endpoint

use reqwest::Client;

use super::models::{ChatCompletionRequest, ChatCompletionResponse, LLMError};
use crate::config::LlmConfig;

pub struct LLMClient {
    http_client: Client,
    config: LlmConfig,
}

impl LLMClient {
    /// Build a client around an explicit provider configuration.
    ///
    /// No timeout is set; the call waits on the transport default.
    pub fn new(config: LlmConfig) -> Self {
        let http_client = Client::builder().build().unwrap_or_default();
        Self { http_client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send `prompt` as the only user message and return the first choice's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        let body = ChatCompletionRequest::single_user_message(
            &self.config.model,
            prompt,
            &self.config.sampling,
        );

        let response = self
            .http_client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion request failed: {}", e);
                LLMError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Provider returned status {}: {}", status, error_text);
            return Err(LLMError::ApiError { status: status.as_u16(), message: error_text });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode completion response: {}", e);
            LLMError::InvalidResponse(e.to_string())
        })?;

        completion.into_first_content()
    }
}
