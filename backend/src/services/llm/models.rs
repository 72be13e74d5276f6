//! LLM wire types and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SamplingConfig;

// ============================================================================
// Errors
// ============================================================================

/// Failure to obtain a completion from the provider.
///
/// Unparseable completion text is not an error; it degrades to the
/// placeholder name instead.
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Request to provider failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

// ============================================================================
// Chat completion request
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    pub r#type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub stream: bool,
    #[serde(flatten)]
    pub sampling: &'a SamplingConfig,
    pub response_format: ResponseFormat,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Single-turn, non-streaming request with a plain-text response format
    pub fn single_user_message(
        model: &'a str,
        prompt: &'a str,
        sampling: &'a SamplingConfig,
    ) -> Self {
        Self {
            model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            stream: false,
            sampling,
            response_format: ResponseFormat { r#type: "text" },
        }
    }
}

// ============================================================================
// Chat completion response
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text content of the first choice
    pub fn into_first_content(self) -> Result<String, LLMError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InvalidResponse("response has no choices".into()))?;

        if let Some(reasoning) = &choice.message.reasoning_content {
            tracing::debug!("Provider reasoning phase produced {} chars", reasoning.len());
        }
        if let Some(reason) = &choice.finish_reason {
            tracing::debug!("Completion finish_reason: {}", reason);
        }

        choice
            .message
            .content
            .ok_or_else(|| LLMError::InvalidResponse("first choice has no message content".into()))
    }
}
