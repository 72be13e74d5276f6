//! Name generation service

use async_trait::async_trait;
use std::time::Instant;

use super::client::LLMClient;
use super::models::LLMError;
use super::scenarios::naming::{build_naming_prompt, parse_generated_names};
use crate::config::LlmConfig;
use crate::models::GeneratedName;

/// Generates candidate Chinese names for a person.
///
/// Each call is independent and stateless. Implementations return a
/// non-empty list or an [`LLMError`] when the provider call itself fails.
#[async_trait]
pub trait NameGenerationService: Send + Sync {
    async fn generate(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Vec<GeneratedName>, LLMError>;
}

/// Provider-backed implementation
pub struct NameGenerationServiceImpl {
    client: LLMClient,
}

impl NameGenerationServiceImpl {
    pub fn new(config: LlmConfig) -> Self {
        Self { client: LLMClient::new(config) }
    }
}

#[async_trait]
impl NameGenerationService for NameGenerationServiceImpl {
    async fn generate(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Vec<GeneratedName>, LLMError> {
        let request_id = uuid::Uuid::new_v4();
        let started = Instant::now();
        tracing::info!(
            %request_id,
            model = self.client.model(),
            name_len = name.chars().count(),
            has_description = description.is_some_and(|d| !d.is_empty()),
            "Generating Chinese names"
        );

        let prompt = build_naming_prompt(name, description);
        let content = self.client.complete(&prompt).await.inspect_err(|e| {
            tracing::error!(%request_id, "Name generation failed: {}", e);
        })?;

        let names = parse_generated_names(&content);
        tracing::info!(
            %request_id,
            count = names.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Name generation completed"
        );
        Ok(names)
    }
}
