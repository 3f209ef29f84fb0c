use super::types::*;
use crate::{Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        // Convert our types to OpenAI types
        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(max_tokens) = request.max_tokens {
            request_builder.max_tokens(max_tokens);
        }

        if let Some(temperature) = request.temperature {
            request_builder.temperature(temperature);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        // Convert OpenAI response to our types
        let choices: Vec<Choice> = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChatMessage {
                    role: choice.message.role.to_string(),
                    content: choice.message.content.unwrap_or_default(),
                },
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(CompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}
