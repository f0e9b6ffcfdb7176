use super::{LLMBuilder, LLM, MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::utils::preview;
use crate::{LLMError, Model};
use anyhow::anyhow;
use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use std::error::Error;

/// Builder for OpenAI-compatible chat completion APIs (Groq by default)
pub struct OpenAiChatBuilder {
    api_base: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiChatBuilder {
    pub fn new(api_base: String) -> Self {
        OpenAiChatBuilder {
            api_base,
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

impl LLMBuilder for OpenAiChatBuilder {
    type Built = OpenAiChat;

    async fn build(&self, model: Model, api_key: &str) -> Result<Self::Built, LLMError> {
        let config = OpenAIConfig::new()
            .with_api_base(&self.api_base)
            .with_api_key(api_key);

        Ok(OpenAiChat {
            client: Client::with_config(config),
            model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        })
    }
}

pub struct OpenAiChat {
    client: Client<OpenAIConfig>,
    model: Model,
    temperature: f32,
    max_tokens: u32,
}

impl LLM for OpenAiChat {
    #[allow(deprecated)]
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        log::info!(
            r#"Sending prompt to {} "{}""#,
            self.model.id(),
            preview(prompt, 40)
        );

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()];

        let req = CreateChatCompletionRequestArgs::default()
            .model(self.model.id())
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(req).await?;

        if let Some(usage) = response.usage.as_ref() {
            log::debug!(
                "Completion usage: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            LLMError::InteractionError(anyhow!("Response contains no choices"))
        })?;

        let content = choice.message.content.ok_or_else(|| {
            LLMError::InteractionError(anyhow!(
                "Response message has no content (finish reason: {:?})",
                choice.finish_reason
            ))
        })?;

        log::info!("Completion received ({} chars)", content.chars().count());
        Ok(content.trim().to_owned())
    }
}

impl From<OpenAIError> for LLMError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => LLMError::ConnectionError(if let Some(e) = e.source() {
                anyhow!("{e}")
            } else {
                e.into()
            }),
            OpenAIError::ApiError(e) => LLMError::ApiError(anyhow!("{e}")),
            OpenAIError::JSONDeserialize(e) => LLMError::InteractionError(e.into()),
            OpenAIError::StreamError(e) => LLMError::ConnectionError(anyhow!("{e}")),
            other => LLMError::OtherError(anyhow!("{other}")),
        }
    }
}
