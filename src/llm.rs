pub mod dummy;
pub mod openai;

use crate::{LLMError, Model};

pub const TEMPERATURE: f32 = 0.3;
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

pub trait LLMBuilder {
    type Built: LLM;

    async fn build(&self, model: Model, api_key: &str) -> Result<Self::Built, LLMError>;
}

pub trait LLM {
    /// Sends the prompt as a single user message and returns the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, LLMError>;
}
