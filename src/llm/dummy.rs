use super::{LLMBuilder, LLM};
use crate::{LLMError, Model};
use std::sync::{Arc, Mutex};

/// Answers every prompt with a fixed completion and remembers what it was asked.
#[derive(Debug, Clone, Default)]
pub struct DummyLLMBuilder {
    completion: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl DummyLLMBuilder {
    pub fn new(completion: impl Into<String>) -> Self {
        DummyLLMBuilder {
            completion: completion.into(),
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl LLMBuilder for DummyLLMBuilder {
    type Built = DummyLLM;

    async fn build(&self, _model: Model, _api_key: &str) -> Result<Self::Built, LLMError> {
        Ok(DummyLLM {
            completion: self.completion.clone(),
            prompts: self.prompts.clone(),
        })
    }
}

pub struct DummyLLM {
    completion: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl LLM for DummyLLM {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_owned());
        }
        Ok(self.completion.clone())
    }
}
