use dairypulse_classifiers::{DemandLabel, PredictionRequest};

use crate::client::TextGenerator;
use crate::config::GenerationSettings;
use crate::error::ExplainError;
use crate::prompt::{build_prompt, ChatRequest, SYSTEM_PROMPT};

/// Asks a [`TextGenerator`] to explain one prediction.
pub struct Explainer<G> {
    generator: G,
    settings: GenerationSettings,
}

impl<G: TextGenerator> Explainer<G> {
    pub fn new(generator: G, settings: GenerationSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// The exact request `explain` would send.
    pub fn chat_request(&self, request: &PredictionRequest, label: DemandLabel) -> ChatRequest {
        ChatRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: build_prompt(request, label, &self.settings.currency_symbol),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// One outbound call per invocation; no retry, no caching.
    pub fn explain(
        &self,
        request: &PredictionRequest,
        label: DemandLabel,
    ) -> Result<String, ExplainError> {
        let chat = self.chat_request(request, label);
        let start = std::time::Instant::now();
        let result = self.generator.complete(&chat);
        match &result {
            Ok(text) => log::info!(
                "Explanation received in {:?} ({} chars)",
                start.elapsed(),
                text.len()
            ),
            Err(e) => log::warn!("Explanation failed after {:?}: {}", start.elapsed(), e),
        }
        result
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }
}
