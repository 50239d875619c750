use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sampling parameters and prompt options for an explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    /// Sampling temperature; tunable.
    pub temperature: f32,
    pub currency_symbol: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 120,
            temperature: 0.6,
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Connection settings for the hosted chat-completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the bearer token.
    pub token_env: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    #[serde(flatten)]
    pub generation: GenerationSettings,
}

impl LlmConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://router.huggingface.co/v1/chat/completions";
    pub const DEFAULT_MODEL: &'static str = "meta-llama/Meta-Llama-3-8B-Instruct";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

    /// Whole-request timeout; `0` means the default.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(non_zero_or(self.timeout_secs, Self::DEFAULT_TIMEOUT_SECS, "timeout_secs"))
    }

    /// Connect timeout; `0` means the default.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(non_zero_or(
            self.connect_timeout_secs,
            Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            "connect_timeout_secs",
        ))
    }
}

fn non_zero_or(secs: u64, default: u64, field: &str) -> u64 {
    if secs == 0 {
        log::warn!("llm.{} is 0, using the default of {} s", field, default);
        default
    } else {
        secs
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            token_env: "HF_TOKEN".to_string(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            generation: GenerationSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_timeouts_are_used() {
        let config = LlmConfig {
            timeout_secs: 3,
            connect_timeout_secs: 1,
            ..LlmConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.connect_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn zero_timeouts_fall_back_to_defaults() {
        let config: LlmConfig =
            serde_json::from_str(r#"{"timeout_secs": 0, "connect_timeout_secs": 0}"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }
}
