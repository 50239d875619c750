use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use dairypulse_classifiers::config::{ModelConfig, ModelType, PriceRange};
use dairypulse_classifiers::io::ArtifactPaths;
use dairypulse_explain::LlmConfig;

use crate::util::validate_artifacts_dir;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PredictConfig {
    pub version: String,
    pub artifacts_dir: String,
    pub model: ModelConfig,
    pub price_range: PriceRange,
    /// Ask the LLM for an explanation after each prediction.
    pub explain: bool,
    pub llm: LlmConfig,
}

impl Default for PredictConfig {
    fn default() -> Self {
        PredictConfig {
            version: clap::crate_version!().to_string(),
            artifacts_dir: String::from("artifacts"),
            model: ModelConfig::default(),
            price_range: PriceRange::default(),
            explain: true,
            llm: LlmConfig::default(),
        }
    }
}

impl PredictConfig {
    /// Read a JSON config, field by field, falling back to defaults.
    pub fn from_json(config_json: &str) -> Result<Self> {
        let partial: serde_json::Value = serde_json::from_str(config_json)?;
        let mut config = PredictConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(artifacts_dir);
        load_or_default!(model);
        load_or_default!(price_range);
        load_or_default!(explain);
        load_or_default!(llm);

        Ok(config)
    }

    /// Load the optional config file, then apply CLI overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                let config_json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                Self::from_json(&config_json)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            }
            None => PredictConfig::default(),
        };

        // Apply CLI overrides
        if let Some(dir) = matches.try_get_one::<String>("artifacts_dir").ok().flatten() {
            config.artifacts_dir = dir.clone();
        }
        if let Some(model_type) = matches.try_get_one::<String>("model_type").ok().flatten() {
            config.model.model_type = ModelType::from_str(model_type).map_err(anyhow::Error::msg)?;
        }
        if matches.try_get_one::<bool>("no_explain").ok().flatten() == Some(&true) {
            config.explain = false;
        }

        config
            .price_range
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid price_range in configuration: {}", e))?;
        validate_artifacts_dir(&config.artifacts_dir)?;
        Ok(config)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.artifacts_dir)
    }
}
