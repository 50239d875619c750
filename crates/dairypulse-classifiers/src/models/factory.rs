use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{ModelConfig, ModelType};
use crate::features::N_FEATURES;
use crate::io::read_json;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::forest::ForestClassifier;
use crate::models::gbdt::GBDTClassifier;
use crate::models::logistic::LogisticClassifier;

/// Load a boxed classifier model of the configured type from `path`.
pub fn load_model<P: AsRef<Path>>(
    params: &ModelConfig,
    path: P,
) -> Result<Box<dyn ClassifierModel>> {
    let path = path.as_ref();
    let model: Box<dyn ClassifierModel> = match params.model_type {
        ModelType::Logistic => Box::new(read_json::<LogisticClassifier, _>(path)?),
        ModelType::Forest => Box::new(read_json::<ForestClassifier, _>(path)?),
        ModelType::Gbdt => Box::new(
            GBDTClassifier::load(path, N_FEATURES, params.decision_threshold)
                .with_context(|| format!("Failed to load demand model: {}", path.display()))?,
        ),
    };

    if model.n_features() != N_FEATURES {
        // not fatal here; every prediction will fail with a shape error
        log::warn!(
            "Demand model {} expects {} features, the encoder produces {}",
            path.display(),
            model.n_features(),
            N_FEATURES
        );
    }
    log::info!("Loaded {} demand model from {}", model.name(), path.display());
    Ok(model)
}
