//! Encode + classify: the inference half of the pipeline.
use std::fmt;

use anyhow::Result as AnyResult;
use serde::{Deserialize, Serialize};

use crate::config::{ModelConfig, PriceRange};
use crate::error::{PredictError, Result};
use crate::features::{FeatureEncoder, FeatureVector, PredictionRequest};
use crate::io::{load_feature_encoder, ArtifactPaths};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::load_model;
use crate::models::utils::check_shape;

/// Binary demand label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandLabel {
    Low,
    High,
}

impl DemandLabel {
    /// Map the model's raw class: `0 -> Low`, `1 -> High`.
    pub fn from_class(class: i64) -> Result<Self> {
        match class {
            0 => Ok(DemandLabel::Low),
            1 => Ok(DemandLabel::High),
            other => Err(PredictError::ModelInference(format!(
                "expected class 0 or 1, model returned {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLabel::Low => "Low",
            DemandLabel::High => "High",
        }
    }
}

impl fmt::Display for DemandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: DemandLabel,
    pub features: FeatureVector,
}

/// Classify an encoded feature vector.
pub fn predict_demand(model: &dyn ClassifierModel, features: &FeatureVector) -> Result<DemandLabel> {
    let x = features.as_slice();
    check_shape(model, x)?;
    DemandLabel::from_class(model.predict(x)?)
}

/// Fitted encoder and classifier, loaded once and shared read-only.
pub struct DemandPredictor {
    encoder: FeatureEncoder,
    model: Box<dyn ClassifierModel>,
}

impl DemandPredictor {
    pub fn new(encoder: FeatureEncoder, model: Box<dyn ClassifierModel>) -> Self {
        Self { encoder, model }
    }

    /// Load every artifact named in `paths`.
    pub fn load(
        paths: &ArtifactPaths,
        model_config: &ModelConfig,
        price_range: PriceRange,
    ) -> AnyResult<Self> {
        let encoder = load_feature_encoder(paths, price_range)?;
        let model = load_model(model_config, &paths.demand_model)?;
        Ok(Self::new(encoder, model))
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let features = self.encoder.encode(request)?;
        let label = predict_demand(self.model.as_ref(), &features)?;
        log::info!(
            "Predicted {} demand for {} / {} at {}",
            label,
            request.month,
            request.product,
            request.price
        );
        Ok(PredictionResult { label, features })
    }

    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    pub fn model(&self) -> &dyn ClassifierModel {
        self.model.as_ref()
    }
}

impl fmt::Debug for DemandPredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemandPredictor")
            .field("encoder", &self.encoder)
            .field("model", &self.model.name())
            .finish()
    }
}
