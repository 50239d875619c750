use std::path::Path;

use anyhow::{anyhow, Result};
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use crate::error::PredictError;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::check_shape;

/// Gradient Boosting Decision Tree (GBDT) classifier
///
/// Wraps a model trained with a log-likelihood loss, whose prediction is
/// the probability of the positive class. Class `1` is returned when
/// that probability reaches `threshold`.
pub struct GBDTClassifier {
    model: GBDT,
    n_features: usize,
    threshold: f32,
}

impl GBDTClassifier {
    pub fn new(model: GBDT, n_features: usize, threshold: f32) -> Self {
        GBDTClassifier {
            model,
            n_features,
            threshold,
        }
    }

    /// Load a model file written by `GBDT::save_model`.
    pub fn load<P: AsRef<Path>>(path: P, n_features: usize, threshold: f32) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .to_str()
            .ok_or_else(|| anyhow!("Non UTF-8 model path: {}", path.display()))?;
        let model = GBDT::load_model(filename)
            .map_err(|e| anyhow!("Failed to load GBDT model {}: {}", path.display(), e))?;
        Ok(Self::new(model, n_features, threshold))
    }

    /// Positive-class probability for one feature row.
    pub fn predict_proba(&self, x: &[f32]) -> crate::error::Result<f32> {
        check_shape(self, x)?;
        let mut test_x = DataVec::new();
        test_x.push(Data::new_training_data(x.to_vec(), 1.0, 0.0, None));
        let predictions = self.model.predict(&test_x);
        predictions
            .first()
            .copied()
            .filter(|p| p.is_finite())
            .ok_or_else(|| PredictError::ModelInference("GBDT returned no prediction".to_string()))
    }
}

impl ClassifierModel for GBDTClassifier {
    fn predict(&self, x: &[f32]) -> crate::error::Result<i64> {
        let p = self.predict_proba(x)?;
        Ok(if p >= self.threshold { 1 } else { 0 })
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}
