use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::utils::check_shape;

/// Binary linear classifier: predicts `classes[1]` when `w·x + b > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub coefficients: Vec<f32>,
    pub intercept: f32,
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
}

fn default_classes() -> [i64; 2] {
    [0, 1]
}

impl LogisticClassifier {
    pub fn new(coefficients: Vec<f32>, intercept: f32) -> Self {
        Self {
            coefficients,
            intercept,
            classes: default_classes(),
        }
    }

    /// Signed distance to the decision boundary.
    pub fn decision_function(&self, x: &[f32]) -> Result<f32> {
        check_shape(self, x)?;
        let w = Array1::from_vec(self.coefficients.clone());
        let x = Array1::from_vec(x.to_vec());
        let z = w.dot(&x) + self.intercept;
        if !z.is_finite() {
            return Err(PredictError::ModelInference(format!(
                "non-finite decision value {}",
                z
            )));
        }
        Ok(z)
    }

    /// Probability of `classes[1]`.
    pub fn predict_proba(&self, x: &[f32]) -> Result<f32> {
        let z = self.decision_function(x)?;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl ClassifierModel for LogisticClassifier {
    fn predict(&self, x: &[f32]) -> Result<i64> {
        let z = self.decision_function(x)?;
        Ok(if z > 0.0 { self.classes[1] } else { self.classes[0] })
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn name(&self) -> &str {
        "logistic"
    }
}
