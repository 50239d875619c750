use crate::error::{PredictError, Result};
use crate::models::classifier_trait::ClassifierModel;

/// Reject feature rows whose length differs from what the model was fitted on.
pub(crate) fn check_shape<M: ClassifierModel + ?Sized>(model: &M, x: &[f32]) -> Result<()> {
    if x.len() != model.n_features() {
        return Err(PredictError::ModelInference(format!(
            "{} model expects {} features, got {}",
            model.name(),
            model.n_features(),
            x.len()
        )));
    }
    if let Some(pos) = x.iter().position(|v| !v.is_finite()) {
        return Err(PredictError::ModelInference(format!(
            "feature {} is not finite ({})",
            pos, x[pos]
        )));
    }
    Ok(())
}
