use crate::error::Result;

/// A small trait abstraction over pre-fitted classifier models.
///
/// Implementations are immutable once loaded and must be deterministic:
/// identical feature rows always yield the same class.
pub trait ClassifierModel: Send + Sync {
    /// Predict the raw class code for a single feature row.
    fn predict(&self, x: &[f32]) -> Result<i64>;

    /// Number of features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
