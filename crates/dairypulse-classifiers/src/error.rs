use thiserror::Error;

/// Errors raised while encoding a request or running the classifier.
///
/// All of these abort the current prediction only; loaded artifacts stay
/// valid and the next request can proceed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    /// A label that the fitted encoder has never seen.
    #[error("Unknown {encoder} category: '{label}'")]
    UnknownCategory { encoder: String, label: String },

    /// A numeric input that is not accepted (non-finite or outside the price range).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The classifier rejected the feature vector or produced an unexpected class.
    #[error("Model inference failed: {0}")]
    ModelInference(String),
}

impl PredictError {
    pub fn unknown_category(encoder: &str, label: &str) -> Self {
        PredictError::UnknownCategory {
            encoder: encoder.to_string(),
            label: label.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;
