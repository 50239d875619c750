use thiserror::Error;

/// Failures of the explanation step.
///
/// None of these invalidate an already computed prediction; callers show
/// the label and report the explanation failure separately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplainError {
    /// Network error, timeout, or a non-auth HTTP failure.
    #[error("Explanation service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service rejected the bearer credential.
    #[error("Explanation service rejected the credential: {0}")]
    Authentication(String),

    /// The response did not contain a completion text.
    #[error("Malformed explanation response: {0}")]
    MalformedResponse(String),

    /// No credential configured; raised at start-up, never per request.
    #[error("Missing API token: environment variable {0} is not set")]
    MissingCredential(String),
}
