use std::fmt;

use crate::error::ExplainError;

/// Bearer token for the explanation service. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        ApiToken(token.into())
    }

    /// Read the token from `var`; missing or blank is a configuration error.
    pub fn from_env(var: &str) -> Result<Self, ExplainError> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(ApiToken(value.trim().to_string())),
            _ => Err(ExplainError::MissingCredential(var.to_string())),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}
