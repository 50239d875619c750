use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Central configuration for the demand model in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    pub model_type: ModelType,

    /// Probability cut-off for models that emit a score rather than a class.
    pub decision_threshold: f32,
}

/// Supported serialized model formats.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// Linear model: coefficients + intercept.
    #[default]
    Logistic,
    /// Decision tree ensemble exported as per-tree node arrays.
    Forest,
    /// Gradient boosted trees saved by the `gbdt` crate.
    Gbdt,
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" | "logreg" | "logistic_regression" => Ok(ModelType::Logistic),
            "forest" | "random_forest" | "tree" | "decision_tree" => Ok(ModelType::Forest),
            "gbdt" => Ok(ModelType::Gbdt),
            _ => Err(format!(
                "Unknown model type: {}. Expected one of: logistic, forest, gbdt",
                s
            )),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelType::Logistic => "logistic",
            ModelType::Forest => "forest",
            ModelType::Gbdt => "gbdt",
        };
        write!(f, "{}", s)
    }
}

impl ModelConfig {
    pub fn new(model_type: ModelType, decision_threshold: f32) -> Self {
        Self {
            model_type,
            decision_threshold,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::Logistic,
            decision_threshold: 0.5,
        }
    }
}

/// What to do with a raw price outside [`PriceRange`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Fail with `InvalidInput`.
    #[default]
    Reject,
    /// Let the affine scaler extrapolate.
    Extrapolate,
}

/// Inclusive range of accepted raw prices.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PriceRange {
    pub min: f32,
    pub max: f32,
    pub policy: RangePolicy,
}

impl PriceRange {
    pub fn new(min: f32, max: f32, policy: RangePolicy) -> Self {
        Self { min, max, policy }
    }

    pub fn contains(&self, price: f32) -> bool {
        price >= self.min && price <= self.max
    }

    /// Both bounds finite and `min <= max`.
    pub fn validate(&self) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(format!(
                "price range bounds must be finite, got {} to {}",
                self.min, self.max
            ));
        }
        if self.min > self.max {
            return Err(format!(
                "price range minimum {} is greater than maximum {}",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 500.0,
            policy: RangePolicy::Reject,
        }
    }
}
