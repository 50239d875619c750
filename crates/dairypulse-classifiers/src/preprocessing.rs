//! Fitted preprocessing transforms used to build the feature vector.
//!
//! Provides a `LabelEncoder` for categorical inputs (month, product) and a
//! `PriceScaler` for the numeric price. Both are fitted offline, loaded
//! from JSON and never mutated afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Bidirectional mapping between string labels and integer codes.
///
/// The code of a label is its index in `classes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EncoderClasses", into = "EncoderClasses")]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

/// On-disk representation of a [`LabelEncoder`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncoderClasses {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Fit an encoder from raw labels: classes are sorted and de-duplicated.
    ///
    /// Panics if `labels` is empty.
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes: Vec<String> = labels
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        classes.sort();
        classes.dedup();
        assert!(!classes.is_empty(), "LabelEncoder::fit requires at least one label");

        Self::from_classes(classes).expect("sorted, de-duplicated classes are always valid")
    }

    /// Build an encoder that keeps the given class order.
    pub fn from_classes(classes: Vec<String>) -> Result<Self, String> {
        if classes.is_empty() {
            return Err("label encoder has no classes".to_string());
        }
        let mut index = HashMap::with_capacity(classes.len());
        for (code, label) in classes.iter().enumerate() {
            if index.insert(label.clone(), code).is_some() {
                return Err(format!("duplicate class label '{}'", label));
            }
        }
        Ok(Self { classes, index })
    }

    /// Code for `label`, or `None` if the label is outside the fitted domain.
    pub fn transform(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Label for `code`, or `None` if the code is out of range.
    pub fn inverse_transform(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TryFrom<EncoderClasses> for LabelEncoder {
    type Error = String;

    fn try_from(value: EncoderClasses) -> Result<Self, Self::Error> {
        LabelEncoder::from_classes(value.classes)
    }
}

impl From<LabelEncoder> for EncoderClasses {
    fn from(value: LabelEncoder) -> Self {
        EncoderClasses {
            classes: value.classes,
        }
    }
}

/// Affine transform applied to the raw price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceScaler {
    /// `(x - mean) / scale`
    Standard { mean: f32, scale: f32 },
    /// `lo + (x - data_min) * (hi - lo) / (data_max - data_min)`
    MinMax {
        data_min: f32,
        data_max: f32,
        #[serde(default = "default_feature_range")]
        feature_range: (f32, f32),
    },
}

fn default_feature_range() -> (f32, f32) {
    (0.0, 1.0)
}

impl PriceScaler {
    /// Scales smaller than this are treated as 1.0 when transforming.
    const MIN_SCALE: f32 = 1e-6;

    fn effective(scale: f32) -> f32 {
        if scale.abs() < Self::MIN_SCALE {
            1.0
        } else {
            scale
        }
    }

    pub fn transform(&self, x: f32) -> f32 {
        match *self {
            PriceScaler::Standard { mean, scale } => (x - mean) / Self::effective(scale),
            PriceScaler::MinMax {
                data_min,
                data_max,
                feature_range: (lo, hi),
            } => lo + (x - data_min) * (hi - lo) / Self::effective(data_max - data_min),
        }
    }

    /// Fit a standard scaler (population mean/std) from raw prices.
    pub fn fit_standard(values: &[f32]) -> Self {
        assert!(!values.is_empty(), "fit_standard requires at least one value");

        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n;

        PriceScaler::Standard {
            mean,
            scale: var.sqrt(),
        }
    }

    /// Fit a min-max scaler from raw prices.
    pub fn fit_min_max(values: &[f32], feature_range: (f32, f32)) -> Self {
        assert!(!values.is_empty(), "fit_min_max requires at least one value");

        let data_min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let data_max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        PriceScaler::MinMax {
            data_min,
            data_max,
            feature_range,
        }
    }
}
