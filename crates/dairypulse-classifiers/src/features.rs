//! Feature encoding: turns a `PredictionRequest` into the fixed-order
//! feature vector `[month_code, product_code, scaled_price]` the demand
//! model was fitted on.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::config::{PriceRange, RangePolicy};
use crate::error::{PredictError, Result};
use crate::preprocessing::{LabelEncoder, PriceScaler};

/// Number of features consumed by the demand model.
pub const N_FEATURES: usize = 3;

/// Raw user selections for one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub month: String,
    pub product: String,
    pub price: f32,
}

impl PredictionRequest {
    pub fn new(month: impl Into<String>, product: impl Into<String>, price: f32) -> Self {
        Self {
            month: month.into(),
            product: product.into(),
            price,
        }
    }
}

/// Encoded features in column order: month code, product code, scaled price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; N_FEATURES]);

impl FeatureVector {
    pub fn new(month_code: usize, product_code: usize, scaled_price: f32) -> Self {
        FeatureVector([month_code as f32, product_code as f32, scaled_price])
    }

    pub fn month_code(&self) -> usize {
        self.0[0] as usize
    }

    pub fn product_code(&self) -> usize {
        self.0[1] as usize
    }

    pub fn scaled_price(&self) -> f32 {
        self.0[2]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_array(&self) -> Array1<f32> {
        Array1::from_vec(self.0.to_vec())
    }
}

/// The fitted encoders and scaler, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    month: LabelEncoder,
    product: LabelEncoder,
    price: PriceScaler,
    price_range: PriceRange,
}

impl FeatureEncoder {
    pub fn new(
        month: LabelEncoder,
        product: LabelEncoder,
        price: PriceScaler,
        price_range: PriceRange,
    ) -> Self {
        Self {
            month,
            product,
            price,
            price_range,
        }
    }

    /// Encode a request. Unknown labels and rejected prices are errors,
    /// never silently defaulted.
    pub fn encode(&self, request: &PredictionRequest) -> Result<FeatureVector> {
        let month_code = self
            .month
            .transform(&request.month)
            .ok_or_else(|| PredictError::unknown_category("month", &request.month))?;
        let product_code = self
            .product
            .transform(&request.product)
            .ok_or_else(|| PredictError::unknown_category("product", &request.product))?;
        let scaled_price = self.scale_price(request.price)?;

        let features = FeatureVector::new(month_code, product_code, scaled_price);
        log::debug!(
            "Encoded ({}, {}, {}) -> {:?}",
            request.month,
            request.product,
            request.price,
            features.as_slice()
        );
        Ok(features)
    }

    fn scale_price(&self, price: f32) -> Result<f32> {
        if !price.is_finite() {
            return Err(PredictError::InvalidInput(format!(
                "price must be a finite number, got {}",
                price
            )));
        }
        if !self.price_range.contains(price) {
            match self.price_range.policy {
                RangePolicy::Reject => {
                    return Err(PredictError::InvalidInput(format!(
                        "price {} is outside the accepted range {}..={}",
                        price, self.price_range.min, self.price_range.max
                    )));
                }
                RangePolicy::Extrapolate => {
                    log::warn!(
                        "Price {} outside {}..={}, extrapolating",
                        price,
                        self.price_range.min,
                        self.price_range.max
                    );
                }
            }
        }
        Ok(self.price.transform(price))
    }

    pub fn decode_month(&self, code: usize) -> Result<&str> {
        self.month
            .inverse_transform(code)
            .ok_or_else(|| PredictError::unknown_category("month", &code.to_string()))
    }

    pub fn decode_product(&self, code: usize) -> Result<&str> {
        self.product
            .inverse_transform(code)
            .ok_or_else(|| PredictError::unknown_category("product", &code.to_string()))
    }

    pub fn months(&self) -> &[String] {
        self.month.classes()
    }

    pub fn products(&self) -> &[String] {
        self.product.classes()
    }

    pub fn price_range(&self) -> &PriceRange {
        &self.price_range
    }
}
