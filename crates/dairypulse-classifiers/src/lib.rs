//! dairypulse-classifiers: inference helpers for dairy demand prediction.
//!
//! This crate turns the user's month, product and price selections into
//! the feature vector the offline-trained demand model expects, and runs
//! that model. The fitted label encoders, price scaler and classifier are
//! loaded from JSON (or `gbdt` model files) once at start-up and are
//! read-only afterwards, so a `DemandPredictor` can be shared freely.
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod models;
pub mod predictor;
pub mod preprocessing;

pub use error::PredictError;
pub use features::{FeatureEncoder, FeatureVector, PredictionRequest};
pub use predictor::{DemandLabel, DemandPredictor, PredictionResult};
