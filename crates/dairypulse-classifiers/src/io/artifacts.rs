//! Loading of the offline-fitted artifacts (encoders, scaler, model).
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::PriceRange;
use crate::features::FeatureEncoder;
use crate::preprocessing::{LabelEncoder, PriceScaler};

/// Locations of the four artifact files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub month_encoder: PathBuf,
    pub product_encoder: PathBuf,
    pub price_scaler: PathBuf,
    pub demand_model: PathBuf,
}

impl ArtifactPaths {
    pub const MONTH_ENCODER: &'static str = "month_encoder.json";
    pub const PRODUCT_ENCODER: &'static str = "product_encoder.json";
    pub const PRICE_SCALER: &'static str = "price_scaler.json";
    pub const DEMAND_MODEL: &'static str = "demand_model.json";

    /// Default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            month_encoder: dir.join(Self::MONTH_ENCODER),
            product_encoder: dir.join(Self::PRODUCT_ENCODER),
            price_scaler: dir.join(Self::PRICE_SCALER),
            demand_model: dir.join(Self::DEMAND_MODEL),
        }
    }
}

/// Deserialize a JSON artifact, attaching the path to any error.
pub fn read_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open artifact: {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse artifact: {}", path.display()))?;
    Ok(value)
}

/// Load both label encoders and the price scaler.
pub fn load_feature_encoder(paths: &ArtifactPaths, price_range: PriceRange) -> Result<FeatureEncoder> {
    price_range.validate().map_err(anyhow::Error::msg)?;
    let month: LabelEncoder = read_json(&paths.month_encoder)?;
    let product: LabelEncoder = read_json(&paths.product_encoder)?;
    let price: PriceScaler = read_json(&paths.price_scaler)?;

    log::info!(
        "Loaded encoders: {} months, {} products; price scaler {:?}",
        month.len(),
        product.len(),
        price
    );
    Ok(FeatureEncoder::new(month, product, price, price_range))
}
