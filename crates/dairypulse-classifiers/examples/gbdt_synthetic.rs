//! Fit encoders, a scaler and a GBDT model on synthetic dairy sales, write
//! them as an artifact directory, then load it back and predict.
//!
//! Usage: cargo run --example gbdt_synthetic -- [output_dir]
use anyhow::Result;
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use dairypulse_classifiers::config::{ModelConfig, ModelType, PriceRange};
use dairypulse_classifiers::io::ArtifactPaths;
use dairypulse_classifiers::preprocessing::{EncoderClasses, LabelEncoder, PriceScaler};
use dairypulse_classifiers::{DemandPredictor, PredictionRequest};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const PRODUCTS: [&str; 4] = ["Milk", "Curd", "Ice Cream", "Paneer"];

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/gbdt_synthetic".to_string());
    std::fs::create_dir_all(&out_dir)?;

    // Synthetic sales: demand is high when the price is low, and ice cream
    // sells better in the summer months.
    let mut rows = Vec::new();
    for (m, month) in MONTHS.iter().enumerate() {
        for product in PRODUCTS.iter() {
            for price in (10..=500).step_by(35) {
                let summer = (3..=7).contains(&m);
                let mut high = price < 180;
                if *product == "Ice Cream" {
                    high = summer && price < 300;
                }
                rows.push((*month, *product, price as f32, high));
            }
        }
    }
    println!("Synthetic rows: {}", rows.len());

    let month_enc = LabelEncoder::fit(rows.iter().map(|r| r.0));
    let product_enc = LabelEncoder::fit(rows.iter().map(|r| r.1));
    let prices: Vec<f32> = rows.iter().map(|r| r.2).collect();
    let scaler = PriceScaler::fit_standard(&prices);

    let mut config = Config::new();
    config.set_feature_size(3);
    config.set_shrinkage(0.1);
    config.set_max_depth(4);
    config.set_iterations(50);
    config.set_loss("LogLikelyhood");

    let mut train_x = DataVec::new();
    for (month, product, price, high) in &rows {
        let features = vec![
            month_enc.transform(month).unwrap_or_default() as f32,
            product_enc.transform(product).unwrap_or_default() as f32,
            scaler.transform(*price),
        ];
        let label = if *high { 1.0 } else { -1.0 };
        train_x.push(Data::new_training_data(features, 1.0, label, None));
    }

    let mut gbdt = GBDT::new(&config);
    gbdt.fit(&mut train_x);

    let paths = ArtifactPaths::in_dir(&out_dir);
    std::fs::write(
        &paths.month_encoder,
        serde_json::to_string_pretty(&EncoderClasses::from(month_enc))?,
    )?;
    std::fs::write(
        &paths.product_encoder,
        serde_json::to_string_pretty(&EncoderClasses::from(product_enc))?,
    )?;
    std::fs::write(&paths.price_scaler, serde_json::to_string_pretty(&scaler)?)?;
    let model_path = paths.demand_model.to_string_lossy().to_string();
    gbdt.save_model(&model_path)
        .map_err(|e| anyhow::anyhow!("Failed to save model: {}", e))?;
    println!("Artifacts written to {}", out_dir);

    let predictor = DemandPredictor::load(
        &paths,
        &ModelConfig::new(ModelType::Gbdt, 0.5),
        PriceRange::default(),
    )?;
    for (month, product, price) in [
        ("January", "Milk", 50.0),
        ("January", "Milk", 450.0),
        ("June", "Ice Cream", 120.0),
        ("December", "Ice Cream", 120.0),
    ] {
        let result = predictor.predict(&PredictionRequest::new(month, product, price))?;
        println!("{:<9} {:<10} {:>5} -> {}", month, product, price, result.label);
    }
    Ok(())
}
