use std::fmt::Write;

use dairypulse_classifiers::{DemandLabel, FeatureEncoder};

use crate::predict::run::PredictionOutcome;

pub fn label_banner(label: DemandLabel) -> &'static str {
    match label {
        DemandLabel::High => "📈 High Demand",
        DemandLabel::Low => "📉 Low Demand",
    }
}

/// Plain-text rendering of a prediction and its explanation.
pub fn render_outcome(outcome: &PredictionOutcome) -> String {
    let mut out = String::new();
    let req = &outcome.request;

    let _ = writeln!(out, "📊 Prediction Result");
    let _ = writeln!(
        out,
        "Month: {} | Product: {} | Price per unit: {}",
        req.month, req.product, req.price
    );
    let _ = writeln!(out, "{}", label_banner(outcome.result.label));

    match &outcome.explanation {
        Some(Ok(text)) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "🧠 AI Explanation");
            let _ = writeln!(out, "{}", text);
        }
        Some(Err(e)) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "⚠️ Explanation unavailable: {}", e);
        }
        None => {}
    }
    out
}

/// The labels each encoder accepts, one per line.
pub fn render_classes(encoder: &FeatureEncoder) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Months:");
    for month in encoder.months() {
        let _ = writeln!(out, "  {}", month);
    }
    let _ = writeln!(out, "Dairy products:");
    for product in encoder.products() {
        let _ = writeln!(out, "  {}", product);
    }
    let range = encoder.price_range();
    let _ = writeln!(out, "Price per unit: {} to {}", range.min, range.max);
    out
}
