//! Prompt construction for the explanation request.
use serde::{Deserialize, Serialize};

use dairypulse_classifiers::{DemandLabel, PredictionRequest};

pub const SYSTEM_PROMPT: &str =
    "You are a friendly AI assistant that explains demand predictions in simple language.";

/// One chat-completion request: a system turn and a user turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// User prompt embedding the human-readable inputs and the predicted label.
pub fn build_prompt(request: &PredictionRequest, label: DemandLabel, currency: &str) -> String {
    format!(
        "A dairy demand prediction system predicted {label} demand.\n\
         \n\
         Month: {month}\n\
         Dairy product: {product}\n\
         Price per unit: {currency}{price}\n\
         \n\
         Explain the demand prediction in 3 to 4 simple sentences.\n\
         Consider seasonality, pricing, and consumer behavior.\n\
         Use clear and student-friendly language.",
        label = label.as_str().to_lowercase(),
        month = request.month,
        product = request.product,
        currency = currency,
        price = request.price,
    )
}
