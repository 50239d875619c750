use anyhow::Result;

use dairypulse_classifiers::{DemandPredictor, PredictError, PredictionRequest, PredictionResult};
use dairypulse_explain::{ExplainError, Explainer, HfChatClient, TextGenerator};

use crate::predict::input::PredictConfig;

/// Everything one user action produced.
///
/// The explanation is kept separate from the prediction: a failed
/// explanation never hides an already computed label.
#[derive(Debug)]
pub struct PredictionOutcome {
    pub request: PredictionRequest,
    pub result: PredictionResult,
    /// `None` when explanations are disabled.
    pub explanation: Option<Result<String, ExplainError>>,
}

/// Build the explainer at start-up. A missing token fails here, before
/// any prediction is made.
pub fn build_explainer(config: &PredictConfig) -> Result<Option<Explainer<HfChatClient>>> {
    if !config.explain {
        log::info!("[DairyPulse::Explain] Explanations disabled");
        return Ok(None);
    }
    let client = HfChatClient::from_env(&config.llm)?;
    log::info!(
        "[DairyPulse::Explain] Using {} at {}",
        config.llm.model,
        client.endpoint()
    );
    Ok(Some(Explainer::new(client, config.llm.generation.clone())))
}

/// Encode, classify and (optionally) explain one request.
///
/// Encoding and classification errors abort the action; explanation
/// errors are returned inside the outcome.
pub fn run_prediction<G: TextGenerator>(
    predictor: &DemandPredictor,
    explainer: Option<&Explainer<G>>,
    request: PredictionRequest,
) -> std::result::Result<PredictionOutcome, PredictError> {
    let result = predictor.predict(&request)?;
    let explanation = explainer.map(|e| e.explain(&request, result.label));

    Ok(PredictionOutcome {
        request,
        result,
        explanation,
    })
}
