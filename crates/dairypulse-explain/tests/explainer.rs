//! Explainer tests against substitute text generators.

use std::cell::RefCell;

use dairypulse_classifiers::{DemandLabel, PredictionRequest};
use dairypulse_explain::prompt::{ChatRequest, SYSTEM_PROMPT};
use dairypulse_explain::{ExplainError, Explainer, GenerationSettings, TextGenerator};

/// Records the last request and replies with a canned result.
struct Recorder {
    reply: Result<String, ExplainError>,
    last: RefCell<Option<ChatRequest>>,
}

impl Recorder {
    fn replying(reply: Result<String, ExplainError>) -> Self {
        Self {
            reply,
            last: RefCell::new(None),
        }
    }
}

impl TextGenerator for Recorder {
    fn complete(&self, request: &ChatRequest) -> Result<String, ExplainError> {
        *self.last.borrow_mut() = Some(request.clone());
        self.reply.clone()
    }
}

fn request() -> PredictionRequest {
    PredictionRequest::new("January", "Milk", 50.0)
}

#[test]
fn low_label_prompt_mentions_low_demand() {
    let generator = Recorder::replying(Ok("Prices are high in January.".to_string()));
    let explainer = Explainer::new(&generator, GenerationSettings::default());

    let text = explainer.explain(&request(), DemandLabel::Low).unwrap();
    assert_eq!(text, "Prices are high in January.");

    let sent = generator.last.borrow().clone().unwrap();
    assert!(sent.user.contains("low demand"), "{}", sent.user);
    assert!(sent.user.contains("Month: January"));
    assert!(sent.user.contains("Dairy product: Milk"));
    assert_eq!(sent.system, SYSTEM_PROMPT);
}

#[test]
fn generation_settings_are_forwarded() {
    let generator = Recorder::replying(Ok("ok".to_string()));
    let settings = GenerationSettings {
        max_tokens: 64,
        temperature: 0.2,
        currency_symbol: "€".to_string(),
    };
    let explainer = Explainer::new(&generator, settings);
    explainer.explain(&request(), DemandLabel::High).unwrap();

    let sent = generator.last.borrow().clone().unwrap();
    assert_eq!(sent.max_tokens, 64);
    assert!((sent.temperature - 0.2).abs() < f32::EPSILON);
    assert!(sent.user.contains("high demand"));
    assert!(sent.user.contains("Price per unit: €50"));
}

#[test]
fn default_settings_match_demo_values() {
    let settings = GenerationSettings::default();
    assert_eq!(settings.max_tokens, 120);
    assert!((settings.temperature - 0.6).abs() < 1e-6);
}

#[test]
fn generator_errors_propagate_unchanged() {
    let generator = Recorder::replying(Err(ExplainError::Authentication("HTTP 401".to_string())));
    let explainer = Explainer::new(Box::new(generator) as Box<dyn TextGenerator>, GenerationSettings::default());
    let err = explainer.explain(&request(), DemandLabel::High).unwrap_err();
    assert_eq!(err, ExplainError::Authentication("HTTP 401".to_string()));
}

#[test]
fn chat_request_is_deterministic() {
    let generator = Recorder::replying(Ok(String::new()));
    let explainer = Explainer::new(&generator, GenerationSettings::default());
    assert_eq!(
        explainer.chat_request(&request(), DemandLabel::Low),
        explainer.chat_request(&request(), DemandLabel::Low)
    );
}
