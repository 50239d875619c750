//! dairypulse-explain: natural-language explanations of demand predictions.
//!
//! Builds a fixed-template prompt from the user's inputs and the predicted
//! label and sends it to a hosted chat-completion model. The service sits
//! behind the `TextGenerator` trait; `HfChatClient` is the HTTP
//! implementation.
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod explainer;
pub mod prompt;

pub use client::{HfChatClient, TextGenerator};
pub use config::{GenerationSettings, LlmConfig};
pub use credentials::ApiToken;
pub use error::ExplainError;
pub use explainer::Explainer;
