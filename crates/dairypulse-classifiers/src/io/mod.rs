pub mod artifacts;

pub use artifacts::{load_feature_encoder, read_json, ArtifactPaths};
