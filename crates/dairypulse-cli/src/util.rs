use anyhow::Result;
use std::path::Path;

use dairypulse_classifiers::io::ArtifactPaths;

/// Check that `path` is an existing JSON file.
pub fn validate_json_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    if ext.as_deref() != Some("json") {
        anyhow::bail!("File must have a .json extension: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    Ok(())
}

/// Check that the artifact directory exists and holds the encoder files.
///
/// The demand model is not checked here since its format depends on the
/// configured model type.
pub fn validate_artifacts_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        anyhow::bail!("Artifacts directory does not exist: {}", dir.display());
    }
    let paths = ArtifactPaths::in_dir(dir);
    for file in [&paths.month_encoder, &paths.product_encoder, &paths.price_scaler] {
        validate_json_file(file)?;
    }
    Ok(())
}
