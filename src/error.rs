use std::path::PathBuf;

use thiserror::Error;

/// Failures reading preset or engine configuration from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("custom preset {0:?} reuses a built-in preset name")]
    ReservedPresetName(String),
}
