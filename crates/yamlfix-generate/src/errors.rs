use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while writing fixtures.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for fallible fixture operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
