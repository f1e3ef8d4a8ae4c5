//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a lexicon or spelling table at start-up.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("category `{0}` not found in lexicon")]
    UnknownCategory(String),

    #[error("lexicon contains no terms")]
    Empty,
}

/// Errors raised while aggregating matches into a score.
///
/// The predictor recovers these into an empty result; they never reach
/// callers of [`AgePredictor::predict`](crate::AgePredictor::predict).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("cannot weight matches against a word count of zero")]
    ZeroWordCount,
}
