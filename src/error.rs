//! Request-level error type.

use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::generation::GenerationError;

/// Failures that abort an evaluation request.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// `params` did not have the expected structure.
    #[error("invalid evaluation params: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The feedback rewrite call failed; there is no fallback text.
    #[error("feedback rewrite failed: {0}")]
    Rewrite(#[from] GenerationError),

    /// Embedding table or corpus statistics could not be loaded.
    #[error("failed to load lexical resources: {0}")]
    Resources(#[from] EmbeddingError),
}
