use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding resource not found at path: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed word vector on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("vector dimension mismatch on line {line}: expected {expected}, got {actual}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid corpus statistics: {reason}")]
    InvalidCorpusStats { reason: String },

    #[error("failed to parse corpus statistics: {0}")]
    CorpusParse(#[from] serde_json::Error),
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ReadFailed {
            path: PathBuf::new(),
            source: err,
        }
    }
}
