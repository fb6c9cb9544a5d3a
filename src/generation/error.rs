use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request to '{model}' failed: {reason}")]
    RequestFailed { model: String, reason: String },

    #[error("model '{model}' returned no text")]
    EmptyCompletion { model: String },

    #[error("text generation unavailable: {reason}")]
    Unavailable { reason: String },
}
