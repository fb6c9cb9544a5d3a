//! Read-only lexical resources.
//!
//! - [`WordVectors`] is the pretrained embedding table.
//! - [`CorpusStats`] holds word frequencies for information-content weighting.
//!
//! Both are loaded once and shared behind `Arc`; nothing mutates them after load.

/// Corpus frequency statistics.
pub mod corpus;
mod error;
/// Word vector table.
pub mod vectors;


pub use corpus::CorpusStats;
pub use error::EmbeddingError;
pub use vectors::WordVectors;
