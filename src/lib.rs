//! Dual-signal grading of free-text answers.
//!
//! A response is graded against a reference answer by two independent layers:
//!
//! - the lexical layer ([`layers::LexicalLayer`]) scores keystrings and overall
//!   similarity from pretrained word vectors and corpus statistics;
//! - the contextual layer ([`layers::ContextualLayer`]) asks a text-generation
//!   model for tri-state judgments.
//!
//! [`combiner::DecisionCombiner`] fuses both verdicts through an ordered
//! decision table and has the model rewrite the feedback. [`Evaluator`] is the
//! entry point that runs the whole pipeline for one request.
//!
//! ## Test/Mock Support
//! [`MockGenerator`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod combiner;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod error;
pub mod evaluator;
pub mod generation;
pub mod keystring;
pub mod layers;
pub mod params;
pub mod result;
pub mod similarity;
pub mod text;

pub use combiner::{DECISION_TABLE, Decision, DecisionCombiner, DecisionTag};
pub use config::{Config, ConfigError};
pub use constants::{
    CUSTOM_FEEDBACK_MARKER, FEEDBACK_SEPARATOR, KEYSTRING_EXACT_THRESHOLD, KEYSTRING_THRESHOLD,
    SIMILARITY_THRESHOLD,
};
pub use embedding::{CorpusStats, EmbeddingError, WordVectors};
pub use error::EvaluationError;
pub use evaluator::{Evaluator, load_resources};
#[cfg(any(test, feature = "mock"))]
pub use generation::MockGenerator;
pub use generation::{GenaiGenerator, GenerationError, Judgment, TextGenerator};
pub use keystring::{KeystringMatcher, KeystringSpec};
pub use layers::{ContextualLayer, LayerVerdict, LexicalLayer};
pub use params::EvaluationParams;
pub use result::{EvaluationResult, EvaluationType, FeedbackLog};
pub use similarity::{AlignmentScorer, MeanEmbeddingScorer};
