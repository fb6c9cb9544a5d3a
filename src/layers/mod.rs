//! The two evaluation layers and their shared verdict type.
//!
//! - [`LexicalLayer`] scores keystrings and whole-answer similarity from word vectors.
//! - [`ContextualLayer`] asks a text-generation model for tri-state judgments.

pub mod contextual;
pub mod lexical;
pub mod verdict;


pub use contextual::{ContextualLayer, MODEL_ERROR_FEEDBACK};
pub use lexical::{LexicalLayer, METHOD_ALIGNMENT, METHOD_MEAN_EMBEDDING};
pub use verdict::LayerVerdict;
