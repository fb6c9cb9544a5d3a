//! Text-generation capability used by the contextual judge and the feedback rewrite.
//!
//! The core only relies on [`TextGenerator`]; [`GenaiGenerator`] is the
//! production implementation and [`MockGenerator`] a scripted test double.

pub mod client;
pub mod error;
pub mod judgment;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompts;


pub use client::{GenaiGenerator, TextGenerator};
pub use error::GenerationError;
pub use judgment::Judgment;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockGenerator;
