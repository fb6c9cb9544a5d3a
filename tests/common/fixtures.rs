//! Deterministic resources for end-to-end tests.

use std::collections::HashMap;
use std::sync::Arc;

use grader::embedding::{CorpusStats, WordVectors};
use grader::evaluator::Evaluator;
use grader::generation::MockGenerator;

pub const FLUID_ANSWER: &str = "Density, Velocity, Viscosity, Length";

/// Needle that only occurs in the feedback rewrite prompts.
pub const REWRITE_NEEDLE: &str = "expert educator";

pub fn word_vectors() -> Arc<WordVectors> {
    let table = WordVectors::from_entries([
        ("density", vec![1.0, 0.0, 0.0, 0.0, 0.0]),
        ("velocity", vec![0.0, 1.0, 0.0, 0.0, 0.0]),
        ("speed", vec![0.6, 0.8, 0.0, 0.0, 0.0]),
        ("viscosity", vec![0.0, 0.0, 1.0, 0.0, 0.0]),
        ("length", vec![0.0, 0.0, 0.0, 1.0, 0.0]),
        ("direction", vec![0.0, 0.3, 0.0, 0.0, 0.9]),
        ("banana", vec![-0.5, -0.5, -0.5, 0.5, 0.0]),
        ("incorrect", vec![0.1, 0.0, 0.0, -0.2, 0.3]),
        ("response", vec![0.0, 0.2, -0.1, 0.0, 0.4]),
    ]);
    Arc::new(table.expect("fixture vectors share one dimension"))
}

pub fn corpus_stats() -> Arc<CorpusStats> {
    let frequencies: HashMap<String, u64> = [
        ("the", 60_000),
        ("a", 23_000),
        ("length", 300),
        ("speed", 80),
        ("direction", 120),
    ]
    .into_iter()
    .map(|(w, f)| (w.to_string(), f))
    .collect();

    Arc::new(CorpusStats::new(1_000_000, frequencies).expect("non-zero corpus size"))
}

/// Judge replies `verdict` to every judgment; the rewrite returns `rewrite`.
pub fn scripted_generator(verdict: &str, rewrite: &str) -> MockGenerator {
    MockGenerator::new()
        .when(REWRITE_NEEDLE, rewrite)
        .otherwise(verdict)
}

pub fn evaluator(generator: MockGenerator) -> Evaluator<MockGenerator> {
    Evaluator::new(word_vectors(), corpus_stats(), generator)
}
