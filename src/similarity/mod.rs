//! Lexical-semantic similarity scorers.
//!
//! - [`MeanEmbeddingScorer`] compares mean-pooled word vectors (stopwords removed).
//! - [`AlignmentScorer`] aligns every word against the other side and weights the
//!   match by information content (stopwords kept).
//!
//! Both return `0` rather than NaN when a side has nothing to compare.

pub mod alignment;
pub mod mean;

#[cfg(test)]
mod tests;

pub use alignment::{AlignmentOutcome, AlignmentScorer, WordAlignment};
pub use mean::MeanEmbeddingScorer;

/// Cosine similarity of two equal-length vectors; `0` if either has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    finish_cosine(dot, norm_a, norm_b)
}

/// [`cosine_similarity`] over `f64` score vectors.
pub fn cosine_similarity_f64(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    finish_cosine(dot, norm_a, norm_b)
}

fn finish_cosine(dot: f64, norm_a_sq: f64, norm_b_sq: f64) -> f64 {
    let denom = norm_a_sq.sqrt() * norm_b_sq.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    (dot / denom).clamp(-1.0, 1.0)
}
