use std::sync::Arc;

use tracing::trace;

use super::cosine_similarity;
use crate::embedding::WordVectors;
use crate::text;

/// Mean-pooled word-vector similarity.
#[derive(Debug, Clone)]
pub struct MeanEmbeddingScorer {
    vectors: Arc<WordVectors>,
}

impl MeanEmbeddingScorer {
    pub fn new(vectors: Arc<WordVectors>) -> Self {
        Self { vectors }
    }

    /// Cosine similarity of the mean vectors of `response` and `answer`.
    ///
    /// Out-of-vocabulary tokens are dropped; if either side has no surviving
    /// vector the result is `0`.
    pub fn score(&self, response: &str, answer: &str) -> f64 {
        let Some(response_mean) = self.mean_vector(response) else {
            return 0.0;
        };
        let Some(answer_mean) = self.mean_vector(answer) else {
            return 0.0;
        };

        let score = cosine_similarity(&response_mean, &answer_mean);
        trace!(score, "Mean embedding similarity");
        score
    }

    fn mean_vector(&self, text: &str) -> Option<Vec<f32>> {
        let dim = self.vectors.dim();
        let mut sum = vec![0.0_f64; dim];
        let mut count = 0_usize;

        for token in text::content_tokens(text) {
            if let Some(vector) = self.vectors.get(&token) {
                for (acc, v) in sum.iter_mut().zip(vector) {
                    *acc += *v as f64;
                }
                count += 1;
            }
        }

        if count == 0 {
            return None;
        }

        Some(sum.into_iter().map(|s| (s / count as f64) as f32).collect())
    }
}
