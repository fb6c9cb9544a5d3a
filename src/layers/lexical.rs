use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use super::verdict::LayerVerdict;
use crate::constants::SIMILARITY_THRESHOLD;
use crate::constants::metadata_keys::*;
use crate::embedding::{CorpusStats, WordVectors};
use crate::keystring::{KeystringMatcher, KeystringSpec};
use crate::similarity::{AlignmentScorer, MeanEmbeddingScorer};

/// Method label for the mean-embedding pass.
pub const METHOD_MEAN_EMBEDDING: &str = "w2v";
/// Method label for the alignment fallback.
pub const METHOD_ALIGNMENT: &str = "BOW vector similarity";

/// Keystring check followed by whole-answer similarity.
#[derive(Debug, Clone)]
pub struct LexicalLayer {
    keystrings: KeystringMatcher,
    mean: MeanEmbeddingScorer,
    alignment: AlignmentScorer,
}

impl LexicalLayer {
    pub fn new(vectors: Arc<WordVectors>, corpus: Arc<CorpusStats>) -> Self {
        let mean = MeanEmbeddingScorer::new(vectors.clone());
        let alignment = AlignmentScorer::new(vectors, corpus);
        Self {
            keystrings: KeystringMatcher::new(mean.clone(), alignment.clone()),
            mean,
            alignment,
        }
    }

    pub fn evaluate(&self, response: &str, answer: &str, specs: &[KeystringSpec]) -> LayerVerdict {
        let start = Instant::now();

        let mut keystring_scores = None;
        if !specs.is_empty() {
            let scan = self.keystrings.scan(response, specs);

            if let Some(problem) = &scan.problematic {
                debug!(
                    keystring = %problem.keystring,
                    max_score = problem.max_score,
                    "Lexical layer failed on keystring"
                );

                return LayerVerdict::new(false, problem.feedback.clone())
                    .with_metadata(KEYSTRING_SCORES, scan.scores_json())
                    .with_metadata(RESPONSE, response)
                    .with_metadata(PROBLEMATIC_KEYSTRING, problem.keystring.as_str())
                    .with_metadata(SIMILARITY_VALUE, problem.max_score)
                    .with_processing_time(start.elapsed());
            }

            keystring_scores = Some(scan.scores_json());
        }

        let similarity = self.mean.score(response, answer);

        let verdict = if similarity > SIMILARITY_THRESHOLD {
            debug!(similarity, "Lexical layer passed on mean embedding");

            LayerVerdict::new(true, format!("Similarity: {:.3}", similarity))
                .with_metadata(RESPONSE, response)
                .with_metadata(METHOD, METHOD_MEAN_EMBEDDING)
                .with_metadata(SIMILARITY_VALUE, similarity)
        } else {
            let outcome = self.alignment.score(response, answer);
            let word = outcome.most_divergent_word();

            debug!(
                similarity,
                alignment = outcome.similarity,
                problematic_word = word.unwrap_or(""),
                "Lexical layer failed on similarity"
            );

            let feedback = if is_single_word(response) && is_single_word(answer) {
                "Incorrect".to_string()
            } else {
                let more_info = word
                    .map(|w| format!("Please provide more information about {}.", w))
                    .unwrap_or_default();
                format!(
                    "Cannot determine if the answer is correct ({:.3} similarity). {}",
                    similarity, more_info
                )
                .trim_end()
                .to_string()
            };

            LayerVerdict::new(false, feedback)
                .with_metadata(RESPONSE, response)
                .with_metadata(METHOD, METHOD_ALIGNMENT)
                .with_metadata(SIMILARITY_VALUE, similarity)
                .with_metadata(BOW_SIMILARITY_VALUE, outcome.similarity)
                .with_metadata(PROBLEMATIC_WORD, word.map(str::to_string))
        };

        let verdict = match keystring_scores {
            Some(scores) => verdict.with_metadata(KEYSTRING_SCORES, scores),
            None => verdict,
        };

        verdict.with_processing_time(start.elapsed())
    }
}

fn is_single_word(text: &str) -> bool {
    text.split_whitespace().count() == 1
}
