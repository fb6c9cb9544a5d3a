use std::collections::HashSet;
use std::sync::Arc;

use tracing::trace;

use super::cosine_similarity_f64;
use crate::embedding::{CorpusStats, WordVectors};
use crate::text;

/// Best alignment of one vocabulary word against one side of the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct WordAlignment {
    /// Word from the shared vocabulary.
    pub word: String,
    /// Token on this side that matched `word` best (`word` itself if the side is empty).
    pub matched: String,
    /// Pairwise similarity weighted by both words' information content.
    pub score: f64,
}

/// Result of [`AlignmentScorer::score`].
#[derive(Debug, Clone)]
pub struct AlignmentOutcome {
    /// Cosine similarity of the two per-word score vectors.
    pub similarity: f64,
    /// Per-word scores against the response, in vocabulary order.
    pub response_scores: Vec<WordAlignment>,
    /// Per-word scores against the answer, in vocabulary order.
    pub answer_scores: Vec<WordAlignment>,
}

impl AlignmentOutcome {
    /// Vocabulary word with the largest positive `answer - response` score gap.
    ///
    /// This is the word the answer covers that the response covers least. Ties keep
    /// the earliest word; `None` if no gap is positive.
    pub fn most_divergent_word(&self) -> Option<&str> {
        let mut best_gap = 0.0_f64;
        let mut best = None;

        for (resp, ans) in self.response_scores.iter().zip(&self.answer_scores) {
            let gap = ans.score - resp.score;
            if gap > best_gap {
                best_gap = gap;
                best = Some(resp.word.as_str());
            }
        }

        best
    }
}

/// Information-weighted word alignment similarity.
#[derive(Debug, Clone)]
pub struct AlignmentScorer {
    vectors: Arc<WordVectors>,
    corpus: Arc<CorpusStats>,
}

impl AlignmentScorer {
    pub fn new(vectors: Arc<WordVectors>, corpus: Arc<CorpusStats>) -> Self {
        Self { vectors, corpus }
    }

    /// `1` for identical tokens, `0` if either is out-of-vocabulary, else cosine.
    pub fn word_similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        self.vectors.similarity(a, b).unwrap_or(0.0)
    }

    pub fn score(&self, response: &str, answer: &str) -> AlignmentOutcome {
        let response_tokens = text::tokens(response);
        let answer_tokens = text::tokens(answer);

        let mut seen = HashSet::new();
        let vocabulary: Vec<&str> = response_tokens
            .iter()
            .chain(answer_tokens.iter())
            .map(String::as_str)
            .filter(|w| seen.insert(*w))
            .collect();

        let response_scores = self.side_scores(&vocabulary, &response_tokens);
        let answer_scores = self.side_scores(&vocabulary, &answer_tokens);

        let resp: Vec<f64> = response_scores.iter().map(|a| a.score).collect();
        let ans: Vec<f64> = answer_scores.iter().map(|a| a.score).collect();
        let similarity = cosine_similarity_f64(&resp, &ans);

        trace!(
            similarity,
            vocabulary = vocabulary.len(),
            "Alignment similarity"
        );

        AlignmentOutcome {
            similarity,
            response_scores,
            answer_scores,
        }
    }

    fn side_scores(&self, vocabulary: &[&str], side: &[String]) -> Vec<WordAlignment> {
        vocabulary
            .iter()
            .map(|word| {
                let mut best_similarity = -1.0_f64;
                let mut best_word: &str = word;

                for token in side {
                    let similarity = self.word_similarity(word, token);
                    if similarity > best_similarity {
                        best_similarity = similarity;
                        best_word = token;
                    }
                }

                let weight = self.corpus.information_content(word)
                    * self.corpus.information_content(best_word);

                WordAlignment {
                    word: (*word).to_string(),
                    matched: best_word.to_string(),
                    score: best_similarity * weight,
                }
            })
            .collect()
    }
}
