//! Keystring concept-presence matching.
//!
//! A keystring is scored by sliding a window of its token length over the
//! response and keeping the best `max(mean-embedding, alignment)` score. Every
//! keystring is scored; the first problematic one in declaration order decides the
//! feedback.


use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::constants::{CUSTOM_FEEDBACK_MARKER, KEYSTRING_EXACT_THRESHOLD, KEYSTRING_THRESHOLD};
use crate::similarity::{AlignmentScorer, MeanEmbeddingScorer};
use crate::text;

fn default_should_contain() -> bool {
    true
}

/// A required or forbidden concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeystringSpec {
    /// Concept text.
    pub string: String,
    /// Raise the pass threshold to [`KEYSTRING_EXACT_THRESHOLD`].
    #[serde(default)]
    pub exact_match: bool,
    /// `false` flags the keystring when it *is* present.
    #[serde(default = "default_should_contain")]
    pub should_contain: bool,
    /// Literal feedback to emit when this keystring is problematic.
    #[serde(default)]
    pub custom_feedback: Option<String>,
}

impl KeystringSpec {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            exact_match: false,
            should_contain: true,
            custom_feedback: None,
        }
    }

    pub fn exact(mut self) -> Self {
        self.exact_match = true;
        self
    }

    pub fn forbidden(mut self) -> Self {
        self.should_contain = false;
        self
    }

    pub fn with_custom_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.custom_feedback = Some(feedback.into());
        self
    }

    pub fn threshold(&self) -> f64 {
        if self.exact_match {
            KEYSTRING_EXACT_THRESHOLD
        } else {
            KEYSTRING_THRESHOLD
        }
    }

    /// Whether `max_score` violates this spec.
    pub fn is_problematic(&self, max_score: f64) -> bool {
        if self.should_contain {
            max_score < self.threshold()
        } else {
            max_score > self.threshold()
        }
    }

    /// Feedback for a violation at `max_score`.
    pub fn feedback(&self, max_score: f64) -> String {
        if let Some(custom) = &self.custom_feedback {
            return format!(
                "{}Cannot determine if the answer is correct. {}",
                CUSTOM_FEEDBACK_MARKER, custom
            );
        }

        if self.should_contain {
            format!(
                "Similarity: {:.3}. Please provide more information about '{}'",
                max_score, self.string
            )
        } else {
            format!(
                "Identified '{}' in the answer, which was not expected.",
                self.string
            )
        }
    }
}

/// Best window score for one keystring.
#[derive(Debug, Clone, PartialEq)]
pub struct KeystringScore {
    pub keystring: String,
    pub max_score: f64,
}

/// The first keystring (in declaration order) that failed its check.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblematicKeystring {
    pub index: usize,
    pub keystring: String,
    pub max_score: f64,
    pub feedback: String,
}

/// Outcome of scanning every keystring against a response.
#[derive(Debug, Clone, Default)]
pub struct KeystringScan {
    /// One entry per spec, in declaration order.
    pub scores: Vec<KeystringScore>,
    pub problematic: Option<ProblematicKeystring>,
}

impl KeystringScan {
    pub fn has_problem(&self) -> bool {
        self.problematic.is_some()
    }

    /// Scores as `[[keystring, score], ...]` for result metadata.
    pub fn scores_json(&self) -> Value {
        Value::Array(
            self.scores
                .iter()
                .map(|s| json!([s.keystring, s.max_score]))
                .collect(),
        )
    }
}

/// Sliding-window keystring matcher.
#[derive(Debug, Clone)]
pub struct KeystringMatcher {
    mean: MeanEmbeddingScorer,
    alignment: AlignmentScorer,
}

impl KeystringMatcher {
    pub fn new(mean: MeanEmbeddingScorer, alignment: AlignmentScorer) -> Self {
        Self { mean, alignment }
    }

    /// Scores every spec, remembering the first problematic one.
    pub fn scan(&self, response: &str, specs: &[KeystringSpec]) -> KeystringScan {
        let response_tokens = text::content_tokens(response);
        let mut scan = KeystringScan::default();

        for (index, spec) in specs.iter().enumerate() {
            let max_score = self.max_window_score(&response_tokens, &spec.string);

            debug!(
                keystring = %spec.string,
                max_score,
                threshold = spec.threshold(),
                should_contain = spec.should_contain,
                "Keystring scored"
            );

            if scan.problematic.is_none() && spec.is_problematic(max_score) {
                scan.problematic = Some(ProblematicKeystring {
                    index,
                    keystring: spec.string.clone(),
                    max_score,
                    feedback: spec.feedback(max_score),
                });
            }

            scan.scores.push(KeystringScore {
                keystring: spec.string.clone(),
                max_score,
            });
        }

        scan
    }

    /// Best `max(mean, alignment)` over every window of the keystring's length.
    ///
    /// `0` when the keystring normalizes to nothing or is longer than the response.
    pub fn max_window_score(&self, response_tokens: &[String], keystring: &str) -> f64 {
        let width = text::content_tokens(keystring).len();
        if width == 0 || width > response_tokens.len() {
            return 0.0;
        }

        response_tokens
            .windows(width)
            .map(|window| {
                let window = window.join(" ");
                let mean = self.mean.score(&window, keystring);
                let aligned = self.alignment.score(&window, keystring).similarity;
                mean.max(aligned)
            })
            .fold(0.0_f64, f64::max)
    }
}
