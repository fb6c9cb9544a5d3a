//! Fuses the two layer verdicts into one decision.
//!
//! [`DECISION_TABLE`] is evaluated top-down and the first matching row wins.
//! Custom feedback from the lexical layer then replaces the tag and feedback
//! (never `is_correct`), and the feedback is rewritten by the text generator.


use tracing::{debug, info};

use crate::constants::{CUSTOM_FEEDBACK_MARKER, DEFAULT_REWRITE_MAX_TOKENS, SIMILARITY_THRESHOLD};
use crate::generation::{GenerationError, TextGenerator, prompts};
use crate::layers::LayerVerdict;

/// Label of the decision branch that produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionTag {
    PassPass,
    Almost,
    SlmPassNlpFail,
    SlmFailNlpPass,
    SlmFailNlpFail,
    CustomFeedback,
}

impl DecisionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionTag::PassPass => "PASS_PASS",
            DecisionTag::Almost => "ALMOST",
            DecisionTag::SlmPassNlpFail => "SLM_PASS_NLP_FAIL",
            DecisionTag::SlmFailNlpPass => "SLM_FAIL_NLP_PASS",
            DecisionTag::SlmFailNlpFail => "SLM_FAIL_NLP_FAIL",
            DecisionTag::CustomFeedback => "CUSTOM_FEEDBACK",
        }
    }
}

impl std::fmt::Display for DecisionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the decision table.
pub struct DecisionRow {
    pub tag: DecisionTag,
    pub is_correct: bool,
    pub matches: fn(&LayerVerdict, &LayerVerdict) -> bool,
    pub feedback: fn(&LayerVerdict, &LayerVerdict) -> String,
}

impl std::fmt::Debug for DecisionRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionRow")
            .field("tag", &self.tag)
            .field("is_correct", &self.is_correct)
            .finish()
    }
}

fn both_pass(lexical: &LayerVerdict, contextual: &LayerVerdict) -> bool {
    lexical.is_correct() && contextual.is_correct()
}

fn context_pass_high_similarity(lexical: &LayerVerdict, contextual: &LayerVerdict) -> bool {
    contextual.is_correct() && lexical.similarity() > SIMILARITY_THRESHOLD
}

fn context_pass_low_similarity(lexical: &LayerVerdict, contextual: &LayerVerdict) -> bool {
    contextual.is_correct() && lexical.similarity() <= SIMILARITY_THRESHOLD
}

fn lexical_pass(lexical: &LayerVerdict, _contextual: &LayerVerdict) -> bool {
    lexical.is_correct()
}

fn always(_lexical: &LayerVerdict, _contextual: &LayerVerdict) -> bool {
    true
}

fn with_layer_feedback(lead: &str, lexical: &LayerVerdict, contextual: &LayerVerdict) -> String {
    format!("{} {} {}", lead, lexical.feedback(), contextual.feedback())
}

fn success_feedback(_lexical: &LayerVerdict, _contextual: &LayerVerdict) -> String {
    "The response is correct (matched key points and follows the right context).".to_string()
}

fn almost_feedback(lexical: &LayerVerdict, contextual: &LayerVerdict) -> String {
    with_layer_feedback(
        "The response is ALMOST correct. But the student missed some key points.",
        lexical,
        contextual,
    )
}

fn missed_points_feedback(lexical: &LayerVerdict, contextual: &LayerVerdict) -> String {
    with_layer_feedback(
        "The response is incorrect as the student missed some key points.",
        lexical,
        contextual,
    )
}

fn wrong_context_feedback(lexical: &LayerVerdict, contextual: &LayerVerdict) -> String {
    with_layer_feedback(
        "The response has pointed out all the key ideas, but its context is wrong.",
        lexical,
        contextual,
    )
}

fn incorrect_feedback(lexical: &LayerVerdict, contextual: &LayerVerdict) -> String {
    with_layer_feedback(
        "The response is incorrect as its context is wrong.",
        lexical,
        contextual,
    )
}

/// Ordered fusion rules; the last row always matches.
pub static DECISION_TABLE: [DecisionRow; 5] = [
    DecisionRow {
        tag: DecisionTag::PassPass,
        is_correct: true,
        matches: both_pass,
        feedback: success_feedback,
    },
    DecisionRow {
        tag: DecisionTag::Almost,
        is_correct: false,
        matches: context_pass_high_similarity,
        feedback: almost_feedback,
    },
    DecisionRow {
        tag: DecisionTag::SlmPassNlpFail,
        is_correct: false,
        matches: context_pass_low_similarity,
        feedback: missed_points_feedback,
    },
    DecisionRow {
        tag: DecisionTag::SlmFailNlpPass,
        is_correct: false,
        matches: lexical_pass,
        feedback: wrong_context_feedback,
    },
    DecisionRow {
        tag: DecisionTag::SlmFailNlpFail,
        is_correct: false,
        matches: always,
        feedback: incorrect_feedback,
    },
];

/// Outcome of the decision table (plus override).
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub tag: DecisionTag,
    pub is_correct: bool,
    pub feedback: String,
}

impl Decision {
    pub fn is_custom(&self) -> bool {
        self.tag == DecisionTag::CustomFeedback
    }
}

/// Applies [`DECISION_TABLE`] without the custom-feedback override.
pub fn apply_table(lexical: &LayerVerdict, contextual: &LayerVerdict) -> Decision {
    let row = DECISION_TABLE
        .iter()
        .find(|row| (row.matches)(lexical, contextual))
        .unwrap_or(&DECISION_TABLE[DECISION_TABLE.len() - 1]);

    Decision {
        tag: row.tag,
        is_correct: row.is_correct,
        feedback: (row.feedback)(lexical, contextual),
    }
}

/// Replaces tag and feedback when the lexical feedback carries the custom marker.
pub fn apply_custom_override(decision: Decision, lexical: &LayerVerdict) -> Decision {
    if !lexical.has_custom_feedback() {
        return decision;
    }

    Decision {
        tag: DecisionTag::CustomFeedback,
        is_correct: decision.is_correct,
        feedback: lexical
            .feedback()
            .replace(CUSTOM_FEEDBACK_MARKER, "")
            .trim()
            .to_string(),
    }
}

/// Decision table, override and feedback rewrite.
#[derive(Debug, Clone)]
pub struct DecisionCombiner {
    rewrite_max_tokens: u32,
}

impl Default for DecisionCombiner {
    fn default() -> Self {
        Self {
            rewrite_max_tokens: DEFAULT_REWRITE_MAX_TOKENS,
        }
    }
}

impl DecisionCombiner {
    pub fn new(rewrite_max_tokens: u32) -> Self {
        Self { rewrite_max_tokens }
    }

    pub fn decide(&self, lexical: &LayerVerdict, contextual: &LayerVerdict) -> Decision {
        let decision = apply_custom_override(apply_table(lexical, contextual), lexical);

        info!(
            tag = %decision.tag,
            is_correct = decision.is_correct,
            lexical_correct = lexical.is_correct(),
            contextual_correct = contextual.is_correct(),
            similarity = lexical.similarity(),
            "Decision reached"
        );

        decision
    }

    /// Rewrites the decision feedback; the first line of the completion is kept.
    ///
    /// Not retried. A generation failure is returned to the caller.
    pub async fn rewrite<G: TextGenerator>(
        &self,
        generator: &G,
        decision: &Decision,
        response: &str,
        answer: &str,
    ) -> Result<String, GenerationError> {
        let prompt = if decision.is_custom() {
            prompts::rewrite_custom_prompt(&decision.feedback)
        } else {
            prompts::rewrite_prompt(answer, response, &decision.feedback)
        };

        let completion = generator.generate(&prompt, self.rewrite_max_tokens).await?;
        let rewritten = prompts::first_line(&completion).to_string();

        debug!(
            tag = %decision.tag,
            rewritten_len = rewritten.len(),
            "Feedback rewritten"
        );

        Ok(rewritten)
    }
}
