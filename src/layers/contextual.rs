use std::time::Instant;

use serde_json::Value;
use tracing::{debug, warn};

use super::verdict::LayerVerdict;
use crate::constants::DEFAULT_JUDGE_MAX_TOKENS;
use crate::constants::metadata_keys::*;
use crate::generation::{Judgment, TextGenerator, prompts};
use crate::keystring::KeystringSpec;

/// Feedback when the similarity judgment could not be read.
pub const MODEL_ERROR_FEEDBACK: &str = "<LLM RESPONSE ERROR> The response could not be evaluated.";

/// Asks the text-generation capability for tri-state judgments.
#[derive(Debug, Clone)]
pub struct ContextualLayer {
    max_tokens: u32,
}

impl Default for ContextualLayer {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_JUDGE_MAX_TOKENS,
        }
    }
}

impl ContextualLayer {
    pub fn new(max_tokens: u32) -> Self {
        Self { max_tokens }
    }

    /// One judgment per keystring, then one for the whole response.
    ///
    /// Never fails: an unreadable similarity judgment yields a failing verdict with
    /// [`MODEL_ERROR_FEEDBACK`].
    pub async fn evaluate<G: TextGenerator>(
        &self,
        generator: &G,
        response: &str,
        answer: &str,
        specs: &[KeystringSpec],
    ) -> LayerVerdict {
        let start = Instant::now();

        let mut problematic = Vec::new();
        for spec in specs {
            let prompt = prompts::keystring_prompt(&spec.string, response);
            let judgment = self.judge(generator, &prompt).await;

            debug!(keystring = %spec.string, %judgment, "Contextual keystring judgment");

            if judgment == Judgment::False {
                problematic.push(spec.string.clone());
            }
        }

        let prompt = prompts::similarity_prompt(response, answer);
        let judgment = self.judge(generator, &prompt).await;

        let (is_correct, feedback) = match judgment.as_bool() {
            None => (false, MODEL_ERROR_FEEDBACK.to_string()),
            Some(base) if !problematic.is_empty() => {
                let missing = problematic.join(", ");
                let feedback = if base {
                    format!(
                        "The response is ALMOST correct. However, the response should also focus on ideas regarding: {}",
                        missing
                    )
                } else {
                    format!(
                        "The response is incorrect. The response should focus on ideas regarding: {}",
                        missing
                    )
                };
                (false, feedback)
            }
            Some(base) => (
                base,
                format!(
                    "The response is contextually {}.",
                    if base { "correct" } else { "incorrect" }
                ),
            ),
        };

        debug!(
            %judgment,
            problematic = problematic.len(),
            is_correct,
            "Contextual layer verdict"
        );

        LayerVerdict::new(is_correct, feedback)
            .with_metadata(RESPONSE, response)
            .with_metadata(CONTEXTUAL_JUDGMENT, judgment.as_str())
            .with_metadata(
                PROBLEMATIC_KEYSTRINGS,
                Value::Array(problematic.into_iter().map(Value::String).collect()),
            )
            .with_processing_time(start.elapsed())
    }

    async fn judge<G: TextGenerator>(&self, generator: &G, prompt: &str) -> Judgment {
        match generator.generate(prompt, self.max_tokens).await {
            Ok(completion) => Judgment::parse(&completion),
            Err(e) => {
                warn!(error = %e, "Judge call failed, treating as unknown");
                Judgment::Unknown
            }
        }
    }
}
