//! Evaluation entry point.
//!
//! One call runs the lexical layer, the contextual layer, the decision table and
//! the feedback rewrite, strictly in that order. The word vectors and corpus
//! statistics are shared read-only across calls; everything else is built per
//! request.


use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::combiner::DecisionCombiner;
use crate::config::Config;
use crate::constants::metadata_keys::*;
use crate::embedding::{CorpusStats, EmbeddingError, WordVectors};
use crate::error::EvaluationError;
use crate::generation::TextGenerator;
use crate::layers::{ContextualLayer, LexicalLayer};
use crate::params::EvaluationParams;
use crate::result::{EvaluationResult, EvaluationType};

/// Loads the embedding table and corpus statistics named by `config`.
///
/// Unset paths yield an empty table (every token out-of-vocabulary) and
/// default statistics.
pub fn load_resources(
    config: &Config,
) -> Result<(Arc<WordVectors>, Arc<CorpusStats>), EmbeddingError> {
    let vectors = match &config.embeddings_path {
        Some(path) => WordVectors::load_word2vec_text(path)?,
        None => {
            warn!("No GRADER_EMBEDDINGS_PATH configured, every token is out-of-vocabulary");
            WordVectors::empty()
        }
    };

    let corpus = match &config.corpus_stats_path {
        Some(path) => CorpusStats::load_json(path)?,
        None => {
            warn!("No GRADER_CORPUS_STATS_PATH configured, using flat information content");
            CorpusStats::default()
        }
    };

    Ok((Arc::new(vectors), Arc::new(corpus)))
}

/// Dual-signal grader over a text generator `G`.
#[derive(Debug)]
pub struct Evaluator<G> {
    lexical: LexicalLayer,
    contextual: ContextualLayer,
    combiner: DecisionCombiner,
    generator: G,
}

impl<G: TextGenerator> Evaluator<G> {
    pub fn new(vectors: Arc<WordVectors>, corpus: Arc<CorpusStats>, generator: G) -> Self {
        Self {
            lexical: LexicalLayer::new(vectors, corpus),
            contextual: ContextualLayer::default(),
            combiner: DecisionCombiner::default(),
            generator,
        }
    }

    /// Builds an evaluator from the configured resources and token limits.
    pub fn from_config(config: &Config, generator: G) -> Result<Self, EvaluationError> {
        let (vectors, corpus) = load_resources(config)?;
        Ok(Self::new(vectors, corpus, generator)
            .with_token_limits(config.judge_max_tokens, config.rewrite_max_tokens))
    }

    pub fn with_token_limits(mut self, judge_max_tokens: u32, rewrite_max_tokens: u32) -> Self {
        self.contextual = ContextualLayer::new(judge_max_tokens);
        self.combiner = DecisionCombiner::new(rewrite_max_tokens);
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Grades `response` against `answer`.
    ///
    /// Judge failures are folded into the contextual verdict; only a failed
    /// feedback rewrite is returned as an error.
    pub async fn evaluate(
        &self,
        response: &str,
        answer: &str,
        params: &EvaluationParams,
    ) -> Result<EvaluationResult, EvaluationError> {
        let start = Instant::now();

        let lexical = self.lexical.evaluate(response, answer, &params.keystrings);
        debug!(
            is_correct = lexical.is_correct(),
            similarity = lexical.similarity(),
            "Lexical layer done"
        );

        let contextual = self
            .contextual
            .evaluate(&self.generator, response, answer, &params.keystrings)
            .await;
        debug!(is_correct = contextual.is_correct(), "Contextual layer done");

        let decision = self.combiner.decide(&lexical, &contextual);
        let feedback = self
            .combiner
            .rewrite(&self.generator, &decision, response, answer)
            .await?;

        let mut result = EvaluationResult::new(EvaluationType::Combined);
        result.is_correct = decision.is_correct;
        result.add_feedback(decision.tag.as_str(), feedback);

        result.add_metadata(TAG, decision.tag.as_str());
        result.add_metadata(NLP_SIMILARITY_VALUE, lexical.similarity());
        if let Some(bow) = lexical.metadata().get(BOW_SIMILARITY_VALUE) {
            result.add_metadata(NLP_BOW_SIMILARITY_VALUE, bow.clone());
        }
        if let Some(scores) = lexical.metadata().get(KEYSTRING_SCORES) {
            result.add_metadata(KEYSTRING_SCORES, scores.clone());
        }
        result.add_metadata(NLP_PROCESSING_TIME, lexical.processing_time());
        if let Some(judgment) = contextual.metadata().get(CONTEXTUAL_JUDGMENT) {
            result.add_metadata(SLM_JUDGMENT, judgment.clone());
        }
        result.add_metadata(SLM_PROCESSING_TIME, contextual.processing_time());
        result.set_processing_time(start.elapsed().as_secs_f64());

        info!(
            tag = %decision.tag,
            is_correct = result.is_correct,
            keystrings = params.keystrings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Evaluation complete"
        );

        Ok(result)
    }

    /// JSON in, JSON out: decodes `params`, evaluates and serializes the result.
    pub async fn evaluate_json(
        &self,
        response: &str,
        answer: &str,
        params: &Value,
    ) -> Result<Value, EvaluationError> {
        let params = EvaluationParams::from_value(params)?;
        let result = self.evaluate(response, answer, &params).await?;
        Ok(result.to_json(params.include_test_data))
    }
}
