use std::collections::HashMap;
use std::sync::Arc;

use super::*;
use crate::embedding::{CorpusStats, WordVectors};

fn vectors() -> Arc<WordVectors> {
    Arc::new(
        WordVectors::from_entries([
            ("density", vec![1.0, 0.0, 0.0, 0.0]),
            ("velocity", vec![0.0, 1.0, 0.0, 0.0]),
            ("speed", vec![0.6, 0.8, 0.0, 0.0]),
            ("viscosity", vec![0.0, 0.0, 1.0, 0.0]),
            ("length", vec![0.0, 0.0, 0.0, 1.0]),
            ("banana", vec![-0.5, -0.5, -0.5, 0.5]),
        ])
        .unwrap(),
    )
}

fn corpus() -> Arc<CorpusStats> {
    Arc::new(
        CorpusStats::new(
            10_000,
            HashMap::from([
                ("the".to_string(), 6_000),
                ("is".to_string(), 3_000),
                ("density".to_string(), 4),
            ]),
        )
        .unwrap(),
    )
}

#[test]
fn test_cosine_similarity_basic() {
    assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-12);
    assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-12);
    assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-12);
}

#[test]
fn test_cosine_similarity_zero_norm_is_zero() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    assert_eq!(cosine_similarity_f64(&[], &[]), 0.0);
}

#[test]
fn test_mean_identical_vocabulary_scores_one() {
    let scorer = MeanEmbeddingScorer::new(vectors());
    let score = scorer.score(
        "density,velocity,viscosity,length",
        "Density, Velocity, Viscosity, Length",
    );
    assert!((score - 1.0).abs() < 1e-6, "score was {score}");
}

#[test]
fn test_mean_ignores_stopwords_and_order() {
    let scorer = MeanEmbeddingScorer::new(vectors());
    let score = scorer.score("the length and the density", "density length");
    assert!((score - 1.0).abs() < 1e-6);
}

#[test]
fn test_mean_all_oov_is_zero() {
    let scorer = MeanEmbeddingScorer::new(vectors());
    assert_eq!(scorer.score("rho,u,mu,L", "Density, Velocity"), 0.0);
    assert_eq!(scorer.score("density", ""), 0.0);
}

#[test]
fn test_mean_drops_oov_tokens() {
    let scorer = MeanEmbeddingScorer::new(vectors());
    let score = scorer.score("density qwertyuiop", "density");
    assert!((score - 1.0).abs() < 1e-6);
}

#[test]
fn test_mean_unrelated_words_score_low() {
    let scorer = MeanEmbeddingScorer::new(vectors());
    assert!(scorer.score("density", "velocity").abs() < 1e-6);
}

#[test]
fn test_word_similarity_rules() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    assert_eq!(scorer.word_similarity("zzz", "zzz"), 1.0);
    assert_eq!(scorer.word_similarity("zzz", "density"), 0.0);
    let sim = scorer.word_similarity("speed", "velocity");
    assert!((sim - 0.8).abs() < 1e-6);
}

#[test]
fn test_alignment_identical_text_is_one() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("the density is", "The density is");
    assert!((outcome.similarity - 1.0).abs() < 1e-9);
    assert_eq!(outcome.response_scores.len(), 3);
    assert_eq!(outcome.answer_scores.len(), 3);
}

#[test]
fn test_alignment_vocabulary_is_first_occurrence_order() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("length density length", "velocity density");
    let words: Vec<&str> = outcome
        .response_scores
        .iter()
        .map(|a| a.word.as_str())
        .collect();
    assert_eq!(words, vec!["length", "density", "velocity"]);
}

#[test]
fn test_alignment_records_best_match() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("speed", "velocity");
    let velocity = outcome
        .response_scores
        .iter()
        .find(|a| a.word == "velocity")
        .unwrap();
    assert_eq!(velocity.matched, "speed");
    assert!((velocity.score - 0.8).abs() < 1e-6);
}

#[test]
fn test_alignment_common_words_weigh_less() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("the", "the");
    let the = &outcome.answer_scores[0];
    assert!(the.score < 0.1, "stopword weight was {}", the.score);
}

#[test]
fn test_alignment_empty_side_scores_negative_match() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("", "density");
    assert_eq!(outcome.response_scores[0].matched, "density");
    assert!(outcome.response_scores[0].score < 0.0);
    assert!((outcome.similarity + 1.0).abs() < 1e-9);
}

#[test]
fn test_alignment_both_empty_is_zero() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("", ",,,");
    assert_eq!(outcome.similarity, 0.0);
    assert!(outcome.response_scores.is_empty());
}

#[test]
fn test_most_divergent_word_is_missing_concept() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("density", "density viscosity");
    assert_eq!(outcome.most_divergent_word(), Some("viscosity"));
}

#[test]
fn test_most_divergent_word_none_when_response_covers_answer() {
    let scorer = AlignmentScorer::new(vectors(), corpus());
    let outcome = scorer.score("density viscosity", "density viscosity");
    assert_eq!(outcome.most_divergent_word(), None);
}
