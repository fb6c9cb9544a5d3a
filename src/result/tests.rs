use serde_json::json;

use super::*;

#[test]
fn test_feedback_joined_in_insertion_order() {
    let mut log = FeedbackLog::new();
    log.add("a", "first");
    log.add("b", "second");
    log.add("a", "third");

    assert_eq!(log.serialize(), "first<br>second<br>third");
    assert_eq!(log.tags(), &["a".to_string(), "b".to_string()]);
    assert_eq!(log.get("a"), vec!["first", "third"]);
    assert_eq!(log.get("b"), vec!["second"]);
}

#[test]
fn test_unknown_tag_has_no_feedback() {
    let log = FeedbackLog::new();
    assert!(log.get("missing").is_empty());
    assert!(log.is_empty());
}

#[test]
fn test_blank_feedback_skipped_and_trimmed() {
    let mut log = FeedbackLog::new();
    log.add("a", "  padded  ");
    log.add("a", "   ");
    log.add("b", "");
    log.add("b", "end");

    assert_eq!(log.serialize(), "padded<br>end");
    assert_eq!(log.tags().len(), 2);
}

#[test]
fn test_minimal_serialization() {
    let mut result = EvaluationResult::new(EvaluationType::Combined);
    result.is_correct = true;
    result.add_feedback("PASS_PASS", "Well done.");
    result.add_metadata("tag", "PASS_PASS");
    result.set_processing_time(0.25);

    assert_eq!(
        result.to_json(false),
        json!({"is_correct": true, "feedback": "Well done."})
    );
}

#[test]
fn test_full_serialization() {
    let mut result = EvaluationResult::new(EvaluationType::Combined);
    result.add_feedback("ALMOST", "Nearly.");
    result.add_metadata("tag", "ALMOST");
    result.add_metadata("similarity_value", 0.8);
    result.set_processing_time(1.5);

    let json = result.to_json(true);
    assert_eq!(json["is_correct"], false);
    assert_eq!(json["feedback"], "Nearly.");
    assert_eq!(json["tags"], json!(["ALMOST"]));
    assert_eq!(json["metadata"]["similarity_value"], 0.8);
    assert_eq!(json["processing_time"], 1.5);
    assert_eq!(json["evaluation_type"], "combined");
}

#[test]
fn test_metadata_preserves_insertion_order() {
    let mut result = EvaluationResult::new(EvaluationType::Lexical);
    result.add_metadata("zeta", 1);
    result.add_metadata("alpha", 2);

    let keys: Vec<&String> = result.metadata().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn test_empty_metadata_omitted() {
    let result = EvaluationResult::new(EvaluationType::Contextual);
    let json = result.to_json(true);
    assert!(json.get("metadata").is_none());
    assert_eq!(json["evaluation_type"], "slm");
    assert_eq!(json["tags"], json!([]));
}

#[test]
fn test_response_rendering_fields_emitted_when_set() {
    let mut result = EvaluationResult::default();
    result.response_latex = "\\rho".to_string();

    let json = result.to_json(false);
    assert_eq!(json["response_latex"], "\\rho");
    assert!(json.get("response_simplified").is_none());
    assert!(json.get("evaluation_type").is_none());
}
