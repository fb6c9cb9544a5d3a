//! Evaluation result and its feedback log.
//!
//! Feedback is append-only: every string is filed under exactly one tag, tags
//! keep first-use order, and the serialized feedback joins every non-blank
//! string in the order it was added.

#[cfg(test)]
mod tests;

use serde_json::{Map, Value};

use crate::constants::FEEDBACK_SEPARATOR;

/// Which stage produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationType {
    /// Lexical-semantic layer.
    Lexical,
    /// Contextual judge layer.
    Contextual,
    /// Fused final verdict.
    Combined,
}

impl EvaluationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationType::Lexical => "nlp",
            EvaluationType::Contextual => "slm",
            EvaluationType::Combined => "combined",
        }
    }
}

impl std::fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered tag → feedback accumulator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackLog {
    tags: Vec<String>,
    entries: Vec<(usize, String)>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `feedback` under `tag`, registering the tag on first use.
    pub fn add(&mut self, tag: &str, feedback: impl Into<String>) {
        let tag_idx = match self.tags.iter().position(|t| t == tag) {
            Some(idx) => idx,
            None => {
                self.tags.push(tag.to_string());
                self.tags.len() - 1
            }
        };
        self.entries.push((tag_idx, feedback.into()));
    }

    /// Feedback strings filed under `tag`, oldest first.
    pub fn get(&self, tag: &str) -> Vec<&str> {
        let Some(tag_idx) = self.tags.iter().position(|t| t == tag) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|(idx, _)| *idx == tag_idx)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-blank entries, trimmed, joined with [`FEEDBACK_SEPARATOR`].
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(_, text)| text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(FEEDBACK_SEPARATOR)
    }
}

/// Final evaluation output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationResult {
    pub is_correct: bool,
    pub response_latex: String,
    pub response_simplified: String,
    feedback: FeedbackLog,
    metadata: Map<String, Value>,
    processing_time: f64,
    evaluation_type: Option<EvaluationType>,
}

impl EvaluationResult {
    pub fn new(evaluation_type: EvaluationType) -> Self {
        Self {
            evaluation_type: Some(evaluation_type),
            ..Default::default()
        }
    }

    pub fn add_feedback(&mut self, tag: &str, feedback: impl Into<String>) {
        self.feedback.add(tag, feedback);
    }

    pub fn get_feedback(&self, tag: &str) -> Vec<&str> {
        self.feedback.get(tag)
    }

    /// Joined feedback string.
    pub fn feedback(&self) -> String {
        self.feedback.serialize()
    }

    pub fn tags(&self) -> &[String] {
        self.feedback.tags()
    }

    pub fn add_metadata(&mut self, name: &str, value: impl Into<Value>) {
        self.metadata.insert(name.to_string(), value.into());
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn set_processing_time(&mut self, seconds: f64) {
        self.processing_time = seconds;
    }

    pub fn processing_time(&self) -> f64 {
        self.processing_time
    }

    pub fn evaluation_type(&self) -> Option<EvaluationType> {
        self.evaluation_type
    }

    /// Serialized form handed back to the host.
    ///
    /// `is_correct` and `feedback` are always present; the diagnostic fields only
    /// when `include_test_data` is set.
    pub fn to_json(&self, include_test_data: bool) -> Value {
        let mut out = Map::new();
        out.insert("is_correct".to_string(), Value::Bool(self.is_correct));
        out.insert("feedback".to_string(), Value::String(self.feedback()));

        if !self.response_simplified.is_empty() {
            out.insert(
                "response_simplified".to_string(),
                Value::String(self.response_simplified.clone()),
            );
        }
        if !self.response_latex.is_empty() {
            out.insert(
                "response_latex".to_string(),
                Value::String(self.response_latex.clone()),
            );
        }

        if include_test_data {
            out.insert(
                "tags".to_string(),
                Value::Array(self.tags().iter().cloned().map(Value::String).collect()),
            );
            if !self.metadata.is_empty() {
                out.insert("metadata".to_string(), Value::Object(self.metadata.clone()));
            }
            if self.processing_time >= 0.0 {
                out.insert("processing_time".to_string(), Value::from(self.processing_time));
            }
            if let Some(evaluation_type) = self.evaluation_type {
                out.insert(
                    "evaluation_type".to_string(),
                    Value::String(evaluation_type.as_str().to_string()),
                );
            }
        }

        Value::Object(out)
    }
}
