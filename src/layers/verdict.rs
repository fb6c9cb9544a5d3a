use std::time::Duration;

use serde_json::{Map, Value};

use crate::constants::CUSTOM_FEEDBACK_MARKER;
use crate::constants::metadata_keys::SIMILARITY_VALUE;

/// One layer's verdict for a request. Built once, then read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerVerdict {
    is_correct: bool,
    feedback: String,
    metadata: Map<String, Value>,
    processing_time: f64,
}

impl LayerVerdict {
    pub fn new(is_correct: bool, feedback: impl Into<String>) -> Self {
        Self {
            is_correct,
            feedback: feedback.into(),
            metadata: Map::new(),
            processing_time: 0.0,
        }
    }

    pub fn with_metadata(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(name.to_string(), value.into());
        self
    }

    pub fn with_processing_time(mut self, elapsed: Duration) -> Self {
        self.processing_time = elapsed.as_secs_f64();
        self
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn processing_time(&self) -> f64 {
        self.processing_time
    }

    /// `similarity_value` from the metadata, `0` when absent.
    pub fn similarity(&self) -> f64 {
        self.metadata
            .get(SIMILARITY_VALUE)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Whether the feedback carries caller-supplied custom feedback.
    pub fn has_custom_feedback(&self) -> bool {
        self.feedback.contains(CUSTOM_FEEDBACK_MARKER)
    }
}
