//! Per-request evaluation parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keystring::KeystringSpec;

/// Options recognised in the `params` object of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationParams {
    /// Concepts checked in declaration order.
    #[serde(default)]
    pub keystrings: Vec<KeystringSpec>,

    /// Emit `tags`, `metadata`, `processing_time` and `evaluation_type`.
    #[serde(default)]
    pub include_test_data: bool,
}

impl EvaluationParams {
    /// Decodes params from JSON. `null` means no options.
    ///
    /// Unknown keys are ignored; a malformed keystring entry is an error.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(value)
    }

    pub fn with_keystrings(mut self, keystrings: Vec<KeystringSpec>) -> Self {
        self.keystrings = keystrings;
        self
    }

    pub fn with_test_data(mut self) -> Self {
        self.include_test_data = true;
        self
    }
}
