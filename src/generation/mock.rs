//! Scripted [`TextGenerator`] for tests.

use std::sync::Mutex;

use super::client::TextGenerator;
use super::error::GenerationError;

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

/// Answers prompts from an ordered rule list: the first rule whose needle occurs
/// in the prompt wins, otherwise the fallback reply is used.
#[derive(Debug)]
pub struct MockGenerator {
    rules: Vec<(String, Reply)>,
    fallback: Reply,
    prompts: Mutex<Vec<String>>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Reply::Fail("no scripted reply".to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies `reply` to any prompt containing `needle`.
    pub fn when(mut self, needle: impl Into<String>, reply: impl Into<String>) -> Self {
        self.rules.push((needle.into(), Reply::Text(reply.into())));
        self
    }

    /// Fails any prompt containing `needle`.
    pub fn fail_when(mut self, needle: impl Into<String>, reason: impl Into<String>) -> Self {
        self.rules.push((needle.into(), Reply::Fail(reason.into())));
        self
    }

    /// Reply for prompts no rule matches.
    pub fn otherwise(mut self, reply: impl Into<String>) -> Self {
        self.fallback = Reply::Text(reply.into());
        self
    }

    /// Every prompt received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    fn reply_for(&self, prompt: &str) -> Reply {
        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match self.reply_for(prompt) {
            Reply::Text(text) => Ok(text),
            Reply::Fail(reason) => Err(GenerationError::Unavailable { reason }),
        }
    }
}
