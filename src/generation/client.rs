use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use tracing::debug;

use super::error::GenerationError;

/// Prompt-in, text-out completion capability.
///
/// Calls are plain request/response; there is no timeout or retry at this layer.
pub trait TextGenerator: Send + Sync {
    /// Completes `prompt`, asking for at most `max_tokens` tokens.
    fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> impl std::future::Future<Output = Result<String, GenerationError>> + Send;
}

/// [`TextGenerator`] backed by a `genai` chat client.
#[derive(Clone)]
pub struct GenaiGenerator {
    client: Client,
    model: String,
}

impl std::fmt::Debug for GenaiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiGenerator")
            .field("model", &self.model)
            .finish()
    }
}

impl GenaiGenerator {
    /// Uses a default client; the provider is resolved from the model name.
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_client(Client::default(), model)
    }

    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for GenaiGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            max_tokens,
            "Requesting completion"
        );

        let request = ChatRequest::new(vec![ChatMessage::user(prompt.to_string())]);
        let options = ChatOptions::default().with_max_tokens(max_tokens);

        let response = self
            .client
            .exec_chat(&self.model, request, Some(&options))
            .await
            .map_err(|e| GenerationError::RequestFailed {
                model: self.model.clone(),
                reason: e.to_string(),
            })?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| GenerationError::EmptyCompletion {
                model: self.model.clone(),
            })
    }
}
