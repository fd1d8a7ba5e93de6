//! OpenAI implementation of [`LlmClient`], wrapping openai-client.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::config::{LlmConfig, DEFAULT_MODEL};
use super::{
    chat_message_to_openai, ChatCompletionRequest, ChatCompletionResponse, CompletionMessage,
    LlmClient,
};

/// [`LlmClient`] backed by openai-client.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    /// Used when a request carries an empty model id.
    model: String,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    /// Builds a client from any [`LlmConfig`] (base URL, default model, system prompt).
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
            .with_system_prompt_opt(config.system_prompt().map(str::to_string))
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn resolve_model<'a>(&'a self, model_id: &'a str) -> &'a str {
        if model_id.trim().is_empty() {
            &self.model
        } else {
            model_id
        }
    }

    /// Request messages with the system prompt (if any) prepended.
    fn request_messages(&self, messages: &[ChatMessage]) -> Vec<ChatMessage> {
        self.system_prompt
            .iter()
            .map(|p| ChatMessage::system(p.as_str()))
            .chain(messages.iter().cloned())
            .collect()
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, request), fields(model = %request.model_id, message_count = request.messages.len()))]
    async fn chat_completion(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        if request.stream {
            anyhow::bail!("OpenAILlmClient::chat_completion does not support streaming requests");
        }
        let openai_messages = self
            .request_messages(&request.messages)
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        let content = self
            .client
            .chat_completion(self.resolve_model(&request.model_id), openai_messages)
            .await?;
        Ok(ChatCompletionResponse {
            completion_message: CompletionMessage::assistant(content),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt::MessageRole;

    #[test]
    fn system_prompt_is_prepended_only_when_set() {
        let msgs = vec![ChatMessage::user("q")];
        let plain = OpenAILlmClient::new("sk-test-key-0000".to_string());
        assert_eq!(plain.request_messages(&msgs), msgs);

        let with_prompt = plain.with_system_prompt("be brief");
        let out = with_prompt.request_messages(&msgs);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].role, MessageRole::System);
        assert_eq!(out[1], ChatMessage::user("q"));
    }

    #[test]
    fn empty_model_id_falls_back_to_client_model() {
        let client = OpenAILlmClient::new("sk-test-key-0000".to_string()).with_model("m-default".to_string());
        assert_eq!(client.resolve_model(""), "m-default");
        assert_eq!(client.resolve_model("m-request"), "m-request");
    }

    #[tokio::test]
    async fn streaming_requests_are_rejected_before_any_call() {
        let client = OpenAILlmClient::new("sk-test-key-0000".to_string());
        let mut request = ChatCompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("q")]);
        request.stream = true;
        let err = client.chat_completion(request).await.unwrap_err();
        assert!(err.to_string().contains("streaming"));
    }
}
