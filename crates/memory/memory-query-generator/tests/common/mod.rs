//! Shared mocks for query generator tests.

#![allow(dead_code)]

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use llm_client::{ChatCompletionRequest, ChatCompletionResponse, CompletionMessage, LlmClient};

/// Inference client that records every request and answers with a fixed reply.
pub struct MockLlmClient {
    reply: String,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn chat_completion(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(ChatCompletionResponse {
            completion_message: CompletionMessage::assistant(self.reply.clone()),
        })
    }
}

/// Inference client that always fails.
pub struct FailingLlmClient;

#[async_trait]
impl LlmClient for FailingLlmClient {
    async fn chat_completion(&self, _request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        anyhow::bail!("inference backend unavailable")
    }
}
