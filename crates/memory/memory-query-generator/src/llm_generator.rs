//! LLM query generator.
//!
//! Renders the configured Jinja template with the messages under `messages`,
//! sends the result as one user message to the inference client and returns
//! the completion text as the query.
//! External interactions: LlmClient (one non-streaming chat completion per call).

use async_trait::async_trait;
use llm_client::ChatCompletionRequest;
use minijinja::{context, Environment, UndefinedBehavior};
use prompt::{ChatMessage, InterleavedContent};
use serde_json::Value;
use tracing::debug;

use crate::config::LlmQueryGeneratorConfig;
use crate::context::QueryGeneratorContext;
use crate::error::{QueryGeneratorError, Result};
use crate::generator::QueryGenerator;

pub struct LlmQueryGenerator {
    config: LlmQueryGeneratorConfig,
}

impl LlmQueryGenerator {
    pub fn new(config: LlmQueryGeneratorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl QueryGenerator for LlmQueryGenerator {
    fn name(&self) -> &str {
        "Llm"
    }

    async fn generate(
        &self,
        messages: &[InterleavedContent],
        context: &QueryGeneratorContext,
    ) -> Result<String> {
        generate_template(&self.config, messages, context).await
    }
}

/// Renders `template` with `messages` bound to the template variable `messages`.
///
/// Plain-text messages render as their text; structured messages expose their
/// fields (e.g. `{{ messages[0].text }}`). Undefined variables are errors.
pub fn render_template(template: &str, messages: &[InterleavedContent]) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let values: Vec<Value> = messages
        .iter()
        .map(InterleavedContent::to_template_value)
        .collect();
    Ok(env.render_str(template, context! { messages => values })?)
}

/// Asks the inference client in `context` to turn `messages` into a query.
///
/// Fails with [`QueryGeneratorError::MissingDependency`] before rendering when the
/// context has no inference client. Render and inference errors are not retried.
pub async fn generate_template(
    config: &LlmQueryGeneratorConfig,
    messages: &[InterleavedContent],
    context: &QueryGeneratorContext,
) -> Result<String> {
    let inference = context
        .inference()
        .ok_or(QueryGeneratorError::MissingDependency("inference"))?;

    let content = render_template(&config.template, messages)?;
    debug!(
        model = %config.model,
        message_count = messages.len(),
        prompt_len = content.len(),
        "LlmQueryGenerator: template rendered"
    );

    let request = ChatCompletionRequest::new(config.model.clone(), vec![ChatMessage::user(content)]);
    let response = inference
        .chat_completion(request)
        .await
        .map_err(QueryGeneratorError::Inference)?;

    Ok(response.completion_message.content)
}
