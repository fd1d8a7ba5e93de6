//! Generator trait and dispatch.

use async_trait::async_trait;
use prompt::InterleavedContent;
use tracing::debug;

use crate::config::QueryGeneratorConfig;
use crate::context::QueryGeneratorContext;
use crate::default_generator::generate_default;
use crate::error::Result;
use crate::llm_generator::generate_template;

/// A strategy for turning conversation messages into a retrieval query.
#[async_trait]
pub trait QueryGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(
        &self,
        messages: &[InterleavedContent],
        context: &QueryGeneratorContext,
    ) -> Result<String>;
}

/// Generates the query that will be used to retrieve relevant information from the memory bank.
///
/// Routes to the generator selected by `config`; errors from the generator are returned unchanged.
pub async fn generate_rag_query(
    config: &QueryGeneratorConfig,
    messages: &[InterleavedContent],
    context: &QueryGeneratorContext,
) -> Result<String> {
    debug!(
        generator = %config.kind(),
        message_count = messages.len(),
        "generate_rag_query: dispatching"
    );
    match config {
        QueryGeneratorConfig::Default(c) => Ok(generate_default(c, messages)),
        QueryGeneratorConfig::Llm(c) => generate_template(c, messages, context).await,
    }
}
