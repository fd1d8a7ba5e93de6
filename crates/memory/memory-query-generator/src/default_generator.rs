//! Default query generator: plain text of every message joined by a separator.

use async_trait::async_trait;
use prompt::{interleaved_content_as_str, InterleavedContent};

use crate::config::DefaultQueryGeneratorConfig;
use crate::context::QueryGeneratorContext;
use crate::error::Result;
use crate::generator::QueryGenerator;

pub struct DefaultQueryGenerator {
    config: DefaultQueryGeneratorConfig,
}

impl DefaultQueryGenerator {
    pub fn new(config: DefaultQueryGeneratorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl QueryGenerator for DefaultQueryGenerator {
    fn name(&self) -> &str {
        "Default"
    }

    async fn generate(
        &self,
        messages: &[InterleavedContent],
        _context: &QueryGeneratorContext,
    ) -> Result<String> {
        Ok(generate_default(&self.config, messages))
    }
}

/// Joins the plain text of `messages` with `config.separator`, keeping order.
/// An empty list gives an empty string.
pub fn generate_default(
    config: &DefaultQueryGeneratorConfig,
    messages: &[InterleavedContent],
) -> String {
    messages
        .iter()
        .map(interleaved_content_as_str)
        .collect::<Vec<_>>()
        .join(&config.separator)
}
