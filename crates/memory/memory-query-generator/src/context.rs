//! Named extra parameters passed to every generator.

use std::fmt;
use std::sync::Arc;

use llm_client::LlmClient;

/// Call context for query generation. Only the LLM generator reads it.
#[derive(Clone, Default)]
pub struct QueryGeneratorContext {
    inference: Option<Arc<dyn LlmClient>>,
}

impl QueryGeneratorContext {
    /// Context without an inference capability.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inference(mut self, inference: Arc<dyn LlmClient>) -> Self {
        self.inference = Some(inference);
        self
    }

    pub fn inference(&self) -> Option<&dyn LlmClient> {
        self.inference.as_deref()
    }
}

impl fmt::Debug for QueryGeneratorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryGeneratorContext")
            .field("inference", &self.inference.is_some())
            .finish()
    }
}
