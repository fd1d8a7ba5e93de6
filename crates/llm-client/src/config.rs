//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// Default model when `MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from environment variables: OPENAI_API_KEY (required), OPENAI_BASE_URL, MODEL, LLM_SYSTEM_PROMPT.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url =
            lookup("OPENAI_BASE_URL").unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        let llm_model = lookup("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let llm_system_prompt = lookup("LLM_SYSTEM_PROMPT").filter(|s| !s.trim().is_empty());
        Ok(Self {
            openai_api_key,
            openai_base_url,
            llm_model,
            llm_system_prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn requires_api_key() {
        let err = EnvLlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn applies_defaults() {
        let cfg = EnvLlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(cfg.base_url(), "https://api.openai.com/v1");
        assert_eq!(cfg.model(), DEFAULT_MODEL);
        assert_eq!(cfg.system_prompt(), None);
    }

    #[test]
    fn blank_system_prompt_is_ignored() {
        let cfg = EnvLlmConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("MODEL", "gpt-4o-mini"),
            ("LLM_SYSTEM_PROMPT", "   "),
        ]))
        .unwrap();
        assert_eq!(cfg.model(), "gpt-4o-mini");
        assert_eq!(cfg.system_prompt(), None);
    }
}
