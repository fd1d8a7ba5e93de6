//! Query generator configuration.
//!
//! [`QueryGeneratorConfig`] is tagged by `type` when (de)serialized:
//!
//! ```json
//! {"type": "default", "sep": " "}
//! {"type": "llm", "model": "gpt-4o-mini", "template": "Summarize: {{ messages[0] }}"}
//! ```
//!
//! Unknown tags are rejected with [`QueryGeneratorError::UnsupportedGeneratorKind`]
//! while the config is built, so the dispatcher only ever sees known variants.

use std::env;
use std::fmt;
use std::str::FromStr;

use llm_client::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

use crate::default_generator::DefaultQueryGenerator;
use crate::error::{QueryGeneratorError, Result};
use crate::generator::QueryGenerator;
use crate::llm_generator::LlmQueryGenerator;

/// Separator used when a default config omits `sep`.
pub const DEFAULT_SEPARATOR: &str = " ";

const ENV_GENERATOR: &str = "RAG_QUERY_GENERATOR";
const ENV_SEPARATOR: &str = "RAG_QUERY_SEPARATOR";
const ENV_MODEL: &str = "RAG_QUERY_MODEL";
const ENV_TEMPLATE: &str = "RAG_QUERY_TEMPLATE";

/// Generator kind, the `type` tag of a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryGeneratorKind {
    Default,
    Llm,
}

impl QueryGeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryGeneratorKind::Default => "default",
            QueryGeneratorKind::Llm => "llm",
        }
    }
}

impl fmt::Display for QueryGeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryGeneratorKind {
    type Err = QueryGeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "default" => Ok(QueryGeneratorKind::Default),
            "llm" => Ok(QueryGeneratorKind::Llm),
            other => Err(QueryGeneratorError::UnsupportedGeneratorKind(
                other.to_string(),
            )),
        }
    }
}

/// Joins message text with `separator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultQueryGeneratorConfig {
    pub separator: String,
}

impl Default for DefaultQueryGeneratorConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Renders `template` over the messages and asks `model` for the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmQueryGeneratorConfig {
    pub model: String,
    pub template: String,
}

/// Which generator to run, with that generator's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawQueryGeneratorConfig",
    into = "RawQueryGeneratorConfig"
)]
pub enum QueryGeneratorConfig {
    Default(DefaultQueryGeneratorConfig),
    Llm(LlmQueryGeneratorConfig),
}

impl Default for QueryGeneratorConfig {
    fn default() -> Self {
        QueryGeneratorConfig::Default(DefaultQueryGeneratorConfig::default())
    }
}

impl QueryGeneratorConfig {
    pub fn default_with_separator(separator: impl Into<String>) -> Self {
        QueryGeneratorConfig::Default(DefaultQueryGeneratorConfig {
            separator: separator.into(),
        })
    }

    pub fn llm(model: impl Into<String>, template: impl Into<String>) -> Self {
        QueryGeneratorConfig::Llm(LlmQueryGeneratorConfig {
            model: model.into(),
            template: template.into(),
        })
    }

    pub fn kind(&self) -> QueryGeneratorKind {
        match self {
            QueryGeneratorConfig::Default(_) => QueryGeneratorKind::Default,
            QueryGeneratorConfig::Llm(_) => QueryGeneratorKind::Llm,
        }
    }

    /// Builds the generator for this config.
    pub fn build(&self) -> Box<dyn QueryGenerator> {
        match self {
            QueryGeneratorConfig::Default(c) => Box::new(DefaultQueryGenerator::new(c.clone())),
            QueryGeneratorConfig::Llm(c) => Box::new(LlmQueryGenerator::new(c.clone())),
        }
    }

    /// Loads from environment variables:
    /// RAG_QUERY_GENERATOR (`default` | `llm`, default `default`), RAG_QUERY_SEPARATOR,
    /// RAG_QUERY_MODEL (falls back to MODEL), RAG_QUERY_TEMPLATE (required for `llm`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind: QueryGeneratorKind = lookup(ENV_GENERATOR)
            .unwrap_or_else(|| QueryGeneratorKind::Default.as_str().to_string())
            .parse()?;
        let raw = RawQueryGeneratorConfig {
            kind: kind.as_str().to_string(),
            sep: lookup(ENV_SEPARATOR),
            model: lookup(ENV_MODEL).or_else(|| lookup("MODEL")),
            template: lookup(ENV_TEMPLATE),
        };
        Self::try_from(raw)
    }
}

/// Flat serialized form; every variant's fields are optional here and
/// validated when converting into [`QueryGeneratorConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawQueryGeneratorConfig {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template: Option<String>,
}

impl TryFrom<RawQueryGeneratorConfig> for QueryGeneratorConfig {
    type Error = QueryGeneratorError;

    fn try_from(raw: RawQueryGeneratorConfig) -> Result<Self> {
        match raw.kind.parse::<QueryGeneratorKind>()? {
            QueryGeneratorKind::Default => Ok(QueryGeneratorConfig::Default(
                DefaultQueryGeneratorConfig {
                    separator: raw.sep.unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
                },
            )),
            QueryGeneratorKind::Llm => {
                let template = raw
                    .template
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| {
                        QueryGeneratorError::Config(
                            "llm query generator requires a non-empty template".to_string(),
                        )
                    })?;
                Ok(QueryGeneratorConfig::Llm(LlmQueryGeneratorConfig {
                    model: raw.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                    template,
                }))
            }
        }
    }
}

impl From<QueryGeneratorConfig> for RawQueryGeneratorConfig {
    fn from(config: QueryGeneratorConfig) -> Self {
        let kind = config.kind().as_str().to_string();
        match config {
            QueryGeneratorConfig::Default(c) => RawQueryGeneratorConfig {
                kind,
                sep: Some(c.separator),
                model: None,
                template: None,
            },
            QueryGeneratorConfig::Llm(c) => RawQueryGeneratorConfig {
                kind,
                sep: None,
                model: Some(c.model),
                template: Some(c.template),
            },
        }
    }
}
