//! # Memory Query Generator
//!
//! Turns a list of conversation messages into the single text query used to
//! retrieve supporting documents from a memory bank (RAG).
//!
//! Available generators:
//! - `DefaultQueryGenerator`: joins the plain text of every message with a separator
//! - `LlmQueryGenerator`: renders a Jinja template over the messages and asks an LLM
//!   to synthesize the query
//!
//! [`generate_rag_query`] picks the generator from a [`QueryGeneratorConfig`].
//!
//! ## Logging
//!
//! Generators emit `tracing` debug logs for the dispatch decision and the
//! rendered prompt size; the inference call itself is logged by llm-client.
//!
//! ## External Interactions
//!
//! - **prompt**: `InterleavedContent` messages, plain-text extraction, `ChatMessage`
//! - **llm-client**: `LlmClient` chat completion for the LLM generator
//!

mod config;
mod context;
mod default_generator;
mod error;
mod generator;
mod llm_generator;

pub use config::{
    DefaultQueryGeneratorConfig, LlmQueryGeneratorConfig, QueryGeneratorConfig,
    QueryGeneratorKind, DEFAULT_SEPARATOR,
};
pub use context::QueryGeneratorContext;
pub use default_generator::{generate_default, DefaultQueryGenerator};
pub use error::{QueryGeneratorError, Result};
pub use generator::{generate_rag_query, QueryGenerator};
pub use llm_generator::{generate_template, render_template, LlmQueryGenerator};
