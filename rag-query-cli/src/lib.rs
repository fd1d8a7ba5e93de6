//! # rag-query-cli
//!
//! Argument parsing, config resolution and logging for the `rag-query` binary.

pub mod cli;
pub mod logger;

pub use cli::{parse_messages, resolve_config, Cli, Commands, GenerateArgs};
pub use logger::init_tracing;
