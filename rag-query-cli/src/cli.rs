//! CLI parser and config loading.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use memory_query_generator::QueryGeneratorConfig;
use prompt::InterleavedContent;

#[derive(Parser)]
#[command(name = "rag-query")]
#[command(about = "Generate a RAG retrieval query from conversation messages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Also append logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a query from MESSAGE arguments and print it.
    Generate(GenerateArgs),
    /// Print the resolved generator config as JSON.
    Config(GenerateArgs),
}

/// Generator selection; each flag overrides its RAG_QUERY_* environment variable.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Generator kind: default | llm (RAG_QUERY_GENERATOR).
    #[arg(short, long)]
    pub generator: Option<String>,

    /// Separator for the default generator (RAG_QUERY_SEPARATOR).
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Model for the llm generator (RAG_QUERY_MODEL, then MODEL).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Inline Jinja template for the llm generator (RAG_QUERY_TEMPLATE).
    #[arg(short, long, conflicts_with = "template_file")]
    pub template: Option<String>,

    /// Read the llm template from a file.
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Parse each MESSAGE as JSON content (string, item, or item list).
    #[arg(long)]
    pub json: bool,

    /// Conversation messages, oldest first.
    pub messages: Vec<String>,
}

/// Resolves the generator config from CLI flags, falling back to `lookup` (environment).
pub fn resolve_config<F>(args: &GenerateArgs, lookup: F) -> Result<QueryGeneratorConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let template = match &args.template_file {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Read template file {}", path.display()))?,
        ),
        None => args.template.clone(),
    };
    let merged = |key: &str| {
        let flag = match key {
            "RAG_QUERY_GENERATOR" => args.generator.clone(),
            "RAG_QUERY_SEPARATOR" => args.separator.clone(),
            "RAG_QUERY_MODEL" => args.model.clone(),
            "RAG_QUERY_TEMPLATE" => template.clone(),
            _ => None,
        };
        flag.or_else(|| lookup(key))
    };
    Ok(QueryGeneratorConfig::from_lookup(merged)?)
}

/// Turns raw MESSAGE arguments into message content.
pub fn parse_messages(raw: &[String], json: bool) -> Result<Vec<InterleavedContent>> {
    raw.iter()
        .map(|m| {
            if json {
                serde_json::from_str(m).with_context(|| format!("Parse message as JSON: {}", m))
            } else {
                Ok(InterleavedContent::from(m.as_str()))
            }
        })
        .collect()
}
