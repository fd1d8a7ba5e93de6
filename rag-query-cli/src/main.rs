//! rag-query CLI: generate a retrieval query from conversation messages.
//! Config from env (.env supported) with CLI flag overrides.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use llm_client::{EnvLlmConfig, OpenAILlmClient};
use memory_query_generator::{generate_rag_query, QueryGeneratorContext, QueryGeneratorKind};
use rag_query_cli::{init_tracing, parse_messages, resolve_config, Cli, Commands, GenerateArgs};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    match cli.command {
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Config(args) => {
            let config = resolve_config(&args, |key| std::env::var(key).ok())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Handle the generate command.
///
/// The llm generator gets an OpenAI client built from OPENAI_API_KEY / OPENAI_BASE_URL / MODEL.
async fn handle_generate(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args, |key| std::env::var(key).ok())?;
    let messages = parse_messages(&args.messages, args.json)?;

    let mut context = QueryGeneratorContext::new();
    if config.kind() == QueryGeneratorKind::Llm {
        let llm_config = EnvLlmConfig::from_env()
            .context("Load LLM config from .env (OPENAI_API_KEY, OPENAI_BASE_URL, MODEL)")?;
        context = context.with_inference(Arc::new(OpenAILlmClient::from_config(&llm_config)));
    }

    tracing::info!(generator = %config.kind(), message_count = messages.len(), "rag-query: generating");
    let query = generate_rag_query(&config, &messages, &context).await?;
    println!("{}", query);
    Ok(())
}
