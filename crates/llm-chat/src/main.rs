use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use llm_chat::{ChatClient, ChatMessage, LlmConfig};

#[derive(Parser, Debug)]
#[command(
    name = "llm-chat",
    version,
    about = "Send one chat completion request to an OpenAI-compatible endpoint"
)]
struct Args {
    /// System prompt
    #[arg(long, default_value = "You are a helpful assistant.")]
    system: String,

    /// User prompt
    #[arg(long, default_value = "Introduce LangChain in one sentence.")]
    prompt: String,

    /// Overrides LLM_MODEL / the configured model
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = LlmConfig::load()?;
    if let Some(model) = args.model {
        config.model = model;
    }

    let client = ChatClient::new(config)?;
    info!("Using model {}", client.model());

    let messages = [ChatMessage::system(args.system), ChatMessage::user(args.prompt)];
    let answer = client.complete(&messages).await?;

    println!("{}", answer);
    Ok(())
}
