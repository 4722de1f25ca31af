//! textgen CLI - send one prompt to a local text generation server
//!
//! Usage:
//!     textgen [OPTIONS] [PROMPT]
//!
//! Every option is explicit: with no arguments the tool always sends
//! "Why is the sky blue?" to llama3:8b at http://localhost:11434/api/generate.
//! The environment never changes the request.
//!
//! Environment Variables:
//!     RUST_LOG: Log filter for stderr diagnostics (default: warn)

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use textgen::{ClientConfig, TextGenerationClient, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROMPT};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Send a single non-streaming generate request and print the result
#[derive(Parser, Debug)]
#[command(name = "textgen")]
#[command(about = "Send a single prompt to a local text generation server")]
#[command(after_help = r#"Examples:
    # Ask the default question with llama3:8b
    textgen

    # Use another model and prompt
    textgen --model mistral "Write a haiku about Rust"

    # Talk to a server on another host, giving up after 60 seconds
    textgen --endpoint http://gpu-box:11434/api/generate --timeout 60
"#)]
struct Cli {
    /// Generate endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Request timeout in seconds, at least 1 (waits indefinitely if not set)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Do not print the raw HTTP response
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Prompt to send
    #[arg(default_value = DEFAULT_PROMPT)]
    prompt: String,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.endpoint, &self.model)
            .with_prompt(&self.prompt)
            .with_verbose(!self.quiet);

        match self.timeout {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = cli.client_config();
    debug!("Client configuration: {:?}", config);

    let client = TextGenerationClient::new(config)?;
    let result = client
        .generate_configured()
        .await
        .with_context(|| format!("Generate request to {} failed", client.endpoint()))?;

    println!("{}", serde_json::to_string_pretty(&result.to_json())?);

    Ok(())
}
