//! textgen: one-shot client for a locally hosted text generation server
//!
//! Posts `{"model", "prompt", "stream": false}` to an Ollama-style
//! `/api/generate` endpoint and returns either the decoded JSON body or the
//! failing HTTP status.
//!
//! # Example
//!
//! ```no_run
//! use textgen::{ClientConfig, GenerationResult, TextGenerationClient};
//!
//! #[tokio::main]
//! async fn main() -> textgen::Result<()> {
//!     let client = TextGenerationClient::new(ClientConfig::default())?;
//!
//!     match client.generate("llama3:8b", "Why is the sky blue?").await? {
//!         GenerationResult::Success(body) => println!("{}", body),
//!         GenerationResult::Failed { status } => eprintln!("status {}", status),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;

pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROMPT};
pub use error::{ClientError, Result};
pub use model::{
    generate_text, GenerateResponse, GenerationRequest, GenerationResult, TextGenerationClient,
};
