//! Client configuration

use std::time::Duration;

/// Generate endpoint of a locally running Ollama server
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

pub const DEFAULT_MODEL: &str = "llama3:8b";

pub const DEFAULT_PROMPT: &str = "Why is the sky blue?";

/// Settings for a [`TextGenerationClient`](crate::TextGenerationClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub model: String,
    pub prompt: String,
    /// Request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    /// Print the raw HTTP response before inspecting its status
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            timeout: None,
            verbose: true,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig for the given endpoint and model
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
