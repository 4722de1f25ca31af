//! HTTP client for the generate endpoint

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::io::{self, Write};
use tracing::{debug, info, warn};
use url::{Host, Url};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::model::{GenerationRequest, GenerationResult};

/// Client posting one-shot generate requests to an Ollama-style server
#[derive(Debug, Clone)]
pub struct TextGenerationClient {
    config: ClientConfig,
    endpoint: Url,
    client: Client,
}

impl TextGenerationClient {
    /// Create a new TextGenerationClient
    ///
    /// Fails if the configured endpoint is not an absolute `http`/`https` URL
    /// with a host.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        let mut builder = Client::builder();
        if is_loopback(&endpoint) {
            // A local server is never reached through HTTP(S)_PROXY
            builder = builder.no_proxy();
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            config,
            endpoint,
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send a single non-streaming generate request.
    ///
    /// A 200 response yields its decoded JSON body. Any other status yields
    /// [`GenerationResult::Failed`] without reading the body. Transport
    /// failures and undecodable 200 bodies are returned as errors.
    ///
    /// In verbose mode the raw response is printed to stdout first.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<GenerationResult> {
        self.generate_with_echo(model, prompt, &mut io::stdout()).await
    }

    /// Same as [`generate`](Self::generate), writing the raw response line to
    /// `echo` instead of stdout.
    pub async fn generate_with_echo<W: Write>(
        &self,
        model: &str,
        prompt: &str,
        echo: &mut W,
    ) -> Result<GenerationResult> {
        let request = GenerationRequest::new(model, prompt);

        debug!(
            "POST {} (model: {}, prompt: {} bytes)",
            self.endpoint,
            model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        if self.config.verbose {
            writeln!(echo, "{:?}", response)?;
            echo.flush()?;
        }

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Generate request to {} failed: {}", self.endpoint, status);
            return Ok(GenerationResult::Failed {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        info!("Received {} byte response from {}", bytes.len(), self.endpoint);

        Ok(GenerationResult::Success(body))
    }

    /// Send the model and prompt held in the client's configuration
    pub async fn generate_configured(&self) -> Result<GenerationResult> {
        self.generate(&self.config.model, &self.config.prompt).await
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| ClientError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidEndpoint(format!(
            "{}: unsupported scheme '{}'",
            endpoint,
            url.scheme()
        )));
    }
    if url.host().is_none() {
        return Err(ClientError::InvalidEndpoint(format!(
            "{}: missing host",
            endpoint
        )));
    }

    Ok(url)
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

/// Build a client from `config` and run one generate call with its model and prompt
pub async fn generate_text(config: ClientConfig) -> Result<GenerationResult> {
    TextGenerationClient::new(config)?.generate_configured().await
}
