//! Generation outcome types

use serde::Deserialize;
use serde_json::{json, Value};

/// Outcome of one generate call
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// Decoded body of a 200 response, unchanged
    Success(Value),
    /// Any status other than 200. The body is never read.
    Failed { status: u16 },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Success payload, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(body) => Some(body),
            Self::Failed { .. } => None,
        }
    }

    /// Human-readable failure message, if any
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failed { status } => Some(format!("Request failed with status code {}", status)),
        }
    }

    /// Render as a single JSON value: the success body itself, or
    /// `{"error": "Request failed with status code N"}`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(body) => body.clone(),
            Self::Failed { .. } => json!({ "error": self.error_message() }),
        }
    }

    /// Decode a successful body into [`GenerateResponse`].
    ///
    /// Returns `None` for a failed call, `Some(Err(_))` when the body does not
    /// follow the Ollama generate schema.
    pub fn parse_response(&self) -> Option<serde_json::Result<GenerateResponse>> {
        self.payload().map(GenerateResponse::deserialize)
    }
}

/// Typed view of a non-streaming Ollama generate response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub model: String,
    pub created_at: String,
    pub response: String,
    pub done: bool,
    #[serde(default)]
    pub done_reason: Option<String>,
    #[serde(default)]
    pub context: Option<Vec<i64>>,
    /// Durations are in nanoseconds
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub load_duration: Option<u64>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
    #[serde(default)]
    pub prompt_eval_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
    #[serde(default)]
    pub eval_duration: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_renders_error_object() {
        let result = GenerationResult::Failed { status: 404 };

        assert!(!result.is_success());
        assert!(result.payload().is_none());
        assert_eq!(
            result.error_message().as_deref(),
            Some("Request failed with status code 404")
        );
        assert_eq!(
            result.to_json(),
            json!({"error": "Request failed with status code 404"})
        );
        assert!(result.parse_response().is_none());
    }

    #[test]
    fn test_success_renders_body_unchanged() {
        let body = json!({"response": "Rayleigh scattering.", "done": true, "extra": [1, 2]});
        let result = GenerationResult::Success(body.clone());

        assert!(result.is_success());
        assert!(result.error_message().is_none());
        assert_eq!(result.payload(), Some(&body));
        assert_eq!(result.to_json(), body);
    }

    #[test]
    fn test_parse_ollama_body() {
        let result = GenerationResult::Success(json!({
            "model": "llama3:8b",
            "created_at": "2024-05-01T12:00:00.000Z",
            "response": "Because of Rayleigh scattering.",
            "done": true,
            "done_reason": "stop",
            "context": [1, 2, 3],
            "total_duration": 5_000_000_000u64,
            "eval_count": 42
        }));

        let parsed = result.parse_response().unwrap().unwrap();
        assert_eq!(parsed.model, "llama3:8b");
        assert_eq!(parsed.response, "Because of Rayleigh scattering.");
        assert!(parsed.done);
        assert_eq!(parsed.done_reason.as_deref(), Some("stop"));
        assert_eq!(parsed.context, Some(vec![1, 2, 3]));
        assert_eq!(parsed.total_duration, Some(5_000_000_000));
        assert_eq!(parsed.eval_count, Some(42));
        assert_eq!(parsed.load_duration, None);
    }

    #[test]
    fn test_parse_foreign_body_fails() {
        let result = GenerationResult::Success(json!({"unexpected": true}));
        assert!(result.parse_response().unwrap().is_err());
    }
}
