//! Generate request payload

use serde::Serialize;

/// Body of a `POST /api/generate` call.
///
/// Responses are always requested in one piece, so `stream` is fixed to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    stream: bool,
}

impl GenerationRequest {
    /// Create a non-streaming request. Inputs are not validated.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }

    pub fn stream(&self) -> bool {
        self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest::new("llama3:8b", "Why is the sky blue?");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "llama3:8b",
                "prompt": "Why is the sky blue?",
                "stream": false
            })
        );
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        let request = GenerationRequest::new("", "");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body, json!({"model": "", "prompt": "", "stream": false}));
        assert!(!request.stream());
    }
}
