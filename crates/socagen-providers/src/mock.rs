//! Mock generator for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use socagen_core::traits::{GenerateRequest, GenerateResponse, TextGenerator};

/// A mock text generator for exercising the assembly pipeline without
/// real API calls.
///
/// Returns configurable responses based on prompt content matching and
/// records every request it receives, in order.
pub struct MockGenerator {
    /// Map of prompt substring → response text.
    responses: HashMap<String, String>,
    /// Default response if no prompt matches.
    default_response: String,
    /// When set, every call fails with this message.
    failure: Option<String>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Every request received, in call order.
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockGenerator {
    /// Create a mock with the given prompt→response mappings.
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_response: "Strengths:\n- placeholder".to_string(),
            failure: None,
            call_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always returns the same text.
    pub fn with_fixed_response(response: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: response.to_string(),
            failure: None,
            call_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose every call fails.
    pub fn failing(message: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: String::new(),
            failure: Some(message.to_string()),
            call_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of calls made to this generator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = &self.failure {
            anyhow::bail!("{message}");
        }

        // Find a matching response based on prompt content
        let text = self
            .responses
            .iter()
            .find(|(key, _)| request.prompt.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_response.clone());

        Ok(GenerateResponse {
            text,
            model: request.model.clone(),
            latency_ms: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: "mock-model".into(),
            prompt: prompt.into(),
            max_new_tokens: 300,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn fixed_response() {
        let generator = MockGenerator::with_fixed_response("Strengths:\n- focus");
        let response = generator.generate(&request("anything")).await.unwrap();
        assert_eq!(response.text, "Strengths:\n- focus");
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn prompt_matching() {
        let mut responses = HashMap::new();
        responses.insert("friendly mentor".to_string(), "student text".to_string());
        responses.insert("academic advisor".to_string(), "educator text".to_string());

        let generator = MockGenerator::new(responses);

        let student = generator
            .generate(&request("You are a friendly mentor..."))
            .await
            .unwrap();
        assert_eq!(student.text, "student text");

        let educator = generator
            .generate(&request("You are an academic advisor..."))
            .await
            .unwrap();
        assert_eq!(educator.text, "educator text");

        let recorded = generator.requests();
        assert_eq!(recorded.len(), 2);
        assert!(recorded[0].prompt.contains("friendly mentor"));
    }

    #[tokio::test]
    async fn scripted_failure() {
        let generator = MockGenerator::failing("backend down");
        let err = generator.generate(&request("anything")).await.unwrap_err();
        assert!(err.to_string().contains("backend down"));
        assert_eq!(generator.call_count(), 1);
    }
}
