//! Hugging Face Inference API provider.
//!
//! Speaks the hosted text2text-generation endpoint, the network
//! equivalent of running a seq2seq model such as `google/flan-t5-base`
//! through a local pipeline.

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use socagen_core::traits::{GenerateRequest, GenerateResponse, TextGenerator};

use crate::error::ProviderError;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Hugging Face hosted inference provider.
pub struct HuggingFaceProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl HuggingFaceProvider {
    pub fn new(api_key: &str, base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }
}

#[derive(Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Serialize)]
struct HfParameters {
    max_new_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct HfGeneration {
    generated_text: String,
}

#[async_trait]
impl TextGenerator for HuggingFaceProvider {
    fn name(&self) -> &str {
        "hf"
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let start = Instant::now();

        let body = HfRequest {
            inputs: &request.prompt,
            parameters: HfParameters {
                max_new_tokens: request.max_new_tokens,
                temperature: request.temperature,
            },
        };

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, request.model))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        match status {
            401 | 403 => {
                return Err(ProviderError::AuthenticationFailed(
                    "invalid Hugging Face API token".to_string(),
                )
                .into());
            }
            404 => {
                return Err(ProviderError::ModelNotFound(request.model.clone()).into());
            }
            429 => {
                let retry_after_ms = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(|secs| secs * 1000)
                    .unwrap_or(1000);
                return Err(ProviderError::RateLimited { retry_after_ms }.into());
            }
            s if s >= 400 => {
                let message = response.text().await.unwrap_or_default();
                return Err(ProviderError::ApiError { status, message }.into());
            }
            _ => {}
        }

        let generations: Vec<HfGeneration> =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status: 0,
                message: format!("failed to parse response: {e}"),
            })?;

        let text = generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .unwrap_or_default();

        Ok(GenerateResponse {
            text,
            model: request.model.clone(),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
