//! Text-generation capability consumed by the report assembler.
//!
//! Backends live in the `socagen-providers` crate; the assembler only
//! sees this trait, so tests can substitute a deterministic fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default number of new tokens requested per report.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 300;

/// Trait for backends that turn a prompt into prose.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g. "hf").
    fn name(&self) -> &str;

    /// Generate text from a prompt. Treated as slow, non-deterministic,
    /// and possibly unavailable.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse>;
}

/// Request to generate one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g. "google/flan-t5-base").
    pub model: String,
    /// The fully rendered prompt.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response from a text-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated prose.
    pub text: String,
    /// Model that actually produced the response.
    pub model: String,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}
