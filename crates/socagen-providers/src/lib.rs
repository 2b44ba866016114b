//! socagen-providers — text-generation backend integrations.
//!
//! Implements the `TextGenerator` trait for the Hugging Face Inference
//! API and Ollama, plus a mock generator for deterministic tests.

pub mod config;
pub mod error;
pub mod hf;
pub mod mock;
pub mod ollama;

pub use config::{
    create_generator, load_config, load_config_from, GeneratorConfig, SocagenConfig,
};
pub use error::ProviderError;
