//! Generator configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use socagen_core::traits::{TextGenerator, DEFAULT_MAX_NEW_TOKENS};

use crate::hf::HuggingFaceProvider;
use crate::ollama::OllamaProvider;

/// Configuration for a single generation backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental
/// exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeneratorConfig {
    Hf {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
    },
    Ollama {
        #[serde(default = "default_ollama_url")]
        base_url: String,
    },
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorConfig::Hf {
                api_key: _,
                base_url,
            } => f
                .debug_struct("Hf")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .finish(),
            GeneratorConfig::Ollama { base_url } => f
                .debug_struct("Ollama")
                .field("base_url", base_url)
                .finish(),
        }
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

/// Top-level socagen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocagenConfig {
    /// Generator configurations keyed by name.
    #[serde(default)]
    pub generators: HashMap<String, GeneratorConfig>,
    /// Default generator to use.
    #[serde(default = "default_generator")]
    pub default_generator: String,
    /// Default model to use.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Default temperature (0.0 for reproducible-ish output).
    #[serde(default)]
    pub default_temperature: f64,
    /// Max tokens generated per report.
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    /// Path of the persisted results document.
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

fn default_generator() -> String {
    "hf".to_string()
}
fn default_model() -> String {
    "google/flan-t5-base".to_string()
}
fn default_max_new_tokens() -> u32 {
    DEFAULT_MAX_NEW_TOKENS
}
fn default_results_file() -> PathBuf {
    PathBuf::from("./results.json")
}

impl Default for SocagenConfig {
    fn default() -> Self {
        Self {
            generators: HashMap::new(),
            default_generator: default_generator(),
            default_model: default_model(),
            default_temperature: 0.0,
            max_new_tokens: default_max_new_tokens(),
            results_file: default_results_file(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a generator config.
fn resolve_generator_config(config: &GeneratorConfig) -> GeneratorConfig {
    match config {
        GeneratorConfig::Hf { api_key, base_url } => GeneratorConfig::Hf {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
        },
        GeneratorConfig::Ollama { base_url } => GeneratorConfig::Ollama {
            base_url: resolve_env_vars(base_url),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `socagen.toml` in the current directory
/// 2. `~/.config/socagen/config.toml`
///
/// Environment variable override: `SOCAGEN_HF_KEY`.
pub fn load_config() -> Result<SocagenConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SocagenConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("socagen.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SocagenConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SocagenConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("SOCAGEN_HF_KEY") {
        config
            .generators
            .entry("hf".into())
            .or_insert(GeneratorConfig::Hf {
                api_key: String::new(),
                base_url: None,
            });
        if let Some(GeneratorConfig::Hf { api_key, .. }) = config.generators.get_mut("hf") {
            *api_key = key;
        }
    }

    // Resolve env vars in all generator configs
    let resolved: HashMap<String, GeneratorConfig> = config
        .generators
        .iter()
        .map(|(k, v)| (k.clone(), resolve_generator_config(v)))
        .collect();
    config.generators = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("socagen"))
}

/// Create a generator instance from its configuration.
pub fn create_generator(
    name: &str,
    config: &GeneratorConfig,
) -> Result<Arc<dyn TextGenerator>> {
    tracing::debug!(name, config = ?config, "creating generator");
    match config {
        GeneratorConfig::Hf { api_key, base_url } => Ok(Arc::new(HuggingFaceProvider::new(
            api_key,
            base_url.clone(),
        ))),
        GeneratorConfig::Ollama { base_url } => Ok(Arc::new(OllamaProvider::new(base_url))),
    }
}
