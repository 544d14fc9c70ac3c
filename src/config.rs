use crate::error::{ProofreadError, ProofreadResult};
use serde::de::Error as _;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_PROMPT: &str = "Proofread and improve this text";
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

/// Main application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub api_key: String,
    pub model: String,
    pub prompt: String,
    /// Pause around copy/paste keystrokes so the focused app can service the clipboard
    pub settle_delay_ms: u64,
}

/// On-disk shape. `null` and absent keys both fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_base_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    prompt: Option<String>,
    settle_delay_ms: Option<u64>,
}

impl Config {
    /// Build a config with defaults for everything but the key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }

    /// Load config from file. Either a usable config comes back or an error does.
    pub fn load_from(path: &Path) -> ProofreadResult<Self> {
        if !path.exists() {
            return Err(ProofreadError::ConfigMissing(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|err| match err {
            ProofreadError::ConfigMalformed { source, .. } => ProofreadError::ConfigMalformed {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse config JSON and apply defaults
    pub fn parse(content: &str) -> ProofreadResult<Self> {
        let malformed = |source: serde_json::Error| ProofreadError::ConfigMalformed {
            path: PathBuf::new(),
            source,
        };

        // Derived Deserialize also accepts arrays, filled by position
        let value: serde_json::Value = serde_json::from_str(content).map_err(malformed)?;
        if !value.is_object() {
            return Err(malformed(serde_json::Error::custom(
                "config must be a JSON object",
            )));
        }
        let file: ConfigFile = serde_json::from_value(value).map_err(malformed)?;

        let api_key = file.api_key.unwrap_or_default();
        if api_key.is_empty() {
            return Err(ProofreadError::MissingCredential);
        }

        Ok(Self {
            api_base_url: file
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            api_key,
            model: file.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            prompt: file.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            settle_delay_ms: file.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS),
        })
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("selectionproofread")
        .join("config.json")
}
