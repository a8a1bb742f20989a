//! Server configuration for promptcraft-server
//!
//! Loads `promptcraft.toml` with listener, Gemini and diagram settings. A
//! missing file is not an error: every field has a default, and the Gemini
//! API key itself is always read from the environment.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use llm::config::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use llm::RemoteLlmConfig;

use crate::engine::DiagramPolicy;

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Gemini provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// API base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Per-call timeout in seconds; unset means no timeout
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Resolve the provider config, reading the API key from the environment.
    pub fn remote_llm_config(&self) -> llm::Result<RemoteLlmConfig> {
        let config = RemoteLlmConfig::from_env(&self.api_key_env, &self.base_url, &self.model)?;
        Ok(match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}

/// Diagram handling configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub policy: DiagramPolicy,
}

/// Complete server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub gemini: GeminiConfig,
    pub diagram: DiagramConfig,
}

impl ServerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ServerConfigError> {
        let config: ServerConfig = toml::from_str(content).map_err(ServerConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ServerConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ServerConfigError::ReadError)?;
        Self::from_toml_str(&content)
    }

    /// Apply command-line or environment overrides for the listener.
    pub fn with_listen_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ServerConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ServerConfigError::InvalidConfig("server.host must not be empty".to_string()));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ServerConfigError::InvalidConfig("gemini.model must not be empty".to_string()));
        }
        if self.gemini.api_key_env.trim().is_empty() {
            return Err(ServerConfigError::InvalidConfig(
                "gemini.api_key_env must not be empty".to_string(),
            ));
        }
        if self.gemini.timeout_secs == Some(0) {
            return Err(ServerConfigError::InvalidConfig(
                "gemini.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Address the server binds to, as `host:port`. Host names are resolved at bind time.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
