//! Configuration loading for Oncosym.
//! Reads oncosym.toml from the current directory or the path in the
//! ONCOSYM_CONFIG env var. Every field has a default, and a missing file
//! yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use oncosym_model::{ModelSettings, TrainingConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_weight_decay")]
    pub weight_decay: f64,
    #[serde(default)]
    pub retrain: bool,
}

fn default_artifact_dir()  -> String { "./artifacts".to_string() }
fn default_num_samples()   -> usize  { 1000 }
fn default_seed()          -> u64    { 42 }
fn default_epochs()        -> usize  { 300 }
fn default_learning_rate() -> f64    { 0.1 }
fn default_weight_decay()  -> f64    { 1e-4 }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_dir:  default_artifact_dir(),
            num_samples:   default_num_samples(),
            seed:          default_seed(),
            epochs:        default_epochs(),
            learning_rate: default_learning_rate(),
            weight_decay:  default_weight_decay(),
            retrain:       false,
        }
    }
}

impl ModelConfig {
    pub fn settings(&self) -> ModelSettings {
        ModelSettings {
            artifact_dir: PathBuf::from(&self.artifact_dir),
            num_samples:  self.num_samples,
            seed:         self.seed,
            training: TrainingConfig {
                epochs:        self.epochs,
                learning_rate: self.learning_rate,
                weight_decay:  self.weight_decay,
            },
            retrain: self.retrain,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "oncosym=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

mod tests;

/// Where a loaded [`Config`] came from. Reported once logging is up, since
/// the log filter itself is part of the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was absent and defaults were used.
    Defaults(PathBuf),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            Self::File(path) => tracing::info!("Config loaded from {}", path.display()),
            Self::Defaults(path) => {
                tracing::warn!("Config file not found: {}, using defaults", path.display())
            }
        }
    }
}

impl Config {
    /// Load configuration from oncosym.toml.
    /// Checks ONCOSYM_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<(Self, ConfigSource)> {
        let path = std::env::var("ONCOSYM_CONFIG")
            .unwrap_or_else(|_| "oncosym.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<(Self, ConfigSource)> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Bind address; ONCOSYM_BIND overrides the configured host and port.
    pub fn bind_addr(&self) -> String {
        std::env::var("ONCOSYM_BIND")
            .unwrap_or_else(|_| format!("{}:{}", self.server.host, self.server.port))
    }
}
