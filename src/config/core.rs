use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::retry::RetryConfig;
use crate::io::output::OutputFormat;

/// Root configuration structure, read from `.potability.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PotabilityConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Retry policy for the remote backend
    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Which classifier implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Built-in threshold heuristic with simulated latency
    #[default]
    Heuristic,
    /// HTTP model service
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Simulated model latency for the heuristic backend (default: 1500)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Required when `backend = "remote"`
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            latency_ms: default_latency_ms(),
            remote: None,
        }
    }
}

impl ClassifierConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Full URL the parameter set is POSTed to
    pub endpoint: String,

    /// Per-request timeout (default: 10)
    #[serde(default = "default_request_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl RemoteConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_seconds: default_request_timeout_seconds(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,

    /// ASCII only, no colors
    #[serde(default)]
    pub plain: bool,
}

pub(crate) fn default_latency_ms() -> u64 {
    1500
}

fn default_request_timeout_seconds() -> u64 {
    10
}
