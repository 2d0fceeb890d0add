//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a smoke run.
//! All types derive Serde traits for deserialization from config files, and
//! every default is the compiled-in value used when no file is given.

use serde::{Deserialize, Serialize};

/// Root configuration for a smoke run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SmokeConfig {
    /// Hosts under test and request timeout.
    pub target: TargetConfig,

    /// Pass/fail thresholds for timing checks.
    pub thresholds: ThresholdConfig,

    /// Console output settings.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote endpoints exercised by the checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Root address every API path is resolved under (e.g., "https://host/api").
    pub base_url: String,

    /// Realtime endpoint. Derived from `base_url` when unset.
    pub socket_url: Option<String>,

    /// Object storage host probed for reachability.
    pub storage_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Route requests through proxies named in the environment.
    pub system_proxy: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "https://trafficjamz.v2u.us/api".to_string(),
            socket_url: None,
            storage_url: "https://music.c12d1726f92c6e6a2c1c020e39d2e9a9.r2.cloudflarestorage.com"
                .to_string(),
            timeout_secs: 10,
            system_proxy: true,
        }
    }
}

impl TargetConfig {
    /// Resolve an API path against the base URL.
    ///
    /// Plain concatenation: the base URL's own path (usually `/api`) is kept.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// The realtime endpoint, either configured or derived from the base URL.
    pub fn socket_url(&self) -> String {
        if let Some(url) = &self.socket_url {
            return url.clone();
        }

        let base = self.base_url.trim_end_matches('/');
        match base.strip_suffix("/api") {
            Some(root) => format!("{}/socket.io/", root),
            None => format!("{}/socket.io/", base),
        }
    }
}

/// Thresholds for checks that judge measured values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Round trips at or above this many milliseconds fail the latency check.
    pub max_latency_ms: u64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            max_latency_ms: 2000,
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit ANSI colors (green=pass, red=fail, yellow=announcement).
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
