//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file, and
//! every field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the console.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// User service connection settings.
    pub api: ApiConfig,

    /// Initial list load retry settings.
    pub load: LoadConfig,

    /// Operation status polling settings.
    pub poll: PollConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// User service connection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the user service (e.g., "http://localhost:8080").
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Retry settings for loading the user list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoadConfig {
    /// Delay before the first retry; doubles for each further retry.
    pub initial_delay_ms: u64,

    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 2000,
            max_attempts: 2,
        }
    }
}

/// Backoff settings for polling an operation status.
///
/// With both limits unset the poll doubles its wait forever and never gives
/// up while the service keeps answering `Processing`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PollConfig {
    /// Wait after the first `Processing` answer.
    pub initial_delay_ms: u64,

    /// Upper bound for a single wait.
    pub max_delay_ms: Option<u64>,

    /// Upper bound for the number of status queries.
    pub max_checks: Option<u32>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 2000,
            max_delay_ms: None,
            max_checks: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default level for this crate's events when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
