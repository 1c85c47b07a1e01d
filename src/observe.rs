//! Logging bring-up for harness and bench binaries
//!
//! The numeric kernels stay silent; generation and harness layers emit
//! `tracing` events. This module installs a subscriber for binaries that
//! want to see them, with the usual `RUST_LOG` environment override.
//! Calling [`init`] more than once is harmless — later calls are ignored.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bfp_golden::observe::{init, LogConfig};
//!
//! init(&LogConfig::default());
//! tracing::info!(vectors = 128, "harness starting");
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Log level threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Standard single-line format.
    #[default]
    Full,
    /// Terse format for dense harness logs.
    Compact,
    /// Multi-line human-oriented format.
    Pretty,
}

/// Subscriber configuration, loadable from harness config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
}

/// Install the global subscriber. `RUST_LOG` overrides the configured
/// level when set. No-op if a subscriber is already installed.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));
    match config.format {
        LogFormat::Full => fmt().with_env_filter(filter).try_init().ok(),
        LogFormat::Compact => fmt().with_env_filter(filter).compact().try_init().ok(),
        LogFormat::Pretty => fmt().with_env_filter(filter).pretty().try_init().ok(),
    };
}
