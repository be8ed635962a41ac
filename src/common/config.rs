//! Runtime configuration loaded from the process environment.
//!
//! The snapshot is taken once when the library is loaded; later changes to the
//! environment are not observed.

use std::env;

/// Default `EnvFilter` directive when `NATIVECALC_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Snapshot of configuration values consumed by the bridge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BridgeCfg {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Whether per-operation diagnostic traces are emitted.
    pub trace: bool,
}

impl Default for BridgeCfg {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            trace: true,
        }
    }
}

impl BridgeCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_filter = lookup("NATIVECALC_LOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_filter);
        let trace = lookup("NATIVECALC_TRACE")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.trace);

        Self { log_filter, trace }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
