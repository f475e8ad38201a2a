//! The typed output of a translation run.
//!
//! [`GlobalConfig`] holds one sub-structure (or field) per rule domain. Each
//! field is owned by exactly one rule; see [`crate::rules::RuleKind`] for the
//! owner of each.

mod credentials;
mod proxy;

pub use credentials::*;
pub use proxy::*;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Accumulated agent settings. Built fresh per run and threaded through every
/// rule by `&mut`; callers only ever see a fully translated instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Owned by `credentials`.
    pub credentials: CredentialsConfig,
    /// Owned by `region`.
    pub region: Option<String>,
    /// Owned by `metrics_collection_interval`.
    pub interval: Option<Duration>,
    /// Owned by `debug`.
    pub debug: bool,
    /// Owned by `logfile`.
    pub logfile: Option<PathBuf>,
    /// Owned by `omit_hostname`.
    pub omit_hostname: bool,
    /// Owned by `proxy`.
    pub proxy: Option<ProxyConfig>,
}

impl GlobalConfig {
    /// Log a redacted summary of the translated settings.
    pub fn log_summary(&self) {
        tracing::info!("Agent config translated:");
        tracing::info!(
            "  credentials: profile={}, role_arn={}, static_keys={}",
            self.credentials.profile.as_deref().unwrap_or("(none)"),
            self.credentials.role_arn.as_deref().unwrap_or("(none)"),
            self.credentials.has_static_keys()
        );
        tracing::info!("  region:      {}", self.region.as_deref().unwrap_or("(none)"));
        tracing::info!(
            "  interval:    {}",
            self.interval
                .map(|d| format!("{}s", d.as_secs()))
                .unwrap_or_else(|| "(default)".to_string())
        );
        tracing::info!("  debug:       {}", self.debug);
        tracing::info!(
            "  logfile:     {}",
            self.logfile
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        );
        tracing::info!("  hostname:    omit={}", self.omit_hostname);
        tracing::info!(
            "  proxy:       {}",
            self.proxy.as_ref().map(|p| p.address.as_str()).unwrap_or("(none)")
        );
    }

    /// Return a redacted view safe for diagnostics output (no secrets).
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "credentials": self.credentials.redacted(),
            "region": self.region,
            "interval_secs": self.interval.map(|d| d.as_secs()),
            "debug": self.debug,
            "logfile": self.logfile,
            "omit_hostname": self.omit_hostname,
            "proxy": self.proxy,
        })
    }
}

#[cfg(test)]
mod tests;
