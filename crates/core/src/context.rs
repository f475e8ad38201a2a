//! Process context: run-scoped facts that rules may read during translation.
//!
//! The host builds one [`ProcessContext`] before translation starts and hands
//! out shared references. Nothing mutates it afterwards.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Role name whose credentials the agent uses when nothing else is named.
pub const DEFAULT_ROLE: &str = "default";

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

// ── Credential material ───────────────────────────────────────

/// Explicit credential tuple. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub token: Option<String>,
    pub profile: Option<String>,
    pub role_arn: Option<String>,
}

impl CredentialSet {
    pub fn is_empty(&self) -> bool {
        self.access_key.is_none()
            && self.secret_key.is_none()
            && self.token.is_none()
            && self.profile.is_none()
            && self.role_arn.is_none()
    }
}

/// Where a role's credentials come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CredentialSource {
    /// Secret reference: a shared credentials file, optionally with a profile
    /// and a role to assume on top of it.
    SharedFile {
        path: String,
        profile: Option<String>,
        role_arn: Option<String>,
    },
    /// Key material supplied directly by the host.
    Explicit(CredentialSet),
}

// ── Platform facts ────────────────────────────────────────────

/// How the agent is deployed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunMode {
    Ec2,
    OnPremise,
    #[default]
    Auto,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Ec2 => write!(f, "ec2"),
            RunMode::OnPremise => write!(f, "onPremise"),
            RunMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for RunMode {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ec2" => Ok(RunMode::Ec2),
            "onPremise" | "onPrem" => Ok(RunMode::OnPremise),
            "auto" => Ok(RunMode::Auto),
            other => Err(CoreError::InvalidSetting {
                field: "mode",
                value: other.to_string(),
                expected: "one of ec2, onPremise, onPrem, auto",
            }),
        }
    }
}

/// Operating system the translated configuration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetOs {
    Linux,
    Windows,
    Darwin,
}

impl TargetOs {
    /// The OS this process is running on. Unknown unixes count as Linux.
    pub fn host() -> Self {
        match env::consts::OS {
            "windows" => TargetOs::Windows,
            "macos" => TargetOs::Darwin,
            _ => TargetOs::Linux,
        }
    }
}

impl Default for TargetOs {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetOs::Linux => write!(f, "linux"),
            TargetOs::Windows => write!(f, "windows"),
            TargetOs::Darwin => write!(f, "darwin"),
        }
    }
}

impl FromStr for TargetOs {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(TargetOs::Linux),
            "windows" => Ok(TargetOs::Windows),
            "darwin" | "macos" => Ok(TargetOs::Darwin),
            other => Err(CoreError::InvalidSetting {
                field: "target_os",
                value: other.to_string(),
                expected: "one of linux, windows, darwin",
            }),
        }
    }
}

// ── Context ───────────────────────────────────────────────────

/// Read-only snapshot of cross-cutting facts for one translation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessContext {
    credentials: BTreeMap<String, CredentialSource>,
    mode: RunMode,
    target_os: TargetOs,
    region: Option<String>,
}

impl ProcessContext {
    pub fn builder() -> ProcessContextBuilder {
        ProcessContextBuilder::default()
    }

    /// Build a context from environment variables (call `load_dotenv()` first).
    /// Profile is read from `AGENTCFG_PROFILE`. When set (e.g. `PROD`), every
    /// key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Result<Self, CoreError> {
        let profile = env_opt("AGENTCFG_PROFILE").unwrap_or_default().to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build a context for a specific named env profile (empty string = default).
    pub fn for_profile(profile: &str) -> Result<Self, CoreError> {
        let p = profile.to_uppercase();
        let p = p.as_str();

        let mut builder = Self::builder().region(profiled_env_opt(p, "AWS_REGION"));

        if let Some(mode) = profiled_env_opt(p, "AGENT_MODE") {
            builder = builder.mode(mode.parse()?);
        }
        if let Some(os) = profiled_env_opt(p, "AGENT_TARGET_OS") {
            builder = builder.target_os(os.parse()?);
        }

        let explicit = CredentialSet {
            access_key: profiled_env_opt(p, "AWS_ACCESS_KEY_ID"),
            secret_key: profiled_env_opt(p, "AWS_SECRET_ACCESS_KEY"),
            token: profiled_env_opt(p, "AWS_SESSION_TOKEN"),
            profile: profiled_env_opt(p, "AWS_PROFILE"),
            role_arn: profiled_env_opt(p, "AWS_ROLE_ARN"),
        };
        if let Some(path) = profiled_env_opt(p, "AWS_SHARED_CREDENTIALS_FILE") {
            if explicit.access_key.is_some() || explicit.secret_key.is_some() || explicit.token.is_some() {
                tracing::warn!(
                    path = %path,
                    "static AWS keys in the environment are ignored in favor of the shared credentials file"
                );
            }
            builder = builder.credential(
                DEFAULT_ROLE,
                CredentialSource::SharedFile {
                    path,
                    profile: explicit.profile,
                    role_arn: explicit.role_arn,
                },
            );
        } else if !explicit.is_empty() {
            builder = builder.credential(DEFAULT_ROLE, CredentialSource::Explicit(explicit));
        }

        Ok(builder.build())
    }

    pub fn credentials(&self) -> &BTreeMap<String, CredentialSource> {
        &self.credentials
    }

    pub fn credential(&self, role: &str) -> Option<&CredentialSource> {
        self.credentials.get(role)
    }

    /// Credentials registered under [`DEFAULT_ROLE`].
    pub fn default_credentials(&self) -> Option<&CredentialSource> {
        self.credential(DEFAULT_ROLE)
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn target_os(&self) -> TargetOs {
        self.target_os
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        let roles: Vec<&str> = self.credentials.keys().map(String::as_str).collect();
        tracing::info!(
            mode = %self.mode,
            target_os = %self.target_os,
            region = self.region.as_deref().unwrap_or("(none)"),
            credential_roles = ?roles,
            "process context initialized"
        );
    }
}

/// One-shot builder used by the host to populate a [`ProcessContext`].
#[derive(Debug, Default)]
pub struct ProcessContextBuilder {
    inner: ProcessContext,
}

impl ProcessContextBuilder {
    pub fn credential(mut self, role: impl Into<String>, source: CredentialSource) -> Self {
        self.inner.credentials.insert(role.into(), source);
        self
    }

    pub fn mode(mut self, mode: RunMode) -> Self {
        self.inner.mode = mode;
        self
    }

    pub fn target_os(mut self, os: TargetOs) -> Self {
        self.inner.target_os = os;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.inner.region = region;
        self
    }

    pub fn build(self) -> ProcessContext {
        self.inner
    }
}
