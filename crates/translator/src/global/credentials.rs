//! Credentials block written by the `credentials` rule.

use serde::{Deserialize, Serialize};

/// AWS credential settings the agent authenticates with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub token: Option<String>,
    pub profile: Option<String>,
    pub role_arn: Option<String>,
    /// Only ever filled from the process context, never from user input.
    pub shared_credential_file: Option<String>,
}

impl CredentialsConfig {
    /// True when static keys (access + secret) are both present.
    pub fn has_static_keys(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }

    pub(crate) fn redacted(&self) -> serde_json::Value {
        serde_json::json!({
            "access_key": self.access_key.as_deref().map(mask),
            "secret_key": self.secret_key.as_ref().map(|_| "****"),
            "token": self.token.as_ref().map(|_| "****"),
            "profile": self.profile,
            "role_arn": self.role_arn,
            "shared_credential_file": self.shared_credential_file,
        })
    }
}

/// Keep the last four characters of an access key id.
fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
