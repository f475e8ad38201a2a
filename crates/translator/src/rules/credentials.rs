//! `credentials`: static keys, session token, profile and role ARN.

use agentcfg_core::{CredentialSet, CredentialSource, Node, ProcessContext, RunMode};

use crate::global::CredentialsConfig;
use crate::GlobalConfig;

use super::error::RuleError;
use super::section::{self, path};
use super::Rule;

pub const KEY: &str = "credentials";

/// Profile an on-premise agent falls back to when none is configured.
pub const ON_PREMISE_PROFILE: &str = "AmazonCloudWatchAgent";

/// Copies each present string field verbatim; absent fields keep their prior
/// value. Fields still unset afterwards are filled from the context's default
/// credential entry.
pub struct CredentialsRule;

impl Rule for CredentialsRule {
    fn key(&self) -> &'static str {
        KEY
    }

    fn apply(
        &self,
        section: &Node,
        ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError> {
        let Some(node) = section::mapping(KEY, section)? else {
            return Ok(());
        };

        let field = |name: &str| section::string(&path(KEY, name), node.get(name));
        let patch = CredentialSet {
            access_key: field("access_key")?,
            secret_key: field("secret_key")?,
            token: field("token")?,
            profile: field("profile")?,
            role_arn: field("role_arn")?,
        };

        let creds = &mut config.credentials;
        overwrite(&mut creds.access_key, patch.access_key);
        overwrite(&mut creds.secret_key, patch.secret_key);
        overwrite(&mut creds.token, patch.token);
        overwrite(&mut creds.profile, patch.profile);
        overwrite(&mut creds.role_arn, patch.role_arn);

        layer_context_defaults(creds, ctx);
        Ok(())
    }
}

fn overwrite(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

fn fill(slot: &mut Option<String>, default: Option<&String>) {
    if slot.is_none() {
        *slot = default.cloned();
    }
}

/// Access key, secret key and session token travel as one unit: they are
/// only taken from the context when none of the three is already set.
fn layer_context_defaults(creds: &mut CredentialsConfig, ctx: &ProcessContext) {
    match ctx.default_credentials() {
        Some(CredentialSource::Explicit(set)) => {
            if creds.access_key.is_none() && creds.secret_key.is_none() && creds.token.is_none() {
                creds.access_key = set.access_key.clone();
                creds.secret_key = set.secret_key.clone();
                creds.token = set.token.clone();
            }
            fill(&mut creds.profile, set.profile.as_ref());
            fill(&mut creds.role_arn, set.role_arn.as_ref());
        }
        Some(CredentialSource::SharedFile {
            path,
            profile,
            role_arn,
        }) => {
            fill(&mut creds.shared_credential_file, Some(path));
            fill(&mut creds.profile, profile.as_ref());
            fill(&mut creds.role_arn, role_arn.as_ref());
        }
        None => {}
    }

    if ctx.mode() == RunMode::OnPremise && creds.profile.is_none() {
        creds.profile = Some(ON_PREMISE_PROFILE.to_string());
    }
}
