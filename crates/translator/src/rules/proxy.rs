//! `proxy`: outbound HTTP proxy settings.

use agentcfg_core::{Node, ProcessContext};

use crate::global::ProxyConfig;
use crate::GlobalConfig;

use super::error::RuleError;
use super::section::{self, path};
use super::Rule;

pub const KEY: &str = "proxy";

/// `address` is mandatory once the section is present; `no_proxy` is an
/// optional list of hosts.
pub struct ProxyRule;

impl Rule for ProxyRule {
    fn key(&self) -> &'static str {
        KEY
    }

    fn apply(
        &self,
        section: &Node,
        _ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError> {
        let Some(node) = section::mapping(KEY, section)? else {
            return Ok(());
        };

        let address = section::required_string(KEY, "address", node)?;
        let no_proxy = section::string_list(&path(KEY, "no_proxy"), node.get("no_proxy"))?;

        config.proxy = Some(ProxyConfig {
            address,
            no_proxy: no_proxy.unwrap_or_default(),
        });
        Ok(())
    }
}
