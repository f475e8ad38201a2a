//! Boolean toggles: `debug` and `omit_hostname`.

use agentcfg_core::{Node, ProcessContext};

use crate::GlobalConfig;

use super::error::RuleError;
use super::section;
use super::Rule;

pub const DEBUG_KEY: &str = "debug";
pub const OMIT_HOSTNAME_KEY: &str = "omit_hostname";

/// Enables verbose agent logging.
pub struct DebugRule;

/// Drops the host dimension from emitted metrics.
pub struct OmitHostnameRule;

impl Rule for DebugRule {
    fn key(&self) -> &'static str {
        DEBUG_KEY
    }

    fn apply(
        &self,
        section: &Node,
        _ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError> {
        if let Some(debug) = section::boolean(DEBUG_KEY, section)? {
            config.debug = debug;
        }
        Ok(())
    }
}

impl Rule for OmitHostnameRule {
    fn key(&self) -> &'static str {
        OMIT_HOSTNAME_KEY
    }

    fn apply(
        &self,
        section: &Node,
        _ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError> {
        if let Some(omit) = section::boolean(OMIT_HOSTNAME_KEY, section)? {
            config.omit_hostname = omit;
        }
        Ok(())
    }
}
