//! `region`: the AWS region the agent publishes to.

use agentcfg_core::{Node, ProcessContext};

use crate::GlobalConfig;

use super::error::RuleError;
use super::section;
use super::Rule;

pub const KEY: &str = "region";

pub struct RegionRule;

impl Rule for RegionRule {
    fn key(&self) -> &'static str {
        KEY
    }

    fn apply(
        &self,
        section: &Node,
        ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError> {
        let Some(region) = section::string(KEY, section)? else {
            return Ok(());
        };
        // An empty region asks for the host's region.
        let region = if region.trim().is_empty() {
            ctx.region()
                .map(str::to_string)
                .ok_or_else(|| RuleError::InvalidValue {
                    key: KEY.to_string(),
                    expected: "a non-empty string (no host region to fall back on)",
                    found: "empty string".to_string(),
                })?
        } else {
            region
        };
        config.region = Some(region);
        Ok(())
    }
}
