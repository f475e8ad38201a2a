//! `metrics_collection_interval`: default collection period in seconds.

use std::time::Duration;

use agentcfg_core::{Node, ProcessContext};

use crate::GlobalConfig;

use super::error::RuleError;
use super::Rule;

pub const KEY: &str = "metrics_collection_interval";

pub struct IntervalRule;

impl Rule for IntervalRule {
    fn key(&self) -> &'static str {
        KEY
    }

    fn apply(
        &self,
        section: &Node,
        _ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError> {
        let seconds = match section {
            Node::Absent => return Ok(()),
            Node::Number(n) => n.as_u64().filter(|s| *s > 0).ok_or_else(|| invalid(n.to_string()))?,
            other => return Err(invalid(other.kind().to_string())),
        };
        config.interval = Some(Duration::from_secs(seconds));
        Ok(())
    }
}

fn invalid(found: String) -> RuleError {
    RuleError::InvalidValue {
        key: KEY.to_string(),
        expected: "a positive integer number of seconds",
        found,
    }
}
