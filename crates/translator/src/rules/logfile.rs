//! `logfile`: where the agent writes its own log.

use std::path::PathBuf;

use agentcfg_core::{Node, ProcessContext, TargetOs};

use crate::GlobalConfig;

use super::error::RuleError;
use super::section;
use super::Rule;

pub const KEY: &str = "logfile";

const UNIX_LOG_PATH: &str = "/opt/aws/amazon-cloudwatch-agent/logs/amazon-cloudwatch-agent.log";
const WINDOWS_LOG_PATH: &str =
    r"C:\ProgramData\Amazon\AmazonCloudWatchAgent\Logs\amazon-cloudwatch-agent.log";

/// An empty string selects the platform default path.
pub struct LogfileRule;

impl Rule for LogfileRule {
    fn key(&self) -> &'static str {
        KEY
    }

    fn apply(
        &self,
        section: &Node,
        ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError> {
        let Some(path) = section::string(KEY, section)? else {
            return Ok(());
        };
        let path = if path.is_empty() {
            default_log_path(ctx.target_os())
        } else {
            PathBuf::from(path)
        };
        config.logfile = Some(path);
        Ok(())
    }
}

pub fn default_log_path(os: TargetOs) -> PathBuf {
    match os {
        TargetOs::Windows => PathBuf::from(WINDOWS_LOG_PATH),
        TargetOs::Linux | TargetOs::Darwin => PathBuf::from(UNIX_LOG_PATH),
    }
}
