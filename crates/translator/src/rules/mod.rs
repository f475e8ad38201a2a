//! Translation rules, one per configuration section.
//!
//! A rule owns exactly one top-level key of the agent section and the
//! [`GlobalConfig`] fields that key maps to. The full rule set is the closed
//! [`RuleKind`] enum; its declared order is the default dispatch order.

mod credentials;
mod error;
mod flags;
mod interval;
mod logfile;
mod proxy;
mod region;
mod section;

pub use credentials::{CredentialsRule, ON_PREMISE_PROFILE};
pub use error::RuleError;
pub use flags::{DebugRule, OmitHostnameRule};
pub use interval::IntervalRule;
pub use logfile::{default_log_path, LogfileRule};
pub use proxy::ProxyRule;
pub use region::RegionRule;

use std::fmt;
use std::str::FromStr;

use agentcfg_core::{Node, ProcessContext};
use serde::{Deserialize, Serialize};

use crate::GlobalConfig;

/// A unit of translation logic.
///
/// Contract for implementors:
/// - `Node::Absent` is a no-op.
/// - The whole section is validated before anything is written, so an `Err`
///   leaves `config` untouched.
/// - Only the fields owned by [`Rule::key`] are written, and no other rule's
///   fields are read.
/// - Applying the same section twice yields the same state as applying it once.
pub trait Rule {
    /// The top-level configuration key this rule owns.
    fn key(&self) -> &'static str;

    /// Translate `section` into `config`, optionally reading `ctx`.
    fn apply(
        &self,
        section: &Node,
        ctx: &ProcessContext,
        config: &mut GlobalConfig,
    ) -> Result<(), RuleError>;
}

/// Every rule the translator knows about, in default dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Credentials,
    Region,
    Interval,
    Debug,
    Logfile,
    OmitHostname,
    Proxy,
}

impl RuleKind {
    pub const ALL: [RuleKind; 7] = [
        RuleKind::Credentials,
        RuleKind::Region,
        RuleKind::Interval,
        RuleKind::Debug,
        RuleKind::Logfile,
        RuleKind::OmitHostname,
        RuleKind::Proxy,
    ];

    /// The implementation behind this kind.
    pub fn rule(self) -> &'static dyn Rule {
        match self {
            RuleKind::Credentials => &CredentialsRule,
            RuleKind::Region => &RegionRule,
            RuleKind::Interval => &IntervalRule,
            RuleKind::Debug => &DebugRule,
            RuleKind::Logfile => &LogfileRule,
            RuleKind::OmitHostname => &OmitHostnameRule,
            RuleKind::Proxy => &ProxyRule,
        }
    }

    pub fn key(self) -> &'static str {
        self.rule().key()
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| format!("unknown rule key: '{}'", s))
    }
}
