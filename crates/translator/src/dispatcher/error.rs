//! Error types for a translation run.

use agentcfg_core::{CoreError, NodeKind};

use crate::rules::RuleError;

/// Errors that abort a translation run.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The input text could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] CoreError),

    /// The root of the input is not a mapping.
    #[error("configuration root must be a mapping, got {found}")]
    InvalidRoot { found: NodeKind },

    /// A rule rejected its section. `rule` is the owning top-level key.
    #[error("rule '{rule}' failed: {source}")]
    Rule {
        rule: &'static str,
        #[source]
        source: RuleError,
    },

    /// Strict mode: a top-level key no registered rule owns.
    #[error("unknown configuration key '{key}'{}", did_you_mean(.suggestion))]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
    },

    /// The same rule key was registered twice.
    #[error("rule '{0}' is already registered")]
    DuplicateRule(&'static str),
}

impl TranslateError {
    /// The rule-level cause, if a rule failed.
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            TranslateError::Rule { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

/// Result alias for translation operations.
pub type Result<T> = std::result::Result<T, TranslateError>;
