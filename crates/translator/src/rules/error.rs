//! Errors a single rule can raise while translating its section.

/// Rule-local validation failure. `key` is the dotted path of the offending
/// value, e.g. `credentials.token`. `found` describes what was there instead:
/// a node kind such as `string` or `null`, or the unusable value itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The value at `key` is not the container kind the rule expects.
    #[error("'{key}' must be a {expected}, got {found}")]
    InvalidShape {
        key: String,
        expected: &'static str,
        found: String,
    },

    /// A leaf at `key` has the wrong primitive type or an unusable value.
    #[error("'{key}' must be {expected}, got {found}")]
    InvalidValue {
        key: String,
        expected: &'static str,
        found: String,
    },

    /// A present section lacks one of its mandatory keys.
    #[error("'{section}' is missing required key '{key}' (expected {expected})")]
    UnknownRequiredKey {
        key: String,
        section: String,
        expected: &'static str,
    },
}

impl RuleError {
    /// The dotted path this error points at.
    pub fn key(&self) -> &str {
        match self {
            RuleError::InvalidShape { key, .. }
            | RuleError::InvalidValue { key, .. }
            | RuleError::UnknownRequiredKey { key, .. } => key,
        }
    }
}
