//! Ordered set of registered rules.

use crate::rules::RuleKind;

use super::error::{Result, TranslateError};

/// The rules a [`super::Translator`] runs, in dispatch order. A key can only
/// be registered once, so every config field keeps a single writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRegistry {
    kinds: Vec<RuleKind>,
}

impl RuleRegistry {
    /// Every known rule, in [`RuleKind::ALL`] order.
    pub fn standard() -> Self {
        Self {
            kinds: RuleKind::ALL.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Append a rule to the dispatch order.
    pub fn register(mut self, kind: RuleKind) -> Result<Self> {
        if self.kinds.contains(&kind) {
            return Err(TranslateError::DuplicateRule(kind.key()));
        }
        self.kinds.push(kind);
        Ok(self)
    }

    pub fn kinds(&self) -> &[RuleKind] {
        &self.kinds
    }

    /// Owned keys in dispatch order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.kinds.iter().map(|kind| kind.key()).collect()
    }

    /// Whether some registered rule owns `key`.
    pub fn owns(&self, key: &str) -> bool {
        self.kinds.iter().any(|kind| kind.key() == key)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
