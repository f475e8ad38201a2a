//! Core [`Translator`] struct: sequential, fail-fast rule dispatch.

use agentcfg_core::{Node, ProcessContext};
use tracing::{debug, info, warn};

use crate::GlobalConfig;

use super::error::{Result, TranslateError};
use super::registry::RuleRegistry;
use super::suggest;

/// Knobs for a translation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Fail on top-level keys no registered rule owns instead of ignoring them.
    pub reject_unknown_keys: bool,
}

/// Drives registered rules over an input tree.
///
/// Holds the process context by shared reference for the duration of the
/// run. Rules execute strictly one after another in registration order and
/// share a single [`GlobalConfig`] by `&mut`; the first failure aborts the run
/// and the half-built config is dropped.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    context: &'a ProcessContext,
    registry: RuleRegistry,
    options: TranslateOptions,
}

impl<'a> Translator<'a> {
    /// A translator running every known rule with default options.
    pub fn new(context: &'a ProcessContext) -> Self {
        Self {
            context,
            registry: RuleRegistry::standard(),
            options: TranslateOptions::default(),
        }
    }

    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn context(&self) -> &ProcessContext {
        self.context
    }

    /// Parse JSON text and translate it.
    pub fn translate_json(&self, text: &str) -> Result<GlobalConfig> {
        let root = Node::from_json_str(text)?;
        self.translate(&root)
    }

    /// Translate `root` into a fresh [`GlobalConfig`].
    pub fn translate(&self, root: &Node) -> Result<GlobalConfig> {
        self.translate_onto(root, &GlobalConfig::default())
    }

    /// Translate `root` on top of a previous result. `base` is never modified;
    /// the layered copy is returned only if every rule succeeds.
    pub fn translate_onto(&self, root: &Node, base: &GlobalConfig) -> Result<GlobalConfig> {
        match root {
            Node::Mapping(_) | Node::Absent => {}
            other => return Err(TranslateError::InvalidRoot { found: other.kind() }),
        }
        self.check_unknown_keys(root)?;

        let mut config = base.clone();
        for kind in self.registry.kinds() {
            let rule = kind.rule();
            let section = root.get(rule.key());

            rule.apply(section, self.context, &mut config)
                .map_err(|source| {
                    warn!(rule = %rule.key(), error = %source, "rule rejected its section");
                    TranslateError::Rule {
                        rule: rule.key(),
                        source,
                    }
                })?;

            debug!(rule = %rule.key(), present = !section.is_absent(), "applied rule");
        }

        info!(rules = self.registry.len(), "translation complete");
        Ok(config)
    }

    fn check_unknown_keys(&self, root: &Node) -> Result<()> {
        let known = self.registry.keys();
        for key in root.keys() {
            if self.registry.owns(key) {
                continue;
            }
            if self.options.reject_unknown_keys {
                return Err(TranslateError::UnknownKey {
                    key: key.to_string(),
                    suggestion: suggest::closest(key, &known).map(str::to_string),
                });
            }
            debug!(key = %key, "ignoring key not owned by any registered rule");
        }
        Ok(())
    }
}

/// One-shot translation with an explicit registry and context.
pub fn translate(root: &Node, registry: &RuleRegistry, context: &ProcessContext) -> Result<GlobalConfig> {
    Translator::new(context)
        .with_registry(registry.clone())
        .translate(root)
}
