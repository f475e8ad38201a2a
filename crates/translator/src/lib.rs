//! Rule-based translation of loosely-typed agent configuration.
//!
//! This crate provides:
//! - `GlobalConfig`, the typed output of a translation run
//! - the closed `Rule` set, one rule per top-level configuration key
//! - a sequential, fail-fast dispatcher (`Translator`) over a `RuleRegistry`

pub mod dispatcher;
pub mod global;
pub mod rules;

pub use dispatcher::{translate, RuleRegistry, TranslateError, TranslateOptions, Translator};
pub use global::GlobalConfig;
pub use rules::{Rule, RuleError, RuleKind};
