//! Rule registry and dispatcher.
//!
//! The [`Translator`] takes the root of the input tree, hands each registered
//! rule the sub-tree under its key (absent if missing) and returns either a
//! fully translated [`crate::GlobalConfig`] or the first error, annotated with
//! the owning rule's key.

mod core;
mod error;
mod registry;
mod suggest;


pub use self::core::{translate, TranslateOptions, Translator};
pub use self::error::{Result, TranslateError};
pub use self::registry::RuleRegistry;
