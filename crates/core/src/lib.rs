//! Shared building blocks for agent configuration translation: the untyped
//! input model and the run-scoped process context.

pub mod context;
pub mod error;
pub mod node;

pub use context::{
    load_dotenv, CredentialSet, CredentialSource, ProcessContext, ProcessContextBuilder, RunMode,
    TargetOs, DEFAULT_ROLE,
};
pub use error::*;
pub use node::{Node, NodeKind};
