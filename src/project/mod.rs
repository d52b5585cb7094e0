//! Project module: the state model persisted in `env.json`.
//!
//! This module provides:
//! - `Stage` and `StageKey` closed sets (`stage`)
//! - The variable name -> vault key mapping (`vars`)
//! - The `Project` aggregate and stage application (`state`)
//! - Per-invocation edits (`request`)
//! - JSON load/save (`store`)

pub mod request;
pub mod stage;
pub mod state;
pub mod store;
pub mod vars;

// Re-export the most commonly used items.
pub use request::Request;
pub use stage::{Stage, StageKey, AWS_ENV_SENTINEL};
pub use state::Project;
pub use store::StateFile;
pub use vars::VarStore;
