//! Command handlers for bundle-size CLI
//!
//! Each submodule handles a specific CLI command.

pub mod compare;
pub mod completions;
pub mod measure;
pub mod show;

// Re-export command functions for convenient access
pub use compare::{cmd_compare, CompareOptions};
pub use completions::cmd_completions;
pub use measure::cmd_measure;
pub use show::cmd_show;
