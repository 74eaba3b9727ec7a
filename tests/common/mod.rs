//! Common test utilities and helpers
//!
//! Shared functionality for integration tests:
//! - Build output fixtures (manifests plus compiled assets)
//! - Snapshot file helpers

pub mod fixtures;

/// Helper to get the bundle-size binary command
#[allow(dead_code)]
pub fn get_bin() -> assert_cmd::Command {
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_bundle-size"))
}
