//! Wrapper version information.
//!
//! This module exposes the crate version as a single constant so both
//! binaries report the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The quality-tasks version string (for example, `0.1.0`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
