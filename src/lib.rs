#![forbid(unsafe_code)]
//! Quality-automation wrappers for the project template.
//!
//! Two thin shims around external developer tools: `run-formatting`
//! drives the style formatter (black) and the import sorter (isort) over
//! the configured code paths, and `run-tests` drives the test runner
//! (pytest) over the configured test paths, optionally with coverage
//! reporting. Each wrapper returns the underlying tool's exit status as
//! its own.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod exec;
pub mod formatting;
pub mod testing;
pub mod version;

pub use config::{ConfigError, LayoutSource, QualityConfig};
pub use exec::{CommandRunner, ExecError, SystemRunner};
pub use formatting::run_formatting;
pub use testing::run_tests;
