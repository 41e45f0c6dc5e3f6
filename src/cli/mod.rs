//! CLI module for the quality-automation wrappers
//!
//! This module provides the command-line surface of the two binaries.
//!
//! ## Binaries
//!
//! - `run-formatting [--check]` - Style formatter + import sorter
//! - `run-tests [--coverage] [-v]` - Test suite, optionally with coverage
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Runner functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Only the top-level entry functions handle errors and
//! exit, propagating the underlying tool's status unchanged.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::process;

use clap::Parser;

use crate::config::QualityConfig;
use crate::exec::SystemRunner;
use crate::version::VERSION;
use crate::{formatting, testing};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The entry functions
/// catch these errors, print the message, and exit with the code. Tool
/// failures never take this path - a nonzero tool status is an ordinary
/// `Ok(ExitCode)` return.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definitions
// ============================================================================

/// Run the style formatter and import sorter over the project sources
#[derive(Parser, Debug)]
#[command(name = "run-formatting")]
#[command(version = VERSION)]
#[command(about = "Run black and isort over the configured code paths", long_about = None)]
pub struct FormattingCli {
    /// Report violations without modifying files
    #[arg(long)]
    pub check: bool,
}

/// Run the test suite over the project's test paths
#[derive(Parser, Debug)]
#[command(name = "run-tests")]
#[command(version = VERSION)]
#[command(about = "Run pytest over the configured test paths", long_about = None)]
pub struct TestsCli {
    /// Measure coverage and fail below the configured minimum
    #[arg(long)]
    pub coverage: bool,

    /// Verbose test output
    #[arg(short, long)]
    pub verbose: bool,
}

// ============================================================================
// CLI entry points
// ============================================================================

/// Entry point for the `run-formatting` binary.
pub fn run_formatting_entry() -> ! {
    let cli = FormattingCli::parse();
    let result = formatting::run_formatting(cli.check, &QualityConfig::default(), &SystemRunner);
    finish(result)
}

/// Entry point for the `run-tests` binary.
pub fn run_tests_entry() -> ! {
    let cli = TestsCli::parse();
    let result = testing::run_tests(cli.coverage, cli.verbose, &QualityConfig::default(), &SystemRunner);
    finish(result)
}

/// Resolve a runner result into a process exit.
///
/// This is the only place where `process::exit` is called. The tool's
/// status passes through unchanged; resolution/spawn errors print their
/// message first.
fn finish(result: CliResult<ExitCode>) -> ! {
    match result {
        Ok(exit_code) => process::exit(exit_code.0),
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
