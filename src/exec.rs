//! Process-spawning boundary.
//!
//! The runners never touch `std::process` directly: they go through the
//! `CommandRunner` trait, so tests can substitute a recording fake for
//! the real spawner without any runtime patching mechanism.

use std::process::Command;

use thiserror::Error;

/// Errors that occur when spawning an external tool
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run an external tool synchronously: argument list in, exit status out.
///
/// Implementations block until the child exits. A nonzero status is not
/// an error at this boundary; only failing to spawn at all is.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError>;
}

/// Spawns the tool as a blocking child process with inherited stdio.
///
/// The wrappers synthesize no diagnostics of their own; whatever the
/// tool prints goes straight to the terminal.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError> {
        tracing::debug!("running: {} {}", program, args.join(" "));

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| ExecError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        // A signal-terminated child has no exit code; report plain failure.
        Ok(status.code().unwrap_or(1))
    }
}
