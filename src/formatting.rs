//! Formatter Runner: black then isort over the configured code paths.
//!
//! The two tools run in strict sequence. If the style formatter reports
//! a problem, the import sorter is never invoked: sorting imports in
//! badly formatted files is not meaningful.

use crate::cli::{CliError, CliResult, ExitCode};
use crate::config::LayoutSource;
use crate::exec::CommandRunner;

/// Invocation name of the style formatter.
pub const FORMATTER: &str = "black";
/// Invocation name of the import sorter.
pub const IMPORT_SORTER: &str = "isort";

/// Flag asking black to report violations instead of rewriting files.
const FORMATTER_CHECK_FLAG: &str = "--check";
/// isort spells its check mode differently.
const SORTER_CHECK_FLAG: &str = "--check-only";

/// Assemble the style formatter's argument list: paths first, then the
/// check flag when requested.
pub fn formatter_args(paths: &[String], check: bool) -> Vec<String> {
    let mut args = paths.to_vec();
    if check {
        args.push(FORMATTER_CHECK_FLAG.to_string());
    }
    args
}

/// Assemble the import sorter's argument list.
pub fn sorter_args(paths: &[String], check: bool) -> Vec<String> {
    let mut args = paths.to_vec();
    if check {
        args.push(SORTER_CHECK_FLAG.to_string());
    }
    args
}

/// Run the formatting pipeline over the configured code paths.
///
/// In check mode each tool only reports violations; otherwise files may
/// be rewritten in place. Returns black's status when it is nonzero
/// (without invoking isort), otherwise isort's status. A nonzero tool
/// status is a normal return, not an error: only path resolution and
/// spawn failures surface as `Err`.
pub fn run_formatting(
    check: bool,
    layout: &dyn LayoutSource,
    exec: &dyn CommandRunner,
) -> CliResult<ExitCode> {
    let paths = layout
        .code_paths()
        .map_err(|e| CliError::failure(format!("Error resolving code paths: {}", e)))?;

    tracing::debug!("formatting paths: {:?}", paths);

    let status = exec
        .run(FORMATTER, &formatter_args(&paths, check))
        .map_err(|e| CliError::failure(format!("Error running {}: {}", FORMATTER, e)))?;
    if status != 0 {
        return Ok(ExitCode(status));
    }

    let status = exec
        .run(IMPORT_SORTER, &sorter_args(&paths, check))
        .map_err(|e| CliError::failure(format!("Error running {}: {}", IMPORT_SORTER, e)))?;
    Ok(ExitCode(status))
}
