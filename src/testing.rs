//! Test Runner: a single pytest invocation over the configured test paths.
//!
//! Coverage instrumentation, report formats, and the fail-under
//! threshold are appended only when coverage is requested; verbosity is
//! an independent flag. Exactly one process is spawned per call.

use crate::cli::{CliError, CliResult, ExitCode};
use crate::config::LayoutSource;
use crate::exec::CommandRunner;

/// Invocation name of the test tool.
pub const TEST_TOOL: &str = "pytest";

/// Tree the coverage run instruments.
const COVERAGE_SOURCE_TREE: &str = "src";
const TERM_REPORT_FLAG: &str = "--cov-report=term-missing";
const HTML_REPORT_FLAG: &str = "--cov-report=html";
const VERBOSE_FLAG: &str = "-v";

/// Assemble the test tool's argument list: paths first, then coverage
/// flags (carrying the resolved minimum percentage), then verbosity.
pub fn test_args(paths: &[String], min_coverage: Option<u32>, verbose: bool) -> Vec<String> {
    let mut args = paths.to_vec();
    if let Some(min) = min_coverage {
        args.push("--cov".to_string());
        args.push(COVERAGE_SOURCE_TREE.to_string());
        args.push(TERM_REPORT_FLAG.to_string());
        args.push(HTML_REPORT_FLAG.to_string());
        args.push(format!("--cov-fail-under={}", min));
    }
    if verbose {
        args.push(VERBOSE_FLAG.to_string());
    }
    args
}

/// Run the test suite over the configured test paths.
///
/// Spawns pytest exactly once and returns its exit status verbatim,
/// whatever the flag combination. Only path/threshold resolution and
/// spawn failures surface as `Err`.
pub fn run_tests(
    coverage: bool,
    verbose: bool,
    layout: &dyn LayoutSource,
    exec: &dyn CommandRunner,
) -> CliResult<ExitCode> {
    let paths = layout
        .test_paths()
        .map_err(|e| CliError::failure(format!("Error resolving test paths: {}", e)))?;

    // The threshold only matters when coverage is requested; resolving
    // it lazily keeps a bad override from failing runs that never use it.
    let min_coverage = if coverage {
        Some(
            layout
                .min_coverage()
                .map_err(|e| CliError::failure(format!("Error resolving minimum coverage: {}", e)))?,
        )
    } else {
        None
    };

    tracing::debug!("test paths: {:?}", paths);

    let status = exec
        .run(TEST_TOOL, &test_args(&paths, min_coverage, verbose))
        .map_err(|e| CliError::failure(format!("Error running {}: {}", TEST_TOOL, e)))?;
    Ok(ExitCode(status))
}
