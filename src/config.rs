//! Quality tooling configuration.
//!
//! The collaborator layer behind both wrappers: which paths the tools
//! run over, and the coverage percentage below which a test run fails.
//! Runners depend only on the `LayoutSource` trait, so tests can inject
//! fixed values and binaries use `QualityConfig`.

use std::env;

use thiserror::Error;

/// Environment override for the formatting target paths (comma-separated).
pub const CODE_PATHS_VAR: &str = "QUALITY_CODE_PATHS";
/// Environment override for the test target paths (comma-separated).
pub const TEST_PATHS_VAR: &str = "QUALITY_TEST_PATHS";
/// Environment override for the minimum coverage percentage.
pub const MIN_COVERAGE_VAR: &str = "QUALITY_MIN_COVERAGE";

/// Errors raised while resolving the project layout
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' is not a percentage (0-100)")]
    InvalidCoverage { var: &'static str, value: String },

    #[error("{var} is set but contains no paths")]
    EmptyPaths { var: &'static str },
}

/// Source of the tools' target paths and the minimum coverage percentage.
///
/// Resolution failures (for example a malformed override) are not
/// handled by the runners; they propagate and abort the wrapper.
pub trait LayoutSource {
    /// Paths the formatting tools run over, in invocation order.
    fn code_paths(&self) -> Result<Vec<String>, ConfigError>;

    /// Paths the test tool runs over, in invocation order.
    fn test_paths(&self) -> Result<Vec<String>, ConfigError>;

    /// Minimum acceptable coverage percentage (0-100).
    fn min_coverage(&self) -> Result<u32, ConfigError>;
}

/// Quality tooling configuration
#[derive(Debug, Clone)]
pub struct QualityConfig {
    /// Paths handed to the style formatter and import sorter
    pub code_paths: Vec<String>,
    /// Paths handed to the test tool
    pub test_paths: Vec<String>,
    /// Coverage percentage below which a coverage run fails
    pub min_coverage: u32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        // Project template conventions: format sources and tests, run
        // the suite under tests/, require 80% statement coverage.
        Self {
            code_paths: vec!["src".to_string(), "tests".to_string()],
            test_paths: vec!["tests".to_string()],
            min_coverage: 80,
        }
    }
}

impl QualityConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatting target paths
    pub fn with_code_paths(mut self, paths: Vec<String>) -> Self {
        self.code_paths = paths;
        self
    }

    /// Set the test target paths
    pub fn with_test_paths(mut self, paths: Vec<String>) -> Self {
        self.test_paths = paths;
        self
    }

    /// Set the minimum coverage percentage
    pub fn with_min_coverage(mut self, percent: u32) -> Self {
        self.min_coverage = percent;
        self
    }
}

impl LayoutSource for QualityConfig {
    fn code_paths(&self) -> Result<Vec<String>, ConfigError> {
        let raw = env::var(CODE_PATHS_VAR).ok();
        Ok(parse_paths_override(CODE_PATHS_VAR, raw.as_deref())?
            .unwrap_or_else(|| self.code_paths.clone()))
    }

    fn test_paths(&self) -> Result<Vec<String>, ConfigError> {
        let raw = env::var(TEST_PATHS_VAR).ok();
        Ok(parse_paths_override(TEST_PATHS_VAR, raw.as_deref())?
            .unwrap_or_else(|| self.test_paths.clone()))
    }

    fn min_coverage(&self) -> Result<u32, ConfigError> {
        let raw = env::var(MIN_COVERAGE_VAR).ok();
        Ok(parse_coverage_override(raw.as_deref())?.unwrap_or(self.min_coverage))
    }
}

/// Parse a comma-separated path list override.
///
/// Returns `Ok(None)` when the variable is unset; a variable that is set
/// but yields no paths is a configuration error, not a silent fallback.
fn parse_paths_override(
    var: &'static str,
    raw: Option<&str>,
) -> Result<Option<Vec<String>>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let paths: Vec<String> = raw
        .split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if paths.is_empty() {
        return Err(ConfigError::EmptyPaths { var });
    }
    Ok(Some(paths))
}

/// Parse a minimum-coverage override as an integer percentage.
fn parse_coverage_override(raw: Option<&str>) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value = raw.trim();
    match value.parse::<u32>() {
        Ok(percent) if percent <= 100 => Ok(Some(percent)),
        _ => Err(ConfigError::InvalidCoverage {
            var: MIN_COVERAGE_VAR,
            value: value.to_string(),
        }),
    }
}
