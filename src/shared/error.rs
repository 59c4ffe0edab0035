use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a usage mistake apart from a failed dependency walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (resolution failure, bad pattern, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency analysis.
///
/// Every variant is fatal: the run stops and nothing is printed to stdout.
#[derive(Debug, Error)]
pub enum ShowdepsError {
    #[error("cannot find {package:?}: {details}\n\n💡 Hint: Check that the package exists and that its module can be resolved from {dir}")]
    Resolution {
        package: String,
        dir: PathBuf,
        details: String,
    },

    #[error("Invalid package pattern {pattern:?}: {reason}\n\n💡 Hint: Patterns are package paths where '...' matches any string (e.g. example.com/foo/...)")]
    InvalidPattern { pattern: String, reason: String },

    #[error("cannot get working directory: {details}")]
    WorkingDirectory { details: String },

    #[error("Failed to load config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigError { path: PathBuf, details: String },

    #[error("Failed to read package metadata: {path}\nDetails: {details}\n\n💡 Hint: Generate it with `go list -json -deps -test ./... > deps.json`")]
    MetadataReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Dependency graph is too large: more than {limit} packages discovered")]
    GraphTooLarge { limit: usize },

    #[error("Dependency chain from {leaf:?} exceeds {limit} packages")]
    ChainTooLong { leaf: String, limit: usize },
}
