use crate::dependency_analysis::domain::{PackageId, PackageInfo};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How much work a resolver should do for a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Canonical identity, directory and standard flag only
    FindOnly,
    /// Identity plus imports, test imports and source file lists
    Full,
}

/// Errors reported by package resolvers
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot find package {package:?} in {dir}")]
    NotFound { package: String, dir: PathBuf },

    #[error("invalid metadata for package {package:?}: {details}")]
    Metadata { package: String, details: String },

    #[error("`{command}` failed: {stderr}")]
    Command { command: String, stderr: String },
}

/// PackageResolver port for locating packages and reading their metadata
///
/// Resolution is deterministic: asking twice for the same id and directory
/// yields the same answer, so callers never retry.
pub trait PackageResolver {
    /// Resolves a package identifier relative to `dir`
    ///
    /// # Arguments
    /// * `id` - Import path, or a relative path such as `./cmd/tool`
    /// * `dir` - Directory the import is resolved from (vendoring, relative paths)
    /// * `mode` - Whether import metadata is needed
    ///
    /// # Errors
    /// Returns [`ResolveError::NotFound`] if no such package exists
    fn resolve(
        &self,
        id: &PackageId,
        dir: &Path,
        mode: ResolveMode,
    ) -> Result<PackageInfo, ResolveError>;

    /// Expands a `...` wildcard argument into concrete package identifiers
    ///
    /// Returns an empty list when nothing matches; that is not an error.
    fn expand_pattern(&self, pattern: &str, dir: &Path) -> Result<Vec<PackageId>, ResolveError>;
}

impl<R: PackageResolver + ?Sized> PackageResolver for &R {
    fn resolve(
        &self,
        id: &PackageId,
        dir: &Path,
        mode: ResolveMode,
    ) -> Result<PackageInfo, ResolveError> {
        (**self).resolve(id, dir, mode)
    }

    fn expand_pattern(&self, pattern: &str, dir: &Path) -> Result<Vec<PackageId>, ResolveError> {
        (**self).expand_pattern(pattern, dir)
    }
}

impl<R: PackageResolver + ?Sized> PackageResolver for Box<R> {
    fn resolve(
        &self,
        id: &PackageId,
        dir: &Path,
        mode: ResolveMode,
    ) -> Result<PackageInfo, ResolveError> {
        (**self).resolve(id, dir, mode)
    }

    fn expand_pattern(&self, pattern: &str, dir: &Path) -> Result<Vec<PackageId>, ResolveError> {
        (**self).expand_pattern(pattern, dir)
    }
}
