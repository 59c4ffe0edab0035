use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Maximum length for package identifiers (security limit)
const MAX_PACKAGE_ID_LENGTH: usize = 1024;

/// Pseudo import used by packages that call into C; it never resolves.
pub const FOREIGN_FUNCTION_IMPORT: &str = "C";

/// NewType wrapper for a hierarchical package identifier (`example.com/a/b`)
///
/// Equality is exact string equality and ordering is lexicographic so that
/// every listing built from these ids is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            anyhow::bail!("Package identifier cannot be empty");
        }

        if id.len() > MAX_PACKAGE_ID_LENGTH {
            anyhow::bail!(
                "Package identifier is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_PACKAGE_ID_LENGTH
            );
        }

        if id.chars().any(|c| c.is_control()) {
            anyhow::bail!("Package identifier contains control characters");
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the foreign-function pseudo import
    pub fn is_foreign_function(&self) -> bool {
        self.0 == FOREIGN_FUNCTION_IMPORT
    }

    /// Whether the id is relative to a directory (`.`, `./x`, `../x`)
    pub fn is_relative(&self) -> bool {
        self.0 == "." || self.0 == ".." || self.0.starts_with("./") || self.0.starts_with("../")
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for PackageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Metadata a package resolver reports for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    id: PackageId,
    dir: PathBuf,
    imports: BTreeSet<PackageId>,
    test_imports: BTreeSet<PackageId>,
    is_standard: bool,
    source_files: Vec<String>,
    test_source_files: Vec<String>,
}

impl PackageInfo {
    /// Identity-only metadata, as returned by a find-only lookup
    pub fn identity(id: PackageId, dir: PathBuf, is_standard: bool) -> Self {
        Self {
            id,
            dir,
            imports: BTreeSet::new(),
            test_imports: BTreeSet::new(),
            is_standard,
            source_files: Vec::new(),
            test_source_files: Vec::new(),
        }
    }

    pub fn with_imports(mut self, imports: impl IntoIterator<Item = PackageId>) -> Self {
        self.imports.extend(imports);
        self
    }

    pub fn with_test_imports(mut self, imports: impl IntoIterator<Item = PackageId>) -> Self {
        self.test_imports.extend(imports);
        self
    }

    pub fn with_source_files(mut self, files: impl IntoIterator<Item = String>) -> Self {
        self.source_files.extend(files);
        self
    }

    pub fn with_test_source_files(mut self, files: impl IntoIterator<Item = String>) -> Self {
        self.test_source_files.extend(files);
        self
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Direct non-test imports
    pub fn imports(&self) -> &BTreeSet<PackageId> {
        &self.imports
    }

    /// Imports used only by the package's tests
    pub fn test_imports(&self) -> &BTreeSet<PackageId> {
        &self.test_imports
    }

    /// What the resolver reports about the package itself
    ///
    /// Import edges are not filtered on this flag: the graph builder
    /// classifies targets by id through `StandardLibraryPolicy`, before
    /// they are ever resolved.
    pub fn is_standard(&self) -> bool {
        self.is_standard
    }

    /// Source file names relative to [`PackageInfo::dir`]
    pub fn source_files(&self) -> &[String] {
        &self.source_files
    }

    pub fn test_source_files(&self) -> &[String] {
        &self.test_source_files
    }
}
