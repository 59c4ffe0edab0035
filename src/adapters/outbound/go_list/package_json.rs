use crate::dependency_analysis::domain::{PackageId, PackageInfo};
use crate::ports::outbound::ResolveError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One package object as printed by `go list -json`
///
/// Only the fields the graph needs are read; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(super) struct GoListPackage {
    pub import_path: String,
    pub dir: PathBuf,
    pub standard: bool,
    pub imports: Vec<String>,
    pub test_imports: Vec<String>,
    #[serde(rename = "XTestImports")]
    pub x_test_imports: Vec<String>,
    pub go_files: Vec<String>,
    pub cgo_files: Vec<String>,
    pub test_go_files: Vec<String>,
    #[serde(rename = "XTestGoFiles")]
    pub x_test_go_files: Vec<String>,
    pub for_test: String,
    pub error: Option<GoListError>,
}

/// The `Error` object `go list -e` attaches to a broken package
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(super) struct GoListError {
    pub err: String,
}

impl GoListPackage {
    /// Test variants (`pkg [pkg.test]`) and synthesized test mains are
    /// artifacts of `-test`, not importable packages.
    pub fn is_test_variant(&self) -> bool {
        !self.for_test.is_empty()
            || self.import_path.contains(" [")
            || self.import_path.ends_with(".test")
    }

    /// Identity-only view, as a find-only lookup returns it
    pub fn to_identity(&self) -> Result<PackageInfo, ResolveError> {
        Ok(PackageInfo::identity(
            self.package_id()?,
            self.dir.clone(),
            self.standard,
        ))
    }

    /// Full view; a package that `go list` reported as broken is an error
    pub fn to_info(&self) -> Result<PackageInfo, ResolveError> {
        if let Some(error) = &self.error {
            return Err(ResolveError::Metadata {
                package: self.import_path.clone(),
                details: error.err.trim().to_string(),
            });
        }

        let imports = self.parse_ids(&self.imports)?;
        let test_imports = self.parse_ids(self.test_imports.iter().chain(&self.x_test_imports))?;

        Ok(self
            .to_identity()?
            .with_imports(imports)
            .with_test_imports(test_imports)
            .with_source_files(self.go_files.iter().chain(&self.cgo_files).cloned())
            .with_test_source_files(
                self.test_go_files
                    .iter()
                    .chain(&self.x_test_go_files)
                    .cloned(),
            ))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn package_id(&self) -> Result<PackageId, ResolveError> {
        PackageId::new(self.import_path.as_str()).map_err(|e| self.metadata_error(e))
    }

    fn parse_ids<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a String>,
    ) -> Result<Vec<PackageId>, ResolveError> {
        ids.into_iter()
            .map(|id| PackageId::new(id.as_str()).map_err(|e| self.metadata_error(e)))
            .collect()
    }

    fn metadata_error(&self, cause: impl std::fmt::Display) -> ResolveError {
        ResolveError::Metadata {
            package: self.import_path.clone(),
            details: cause.to_string(),
        }
    }
}

/// Parses the concatenated JSON objects `go list -json` prints
pub(super) fn parse_stream(content: &str) -> serde_json::Result<Vec<GoListPackage>> {
    serde_json::Deserializer::from_str(content)
        .into_iter::<GoListPackage>()
        .collect()
}
