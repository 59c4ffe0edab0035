use super::clean_path;
use super::package_json::{parse_stream, GoListPackage};
use crate::dependency_analysis::domain::{PackageId, PackageInfo};
use crate::dependency_analysis::services::{PatternMatcher, WILDCARD};
use crate::ports::outbound::{PackageResolver, ResolveError, ResolveMode};
use crate::shared::error::ShowdepsError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// GoListMetadataResolver adapter that answers lookups from a saved
/// `go list -json -deps -test` dump
///
/// No Go toolchain is needed at analysis time, which makes runs
/// reproducible and lets CI analyse metadata produced elsewhere.
#[derive(Debug)]
pub struct GoListMetadataResolver {
    packages: BTreeMap<String, GoListPackage>,
    /// Cleaned package directory -> import path, for relative lookups
    dirs: BTreeMap<PathBuf, String>,
}

impl GoListMetadataResolver {
    /// Loads and indexes a metadata file
    ///
    /// # Errors
    /// Returns [`ShowdepsError::MetadataReadError`] if the file cannot be
    /// read safely or is not a stream of `go list -json` objects.
    pub fn load(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "package metadata").map_err(|e| {
            ShowdepsError::MetadataReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let packages = parse_stream(&content).map_err(|e| ShowdepsError::MetadataReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let resolver = Self::from_packages(packages);
        tracing::info!(
            path = %path.display(),
            packages = resolver.packages.len(),
            "loaded package metadata"
        );
        Ok(resolver)
    }

    pub(super) fn from_packages(packages: Vec<GoListPackage>) -> Self {
        let mut by_path = BTreeMap::new();
        let mut dirs = BTreeMap::new();

        for package in packages.into_iter().filter(|p| !p.is_test_variant()) {
            if by_path.contains_key(&package.import_path) {
                tracing::debug!(package = %package.import_path, "ignoring duplicate metadata entry");
                continue;
            }
            if !package.dir().as_os_str().is_empty() {
                dirs.entry(clean_path(package.dir()))
                    .or_insert_with(|| package.import_path.clone());
            }
            by_path.insert(package.import_path.clone(), package);
        }

        Self {
            packages: by_path,
            dirs,
        }
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    fn lookup(&self, id: &PackageId, dir: &Path) -> Option<&GoListPackage> {
        if !id.is_relative() {
            return self.packages.get(id.as_str());
        }

        let target = clean_path(&dir.join(id.as_str()));
        let import_path = self.dirs.get(&target).or_else(|| {
            // The working directory may be reached through a symlink
            let canonical = target.canonicalize().ok()?;
            self.dirs.get(&canonical)
        })?;
        self.packages.get(import_path)
    }

    /// Expands a directory pattern such as `./...` or `./cmd/...`
    fn expand_relative(&self, pattern: &str, dir: &Path) -> Result<Vec<PackageId>> {
        let dir_pattern = clean_path(&dir.join(pattern));
        let dir_pattern = dir_pattern.to_string_lossy();
        let matcher = PatternMatcher::compile(&dir_pattern)?;

        let mut matched = Vec::new();
        for (package_dir, import_path) in &self.dirs {
            let package_dir = package_dir.to_string_lossy();
            if matcher.matches_str(&package_dir) && !is_pruned(&dir_pattern, &package_dir) {
                matched.push(PackageId::new(import_path.as_str())?);
            }
        }
        matched.sort();
        Ok(matched)
    }

    fn expand_import_path(&self, pattern: &str) -> Result<Vec<PackageId>> {
        let matcher = PatternMatcher::compile(pattern)?;
        self.packages
            .keys()
            .filter(|path| matcher.matches_str(path) && !is_pruned(pattern, path))
            .map(|path| PackageId::new(path.as_str()))
            .collect()
    }
}

/// Whether `candidate` lies under a directory the go command leaves out of
/// `...` matches: `vendor`, `testdata`, or a name starting with `_` or `.`
///
/// Only elements below the pattern's literal prefix count, so
/// `./vendor/x/...` still reaches into `vendor`.
fn is_pruned(pattern: &str, candidate: &str) -> bool {
    let Some(wildcard) = pattern.find(WILDCARD) else {
        return false;
    };
    let prefix = &pattern[..wildcard];
    let Some(rest) = candidate.strip_prefix(prefix) else {
        return false;
    };

    let mut elements = rest.split(['/', '\\']);
    if !prefix.is_empty() && !prefix.ends_with(['/', '\\']) {
        // The first element finishes the one the pattern spells out
        elements.next();
    }
    elements.any(|e| e == "vendor" || e == "testdata" || e.starts_with('_') || e.starts_with('.'))
}

impl PackageResolver for GoListMetadataResolver {
    fn resolve(
        &self,
        id: &PackageId,
        dir: &Path,
        mode: ResolveMode,
    ) -> std::result::Result<PackageInfo, ResolveError> {
        let package = self.lookup(id, dir).ok_or_else(|| ResolveError::NotFound {
            package: id.to_string(),
            dir: dir.to_path_buf(),
        })?;

        match mode {
            ResolveMode::FindOnly => package.to_identity(),
            ResolveMode::Full => package.to_info(),
        }
    }

    fn expand_pattern(
        &self,
        pattern: &str,
        dir: &Path,
    ) -> std::result::Result<Vec<PackageId>, ResolveError> {
        let expanded = if pattern.starts_with("./") || pattern.starts_with("../") {
            self.expand_relative(pattern, dir)
        } else {
            self.expand_import_path(pattern)
        };

        expanded.map_err(|e| ResolveError::Metadata {
            package: pattern.to_string(),
            details: e.to_string(),
        })
    }
}
