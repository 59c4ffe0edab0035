use showdeps::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock PackageResolver backed by an in-memory package table
///
/// Records every lookup so tests can assert how often a package was
/// resolved and in which mode.
#[derive(Default, Clone)]
pub struct MockPackageResolver {
    packages: HashMap<String, PackageInfo>,
    patterns: HashMap<String, Vec<String>>,
    calls: Arc<Mutex<Vec<(String, ResolveMode)>>>,
}

#[allow(dead_code)]
impl MockPackageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a package in `/src/<name>` with one source file named after it
    pub fn with_package(self, name: &str, imports: &[&str]) -> Self {
        self.with_test_package(name, imports, &[])
    }

    pub fn with_test_package(mut self, name: &str, imports: &[&str], test_imports: &[&str]) -> Self {
        let base = name.rsplit('/').next().unwrap_or(name);
        let info = PackageInfo::identity(
            id(name),
            PathBuf::from("/src").join(name),
            StandardLibraryPolicy::is_standard_path(name),
        )
        .with_imports(imports.iter().map(|s| id(s)))
        .with_test_imports(test_imports.iter().map(|s| id(s)))
        .with_source_files(vec![format!("{}.go", base)])
        .with_test_source_files(vec![format!("{}_test.go", base)]);
        self.packages.insert(name.to_string(), info);
        self
    }

    /// Makes `alias` (e.g. `.`) resolve to the already added `target`
    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        if let Some(info) = self.packages.get(target).cloned() {
            self.packages.insert(alias.to_string(), info);
        }
        self
    }

    pub fn with_pattern(mut self, pattern: &str, matches: &[&str]) -> Self {
        self.patterns.insert(
            pattern.to_string(),
            matches.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<(String, ResolveMode)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn full_resolutions_of(&self, name: &str) -> usize {
        self.calls()
            .iter()
            .filter(|(pkg, mode)| pkg == name && *mode == ResolveMode::Full)
            .count()
    }
}

impl PackageResolver for MockPackageResolver {
    fn resolve(
        &self,
        pkg: &PackageId,
        dir: &Path,
        mode: ResolveMode,
    ) -> std::result::Result<PackageInfo, ResolveError> {
        self.calls.lock().unwrap().push((pkg.to_string(), mode));
        self.packages
            .get(pkg.as_str())
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                package: pkg.to_string(),
                dir: dir.to_path_buf(),
            })
    }

    fn expand_pattern(
        &self,
        pattern: &str,
        _dir: &Path,
    ) -> std::result::Result<Vec<PackageId>, ResolveError> {
        Ok(self
            .patterns
            .get(pattern)
            .map(|names| names.iter().map(|s| id(s)).collect())
            .unwrap_or_default())
    }
}

fn id(s: &str) -> PackageId {
    PackageId::new(s).unwrap()
}
