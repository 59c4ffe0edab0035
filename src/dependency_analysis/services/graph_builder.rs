use crate::dependency_analysis::domain::{DependencyIndex, PackageId, PackageInfo, RootSet};
use crate::dependency_analysis::policies::StandardLibraryPolicy;
use crate::ports::outbound::{PackageResolver, ResolveMode};
use crate::shared::error::ShowdepsError;
use crate::shared::Result;
use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

/// Upper bound on discovered packages before the build is abandoned
pub const MAX_PACKAGES: usize = 100_000;

/// Filtering rules applied while the graph is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Follow imports of imports instead of stopping at direct imports
    pub recursive: bool,
    /// Keep standard-distribution packages in the graph
    pub include_standard: bool,
    /// Add the test-only imports of root packages
    pub include_test_deps: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            include_standard: false,
            include_test_deps: true,
        }
    }
}

/// GraphBuilder expands the imports of a root set into a reverse
/// dependency index
///
/// Test imports are only followed for root packages: the tests of a
/// dependency never pull anything into the graph.
pub struct GraphBuilder<'a, R: PackageResolver + ?Sized> {
    resolver: &'a R,
    options: GraphOptions,
    package_limit: usize,
}

impl<'a, R: PackageResolver + ?Sized> GraphBuilder<'a, R> {
    pub fn new(resolver: &'a R, options: GraphOptions) -> Self {
        Self {
            resolver,
            options,
            package_limit: MAX_PACKAGES,
        }
    }

    pub fn with_package_limit(mut self, limit: usize) -> Self {
        self.package_limit = limit;
        self
    }

    /// Builds the index for `roots`, resolving them relative to `dir`
    ///
    /// The returned index still contains the roots as keys; callers that
    /// present dependencies remove them afterwards.
    ///
    /// # Errors
    /// The first package that cannot be resolved aborts the whole build.
    pub fn build(&self, roots: &RootSet, dir: &Path) -> Result<DependencyIndex> {
        let mut index = DependencyIndex::new();
        let mut queue: VecDeque<(PackageId, PathBuf)> = VecDeque::new();

        for root in roots {
            index.mark_discovered(root);
            queue.push_back((root.clone(), dir.to_path_buf()));
        }

        while let Some((id, from_dir)) = queue.pop_front() {
            if id.is_foreign_function() {
                tracing::trace!(package = %id, "skipping foreign function import");
                continue;
            }

            let info = self
                .resolver
                .resolve(&id, &from_dir, ResolveMode::Full)
                .map_err(|e| ShowdepsError::Resolution {
                    package: id.to_string(),
                    dir: from_dir.clone(),
                    details: e.to_string(),
                })?;

            let package = info.id().clone();
            let is_root = roots.contains(&package);
            index.ensure_entry(&package);

            let imports = self.imports_of(&info, is_root);
            tracing::debug!(
                package = %package,
                root = is_root,
                imports = imports.len(),
                "resolved package"
            );

            for target in imports {
                index.add_importer(target, &package);
                if self.options.recursive && index.mark_discovered(target) {
                    if index.discovered_count() > self.package_limit {
                        return Err(ShowdepsError::GraphTooLarge {
                            limit: self.package_limit,
                        }
                        .into());
                    }
                    queue.push_back((target.clone(), info.dir().to_path_buf()));
                }
            }
        }

        Ok(index)
    }

    /// Imports of `info` that belong in the graph, deduplicated and sorted
    fn imports_of<'i>(&self, info: &'i PackageInfo, is_root: bool) -> BTreeSet<&'i PackageId> {
        let test_imports = (is_root && self.options.include_test_deps).then(|| info.test_imports());

        info.imports()
            .iter()
            .chain(test_imports.into_iter().flatten())
            .filter(|target| {
                self.options.include_standard || !StandardLibraryPolicy::is_standard(target)
            })
            .collect()
    }
}
