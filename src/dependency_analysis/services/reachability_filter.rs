use crate::dependency_analysis::domain::{DependencyIndex, PackageId};
use std::collections::BTreeSet;

/// ReachabilityFilter answers "why is this package here" by pruning the
/// index down to packages that import a matching package
pub struct ReachabilityFilter;

impl ReachabilityFilter {
    /// Marks every key matching `matches`, plus everything that imports a
    /// marked package directly or indirectly.
    ///
    /// Importers that are not keys (removed roots) are marked too.
    pub fn mark_importers<F>(index: &DependencyIndex, matches: F) -> BTreeSet<PackageId>
    where
        F: Fn(&PackageId) -> bool,
    {
        let mut marked = BTreeSet::new();
        let mut stack: Vec<&PackageId> = index.packages().filter(|p| matches(p)).collect();

        while let Some(pkg) = stack.pop() {
            if !marked.insert(pkg.clone()) {
                continue;
            }
            stack.extend(
                index
                    .importers(pkg)
                    .iter()
                    .filter(|importer| !marked.contains(*importer)),
            );
        }

        marked
    }

    /// Removes every key that neither matches nor transitively imports a
    /// match. Returns the number of packages removed.
    pub fn retain_importers_of<F>(index: &mut DependencyIndex, matches: F) -> usize
    where
        F: Fn(&PackageId) -> bool,
    {
        let marked = Self::mark_importers(index, matches);
        let before = index.len();
        index.retain(|pkg| marked.contains(pkg));
        before - index.len()
    }
}
