use crate::dependency_analysis::domain::{DependencyChain, DependencyIndex, PackageId, RootSet};
use crate::shared::error::ShowdepsError;
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Maximum number of packages in a single chain
pub const MAX_CHAIN_LENGTH: usize = 10_000;

/// ChainFinder explains a dependency with concrete root -> target paths
///
/// The walk starts at the target and follows importer edges upwards. A
/// package is expanded at most once per target, so each importer branch
/// contributes the first path it finds rather than every path. The result
/// is a set of witnesses: it is not guaranteed to contain the shortest
/// chain, only chains that each differ in at least one package.
pub struct ChainFinder;

impl ChainFinder {
    /// Calls `visit` with every witness path from `leaf` up to a root
    ///
    /// The path is passed leaf-first (`[leaf, importer, ..., root]`).
    /// Importer lists are walked in index order, so a normalized index
    /// yields a stable sequence.
    ///
    /// # Errors
    /// Returns [`ShowdepsError::ChainTooLong`] if a path exceeds
    /// [`MAX_CHAIN_LENGTH`] packages.
    pub fn for_each_chain<F>(
        index: &DependencyIndex,
        leaf: &PackageId,
        roots: &RootSet,
        mut visit: F,
    ) -> Result<()>
    where
        F: FnMut(&[&PackageId]),
    {
        let mut path: Vec<&PackageId> = vec![leaf];
        if roots.contains(leaf) {
            visit(&path);
            return Ok(());
        }

        let mut visited: BTreeSet<&PackageId> = BTreeSet::new();
        visited.insert(leaf);
        // One frame per package on `path`: its importers and the next one to try
        let mut frames: Vec<(&[PackageId], usize)> = vec![(index.importers(leaf), 0)];

        while let Some(frame) = frames.last_mut() {
            let (importers, next) = *frame;
            frame.1 += 1;
            let Some(importer) = importers.get(next) else {
                frames.pop();
                path.pop();
                continue;
            };

            if roots.contains(importer) {
                path.push(importer);
                visit(&path);
                path.pop();
                continue;
            }
            if !visited.insert(importer) {
                continue;
            }

            path.push(importer);
            if path.len() > MAX_CHAIN_LENGTH {
                return Err(ShowdepsError::ChainTooLong {
                    leaf: leaf.to_string(),
                    limit: MAX_CHAIN_LENGTH,
                }
                .into());
            }
            frames.push((index.importers(importer), 0));
        }

        Ok(())
    }

    /// All witness chains for one leaf, each reading root -> leaf
    pub fn find_chains(
        index: &DependencyIndex,
        leaf: &PackageId,
        roots: &RootSet,
    ) -> Result<Vec<DependencyChain>> {
        let mut chains = Vec::new();
        Self::for_each_chain(index, leaf, roots, |path| {
            chains.push(DependencyChain::from_leaf_path(path.iter().copied()));
        })?;
        Ok(chains)
    }

    /// Collects chains for every key matching `matches`, at most `limit`
    /// per root (`0` means unlimited)
    ///
    /// Targets are visited in sorted order; the result is grouped by root
    /// in sorted order, chains within a root in discovery order.
    pub fn collect<F>(
        index: &DependencyIndex,
        roots: &RootSet,
        matches: F,
        limit: usize,
    ) -> Result<Vec<DependencyChain>>
    where
        F: Fn(&PackageId) -> bool,
    {
        let mut by_root: BTreeMap<PackageId, Vec<DependencyChain>> = BTreeMap::new();

        for leaf in index.packages().filter(|p| matches(p)) {
            Self::for_each_chain(index, leaf, roots, |path| {
                let Some(root) = path.last() else {
                    return;
                };
                let bucket = by_root.entry((*root).clone()).or_default();
                if limit > 0 && bucket.len() >= limit {
                    return;
                }
                bucket.push(DependencyChain::from_leaf_path(path.iter().copied()));
            })?;
        }

        Ok(by_root.into_values().flatten().collect())
    }
}
