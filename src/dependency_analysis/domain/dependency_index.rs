use super::PackageId;
use std::collections::{BTreeMap, BTreeSet};

/// Reverse dependency map: package -> packages that directly import it
///
/// The discovery set and the importer adjacency are kept apart: a package
/// can be known to have zero importers without having been expanded, and a
/// package can be discovered (queued) before any importer is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    discovered: BTreeSet<PackageId>,
    importers: BTreeMap<PackageId, Vec<PackageId>>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `id` has been scheduled for expansion.
    /// Returns `false` if it was already known.
    pub fn mark_discovered(&mut self, id: &PackageId) -> bool {
        self.discovered.insert(id.clone())
    }

    pub fn is_discovered(&self, id: &PackageId) -> bool {
        self.discovered.contains(id)
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    /// Makes sure `id` is a key, even with no importers.
    pub fn ensure_entry(&mut self, id: &PackageId) {
        self.importers.entry(id.clone()).or_default();
    }

    /// Records the edge `importer -> dependency`.
    pub fn add_importer(&mut self, dependency: &PackageId, importer: &PackageId) {
        self.importers
            .entry(dependency.clone())
            .or_default()
            .push(importer.clone());
    }

    /// Packages that directly import `id`; empty if `id` is not a key.
    pub fn importers(&self, id: &PackageId) -> &[PackageId] {
        self.importers.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.importers.contains_key(id)
    }

    /// Keys in lexicographic order
    pub fn packages(&self) -> impl Iterator<Item = &PackageId> {
        self.importers.keys()
    }

    /// Keys with their importer lists, in lexicographic key order
    pub fn entries(&self) -> impl Iterator<Item = (&PackageId, &[PackageId])> {
        self.importers.iter().map(|(id, from)| (id, from.as_slice()))
    }

    pub fn remove(&mut self, id: &PackageId) {
        self.importers.remove(id);
    }

    /// Keeps only the keys for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&PackageId) -> bool) {
        self.importers.retain(|id, _| keep(id));
    }

    /// Sorts and deduplicates every importer list.
    pub fn normalize(&mut self) {
        for from in self.importers.values_mut() {
            from.sort();
            from.dedup();
        }
    }

    pub fn len(&self) -> usize {
        self.importers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.importers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PackageId {
        PackageId::new(s).unwrap()
    }

    #[test]
    fn test_entry_without_importers_is_present() {
        let mut index = DependencyIndex::new();
        index.ensure_entry(&id("leaf"));

        assert!(index.contains(&id("leaf")));
        assert!(index.importers(&id("leaf")).is_empty());
        assert!(!index.is_discovered(&id("leaf")));
    }

    #[test]
    fn test_discovery_is_independent_of_entries() {
        let mut index = DependencyIndex::new();
        assert!(index.mark_discovered(&id("root")));
        assert!(!index.mark_discovered(&id("root")));

        assert!(index.is_discovered(&id("root")));
        assert!(!index.contains(&id("root")));
        assert_eq!(index.discovered_count(), 1);
    }

    #[test]
    fn test_normalize_sorts_and_dedups() {
        let mut index = DependencyIndex::new();
        index.add_importer(&id("dep"), &id("b"));
        index.add_importer(&id("dep"), &id("a"));
        index.add_importer(&id("dep"), &id("b"));
        index.normalize();

        assert_eq!(index.importers(&id("dep")), &[id("a"), id("b")]);
    }

    #[test]
    fn test_retain_and_remove() {
        let mut index = DependencyIndex::new();
        index.ensure_entry(&id("a"));
        index.ensure_entry(&id("b"));
        index.ensure_entry(&id("c"));

        index.remove(&id("a"));
        index.retain(|p| p.as_str() != "c");

        let keys: Vec<&str> = index.packages().map(PackageId::as_str).collect();
        assert_eq!(keys, vec!["b"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_importers_of_unknown_package_is_empty() {
        let index = DependencyIndex::new();
        assert!(index.importers(&id("missing")).is_empty());
        assert!(index.is_empty());
    }
}
