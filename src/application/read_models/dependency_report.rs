use crate::dependency_analysis::domain::{DependencyChain, DependencyIndex, PackageId};
use serde::Serialize;
use std::path::PathBuf;

/// A package together with the packages that import it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImporterView {
    pub package: PackageId,
    pub imported_by: Vec<PackageId>,
}

/// What a run produces, one variant per output mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum DependencyReport {
    /// Sorted package ids
    Packages(Vec<PackageId>),
    /// Sorted package ids, each with its sorted, deduplicated importers
    Importers(Vec<ImporterView>),
    /// Root -> target chains, grouped by root
    Chains(Vec<DependencyChain>),
    /// Source file paths
    Files(Vec<PathBuf>),
}

impl DependencyReport {
    /// Plain listing of a normalized index
    pub fn packages_of(index: &DependencyIndex) -> Self {
        Self::Packages(index.packages().cloned().collect())
    }

    /// Annotated listing of a normalized index
    pub fn importers_of(index: &DependencyIndex) -> Self {
        Self::Importers(
            index
                .entries()
                .map(|(package, from)| ImporterView {
                    package: package.clone(),
                    imported_by: from.to_vec(),
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Packages(items) => items.len(),
            Self::Importers(items) => items.len(),
            Self::Chains(items) => items.len(),
            Self::Files(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PackageId {
        PackageId::new(s).unwrap()
    }

    #[test]
    fn test_importers_of_uses_index_order() {
        let mut index = DependencyIndex::new();
        index.add_importer(&id("b"), &id("app"));
        index.add_importer(&id("a"), &id("lib"));
        index.add_importer(&id("a"), &id("app"));
        index.normalize();

        let DependencyReport::Importers(views) = DependencyReport::importers_of(&index) else {
            panic!("expected importers report");
        };
        assert_eq!(views[0].package, id("a"));
        assert_eq!(views[0].imported_by, vec![id("app"), id("lib")]);
        assert_eq!(views[1].package, id("b"));
    }

    #[test]
    fn test_serializes_with_mode_tag() {
        let report = DependencyReport::Packages(vec![id("x.io/a")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "packages");
        assert_eq!(json["items"][0], "x.io/a");
    }

    #[test]
    fn test_len() {
        assert!(DependencyReport::Files(vec![]).is_empty());
        assert_eq!(DependencyReport::Packages(vec![id("a"), id("b")]).len(), 2);
    }
}
