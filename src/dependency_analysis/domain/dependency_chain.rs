use super::PackageId;
use serde::Serialize;

/// One witness path from a root package down to a target package
///
/// Consecutive elements are direct import edges: `packages[i]` imports
/// `packages[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyChain {
    packages: Vec<PackageId>,
}

impl DependencyChain {
    pub fn new(packages: Vec<PackageId>) -> Self {
        Self { packages }
    }

    /// Builds a chain from a path walked leaf-first along importer edges.
    pub fn from_leaf_path<'a>(path: impl DoubleEndedIterator<Item = &'a PackageId>) -> Self {
        Self {
            packages: path.rev().cloned().collect(),
        }
    }

    pub fn root(&self) -> Option<&PackageId> {
        self.packages.first()
    }

    pub fn leaf(&self) -> Option<&PackageId> {
        self.packages.last()
    }

    pub fn packages(&self) -> &[PackageId] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl std::fmt::Display for DependencyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pkg) in self.packages.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pkg)?;
        }
        Ok(())
    }
}
