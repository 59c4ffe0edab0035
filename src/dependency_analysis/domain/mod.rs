pub mod dependency_chain;
pub mod dependency_index;
pub mod package;

pub use dependency_chain::DependencyChain;
pub use dependency_index::DependencyIndex;
pub use package::{PackageId, PackageInfo, FOREIGN_FUNCTION_IMPORT};

use std::collections::BTreeSet;

/// Packages named explicitly by the caller
pub type RootSet = BTreeSet<PackageId>;
