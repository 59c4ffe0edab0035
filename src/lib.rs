//! showdeps - show Go package dependencies and explain why they are there
//!
//! Given a set of root packages, showdeps builds an index from each
//! dependency to the packages that import it, and then either lists the
//! dependencies, annotates them with their importers, or prints chains of
//! imports from a root down to the packages matching a `--why` pattern.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): package ids, the importer index,
//!   graph expansion, pattern matching, reachability and chain search
//! - **Application Layer** (`application`): the use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): `go list` resolvers, formatters, console and file output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use showdeps::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let resolver = GoListMetadataResolver::load(Path::new("deps.json"))?;
//! let use_case = ShowDependenciesUseCase::new(resolver, StderrProgressReporter::new(false));
//!
//! let mut request = DependencyRequest::new(vec!["example.com/app".to_string()], PathBuf::from("."));
//! request.why = Some("golang.org/x/...".to_string());
//! let response = use_case.execute(request)?;
//!
//! print!("{}", TextFormatter::new().format(&response.report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::go_list::{GoCommandResolver, GoListMetadataResolver};
    pub use crate::application::dto::{DependencyRequest, DependencyResponse, OutputFormat};
    pub use crate::application::read_models::{DependencyReport, ImporterView};
    pub use crate::application::use_cases::ShowDependenciesUseCase;
    pub use crate::dependency_analysis::domain::{
        DependencyChain, DependencyIndex, PackageId, PackageInfo, RootSet,
    };
    pub use crate::dependency_analysis::policies::StandardLibraryPolicy;
    pub use crate::dependency_analysis::services::{
        ChainFinder, GraphBuilder, GraphOptions, PatternMatcher, ReachabilityFilter,
    };
    pub use crate::ports::outbound::{
        DependencyFormatter, OutputPresenter, PackageResolver, ProgressReporter, ResolveError,
        ResolveMode,
    };
    pub use crate::shared::Result;
}
