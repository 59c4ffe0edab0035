mod progress;

use crate::application::dto::{DependencyRequest, DependencyResponse};
use crate::application::read_models::DependencyReport;
use crate::dependency_analysis::domain::{DependencyIndex, PackageId, RootSet};
use crate::dependency_analysis::policies::StandardLibraryPolicy;
use crate::dependency_analysis::services::{
    ChainFinder, GraphBuilder, GraphOptions, PatternMatcher, ReachabilityFilter,
};
use crate::ports::outbound::{PackageResolver, ProgressReporter, ResolveMode};
use crate::shared::error::ShowdepsError;
use crate::shared::Result;
use progress::ProgressTrackingResolver;
use std::path::{Path, PathBuf};

/// ShowDependenciesUseCase - lists, annotates or explains the dependencies
/// of a set of root packages
///
/// # Type Parameters
/// * `R` - PackageResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct ShowDependenciesUseCase<R, PR> {
    resolver: R,
    progress_reporter: PR,
}

/// Flags derived from a request before any graph work starts
struct QueryPlan {
    graph_options: GraphOptions,
    why: Option<PatternMatcher>,
    show_importers: bool,
    show_chains: bool,
    max_chains: usize,
}

impl QueryPlan {
    /// `--why` implies recursion; with `--all` it shows every intermediate
    /// package annotated with importers instead of chains. A standard
    /// package as the target turns standard packages on.
    fn from_request(request: &DependencyRequest) -> Result<Self> {
        let why = request
            .why
            .as_deref()
            .map(PatternMatcher::compile)
            .transpose()?;

        let mut plan = Self {
            graph_options: GraphOptions {
                recursive: request.all,
                include_standard: request.include_standard,
                include_test_deps: request.include_test_deps,
            },
            why: None,
            show_importers: request.show_importers,
            show_chains: false,
            max_chains: request.max_chains,
        };

        if request.list_files {
            return Ok(plan);
        }

        if let Some(matcher) = why {
            plan.graph_options.recursive = true;
            if request.all {
                plan.show_importers = true;
            } else {
                plan.show_chains = true;
            }
            if StandardLibraryPolicy::is_standard_path(matcher.pattern()) {
                plan.graph_options.include_standard = true;
            }
            plan.why = Some(matcher);
        }

        Ok(plan)
    }
}

impl<R, PR> ShowDependenciesUseCase<R, PR>
where
    R: PackageResolver,
    PR: ProgressReporter,
{
    /// Creates a new ShowDependenciesUseCase with injected dependencies
    pub fn new(resolver: R, progress_reporter: PR) -> Self {
        Self {
            resolver,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails without partial output if the why pattern is malformed or any
    /// package, root or discovered, cannot be resolved.
    pub fn execute(&self, request: DependencyRequest) -> Result<DependencyResponse> {
        // Step 1: Validate the why pattern before touching the resolver
        let plan = QueryPlan::from_request(&request)?;

        // Step 2: Canonicalize root arguments
        let roots = self.resolve_roots(&request)?;
        tracing::info!(roots = roots.len(), "resolved root packages");

        // Step 3: Expand the graph
        let tracking = ProgressTrackingResolver::new(&self.resolver, &self.progress_reporter);
        let built = GraphBuilder::new(&tracking, plan.graph_options)
            .build(&roots, &request.working_dir);
        self.progress_reporter.finish();
        let index = built?;
        tracing::info!(
            packages = index.len(),
            resolved = tracking.resolved_count(),
            "dependency graph built"
        );

        // Step 4: Shape the report
        let report = if request.list_files {
            self.list_files(&index, &roots, &request)?
        } else {
            Self::report_dependencies(index, &roots, &plan)?
        };

        Ok(DependencyResponse::new(roots, report))
    }

    /// Turns the request's package arguments into canonical root ids
    ///
    /// `...` arguments are expanded first; an argument matching nothing is
    /// reported as a warning, like the go command does.
    fn resolve_roots(&self, request: &DependencyRequest) -> Result<RootSet> {
        let dir = request.working_dir.as_path();
        let mut candidates = Vec::new();

        for arg in request.package_args() {
            if PatternMatcher::is_pattern(&arg) {
                let expanded = self
                    .resolver
                    .expand_pattern(&arg, dir)
                    .map_err(|e| resolution_error(&arg, dir, e))?;
                if expanded.is_empty() {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: \"{}\" matched no packages",
                        arg
                    ));
                }
                candidates.extend(expanded);
            } else {
                candidates.push(PackageId::new(arg)?);
            }
        }

        let mut roots = RootSet::new();
        for candidate in candidates {
            let info = self
                .resolver
                .resolve(&candidate, dir, ResolveMode::FindOnly)
                .map_err(|e| resolution_error(candidate.as_str(), dir, e))?;
            roots.insert(info.id().clone());
        }

        Ok(roots)
    }

    /// Removes the roots, applies the why filter and picks the output shape
    fn report_dependencies(
        mut index: DependencyIndex,
        roots: &RootSet,
        plan: &QueryPlan,
    ) -> Result<DependencyReport> {
        for root in roots {
            index.remove(root);
        }

        if let Some(matcher) = &plan.why {
            let removed = ReachabilityFilter::retain_importers_of(&mut index, |p| matcher.matches(p));
            tracing::debug!(
                pattern = matcher.pattern(),
                removed,
                remaining = index.len(),
                "applied why filter"
            );
        }

        index.normalize();

        let report = match &plan.why {
            Some(matcher) if plan.show_chains => DependencyReport::Chains(ChainFinder::collect(
                &index,
                roots,
                |p| matcher.matches(p),
                plan.max_chains,
            )?),
            _ if plan.show_importers => DependencyReport::importers_of(&index),
            _ => DependencyReport::packages_of(&index),
        };

        Ok(report)
    }

    /// Source files of every package in the graph, roots included
    ///
    /// Test files are listed for root packages only, and only when test
    /// dependencies are enabled.
    fn list_files(
        &self,
        index: &DependencyIndex,
        roots: &RootSet,
        request: &DependencyRequest,
    ) -> Result<DependencyReport> {
        let dir = request.working_dir.as_path();
        let packages: Vec<&PackageId> = index
            .packages()
            .filter(|p| !p.is_foreign_function())
            .collect();
        let total = packages.len();

        let listed: Result<Vec<Vec<PathBuf>>> = packages
            .into_iter()
            .enumerate()
            .map(|(done, package)| {
                self.progress_reporter
                    .report_progress(done + 1, total, Some(package.as_str()));
                let with_tests = roots.contains(package) && request.include_test_deps;
                self.files_of(package, dir, with_tests)
            })
            .collect();
        self.progress_reporter.finish();

        Ok(DependencyReport::Files(listed?.into_iter().flatten().collect()))
    }

    fn files_of(&self, package: &PackageId, dir: &Path, with_tests: bool) -> Result<Vec<PathBuf>> {
        let info = self
            .resolver
            .resolve(package, dir, ResolveMode::Full)
            .map_err(|e| resolution_error(package.as_str(), dir, e))?;

        let mut files: Vec<PathBuf> = info
            .source_files()
            .iter()
            .map(|f| info.dir().join(f))
            .collect();
        if with_tests {
            files.extend(info.test_source_files().iter().map(|f| info.dir().join(f)));
        }
        Ok(files)
    }
}

fn resolution_error(package: &str, dir: &Path, cause: impl std::fmt::Display) -> anyhow::Error {
    ShowdepsError::Resolution {
        package: package.to_string(),
        dir: dir.to_path_buf(),
        details: cause.to_string(),
    }
    .into()
}
