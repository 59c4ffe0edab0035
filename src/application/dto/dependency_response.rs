use crate::application::read_models::DependencyReport;
use crate::dependency_analysis::domain::RootSet;

/// DependencyResponse - result of the show-dependencies use case
#[derive(Debug, Clone)]
pub struct DependencyResponse {
    /// Canonical root packages the report was built from
    pub roots: RootSet,
    /// What to print
    pub report: DependencyReport,
}

impl DependencyResponse {
    pub fn new(roots: RootSet, report: DependencyReport) -> Self {
        Self { roots, report }
    }
}
