use crate::dependency_analysis::domain::{PackageId, PackageInfo};
use crate::ports::outbound::{PackageResolver, ProgressReporter, ResolveError, ResolveMode};
use std::cell::Cell;
use std::path::Path;

/// Wraps a resolver and reports every full resolution to a progress reporter
///
/// Resolution is where the time goes (each lookup may run the Go
/// toolchain), so this is what the spinner counts.
pub(super) struct ProgressTrackingResolver<'a, R: ?Sized, PR: ?Sized> {
    inner: &'a R,
    reporter: &'a PR,
    resolved: Cell<usize>,
}

impl<'a, R, PR> ProgressTrackingResolver<'a, R, PR>
where
    R: PackageResolver + ?Sized,
    PR: ProgressReporter + ?Sized,
{
    pub(super) fn new(inner: &'a R, reporter: &'a PR) -> Self {
        Self {
            inner,
            reporter,
            resolved: Cell::new(0),
        }
    }

    pub(super) fn resolved_count(&self) -> usize {
        self.resolved.get()
    }
}

impl<R, PR> PackageResolver for ProgressTrackingResolver<'_, R, PR>
where
    R: PackageResolver + ?Sized,
    PR: ProgressReporter + ?Sized,
{
    fn resolve(
        &self,
        id: &PackageId,
        dir: &Path,
        mode: ResolveMode,
    ) -> Result<PackageInfo, ResolveError> {
        let info = self.inner.resolve(id, dir, mode)?;
        if mode == ResolveMode::Full {
            let count = self.resolved.get() + 1;
            self.resolved.set(count);
            self.reporter
                .report_progress(count, 0, Some(info.id().as_str()));
        }
        Ok(info)
    }

    fn expand_pattern(&self, pattern: &str, dir: &Path) -> Result<Vec<PackageId>, ResolveError> {
        self.inner.expand_pattern(pattern, dir)
    }
}
