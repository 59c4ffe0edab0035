/// Mock implementations for testing
mod mock_package_resolver;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_package_resolver::MockPackageResolver;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
