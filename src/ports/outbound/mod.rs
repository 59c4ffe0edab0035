/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Go toolchain, file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod package_resolver;
pub mod progress_reporter;

pub use formatter::DependencyFormatter;
pub use output_presenter::OutputPresenter;
pub use package_resolver::{PackageResolver, ResolveError, ResolveMode};
pub use progress_reporter::ProgressReporter;
