use crate::application::read_models::DependencyReport;
use crate::shared::Result;

/// DependencyFormatter port for rendering a dependency report
pub trait DependencyFormatter {
    /// Formats the report
    ///
    /// # Returns
    /// The full output, newline terminated when not empty
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &DependencyReport) -> Result<String>;
}
