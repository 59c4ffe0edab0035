use crate::application::read_models::DependencyReport;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Emits `{"mode": ..., "items": [...]}` with the same ordering as the
/// text output.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for JsonFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}
