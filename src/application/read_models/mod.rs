//! Read models handed to formatters
//!
//! The use case has already sorted, deduplicated and filtered everything;
//! formatters only render.

pub mod dependency_report;

pub use dependency_report::{DependencyReport, ImporterView};
