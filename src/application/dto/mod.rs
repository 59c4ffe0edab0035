/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI adapter and the use case, keeping the
/// domain layer unaware of command-line concerns.
mod dependency_request;
mod dependency_response;
mod output_format;

pub use dependency_request::DependencyRequest;
pub use dependency_response::DependencyResponse;
pub use output_format::OutputFormat;
