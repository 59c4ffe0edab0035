/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: package resolution
/// through `go list`, report formatting, and console and file output.
pub mod outbound;
