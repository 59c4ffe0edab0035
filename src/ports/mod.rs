/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (package
/// metadata, console, output destination) through these traits.
pub mod outbound;
