//! Domain layer: package graph model, analysis services and policies.
//!
//! Nothing here performs I/O; package metadata arrives through the
//! [`PackageResolver`](crate::ports::outbound::PackageResolver) port.
pub mod domain;
pub mod policies;
pub mod services;
