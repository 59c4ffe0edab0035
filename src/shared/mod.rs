//! Shared building blocks used by every layer: the crate-wide `Result`
//! alias, the error taxonomy and the file-safety checks.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
