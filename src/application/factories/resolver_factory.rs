use crate::adapters::outbound::go_list::{GoCommandResolver, GoListMetadataResolver};
use crate::ports::outbound::PackageResolver;
use crate::shared::Result;
use std::path::PathBuf;

/// Which source of package metadata to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverType {
    /// Run the Go toolchain for every lookup
    GoCommand(PathBuf),
    /// Read a saved `go list -json -deps -test` dump
    MetadataFile(PathBuf),
}

/// Factory for creating package resolvers
pub struct ResolverFactory;

impl ResolverFactory {
    /// Creates a resolver; loading a metadata file happens here, so a bad
    /// file fails before any analysis starts.
    pub fn create(resolver_type: ResolverType) -> Result<Box<dyn PackageResolver>> {
        match resolver_type {
            ResolverType::GoCommand(go_command) => {
                tracing::debug!(go = %go_command.display(), "using go command resolver");
                Ok(Box::new(GoCommandResolver::new(go_command)))
            }
            ResolverType::MetadataFile(path) => {
                Ok(Box::new(GoListMetadataResolver::load(&path)?))
            }
        }
    }
}
