use crate::dependency_analysis::domain::PackageId;

/// StandardLibraryPolicy decides whether an import path belongs to the
/// standard distribution shipped with the toolchain
///
/// Import paths outside the standard distribution start with a domain
/// (`github.com/...`, `golang.org/x/...`), so the rule is:
/// a package is standard when its first path segment contains no `.`.
///
/// The check works on the identifier alone, which lets the graph builder
/// drop standard imports without asking the resolver about them.
pub struct StandardLibraryPolicy;

impl StandardLibraryPolicy {
    pub fn is_standard(id: &PackageId) -> bool {
        Self::is_standard_path(id.as_str())
    }

    /// Same rule applied to a raw path or pattern (e.g. a `--why` argument)
    pub fn is_standard_path(path: &str) -> bool {
        let first_segment = path.split('/').next().unwrap_or_default();
        !first_segment.contains('.')
    }
}
