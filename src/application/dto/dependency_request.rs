use std::path::PathBuf;

/// DependencyRequest - what to analyse and how to present it
#[derive(Debug, Clone)]
pub struct DependencyRequest {
    /// Root package arguments; import paths, relative paths or `...` patterns
    pub packages: Vec<String>,
    /// Directory relative arguments are resolved from
    pub working_dir: PathBuf,
    /// Follow dependencies recursively
    pub all: bool,
    /// Include standard-distribution packages
    pub include_standard: bool,
    /// Include the test imports of the root packages
    pub include_test_deps: bool,
    /// Annotate every package with the packages that import it
    pub show_importers: bool,
    /// Only show packages that depend on packages matching this pattern
    pub why: Option<String>,
    /// Maximum chains printed per root in `why` mode, `0` for unlimited
    pub max_chains: usize,
    /// List source files instead of packages
    pub list_files: bool,
}

impl DependencyRequest {
    /// Request with the tool's defaults: direct, non-standard dependencies
    /// of `packages`, test dependencies included, one chain per root.
    pub fn new(packages: Vec<String>, working_dir: PathBuf) -> Self {
        Self {
            packages,
            working_dir,
            all: false,
            include_standard: false,
            include_test_deps: true,
            show_importers: false,
            why: None,
            max_chains: 1,
            list_files: false,
        }
    }

    /// Arguments to resolve, defaulting to the package in the working directory
    pub fn package_args(&self) -> Vec<String> {
        if self.packages.is_empty() {
            vec![".".to_string()]
        } else {
            self.packages.clone()
        }
    }
}
