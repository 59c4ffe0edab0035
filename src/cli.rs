use clap::{ArgAction, Parser};
use showdeps::application::dto::OutputFormat;
use std::path::PathBuf;

/// Show the dependencies of Go packages, and why they are there
///
/// Prints the direct dependencies of the named packages (default: the
/// package in the current directory), excluding standard packages and the
/// named packages themselves.
#[derive(Parser, Debug)]
#[command(name = "showdeps")]
#[command(version)]
#[command(about = "Show Go package dependencies and explain why a dependency is present")]
pub struct Args {
    /// Packages to analyse: import paths, relative paths or `...` patterns
    #[arg(value_name = "PKG")]
    pub packages: Vec<String>,

    /// Show dependencies recursively; with --why, show every intermediate package
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Include standard library packages
    #[arg(long)]
    pub stdlib: bool,

    /// Do not include the test dependencies of the named packages
    #[arg(short = 'T', long = "no-test-deps")]
    pub no_test_deps: bool,

    /// Show which packages import each dependency
    #[arg(long)]
    pub from: bool,

    /// Show only packages that depend on packages matching PATTERN ('...' matches anything)
    #[arg(long, value_name = "PATTERN")]
    pub why: Option<String>,

    /// Maximum dependency chains shown per named package with --why (0 for unlimited) [default: 1]
    #[arg(short = 'n', long = "max-chains", value_name = "N")]
    pub max_chains: Option<usize>,

    /// List source files of dependencies instead of packages (overrides --from and --why)
    #[arg(short = 'f', long)]
    pub files: bool,

    /// Read package metadata from a `go list -json -deps -test` dump instead of running go
    #[arg(long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to showdeps.config.yml in the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
