mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use owo_colors::OwoColorize;
use showdeps::adapters::outbound::console::StderrProgressReporter;
use showdeps::adapters::outbound::go_list::DEFAULT_GO_COMMAND;
use showdeps::application::dto::DependencyRequest;
use showdeps::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, ResolverFactory, ResolverType,
};
use showdeps::application::use_cases::ShowDependenciesUseCase;
use showdeps::shared::error::{ExitCode, ShowdepsError};
use showdeps::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Usage errors exit with code 2 from clap itself
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("\n{} {}\n", "❌".red(), "An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Logs go to stderr; stdout carries the report.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("showdeps={}", level))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let working_dir = std::env::current_dir().map_err(|e| ShowdepsError::WorkingDirectory {
        details: e.to_string(),
    })?;

    let config = load_config(args, &working_dir)?;

    // Create adapters (Dependency Injection)
    let resolver = ResolverFactory::create(resolver_type(args, &config))?;
    let progress_reporter = StderrProgressReporter::new(args.verbose > 0);
    let use_case = ShowDependenciesUseCase::new(resolver, progress_reporter);

    let request = build_request(args, &config, working_dir);
    let response = use_case.execute(request)?;
    tracing::info!(
        roots = response.roots.len(),
        lines = response.report.len(),
        "analysis complete"
    );

    let output = FormatterFactory::create(args.format).format(&response.report)?;
    PresenterFactory::create(PresenterType::from(args.output.clone())).present(&output)?;

    Ok(())
}

/// An explicit `--config` must exist; the default file is optional.
fn load_config(args: &Args, working_dir: &Path) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(working_dir)?.unwrap_or_default()),
    }
}

/// Command-line flags win over the config file, which wins over defaults.
fn build_request(args: &Args, config: &ConfigFile, working_dir: PathBuf) -> DependencyRequest {
    let mut request = DependencyRequest::new(args.packages.clone(), working_dir);
    request.all = args.all;
    request.include_standard = args.stdlib || config.stdlib.unwrap_or(false);
    request.include_test_deps = !(args.no_test_deps || config.no_test_deps.unwrap_or(false));
    request.show_importers = args.from;
    request.why = args.why.clone();
    request.max_chains = args
        .max_chains
        .or(config.max_chains)
        .unwrap_or(request.max_chains);
    request.list_files = args.files;
    request
}

fn resolver_type(args: &Args, config: &ConfigFile) -> ResolverType {
    match args.metadata.as_ref().or(config.metadata.as_ref()) {
        Some(path) => ResolverType::MetadataFile(path.clone()),
        None => ResolverType::GoCommand(
            config
                .go_command
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GO_COMMAND)),
        ),
    }
}
