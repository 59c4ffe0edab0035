/// Use cases - application workflows
mod show_dependencies;

pub use show_dependencies::ShowDependenciesUseCase;
