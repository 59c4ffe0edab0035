use super::package_json::{parse_stream, GoListPackage};
use crate::dependency_analysis::domain::{PackageId, PackageInfo};
use crate::ports::outbound::{PackageResolver, ResolveError, ResolveMode};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default Go toolchain binary, looked up on `PATH`
pub const DEFAULT_GO_COMMAND: &str = "go";

/// GoCommandResolver adapter that asks the Go toolchain about each package
///
/// Every lookup runs `go list` in the importing package's directory, so
/// module boundaries and vendoring are honoured by the toolchain itself.
pub struct GoCommandResolver {
    go_command: PathBuf,
}

impl GoCommandResolver {
    pub fn new(go_command: impl Into<PathBuf>) -> Self {
        Self {
            go_command: go_command.into(),
        }
    }

    fn run(&self, args: &[&str], dir: &Path) -> Result<String, ResolveError> {
        let command_line = format!("{} {}", self.go_command.display(), args.join(" "));
        tracing::trace!(command = %command_line, dir = %dir.display(), "running go list");

        let output = Command::new(&self.go_command)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| ResolveError::Command {
                command: command_line.clone(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ResolveError::Command {
                command: command_line,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for GoCommandResolver {
    fn default() -> Self {
        Self::new(DEFAULT_GO_COMMAND)
    }
}

/// Ids are passed as arguments, so one that looks like a flag is refused
fn reject_flag_like(id: &str) -> Result<(), ResolveError> {
    if id.starts_with('-') {
        return Err(ResolveError::Metadata {
            package: id.to_string(),
            details: "package paths must not start with '-'".to_string(),
        });
    }
    Ok(())
}

impl PackageResolver for GoCommandResolver {
    fn resolve(
        &self,
        id: &PackageId,
        dir: &Path,
        mode: ResolveMode,
    ) -> Result<PackageInfo, ResolveError> {
        reject_flag_like(id.as_str())?;

        let args: &[&str] = match mode {
            ResolveMode::FindOnly => &["list", "-json", "-find", id.as_str()],
            ResolveMode::Full => &["list", "-json", id.as_str()],
        };
        let stdout = self.run(args, dir)?;

        let packages = parse_stream(&stdout).map_err(|e| ResolveError::Metadata {
            package: id.to_string(),
            details: e.to_string(),
        })?;
        let package: &GoListPackage = packages
            .iter()
            .find(|p| !p.is_test_variant())
            .ok_or_else(|| ResolveError::NotFound {
                package: id.to_string(),
                dir: dir.to_path_buf(),
            })?;

        match mode {
            ResolveMode::FindOnly => package.to_identity(),
            ResolveMode::Full => package.to_info(),
        }
    }

    fn expand_pattern(&self, pattern: &str, dir: &Path) -> Result<Vec<PackageId>, ResolveError> {
        reject_flag_like(pattern)?;

        let stdout = self.run(&["list", "-find", "-f", "{{.ImportPath}}", pattern], dir)?;
        stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                PackageId::new(line).map_err(|e| ResolveError::Metadata {
                    package: line.to_string(),
                    details: e.to_string(),
                })
            })
            .collect()
    }
}
