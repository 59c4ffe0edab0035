use crate::application::read_models::DependencyReport;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter for the line-oriented output
///
/// One line per package, annotated package or chain; ids are separated by
/// single spaces. File paths are printed as they were joined.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for TextFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let mut out = String::new();

        match report {
            DependencyReport::Packages(packages) => {
                for package in packages {
                    writeln!(out, "{}", package)?;
                }
            }
            DependencyReport::Importers(views) => {
                for view in views {
                    write!(out, "{}", view.package)?;
                    for importer in &view.imported_by {
                        write!(out, " {}", importer)?;
                    }
                    out.push('\n');
                }
            }
            DependencyReport::Chains(chains) => {
                for chain in chains {
                    writeln!(out, "{}", chain)?;
                }
            }
            DependencyReport::Files(files) => {
                for file in files {
                    writeln!(out, "{}", file.display())?;
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ImporterView;
    use crate::dependency_analysis::domain::{DependencyChain, PackageId};
    use std::path::PathBuf;

    fn id(s: &str) -> PackageId {
        PackageId::new(s).unwrap()
    }

    #[test]
    fn test_packages_one_per_line() {
        let report = DependencyReport::Packages(vec![id("x.io/a"), id("x.io/b")]);
        let out = TextFormatter::new().format(&report).unwrap();
        assert_eq!(out, "x.io/a\nx.io/b\n");
    }

    #[test]
    fn test_importers_follow_package() {
        let report = DependencyReport::Importers(vec![
            ImporterView {
                package: id("x.io/lib"),
                imported_by: vec![id("x.io/app"), id("x.io/tool")],
            },
            ImporterView {
                package: id("x.io/orphan"),
                imported_by: vec![],
            },
        ]);
        let out = TextFormatter::new().format(&report).unwrap();
        assert_eq!(out, "x.io/lib x.io/app x.io/tool\nx.io/orphan\n");
    }

    #[test]
    fn test_chains_space_separated() {
        let report = DependencyReport::Chains(vec![DependencyChain::new(vec![
            id("x.io/app"),
            id("x.io/lib"),
            id("x.io/target"),
        ])]);
        let out = TextFormatter::new().format(&report).unwrap();
        assert_eq!(out, "x.io/app x.io/lib x.io/target\n");
    }

    #[test]
    fn test_files() {
        let report = DependencyReport::Files(vec![PathBuf::from("/src/app/main.go")]);
        let out = TextFormatter::new().format(&report).unwrap();
        assert_eq!(out, "/src/app/main.go\n");
    }

    #[test]
    fn test_empty_report_prints_nothing() {
        let out = TextFormatter::new()
            .format(&DependencyReport::Chains(vec![]))
            .unwrap();
        assert!(out.is_empty());
    }
}
