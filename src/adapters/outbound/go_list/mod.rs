/// Package resolvers backed by `go list` metadata
mod command_resolver;
mod metadata_resolver;
mod package_json;

pub use command_resolver::{GoCommandResolver, DEFAULT_GO_COMMAND};
pub use metadata_resolver::GoListMetadataResolver;

use std::path::{Component, Path, PathBuf};

/// Lexically removes `.` and `..` components without touching the filesystem
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("/work/app/./lib")), PathBuf::from("/work/app/lib"));
        assert_eq!(clean_path(Path::new("/work/app/cmd/../lib")), PathBuf::from("/work/app/lib"));
        assert_eq!(clean_path(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(clean_path(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(clean_path(Path::new("../../x")), PathBuf::from("../../x"));
    }
}
