//! Configuration file support for showdeps.
//!
//! Project defaults live in `showdeps.config.yml`, discovered in the working
//! directory or passed with `--config`. Command-line flags win over the file.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use showdeps::shared::error::ShowdepsError;
use showdeps::shared::security::safe_read_to_string;
use showdeps::shared::Result;

pub const CONFIG_FILENAME: &str = "showdeps.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub stdlib: Option<bool>,
    pub no_test_deps: Option<bool>,
    pub max_chains: Option<usize>,
    /// Metadata dump; relative paths are taken from the config file's directory.
    pub metadata: Option<PathBuf>,
    pub go_command: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let config_error = |details: String| ShowdepsError::ConfigError {
        path: path.to_path_buf(),
        details,
    };

    let content =
        safe_read_to_string(path, "config file").map_err(|e| config_error(e.to_string()))?;

    let mut config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).map_err(|e| config_error(e.to_string()))?
    };

    validate_config(&config).map_err(config_error)?;
    warn_unknown_fields(&config, path);

    if let (Some(metadata), Some(base)) = (config.metadata.as_ref(), path.parent()) {
        if metadata.is_relative() {
            config.metadata = Some(base.join(metadata));
        }
    }

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> std::result::Result<(), String> {
    if config
        .go_command
        .as_ref()
        .is_some_and(|cmd| cmd.as_os_str().is_empty())
    {
        return Err("go_command must not be empty".to_string());
    }
    if config
        .metadata
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        return Err("metadata must not be empty".to_string());
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile, path: &Path) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(
            field = %key,
            path = %path.display(),
            "unknown config field will be ignored"
        );
    }
}
