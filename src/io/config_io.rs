use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// File name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Written the first time durations are saved, so the file users hand-edit
/// starts out documented.
const CONFIG_TEMPLATE: &str = r#"# nest configuration

[timer]
# Interval durations in minutes. Both must be at least 1.
# Applied the next time a countdown starts.
work_minutes = 25
break_minutes = 5
"#;

/// Error type for config I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not update {path}: {source}")]
    EditError {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Read the config, or defaults when no config file exists yet.
pub fn read_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: Config =
        toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })?;
    Ok(config)
}

/// Persist new timer durations, preserving comments and formatting in an
/// existing config.toml. The file is created from the commented template
/// on first write.
pub fn write_timer(dir: &Path, work_minutes: u32, break_minutes: u32) -> Result<(), ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let text = if path.exists() {
        fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?
    } else {
        CONFIG_TEMPLATE.to_string()
    };

    let mut doc: toml_edit::DocumentMut = text.parse().map_err(|e| ConfigError::EditError {
        path: path.clone(),
        source: e,
    })?;
    if !doc.contains_key("timer") {
        doc["timer"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["timer"]["work_minutes"] = toml_edit::value(i64::from(work_minutes));
    doc["timer"]["break_minutes"] = toml_edit::value(i64::from(break_minutes));

    fs::write(&path, doc.to_string())?;
    Ok(())
}
