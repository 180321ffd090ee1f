use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::storage::atomic_write;
use crate::model::config::AppConfig;

/// Error type for config file operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseDocument {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("invalid config key: {0}")]
    InvalidKey(String),
    #[error("config edit rejected: {0}")]
    Invalid(toml::de::Error),
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

pub const CONFIG_TEMPLATE: &str = r##"# listo configuration

[storage]
# Where tasks and the theme preference are kept.
# Default: $XDG_DATA_HOME/listo (usually ~/.local/share/listo)
# dir = "~/.local/share/listo"

[ui]
# Seconds a notice stays on the status row
notice_secs = 3
# Show key hints in the footer
show_key_hints = true

# --- Colour overrides ---
# Uncomment and edit to override the built-in schemes.
#
# [ui.dark]
# background = "#0C001B"
# text = "#B0AAFF"
# text_bright = "#FFFFFF"
# highlight = "#FB4196"
# dim = "#7D78BF"
# important = "#FFD700"
# done = "#44FF88"
# archived = "#CC66FF"
#
# [ui.light]
# background = "#F4F4F8"
# text = "#2A2A3A"
"##;

/// Read the config file. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let Some(text) = read_optional(path)? else {
        return Ok(AppConfig::default());
    };
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config file as a toml_edit document for formatting-preserving edits.
/// A missing file yields an empty document.
pub fn read_config_document(path: &Path) -> Result<toml_edit::DocumentMut, ConfigError> {
    let text = read_optional(path)?.unwrap_or_default();
    text.parse().map_err(|e| ConfigError::ParseDocument {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate the document against the config schema, then write it to disk.
pub fn write_config(path: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ConfigError> {
    let text = doc.to_string();
    toml::from_str::<AppConfig>(&text).map_err(ConfigError::Invalid)?;
    write_text(path, &text)
}

/// Write the commented template. Refuses to overwrite unless `force`.
pub fn init_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    write_text(path, CONFIG_TEMPLATE)
}

/// Set a dotted key (e.g. `ui.notice_secs`) in the document.
/// Values that parse as TOML (numbers, booleans, quoted strings) keep their
/// type; anything else is stored as a string.
pub fn set_value(doc: &mut toml_edit::DocumentMut, key: &str, raw: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = key.split('.').map(str::trim).collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::InvalidKey(key.to_string()));
    }
    let Some((last, tables)) = parts.split_last() else {
        return Err(ConfigError::InvalidKey(key.to_string()));
    };

    let mut table = doc.as_table_mut();
    for name in tables {
        let item = table
            .entry(name)
            .or_insert(toml_edit::Item::Table(toml_edit::Table::new()));
        table = item
            .as_table_mut()
            .ok_or_else(|| ConfigError::InvalidKey(key.to_string()))?;
    }
    table[*last] = toml_edit::value(parse_value(raw));
    Ok(())
}

fn parse_value(raw: &str) -> toml_edit::Value {
    raw.trim()
        .parse::<toml_edit::Value>()
        .unwrap_or_else(|_| toml_edit::Value::from(raw))
}

fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn write_text(path: &Path, text: &str) -> Result<(), ConfigError> {
    let to_err = |e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    atomic_write(path, text.as_bytes()).map_err(to_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn template_parses_to_defaults() {
        let config: AppConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui\nnotice_secs = ").unwrap();
        assert!(matches!(read_config(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("listo/config.toml");
        init_config(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
        assert!(matches!(
            init_config(&path, false),
            Err(ConfigError::AlreadyExists(_))
        ));
        init_config(&path, true).unwrap();
    }

    #[test]
    fn set_value_preserves_comments() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        init_config(&path, false).unwrap();

        let mut doc = read_config_document(&path).unwrap();
        set_value(&mut doc, "ui.notice_secs", "5").unwrap();
        write_config(&path, &doc).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# Seconds a notice stays on the status row"));
        assert!(written.contains("notice_secs = 5"));
        assert_eq!(read_config(&path).unwrap().ui.notice_secs, 5);
    }

    #[test]
    fn set_value_creates_tables_and_strings() {
        let mut doc = toml_edit::DocumentMut::new();
        set_value(&mut doc, "ui.dark.background", "#000000").unwrap();
        set_value(&mut doc, "storage.dir", "/tmp/listo").unwrap();
        let config: AppConfig = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.ui.dark.get("background").unwrap(), "#000000");
        assert_eq!(config.storage.dir.as_deref(), Some("/tmp/listo"));
    }

    #[test]
    fn set_value_rejects_bad_keys() {
        let mut doc = toml_edit::DocumentMut::new();
        assert!(matches!(
            set_value(&mut doc, "ui..x", "1"),
            Err(ConfigError::InvalidKey(_))
        ));
        set_value(&mut doc, "ui.notice_secs", "3").unwrap();
        // notice_secs is a value, not a table
        assert!(matches!(
            set_value(&mut doc, "ui.notice_secs.x", "1"),
            Err(ConfigError::InvalidKey(_))
        ));
    }

    #[test]
    fn write_rejects_schema_violations() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        let mut doc = toml_edit::DocumentMut::new();
        set_value(&mut doc, "ui.notice_secs", "soon").unwrap();
        assert!(matches!(
            write_config(&path, &doc),
            Err(ConfigError::Invalid(_))
        ));
        assert!(!path.exists());
    }
}
