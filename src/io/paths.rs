use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

const APP_DIR: &str = "listo";

/// Config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join(APP_DIR).join("config.toml")
}

/// Default data directory, respecting XDG_DATA_HOME
pub fn default_data_dir() -> PathBuf {
    let data_dir = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_dir.join(APP_DIR)
}

/// Pick the data directory: explicit flag, then `storage.dir`, then the default.
/// A leading `~/` in the config value expands to the home directory.
pub fn resolve_data_dir(flag: Option<&Path>, config: &AppConfig) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    match config.storage.dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => expand_home(dir.trim()),
        _ => default_data_dir(),
    }
}

/// Log file used while the TUI owns the terminal
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("listo.log")
}

fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => dirs_home().join(rest),
        None => PathBuf::from(dir),
    }
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.storage.dir = Some("/from/config".into());
        assert_eq!(
            resolve_data_dir(Some(Path::new("/from/flag")), &config),
            PathBuf::from("/from/flag")
        );
        assert_eq!(resolve_data_dir(None, &config), PathBuf::from("/from/config"));
    }

    #[test]
    fn blank_config_dir_falls_back_to_default() {
        let mut config = AppConfig::default();
        config.storage.dir = Some("  ".into());
        assert_eq!(resolve_data_dir(None, &config), default_data_dir());
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_home("~/notes");
        assert!(expanded.ends_with("notes"));
        assert_eq!(expanded, dirs_home().join("notes"));
        assert_eq!(expand_home("/abs"), PathBuf::from("/abs"));
    }

    #[test]
    fn default_paths_end_with_app_dir() {
        assert!(config_path().ends_with("listo/config.toml"));
        assert!(default_data_dir().ends_with("listo"));
    }
}
