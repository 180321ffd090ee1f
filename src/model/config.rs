use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory override. Default: $XDG_DATA_HOME/listo
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notice stays on the status row
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex colour overrides for the dark scheme, keyed by theme slot
    #[serde(default)]
    pub dark: HashMap<String, String>,
    /// Hex colour overrides for the light scheme
    #[serde(default)]
    pub light: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            notice_secs: default_notice_secs(),
            show_key_hints: true,
            dark: HashMap::new(),
            light: HashMap::new(),
        }
    }
}

fn default_notice_secs() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.notice_secs, 3);
        assert!(config.ui.show_key_hints);
        assert!(config.storage.dir.is_none());
    }

    #[test]
    fn partial_ui_table() {
        let config: AppConfig = toml::from_str(
            r##"
[ui]
notice_secs = 5

[ui.dark]
background = "#000000"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.notice_secs, 5);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.dark.get("background").unwrap(), "#000000");
        assert!(config.ui.light.is_empty());
    }
}
