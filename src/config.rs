use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dashboard::theme::ThemeVariant;
use crate::navigation::{KeyMap, NavInput, NavigatorOptions, ScrollOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub keys: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: ThemeVariant,
    #[serde(default = "default_household_name")]
    pub household_name: String,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

fn default_household_name() -> String {
    "Family".to_string()
}

fn default_frame_ms() -> u64 {
    16
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            household_name: default_household_name(),
            frame_ms: default_frame_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationSettings {
    /// Focus the first region when the dashboard starts
    #[serde(default = "default_autofocus")]
    pub autofocus: bool,
    #[serde(default)]
    pub scroll: ScrollOptions,
}

fn default_autofocus() -> bool {
    true
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            autofocus: default_autofocus(),
            scroll: ScrollOptions::default(),
        }
    }
}

/// Extra key bindings, on top of arrows/Enter/Escape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KeyBindings {
    #[serde(default)]
    pub up: Vec<String>,
    #[serde(default)]
    pub down: Vec<String>,
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
    #[serde(default)]
    pub activate: Vec<String>,
    #[serde(default)]
    pub cancel: Vec<String>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("tv-dashboard")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".tv-dashboard")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, or the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config = Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        // Reject unknown key names up front
        config.key_map()?;
        Ok(config)
    }

    /// Save to `path`, or the default location when `None`
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir).with_context(|| {
                    format!("Failed to create config directory: {:?}", config_dir)
                })?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content = self.to_toml()?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(config_path)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Default key map plus the configured extra bindings
    pub fn key_map(&self) -> Result<KeyMap> {
        let mut keys = KeyMap::default();
        let groups = [
            (&self.keys.up, NavInput::Up),
            (&self.keys.down, NavInput::Down),
            (&self.keys.left, NavInput::Left),
            (&self.keys.right, NavInput::Right),
            (&self.keys.activate, NavInput::Activate),
            (&self.keys.cancel, NavInput::Cancel),
        ];
        for (names, input) in groups {
            keys.bind_names(names.as_slice(), input)
                .with_context(|| format!("Invalid key binding for {}", input.label()))?;
        }
        Ok(keys)
    }

    pub fn navigator_options(&self) -> NavigatorOptions {
        NavigatorOptions {
            scroll: self.navigation.scroll,
            autofocus: self.navigation.autofocus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{ScrollBehavior, ScrollBlock};
    use crossterm::event::KeyCode;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.navigation.autofocus);
        assert_eq!(config.ui.household_name, "Family");
        assert_eq!(config.navigation.scroll, ScrollOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
[ui]
theme = "light"
household_name = "Mulani Family"

[navigation]
autofocus = false
scroll = { behavior = "instant", block = "nearest" }
"#,
        )
        .unwrap();

        assert_eq!(config.ui.theme, ThemeVariant::Light);
        assert_eq!(config.ui.frame_ms, 16);
        assert!(!config.navigation.autofocus);
        assert_eq!(config.navigation.scroll.behavior, ScrollBehavior::Instant);
        assert_eq!(config.navigation.scroll.block, ScrollBlock::Nearest);

        let options = config.navigator_options();
        assert!(!options.autofocus);
    }

    #[test]
    fn test_extra_key_bindings() {
        let config = Config::from_toml(
            r#"
[keys]
up = ["k"]
down = ["j", "Tab"]
activate = ["Space"]
"#,
        )
        .unwrap();

        let keys = config.key_map().unwrap();
        assert_eq!(keys.lookup(KeyCode::Char('k')), Some(NavInput::Up));
        assert_eq!(keys.lookup(KeyCode::Tab), Some(NavInput::Down));
        assert_eq!(keys.lookup(KeyCode::Char(' ')), Some(NavInput::Activate));
        // Defaults survive
        assert_eq!(keys.lookup(KeyCode::Up), Some(NavInput::Up));
    }

    #[test]
    fn test_unknown_key_name_is_rejected() {
        let result = Config::from_toml("[keys]\ncancel = [\"Hyper\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.keys.left = vec!["h".to_string()];
        config.ui.theme = ThemeVariant::Light;

        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_explicit_path() {
        let dir = std::env::temp_dir().join(format!("tv-dashboard-test-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.ui.household_name = "Test".to_string();
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.ui.household_name, "Test");

        fs::remove_dir_all(&dir).unwrap();
    }
}
