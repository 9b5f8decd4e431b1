use crate::core::theme::ThemeName;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Portfolio content file; the built-in content is used when unset
    pub content_path: Option<PathBuf>,
    /// Projects shown per `/projects` page
    pub page_size: Option<usize>,
    /// Theme used when nothing has been persisted yet
    pub default_theme: Option<String>,
    /// Number of history entries kept across sessions
    pub history_limit: Option<usize>,
    /// Write diagnostics to this file
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from_path(&config_path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from_path(config_path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "termfolio", "termfolio")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The configured default theme, ignoring names that do not parse.
    pub fn default_theme(&self) -> ThemeName {
        self.default_theme
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("nonexistent_config.toml");

        let config = Config::load_from_path(&config_path).expect("Failed to load config");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            content_path: Some(PathBuf::from("/tmp/content.toml")),
            page_size: Some(3),
            default_theme: Some("matrix".to_string()),
            history_limit: Some(20),
            log_file: None,
        };
        config.save_to_path(&config_path).expect("Failed to save config");

        let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.default_theme(), ThemeName::Matrix);
    }

    #[test]
    fn unknown_default_theme_falls_back_to_dark() {
        let config = Config {
            default_theme: Some("dracula".to_string()),
            ..Config::default()
        };
        assert_eq!(config.default_theme(), ThemeName::Dark);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "page_size = \"five\"").unwrap();
        assert!(Config::load_from_path(&config_path).is_err());
    }
}
