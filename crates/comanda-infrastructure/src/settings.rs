//! Application configuration.
//!
//! Read-only settings from `~/.config/comanda/config.toml`, with
//! environment variables taking precedence. The file is optional; the only
//! value with no default is the Groq API key.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use comanda_core::error::{ComandaError, Result};
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "sqlite://comanda.db";
const DEFAULT_MENU_PATH: &str = "menu_data.json";

/// Resolved application settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Groq API key. Env: `GROQ_API_KEY`.
    pub groq_api_key: Option<String>,
    /// Model name override. Env: `GROQ_MODEL_NAME`.
    pub model: Option<String>,
    /// SQLite database URL. Env: `COMANDA_DB`.
    pub database_url: Option<String>,
    /// Path to the menu JSON document. Env: `COMANDA_MENU`.
    pub menu_path: Option<String>,
}

impl Settings {
    /// Loads settings from the default config file (if present) and applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        settings.apply_env();
        Ok(settings)
    }

    /// Parses settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            ComandaError::config(format!(
                "failed to read config file {}: {err}",
                path.display()
            ))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Environment variables win over the config file.
    fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Applies overrides from a key lookup; `None` keeps the current value.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("GROQ_API_KEY") {
            self.groq_api_key = Some(key);
        }
        if let Some(model) = lookup("GROQ_MODEL_NAME") {
            self.model = Some(model);
        }
        if let Some(db) = lookup("COMANDA_DB") {
            self.database_url = Some(db);
        }
        if let Some(menu) = lookup("COMANDA_MENU") {
            self.menu_path = Some(menu);
        }
    }

    fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("comanda").join("config.toml"))
    }

    /// The API key, or a configuration error naming where to put it.
    pub fn api_key(&self) -> Result<&str> {
        self.groq_api_key.as_deref().ok_or_else(|| {
            ComandaError::config(
                "Groq API key not set; export GROQ_API_KEY or add groq_api_key to ~/.config/comanda/config.toml",
            )
        })
    }

    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    pub fn menu_path(&self) -> &str {
        self.menu_path.as_deref().unwrap_or(DEFAULT_MENU_PATH)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_file_parses_all_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "groq_api_key = \"gsk_test\"\nmodel = \"llama3-70b-8192\"\ndatabase_url = \"sqlite://test.db\"\nmenu_path = \"menu.json\""
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.api_key().unwrap(), "gsk_test");
        assert_eq!(settings.model.as_deref(), Some("llama3-70b-8192"));
        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.menu_path(), "menu.json");
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let settings = Settings::default();
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(settings.menu_path(), DEFAULT_MENU_PATH);
        assert!(settings.api_key().is_err());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "groq_api_key = \"gsk_file\"\nmodel = \"llama3-70b-8192\"\ndatabase_url = \"sqlite://file.db\""
        )
        .unwrap();

        let mut settings = Settings::from_file(file.path()).unwrap();
        settings.apply_overrides(|key| match key {
            "GROQ_API_KEY" => Some("gsk_env".to_string()),
            "COMANDA_DB" => Some("sqlite://env.db".to_string()),
            _ => None,
        });

        assert_eq!(settings.api_key().unwrap(), "gsk_env");
        assert_eq!(settings.database_url(), "sqlite://env.db");
        // No override for the model: the file value stays.
        assert_eq!(settings.model.as_deref(), Some("llama3-70b-8192"));
    }

    #[test]
    fn test_partial_file_is_valid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "groq_api_key = \"gsk_test\"").unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
    }
}
