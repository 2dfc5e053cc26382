use crate::error::{Result, ShipBrokerError};
use crate::render::OutputFormat;
use crate::table::{PageKind, CARGOES_TABLE_ID, VESSELS_TABLE_ID};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "shipboard.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// No timeout unless set.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub vessels_table_id: String,
    pub cargoes_table_id: String,
    pub default_page: PageKind,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub board: BoardConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            vessels_table_id: VESSELS_TABLE_ID.to_string(),
            cargoes_table_id: CARGOES_TABLE_ID.to_string(),
            default_page: PageKind::Index,
            format: OutputFormat::Html,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Config {
    /// Load `shipboard.toml` from the working directory if present, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            info!("⚠️ No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ShipBrokerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ShipBrokerError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShipBrokerError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            ShipBrokerError::Config(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SHIPBOARD_API_URL") {
            self.api.base_url = url;
        }

        if let Some(timeout) = lookup("SHIPBOARD_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_seconds = Some(secs),
                Err(_) => warn!("Ignoring SHIPBOARD_TIMEOUT={}: not a number of seconds", timeout),
            }
        }

        if let Some(format) = lookup("SHIPBOARD_FORMAT") {
            match format.parse::<OutputFormat>() {
                Ok(format) => self.board.format = format,
                Err(e) => warn!("Ignoring SHIPBOARD_FORMAT: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout(), None);
        assert_eq!(config.board.vessels_table_id, "vessels-table");
        assert_eq!(config.board.cargoes_table_id, "cargoes-table");
        assert_eq!(config.board.default_page, PageKind::Index);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://broker.example"

            [board]
            format = "text"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://broker.example");
        assert_eq!(config.board.format, OutputFormat::Text);
        assert_eq!(config.board.cargoes_table_id, "cargoes-table");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SHIPBOARD_API_URL", "http://10.0.0.5:8000"),
            ("SHIPBOARD_TIMEOUT", "15"),
            ("SHIPBOARD_FORMAT", "text"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.board.format, OutputFormat::Text);
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "SHIPBOARD_TIMEOUT" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config.api.timeout_seconds, None);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipboard.toml");

        let mut config = Config::default();
        config.api.timeout_seconds = Some(30);
        config.board.default_page = PageKind::Cargoes;
        config.save_to_file(&path).unwrap();

        let reloaded = Config::load_from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_unparseable_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shipboard.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ShipBrokerError::Config(_)));
    }
}
