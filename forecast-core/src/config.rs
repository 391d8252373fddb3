use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Default public Open-Meteo endpoints. No API key is required for either.
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com";

/// Top-level configuration stored on disk.
///
/// Everything has a sensible default, so the tool works with no config file
/// at all. The base URLs exist mainly so tests can point the client at a
/// local server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoding_base_url: String,
    pub forecast_base_url: String,

    /// Forecast horizon in days; `None` means the API's default window.
    pub forecast_days: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_owned(),
            forecast_base_url: DEFAULT_FORECAST_BASE_URL.to_owned(),
            forecast_days: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "classy-forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_endpoints() {
        let cfg = Config::default();
        assert_eq!(cfg.geocoding_base_url, DEFAULT_GEOCODING_BASE_URL);
        assert_eq!(cfg.forecast_base_url, DEFAULT_FORECAST_BASE_URL);
        assert!(cfg.forecast_days.is_none());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("forecast_days = 3").expect("valid TOML");
        assert_eq!(cfg.forecast_days, Some(3));
        assert_eq!(cfg.geocoding_base_url, DEFAULT_GEOCODING_BASE_URL);
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.forecast_base_url = "http://localhost:8080".to_owned();
        cfg.forecast_days = Some(7);

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        let back: Config = toml::from_str(&text).expect("parses");
        assert_eq!(back.forecast_base_url, "http://localhost:8080");
        assert_eq!(back.forecast_days, Some(7));
    }
}
