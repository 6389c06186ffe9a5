use anyhow::{Context, Result};
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

/// Environment variable naming an optional TOML config file.
const CONFIG_PATH_ENV: &str = "WEATHER_WEBHOOK_CONFIG";

const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
///
/// Example TOML:
/// ```toml
/// port = 9000
/// open_meteo_base_url = "http://localhost:4545"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TCP port the webhook listens on.
    pub port: u16,

    /// Override for the Open-Meteo base URL, mainly for local testing.
    pub open_meteo_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            open_meteo_base_url: None,
        }
    }
}

impl Config {
    /// Load config from the file named by `WEATHER_WEBHOOK_CONFIG`, or return
    /// defaults when the variable is unset.
    pub fn load() -> Result<Self> {
        let Some(path) = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = Config::default();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert!(cfg.open_meteo_base_url.is_none());
    }

    #[test]
    fn parses_full_config() {
        let cfg: Config = toml::from_str(
            "port = 9000\nopen_meteo_base_url = \"http://localhost:4545\"\n",
        )
        .expect("valid toml");

        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.open_meteo_base_url.as_deref(), Some("http://localhost:4545"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("").expect("empty toml");
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert!(cfg.open_meteo_base_url.is_none());
    }
}
