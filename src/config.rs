use std::env;

use thiserror::Error;

use crate::store::Store;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Shared application state, built once in `main` and handed to every worker
/// through `web::Data`. Lives until the process exits.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: Store,
    pub expose_song_detail: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: Store::new(),
            expose_song_detail: config.expose_song_detail,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub expose_song_detail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
            expose_song_detail: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: port })?;
        }
        if let Some(workers) = lookup("WORKERS") {
            let parsed = workers
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "WORKERS",
                    value: workers,
                })?;
            config.workers = Some(parsed);
        }
        if let Some(flag) = lookup("EXPOSE_SONG_DETAIL") {
            config.expose_song_detail = parse_flag(&flag).ok_or(ConfigError::Invalid {
                name: "EXPOSE_SONG_DETAIL",
                value: flag,
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_listen_on_port_3000() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3000);
        assert!(!config.expose_song_detail);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("WORKERS", "2"),
            ("EXPOSE_SONG_DETAIL", "true"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, Some(2));
        assert!(config.expose_song_detail);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("WORKERS", "0")]).is_err());
        assert!(config_from(&[("EXPOSE_SONG_DETAIL", "maybe")]).is_err());
    }
}
