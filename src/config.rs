use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const ORDERS_FILE_VAR: &str = "ORDERS_JSONLINES";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub orders_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let orders_file = lookup(ORDERS_FILE_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ORDERS_FILE_VAR))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Self {
            orders_file: PathBuf::from(orders_file),
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_host_and_port() {
        let config =
            Config::from_lookup(lookup(&[(ORDERS_FILE_VAR, "/srv/app/orders.jsonl")])).unwrap();

        assert_eq!(config.orders_file, PathBuf::from("/srv/app/orders.jsonl"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn reads_host_and_port() {
        let config = Config::from_lookup(lookup(&[
            (ORDERS_FILE_VAR, "orders.jsonl"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn orders_file_is_required() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(ORDERS_FILE_VAR))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(ORDERS_FILE_VAR, " ")])),
            Err(ConfigError::Missing(ORDERS_FILE_VAR))
        );
    }

    #[test]
    fn rejects_invalid_port() {
        assert_eq!(
            Config::from_lookup(lookup(&[(ORDERS_FILE_VAR, "orders.jsonl"), ("PORT", "http")])),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
    }
}
