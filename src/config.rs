// src/config.rs
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_NAME: &str = "scm_system";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3006;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            host: string("DB_HOST", DEFAULT_DB_HOST),
            user: string("DB_USER", DEFAULT_DB_USER),
            password: string("DB_PASSWORD", ""),
            name: string("DB_NAME", DEFAULT_DB_NAME),
            port: parse(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout: parse(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT.as_secs())
                .map(Duration::from_secs)?,
        };

        Ok(Self {
            host: parse(&lookup, "HOST", DEFAULT_HOST)?,
            port: parse(&lookup, "PORT", DEFAULT_PORT)?,
            database,
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 3006);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.name, "scm_system");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = config_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "scm"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "scm_test"),
            ("DB_PORT", "3307"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "2"),
        ])
        .unwrap();
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.user, "scm");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "scm_test");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(2));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("DB_PORT", "not-a-port")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid { key: "DB_PORT", value: "not-a-port".to_string() }
        );
    }

    #[test]
    fn invalid_host_is_rejected() {
        assert!(config_from(&[("HOST", "localhost:80")]).is_err());
    }
}
