//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (prefix: USERS_API_, sections separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request body size limit in KB
    #[serde(default = "default_body_limit_kb")]
    pub body_limit_kb: usize,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Database port
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Database user
    #[serde(default = "default_db_user")]
    pub user: String,

    /// Database password
    #[serde(default = "default_db_password")]
    pub password: String,

    /// Database name
    #[serde(default = "default_db_name")]
    pub name: String,
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_body_limit_kb() -> usize {
    256
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_password() -> String {
    "password".to_string()
}

fn default_db_name() -> String {
    "users_demo".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
            body_limit_kb: default_body_limit_kb(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: default_db_password(),
            name: default_db_name(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Environment variables (USERS_API_ prefix) override ./config.toml,
    /// which overrides built-in defaults.
    pub fn load() -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("USERS_API_").split("__"))
            .extract()?;

        Ok(config)
    }

    /// Request body size limit in bytes
    pub fn body_limit_bytes(&self) -> usize {
        self.server.body_limit_kb * 1024
    }
}

impl DatabaseConfig {
    /// Connection URL for the store
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.server.body_limit_kb, 256);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.name, "users_demo");
    }

    #[test]
    fn test_env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("USERS_API_SERVER__PORT", "8080");
            jail.set_env("USERS_API_DATABASE__HOST", "db.internal");
            jail.set_env("USERS_API_DATABASE__PASSWORD", "s3cret");

            let config = Config::load().expect("config should load");
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.database.host, "db.internal");
            assert_eq!(config.database.password, "s3cret");
            // Untouched keys keep their defaults
            assert_eq!(config.database.user, "postgres");
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_between_defaults_and_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [server]
                port = 4000

                [database]
                name = "from_file"
                "#,
            )?;
            jail.set_env("USERS_API_DATABASE__NAME", "from_env");

            let config = Config::load().expect("config should load");
            assert_eq!(config.server.port, 4000);
            assert_eq!(config.database.name, "from_env");
            Ok(())
        });
    }

    #[test]
    fn test_connection_url() {
        let config = DatabaseConfig {
            host: "db".to_string(),
            port: 5433,
            user: "app".to_string(),
            password: "pw".to_string(),
            name: "users".to_string(),
        };
        assert_eq!(config.url(), "postgres://app:pw@db:5433/users");
    }
}
