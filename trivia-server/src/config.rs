//! Server and database configuration
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: full connection string (takes precedence)
//! - `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: assembled into a URL
//! - `DB_TEST`: database name used by the integration tests

use std::net::SocketAddr;

const DEFAULT_HOST: &str = "localhost:5432";
const DEFAULT_USER: &str = "postgres";
const DEFAULT_NAME: &str = "trivia";
const DEFAULT_TEST_NAME: &str = "trivia_test";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub test_name: String,
    /// Explicit connection string, overrides the individual parts
    pub url: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            user: DEFAULT_USER.to_string(),
            password: String::new(),
            name: DEFAULT_NAME.to_string(),
            test_name: DEFAULT_TEST_NAME.to_string(),
            url: None,
        }
    }
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            host: non_empty("DB_HOST").unwrap_or(defaults.host),
            user: non_empty("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            name: non_empty("DB_NAME").unwrap_or(defaults.name),
            test_name: non_empty("DB_TEST").unwrap_or(defaults.test_name),
            url: non_empty("DATABASE_URL"),
        }
    }

    /// Connection string for the application database
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => self.url_for(&self.name),
        }
    }

    /// Connection string for the test database on the same server
    pub fn test_url(&self) -> String {
        self.url_for(&self.test_name)
    }

    fn url_for(&self, database: &str) -> String {
        if self.password.is_empty() {
            format!("postgresql://{}@{}/{}", self.user, self.host, database)
        } else {
            format!(
                "postgresql://{}:{}@{}/{}",
                self.user, self.password, self.host, database
            )
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Maximum pooled database connections
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn url_from_parts() {
        let config = DatabaseConfig::from_lookup(lookup(&[
            ("DB_HOST", "db:5432"),
            ("DB_USER", "postgres"),
            ("DB_PASSWORD", "7777"),
            ("DB_NAME", "trivia"),
        ]));
        assert_eq!(config.url(), "postgresql://postgres:7777@db:5432/trivia");
        assert_eq!(config.test_url(), "postgresql://postgres:7777@db:5432/trivia_test");
    }

    #[test]
    fn url_without_password() {
        let config = DatabaseConfig::from_lookup(lookup(&[]));
        assert_eq!(config.url(), "postgresql://postgres@localhost:5432/trivia");
    }

    #[test]
    fn database_url_wins() {
        let config = DatabaseConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://elsewhere/quiz"),
            ("DB_NAME", "ignored"),
        ]));
        assert_eq!(config.url(), "postgres://elsewhere/quiz");
    }
}
