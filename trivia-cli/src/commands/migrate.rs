//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::config::DEFAULT_MAX_CONNECTIONS;
use trivia_server::{DatabaseConfig, PgStore};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides DB_HOST/DB_USER/DB_PASSWORD/DB_NAME)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Target the DB_TEST database instead (takes precedence over --database-url)
    #[arg(long)]
    pub test: bool,
}

impl MigrateArgs {
    /// Database to migrate; `--test` wins over any configured URL.
    fn target_url(&self, config: &DatabaseConfig) -> String {
        match (&self.database_url, self.test) {
            (_, true) => config.test_url(),
            (Some(url), false) => url.clone(),
            (None, false) => config.url(),
        }
    }
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = args.target_url(&DatabaseConfig::from_env());

    let store = PgStore::connect(&database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .context("Failed to create database pool")?;
    store.migrate().await.context("Failed to run migrations")?;

    store.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            url: Some("postgres://app-host/trivia".into()),
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn test_flag_wins_over_database_url() {
        let args = MigrateArgs::parse_from([
            "migrate",
            "--database-url",
            "postgres://flag-host/trivia",
            "--test",
        ]);
        assert_eq!(
            args.target_url(&config()),
            "postgresql://postgres@localhost:5432/trivia_test"
        );
    }

    #[test]
    fn database_url_flag_used_without_test() {
        let args = MigrateArgs::parse_from(["migrate", "--database-url", "postgres://flag-host/trivia"]);
        assert_eq!(args.target_url(&config()), "postgres://flag-host/trivia");
    }

    #[test]
    fn falls_back_to_configured_url() {
        let args = MigrateArgs {
            database_url: None,
            test: false,
        };
        assert_eq!(args.target_url(&config()), "postgres://app-host/trivia");
    }
}
