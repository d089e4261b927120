//! Subcommand implementations

mod migrate;
mod serve;

pub use migrate::{run_migrate, MigrateArgs};
pub use serve::{run_serve, ServeArgs};

use trivia_server::DatabaseConfig;

/// Database URL from the flag, falling back to `DATABASE_URL` / `DB_*` variables.
fn database_url(flag: Option<String>) -> String {
    flag.unwrap_or_else(|| DatabaseConfig::from_env().url())
}
