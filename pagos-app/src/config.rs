//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` is optional: without it (or without the `sqlite`
    /// feature) the server runs on in-memory stores.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL").ok();

        Ok(Self { port, database_url })
    }
}
