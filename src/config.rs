//! Startup configuration, read from the environment (and `.env`, if present).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_DATABASE_URL: &str = "sqlite://fyyur.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The SQLite database to serve from, created if it doesn't exist
    pub database_url: String,
    /// Where the server listens
    pub bind_address: SocketAddr,
    /// If set, log lines are appended here instead of printed to the terminal
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());
        let bind_address = bind_address
            .parse()
            .with_context(|| format!("`BIND_ADDRESS` is not a socket address: {}", bind_address))?;
        let log_file = var("FYYUR_LOG_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_url,
            bind_address,
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_with(&[]).unwrap();

        assert_eq!(config.database_url, "sqlite://fyyur.db");
        assert_eq!(config.bind_address, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_with(&[
            ("DATABASE_URL", "sqlite:///var/lib/fyyur/fyyur.db"),
            ("BIND_ADDRESS", "0.0.0.0:8080"),
            ("FYYUR_LOG_FILE", "/var/log/fyyur/error.log"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite:///var/lib/fyyur/fyyur.db");
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/fyyur/error.log")));
    }

    #[test]
    fn bad_bind_address_is_an_error() {
        let error = config_with(&[("BIND_ADDRESS", "localhost")]).unwrap_err();
        assert!(error.to_string().contains("BIND_ADDRESS"));
    }
}
