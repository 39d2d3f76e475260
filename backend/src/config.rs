//! Server configuration, read from the environment (and `.env` when present).

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite leads database, opened read-only.
    pub db_path: PathBuf,
    /// `host:port` the HTTP server binds to.
    pub bind_addr: String,
    /// Open the dashboard in the default browser once the server is up.
    pub open_browser: bool,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup("LEADS_DB_PATH")
            .unwrap_or_else(|| "data/leads.db".to_string())
            .into();

        let bind_addr = lookup("LEADS_BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string());

        let open_browser = lookup("LEADS_OPEN_BROWSER")
            .and_then(|value| parse_flag(&value))
            .unwrap_or(true);

        let log_level = lookup("LEADS_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Self {
            db_path,
            bind_addr,
            open_browser,
            log_level,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.bind_addr)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
