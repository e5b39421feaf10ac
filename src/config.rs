//! Environment-driven configuration.
//!
//! Values come from the process environment (optionally seeded from `.env`
//! by the binaries). Every key has a default so the service boots without
//! any configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::models::instrument::{CatalogError, InstrumentCatalog};

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Deployment environment name (`production`, `sandbox`, ...).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Outbound mail relay settings. Without a relay URL alerts are only logged.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    pub relay_url: Option<String>,
    pub api_key: Option<String>,
    pub sender: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub alerts_file: PathBuf,
    pub alert_interval_seconds: u64,
    pub price_cache_ttl: Duration,
    pub yahoo_base_url: String,
    pub instruments_file: Option<PathBuf>,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_or("PORT", defaults.port),
            alerts_file: env_opt("PULSEWATCH_ALERTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.alerts_file),
            alert_interval_seconds: env_or(
                "PULSEWATCH_ALERT_INTERVAL_SECONDS",
                defaults.alert_interval_seconds,
            ),
            price_cache_ttl: Duration::from_secs(env_or(
                "PULSEWATCH_PRICE_CACHE_TTL_SECONDS",
                defaults.price_cache_ttl.as_secs(),
            )),
            yahoo_base_url: env_opt("PULSEWATCH_YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url),
            instruments_file: env_opt("PULSEWATCH_INSTRUMENTS_FILE").map(PathBuf::from),
            mail: MailConfig {
                relay_url: env_opt("PULSEWATCH_MAIL_RELAY_URL"),
                api_key: env_opt("PULSEWATCH_MAIL_API_KEY"),
                sender: env_opt("PULSEWATCH_MAIL_FROM"),
            },
        }
    }

    /// The configured instrument catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<InstrumentCatalog, CatalogError> {
        match &self.instruments_file {
            Some(path) => InstrumentCatalog::from_file(path),
            None => Ok(InstrumentCatalog::default()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            alerts_file: PathBuf::from("alerts.json"),
            alert_interval_seconds: 60,
            price_cache_ttl: Duration::from_secs(60),
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            instruments_file: None,
            mail: MailConfig::default(),
        }
    }
}
