//! Tracing subscriber setup.
//!
//! Production emits JSON lines for log shipping; every other environment
//! gets colored text. `RUST_LOG` replaces the default filter and
//! `LOG_FORMAT=json|pretty` overrides the environment-based choice.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// HTTP client internals are noisy at `info` during alert passes.
const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn for_environment(env: &str) -> Self {
        if is_production(env) {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// `LOG_FORMAT` if set to a known value, else derived from `ENVIRONMENT`.
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            _ => Self::for_environment(&get_environment()),
        }
    }
}

pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = LogFormat::from_env();
    let layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_writer(std::io::stdout)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .boxed(),
    };

    if tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .is_ok()
    {
        tracing::debug!(format = ?format, "Logging initialized");
    }
}
