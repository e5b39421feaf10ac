//! Wiring of the collaborators from configuration.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::alerts::checker::AlertChecker;
use crate::alerts::store::{AlertStore, JsonFileAlertStore};
use crate::config::{AppConfig, MailConfig};
use crate::core::http::{AppState, HealthStatus};
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::{LogNotifier, MailRelayNotifier, Notifier, NotifyError};
use crate::services::series::SeriesService;
use crate::services::yahoo::YahooClient;

const DEFAULT_SENDER: &str = "alerts@pulsewatch.local";

/// Everything a binary needs: HTTP state and the alert checker sharing it.
pub struct Services {
    pub state: AppState,
    pub checker: Arc<AlertChecker>,
}

pub fn build_services(config: &AppConfig) -> Result<Services, Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let catalog = Arc::new(config.load_catalog()?);
    info!(instruments = catalog.len(), "Instrument catalog loaded");

    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooClient::new(&config.yahoo_base_url)?);
    let series = Arc::new(SeriesService::new(provider.clone(), config.price_cache_ttl));
    let alerts: Arc<dyn AlertStore> = Arc::new(JsonFileAlertStore::new(&config.alerts_file));
    let notifier = build_notifier(&config.mail)?;

    let checker = Arc::new(
        AlertChecker::new(alerts.clone(), provider, notifier).with_metrics(metrics.clone()),
    );

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        catalog,
        series,
        alerts,
    };

    Ok(Services { state, checker })
}

pub fn build_notifier(mail: &MailConfig) -> Result<Arc<dyn Notifier>, NotifyError> {
    match &mail.relay_url {
        Some(url) => {
            let sender = mail.sender.as_deref().unwrap_or(DEFAULT_SENDER);
            info!(relay = %url, sender = %sender, "Alert emails go through mail relay");
            Ok(Arc::new(MailRelayNotifier::new(
                url.clone(),
                mail.api_key.clone(),
                sender,
            )?))
        }
        None => {
            warn!("PULSEWATCH_MAIL_RELAY_URL not set, alert emails will only be logged");
            Ok(Arc::new(LogNotifier))
        }
    }
}
