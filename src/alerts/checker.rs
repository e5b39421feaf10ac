//! One alert-check pass: price every registered alert and notify on fire.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::alerts::evaluate::{evaluate_alert, render_message};
use crate::alerts::store::AlertStore;
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::Notifier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub checked: usize,
    pub fired: usize,
    pub failed: usize,
}

pub struct AlertChecker {
    store: Arc<dyn AlertStore>,
    provider: Arc<dyn MarketDataProvider>,
    notifier: Arc<dyn Notifier>,
    metrics: Option<Arc<Metrics>>,
}

impl AlertChecker {
    pub fn new(
        store: Arc<dyn AlertStore>,
        provider: Arc<dyn MarketDataProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            provider,
            notifier,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Check every stored alert once.
    ///
    /// Prices are fetched fresh on each pass. Failures affect only the alert
    /// they belong to. Fired alerts stay registered.
    pub async fn run_once(&self) -> CheckSummary {
        let mut summary = CheckSummary::default();

        let alerts = match self.store.load().await {
            Ok(alerts) => alerts,
            Err(e) => {
                error!(error = %e, "Failed to load alerts");
                return summary;
            }
        };

        for alert in &alerts {
            summary.checked += 1;

            let Some(price) = self.provider.latest_price(&alert.symbol).await else {
                warn!(symbol = %alert.symbol, "Alert check skipped: no price available");
                summary.failed += 1;
                continue;
            };

            let evaluation = evaluate_alert(alert, price);
            if !evaluation.fires {
                debug!(symbol = %alert.symbol, price = price, target = alert.target_price, "Alert not triggered");
                continue;
            }

            summary.fired += 1;
            if let Some(metrics) = &self.metrics {
                metrics.alerts_triggered_total.inc();
            }
            info!(
                symbol = %alert.symbol,
                price = price,
                target = alert.target_price,
                condition = %alert.condition,
                diff = evaluation.diff,
                "Alert triggered"
            );

            let message = render_message(alert, price, evaluation.diff);
            if let Err(e) = self.notifier.send(&message).await {
                error!(symbol = %alert.symbol, to = %alert.email, error = %e, "Failed to send alert notification");
                summary.failed += 1;
                if let Some(metrics) = &self.metrics {
                    metrics.notifications_failed_total.inc();
                }
            }
        }

        if let Some(metrics) = &self.metrics {
            metrics.alert_checks_total.inc();
        }
        debug!(
            checked = summary.checked,
            fired = summary.fired,
            failed = summary.failed,
            "Alert check complete"
        );
        summary
    }
}
