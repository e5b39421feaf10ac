//! Yahoo Finance chart API client

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use std::time::Duration;
use tracing::{debug, warn};

use super::messages::ChartResponse;
use crate::models::bar::Bar;
use crate::services::market_data::MarketDataProvider;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {symbol}")]
    Status { symbol: String, status: u16 },
    #[error("provider error {code}: {description}")]
    Api { code: String, description: String },
}

impl ProviderError {
    /// Worth retrying: timeouts, connection failures, throttling and 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(e) => e.is_timeout() || e.is_connect(),
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            ProviderError::Api { .. } => false,
        }
    }
}

pub struct YahooClient {
    base_url: String,
    http: reqwest::Client,
    backoff: ExponentialBuilder,
}

impl YahooClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            backoff: ExponentialBuilder::default()
                .with_min_delay(Duration::from_millis(250))
                .with_max_times(2),
        }
    }

    /// Number of retries after the first attempt for transient failures.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.backoff = self.backoff.with_max_times(retries);
        self
    }

    /// Fetch chart bars, retrying transient failures.
    pub async fn fetch_chart(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<Bar>, ProviderError> {
        let request = || self.request_chart(symbol, period, interval);
        request
            .retry(self.backoff.clone())
            .when(ProviderError::is_transient)
            .notify(|err, delay| {
                debug!(symbol = %symbol, error = %err, delay_ms = delay.as_millis() as u64, "Retrying chart request");
            })
            .await
    }

    async fn request_chart(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<Bar>, ProviderError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .http
            .get(&url)
            .query(&[("range", period), ("interval", interval)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body: ChartResponse = response.json().await?;
        if let Some(error) = body.chart.error {
            return Err(ProviderError::Api {
                code: error.code,
                description: error.description,
            });
        }

        Ok(body
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(|result| result.into_bars())
            .unwrap_or_default())
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn fetch(&self, symbol: &str, period: &str, interval: &str) -> Vec<Bar> {
        match self.fetch_chart(symbol, period, interval).await {
            Ok(bars) => {
                debug!(symbol = %symbol, period = %period, interval = %interval, count = bars.len(), "Fetched bars");
                bars
            }
            Err(e) => {
                warn!(symbol = %symbol, period = %period, interval = %interval, error = %e, "Yahoo history error");
                Vec::new()
            }
        }
    }
}
