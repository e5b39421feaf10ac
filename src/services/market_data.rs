//! Market data provider interface.
//!
//! Providers never surface errors to callers: a failed or empty fetch is an
//! empty series, meaning "no data available".

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::bar::Bar;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Ordered bars for `symbol` covering `period` at `interval` granularity
    /// (provider notation, e.g. `"5d"` / `"1m"`), or empty.
    async fn fetch(&self, symbol: &str, period: &str, interval: &str) -> Vec<Bar>;

    /// Last close of today's one-minute series.
    async fn latest_price(&self, symbol: &str) -> Option<f64> {
        self.fetch(symbol, "1d", "1m").await.last().map(|bar| bar.close)
    }
}

/// Provider serving preloaded series, keyed by symbol and interval.
#[derive(Default)]
pub struct InMemoryMarketDataProvider {
    series: RwLock<HashMap<(String, String), Vec<Bar>>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, symbol: &str, interval: &str, bars: Vec<Bar>) {
        if let Ok(mut series) = self.series.write() {
            series.insert((symbol.to_string(), interval.to_string()), bars);
        }
    }

    pub fn with_series(self, symbol: &str, interval: &str, bars: Vec<Bar>) -> Self {
        self.insert(symbol, interval, bars);
        self
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn fetch(&self, symbol: &str, _period: &str, interval: &str) -> Vec<Bar> {
        self.series
            .read()
            .ok()
            .and_then(|series| {
                series
                    .get(&(symbol.to_string(), interval.to_string()))
                    .cloned()
            })
            .unwrap_or_default()
    }
}
