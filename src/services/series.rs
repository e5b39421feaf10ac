//! Fetch → resample → annotate → tail, plus the quote views built on the
//! same cached fetches.

use chrono::Duration as BucketWidth;
use futures_util::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::bar::Bar;
use crate::models::indicators::AnnotatedBar;
use crate::models::instrument::{Instrument, InstrumentCatalog};
use crate::series::resample::{default_bucket, resample};
use crate::services::cache::PriceCache;
use crate::services::market_data::MarketDataProvider;
use crate::services::quotes::{daily_change, rank_movers, Movers, OverviewQuote, Quote, OVERVIEW_TICKERS};
use crate::signals::engine::SignalEngine;

const INTRADAY_PERIOD: &str = "5d";
const INTRADAY_INTERVAL: &str = "1m";
const FALLBACK_INTERVAL: &str = "5m";
const QUOTE_PERIOD: &str = "2d";
const QUOTE_INTERVAL: &str = "1d";

pub struct SeriesService {
    provider: Arc<dyn MarketDataProvider>,
    cache: PriceCache<Vec<Bar>>,
    cache_ttl: Duration,
    engine: SignalEngine,
    bucket: BucketWidth,
}

impl SeriesService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, cache_ttl: Duration) -> Self {
        Self {
            provider,
            cache: PriceCache::new(),
            cache_ttl,
            engine: SignalEngine::default(),
            bucket: default_bucket(),
        }
    }

    pub fn with_engine(mut self, engine: SignalEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_bucket(mut self, bucket: BucketWidth) -> Self {
        self.bucket = bucket;
        self
    }

    pub fn provider(&self) -> &Arc<dyn MarketDataProvider> {
        &self.provider
    }

    /// Raw bars through the TTL cache. Empty results are never cached.
    pub async fn raw_bars(&self, symbol: &str, period: &str, interval: &str) -> Vec<Bar> {
        let key = format!("{symbol}|{period}|{interval}");
        self.cache
            .get_or_fetch_if(
                &key,
                self.cache_ttl,
                || self.provider.fetch(symbol, period, interval),
                |bars| !bars.is_empty(),
            )
            .await
    }

    /// The dashboard series for one instrument: the most recent annotated
    /// bars, or empty when the provider has nothing.
    pub async fn dashboard_series(&self, instrument: &Instrument) -> Vec<AnnotatedBar> {
        let mut raw = self
            .raw_bars(&instrument.symbol, INTRADAY_PERIOD, INTRADAY_INTERVAL)
            .await;
        if raw.is_empty() {
            raw = self
                .raw_bars(&instrument.symbol, INTRADAY_PERIOD, FALLBACK_INTERVAL)
                .await;
        }
        if raw.is_empty() {
            warn!(symbol = %instrument.symbol, "No data returned for {}", instrument.symbol);
            return Vec::new();
        }

        let bars = resample(&raw, self.bucket, instrument.category.is_resample_exempt());
        let frame = self.engine.annotate_tail(&bars);
        debug!(
            symbol = %instrument.symbol,
            raw = raw.len(),
            resampled = bars.len(),
            returned = frame.len(),
            "Annotated series"
        );
        frame.into_records()
    }

    pub async fn daily_quote(&self, symbol: &str) -> Option<Quote> {
        let bars = self.raw_bars(symbol, QUOTE_PERIOD, QUOTE_INTERVAL).await;
        daily_change(symbol, &bars)
    }

    /// Price and percent change for the headline tickers.
    pub async fn market_overview(&self) -> BTreeMap<String, OverviewQuote> {
        let quotes = join_all(
            OVERVIEW_TICKERS
                .iter()
                .map(|(_, symbol)| self.daily_quote(symbol)),
        )
        .await;

        OVERVIEW_TICKERS
            .iter()
            .zip(quotes)
            .map(|((name, _), quote)| (name.to_string(), OverviewQuote::from(quote.as_ref())))
            .collect()
    }

    /// Gainers, losers and most active among the catalog's NSE equities.
    pub async fn movers(&self, catalog: &InstrumentCatalog) -> Movers {
        let equities: Vec<&Instrument> = catalog.iter().filter(|i| i.is_nse_equity()).collect();
        let quotes = join_all(equities.iter().map(|i| self.daily_quote(&i.symbol))).await;

        let quotes: Vec<Quote> = equities
            .iter()
            .zip(quotes)
            .filter_map(|(instrument, quote)| {
                quote.map(|q| Quote {
                    symbol: instrument.short_symbol().to_string(),
                    ..q
                })
            })
            .collect();

        rank_movers(&quotes)
    }
}
