//! Yahoo Finance chart API response shapes (only the parts we read).

use chrono::DateTime;
use serde::Deserialize;

use crate::models::bar::Bar;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Convert the columnar payload into bars.
    ///
    /// Rows missing any price are dropped, missing volume counts as zero, and
    /// a repeated timestamp replaces the earlier row.
    pub fn into_bars(self) -> Vec<Bar> {
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();
        let column = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();

        let mut bars: Vec<Bar> = Vec::with_capacity(self.timestamp.len());
        for (i, &ts) in self.timestamp.iter().enumerate() {
            let (Some(open), Some(high), Some(low), Some(close)) = (
                column(&quote.open, i),
                column(&quote.high, i),
                column(&quote.low, i),
                column(&quote.close, i),
            ) else {
                continue;
            };
            let Some(timestamp) = DateTime::from_timestamp(ts, 0) else {
                continue;
            };
            let volume = column(&quote.volume, i).unwrap_or(0.0);
            let bar = Bar::new(open, high, low, close, volume, timestamp);

            match bars.last_mut() {
                Some(last) if last.timestamp == timestamp => *last = bar,
                Some(last) if last.timestamp > timestamp => {}
                _ => bars.push(bar),
            }
        }
        bars
    }
}
