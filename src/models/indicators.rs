use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bar::Bar;
use super::signal::{deserialize_label, serialize_label, TradeSignal};

/// Indicator values computed for a single bar.
///
/// Every field is `None` until the indicator has enough history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorValues {
    pub rsi: Option<f64>,
    pub ema_fast: Option<f64>,
    pub ema_slow: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    pub vwap: Option<f64>,
    pub cross: Option<f64>,
}

/// A bar extended with its indicator values and signal, serialized as a flat
/// dashboard record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedBar {
    #[serde(rename = "Datetime")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
    #[serde(rename = "RSI")]
    pub rsi: Option<f64>,
    #[serde(rename = "EMA20")]
    pub ema_fast: Option<f64>,
    #[serde(rename = "EMA50")]
    pub ema_slow: Option<f64>,
    #[serde(rename = "MACD")]
    pub macd: Option<f64>,
    #[serde(rename = "MACD_Signal")]
    pub macd_signal: Option<f64>,
    #[serde(rename = "MACD_Hist")]
    pub macd_hist: Option<f64>,
    #[serde(rename = "VWAP")]
    pub vwap: Option<f64>,
    #[serde(skip)]
    pub cross: Option<f64>,
    #[serde(
        rename = "Signal",
        serialize_with = "serialize_label",
        deserialize_with = "deserialize_label",
        default
    )]
    pub signal: Option<TradeSignal>,
}

impl AnnotatedBar {
    pub fn new(bar: &Bar, values: IndicatorValues, signal: Option<TradeSignal>) -> Self {
        Self {
            timestamp: bar.timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            rsi: values.rsi,
            ema_fast: values.ema_fast,
            ema_slow: values.ema_slow,
            macd: values.macd,
            macd_signal: values.macd_signal,
            macd_hist: values.macd_hist,
            vwap: values.vwap,
            cross: values.cross,
            signal,
        }
    }

    pub fn bar(&self) -> Bar {
        Bar::new(
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.timestamp,
        )
    }

    pub fn values(&self) -> IndicatorValues {
        IndicatorValues {
            rsi: self.rsi,
            ema_fast: self.ema_fast,
            ema_slow: self.ema_slow,
            macd: self.macd,
            macd_signal: self.macd_signal,
            macd_hist: self.macd_hist,
            vwap: self.vwap,
            cross: self.cross,
        }
    }
}

/// A series of annotated bars in timestamp order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorFrame {
    bars: Vec<AnnotatedBar>,
}

impl IndicatorFrame {
    pub fn new(bars: Vec<AnnotatedBar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[AnnotatedBar] {
        &self.bars
    }

    pub fn last(&self) -> Option<&AnnotatedBar> {
        self.bars.last()
    }

    /// Keep only the most recent `n` bars.
    pub fn tail(mut self, n: usize) -> Self {
        if self.bars.len() > n {
            self.bars.drain(..self.bars.len() - n);
        }
        self
    }

    pub fn into_records(self) -> Vec<AnnotatedBar> {
        self.bars
    }
}
