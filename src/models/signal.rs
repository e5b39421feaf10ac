//! Trading signal labels attached to annotated bars.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed textual signal labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSignal {
    #[serde(rename = "BUY (RSI < 30)")]
    RsiOversold,
    #[serde(rename = "SELL (RSI > 70)")]
    RsiOverbought,
    #[serde(rename = "BUY (EMA20 Cross Up)")]
    EmaCrossUp,
    #[serde(rename = "SELL (EMA20 Cross Down)")]
    EmaCrossDown,
    #[serde(rename = "BUY (MACD Bullish)")]
    MacdBullish,
    #[serde(rename = "SELL (MACD Bearish)")]
    MacdBearish,
}

impl TradeSignal {
    pub fn label(&self) -> &'static str {
        match self {
            TradeSignal::RsiOversold => "BUY (RSI < 30)",
            TradeSignal::RsiOverbought => "SELL (RSI > 70)",
            TradeSignal::EmaCrossUp => "BUY (EMA20 Cross Up)",
            TradeSignal::EmaCrossDown => "SELL (EMA20 Cross Down)",
            TradeSignal::MacdBullish => "BUY (MACD Bullish)",
            TradeSignal::MacdBearish => "SELL (MACD Bearish)",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(
            self,
            TradeSignal::RsiOversold | TradeSignal::EmaCrossUp | TradeSignal::MacdBullish
        )
    }
}

impl fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serialize an optional signal as its label, or `""` when no rule fired.
pub(crate) fn serialize_label<S>(signal: &Option<TradeSignal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(signal.map(|s| s.label()).unwrap_or(""))
}

/// Inverse of [`serialize_label`].
pub(crate) fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<TradeSignal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_value(serde_json::Value::String(raw))
        .map(Some)
        .map_err(serde::de::Error::custom)
}
