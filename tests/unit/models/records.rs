//! Unit tests for the dashboard record shape

use pulsewatch::models::{AnnotatedBar, IndicatorValues, TradeSignal};
use serde_json::{json, Value};

use crate::fixtures::minute_bars;

#[test]
fn test_record_keys() {
    let bar = minute_bars(&[100.0], 10.0)[0];
    let values = IndicatorValues {
        rsi: Some(55.0),
        vwap: Some(100.0),
        cross: Some(1.0),
        ..Default::default()
    };
    let record = serde_json::to_value(AnnotatedBar::new(&bar, values, None)).unwrap();

    let keys: Vec<&str> = record.as_object().unwrap().keys().map(String::as_str).collect();
    for key in [
        "Datetime", "Open", "High", "Low", "Close", "Volume", "RSI", "EMA20", "EMA50", "MACD",
        "MACD_Signal", "MACD_Hist", "VWAP", "Signal",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(keys.len(), 14);
    assert_eq!(record["Signal"], "");
    assert_eq!(record["EMA20"], Value::Null);
    assert_eq!(record["RSI"], json!(55.0));
}

#[test]
fn test_signal_labels_serialize_verbatim() {
    let bar = minute_bars(&[100.0], 10.0)[0];
    let labels = [
        (TradeSignal::RsiOversold, "BUY (RSI < 30)"),
        (TradeSignal::RsiOverbought, "SELL (RSI > 70)"),
        (TradeSignal::EmaCrossUp, "BUY (EMA20 Cross Up)"),
        (TradeSignal::EmaCrossDown, "SELL (EMA20 Cross Down)"),
        (TradeSignal::MacdBullish, "BUY (MACD Bullish)"),
        (TradeSignal::MacdBearish, "SELL (MACD Bearish)"),
    ];
    for (signal, label) in labels {
        let record =
            serde_json::to_value(AnnotatedBar::new(&bar, IndicatorValues::default(), Some(signal)))
                .unwrap();
        assert_eq!(record["Signal"], label);
        assert_eq!(signal.to_string(), label);
    }
}

#[test]
fn test_record_reads_back() {
    let bar = minute_bars(&[100.0], 10.0)[0];
    let record = AnnotatedBar::new(&bar, IndicatorValues::default(), Some(TradeSignal::MacdBearish));
    let parsed: AnnotatedBar =
        serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();
    assert_eq!(parsed, record);

    let unlabeled: AnnotatedBar = serde_json::from_value(json!({
        "Datetime": "2024-01-02T09:00:00Z", "Open": 1.0, "High": 1.0, "Low": 1.0,
        "Close": 1.0, "Volume": 0.0, "RSI": null, "EMA20": null, "EMA50": null,
        "MACD": null, "MACD_Signal": null, "MACD_Hist": null, "VWAP": null, "Signal": ""
    }))
    .unwrap();
    assert_eq!(unlabeled.signal, None);
}
