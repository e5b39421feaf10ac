//! Unit tests for signal rule priority

use pulsewatch::models::{IndicatorValues, TradeSignal};
use pulsewatch::signals::rules::{derive_signal, RSI_OVERBOUGHT, RSI_OVERSOLD, SIGNAL_RULES};

fn with_rsi(rsi: f64) -> IndicatorValues {
    IndicatorValues {
        rsi: Some(rsi),
        ..Default::default()
    }
}

fn with_cross(cross: f64) -> IndicatorValues {
    IndicatorValues {
        cross: Some(cross),
        ..Default::default()
    }
}

fn with_macd(macd: f64, signal: f64) -> IndicatorValues {
    IndicatorValues {
        macd: Some(macd),
        macd_signal: Some(signal),
        ..Default::default()
    }
}

#[test]
fn test_rules_are_in_priority_order() {
    let order: Vec<TradeSignal> = SIGNAL_RULES.iter().map(|r| r.signal).collect();
    assert_eq!(
        order,
        vec![
            TradeSignal::RsiOversold,
            TradeSignal::RsiOverbought,
            TradeSignal::EmaCrossUp,
            TradeSignal::EmaCrossDown,
            TradeSignal::MacdBullish,
            TradeSignal::MacdBearish,
        ]
    );
}

#[test]
fn test_rsi_thresholds_are_strict() {
    assert_eq!(derive_signal(&with_rsi(29.9), None), Some(TradeSignal::RsiOversold));
    assert_eq!(derive_signal(&with_rsi(RSI_OVERSOLD), None), None);
    assert_eq!(derive_signal(&with_rsi(50.0), None), None);
    assert_eq!(derive_signal(&with_rsi(RSI_OVERBOUGHT), None), None);
    assert_eq!(derive_signal(&with_rsi(70.1), None), Some(TradeSignal::RsiOverbought));
}

#[test]
fn test_ema_crossovers() {
    assert_eq!(
        derive_signal(&with_cross(0.5), Some(&with_cross(-0.5))),
        Some(TradeSignal::EmaCrossUp)
    );
    assert_eq!(
        derive_signal(&with_cross(-0.5), Some(&with_cross(0.5))),
        Some(TradeSignal::EmaCrossDown)
    );
    assert_eq!(derive_signal(&with_cross(0.5), Some(&with_cross(0.2))), None);
}

#[test]
fn test_touching_zero_is_not_a_cross() {
    assert_eq!(derive_signal(&with_cross(0.5), Some(&with_cross(0.0))), None);
    assert_eq!(derive_signal(&with_cross(0.0), Some(&with_cross(0.5))), None);
}

#[test]
fn test_macd_crossovers() {
    assert_eq!(
        derive_signal(&with_macd(1.0, 0.5), Some(&with_macd(0.2, 0.5))),
        Some(TradeSignal::MacdBullish)
    );
    assert_eq!(
        derive_signal(&with_macd(0.2, 0.5), Some(&with_macd(1.0, 0.5))),
        Some(TradeSignal::MacdBearish)
    );
}

#[test]
fn test_crossovers_need_a_previous_bar() {
    assert_eq!(derive_signal(&with_cross(0.5), None), None);
    assert_eq!(derive_signal(&with_macd(1.0, 0.5), None), None);
    assert_eq!(
        derive_signal(&with_cross(0.5), Some(&IndicatorValues::default())),
        None
    );
}

#[test]
fn test_later_rule_overrides_earlier() {
    let current = IndicatorValues {
        rsi: Some(25.0),
        macd: Some(1.0),
        macd_signal: Some(0.5),
        ..Default::default()
    };
    let previous = with_macd(0.2, 0.5);
    assert_eq!(
        derive_signal(&current, Some(&previous)),
        Some(TradeSignal::MacdBullish)
    );
}

#[test]
fn test_ema_cross_overrides_rsi() {
    let current = IndicatorValues {
        rsi: Some(75.0),
        cross: Some(-0.1),
        ..Default::default()
    };
    assert_eq!(
        derive_signal(&current, Some(&with_cross(0.1))),
        Some(TradeSignal::EmaCrossDown)
    );
}

#[test]
fn test_no_values_no_signal() {
    assert_eq!(derive_signal(&IndicatorValues::default(), None), None);
}
