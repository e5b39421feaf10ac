//! Priority-ordered signal rules.
//!
//! Rules are checked against the current bar's indicator values and, for the
//! crossover rules, the previous bar's. When several rules match, the one
//! listed last wins.

use crate::models::indicators::IndicatorValues;
use crate::models::signal::TradeSignal;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

type Condition = fn(&IndicatorValues, Option<&IndicatorValues>) -> bool;

/// A single condition and the label it assigns.
#[derive(Clone, Copy)]
pub struct SignalRule {
    pub signal: TradeSignal,
    condition: Condition,
}

impl SignalRule {
    pub fn matches(&self, current: &IndicatorValues, previous: Option<&IndicatorValues>) -> bool {
        (self.condition)(current, previous)
    }
}

impl std::fmt::Debug for SignalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalRule")
            .field("signal", &self.signal)
            .finish()
    }
}

/// Evaluation order; later entries override earlier ones.
pub const SIGNAL_RULES: [SignalRule; 6] = [
    SignalRule {
        signal: TradeSignal::RsiOversold,
        condition: rsi_oversold,
    },
    SignalRule {
        signal: TradeSignal::RsiOverbought,
        condition: rsi_overbought,
    },
    SignalRule {
        signal: TradeSignal::EmaCrossUp,
        condition: ema_cross_up,
    },
    SignalRule {
        signal: TradeSignal::EmaCrossDown,
        condition: ema_cross_down,
    },
    SignalRule {
        signal: TradeSignal::MacdBullish,
        condition: macd_bullish,
    },
    SignalRule {
        signal: TradeSignal::MacdBearish,
        condition: macd_bearish,
    },
];

/// The label for one bar, or `None` when no rule matches.
pub fn derive_signal(
    current: &IndicatorValues,
    previous: Option<&IndicatorValues>,
) -> Option<TradeSignal> {
    SIGNAL_RULES
        .iter()
        .rev()
        .find(|rule| rule.matches(current, previous))
        .map(|rule| rule.signal)
}

fn rsi_oversold(current: &IndicatorValues, _: Option<&IndicatorValues>) -> bool {
    current.rsi.is_some_and(|rsi| rsi < RSI_OVERSOLD)
}

fn rsi_overbought(current: &IndicatorValues, _: Option<&IndicatorValues>) -> bool {
    current.rsi.is_some_and(|rsi| rsi > RSI_OVERBOUGHT)
}

fn ema_cross_up(current: &IndicatorValues, previous: Option<&IndicatorValues>) -> bool {
    match (current.cross, previous.and_then(|p| p.cross)) {
        (Some(now), Some(before)) => now > 0.0 && before < 0.0,
        _ => false,
    }
}

fn ema_cross_down(current: &IndicatorValues, previous: Option<&IndicatorValues>) -> bool {
    match (current.cross, previous.and_then(|p| p.cross)) {
        (Some(now), Some(before)) => now < 0.0 && before > 0.0,
        _ => false,
    }
}

fn macd_bullish(current: &IndicatorValues, previous: Option<&IndicatorValues>) -> bool {
    macd_pair(current, previous)
        .is_some_and(|((macd, signal), (prev_macd, prev_signal))| macd > signal && prev_macd < prev_signal)
}

fn macd_bearish(current: &IndicatorValues, previous: Option<&IndicatorValues>) -> bool {
    macd_pair(current, previous)
        .is_some_and(|((macd, signal), (prev_macd, prev_signal))| macd < signal && prev_macd > prev_signal)
}

/// `((macd, signal), (prev_macd, prev_signal))` when all four are defined.
fn macd_pair(
    current: &IndicatorValues,
    previous: Option<&IndicatorValues>,
) -> Option<((f64, f64), (f64, f64))> {
    let previous = previous?;
    Some((
        (current.macd?, current.macd_signal?),
        (previous.macd?, previous.macd_signal?),
    ))
}
