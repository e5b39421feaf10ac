//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::bar::{closes, Bar};

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;

/// MACD line, signal line and histogram, aligned with the input bars.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate MACD indicator
///
/// MACD = EMA(12) - EMA(26)
/// Signal = EMA(9) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    bars: &[Bar],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let closes = closes(bars);
    let fast_ema = math::ema_series(&closes, fast_period);
    let slow_ema = math::ema_series(&closes, slow_period);

    let macd = math::difference(&fast_ema, &slow_ema);
    // The signal EMA is seeded from the first `signal_period` MACD values.
    let signal = math::ema_over_defined(&macd, signal_period);
    let histogram = math::difference(&macd, &signal);

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(bars: &[Bar]) -> MacdSeries {
    calculate_macd(bars, MACD_FAST_PERIOD, MACD_SLOW_PERIOD, MACD_SIGNAL_PERIOD)
}
