//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::bar::{closes, Bar};

pub const EMA_FAST_PERIOD: usize = 20;
pub const EMA_SLOW_PERIOD: usize = 50;

/// Calculate the EMA series of close for a specific period
pub fn calculate_ema(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    math::ema_series(&closes(bars), period)
}

/// Calculate multiple EMA series at once
pub fn calculate_emas(bars: &[Bar], periods: &[usize]) -> Vec<Vec<Option<f64>>> {
    let closes = closes(bars);
    periods
        .iter()
        .map(|&period| math::ema_series(&closes, period))
        .collect()
}

/// Fast-minus-slow EMA spread; its sign change marks a crossover.
pub fn ema_cross(fast: &[Option<f64>], slow: &[Option<f64>]) -> Vec<Option<f64>> {
    math::difference(fast, slow)
}
