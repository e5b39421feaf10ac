//! VWAP (Volume Weighted Average Price) indicator

use chrono::NaiveDate;

use crate::models::bar::Bar;

/// Where the running VWAP sums restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VwapAnchor {
    /// Reset at every UTC calendar day.
    #[default]
    Session,
    /// Accumulate over the whole series.
    Cumulative,
}

/// Calculate VWAP
///
/// VWAP = sum(typical_price * volume) / sum(volume)
/// typical_price = (high + low + close) / 3
///
/// Undefined while the running volume is zero (e.g. index series).
pub fn calculate_vwap(bars: &[Bar], anchor: VwapAnchor) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(bars.len());
    let mut session: Option<NaiveDate> = None;
    let mut price_volume = 0.0;
    let mut volume = 0.0;

    for bar in bars {
        if anchor == VwapAnchor::Session {
            let day = bar.timestamp.date_naive();
            if session != Some(day) {
                session = Some(day);
                price_volume = 0.0;
                volume = 0.0;
            }
        }

        price_volume += bar.typical_price() * bar.volume;
        volume += bar.volume;

        out.push((volume != 0.0).then(|| price_volume / volume));
    }

    out
}
