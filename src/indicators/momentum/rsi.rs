//! RSI (Relative Strength Index) indicator

use crate::models::bar::Bar;

pub const RSI_PERIOD: usize = 14;

/// Calculate the RSI series with Wilder's smoothing.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The first bar has no predecessor and contributes a zero change, so the
/// first value lands on index `period - 1`. The seed averages are the simple
/// means of the first `period` gains/losses; afterwards
/// `avg = prev * (period - 1) / period + current / period`.
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; bars.len()];
    if period == 0 || bars.len() < period {
        return out;
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let change = if i == 0 { 0.0 } else { bar.close - bars[i - 1].close };
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, change.abs())
            }
        })
        .unzip();

    let p = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / p;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / p;
    out[period - 1] = rsi_from_averages(avg_gain, avg_loss);

    for i in period..bars.len() {
        avg_gain = avg_gain * (p - 1.0) / p + gains[i] / p;
        avg_loss = avg_loss * (p - 1.0) / p + losses[i] / p;
        out[i] = rsi_from_averages(avg_gain, avg_loss);
    }

    out
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(bars: &[Bar]) -> Vec<Option<f64>> {
    calculate_rsi(bars, RSI_PERIOD)
}

/// A flat window (no gains, no losses) is 0/0 and stays undefined.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    let rsi = if avg_loss == 0.0 {
        if avg_gain > 0.0 {
            100.0
        } else {
            return None;
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    rsi.is_finite().then_some(rsi)
}
