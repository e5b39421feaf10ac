//! Small numeric helpers shared by the indicators.

/// Simple average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Smoothing factor for an EMA of `period`: `2 / (period + 1)`.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA recursion step.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = ema_alpha(period);
    value * alpha + previous * (1.0 - alpha)
}

/// Full EMA series aligned with `values`.
///
/// Seeded at index `period - 1` with the SMA of the first `period` values;
/// earlier positions are `None`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut ema = match sma(&values[..period], period) {
        Some(seed) => seed,
        None => return out,
    };
    out[period - 1] = Some(ema);

    for (i, &value) in values.iter().enumerate().skip(period) {
        ema = ema_from_previous(value, ema, period);
        out[i] = Some(ema);
    }
    out
}

/// EMA over the defined (contiguous `Some`) part of a partially defined series.
///
/// Used for MACD's signal line, which only starts once the MACD line exists.
pub fn ema_over_defined(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return out;
    };

    let defined: Vec<f64> = values[start..].iter().map_while(|v| *v).collect();
    for (offset, ema) in ema_series(&defined, period).into_iter().enumerate() {
        out[start + offset] = ema;
    }
    out
}

/// Element-wise `a - b`, defined only where both sides are.
pub fn difference(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<Option<f64>> {
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(x - y),
            _ => None,
        })
        .collect()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
