//! Shared bar builders for unit tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use pulsewatch::models::Bar;

pub fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap()
}

/// One bar per minute with the given closes; open = close, high/low = close ± 0.5.
pub fn minute_bars(closes: &[f64], volume: f64) -> Vec<Bar> {
    let start = session_start();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Bar::new(
                close,
                close + 0.5,
                close - 0.5,
                close,
                volume,
                start + Duration::minutes(i as i64),
            )
        })
        .collect()
}

/// `count` minute bars climbing by one from `base`.
pub fn rising_bars(count: usize, base: f64) -> Vec<Bar> {
    let closes: Vec<f64> = (0..count).map(|i| base + i as f64).collect();
    minute_bars(&closes, 1000.0)
}

pub fn flat_bars(count: usize, price: f64) -> Vec<Bar> {
    minute_bars(&vec![price; count], 1000.0)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
