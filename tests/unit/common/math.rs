//! Unit tests for shared numeric helpers

use pulsewatch::common::math::{difference, ema_alpha, ema_over_defined, ema_series, round2, sma};

use crate::fixtures::approx_eq;

#[test]
fn sma_averages_last_window() {
    assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0], 2), Some(3.5));
    assert_eq!(sma(&[1.0, 2.0], 3), None);
    assert_eq!(sma(&[1.0, 2.0], 0), None);
}

#[test]
fn ema_alpha_matches_period() {
    assert!(approx_eq(ema_alpha(1), 1.0));
    assert!(approx_eq(ema_alpha(3), 0.5));
    assert!(approx_eq(ema_alpha(20), 2.0 / 21.0));
}

#[test]
fn ema_series_seeds_with_sma_then_recurses() {
    let ema = ema_series(&[1.0, 2.0, 3.0, 4.0], 3);
    assert_eq!(ema[0], None);
    assert_eq!(ema[1], None);
    assert!(approx_eq(ema[2].unwrap(), 2.0));
    // alpha = 0.5: 4 * 0.5 + 2 * 0.5
    assert!(approx_eq(ema[3].unwrap(), 3.0));
}

#[test]
fn ema_series_short_input_is_undefined() {
    assert!(ema_series(&[1.0, 2.0], 3).iter().all(Option::is_none));
    assert!(ema_series(&[], 3).is_empty());
}

#[test]
fn ema_over_defined_starts_at_first_value() {
    let values = vec![None, None, Some(2.0), Some(4.0), Some(6.0)];
    let ema = ema_over_defined(&values, 2);
    assert_eq!(ema[..3], [None, None, None]);
    assert!(approx_eq(ema[3].unwrap(), 3.0));
    // alpha = 2/3: 6 * 2/3 + 3 * 1/3
    assert!(approx_eq(ema[4].unwrap(), 5.0));
}

#[test]
fn difference_requires_both_sides() {
    let a = vec![Some(3.0), None, Some(1.0)];
    let b = vec![Some(1.0), Some(1.0), None];
    assert_eq!(difference(&a, &b), vec![Some(2.0), None, None]);
}

#[test]
fn round2_rounds_half_away_from_zero() {
    assert_eq!(round2(1.234), 1.23);
    assert_eq!(round2(1.235_000_1), 1.24);
    assert_eq!(round2(-2.0), -2.0);
}
