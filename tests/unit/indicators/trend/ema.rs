//! Unit tests for EMA indicator

use pulsewatch::indicators::trend::{
    calculate_ema, calculate_emas, ema_cross, EMA_FAST_PERIOD, EMA_SLOW_PERIOD,
};

use crate::fixtures::{approx_eq, flat_bars, minute_bars, rising_bars};

#[test]
fn test_ema_insufficient_data() {
    let bars = rising_bars(10, 100.0);
    assert!(calculate_ema(&bars, 20).iter().all(Option::is_none));
}

#[test]
fn test_ema_seed_is_sma() {
    let bars = minute_bars(&[1.0, 2.0, 3.0, 4.0], 1.0);
    let ema = calculate_ema(&bars, 3);
    assert!(approx_eq(ema[2].unwrap(), 2.0));
    assert!(approx_eq(ema[3].unwrap(), 3.0));
}

#[test]
fn test_ema_converges_on_constant_series() {
    let bars = flat_bars(100, 42.5);
    for ema in calculate_ema(&bars, EMA_SLOW_PERIOD).into_iter().flatten() {
        assert!(approx_eq(ema, 42.5));
    }
}

#[test]
fn test_calculate_multiple_emas() {
    let bars = rising_bars(60, 100.0);
    let emas = calculate_emas(&bars, &[EMA_FAST_PERIOD, EMA_SLOW_PERIOD]);
    assert_eq!(emas.len(), 2);
    assert_eq!(emas[0].iter().position(Option::is_some), Some(EMA_FAST_PERIOD - 1));
    assert_eq!(emas[1].iter().position(Option::is_some), Some(EMA_SLOW_PERIOD - 1));
}

#[test]
fn test_ema_cross_positive_in_uptrend() {
    let bars = rising_bars(60, 100.0);
    let fast = calculate_ema(&bars, EMA_FAST_PERIOD);
    let slow = calculate_ema(&bars, EMA_SLOW_PERIOD);
    let cross = ema_cross(&fast, &slow);

    assert!(cross[..EMA_SLOW_PERIOD - 1].iter().all(Option::is_none));
    assert!(cross[EMA_SLOW_PERIOD - 1..]
        .iter()
        .all(|c| c.is_some_and(|c| c > 0.0)));
}
