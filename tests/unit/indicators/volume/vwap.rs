//! Unit tests for VWAP indicator

use chrono::{Duration, TimeZone, Utc};
use pulsewatch::indicators::volume::{calculate_vwap, VwapAnchor};
use pulsewatch::models::Bar;

use crate::fixtures::approx_eq;

fn bar(close: f64, volume: f64, minutes: i64) -> Bar {
    let start = Utc.with_ymd_and_hms(2024, 1, 2, 23, 58, 0).unwrap();
    Bar::new(close, close, close, close, volume, start + Duration::minutes(minutes))
}

#[test]
fn test_vwap_cumulative_weights_by_volume() {
    let bars = vec![bar(10.0, 1.0, 0), bar(20.0, 3.0, 1)];
    let vwap = calculate_vwap(&bars, VwapAnchor::Cumulative);
    assert!(approx_eq(vwap[0].unwrap(), 10.0));
    assert!(approx_eq(vwap[1].unwrap(), 17.5));
}

#[test]
fn test_vwap_uses_typical_price() {
    let b = Bar::new(9.0, 12.0, 6.0, 9.0, 2.0, Utc::now());
    let vwap = calculate_vwap(&[b], VwapAnchor::Session);
    assert!(approx_eq(vwap[0].unwrap(), 9.0));
}

#[test]
fn test_vwap_session_resets_at_utc_midnight() {
    // 23:58, 23:59, then 00:00 the next day
    let bars = vec![bar(10.0, 1.0, 0), bar(20.0, 1.0, 1), bar(40.0, 2.0, 2)];

    let session = calculate_vwap(&bars, VwapAnchor::Session);
    assert!(approx_eq(session[1].unwrap(), 15.0));
    assert!(approx_eq(session[2].unwrap(), 40.0));

    let cumulative = calculate_vwap(&bars, VwapAnchor::Cumulative);
    assert!(approx_eq(cumulative[2].unwrap(), 27.5));
}

#[test]
fn test_vwap_zero_volume_is_undefined() {
    let bars = vec![bar(10.0, 0.0, 0), bar(11.0, 0.0, 1)];
    assert!(calculate_vwap(&bars, VwapAnchor::Session)
        .iter()
        .all(Option::is_none));
}

#[test]
fn test_vwap_defined_once_volume_arrives() {
    let bars = vec![bar(10.0, 0.0, 0), bar(12.0, 5.0, 1)];
    let vwap = calculate_vwap(&bars, VwapAnchor::Cumulative);
    assert_eq!(vwap[0], None);
    assert!(approx_eq(vwap[1].unwrap(), 12.0));
}
