//! Unit tests for daily quotes and movers ranking

use pulsewatch::services::quotes::{daily_change, rank_movers, OverviewQuote, Quote, MOVERS_PER_LIST};

use crate::fixtures::minute_bars;

fn quote(symbol: &str, change_percent: f64, volume: u64) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        current_price: 100.0,
        change: change_percent,
        change_percent,
        volume,
    }
}

#[test]
fn test_daily_change_compares_last_with_first_close() {
    let bars = minute_bars(&[200.0, 203.456], 1234.0);
    let q = daily_change("TCS", &bars).unwrap();
    assert_eq!(q.symbol, "TCS");
    assert_eq!(q.current_price, 203.46);
    assert_eq!(q.change, 3.46);
    assert_eq!(q.change_percent, 1.73);
    assert_eq!(q.volume, 1234);
}

#[test]
fn test_daily_change_single_bar_is_flat() {
    let q = daily_change("X", &minute_bars(&[50.0], 1.0)).unwrap();
    assert_eq!(q.change, 0.0);
    assert_eq!(q.change_percent, 0.0);
}

#[test]
fn test_daily_change_needs_data() {
    assert!(daily_change("X", &[]).is_none());
    assert!(daily_change("X", &minute_bars(&[0.0, 1.0], 1.0)).is_none());
}

#[test]
fn test_rank_movers_orders_each_list() {
    let quotes = vec![
        quote("A", 1.0, 10),
        quote("B", -3.0, 50),
        quote("C", 4.0, 5),
        quote("D", -1.0, 70),
    ];
    let movers = rank_movers(&quotes);

    let symbols = |list: &[Quote]| list.iter().map(|q| q.symbol.clone()).collect::<Vec<_>>();
    assert_eq!(symbols(&movers.gainers), vec!["C", "A", "D", "B"]);
    assert_eq!(symbols(&movers.losers), vec!["B", "D", "A", "C"]);
    assert_eq!(symbols(&movers.active), vec!["D", "B", "A", "C"]);
}

#[test]
fn test_rank_movers_truncates_lists() {
    let quotes: Vec<Quote> = (0..12).map(|i| quote(&format!("S{i}"), i as f64, i)).collect();
    let movers = rank_movers(&quotes);
    assert_eq!(movers.gainers.len(), MOVERS_PER_LIST);
    assert_eq!(movers.losers.len(), MOVERS_PER_LIST);
    assert_eq!(movers.active.len(), MOVERS_PER_LIST);
    assert_eq!(movers.gainers[0].symbol, "S11");
    assert_eq!(movers.losers[0].symbol, "S0");
}

#[test]
fn test_overview_quote_from_missing_is_null() {
    let empty = OverviewQuote::from(None::<&Quote>);
    assert_eq!(serde_json::to_value(&empty).unwrap(), serde_json::json!({"price": null, "change": null}));

    let q = quote("X", 2.5, 1);
    let filled = OverviewQuote::from(Some(&q));
    assert_eq!(filled.price, Some(100.0));
    assert_eq!(filled.change, Some(2.5));
}
