//! Day-over-day quotes: market overview tickers and top movers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::common::math::round2;
use crate::models::bar::Bar;

pub const MOVERS_PER_LIST: usize = 5;

/// Headline tickers shown in the market overview strip.
pub const OVERVIEW_TICKERS: [(&str, &str); 5] = [
    ("NIFTY 50", "^NSEI"),
    ("BankNifty", "^NSEBANK"),
    ("Sensex", "^BSESN"),
    ("USD/INR", "INR=X"),
    ("Gold", "GC=F"),
];

/// Price change between the first and last close of a short daily series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
}

/// Overview entry; both fields are null when no data was available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewQuote {
    pub price: Option<f64>,
    pub change: Option<f64>,
}

impl From<Option<&Quote>> for OverviewQuote {
    fn from(quote: Option<&Quote>) -> Self {
        match quote {
            Some(q) => Self {
                price: Some(q.current_price),
                change: Some(q.change_percent),
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movers {
    pub gainers: Vec<Quote>,
    pub losers: Vec<Quote>,
    pub active: Vec<Quote>,
}

/// Build a quote from daily bars, comparing the last close with the first.
///
/// `None` for an empty series or a zero reference close.
pub fn daily_change(symbol: &str, bars: &[Bar]) -> Option<Quote> {
    let first = bars.first()?;
    let last = bars.last()?;
    if first.close == 0.0 {
        return None;
    }

    let change = last.close - first.close;
    Some(Quote {
        symbol: symbol.to_string(),
        current_price: round2(last.close),
        change: round2(change),
        change_percent: round2(change / first.close * 100.0),
        volume: last.volume.max(0.0) as u64,
    })
}

/// Top gainers, top losers and most active by volume.
pub fn rank_movers(quotes: &[Quote]) -> Movers {
    let by_change = |a: &Quote, b: &Quote| {
        a.change_percent
            .partial_cmp(&b.change_percent)
            .unwrap_or(Ordering::Equal)
    };

    let mut gainers = quotes.to_vec();
    gainers.sort_by(|a, b| by_change(b, a));
    gainers.truncate(MOVERS_PER_LIST);

    let mut losers = quotes.to_vec();
    losers.sort_by(by_change);
    losers.truncate(MOVERS_PER_LIST);

    let mut active = quotes.to_vec();
    active.sort_by(|a, b| b.volume.cmp(&a.volume));
    active.truncate(MOVERS_PER_LIST);

    Movers {
        gainers,
        losers,
        active,
    }
}
