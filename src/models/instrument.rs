//! Instrument catalog: the symbols the dashboard tracks and their categories.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Instrument category, resolved once when the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentCategory {
    Equity,
    Index,
    Crypto,
    Commodity,
}

impl InstrumentCategory {
    /// Non-equity series keep their native granularity and carry no volume.
    pub fn is_resample_exempt(&self) -> bool {
        !matches!(self, InstrumentCategory::Equity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    pub symbol: String,
    pub category: InstrumentCategory,
}

impl Instrument {
    pub fn new(name: &str, symbol: &str, category: InstrumentCategory) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            category,
        }
    }

    /// Ticker without the NSE exchange suffix, e.g. `TCS` for `TCS.NS`.
    pub fn short_symbol(&self) -> &str {
        self.symbol.strip_suffix(".NS").unwrap_or(&self.symbol)
    }

    /// Indian listed equity (NSE suffix).
    pub fn is_nse_equity(&self) -> bool {
        self.category == InstrumentCategory::Equity && self.symbol.ends_with(".NS")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read instrument catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid instrument catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered list of tracked instruments. Order defines dashboard pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    /// Load a catalog from a JSON array of instruments.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let instruments: Vec<Instrument> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::new(instruments))
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    /// 1-based page lookup, one instrument per page.
    pub fn page(&self, page: usize) -> Option<&Instrument> {
        page.checked_sub(1).and_then(|i| self.instruments.get(i))
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    /// Resolve free user input to an instrument.
    ///
    /// Matches the display name case-insensitively, or the upper-cased input
    /// against the symbol without its `.NS` suffix.
    pub fn resolve(&self, input: &str) -> Option<&Instrument> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let upper = input.to_uppercase();
        self.instruments
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(input) || i.short_symbol() == upper)
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        use InstrumentCategory::*;

        Self::new(vec![
            Instrument::new("Bharti Airtel", "BHARTIARTL.NS", Equity),
            Instrument::new("Reliance Industries", "RELIANCE.NS", Equity),
            Instrument::new("TCS", "TCS.NS", Equity),
            Instrument::new("HDFC Bank", "HDFCBANK.NS", Equity),
            Instrument::new("Infosys", "INFY.NS", Equity),
            Instrument::new("ICICI Bank", "ICICIBANK.NS", Equity),
            Instrument::new("ITC", "ITC.NS", Equity),
            Instrument::new("State Bank of India", "SBIN.NS", Equity),
            Instrument::new("Bajaj Finance", "BAJFINANCE.NS", Equity),
            Instrument::new("Wipro", "WIPRO.NS", Equity),
            Instrument::new("Vodafone Idea", "IDEA.NS", Equity),
            Instrument::new("Nifty 50", "^NSEI", Index),
            Instrument::new("BankNifty", "^NSEBANK", Index),
            Instrument::new("Bitcoin", "BTC-USD", Crypto),
            Instrument::new("Ethereum", "ETH-USD", Crypto),
            Instrument::new("Binance Coin", "BNB-USD", Crypto),
            Instrument::new("Solana", "SOL-USD", Crypto),
            Instrument::new("Dogecoin", "DOGE-USD", Crypto),
            Instrument::new("Apple", "AAPL", Equity),
            Instrument::new("Microsoft", "MSFT", Equity),
            Instrument::new("Tesla", "TSLA", Equity),
            Instrument::new("Amazon", "AMZN", Equity),
            Instrument::new("Google", "GOOGL", Equity),
            Instrument::new("Gold", "GC=F", Commodity),
            Instrument::new("Silver", "SI=F", Commodity),
            Instrument::new("Crude Oil", "CL=F", Commodity),
        ])
    }
}
