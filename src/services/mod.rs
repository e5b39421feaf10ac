//! External collaborators: market data, caching, notifications.

pub mod cache;
pub mod market_data;
pub mod notifier;
pub mod quotes;
pub mod series;
pub mod yahoo;

pub use cache::PriceCache;
pub use market_data::{InMemoryMarketDataProvider, MarketDataProvider};
pub use series::SeriesService;
