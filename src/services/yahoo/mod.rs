//! Yahoo Finance market data provider

pub mod client;
pub mod messages;

pub use client::{ProviderError, YahooClient};
