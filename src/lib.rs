//! Market data dashboard backend: bar resampling, technical indicators with
//! trading signals, and price-threshold alerts.

pub mod alerts;
pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod series;
pub mod services;
pub mod signals;
