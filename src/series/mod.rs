//! Raw bar normalization ahead of indicator computation.

pub mod resample;

pub use resample::{default_bucket, resample};
