//! Per-bar indicator annotation and signal labelling.

pub mod engine;
pub mod rules;

pub use engine::{annotate, SignalEngine, OUTPUT_BARS};
pub use rules::{derive_signal, SignalRule, SIGNAL_RULES};
