//! Shared data models spanning the engine layers.

pub mod alert;
pub mod bar;
pub mod indicators;
pub mod instrument;
pub mod signal;

pub use alert::{Alert, AlertCondition};
pub use bar::Bar;
pub use indicators::{AnnotatedBar, IndicatorFrame, IndicatorValues};
pub use instrument::{Instrument, InstrumentCatalog, InstrumentCategory};
pub use signal::TradeSignal;
