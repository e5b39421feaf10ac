//! Price-threshold alerts: evaluation, persistence and periodic checking.

pub mod checker;
pub mod evaluate;
pub mod store;

pub use checker::{AlertChecker, CheckSummary};
pub use evaluate::{evaluate, evaluate_alert, render_message, AlertEvaluation};
pub use store::{AlertStore, AlertStoreError, JsonFileAlertStore};
