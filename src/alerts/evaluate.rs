//! Alert condition evaluation and message rendering.

use serde::Serialize;

use crate::common::math::round2;
use crate::models::alert::{Alert, AlertCondition};
use crate::services::notifier::EmailMessage;

pub const ALERT_SUBJECT: &str = "Stock Price Alert";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertEvaluation {
    pub fires: bool,
    /// `price - target`
    pub diff: f64,
}

pub fn evaluate(price: f64, target: f64, condition: AlertCondition) -> AlertEvaluation {
    let fires = match condition {
        AlertCondition::Above => price >= target,
        AlertCondition::Below => price <= target,
    };
    AlertEvaluation {
        fires,
        diff: price - target,
    }
}

pub fn evaluate_alert(alert: &Alert, price: f64) -> AlertEvaluation {
    evaluate(price, alert.target_price, alert.condition)
}

/// Plain-text notification for a fired alert.
pub fn render_message(alert: &Alert, current_price: f64, diff: f64) -> EmailMessage {
    let arrow = if diff > 0.0 { "UP" } else { "DOWN" };
    let sign = if diff > 0.0 { "+" } else { "" };

    let body = format!(
        "Stock Alert\n\n\
         {symbol} price {arrow}\n\n\
         Target Price : {target}\n\
         Current Price: {current}\n\
         Difference   : {sign}{diff}\n\n\
         Condition    : {condition}\n",
        symbol = alert.symbol,
        target = alert.target_price,
        current = round2(current_price),
        diff = round2(diff),
        condition = alert.condition.as_str().to_uppercase(),
    );

    EmailMessage {
        to: alert.email.clone(),
        subject: ALERT_SUBJECT.to_string(),
        body,
    }
}
