//! Unit tests for alert evaluation and rendering

use pulsewatch::alerts::evaluate::{evaluate, evaluate_alert, render_message, ALERT_SUBJECT};
use pulsewatch::models::{Alert, AlertCondition};

fn alert(target: f64, condition: AlertCondition) -> Alert {
    Alert {
        symbol: "TCS.NS".to_string(),
        target_price: target,
        condition,
        email: "trader@example.com".to_string(),
    }
}

#[test]
fn test_above_fires_when_price_reaches_target() {
    let result = evaluate(105.0, 100.0, AlertCondition::Above);
    assert!(result.fires);
    assert_eq!(result.diff, 5.0);
}

#[test]
fn test_below_does_not_fire_above_target() {
    let result = evaluate(105.0, 100.0, AlertCondition::Below);
    assert!(!result.fires);
    assert_eq!(result.diff, 5.0);
}

#[test]
fn test_boundary_is_inclusive() {
    let result = evaluate(100.0, 100.0, AlertCondition::Above);
    assert!(result.fires);
    assert_eq!(result.diff, 0.0);
    assert!(evaluate(100.0, 100.0, AlertCondition::Below).fires);
}

#[test]
fn test_below_fires_under_target() {
    let result = evaluate_alert(&alert(100.0, AlertCondition::Below), 97.5);
    assert!(result.fires);
    assert_eq!(result.diff, -2.5);
}

#[test]
fn test_render_message_up() {
    let alert = alert(100.0, AlertCondition::Above);
    let message = render_message(&alert, 105.126, 5.126);

    assert_eq!(message.to, "trader@example.com");
    assert_eq!(message.subject, ALERT_SUBJECT);
    assert!(message.body.contains("TCS.NS price UP"));
    assert!(message.body.contains("Target Price : 100"));
    assert!(message.body.contains("Current Price: 105.13"));
    assert!(message.body.contains("Difference   : +5.13"));
    assert!(message.body.contains("Condition    : ABOVE"));
}

#[test]
fn test_render_message_down() {
    let alert = alert(100.0, AlertCondition::Below);
    let message = render_message(&alert, 97.5, -2.5);

    assert!(message.body.contains("TCS.NS price DOWN"));
    assert!(message.body.contains("Difference   : -2.5"));
    assert!(message.body.contains("Condition    : BELOW"));
}
