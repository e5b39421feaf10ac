//! Pulsewatch Alert Worker
//!
//! Runs only the periodic alert check, for deployments where the API server
//! is started with the alert interval set to 0.

use dotenvy::dotenv;
use pulsewatch::config::{get_environment, AppConfig};
use pulsewatch::core::bootstrap::build_services;
use pulsewatch::core::scheduler::AlertScheduler;
use pulsewatch::logging;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env();
    info!("Starting Pulsewatch Alert Worker");
    info!(environment = %get_environment(), "Environment");

    if config.alert_interval_seconds == 0 {
        return Err("PULSEWATCH_ALERT_INTERVAL_SECONDS must be > 0 for the alert worker".into());
    }

    let services = build_services(&config)?;
    info!(alerts_file = %config.alerts_file.display(), "Alert store");

    let scheduler = AlertScheduler::new(services.checker, config.alert_interval_seconds)
        .map_err(|e| e.to_string())?;
    scheduler.start().await;

    signal::ctrl_c().await?;
    info!("Shutting down alert worker...");
    scheduler.stop().await;
    info!("Alert worker stopped");

    Ok(())
}
