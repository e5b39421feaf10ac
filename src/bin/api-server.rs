//! Pulsewatch API Server
//!
//! Dashboard JSON API with health check and metrics. Unless the alert
//! interval is 0, the alert scheduler runs in-process alongside it.

use dotenvy::dotenv;
use pulsewatch::config::{get_environment, AppConfig};
use pulsewatch::core::bootstrap::build_services;
use pulsewatch::core::http::start_server;
use pulsewatch::core::scheduler::AlertScheduler;
use pulsewatch::logging;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env();
    info!("Starting Pulsewatch API Server");
    info!(environment = %get_environment(), "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    let services = build_services(&config)?;

    let scheduler = match AlertScheduler::new(services.checker.clone(), config.alert_interval_seconds) {
        Ok(scheduler) => {
            scheduler.start().await;
            Some(scheduler)
        }
        Err(e) => {
            warn!(error = %e, "Alert scheduler not started");
            None
        }
    };

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        result = start_server(config.port, services.state) => {
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
            }
        }
    }

    if let Some(scheduler) = scheduler {
        scheduler.stop().await;
    }
    info!("API server stopped");

    Ok(())
}
