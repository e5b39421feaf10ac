//! Cron-based scheduler driving periodic alert checks

use crate::alerts::checker::AlertChecker;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Translate an interval into a cron expression.
///
/// Cron format: second minute hour day month weekday
pub fn cron_expression(interval_seconds: u64) -> String {
    if interval_seconds >= 3600 {
        format!("0 0 */{} * * *", interval_seconds / 3600)
    } else if interval_seconds >= 60 {
        format!("0 */{} * * * *", interval_seconds / 60)
    } else {
        format!("*/{} * * * * *", interval_seconds)
    }
}

/// Scheduler that periodically runs an alert-check pass
pub struct AlertScheduler {
    checker: Arc<AlertChecker>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl AlertScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `checker` - Alert checker invoked on every tick
    /// * `interval_seconds` - Check interval in seconds (0 = disabled)
    pub fn new(
        checker: Arc<AlertChecker>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        let cron_expr = cron_expression(interval_seconds);
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "AlertScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            checker,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the scheduler. Starting twice keeps the first loop.
    pub async fn start(&self) {
        let mut handle = self.handle.write().await;
        if handle.is_some() {
            warn!("AlertScheduler: already running");
            return;
        }

        let checker = self.checker.clone();
        let schedule = self.schedule.clone();
        *handle = Some(tokio::spawn(async move {
            info!("AlertScheduler: started, waiting for cron schedule...");

            loop {
                let next_tick = schedule.upcoming(chrono::Utc).next();
                match next_tick {
                    Some(next_tick) => {
                        let now = chrono::Utc::now();
                        if next_tick > now {
                            let duration = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(duration).await;
                        }
                    }
                    None => {
                        tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                        continue;
                    }
                }

                let summary = checker.run_once().await;
                info!(
                    checked = summary.checked,
                    fired = summary.fired,
                    failed = summary.failed,
                    "AlertScheduler: cron tick complete"
                );
            }
        }));

        info!("AlertScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("AlertScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
