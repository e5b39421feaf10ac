//! Alert persistence: a flat JSON array loaded and saved wholesale.

use async_trait::async_trait;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::warn;

use crate::models::alert::Alert;

#[derive(Debug, thiserror::Error)]
pub enum AlertStoreError {
    #[error("alert store I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode alerts: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait AlertStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Alert>, AlertStoreError>;

    async fn save(&self, alerts: &[Alert]) -> Result<(), AlertStoreError>;

    async fn add(&self, alert: Alert) -> Result<(), AlertStoreError>;

    /// Remove the alert at `index`; `None` when out of range.
    async fn remove(&self, index: usize) -> Result<Option<Alert>, AlertStoreError>;
}

/// JSON file store. A missing or unreadable-as-JSON file reads as no alerts.
pub struct JsonFileAlertStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileAlertStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> AlertStoreError {
        AlertStoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    async fn read_alerts(&self) -> Result<Vec<Alert>, AlertStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(alerts) => Ok(alerts),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Alert file is not valid JSON, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn write_alerts(&self, alerts: &[Alert]) -> Result<(), AlertStoreError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        alerts.serialize(&mut serializer)?;

        // Write-then-rename so readers never observe a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &buffer)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))
    }
}

#[async_trait]
impl AlertStore for JsonFileAlertStore {
    async fn load(&self) -> Result<Vec<Alert>, AlertStoreError> {
        self.read_alerts().await
    }

    async fn save(&self, alerts: &[Alert]) -> Result<(), AlertStoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_alerts(alerts).await
    }

    async fn add(&self, alert: Alert) -> Result<(), AlertStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut alerts = self.read_alerts().await?;
        alerts.push(alert);
        self.write_alerts(&alerts).await
    }

    async fn remove(&self, index: usize) -> Result<Option<Alert>, AlertStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut alerts = self.read_alerts().await?;
        if index >= alerts.len() {
            return Ok(None);
        }
        let removed = alerts.remove(index);
        self.write_alerts(&alerts).await?;
        Ok(Some(removed))
    }
}
