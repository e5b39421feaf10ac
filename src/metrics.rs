//! Prometheus metrics for the API server and alert checker.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub alert_checks_total: IntCounter,
    pub alerts_triggered_total: IntCounter,
    pub notifications_failed_total: IntCounter,
    pub series_requests_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let alert_checks_total =
            IntCounter::new("alert_checks_total", "Completed alert check passes")?;
        let alerts_triggered_total =
            IntCounter::new("alerts_triggered_total", "Alerts whose condition was met")?;
        let notifications_failed_total = IntCounter::new(
            "notifications_failed_total",
            "Alert notifications that could not be delivered",
        )?;
        let series_requests_total = IntCounterVec::new(
            Opts::new("series_requests_total", "Annotated series requests by outcome"),
            &["outcome"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(alert_checks_total.clone()))?;
        registry.register(Box::new(alerts_triggered_total.clone()))?;
        registry.register(Box::new(notifications_failed_total.clone()))?;
        registry.register(Box::new(series_requests_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            alert_checks_total,
            alerts_triggered_total,
            notifications_failed_total,
            series_requests_total,
        })
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
