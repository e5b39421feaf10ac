//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{delete, get},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::alerts::store::AlertStore;
use crate::metrics::Metrics;
use crate::models::alert::{Alert, AlertCondition};
use crate::models::indicators::AnnotatedBar;
use crate::models::instrument::{Instrument, InstrumentCatalog};
use crate::services::quotes::{Movers, OverviewQuote};
use crate::services::series::SeriesService;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub catalog: Arc<InstrumentCatalog>,
    pub series: Arc<SeriesService>,
    pub alerts: Arc<dyn AlertStore>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "message": message })))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "pulsewatch"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Serialize)]
struct InstrumentEntry<'a> {
    page: usize,
    #[serde(flatten)]
    instrument: &'a Instrument,
}

/// List the catalog with each instrument's dashboard page
async fn list_instruments(State(state): State<AppState>) -> Json<Value> {
    let entries: Vec<InstrumentEntry> = state
        .catalog
        .iter()
        .enumerate()
        .map(|(i, instrument)| InstrumentEntry {
            page: i + 1,
            instrument,
        })
        .collect();
    Json(json!(entries))
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

#[derive(Debug, Serialize)]
struct DashboardResponse {
    page: usize,
    total_pages: usize,
    instrument: Instrument,
    data: Vec<AnnotatedBar>,
}

/// One instrument per page with its annotated series
async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> ApiResult<DashboardResponse> {
    let page = params.page.unwrap_or(1);
    let instrument = state
        .catalog
        .page(page)
        .cloned()
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Page out of range"))?;

    let data = annotated_series(&state, &instrument).await;
    Ok(Json(DashboardResponse {
        page,
        total_pages: state.catalog.len(),
        instrument,
        data,
    }))
}

/// Annotated series for a catalog symbol
async fn series_for_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> ApiResult<Vec<AnnotatedBar>> {
    let instrument = state
        .catalog
        .by_symbol(&symbol)
        .or_else(|| state.catalog.resolve(&symbol))
        .cloned()
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Unknown symbol"))?;

    Ok(Json(annotated_series(&state, &instrument).await))
}

async fn annotated_series(state: &AppState, instrument: &Instrument) -> Vec<AnnotatedBar> {
    let data = state.series.dashboard_series(instrument).await;
    let outcome = if data.is_empty() { "empty" } else { "ok" };
    state
        .metrics
        .series_requests_total
        .with_label_values(&[outcome])
        .inc();
    data
}

async fn market_overview(State(state): State<AppState>) -> Json<BTreeMap<String, OverviewQuote>> {
    Json(state.series.market_overview().await)
}

async fn movers(State(state): State<AppState>) -> Json<Movers> {
    Json(state.series.movers(&state.catalog).await)
}

async fn list_alerts(State(state): State<AppState>) -> ApiResult<Vec<Alert>> {
    let alerts = state.alerts.load().await.map_err(|e| {
        error!(error = %e, "Failed to load alerts");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load alerts")
    })?;
    Ok(Json(alerts))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    pub symbol: String,
    pub target_price: f64,
    pub condition: AlertCondition,
    pub email: String,
}

/// Register a new alert for a catalog instrument
async fn create_alert(
    State(state): State<AppState>,
    Json(request): Json<CreateAlertRequest>,
) -> ApiResult<Value> {
    let instrument = state
        .catalog
        .resolve(&request.symbol)
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Invalid company name or symbol"))?;

    if !request.target_price.is_finite() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Invalid target price"));
    }
    let email = request.email.trim();
    if email.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Email is required"));
    }

    let alert = Alert {
        symbol: instrument.symbol.clone(),
        target_price: request.target_price,
        condition: request.condition,
        email: email.to_string(),
    };

    state.alerts.add(alert.clone()).await.map_err(|e| {
        error!(error = %e, symbol = %alert.symbol, "Failed to save alert");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save alert")
    })?;

    info!(symbol = %alert.symbol, condition = %alert.condition, target = alert.target_price, "Alert registered");
    Ok(Json(json!({ "message": "Alert saved successfully" })))
}

/// Remove the alert at a list position
async fn delete_alert(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> ApiResult<Value> {
    let removed = state.alerts.remove(index).await.map_err(|e| {
        error!(error = %e, index = index, "Failed to remove alert");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to remove alert")
    })?;

    match removed {
        Some(alert) => {
            info!(symbol = %alert.symbol, index = index, "Alert removed");
            Ok(Json(json!({ "message": "Alert removed" })))
        }
        None => Err(api_error(StatusCode::BAD_REQUEST, "Invalid index")),
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/instruments", get(list_instruments))
        .route("/api/dashboard", get(dashboard))
        .route("/api/series/{symbol}", get(series_for_symbol))
        .route("/api/market-overview", get(market_overview))
        .route("/api/movers", get(movers))
        .route("/api/alerts", get(list_alerts).post(create_alert))
        .route("/api/alerts/{index}", delete(delete_alert))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
