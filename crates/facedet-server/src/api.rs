use std::sync::Arc;
use std::time::Instant;

use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;

use facedet_core::{DetectError, DetectParams, DetectionResult};
use facedet_pipeline::DetectionPipeline;

/// Shared application state.
pub struct AppState {
    pub pipeline: DetectionPipeline,
    pub start_time: Instant,
    pub metrics: PrometheusHandle,
}

/// GET /health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: f64,
    pub model_loaded: bool,
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/detect", post(detect))
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        // Uploads are whole photos; the 2 MB default is too small.
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
        .with_state(state)
}

/// GET / — the bundled landing page.
async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// POST /detect — multipart `image` upload in, face boxes out.
async fn detect(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetectParams>,
    mut multipart: Multipart,
) -> Result<Json<DetectionResult>, (StatusCode, Json<ErrorResponse>)> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("multipart error: {e}")))?
    {
        if field.name() == Some("image") {
            image_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("image read error: {e}")))?
                    .to_vec(),
            );
        }
    }

    let data = image_data.ok_or_else(|| bad_request("No image uploaded".into()))?;

    let (result, timing) = state.pipeline.process(&data, &params).map_err(reject)?;

    metrics::counter!("detect_requests_total").increment(1);
    metrics::histogram!("detect_latency_ms").record(timing.total_ms as f64);

    Ok(Json(result))
}

/// Map pipeline failures onto the wire contract: client input errors are 400
/// with the documented message, model-initialization faults are 500.
fn reject(err: DetectError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        DetectError::EmptyInput => bad_request("Empty file".into()),
        DetectError::ImageDecode(_) => bad_request("Invalid image".into()),
        other => internal_error(format!("detection pipeline error: {other}")),
    }
}

/// GET /health — liveness plus lazy-model status.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.start_time.elapsed().as_secs_f64(),
        model_loaded: state.pipeline.model_loaded(),
    })
}

/// GET /metrics — Prometheus text exposition.
async fn metrics_text(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}

fn bad_request(msg: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg }))
}

fn internal_error(msg: String) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %msg, "internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: msg }),
    )
}
