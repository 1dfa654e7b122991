//! HTTP routes and wire types.
//!
//! Thin by design: request decoding, response shaping, and status-code
//! mapping. All classification behavior lives behind
//! `ClassificationService`; blocking calls run on the blocking pool.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use quadrant_core::models::{ClassificationResult, DegradationEvent, EngineKind};
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::QuadrantError;
use quadrant_router::ClassificationService;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct AppState {
    service: Arc<ClassificationService>,
    started: Instant,
}

/// Build the application router.
pub fn router(service: Arc<ClassificationService>) -> Router {
    let state = AppState {
        service,
        started: Instant::now(),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/classify", post(classify))
        .route("/corpus/example", post(add_example))
        .route("/feedback", post(feedback))
        .route("/retrain", post(retrain))
        .route("/degradations", get(degradations))
        .with_state(state)
}

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
enum ApiError {
    Unprocessable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<QuadrantError> for ApiError {
    fn from(err: QuadrantError) -> Self {
        match err {
            QuadrantError::Validation(e) => ApiError::Unprocessable(e.to_string()),
            // Recoverable failures are absorbed by the routing layer;
            // anything reaching here is a genuine server-side fault.
            other => ApiError::Internal(other.to_string()),
        }
    }
}

// ── Classify ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ClassifyParams {
    force_engine: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClassifyRequest {
    task: String,
}

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    task: String,
    urgent: bool,
    important: bool,
    quadrant: u8,
    quadrant_name: &'static str,
    confidence: f64,
    engine: &'static str,
    latency_ms: f64,
}

impl ClassifyResponse {
    fn from_result(task: String, result: &ClassificationResult, elapsed: Duration) -> Self {
        Self {
            task,
            urgent: result.quadrant.is_urgent(),
            important: result.quadrant.is_important(),
            quadrant: result.quadrant.index() as u8,
            quadrant_name: result.quadrant.display_name(),
            confidence: result.confidence.value(),
            engine: result.engine.as_str(),
            latency_ms: (elapsed.as_secs_f64() * 100_000.0).round() / 100.0,
        }
    }
}

fn parse_force_engine(raw: Option<&str>) -> Result<Option<EngineKind>, ApiError> {
    match raw {
        None => Ok(None),
        Some("fast") => Ok(Some(EngineKind::Fast)),
        Some("fallback") => Ok(Some(EngineKind::Fallback)),
        Some(other) => Err(ApiError::Unprocessable(format!(
            "unknown engine {other:?}, expected \"fast\" or \"fallback\""
        ))),
    }
}

async fn classify(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
    Json(body): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let force = parse_force_engine(params.force_engine.as_deref())?;
    let started = Instant::now();

    let service = Arc::clone(&state.service);
    let task = body.task.clone();
    let result = tokio::task::spawn_blocking(move || service.classify(&task, force))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ClassifyResponse::from_result(
        body.task,
        &result,
        started.elapsed(),
    )))
}

// ── Administrative operations ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AddExampleRequest {
    text: String,
    quadrant: u8,
}

#[derive(Debug, Serialize)]
struct CorpusResponse {
    corpus_size: usize,
}

async fn add_example(
    State(state): State<AppState>,
    Json(body): Json<AddExampleRequest>,
) -> Result<Json<CorpusResponse>, ApiError> {
    let quadrant = QuadrantId::try_from(body.quadrant)
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || service.add_example(&body.text, quadrant))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(CorpusResponse {
        corpus_size: state.service.corpus_len(),
    }))
}

#[derive(Debug, Deserialize)]
struct FeedbackRequest {
    task: String,
    predicted: u8,
    corrected: u8,
}

#[derive(Debug, Serialize)]
struct FeedbackResponse {
    was_correct: bool,
    corpus_size: usize,
}

async fn feedback(
    State(state): State<AppState>,
    Json(body): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let predicted = QuadrantId::try_from(body.predicted)
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;
    let corrected = QuadrantId::try_from(body.corrected)
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let service = Arc::clone(&state.service);
    let record =
        tokio::task::spawn_blocking(move || service.record_feedback(&body.task, predicted, corrected))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(FeedbackResponse {
        was_correct: record.was_correct(),
        corpus_size: state.service.corpus_len(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RetrainRequest {
    preserve_feedback: bool,
}

impl Default for RetrainRequest {
    fn default() -> Self {
        Self {
            preserve_feedback: true,
        }
    }
}

async fn retrain(
    State(state): State<AppState>,
    body: Option<Json<RetrainRequest>>,
) -> Result<Json<CorpusResponse>, ApiError> {
    let preserve = body.map(|Json(b)| b.preserve_feedback).unwrap_or(true);

    let service = Arc::clone(&state.service);
    let corpus_size = tokio::task::spawn_blocking(move || service.retrain(preserve))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(CorpusResponse { corpus_size }))
}

// ── Observability ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    fast_engine_healthy: bool,
    corpus_size: usize,
    uptime_secs: u64,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        fast_engine_healthy: state.service.is_fast_healthy(),
        corpus_size: state.service.corpus_len(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

async fn degradations(State(state): State<AppState>) -> Json<Vec<DegradationEvent>> {
    Json(state.service.drain_degradation_events())
}

#[derive(Debug, Serialize)]
struct InfoResponse {
    service: &'static str,
    version: &'static str,
}

async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        service: "quadrant classification service",
        version: env!("CARGO_PKG_VERSION"),
    })
}
