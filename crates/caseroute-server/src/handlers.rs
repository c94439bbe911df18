//! HTTP request handlers for the case routing service.
//!
//! Implements case analysis, discovery and health check endpoints using axum.

use crate::responses::{
    CaseAnalysisResponse, CategoriesResponse, ErrorResponse, HealthCheckResponse,
    ModelInfoResponse, RootResponse,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use caseroute_domain::CaseAnalyzer;
use caseroute_gatekeeper::{CaseRequest, Gatekeeper, GatekeeperError};
use std::sync::Arc;
use tracing::{info, warn};

/// Service identifier reported by the health check
pub const SERVICE_NAME: &str = "case-routing-api";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis engine (immutable after startup)
    pub analyzer: Arc<CaseAnalyzer>,
    /// Boundary validation
    pub gatekeeper: Arc<Gatekeeper>,
}

impl AppState {
    /// State with the built-in engine and default validation rules
    pub fn builtin() -> Self {
        Self {
            analyzer: Arc::new(CaseAnalyzer::builtin()),
            gatekeeper: Arc::new(Gatekeeper::default_config()),
        }
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request body is not a JSON case request
    BadRequest(JsonRejection),
    /// Request rejected by the gatekeeper
    InvalidInput(GatekeeperError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Invalid request body".to_string(),
                    reasons: vec![rejection.body_text()],
                },
            ),
            AppError::InvalidInput(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: e.to_string(),
                    reasons: e.reasons().iter().map(ToString::to_string).collect(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection)
    }
}

impl From<GatekeeperError> for AppError {
    fn from(e: GatekeeperError) -> Self {
        AppError::InvalidInput(e)
    }
}

/// GET / - Service banner
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Intelligent Case Routing API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
    })
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: SERVICE_NAME.to_string(),
    })
}

/// POST /analyze-case - Classify and route a case
async fn analyze_case(
    State(state): State<AppState>,
    payload: Result<Json<CaseRequest>, JsonRejection>,
) -> Result<Json<CaseAnalysisResponse>, AppError> {
    let Json(request) = payload.inspect_err(|e| {
        warn!("Unreadable case request: {}", e);
    })?;
    let input = state.gatekeeper.admit(request).inspect_err(|e| {
        warn!("Rejected case request: {}", e);
    })?;

    let analysis = state.analyzer.analyze(&input);
    info!(
        case_id = %analysis.case_id,
        category = %analysis.predicted_category,
        queue = %analysis.recommended_queue,
        "Case routed"
    );

    Ok(Json(analysis.into()))
}

/// GET /model-info - Static model metadata
async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(state.analyzer.model_info().into())
}

/// GET /categories - Categories and their queues
async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse::from(state.analyzer.as_ref()))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/analyze-case", post(analyze_case))
        .route("/model-info", get(model_info))
        .route("/categories", get(categories))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(AppState::builtin());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_case() {
        let app = create_router(AppState::builtin());

        let request = Request::builder()
            .method("POST")
            .uri("/analyze-case")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"subject": "Login error", "description": "App crashes on sync"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_blank_case_is_bad_request() {
        let app = create_router(AppState::builtin());

        let request = Request::builder()
            .method("POST")
            .uri("/analyze-case")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"subject": "", "description": ""}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
