mod analyses;
mod session;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use gaphunter_app::{Controller, Outcome, Rejection, Screen, Session};
use gaphunter_gemini::{AnalysisGateway, GeminiClient};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller<GeminiClient>>,
}

impl AppState {
    pub fn new(controller: Controller<GeminiClient>) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    gemini_credential: bool,
    model: String,
}

/// Body of every transition endpoint: how the transition ended and the
/// session it left behind.
#[derive(Debug, Serialize)]
pub(super) struct TransitionData {
    outcome: &'static str,
    screen: Screen,
    session: Session,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(request_id: String, data: T) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "conflict" => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Bad input is a validation error; a request the current state cannot
/// serve is a conflict.
pub(super) fn map_rejection(request_id: String, rejection: Rejection) -> ApiError {
    tracing::debug!(%rejection, "transition rejected");
    let code = match rejection {
        Rejection::EmptyInput | Rejection::Unreachable(_) => "validation_error",
        Rejection::NoAnalysis | Rejection::Busy => "conflict",
    };
    ApiError::new(request_id, code, rejection.to_string())
}

/// Wraps a transition outcome and the resulting session in the response
/// envelope. Failed flows are still `200`: the session carries the error.
pub(super) async fn transition_response(
    state: &AppState,
    request_id: String,
    outcome: Outcome,
) -> Result<Json<ApiResponse<TransitionData>>, ApiError> {
    let (result, screen) = match outcome {
        Outcome::Succeeded(screen) => ("succeeded", screen),
        Outcome::Failed(screen) => ("failed", screen),
        Outcome::Rejected(rejection) => return Err(map_rejection(request_id, rejection)),
    };

    let session = state.controller.session().await;
    Ok(Json(ApiResponse::new(
        request_id,
        TransitionData {
            outcome: result,
            screen,
            session,
        },
    )))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/session", get(session::get_session))
        .route("/api/v1/view", get(session::get_view))
        .route("/api/v1/navigate", post(session::navigate))
        .route("/api/v1/analyses", post(analyses::create_analysis))
        .route("/api/v1/analyses/demo", post(analyses::open_demo))
        .route("/api/v1/blueprint", post(analyses::create_blueprint))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let gateway = state.controller.gateway();
    Json(ApiResponse::new(
        req_id.0,
        HealthData {
            status: "ok",
            gemini_credential: gateway.has_credential(),
            model: gateway.model_label().to_owned(),
        },
    ))
}
