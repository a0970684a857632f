//! Flows that call the analysis gateway, plus the demo shortcut.
//!
//! Each handler awaits the whole flow; concurrent callers see the
//! `ANALYZING` screen through `GET /api/v1/session` and get `409` if they try
//! to start another flow meanwhile.

use axum::{extract::State, Extension, Json};
use gaphunter_app::AnalysisForm;

use crate::middleware::RequestId;

use super::{transition_response, ApiError, ApiResponse, AppState, TransitionData};

/// POST /api/v1/analyses — fetch and analyze reviews for a competitor.
pub(super) async fn create_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalysisForm>,
) -> Result<Json<ApiResponse<TransitionData>>, ApiError> {
    let outcome = state
        .controller
        .request_analysis(&body.competitor_name, &body.description)
        .await;
    transition_response(&state, req_id.0, outcome).await
}

/// POST /api/v1/analyses/demo — load the demo analysis.
pub(super) async fn open_demo(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<TransitionData>>, ApiError> {
    let outcome = state.controller.open_demo_analysis().await;
    transition_response(&state, req_id.0, outcome).await
}

/// POST /api/v1/blueprint — draft a blueprint from the held analysis.
pub(super) async fn create_blueprint(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<TransitionData>>, ApiError> {
    let outcome = state.controller.request_blueprint().await;
    transition_response(&state, req_id.0, outcome).await
}
