//! Session read endpoints and plain navigation.
//!
//! - `GET  /api/v1/session`  — current session snapshot
//! - `GET  /api/v1/view`     — view model of the current screen
//! - `POST /api/v1/navigate` — move to another screen

use axum::{extract::State, Extension, Json};
use gaphunter_app::{Screen, Session, View};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{transition_response, ApiError, ApiResponse, AppState, TransitionData};

#[derive(Debug, Deserialize)]
pub(super) struct NavigateRequest {
    pub screen: Screen,
}

pub(super) async fn get_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Session>> {
    let session = state.controller.session().await;
    Json(ApiResponse::new(req_id.0, session))
}

/// `data` is `null` when the screen's aggregate is not held.
pub(super) async fn get_view(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Option<View>>> {
    let view = state.controller.view().await;
    Json(ApiResponse::new(req_id.0, view))
}

pub(super) async fn navigate(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<NavigateRequest>,
) -> Result<Json<ApiResponse<TransitionData>>, ApiError> {
    let outcome = state.controller.navigate(body.screen).await;
    transition_response(&state, req_id.0, outcome).await
}
