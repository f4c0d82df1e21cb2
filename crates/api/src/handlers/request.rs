//! Handlers for measurement requests.

use axum::extract::{Path, State};
use axum::Json;
use sill_core::status::{is_known_status, validate_status};
use sill_core::types::DbId;
use sill_db::models::request::{RequestDetail, RequestSummary, UpdateRequest};
use sill_db::repositories::RequestRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormFields;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/requests
///
/// All requests, newest first, with image counts.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RequestSummary>>> {
    let requests = RequestRepo::list_summaries(&state.pool).await?;
    Ok(Json(requests))
}

/// GET /api/request/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RequestDetail>> {
    let detail = RequestRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Request", id))?;
    Ok(Json(detail))
}

/// POST /api/update_request/{id}
///
/// Form fields `width`, `height`, `memo`, `status`; each is optional and
/// only the fields sent are changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: FormFields,
) -> AppResult<Json<MessageResponse>> {
    let input = UpdateRequest {
        width: form.optional_f64("width")?,
        height: form.optional_f64("height")?,
        memo: form.optional_text("memo"),
        status: form.optional_text("status"),
    };
    if let Some(status) = &input.status {
        validate_status(status)?;
        if !is_known_status(status) {
            tracing::debug!(request_id = id, status = %status, "Custom status label");
        }
    }

    RequestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Request", id))?;
    tracing::info!(request_id = id, status = ?input.status, "Request updated");

    Ok(Json(MessageResponse::new("Updated successfully")))
}
