//! Handlers for request photos: measured results and reference detection.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use sill_core::detection::{detect_reference_object, BoundingBox};
use sill_core::reference::ReferenceObject;
use sill_core::types::DbId;
use sill_db::models::image::UpdateImageResult;
use sill_db::repositories::ImageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::FormFields;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Message returned when the image could not be opened for detection.
pub const DETECTION_FAILED_MESSAGE: &str = "Could not detect reference object automatically.";

/// POST /api/save_image_result/{image_id}
///
/// Form fields `width` and `height`; each is optional.
pub async fn save_result(
    State(state): State<AppState>,
    Path(image_id): Path<DbId>,
    form: FormFields,
) -> AppResult<Json<MessageResponse>> {
    let input = UpdateImageResult {
        width: form.optional_f64("width")?,
        height: form.optional_f64("height")?,
    };

    ImageRepo::update_result(&state.pool, image_id, &input)
        .await?
        .ok_or(AppError::not_found("Image", image_id))?;
    tracing::info!(image_id, width = ?input.width, height = ?input.height, "Image result saved");

    Ok(Json(MessageResponse::new("Success")))
}

/// Body of `POST /api/analyze/{image_id}`.
///
/// Detection failure is reported in-band with `success: false`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /api/analyze/{image_id}
///
/// Suggests a reference-object box from the stored image's dimensions.
pub async fn analyze(
    State(state): State<AppState>,
    Path(image_id): Path<DbId>,
) -> AppResult<Json<AnalyzeResponse>> {
    let image = ImageRepo::find_by_id(&state.pool, image_id)
        .await?
        .ok_or(AppError::not_found("Image", image_id))?;

    let reference = ReferenceObject::from_tag(&image.reference_type);
    let path = image.image_path.clone();
    let detected = tokio::task::spawn_blocking(move || detect_reference_object(&path, reference))
        .await
        .map_err(|e| AppError::InternalError(format!("Detection task failed: {e}")))?;

    let response = match detected {
        Ok(b) => AnalyzeResponse {
            success: true,
            r#box: Some(b),
            message: None,
        },
        Err(e) => {
            tracing::warn!(image_id, path = %image.image_path, error = %e, "Reference detection failed");
            AnalyzeResponse {
                success: false,
                r#box: None,
                message: Some(DETECTION_FAILED_MESSAGE),
            }
        }
    };
    Ok(Json(response))
}
