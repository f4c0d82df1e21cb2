//! Customer submission handler.
//!
//! A submission is one multipart form: customer details plus parallel lists
//! of photos, locations, and reference types. The i-th photo is paired with
//! the i-th location and reference type.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use sill_core::submission::{validate_submission, SubmissionShape};
use sill_core::upload::{normalize_stored_path, stored_file_name};
use sill_db::models::image::CreateImage;
use sill_db::models::request::CreateRequest;
use sill_db::repositories::RequestRepo;

use crate::error::{AppError, AppResult};
use crate::response::SubmissionResponse;
use crate::state::AppState;

/// Acknowledgement shown to the customer ("your request has been received").
pub const SUBMISSION_RECEIVED_MESSAGE: &str = "접수가 완료되었습니다.";

/// A photo part read from the form, not yet written to disk.
struct UploadedFile {
    file_name: String,
    data: Bytes,
}

/// Parsed submission form.
#[derive(Default)]
struct SubmissionForm {
    name: String,
    phone: String,
    locations: Vec<String>,
    reference_types: Vec<String>,
    images: Vec<UploadedFile>,
}

/// POST /submit
///
/// Fields: `name`, `phone`, repeated `locations`, repeated
/// `reference_types`, repeated `images` (files). Validation happens before
/// any file is written; rows are inserted in a single transaction.
pub async fn submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<SubmissionResponse>> {
    let form = read_form(multipart).await?;

    validate_submission(&SubmissionShape {
        name: &form.name,
        phone: &form.phone,
        image_count: form.images.len(),
        location_count: form.locations.len(),
        reference_type_count: form.reference_types.len(),
    })?;

    let stored_paths = store_files(&state.config.upload_dir, &form.images).await?;

    let images: Vec<CreateImage> = stored_paths
        .iter()
        .zip(form.locations.iter().zip(form.reference_types.iter()))
        .map(|(path, (location, reference))| CreateImage {
            image_path: normalize_stored_path(path),
            location_type: location.clone(),
            reference_type: reference.clone(),
        })
        .collect();

    let input = CreateRequest {
        customer_name: form.name.trim().to_string(),
        phone: form.phone.trim().to_string(),
    };

    let detail = match RequestRepo::create_with_images(&state.pool, &input, &images).await {
        Ok(detail) => detail,
        Err(e) => {
            remove_files(&stored_paths).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        request_id = detail.request.id,
        image_count = detail.images.len(),
        "Submission received"
    );

    Ok(Json(SubmissionResponse {
        message: SUBMISSION_RECEIVED_MESSAGE,
        id: detail.request.id,
    }))
}

/// Read every part of the submission form into memory.
async fn read_form(mut multipart: Multipart) -> AppResult<SubmissionForm> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "images" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // An empty file input still submits a nameless, empty part.
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                form.images.push(UploadedFile { file_name, data });
            }
            "name" | "phone" | "locations" | "reference_types" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match name.as_str() {
                    "name" => form.name = text,
                    "phone" => form.phone = text,
                    "locations" => form.locations.push(text),
                    _ => form.reference_types.push(text),
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

/// Write uploads under `dir` with random names, returning their paths.
///
/// On failure, files already written are removed.
async fn store_files(dir: &Path, files: &[UploadedFile]) -> AppResult<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Cannot create upload dir: {e}")))?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(stored_file_name(&file.file_name));
        if let Err(e) = tokio::fs::write(&path, &file.data).await {
            remove_files(&written).await;
            return Err(AppError::InternalError(format!(
                "Failed to store upload '{}': {e}",
                file.file_name
            )));
        }
        tracing::debug!(path = %path.display(), bytes = file.data.len(), "Upload stored");
        written.push(path);
    }
    Ok(written)
}

/// Best-effort removal of stored uploads after a failed submission.
async fn remove_files(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove orphaned upload");
        }
    }
}
