//! Request photo models and DTOs.

use serde::{Deserialize, Serialize};
use sill_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub request_id: DbId,
    pub image_path: String,
    pub location_type: String,
    pub reference_type: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a photo to a request.
///
/// `request_id` is supplied by the repository when images are created
/// alongside their request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub image_path: String,
    pub location_type: String,
    pub reference_type: String,
}

/// DTO for recording measured window dimensions on a photo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateImageResult {
    pub width: Option<f64>,
    pub height: Option<f64>,
}
