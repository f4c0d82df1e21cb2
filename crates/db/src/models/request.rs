//! Measurement request models and DTOs.

use serde::{Deserialize, Serialize};
use sill_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::image::Image;

/// A row from the `requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Request {
    pub id: DbId,
    pub customer_name: String,
    pub phone: String,
    pub status: String,
    pub memo: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List-view projection of a request with its image count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RequestSummary {
    pub id: DbId,
    pub customer_name: String,
    pub phone: String,
    pub status: String,
    pub created_at: Timestamp,
    pub image_count: i64,
    /// Stored path of the earliest image, for list thumbnails.
    pub first_image: Option<String>,
}

/// A request together with its images in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct RequestDetail {
    #[serde(flatten)]
    pub request: Request,
    pub images: Vec<Image>,
}

/// DTO for creating a new request. New requests always start in the
/// initial workflow status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub customer_name: String,
    pub phone: String,
}

/// DTO for updating an existing request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRequest {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub memo: Option<String>,
    pub status: Option<String>,
}
