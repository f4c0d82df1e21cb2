//! Repository for the `images` table.

use sill_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::image::{CreateImage, Image, UpdateImageResult};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, request_id, image_path, location_type, reference_type, \
     width, height, created_at, updated_at";

/// Provides CRUD operations for request images.
pub struct ImageRepo;

impl ImageRepo {
    /// Attach a single image to an existing request.
    ///
    /// Accepts a pool or an open transaction.
    pub async fn create<'e, E>(
        executor: E,
        request_id: DbId,
        input: &CreateImage,
    ) -> Result<Image, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO images (request_id, image_path, location_type, reference_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(request_id)
            .bind(&input.image_path)
            .bind(&input.location_type)
            .bind(&input.reference_type)
            .fetch_one(executor)
            .await
    }

    /// Find an image by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the images of a request in insertion order.
    pub async fn list_by_request(
        pool: &PgPool,
        request_id: DbId,
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE request_id = $1 ORDER BY id");
        sqlx::query_as::<_, Image>(&query)
            .bind(request_id)
            .fetch_all(pool)
            .await
    }

    /// Record measured dimensions. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_result(
        pool: &PgPool,
        id: DbId,
        input: &UpdateImageResult,
    ) -> Result<Option<Image>, sqlx::Error> {
        let query = format!(
            "UPDATE images SET
                width = COALESCE($2, width),
                height = COALESCE($3, height)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .bind(input.width)
            .bind(input.height)
            .fetch_optional(pool)
            .await
    }
}
