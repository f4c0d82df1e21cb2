//! Repository for the `requests` table.

use sill_core::status::STATUS_UPLOADED;
use sill_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::image::CreateImage;
use crate::models::request::{CreateRequest, Request, RequestDetail, RequestSummary, UpdateRequest};
use crate::repositories::image_repo::ImageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, customer_name, phone, status, memo, width, height, created_at, updated_at";

/// Provides CRUD operations for requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request with the initial workflow status.
    ///
    /// Accepts a pool or an open transaction.
    pub async fn create<'e, E>(executor: E, input: &CreateRequest) -> Result<Request, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO requests (customer_name, phone, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(&input.customer_name)
            .bind(&input.phone)
            .bind(STATUS_UPLOADED)
            .fetch_one(executor)
            .await
    }

    /// Insert a request and its images in a single transaction.
    ///
    /// Images are inserted in slice order, so their ids follow that order.
    pub async fn create_with_images(
        pool: &PgPool,
        input: &CreateRequest,
        images: &[CreateImage],
    ) -> Result<RequestDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let request = Self::create(&mut *tx, input).await?;
        let mut rows = Vec::with_capacity(images.len());
        for image in images {
            rows.push(ImageRepo::create(&mut *tx, request.id, image).await?);
        }

        tx.commit().await?;
        tracing::debug!(request_id = request.id, image_count = rows.len(), "Request created");

        Ok(RequestDetail {
            request,
            images: rows,
        })
    }

    /// Find a request by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a request together with its images.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<RequestDetail>, sqlx::Error> {
        let Some(request) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let images = ImageRepo::list_by_request(pool, id).await?;
        Ok(Some(RequestDetail { request, images }))
    }

    /// List all requests with image counts, most recently created first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<RequestSummary>, sqlx::Error> {
        sqlx::query_as::<_, RequestSummary>(
            "SELECT r.id, r.customer_name, r.phone, r.status, r.created_at,
                    COUNT(i.id) AS image_count,
                    (SELECT fi.image_path FROM images fi
                     WHERE fi.request_id = r.id
                     ORDER BY fi.id LIMIT 1) AS first_image
             FROM requests r
             LEFT JOIN images i ON i.request_id = r.id
             GROUP BY r.id
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a request. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequest,
    ) -> Result<Option<Request>, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET
                width = COALESCE($2, width),
                height = COALESCE($3, height),
                memo = COALESCE($4, memo),
                status = COALESCE($5, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(input.width)
            .bind(input.height)
            .bind(&input.memo)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }
}
