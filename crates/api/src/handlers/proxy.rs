//! Handler for the remote image proxy.

use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/proxy-image`.
#[derive(Debug, Deserialize)]
pub struct ProxyImageParams {
    pub url: String,
}

/// GET /api/proxy-image?url=
///
/// Returns the image bytes with the upstream media type. Upstream failures
/// map to 400. The URL is used exactly as sent, both as the cache key and
/// for the fetch.
pub async fn proxy_image(
    State(state): State<AppState>,
    Query(params): Query<ProxyImageParams>,
) -> AppResult<impl IntoResponse> {
    if params.url.trim().is_empty() {
        return Err(AppError::BadRequest("Query parameter 'url' is required".into()));
    }

    let image = state.image_proxy.get(&params.url).await?;
    Ok(([(CONTENT_TYPE, image.media_type)], image.content))
}
