pub mod health;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{image, measure, meta, proxy, request};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /proxy-image?url=                  fetch remote image through cache (GET)
/// /requests                          list requests with image counts (GET)
/// /request/{id}                      request detail with images (GET)
/// /update_request/{request_id}       partial update, form fields (POST)
/// /save_image_result/{image_id}      record measured size, form fields (POST)
/// /analyze/{image_id}                suggest reference box (POST)
/// /measure                           convert a drawn line to mm (POST)
/// /measure/average                   average typed readings (POST)
/// /meta                              known statuses and reference objects (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/proxy-image", get(proxy::proxy_image))
        .route("/requests", get(request::list))
        .route("/request/{id}", get(request::get_detail))
        .route("/update_request/{request_id}", post(request::update))
        .route("/save_image_result/{image_id}", post(image::save_result))
        .route("/analyze/{image_id}", post(image::analyze))
        .route("/measure", post(measure::measure_line))
        .route("/measure/average", post(measure::average))
        .route("/meta", get(meta::get_meta))
}
