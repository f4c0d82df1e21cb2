use axum::Json;
use serde::Serialize;
use sill_core::reference::{reference_specs, ReferenceSpec};
use sill_core::status::KNOWN_STATUSES;

/// Lookup data for the admin page's dropdowns.
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub statuses: &'static [&'static str],
    pub reference_objects: Vec<ReferenceSpec>,
}

/// GET /api/meta
pub async fn get_meta() -> Json<MetaResponse> {
    Json(MetaResponse {
        statuses: KNOWN_STATUSES,
        reference_objects: reference_specs(),
    })
}
