//! Handlers that turn on-screen measurements into millimetres.

use axum::Json;
use serde::{Deserialize, Serialize};
use sill_core::measurement::{average_readings, measure, parse_reading, MeasureLine, Measurement, ReferenceBox};
use sill_core::reference::ReferenceObject;

use crate::error::AppResult;

/// Body of `POST /api/measure`.
#[derive(Debug, Deserialize)]
pub struct MeasureRequest {
    /// Reference tag as stored on the image (`A4`, `CREDIT_CARD`, ...).
    pub reference_type: String,
    pub reference_box: ReferenceBox,
    pub line: MeasureLine,
}

/// POST /api/measure
pub async fn measure_line(Json(input): Json<MeasureRequest>) -> AppResult<Json<Measurement>> {
    let reference = ReferenceObject::from_tag(&input.reference_type);
    let result = measure(&input.reference_box, reference, &input.line)?;
    Ok(Json(result))
}

/// Body of `POST /api/measure/average`. Readings are free text as typed.
#[derive(Debug, Default, Deserialize)]
pub struct AverageRequest {
    #[serde(default)]
    pub widths: Vec<String>,
    #[serde(default)]
    pub heights: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AverageResponse {
    pub width: i64,
    pub height: i64,
}

/// POST /api/measure/average
pub async fn average(Json(input): Json<AverageRequest>) -> Json<AverageResponse> {
    let parse = |raw: &[String]| raw.iter().map(|s| parse_reading(s)).collect::<Vec<_>>();
    Json(AverageResponse {
        width: average_readings(&parse(&input.widths)),
        height: average_readings(&parse(&input.heights)),
    })
}
