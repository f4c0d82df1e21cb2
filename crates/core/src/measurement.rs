//! Converting on-screen measurements into millimetres.
//!
//! The admin draws a box around the reference object and a line across the
//! window opening. The box's long side is matched to the reference object's
//! long side to get a pixels-per-millimetre scale, which converts the line
//! length into a real-world measurement.

use serde::{Deserialize, Serialize};

use crate::detection::BoundingBox;
use crate::error::CoreError;
use crate::reference::ReferenceObject;

/// Maximum number of readings averaged per axis.
pub const MAX_READINGS_PER_AXIS: usize = 3;

/// A point in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A measured line across the window, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MeasureLine {
    pub start: Point,
    pub end: Point,
}

impl MeasureLine {
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Euclidean length in pixels.
    pub fn length_px(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Mostly-horizontal lines measure width; everything else measures height.
    pub fn axis(&self) -> Axis {
        if self.dx().abs() > self.dy().abs() {
            Axis::Width
        } else {
            Axis::Height
        }
    }
}

/// Which window dimension a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Width,
    Height,
}

/// The admin's box around the reference object, in image pixels.
///
/// Width and height may be negative when the box was dragged up or left.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ReferenceBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ReferenceBox {
    /// Length of the longer side in pixels.
    pub fn long_side_px(&self) -> f64 {
        self.w.abs().max(self.h.abs())
    }
}

impl From<BoundingBox> for ReferenceBox {
    fn from(b: BoundingBox) -> Self {
        Self {
            x: f64::from(b.x),
            y: f64::from(b.y),
            w: f64::from(b.w),
            h: f64::from(b.h),
        }
    }
}

/// Result of converting one measured line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub axis: Axis,
    pub length_mm: i64,
    pub pixels_per_mm: f64,
}

/// Pixels per millimetre implied by a reference box.
///
/// Uses the longer side of the drawn box against the object's long side.
pub fn pixels_per_mm(
    reference_box: &ReferenceBox,
    reference: ReferenceObject,
) -> Result<f64, CoreError> {
    let long_px = reference_box.long_side_px();
    if !long_px.is_finite() || long_px <= 0.0 {
        return Err(CoreError::Validation(
            "Reference box must have a non-zero width or height".to_string(),
        ));
    }
    Ok(long_px / reference.long_side_mm())
}

/// Convert a measured line into millimetres, rounded to the nearest unit.
pub fn measure(
    reference_box: &ReferenceBox,
    reference: ReferenceObject,
    line: &MeasureLine,
) -> Result<Measurement, CoreError> {
    let scale = pixels_per_mm(reference_box, reference)?;
    let length_mm = (line.length_px() / scale).round() as i64;
    Ok(Measurement {
        axis: line.axis(),
        length_mm,
        pixels_per_mm: scale,
    })
}

/// Parse a hand-entered reading such as `"1,250mm"`.
///
/// Commas and letters (ASCII and Hangul) are stripped. Returns `0.0` for
/// anything that does not parse.
pub fn parse_reading(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_ascii_alphabetic() && !is_hangul(*c))
        .collect();
    cleaned.trim().parse().unwrap_or(0.0)
}

fn is_hangul(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

/// Average up to [`MAX_READINGS_PER_AXIS`] readings, rounded.
///
/// Non-positive readings are ignored. Returns `0` when nothing is left.
pub fn average_readings(readings: &[f64]) -> i64 {
    let valid: Vec<f64> = readings
        .iter()
        .take(MAX_READINGS_PER_AXIS)
        .copied()
        .filter(|v| *v > 0.0)
        .collect();
    if valid.is_empty() {
        return 0;
    }
    (valid.iter().sum::<f64>() / valid.len() as f64).round() as i64
}
