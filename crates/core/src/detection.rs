//! Reference-object detection placeholder.
//!
//! There is no vision model behind this. The "detected" box is a centred
//! rectangle one fifth of the image size, which the admin then drags onto
//! the actual reference object.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceObject;

/// Divisor applied to each image dimension to size the suggested box.
pub const BOX_FRACTION: u32 = 5;

/// Pixel-space rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Centred box sized `width / 5` by `height / 5`, using integer division.
pub fn centered_box(width: u32, height: u32) -> BoundingBox {
    let w = width / BOX_FRACTION;
    let h = height / BOX_FRACTION;
    BoundingBox {
        x: width / 2 - w / 2,
        y: height / 2 - h / 2,
        w,
        h,
    }
}

/// Suggest a reference-object box for the image stored at `path`.
///
/// Only the image header is read, and the format is taken from the file
/// contents rather than its extension. The reference object does not
/// influence the result.
pub fn detect_reference_object(
    path: impl AsRef<Path>,
    _reference: ReferenceObject,
) -> Result<BoundingBox, image::ImageError> {
    let (width, height) = image::ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(centered_box(width, height))
}
