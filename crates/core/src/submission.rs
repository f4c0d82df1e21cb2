//! Validation for customer submissions.
//!
//! A submission pairs the i-th uploaded photo with the i-th location and
//! reference-type entries, so all three lists must have the same length.

use crate::error::CoreError;

/// Maximum length for the customer name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for the phone number.
pub const MAX_PHONE_LENGTH: usize = 30;

/// Maximum number of photos in one submission.
pub const MAX_IMAGES_PER_SUBMISSION: usize = 20;

/// Shape of a parsed submission, before any files are written.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionShape<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub image_count: usize,
    pub location_count: usize,
    pub reference_type_count: usize,
}

/// Validate a submission's required fields and list lengths.
pub fn validate_submission(shape: &SubmissionShape<'_>) -> Result<(), CoreError> {
    validate_required("name", shape.name, MAX_NAME_LENGTH)?;
    validate_required("phone", shape.phone, MAX_PHONE_LENGTH)?;

    if shape.image_count == 0 {
        return Err(CoreError::Validation(
            "At least one image is required".to_string(),
        ));
    }
    if shape.image_count > MAX_IMAGES_PER_SUBMISSION {
        return Err(CoreError::Validation(format!(
            "At most {MAX_IMAGES_PER_SUBMISSION} images may be submitted at once (got {})",
            shape.image_count
        )));
    }
    if shape.location_count != shape.image_count
        || shape.reference_type_count != shape.image_count
    {
        return Err(CoreError::Validation(format!(
            "Each image needs a location and a reference type \
             (images: {}, locations: {}, reference_types: {})",
            shape.image_count, shape.location_count, shape.reference_type_count
        )));
    }
    Ok(())
}

fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("'{field}' is required")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "'{field}' exceeds maximum length of {max_len} characters (got {len})"
        )));
    }
    Ok(())
}
