//! Workflow status labels for measurement requests.
//!
//! The `requests.status` column is free text. These are the labels the
//! admin page offers; updates are not restricted to them.

use crate::error::CoreError;

/// Initial status assigned on submission ("materials uploaded").
pub const STATUS_UPLOADED: &str = "자료업로드";

/// Reference measurement finished ("analysis complete").
pub const STATUS_ANALYZED: &str = "분석완료";

/// Quote sent to the customer ("quote complete").
pub const STATUS_QUOTED: &str = "견적완료";

/// Known workflow labels, in workflow order.
pub const KNOWN_STATUSES: &[&str] = &[STATUS_UPLOADED, STATUS_ANALYZED, STATUS_QUOTED];

/// Maximum length of a status label in characters.
pub const MAX_STATUS_LENGTH: usize = 50;

/// Validate a status label supplied by an update.
///
/// Any non-blank label up to [`MAX_STATUS_LENGTH`] characters is accepted.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if status.trim().is_empty() {
        return Err(CoreError::Validation(
            "Status must not be empty".to_string(),
        ));
    }
    let len = status.chars().count();
    if len > MAX_STATUS_LENGTH {
        return Err(CoreError::Validation(format!(
            "Status exceeds maximum length of {MAX_STATUS_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Whether `status` is one of the [`KNOWN_STATUSES`].
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}
