//! Shared response body types for API handlers.
//!
//! The intake endpoints answer with small ad-hoc JSON objects rather than a
//! `{ "data": ... }` envelope; the browser pages read these fields directly.

use serde::Serialize;
use sill_core::types::DbId;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Body returned after a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: &'static str,
    pub id: DbId,
}
