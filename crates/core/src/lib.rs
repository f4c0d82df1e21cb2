//! Domain logic for the window-measurement intake service.
//!
//! Everything here is free of I/O frameworks: the database and HTTP layers
//! (`sill-db`, `sill-api`) call into these modules for validation, naming,
//! and the small amount of arithmetic the service performs.

pub mod detection;
pub mod drive;
pub mod error;
pub mod measurement;
pub mod reference;
pub mod status;
pub mod submission;
pub mod types;
pub mod upload;
