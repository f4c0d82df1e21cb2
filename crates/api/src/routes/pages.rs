//! Browser-facing routes mounted at the root.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{pages, submission};
use crate::state::AppState;

/// Routes mounted at `/`.
///
/// ```text
/// GET    /          -> index page
/// GET    /admin     -> admin page
/// POST   /submit    -> multipart submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin))
        .route("/submit", post(submission::submit))
}
