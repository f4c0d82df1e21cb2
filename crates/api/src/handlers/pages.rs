//! Server-rendered HTML pages.
//!
//! Both pages are static documents; data is loaded client-side from the
//! JSON endpoints.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../pages/index.html");
const ADMIN_HTML: &str = include_str!("../../pages/admin.html");

/// GET /
///
/// Customer submission form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /admin
///
/// Request review and measurement dashboard.
pub async fn admin() -> Html<&'static str> {
    Html(ADMIN_HTML)
}
