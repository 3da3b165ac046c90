use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;

/// All application routes.
///
/// Anything that is not an API route is served from `dist_dir`; unknown
/// paths get `index.html` so the client-side router can resolve them.
pub fn configure_routes(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SITE CONTENT
        // ========================================
        .route("/api/content", get(handlers::content::get_content))
        .route("/api/content/warnings", get(handlers::content::get_warnings))
        .route("/api/photos", get(handlers::content::list_photos))
        .route("/api/rooms", get(handlers::content::list_rooms))
        // ========================================
        // INQUIRIES
        // ========================================
        .route("/api/inquiries", post(handlers::inquiry::submit))
        .fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
}
