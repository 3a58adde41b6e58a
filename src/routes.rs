//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Rendered portfolio page
//! - `POST /contact`   - Contact form submission
//! - `GET  /health`    - Portfolio API health
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Static assets are served from `state.config.static_dir`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let static_dir = ServeDir::new(&state.config.static_dir);

    let router = Router::new()
        .merge(web::routes::public_routes())
        .nest_service("/static", static_dir)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
