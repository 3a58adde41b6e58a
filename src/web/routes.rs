//! Portfolio route configuration.

use crate::state::AppState;
use crate::web::handlers::{contact_handler, health_handler, page_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public portfolio routes.
///
/// # Endpoints
///
/// - `GET /` - Rendered portfolio page
/// - `POST /contact` - Contact form submission, returns the contact section
/// - `GET /health` - Portfolio API health
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(page_handler))
        .route("/contact", post(contact_handler))
        .route("/health", get(health_handler))
}
