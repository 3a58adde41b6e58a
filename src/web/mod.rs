//! HTTP surface of the portfolio.
//!
//! Serves the server-rendered page, accepts contact form posts and reports
//! the health of the upstream portfolio API. Pages are rendered with Askama.
//!
//! # Modules
//!
//! - [`handlers`] - Page, contact and health handlers
//! - [`dto`] - Form input and health response bodies
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
