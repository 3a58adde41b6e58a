//! # Portfolio Render
//!
//! Server-side renderer for a personal portfolio whose content lives behind a
//! remote JSON API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Portfolio records and the repository trait
//! - **Application Layer** ([`application`]) - Section renderers, startup pass, contact form
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the portfolio API
//! - **Render Layer** ([`render`]) - Page regions, render targets and Askama templates
//! - **Web Layer** ([`web`]) - Axum handlers serving the page and the contact form
//!
//! ## Behaviour
//!
//! A load pass fetches personal info, experience, skills, projects and
//! education concurrently. Each section fills only its own regions; an empty
//! list renders a "no data" message and a failed request renders an error
//! message in place, without affecting the other sections.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="https://portafolio-x5gx.onrender.com/api"
//!
//! # Serve the page on 0.0.0.0:3000
//! cargo run
//!
//! # Or render it once to a file
//! cargo run -- render --output portfolio.html
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{ContactForm, ContactFormHandler, PortfolioLoader};
    pub use crate::domain::entities::{
        ContactResult, ContactSubmission, Education, Experience, PersonalInfo, Project, Skill,
    };
    pub use crate::domain::repositories::PortfolioRepository;
    pub use crate::error::{AppError, ClientError};
    pub use crate::render::{PageDocument, Region, RenderTarget};
    pub use crate::state::AppState;
    pub use crate::utils::locale::Locale;
}
