//! Infrastructure layer for external integrations.
//!
//! Implements the domain repository trait on top of the remote portfolio API.
//!
//! # Modules
//!
//! - [`api`] - HTTP client and the [`crate::domain::repositories::PortfolioRepository`] implementation

pub mod api;
