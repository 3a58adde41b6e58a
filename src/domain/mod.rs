//! Domain layer containing the portfolio data model.
//!
//! - [`entities`] - Records returned by the portfolio API
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on rendering or on the HTTP client.

pub mod entities;
pub mod repositories;
