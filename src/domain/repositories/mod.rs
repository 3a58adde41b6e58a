//! Repository trait definitions for the domain layer.
//!
//! The portfolio data lives behind a remote JSON API. [`PortfolioRepository`]
//! is the contract the renderers depend on; the HTTP implementation lives in
//! `crate::infrastructure::api`.
//!
//! # Testing
//!
//! A `mockall` mock is generated for unit tests, and `tests/api_client.rs`
//! exercises the HTTP implementation against a local server.

pub mod portfolio_repository;

pub use portfolio_repository::PortfolioRepository;

#[cfg(test)]
pub use portfolio_repository::MockPortfolioRepository;
