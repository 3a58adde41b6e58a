//! Portfolio API access over HTTP.
//!
//! - [`ApiClient`] - `get` / `post` JSON primitives against the configured base URL
//! - [`HttpPortfolioRepository`] - typed accessors and the simulated contact submission

mod client;
mod http_portfolio_repository;

pub use client::ApiClient;
pub use http_portfolio_repository::HttpPortfolioRepository;
