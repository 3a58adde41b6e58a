//! Rendering layer: the hosting document, its regions and fragment templates.
//!
//! # Modules
//!
//! - [`region`] - Named regions of the portfolio page
//! - [`document`] - [`RenderTarget`] trait and the in-memory [`PageDocument`]
//! - [`templates`] - Askama page and fragment templates with their view models
//! - [`messages`] - Localized user-facing strings
//!
//! Section renderers write fragments into a [`RenderTarget`]; the HTTP layer then
//! splices the collected regions into [`templates::PortfolioPage`].

pub mod document;
pub mod messages;
pub mod region;
pub mod templates;

pub use document::{PageDocument, RenderTarget};
pub use messages::Messages;
pub use region::Region;
