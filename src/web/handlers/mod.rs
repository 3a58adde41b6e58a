//! HTTP handlers: the rendered page, the contact form and the health check.

mod contact;
mod health;
mod page;

pub use contact::contact_handler;
pub use health::health_handler;
pub use page::{build_page, page_handler};
