//! Application layer: section renderers, the startup pass and the contact form.
//!
//! - [`sections`] - One renderer per data domain, each owning its page regions
//! - [`startup::PortfolioLoader`] - Concurrent load of every section
//! - [`contact_form::ContactFormHandler`] - Contact submission state machine

pub mod contact_form;
pub mod sections;
pub mod startup;

pub use contact_form::{ContactForm, ContactFormHandler, Notification, NotificationKind};
pub use startup::PortfolioLoader;
