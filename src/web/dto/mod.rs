//! Request and response bodies of the HTTP surface.

pub mod contact;
pub mod health;
