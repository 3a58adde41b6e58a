//! Contact form payload and reply.

use serde::{Deserialize, Serialize};

/// Message a visitor sends through the contact form.
///
/// Built at submit time from the form fields, verbatim. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome reported by the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResult {
    pub success: bool,
    pub message: String,
}
