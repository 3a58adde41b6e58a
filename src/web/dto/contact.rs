//! DTO for the contact form post.

use serde::Deserialize;

use crate::application::ContactForm;

/// Form-encoded body of `POST /contact`.
///
/// Missing fields are treated as empty; nothing is validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactFormInput> for ContactForm {
    fn from(input: ContactFormInput) -> Self {
        ContactForm::new(input.name, input.email, input.message)
    }
}
