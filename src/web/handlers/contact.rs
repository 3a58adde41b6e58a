//! Contact form handler.

use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::Html;

use crate::application::{ContactForm, ContactFormHandler, Notification};
use crate::error::AppError;
use crate::render::Messages;
use crate::render::templates::ContactSectionTemplate;
use crate::state::AppState;
use crate::web::dto::contact::ContactFormInput;

/// Renders the contact section in the handler's current control state.
pub(crate) fn contact_fragment(
    handler: &ContactFormHandler,
    form: &ContactForm,
    notification: Option<&Notification>,
    messages: &Messages,
) -> Result<String, askama::Error> {
    let control = handler.control();

    ContactSectionTemplate {
        name: &form.name,
        email: &form.email,
        message: &form.message,
        submit_label: &control.label,
        submit_disabled: control.disabled,
        notification: notification.map(Notification::to_view),
        dismiss_after_ms: handler.notification_ttl().as_millis(),
        messages,
    }
    .render()
}

/// Submits the contact form and returns the refreshed contact section.
///
/// # Endpoint
///
/// `POST /contact`
///
/// # Request
///
/// Form-encoded `name`, `email` and `message`.
///
/// # Response
///
/// The contact-section fragment with a success or failure notification. The
/// fields are cleared on success and echoed back on failure.
pub async fn contact_handler(
    State(state): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> Result<Html<String>, AppError> {
    let handler = state.loader.contact_form();
    let mut form = ContactForm::from(input);

    let notification = handler.submit(&mut form).await;

    let fragment = contact_fragment(&handler, &form, notification.as_ref(), state.messages())?;
    Ok(Html(fragment))
}
