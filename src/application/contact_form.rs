//! Contact form handler: idle → submitting → idle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::domain::entities::ContactSubmission;
use crate::domain::repositories::PortfolioRepository;
use crate::render::Messages;
use crate::render::templates::NotificationView;

/// Values of the contact form's three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Payload built verbatim from the fields; no validation.
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// State of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// Transient banner reporting the outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn to_view(&self) -> NotificationView {
        NotificationView {
            css_class: self.kind.css_class(),
            message: self.message.clone(),
            dismiss_after_ms: self.dismiss_after.as_millis(),
        }
    }
}

/// Drives a contact submission and the submit control around it.
///
/// The control state is published on a watch channel so the UI (or a test)
/// can observe the idle → submitting → idle transitions.
pub struct ContactFormHandler {
    repository: Arc<dyn PortfolioRepository>,
    messages: &'static Messages,
    notification_ttl: Duration,
    control: watch::Sender<SubmitControl>,
}

impl ContactFormHandler {
    pub fn new(
        repository: Arc<dyn PortfolioRepository>,
        messages: &'static Messages,
        notification_ttl: Duration,
    ) -> Self {
        let (control, _) = watch::channel(SubmitControl {
            disabled: false,
            label: messages.submit_label.to_string(),
        });

        Self {
            repository,
            messages,
            notification_ttl,
            control,
        }
    }

    /// Current state of the submit control.
    pub fn control(&self) -> SubmitControl {
        self.control.borrow().clone()
    }

    /// Subscribes to submit control changes.
    pub fn subscribe(&self) -> watch::Receiver<SubmitControl> {
        self.control.subscribe()
    }

    /// How long notifications stay visible.
    pub fn notification_ttl(&self) -> Duration {
        self.notification_ttl
    }

    pub fn is_submitting(&self) -> bool {
        self.control.borrow().disabled
    }

    /// Submits the form.
    ///
    /// While the request is in flight the control is disabled and shows the
    /// sending label. On success the form is cleared; on failure it is left
    /// intact. The control is restored afterwards whatever the outcome, including
    /// when the returned future is dropped mid-flight.
    ///
    /// Returns `None` without doing anything if a submission is already running.
    pub async fn submit(&self, form: &mut ContactForm) -> Option<Notification> {
        let original = self.control();
        if original.disabled {
            tracing::debug!("Submission ignored, another one is in flight");
            return None;
        }

        let _restore = RestoreControl {
            control: &self.control,
            original: Some(original),
        };
        self.control.send_replace(SubmitControl {
            disabled: true,
            label: self.messages.sending_label.to_string(),
        });

        let outcome = self.repository.send_contact_form(form.to_submission()).await;

        let notification = match outcome {
            Ok(result) if result.success => {
                metrics::counter!("portfolio_contact_submissions_total", "outcome" => "success")
                    .increment(1);
                form.clear();
                self.notification(NotificationKind::Success, self.messages.contact_success)
            }
            Ok(result) => {
                tracing::error!(reply = %result.message, "Contact form rejected");
                metrics::counter!("portfolio_contact_submissions_total", "outcome" => "failure")
                    .increment(1);
                self.notification(NotificationKind::Danger, self.messages.contact_failure)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error sending contact form");
                metrics::counter!("portfolio_contact_submissions_total", "outcome" => "failure")
                    .increment(1);
                self.notification(NotificationKind::Danger, self.messages.contact_failure)
            }
        };

        Some(notification)
    }

    fn notification(&self, kind: NotificationKind, message: &str) -> Notification {
        Notification {
            kind,
            message: message.to_string(),
            dismiss_after: self.notification_ttl,
        }
    }
}

/// Puts the submit control back to its pre-submission state when dropped.
struct RestoreControl<'a> {
    control: &'a watch::Sender<SubmitControl>,
    original: Option<SubmitControl>,
}

impl Drop for RestoreControl<'_> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            self.control.send_replace(original);
        }
    }
}
