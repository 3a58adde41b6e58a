//! Startup orchestration: loads every section concurrently, then arms the
//! contact form.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::contact_form::ContactFormHandler;
use super::sections::{
    SectionContext, load_education, load_experiences, load_personal_info, load_projects,
    load_skills,
};
use crate::config::Config;
use crate::domain::repositories::PortfolioRepository;
use crate::render::{Messages, RenderTarget};
use crate::utils::locale::Locale;

/// Runs the initial load pass against a render target.
#[derive(Clone)]
pub struct PortfolioLoader {
    repository: Arc<dyn PortfolioRepository>,
    locale: Locale,
    placeholder_project: String,
    notification_ttl: Duration,
}

impl PortfolioLoader {
    pub fn new(
        repository: Arc<dyn PortfolioRepository>,
        locale: Locale,
        placeholder_project: impl Into<String>,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            locale,
            placeholder_project: placeholder_project.into(),
            notification_ttl,
        }
    }

    pub fn from_config(repository: Arc<dyn PortfolioRepository>, config: &Config) -> Self {
        Self::new(
            repository,
            config.locale,
            config.placeholder_project.clone(),
            config.notification_ttl,
        )
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Loads all five sections into `page`.
    ///
    /// The sections are dispatched together and awaited as a group; a failing
    /// section only replaces its own regions. Resolves once every section has
    /// settled and returns the contact form handler, ready for submissions.
    pub async fn load_all(&self, page: &dyn RenderTarget) -> ContactFormHandler {
        let started = Instant::now();
        tracing::info!(locale = %self.locale, "Loading portfolio sections");

        let ctx = SectionContext {
            repository: self.repository.as_ref(),
            target: page,
            locale: self.locale,
            placeholder_project: &self.placeholder_project,
        };

        tokio::join!(
            load_personal_info(&ctx),
            load_experiences(&ctx),
            load_skills(&ctx),
            load_projects(&ctx, None),
            load_education(&ctx),
        );

        let elapsed = started.elapsed();
        metrics::histogram!("portfolio_load_duration_seconds").record(elapsed.as_secs_f64());
        tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "Portfolio sections loaded");

        self.contact_form()
    }

    /// A contact form handler in its idle state.
    pub fn contact_form(&self) -> ContactFormHandler {
        ContactFormHandler::new(
            self.repository.clone(),
            Messages::for_locale(self.locale),
            self.notification_ttl,
        )
    }
}
