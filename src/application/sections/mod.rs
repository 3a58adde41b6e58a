//! Section renderers, one per portfolio data domain.
//!
//! Every renderer follows the same shape: fetch through the repository, build
//! view models, render a fragment and replace the regions it owns. Failures are
//! logged, counted and turned into an in-place error message; they never reach
//! the caller, so one broken section cannot affect another.
//!
//! An empty list is not a failure: it renders an explicit "no data" message.

mod education;
mod experiences;
mod personal_info;
mod projects;
mod skills;

pub use education::load_education;
pub use experiences::load_experiences;
pub use personal_info::load_personal_info;
pub use projects::load_projects;
pub use skills::{group_skills, load_skills};

use askama::Template;

use crate::domain::repositories::PortfolioRepository;
use crate::error::SectionError;
use crate::render::templates::{StatusMessageTemplate, StatusTone};
use crate::render::{Messages, Region, RenderTarget};
use crate::utils::locale::Locale;

/// Everything a section renderer needs for one load pass.
#[derive(Clone, Copy)]
pub struct SectionContext<'a> {
    pub repository: &'a dyn PortfolioRepository,
    pub target: &'a dyn RenderTarget,
    pub locale: Locale,
    /// Image used for projects without one.
    pub placeholder_project: &'a str,
}

impl SectionContext<'_> {
    pub fn messages(&self) -> &'static Messages {
        Messages::for_locale(self.locale)
    }
}

/// Logs and counts a section failure.
fn report_failure(section: &'static str, error: &SectionError) {
    tracing::error!(section, error = %error, "Error loading section");
    metrics::counter!("portfolio_section_failures_total", "section" => section).increment(1);
}

/// Replaces `region` with a "no data" or error message.
fn write_status(
    target: &dyn RenderTarget,
    region: Region,
    message: &str,
    tone: StatusTone,
    full_width: bool,
) {
    let rendered = StatusMessageTemplate {
        message,
        tone,
        full_width,
    }
    .render();

    match rendered {
        Ok(html) => target.set_html(region, html),
        Err(e) => {
            tracing::warn!(region = %region, error = %e, "Status template failed, writing plain text");
            target.set_text(region, message);
        }
    }
}

/// Text for a headline field, `-` when absent.
fn or_dash(value: Option<&str>, messages: &Messages) -> String {
    value.unwrap_or(messages.contact_field_fallback).to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::repositories::MockPortfolioRepository;
    use crate::error::ClientError;
    use crate::render::PageDocument;

    pub const PLACEHOLDER: &str = "https://placeholder.test/project.png";

    pub fn context<'a>(
        repository: &'a MockPortfolioRepository,
        page: &'a PageDocument,
    ) -> SectionContext<'a> {
        SectionContext {
            repository,
            target: page,
            locale: Locale::En,
            placeholder_project: PLACEHOLDER,
        }
    }

    pub fn server_error(path: &str) -> ClientError {
        ClientError::Status {
            path: path.to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
