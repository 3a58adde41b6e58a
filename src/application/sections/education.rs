//! Education list renderer.

use askama::Template;

use super::{SectionContext, or_dash, report_failure, write_status};
use crate::domain::entities::Education;
use crate::error::SectionError;
use crate::render::templates::{EducationListTemplate, EducationView, StatusTone};
use crate::render::{Messages, Region};
use crate::utils::formatters::format_date;
use crate::utils::locale::Locale;

pub async fn load_education(ctx: &SectionContext<'_>) {
    if let Err(e) = render_education(ctx).await {
        report_failure("education", &e);
        write_status(
            ctx.target,
            Region::EducationList,
            ctx.messages().education_error,
            StatusTone::Error,
            false,
        );
    }
}

async fn render_education(ctx: &SectionContext<'_>) -> Result<(), SectionError> {
    let messages = ctx.messages();
    let education = ctx.repository.get_education().await?;

    if education.is_empty() {
        write_status(
            ctx.target,
            Region::EducationList,
            messages.no_education,
            StatusTone::Empty,
            false,
        );
        return Ok(());
    }

    let items = education
        .iter()
        .map(|edu| education_view(edu, ctx.locale, messages))
        .collect();

    let html = EducationListTemplate { items, messages }.render()?;
    ctx.target.set_html(Region::EducationList, html);

    Ok(())
}

fn education_view(edu: &Education, locale: Locale, messages: &Messages) -> EducationView {
    EducationView {
        degree: or_dash(edu.degree(), messages),
        institution: or_dash(edu.institution(), messages),
        start: format_date(edu.start_date(), locale),
        end: format_date(edu.end_date(), locale),
        field_of_study: edu.field_of_study().unwrap_or_default().to_string(),
        description: edu.description().unwrap_or_default().to_string(),
    }
}
