//! Experience list renderer.

use askama::Template;

use super::{SectionContext, or_dash, report_failure, write_status};
use crate::domain::entities::Experience;
use crate::error::SectionError;
use crate::render::templates::{ExperienceListTemplate, ExperienceView, StatusTone};
use crate::render::{Messages, Region};
use crate::utils::formatters::format_date;
use crate::utils::locale::Locale;

/// Renders every experience, in API order, into the experience list.
pub async fn load_experiences(ctx: &SectionContext<'_>) {
    if let Err(e) = render_experiences(ctx).await {
        report_failure("experiences", &e);
        write_status(
            ctx.target,
            Region::ExperienceList,
            ctx.messages().experiences_error,
            StatusTone::Error,
            false,
        );
    }
}

async fn render_experiences(ctx: &SectionContext<'_>) -> Result<(), SectionError> {
    let messages = ctx.messages();
    let experiences = ctx.repository.get_experiences().await?;

    if experiences.is_empty() {
        write_status(
            ctx.target,
            Region::ExperienceList,
            messages.no_experiences,
            StatusTone::Empty,
            false,
        );
        return Ok(());
    }

    let items = experiences
        .iter()
        .map(|exp| experience_view(exp, ctx.locale, messages))
        .collect();

    let html = ExperienceListTemplate { items }.render()?;
    ctx.target.set_html(Region::ExperienceList, html);

    Ok(())
}

fn experience_view(exp: &Experience, locale: Locale, messages: &Messages) -> ExperienceView {
    ExperienceView {
        position: or_dash(exp.position(), messages),
        company: or_dash(exp.company(), messages),
        start: format_date(exp.start_date(), locale),
        // `end_date()` is already `None` for the current job.
        end: format_date(exp.end_date(), locale),
        location: exp.location().unwrap_or_default().to_string(),
        description: exp.description().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sections::test_support::{context, server_error};
    use crate::domain::repositories::MockPortfolioRepository;
    use crate::render::PageDocument;

    fn experience(position: &str, start: &str, end: Option<&str>, current: bool) -> Experience {
        Experience {
            position: Some(position.to_string()),
            company: Some("Acme".to_string()),
            start_date: Some(start.to_string()),
            end_date: end.map(str::to_string),
            is_current_job: Some(current),
            location: None,
            description: Some("Built things".to_string()),
        }
    }

    #[tokio::test]
    async fn test_experiences_render_in_api_order() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_get_experiences().times(1).returning(|| {
            Ok(vec![
                experience("Lead", "2022-02-01", None, true),
                experience("Engineer", "2019-01-01", Some("2022-01-31"), false),
            ])
        });

        let page = PageDocument::new();
        load_experiences(&context(&repo, &page)).await;

        let html = page.region_html(Region::ExperienceList).unwrap();
        let lead = html.find("Lead").unwrap();
        let engineer = html.find("Engineer").unwrap();
        assert!(lead < engineer);
        assert!(html.contains("February 2022 - Present"));
        assert!(html.contains("January 2019 - January 2022"));
        assert!(!html.contains("bi-geo-alt"));
    }

    #[tokio::test]
    async fn test_current_job_ignores_end_date() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_get_experiences()
            .times(1)
            .returning(|| Ok(vec![experience("Lead", "2022-02-01", Some("2023-01-01"), true)]));

        let page = PageDocument::new();
        load_experiences(&context(&repo, &page)).await;

        let html = page.region_html(Region::ExperienceList).unwrap();
        assert!(html.contains("February 2022 - Present"));
        assert!(!html.contains("January 2023"));
    }

    #[tokio::test]
    async fn test_location_rendered_when_present() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_get_experiences().times(1).returning(|| {
            let mut exp = experience("Lead", "2022-02-01", None, true);
            exp.location = Some("Remote".to_string());
            Ok(vec![exp])
        });

        let page = PageDocument::new();
        load_experiences(&context(&repo, &page)).await;

        let html = page.region_html(Region::ExperienceList).unwrap();
        assert!(html.contains("bi-geo-alt"));
        assert!(html.contains("Remote"));
    }

    #[tokio::test]
    async fn test_empty_experiences_render_no_data() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_get_experiences().times(1).returning(|| Ok(vec![]));

        let page = PageDocument::new();
        load_experiences(&context(&repo, &page)).await;

        let html = page.region_html(Region::ExperienceList).unwrap();
        assert!(html.contains("No experience available"));
        assert!(html.contains("text-muted"));
    }

    #[tokio::test]
    async fn test_failed_experiences_render_error() {
        let mut repo = MockPortfolioRepository::new();
        repo.expect_get_experiences()
            .times(1)
            .returning(|| Err(server_error("/experience")));

        let page = PageDocument::new();
        load_experiences(&context(&repo, &page)).await;

        let html = page.region_html(Region::ExperienceList).unwrap();
        assert!(html.contains("Error loading experience"));
        assert!(html.contains("text-danger"));
        assert!(!html.contains("No experience available"));
        assert_eq!(page.written_regions(), 1);
    }
}
