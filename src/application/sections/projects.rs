//! Project cards renderer.

use askama::Template;

use super::{SectionContext, or_dash, report_failure, write_status};
use crate::domain::entities::Project;
use crate::error::SectionError;
use crate::render::templates::{ProjectView, ProjectsTemplate, StatusTone};
use crate::render::{Messages, Region};

/// Renders project cards into the projects grid.
///
/// `limit` caps the number of projects requested from the API; the startup
/// pass does not use it.
pub async fn load_projects(ctx: &SectionContext<'_>, limit: Option<u32>) {
    if let Err(e) = render_projects(ctx, limit).await {
        report_failure("projects", &e);
        write_status(
            ctx.target,
            Region::ProjectsList,
            ctx.messages().projects_error,
            StatusTone::Error,
            true,
        );
    }
}

async fn render_projects(ctx: &SectionContext<'_>, limit: Option<u32>) -> Result<(), SectionError> {
    let messages = ctx.messages();
    let projects = ctx.repository.get_projects(limit).await?;

    if projects.is_empty() {
        write_status(
            ctx.target,
            Region::ProjectsList,
            messages.no_projects,
            StatusTone::Empty,
            true,
        );
        return Ok(());
    }

    let items = projects
        .iter()
        .map(|project| project_view(project, ctx.placeholder_project, messages))
        .collect();

    let html = ProjectsTemplate {
        items,
        placeholder_image: ctx.placeholder_project,
        messages,
    }
    .render()?;
    ctx.target.set_html(Region::ProjectsList, html);

    Ok(())
}

fn project_view(project: &Project, placeholder: &str, messages: &Messages) -> ProjectView {
    ProjectView {
        title: or_dash(project.title(), messages),
        description: project
            .description()
            .unwrap_or(messages.project_no_description)
            .to_string(),
        image_url: project.image_url().unwrap_or(placeholder).to_string(),
        tags: project.technology_tags(),
        live_url: project.live_url().unwrap_or_default().to_string(),
        git_hub_url: project.git_hub_url().unwrap_or_default().to_string(),
    }
}
