//! Skills renderer: skills grouped by category with proportional bars.

use askama::Template;
use indexmap::IndexMap;

use super::{SectionContext, or_dash, report_failure, write_status};
use crate::domain::entities::Skill;
use crate::error::SectionError;
use crate::render::Region;
use crate::render::templates::{SkillGroupView, SkillView, SkillsTemplate, StatusTone};
use crate::utils::formatters::skill_percentage;

/// Groups skills by category.
///
/// Categories appear in the order they are first seen and skills keep their
/// relative order inside each category. Skills without a category go under
/// `uncategorized`.
pub fn group_skills(skills: Vec<Skill>, uncategorized: &str) -> IndexMap<String, Vec<Skill>> {
    let mut groups: IndexMap<String, Vec<Skill>> = IndexMap::new();

    for skill in skills {
        let category = skill.category().unwrap_or(uncategorized).to_string();
        groups.entry(category).or_default().push(skill);
    }

    groups
}

/// Renders all skills, grouped by category, into the skills container.
pub async fn load_skills(ctx: &SectionContext<'_>) {
    if let Err(e) = render_skills(ctx).await {
        report_failure("skills", &e);
        write_status(
            ctx.target,
            Region::SkillsContainer,
            ctx.messages().skills_error,
            StatusTone::Error,
            false,
        );
    }
}

async fn render_skills(ctx: &SectionContext<'_>) -> Result<(), SectionError> {
    let messages = ctx.messages();
    let skills = ctx.repository.get_skills().await?;

    if skills.is_empty() {
        write_status(
            ctx.target,
            Region::SkillsContainer,
            messages.no_skills,
            StatusTone::Empty,
            false,
        );
        return Ok(());
    }

    let groups = group_skills(skills, messages.uncategorized)
        .into_iter()
        .map(|(category, skills)| SkillGroupView {
            category,
            skills: skills
                .iter()
                .map(|skill| SkillView {
                    name: or_dash(skill.name(), messages),
                    percentage: skill_percentage(skill.level()),
                })
                .collect(),
        })
        .collect();

    let html = SkillsTemplate { groups }.render()?;
    ctx.target.set_html(Region::SkillsContainer, html);

    Ok(())
}
