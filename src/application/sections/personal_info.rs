//! Personal info renderer: hero, about and both social-link regions.

use askama::Template;

use super::{SectionContext, report_failure};
use crate::domain::entities::PersonalInfo;
use crate::error::SectionError;
use crate::render::templates::SocialLinksTemplate;
use crate::render::{Messages, Region, RenderTarget};

/// Fills the hero and about fields and the header/footer social links.
///
/// Each field falls back to its own placeholder. On failure the fields show
/// their placeholders, the about description shows the error message and both
/// social-link regions are emptied.
pub async fn load_personal_info(ctx: &SectionContext<'_>) {
    let messages = ctx.messages();

    if let Err(e) = render_personal_info(ctx, messages).await {
        report_failure("personal_info", &e);
        write_fields(ctx.target, &PersonalInfo::default(), messages);
        ctx.target
            .set_text(Region::AboutDescription, messages.personal_info_error);
        ctx.target.set_html(Region::SocialLinks, String::new());
        ctx.target.set_html(Region::FooterSocial, String::new());
    }
}

async fn render_personal_info(
    ctx: &SectionContext<'_>,
    messages: &Messages,
) -> Result<(), SectionError> {
    let info = ctx.repository.get_personal_info().await?;

    let social_links = SocialLinksTemplate {
        linked_in_url: info.linked_in_url().unwrap_or_default().to_string(),
        git_hub_url: info.git_hub_url().unwrap_or_default().to_string(),
        email: info.email().unwrap_or_default().to_string(),
    }
    .render()?;

    write_fields(ctx.target, &info, messages);
    ctx.target.set_html(Region::SocialLinks, social_links.clone());
    ctx.target.set_html(Region::FooterSocial, social_links);

    Ok(())
}

fn write_fields(target: &dyn RenderTarget, info: &PersonalInfo, messages: &Messages) {
    let dash = messages.contact_field_fallback;

    target.set_text(
        Region::HeroName,
        info.full_name().unwrap_or(messages.name_fallback),
    );
    target.set_text(
        Region::HeroTitle,
        info.title().unwrap_or(messages.title_fallback),
    );
    target.set_text(
        Region::HeroBio,
        info.bio().unwrap_or(messages.hero_bio_fallback),
    );
    target.set_text(
        Region::AboutDescription,
        info.bio().unwrap_or(messages.about_fallback),
    );
    target.set_text(Region::AboutEmail, info.email().unwrap_or(dash));
    target.set_text(Region::AboutPhone, info.phone().unwrap_or(dash));
    target.set_text(Region::AboutLocation, info.location().unwrap_or(dash));
}
