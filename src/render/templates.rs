//! Askama templates for the page and its fragments.
//!
//! Fragment templates take render-ready views (already formatted strings, empty
//! string meaning "absent") so the markup stays free of formatting logic.

use askama::Template;
use askama_web::WebTemplate;

use super::document::PageDocument;
use super::messages::Messages;
use super::region::Region;

/// Escapes a text value for use inside markup.
#[derive(Template)]
#[template(source = "{{ text }}", ext = "html")]
pub(crate) struct EscapedText<'a> {
    pub text: &'a str,
}

/// "No data" or "error" message shown in place of a section's content.
#[derive(Template)]
#[template(path = "fragments/status_message.html")]
pub struct StatusMessageTemplate<'a> {
    pub message: &'a str,
    pub tone: StatusTone,
    /// Wraps the message in a full-width grid column (for grid regions).
    pub full_width: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Empty,
    Error,
}

impl StatusTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Empty => "text-muted",
            StatusTone::Error => "text-danger",
        }
    }
}

/// LinkedIn / GitHub / email links, each only when present.
#[derive(Template)]
#[template(path = "fragments/social_links.html")]
pub struct SocialLinksTemplate {
    pub linked_in_url: String,
    pub git_hub_url: String,
    pub email: String,
}

pub struct ExperienceView {
    pub position: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub description: String,
}

#[derive(Template)]
#[template(path = "fragments/experience_list.html")]
pub struct ExperienceListTemplate {
    pub items: Vec<ExperienceView>,
}

pub struct SkillView {
    pub name: String,
    pub percentage: u8,
}

pub struct SkillGroupView {
    pub category: String,
    pub skills: Vec<SkillView>,
}

#[derive(Template)]
#[template(path = "fragments/skills.html")]
pub struct SkillsTemplate {
    pub groups: Vec<SkillGroupView>,
}

pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub live_url: String,
    pub git_hub_url: String,
}

#[derive(Template)]
#[template(path = "fragments/projects.html")]
pub struct ProjectsTemplate<'a> {
    pub items: Vec<ProjectView>,
    /// Shown when an image fails to load in the browser.
    pub placeholder_image: &'a str,
    pub messages: &'a Messages,
}

pub struct EducationView {
    pub degree: String,
    pub institution: String,
    pub start: String,
    pub end: String,
    pub field_of_study: String,
    pub description: String,
}

#[derive(Template)]
#[template(path = "fragments/education_list.html")]
pub struct EducationListTemplate<'a> {
    pub items: Vec<EducationView>,
    pub messages: &'a Messages,
}

/// Transient banner shown after a contact submission.
pub struct NotificationView {
    pub css_class: &'static str,
    pub message: String,
    pub dismiss_after_ms: u128,
}

/// Contact form together with its submit control and the last notification.
#[derive(Template)]
#[template(path = "fragments/contact_section.html")]
pub struct ContactSectionTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub submit_label: &'a str,
    pub submit_disabled: bool,
    pub notification: Option<NotificationView>,
    /// Lifetime of banners raised client-side when the post itself fails.
    pub dismiss_after_ms: u128,
    pub messages: &'a Messages,
}

/// The hosting document.
///
/// Regions nobody wrote to keep a loading placeholder.
#[derive(Template, WebTemplate)]
#[template(path = "portfolio.html")]
pub struct PortfolioPage {
    pub lang: &'static str,
    pub hero_name: String,
    pub hero_title: String,
    pub hero_bio: String,
    pub about_description: String,
    pub about_email: String,
    pub about_phone: String,
    pub about_location: String,
    pub social_links: String,
    pub footer_social: String,
    pub experience_list: String,
    pub skills_container: String,
    pub projects_list: String,
    pub education_list: String,
    pub contact_section: String,
}

impl PortfolioPage {
    pub fn from_document(document: &PageDocument, lang: &'static str, messages: &Messages) -> Self {
        let loading = StatusMessageTemplate {
            message: messages.loading,
            tone: StatusTone::Empty,
            full_width: false,
        }
        .render()
        .unwrap_or_default();
        let region = |region: Region| document.region_html(region).unwrap_or_else(|| loading.clone());
        let text = |region: Region| document.region_html(region).unwrap_or_default();

        Self {
            lang,
            hero_name: text(Region::HeroName),
            hero_title: text(Region::HeroTitle),
            hero_bio: text(Region::HeroBio),
            about_description: text(Region::AboutDescription),
            about_email: text(Region::AboutEmail),
            about_phone: text(Region::AboutPhone),
            about_location: text(Region::AboutLocation),
            social_links: text(Region::SocialLinks),
            footer_social: text(Region::FooterSocial),
            experience_list: region(Region::ExperienceList),
            skills_container: region(Region::SkillsContainer),
            projects_list: region(Region::ProjectsList),
            education_list: region(Region::EducationList),
            contact_section: text(Region::ContactSection),
        }
    }
}
