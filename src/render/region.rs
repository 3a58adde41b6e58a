//! Named regions of the hosting document.

use std::fmt;

/// A placeholder in the portfolio page owned by exactly one renderer.
///
/// Writing a region replaces its previous content wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    HeroName,
    HeroTitle,
    HeroBio,
    AboutDescription,
    AboutEmail,
    AboutPhone,
    AboutLocation,
    SocialLinks,
    FooterSocial,
    ExperienceList,
    SkillsContainer,
    ProjectsList,
    EducationList,
    ContactSection,
}

impl Region {
    pub const ALL: [Region; 14] = [
        Region::HeroName,
        Region::HeroTitle,
        Region::HeroBio,
        Region::AboutDescription,
        Region::AboutEmail,
        Region::AboutPhone,
        Region::AboutLocation,
        Region::SocialLinks,
        Region::FooterSocial,
        Region::ExperienceList,
        Region::SkillsContainer,
        Region::ProjectsList,
        Region::EducationList,
        Region::ContactSection,
    ];

    /// Element id of the region in the page markup.
    pub fn id(self) -> &'static str {
        match self {
            Region::HeroName => "hero-name",
            Region::HeroTitle => "hero-title",
            Region::HeroBio => "hero-bio",
            Region::AboutDescription => "about-description",
            Region::AboutEmail => "about-email",
            Region::AboutPhone => "about-phone",
            Region::AboutLocation => "about-location",
            Region::SocialLinks => "social-links",
            Region::FooterSocial => "footer-social",
            Region::ExperienceList => "experience-list",
            Region::SkillsContainer => "skills-container",
            Region::ProjectsList => "projects-list",
            Region::EducationList => "education-list",
            Region::ContactSection => "contact-section",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
