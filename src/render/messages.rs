//! User-facing strings per locale.

use crate::utils::locale::Locale;

/// Every string the renderers put on the page.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub present: &'static str,

    // Personal info fallbacks
    pub name_fallback: &'static str,
    pub title_fallback: &'static str,
    pub hero_bio_fallback: &'static str,
    pub about_fallback: &'static str,
    pub contact_field_fallback: &'static str,

    // Section states
    pub loading: &'static str,
    pub no_experiences: &'static str,
    pub no_skills: &'static str,
    pub no_projects: &'static str,
    pub no_education: &'static str,
    pub personal_info_error: &'static str,
    pub experiences_error: &'static str,
    pub skills_error: &'static str,
    pub projects_error: &'static str,
    pub education_error: &'static str,

    // Item details
    pub uncategorized: &'static str,
    pub project_no_description: &'static str,
    pub field_of_study_label: &'static str,
    pub demo_label: &'static str,
    pub code_label: &'static str,

    // Contact form
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub message_label: &'static str,
    pub submit_label: &'static str,
    pub sending_label: &'static str,
    pub contact_success: &'static str,
    pub contact_failure: &'static str,
    pub contact_stub_reply: &'static str,
}

const ES: Messages = Messages {
    present: "Presente",
    name_fallback: "Tu Nombre",
    title_fallback: "Desarrollador",
    hero_bio_fallback: "Descripción profesional",
    about_fallback: "Sin descripción",
    contact_field_fallback: "-",
    loading: "Cargando...",
    no_experiences: "No hay experiencias disponibles",
    no_skills: "No hay habilidades disponibles",
    no_projects: "No hay proyectos disponibles",
    no_education: "No hay educación disponible",
    personal_info_error: "Error al cargar información personal",
    experiences_error: "Error al cargar experiencias",
    skills_error: "Error al cargar habilidades",
    projects_error: "Error al cargar proyectos",
    education_error: "Error al cargar educación",
    uncategorized: "General",
    project_no_description: "Sin descripción",
    field_of_study_label: "Campo:",
    demo_label: "Demo",
    code_label: "Código",
    name_label: "Nombre",
    email_label: "Email",
    message_label: "Mensaje",
    submit_label: "Enviar mensaje",
    sending_label: "Enviando...",
    contact_success: "Mensaje enviado correctamente. Te contactaré pronto!",
    contact_failure: "Error al enviar el mensaje. Intenta nuevamente.",
    contact_stub_reply: "Mensaje enviado correctamente",
};

const EN: Messages = Messages {
    present: "Present",
    name_fallback: "Your Name",
    title_fallback: "Developer",
    hero_bio_fallback: "Professional summary",
    about_fallback: "No description",
    contact_field_fallback: "-",
    loading: "Loading...",
    no_experiences: "No experience available",
    no_skills: "No skills available",
    no_projects: "No projects available",
    no_education: "No education available",
    personal_info_error: "Error loading personal information",
    experiences_error: "Error loading experience",
    skills_error: "Error loading skills",
    projects_error: "Error loading projects",
    education_error: "Error loading education",
    uncategorized: "General",
    project_no_description: "No description",
    field_of_study_label: "Field:",
    demo_label: "Demo",
    code_label: "Code",
    name_label: "Name",
    email_label: "Email",
    message_label: "Message",
    submit_label: "Send message",
    sending_label: "Sending...",
    contact_success: "Message sent. I will get back to you soon!",
    contact_failure: "Could not send the message. Please try again.",
    contact_stub_reply: "Message sent",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }
}
