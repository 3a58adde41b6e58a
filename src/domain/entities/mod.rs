//! Core domain entities representing the portfolio data model.
//!
//! Entities mirror the JSON records returned by the portfolio API. They are
//! received once per load pass and never mutated afterwards.
//!
//! # Entity Types
//!
//! - [`PersonalInfo`] - The portfolio owner's profile (singleton)
//! - [`Experience`] - A job or engagement
//! - [`Skill`] - A skill with its category and 1–5 level
//! - [`Education`] - A degree or course
//! - [`Project`] - A showcased project
//! - [`ContactSubmission`] / [`ContactResult`] - Contact form payload and reply
//!
//! # Field Tolerance
//!
//! Every field may be missing, `null` or an empty string. Accessors that return
//! `Option<&str>` treat blank strings as absent so renderers can fall back to
//! placeholder text instead of failing.

pub mod contact;
pub mod education;
pub mod experience;
pub mod personal_info;
pub mod project;
pub mod skill;

pub use contact::{ContactResult, ContactSubmission};
pub use education::Education;
pub use experience::Experience;
pub use personal_info::PersonalInfo;
pub use project::Project;
pub use skill::Skill;

/// Returns the trimmed value when it holds something other than whitespace.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
