//! Repository trait for portfolio data access.

use crate::domain::entities::{
    ContactResult, ContactSubmission, Education, Experience, PersonalInfo, Project, Skill,
};
use crate::error::ClientError;
use async_trait::async_trait;

/// Typed access to the remote portfolio API.
///
/// List accessors never hand back `null`: a missing or `null` wrapper key in the
/// response yields an empty `Vec`. An empty list is a valid answer, not an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::api::HttpPortfolioRepository`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`ClientError`] when the request fails or the API answers
/// with a non-2xx status. Nothing is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Fetches the owner's profile (`GET /personalinfo`).
    async fn get_personal_info(&self) -> Result<PersonalInfo, ClientError>;

    /// Fetches all experiences in API order (`GET /experience`).
    async fn get_experiences(&self) -> Result<Vec<Experience>, ClientError>;

    /// Fetches all skills in API order (`GET /skill`).
    async fn get_skills(&self) -> Result<Vec<Skill>, ClientError>;

    /// Fetches the skills of one category (`GET /skill/category/{category}`).
    async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, ClientError>;

    /// Fetches all education entries (`GET /education`).
    async fn get_education(&self) -> Result<Vec<Education>, ClientError>;

    /// Fetches projects, optionally capped (`GET /project?limit=N`).
    ///
    /// `Some(0)` is treated like `None`.
    async fn get_projects(&self, limit: Option<u32>) -> Result<Vec<Project>, ClientError>;

    /// Submits the contact form.
    async fn send_contact_form(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactResult, ClientError>;
}
