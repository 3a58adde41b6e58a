//! HTTP implementation of [`PortfolioRepository`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::client::ApiClient;
use crate::config::{Config, Endpoints};
use crate::domain::entities::{
    ContactResult, ContactSubmission, Education, Experience, PersonalInfo, Project, Skill,
};
use crate::domain::repositories::PortfolioRepository;
use crate::error::ClientError;
use crate::render::messages::Messages;
use crate::utils::locale::Locale;

/// Reads portfolio records through [`ApiClient`] and stubs the contact endpoint.
#[derive(Debug, Clone)]
pub struct HttpPortfolioRepository {
    client: ApiClient,
    endpoints: Endpoints,
    contact_delay: Duration,
    locale: Locale,
}

impl HttpPortfolioRepository {
    pub fn new(client: ApiClient, endpoints: Endpoints, contact_delay: Duration, locale: Locale) -> Self {
        Self {
            client,
            endpoints,
            contact_delay,
            locale,
        }
    }

    /// Builds the repository from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            ApiClient::new(&config.api_base_url)?,
            config.endpoints.clone(),
            config.contact_delay,
            config.locale,
        ))
    }

    /// Fetches `resource_path` and unwraps the list stored under `key`.
    async fn get_list<T: DeserializeOwned>(
        &self,
        resource_path: &str,
        key: &str,
    ) -> Result<Vec<T>, ClientError> {
        let body = self.client.get(resource_path).await?;
        list_field(resource_path, body, key)
    }
}

/// Extracts `body[key]` as a list, defaulting to empty when absent or `null`.
fn list_field<T: DeserializeOwned>(
    resource_path: &str,
    mut body: Value,
    key: &str,
) -> Result<Vec<T>, ClientError> {
    match body.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items).map_err(|e| ClientError::Decode {
            path: resource_path.to_string(),
            reason: format!("field '{key}': {e}"),
        }),
    }
}

#[async_trait]
impl PortfolioRepository for HttpPortfolioRepository {
    async fn get_personal_info(&self) -> Result<PersonalInfo, ClientError> {
        let path = &self.endpoints.personal_info;
        match self.client.get(path).await? {
            Value::Null => Ok(PersonalInfo::default()),
            body => serde_json::from_value(body).map_err(|e| ClientError::Decode {
                path: path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    async fn get_experiences(&self) -> Result<Vec<Experience>, ClientError> {
        self.get_list(&self.endpoints.experience, "experiences").await
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, ClientError> {
        self.get_list(&self.endpoints.skills, "skills").await
    }

    async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, ClientError> {
        let path = format!(
            "{}/category/{}",
            self.endpoints.skills,
            urlencoding::encode(category)
        );
        self.get_list(&path, "skills").await
    }

    async fn get_education(&self) -> Result<Vec<Education>, ClientError> {
        self.get_list(&self.endpoints.education, "education").await
    }

    async fn get_projects(&self, limit: Option<u32>) -> Result<Vec<Project>, ClientError> {
        let path = match limit.filter(|limit| *limit > 0) {
            Some(limit) => format!("{}?limit={}", self.endpoints.projects, limit),
            None => self.endpoints.projects.clone(),
        };
        self.get_list(&path, "projects").await
    }

    /// Simulated submission: logs the payload and answers after a fixed delay.
    async fn send_contact_form(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactResult, ClientError> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message = %submission.message,
            "Contact form data"
        );

        tokio::time::sleep(self.contact_delay).await;

        Ok(ContactResult {
            success: true,
            message: Messages::for_locale(self.locale).contact_stub_reply.to_string(),
        })
    }
}
