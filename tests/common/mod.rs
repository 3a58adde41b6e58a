#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use portfolio_render::config::Config;
use portfolio_render::prelude::*;
use portfolio_render::web;

/// Repository returning canned records; selected resources can be made to fail.
#[derive(Default)]
pub struct FakeRepository {
    failing: HashSet<&'static str>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given resources fail with a 500.
    ///
    /// Names: `personalinfo`, `experience`, `skill`, `education`, `project`, `contact`.
    pub fn failing(resources: &[&'static str]) -> Self {
        Self {
            failing: resources.iter().copied().collect(),
        }
    }

    fn check(&self, resource: &'static str) -> Result<(), ClientError> {
        if self.failing.contains(resource) {
            Err(ClientError::Status {
                path: format!("/{resource}"),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PortfolioRepository for FakeRepository {
    async fn get_personal_info(&self) -> Result<PersonalInfo, ClientError> {
        self.check("personalinfo")?;
        Ok(PersonalInfo {
            full_name: Some("Ada Lovelace".to_string()),
            title: Some("Backend Engineer".to_string()),
            email: Some("ada@example.com".to_string()),
            git_hub_url: Some("https://github.com/ada".to_string()),
            ..PersonalInfo::default()
        })
    }

    async fn get_experiences(&self) -> Result<Vec<Experience>, ClientError> {
        self.check("experience")?;
        Ok(vec![Experience {
            position: Some("Staff Engineer".to_string()),
            company: Some("Analytical Engines".to_string()),
            start_date: Some("2021-06-01".to_string()),
            is_current_job: Some(true),
            ..Experience::default()
        }])
    }

    async fn get_skills(&self) -> Result<Vec<Skill>, ClientError> {
        self.check("skill")?;
        Ok(vec![Skill {
            name: Some("Rust".to_string()),
            category: Some("Backend".to_string()),
            level: Some(4.0),
        }])
    }

    async fn get_skills_by_category(&self, category: &str) -> Result<Vec<Skill>, ClientError> {
        self.check("skill")?;
        Ok(vec![Skill {
            name: Some("Rust".to_string()),
            category: Some(category.to_string()),
            level: Some(4.0),
        }])
    }

    async fn get_education(&self) -> Result<Vec<Education>, ClientError> {
        self.check("education")?;
        Ok(vec![])
    }

    async fn get_projects(&self, _limit: Option<u32>) -> Result<Vec<Project>, ClientError> {
        self.check("project")?;
        Ok(vec![Project {
            title: Some("Difference Engine".to_string()),
            technologies: Some("Rust, Axum".to_string()),
            ..Project::default()
        }])
    }

    async fn send_contact_form(
        &self,
        _submission: ContactSubmission,
    ) -> Result<ContactResult, ClientError> {
        self.check("contact")?;
        Ok(ContactResult {
            success: true,
            message: "Message sent successfully".to_string(),
        })
    }
}

/// Configuration used by handler tests: English strings, no delays.
pub fn test_config() -> Config {
    Config {
        locale: Locale::En,
        contact_delay: Duration::ZERO,
        notification_ttl: Duration::from_millis(5000),
        ..Config::default()
    }
}

pub fn create_test_state(repository: impl PortfolioRepository + 'static) -> AppState {
    AppState::new(Arc::new(repository), Arc::new(test_config()))
}

/// Router with the public routes, without middleware.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .with_state(state)
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/api")
}

#[derive(Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

/// Fake portfolio API answering with fixture payloads under `/api`.
///
/// `/education` deliberately omits its wrapper key.
pub fn fixture_api() -> Router {
    let api = Router::new()
        .route(
            "/personalinfo",
            get(|| async {
                Json(json!({
                    "fullName": "Ada Lovelace",
                    "title": "Backend Engineer",
                    "bio": "Writes programs for engines.",
                    "email": "ada@example.com",
                    "linkedInUrl": "https://linkedin.com/in/ada",
                    "gitHubUrl": "",
                }))
            }),
        )
        .route(
            "/experience",
            get(|| async {
                Json(json!({
                    "experiences": [
                        {
                            "position": "Staff Engineer",
                            "company": "Analytical Engines",
                            "startDate": "2021-06-01T00:00:00",
                            "isCurrentJob": true
                        },
                        {
                            "position": "Engineer",
                            "company": "Babbage & Co",
                            "startDate": "2018-01-15",
                            "endDate": "2021-05-31",
                            "isCurrentJob": false,
                            "location": "London"
                        }
                    ]
                }))
            }),
        )
        .route(
            "/skill",
            get(|| async {
                Json(json!({
                    "skills": [
                        { "name": "Rust", "category": "Backend", "level": 5 },
                        { "name": "CSS", "category": "Frontend", "level": "2" },
                        { "name": "SQL", "category": "Backend", "level": 3.0 }
                    ]
                }))
            }),
        )
        .route(
            "/skill/category/{category}",
            get(|Path(category): Path<String>| async move {
                Json(json!({ "skills": [{ "name": "Rust", "category": category, "level": 5 }] }))
            }),
        )
        .route("/education", get(|| async { Json(json!({})) }))
        .route(
            "/project",
            get(|Query(query): Query<LimitQuery>| async move {
                let all: Vec<Value> = (1..=3)
                    .map(|n| {
                        json!({
                            "title": format!("Project {n}"),
                            "technologies": "Rust, Axum",
                            "gitHubUrl": format!("https://github.com/ada/project-{n}")
                        })
                    })
                    .collect();
                let projects: Vec<Value> = all.into_iter().take(query.limit.unwrap_or(3)).collect();
                Json(json!({ "projects": projects }))
            }),
        );

    Router::new().nest("/api", api)
}

/// Fake portfolio API where every resource answers 500.
pub fn failing_api() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") })
}
