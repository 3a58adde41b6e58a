mod common;

use std::time::Duration;

use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use portfolio_render::config::Endpoints;
use portfolio_render::infrastructure::api::{ApiClient, HttpPortfolioRepository};
use portfolio_render::prelude::*;

fn repository(base_url: &str) -> HttpPortfolioRepository {
    HttpPortfolioRepository::new(
        ApiClient::new(base_url).unwrap(),
        Endpoints::default(),
        Duration::from_millis(10),
        Locale::En,
    )
}

#[tokio::test]
async fn test_fetches_personal_info() {
    let base_url = common::spawn_api(common::fixture_api()).await;

    let info = repository(&base_url).get_personal_info().await.unwrap();

    assert_eq!(info.full_name(), Some("Ada Lovelace"));
    assert_eq!(info.linked_in_url(), Some("https://linkedin.com/in/ada"));
    assert_eq!(info.git_hub_url(), None);
}

#[tokio::test]
async fn test_unwraps_lists_in_api_order() {
    let base_url = common::spawn_api(common::fixture_api()).await;
    let repo = repository(&base_url);

    let experiences = repo.get_experiences().await.unwrap();
    let positions: Vec<_> = experiences.iter().filter_map(Experience::position).collect();
    assert_eq!(positions, vec!["Staff Engineer", "Engineer"]);
    assert!(experiences[0].end_date().is_none());

    let skills = repo.get_skills().await.unwrap();
    let levels: Vec<i64> = skills.iter().map(Skill::level).collect();
    assert_eq!(levels, vec![5, 2, 3]);
}

#[tokio::test]
async fn test_missing_wrapper_key_yields_empty_list() {
    let base_url = common::spawn_api(common::fixture_api()).await;

    let education = repository(&base_url).get_education().await.unwrap();

    assert!(education.is_empty());
}

#[tokio::test]
async fn test_project_limit_is_forwarded() {
    let base_url = common::spawn_api(common::fixture_api()).await;
    let repo = repository(&base_url);

    assert_eq!(repo.get_projects(None).await.unwrap().len(), 3);
    assert_eq!(repo.get_projects(Some(2)).await.unwrap().len(), 2);
    assert_eq!(repo.get_projects(Some(0)).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_skills_by_category_encodes_segment() {
    let base_url = common::spawn_api(common::fixture_api()).await;

    let skills = repository(&base_url)
        .get_skills_by_category("Cloud Native")
        .await
        .unwrap();

    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].category(), Some("Cloud Native"));
}

#[tokio::test]
async fn test_server_error_becomes_status_error() {
    let base_url = common::spawn_api(common::failing_api()).await;

    let err = repository(&base_url).get_skills().await.unwrap_err();

    match err {
        ClientError::Status { path, status } => {
            assert_eq!(path, "/skill");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_resource_is_status_error() {
    let base_url = common::spawn_api(common::fixture_api()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let err = client.get("/missing").await.unwrap_err();

    assert!(matches!(err, ClientError::Status { .. }));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_unreachable_api_is_network_error() {
    // Bind and drop a listener to get a port nobody serves.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}/api")).unwrap();
    let err = client.get("/skill").await.unwrap_err();

    assert!(matches!(err, ClientError::Network { .. }));
    assert_eq!(err.path(), "/skill");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let echo = Router::new().route(
        "/api/echo",
        post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }),
    );
    let base_url = common::spawn_api(echo).await;
    let client = ApiClient::new(&base_url).unwrap();

    let reply = client
        .post("/echo", &json!({ "name": "Ada" }))
        .await
        .unwrap();

    assert_eq!(reply["received"]["name"], "Ada");
}

#[tokio::test]
async fn test_contact_stub_always_succeeds() {
    let repo = repository("http://127.0.0.1:9/api");

    let result = repo
        .send_contact_form(ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        })
        .await
        .unwrap();

    assert!(result.success);
}

/// Echoes every `Content-Type` value the request carried.
async fn content_types(headers: HeaderMap) -> Json<Value> {
    let values: Vec<String> = headers
        .get_all(CONTENT_TYPE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect();
    Json(json!({ "values": values }))
}

#[tokio::test]
async fn test_requests_carry_a_single_json_content_type() {
    let echo = Router::new().route("/api/headers", get(content_types).post(content_types));
    let base_url = common::spawn_api(echo).await;
    let client = ApiClient::new(&base_url).unwrap();

    let on_get = client.get("/headers").await.unwrap();
    let on_post = client
        .post("/headers", &json!({ "name": "Ada" }))
        .await
        .unwrap();

    assert_eq!(on_get["values"], json!(["application/json"]));
    assert_eq!(on_post["values"], json!(["application/json"]));
}
