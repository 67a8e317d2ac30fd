//! Test utilities shared by the integration tests

use canvas_assignment_md::CanvasConfig;
use mockito::{Matcher, Mock, Server};
use std::path::Path;
use tempfile::TempDir;

pub const TOKEN: &str = "test-token-123";

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> anyhow::Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Config pointing at a mock server, writing into `output_dir`
#[allow(dead_code)]
pub fn test_config(base_url: &str, output_dir: &Path) -> CanvasConfig {
    CanvasConfig::builder()
        .base_url(base_url)
        .access_token(TOKEN)
        .output_dir(output_dir)
        .time_zone("America/New_York")
        .build()
        .expect("test config is valid")
}

/// Course list as Canvas returns it, including a hidden and a locked course
#[allow(dead_code)]
pub fn courses_json() -> String {
    r#"[
        {"id": 101, "name": "Linear Algebra", "course_code": "MATH 221"},
        {"id": 102, "access_restricted_by_date": true},
        {"id": 103}
    ]"#
    .to_string()
}

/// Assignment list for course 101
#[allow(dead_code)]
pub fn assignments_json(base_url: &str) -> String {
    let description = format!(
        r#"<h2>Problem Set 3</h2><p>Show that <img class="equation_image" title="x^2+y^2=z^2" src="/equation_images/x" alt="LaTeX: x^2+y^2=z^2" data-equation-content="x^2+y^2=z^2"> has integer solutions.</p><p><img src="{base_url}/courses/101/files/9/preview" alt="figure"></p>"#
    );
    serde_json::json!([
        {
            "id": 5001,
            "name": "Problem Set 3",
            "due_at": "2024-03-15T23:59:00Z",
            "description": description,
        },
        {
            "id": 5002,
            "name": "Reading",
            "due_at": null,
            "description": null,
        }
    ])
    .to_string()
}

/// Mock for `GET /api/v1/courses?enrollment_state=active`
#[allow(dead_code)]
pub async fn mock_courses(server: &mut Server, body: &str) -> Mock {
    server
        .mock("GET", "/api/v1/courses")
        .match_query(Matcher::UrlEncoded(
            "enrollment_state".into(),
            "active".into(),
        ))
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Mock for `GET /api/v1/courses/{id}/assignments?include[]=all_dates`
#[allow(dead_code)]
pub async fn mock_assignments(server: &mut Server, course_id: u64, body: &str) -> Mock {
    server
        .mock("GET", format!("/api/v1/courses/{course_id}/assignments").as_str())
        .match_query(Matcher::UrlEncoded("include[]".into(), "all_dates".into()))
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(status)
        .with_body(r#"{"errors":[{"message":"Invalid access token."}]}"#)
        .create_async()
        .await
}
