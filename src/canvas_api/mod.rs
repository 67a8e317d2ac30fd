//! Read-only Canvas REST client
//!
//! Two calls are all the picker needs: list active courses and list the
//! assignments of one course. Both send the bearer token, both fail hard.
//! Pagination is not followed; only the first page Canvas returns is used.

mod errors;
mod types;

pub use errors::{ApiError, ApiResult};
pub use types::{Assignment, Course};

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::CanvasConfig;
use crate::utils::constants::{ASSIGNMENT_QUERY, COURSES_PATH, COURSE_QUERY, USER_AGENT};

/// Longest error body echoed back in `ApiError::Status`
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Thin wrapper around a `reqwest::Client` bound to one Canvas instance
#[derive(Debug, Clone)]
pub struct CanvasClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl CanvasClient {
    /// Build a client for the instance described by `config`
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed (TLS backend
    /// initialization).
    pub fn new(config: &CanvasConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ApiError::Request {
                url: config.base_url().to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            access_token: config.access_token().to_string(),
        })
    }

    /// `GET /api/v1/courses?enrollment_state=active`
    pub async fn list_active_courses(&self) -> ApiResult<Vec<Course>> {
        let url = self.endpoint(COURSES_PATH)?;
        self.get_json(url, &COURSE_QUERY).await
    }

    /// `GET /api/v1/courses/{course_id}/assignments?include[]=all_dates`
    pub async fn list_assignments(&self, course_id: u64) -> ApiResult<Vec<Assignment>> {
        let url = self.endpoint(&format!("{COURSES_PATH}/{course_id}/assignments"))?;
        self.get_json(url, &ASSIGNMENT_QUERY).await
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url_string = url.to_string();
        log::debug!("GET {url_string} {query:?}");

        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url_string.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Request {
            url: url_string.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url: url_string,
                status,
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        log::debug!("GET {url_string} -> {status} ({} bytes)", body.len());

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url_string,
            source,
        })
    }
}
