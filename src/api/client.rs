//! HTTP gateway to the EventHive backend
//!
//! Thin reqwest wrapper issuing authenticated and unauthenticated JSON
//! calls against the configured base URL. Attaches the bearer token when
//! one is supplied and translates HTTP statuses into the crate error
//! taxonomy, extracting the backend's `{"detail": ...}` error payloads.

use std::time::Duration;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;
use crate::config::ApiConfig;
use crate::utils::errors::{EventHiveError, Result};

/// Error payload shape returned by the backend on failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn detail_string(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

/// Gateway client for the EventHive REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self { http, base_url })
    }

    /// Issue a GET request and deserialize the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        token: Option<&str>,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "GET request");
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(Self::authorize(request, token)).await?;
        Ok(response.json().await?)
    }

    /// Issue a POST request with a JSON body and deserialize the response
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
        token: Option<&str>,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "POST request");
        let request = self.http.post(url).json(body);
        let response = self.execute(Self::authorize(request, token)).await?;
        Ok(response.json().await?)
    }

    /// Issue a PUT request with a JSON body and deserialize the response
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
        token: Option<&str>,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "PUT request");
        let request = self.http.put(url).json(body);
        let response = self.execute(Self::authorize(request, token)).await?;
        Ok(response.json().await?)
    }

    /// Issue a DELETE request, discarding any response body
    pub async fn delete(&self, segments: &[&str], token: Option<&str>) -> Result<()> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, "DELETE request");
        let request = self.http.delete(url);
        self.execute(Self::authorize(request, token)).await?;
        Ok(())
    }

    /// Build a full endpoint URL from path segments
    ///
    /// Segments are appended to the configured base URL so a base of
    /// `http://host/api` keeps its `/api` prefix.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|_| {
                EventHiveError::Config(format!("API base URL cannot be a base: {}", self.base_url))
            })?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send the request and translate failure statuses into crate errors
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let detail = Self::error_detail(response).await;
        warn!(status = status.as_u16(), detail = %detail, "API request failed");
        Err(Self::status_error(status, detail))
    }

    /// Map an HTTP failure status onto the error taxonomy
    ///
    /// The backend signals duplicate-resource rejections as 400 with a
    /// detail message; its schema validation uses 422.
    fn status_error(status: StatusCode, detail: String) -> EventHiveError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => EventHiveError::Auth(detail),
            StatusCode::NOT_FOUND => EventHiveError::NotFound(detail),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => EventHiveError::Conflict(detail),
            StatusCode::UNPROCESSABLE_ENTITY => EventHiveError::Validation(detail),
            _ => EventHiveError::Api {
                status: status.as_u16(),
                detail,
            },
        }
    }

    async fn error_detail(response: Response) -> String {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => body
                .detail_string()
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        }
    }
}
