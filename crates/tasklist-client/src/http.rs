//! HTTP client for the task service REST endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tracing::debug;

use tasklist_core::{NewTask, Task, TaskId, TaskPatch};

use crate::api::TaskApi;
use crate::error::ClientError;

/// HTTP client for the `/tasks` REST API.
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client with reqwest's default settings.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are issued against (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx response to `ClientError::Status`.
    fn check(
        response: Response,
        method: &'static str,
        path: &str,
    ) -> Result<Response, ClientError> {
        let status: StatusCode = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                method,
                path: path.to_string(),
            })
        }
    }
}

/// Ids are opaque, so the segment is percent-encoded.
fn task_path(id: &TaskId) -> String {
    format!("/tasks/{}", urlencoding::encode(id.as_str()))
}

#[async_trait]
impl TaskApi for HttpClient {
    async fn list(&self) -> Result<Vec<Task>, ClientError> {
        let path = "/tasks";
        debug!(url = %self.url(path), "GET request");

        let response = self.inner.get(self.url(path)).send().await?;
        let response = Self::check(response, "GET", path)?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }

    async fn create(&self, task: &NewTask) -> Result<(), ClientError> {
        let path = "/tasks";
        debug!(url = %self.url(path), title = %task.title, "POST request");

        let response = self.inner.post(self.url(path)).json(task).send().await?;
        Self::check(response, "POST", path)?;
        Ok(())
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), ClientError> {
        let path = task_path(id);
        debug!(url = %self.url(&path), ?patch, "PUT request");

        let response = self.inner.put(self.url(&path)).json(patch).send().await?;
        Self::check(response, "PUT", &path)?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), ClientError> {
        let path = task_path(id);
        debug!(url = %self.url(&path), "DELETE request");

        let response = self.inner.delete(self.url(&path)).send().await?;
        Self::check(response, "DELETE", &path)?;
        Ok(())
    }
}
