//! reqwest-backed implementation of the remote user API

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};

use crate::domain::user::{User, UserApi, UserId};
use crate::domain::DomainError;

/// HTTP client for the `/users` REST endpoints
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: String,
}

impl HttpUserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

async fn ensure_success(operation: &str, response: Response) -> Result<Response, DomainError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Err(DomainError::remote(
        operation,
        format!("HTTP {}: {}", status, body),
    ))
}

/// Decode a single-record body; `null`, `{}` and unreadable records carry no user
fn decode_user(body: serde_json::Value) -> Option<User> {
    match &body {
        serde_json::Value::Null => return None,
        serde_json::Value::Object(map) if map.is_empty() => return None,
        _ => {}
    }

    match serde_json::from_value(body) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Ignoring unreadable user payload: {}", e);
            None
        }
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let response = self
            .client
            .get(self.users_url())
            .send()
            .await
            .map_err(|e| DomainError::remote("list_users", format!("Request failed: {}", e)))?;

        let users: Vec<User> = ensure_success("list_users", response)
            .await?
            .json()
            .await
            .map_err(|e| {
                DomainError::remote("list_users", format!("Failed to parse response: {}", e))
            })?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn get_user(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let response = self
            .client
            .get(self.user_url(id))
            .send()
            .await
            .map_err(|e| DomainError::remote("get_user", format!("Request failed: {}", e)))?;

        let body: serde_json::Value = ensure_success("get_user", response)
            .await?
            .json()
            .await
            .map_err(|e| {
                DomainError::remote("get_user", format!("Failed to parse response: {}", e))
            })?;

        Ok(decode_user(body))
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn delete_user(&self, id: UserId) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.user_url(id))
            .send()
            .await
            .map_err(|e| DomainError::remote("delete_user", format!("Request failed: {}", e)))?;

        ensure_success("delete_user", response).await?;
        debug!("Deleted user");
        Ok(())
    }
}
