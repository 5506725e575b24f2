//! Identity directory client
//!
//! User profiles are owned by an external identity provider. The post
//! service only needs one call from it: fetch a batch of users by id.

use crate::config::IdentityConfig;
use crate::error::{AppError, Result};
use crate::models::UserRecord;
use async_trait::async_trait;
use reqwest::Client;

/// Batched user lookup against the identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Fetch at most `limit` users whose id is in `user_ids`.
    async fn get_user_list(&self, user_ids: &[String], limit: usize) -> Result<Vec<UserRecord>>;
}

/// HTTP client for a Clerk-compatible `/v1/users` endpoint.
pub struct HttpIdentityClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl HttpIdentityClient {
    pub fn new(base_url: &str, secret_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    pub fn from_config(config: &IdentityConfig) -> Self {
        Self::new(&config.base_url, &config.secret_key)
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn get_user_list(&self, user_ids: &[String], limit: usize) -> Result<Vec<UserRecord>> {
        let url = format!("{}/v1/users", self.base_url);

        let mut query: Vec<(&str, String)> = user_ids
            .iter()
            .map(|id| ("user_id", id.clone()))
            .collect();
        query.push(("limit", limit.to_string()));

        tracing::debug!(count = user_ids.len(), limit, "fetching user list");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::IdentityService(format!(
                "user list request failed with {}: {}",
                status, body
            )));
        }

        let users = response.json::<Vec<UserRecord>>().await.map_err(|e| {
            AppError::IdentityService(format!("failed to decode user list: {}", e))
        })?;

        Ok(users)
    }
}
