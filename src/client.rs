use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{IssuesError, Result};
use crate::request::GraphQLRequest;

pub const API_ENDPOINT: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!("gh-issues/", env!("CARGO_PKG_VERSION"));

/// Sends one GraphQL request and hands back the decoded body untouched.
///
/// Implementations perform exactly one call per `execute` and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &GraphQLRequest) -> Result<serde_json::Value>;
}

pub struct GitHubClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String, endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl Transport for GitHubClient {
    async fn execute(&self, request: &GraphQLRequest) -> Result<serde_json::Value> {
        debug!(endpoint = %self.endpoint, variables = %request.variables, "Sending GraphQL request");

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IssuesError::ApiError {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body: serde_json::Value = response.json().await?;
        debug!(status = status.as_u16(), "GraphQL response received");

        Ok(body)
    }
}
