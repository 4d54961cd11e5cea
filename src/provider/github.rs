use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{ProviderError, SkillHost};
use crate::models::{AccountInfo, RepositoryInfo};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
/// Raw media type returns file bodies as plain text instead of base64 JSON.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct RepoResponse {
    stargazers_count: u32,
    forks_count: u32,
}

#[derive(Deserialize)]
struct UserResponse {
    created_at: DateTime<Utc>,
    public_repos: u32,
    followers: u32,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_API_BASE, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("skillsafe/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            token,
        }
    }

    async fn get(&self, path: &str, accept: &str) -> Result<reqwest::Response, ProviderError> {
        let mut request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("Accept", accept);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            reqwest::StatusCode::NOT_FOUND => Err(ProviderError::NotFound),
            status => Err(ProviderError::Status(status)),
        }
    }
}

#[async_trait]
impl SkillHost for GithubClient {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo, ProviderError> {
        tracing::debug!(owner, repo, "fetching repository metadata");
        let body: RepoResponse = self
            .get(&format!("/repos/{owner}/{repo}"), JSON_MEDIA_TYPE)
            .await?
            .json()
            .await?;

        Ok(RepositoryInfo {
            stars: body.stargazers_count,
            forks: body.forks_count,
        })
    }

    async fn get_file_content(&self, owner: &str, repo: &str, path: &str) -> Result<String, ProviderError> {
        tracing::debug!(owner, repo, path, "fetching file content");
        let response = self
            .get(&format!("/repos/{owner}/{repo}/contents/{path}"), RAW_MEDIA_TYPE)
            .await?;

        Ok(response.text().await?)
    }

    async fn get_user(&self, username: &str) -> Result<AccountInfo, ProviderError> {
        tracing::debug!(username, "fetching author metadata");
        let body: UserResponse = self
            .get(&format!("/users/{username}"), JSON_MEDIA_TYPE)
            .await?
            .json()
            .await?;

        Ok(AccountInfo {
            created_at: body.created_at,
            public_repos: body.public_repos,
            followers: body.followers,
        })
    }
}
