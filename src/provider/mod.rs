pub mod github;

pub use github::GithubClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AccountInfo, RepositoryInfo};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("resource not found")]
    NotFound,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(reqwest::StatusCode),
}

/// Narrow interface to the platform hosting skill repositories.
///
/// The analysis engine only ever consumes these three operations; stub
/// implementations make the whole pipeline deterministic under test.
#[async_trait]
pub trait SkillHost: Send + Sync {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo, ProviderError>;

    async fn get_file_content(&self, owner: &str, repo: &str, path: &str) -> Result<String, ProviderError>;

    async fn get_user(&self, username: &str) -> Result<AccountInfo, ProviderError>;
}
