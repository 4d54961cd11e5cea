pub mod patterns;
pub mod scanner;
pub mod scoring;
pub mod summary;

use chrono::Utc;
use thiserror::Error;

use crate::locator::parse_locator;
use crate::models::{AnalysisReport, AuthorInfo};
use crate::provider::{ProviderError, SkillHost};
use self::scanner::scan_content;
use self::scoring::{TrustFactors, trust_score};
use self::summary::summarize;

/// Documentation file expected at the repository root.
pub const SKILL_FILE: &str = "SKILL.md";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unrecognized skill locator: {0}")]
    InvalidLocator(String),
    #[error("repository {owner}/{repo} not found")]
    RepositoryNotFound { owner: String, repo: String },
    #[error("failed to fetch repository {owner}/{repo}: {source}")]
    RepositoryAccess {
        owner: String,
        repo: String,
        #[source]
        source: ProviderError,
    },
    #[error("author account {0} not found")]
    AuthorNotFound(String),
    #[error("failed to fetch author {username}: {source}")]
    AuthorAccess {
        username: String,
        #[source]
        source: ProviderError,
    },
}

/// Run the full analysis pipeline for one skill locator.
///
/// Repository and author lookups are fatal when they fail; a missing
/// SKILL.md is not, it becomes empty content and scores as its own red flag.
pub async fn analyze_skill(locator: &str, host: &dyn SkillHost) -> Result<AnalysisReport, AnalysisError> {
    let parsed =
        parse_locator(locator).ok_or_else(|| AnalysisError::InvalidLocator(locator.to_string()))?;

    tracing::info!(owner = %parsed.owner, repo = %parsed.repo, "analyzing skill");

    // The three fetches are independent of each other; all must complete
    // before scoring.
    let (repo_result, content_result, user_result) = tokio::join!(
        host.get_repository(&parsed.owner, &parsed.repo),
        host.get_file_content(&parsed.owner, &parsed.repo, SKILL_FILE),
        host.get_user(&parsed.owner),
    );

    let repository = repo_result.map_err(|e| match e {
        ProviderError::NotFound => AnalysisError::RepositoryNotFound {
            owner: parsed.owner.clone(),
            repo: parsed.repo.clone(),
        },
        source => AnalysisError::RepositoryAccess {
            owner: parsed.owner.clone(),
            repo: parsed.repo.clone(),
            source,
        },
    })?;

    let content = match content_result {
        Ok(content) => content,
        Err(ProviderError::NotFound) => {
            tracing::debug!(owner = %parsed.owner, repo = %parsed.repo, "no SKILL.md in repository");
            String::new()
        }
        Err(source) => {
            return Err(AnalysisError::RepositoryAccess {
                owner: parsed.owner.clone(),
                repo: parsed.repo.clone(),
                source,
            });
        }
    };

    let account = user_result.map_err(|e| match e {
        ProviderError::NotFound => AnalysisError::AuthorNotFound(parsed.owner.clone()),
        source => AnalysisError::AuthorAccess {
            username: parsed.owner.clone(),
            source,
        },
    })?;

    let author_age_days = (Utc::now() - account.created_at).num_days().max(0);

    let scan = scan_content(&content);

    let score = trust_score(&TrustFactors {
        author_age_days,
        repo_stars: repository.stars,
        repo_forks: repository.forks,
        has_docs: !content.is_empty(),
        docs_length: content.len(),
        threats: &scan.threats,
        author_followers: account.followers,
        author_public_repos: account.public_repos,
    });

    let summary = summarize(&content, &scan.threats);

    Ok(AnalysisReport {
        locator: locator.to_string(),
        owner: parsed.owner.clone(),
        repo: parsed.repo,
        trust_score: score,
        summary,
        capabilities: scan.capabilities,
        threats: scan.threats,
        author: AuthorInfo {
            username: parsed.owner,
            account_age_days: author_age_days,
            total_repos: account.public_repos,
            // Counting the author's actual skill repositories would require
            // walking their whole repository list.
            total_skills: 0,
            followers: account.followers,
        },
        raw_content: content,
        analyzed_at: Utc::now(),
    })
}
