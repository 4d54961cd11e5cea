use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use super::ThreatFinding;

/// Repository metadata supplied by the skill host.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryInfo {
    pub stars: u32,
    pub forks: u32,
}

/// Author account metadata supplied by the skill host.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    pub created_at: DateTime<Utc>,
    pub public_repos: u32,
    pub followers: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInfo {
    pub username: String,
    pub account_age_days: i64,
    pub total_repos: u32,
    pub total_skills: u32,
    pub followers: u32,
}

/// The terminal artifact of one analysis. Constructed once, never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub locator: String,
    pub owner: String,
    pub repo: String,
    pub trust_score: u8,
    pub summary: String,
    pub capabilities: BTreeSet<String>,
    pub threats: Vec<ThreatFinding>,
    pub author: AuthorInfo,
    pub raw_content: String,
    pub analyzed_at: DateTime<Utc>,
}
