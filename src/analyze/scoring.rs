use crate::models::{Severity, ThreatFinding};

/// Inputs to the trust computation. Metadata comes from the skill host,
/// threats from the content scanner.
pub struct TrustFactors<'a> {
    pub author_age_days: i64,
    pub repo_stars: u32,
    pub repo_forks: u32,
    pub has_docs: bool,
    pub docs_length: usize,
    pub threats: &'a [ThreatFinding],
    pub author_followers: u32,
    pub author_public_repos: u32,
}

/// Compute the 0-100 trust score.
///
/// Starts from a neutral baseline of 50 and applies each factor rule
/// independently; the bonuses are not mutually exclusive. The sum is clamped,
/// so heavy penalties saturate at 0 rather than going negative.
pub fn trust_score(factors: &TrustFactors) -> u8 {
    let mut score: i64 = 50;

    // Author account age (max +10)
    if factors.author_age_days > 365 {
        score += 10;
    } else if factors.author_age_days > 180 {
        score += 5;
    } else if factors.author_age_days < 30 {
        score -= 15;
    }

    // Repository popularity (max +15)
    if factors.repo_stars > 100 {
        score += 10;
    } else if factors.repo_stars > 10 {
        score += 5;
    }
    if factors.repo_forks > 20 {
        score += 5;
    }

    // Documentation (max +15)
    if factors.has_docs && factors.docs_length > 500 {
        score += 15;
    } else if factors.has_docs && factors.docs_length > 200 {
        score += 10;
    } else if !factors.has_docs {
        score -= 20;
    }

    // Author reputation (max +10)
    if factors.author_followers > 100 {
        score += 5;
    }
    if factors.author_public_repos > 20 {
        score += 5;
    }

    // Threat penalties stack per finding
    for threat in factors.threats {
        score -= severity_penalty(threat.severity);
    }

    score.clamp(0, 100) as u8
}

fn severity_penalty(severity: Severity) -> i64 {
    match severity {
        Severity::Critical => 30,
        Severity::High => 15,
        Severity::Medium => 5,
        Severity::Low => 2,
    }
}
