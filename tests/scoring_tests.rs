use skillsafe::analyze::scoring::{TrustFactors, trust_score};
use skillsafe::models::{Severity, ThreatCategory, ThreatFinding};

fn factors(threats: &[ThreatFinding]) -> TrustFactors<'_> {
    TrustFactors {
        author_age_days: 100,
        repo_stars: 0,
        repo_forks: 0,
        has_docs: true,
        docs_length: 100,
        threats,
        author_followers: 0,
        author_public_repos: 0,
    }
}

fn finding(severity: Severity) -> ThreatFinding {
    ThreatFinding::new(severity, ThreatCategory::PipeToShell, "test finding")
}

#[test]
fn test_neutral_baseline() {
    assert_eq!(trust_score(&factors(&[])), 50);
}

#[test]
fn test_every_bonus_reaches_the_cap() {
    let score = trust_score(&TrustFactors {
        author_age_days: 400,
        repo_stars: 150,
        repo_forks: 25,
        has_docs: true,
        docs_length: 600,
        threats: &[],
        author_followers: 150,
        author_public_repos: 30,
    });

    // 50 + 10 + 10 + 5 + 15 + 5 + 5 = 100
    assert_eq!(score, 100);
}

#[test]
fn test_penalties_clamp_to_zero() {
    let threats = [finding(Severity::Critical)];
    let score = trust_score(&TrustFactors {
        author_age_days: 10,
        repo_stars: 0,
        repo_forks: 0,
        has_docs: false,
        docs_length: 0,
        threats: &threats,
        author_followers: 0,
        author_public_repos: 0,
    });

    // 50 - 15 - 20 - 30 = -15, clamped
    assert_eq!(score, 0);
}

#[test]
fn test_many_criticals_saturate_instead_of_wrapping() {
    let threats: Vec<ThreatFinding> = (0..50).map(|_| finding(Severity::Critical)).collect();

    assert_eq!(trust_score(&factors(&threats)), 0);
}

#[test]
fn test_severity_penalties() {
    let base = trust_score(&factors(&[]));

    let critical = [finding(Severity::Critical)];
    let high = [finding(Severity::High)];
    let medium = [finding(Severity::Medium)];
    let low = [finding(Severity::Low)];

    assert_eq!(trust_score(&factors(&critical)), base - 30);
    assert_eq!(trust_score(&factors(&high)), base - 15);
    assert_eq!(trust_score(&factors(&medium)), base - 5);
    assert_eq!(trust_score(&factors(&low)), base - 2);
}

#[test]
fn test_penalties_stack() {
    let threats = [finding(Severity::Medium), finding(Severity::Medium), finding(Severity::Low)];

    assert_eq!(trust_score(&factors(&threats)), 50 - 5 - 5 - 2);
}

#[test]
fn test_age_boundaries() {
    let mut f = factors(&[]);

    f.author_age_days = 366;
    assert_eq!(trust_score(&f), 60);
    f.author_age_days = 365;
    assert_eq!(trust_score(&f), 55);
    f.author_age_days = 181;
    assert_eq!(trust_score(&f), 55);
    f.author_age_days = 180;
    assert_eq!(trust_score(&f), 50);
    f.author_age_days = 30;
    assert_eq!(trust_score(&f), 50);
    f.author_age_days = 29;
    assert_eq!(trust_score(&f), 35);
}

#[test]
fn test_popularity_bonuses_are_independent() {
    let mut f = factors(&[]);

    f.repo_stars = 101;
    assert_eq!(trust_score(&f), 60);
    f.repo_stars = 100;
    assert_eq!(trust_score(&f), 55);
    f.repo_stars = 11;
    assert_eq!(trust_score(&f), 55);
    f.repo_stars = 10;
    assert_eq!(trust_score(&f), 50);

    // Forks add on top of the stars bonus rather than replacing it.
    f.repo_stars = 101;
    f.repo_forks = 21;
    assert_eq!(trust_score(&f), 65);
    f.repo_forks = 20;
    assert_eq!(trust_score(&f), 60);
}

#[test]
fn test_documentation_tiers() {
    let mut f = factors(&[]);

    f.docs_length = 501;
    assert_eq!(trust_score(&f), 65);
    f.docs_length = 500;
    assert_eq!(trust_score(&f), 60);
    f.docs_length = 201;
    assert_eq!(trust_score(&f), 60);
    f.docs_length = 200;
    assert_eq!(trust_score(&f), 50);

    f.has_docs = false;
    f.docs_length = 0;
    assert_eq!(trust_score(&f), 30);
}

#[test]
fn test_reputation_bonuses() {
    let mut f = factors(&[]);

    f.author_followers = 101;
    assert_eq!(trust_score(&f), 55);
    f.author_public_repos = 21;
    assert_eq!(trust_score(&f), 60);
}
