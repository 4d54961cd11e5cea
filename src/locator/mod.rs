use once_cell::sync::Lazy;
use regex::Regex;

static HOST_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/([^/]+)/([^/]+)").unwrap());
static MARKETPLACE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)clawhub\.com/skills/([^/]+)/([^/]+)").unwrap());
static SHORTHAND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^/]+)/([^/]+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLocator {
    pub owner: String,
    pub repo: String,
}

/// Resolve a user-supplied skill reference into owner and repository name.
///
/// Recognition rules are tried in order: GitHub URL, ClawHub marketplace URL,
/// bare `owner/repo` shorthand. A trailing `.git` on the repository name is
/// stripped.
pub fn parse_locator(input: &str) -> Option<SkillLocator> {
    for re in [&*HOST_URL_RE, &*MARKETPLACE_URL_RE, &*SHORTHAND_RE] {
        if let Some(caps) = re.captures(input) {
            let repo = caps[2].strip_suffix(".git").unwrap_or(&caps[2]);
            return Some(SkillLocator {
                owner: caps[1].to_string(),
                repo: repo.to_string(),
            });
        }
    }
    None
}
