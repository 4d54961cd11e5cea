// Signature catalogs - static rule data consumed by the content scanner

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Severity, ThreatCategory};

pub struct ThreatRule {
    pub pattern: Regex,
    pub category: ThreatCategory,
    pub severity: Severity,
    pub description: &'static str,
}

pub struct CapabilityRule {
    pub pattern: Regex,
    pub capability: &'static str,
}

fn threat(
    pattern: &str,
    category: ThreatCategory,
    severity: Severity,
    description: &'static str,
) -> ThreatRule {
    ThreatRule {
        pattern: Regex::new(pattern).unwrap(),
        category,
        severity,
        description,
    }
}

/// Suspicious constructs checked against the whole document. Each rule
/// produces at most one finding per scan; order is the report order.
pub static THREAT_RULES: Lazy<Vec<ThreatRule>> = Lazy::new(|| {
    use Severity::*;
    use ThreatCategory::*;
    vec![
        threat(r"(?i)curl\s+.*\|\s*sh", PipeToShell, Critical, "Pipes remote content directly to shell"),
        threat(r"(?i)curl\s+.*\|\s*bash", PipeToShell, Critical, "Pipes remote content directly to bash"),
        threat(r"(?i)wget.*\|\s*sh", PipeToShell, Critical, "Pipes remote content directly to shell"),
        threat(r"(?i)pastebin\.com", Pastebin, High, "References pastebin (common malware host)"),
        threat(r"(?i)eval\s*\(", Eval, High, "Uses eval() which can execute arbitrary code"),
        threat(r"(?i)base64\s+(-d|--decode)", Base64Decode, High, "Decodes base64 (often used to hide payloads)"),
        threat(r"(?i)\.ssh/", SshAccess, High, "Accesses SSH directory"),
        threat(r"(?i)/etc/passwd", PasswdAccess, Critical, "Accesses system password file"),
        threat(r"(?i)/etc/shadow", ShadowAccess, Critical, "Accesses system shadow file"),
        threat(r"(?i)keychain|keyring", KeychainAccess, High, "Accesses system keychain"),
        threat(r"(?i)OPENAI_API_KEY|ANTHROPIC_API_KEY|API_KEY", ApiKeyRef, Medium, "References API keys"),
        threat(r"(?i)nc\s+-l|netcat", Netcat, Critical, "Uses netcat (potential reverse shell)"),
        threat(r"(?i)/dev/tcp/", TcpRedirect, Critical, "Uses /dev/tcp (bash network redirect)"),
        threat(r"(?i)chmod\s+\+x", ChmodExec, Medium, "Makes files executable"),
        threat(r"(?i)rm\s+-rf\s+/", DestructiveRm, Critical, "Recursive delete from root"),
        threat(r"(?i)cryptocurrency|bitcoin|ethereum|wallet", CryptoRef, Medium, "References cryptocurrency"),
    ]
});

/// Keyword families mapped to capability labels.
pub static CAPABILITY_RULES: Lazy<Vec<CapabilityRule>> = Lazy::new(|| {
    [
        (r"(?i)exec|shell|command|subprocess", "Shell Access"),
        (r"(?i)file|read|write|fs\.", "File System Access"),
        (r"(?i)http|fetch|request|axios", "Network Requests"),
        (r"(?i)browser|puppeteer|playwright", "Browser Control"),
        (r"(?i)email|smtp|sendmail", "Email Access"),
        (r"(?i)database|sql|mongo|redis", "Database Access"),
        (r"(?i)env|environment|process\.env", "Environment Variables"),
        (r"(?i)cron|schedule|timer", "Scheduled Tasks"),
    ]
    .into_iter()
    .map(|(pattern, capability)| CapabilityRule {
        pattern: Regex::new(pattern).unwrap(),
        capability,
    })
    .collect()
});
