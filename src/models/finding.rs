use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatCategory {
    PipeToShell,
    Pastebin,
    Eval,
    Base64Decode,
    SshAccess,
    PasswdAccess,
    ShadowAccess,
    KeychainAccess,
    ApiKeyRef,
    Netcat,
    TcpRedirect,
    ChmodExec,
    DestructiveRm,
    CryptoRef,
    MissingDocs,
    PoorStructure,
}

impl ThreatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatCategory::PipeToShell => "pipe_to_shell",
            ThreatCategory::Pastebin => "pastebin",
            ThreatCategory::Eval => "eval",
            ThreatCategory::Base64Decode => "base64_decode",
            ThreatCategory::SshAccess => "ssh_access",
            ThreatCategory::PasswdAccess => "passwd_access",
            ThreatCategory::ShadowAccess => "shadow_access",
            ThreatCategory::KeychainAccess => "keychain_access",
            ThreatCategory::ApiKeyRef => "api_key_ref",
            ThreatCategory::Netcat => "netcat",
            ThreatCategory::TcpRedirect => "tcp_redirect",
            ThreatCategory::ChmodExec => "chmod_exec",
            ThreatCategory::DestructiveRm => "destructive_rm",
            ThreatCategory::CryptoRef => "crypto_ref",
            ThreatCategory::MissingDocs => "missing_docs",
            ThreatCategory::PoorStructure => "poor_structure",
        }
    }
}

/// A single detected risk indicator tied to one catalog rule.
#[derive(Debug, Clone, Serialize)]
pub struct ThreatFinding {
    pub severity: Severity,
    pub category: ThreatCategory,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ThreatFinding {
    pub fn new(severity: Severity, category: ThreatCategory, description: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            description: description.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}
