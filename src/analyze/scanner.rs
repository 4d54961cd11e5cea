use std::collections::BTreeSet;

use super::patterns::{CAPABILITY_RULES, THREAT_RULES};
use crate::models::{Severity, ThreatCategory, ThreatFinding};

/// Content shorter than this counts as missing documentation.
const MIN_DOC_LEN: usize = 50;
/// Section marker expected in a well-structured skill document.
const SECTION_MARKER: &str = "##";

pub struct ScanOutcome {
    pub threats: Vec<ThreatFinding>,
    pub capabilities: BTreeSet<String>,
}

/// Apply both signature catalogs to the documentation blob.
///
/// Each threat rule contributes at most one finding no matter how often its
/// pattern occurs. Findings are emitted in catalog order, followed by the two
/// structural checks.
pub fn scan_content(content: &str) -> ScanOutcome {
    let mut threats = Vec::new();

    for rule in THREAT_RULES.iter() {
        if rule.pattern.is_match(content) {
            threats.push(ThreatFinding::new(rule.severity, rule.category, rule.description));
        }
    }

    if content.len() < MIN_DOC_LEN {
        threats.push(ThreatFinding::new(
            Severity::High,
            ThreatCategory::MissingDocs,
            "Missing or minimal SKILL.md documentation",
        ));
    }

    if !content.is_empty() && !content.contains(SECTION_MARKER) {
        threats.push(ThreatFinding::new(
            Severity::Medium,
            ThreatCategory::PoorStructure,
            "SKILL.md lacks proper structure/sections",
        ));
    }

    let mut capabilities = BTreeSet::new();
    for rule in CAPABILITY_RULES.iter() {
        if rule.pattern.is_match(content) {
            capabilities.insert(rule.capability.to_string());
        }
    }

    ScanOutcome { threats, capabilities }
}
