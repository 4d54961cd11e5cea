use crate::models::{Severity, ThreatFinding};

pub const NO_DOCS_SUMMARY: &str =
    "This skill has no SKILL.md documentation, making it impossible to verify its purpose.";

const SUMMARY_MAX_CHARS: usize = 200;

/// Produce the one-line explanation shown alongside the score.
///
/// Severity drives the message: critical findings win over high findings,
/// which win over the document's own first paragraph.
pub fn summarize(content: &str, threats: &[ThreatFinding]) -> String {
    if content.is_empty() {
        return NO_DOCS_SUMMARY.to_string();
    }

    let critical = count_severity(threats, Severity::Critical);
    if critical > 0 {
        return format!(
            "⚠️ DANGER: This skill contains {critical} critical security issue(s). Do not install without thorough review."
        );
    }

    let high = count_severity(threats, Severity::High);
    if high > 0 {
        return format!(
            "⚠️ WARNING: This skill contains {high} high-severity concern(s). Review carefully before installing."
        );
    }

    let first_para = content.split("\n\n").next().unwrap_or("");
    let body = strip_leading_heading(first_para).trim();

    if body.chars().count() > SUMMARY_MAX_CHARS {
        let truncated: String = body.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}

fn count_severity(threats: &[ThreatFinding], severity: Severity) -> usize {
    threats.iter().filter(|t| t.severity == severity).count()
}

/// Drop a single leading `# Heading` line, if the paragraph starts with one.
fn strip_leading_heading(paragraph: &str) -> &str {
    if paragraph.starts_with('#')
        && let Some(idx) = paragraph.find('\n')
    {
        &paragraph[idx + 1..]
    } else {
        paragraph
    }
}
