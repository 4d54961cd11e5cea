use colored::*;

use crate::models::{AnalysisReport, Severity, ThreatFinding};

pub fn print_report(report: &AnalysisReport) {
    print_header(report);
    print_summary(report);
    print_capabilities(report);
    print_threats(&report.threats);
    print_author(report);
}

fn print_header(report: &AnalysisReport) {
    println!("{}", "┌─────────────────────────────────────────────────────────────┐".bright_black());

    let skill = format!("{}/{}", report.owner, report.repo);
    println!("│  Skill: {:<52}│", skill.bold());

    let (verdict, note) = match report.trust_score {
        70..=100 => ("SAFE".green().bold(), "This skill appears relatively safe."),
        40..=69 => ("CAUTION".yellow().bold(), "Review with caution."),
        _ => ("RISKY".red().bold(), "High risk - do not install without thorough review."),
    };
    println!("│  Trust Score: {:>3}/100 {:<38}│", report.trust_score, verdict);
    println!("│  {:<59}│", note);

    println!("{}", "└─────────────────────────────────────────────────────────────┘".bright_black());
    println!();
}

fn print_summary(report: &AnalysisReport) {
    println!("{}", "── Summary ──────────────────────────────────────────────────".bright_black());

    for line in textwrap::wrap(&report.summary, 60) {
        println!("  {line}");
    }

    println!();
}

fn print_capabilities(report: &AnalysisReport) {
    if report.capabilities.is_empty() {
        return;
    }

    println!("{}", "── Detected Capabilities ────────────────────────────────────".bright_black());

    for capability in &report.capabilities {
        println!("  {} {}", "●".cyan(), capability);
    }

    println!();
}

fn print_threats(threats: &[ThreatFinding]) {
    if threats.is_empty() {
        return;
    }

    println!("{}", "── Red Flags ────────────────────────────────────────────────".bright_black());

    for threat in threats {
        print_threat(threat);
    }
}

fn print_threat(threat: &ThreatFinding) {
    let (icon, severity_colored) = match threat.severity {
        Severity::Critical => ("✖".red(), threat.severity.as_str().red().bold()),
        Severity::High => ("⚠".red(), threat.severity.as_str().red()),
        Severity::Medium => ("⚠".yellow(), threat.severity.as_str().yellow()),
        Severity::Low => ("●".blue(), threat.severity.as_str().blue()),
    };

    println!("  {} {:8}  {}", icon, severity_colored, threat.category.as_str());

    for line in textwrap::wrap(&threat.description, 58) {
        println!("            {}", line.bright_black());
    }

    println!();
}

fn print_author(report: &AnalysisReport) {
    println!("{}", "── Author ───────────────────────────────────────────────────".bright_black());

    println!("  {}", report.author.username.bold());
    println!(
        "  Account age: {} days │ Repos: {} │ Followers: {}",
        report.author.account_age_days, report.author.total_repos, report.author.followers
    );

    println!();
}
