use crate::{RenderableIssue, RenderableReport};
use colored::Colorize;
use iacguard_types::{Bucket, Severity};

#[derive(Clone, Copy, Debug, Default)]
pub struct TextOptions {
    /// Emit ANSI colors per severity.
    pub color: bool,
}

/// Plain-text report: one section per bucket, then summary counts.
///
/// The check errors section is only printed when it has entries.
pub fn render_text(report: &RenderableReport, opts: TextOptions) -> String {
    let mut out = String::new();

    for section in &report.sections {
        if section.bucket == Bucket::Errors && section.issues.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(section.title());
        out.push_str(":\n");
        for issue in &section.issues {
            out.push_str(&issue_line(issue, opts));
            out.push('\n');
        }
    }

    let c = &report.counts;
    out.push_str(&format!(
        "\n{} security issues found ({} HIGH, {} MEDIUM)\n",
        c.high + c.medium,
        c.high,
        c.medium
    ));
    out.push_str(&format!(
        "{} cost optimization suggestions found ({} INFO, {} LOW)\n",
        c.info + c.low,
        c.info,
        c.low
    ));
    if c.error > 0 {
        out.push_str(&format!("{} checks could not be evaluated\n", c.error));
    }

    out
}

fn issue_line(issue: &RenderableIssue, opts: TextOptions) -> String {
    let mut line = format!("- [{}] {}", issue.severity, issue.description);
    if let Some(loc) = &issue.location {
        line.push_str(&format!(" ({loc})"));
    }
    if !opts.color {
        return line;
    }
    match issue.severity {
        Severity::High => line.red().to_string(),
        Severity::Medium => line.yellow().to_string(),
        Severity::Info => line.cyan().to_string(),
        Severity::Low => line.green().to_string(),
        Severity::Error => line.magenta().to_string(),
    }
}
