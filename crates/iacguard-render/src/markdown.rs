use crate::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# iacguard report\n\n");
    let c = &report.counts;
    out.push_str(&format!(
        "- Directory: `{}`\n- Resources scanned: {}\n- Security issues: {} ({} HIGH, {} MEDIUM)\n- Cost suggestions: {} ({} INFO, {} LOW)\n",
        report.directory,
        report.resources_scanned,
        c.high + c.medium,
        c.high,
        c.medium,
        c.info + c.low,
        c.info,
        c.low
    ));
    if c.error > 0 {
        out.push_str(&format!("- Check errors: {}\n", c.error));
    }
    out.push('\n');

    if report.is_empty() {
        out.push_str("No issues.\n");
        return out;
    }

    for section in report.sections.iter().filter(|s| !s.issues.is_empty()) {
        out.push_str(&format!("## {}\n\n", section.title()));
        for issue in &section.issues {
            match &issue.location {
                Some(loc) => out.push_str(&format!(
                    "- [{}] `{}`: {} (`{}`)\n",
                    issue.severity, issue.check_id, issue.description, loc
                )),
                None => out.push_str(&format!(
                    "- [{}] `{}`: {}\n",
                    issue.severity, issue.check_id, issue.description
                )),
            }
        }
        out.push('\n');
    }

    out
}
