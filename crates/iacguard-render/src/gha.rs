use crate::RenderableReport;
use iacguard_types::Severity;

/// Render issues as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for issue in report.issues() {
        let level = match issue.severity {
            Severity::High | Severity::Error => "error",
            Severity::Medium => "warning",
            Severity::Low | Severity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = &issue.location {
            meta.push_str(&format!("file={}", escape_property(&loc.path)));
            if loc.line > 0 {
                meta.push_str(&format!(",line={}", loc.line));
            }
        }

        let message = escape_data(&format!("[{}] {}", issue.check_id, issue.description));

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
