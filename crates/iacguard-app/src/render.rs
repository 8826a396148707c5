//! Render use cases: JSON serialization and the renderers over a report envelope.

use iacguard_render::{RenderableReport, TextOptions};
use iacguard_types::ReportEnvelope;

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport::from_result(
        &report.directory,
        report.resources_scanned,
        &report.result,
    )
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

pub fn render_text(report: &ReportEnvelope, color: bool) -> String {
    iacguard_render::render_text(&to_renderable(report), TextOptions { color })
}

pub fn render_markdown(report: &ReportEnvelope) -> String {
    iacguard_render::render_markdown(&to_renderable(report))
}

pub fn render_annotations(report: &ReportEnvelope) -> Vec<String> {
    iacguard_render::render_github_annotations(&to_renderable(report))
}
