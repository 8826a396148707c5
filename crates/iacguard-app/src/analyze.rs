//! The `analyze` use case: load a directory, run the enabled checks, wrap the result.

use camino::Utf8Path;
use iacguard_domain::{CheckFailure, DomainReport, EffectiveConfig, Registry};
use iacguard_repo::LoadError;
use iacguard_types::{ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
use log::info;
use thiserror::Error;
use time::OffsetDateTime;

/// Why an analysis run produced no result.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("could not load configuration files")]
    Load(#[from] LoadError),

    #[error("check execution failed")]
    CheckFailed(#[from] CheckFailure),
}

/// Input for the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeInput<'a> {
    /// Directory holding the `.tf` files (scanned non-recursively).
    pub dir: &'a Utf8Path,
    /// Resolved engine configuration.
    pub config: &'a EffectiveConfig,
}

/// Output from the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeOutput {
    pub report: ReportEnvelope,
}

/// Loader, then security and cost checks, then aggregation.
///
/// A load failure or a panicking check fails the whole run; ERROR issues do not.
pub fn analyze_directory(
    dir: &Utf8Path,
    config: &EffectiveConfig,
) -> Result<DomainReport, AnalyzeError> {
    let model = iacguard_repo::load_directory(dir)?;
    let registry = Registry::from_config(config);
    info!(
        "profile '{}': {} checks enabled",
        config.profile,
        registry.len()
    );
    let report = iacguard_domain::evaluate(&model, &registry)?;
    Ok(report)
}

/// Run the analysis and wrap it in the JSON report envelope.
pub fn run_analyze(input: AnalyzeInput<'_>) -> Result<AnalyzeOutput, AnalyzeError> {
    let started_at = OffsetDateTime::now_utc();
    let domain = analyze_directory(input.dir, input.config)?;
    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "iacguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        directory: input.dir.to_string(),
        resources_scanned: domain.resources_scanned,
        counts: domain.counts,
        result: domain.result,
    };

    Ok(AnalyzeOutput { report })
}
