use iacguard_types::{AnalysisResult, Issue, SeverityCounts};
use log::debug;

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub result: AnalysisResult,
    pub counts: SeverityCounts,
    pub resources_scanned: u32,
    pub checks_run: u32,
}

impl DomainReport {
    pub fn has_high(&self) -> bool {
        self.result.has_high()
    }
}

/// Partition per-group issue lists into report buckets.
///
/// Routing goes through `Severity::bucket`, so every issue lands in exactly
/// one bucket and relative order within a bucket is production order.
pub fn aggregate<I>(groups: I) -> AnalysisResult
where
    I: IntoIterator<Item = Vec<Issue>>,
{
    let mut result = AnalysisResult::default();
    for (index, issues) in groups.into_iter().enumerate() {
        debug!("aggregating {} issues from group {}", issues.len(), index);
        result.extend(issues);
    }
    result
}
