use crate::{Bucket, Issue, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for iacguard JSON reports.
pub const SCHEMA_REPORT_V1: &str = "iacguard.report.v1";

/// Output of one analysis run.
///
/// Each bucket keeps issues in production order: check group, then resource, then
/// check registration order. Nothing is sorted by severity or location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisResult {
    /// HIGH and MEDIUM issues.
    pub security_issues: Vec<Issue>,
    /// INFO and LOW issues.
    pub cost_suggestions: Vec<Issue>,
    /// ERROR issues: checks that could not evaluate a resource.
    #[serde(default)]
    pub check_errors: Vec<Issue>,
}

impl AnalysisResult {
    /// Route an issue into the bucket its severity maps to.
    pub fn push(&mut self, issue: Issue) {
        match issue.severity.bucket() {
            Bucket::Security => self.security_issues.push(issue),
            Bucket::Cost => self.cost_suggestions.push(issue),
            Bucket::Errors => self.check_errors.push(issue),
        }
    }

    pub fn bucket(&self, bucket: Bucket) -> &[Issue] {
        match bucket {
            Bucket::Security => &self.security_issues,
            Bucket::Cost => &self.cost_suggestions,
            Bucket::Errors => &self.check_errors,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.security_issues
            .iter()
            .chain(self.cost_suggestions.iter())
            .chain(self.check_errors.iter())
    }

    pub fn len(&self) -> usize {
        self.security_issues.len() + self.cost_suggestions.len() + self.check_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_high(&self) -> bool {
        self.security_issues
            .iter()
            .any(|i| i.severity == Severity::High)
    }

    pub fn counts(&self) -> SeverityCounts {
        SeverityCounts::from_issues(self.iter())
    }
}

impl Extend<Issue> for AnalysisResult {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        for issue in iter {
            self.push(issue);
        }
    }
}

impl FromIterator<Issue> for AnalysisResult {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        let mut result = AnalysisResult::default();
        result.extend(iter);
        result
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub info: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_issues<'a, I: IntoIterator<Item = &'a Issue>>(issues: I) -> Self {
        let mut counts = SeverityCounts::default();
        for issue in issues {
            match issue.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
                Severity::Info => counts.info += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }

    pub fn get(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
            Severity::Error => self.error,
        }
    }

    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low + self.info + self.error
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// JSON report envelope wrapping one analysis result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub directory: String,
    pub resources_scanned: u32,
    pub counts: SeverityCounts,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, ids};

    fn issue(severity: Severity) -> Issue {
        Issue::new(
            severity,
            ids::CHECK_SECURITY_OPEN_SSH,
            format!("{severity} issue"),
            Location::new("main.tf", 1),
        )
    }

    #[test]
    fn push_routes_by_severity_and_keeps_order() {
        let result: AnalysisResult = vec![
            issue(Severity::Info),
            issue(Severity::High),
            issue(Severity::Error),
            issue(Severity::Low),
            issue(Severity::Medium),
        ]
        .into_iter()
        .collect();

        let sev = |issues: &[Issue]| issues.iter().map(|i| i.severity).collect::<Vec<_>>();
        assert_eq!(
            sev(&result.security_issues),
            vec![Severity::High, Severity::Medium]
        );
        assert_eq!(
            sev(&result.cost_suggestions),
            vec![Severity::Info, Severity::Low]
        );
        assert_eq!(sev(&result.check_errors), vec![Severity::Error]);
        assert_eq!(result.len(), 5);
        assert!(result.has_high());
    }

    #[test]
    fn counts_cover_every_bucket() {
        let result: AnalysisResult = vec![
            issue(Severity::Medium),
            issue(Severity::Medium),
            issue(Severity::Info),
            issue(Severity::Error),
        ]
        .into_iter()
        .collect();

        let counts = result.counts();
        assert_eq!(counts.medium, 2);
        assert_eq!(counts.info, 1);
        assert_eq!(counts.error, 1);
        assert_eq!(counts.high, 0);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(Severity::Medium), 2);
        assert!(!result.has_high());
    }

    #[test]
    fn empty_result_is_empty() {
        let result = AnalysisResult::default();
        assert!(result.is_empty());
        assert_eq!(result.counts().total(), 0);
    }
}
