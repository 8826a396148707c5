use iacguard_types::{AnalysisResult, Bucket, Issue, Location, Severity, SeverityCounts};

/// Report view shared by every renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub directory: String,
    pub resources_scanned: u32,
    pub sections: Vec<RenderableSection>,
    pub counts: SeverityCounts,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSection {
    pub bucket: Bucket,
    pub issues: Vec<RenderableIssue>,
}

impl RenderableSection {
    pub fn title(&self) -> &'static str {
        match self.bucket {
            Bucket::Security => "Security Issues",
            Bucket::Cost => "Cost Optimization",
            Bucket::Errors => "Check Errors",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableIssue {
    pub severity: Severity,
    pub check_id: String,
    pub description: String,
    /// `None` when the issue carries no file path.
    pub location: Option<Location>,
}

impl From<&Issue> for RenderableIssue {
    fn from(issue: &Issue) -> Self {
        Self {
            severity: issue.severity,
            check_id: issue.check_id.clone(),
            description: issue.description.clone(),
            location: issue
                .location
                .is_known()
                .then(|| issue.location.clone()),
        }
    }
}

impl RenderableReport {
    /// Sections in report order: security, cost, then check errors.
    pub fn from_result(directory: &str, resources_scanned: u32, result: &AnalysisResult) -> Self {
        let sections = [Bucket::Security, Bucket::Cost, Bucket::Errors]
            .into_iter()
            .map(|bucket| RenderableSection {
                bucket,
                issues: result.bucket(bucket).iter().map(RenderableIssue::from).collect(),
            })
            .collect();
        Self {
            directory: directory.to_string(),
            resources_scanned,
            sections,
            counts: result.counts(),
        }
    }

    pub fn section(&self, bucket: Bucket) -> Option<&RenderableSection> {
        self.sections.iter().find(|s| s.bucket == bucket)
    }

    pub fn issues(&self) -> impl Iterator<Item = &RenderableIssue> {
        self.sections.iter().flat_map(|s| s.issues.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.issues.is_empty())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn issue(severity: Severity, check_id: &str, description: &str, line: u32) -> Issue {
        Issue::new(severity, check_id, description, Location::new("main.tf", line))
    }

    pub fn sample_report() -> RenderableReport {
        let result: AnalysisResult = vec![
            issue(
                Severity::High,
                "security.open_ssh",
                "Open SSH access in security group 'web' (cidr 0.0.0.0/0)",
                6,
            ),
            issue(
                Severity::Info,
                "cost.oversized_instance",
                "Consider downsizing instance 'app' from t3.large to t3.medium",
                21,
            ),
            issue(Severity::Low, "cost.unused_elastic_ip", "Unused Elastic IP: nat", 0),
            Issue::new(
                Severity::Error,
                "security.public_bucket",
                "Error evaluating aws_s3_bucket 'logs': attribute 'acl' cannot be evaluated",
                Location::default(),
            ),
        ]
        .into_iter()
        .collect();
        RenderableReport::from_result("infra", 4, &result)
    }

    pub fn empty_report() -> RenderableReport {
        RenderableReport::from_result("infra", 0, &AnalysisResult::default())
    }
}
