use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue urgency. Doubles as the key that decides which report bucket an issue lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
    /// The check could not evaluate the resource.
    Error,
}

/// Named section of the analysis result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Security,
    Cost,
    Errors,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
        Severity::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }

    /// The single mapping from severity to report bucket.
    pub fn bucket(self) -> Bucket {
        match self {
            Severity::High | Severity::Medium => Bucket::Security,
            Severity::Low | Severity::Info => Bucket::Cost,
            Severity::Error => Bucket::Errors,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an issue was found. `path` may be empty and `line` may be 0 when unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: String,
    pub line: u32,
}

impl Location {
    pub fn new<S: Into<String>>(path: S, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    pub fn is_known(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}:{}", self.path, self.line)
        }
    }
}

/// One finding produced by one check against one resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub severity: Severity,
    pub check_id: String,
    pub description: String,
    pub location: Location,

    /// Stable identifier intended for trending across runs:
    /// a hash of `check_id + resource kind + resource name + path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl Issue {
    pub fn new<S: Into<String>>(
        severity: Severity,
        check_id: &str,
        description: S,
        location: Location,
    ) -> Self {
        Self {
            severity,
            check_id: check_id.to_string(),
            description: description.into(),
            location,
            fingerprint: None,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: String) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_severity_maps_to_exactly_one_bucket() {
        let security: Vec<_> = Severity::ALL
            .iter()
            .filter(|s| s.bucket() == Bucket::Security)
            .collect();
        let cost: Vec<_> = Severity::ALL
            .iter()
            .filter(|s| s.bucket() == Bucket::Cost)
            .collect();
        let errors: Vec<_> = Severity::ALL
            .iter()
            .filter(|s| s.bucket() == Bucket::Errors)
            .collect();

        assert_eq!(security, vec![&Severity::High, &Severity::Medium]);
        assert_eq!(cost, vec![&Severity::Low, &Severity::Info]);
        assert_eq!(errors, vec![&Severity::Error]);
    }

    #[test]
    fn severity_serializes_uppercase() {
        let json = serde_json::to_string(&Severity::Medium).expect("serialize");
        assert_eq!(json, "\"MEDIUM\"");
        let back: Severity = serde_json::from_str("\"INFO\"").expect("deserialize");
        assert_eq!(back, Severity::Info);
    }

    #[test]
    fn location_display_omits_unknown_line() {
        assert_eq!(Location::new("main.tf", 12).to_string(), "main.tf:12");
        assert_eq!(Location::new("main.tf", 0).to_string(), "main.tf");
        assert!(!Location::default().is_known());
    }
}
