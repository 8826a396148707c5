use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};
use regex::Regex;
use std::sync::LazyLock;

/// Attributes (and nested blocks) whose source text is scanned.
const SCANNED: [&str; 2] = ["user_data", "environment"];

static SECRET_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(password|secret|token|key)\s*=\s*".+""#).expect("secret pattern is valid")
});

/// Matches the expression text as written, not its evaluated value, so
/// interpolated or templated values are still scanned.
pub struct HardcodedSecret;

impl Check for HardcodedSecret {
    fn id(&self) -> &'static str {
        ids::CHECK_SECURITY_HARDCODED_SECRET
    }

    fn group(&self) -> Group {
        Group::Security
    }

    fn target_kind(&self) -> Option<&'static str> {
        None
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let body = resource.attributes();

        let mut candidates: Vec<(String, &str)> = Vec::new();
        for name in SCANNED {
            if let Some(source) = body.source(name) {
                candidates.push((name.to_string(), source));
            }
            for nested in body.blocks(name) {
                for attr in nested.attributes() {
                    candidates.push((format!("{name}.{}", attr.name), attr.source.as_str()));
                }
            }
        }

        let hit = candidates
            .into_iter()
            .find(|(_, source)| SECRET_ASSIGNMENT.is_match(source));
        Ok(hit.map(|(attr, _)| {
            Hit::new(
                Severity::High,
                format!(
                    "Hardcoded secret detected in '{}' attribute '{}'",
                    resource.name, attr
                ),
            )
        }))
    }
}
