use std::collections::BTreeMap;

/// Check family a check belongs to. Also the runner's outer loop order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    Security,
    Cost,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Security, Group::Cost];

    pub fn as_str(self) -> &'static str {
        match self {
            Group::Security => "security",
            Group::Cost => "cost",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EffectiveConfig {
    pub profile: String,
    /// Keyed by check id. Checks without an entry are disabled.
    pub checks: BTreeMap<String, CheckPolicy>,
    /// Instance type to recommended smaller type.
    pub oversized_instances: BTreeMap<String, String>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }

    pub fn is_enabled(&self, check_id: &str) -> bool {
        self.check_policy(check_id).is_some()
    }
}
