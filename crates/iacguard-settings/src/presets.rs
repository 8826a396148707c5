use iacguard_domain::policy::{CheckPolicy, EffectiveConfig, Group};
use iacguard_domain::Registry;
use iacguard_types::ids;
use std::collections::BTreeMap;

/// Preset profiles pick which check groups start out enabled.
///
/// Keep these small and readable. Anything finer goes into the per-check toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    All,
    Security,
    Cost,
}

impl Profile {
    pub fn parse(v: &str) -> anyhow::Result<Self> {
        match v {
            "all" => Ok(Profile::All),
            "security" => Ok(Profile::Security),
            "cost" => Ok(Profile::Cost),
            other => anyhow::bail!("unknown profile: {other} (expected all|security|cost)"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::All => "all",
            Profile::Security => "security",
            Profile::Cost => "cost",
        }
    }

    pub fn includes(self, group: Group) -> bool {
        match self {
            Profile::All => true,
            Profile::Security => group == Group::Security,
            Profile::Cost => group == Group::Cost,
        }
    }
}

pub fn preset(profile: Profile) -> EffectiveConfig {
    let registry = Registry::builtin(&BTreeMap::new());
    let checks = registry
        .iter()
        .map(|check| {
            let policy = if profile.includes(check.group()) {
                CheckPolicy::enabled()
            } else {
                CheckPolicy::disabled()
            };
            (check.id().to_string(), policy)
        })
        .collect();

    EffectiveConfig {
        profile: profile.as_str().to_string(),
        checks,
        oversized_instances: BTreeMap::new(),
    }
}

/// Config key that toggles a check, for help output.
///
/// `cost.oversized_instance` has no toggle: an empty `oversized_instances` map disables it.
pub fn toggle_for(check_id: &str) -> Option<&'static str> {
    match check_id {
        ids::CHECK_SECURITY_OPEN_SSH => Some("checks.security.open_ssh"),
        ids::CHECK_SECURITY_PUBLIC_BUCKET => Some("checks.security.public_s3"),
        ids::CHECK_SECURITY_HARDCODED_SECRET => Some("checks.security.hardcoded_secrets"),
        ids::CHECK_SECURITY_UNENCRYPTED_DATABASE => Some("checks.security.unencrypted_data"),
        ids::CHECK_COST_UNATTACHED_VOLUME => Some("checks.cost.underutilized_ebs"),
        ids::CHECK_COST_UNUSED_ELASTIC_IP => Some("checks.cost.unattached_eip"),
        ids::CHECK_COST_IDLE_LOAD_BALANCER => Some("checks.cost.idle_load_balancers"),
        ids::CHECK_COST_UNDERUTILIZED_DATABASE => Some("checks.cost.underutilized_rds"),
        ids::CHECK_COST_EXPIRING_CERTIFICATE => Some("checks.cost.expiring_certificates"),
        ids::CHECK_COST_OVERSIZED_VOLUME => Some("checks.cost.oversized_ebs"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_profile_enables_every_check() {
        let cfg = preset(Profile::All);
        assert_eq!(cfg.checks.len(), iacguard_types::explain::all_check_ids().len());
        assert!(cfg.checks.values().all(|p| p.enabled));
    }

    #[test]
    fn group_profiles_split_by_prefix() {
        let security = preset(Profile::Security);
        for (id, policy) in &security.checks {
            assert_eq!(policy.enabled, id.starts_with("security."), "{id}");
        }
        let cost = preset(Profile::Cost);
        for (id, policy) in &cost.checks {
            assert_eq!(policy.enabled, id.starts_with("cost."), "{id}");
        }
    }

    #[test]
    fn unknown_profile_lists_choices() {
        let err = Profile::parse("strict").unwrap_err();
        assert!(err.to_string().contains("all|security|cost"));
    }

    #[test]
    fn every_check_but_oversized_instance_has_a_toggle() {
        for id in iacguard_types::explain::all_check_ids() {
            let toggle = toggle_for(id);
            assert_eq!(toggle.is_none(), *id == ids::CHECK_COST_OVERSIZED_INSTANCE, "{id}");
        }
    }
}
