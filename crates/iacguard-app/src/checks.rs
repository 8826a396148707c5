//! The `list-checks` use case.

use iacguard_domain::{EffectiveConfig, Registry};

/// One row of the check listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckInfo {
    pub id: &'static str,
    pub group: &'static str,
    /// `*` for checks that look at every resource kind.
    pub target_kind: &'static str,
    /// Config key that switches the check, if it has one.
    pub toggle: Option<&'static str>,
    pub enabled: bool,
}

/// Every built-in check in registration order, with its enablement under `config`.
pub fn list_checks(config: &EffectiveConfig) -> Vec<CheckInfo> {
    Registry::builtin(&config.oversized_instances)
        .iter()
        .map(|check| CheckInfo {
            id: check.id(),
            group: check.group().as_str(),
            target_kind: check.target_kind().unwrap_or("*"),
            toggle: iacguard_settings::toggle_for(check.id()),
            enabled: config.is_enabled(check.id()),
        })
        .collect()
}

pub fn format_check_list(checks: &[CheckInfo]) -> String {
    let id_width = checks.iter().map(|c| c.id.len()).max().unwrap_or(0);
    let kind_width = checks.iter().map(|c| c.target_kind.len()).max().unwrap_or(0);
    let toggle_width = checks
        .iter()
        .map(|c| c.toggle.map_or(1, str::len))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for check in checks {
        out.push_str(&format!(
            "{:<id_width$}  {:<8}  {:<kind_width$}  {:<toggle_width$}  {}\n",
            check.id,
            check.group,
            check.target_kind,
            check.toggle.unwrap_or("-"),
            if check.enabled { "enabled" } else { "disabled" },
        ));
    }
    out
}
