use crate::model::{ChecksConfig, IacguardConfigV1, SCHEMA_CONFIG_V1};
use crate::presets::{self, Profile};
use anyhow::Context;
use iacguard_domain::policy::{CheckPolicy, EffectiveConfig};
use iacguard_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub verbosity: Option<String>,
}

/// Diagnostic output level from `output.verbosity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Low,
    Medium,
    High,
}

impl Verbosity {
    pub fn parse(v: &str) -> anyhow::Result<Self> {
        match v {
            "low" => Ok(Verbosity::Low),
            "medium" => Ok(Verbosity::Medium),
            "high" => Ok(Verbosity::High),
            other => anyhow::bail!("unknown verbosity: {other} (expected low|medium|high)"),
        }
    }

    /// Default `env_logger` filter for this level.
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Low => "warn",
            Verbosity::Medium => "info",
            Verbosity::High => "debug",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub verbosity: Verbosity,
}

pub fn resolve_config(
    cfg: IacguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile_s = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "all".to_string());
    let profile = Profile::parse(&profile_s)?;

    let mut effective = presets::preset(profile);

    // Explicit toggles win over the profile.
    for (check_id, toggle) in toggles(&cfg.checks) {
        let Some(enabled) = toggle else { continue };
        effective
            .checks
            .entry(check_id.to_string())
            .or_insert_with(CheckPolicy::disabled)
            .enabled = enabled;
    }

    if let Some(map) = cfg.checks.cost.oversized_instances.as_ref() {
        for (current, recommended) in map {
            if current.trim().is_empty() || recommended.trim().is_empty() {
                anyhow::bail!(
                    "invalid oversized_instances entry '{current}' -> '{recommended}': types must be non-empty"
                );
            }
        }
        effective.oversized_instances = map.clone();
    }

    let verbosity_s = overrides
        .verbosity
        .or(cfg.output.verbosity)
        .unwrap_or_else(|| "medium".to_string());
    let verbosity = Verbosity::parse(&verbosity_s).context("invalid output.verbosity")?;

    Ok(ResolvedConfig {
        effective,
        verbosity,
    })
}

fn toggles(checks: &ChecksConfig) -> [(&'static str, Option<bool>); 10] {
    let s = &checks.security;
    let c = &checks.cost;
    [
        (ids::CHECK_SECURITY_OPEN_SSH, s.open_ssh),
        (ids::CHECK_SECURITY_PUBLIC_BUCKET, s.public_s3),
        (ids::CHECK_SECURITY_HARDCODED_SECRET, s.hardcoded_secrets),
        (ids::CHECK_SECURITY_UNENCRYPTED_DATABASE, s.unencrypted_data),
        (ids::CHECK_COST_UNATTACHED_VOLUME, c.underutilized_ebs),
        (ids::CHECK_COST_UNUSED_ELASTIC_IP, c.unattached_eip),
        (ids::CHECK_COST_IDLE_LOAD_BALANCER, c.idle_load_balancers),
        (ids::CHECK_COST_UNDERUTILIZED_DATABASE, c.underutilized_rds),
        (ids::CHECK_COST_EXPIRING_CERTIFICATE, c.expiring_certificates),
        (ids::CHECK_COST_OVERSIZED_VOLUME, c.oversized_ebs),
    ]
}
