use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "iacguard.config.v1";

/// `config.yaml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
/// Unknown keys (`files`, `checks.security.compliance`, ...) are accepted and ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IacguardConfigV1 {
    /// Optional schema string for tooling (`iacguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `all` (default), `security`, or `cost`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChecksConfig {
    #[serde(default)]
    pub security: SecurityConfig,

    #[serde(default)]
    pub cost: CostConfig,
}

/// Security check toggles. Unset means "use the profile default".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecurityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_ssh: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_s3: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardcoded_secrets: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unencrypted_data: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CostConfig {
    /// Instance type -> recommended smaller type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oversized_instances: Option<BTreeMap<String, String>>,

    /// Toggles the unattached EBS volume check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underutilized_ebs: Option<bool>,

    /// Toggles the unused Elastic IP check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unattached_eip: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_load_balancers: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underutilized_rds: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiring_certificates: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oversized_ebs: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// `low`, `medium` (default), or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,
}
