//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    ChecksConfig, CostConfig, IacguardConfigV1, OutputConfig, SCHEMA_CONFIG_V1, SecurityConfig,
};
pub use presets::{Profile, toggle_for};
pub use resolve::{Overrides, ResolvedConfig, Verbosity};

use anyhow::Context;
use std::path::Path;

/// Serialization format of a config file, chosen by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` is TOML; everything else (including `.yaml`/`.yml`) is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse `config.yaml` (or equivalent) into a typed model.
///
/// An empty or comment-only document yields the default config.
pub fn parse_config_yaml(input: &str) -> anyhow::Result<IacguardConfigV1> {
    let value: serde_yaml::Value = serde_yaml::from_str(input).context("invalid YAML")?;
    if value.is_null() {
        return Ok(IacguardConfigV1::default());
    }
    let cfg: IacguardConfigV1 =
        serde_yaml::from_value(value).context("config does not match the expected schema")?;
    Ok(cfg)
}

/// Parse `config.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<IacguardConfigV1> {
    let cfg: IacguardConfigV1 = toml::from_str(input).context("invalid TOML config")?;
    Ok(cfg)
}

pub fn parse_config(input: &str, format: ConfigFormat) -> anyhow::Result<IacguardConfigV1> {
    match format {
        ConfigFormat::Yaml => parse_config_yaml(input),
        ConfigFormat::Toml => parse_config_toml(input),
    }
}

/// Resolve the effective config used by the engine (profile + per-check toggles).
pub fn resolve_config(
    cfg: IacguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of the config file.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(IacguardConfigV1)
}
