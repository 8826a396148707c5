//! Config file loading with classified failures.

use camino::{Utf8Path, Utf8PathBuf};
use iacguard_settings::{ConfigFormat, IacguardConfigV1, Overrides, ResolvedConfig};
use std::io;
use thiserror::Error;

/// Why the policy configuration is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config {path}")]
    Load {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a valid configuration.
    #[error("invalid config {path}: {message}")]
    Invalid { path: Utf8PathBuf, message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(Utf8PathBuf),
    /// No file at the configured path.
    Defaults,
}

#[derive(Clone, Debug)]
pub struct LoadedConfig {
    pub resolved: ResolvedConfig,
    pub source: ConfigSource,
}

/// Read, parse and resolve the config at `path`.
///
/// A missing file is not an error: built-in defaults apply.
pub fn load_config(path: &Utf8Path, overrides: Overrides) -> Result<LoadedConfig, ConfigError> {
    let invalid = |err: anyhow::Error| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("{err:#}"),
    };

    let (cfg, source) = match std::fs::read_to_string(path) {
        Ok(text) => {
            let format = ConfigFormat::from_path(path.as_std_path());
            let cfg = iacguard_settings::parse_config(&text, format).map_err(invalid)?;
            (cfg, ConfigSource::File(path.to_path_buf()))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            (IacguardConfigV1::default(), ConfigSource::Defaults)
        }
        Err(source) => {
            return Err(ConfigError::Load {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let resolved = iacguard_settings::resolve_config(cfg, overrides).map_err(invalid)?;
    Ok(LoadedConfig { resolved, source })
}
