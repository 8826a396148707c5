//! Process exit codes.

use crate::{AnalyzeError, ConfigError};
use iacguard_types::AnalysisResult;

pub mod exit_codes {
    /// No security issues and no check errors. Cost suggestions are advisory.
    pub const CLEAN: i32 = 0;
    /// Security issues or check errors, none HIGH.
    pub const ISSUES: i32 = 1;
    /// At least one HIGH security issue.
    pub const HIGH: i32 = 2;
    pub const INVALID_CONFIG: i32 = 3;
    pub const CONFIG_LOAD: i32 = 4;
    pub const ANALYSIS_FAILED: i32 = 5;
}

/// Map a finished analysis to its exit code.
pub fn result_exit_code(result: &AnalysisResult) -> i32 {
    if result.has_high() {
        exit_codes::HIGH
    } else if !result.security_issues.is_empty() || !result.check_errors.is_empty() {
        exit_codes::ISSUES
    } else {
        exit_codes::CLEAN
    }
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Load { .. } => exit_codes::CONFIG_LOAD,
            ConfigError::Invalid { .. } => exit_codes::INVALID_CONFIG,
        }
    }
}

impl AnalyzeError {
    pub fn exit_code(&self) -> i32 {
        exit_codes::ANALYSIS_FAILED
    }
}
