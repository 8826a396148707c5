//! Use case orchestration for iacguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo,
//! settings, and render layers. The CLI crate depends on this; it only handles argument
//! parsing and I/O.

#![forbid(unsafe_code)]

mod analyze;
mod checks;
mod config;
mod exit;
mod explain;
mod render;

pub use analyze::{AnalyzeError, AnalyzeInput, AnalyzeOutput, analyze_directory, run_analyze};
pub use checks::{CheckInfo, format_check_list, list_checks};
pub use config::{ConfigError, ConfigSource, LoadedConfig, load_config};
pub use exit::{exit_codes, result_exit_code};
pub use explain::{CheckDoc, ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{
    render_annotations, render_markdown, render_text, serialize_report, to_renderable,
};
