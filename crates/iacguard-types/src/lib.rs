//! Stable DTOs and IDs used across the iacguard workspace.
//!
//! This crate is intentionally boring:
//! - issue and severity types shared by the engine and the renderers
//! - the analysis result with its fixed report buckets
//! - stable string IDs for checks and resource kinds
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod issue;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, all_check_ids, lookup_explanation};
pub use issue::{Bucket, Issue, Location, Severity};
pub use receipt::{AnalysisResult, ReportEnvelope, SCHEMA_REPORT_V1, SeverityCounts, ToolMeta};
