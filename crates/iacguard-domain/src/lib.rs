//! Pure Terraform policy evaluation (no IO).
//!
//! Input: an analysis model built by the loader.
//! Output: issues partitioned into security, cost and check-error buckets.

#![forbid(unsafe_code)]

pub mod checks;
pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::{Check, Hit, Registry};
pub use engine::{CheckFailure, evaluate, run_group};
pub use model::{AnalysisModel, AttrValue, AttributeNode, BlockKind, Body, MalformedAttribute, Resource};
pub use policy::{CheckPolicy, EffectiveConfig, Group};
pub use report::{DomainReport, aggregate};
