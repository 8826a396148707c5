use crate::checks::{Check, Registry, evaluate as evaluate_check};
use crate::model::{AnalysisModel, Resource};
use crate::policy::Group;
use crate::report::{DomainReport, aggregate};
use iacguard_types::Issue;
use log::{debug, info};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// A check that panicked instead of returning a result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("check '{check_id}' failed on {kind} '{name}': {reason}")]
pub struct CheckFailure {
    pub check_id: String,
    pub kind: String,
    pub name: String,
    pub reason: String,
}

/// Run every enabled check over every resource and aggregate the issues.
///
/// Groups run in order (security, then cost). Within a group, resources fan
/// out over the rayon pool and are collected back in index order, so the
/// result is identical to a sequential run.
pub fn evaluate(model: &AnalysisModel, registry: &Registry) -> Result<DomainReport, CheckFailure> {
    let mut groups = Vec::with_capacity(Group::ALL.len());
    for group in Group::ALL {
        let checks = registry.group(group);
        debug!(
            "running {} {} checks over {} resources",
            checks.len(),
            group.as_str(),
            model.resources.len()
        );
        groups.push(run_group(&checks, &model.resources)?);
    }

    let result = aggregate(groups);
    let counts = result.counts();
    info!(
        "{} resources scanned: {} security issues, {} cost suggestions, {} check errors",
        model.resources.len(),
        result.security_issues.len(),
        result.cost_suggestions.len(),
        result.check_errors.len()
    );

    Ok(DomainReport {
        result,
        counts,
        resources_scanned: model.resources.len() as u32,
        checks_run: registry.len() as u32,
    })
}

/// Issues for one group, ordered by resource index then check index.
pub fn run_group(checks: &[&dyn Check], resources: &[Resource]) -> Result<Vec<Issue>, CheckFailure> {
    let per_resource: Vec<Vec<Issue>> = resources
        .par_iter()
        .map(|resource| run_resource(checks, resource))
        .collect::<Result<_, _>>()?;
    Ok(per_resource.into_iter().flatten().collect())
}

fn run_resource(checks: &[&dyn Check], resource: &Resource) -> Result<Vec<Issue>, CheckFailure> {
    let mut out = Vec::new();
    for &check in checks {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| evaluate_check(check, resource)));
        match outcome {
            Ok(Some(issue)) => out.push(issue),
            Ok(None) => {}
            Err(payload) => {
                return Err(CheckFailure {
                    check_id: check.id().to_string(),
                    kind: resource.kind.clone(),
                    name: resource.name.clone(),
                    reason: panic_message(payload.as_ref()),
                });
            }
        }
    }
    Ok(out)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "check panicked".to_string()
    }
}
