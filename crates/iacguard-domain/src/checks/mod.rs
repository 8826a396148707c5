//! Check trait and the built-in registry.
//!
//! Every check is a pure function of one resource. The registry fixes the
//! order: security checks first, then cost checks, each in registration order.

use crate::fingerprint::fingerprint_for_resource;
use crate::model::{MalformedAttribute, Resource};
use crate::policy::{EffectiveConfig, Group};
use iacguard_types::{Issue, Severity};
use std::collections::BTreeMap;

mod expiring_certificate;
mod hardcoded_secret;
mod idle_load_balancer;
mod open_ssh;
mod oversized_instance;
mod oversized_volume;
mod public_bucket;
mod unattached_volume;
mod underutilized_database;
mod unencrypted_database;
mod unused_elastic_ip;
mod utils;

pub use expiring_certificate::ExpiringCertificate;
pub use hardcoded_secret::HardcodedSecret;
pub use idle_load_balancer::IdleLoadBalancer;
pub use open_ssh::OpenSsh;
pub use oversized_instance::OversizedInstance;
pub use oversized_volume::OversizedVolume;
pub use public_bucket::PublicBucket;
pub use unattached_volume::UnattachedVolume;
pub use underutilized_database::UnderutilizedDatabase;
pub use unencrypted_database::UnencryptedDatabase;
pub use unused_elastic_ip::UnusedElasticIp;

/// What a check reports when its predicate matches.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub severity: Severity,
    pub message: String,
}

impl Hit {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

pub trait Check: Send + Sync {
    fn id(&self) -> &'static str;

    fn group(&self) -> Group;

    /// Resource kind this check looks at. `None` means every kind.
    fn target_kind(&self) -> Option<&'static str>;

    /// Evaluate the predicate. Only called for resources that pass [`Check::applies_to`].
    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute>;

    fn applies_to(&self, resource: &Resource) -> bool {
        self.target_kind().is_none_or(|kind| kind == resource.kind)
    }
}

/// Run one check against one resource.
///
/// The kind gate runs first. A [`MalformedAttribute`] becomes an ERROR issue
/// carrying the diagnostic, so one broken resource never stops the run.
pub fn evaluate(check: &dyn Check, resource: &Resource) -> Option<Issue> {
    if !check.applies_to(resource) {
        return None;
    }

    let (severity, message) = match check.inspect(resource) {
        Ok(None) => return None,
        Ok(Some(hit)) => (hit.severity, hit.message),
        Err(err) => (
            Severity::Error,
            format!(
                "Error evaluating {} '{}': {}",
                resource.kind, resource.name, err
            ),
        ),
    };

    let fingerprint = fingerprint_for_resource(
        check.id(),
        &resource.kind,
        &resource.name,
        &resource.location.path,
    );
    Some(
        Issue::new(severity, check.id(), message, resource.location.clone())
            .with_fingerprint(fingerprint),
    )
}

/// Ordered, immutable set of checks built once per run.
pub struct Registry {
    checks: Vec<Box<dyn Check>>,
}

impl Registry {
    /// Every built-in check, enabled or not.
    pub fn builtin(oversized_instances: &BTreeMap<String, String>) -> Self {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(OpenSsh),
            Box::new(PublicBucket),
            Box::new(HardcodedSecret),
            Box::new(UnencryptedDatabase),
            Box::new(OversizedInstance::new(oversized_instances.clone())),
            Box::new(UnattachedVolume),
            Box::new(UnusedElasticIp),
            Box::new(IdleLoadBalancer),
            Box::new(UnderutilizedDatabase),
            Box::new(ExpiringCertificate),
            Box::new(OversizedVolume),
        ];
        Self { checks }
    }

    /// The checks the configuration enables.
    pub fn from_config(cfg: &EffectiveConfig) -> Self {
        let mut registry = Self::builtin(&cfg.oversized_instances);
        registry.checks.retain(|check| cfg.is_enabled(check.id()));
        registry
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| check.as_ref())
    }

    pub fn group(&self, group: Group) -> Vec<&dyn Check> {
        self.iter().filter(|check| check.group() == group).collect()
    }

    pub fn get(&self, check_id: &str) -> Option<&dyn Check> {
        self.iter().find(|check| check.id() == check_id)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
