use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

/// Either attribute associates the address with something billable.
const ASSOCIATIONS: [&str; 2] = ["instance", "network_interface"];

pub struct UnusedElasticIp;

impl Check for UnusedElasticIp {
    fn id(&self) -> &'static str {
        ids::CHECK_COST_UNUSED_ELASTIC_IP
    }

    fn group(&self) -> Group {
        Group::Cost
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_EIP)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let body = resource.attributes();
        if ASSOCIATIONS.iter().any(|name| body.has(name)) {
            return Ok(None);
        }
        Ok(Some(Hit::new(
            Severity::Low,
            format!("Unused Elastic IP: {}", resource.name),
        )))
    }
}
