use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

/// `load_balancer_type` defaults to this when omitted.
const APPLICATION: &str = "application";

pub struct IdleLoadBalancer;

impl Check for IdleLoadBalancer {
    fn id(&self) -> &'static str {
        ids::CHECK_COST_IDLE_LOAD_BALANCER
    }

    fn group(&self) -> Group {
        Group::Cost
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_LOAD_BALANCER)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let body = resource.attributes();
        let lb_type = body.string("load_balancer_type")?.unwrap_or(APPLICATION);
        if lb_type != APPLICATION {
            return Ok(None);
        }

        let subnets = body.list("subnets")?.map_or(0, |s| s.len());
        let mappings = body.blocks("subnet_mapping").count();
        if subnets + mappings > 0 {
            return Ok(None);
        }
        Ok(Some(Hit::new(
            Severity::Low,
            format!("Idle Load Balancer: {}", resource.name),
        )))
    }
}
