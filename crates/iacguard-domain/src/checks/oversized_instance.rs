use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};
use std::collections::BTreeMap;

/// Flags instance types that appear in the configured downsizing map.
pub struct OversizedInstance {
    recommendations: BTreeMap<String, String>,
}

impl OversizedInstance {
    pub fn new(recommendations: BTreeMap<String, String>) -> Self {
        Self { recommendations }
    }
}

impl Check for OversizedInstance {
    fn id(&self) -> &'static str {
        ids::CHECK_COST_OVERSIZED_INSTANCE
    }

    fn group(&self) -> Group {
        Group::Cost
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_INSTANCE)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let Some(current) = resource.attributes().string("instance_type")? else {
            return Ok(None);
        };
        let Some(recommended) = self.recommendations.get(current) else {
            return Ok(None);
        };
        Ok(Some(Hit::new(
            Severity::Info,
            format!(
                "Consider downsizing instance '{}' from {} to {}",
                resource.name, current, recommended
            ),
        )))
    }
}
