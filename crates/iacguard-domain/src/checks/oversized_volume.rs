use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

const MAX_SIZE_GIB: f64 = 1000.0;

pub struct OversizedVolume;

impl Check for OversizedVolume {
    fn id(&self) -> &'static str {
        ids::CHECK_COST_OVERSIZED_VOLUME
    }

    fn group(&self) -> Group {
        Group::Cost
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_EBS_VOLUME)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let Some(size) = resource.attributes().number("size")? else {
            return Ok(None);
        };
        if size <= MAX_SIZE_GIB {
            return Ok(None);
        }
        Ok(Some(Hit::new(
            Severity::Low,
            format!(
                "Consider resizing EBS volume '{}' ({} GiB)",
                resource.name, size
            ),
        )))
    }
}
