use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

pub struct UnattachedVolume;

impl Check for UnattachedVolume {
    fn id(&self) -> &'static str {
        ids::CHECK_COST_UNATTACHED_VOLUME
    }

    fn group(&self) -> Group {
        Group::Cost
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_EBS_VOLUME)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let body = resource.attributes();
        if body.has("attachment") {
            return Ok(None);
        }
        // The id only labels the message; an unusable one falls back to the logical name.
        let label = body
            .string("id")
            .ok()
            .flatten()
            .unwrap_or(resource.name.as_str());
        Ok(Some(Hit::new(
            Severity::Low,
            format!("Unattached EBS volume: {label}"),
        )))
    }
}
