use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

const MIN_DAYS_LEFT: f64 = 30.0;

pub struct ExpiringCertificate;

impl Check for ExpiringCertificate {
    fn id(&self) -> &'static str {
        ids::CHECK_COST_EXPIRING_CERTIFICATE
    }

    fn group(&self) -> Group {
        Group::Cost
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_ACM_CERTIFICATE)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let Some(days) = resource.attributes().number("expiration_days")? else {
            return Ok(None);
        };
        if days >= MIN_DAYS_LEFT {
            return Ok(None);
        }
        Ok(Some(Hit::new(
            Severity::Low,
            format!("Expired SSL certificate: {}", resource.name),
        )))
    }
}
