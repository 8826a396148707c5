use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

const WATCHED_CLASS: &str = "db.t3.medium";
const MIN_STORAGE_GIB: f64 = 20.0;

pub struct UnderutilizedDatabase;

impl Check for UnderutilizedDatabase {
    fn id(&self) -> &'static str {
        ids::CHECK_COST_UNDERUTILIZED_DATABASE
    }

    fn group(&self) -> Group {
        Group::Cost
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_DB_INSTANCE)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let body = resource.attributes();
        if body.string("instance_class")? != Some(WATCHED_CLASS) {
            return Ok(None);
        }
        let storage = body
            .number("allocated_storage")?
            .ok_or_else(|| MalformedAttribute::missing("allocated_storage"))?;
        if storage >= MIN_STORAGE_GIB {
            return Ok(None);
        }
        Ok(Some(Hit::new(
            Severity::Low,
            format!("Underutilized RDS instance: {}", resource.name),
        )))
    }
}
