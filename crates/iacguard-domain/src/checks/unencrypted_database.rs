use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

/// `storage_encrypted` defaults to false, so absence is reported.
pub struct UnencryptedDatabase;

impl Check for UnencryptedDatabase {
    fn id(&self) -> &'static str {
        ids::CHECK_SECURITY_UNENCRYPTED_DATABASE
    }

    fn group(&self) -> Group {
        Group::Security
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_DB_INSTANCE)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let encrypted = resource
            .attributes()
            .bool("storage_encrypted")?
            .unwrap_or(false);
        if encrypted {
            return Ok(None);
        }
        Ok(Some(Hit::new(
            Severity::High,
            format!("Unencrypted RDS instance '{}'", resource.name),
        )))
    }
}
