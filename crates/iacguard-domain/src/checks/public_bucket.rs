use super::{Check, Hit};
use crate::model::{MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

const PUBLIC_ACLS: [&str; 3] = ["public-read", "public-read-write", "authenticated-read"];

pub struct PublicBucket;

impl Check for PublicBucket {
    fn id(&self) -> &'static str {
        ids::CHECK_SECURITY_PUBLIC_BUCKET
    }

    fn group(&self) -> Group {
        Group::Security
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_S3_BUCKET)
    }

    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let Some(acl) = resource.attributes().string("acl")? else {
            return Ok(None);
        };
        if !PUBLIC_ACLS.contains(&acl) {
            return Ok(None);
        }
        Ok(Some(Hit::new(
            Severity::High,
            format!(
                "Public access enabled on S3 bucket '{}' (acl {})",
                resource.name, acl
            ),
        )))
    }
}
