use super::utils::{UNRESTRICTED_CIDR, contains_str};
use super::{Check, Hit};
use crate::model::{Body, MalformedAttribute, Resource};
use crate::policy::Group;
use iacguard_types::{Severity, ids};

const SSH_PORT: f64 = 22.0;

/// Protocol values that open every port regardless of the port range.
const ALL_PROTOCOLS: [&str; 2] = ["-1", "all"];

pub struct OpenSsh;

impl Check for OpenSsh {
    fn id(&self) -> &'static str {
        ids::CHECK_SECURITY_OPEN_SSH
    }

    fn group(&self) -> Group {
        Group::Security
    }

    fn target_kind(&self) -> Option<&'static str> {
        Some(ids::KIND_SECURITY_GROUP)
    }

    /// A matching rule wins over a malformed one anywhere in the group.
    /// The first malformed rule is reported only when no rule matches.
    fn inspect(&self, resource: &Resource) -> Result<Option<Hit>, MalformedAttribute> {
        let mut first_error = None;
        for ingress in resource.attributes().blocks("ingress") {
            match admits_open_ssh(ingress) {
                Ok(true) => {
                    return Ok(Some(Hit::new(
                        Severity::High,
                        format!(
                            "Open SSH access in security group '{}' (cidr {})",
                            resource.name, UNRESTRICTED_CIDR
                        ),
                    )));
                }
                Ok(false) => {}
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}

/// Missing ports or cidr blocks mean the rule does not match.
fn admits_open_ssh(ingress: &Body) -> Result<bool, MalformedAttribute> {
    let Some(cidrs) = ingress.list("cidr_blocks")? else {
        return Ok(false);
    };
    if !contains_str(cidrs, UNRESTRICTED_CIDR) {
        return Ok(false);
    }

    if let Some(protocol) = ingress.string("protocol")?
        && ALL_PROTOCOLS.contains(&protocol)
    {
        return Ok(true);
    }

    let (Some(from), Some(to)) = (ingress.number("from_port")?, ingress.number("to_port")?) else {
        return Ok(false);
    };
    Ok(from <= SSH_PORT && SSH_PORT <= to)
}
