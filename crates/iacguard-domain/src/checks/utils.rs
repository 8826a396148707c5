use crate::model::AttrValue;

pub const UNRESTRICTED_CIDR: &str = "0.0.0.0/0";

pub fn contains_str(items: &[AttrValue], needle: &str) -> bool {
    items.iter().any(|item| item.as_str() == Some(needle))
}
