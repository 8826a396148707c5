use crate::model::{AnalysisModel, AttrValue, AttributeNode, Body, Resource};
use crate::policy::{CheckPolicy, EffectiveConfig};
use iacguard_types::Location;
use std::collections::BTreeMap;

pub fn resource(kind: &str, name: &str, body: Body) -> Resource {
    Resource::new(kind, name, body).with_location(Location::new("main.tf", 1))
}

pub fn model(resources: Vec<Resource>) -> AnalysisModel {
    AnalysisModel {
        directory: ".".to_string(),
        resources,
    }
}

pub fn body(attributes: Vec<AttributeNode>) -> Body {
    Body::new(attributes, Vec::new())
}

pub fn string_attr(name: &str, value: &str) -> AttributeNode {
    AttributeNode::new(name, AttrValue::String(value.to_string()), value)
}

pub fn number_attr(name: &str, value: f64) -> AttributeNode {
    AttributeNode::new(name, AttrValue::Number(value), value.to_string())
}

pub fn bool_attr(name: &str, value: bool) -> AttributeNode {
    AttributeNode::new(name, AttrValue::Bool(value), value.to_string())
}

pub fn strings_attr(name: &str, values: &[&str]) -> AttributeNode {
    let list = AttrValue::List(
        values
            .iter()
            .map(|v| AttrValue::String(v.to_string()))
            .collect(),
    );
    let source = format!("{values:?}");
    AttributeNode::new(name, list, source)
}

pub fn unevaluated_attr(name: &str, source: &str) -> AttributeNode {
    AttributeNode::unevaluated(name, format!("unknown variable in `{source}`"), source)
}

pub fn ingress(from: f64, to: f64, cidrs: &[&str]) -> Body {
    body(vec![
        number_attr("from_port", from),
        number_attr("to_port", to),
        string_attr("protocol", "tcp"),
        strings_attr("cidr_blocks", cidrs),
    ])
}

pub fn security_group(name: &str, rules: Vec<Body>) -> Resource {
    let mut sg = Body::default();
    for rule in rules {
        sg.push_block("ingress", rule);
    }
    resource(iacguard_types::ids::KIND_SECURITY_GROUP, name, sg)
}

pub fn config_with_check(check_id: &str) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled());
    EffectiveConfig {
        profile: "test".to_string(),
        checks,
        oversized_instances: default_recommendations(),
    }
}

pub fn all_enabled() -> EffectiveConfig {
    let checks = iacguard_types::explain::all_check_ids()
        .iter()
        .map(|id| (id.to_string(), CheckPolicy::enabled()))
        .collect();
    EffectiveConfig {
        profile: "all".to_string(),
        checks,
        oversized_instances: default_recommendations(),
    }
}

pub fn default_recommendations() -> BTreeMap<String, String> {
    BTreeMap::from([("t3.large".to_string(), "t3.medium".to_string())])
}
