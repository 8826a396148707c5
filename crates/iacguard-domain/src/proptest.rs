//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - The kind gate on every kind-specific check
//! - Bucket partitioning of every produced issue
//! - Determinism of the parallel runner

use crate::checks::{self, Check, Registry};
use crate::engine::{evaluate, run_group};
use crate::model::{AttrValue, AttributeNode, Body, Resource};
use crate::policy::Group;
use crate::test_support::{all_enabled, default_recommendations, model};
use iacguard_types::{Bucket, Location, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_known_kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(ids::KIND_SECURITY_GROUP.to_string()),
        Just(ids::KIND_S3_BUCKET.to_string()),
        Just(ids::KIND_INSTANCE.to_string()),
        Just(ids::KIND_EBS_VOLUME.to_string()),
        Just(ids::KIND_EIP.to_string()),
        Just(ids::KIND_LOAD_BALANCER.to_string()),
        Just(ids::KIND_DB_INSTANCE.to_string()),
        Just(ids::KIND_ACM_CERTIFICATE.to_string()),
    ]
}

/// Kinds no built-in check targets.
fn arb_unrelated_kind() -> impl Strategy<Value = String> {
    prop::string::string_regex("(google|azurerm)_[a-z]{1,12}").unwrap()
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").unwrap()
}

fn arb_value() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        Just(AttrValue::Null),
        any::<bool>().prop_map(AttrValue::Bool),
        (0u32..70_000).prop_map(|n| AttrValue::Number(n as f64)),
        prop_oneof![
            Just("public-read"),
            Just("private"),
            Just("t3.large"),
            Just("db.t3.medium"),
            Just("application"),
            Just("0.0.0.0/0"),
            Just("password = \"x\""),
        ]
        .prop_map(|s| AttrValue::String(s.to_string())),
        prop::collection::vec(
            prop_oneof![Just("0.0.0.0/0"), Just("10.0.0.0/8"), Just("subnet-1")],
            0..3
        )
        .prop_map(|items| AttrValue::List(
            items
                .into_iter()
                .map(|s| AttrValue::String(s.to_string()))
                .collect()
        )),
    ]
}

fn arb_attribute() -> impl Strategy<Value = AttributeNode> {
    let names = prop_oneof![
        Just("acl"),
        Just("instance_type"),
        Just("attachment"),
        Just("instance"),
        Just("load_balancer_type"),
        Just("subnets"),
        Just("instance_class"),
        Just("allocated_storage"),
        Just("expiration_days"),
        Just("storage_encrypted"),
        Just("size"),
        Just("user_data"),
        Just("from_port"),
        Just("to_port"),
        Just("cidr_blocks"),
    ];
    (names, arb_value(), any::<bool>()).prop_map(|(name, value, evaluable)| {
        let source = value.to_string();
        if evaluable {
            AttributeNode::new(name, value, source)
        } else {
            AttributeNode::unevaluated(name, "unknown variable", format!("var.{name}"))
        }
    })
}

fn arb_body() -> impl Strategy<Value = Body> {
    (
        prop::collection::vec(arb_attribute(), 0..6),
        prop::collection::vec(prop::collection::vec(arb_attribute(), 0..4), 0..3),
    )
        .prop_map(|(attrs, ingress)| {
            let mut body = Body::new(attrs, Vec::new());
            for rule in ingress {
                body.push_block("ingress", Body::new(rule, Vec::new()));
            }
            body
        })
}

fn arb_resource_of(kind: impl Strategy<Value = String>) -> impl Strategy<Value = Resource> {
    (kind, arb_name(), arb_body(), 1u32..500).prop_map(|(kind, name, body, line)| {
        Resource::new(kind, name, body).with_location(Location::new("main.tf", line))
    })
}

fn arb_resource() -> impl Strategy<Value = Resource> {
    prop_oneof![
        4 => arb_resource_of(arb_known_kind()),
        1 => arb_resource_of(arb_unrelated_kind()),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn kind_gated_checks_ignore_unrelated_kinds(resource in arb_resource_of(arb_unrelated_kind())) {
        let registry = Registry::builtin(&default_recommendations());
        for check in registry.iter().filter(|c| c.target_kind().is_some()) {
            prop_assert!(
                checks::evaluate(check, &resource).is_none(),
                "{} produced an issue for {}",
                check.id(),
                resource.kind
            );
        }
    }

    #[test]
    fn every_issue_lands_in_its_severity_bucket(resources in prop::collection::vec(arb_resource(), 0..12)) {
        let model = model(resources);
        let registry = Registry::from_config(&all_enabled());
        let report = evaluate(&model, &registry).expect("built-in checks never panic");

        for bucket in [Bucket::Security, Bucket::Cost, Bucket::Errors] {
            for issue in report.result.bucket(bucket) {
                prop_assert_eq!(issue.severity.bucket(), bucket);
            }
        }

        let produced: usize = Group::ALL
            .iter()
            .map(|g| run_group(&registry.group(*g), &model.resources).expect("run").len())
            .sum();
        prop_assert_eq!(report.result.len(), produced);
        prop_assert_eq!(report.counts.total() as usize, produced);
    }

    #[test]
    fn evaluation_is_idempotent(resources in prop::collection::vec(arb_resource(), 0..12)) {
        let model = model(resources);
        let registry = Registry::from_config(&all_enabled());

        let first = evaluate(&model, &registry).expect("first run");
        let second = evaluate(&model, &registry).expect("second run");
        prop_assert_eq!(first.result, second.result);
    }

    #[test]
    fn parallel_group_matches_sequential_order(resources in prop::collection::vec(arb_resource(), 0..24)) {
        let registry = Registry::builtin(&default_recommendations());
        for group in Group::ALL {
            let group_checks: Vec<&dyn Check> = registry.group(group);
            let parallel = run_group(&group_checks, &resources).expect("run");

            let sequential: Vec<_> = resources
                .iter()
                .flat_map(|r| group_checks.iter().filter_map(move |c| checks::evaluate(*c, r)))
                .collect();
            prop_assert_eq!(parallel, sequential);
        }
    }
}
