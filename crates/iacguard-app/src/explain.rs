//! The `explain` use case: describe a built-in check and how to fix what it flags.

use iacguard_domain::Registry;
use iacguard_types::explain::{self, Explanation};
use std::collections::BTreeMap;

/// A check's documentation joined with where it applies and how it is switched.
#[derive(Clone, Debug)]
pub struct CheckDoc {
    pub check_id: &'static str,
    pub group: &'static str,
    /// `None` for checks that look at every resource kind.
    pub target_kind: Option<&'static str>,
    /// Config key that enables or disables the check.
    pub toggle: Option<&'static str>,
    pub explanation: Explanation,
}

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(CheckDoc),
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    let registry = Registry::builtin(&BTreeMap::new());
    let doc = registry.get(identifier).and_then(|check| {
        explain::lookup_explanation(check.id()).map(|explanation| CheckDoc {
            check_id: check.id(),
            group: check.group().as_str(),
            target_kind: check.target_kind(),
            toggle: iacguard_settings::toggle_for(check.id()),
            explanation,
        })
    });
    match doc {
        Some(doc) => ExplainOutput::Found(doc),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
        },
    }
}

pub fn format_explanation(doc: &CheckDoc) -> String {
    let exp = &doc.explanation;
    let mut out = format!("{}\n{}\n\n", exp.title, "=".repeat(exp.title.len()));

    out.push_str(&format!("check    {} ({})\n", doc.check_id, doc.group));
    out.push_str(&format!(
        "applies  {}\n",
        doc.target_kind.unwrap_or("every resource kind")
    ));
    match doc.toggle {
        Some(key) => out.push_str(&format!("toggle   {key}\n\n")),
        None => out.push_str(
            "toggle   none, runs when checks.cost.oversized_instances is non-empty\n\n",
        ),
    }

    out.push_str(exp.description);
    out.push_str("\n\nHow to fix:\n");
    for line in exp.remediation.lines() {
        out.push_str(&format!("  {line}\n"));
    }

    out.push_str(&format!("\nFlagged:\n```hcl\n{}\n```\n", exp.examples.before));
    out.push_str(&format!("\nPasses:\n```hcl\n{}\n```\n", exp.examples.after));
    out
}

/// Unknown id message, with the known ids grouped by their prefix.
pub fn format_not_found(identifier: &str, check_ids: &[&'static str]) -> String {
    let mut out = format!("Unknown check_id: {identifier}\n");

    let mut current_group = None;
    for id in check_ids {
        let group = id.split_once('.').map_or(*id, |(group, _)| group);
        if current_group != Some(group) {
            out.push_str(&format!("\n{group} checks:\n"));
            current_group = Some(group);
        }
        out.push_str(&format!("  - {id}\n"));
    }
    out
}
