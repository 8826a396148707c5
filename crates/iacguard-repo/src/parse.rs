use crate::LoadError;
use hcl::eval::{Context, Evaluate};
use iacguard_domain::model::{AttrValue, AttributeNode, BlockKind, Body, Resource};
use iacguard_types::Location;
use regex::Regex;
use std::collections::{HashMap, VecDeque};
use std::sync::LazyLock;

static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(resource|data)\s+"?([^"\s{]+)"?\s+"?([^"\s{]+)"?\s*\{"#)
        .expect("header pattern is valid")
});

/// Parse one Terraform file into resources, in block order.
///
/// Only `resource` and `data` blocks are kept. Attribute values are evaluated
/// without any variables or functions in scope; anything that needs them is
/// recorded as unevaluated with the diagnostic.
pub fn parse_terraform(path: &str, text: &str) -> Result<Vec<Resource>, LoadError> {
    let parse_error = |message: String| LoadError::Parse {
        path: path.to_string(),
        message,
    };

    let body = hcl::parse(text).map_err(|e| parse_error(e.to_string()))?;
    let mut headers = HeaderIndex::new(text);
    let ctx = Context::new();

    let mut out = Vec::new();
    for structure in body.iter() {
        let hcl::Structure::Block(block) = structure else {
            continue;
        };
        let Some(kind) = BlockKind::from_identifier(block.identifier()) else {
            continue;
        };

        let [type_label, name_label] = block.labels() else {
            return Err(parse_error(format!(
                "{} block needs exactly two labels, found {}",
                kind.as_str(),
                block.labels().len()
            )));
        };
        let (type_label, name_label) = (type_label.as_str(), name_label.as_str());

        let line = headers.take(kind, type_label, name_label);
        out.push(
            Resource::new(type_label, name_label, convert_body(block.body(), &ctx))
                .with_block(kind)
                .with_location(Location::new(path, line)),
        );
    }
    Ok(out)
}

fn convert_body(body: &hcl::Body, ctx: &Context) -> Body {
    let mut out = Body::default();
    for structure in body.iter() {
        match structure {
            hcl::Structure::Attribute(attr) => {
                out.push_attribute(convert_attribute(attr.key(), attr.expr(), ctx));
            }
            hcl::Structure::Block(block) => {
                out.push_block(block.identifier(), convert_body(block.body(), ctx));
            }
        }
    }
    out
}

fn convert_attribute(name: &str, expr: &hcl::Expression, ctx: &Context) -> AttributeNode {
    let source = source_text(expr);
    match expr.evaluate(ctx) {
        Ok(value) => AttributeNode::new(name, convert_value(value), source),
        Err(errors) => AttributeNode::unevaluated(name, errors.to_string(), source),
    }
}

/// Expression text as written. String literals and templates keep their raw
/// content (no quotes, no escaping); anything else is re-rendered as HCL.
fn source_text(expr: &hcl::Expression) -> String {
    match expr {
        hcl::Expression::String(s) => s.clone(),
        hcl::Expression::TemplateExpr(t) => t.to_string(),
        other => hcl::format::to_string(other).unwrap_or_default(),
    }
}

fn convert_value(value: hcl::Value) -> AttrValue {
    match value {
        hcl::Value::Null => AttrValue::Null,
        hcl::Value::Bool(b) => AttrValue::Bool(b),
        hcl::Value::Number(n) => n.as_f64().map_or(AttrValue::Null, AttrValue::Number),
        hcl::Value::String(s) => AttrValue::String(s),
        hcl::Value::Array(items) => AttrValue::List(items.into_iter().map(convert_value).collect()),
        hcl::Value::Object(entries) => AttrValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k, convert_value(v)))
                .collect(),
        ),
    }
}

/// Header lines of `resource`/`data` blocks, found by scanning the source.
///
/// The parser does not keep spans, so lines are matched by labels. Duplicate
/// headers are handed out in order of appearance.
struct HeaderIndex {
    lines: HashMap<(BlockKind, String, String), VecDeque<u32>>,
}

impl HeaderIndex {
    fn new(text: &str) -> Self {
        let mut lines: HashMap<_, VecDeque<u32>> = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            let Some(caps) = BLOCK_HEADER.captures(line) else {
                continue;
            };
            let Some(kind) = BlockKind::from_identifier(&caps[1]) else {
                continue;
            };
            lines
                .entry((kind, caps[2].to_string(), caps[3].to_string()))
                .or_default()
                .push_back(idx as u32 + 1);
        }
        Self { lines }
    }

    /// 1-based line of the next matching header, or 0 when none is left.
    fn take(&mut self, kind: BlockKind, type_label: &str, name: &str) -> u32 {
        self.lines
            .get_mut(&(kind, type_label.to_string(), name.to_string()))
            .and_then(|queue| queue.pop_front())
            .unwrap_or(0)
    }
}
