//! Normalized resource model handed to the checks.
//!
//! Values are evaluated once by the loader. An attribute that needed external
//! context (variables, references, function calls) keeps the evaluation
//! diagnostic instead of a value, and the accessor reports it as
//! [`MalformedAttribute`] when a check asks for it.

use iacguard_types::Location;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Everything one analysis run looks at.
#[derive(Clone, Debug, Default)]
pub struct AnalysisModel {
    /// Directory the resources were loaded from, as given by the caller.
    pub directory: String,
    /// Resources in file order, then block order within each file.
    pub resources: Vec<Resource>,
}

/// Top-level block category a resource was declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Resource,
    Data,
}

impl BlockKind {
    pub fn from_identifier(ident: &str) -> Option<Self> {
        match ident {
            "resource" => Some(BlockKind::Resource),
            "data" => Some(BlockKind::Data),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Resource => "resource",
            BlockKind::Data => "data",
        }
    }
}

/// One declared infrastructure object. Read-only once loaded.
#[derive(Clone, Debug)]
pub struct Resource {
    pub block: BlockKind,
    /// Provider type label, e.g. `aws_security_group`.
    pub kind: String,
    /// Logical name label. Only unique within its file.
    pub name: String,
    /// File and header line of the declaring block.
    pub location: Location,
    pub body: Body,
}

impl Resource {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, body: Body) -> Self {
        Self {
            block: BlockKind::Resource,
            kind: kind.into(),
            name: name.into(),
            location: Location::default(),
            body,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_block(mut self, block: BlockKind) -> Self {
        self.block = block;
        self
    }

    /// Attribute accessor over the resource body.
    pub fn attributes(&self) -> &Body {
        &self.body
    }
}

/// Evaluated attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<AttrValue>),
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Bool(_) => "bool",
            AttrValue::Number(_) => "number",
            AttrValue::String(_) => "string",
            AttrValue::List(_) => "list",
            AttrValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numbers, plus strings that parse as numbers (Terraform converts those implicitly).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Booleans, plus the strings `"true"` and `"false"`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            AttrValue::String(s) if s == "true" => Some(true),
            AttrValue::String(s) if s == "false" => Some(false),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => f.write_str("null"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::String(s) => f.write_str(s),
            AttrValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            AttrValue::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k} = {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A named attribute as the loader saw it.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeNode {
    pub name: String,
    /// Evaluated value, or the diagnostic explaining why evaluation failed.
    pub value: Result<AttrValue, String>,
    /// Expression text as written in the file.
    pub source: String,
}

impl AttributeNode {
    pub fn new(name: impl Into<String>, value: AttrValue, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Ok(value),
            source: source.into(),
        }
    }

    pub fn unevaluated(
        name: impl Into<String>,
        diagnostic: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: Err(diagnostic.into()),
            source: source.into(),
        }
    }
}

/// A nested block, e.g. `ingress { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct NestedBlock {
    pub label: String,
    pub body: Body,
}

/// Why a check could not read an attribute.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedAttribute {
    #[error("attribute '{name}' is required but missing")]
    Missing { name: String },

    #[error("attribute '{name}' cannot be evaluated without context: {diagnostic}")]
    Unevaluable { name: String, diagnostic: String },

    #[error("attribute '{name}' must be {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl MalformedAttribute {
    pub fn missing(name: &str) -> Self {
        MalformedAttribute::Missing {
            name: name.to_string(),
        }
    }

    fn mismatch(name: &str, expected: &'static str, found: &AttrValue) -> Self {
        MalformedAttribute::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.type_name(),
        }
    }
}

/// Attributes and nested blocks of one block body.
///
/// Typed getters return `Ok(None)` for an absent attribute, so each check
/// decides whether absence is a finding, a pass, or an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    attributes: Vec<AttributeNode>,
    blocks: Vec<NestedBlock>,
}

impl Body {
    pub fn new(attributes: Vec<AttributeNode>, blocks: Vec<NestedBlock>) -> Self {
        Self { attributes, blocks }
    }

    pub fn push_attribute(&mut self, attribute: AttributeNode) {
        self.attributes.push(attribute);
    }

    pub fn push_block(&mut self, label: impl Into<String>, body: Body) {
        self.blocks.push(NestedBlock {
            label: label.into(),
            body,
        });
    }

    pub fn has(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Last declaration wins if a name repeats.
    pub fn attribute(&self, name: &str) -> Option<&AttributeNode> {
        self.attributes.iter().rev().find(|a| a.name == name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &AttributeNode> {
        self.attributes.iter()
    }

    /// Raw expression text, available even when evaluation failed.
    pub fn source(&self, name: &str) -> Option<&str> {
        self.attribute(name).map(|a| a.source.as_str())
    }

    pub fn value(&self, name: &str) -> Result<Option<&AttrValue>, MalformedAttribute> {
        let Some(attr) = self.attribute(name) else {
            return Ok(None);
        };
        match &attr.value {
            Ok(value) => Ok(Some(value)),
            Err(diagnostic) => Err(MalformedAttribute::Unevaluable {
                name: name.to_string(),
                diagnostic: diagnostic.clone(),
            }),
        }
    }

    pub fn string(&self, name: &str) -> Result<Option<&str>, MalformedAttribute> {
        match self.value(name)? {
            None | Some(AttrValue::Null) => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| MalformedAttribute::mismatch(name, "a string", v)),
        }
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>, MalformedAttribute> {
        match self.value(name)? {
            None | Some(AttrValue::Null) => Ok(None),
            Some(v) => v
                .as_number()
                .map(Some)
                .ok_or_else(|| MalformedAttribute::mismatch(name, "a number", v)),
        }
    }

    pub fn bool(&self, name: &str) -> Result<Option<bool>, MalformedAttribute> {
        match self.value(name)? {
            None | Some(AttrValue::Null) => Ok(None),
            Some(v) => v
                .as_bool()
                .map(Some)
                .ok_or_else(|| MalformedAttribute::mismatch(name, "a bool", v)),
        }
    }

    pub fn list(&self, name: &str) -> Result<Option<&[AttrValue]>, MalformedAttribute> {
        match self.value(name)? {
            None | Some(AttrValue::Null) => Ok(None),
            Some(v) => v
                .as_list()
                .map(Some)
                .ok_or_else(|| MalformedAttribute::mismatch(name, "a list", v)),
        }
    }

    /// Nested blocks with the given label, in declaration order.
    pub fn blocks<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Body> + 'a {
        self.blocks
            .iter()
            .filter(move |b| b.label == label)
            .map(|b| &b.body)
    }
}
