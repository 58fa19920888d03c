// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The canonical schema tree.
//!
//! [`SchemaNode`] covers the subset of JSON Schema that RPC validator libraries emit. It
//! deserializes from (and serializes back to) JSON Schema through a private wire form, which keeps
//! the wire-level quirks (boolean schemas, `type` arrays, tuple `items`) out of the tree.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `format` marker for temporal strings.
pub const DATE_TIME_FORMAT: &str = "date-time";

/// The primitive shape named by a schema's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaKind {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
    #[default]
    Unknown,
}

impl SchemaKind {
    pub fn from_type_name(type_name: &str) -> Self {
        match type_name {
            "object" => Self::Object,
            "array" => Self::Array,
            "string" => Self::String,
            "number" => Self::Number,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "null" => Self::Null,
            _ => Self::Unknown,
        }
    }

    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Object => Some("object"),
            Self::Array => Some("array"),
            Self::String => Some("string"),
            Self::Number => Some("number"),
            Self::Integer => Some("integer"),
            Self::Boolean => Some("boolean"),
            Self::Null => Some("null"),
            Self::Unknown => None,
        }
    }
}

/// A recursive description of an accepted value's shape.
///
/// Interpretation order is fixed: `const_value` wins over everything, then `all_of`, then the
/// union alternatives (`one_of` before `any_of`), and only then `kind`. Empty combinator lists
/// count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSchema", into = "RawSchema")]
pub struct SchemaNode {
    pub kind: SchemaKind,
    pub format: Option<String>,
    pub description: Option<String>,
    /// Fixed fields, in declaration order. `None` is distinct from an empty map: only objects
    /// that declare `properties` take part in `allOf` merging.
    pub properties: Option<IndexMap<String, SchemaNode>>,
    /// Always a subset of the keys of `properties`.
    pub required: IndexSet<String>,
    pub items: Option<Box<SchemaNode>>,
    pub enum_values: Vec<Value>,
    pub const_value: Option<Value>,
    pub all_of: Vec<SchemaNode>,
    pub one_of: Vec<SchemaNode>,
    pub any_of: Vec<SchemaNode>,
    /// Value type for keys not listed in `properties` (records/maps)
    pub additional_value_type: Option<Box<SchemaNode>>,
}

impl SchemaNode {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn unknown() -> Self {
        Self::new(SchemaKind::Unknown)
    }

    pub fn string() -> Self {
        Self::new(SchemaKind::String)
    }

    pub fn number() -> Self {
        Self::new(SchemaKind::Number)
    }

    pub fn integer() -> Self {
        Self::new(SchemaKind::Integer)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    pub fn null() -> Self {
        Self::new(SchemaKind::Null)
    }

    /// A string carrying the `date-time` format
    pub fn date_time() -> Self {
        Self::string().with_format(DATE_TIME_FORMAT)
    }

    /// An object with an (initially empty) property table
    pub fn object() -> Self {
        Self {
            kind: SchemaKind::Object,
            properties: Some(IndexMap::new()),
            ..Default::default()
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        Self {
            kind: SchemaKind::Array,
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// An object with arbitrary keys whose values all match `value_type`
    pub fn record(value_type: SchemaNode) -> Self {
        Self {
            kind: SchemaKind::Object,
            additional_value_type: Some(Box::new(value_type)),
            ..Default::default()
        }
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Self {
            const_value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: SchemaKind::String,
            enum_values: values
                .into_iter()
                .map(|value| Value::String(value.into()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn all_of(members: Vec<SchemaNode>) -> Self {
        Self {
            all_of: members,
            ..Default::default()
        }
    }

    pub fn one_of(alternatives: Vec<SchemaNode>) -> Self {
        Self {
            one_of: alternatives,
            ..Default::default()
        }
    }

    pub fn any_of(alternatives: Vec<SchemaNode>) -> Self {
        Self {
            any_of: alternatives,
            ..Default::default()
        }
    }

    /// Wrap this schema in a union with `null`
    pub fn nullable(self) -> Self {
        Self::any_of(vec![self, Self::null()])
    }

    /// Add a required property (turning this node into an object if needed)
    pub fn with_property(self, name: impl Into<String>, schema: SchemaNode) -> Self {
        self.insert_property(name.into(), schema, true)
    }

    pub fn with_optional_property(self, name: impl Into<String>, schema: SchemaNode) -> Self {
        self.insert_property(name.into(), schema, false)
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn insert_property(mut self, name: String, schema: SchemaNode, required: bool) -> Self {
        self.kind = SchemaKind::Object;
        if required {
            self.required.insert(name.clone());
        } else {
            self.required.shift_remove(&name);
        }
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name, schema);
        self
    }

    /// An object that declares a property table (possibly empty).
    pub fn is_object_shaped(&self) -> bool {
        self.kind == SchemaKind::Object && self.properties.is_some()
    }

    pub fn is_date_time(&self) -> bool {
        self.format.as_deref() == Some(DATE_TIME_FORMAT)
    }

    /// Union alternatives: `one_of` if present, otherwise `any_of`.
    pub fn alternatives(&self) -> &[SchemaNode] {
        if self.one_of.is_empty() {
            &self.any_of
        } else {
            &self.one_of
        }
    }

    pub fn property_entries(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.properties
            .iter()
            .flatten()
            .map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref().and_then(|properties| properties.get(name))
    }
}

/// Wire form of a schema: JSON Schema allows `true`/`false` wherever a schema is expected.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawSchema {
    Bool(bool),
    Object(Box<RawObjectSchema>),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawObjectSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    schema_type: Option<TypeField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// `"const": null` is a real constraint, so presence is tracked separately from the value
    #[serde(
        rename = "const",
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    const_value: Option<Value>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<IndexMap<String, SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<RawItems>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix_items: Option<Vec<SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    additional_properties: Option<RawSchema>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    all_of: Option<Vec<SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    one_of: Option<Vec<SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    any_of: Option<Vec<SchemaNode>>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TypeField {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawItems {
    Tuple(Vec<SchemaNode>),
    Single(SchemaNode),
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl From<RawSchema> for SchemaNode {
    fn from(raw: RawSchema) -> Self {
        match raw {
            RawSchema::Bool(_) => SchemaNode::unknown(),
            RawSchema::Object(raw) => SchemaNode::from(*raw),
        }
    }
}

impl From<RawObjectSchema> for SchemaNode {
    fn from(raw: RawObjectSchema) -> Self {
        let RawObjectSchema {
            schema_type,
            format,
            description,
            const_value,
            enum_values,
            properties,
            required,
            items,
            prefix_items,
            additional_properties,
            all_of,
            one_of,
            any_of,
        } = raw;

        let required = required
            .unwrap_or_default()
            .into_iter()
            .filter(|name| {
                properties
                    .as_ref()
                    .is_some_and(|properties| properties.contains_key(name))
            })
            .collect();

        let items = match (items, prefix_items) {
            (Some(RawItems::Single(item)), _) => Some(Box::new(item)),
            (Some(RawItems::Tuple(elements)), _) | (None, Some(elements)) => tuple_items(elements),
            (None, None) => None,
        };

        // `additionalProperties: false` (strict objects) says nothing about value shape
        let additional_value_type = match additional_properties {
            Some(RawSchema::Object(schema)) => Some(Box::new(SchemaNode::from(*schema))),
            Some(RawSchema::Bool(_)) | None => None,
        };

        let node = SchemaNode {
            kind: SchemaKind::Unknown,
            format,
            description,
            properties,
            required,
            items,
            enum_values: enum_values.unwrap_or_default(),
            const_value,
            all_of: all_of.unwrap_or_default(),
            one_of: one_of.unwrap_or_default(),
            any_of: any_of.unwrap_or_default(),
            additional_value_type,
        };

        match schema_type {
            None => node,
            Some(TypeField::Single(type_name)) => SchemaNode {
                kind: SchemaKind::from_type_name(&type_name),
                ..node
            },
            Some(TypeField::Multiple(type_names)) => split_type_union(node, &type_names),
        }
    }
}

/// Positional items: any element type may appear in the array.
fn tuple_items(mut elements: Vec<SchemaNode>) -> Option<Box<SchemaNode>> {
    match elements.len() {
        0 => None,
        1 => elements.pop().map(Box::new),
        _ => Some(Box::new(SchemaNode::any_of(elements))),
    }
}

/// `"type": ["string", "null"]` becomes `anyOf` with one variant per listed type.
fn split_type_union(node: SchemaNode, type_names: &[String]) -> SchemaNode {
    match type_names {
        [] => node,
        [type_name] => SchemaNode {
            kind: SchemaKind::from_type_name(type_name),
            ..node
        },
        // An explicit combinator already describes the alternatives
        _ if !node.all_of.is_empty() || !node.alternatives().is_empty() => node,
        _ => {
            let description = node.description.clone();
            let variants = type_names
                .iter()
                .map(|type_name| SchemaNode {
                    kind: SchemaKind::from_type_name(type_name),
                    description: None,
                    ..node.clone()
                })
                .collect();

            SchemaNode {
                description,
                ..SchemaNode::any_of(variants)
            }
        }
    }
}

impl From<SchemaNode> for RawSchema {
    fn from(node: SchemaNode) -> Self {
        RawSchema::Object(Box::new(RawObjectSchema {
            schema_type: node
                .kind
                .type_name()
                .map(|type_name| TypeField::Single(type_name.to_string())),
            format: node.format,
            description: node.description,
            const_value: node.const_value,
            enum_values: non_empty(node.enum_values),
            properties: node.properties,
            required: non_empty(node.required.into_iter().collect()),
            items: node.items.map(|item| RawItems::Single(*item)),
            prefix_items: None,
            additional_properties: node
                .additional_value_type
                .map(|value_type| RawSchema::from(*value_type)),
            all_of: non_empty(node.all_of),
            one_of: non_empty(node.one_of),
            any_of: non_empty(node.any_of),
        }))
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    (!values.is_empty()).then_some(values)
}
