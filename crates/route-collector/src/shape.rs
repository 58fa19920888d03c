// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! A builder-style validator description, for procedures whose input and output are declared
//! directly in Rust rather than derived from types.

use serde_json::{Map, Value, json};

use crate::{error::SchemaExportError, exportable::SchemaExportable};

/// What a validator accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    Number,
    Int,
    Boolean,
    /// A timestamp, exchanged as an ISO-8601 string
    Date,
    Null,
    Unknown,
    Literal(Value),
    Enumeration(Vec<String>),
    Object(Vec<ShapeField>),
    Array(Box<Shape>),
    /// Arbitrary string keys mapping to values of one shape
    Record(Box<Shape>),
    Union(Vec<Shape>),
    Intersection(Vec<Shape>),
    Nullable(Box<Shape>),
    /// May be omitted when used as an object field
    Optional(Box<Shape>),
    /// A validator backed by arbitrary code (a refinement or transform), identified by name
    Custom(String),
}

impl Shape {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enumeration(values.into_iter().map(Into::into).collect())
    }

    pub fn object(fields: impl IntoIterator<Item = ShapeField>) -> Self {
        Self::Object(fields.into_iter().collect())
    }

    pub fn array(items: Shape) -> Self {
        Self::Array(Box::new(items))
    }

    pub fn record(value: Shape) -> Self {
        Self::Record(Box::new(value))
    }

    pub fn union(alternatives: Vec<Shape>) -> Self {
        Self::Union(alternatives)
    }

    pub fn intersection(members: Vec<Shape>) -> Self {
        Self::Intersection(members)
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    pub fn nullable(self) -> Self {
        Self::Nullable(Box::new(self))
    }

    /// Wrap this shape to make it optional (if not already)
    pub fn optional(self) -> Self {
        if self.is_optional() {
            self
        } else {
            Self::Optional(Box::new(self))
        }
    }

    /// Optional regardless of the order `optional` and `nullable` were applied in
    pub fn is_optional(&self) -> bool {
        match self {
            Self::Optional(_) => true,
            Self::Nullable(inner) => inner.is_optional(),
            _ => false,
        }
    }

    pub fn to_json_schema(&self) -> Result<Value, SchemaExportError> {
        let schema = match self {
            Self::String => json!({ "type": "string" }),
            Self::Number => json!({ "type": "number" }),
            Self::Int => json!({ "type": "integer" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Date => json!({ "type": "string", "format": "date-time" }),
            Self::Null => json!({ "type": "null" }),
            Self::Unknown => json!({}),
            Self::Literal(value) => literal_schema(value),
            Self::Enumeration(values) => json!({ "type": "string", "enum": values }),
            Self::Object(fields) => object_schema(fields)?,
            Self::Array(items) => json!({ "type": "array", "items": items.to_json_schema()? }),
            Self::Record(value) => json!({
                "type": "object",
                "additionalProperties": value.to_json_schema()?
            }),
            Self::Union(alternatives) => json!({ "anyOf": schemas(alternatives)? }),
            Self::Intersection(members) => json!({ "allOf": schemas(members)? }),
            Self::Nullable(inner) => json!({
                "anyOf": [inner.to_json_schema()?, { "type": "null" }]
            }),
            Self::Optional(inner) => inner.to_json_schema()?,
            Self::Custom(name) => {
                return Err(SchemaExportError::Unrepresentable(format!(
                    "custom validator `{name}`"
                )));
            }
        };

        Ok(schema)
    }
}

/// A named object field.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeField {
    pub name: String,
    /// Required unless the shape [`is_optional`](Shape::is_optional)
    pub shape: Shape,
    pub description: Option<String>,
}

impl ShapeField {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_required(&self) -> bool {
        !self.shape.is_optional()
    }
}

impl SchemaExportable for Shape {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        Ok(serde_json::to_string(&self.to_json_schema()?)?)
    }
}

fn schemas(shapes: &[Shape]) -> Result<Vec<Value>, SchemaExportError> {
    shapes.iter().map(Shape::to_json_schema).collect()
}

fn literal_schema(value: &Value) -> Value {
    let type_name = match value {
        Value::String(_) => Some("string"),
        Value::Number(number) if number.is_f64() => Some("number"),
        Value::Number(_) => Some("integer"),
        Value::Bool(_) => Some("boolean"),
        Value::Null => Some("null"),
        Value::Array(_) | Value::Object(_) => None,
    };

    match type_name {
        Some(type_name) => json!({ "type": type_name, "const": value }),
        None => json!({ "const": value }),
    }
}

fn object_schema(fields: &[ShapeField]) -> Result<Value, SchemaExportError> {
    let mut properties = Map::new();
    for field in fields {
        let mut schema = field.shape.to_json_schema()?;
        if let (Some(description), Value::Object(schema)) = (&field.description, &mut schema) {
            schema.insert("description".to_string(), json!(description));
        }
        properties.insert(field.name.clone(), schema);
    }

    let required: Vec<&str> = fields
        .iter()
        .filter(|field| field.is_required())
        .map(|field| field.name.as_str())
        .collect();

    let mut schema = json!({ "type": "object", "properties": properties });
    if let Value::Object(schema) = &mut schema {
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        schema.insert("additionalProperties".to_string(), json!(false));
    }

    Ok(schema)
}
