// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{
    example::example,
    fields::{Field, merged_fields, object_fields},
    node::{SchemaKind, SchemaNode},
};

/// A non-required property with a standalone example of its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalField {
    pub name: String,
    /// JSON text; nested optional properties are included
    pub example: String,
}

impl OptionalField {
    pub fn new(name: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            example: example.into(),
        }
    }
}

/// The non-required properties of an object (or of a merged `allOf`), in declaration order.
///
/// Any other node yields an empty list; nested objects are not searched.
pub fn optional_fields(node: &SchemaNode) -> Vec<OptionalField> {
    let fields = if node.const_value.is_some() {
        Vec::new()
    } else if !node.all_of.is_empty() {
        merged_fields(&node.all_of).unwrap_or_default()
    } else if node.alternatives().is_empty() && node.kind == SchemaKind::Object {
        object_fields(node)
    } else {
        Vec::new()
    };

    fields
        .into_iter()
        .filter(|field| !field.required)
        .map(|Field { name, schema, .. }| OptionalField::new(name, example(schema, 0, true)))
        .collect()
}
