// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Example values, rendered as indented JSON text.

use crate::{
    fields::{Field, merged_fields, object_fields},
    node::{SchemaKind, SchemaNode},
    text::{block, indent, quote},
};

/// Placeholder for `date-time` strings. Parses as RFC 3339 and re-serializes unchanged.
pub const DATE_TIME_EXAMPLE: &str = "2024-01-01T00:00:00.000Z";

const RECORD_KEY_EXAMPLE: &str = "key";

/// A minimal valid value for `node`, as JSON text.
///
/// Optional object properties are emitted only when `include_optional` is set; the flag is
/// passed unchanged to nested objects. Unions are represented by their first alternative.
/// `depth` only controls indentation.
pub fn example(node: &SchemaNode, depth: usize, include_optional: bool) -> String {
    if let Some(value) = &node.const_value {
        return value.to_string();
    }

    if let Some(first) = node.all_of.first() {
        return match merged_fields(&node.all_of) {
            Some(fields) => object_example(&fields, depth, include_optional),
            // No member contributes fields; the first one stands in for the intersection
            None => example(first, depth, include_optional),
        };
    }

    if let Some(first) = node.alternatives().first() {
        return example(first, depth, include_optional);
    }

    match node.kind {
        SchemaKind::Object => match &node.additional_value_type {
            Some(value_type) if node.property_entries().next().is_none() => {
                record_example(value_type, depth, include_optional)
            }
            _ => object_example(&object_fields(node), depth, include_optional),
        },
        SchemaKind::Array => match &node.items {
            Some(items) => format!("[{}]", example(items, depth + 1, include_optional)),
            None => "[]".to_string(),
        },
        SchemaKind::String => match node.enum_values.first() {
            Some(value) => value.to_string(),
            None if node.is_date_time() => quote(DATE_TIME_EXAMPLE),
            None => quote("string"),
        },
        SchemaKind::Number | SchemaKind::Integer => "0".to_string(),
        SchemaKind::Boolean => "true".to_string(),
        SchemaKind::Null => "null".to_string(),
        SchemaKind::Unknown => quote("value"),
    }
}

fn object_example(fields: &[Field<'_>], depth: usize, include_optional: bool) -> String {
    let entries = fields
        .iter()
        .filter(|field| field.required || include_optional)
        .map(|field| entry(field.name, field.schema, depth, include_optional))
        .collect();

    block(entries, ",\n", depth)
}

fn record_example(value_type: &SchemaNode, depth: usize, include_optional: bool) -> String {
    let entries = vec![entry(RECORD_KEY_EXAMPLE, value_type, depth, include_optional)];
    block(entries, ",\n", depth)
}

fn entry(name: &str, schema: &SchemaNode, depth: usize, include_optional: bool) -> String {
    format!(
        "{}{}: {}",
        indent(depth + 1),
        quote(name),
        example(schema, depth + 1, include_optional)
    )
}
