// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! TypeScript-style type signatures.

use crate::{
    fields::{Field, merged_fields, object_fields},
    node::{SchemaKind, SchemaNode},
    text::{block, indent, quote},
};

/// A human-readable type expression for `node`.
///
/// Object blocks list one property per line (`name?: T` when optional) and close at `depth`.
/// Unions list every alternative in declared order.
pub fn type_signature(node: &SchemaNode, depth: usize) -> String {
    signature(node, depth).text
}

/// A rendered signature, and whether it is a top-level `|` or `&` expression (which needs
/// parentheses when used as an operand).
struct Signature {
    text: String,
    compound: bool,
}

impl Signature {
    fn simple(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            compound: false,
        }
    }

    fn joined(mut parts: Vec<Signature>, operator: &str) -> Self {
        if parts.len() == 1 {
            return parts.remove(0);
        }

        let text = parts
            .into_iter()
            .map(Signature::into_operand)
            .collect::<Vec<_>>()
            .join(operator);

        Self {
            text,
            compound: true,
        }
    }

    fn into_operand(self) -> String {
        if self.compound {
            format!("({})", self.text)
        } else {
            self.text
        }
    }
}

fn signature(node: &SchemaNode, depth: usize) -> Signature {
    if let Some(value) = &node.const_value {
        return Signature::simple(value.to_string());
    }

    if !node.all_of.is_empty() {
        return intersection_signature(&node.all_of, depth);
    }

    let alternatives = node.alternatives();
    if !alternatives.is_empty() {
        let parts = alternatives
            .iter()
            .map(|alternative| signature(alternative, depth))
            .collect();
        return union(parts);
    }

    match node.kind {
        SchemaKind::Object => match &node.additional_value_type {
            Some(value_type) if node.property_entries().next().is_none() => Signature::simple(
                format!("Record<string, {}>", type_signature(value_type, depth)),
            ),
            _ => Signature::simple(object_block(&object_fields(node), depth)),
        },
        SchemaKind::Array => array_signature(node.items.as_deref(), depth),
        SchemaKind::String if !node.enum_values.is_empty() => union(
            node.enum_values
                .iter()
                .map(|value| Signature::simple(value.to_string()))
                .collect(),
        ),
        SchemaKind::String => Signature::simple("string"),
        SchemaKind::Number | SchemaKind::Integer => Signature::simple("number"),
        SchemaKind::Boolean => Signature::simple("boolean"),
        SchemaKind::Null => Signature::simple("null"),
        SchemaKind::Unknown => Signature::simple("any"),
    }
}

/// The merged object block of the object-shaped members, intersected with every other member.
fn intersection_signature(members: &[SchemaNode], depth: usize) -> Signature {
    let mut parts = Vec::new();

    if let Some(fields) = merged_fields(members) {
        parts.push(Signature::simple(object_block(&fields, depth)));
    }

    parts.extend(
        members
            .iter()
            .filter(|member| !member.is_object_shaped())
            .map(|member| signature(member, depth)),
    );

    Signature::joined(parts, " & ")
}

fn union(parts: Vec<Signature>) -> Signature {
    Signature::joined(parts, " | ")
}

fn array_signature(items: Option<&SchemaNode>, depth: usize) -> Signature {
    let Some(items) = items else {
        return Signature::simple("any[]");
    };

    let element = signature(items, depth);

    if element.text.contains('\n') {
        Signature::simple(format!("Array<{}>", element.text))
    } else {
        Signature::simple(format!("{}[]", element.into_operand()))
    }
}

fn object_block(fields: &[Field<'_>], depth: usize) -> String {
    let entries = fields
        .iter()
        .map(|field| {
            format!(
                "{}{}{}: {}",
                indent(depth + 1),
                property_key(field.name),
                if field.required { "" } else { "?" },
                type_signature(field.schema, depth + 1)
            )
        })
        .collect();

    block(entries, "\n", depth)
}

fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        name.to_string()
    } else {
        quote(name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(type_signature(&SchemaNode::string(), 0), "string");
        assert_eq!(type_signature(&SchemaNode::number(), 0), "number");
        assert_eq!(type_signature(&SchemaNode::integer(), 0), "number");
        assert_eq!(type_signature(&SchemaNode::boolean(), 0), "boolean");
        assert_eq!(type_signature(&SchemaNode::null(), 0), "null");
        assert_eq!(type_signature(&SchemaNode::unknown(), 0), "any");
        assert_eq!(type_signature(&SchemaNode::date_time(), 0), "string");
    }

    #[test]
    fn test_object_with_optional_fields() {
        let schema = SchemaNode::object()
            .with_property("name", SchemaNode::string())
            .with_optional_property("age", SchemaNode::number())
            .with_optional_property("role", SchemaNode::string());

        insta::assert_snapshot!(type_signature(&schema, 0), @r"
        {
          name: string
          age?: number
          role?: string
        }
        ");
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(type_signature(&SchemaNode::object(), 0), "{}");
        assert_eq!(type_signature(&SchemaNode::new(SchemaKind::Object), 2), "{}");
    }

    #[test]
    fn test_nested_object_indentation() {
        let schema = SchemaNode::object().with_property(
            "user",
            SchemaNode::object()
                .with_property("id", SchemaNode::integer())
                .with_optional_property("email", SchemaNode::string()),
        );

        assert_eq!(
            type_signature(&schema, 0),
            "{\n  user: {\n    id: number\n    email?: string\n  }\n}"
        );
    }

    #[test]
    fn test_enum_literals() {
        let status = SchemaNode::enumeration(["active", "inactive", "pending"]);
        let schema = SchemaNode::object().with_property("status", status);

        insta::assert_snapshot!(type_signature(&schema, 0), @r#"
        {
          status: "active" | "inactive" | "pending"
        }
        "#);
    }

    #[test]
    fn test_const_literals() {
        assert_eq!(type_signature(&SchemaNode::constant("hello"), 0), "\"hello\"");
        assert_eq!(type_signature(&SchemaNode::constant(42), 0), "42");
        assert_eq!(type_signature(&SchemaNode::constant(true), 0), "true");
        assert_eq!(type_signature(&SchemaNode::constant(Value::Null), 0), "null");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            type_signature(&SchemaNode::array(SchemaNode::string()), 0),
            "string[]"
        );
        assert_eq!(
            type_signature(&SchemaNode::new(SchemaKind::Array), 0),
            "any[]"
        );
        assert_eq!(
            type_signature(
                &SchemaNode::array(SchemaNode::any_of(vec![
                    SchemaNode::string(),
                    SchemaNode::number()
                ])),
                0
            ),
            "(string | number)[]"
        );
        assert_eq!(
            type_signature(&SchemaNode::array(SchemaNode::array(SchemaNode::boolean())), 0),
            "boolean[][]"
        );
    }

    #[test]
    fn test_array_of_objects() {
        let schema = SchemaNode::array(
            SchemaNode::object()
                .with_property("id", SchemaNode::number())
                .with_property("name", SchemaNode::string()),
        );

        insta::assert_snapshot!(type_signature(&schema, 0), @r"
        Array<{
          id: number
          name: string
        }>
        ");
    }

    #[test]
    fn test_nullable() {
        let schema = SchemaNode::object()
            .with_property("email", SchemaNode::string().nullable())
            .with_property("lastLogin", SchemaNode::date_time().nullable());

        insta::assert_snapshot!(type_signature(&schema, 0), @r"
        {
          email: string | null
          lastLogin: string | null
        }
        ");
    }

    #[test]
    fn test_union_of_objects() {
        let schema = SchemaNode::object().with_property(
            "filter",
            SchemaNode::any_of(vec![
                SchemaNode::object()
                    .with_property("type", SchemaNode::constant("id"))
                    .with_property("value", SchemaNode::number()),
                SchemaNode::object()
                    .with_property("type", SchemaNode::constant("name"))
                    .with_property("value", SchemaNode::string()),
            ]),
        );

        insta::assert_snapshot!(type_signature(&schema, 0), @r#"
        {
          filter: {
            type: "id"
            value: number
          } | {
            type: "name"
            value: string
          }
        }
        "#);
    }

    #[test]
    fn test_intersection_of_objects() {
        let schema = SchemaNode::all_of(vec![
            SchemaNode::object().with_property("id", SchemaNode::number()),
            SchemaNode::object()
                .with_property("name", SchemaNode::string())
                .with_optional_property("id", SchemaNode::string()),
        ]);

        // Required sets are unioned, so `id` stays required
        insta::assert_snapshot!(type_signature(&schema, 0), @r"
        {
          id: string
          name: string
        }
        ");
    }

    #[test]
    fn test_intersection_with_union_member() {
        let schema = SchemaNode::all_of(vec![
            SchemaNode::object().with_property("id", SchemaNode::number()),
            SchemaNode::one_of(vec![
                SchemaNode::object().with_property("a", SchemaNode::string()),
                SchemaNode::object().with_property("b", SchemaNode::boolean()),
            ]),
        ]);

        insta::assert_snapshot!(type_signature(&schema, 0), @r"
        {
          id: number
        } & ({
          a: string
        } | {
          b: boolean
        })
        ");
    }

    #[test]
    fn test_intersection_without_objects() {
        let schema = SchemaNode::all_of(vec![
            SchemaNode::string(),
            SchemaNode::record(SchemaNode::number()),
        ]);

        assert_eq!(
            type_signature(&schema, 0),
            "string & Record<string, number>"
        );
    }

    #[test]
    fn test_records() {
        assert_eq!(
            type_signature(&SchemaNode::record(SchemaNode::number()), 0),
            "Record<string, number>"
        );

        let schema = SchemaNode::object().with_property(
            "data",
            SchemaNode::record(SchemaNode::object().with_property("val", SchemaNode::boolean())),
        );
        insta::assert_snapshot!(type_signature(&schema, 0), @r"
        {
          data: Record<string, {
            val: boolean
          }>
        }
        ");
    }

    #[test]
    fn test_non_identifier_keys_are_quoted() {
        let schema = SchemaNode::object()
            .with_property("content-type", SchemaNode::string())
            .with_property("$ok_1", SchemaNode::boolean())
            .with_optional_property("2fa", SchemaNode::boolean());

        insta::assert_snapshot!(type_signature(&schema, 0), @r#"
        {
          "content-type": string
          $ok_1: boolean
          "2fa"?: boolean
        }
        "#);
    }
}
