// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::node::SchemaNode;

/// A property as seen by the translator walks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field<'a> {
    pub name: &'a str,
    pub schema: &'a SchemaNode,
    pub required: bool,
}

pub(crate) fn object_fields(node: &SchemaNode) -> Vec<Field<'_>> {
    node.property_entries()
        .map(|(name, schema)| Field {
            name,
            schema,
            required: node.required.contains(name),
        })
        .collect()
}

/// Merge the object-shaped members of an `allOf`.
///
/// Property tables and required sets are unioned. A key declared by several members keeps its
/// first position but takes the schema of the last member declaring it. Returns `None` when no
/// member is object-shaped.
pub(crate) fn merged_fields(members: &[SchemaNode]) -> Option<Vec<Field<'_>>> {
    let objects: Vec<&SchemaNode> = members
        .iter()
        .filter(|member| member.is_object_shaped())
        .collect();

    if objects.is_empty() {
        return None;
    }

    let mut properties: IndexMap<&str, &SchemaNode> = IndexMap::new();
    let mut required: HashSet<&str> = HashSet::new();

    for object in objects {
        properties.extend(object.property_entries());
        required.extend(object.required.iter().map(String::as_str));
    }

    Some(
        properties
            .into_iter()
            .map(|(name, schema)| Field {
                name,
                schema,
                required: required.contains(name),
            })
            .collect(),
    )
}
