// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Parsing JSON Schema documents into [`SchemaNode`] trees.
//!
//! Parsing is the only fallible step of translation. Documents nested deeper than
//! `serde_json`'s recursion limit are rejected here, whether the nesting is written out or
//! produced by inlining references.

use serde_json::Value;

use crate::{error::SchemaParseError, node::SchemaNode, refs::inline_local_refs};

pub fn parse_schema(text: &str) -> Result<SchemaNode, SchemaParseError> {
    let document: Value = serde_json::from_str(text)?;
    parse_schema_value(&document)
}

pub fn parse_schema_value(document: &Value) -> Result<SchemaNode, SchemaParseError> {
    let inlined = inline_local_refs(document)?;
    Ok(serde_json::from_value(inlined)?)
}
