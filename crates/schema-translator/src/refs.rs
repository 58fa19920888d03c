// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Inlining of document-local `$ref`s (`#`, `#/$defs/...`, `#/definitions/...`).
//!
//! The translator works on a finite tree, so a reference that is already being expanded
//! higher up (a recursive type) is cut and left as an unconstrained schema. References that
//! cannot be resolved inside the document are left unconstrained too, as are references met
//! after the expansion has produced [`MAX_INLINED_VALUES`] values.
//!
//! Expansion can nest far deeper than the document text does, so the inlined tree is held to
//! the same nesting limit `serde_json` applies when parsing text.

use serde_json::{Map, Value};

use crate::error::SchemaParseError;

/// Keywords whose values are data, not subschemas.
const LITERAL_KEYWORDS: [&str; 4] = ["const", "enum", "default", "examples"];

/// Definition tables are only reachable through references.
const DEFINITION_KEYWORDS: [&str; 2] = ["$defs", "definitions"];

/// Matches `serde_json`'s recursion limit for text.
pub(crate) const MAX_NESTING: usize = 128;

/// Shared definitions are copied at every use, which grows exponentially for layered DAGs.
pub(crate) const MAX_INLINED_VALUES: usize = 10_000;

pub(crate) fn inline_local_refs(document: &Value) -> Result<Value, SchemaParseError> {
    Inliner {
        root: document,
        expanding: Vec::new(),
        produced: 0,
    }
    .inline(document, 0)
}

struct Inliner<'a> {
    root: &'a Value,
    /// References on the current path
    expanding: Vec<String>,
    /// Values visited so far
    produced: usize,
}

impl Inliner<'_> {
    fn inline(&mut self, value: &Value, depth: usize) -> Result<Value, SchemaParseError> {
        self.produced += 1;

        match value {
            Value::Object(_) | Value::Array(_) if depth >= MAX_NESTING => {
                Err(SchemaParseError::TooDeep { limit: MAX_NESTING })
            }
            Value::Object(map) => match map.get("$ref") {
                Some(Value::String(reference)) => self.inline_reference(map, reference, depth),
                _ => Ok(Value::Object(self.inline_keywords(map, depth)?)),
            },
            Value::Array(elements) => elements
                .iter()
                .map(|element| self.inline(element, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            other => Ok(other.clone()),
        }
    }

    fn inline_keywords(
        &mut self,
        map: &Map<String, Value>,
        depth: usize,
    ) -> Result<Map<String, Value>, SchemaParseError> {
        let mut inlined = Map::new();
        for (key, value) in map {
            if key == "$ref" || DEFINITION_KEYWORDS.contains(&key.as_str()) {
                continue;
            }
            let value = if LITERAL_KEYWORDS.contains(&key.as_str()) {
                value.clone()
            } else {
                self.inline(value, depth + 1)?
            };
            inlined.insert(key.clone(), value);
        }
        Ok(inlined)
    }

    /// The resolved target takes the place of the referencing object, at the same depth.
    fn inline_reference(
        &mut self,
        map: &Map<String, Value>,
        reference: &str,
        depth: usize,
    ) -> Result<Value, SchemaParseError> {
        let siblings = self.inline_keywords(map, depth)?;

        let Some(pointer) = reference.strip_prefix('#') else {
            tracing::debug!("Leaving external schema reference `{reference}` unresolved");
            return Ok(Value::Object(siblings));
        };

        if self.expanding.iter().any(|active| active == reference) {
            tracing::debug!("Cutting recursive schema reference `{reference}`");
            return Ok(Value::Object(siblings));
        }

        if self.produced >= MAX_INLINED_VALUES {
            tracing::debug!(
                "Cutting schema reference `{reference}` after inlining {} values",
                self.produced
            );
            return Ok(Value::Object(siblings));
        }

        let root = self.root;
        let Some(target) = root.pointer(pointer) else {
            tracing::debug!("Schema reference `{reference}` does not resolve within the document");
            return Ok(Value::Object(siblings));
        };

        // References to references resolve without adding nesting
        if self.expanding.len() >= MAX_NESTING {
            return Err(SchemaParseError::TooDeep { limit: MAX_NESTING });
        }

        self.expanding.push(reference.to_string());
        let resolved = self.inline(target, depth);
        self.expanding.pop();

        Ok(match resolved? {
            // Keywords next to `$ref` (typically `description`) refine the target
            Value::Object(mut resolved) => {
                resolved.extend(siblings);
                Value::Object(resolved)
            }
            other if siblings.is_empty() => other,
            _ => Value::Object(siblings),
        })
    }
}
