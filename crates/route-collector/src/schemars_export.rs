// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{fmt, marker::PhantomData};

use schemars::{JsonSchema, schema_for};

use crate::{error::SchemaExportError, exportable::SchemaExportable};

/// Validates values of the Rust type `T`, described by its `schemars` schema.
///
/// Nested types land in `$defs` and are referenced with `$ref`; the translator inlines them.
pub struct Schemars<T>(PhantomData<fn() -> T>);

impl<T> Schemars<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Schemars<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Schemars<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schemars<{}>", std::any::type_name::<T>())
    }
}

impl<T: JsonSchema> SchemaExportable for Schemars<T> {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        Ok(serde_json::to_string(&schema_for!(T))?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Todo {
        title: String,
        done: bool,
        note: Option<String>,
    }

    #[test]
    fn test_export_struct() {
        let text = Schemars::<Todo>::new().export_json_schema().unwrap();
        let schema: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["title"], "Todo");
        assert_eq!(schema["properties"]["title"]["type"], "string");

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"title"));
        assert!(required.contains(&"done"));
        assert!(!required.contains(&"note"));
    }
}
