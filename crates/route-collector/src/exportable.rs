// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use serde_json::Value;

use crate::error::SchemaExportError;

/// A validator that can describe what it accepts as JSON Schema text.
///
/// The collector depends only on this capability; each validation source (JSON documents,
/// [`Shape`](crate::Shape) descriptions, `schemars` types) provides its own implementation.
pub trait SchemaExportable: Send + Sync {
    fn export_json_schema(&self) -> Result<String, SchemaExportError>;
}

/// An already-built JSON Schema document
impl SchemaExportable for Value {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// JSON Schema text, exported as-is (validity is checked when the text is parsed)
impl SchemaExportable for str {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        Ok(self.to_string())
    }
}

impl SchemaExportable for String {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        self.as_str().export_json_schema()
    }
}

impl<T: SchemaExportable + ?Sized> SchemaExportable for &T {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        (**self).export_json_schema()
    }
}

impl<T: SchemaExportable + ?Sized> SchemaExportable for Box<T> {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        (**self).export_json_schema()
    }
}

impl<T: SchemaExportable + ?Sized> SchemaExportable for Arc<T> {
    fn export_json_schema(&self) -> Result<String, SchemaExportError> {
        (**self).export_json_schema()
    }
}
