// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use schema_translator::{OptionalField, SchemaNode, Translation};
use serde::Serialize;
use serde_json::Value;

use crate::{meta::RouteMeta, router::ProcedureKind};

/// The documentation record for one procedure.
///
/// Input and output fields are set or absent together: a side is absent when the procedure
/// declares no validator for it, or when the validator could not be converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ProcedureKind,
    /// The annotation payload, untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_optional_fields: Option<Vec<OptionalField>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_optional_fields: Option<Vec<OptionalField>>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, kind: ProcedureKind) -> Self {
        Self {
            path: path.into(),
            kind,
            meta: None,
            input_schema: None,
            input_example: None,
            input_type_script: None,
            input_optional_fields: None,
            output_schema: None,
            output_example: None,
            output_type_script: None,
            output_optional_fields: None,
        }
    }

    pub fn with_meta(mut self, meta: Option<Value>) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_input(mut self, schema: SchemaNode) -> Self {
        let Translation {
            example,
            type_signature,
            optional_fields,
        } = Translation::of(&schema);

        self.input_schema = Some(schema);
        self.input_example = Some(example);
        self.input_type_script = Some(type_signature);
        self.input_optional_fields = Some(optional_fields);
        self
    }

    pub fn with_output(mut self, schema: SchemaNode) -> Self {
        let Translation {
            example,
            type_signature,
            optional_fields,
        } = Translation::of(&schema);

        self.output_schema = Some(schema);
        self.output_example = Some(example);
        self.output_type_script = Some(type_signature);
        self.output_optional_fields = Some(optional_fields);
        self
    }

    /// The recognized part of the annotation payload, if it has the expected shape
    pub fn route_meta(&self) -> Option<RouteMeta> {
        self.meta.as_ref().and_then(RouteMeta::from_annotation)
    }

    /// The annotated name, falling back to the last path segment
    pub fn display_name(&self) -> String {
        self.route_meta()
            .and_then(|meta| meta.name)
            .unwrap_or_else(|| {
                self.path
                    .rsplit('.')
                    .next()
                    .unwrap_or(&self.path)
                    .to_string()
            })
    }
}
