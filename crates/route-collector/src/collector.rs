// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use schema_translator::{SchemaNode, parse_schema};

use crate::{
    descriptor::RouteDescriptor,
    error::ConversionError,
    exportable::SchemaExportable,
    router::{Procedure, Router},
};

/// Describe every procedure of `router`, in registration order.
///
/// Never fails: a validator that cannot be converted only leaves its side of the descriptor
/// empty.
pub fn collect_routes(router: &Router) -> Vec<RouteDescriptor> {
    router
        .procedures()
        .map(|(path, procedure)| describe(path, procedure))
        .collect()
}

fn describe(path: &str, procedure: &Procedure) -> RouteDescriptor {
    let mut descriptor = RouteDescriptor::new(path, procedure.kind())
        .with_meta(procedure.annotation().cloned());

    // Only the last link of the input chain describes what the handler receives
    if let Some(input) = procedure.inputs().last() {
        match to_schema_node(input.as_ref()) {
            Ok(schema) => descriptor = descriptor.with_input(schema),
            Err(e) => tracing::warn!("Could not convert input schema of `{path}`: {e}"),
        }
    }

    if let Some(output) = procedure.output_validator() {
        match to_schema_node(output) {
            Ok(schema) => descriptor = descriptor.with_output(schema),
            Err(e) => tracing::warn!("Could not convert output schema of `{path}`: {e}"),
        }
    }

    tracing::debug!(
        "Collected {} `{path}` (input: {}, output: {})",
        descriptor.kind,
        descriptor.input_schema.is_some(),
        descriptor.output_schema.is_some()
    );

    descriptor
}

/// Export a validator's JSON Schema and parse it into a schema tree
pub fn to_schema_node(validator: &dyn SchemaExportable) -> Result<SchemaNode, ConversionError> {
    let text = validator.export_json_schema()?;
    Ok(parse_schema(&text)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        error::SchemaExportError,
        router::ProcedureKind,
        shape::{Shape, ShapeField},
    };

    #[test]
    fn test_last_input_wins() {
        let router = Router::new().procedure(
            "search",
            Procedure::query()
                .input(Shape::object([ShapeField::new("tenant", Shape::String)]))
                .input(Shape::object([ShapeField::new("query", Shape::String)])),
        );

        let routes = collect_routes(&router);
        assert_eq!(
            routes[0].input_example.as_deref(),
            Some("{\n  \"query\": \"string\"\n}")
        );
    }

    #[test]
    fn test_untyped_procedure_is_query() {
        let router = Router::new().procedure("legacy", Procedure::untyped());
        let routes = collect_routes(&router);

        assert_eq!(routes[0].kind, ProcedureKind::Query);
        assert_eq!(routes[0].input_schema, None);
        assert_eq!(routes[0].output_schema, None);
    }

    #[test]
    fn test_sides_fail_independently() {
        let router = Router::new().procedure(
            "upload",
            Procedure::mutation()
                .input(Shape::object([ShapeField::new("file", Shape::custom("fileUpload"))]))
                .output(json!({ "type": "boolean" })),
        );

        let route = &collect_routes(&router)[0];

        assert_eq!(route.input_schema, None);
        assert_eq!(route.input_example, None);
        assert_eq!(route.input_type_script, None);
        assert_eq!(route.input_optional_fields, None);
        assert_eq!(route.output_example.as_deref(), Some("true"));
        assert_eq!(route.output_type_script.as_deref(), Some("boolean"));
    }

    #[test]
    fn test_to_schema_node_errors() {
        assert!(matches!(
            to_schema_node(&Shape::custom("refine")),
            Err(ConversionError::Export(SchemaExportError::Unrepresentable(_)))
        ));
        assert!(matches!(
            to_schema_node(&"{ broken"),
            Err(ConversionError::Parse(_))
        ));
    }
}
