// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![allow(dead_code)]

use route_collector::{Procedure, RouteDescriptor, Router, Shape, collect_routes};
use serde_json::Value;

/// A router of queries, each taking one object input
pub fn input_router<const N: usize>(procedures: [(&str, Shape); N]) -> Router {
    procedures
        .into_iter()
        .fold(Router::new(), |router, (path, input)| {
            router.procedure(path, Procedure::query().input(input))
        })
}

pub fn route(router: &Router, path: &str) -> RouteDescriptor {
    collect_routes(router)
        .into_iter()
        .find(|route| route.path == path)
        .unwrap_or_else(|| panic!("No route collected for `{path}`"))
}

pub fn input_schema(router: &Router, path: &str) -> Value {
    let route = route(router, path);
    serde_json::to_value(route.input_schema.expect("input schema")).unwrap()
}

pub fn input_example(router: &Router, path: &str) -> Value {
    let route = route(router, path);
    serde_json::from_str(&route.input_example.expect("input example")).unwrap()
}

pub fn input_type_script(router: &Router, path: &str) -> String {
    route(router, path).input_type_script.expect("input type")
}

pub fn optional_names(fields: Option<&[schema_translator::OptionalField]>) -> Vec<String> {
    fields
        .unwrap_or_default()
        .iter()
        .map(|field| field.name.clone())
        .collect()
}
