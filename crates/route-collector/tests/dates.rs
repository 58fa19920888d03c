// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod common;

use chrono::{DateTime, SecondsFormat, Utc};
use common::{input_example, input_router, input_schema, input_type_script, optional_names, route};
use route_collector::{Shape, ShapeField};
use serde_json::json;

fn find_by_date() -> route_collector::Router {
    input_router([(
        "findByDate",
        Shape::object([
            ShapeField::new("from", Shape::Date),
            ShapeField::new("to", Shape::Date),
        ]),
    )])
}

#[test]
fn test_date_fields_are_date_time_strings() {
    let schema = input_schema(&find_by_date(), "findByDate");

    for name in ["from", "to"] {
        assert_eq!(
            schema["properties"][name],
            json!({ "type": "string", "format": "date-time" })
        );
    }
}

#[test]
fn test_date_example_round_trips() {
    let example = input_example(&find_by_date(), "findByDate");
    let from = example["from"].as_str().unwrap();

    let parsed: DateTime<Utc> = DateTime::parse_from_rfc3339(from).unwrap().with_timezone(&Utc);
    assert_eq!(parsed.to_rfc3339_opts(SecondsFormat::Millis, true), from);
}

#[test]
fn test_optional_and_nullable_dates() {
    let router = input_router([
        (
            "findOptional",
            Shape::object([
                ShapeField::new("name", Shape::String),
                ShapeField::new("updatedAt", Shape::Date.optional()),
            ]),
        ),
        (
            "nullableDate",
            Shape::object([ShapeField::new("at", Shape::Date.nullable())]),
        ),
    ]);

    let route = route(&router, "findOptional");
    assert_eq!(
        optional_names(route.input_optional_fields.as_deref()),
        vec!["updatedAt"]
    );
    let optional = route.input_optional_fields.unwrap();
    assert!(DateTime::parse_from_rfc3339(optional[0].example.trim_matches('"')).is_ok());

    let at = &input_schema(&router, "nullableDate")["properties"]["at"];
    assert_eq!(
        at["anyOf"][0],
        json!({ "type": "string", "format": "date-time" })
    );
    assert_eq!(
        input_type_script(&router, "nullableDate"),
        "{\n  at: string | null\n}"
    );
}

#[test]
fn test_mixed_fields() {
    let router = input_router([(
        "create",
        Shape::object([
            ShapeField::new("title", Shape::String),
            ShapeField::new("count", Shape::Number),
            ShapeField::new("active", Shape::Boolean),
            ShapeField::new("publishedAt", Shape::Date),
            ShapeField::new("expiresAt", Shape::Date.optional()),
        ]),
    )]);

    assert_eq!(
        input_example(&router, "create"),
        json!({
            "title": "string",
            "count": 0,
            "active": true,
            "publishedAt": "2024-01-01T00:00:00.000Z"
        })
    );
}
