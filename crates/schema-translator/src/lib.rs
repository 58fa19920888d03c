// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Schema translation for RPC documentation.
//!
//! This crate provides:
//! - [`SchemaNode`], a canonical tree for the JSON-Schema subset RPC validators emit
//! - Parsing JSON Schema text into that tree (with local `$ref` inlining)
//! - Three independent walks over the tree: example values, type signatures, and
//!   optional-field listings
//!
//! # Example
//!
//! ```
//! use schema_translator::{SchemaNode, Translation};
//!
//! let schema = SchemaNode::object()
//!     .with_property("name", SchemaNode::string())
//!     .with_optional_property("age", SchemaNode::number());
//!
//! let translation = Translation::of(&schema);
//! assert_eq!(translation.optional_fields[0].name, "age");
//! ```

pub mod error;
pub mod example;
mod fields;
pub mod node;
pub mod optional_fields;
pub mod parse;
mod refs;
mod text;
pub mod type_signature;

pub use error::SchemaParseError;
pub use example::{DATE_TIME_EXAMPLE, example};
pub use node::{DATE_TIME_FORMAT, SchemaKind, SchemaNode};
pub use optional_fields::{OptionalField, optional_fields};
pub use parse::{parse_schema, parse_schema_value};
pub use type_signature::type_signature;

/// Everything the translator derives from one schema root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Required-only example, rendered as JSON text
    pub example: String,
    pub type_signature: String,
    pub optional_fields: Vec<OptionalField>,
}

impl Translation {
    pub fn of(schema: &SchemaNode) -> Self {
        Self {
            example: example(schema, 0, false),
            type_signature: type_signature(schema, 0),
            optional_fields: optional_fields(schema),
        }
    }
}
