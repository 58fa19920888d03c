// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Documentation data for RPC routers.
//!
//! Walks a [`Router`]'s procedure table and produces one [`RouteDescriptor`] per procedure:
//! its kind, annotation payload, and, for each declared validator, the schema tree with an
//! example, a type signature, and the optional-field list computed by `schema_translator`.
//!
//! # Example
//!
//! ```
//! use route_collector::{Procedure, Router, Shape, ShapeField, collect_routes};
//!
//! let router = Router::new().procedure(
//!     "users.get",
//!     Procedure::query().input(Shape::object([ShapeField::new("id", Shape::String)])),
//! );
//!
//! let routes = collect_routes(&router);
//! assert_eq!(routes[0].input_type_script.as_deref(), Some("{\n  id: string\n}"));
//! ```

mod bundle;
mod collector;
mod descriptor;
pub mod env;
pub mod env_const;
mod error;
mod exportable;
mod meta;
mod router;
mod schemars_export;
mod shape;

pub use bundle::{DocsBundle, DocsConfig, collect_bundle};
pub use collector::{collect_routes, to_schema_node};
pub use descriptor::RouteDescriptor;
pub use error::{ConversionError, SchemaExportError};
pub use exportable::SchemaExportable;
pub use meta::{RouteDocs, RouteMeta};
pub use router::{Procedure, ProcedureKind, Router};
pub use schemars_export::Schemars;
pub use shape::{Shape, ShapeField};
