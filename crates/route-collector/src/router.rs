// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The procedure table the collector walks.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::exportable::SchemaExportable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    #[default]
    Query,
    Mutation,
    Subscription,
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        };
        write!(f, "{name}")
    }
}

/// A named, invocable endpoint, as declared on a router.
#[derive(Clone, Default)]
pub struct Procedure {
    kind: Option<ProcedureKind>,
    meta: Option<Value>,
    inputs: Vec<Arc<dyn SchemaExportable>>,
    output: Option<Arc<dyn SchemaExportable>>,
}

impl Procedure {
    pub fn query() -> Self {
        Self::with_kind(ProcedureKind::Query)
    }

    pub fn mutation() -> Self {
        Self::with_kind(ProcedureKind::Mutation)
    }

    pub fn subscription() -> Self {
        Self::with_kind(ProcedureKind::Subscription)
    }

    /// A procedure that does not declare its kind (treated as a query)
    pub fn untyped() -> Self {
        Self::default()
    }

    fn with_kind(kind: ProcedureKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Append a validator to the input chain. Each link refines the previous ones, so the last
    /// one describes the input as the handler receives it.
    pub fn input(mut self, validator: impl SchemaExportable + 'static) -> Self {
        self.inputs.push(Arc::new(validator));
        self
    }

    pub fn output(mut self, validator: impl SchemaExportable + 'static) -> Self {
        self.output = Some(Arc::new(validator));
        self
    }

    /// Attach a free-form annotation payload
    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn kind(&self) -> ProcedureKind {
        self.kind.unwrap_or_default()
    }

    pub fn declared_kind(&self) -> Option<ProcedureKind> {
        self.kind
    }

    pub fn annotation(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    pub fn inputs(&self) -> &[Arc<dyn SchemaExportable>] {
        &self.inputs
    }

    pub fn output_validator(&self) -> Option<&dyn SchemaExportable> {
        self.output.as_deref()
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedure")
            .field("kind", &self.kind)
            .field("meta", &self.meta)
            .field("inputs", &self.inputs.len())
            .field("has_output", &self.output.is_some())
            .finish()
    }
}

/// A flat, insertion-ordered table from dot-delimited path to procedure.
#[derive(Debug, Clone, Default)]
pub struct Router {
    procedures: IndexMap<String, Procedure>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a procedure. Registering a path twice replaces the earlier procedure.
    pub fn procedure(mut self, path: impl Into<String>, procedure: Procedure) -> Self {
        self.insert(path.into(), procedure);
        self
    }

    /// Mount every procedure of `router` under `prefix.`
    pub fn nest(mut self, prefix: &str, router: Router) -> Self {
        for (path, procedure) in router.procedures {
            self.insert(format!("{prefix}.{path}"), procedure);
        }
        self
    }

    fn insert(&mut self, path: String, procedure: Procedure) {
        if self.procedures.contains_key(&path) {
            tracing::warn!("Procedure `{path}` is registered more than once; keeping the last one");
        }
        self.procedures.insert(path, procedure);
    }

    pub fn procedures(&self) -> impl Iterator<Item = (&str, &Procedure)> {
        self.procedures
            .iter()
            .map(|(path, procedure)| (path.as_str(), procedure))
    }

    pub fn get(&self, path: &str) -> Option<&Procedure> {
        self.procedures.get(path)
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_kind_defaults_to_query() {
        let procedure = Procedure::untyped();
        assert_eq!(procedure.declared_kind(), None);
        assert_eq!(procedure.kind(), ProcedureKind::Query);
        assert_eq!(Procedure::mutation().kind(), ProcedureKind::Mutation);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_value(ProcedureKind::Subscription).unwrap(),
            json!("subscription")
        );
        assert_eq!(ProcedureKind::Mutation.to_string(), "mutation");
    }

    #[test]
    fn test_insertion_order_and_nesting() {
        let users = Router::new()
            .procedure("list", Procedure::query())
            .procedure("create", Procedure::mutation());

        let router = Router::new()
            .procedure("health", Procedure::query())
            .nest("users", users)
            .procedure("about", Procedure::query());

        let paths: Vec<_> = router.procedures().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["health", "users.list", "users.create", "about"]);
    }

    #[test]
    fn test_duplicate_path_replaces() {
        let router = Router::new()
            .procedure("ping", Procedure::query())
            .procedure("ping", Procedure::mutation());

        assert_eq!(router.len(), 1);
        assert_eq!(router.get("ping").map(Procedure::kind), Some(ProcedureKind::Mutation));
    }

    #[test]
    fn test_input_chain() {
        let procedure = Procedure::query()
            .input(json!({ "type": "object" }))
            .input(json!({ "type": "string" }))
            .meta(json!({ "name": "Echo" }));

        assert_eq!(procedure.inputs().len(), 2);
        assert!(procedure.output_validator().is_none());
        assert_eq!(procedure.annotation(), Some(&json!({ "name": "Echo" })));
    }
}
