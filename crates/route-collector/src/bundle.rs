// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;

use crate::{
    collector::collect_routes,
    descriptor::RouteDescriptor,
    env::{EnvError, Environment},
    env_const::{DEFAULT_DOCS_TITLE, get_docs_title, include_deprecated},
    router::Router,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsConfig {
    /// Title of the documentation page
    pub title: String,
    /// Whether routes annotated as deprecated are documented
    pub include_deprecated: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_DOCS_TITLE.to_string(),
            include_deprecated: true,
        }
    }
}

impl DocsConfig {
    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        Ok(Self {
            title: get_docs_title(env),
            include_deprecated: include_deprecated(env)?,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Everything a renderer needs to produce the documentation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocsBundle {
    pub title: String,
    pub routes: Vec<RouteDescriptor>,
}

pub fn collect_bundle(router: &Router, config: &DocsConfig) -> DocsBundle {
    let routes = collect_routes(router)
        .into_iter()
        .filter(|route| {
            config.include_deprecated
                || !route
                    .route_meta()
                    .is_some_and(|meta| meta.is_deprecated())
        })
        .collect();

    DocsBundle {
        title: config.title.clone(),
        routes,
    }
}
