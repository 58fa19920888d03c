// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// The documentation-relevant part of a procedure's annotation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Human-readable name for the route
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub docs: Option<RouteDocs>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDocs {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Used to group routes
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Whether the route requires authentication
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub auth: Option<bool>,
    /// Roles allowed to call the route
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// A recognized key whose value has the wrong shape is treated as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::debug!("Ignoring malformed route metadata field: {e}");
            Ok(None)
        }
    }
}

impl RouteMeta {
    /// Interpret a free-form payload. Unknown keys are ignored and a recognized key of the wrong
    /// shape reads as absent; only a payload that is not an object yields `None`.
    pub fn from_annotation(annotation: &Value) -> Option<Self> {
        match serde_json::from_value(annotation.clone()) {
            Ok(meta) => Some(meta),
            Err(e) => {
                tracing::debug!("Ignoring annotation that is not route metadata: {e}");
                None
            }
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.docs
            .as_ref()
            .and_then(|docs| docs.deprecated)
            .unwrap_or(false)
    }
}
