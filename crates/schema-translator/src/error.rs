// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#[derive(Debug, thiserror::Error)]
pub enum SchemaParseError {
    #[error("Invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Schema nests deeper than {limit} levels once references are inlined")]
    TooDeep { limit: usize },
}
