// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use schema_translator::SchemaParseError;

#[derive(Debug, thiserror::Error)]
pub enum SchemaExportError {
    #[error("Validator has no JSON Schema representation: {0}")]
    Unrepresentable(String),

    #[error("Failed to serialize JSON schema: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a validator could not be turned into a schema tree.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Export(#[from] SchemaExportError),

    #[error(transparent)]
    Parse(#[from] SchemaParseError),
}
