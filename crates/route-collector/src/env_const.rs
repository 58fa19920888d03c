// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::env::{EnvError, Environment};

pub const RPC_DOCS_TITLE: &str = "RPC_DOCS_TITLE";
pub const RPC_DOCS_INCLUDE_DEPRECATED: &str = "RPC_DOCS_INCLUDE_DEPRECATED";

pub const DEFAULT_DOCS_TITLE: &str = "API Documentation";

pub fn get_docs_title(env: &dyn Environment) -> String {
    env.get_non_blank(RPC_DOCS_TITLE)
        .unwrap_or_else(|| DEFAULT_DOCS_TITLE.to_string())
}

pub fn include_deprecated(env: &dyn Environment) -> Result<bool, EnvError> {
    Ok(env.get_flag(RPC_DOCS_INCLUDE_DEPRECATED)?.unwrap_or(true))
}
