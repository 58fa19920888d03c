// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde_json::Value;

const INDENT: &str = "  ";

pub(crate) fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// A JSON string literal (also a valid TypeScript string literal type).
pub(crate) fn quote(text: &str) -> String {
    Value::from(text).to_string()
}

/// Wrap pre-indented entries in braces, closing at `depth`.
pub(crate) fn block(entries: Vec<String>, separator: &str, depth: usize) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }

    format!("{{\n{}\n{}}}", entries.join(separator), indent(depth))
}
