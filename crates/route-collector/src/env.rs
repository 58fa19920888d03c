// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Where documentation settings are read from: the process environment when deployed, a plain
//! map in tests.

use std::collections::HashMap;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// The value of `key`, unless it is unset or blank
    fn get_non_blank(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    /// A `true`/`false` (or `1`/`0`) setting; `None` when unset or blank
    fn get_flag(&self, key: &str) -> Result<Option<bool>, EnvError> {
        self.get_non_blank(key)
            .map(|value| parse_flag(key, value))
            .transpose()
    }
}

fn parse_flag(key: &str, value: String) -> Result<bool, EnvError> {
    let flag = value.trim();
    if flag == "1" || flag.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if flag == "0" || flag.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(EnvError::InvalidFlag {
            key: key.to_string(),
            value,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("`{key}` must be `true` or `false` (or `1`/`0`), found `{value}`")]
    InvalidFlag { key: String, value: String },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapEnvironment(HashMap<String, String>);

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}
