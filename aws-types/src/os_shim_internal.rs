/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process environment access that tests can replace.

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Either the real process environment or a fixed set of variables.
///
/// Region, credential and user agent loading all read through this, so tests never have to
/// mutate the environment of the (multi-threaded) test process.
///
/// ```rust
/// use aws_types::os_shim_internal::Env;
/// let env = Env::from_slice(&[("AWS_REGION", "us-west-2")]);
/// assert_eq!(env.get("AWS_REGION").unwrap(), "us-west-2");
/// assert!(env.get("AWS_PROFILE").is_err());
/// ```
#[derive(Clone)]
pub struct Env(Arc<Source>);

enum Source {
    Process,
    Fixed(HashMap<String, String>),
}

impl Env {
    pub fn real() -> Self {
        Env(Arc::new(Source::Process))
    }

    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        vars.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    pub fn get(&self, name: &str) -> Result<String, VarError> {
        match &*self.0 {
            Source::Process => std::env::var(name),
            Source::Fixed(vars) => vars.get(name).cloned().ok_or(VarError::NotPresent),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Env::real()
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        Env(Arc::new(Source::Fixed(vars)))
    }
}
