/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt;

/// An AWS region such as `us-east-1`. Selects both the endpoint and the signing scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Region(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Region(Cow::Borrowed(region))
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source of regions, consulted once when a client config is built.
pub trait ProvideRegion: Send + Sync {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// The provider used when no region was configured explicitly.
pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

const REGION_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];

/// Reads `AWS_REGION`, then `AWS_DEFAULT_REGION`.
#[non_exhaustive]
pub struct EnvironmentProvider {
    env: Env,
}

impl Default for EnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        Self::new_with_env(Env::real())
    }

    pub fn new_with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        REGION_VARS
            .iter()
            .find_map(|var| self.env.get(var).ok())
            .filter(|region| !region.is_empty())
            .map(Region::new)
    }
}

/// The region that goes into the credential scope of a signature.
///
/// Usually the same as the [`Region`] of the client. Endpoint resolution may override it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl SigningRegion {
    pub fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(region: Region) -> Self {
        SigningRegion(region.0)
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{EnvironmentProvider, ProvideRegion, Region, SigningRegion};

    fn region_from(vars: &[(&str, &str)]) -> Option<Region> {
        EnvironmentProvider::new_with_env(Env::from_slice(vars)).region()
    }

    #[test]
    fn aws_region_wins() {
        assert_eq!(
            region_from(&[("AWS_REGION", "us-west-2"), ("AWS_DEFAULT_REGION", "us-east-1")]),
            Some(Region::new("us-west-2"))
        );
    }

    #[test]
    fn default_region_is_a_fallback() {
        assert_eq!(
            region_from(&[("AWS_DEFAULT_REGION", "eu-west-1")]),
            Some(Region::from_static("eu-west-1"))
        );
        assert_eq!(region_from(&[]), None);
        assert_eq!(region_from(&[("AWS_REGION", "")]), None);
    }

    #[test]
    fn signing_region_keeps_the_name() {
        let signing: SigningRegion = Region::new("ap-south-1".to_string()).into();
        assert_eq!(signing.as_ref(), "ap-south-1");
        assert_eq!(Region::from_static("ap-south-1").to_string(), "ap-south-1");
    }
}
