/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod env;

use crate::Credentials;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// The provider found no credentials, eg. `AWS_ACCESS_KEY_ID` is unset
    #[error("no credentials were loaded by the credentials provider")]
    CredentialsNotLoaded,
    #[error("credentials could not be loaded: {0}")]
    Unhandled(#[source] Box<dyn Error + Send + Sync + 'static>),
}

/// A credentials provider
///
/// Providers are invoked on every signing attempt, so caching belongs inside the provider.
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}

pub type CredentialsProvider = Arc<dyn ProvideCredentials>;

pub fn default_provider() -> impl ProvideCredentials {
    env::EnvironmentVariableCredentialsProvider::new()
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

pub fn set_provider(config: &mut PropertyBag, provider: CredentialsProvider) {
    config.insert(provider);
}

#[cfg(test)]
mod test {
    use crate::provider::{set_provider, CredentialsProvider, ProvideCredentials};
    use crate::Credentials;
    use smithy_http::property_bag::PropertyBag;
    use std::sync::Arc;

    #[test]
    fn providers_are_found_in_the_bag() {
        let mut bag = PropertyBag::new();
        set_provider(
            &mut bag,
            Arc::new(Credentials::from_keys("akid", "secret", None)),
        );
        let provider = bag.get::<CredentialsProvider>().expect("provider was set");
        assert_eq!(
            provider.provide_credentials().unwrap().access_key_id(),
            "akid"
        );
    }
}
