/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::ProvideCredentials;
use aws_endpoint::{DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::os_shim_internal::Env;
use aws_types::region::{ProvideRegion, Region};
use aws_types::SigningService;
use std::fmt;
use std::sync::Arc;

const ENDPOINT_PREFIX: &str = "storagegateway";
const SIGNING_SERVICE: &str = "storagegateway";

/// Service configuration shared by every Storage Gateway operation
///
/// ```rust
/// use storagegateway::{Config, Credentials, Region};
///
/// let conf = Config::builder()
///     .region(Region::new("us-west-2"))
///     .credentials_provider(Credentials::from_keys("AKID", "secret", None))
///     .build();
/// assert_eq!(conf.region(), Some(&Region::new("us-west-2")));
/// ```
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: Arc<dyn ProvideCredentials>,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Region from `AWS_REGION` (or `AWS_DEFAULT_REGION`), credentials from `AWS_ACCESS_KEY_ID`,
    /// `AWS_SECRET_ACCESS_KEY` & `AWS_SESSION_TOKEN`
    pub fn from_env() -> Self {
        Builder::default().build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Load everything middleware needs to dispatch an operation into its property bag
    pub(crate) fn configure_request(&self, request: &mut smithy_http::operation::Request) {
        let mut conf = request.config_mut();
        if let Some(region) = &self.region {
            conf.insert(region.clone());
        }
        aws_auth::set_provider(&mut conf, self.credentials_provider.clone());
        aws_endpoint::set_endpoint_resolver(&mut conf, self.endpoint_resolver.clone());
        conf.insert(SigningService::from_static(SIGNING_SERVICE));
        conf.insert(OperationSigningConfig::default_config());
        conf.insert(AwsUserAgent::new_from_environment(
            Env::real(),
            crate::API_METADATA.clone(),
        ));
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<Arc<dyn ProvideCredentials>>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn credentials_provider(
        mut self,
        credentials_provider: impl ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(credentials_provider));
        self
    }

    /// Override endpoint resolution, eg. `Endpoint::immutable(uri)` to send every request to `uri`
    pub fn endpoint_resolver(
        mut self,
        endpoint_resolver: impl ResolveAwsEndpoint + 'static,
    ) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self
                .region
                .or_else(|| aws_types::region::default_provider().region()),
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| Arc::new(aws_auth::default_provider())),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_service(ENDPOINT_PREFIX))
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::{Credentials, Region};
    use aws_types::SigningService;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::Request;

    #[test]
    fn configure_request_fills_the_property_bag() {
        let conf = Config::builder()
            .region(Region::new("eu-west-1"))
            .credentials_provider(Credentials::from_keys("AKID", "secret", None))
            .build();
        let mut request = Request::new(http::Request::new(SdkBody::empty()));
        conf.configure_request(&mut request);
        let bag = request.config();
        assert_eq!(bag.get::<Region>(), Some(&Region::new("eu-west-1")));
        assert_eq!(
            bag.get::<SigningService>(),
            Some(&SigningService::from_static("storagegateway"))
        );
        assert!(aws_endpoint::get_endpoint_resolver(&bag).is_some());
    }

    #[test]
    fn credentials_default_to_the_environment_provider() {
        let conf = Config::builder().region(Region::new("us-east-1")).build();
        let mut request = Request::new(http::Request::new(SdkBody::empty()));
        conf.configure_request(&mut request);
        assert!(request
            .config()
            .get::<aws_auth::CredentialsProvider>()
            .is_some());
    }

    #[test]
    fn debug_hides_credentials() {
        let conf = Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("AKID", "very-secret", None))
            .build();
        let debug = format!("{:?}", conf);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("us-east-1"));
    }
}
