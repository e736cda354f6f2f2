/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::idempotency_token::IdempotencyTokenProvider;
use aws_auth::ProvideCredentials;
use aws_endpoint::{DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::os_shim_internal::Env;
use aws_types::region::{ProvideRegion, Region};
use aws_types::SigningService;
use std::fmt;
use std::sync::Arc;

/// Service configuration shared by every Marketplace Catalog operation
#[derive(Clone)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: Arc<dyn ProvideCredentials>,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) make_token: Arc<IdempotencyTokenProvider>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("make_token", &self.make_token)
            .finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn from_env() -> Self {
        Builder::default().build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub(crate) fn configure_request(&self, request: &mut smithy_http::operation::Request) {
        let mut conf = request.config_mut();
        if let Some(region) = &self.region {
            conf.insert(region.clone());
        }
        aws_auth::set_provider(&mut conf, self.credentials_provider.clone());
        aws_endpoint::set_endpoint_resolver(&mut conf, self.endpoint_resolver.clone());
        // the endpoint prefix is `catalog.marketplace`
        // but requests are signed for `aws-marketplace`
        conf.insert(SigningService::from_static("aws-marketplace"));
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
    make_token: Option<IdempotencyTokenProvider>,
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

    pub fn endpoint_resolver(
        mut self,
        endpoint_resolver: impl ResolveAwsEndpoint + 'static,
    ) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    /// Source of the `ClientRequestToken` of `StartChangeSet` when the caller leaves it unset
    ///
    /// A `&'static str` makes every generated token identical.
    pub fn make_token(mut self, make_token: impl Into<IdempotencyTokenProvider>) -> Self {
        self.make_token = Some(make_token.into());
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
                Arc::new(DefaultAwsEndpointResolver::for_service("catalog.marketplace"))
            }),
            make_token: Arc::new(
                self.make_token
                    .unwrap_or_else(crate::idempotency_token::default_provider),
            ),
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
    fn requests_are_signed_for_aws_marketplace() {
        let conf = Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("AKID", "secret", None))
            .build();
        let mut request = Request::new(http::Request::new(SdkBody::empty()));
        conf.configure_request(&mut request);
        assert_eq!(
            request.config().get::<SigningService>(),
            Some(&SigningService::from_static("aws-marketplace"))
        );
    }

    #[test]
    fn static_tokens_show_in_debug() {
        let conf = Config::builder()
            .region(Region::new("us-east-1"))
            .make_token("token")
            .build();
        assert!(format!("{:?}", conf).contains("token"));
    }
}
