/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;
use http::Uri;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to connect to an AWS Service
///
/// An `AwsEndpoint` captures all necessary information needed to connect to an AWS service, including:
/// - The URI of the endpoint (needed to actually send the request)
/// - The name of the service (needed downstream for signing)
/// - The signing region (which may differ from the actual region)
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    signing_service: Option<SigningService>,
    signing_region: Option<SigningRegion>,
}

impl AwsEndpoint {
    pub fn from_endpoint(endpoint: Endpoint) -> Self {
        AwsEndpoint {
            endpoint,
            signing_service: None,
            signing_region: None,
        }
    }

    pub fn with_signing_region(mut self, region: SigningRegion) -> Self {
        self.signing_region = Some(region);
        self
    }

    pub fn with_signing_service(mut self, service: SigningService) -> Self {
        self.signing_service = Some(service);
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri, None)
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// To provide a static endpoint, [`Endpoint`](smithy_http::endpoint::Endpoint) implements this trait.
/// Example usage:
/// ```rust
/// # mod storagegateway {
/// # use aws_endpoint::ResolveAwsEndpoint;
/// # pub struct ConfigBuilder;
/// # impl ConfigBuilder {
/// #     pub fn endpoint(&mut self, resolver: impl ResolveAwsEndpoint + 'static) {
/// #         // ...
/// #     }
/// # }
/// # }
/// use smithy_http::endpoint::Endpoint;
/// use http::Uri;
/// let config = storagegateway::ConfigBuilder.endpoint(
///     Endpoint::immutable(Uri::from_static("http://localhost:8080"))
/// );
/// ```
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// Builds `https://<prefix>.<region>.amazonaws.com`, or `.amazonaws.com.cn` in the China regions
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    endpoint_prefix: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(endpoint_prefix: &'static str) -> Self {
        Self { endpoint_prefix }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let dns_suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = Uri::from_maybe_shared(format!(
            "https://{}.{}.{}",
            self.endpoint_prefix,
            region.as_ref(),
            dns_suffix
        ))?;
        Ok(AwsEndpoint::from_endpoint(Endpoint::mutable(uri))
            .with_signing_region(region.clone().into()))
    }
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint::from_endpoint(self.clone()))
    }
}

pub type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(config: &PropertyBag) -> Option<&AwsEndpointResolver> {
    config.get()
}

pub fn set_endpoint_resolver(config: &mut PropertyBag, provider: AwsEndpointResolver) {
    config.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug)]
pub enum AwsEndpointStageError {
    NoEndpointResolver,
    NoRegion,
    EndpointResolutionError(BoxError),
    InvalidEndpoint(InvalidEndpoint),
}

impl Display for AwsEndpointStageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AwsEndpointStageError::NoEndpointResolver => {
                write!(f, "no endpoint resolver in the property bag")
            }
            AwsEndpointStageError::NoRegion => write!(f, "no region in the property bag"),
            AwsEndpointStageError::EndpointResolutionError(err) => {
                write!(f, "failed to resolve the endpoint: {}", err)
            }
            AwsEndpointStageError::InvalidEndpoint(err) => Display::fmt(err, f),
        }
    }
}

impl Error for AwsEndpointStageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AwsEndpointStageError::EndpointResolutionError(err) => Some(err.as_ref()),
            AwsEndpointStageError::InvalidEndpoint(err) => Some(err),
            _ => None,
        }
    }
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, config| {
            let provider =
                get_endpoint_resolver(config).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = config
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = %region, "resolved endpoint");
            let signing_region = endpoint
                .signing_region
                .clone()
                .unwrap_or_else(|| region.clone().into());
            config.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = &endpoint.signing_service {
                config.insert::<SigningService>(signing_service.clone());
            }
            endpoint
                .set_endpoint(http_req.uri_mut())
                .map_err(AwsEndpointStageError::InvalidEndpoint)?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError, DefaultAwsEndpointResolver,
        ResolveAwsEndpoint,
    };
    use aws_types::region::{Region, SigningRegion};
    use http::Uri;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;

    #[test]
    fn default_endpoint_updates_request() {
        let provider = Arc::new(DefaultAwsEndpointResolver::for_service("storagegateway"));
        let req = http::Request::builder()
            .uri("/")
            .body(SdkBody::from(""))
            .unwrap();
        let region = Region::new("us-east-1");
        let mut req = operation::Request::new(req);
        {
            let mut conf = req.config_mut();
            conf.insert(region.clone());
            set_endpoint_resolver(&mut conf, provider);
        };
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.config().get(),
            Some(&SigningRegion::from(region.clone()))
        );
        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://storagegateway.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn china_regions_use_the_cn_suffix() {
        let resolver = DefaultAwsEndpointResolver::for_service("catalog.marketplace");
        let endpoint = resolver
            .endpoint(&Region::new("cn-north-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://catalog.marketplace.cn-north-1.amazonaws.com.cn")
        );
    }

    #[test]
    fn static_endpoint_keeps_path_and_query() {
        let mut req = operation::Request::new(
            http::Request::builder()
                .uri("/ListEntities?x=1")
                .body(SdkBody::empty())
                .unwrap(),
        );
        {
            let mut conf = req.config_mut();
            conf.insert(Region::new("us-west-2"));
            set_endpoint_resolver(
                &mut conf,
                Arc::new(Endpoint::immutable(Uri::from_static("http://localhost:9000"))),
            );
        }
        let (req, _) = AwsEndpointStage
            .apply(req)
            .expect("should succeed")
            .into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("http://localhost:9000/ListEntities?x=1")
        );
    }

    #[test]
    fn missing_region() {
        let mut req = operation::Request::new(http::Request::new(SdkBody::empty()));
        set_endpoint_resolver(
            &mut req.config_mut(),
            Arc::new(DefaultAwsEndpointResolver::for_service("storagegateway")),
        );
        assert!(matches!(
            AwsEndpointStage.apply(req),
            Err(AwsEndpointStageError::NoRegion)
        ));
    }
}
