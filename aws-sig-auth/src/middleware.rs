/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{
    OperationSigningConfig, RequestConfig, SigV4Signer, SigningError, SigningRequirements,
};
use aws_auth::{CredentialsError, CredentialsProvider};
use aws_types::region::SigningRegion;
use aws_types::SigningService;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `storagegateway`
/// - [`CredentialsProvider`](CredentialsProvider): A credentials provider to retrieve credentials
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration
/// If any of these fields are missing, the middleware will return an error.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("The request body could not be signed by this configuration")]
    InvalidBodyType,
    #[error("Signing failed: {0}")]
    SigningFailure(#[from] SigningError),
    #[error("Failed to load credentials from the credentials provider: {0}")]
    CredentialsLoadingError(#[from] CredentialsError),
}

fn signing_config(
    config: &PropertyBag,
) -> Result<(RequestConfig<'_>, &CredentialsProvider), SigningStageError> {
    let cred_provider = config
        .get::<CredentialsProvider>()
        .ok_or(SigningStageError::MissingCredentialsProvider)?;
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let signing_service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service: signing_service,
    };
    Ok((request_config, cred_provider))
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|req, config| {
            let operation_config = config
                .get::<OperationSigningConfig>()
                .ok_or(SigningStageError::MissingSigningConfig)?;
            match operation_config.signing_requirements {
                SigningRequirements::Disabled => return Ok(req),
                SigningRequirements::Optional if !config.contains::<CredentialsProvider>() => {
                    return Ok(req)
                }
                _ => {}
            }
            let (request_config, cred_provider) = signing_config(config)?;
            let creds = cred_provider.provide_credentials()?;

            // Only bodies held in memory can be signed
            let (parts, body) = req.into_parts();
            let signable_body = body.bytes().ok_or(SigningStageError::InvalidBodyType)?;
            let mut signable_request = http::Request::from_parts(parts, signable_body);

            self.signer.sign(
                operation_config,
                &request_config,
                &creds,
                &mut signable_request,
            )?;
            tracing::trace!(service = request_config.service.as_ref(), "signed request");
            let (signed_parts, _) = signable_request.into_parts();
            Ok(http::Request::from_parts(signed_parts, body))
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer};
    use aws_auth::{set_provider, Credentials};
    use aws_endpoint::{set_endpoint_resolver, AwsEndpointStage, DefaultAwsEndpointResolver};
    use aws_types::region::Region;
    use aws_types::SigningService;
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    // check that the endpoint middleware followed by signing middleware produce the expected result
    #[test]
    fn endpoint_plus_signer() {
        let provider = DefaultAwsEndpointResolver::for_service("storagegateway");
        let req = http::Request::builder()
            .uri("/")
            .body(SdkBody::from("{}"))
            .unwrap();
        let region = Region::new("us-east-1");
        let req = operation::Request::new(req)
            .augment(|req, conf| {
                conf.insert(region.clone());
                conf.insert(SigningService::from_static("storagegateway"));
                conf.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
                set_endpoint_resolver(conf, Arc::new(provider));
                set_provider(
                    conf,
                    Arc::new(Credentials::from_keys("AKIDEXAMPLE", "secret", None)),
                );
                Result::<_, ()>::Ok(req)
            })
            .expect("succeeds");

        let endpoint = AwsEndpointStage;
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let mut req = endpoint.apply(req).expect("add endpoint should succeed");
        let err = signer
            .apply(req.try_clone().expect("can clone"))
            .expect_err("no signing config");
        assert!(matches!(err, SigningStageError::MissingSigningConfig));

        req.config_mut()
            .insert(OperationSigningConfig::default_config());
        let req = signer.apply(req).expect("signing succeeded");
        let (req, _) = req.into_parts();
        assert!(req
            .headers()
            .get(AUTHORIZATION)
            .expect("auth header must be present")
            .to_str()
            .unwrap()
            .contains("/20210120/us-east-1/storagegateway/aws4_request"));
        assert_eq!(
            req.uri(),
            &http::Uri::from_static("https://storagegateway.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn missing_provider_is_reported() {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("{}")));
        req.config_mut()
            .insert(OperationSigningConfig::default_config());
        let err = SigV4SigningStage::new(SigV4Signer::new())
            .apply(req)
            .expect_err("no credentials provider");
        assert!(matches!(err, SigningStageError::MissingCredentialsProvider));
    }
}
