/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_sigv4::http_request::{
    sign, PayloadChecksumKind, SignableRequest, SigningSettings, UriEncoding,
};
use aws_sigv4::SigningParams;
use aws_types::region::SigningRegion;
use aws_types::SigningService;
use http::Uri;
use std::borrow::Cow;
use std::fmt;
use std::time::SystemTime;

pub type SigningError = aws_sigv4::http_request::SigningError;

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signing_options: SigningOptions,
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// The signing configuration used by every JSON operation
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_options: SigningOptions {
                double_uri_encode: true,
                content_sha256_header: false,
            },
            signing_requirements: SigningRequirements::Required,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum SigningRequirements {
    /// A signature MAY be added if credentials are defined
    Optional,

    /// A signature MUST be added.
    ///
    /// If no credentials are provided, this will return an error without dispatching the operation.
    Required,

    /// A signature MUST NOT be added.
    Disabled,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        let mut settings = SigningSettings::default();
        settings.uri_encoding = if operation_config.signing_options.double_uri_encode {
            UriEncoding::Double
        } else {
            UriEncoding::Single
        };
        settings.payload_checksum_kind = if operation_config.signing_options.content_sha256_header {
            PayloadChecksumKind::XAmzSha256
        } else {
            PayloadChecksumKind::NoHeader
        };
        settings
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// End users will not typically call this directly. It is used via
    /// [`SigV4SigningStage`](crate::middleware::SigV4SigningStage) in the request pipeline.
    pub fn sign<B: AsRef<[u8]>>(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<B>,
    ) -> Result<String, SigningError> {
        if let Cow::Owned(deduped) = dedupe_leading_forward_slashes(request.uri().path()) {
            let mut parts = request.uri().clone().into_parts();
            let path_and_query = match request.uri().query() {
                Some(query) => format!("{}?{}", deduped, query),
                None => deduped,
            };
            if let Ok(pq) = path_and_query.parse() {
                parts.path_and_query = Some(pq);
                if let Ok(uri) = Uri::from_parts(parts) {
                    *request.uri_mut() = uri;
                }
            }
        }

        let params = SigningParams {
            access_key: credentials.access_key_id(),
            secret_key: credentials.secret_access_key(),
            security_token: credentials.session_token(),
            region: request_config.region.as_ref(),
            service_name: request_config.service.as_ref(),
            time: request_config.request_ts,
            settings: Self::settings(operation_config),
        };

        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            request.body().as_ref(),
        );
        let (instructions, signature) = sign(signable, &params)?.into_parts();
        instructions.apply_to_request(request);
        Ok(signature)
    }
}

/// Multiple leading slashes on a path are collapsed to one before signing
fn dedupe_leading_forward_slashes(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim_start_matches('/');
    if path.len() - trimmed.len() > 1 {
        Cow::Owned(format!("/{}", trimmed))
    } else {
        Cow::Borrowed(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{dedupe_leading_forward_slashes, OperationSigningConfig, RequestConfig, SigV4Signer};
    use aws_auth::Credentials;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;
    use std::borrow::Cow;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn dedupe_slashes() {
        assert_eq!(dedupe_leading_forward_slashes("/"), Cow::Borrowed("/"));
        assert_eq!(dedupe_leading_forward_slashes("/a"), Cow::Borrowed("/a"));
        assert_eq!(
            dedupe_leading_forward_slashes("///a/b"),
            Cow::<str>::Owned("/a/b".to_string())
        );
    }

    #[test]
    fn sign_vanilla() {
        let mut request = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(Vec::<u8>::new())
            .unwrap();
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("service");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH + Duration::from_secs(1440938160),
            region: &region,
            service: &service,
        };
        let creds = Credentials::from_keys(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
        );
        let signature = SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut request,
            )
            .expect("signing succeeds");
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert!(request.headers().contains_key("authorization"));
    }
}
