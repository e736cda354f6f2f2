/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::canonical_request::{
    CanonicalRequest, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use super::error::SigningError;
use super::settings::PayloadChecksumKind;
use crate::date_fmt::format_date_time;
use crate::sign::{calculate_signature, generate_signing_key, sha256_hex_string};
use crate::{SigningOutput, SigningParams};
use http::header::{HeaderName, HeaderValue, AUTHORIZATION};
use http::{HeaderMap, Method, Uri};

const HMAC_256: &str = "AWS4-HMAC-SHA256";

/// The parts of an HTTP request that participate in the signature
#[derive(Debug)]
pub struct SignableRequest<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap<HeaderValue>,
    body: &'a [u8],
}

impl<'a> SignableRequest<'a> {
    pub fn new(
        method: &'a Method,
        uri: &'a Uri,
        headers: &'a HeaderMap<HeaderValue>,
        body: &'a [u8],
    ) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
        }
    }

    pub fn method(&self) -> &Method {
        self.method
    }

    pub fn uri(&self) -> &Uri {
        self.uri
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        self.headers
    }

    pub fn body(&self) -> &[u8] {
        self.body
    }
}

/// Headers that must be set on the request for the signature to be valid
#[derive(Debug)]
pub struct SigningInstructions {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl SigningInstructions {
    pub fn headers(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter().map(|(k, v)| (k, v))
    }

    pub fn apply_to_request<B>(self, request: &mut http::Request<B>) {
        for (name, value) in self.headers {
            request.headers_mut().insert(name, value);
        }
    }
}

/// Produces a signature for `request` and the headers that carry it
pub fn sign(
    request: SignableRequest<'_>,
    params: &SigningParams<'_>,
) -> Result<SigningOutput<SigningInstructions>, SigningError> {
    let date_time = format_date_time(params.time);
    let creq = CanonicalRequest::from(&request, params, &date_time)?;
    let scope = format!(
        "{}/{}/{}/aws4_request",
        &date_time[..8],
        params.region,
        params.service_name
    );
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        HMAC_256,
        date_time,
        scope,
        sha256_hex_string(creq.to_string().as_bytes())
    );
    let signing_key = generate_signing_key(
        params.secret_key,
        params.time,
        params.region,
        params.service_name,
    );
    let signature = calculate_signature(signing_key, string_to_sign.as_bytes());

    let mut authorization = HeaderValue::from_str(&format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256, params.access_key, scope, creq.signed_headers, signature
    ))?;
    authorization.set_sensitive(true);

    let mut headers = vec![
        (HeaderName::from_static(X_AMZ_DATE), HeaderValue::from_str(&date_time)?),
        (AUTHORIZATION, authorization),
    ];
    if let Some(token) = params.security_token {
        let mut token = HeaderValue::from_str(token)?;
        token.set_sensitive(true);
        headers.push((HeaderName::from_static(X_AMZ_SECURITY_TOKEN), token));
    }
    if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
        headers.push((
            HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
            HeaderValue::from_str(&creq.payload_hash)?,
        ));
    }
    Ok(SigningOutput::new(SigningInstructions { headers }, signature))
}

#[cfg(test)]
mod test {
    use super::{sign, SignableRequest};
    use crate::http_request::{PayloadChecksumKind, SigningSettings};
    use crate::SigningParams;
    use pretty_assertions::assert_eq;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    fn test_time() -> SystemTime {
        // 20150830T123600Z
        UNIX_EPOCH + Duration::from_secs(1440938160)
    }

    fn params<'a>(
        service: &'a str,
        token: Option<&'a str>,
        settings: SigningSettings,
    ) -> SigningParams<'a> {
        SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: SECRET,
            security_token: token,
            region: "us-east-1",
            service_name: service,
            time: test_time(),
            settings,
        }
    }

    #[test]
    fn get_vanilla() {
        let mut request = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(Vec::new())
            .unwrap();
        let params = params("service", None, SigningSettings::default());
        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            request.body(),
        );
        let (instructions, signature) = sign(signable, &params).unwrap().into_parts();
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        instructions.apply_to_request(&mut request);
        assert_eq!(request.headers()["x-amz-date"], "20150830T123600Z");
        assert_eq!(
            request.headers()["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn user_agent_is_not_signed() {
        let request = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .header("user-agent", "aws-sdk-rust/0.1.0 os/linux lang/rust/1.52.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.1.0 api/test/0.1.0")
            .body(Vec::new())
            .unwrap();
        let params = params("service", None, SigningSettings::default());
        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            request.body(),
        );
        let output = sign(signable, &params).unwrap();
        assert_eq!(
            output.signature(),
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn json_post() {
        let body = br#"{"GatewayARN":"arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B"}"#;
        let request = http::Request::builder()
            .method("POST")
            .uri("https://storagegateway.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header(
                "x-amz-target",
                "StorageGateway_20130630.DescribeGatewayInformation",
            )
            .body(body.to_vec())
            .unwrap();
        let params = params("storagegateway", None, SigningSettings::default());
        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            request.body(),
        );
        let output = sign(signable, &params).unwrap();
        assert_eq!(
            output.signature(),
            "b900983c5ea4b8dc92be1af6f90a22c80592c9bebe11e32e7d6e8e4142dcf96c"
        );
    }

    #[test]
    fn query_and_session_token() {
        let request = http::Request::builder()
            .uri("https://catalog.marketplace.us-east-1.amazonaws.com/DescribeEntity?entityId=prod-1234&catalog=AWSMarketplace")
            .body(Vec::new())
            .unwrap();
        let params = params("aws-marketplace", Some("session-token"), SigningSettings::default());
        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            request.body(),
        );
        let (instructions, signature) = sign(signable, &params).unwrap().into_parts();
        assert_eq!(
            signature,
            "e5797eb8c2d298cc0ca9afc4ec5a9df243451bb44c5f98d5a3032687bf7750c0"
        );
        let names: Vec<_> = instructions.headers().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["x-amz-date", "authorization", "x-amz-security-token"]);
    }

    #[test]
    fn content_sha256_header() {
        let request = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(Vec::new())
            .unwrap();
        let mut settings = SigningSettings::default();
        settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
        let params = params("service", None, settings);
        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            request.body(),
        );
        let output = sign(signable, &params).unwrap();
        let sha = output
            .output()
            .headers()
            .find(|(k, _)| k.as_str() == "x-amz-content-sha256")
            .map(|(_, v)| v.to_str().unwrap().to_string());
        assert_eq!(
            sha.as_deref(),
            Some("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }
}
