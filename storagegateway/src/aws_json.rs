/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS JSON 1.1 request construction & response bodies

use aws_http::AwsErrorRetryPolicy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::{BuildError, Metadata, Operation, Request};

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "StorageGateway_20130630";

/// Serialize `input` into a `POST /` targeting `operation_name`
///
/// The URI carries no authority: `AwsEndpointStage` fills it in from the configured region.
pub(crate) fn build_operation<H, T: Serialize>(
    input: &T,
    operation_name: &'static str,
    handler: H,
    config: &crate::config::Config,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let body = serde_json::to_vec(input).map_err(|err| BuildError::SerializationError(err.into()))?;
    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header("x-amz-target", format!("{}.{}", TARGET_PREFIX, operation_name))
        .header(http::header::CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?;
    let mut request = Request::new(request);
    config.configure_request(&mut request);
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "storagegateway"))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

/// Deserialize a response body. Operations without output members may answer with no body at all.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod test {
    use crate::aws_json::{build_operation, parse_body};
    use crate::input::{DescribeGatewayInformationInput, ListGatewaysInput};
    use crate::operation::ListGateways;
    use crate::output::{DeleteGatewayOutput, ListGatewaysOutput};
    use crate::{Config, Credentials, Region};
    use protocol_test_helpers::{assert_ok, validate_body, validate_headers};

    fn conf() -> Config {
        Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("AKID", "secret", None))
            .build()
    }

    #[test]
    fn requests_target_the_operation() {
        let op = DescribeGatewayInformationInput::builder()
            .gateway_arn("arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B")
            .build(&conf())
            .expect("valid input");
        let http = op.request().http();
        assert_eq!(http.method(), http::Method::POST);
        assert_eq!(http.uri(), "/");
        assert_ok(validate_headers(
            http,
            &[
                ("content-type", "application/x-amz-json-1.1"),
                (
                    "x-amz-target",
                    "StorageGateway_20130630.DescribeGatewayInformation",
                ),
                ("content-length", "83"),
            ],
        ));
        assert_ok(validate_body(
            http.body().bytes().expect("body is in memory"),
            r#"{"GatewayARN":"arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B"}"#,
        ));
        assert_eq!(
            op.metadata().map(|m| m.name()),
            Some("DescribeGatewayInformation")
        );
    }

    #[test]
    fn empty_input_is_an_empty_object() {
        let op = build_operation(
            &ListGatewaysInput::from(ListGatewaysInput::builder()),
            "ListGateways",
            ListGateways::new(),
            &conf(),
        )
        .expect("valid input");
        assert_eq!(op.request().http().body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn empty_bodies_parse_as_empty_objects() {
        let output: DeleteGatewayOutput = parse_body(b"").expect("empty body is valid");
        assert_eq!(output, DeleteGatewayOutput::builder().build());
        let output: ListGatewaysOutput =
            parse_body(br#"{"Gateways":[],"Marker":"m"}"#).expect("valid body");
        assert_eq!(output.marker(), Some("m"));
        assert!(parse_body::<ListGatewaysOutput>(b"{").is_err());
    }
}
