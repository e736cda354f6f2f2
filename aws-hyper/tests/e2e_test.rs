/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::response::ParseStrictResponse;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, smithy_types::Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).to_string())
        } else {
            Err(aws_http::json_errors::parse_generic_error(response))
        }
    }
}

fn test_operation() -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "StorageGateway_20130630.ListGateways")
            .body(SdkBody::from("{}"))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
        );
        aws_auth::set_provider(
            conf,
            Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
        );
        conf.insert(Region::new("test-region"));
        conf.insert(SigningService::from_static("test-service"));
        conf.insert(OperationSigningConfig::default_config());
        conf.insert(AwsUserAgent::for_tests());
        conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(Metadata::new("ListGateways", "storagegateway"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

fn expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(Uri::from_static("https://test-service.test-region.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", "StorageGateway_20130630.ListGateways")
        .header("x-amz-date", "20210215T184017Z")
        .header(
            USER_AGENT,
            "aws-sdk-rust/0.123.test os/windows lang/rust/1.50.0",
        )
        .header(
            "x-amz-user-agent",
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust/1.50.0",
        )
        .body(SdkBody::from("{}"))
        .unwrap()
}

fn no_backoff() -> RetryConfig {
    RetryConfig::default().with_static_base(|| 0_f64)
}

#[tokio::test]
async fn e2e_test() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation()).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
    let auth = conn.requests()[0]
        .actual
        .headers()
        .get(AUTHORIZATION)
        .expect("request is signed")
        .to_str()
        .expect("ascii")
        .to_string();
    assert!(
        auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request"
        ),
        "{}",
        auth
    );
}

#[tokio::test]
async fn server_errors_are_retried() {
    let events = vec![
        (
            expected_request(),
            http::Response::builder()
                .status(503)
                .body(r#"{"__type": "ServiceUnavailableError"}"#)
                .unwrap(),
        ),
        (
            expected_request(),
            http::Response::builder()
                .status(200)
                .body("ok")
                .unwrap(),
        ),
    ];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    let resp = client.call(test_operation()).await.expect("retry succeeds");
    assert_eq!(resp, "ok");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn retries_are_bounded_by_max_attempts() {
    let throttled = || {
        (
            expected_request(),
            http::Response::builder()
                .status(400)
                .header("x-amzn-requestid", "req-1")
                .body(r#"{"__type": "ThrottlingException", "message": "slow down"}"#)
                .unwrap(),
        )
    };
    let conn = TestConnection::new(vec![throttled(), throttled(), throttled()]);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    let err = client
        .call(test_operation())
        .await
        .expect_err("every attempt was throttled");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.code(), Some("ThrottlingException"));
            assert_eq!(err.message(), Some("slow down"));
            assert_eq!(err.request_id(), Some("req-1"));
            assert_eq!(raw.status().as_u16(), 400);
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let conn = TestConnection::new(vec![(
        expected_request(),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type": "com.amazonaws.storagegateway#InvalidGatewayRequestException"}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    let err = client.call(test_operation()).await.expect_err("client error");
    assert_eq!(
        err.service_error().and_then(|err| err.code()),
        Some("InvalidGatewayRequestException")
    );
    assert_eq!(conn.requests().len(), 1);
}

#[test]
fn blocking_client() {
    let conn = TestConnection::new(vec![(
        expected_request(),
        http::Response::builder().status(200).body("{}").unwrap(),
    )]);
    let client = aws_hyper::blocking::Client::new(conn.clone()).expect("runtime starts");
    let resp = client.call(test_operation()).expect("success");
    assert_eq!(resp, "{}");
    conn.assert_requests_match(&[]);
}
