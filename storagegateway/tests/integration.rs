/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::provider::env::EnvironmentVariableCredentialsProvider;
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{RetryConfig, SdkError};
use aws_types::os_shim_internal::Env;
use http::header::AUTHORIZATION;
use http::Uri;
use smithy_http::body::SdkBody;
use std::time::{Duration, UNIX_EPOCH};
use storagegateway::blocking::Client;
use storagegateway::error::{DescribeTapesErrorKind, ListGatewaysErrorKind};
use storagegateway::input::{
    DescribeGatewayInformationInput, DescribeTapesInput, ListFileSharesInput, ListGatewaysInput,
    SetLocalConsolePasswordInput,
};
use storagegateway::model::{FileShareType, HostEnvironment};
use storagegateway::operation::DescribeGatewayInformation;
use storagegateway::{Config, Credentials, Endpoint, Region};

const GATEWAY_ARN: &str = "arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B";

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
        ))
        .build()
}

fn request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(Uri::from_static("https://storagegateway.us-east-1.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", format!("StorageGateway_20130630.{}", target))
        .body(SdkBody::from(body))
        .unwrap()
}

fn no_backoff() -> RetryConfig {
    RetryConfig::default().with_static_base(|| 0_f64)
}

#[tokio::test]
async fn describe_gateway_information_is_signed() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static("https://storagegateway.us-east-1.amazonaws.com/"))
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "StorageGateway_20130630.DescribeGatewayInformation")
            .header("content-length", "83")
            .header("x-amz-date", "20150830T123600Z")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/storagegateway/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-target, Signature=b2d15a4cfabb3f0cc21ebdbf6d3e3e0630acf15228f7b0581a58faf117590f61")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust/1.50.0")
            .body(SdkBody::from(r#"{"GatewayARN":"arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "b2c0c2f8-1d5a-4b5c-9c64-0a8d2c0e8a3e")
            .body(r#"{"GatewayARN":"arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B","GatewayId":"sgw-12A3456B","GatewayState":"RUNNING","GatewayType":"FILE_S3","HostEnvironment":"HYPER-V","GatewayNetworkInterfaces":[{"Ipv4Address":"10.0.0.12"}]}"#)
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = DescribeGatewayInformation::builder()
        .gateway_arn(GATEWAY_ARN)
        .build(&conf())
        .expect("valid operation");
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1440938160));
    op.config_mut().insert(AwsUserAgent::for_tests());
    let output = client.call(op).await.expect("request should succeed");
    assert_eq!(output.gateway_id(), Some("sgw-12A3456B"));
    assert_eq!(output.gateway_state(), Some("RUNNING"));
    assert_eq!(output.host_environment, Some(HostEnvironment::HyperV));
    let interfaces = output.gateway_network_interfaces.expect("interfaces are set");
    assert_eq!(interfaces[0].ipv4_address(), Some("10.0.0.12"));
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[test]
fn list_gateways_follows_markers() {
    let conn = TestConnection::new(vec![
        (
            request("ListGateways", "{}"),
            http::Response::builder()
                .status(200)
                .body(r#"{"Gateways":[{"GatewayARN":"arn:1","GatewayName":"first"}],"Marker":"page-2"}"#)
                .unwrap(),
        ),
        (
            request("ListGateways", r#"{"Marker":"page-2"}"#),
            http::Response::builder()
                .status(200)
                .body(r#"{"Gateways":[{"GatewayARN":"arn:2","GatewayName":"second"}]}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let names = client
        .list_gateways_pages(ListGatewaysInput::builder())
        .map(|page| {
            page.expect("page succeeds")
                .gateways
                .unwrap_or_default()
                .into_iter()
                .filter_map(|gateway| gateway.gateway_name)
        })
        .flatten()
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["first".to_string(), "second".to_string()]);
    conn.assert_requests_match(&[]);
    for req in conn.requests().iter() {
        assert!(req.actual.headers().contains_key(AUTHORIZATION));
    }
}

#[test]
fn repeated_marker_ends_pagination() {
    let same_page = || {
        http::Response::builder()
            .status(200)
            .body(r#"{"Gateways":[],"Marker":"stuck"}"#)
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (request("ListGateways", "{}"), same_page()),
        (request("ListGateways", r#"{"Marker":"stuck"}"#), same_page()),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let pages = client.list_gateways_pages(ListGatewaysInput::builder()).count();
    assert_eq!(pages, 2);
    conn.assert_requests_match(&[]);
}

#[test]
fn list_file_shares_follows_next_marker() {
    let conn = TestConnection::new(vec![
        (
            request("ListFileShares", "{}"),
            http::Response::builder()
                .status(200)
                .body(r#"{"FileShareInfoList":[{"FileShareARN":"arn:share-1","FileShareType":"NFS"}],"NextMarker":"m2"}"#)
                .unwrap(),
        ),
        (
            request("ListFileShares", r#"{"Marker":"m2"}"#),
            http::Response::builder()
                .status(200)
                .body(r#"{"FileShareInfoList":[{"FileShareARN":"arn:share-2","FileShareType":"SMB"}],"Marker":"m2"}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let shares = client
        .list_file_shares_pages(ListFileSharesInput::builder())
        .map(|page| page.expect("page succeeds").file_share_info_list.unwrap_or_default())
        .flatten()
        .collect::<Vec<_>>();
    let arns = shares
        .iter()
        .filter_map(|share| share.file_share_arn())
        .collect::<Vec<_>>();
    assert_eq!(arns, vec!["arn:share-1", "arn:share-2"]);
    assert_eq!(shares[1].file_share_type(), Some(&FileShareType::Smb));
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[test]
fn modeled_errors_carry_details() {
    let conn = TestConnection::new(vec![(
        request("ListGateways", "{}"),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "req-42")
            .body(r#"{"__type":"com.amazonaws.storagegateway.v20130630#InvalidGatewayRequestException","message":"The specified gateway was not found.","error":{"errorCode":"GatewayNotFound","errorDetails":{"gatewayArn":"arn:1"}}}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let err = client
        .list_gateways(ListGatewaysInput::builder())
        .expect_err("gateway was not found");
    let err = match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(raw.status().as_u16(), 400);
            err
        }
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_invalid_gateway_request_exception());
    assert_eq!(err.code(), Some("InvalidGatewayRequestException"));
    assert_eq!(err.message(), Some("The specified gateway was not found."));
    assert_eq!(err.request_id(), Some("req-42"));
    match &err.kind {
        ListGatewaysErrorKind::InvalidGatewayRequestException(inner) => {
            let detail = inner.error().expect("error detail is set");
            assert_eq!(detail.error_code(), Some("GatewayNotFound"));
            assert_eq!(
                detail
                    .error_details()
                    .and_then(|details| details.get("gatewayArn"))
                    .map(String::as_str),
                Some("arn:1")
            );
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert!(err.to_string().contains("The specified gateway was not found."));
    assert_eq!(conn.requests().len(), 1);
}

#[test]
fn unknown_error_codes_are_unhandled() {
    let conn = TestConnection::new(vec![(
        request("DescribeTapes", r#"{"GatewayARN":"arn:1"}"#),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "BrandNewException:http://internal.amazon.com/")
            .body(r#"{"message":"something new"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let err = client
        .describe_tapes(DescribeTapesInput::builder().gateway_arn("arn:1"))
        .expect_err("unknown error");
    let err = err.service_error().expect("service error");
    assert!(matches!(err.kind, DescribeTapesErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("BrandNewException"));
    assert_eq!(err.message(), Some("something new"));
}

#[test]
fn service_unavailable_is_retried() {
    let conn = TestConnection::new(vec![
        (
            request("ListGateways", "{}"),
            http::Response::builder()
                .status(503)
                .body(r#"{"__type":"ServiceUnavailableError","message":"try again"}"#)
                .unwrap(),
        ),
        (
            request("ListGateways", "{}"),
            http::Response::builder()
                .status(200)
                .body(r#"{"Gateways":[]}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone())
        .expect("runtime starts")
        .with_retry_config(no_backoff());
    let output = client
        .list_gateways(ListGatewaysInput::builder())
        .expect("second attempt succeeds");
    assert_eq!(output.gateways(), Some(&[][..]));
    assert_eq!(conn.requests().len(), 2);
}

#[test]
fn fractional_timestamps_are_preserved() {
    let conn = TestConnection::new(vec![(
        request("DescribeTapes", r#"{"GatewayARN":"arn:1","Limit":1}"#),
        http::Response::builder()
            .status(200)
            .body(r#"{"Tapes":[{"TapeARN":"arn:tape","TapeCreatedDate":1586290800.5,"TapeSizeInBytes":107374182400,"Progress":42.5}]}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let output = client
        .describe_tapes(DescribeTapesInput::builder().gateway_arn("arn:1").limit(1))
        .expect("valid response");
    let tape = &output.tapes().expect("tapes are set")[0];
    let created = tape.tape_created_date.expect("date is set");
    assert_eq!(created.epoch_seconds(), 1586290800);
    assert!((created.epoch_fractional_seconds() - 1586290800.5).abs() < 1e-3);
    assert_eq!(tape.tape_size_in_bytes, Some(107374182400));
    assert_eq!(tape.progress, Some(42.5));
    conn.assert_requests_match(&[]);
}

#[test]
fn endpoint_override_is_used() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static("http://localhost:8080/"))
            .body(SdkBody::from("{}"))
            .unwrap(),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKID", "secret", None))
        .endpoint_resolver(Endpoint::immutable(Uri::from_static("http://localhost:8080")))
        .build();
    let client = Client::from_conf_conn(conf, conn.clone()).expect("runtime starts");
    client
        .list_gateways(ListGatewaysInput::builder())
        .expect("empty body is a valid output");
    conn.assert_requests_match(&[]);
}

#[test]
fn unknown_enum_values_are_kept() {
    let env: HostEnvironment = "QUANTUM".into();
    assert_eq!(env, HostEnvironment::Unknown("QUANTUM".to_string()));
    assert_eq!(env.as_str(), "QUANTUM");
    assert_eq!(HostEnvironment::from("VMWARE"), HostEnvironment::Vmware);
}

#[test]
fn passwords_are_redacted_from_debug() {
    let input = SetLocalConsolePasswordInput::builder()
        .gateway_arn(GATEWAY_ARN)
        .local_console_password("hunter2-hunter2");
    assert!(!format!("{:?}", input).contains("hunter2"));
    let input = SetLocalConsolePasswordInput::from(input);
    let debug = format!("{:?}", input);
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains(GATEWAY_ARN));
}

#[test]
fn construction_failures_are_not_dispatched() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(EnvironmentVariableCredentialsProvider::new_with_env(
            Env::from_slice(&[]),
        ))
        .build();
    let client = Client::from_conf_conn(conf, conn.clone()).expect("runtime starts");
    let input = DescribeGatewayInformationInput::builder().gateway_arn(GATEWAY_ARN);
    match client.describe_gateway_information(input) {
        Err(SdkError::ConstructionFailure(_)) => {}
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(conn.requests().is_empty());
}
