/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{RetryConfig, SdkError};
use http::Uri;
use marketplacecatalog::blocking::Client;
use marketplacecatalog::error::{DescribeEntityErrorKind, ListEntitiesErrorKind};
use marketplacecatalog::input::{
    CancelChangeSetInput, DescribeChangeSetInput, DescribeEntityInput, ListChangeSetsInput,
    ListEntitiesInput, StartChangeSetInput,
};
use marketplacecatalog::model::{Change, ChangeStatus, Entity};
use marketplacecatalog::operation::DescribeEntity;
use marketplacecatalog::{Config, Credentials, Region};
use smithy_http::body::SdkBody;
use std::time::{Duration, UNIX_EPOCH};

const TOKEN: &str = "5d5bcd42-4e6d-4f3a-9b1b-0a8e2c13f6d0";

fn conf() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            Some("session-token".to_string()),
        ))
        .make_token(TOKEN)
        .build()
}

fn post(uri: &'static str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(Uri::from_static(uri))
        .header("content-type", "application/json")
        .body(SdkBody::from(body))
        .unwrap()
}

fn no_backoff() -> RetryConfig {
    RetryConfig::default().with_static_base(|| 0_f64)
}

#[tokio::test]
async fn describe_entity_is_signed() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri(Uri::from_static("https://catalog.marketplace.us-east-1.amazonaws.com/DescribeEntity?catalog=AWSMarketplace&entityId=prod-1234"))
            .header("x-amz-date", "20150830T123600Z")
            .header("x-amz-security-token", "session-token")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/aws-marketplace/aws4_request, SignedHeaders=host;x-amz-date;x-amz-security-token, Signature=e5797eb8c2d298cc0ca9afc4ec5a9df243451bb44c5f98d5a3032687bf7750c0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust/1.50.0")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .header("content-type", "application/json")
            .body(r#"{"EntityType":"AmiProduct@1.0","EntityIdentifier":"prod-1234@1","EntityArn":"arn:aws:aws-marketplace:us-east-1:123456789012:AWSMarketplace/AmiProduct/prod-1234","LastModifiedDate":"2018-02-27T13:45:22Z","Details":"{\"Versions\":[]}"}"#)
            .unwrap(),
    )]);
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = DescribeEntity::builder()
        .catalog("AWSMarketplace")
        .entity_id("prod-1234")
        .build(&conf())
        .expect("valid operation");
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1440938160));
    op.config_mut().insert(AwsUserAgent::for_tests());
    let output = client.call(op).await.expect("request should succeed");
    assert_eq!(output.entity_type(), Some("AmiProduct@1.0"));
    assert_eq!(output.last_modified_date(), Some("2018-02-27T13:45:22Z"));
    assert_eq!(output.details(), Some(r#"{"Versions":[]}"#));
    conn.assert_requests_match(&[]);
}

#[test]
fn missing_catalog_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let err = client
        .describe_entity(DescribeEntityInput::builder().entity_id("prod-1234"))
        .expect_err("catalog is required");
    match err {
        SdkError::ConstructionFailure(err) => assert!(err.to_string().contains("catalog")),
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(conn.requests().is_empty());
}

#[test]
fn start_change_set_fills_the_client_token() {
    let conn = TestConnection::new(vec![(
        post(
            "https://catalog.marketplace.us-east-1.amazonaws.com/StartChangeSet",
            r#"{"Catalog":"AWSMarketplace","ChangeSet":[{"ChangeType":"AddRevisions","Entity":{"Type":"DataProduct@1.0","Identifier":"prod-1234"},"Details":"{}"}],"ChangeSetName":"revision","ClientRequestToken":"5d5bcd42-4e6d-4f3a-9b1b-0a8e2c13f6d0"}"#,
        ),
        http::Response::builder()
            .status(200)
            .body(r#"{"ChangeSetId":"cs-1","ChangeSetArn":"arn:aws:aws-marketplace:us-east-1:123456789012:AWSMarketplace/ChangeSet/cs-1"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let output = client
        .start_change_set(
            StartChangeSetInput::builder()
                .catalog("AWSMarketplace")
                .change_set(
                    Change::builder()
                        .change_type("AddRevisions")
                        .entity(
                            Entity::builder()
                                .r#type("DataProduct@1.0")
                                .identifier("prod-1234")
                                .build(),
                        )
                        .details("{}")
                        .build(),
                )
                .change_set_name("revision"),
        )
        .expect("change set starts");
    assert_eq!(output.change_set_id(), Some("cs-1"));
    conn.assert_requests_match(&[]);
}

#[test]
fn cancel_change_set_uses_patch() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("PATCH")
            .uri(Uri::from_static(
                "https://catalog.marketplace.us-east-1.amazonaws.com/CancelChangeSet?catalog=AWSMarketplace&changeSetId=cs-1",
            ))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"ChangeSetId":"cs-1"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let output = client
        .cancel_change_set(
            CancelChangeSetInput::builder()
                .catalog("AWSMarketplace")
                .change_set_id("cs-1"),
        )
        .expect("cancelled");
    assert_eq!(output.change_set_id(), Some("cs-1"));
    assert_eq!(output.change_set_arn(), None);
    conn.assert_requests_match(&[]);
}

#[test]
fn change_set_status_is_parsed() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri(Uri::from_static(
                "https://catalog.marketplace.us-east-1.amazonaws.com/DescribeChangeSet?catalog=AWSMarketplace&changeSetId=cs-1",
            ))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"ChangeSetId":"cs-1","Status":"APPLYING","ChangeSet":[{"ChangeType":"AddRevisions","ErrorDetailList":[{"ErrorCode":"E1","ErrorMessage":"bad revision"}]}]}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let output = client
        .describe_change_set(
            DescribeChangeSetInput::builder()
                .catalog("AWSMarketplace")
                .change_set_id("cs-1"),
        )
        .expect("described");
    assert_eq!(output.status, Some(ChangeStatus::Applying));
    let summary = &output.change_set().expect("summaries are set")[0];
    let errors = summary.error_detail_list().expect("errors are set");
    assert_eq!(errors[0].error_message(), Some("bad revision"));
}

#[test]
fn throttling_is_retried() {
    let throttled = || {
        http::Response::builder()
            .status(429)
            .header("x-amzn-errortype", "ThrottlingException")
            .body(r#"{"Message":"Rate exceeded"}"#)
            .unwrap()
    };
    let list = || {
        post(
            "https://catalog.marketplace.us-east-1.amazonaws.com/ListEntities",
            r#"{"Catalog":"AWSMarketplace","EntityType":"AmiProduct"}"#,
        )
    };
    let conn = TestConnection::new(vec![
        (list(), throttled()),
        (
            list(),
            http::Response::builder()
                .status(200)
                .body(r#"{"EntitySummaryList":[{"Name":"Sample","EntityId":"prod-1234","Visibility":"Public"}]}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone())
        .expect("runtime starts")
        .with_retry_config(no_backoff());
    let output = client
        .list_entities(
            ListEntitiesInput::builder()
                .catalog("AWSMarketplace")
                .entity_type("AmiProduct"),
        )
        .expect("second attempt succeeds");
    let entities = output.entity_summary_list().expect("entities are set");
    assert_eq!(entities[0].entity_id(), Some("prod-1234"));
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[test]
fn throttling_gives_up_after_max_attempts() {
    let attempt = || {
        (
            post(
                "https://catalog.marketplace.us-east-1.amazonaws.com/ListEntities",
                r#"{"Catalog":"AWSMarketplace"}"#,
            ),
            http::Response::builder()
                .status(429)
                .header("x-amzn-errortype", "ThrottlingException")
                .header("x-amzn-requestid", "req-7")
                .body(r#"{"Message":"Rate exceeded"}"#)
                .unwrap(),
        )
    };
    let conn = TestConnection::new(vec![attempt(), attempt()]);
    let client = Client::from_conf_conn(conf(), conn.clone())
        .expect("runtime starts")
        .with_retry_config(no_backoff().with_max_attempts(2));
    let err = client
        .list_entities(ListEntitiesInput::builder().catalog("AWSMarketplace"))
        .expect_err("always throttled");
    let err = err.service_error().expect("service error");
    assert!(matches!(err.kind, ListEntitiesErrorKind::ThrottlingException(_)));
    assert_eq!(err.message(), Some("Rate exceeded"));
    assert_eq!(err.request_id(), Some("req-7"));
    assert_eq!(conn.requests().len(), 2);
}

#[test]
fn list_entities_follows_next_token() {
    let conn = TestConnection::new(vec![
        (
            post(
                "https://catalog.marketplace.us-east-1.amazonaws.com/ListEntities",
                r#"{"Catalog":"AWSMarketplace","EntityType":"AmiProduct","MaxResults":1}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"EntitySummaryList":[{"EntityId":"prod-1"}],"NextToken":"t2"}"#)
                .unwrap(),
        ),
        (
            post(
                "https://catalog.marketplace.us-east-1.amazonaws.com/ListEntities",
                r#"{"Catalog":"AWSMarketplace","EntityType":"AmiProduct","MaxResults":1,"NextToken":"t2"}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"EntitySummaryList":[{"EntityId":"prod-2"}]}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let ids = client
        .list_entities_pages(
            ListEntitiesInput::builder()
                .catalog("AWSMarketplace")
                .entity_type("AmiProduct")
                .max_results(1),
        )
        .map(|page| page.expect("page succeeds").entity_summary_list.unwrap_or_default())
        .flatten()
        .filter_map(|entity| entity.entity_id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["prod-1".to_string(), "prod-2".to_string()]);
    conn.assert_requests_match(&[]);
}

#[test]
fn list_change_sets_follows_next_token() {
    let conn = TestConnection::new(vec![
        (
            post(
                "https://catalog.marketplace.us-east-1.amazonaws.com/ListChangeSets",
                r#"{"Catalog":"AWSMarketplace"}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"ChangeSetSummaryList":[{"ChangeSetId":"cs-1","Status":"SUCCEEDED"}],"NextToken":"t2"}"#)
                .unwrap(),
        ),
        (
            post(
                "https://catalog.marketplace.us-east-1.amazonaws.com/ListChangeSets",
                r#"{"Catalog":"AWSMarketplace","NextToken":"t2"}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"ChangeSetSummaryList":[{"ChangeSetId":"cs-2","Status":"APPLYING"}]}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let change_sets = client
        .list_change_sets_pages(ListChangeSetsInput::builder().catalog("AWSMarketplace"))
        .map(|page| page.expect("page succeeds").change_set_summary_list.unwrap_or_default())
        .flatten()
        .collect::<Vec<_>>();
    let ids = change_sets
        .iter()
        .filter_map(|change_set| change_set.change_set_id())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["cs-1", "cs-2"]);
    assert_eq!(change_sets[1].status, Some(ChangeStatus::Applying));
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[test]
fn resource_not_found_is_modeled() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri(Uri::from_static(
                "https://catalog.marketplace.us-east-1.amazonaws.com/DescribeEntity?catalog=AWSMarketplace&entityId=missing",
            ))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazonaws.marketplace.catalog/")
            .body(r#"{"Message":"Requested entity missing not found"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone()).expect("runtime starts");
    let err = client
        .describe_entity(
            DescribeEntityInput::builder()
                .catalog("AWSMarketplace")
                .entity_id("missing"),
        )
        .expect_err("entity is missing");
    let err = err.service_error().expect("service error");
    match &err.kind {
        DescribeEntityErrorKind::ResourceNotFoundException(inner) => {
            assert_eq!(inner.message(), Some("Requested entity missing not found"))
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert!(err.is_resource_not_found_exception());
    assert_eq!(conn.requests().len(), 1);
}
