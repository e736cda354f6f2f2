/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::AwsErrorRetryPolicy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::{BuildError, Metadata, Operation, Request};

/// A request whose body is the JSON document of `input`
pub(crate) fn json_request<T: Serialize>(
    method: http::Method,
    uri: &'static str,
    input: &T,
) -> Result<http::Request<SdkBody>, BuildError> {
    let body = serde_json::to_vec(input).map_err(|err| BuildError::SerializationError(err.into()))?;
    Ok(http::Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?)
}

pub(crate) fn operation<H>(
    request: http::Request<SdkBody>,
    operation_name: &'static str,
    handler: H,
    config: &crate::config::Config,
) -> Operation<H, AwsErrorRetryPolicy> {
    let mut request = Request::new(request);
    config.configure_request(&mut request);
    Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, "marketplacecatalog"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod test {
    use crate::input::{DescribeEntityInput, ListEntitiesInput, StartChangeSetInput};
    use crate::model::{Change, Entity};
    use crate::{Config, Credentials, Region};
    use protocol_test_helpers::{
        assert_ok, forbid_query_params, validate_body, validate_headers, validate_query_string,
    };
    use smithy_http::operation::BuildError;

    fn conf() -> Config {
        Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("AKID", "secret", None))
            .make_token("00000000-0000-4000-8000-000000000000")
            .build()
    }

    #[test]
    fn query_members_are_percent_encoded() {
        let op = DescribeEntityInput::builder()
            .catalog("AWSMarketplace")
            .entity_id("prod 1234/a")
            .build(&conf())
            .expect("valid input");
        let http = op.request().http();
        assert_eq!(http.method(), http::Method::GET);
        assert_eq!(http.uri().path(), "/DescribeEntity");
        assert_ok(validate_query_string(
            http,
            &["catalog=AWSMarketplace", "entityId=prod%201234%2Fa"],
        ));
        assert_ok(forbid_query_params(http, &["Catalog"]));
        assert_eq!(http.body().bytes(), Some(&b""[..]));
        assert!(http.headers().get("content-type").is_none());
    }

    #[test]
    fn missing_query_members_fail_to_build() {
        let err = DescribeEntityInput::builder()
            .entity_id("prod-1234")
            .build(&conf())
            .expect_err("catalog is required");
        assert!(matches!(err, BuildError::MissingField { field: "catalog", .. }));
    }

    #[test]
    fn json_members_are_sent_in_the_body() {
        let op = ListEntitiesInput::builder()
            .catalog("AWSMarketplace")
            .entity_type("AmiProduct")
            .max_results(10)
            .build(&conf())
            .expect("valid input");
        let http = op.request().http();
        assert_eq!(http.method(), http::Method::POST);
        assert_eq!(http.uri(), "/ListEntities");
        assert_ok(validate_headers(http, &[("content-type", "application/json")]));
        assert_ok(validate_body(
            http.body().bytes().expect("in memory"),
            r#"{"Catalog":"AWSMarketplace","EntityType":"AmiProduct","MaxResults":10}"#,
        ));
    }

    #[test]
    fn client_request_token_is_generated() {
        let change = Change::builder()
            .change_type("UpdateInformation")
            .entity(Entity::builder().r#type("AmiProduct@1.0").identifier("prod-1234").build())
            .details(r#"{"ProductTitle":"Sample"}"#)
            .build();
        let op = StartChangeSetInput::builder()
            .catalog("AWSMarketplace")
            .change_set(change.clone())
            .build(&conf())
            .expect("valid input");
        assert_ok(validate_body(
            op.request().http().body().bytes().expect("in memory"),
            r#"{"Catalog":"AWSMarketplace","ChangeSet":[{"ChangeType":"UpdateInformation","Entity":{"Type":"AmiProduct@1.0","Identifier":"prod-1234"},"Details":"{\"ProductTitle\":\"Sample\"}"}],"ClientRequestToken":"00000000-0000-4000-8000-000000000000"}"#,
        ));

        let op = StartChangeSetInput::builder()
            .catalog("AWSMarketplace")
            .change_set(change)
            .client_request_token("caller-token")
            .build(&conf())
            .expect("valid input");
        let body: serde_json::Value =
            serde_json::from_slice(op.request().http().body().bytes().expect("in memory"))
                .expect("valid json");
        assert_eq!(body["ClientRequestToken"], "caller-token");
    }
}
