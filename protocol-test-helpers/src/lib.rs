/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::{Request, Uri};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam { expected: String },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam { expected: String },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("body did not match. {comparison}\n== hint:\n{hint}.")]
    BodyDidNotMatch { comparison: String, hint: String },
    #[error("expected body to be valid JSON but it was not: {found}")]
    InvalidBodyFormat { found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|param| !param.is_empty())
        .collect()
}

fn query_keys(uri: &Uri) -> HashSet<&str> {
    extract_params(uri)
        .into_iter()
        .map(|param| param.split('=').next().unwrap_or_default())
        .collect()
}

/// Every `key=value` in `expected_params` must appear verbatim (still percent-encoded)
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request.uri());
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request.uri());
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        // repeated headers are compared as a single comma-delimited list
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

/// Compare a request body with an expected JSON document
///
/// Member order & whitespace are ignored. An empty `expected_body` requires an empty request
/// body.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = actual_body.as_ref();
    if expected_body.is_empty() {
        return match actual_body.is_empty() {
            true => Ok(()),
            false => Err(ProtocolTestFailure::BodyDidNotMatch {
                comparison: format!(
                    "expected an empty body, found `{}`",
                    String::from_utf8_lossy(actual_body)
                ),
                hint: "the request should not have a payload".to_string(),
            }),
        };
    }
    let actual: serde_json::Value = serde_json::from_slice(actual_body).map_err(|_| {
        ProtocolTestFailure::InvalidBodyFormat {
            found: String::from_utf8_lossy(actual_body).to_string(),
        }
    })?;
    let expected: serde_json::Value =
        serde_json::from_str(expected_body).map_err(|_| ProtocolTestFailure::InvalidBodyFormat {
            found: expected_body.to_string(),
        })?;
    assert_json_eq_no_panic(&actual, &expected).map_err(|message| {
        ProtocolTestFailure::BodyDidNotMatch {
            comparison: message,
            hint: format!("actual body: {}", actual),
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_query_params, require_query_params, validate_body, validate_headers,
        validate_query_string, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/DescribeEntity?catalog=AWSMarketplace&entityId=a%20b&flag")
            .body(())
            .unwrap();
        validate_query_string(&request, &["catalog=AWSMarketplace"])
            .expect("catalog is in the query string");
        validate_query_string(&request, &["flag", "entityId=a%20b"])
            .expect("both params are in the query string");
        validate_query_string(&request, &[]).expect("no required params should pass");

        validate_query_string(&request, &["catalog"]).expect_err("no parameter should match");
        validate_query_string(&request, &["entityId=a b"])
            .expect_err("params are compared encoded");
    }

    #[test]
    fn test_forbid_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["a"]).expect_err("a is a query param");
        forbid_query_params(&request, &["not_included"]).expect("query param not included");
        forbid_query_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_query_params(&request, &["c"]).expect_err("c is a query param");
    }

    #[test]
    fn test_require_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        require_query_params(&request, &["a"]).expect("a is a query param");
        require_query_params(&request, &["not_included"]).expect_err("query param not included");
        require_query_params(&request, &["a=b"]).expect_err("should be matching against keys");
        require_query_params(&request, &["c"]).expect("c is a query param");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Amz-Target", "StorageGateway_20130630.ListGateways")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .body(())
            .unwrap();

        validate_headers(
            &request,
            &[("x-amz-target", "StorageGateway_20130630.ListGateways")],
        )
        .expect("header present");
        validate_headers(&request, &[("X-Amz-Target", "storagegateway_20130630.listgateways")])
            .expect_err("values are case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let actual = br#"{"GatewayARN": "arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B", "Limit": 10}"#;
        validate_body(
            &actual[..],
            r#"{"Limit":10,"GatewayARN":"arn:aws:storagegateway:us-east-1:111122223333:gateway/sgw-12A3456B"}"#,
        )
        .expect("member order is irrelevant");
        validate_body(&actual[..], r#"{"Limit": 11}"#).expect_err("values must match");
        validate_body("{}", "{}").expect("empty objects match");
        validate_body("", "").expect("empty bodies match");
        assert!(matches!(
            validate_body("not json", "{}"),
            Err(ProtocolTestFailure::InvalidBodyFormat { .. })
        ));
    }
}
