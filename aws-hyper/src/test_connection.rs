/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::HeaderName;
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::BoxError;

type Exchanges<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request that was sent through a [`TestConnection`] paired with the request it was expected
/// to match
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the actual request matches the expected one
    ///
    /// Every expected header must be present with the same value unless listed in
    /// `ignore_headers`. JSON bodies are compared structurally.
    #[track_caller]
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        let expected_headers = expected
            .headers()
            .iter()
            .filter(|(name, _)| !ignore_headers.contains(*name))
            .map(|(name, value)| {
                (
                    name.as_str(),
                    String::from_utf8_lossy(value.as_bytes()).to_string(),
                )
            })
            .collect::<Vec<_>>();
        let expected_headers = expected_headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect::<Vec<_>>();
        assert_ok(validate_headers(actual, &expected_headers));
        let expected_body = expected.body().bytes().unwrap_or_default();
        let actual_body = actual.body().bytes().unwrap_or_default();
        match std::str::from_utf8(expected_body) {
            Ok(expected_body) if expected_body.starts_with('{') => {
                assert_ok(validate_body(actual_body, expected_body))
            }
            _ => assert_eq!(actual_body, expected_body),
        }
        assert_eq!(actual.method(), expected.method());
        assert_eq!(actual.uri(), expected.uri());
    }
}

/// A fake connection that replays canned responses and records what it was sent.
///
/// Each call pops the next `(expected request, response)` pair. Once the pairs run out, calls
/// fail with a dispatch error.
///
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let conn = TestConnection::new(vec![(
///     http::Request::new(SdkBody::from("{}")),
///     http::Response::builder().status(200).body(r#"{"Gateways":[]}"#).unwrap(),
/// )]);
/// let client = aws_hyper::Client::new(conn.clone());
/// assert!(conn.requests().is_empty());
/// ```
pub struct TestConnection<B> {
    pending: Arc<Mutex<Exchanges<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            pending: self.pending.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut exchanges: Exchanges<B>) -> Self {
        exchanges.reverse();
        TestConnection {
            pending: Arc::new(Mutex::new(exchanges)),
            requests: Default::default(),
        }
    }

    /// Requests received so far, in the order they were sent
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    /// Assert that every recorded request matches its expected request
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining = self.pending.lock().unwrap().len();
        assert_eq!(remaining, 0, "{} expected requests were never sent", remaining);
    }
}

impl<B: Into<hyper::Body>> tower::Service<http::Request<SdkBody>> for TestConnection<B> {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        let next = self.pending.lock().unwrap().pop();
        std::future::ready(match next {
            Some((expected, response)) => {
                self.requests
                    .lock()
                    .unwrap()
                    .push(ValidateRequest { expected, actual });
                Ok(response.map(Into::into))
            }
            None => Err("no more canned responses".into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use http::header::HeaderName;
    use smithy_http::body::SdkBody;
    use tower::{BoxError, ServiceExt};

    #[test]
    fn meets_trait_bounds() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<hyper::Body>,
            Error = BoxError,
            Future = impl Send,
        > + Clone {
            TestConnection::<String>::new(vec![])
        }
        let _ = check();
    }

    #[tokio::test]
    async fn json_bodies_are_compared_structurally() {
        let expected = http::Request::builder()
            .uri("https://storagegateway.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-date", "20210215T184017Z")
            .body(SdkBody::from(r#"{"Limit": 5, "Marker": "abc"}"#))
            .unwrap();
        let conn = TestConnection::new(vec![(expected, http::Response::new("{}"))]);
        let actual = http::Request::builder()
            .uri("https://storagegateway.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-date", "20210101T000000Z")
            .body(SdkBody::from(r#"{"Marker":"abc","Limit":5}"#))
            .unwrap();
        conn.clone().oneshot(actual).await.expect("response queued");
        conn.assert_requests_match(&[HeaderName::from_static("x-amz-date")]);

        let err = conn
            .clone()
            .oneshot(http::Request::new(SdkBody::empty()))
            .await
            .expect_err("no more responses");
        assert_eq!(err.to_string(), "no more canned responses");
    }
}
