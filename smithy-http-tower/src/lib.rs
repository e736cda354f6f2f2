/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod dispatch;
pub mod map_request;
pub mod parse_response;

use smithy_http::result::SdkError;
use tower::BoxError;

/// Failure to send an operation, before any response was received
///
/// Construction errors happen in middleware, so the request never left the client. Dispatch
/// errors come from the connector: the request may have been partially or fully sent.
#[derive(Debug, thiserror::Error)]
pub enum SendOperationError {
    #[error("failed to construct the request: {0}")]
    RequestConstructionError(#[source] BoxError),

    #[error("failed to dispatch the request: {0}")]
    RequestDispatchError(#[source] BoxError),
}

impl<E> From<SendOperationError> for SdkError<E> {
    fn from(err: SendOperationError) -> Self {
        match err {
            SendOperationError::RequestDispatchError(e) => SdkError::DispatchFailure(e),
            SendOperationError::RequestConstructionError(e) => SdkError::ConstructionFailure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::DispatchLayer;
    use crate::map_request::MapRequestLayer;
    use crate::parse_response::ParseResponseLayer;
    use bytes::Bytes;
    use http::header::HeaderName;
    use http::{HeaderValue, Response, Uri};
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use smithy_http::operation::{Operation, Request};
    use smithy_http::response::ParseStrictResponse;
    use smithy_http::result::SdkError;
    use std::convert::Infallible;
    use tower::{service_fn, Service, ServiceBuilder};

    /// Creates a stubbed service stack and runs it to validate that all the types line up &
    /// everything is properly wired
    #[tokio::test]
    async fn service_stack() {
        #[derive(Clone)]
        struct AddHeader;
        impl MapRequest for AddHeader {
            type Error = Infallible;

            fn apply(&self, request: Request) -> Result<Request, Self::Error> {
                request.augment(|mut req, _| {
                    req.headers_mut().insert(
                        "x-amz-target",
                        HeaderValue::from_static("StorageGateway_20130630.ListGateways"),
                    );
                    Ok(req)
                })
            }
        }

        struct TestParseResponse;
        impl ParseStrictResponse for TestParseResponse {
            type Output = Result<String, Infallible>;

            fn parse(&self, _response: &Response<Bytes>) -> Self::Output {
                Ok("OK".to_string())
            }
        }

        let http_layer = service_fn(|request: http::Request<SdkBody>| async move {
            if request.uri() == &Uri::from_static("http://localhost/")
                && request.headers().contains_key(HeaderName::from_static("x-amz-target"))
            {
                Ok::<_, Infallible>(
                    http::Response::builder()
                        .status(200)
                        .body(SdkBody::from("ok"))
                        .unwrap(),
                )
            } else {
                Ok(http::Response::builder()
                    .status(404)
                    .body(SdkBody::from("not found"))
                    .unwrap())
            }
        });
        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<TestParseResponse, ()>::new())
            .layer(MapRequestLayer::for_mapper(AddHeader))
            .layer(DispatchLayer)
            .service(http_layer);
        let req = http::Request::new(SdkBody::from("hello"));
        let req = operation::Request::new(req);
        let req = Operation::new(req, TestParseResponse);
        let resp = svc.call(req).await.expect("Response should succeed");
        assert_eq!(resp.parsed, "OK".to_string())
    }

    #[tokio::test]
    async fn failing_mappers_are_construction_failures() {
        #[derive(Clone)]
        struct Fails;
        impl MapRequest for Fails {
            type Error = std::num::ParseIntError;

            fn apply(&self, _: Request) -> Result<Request, Self::Error> {
                "not a number".parse::<i32>().map(|_| unreachable!("parse fails"))
            }
        }

        struct Never;
        impl ParseStrictResponse for Never {
            type Output = Result<(), Infallible>;

            fn parse(&self, _: &Response<Bytes>) -> Self::Output {
                Ok(())
            }
        }

        let http_layer = service_fn(|_: http::Request<SdkBody>| async move {
            Ok::<_, Infallible>(http::Response::new(SdkBody::empty()))
        });
        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<Never, ()>::new())
            .layer(MapRequestLayer::for_mapper(Fails))
            .layer(DispatchLayer)
            .service(http_layer);
        let req = operation::Request::new(http::Request::new(SdkBody::empty()));
        let err = svc
            .call(Operation::new(req, Never))
            .await
            .expect_err("mapper fails");
        assert!(matches!(err, SdkError::ConstructionFailure(_)));
    }
}
