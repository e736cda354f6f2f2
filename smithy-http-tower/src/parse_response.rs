/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use smithy_http::middleware::load_response;
use smithy_http::operation::{Operation, Request};
use smithy_http::response::ParseHttpResponse;
use smithy_http::result::{SdkError, SdkSuccess};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{BoxError, Layer, Service};
use tracing::{debug, trace};

/// Top of the operation stack: splits an [`Operation`] into its request & response handler,
/// sends the request through `inner` and parses whatever comes back
///
/// `inner` is typically a chain of `MapRequestService`s ending in a `DispatchService`.
#[derive(Clone)]
pub struct ParseResponseService<S, H, R> {
    inner: S,
    _operation: PhantomData<(H, R)>,
}

#[derive(Default)]
pub struct ParseResponseLayer<H, R> {
    _operation: PhantomData<(H, R)>,
}

impl<H, R> ParseResponseLayer<H, R> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _operation: PhantomData,
        }
    }
}

impl<S, H, R> Layer<S> for ParseResponseLayer<H, R>
where
    S: Service<Request>,
{
    type Service = ParseResponseService<S, H, R>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _operation: PhantomData,
        }
    }
}

type ParseFuture<T, E> = Pin<Box<dyn Future<Output = Result<SdkSuccess<T>, SdkError<E>>>>>;

/// `H` parses a body of type `B` into `Result<T, E>`. `R`, the retry policy, is dropped here: it
/// was already consumed by the retry layer above this service.
impl<S, H, T, E, B, R> Service<Operation<H, R>> for ParseResponseService<S, H, R>
where
    S: Service<Request, Response = http::Response<B>, Error = SendOperationError>,
    S::Future: 'static,
    B: http_body::Body + Unpin + 'static,
    B::Error: Into<BoxError>,
    H: ParseHttpResponse<B, Output = Result<T, E>> + 'static,
{
    type Response = SdkSuccess<T>;
    type Error = SdkError<E>;
    type Future = ParseFuture<T, E>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(SdkError::from)
    }

    fn call(&mut self, operation: Operation<H, R>) -> Self::Future {
        let (request, parts) = operation.into_request_response();
        let handler = parts.response_handler;
        let name = parts
            .metadata
            .as_ref()
            .map(|metadata| metadata.name().to_string());
        let sent = self.inner.call(request);
        Box::pin(async move {
            let response = sent.await.map_err(SdkError::from)?;
            debug!(operation = ?name, status = %response.status(), "response received");
            trace!(headers = ?response.headers(), "raw response");
            load_response(response, &handler).await
        })
    }
}
