/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::BoxError;
use hyper::client::{HttpConnector, ResponseFuture};
use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

type BoxFuture = Pin<
    Box<dyn Future<Output = Result<http::Response<hyper::Body>, BoxError>> + Send>,
>;

/// A good base connection type for most use cases
///
/// This supports two options:
/// 1. HTTPS
/// 2. Any implementation of the `HttpService` trait, eg. a
///    [`TestConnection`](crate::test_connection::TestConnection)
#[derive(Clone)]
pub struct Standard(Connector);

impl Standard {
    /// An https connection
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        Self(Connector::Https(
            hyper::Client::builder().build::<_, SdkBody>(https),
        ))
    }

    /// A connection based on the provided `impl HttpService`
    ///
    /// Generally, [`Standard::https()`](Standard::https) should be used. This constructor is intended to support
    /// using things like [`TestConnection`](crate::test_connection::TestConnection) or alternative
    /// http implementations.
    pub fn new(connector: impl HttpService + 'static) -> Self {
        Self(Connector::Dyn(Box::new(connector)))
    }
}

#[derive(Clone)]
enum Connector {
    Https(hyper::Client<HttpsConnector<HttpConnector>, SdkBody>),
    Dyn(Box<dyn HttpService>),
}

impl Clone for Box<dyn HttpService> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Object safe `tower::Service` for HTTP connections
///
/// Any cloneable tower `Service` sending `http::Request<SdkBody>` implements this trait.
pub trait HttpService: Send + Sync {
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>>;

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture;

    fn clone_box(&self) -> Box<dyn HttpService>;
}

impl<S> HttpService for S
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Sync
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>> {
        Service::poll_ready(self, cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture {
        let fut = Service::call(self, req);
        Box::pin(async move { fut.await.map_err(|err| err.into()) })
    }

    fn clone_box(&self) -> Box<dyn HttpService> {
        Box::new(self.clone())
    }
}

impl Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = StandardFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match &mut self.0 {
            Connector::Https(https) => Service::poll_ready(https, cx).map_err(|err| err.into()),
            Connector::Dyn(conn) => HttpService::poll_ready(conn.as_mut(), cx),
        }
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        match &mut self.0 {
            Connector::Https(https) => StandardFuture::Https(Service::call(https, req)),
            Connector::Dyn(conn) => StandardFuture::Boxed(HttpService::call(conn.as_mut(), req)),
        }
    }
}

/// Future returned by [`Standard`]
#[pin_project::pin_project(project = FutProj)]
pub enum StandardFuture {
    Https(#[pin] ResponseFuture),
    Boxed(#[pin] BoxFuture),
}

impl Future for StandardFuture {
    type Output = Result<http::Response<hyper::Body>, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            FutProj::Https(fut) => fut.poll(cx).map_err(|err| err.into()),
            FutProj::Boxed(fut) => fut.poll(cx),
        }
    }
}

#[cfg(all(test, feature = "test-util"))]
mod test {
    use crate::conn::Standard;
    use crate::test_connection::TestConnection;
    use smithy_http::body::SdkBody;
    use tower::{BoxError, Service, ServiceExt};

    fn check_bounds<S>(_: &S)
    where
        S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>, Error = BoxError>
            + Clone
            + Send
            + Sync
            + 'static,
        S::Future: Send,
    {
    }

    #[tokio::test]
    async fn test_connections_can_be_boxed() {
        let conn = TestConnection::new(vec![(
            http::Request::new(SdkBody::from("request")),
            http::Response::new("response"),
        )]);
        let standard = Standard::new(conn.clone());
        check_bounds(&standard);
        let response = standard
            .oneshot(http::Request::new(SdkBody::from("request")))
            .await
            .expect("a response was queued");
        let body = hyper::body::to_bytes(response.into_body())
            .await
            .expect("in memory body");
        assert_eq!(body.as_ref(), b"response");
        assert_eq!(conn.requests().len(), 1);
    }
}
