/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Dispatch operations built by the service crates over HTTP
//!
//! [`Client`] assembles the middleware stack (endpoint resolution, user agent, signing, dispatch,
//! response parsing & retries) around any tower `Service` that sends `http::Request<SdkBody>`.
//! [`blocking::Client`] wraps it for callers that are not async.

pub mod blocking;
pub mod conn;
mod retry;
#[cfg(feature = "test-util")]
pub mod test_connection;

pub use retry::RetryConfig;

use crate::conn::Standard;
use crate::retry::{RetryCtx, StandardRetryStrategy};
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
pub use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::MapRequestLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use smithy_types::retry::ProvideErrorKind;
use std::error::Error;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{debug_span, trace, Instrument};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The internal connector must implement the following trait bound to be used to dispatch requests:
/// ```rust,ignore
///    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
///        + Send
///        + Clone
///        + 'static,
///    S::Error: Into<BoxError> + Send + Sync + 'static,
///    S::Future: Send + 'static,
/// ```
pub struct Client<S> {
    inner: S,
    retry_ctx: Arc<Mutex<RetryCtx>>,
}

impl<S> Client<S> {
    /// Construct a new `Client` with a custom connector
    pub fn new(connector: S) -> Self {
        Client {
            inner: connector,
            retry_ctx: Arc::new(Mutex::new(RetryCtx::new(RetryConfig::default()))),
        }
    }

    /// Replace the retry configuration
    ///
    /// The retry token bucket is shared by every operation dispatched through this client; changing
    /// the configuration refills it.
    pub fn with_retry_config(self, config: RetryConfig) -> Self {
        Client {
            inner: self.inner,
            retry_ctx: Arc::new(Mutex::new(RetryCtx::new(config))),
        }
    }
}

impl Client<Standard> {
    /// Construct an `https` based client
    pub fn https() -> Self {
        Client::new(Standard::https())
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Clone + 'static,
        E: ProvideErrorKind + Debug,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Clone + 'static,
        E: ProvideErrorKind + Debug,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        let span = match input.metadata() {
            Some(metadata) => debug_span!(
                "dispatch",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => debug_span!("dispatch"),
        };
        let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        let inner = self.inner.clone();
        let svc = ServiceBuilder::new()
            .retry(StandardRetryStrategy::new(self.retry_ctx.clone()))
            .layer(ParseResponseLayer::<O, Retry>::new())
            .layer(endpoint_resolver)
            .layer(user_agent)
            .layer(signer)
            .layer(DispatchLayer::new())
            .service(inner);
        let result = svc.oneshot(input).instrument(span).await;
        if let Err(err) = &result {
            trace!(error = ?err, "operation failed");
        }
        result
    }
}

#[cfg(test)]
mod test {
    use crate::{Client, RetryConfig};
    use aws_auth::Credentials;
    use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
    use aws_http::user_agent::AwsUserAgent;
    use aws_http::AwsErrorRetryPolicy;
    use aws_sig_auth::signer::OperationSigningConfig;
    use aws_types::region::Region;
    use aws_types::SigningService;
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation;
    use smithy_http::operation::Operation;
    use smithy_http::response::ParseStrictResponse;
    use std::convert::Infallible;
    use std::sync::Arc;

    #[derive(Clone)]
    struct Utf8Body;

    impl ParseStrictResponse for Utf8Body {
        type Output = Result<String, smithy_types::Error>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if !response.status().is_success() {
                return Err(aws_http::json_errors::parse_generic_error(response));
            }
            Ok(String::from_utf8_lossy(response.body()).to_string())
        }
    }

    fn test_operation() -> Operation<Utf8Body, AwsErrorRetryPolicy> {
        let req = operation::Request::new(http::Request::new(SdkBody::from("{}")))
            .augment(|req, conf| {
                set_endpoint_resolver(
                    conf,
                    Arc::new(DefaultAwsEndpointResolver::for_service("storagegateway")),
                );
                aws_auth::set_provider(
                    conf,
                    Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
                );
                conf.insert(Region::new("us-east-1"));
                conf.insert(SigningService::from_static("storagegateway"));
                conf.insert(OperationSigningConfig::default_config());
                conf.insert(AwsUserAgent::for_tests());
                Result::<_, Infallible>::Ok(req)
            })
            .expect("infallible");
        Operation::new(req, Utf8Body).with_retry_policy(AwsErrorRetryPolicy::new())
    }

    #[tokio::test]
    async fn dispatch_failures_are_retried() {
        let (service, mut handle) =
            tower_test::mock::pair::<http::Request<SdkBody>, http::Response<hyper::Body>>();
        let client = Client::new(service)
            .with_retry_config(RetryConfig::default().with_static_base(|| 0_f64));
        let connection = async {
            let (_, send) = handle.next_request().await.expect("first attempt");
            send.send_error("connection reset");
            let (request, send) = handle.next_request().await.expect("retried attempt");
            assert!(request.headers().contains_key("authorization"));
            assert_eq!(
                request.uri(),
                &http::Uri::from_static("https://storagegateway.us-east-1.amazonaws.com/")
            );
            send.send_response(http::Response::new(hyper::Body::from("ok")));
        };
        let (result, _) = tokio::join!(client.call(test_operation()), connection);
        assert_eq!(result.expect("second attempt succeeds"), "ok");
    }
}
