/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An error that occurred while turning an input into an [`Operation`]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A field required to produce a valid request was not set
    #[error("{field} was missing. {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    /// A field was set to a value that cannot be represented on the wire
    #[error("{field} was invalid. {details}")]
    InvalidField {
        field: &'static str,
        details: String,
    },
    /// The request body could not be serialized
    #[error("failed to serialize the request body: {0}")]
    SerializationError(BoxError),
    /// The `http::Request` could not be assembled
    #[error("failed to construct the http request: {0}")]
    HttpError(#[from] http::Error),
}

/// An operation is a request paired with everything needed to dispatch it and interpret its
/// response
///
/// - `H`: the response handler, typically the operation struct itself, which implements
///   [`ParseHttpResponse`](crate::response::ParseHttpResponse)
/// - `R`: the retry classifier, see [`ClassifyResponse`](crate::retry::ClassifyResponse)
#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn from_parts(request: Request, parts: Parts<H, R>) -> Self {
        Operation { request, parts }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn with_retry_policy<R2>(self, retry_policy: R2) -> Operation<H, R2> {
        Operation {
            request: self.request,
            parts: Parts {
                response_handler: self.parts.response_handler,
                retry_policy,
                metadata: self.parts.metadata,
            },
        }
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn retry_policy(&self) -> &R {
        &self.parts.retry_policy
    }

    pub fn response_handler(&self) -> &H {
        &self.parts.response_handler
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn config_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.config_mut()
    }

    pub fn config(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.config()
    }

    /// Clone the operation so it may be dispatched again
    ///
    /// Returns `None` when the body cannot be cloned. The property bag is shared with the clone.
    pub fn try_clone(&self) -> Option<Self>
    where
        H: Clone,
        R: Clone,
    {
        let request = self.request.try_clone()?;
        Some(Operation {
            request,
            parts: self.parts.clone(),
        })
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    ///
    /// The bag is shared between the clones made for retries.
    configuration: Arc<Mutex<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            configuration: Arc::new(Mutex::new(PropertyBag::new())),
        }
    }

    pub fn from_parts(inner: http::Request<SdkBody>, config: Arc<Mutex<PropertyBag>>) -> Self {
        Request {
            inner,
            configuration: config,
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let configuration: &mut PropertyBag = &mut self.configuration.lock().unwrap();
            f(self.inner, configuration)?
        };
        Ok(Request {
            inner,
            configuration: self.configuration,
        })
    }

    pub fn config_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.configuration.lock().unwrap()
    }

    pub fn config(&self) -> MutexGuard<'_, PropertyBag> {
        self.configuration.lock().unwrap()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut inner = http::Request::new(cloned_body);
        *inner.method_mut() = self.inner.method().clone();
        *inner.uri_mut() = self.inner.uri().clone();
        *inner.version_mut() = self.inner.version();
        *inner.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner,
            configuration: self.configuration.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Arc<Mutex<PropertyBag>>) {
        (self.inner, self.configuration)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("https://storagegateway.us-east-1.amazonaws.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.config_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(
            request.uri(),
            &Uri::from_static("https://storagegateway.us-east-1.amazonaws.com")
        );
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.lock().unwrap().get::<&'static str>(), Some(&"hello"));
    }

    #[test]
    fn operation_clones_share_config() {
        let op = Operation::new(Request::new(http::Request::new(SdkBody::from("{}"))), ())
            .with_metadata(Metadata::new("ListGateways", "storagegateway"))
            .with_retry_policy(());
        let cloned = op.try_clone().expect("cloneable");
        op.request().config().insert(7u8);
        assert_eq!(cloned.config().get::<u8>(), Some(&7));
        assert_eq!(cloned.metadata().unwrap().name(), "ListGateways");
    }

    #[test]
    fn build_error_messages() {
        let err = BuildError::MissingField {
            field: "catalog",
            details: "catalog is bound to the query string",
        };
        assert_eq!(
            format!("{}", err),
            "catalog was missing. catalog is bound to the query string"
        );
    }
}
