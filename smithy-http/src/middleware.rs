/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Transport-independent middleware: request mapping stages and response loading.
//!
//! The tower adapters for both live in `smithy-http-tower`.

use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::{Buf, Bytes};
use http_body::Body;
use std::error::Error;
use std::fmt;

/// Body of a response returned with [`SdkSuccess`] or [`SdkError`]
///
/// The body has already been read by the time the response is handed back, so it is kept
/// around for introspection (eg. logging the raw payload of an unexpected error).
pub struct ResponseBody(Inner);

impl ResponseBody {
    /// Returns the bytes of the body, if it was loaded into memory
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Bytes(bytes) => Some(bytes),
            Inner::Streaming | Inner::Err => None,
        }
    }

    pub fn from_static(body: &'static str) -> Self {
        ResponseBody(Inner::Bytes(Bytes::from_static(body.as_bytes())))
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(utf8) => write!(f, "ResponseBody({:?})", utf8),
                Err(_) => write!(f, "ResponseBody({} bytes)", bytes.len()),
            },
            Inner::Streaming => write!(f, "ResponseBody(<streaming>)"),
            Inner::Err => write!(f, "ResponseBody(<failed to read>)"),
        }
    }
}

enum Inner {
    Bytes(bytes::Bytes),
    Streaming,
    Err,
}

type BoxError = Box<dyn Error + Send + Sync>;

/// A synchronous request stage.
///
/// Stages read what they need from the property bag of the request and rewrite the HTTP
/// request in place: endpoint resolution, user agent, and signing are all `MapRequest`s.
///
/// ```rust
/// use smithy_http::middleware::MapRequest;
/// use smithy_http::operation;
/// use std::convert::Infallible;
///
/// /// Property that asks for a trace header
/// struct TraceId(&'static str);
///
/// struct TraceStage;
///
/// impl MapRequest for TraceStage {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Infallible> {
///         request.augment(|mut request, properties| {
///             if let Some(TraceId(id)) = properties.get::<TraceId>() {
///                 request
///                     .headers_mut()
///                     .insert("x-amzn-trace-id", http::HeaderValue::from_static(*id));
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// Use `Infallible` for stages that cannot fail.
    type Error: Into<BoxError>;

    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Reads the response and hands it to `handler`.
///
/// Handlers that can work on the unread body get the first look. Otherwise the body is
/// buffered in memory and parsed in one piece. A body that fails to read becomes
/// [`SdkError::ResponseError`], a handler error becomes [`SdkError::ServiceError`].
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: http_body::Body + Unpin,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        return sdk_result(
            parsed_response,
            response.map(|_| ResponseBody(Inner::Streaming)),
        );
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(e) => {
            return Err(SdkError::ResponseError {
                raw: response.map(|_| ResponseBody(Inner::Err)),
                err: e.into(),
            });
        }
    };

    let response = response.map(|_| Bytes::from(body));
    let parsed = handler.parse_loaded(&response);
    sdk_result(
        parsed,
        response.map(|body| ResponseBody(Inner::Bytes(body))),
    )
}

async fn read_body<B: http_body::Body + Unpin>(body: &mut B) -> Result<Vec<u8>, B::Error> {
    let mut output = Vec::new();
    while let Some(buf) = body.data().await {
        let mut buf = buf?;
        while buf.has_remaining() {
            output.extend_from_slice(buf.chunk());
            buf.advance(buf.chunk().len())
        }
    }
    Ok(output)
}

fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<ResponseBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::load_response;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<String, String>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            let body = String::from_utf8_lossy(response.body()).to_string();
            if response.status().is_success() {
                Ok(body)
            } else {
                Err(body)
            }
        }
    }

    #[tokio::test]
    async fn success_keeps_raw_body() {
        let response = http::Response::new(SdkBody::from("{\"GatewayARN\":\"arn\"}"));
        let result = load_response(response, &StatusParser)
            .await
            .expect("2xx parses");
        assert_eq!(result.parsed, "{\"GatewayARN\":\"arn\"}");
        assert_eq!(
            result.raw.body().bytes(),
            Some(&b"{\"GatewayARN\":\"arn\"}"[..])
        );
    }

    #[tokio::test]
    async fn failure_is_a_service_error() {
        let response = http::Response::builder()
            .status(400)
            .body(SdkBody::from("bad"))
            .unwrap();
        match load_response(response, &StatusParser).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, "bad");
                assert_eq!(raw.status(), 400);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
