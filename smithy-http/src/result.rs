/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::middleware::ResponseBody;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful Sdk Result
///
/// `raw` is the HTTP response the parsed output was read from.
#[derive(Debug)]
pub struct SdkSuccess<O> {
    pub raw: http::Response<ResponseBody>,
    pub parsed: O,
}

/// Failing Sdk Result
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<ResponseBody>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        err: E,
        raw: http::Response<ResponseBody>,
    },
}

impl<E> SdkError<E> {
    /// Returns the modeled service error, if the service responded with one
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Consumes the error, returning the modeled service error when there is one
    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// The raw HTTP response, when one was received
    pub fn raw_response(&self) -> Option<&http::Response<ResponseBody>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "failed to dispatch request: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "failed to read response: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::ResponseBody;
    use crate::result::SdkError;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct Modeled;

    impl fmt::Display for Modeled {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "InvalidGatewayRequestException")
        }
    }

    impl Error for Modeled {}

    #[test]
    fn service_errors_are_reachable() {
        let err = SdkError::ServiceError {
            err: Modeled,
            raw: http::Response::new(ResponseBody::from_static("{}")),
        };
        assert!(err.service_error().is_some());
        assert_eq!(err.raw_response().map(|r| r.status()), Some(http::StatusCode::OK));
        assert_eq!(
            err.to_string(),
            "service error: InvalidGatewayRequestException"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn dispatch_failures_have_no_response() {
        let err: SdkError<Modeled> = SdkError::DispatchFailure("connection reset".into());
        assert!(err.service_error().is_none());
        assert!(err.raw_response().is_none());
        assert_eq!(
            err.to_string(),
            "failed to dispatch request: connection reset"
        );
    }
}
