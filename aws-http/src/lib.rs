/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP plumbing shared by the AWS service crates: error-document parsing, the user agent
//! middleware, and the retry classifier attached to every operation.

pub mod json_errors;
pub mod user_agent;

use smithy_http::middleware::ResponseBody;
use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// Error codes that mean the caller is sending too fast.
const THROTTLING_CODES: &[&str] = &[
    "BandwidthLimitExceeded",
    "EC2ThrottledException",
    "LimitExceededException",
    "PriorRequestNotComplete",
    "ProvisionedThroughputExceededException",
    "RequestLimitExceeded",
    "RequestThrottled",
    "RequestThrottledException",
    "SlowDown",
    "ThrottledException",
    "Throttling",
    "ThrottlingException",
    "TooManyRequestsException",
    "TransactionInProgressException",
];

/// Error codes for requests that timed out on the service side.
const TIMEOUT_CODES: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

const RETRY_AFTER_HEADER: &str = "x-amz-retry-after";

/// Decides whether a failed attempt should be retried.
///
/// The first rule that matches wins:
/// 1. an `x-amz-retry-after` header (milliseconds) asks for an explicit delay
/// 2. an error kind carried by the modeled error itself
/// 3. a well-known throttling or timeout error code
/// 4. a 500, 502, 503 or 504 status
///
/// Failures to reach the service at all are transient. Construction failures and
/// unparseable responses are never retried.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AwsErrorRetryPolicy;

impl AwsErrorRetryPolicy {
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }

    fn classify_service_error<E: ProvideErrorKind>(
        err: &E,
        raw: &http::Response<ResponseBody>,
    ) -> RetryKind {
        let retry_after = raw
            .headers()
            .get(RETRY_AFTER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());
        if let Some(millis) = retry_after {
            return RetryKind::Explicit(Duration::from_millis(millis));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        }
        match err.code() {
            Some(code) if THROTTLING_CODES.contains(&code) => {
                return RetryKind::Error(ErrorKind::ThrottlingError)
            }
            Some(code) if TIMEOUT_CODES.contains(&code) => {
                return RetryKind::Error(ErrorKind::TransientError)
            }
            _ => {}
        }
        match raw.status().as_u16() {
            500 | 502 | 503 | 504 => RetryKind::Error(ErrorKind::TransientError),
            _ => RetryKind::NotRetryable,
        }
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, result: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
        match result {
            Err(SdkError::ServiceError { err, raw }) => Self::classify_service_error(err, raw),
            Err(SdkError::DispatchFailure(_)) => RetryKind::Error(ErrorKind::TransientError),
            Ok(_) | Err(_) => RetryKind::NotRetryable,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::AwsErrorRetryPolicy;
    use smithy_http::middleware::ResponseBody;
    use smithy_http::result::{SdkError, SdkSuccess};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    #[derive(Default)]
    struct FakeError {
        kind: Option<ErrorKind>,
        code: Option<&'static str>,
    }

    impl ProvideErrorKind for FakeError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            self.kind
        }

        fn code(&self) -> Option<&str> {
            self.code
        }
    }

    fn coded(code: &'static str) -> FakeError {
        FakeError {
            code: Some(code),
            ..Default::default()
        }
    }

    fn status(status: u16) -> http::Response<&'static str> {
        http::Response::builder().status(status).body("").unwrap()
    }

    fn classify<E: ProvideErrorKind>(err: SdkError<E>) -> RetryKind {
        AwsErrorRetryPolicy::new().classify(Err::<&SdkSuccess<()>, _>(&err))
    }

    fn service_error<E>(err: E, raw: http::Response<&'static str>) -> SdkError<E> {
        SdkError::ServiceError {
            err,
            raw: raw.map(ResponseBody::from_static),
        }
    }

    #[test]
    fn successes_are_final() {
        let success = SdkSuccess {
            raw: http::Response::new(ResponseBody::from_static("{}")),
            parsed: (),
        };
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            ClassifyResponse::<SdkSuccess<()>, SdkError<FakeError>>::classify(
                &policy,
                Ok(&success)
            ),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn server_statuses_are_transient() {
        for code in [500, 502, 503, 504] {
            assert_eq!(
                classify(service_error(FakeError::default(), status(code))),
                RetryKind::Error(ErrorKind::TransientError),
                "status {}",
                code
            );
        }
        assert_eq!(
            classify(service_error(FakeError::default(), status(501))),
            RetryKind::NotRetryable
        );
        assert_eq!(
            classify(service_error(FakeError::default(), status(400))),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn known_codes_are_retried() {
        assert_eq!(
            classify(service_error(coded("ThrottlingException"), status(400))),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            classify(service_error(coded("RequestTimeoutException"), status(400))),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(
            classify(service_error(coded("ValidationException"), status(400))),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn generic_errors_are_classified_by_code() {
        let err = smithy_types::Error {
            code: Some("SlowDown".to_string()),
            message: None,
            request_id: None,
        };
        assert_eq!(
            classify(service_error(err, status(400))),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn modeled_kind_beats_code_and_status() {
        let err = FakeError {
            kind: Some(ErrorKind::ClientError),
            code: Some("Throttling"),
        };
        assert_eq!(
            classify(service_error(err, status(503))),
            RetryKind::Error(ErrorKind::ClientError)
        );
    }

    #[test]
    fn retry_after_header_beats_everything() {
        let raw = http::Response::builder()
            .status(503)
            .header("x-amz-retry-after", "1500")
            .body("")
            .unwrap();
        let err = FakeError {
            kind: Some(ErrorKind::ClientError),
            ..Default::default()
        };
        assert_eq!(
            classify(service_error(err, raw)),
            RetryKind::Explicit(Duration::from_millis(1500))
        );
    }

    #[test]
    fn only_dispatch_failures_are_retried_outside_the_service() {
        assert_eq!(
            classify::<FakeError>(SdkError::DispatchFailure("connection reset".into())),
            RetryKind::Error(ErrorKind::TransientError)
        );
        assert_eq!(
            classify::<FakeError>(SdkError::ConstructionFailure("missing region".into())),
            RetryKind::NotRetryable
        );
    }
}
