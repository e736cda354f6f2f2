/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry vocabulary shared by errors and the dispatcher.

use std::time::Duration;

/// Why a failed attempt may be worth repeating.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// The request never got a proper answer: reset connections, timeouts, gateway errors.
    TransientError,

    /// The service asked the caller to slow down.
    ThrottlingError,

    /// The service failed in a way it flagged as safe to retry.
    ServerError,

    /// Retryable without spending retry budget.
    ClientError,
}

/// Implemented by every error a service can return.
pub trait ProvideErrorKind {
    /// The retry kind the service model attaches to this error, if any.
    ///
    /// Returns `None` when retrying depends on something outside the error, such as
    /// the status code of the response.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// The wire error code, such as `ThrottlingException`.
    fn code(&self) -> Option<&str>;
}

/// The outcome of classifying an attempt.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum RetryKind {
    Error(ErrorKind),

    /// The service named its own delay. Treated as a hint: the dispatcher may still give up
    /// when it has run out of attempts.
    Explicit(Duration),

    NotRetryable,
}
