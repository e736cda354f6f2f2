/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::InvalidHeaderValue;

/// A request that could not be signed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SigningError {
    #[error("the request has no host header and its URI has no authority")]
    MissingHost,
    #[error("header `{0}` is not valid UTF-8 and cannot be signed")]
    NonUtf8Header(String),
    #[error("the signature produced an invalid header value")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}
