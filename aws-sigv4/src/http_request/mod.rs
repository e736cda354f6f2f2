/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to sign HTTP requests.
//!
//! # Example
//!
//! ```rust
//! use aws_sigv4::http_request::{sign, SignableRequest, SigningSettings};
//! use aws_sigv4::SigningParams;
//! use std::time::SystemTime;
//!
//! let mut request = http::Request::builder()
//!     .method("POST")
//!     .uri("https://storagegateway.us-east-1.amazonaws.com/")
//!     .header("x-amz-target", "StorageGateway_20130630.ListGateways")
//!     .body(b"{}".to_vec())
//!     .unwrap();
//! let params = SigningParams {
//!     access_key: "example access key",
//!     secret_key: "example secret key",
//!     security_token: None,
//!     region: "us-east-1",
//!     service_name: "storagegateway",
//!     time: SystemTime::now(),
//!     settings: SigningSettings::default(),
//! };
//! let signable = SignableRequest::new(
//!     request.method(),
//!     request.uri(),
//!     request.headers(),
//!     request.body(),
//! );
//! let (instructions, _signature) = sign(signable, &params).unwrap().into_parts();
//! instructions.apply_to_request(&mut request);
//! assert!(request.headers().contains_key("authorization"));
//! ```

mod canonical_request;
mod error;
mod settings;
mod sign;

pub use error::SigningError;
pub use settings::{PayloadChecksumKind, SigningSettings, UriEncoding};
pub use sign::{sign, SignableRequest, SigningInstructions};
