/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Storage Gateway
//!
//! Storage Gateway connects an on-premises software appliance with cloud-based storage. Every
//! operation is an AWS JSON 1.1 `POST` targeting `StorageGateway_20130630.<Operation>`.
//!
//! Operations are built from their input with [`Config`], then dispatched through the
//! [`blocking::Client`] (or any `aws_hyper::Client`).

#![allow(clippy::large_enum_variant)]
#![allow(clippy::new_without_default)]

mod aws_json;
#[cfg(feature = "client")]
pub mod blocking;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
pub use config::Config;
pub use smithy_http::endpoint::Endpoint;

static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("Storage Gateway", env!("CARGO_PKG_VERSION"));
