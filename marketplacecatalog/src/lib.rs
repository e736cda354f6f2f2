/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Marketplace Catalog
//!
//! Catalog API actions let sellers manage their products: entities are described & listed, and
//! change sets apply changes to them. Operations use the REST-JSON 1 protocol.

#![allow(clippy::new_without_default)]

#[cfg(feature = "client")]
pub mod blocking;
pub mod config;
pub mod error;
mod idempotency_token;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
mod rest_json;

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
pub use config::Config;
pub use idempotency_token::IdempotencyTokenProvider;
pub use smithy_http::endpoint::Endpoint;

static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("Marketplace Catalog", env!("CARGO_PKG_VERSION"));
