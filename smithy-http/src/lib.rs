/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Core HTTP primitives for the generated clients
//!
//! Everything here is agnostic of the service being called: operations are built by the service
//! crates, transformed by [`MapRequest`](middleware::MapRequest) stages, dispatched by
//! `aws-hyper` and parsed by a [`ParseHttpResponse`](response::ParseHttpResponse) handler.

pub mod body;
pub mod endpoint;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod query;
pub mod response;
pub mod result;
pub mod retry;
