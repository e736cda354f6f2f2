/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Signature Authentication Package
//!
//! Signs each dispatched request with SigV4 using the credentials provider, signing region and
//! signing service found in the request property bag.

pub mod middleware;
pub mod signer;
