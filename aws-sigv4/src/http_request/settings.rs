/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// HTTP signing parameters
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SigningSettings {
    /// Specifies how the path of the canonical request is encoded
    pub uri_encoding: UriEncoding,

    /// Add an additional checksum header
    pub payload_checksum_kind: PayloadChecksumKind,
}

/// Encoding applied to the request path when building the canonical request
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UriEncoding {
    /// Encode the (already encoded) path a second time. Every service except S3 expects this.
    Double,

    /// Use the path exactly as it appears on the request
    Single,
}

/// Config value to specify whether the `x-amz-content-sha256` header should be added
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PayloadChecksumKind {
    /// Add x-amz-content-sha256 with the hex SHA-256 of the body
    XAmzSha256,

    /// Do not add an additional header when creating the canonical request
    NoHeader,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            uri_encoding: UriEncoding::Double,
            payload_checksum_kind: PayloadChecksumKind::NoHeader,
        }
    }
}
