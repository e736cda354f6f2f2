/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Signature Version 4.
//!
//! [`sign`] holds the key derivation and HMAC primitives. [`http_request`] builds the canonical
//! request for an `http::Request` and returns the headers that carry the signature.

pub mod http_request;
pub mod sign;

mod date_fmt;

use http_request::SigningSettings;
use std::fmt;
use std::time::SystemTime;

/// Everything a signature depends on besides the request itself.
#[derive(Clone)]
pub struct SigningParams<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub security_token: Option<&'a str>,
    pub region: &'a str,
    pub service_name: &'a str,
    /// Signing time. `SystemTime::now()` outside of tests.
    pub time: SystemTime,
    pub settings: SigningSettings,
}

impl fmt::Debug for SigningParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningParams")
            .field("access_key", &self.access_key)
            .field("secret_key", &"*** redacted ***")
            .field("security_token", &self.security_token.map(|_| "*** redacted ***"))
            .field("region", &self.region)
            .field("service_name", &self.service_name)
            .field("time", &self.time)
            .finish()
    }
}

/// A signed artifact together with the hex signature that was computed for it.
#[derive(Debug)]
pub struct SigningOutput<T> {
    output: T,
    signature: String,
}

impl<T> SigningOutput<T> {
    pub fn new(output: T, signature: String) -> Self {
        Self { output, signature }
    }

    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_parts(self) -> (T, String) {
        (self.output, self.signature)
    }
}

#[cfg(test)]
mod test {
    use crate::http_request::SigningSettings;
    use crate::SigningParams;
    use std::time::UNIX_EPOCH;

    #[test]
    fn secrets_are_not_printed() {
        let params = SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: "top-secret",
            security_token: Some("session-secret"),
            region: "us-east-1",
            service_name: "storagegateway",
            time: UNIX_EPOCH,
            settings: SigningSettings::default(),
        };
        let debug = format!("{:?}", params);
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("session-secret"));
    }
}
