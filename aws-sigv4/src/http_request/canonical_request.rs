/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::error::SigningError;
use super::settings::{PayloadChecksumKind, UriEncoding};
use super::sign::SignableRequest;
use crate::sign::sha256_hex_string;
use crate::SigningParams;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";

/// Headers that intermediaries may rewrite, or that carry the signature itself
const EXCLUDED_HEADERS: &[&str] = &[
    "authorization",
    "user-agent",
    "x-amz-user-agent",
    "x-amzn-trace-id",
    "expect",
    "transfer-encoding",
];

/// RFC 3986 unreserved characters pass through, everything else is encoded
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const PATH_SET: &AsciiSet = &UNRESERVED.remove(b'/');

#[derive(Debug, PartialEq)]
pub(crate) struct CanonicalRequest {
    method: String,
    path: String,
    query: String,
    headers: BTreeMap<String, String>,
    pub(crate) signed_headers: String,
    pub(crate) payload_hash: String,
}

impl CanonicalRequest {
    /// Builds the canonical request, including the signing headers that the signature will add
    pub(crate) fn from(
        req: &SignableRequest<'_>,
        params: &SigningParams<'_>,
        date_time: &str,
    ) -> Result<Self, SigningError> {
        let payload_hash = sha256_hex_string(req.body());

        let mut headers = BTreeMap::new();
        for name in req.headers().keys() {
            let name = name.as_str();
            if EXCLUDED_HEADERS.contains(&name) {
                continue;
            }
            let mut values = Vec::new();
            for value in req.headers().get_all(name) {
                let value = value
                    .to_str()
                    .map_err(|_| SigningError::NonUtf8Header(name.to_string()))?;
                values.push(normalize_header_value(value));
            }
            headers.insert(name.to_string(), values.join(","));
        }
        if !headers.contains_key("host") {
            let authority = req.uri().authority().ok_or(SigningError::MissingHost)?;
            headers.insert("host".to_string(), authority.as_str().to_string());
        }
        headers.insert(X_AMZ_DATE.to_string(), date_time.to_string());
        if let Some(token) = params.security_token {
            headers.insert(X_AMZ_SECURITY_TOKEN.to_string(), token.to_string());
        }
        if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            headers.insert(X_AMZ_CONTENT_SHA_256.to_string(), payload_hash.clone());
        }
        let signed_headers = headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(";");

        Ok(CanonicalRequest {
            method: req.method().as_str().to_string(),
            path: canonical_path(req.uri().path(), params.settings.uri_encoding).into_owned(),
            query: canonical_query(req.uri().query()),
            headers,
            signed_headers,
            payload_hash,
        })
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.query)?;
        for (name, value) in &self.headers {
            writeln!(f, "{}:{}", name, value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.payload_hash)
    }
}

fn canonical_path(path: &str, encoding: UriEncoding) -> Cow<'_, str> {
    let path = if path.is_empty() { "/" } else { path };
    match encoding {
        UriEncoding::Double => utf8_percent_encode(path, PATH_SET).into(),
        UriEncoding::Single => Cow::Borrowed(path),
    }
}

fn canonical_query(query: Option<&str>) -> String {
    let mut params: Vec<(String, String)> = query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut kv = pair.splitn(2, '=');
            let k = kv.next().unwrap_or_default();
            let v = kv.next().unwrap_or_default();
            (reencode(k), reencode(v))
        })
        .collect();
    params.sort();
    params
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn reencode(component: &str) -> String {
    let decoded = percent_decode_str(component).decode_utf8_lossy();
    utf8_percent_encode(&decoded, UNRESERVED).to_string()
}

/// Trims the value and collapses runs of spaces into a single space
fn normalize_header_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_was_space = false;
    for c in value.trim().chars() {
        if c == ' ' {
            if !last_was_space {
                out.push(c);
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::{canonical_path, canonical_query, normalize_header_value};
    use crate::http_request::UriEncoding;

    #[test]
    fn query_is_sorted_and_reencoded() {
        assert_eq!(
            canonical_query(Some("entityId=a%20b&catalog=AWSMarketplace")),
            "catalog=AWSMarketplace&entityId=a%20b"
        );
        assert_eq!(canonical_query(Some("b=2&a")), "a=&b=2");
        assert_eq!(canonical_query(None), "");
    }

    #[test]
    fn path_encoding() {
        assert_eq!(canonical_path("", UriEncoding::Double), "/");
        assert_eq!(canonical_path("/a%20b/c", UriEncoding::Double), "/a%2520b/c");
        assert_eq!(canonical_path("/a%20b/c", UriEncoding::Single), "/a%20b/c");
    }

    #[test]
    fn header_values_are_normalized() {
        assert_eq!(normalize_header_value("  a   b  c "), "a b c");
    }
}
