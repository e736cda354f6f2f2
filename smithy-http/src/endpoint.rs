/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, InvalidUri, Uri};
use std::borrow::Cow;
use std::str::FromStr;

/// API Endpoint
///
/// The scheme and authority of an endpoint replace those of the request URI. A path on the
/// endpoint is prepended to the request path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, `endpoint_prefix` is ignored when setting the endpoint on a request
    immutable: bool,
}

/// Failure to rewrite a request URI against an [`Endpoint`]
#[derive(Debug, thiserror::Error)]
pub enum InvalidEndpoint {
    #[error("endpoint `{0}` must have a scheme and an authority")]
    MissingAuthority(Uri),
    #[error("endpoint produced an invalid URI: {0}")]
    InvalidUri(#[from] InvalidUri),
    #[error("endpoint produced an invalid URI: {0}")]
    Http(#[from] http::Error),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// Some operations prefix the host (eg. a data plane prefix). Use [`Endpoint::immutable`]
    /// for endpoints that must never be rewritten, like a local test server.
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`, applying `prefix` to the host unless the endpoint is immutable
    pub fn set_endpoint(&self, uri: &mut Uri, prefix: Option<&str>) -> Result<(), InvalidEndpoint> {
        let (scheme, authority) = match (self.uri.scheme(), self.uri.authority()) {
            (Some(scheme), Some(authority)) => (scheme.clone(), authority.as_str()),
            _ => return Err(InvalidEndpoint::MissingAuthority(self.uri.clone())),
        };
        let authority = match prefix {
            Some(prefix) if !self.immutable && !prefix.is_empty() => {
                Authority::from_str(&format!("{}{}", prefix, authority))?
            }
            _ => Authority::from_str(authority)?,
        };
        *uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()?;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, InvalidEndpoint};
    use http::Uri;

    #[test]
    fn prefix_endpoint() {
        let ep = Endpoint::mutable(Uri::from_static("https://us-east-1.dynamo.amazonaws.com"));
        let mut uri = Uri::from_static("/list_tables?k=v");
        ep.set_endpoint(&mut uri, Some("subregion.")).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("https://subregion.us-east-1.dynamo.amazonaws.com/list_tables?k=v")
        );
    }

    #[test]
    fn prefix_endpoint_custom_port() {
        let ep = Endpoint::mutable(Uri::from_static(
            "https://storagegateway.us-west-2.amazonaws.com:6443",
        ));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri, Some("subregion.")).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("https://subregion.storagegateway.us-west-2.amazonaws.com:6443/")
        );
    }

    #[test]
    fn immutable_endpoints_ignore_prefix() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/ListEntities");
        ep.set_endpoint(&mut uri, Some("subregion.")).unwrap();
        assert_eq!(uri, Uri::from_static("http://localhost:8000/ListEntities"));
    }

    #[test]
    fn endpoint_path_is_prepended() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000/catalog/"));
        let mut uri = Uri::from_static("/DescribeEntity?catalog=AWSMarketplace");
        ep.set_endpoint(&mut uri, None).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("http://localhost:8000/catalog/DescribeEntity?catalog=AWSMarketplace")
        );
    }

    #[test]
    fn endpoint_without_authority_is_rejected() {
        let ep = Endpoint::mutable(Uri::from_static("/just/a/path"));
        let mut uri = Uri::from_static("/");
        assert!(matches!(
            ep.set_endpoint(&mut uri, None),
            Err(InvalidEndpoint::MissingAuthority(_))
        ));
    }
}
