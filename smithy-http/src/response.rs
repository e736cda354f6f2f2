/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseHttpResponse` is a generic trait for parsing structured data from HTTP responses.
///
/// `Output` is unconstrained so the same trait can serve plain request/response operations as
/// well as anything that needs to hold on to the body while it streams.
///
/// Parsing is split in two: `parse_unloaded` sees the response before the body is read and may
/// claim it, `parse_loaded` sees the fully buffered body. Keeping the trait sync makes the
/// parsers trivial to unit test.
pub trait ParseHttpResponse<B> {
    /// Output type of the HttpResponse.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<ListGatewaysOutput, ListGatewaysError>`
    type Output;

    /// Parse an HTTP response without reading the body. If the body must be provided to proceed,
    /// return `None`
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP response from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience Trait for non-streaming APIs
///
/// Every JSON operation in this SDK reads the whole body before parsing, so operation handlers
/// implement this trait and pick up [`ParseHttpResponse`] through the blanket impl.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::response::{ParseHttpResponse, ParseStrictResponse};
    use bytes::Bytes;
    use http::Response;

    struct BodyLength;

    impl ParseStrictResponse for BodyLength {
        type Output = usize;

        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            response.body().len()
        }
    }

    #[test]
    fn strict_parsers_never_claim_unloaded_bodies() {
        let mut response = Response::new(SdkBody::from("abc"));
        assert_eq!(
            ParseHttpResponse::<SdkBody>::parse_unloaded(&BodyLength, &mut response),
            None
        );
        let loaded = Response::new(Bytes::from_static(b"abc"));
        assert_eq!(
            ParseHttpResponse::<SdkBody>::parse_loaded(&BodyLength, &loaded),
            3
        );
    }
}
