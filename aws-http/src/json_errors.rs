/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error extraction for the AWS JSON protocols (`awsJson1_1` & `restJson1`)

use bytes::Bytes;
use http::header::ToStrError;
use http::{HeaderMap, Response};
use serde_json::{Map, Value};
use smithy_types::Error as GenericError;

fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.rfind('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<Result<&'a str, ToStrError>> {
    headers.get(name).map(|value| value.to_str())
}

fn string_field(body: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| body.get(*name).and_then(Value::as_str))
        .map(str::to_string)
}

/// Extract the code, message & request id of an error response
///
/// The code is taken from the `x-amzn-errortype` header when present, otherwise from the `__type`
/// or `code` body fields. Bodies that are not JSON objects produce an error without a message.
pub fn parse_generic_error(response: &Response<Bytes>) -> GenericError {
    let body = match serde_json::from_slice::<Value>(response.body().as_ref()) {
        Ok(Value::Object(body)) => body,
        _ => Map::new(),
    };
    let headers = response.headers();
    let code = match header(headers, "x-amzn-errortype") {
        Some(Ok(code)) => Some(code.to_string()),
        _ => string_field(&body, &["__type", "code"]),
    };
    let request_id = header(headers, "x-amzn-requestid")
        .or_else(|| header(headers, "x-amz-request-id"))
        .and_then(Result::ok)
        .map(str::to_string);
    GenericError {
        code: code.map(|code| sanitize_error_code(&code).to_string()),
        message: string_field(&body, &["message", "Message", "errorMessage"]),
        request_id,
    }
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn generic_error_from_body() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{"__type": "com.amazonaws.storagegateway#InvalidGatewayRequestException", "message": "The specified gateway was not found."}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("InvalidGatewayRequestException"));
        assert_eq!(err.message(), Some("The specified gateway was not found."));
        assert_eq!(err.request_id(), Some("1234"));
    }

    #[test]
    fn header_code_wins() {
        let response = http::Response::builder()
            .status(404)
            .header(
                "x-amzn-errortype",
                "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazon.mpc/",
            )
            .header("x-amz-request-id", "abcd")
            .body(Bytes::from_static(
                br#"{"code": "Ignored", "Message": "entity not found"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("entity not found"));
        assert_eq!(err.request_id(), Some("abcd"));
    }

    #[test]
    fn unparseable_bodies_produce_empty_errors() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::from_static(b"<html>bad gateway</html>"))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn error_codes_are_sanitized() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/"), "FooError");
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
