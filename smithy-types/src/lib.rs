/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod instant;
pub mod retry;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use crate::instant::Instant;

/// Generic error returned by a service.
///
/// Every operation error carries one of these. It holds whatever could be recovered from the
/// error response, even when the error code was not one the model knows about.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl retry::ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<retry::ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("unknown service error"))?;
        if let Some(message) = self.message() {
            write!(f, ": {}", message)?;
        }
        if let Some(request_id) = self.request_id() {
            write!(f, " (request id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::retry::ProvideErrorKind;
    use crate::{Error, Instant};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds), "1576540098.52");
    }

    #[test]
    fn whole_seconds_keep_trailing_zeros() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn generic_error_display() {
        let modeled = Error {
            code: Some("InvalidGatewayRequestException".to_string()),
            message: Some("gateway not found".to_string()),
            request_id: None,
        };
        assert_eq!(
            modeled.to_string(),
            "InvalidGatewayRequestException: gateway not found"
        );
        assert_eq!(
            ProvideErrorKind::code(&modeled),
            Some("InvalidGatewayRequestException")
        );

        let anonymous = Error {
            request_id: Some("req-1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            anonymous.to_string(),
            "unknown service error (request id: req-1)"
        );
        assert_eq!(ProvideErrorKind::code(&anonymous), None);
    }
}
