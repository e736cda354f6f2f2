/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::build_metadata::{OsFamily, BUILD_METADATA};
use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;

/// User agent data for a single service client
///
/// Inserted into the property bag when an operation is built. [`UserAgentStage`] renders it into
/// the `user-agent` and `x-amz-user-agent` headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_version: &'static str,
    api_metadata: ApiMetadata,
    os_family: OsFamily,
    rust_version: &'static str,
    exec_env: Option<String>,
}

impl AwsUserAgent {
    /// Capture the build & execution environment for `api_metadata`
    ///
    /// `AWS_EXECUTION_ENV` is read from `env` when present.
    pub fn new_from_environment(env: Env, api_metadata: ApiMetadata) -> Self {
        AwsUserAgent {
            sdk_version: BUILD_METADATA.core_pkg_version,
            api_metadata,
            os_family: BUILD_METADATA.os_family,
            rust_version: BUILD_METADATA.rust_version,
            exec_env: env.get("AWS_EXECUTION_ENV").ok(),
        }
    }

    /// A user agent that renders identically on every platform
    pub fn for_tests() -> Self {
        AwsUserAgent {
            sdk_version: "0.123.test",
            api_metadata: ApiMetadata::new("test-service", "0.123"),
            os_family: OsFamily::Windows,
            rust_version: "1.50.0",
            exec_env: None,
        }
    }

    /// The value sent as `x-amz-user-agent`
    pub fn aws_ua_header(&self) -> String {
        let mut parts = vec![
            format!("aws-sdk-rust/{}", self.sdk_version),
            self.api_metadata.to_string(),
            format!("os/{}", self.os_family.as_str()),
            format!("lang/rust/{}", self.rust_version),
        ];
        if let Some(exec_env) = &self.exec_env {
            parts.push(format!("exec-env/{}", exec_env));
        }
        parts.join(" ")
    }

    /// The value sent as `user-agent`
    pub fn ua_header(&self) -> String {
        format!(
            "aws-sdk-rust/{} os/{} lang/rust/{}",
            self.sdk_version,
            self.os_family.as_str(),
            self.rust_version
        )
    }
}

/// Name & version of the service a client was generated for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        ApiMetadata {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl fmt::Display for ApiMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // service ids are lowercased with spaces replaced,
        // eg. `Storage Gateway` => `storage-gateway`
        let service_id = self.service_id.to_ascii_lowercase().replace(' ', "-");
        write!(f, "api/{}/{}", service_id, self.version)
    }
}

#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("user agent missing from property bag")]
    UserAgentMissing,
    #[error("provided user agent header was invalid")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

const X_AMZ_USER_AGENT: &str = "x-amz-user-agent";

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            req.headers_mut()
                .append(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            req.headers_mut().append(
                HeaderName::from_static(X_AMZ_USER_AGENT),
                HeaderValue::try_from(ua.aws_ua_header())?,
            );
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{ApiMetadata, AwsUserAgent, UserAgentStage, UserAgentStageError};
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    #[test]
    fn generate_a_valid_ua() {
        let ua = AwsUserAgent::for_tests();
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows lang/rust/1.50.0"
        );
        assert_eq!(
            ua.ua_header(),
            "aws-sdk-rust/0.123.test os/windows lang/rust/1.50.0"
        );
    }

    #[test]
    fn execution_environment_is_reported() {
        let env = Env::from_slice(&[("AWS_EXECUTION_ENV", "lambda")]);
        let ua = AwsUserAgent::new_from_environment(
            env,
            ApiMetadata::new("Storage Gateway", "0.0.1"),
        );
        let header = ua.aws_ua_header();
        assert!(header.contains("api/storage-gateway/0.0.1"), "{}", header);
        assert!(header.ends_with("exec-env/lambda"), "{}", header);
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        match stage.apply(req) {
            Err(UserAgentStageError::UserAgentMissing) => {}
            other => panic!("expected a missing user agent, got {:?}", other.map(|_| ())),
        }

        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.config_mut().insert(AwsUserAgent::for_tests());
        let req = stage.apply(req).expect("setting user agent should succeed");
        let (req, _) = req.into_parts();
        assert_eq!(
            req.headers()
                .get(USER_AGENT)
                .expect("UA header should be set"),
            "aws-sdk-rust/0.123.test os/windows lang/rust/1.50.0"
        );
        assert!(req.headers().get("x-amz-user-agent").is_some());
    }
}
