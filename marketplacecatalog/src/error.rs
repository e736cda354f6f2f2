/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation errors

use serde::Deserialize;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// Error type for the `CancelChangeSet` operation
#[derive(Debug)]
pub struct CancelChangeSetError {
    pub kind: CancelChangeSetErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CancelChangeSet` operation
#[derive(Debug)]
pub enum CancelChangeSetErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServiceException(crate::error::InternalServiceException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CancelChangeSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CancelChangeSetErrorKind::AccessDeniedException(inner) => fmt::Display::fmt(inner, f),
            CancelChangeSetErrorKind::InternalServiceException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CancelChangeSetErrorKind::ResourceInUseException(inner) => fmt::Display::fmt(inner, f),
            CancelChangeSetErrorKind::ResourceNotFoundException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CancelChangeSetErrorKind::ThrottlingException(inner) => fmt::Display::fmt(inner, f),
            CancelChangeSetErrorKind::ValidationException(inner) => fmt::Display::fmt(inner, f),
            CancelChangeSetErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CancelChangeSetError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            CancelChangeSetErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        CancelChangeSetError::code(self)
    }
}
impl CancelChangeSetError {
    pub fn new(kind: CancelChangeSetErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CancelChangeSetErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CancelChangeSetErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, CancelChangeSetErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_service_exception(&self) -> bool {
        matches!(&self.kind, CancelChangeSetErrorKind::InternalServiceException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CancelChangeSetErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, CancelChangeSetErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, CancelChangeSetErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, CancelChangeSetErrorKind::ValidationException(_))
    }
}
impl std::error::Error for CancelChangeSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CancelChangeSetErrorKind::AccessDeniedException(inner) => Some(inner),
            CancelChangeSetErrorKind::InternalServiceException(inner) => Some(inner),
            CancelChangeSetErrorKind::ResourceInUseException(inner) => Some(inner),
            CancelChangeSetErrorKind::ResourceNotFoundException(inner) => Some(inner),
            CancelChangeSetErrorKind::ThrottlingException(inner) => Some(inner),
            CancelChangeSetErrorKind::ValidationException(inner) => Some(inner),
            CancelChangeSetErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeChangeSet` operation
#[derive(Debug)]
pub struct DescribeChangeSetError {
    pub kind: DescribeChangeSetErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeChangeSet` operation
#[derive(Debug)]
pub enum DescribeChangeSetErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServiceException(crate::error::InternalServiceException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeChangeSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeChangeSetErrorKind::AccessDeniedException(inner) => fmt::Display::fmt(inner, f),
            DescribeChangeSetErrorKind::InternalServiceException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeChangeSetErrorKind::ResourceNotFoundException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeChangeSetErrorKind::ThrottlingException(inner) => fmt::Display::fmt(inner, f),
            DescribeChangeSetErrorKind::ValidationException(inner) => fmt::Display::fmt(inner, f),
            DescribeChangeSetErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeChangeSetError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            DescribeChangeSetErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        DescribeChangeSetError::code(self)
    }
}
impl DescribeChangeSetError {
    pub fn new(kind: DescribeChangeSetErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeChangeSetErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeChangeSetErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, DescribeChangeSetErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_service_exception(&self) -> bool {
        matches!(&self.kind, DescribeChangeSetErrorKind::InternalServiceException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DescribeChangeSetErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DescribeChangeSetErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, DescribeChangeSetErrorKind::ValidationException(_))
    }
}
impl std::error::Error for DescribeChangeSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeChangeSetErrorKind::AccessDeniedException(inner) => Some(inner),
            DescribeChangeSetErrorKind::InternalServiceException(inner) => Some(inner),
            DescribeChangeSetErrorKind::ResourceNotFoundException(inner) => Some(inner),
            DescribeChangeSetErrorKind::ThrottlingException(inner) => Some(inner),
            DescribeChangeSetErrorKind::ValidationException(inner) => Some(inner),
            DescribeChangeSetErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEntity` operation
#[derive(Debug)]
pub struct DescribeEntityError {
    pub kind: DescribeEntityErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeEntity` operation
#[derive(Debug)]
pub enum DescribeEntityErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServiceException(crate::error::InternalServiceException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ResourceNotSupportedException(crate::error::ResourceNotSupportedException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeEntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeEntityErrorKind::AccessDeniedException(inner) => fmt::Display::fmt(inner, f),
            DescribeEntityErrorKind::InternalServiceException(inner) => fmt::Display::fmt(inner, f),
            DescribeEntityErrorKind::ResourceNotFoundException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeEntityErrorKind::ResourceNotSupportedException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeEntityErrorKind::ThrottlingException(inner) => fmt::Display::fmt(inner, f),
            DescribeEntityErrorKind::ValidationException(inner) => fmt::Display::fmt(inner, f),
            DescribeEntityErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeEntityError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            DescribeEntityErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        DescribeEntityError::code(self)
    }
}
impl DescribeEntityError {
    pub fn new(kind: DescribeEntityErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEntityErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEntityErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, DescribeEntityErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_service_exception(&self) -> bool {
        matches!(&self.kind, DescribeEntityErrorKind::InternalServiceException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DescribeEntityErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_resource_not_supported_exception(&self) -> bool {
        matches!(&self.kind, DescribeEntityErrorKind::ResourceNotSupportedException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DescribeEntityErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, DescribeEntityErrorKind::ValidationException(_))
    }
}
impl std::error::Error for DescribeEntityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEntityErrorKind::AccessDeniedException(inner) => Some(inner),
            DescribeEntityErrorKind::InternalServiceException(inner) => Some(inner),
            DescribeEntityErrorKind::ResourceNotFoundException(inner) => Some(inner),
            DescribeEntityErrorKind::ResourceNotSupportedException(inner) => Some(inner),
            DescribeEntityErrorKind::ThrottlingException(inner) => Some(inner),
            DescribeEntityErrorKind::ValidationException(inner) => Some(inner),
            DescribeEntityErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListChangeSets` operation
#[derive(Debug)]
pub struct ListChangeSetsError {
    pub kind: ListChangeSetsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListChangeSets` operation
#[derive(Debug)]
pub enum ListChangeSetsErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServiceException(crate::error::InternalServiceException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListChangeSetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListChangeSetsErrorKind::AccessDeniedException(inner) => fmt::Display::fmt(inner, f),
            ListChangeSetsErrorKind::InternalServiceException(inner) => fmt::Display::fmt(inner, f),
            ListChangeSetsErrorKind::ThrottlingException(inner) => fmt::Display::fmt(inner, f),
            ListChangeSetsErrorKind::ValidationException(inner) => fmt::Display::fmt(inner, f),
            ListChangeSetsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListChangeSetsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            ListChangeSetsErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        ListChangeSetsError::code(self)
    }
}
impl ListChangeSetsError {
    pub fn new(kind: ListChangeSetsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListChangeSetsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListChangeSetsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, ListChangeSetsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_service_exception(&self) -> bool {
        matches!(&self.kind, ListChangeSetsErrorKind::InternalServiceException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListChangeSetsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListChangeSetsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListChangeSetsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListChangeSetsErrorKind::AccessDeniedException(inner) => Some(inner),
            ListChangeSetsErrorKind::InternalServiceException(inner) => Some(inner),
            ListChangeSetsErrorKind::ThrottlingException(inner) => Some(inner),
            ListChangeSetsErrorKind::ValidationException(inner) => Some(inner),
            ListChangeSetsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListEntities` operation
#[derive(Debug)]
pub struct ListEntitiesError {
    pub kind: ListEntitiesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListEntities` operation
#[derive(Debug)]
pub enum ListEntitiesErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServiceException(crate::error::InternalServiceException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListEntitiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListEntitiesErrorKind::AccessDeniedException(inner) => fmt::Display::fmt(inner, f),
            ListEntitiesErrorKind::InternalServiceException(inner) => fmt::Display::fmt(inner, f),
            ListEntitiesErrorKind::ResourceNotFoundException(inner) => fmt::Display::fmt(inner, f),
            ListEntitiesErrorKind::ThrottlingException(inner) => fmt::Display::fmt(inner, f),
            ListEntitiesErrorKind::ValidationException(inner) => fmt::Display::fmt(inner, f),
            ListEntitiesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListEntitiesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            ListEntitiesErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        ListEntitiesError::code(self)
    }
}
impl ListEntitiesError {
    pub fn new(kind: ListEntitiesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListEntitiesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListEntitiesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, ListEntitiesErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_service_exception(&self) -> bool {
        matches!(&self.kind, ListEntitiesErrorKind::InternalServiceException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListEntitiesErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListEntitiesErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListEntitiesErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListEntitiesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListEntitiesErrorKind::AccessDeniedException(inner) => Some(inner),
            ListEntitiesErrorKind::InternalServiceException(inner) => Some(inner),
            ListEntitiesErrorKind::ResourceNotFoundException(inner) => Some(inner),
            ListEntitiesErrorKind::ThrottlingException(inner) => Some(inner),
            ListEntitiesErrorKind::ValidationException(inner) => Some(inner),
            ListEntitiesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `StartChangeSet` operation
#[derive(Debug)]
pub struct StartChangeSetError {
    pub kind: StartChangeSetErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `StartChangeSet` operation
#[derive(Debug)]
pub enum StartChangeSetErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServiceException(crate::error::InternalServiceException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceQuotaExceededException(crate::error::ServiceQuotaExceededException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for StartChangeSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StartChangeSetErrorKind::AccessDeniedException(inner) => fmt::Display::fmt(inner, f),
            StartChangeSetErrorKind::InternalServiceException(inner) => fmt::Display::fmt(inner, f),
            StartChangeSetErrorKind::ResourceInUseException(inner) => fmt::Display::fmt(inner, f),
            StartChangeSetErrorKind::ResourceNotFoundException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            StartChangeSetErrorKind::ServiceQuotaExceededException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            StartChangeSetErrorKind::ThrottlingException(inner) => fmt::Display::fmt(inner, f),
            StartChangeSetErrorKind::ValidationException(inner) => fmt::Display::fmt(inner, f),
            StartChangeSetErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for StartChangeSetError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match &self.kind {
            StartChangeSetErrorKind::ThrottlingException(_) => Some(ErrorKind::ThrottlingError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        StartChangeSetError::code(self)
    }
}
impl StartChangeSetError {
    pub fn new(kind: StartChangeSetErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartChangeSetErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartChangeSetErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, StartChangeSetErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_service_exception(&self) -> bool {
        matches!(&self.kind, StartChangeSetErrorKind::InternalServiceException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, StartChangeSetErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, StartChangeSetErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_quota_exceeded_exception(&self) -> bool {
        matches!(&self.kind, StartChangeSetErrorKind::ServiceQuotaExceededException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, StartChangeSetErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, StartChangeSetErrorKind::ValidationException(_))
    }
}
impl std::error::Error for StartChangeSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartChangeSetErrorKind::AccessDeniedException(inner) => Some(inner),
            StartChangeSetErrorKind::InternalServiceException(inner) => Some(inner),
            StartChangeSetErrorKind::ResourceInUseException(inner) => Some(inner),
            StartChangeSetErrorKind::ResourceNotFoundException(inner) => Some(inner),
            StartChangeSetErrorKind::ServiceQuotaExceededException(inner) => Some(inner),
            StartChangeSetErrorKind::ThrottlingException(inner) => Some(inner),
            StartChangeSetErrorKind::ValidationException(inner) => Some(inner),
            StartChangeSetErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Access is denied.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AccessDeniedException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl AccessDeniedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`AccessDeniedException`](crate::error::AccessDeniedException)
pub mod access_denied_exception {
    /// A builder for [`AccessDeniedException`](crate::error::AccessDeniedException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`AccessDeniedException`](crate::error::AccessDeniedException)
        pub fn build(self) -> crate::error::AccessDeniedException {
            crate::error::AccessDeniedException {
                message: self.message,
            }
        }
    }
}
impl AccessDeniedException {
    /// Creates a new builder-style object to manufacture [`AccessDeniedException`](crate::error::AccessDeniedException)
    pub fn builder() -> crate::error::access_denied_exception::Builder {
        crate::error::access_denied_exception::Builder::default()
    }
}
impl fmt::Display for AccessDeniedException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessDeniedException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for AccessDeniedException {}


/// There was an internal service exception.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct InternalServiceException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl InternalServiceException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`InternalServiceException`](crate::error::InternalServiceException)
pub mod internal_service_exception {
    /// A builder for [`InternalServiceException`](crate::error::InternalServiceException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`InternalServiceException`](crate::error::InternalServiceException)
        pub fn build(self) -> crate::error::InternalServiceException {
            crate::error::InternalServiceException {
                message: self.message,
            }
        }
    }
}
impl InternalServiceException {
    /// Creates a new builder-style object to manufacture [`InternalServiceException`](crate::error::InternalServiceException)
    pub fn builder() -> crate::error::internal_service_exception::Builder {
        crate::error::internal_service_exception::Builder::default()
    }
}
impl fmt::Display for InternalServiceException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternalServiceException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServiceException {}


/// The resource is currently in use.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ResourceInUseException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl ResourceInUseException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`ResourceInUseException`](crate::error::ResourceInUseException)
pub mod resource_in_use_exception {
    /// A builder for [`ResourceInUseException`](crate::error::ResourceInUseException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceInUseException`](crate::error::ResourceInUseException)
        pub fn build(self) -> crate::error::ResourceInUseException {
            crate::error::ResourceInUseException {
                message: self.message,
            }
        }
    }
}
impl ResourceInUseException {
    /// Creates a new builder-style object to manufacture [`ResourceInUseException`](crate::error::ResourceInUseException)
    pub fn builder() -> crate::error::resource_in_use_exception::Builder {
        crate::error::resource_in_use_exception::Builder::default()
    }
}
impl fmt::Display for ResourceInUseException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceInUseException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceInUseException {}


/// The specified resource wasn't found.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ResourceNotFoundException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl ResourceNotFoundException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
pub mod resource_not_found_exception {
    /// A builder for [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
        pub fn build(self) -> crate::error::ResourceNotFoundException {
            crate::error::ResourceNotFoundException {
                message: self.message,
            }
        }
    }
}
impl ResourceNotFoundException {
    /// Creates a new builder-style object to manufacture [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
    pub fn builder() -> crate::error::resource_not_found_exception::Builder {
        crate::error::resource_not_found_exception::Builder::default()
    }
}
impl fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceNotFoundException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotFoundException {}


/// Currently, the specified resource is not supported.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ResourceNotSupportedException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl ResourceNotSupportedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`ResourceNotSupportedException`](crate::error::ResourceNotSupportedException)
pub mod resource_not_supported_exception {
    /// A builder for [`ResourceNotSupportedException`](crate::error::ResourceNotSupportedException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceNotSupportedException`](crate::error::ResourceNotSupportedException)
        pub fn build(self) -> crate::error::ResourceNotSupportedException {
            crate::error::ResourceNotSupportedException {
                message: self.message,
            }
        }
    }
}
impl ResourceNotSupportedException {
    /// Creates a new builder-style object to manufacture [`ResourceNotSupportedException`](crate::error::ResourceNotSupportedException)
    pub fn builder() -> crate::error::resource_not_supported_exception::Builder {
        crate::error::resource_not_supported_exception::Builder::default()
    }
}
impl fmt::Display for ResourceNotSupportedException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceNotSupportedException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotSupportedException {}


/// The maximum number of open requests per account has been exceeded.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ServiceQuotaExceededException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl ServiceQuotaExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
pub mod service_quota_exceeded_exception {
    /// A builder for [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
        pub fn build(self) -> crate::error::ServiceQuotaExceededException {
            crate::error::ServiceQuotaExceededException {
                message: self.message,
            }
        }
    }
}
impl ServiceQuotaExceededException {
    /// Creates a new builder-style object to manufacture [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
    pub fn builder() -> crate::error::service_quota_exceeded_exception::Builder {
        crate::error::service_quota_exceeded_exception::Builder::default()
    }
}
impl fmt::Display for ServiceQuotaExceededException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceQuotaExceededException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceQuotaExceededException {}


/// Too many requests.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ThrottlingException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl ThrottlingException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`ThrottlingException`](crate::error::ThrottlingException)
pub mod throttling_exception {
    /// A builder for [`ThrottlingException`](crate::error::ThrottlingException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ThrottlingException`](crate::error::ThrottlingException)
        pub fn build(self) -> crate::error::ThrottlingException {
            crate::error::ThrottlingException {
                message: self.message,
            }
        }
    }
}
impl ThrottlingException {
    /// Creates a new builder-style object to manufacture [`ThrottlingException`](crate::error::ThrottlingException)
    pub fn builder() -> crate::error::throttling_exception::Builder {
        crate::error::throttling_exception::Builder::default()
    }
}
impl fmt::Display for ThrottlingException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThrottlingException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ThrottlingException {}


/// An error occurred during validation.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ValidationException {
    /// A human-readable description of the error.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "Message")]
    pub message: Option<String>,
}
impl ValidationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
/// See [`ValidationException`](crate::error::ValidationException)
pub mod validation_exception {
    /// A builder for [`ValidationException`](crate::error::ValidationException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: Option<String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`ValidationException`](crate::error::ValidationException)
        pub fn build(self) -> crate::error::ValidationException {
            crate::error::ValidationException {
                message: self.message,
            }
        }
    }
}
impl ValidationException {
    /// Creates a new builder-style object to manufacture [`ValidationException`](crate::error::ValidationException)
    pub fn builder() -> crate::error::validation_exception::Builder {
        crate::error::validation_exception::Builder::default()
    }
}
impl fmt::Display for ValidationException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValidationException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ValidationException {}
