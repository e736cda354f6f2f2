/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation errors
//!
//! Every operation can fail with any of the three modeled Storage Gateway errors.

use serde::Deserialize;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

/// Error type for the `ActivateGateway` operation
#[derive(Debug)]
pub struct ActivateGatewayError {
    pub kind: ActivateGatewayErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ActivateGateway` operation
#[derive(Debug)]
pub enum ActivateGatewayErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ActivateGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ActivateGatewayErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ActivateGatewayErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ActivateGatewayErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ActivateGatewayErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ActivateGatewayError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ActivateGatewayError::code(self)
    }
}
impl ActivateGatewayError {
    pub fn new(kind: ActivateGatewayErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ActivateGatewayErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ActivateGatewayErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ActivateGatewayErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ActivateGatewayErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ActivateGatewayErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ActivateGatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ActivateGatewayErrorKind::InternalServerError(inner) => Some(inner),
            ActivateGatewayErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ActivateGatewayErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ActivateGatewayErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AddCache` operation
#[derive(Debug)]
pub struct AddCacheError {
    pub kind: AddCacheErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `AddCache` operation
#[derive(Debug)]
pub enum AddCacheErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for AddCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AddCacheErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            AddCacheErrorKind::InvalidGatewayRequestException(inner) => fmt::Display::fmt(inner, f),
            AddCacheErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            AddCacheErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for AddCacheError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        AddCacheError::code(self)
    }
}
impl AddCacheError {
    pub fn new(kind: AddCacheErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AddCacheErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AddCacheErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, AddCacheErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, AddCacheErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, AddCacheErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for AddCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AddCacheErrorKind::InternalServerError(inner) => Some(inner),
            AddCacheErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            AddCacheErrorKind::ServiceUnavailableError(inner) => Some(inner),
            AddCacheErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AddTagsToResource` operation
#[derive(Debug)]
pub struct AddTagsToResourceError {
    pub kind: AddTagsToResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `AddTagsToResource` operation
#[derive(Debug)]
pub enum AddTagsToResourceErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for AddTagsToResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AddTagsToResourceErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            AddTagsToResourceErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            AddTagsToResourceErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            AddTagsToResourceErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for AddTagsToResourceError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        AddTagsToResourceError::code(self)
    }
}
impl AddTagsToResourceError {
    pub fn new(kind: AddTagsToResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AddTagsToResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AddTagsToResourceErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, AddTagsToResourceErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, AddTagsToResourceErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, AddTagsToResourceErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for AddTagsToResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AddTagsToResourceErrorKind::InternalServerError(inner) => Some(inner),
            AddTagsToResourceErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            AddTagsToResourceErrorKind::ServiceUnavailableError(inner) => Some(inner),
            AddTagsToResourceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AddUploadBuffer` operation
#[derive(Debug)]
pub struct AddUploadBufferError {
    pub kind: AddUploadBufferErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `AddUploadBuffer` operation
#[derive(Debug)]
pub enum AddUploadBufferErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for AddUploadBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AddUploadBufferErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            AddUploadBufferErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            AddUploadBufferErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            AddUploadBufferErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for AddUploadBufferError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        AddUploadBufferError::code(self)
    }
}
impl AddUploadBufferError {
    pub fn new(kind: AddUploadBufferErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AddUploadBufferErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AddUploadBufferErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, AddUploadBufferErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, AddUploadBufferErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, AddUploadBufferErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for AddUploadBufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AddUploadBufferErrorKind::InternalServerError(inner) => Some(inner),
            AddUploadBufferErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            AddUploadBufferErrorKind::ServiceUnavailableError(inner) => Some(inner),
            AddUploadBufferErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AddWorkingStorage` operation
#[derive(Debug)]
pub struct AddWorkingStorageError {
    pub kind: AddWorkingStorageErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `AddWorkingStorage` operation
#[derive(Debug)]
pub enum AddWorkingStorageErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for AddWorkingStorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AddWorkingStorageErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            AddWorkingStorageErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            AddWorkingStorageErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            AddWorkingStorageErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for AddWorkingStorageError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        AddWorkingStorageError::code(self)
    }
}
impl AddWorkingStorageError {
    pub fn new(kind: AddWorkingStorageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AddWorkingStorageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AddWorkingStorageErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, AddWorkingStorageErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, AddWorkingStorageErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, AddWorkingStorageErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for AddWorkingStorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AddWorkingStorageErrorKind::InternalServerError(inner) => Some(inner),
            AddWorkingStorageErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            AddWorkingStorageErrorKind::ServiceUnavailableError(inner) => Some(inner),
            AddWorkingStorageErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AssignTapePool` operation
#[derive(Debug)]
pub struct AssignTapePoolError {
    pub kind: AssignTapePoolErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `AssignTapePool` operation
#[derive(Debug)]
pub enum AssignTapePoolErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for AssignTapePoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AssignTapePoolErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            AssignTapePoolErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            AssignTapePoolErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            AssignTapePoolErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for AssignTapePoolError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        AssignTapePoolError::code(self)
    }
}
impl AssignTapePoolError {
    pub fn new(kind: AssignTapePoolErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AssignTapePoolErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AssignTapePoolErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, AssignTapePoolErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, AssignTapePoolErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, AssignTapePoolErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for AssignTapePoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AssignTapePoolErrorKind::InternalServerError(inner) => Some(inner),
            AssignTapePoolErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            AssignTapePoolErrorKind::ServiceUnavailableError(inner) => Some(inner),
            AssignTapePoolErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `AttachVolume` operation
#[derive(Debug)]
pub struct AttachVolumeError {
    pub kind: AttachVolumeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `AttachVolume` operation
#[derive(Debug)]
pub enum AttachVolumeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for AttachVolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AttachVolumeErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            AttachVolumeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            AttachVolumeErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            AttachVolumeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for AttachVolumeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        AttachVolumeError::code(self)
    }
}
impl AttachVolumeError {
    pub fn new(kind: AttachVolumeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: AttachVolumeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: AttachVolumeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, AttachVolumeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, AttachVolumeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, AttachVolumeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for AttachVolumeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AttachVolumeErrorKind::InternalServerError(inner) => Some(inner),
            AttachVolumeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            AttachVolumeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            AttachVolumeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CancelArchival` operation
#[derive(Debug)]
pub struct CancelArchivalError {
    pub kind: CancelArchivalErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CancelArchival` operation
#[derive(Debug)]
pub enum CancelArchivalErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CancelArchivalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CancelArchivalErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            CancelArchivalErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CancelArchivalErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            CancelArchivalErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CancelArchivalError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CancelArchivalError::code(self)
    }
}
impl CancelArchivalError {
    pub fn new(kind: CancelArchivalErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CancelArchivalErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CancelArchivalErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CancelArchivalErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CancelArchivalErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CancelArchivalErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CancelArchivalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CancelArchivalErrorKind::InternalServerError(inner) => Some(inner),
            CancelArchivalErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CancelArchivalErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CancelArchivalErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CancelRetrieval` operation
#[derive(Debug)]
pub struct CancelRetrievalError {
    pub kind: CancelRetrievalErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CancelRetrieval` operation
#[derive(Debug)]
pub enum CancelRetrievalErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CancelRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CancelRetrievalErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            CancelRetrievalErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CancelRetrievalErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            CancelRetrievalErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CancelRetrievalError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CancelRetrievalError::code(self)
    }
}
impl CancelRetrievalError {
    pub fn new(kind: CancelRetrievalErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CancelRetrievalErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CancelRetrievalErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CancelRetrievalErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CancelRetrievalErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CancelRetrievalErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CancelRetrievalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CancelRetrievalErrorKind::InternalServerError(inner) => Some(inner),
            CancelRetrievalErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CancelRetrievalErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CancelRetrievalErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateCachediScsiVolume` operation
#[derive(Debug)]
pub struct CreateCachediScsiVolumeError {
    pub kind: CreateCachediScsiVolumeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateCachediScsiVolume` operation
#[derive(Debug)]
pub enum CreateCachediScsiVolumeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateCachediScsiVolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateCachediScsiVolumeErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateCachediScsiVolumeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateCachediScsiVolumeErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateCachediScsiVolumeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CreateCachediScsiVolumeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateCachediScsiVolumeError::code(self)
    }
}
impl CreateCachediScsiVolumeError {
    pub fn new(kind: CreateCachediScsiVolumeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateCachediScsiVolumeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateCachediScsiVolumeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateCachediScsiVolumeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CreateCachediScsiVolumeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CreateCachediScsiVolumeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CreateCachediScsiVolumeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateCachediScsiVolumeErrorKind::InternalServerError(inner) => Some(inner),
            CreateCachediScsiVolumeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateCachediScsiVolumeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CreateCachediScsiVolumeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateNfsFileShare` operation
#[derive(Debug)]
pub struct CreateNfsFileShareError {
    pub kind: CreateNfsFileShareErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateNfsFileShare` operation
#[derive(Debug)]
pub enum CreateNfsFileShareErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateNfsFileShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateNfsFileShareErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            CreateNfsFileShareErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateNfsFileShareErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateNfsFileShareErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CreateNfsFileShareError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateNfsFileShareError::code(self)
    }
}
impl CreateNfsFileShareError {
    pub fn new(kind: CreateNfsFileShareErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateNfsFileShareErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateNfsFileShareErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateNfsFileShareErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CreateNfsFileShareErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CreateNfsFileShareErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CreateNfsFileShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateNfsFileShareErrorKind::InternalServerError(inner) => Some(inner),
            CreateNfsFileShareErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateNfsFileShareErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CreateNfsFileShareErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateSmbFileShare` operation
#[derive(Debug)]
pub struct CreateSmbFileShareError {
    pub kind: CreateSmbFileShareErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateSmbFileShare` operation
#[derive(Debug)]
pub enum CreateSmbFileShareErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateSmbFileShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateSmbFileShareErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            CreateSmbFileShareErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateSmbFileShareErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateSmbFileShareErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CreateSmbFileShareError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateSmbFileShareError::code(self)
    }
}
impl CreateSmbFileShareError {
    pub fn new(kind: CreateSmbFileShareErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateSmbFileShareErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateSmbFileShareErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateSmbFileShareErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CreateSmbFileShareErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CreateSmbFileShareErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CreateSmbFileShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateSmbFileShareErrorKind::InternalServerError(inner) => Some(inner),
            CreateSmbFileShareErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateSmbFileShareErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CreateSmbFileShareErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateSnapshot` operation
#[derive(Debug)]
pub struct CreateSnapshotError {
    pub kind: CreateSnapshotErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateSnapshot` operation
#[derive(Debug)]
pub enum CreateSnapshotErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateSnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateSnapshotErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            CreateSnapshotErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateSnapshotErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            CreateSnapshotErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CreateSnapshotError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateSnapshotError::code(self)
    }
}
impl CreateSnapshotError {
    pub fn new(kind: CreateSnapshotErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateSnapshotErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateSnapshotErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateSnapshotErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CreateSnapshotErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CreateSnapshotErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CreateSnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateSnapshotErrorKind::InternalServerError(inner) => Some(inner),
            CreateSnapshotErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateSnapshotErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CreateSnapshotErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateSnapshotFromVolumeRecoveryPoint` operation
#[derive(Debug)]
pub struct CreateSnapshotFromVolumeRecoveryPointError {
    pub kind: CreateSnapshotFromVolumeRecoveryPointErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateSnapshotFromVolumeRecoveryPoint` operation
#[derive(Debug)]
pub enum CreateSnapshotFromVolumeRecoveryPointErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateSnapshotFromVolumeRecoveryPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateSnapshotFromVolumeRecoveryPointErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateSnapshotFromVolumeRecoveryPointErrorKind::InvalidGatewayRequestException(inner) => fmt::Display::fmt(inner, f),
            CreateSnapshotFromVolumeRecoveryPointErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateSnapshotFromVolumeRecoveryPointErrorKind::Unhandled(inner) => {
                fmt::Display::fmt(inner, f)
            }
        }
    }
}
impl ProvideErrorKind for CreateSnapshotFromVolumeRecoveryPointError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateSnapshotFromVolumeRecoveryPointError::code(self)
    }
}
impl CreateSnapshotFromVolumeRecoveryPointError {
    pub fn new(
        kind: CreateSnapshotFromVolumeRecoveryPointErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateSnapshotFromVolumeRecoveryPointErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateSnapshotFromVolumeRecoveryPointErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateSnapshotFromVolumeRecoveryPointErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(
            &self.kind,
            CreateSnapshotFromVolumeRecoveryPointErrorKind::InvalidGatewayRequestException(_)
        )
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(
            &self.kind,
            CreateSnapshotFromVolumeRecoveryPointErrorKind::ServiceUnavailableError(_)
        )
    }
}
impl std::error::Error for CreateSnapshotFromVolumeRecoveryPointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateSnapshotFromVolumeRecoveryPointErrorKind::InternalServerError(inner) => {
                Some(inner)
            }
            CreateSnapshotFromVolumeRecoveryPointErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateSnapshotFromVolumeRecoveryPointErrorKind::ServiceUnavailableError(inner) => {
                Some(inner)
            }
            CreateSnapshotFromVolumeRecoveryPointErrorKind::Unhandled(inner) => {
                Some(inner.as_ref())
            }
        }
    }
}

/// Error type for the `CreateStorediScsiVolume` operation
#[derive(Debug)]
pub struct CreateStorediScsiVolumeError {
    pub kind: CreateStorediScsiVolumeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateStorediScsiVolume` operation
#[derive(Debug)]
pub enum CreateStorediScsiVolumeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateStorediScsiVolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateStorediScsiVolumeErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateStorediScsiVolumeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateStorediScsiVolumeErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateStorediScsiVolumeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CreateStorediScsiVolumeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateStorediScsiVolumeError::code(self)
    }
}
impl CreateStorediScsiVolumeError {
    pub fn new(kind: CreateStorediScsiVolumeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateStorediScsiVolumeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateStorediScsiVolumeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateStorediScsiVolumeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CreateStorediScsiVolumeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CreateStorediScsiVolumeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CreateStorediScsiVolumeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateStorediScsiVolumeErrorKind::InternalServerError(inner) => Some(inner),
            CreateStorediScsiVolumeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateStorediScsiVolumeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CreateStorediScsiVolumeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateTapeWithBarcode` operation
#[derive(Debug)]
pub struct CreateTapeWithBarcodeError {
    pub kind: CreateTapeWithBarcodeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateTapeWithBarcode` operation
#[derive(Debug)]
pub enum CreateTapeWithBarcodeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateTapeWithBarcodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateTapeWithBarcodeErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateTapeWithBarcodeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateTapeWithBarcodeErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateTapeWithBarcodeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CreateTapeWithBarcodeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateTapeWithBarcodeError::code(self)
    }
}
impl CreateTapeWithBarcodeError {
    pub fn new(kind: CreateTapeWithBarcodeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateTapeWithBarcodeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateTapeWithBarcodeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateTapeWithBarcodeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CreateTapeWithBarcodeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CreateTapeWithBarcodeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CreateTapeWithBarcodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateTapeWithBarcodeErrorKind::InternalServerError(inner) => Some(inner),
            CreateTapeWithBarcodeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateTapeWithBarcodeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CreateTapeWithBarcodeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `CreateTapes` operation
#[derive(Debug)]
pub struct CreateTapesError {
    pub kind: CreateTapesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `CreateTapes` operation
#[derive(Debug)]
pub enum CreateTapesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for CreateTapesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CreateTapesErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            CreateTapesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            CreateTapesErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            CreateTapesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for CreateTapesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        CreateTapesError::code(self)
    }
}
impl CreateTapesError {
    pub fn new(kind: CreateTapesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateTapesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateTapesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateTapesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, CreateTapesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, CreateTapesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for CreateTapesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateTapesErrorKind::InternalServerError(inner) => Some(inner),
            CreateTapesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            CreateTapesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            CreateTapesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteAutomaticTapeCreationPolicy` operation
#[derive(Debug)]
pub struct DeleteAutomaticTapeCreationPolicyError {
    pub kind: DeleteAutomaticTapeCreationPolicyErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteAutomaticTapeCreationPolicy` operation
#[derive(Debug)]
pub enum DeleteAutomaticTapeCreationPolicyErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteAutomaticTapeCreationPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteAutomaticTapeCreationPolicyErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteAutomaticTapeCreationPolicyErrorKind::Unhandled(inner) => {
                fmt::Display::fmt(inner, f)
            }
        }
    }
}
impl ProvideErrorKind for DeleteAutomaticTapeCreationPolicyError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteAutomaticTapeCreationPolicyError::code(self)
    }
}
impl DeleteAutomaticTapeCreationPolicyError {
    pub fn new(
        kind: DeleteAutomaticTapeCreationPolicyErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteAutomaticTapeCreationPolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteAutomaticTapeCreationPolicyErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteAutomaticTapeCreationPolicyErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(
            &self.kind,
            DeleteAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(_)
        )
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteAutomaticTapeCreationPolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteAutomaticTapeCreationPolicyErrorKind::InternalServerError(inner) => Some(inner),
            DeleteAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DeleteAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(inner) => {
                Some(inner)
            }
            DeleteAutomaticTapeCreationPolicyErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteBandwidthRateLimit` operation
#[derive(Debug)]
pub struct DeleteBandwidthRateLimitError {
    pub kind: DeleteBandwidthRateLimitErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteBandwidthRateLimit` operation
#[derive(Debug)]
pub enum DeleteBandwidthRateLimitErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteBandwidthRateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteBandwidthRateLimitErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteBandwidthRateLimitErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteBandwidthRateLimitErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteBandwidthRateLimitErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteBandwidthRateLimitError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteBandwidthRateLimitError::code(self)
    }
}
impl DeleteBandwidthRateLimitError {
    pub fn new(kind: DeleteBandwidthRateLimitErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteBandwidthRateLimitErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteBandwidthRateLimitErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteBandwidthRateLimitErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteBandwidthRateLimitErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteBandwidthRateLimitErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteBandwidthRateLimitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteBandwidthRateLimitErrorKind::InternalServerError(inner) => Some(inner),
            DeleteBandwidthRateLimitErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteBandwidthRateLimitErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteBandwidthRateLimitErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteChapCredentials` operation
#[derive(Debug)]
pub struct DeleteChapCredentialsError {
    pub kind: DeleteChapCredentialsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteChapCredentials` operation
#[derive(Debug)]
pub enum DeleteChapCredentialsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteChapCredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteChapCredentialsErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteChapCredentialsErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteChapCredentialsErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteChapCredentialsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteChapCredentialsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteChapCredentialsError::code(self)
    }
}
impl DeleteChapCredentialsError {
    pub fn new(kind: DeleteChapCredentialsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteChapCredentialsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteChapCredentialsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteChapCredentialsErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteChapCredentialsErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteChapCredentialsErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteChapCredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteChapCredentialsErrorKind::InternalServerError(inner) => Some(inner),
            DeleteChapCredentialsErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteChapCredentialsErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteChapCredentialsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteFileShare` operation
#[derive(Debug)]
pub struct DeleteFileShareError {
    pub kind: DeleteFileShareErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteFileShare` operation
#[derive(Debug)]
pub enum DeleteFileShareErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteFileShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteFileShareErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DeleteFileShareErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteFileShareErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DeleteFileShareErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteFileShareError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteFileShareError::code(self)
    }
}
impl DeleteFileShareError {
    pub fn new(kind: DeleteFileShareErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteFileShareErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteFileShareErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteFileShareErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteFileShareErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteFileShareErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteFileShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteFileShareErrorKind::InternalServerError(inner) => Some(inner),
            DeleteFileShareErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteFileShareErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteFileShareErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteGateway` operation
#[derive(Debug)]
pub struct DeleteGatewayError {
    pub kind: DeleteGatewayErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteGateway` operation
#[derive(Debug)]
pub enum DeleteGatewayErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteGatewayErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DeleteGatewayErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteGatewayErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DeleteGatewayErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteGatewayError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteGatewayError::code(self)
    }
}
impl DeleteGatewayError {
    pub fn new(kind: DeleteGatewayErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteGatewayErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteGatewayErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteGatewayErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteGatewayErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteGatewayErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteGatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteGatewayErrorKind::InternalServerError(inner) => Some(inner),
            DeleteGatewayErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteGatewayErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteGatewayErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteSnapshotSchedule` operation
#[derive(Debug)]
pub struct DeleteSnapshotScheduleError {
    pub kind: DeleteSnapshotScheduleErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteSnapshotSchedule` operation
#[derive(Debug)]
pub enum DeleteSnapshotScheduleErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteSnapshotScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteSnapshotScheduleErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteSnapshotScheduleErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteSnapshotScheduleErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteSnapshotScheduleErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteSnapshotScheduleError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteSnapshotScheduleError::code(self)
    }
}
impl DeleteSnapshotScheduleError {
    pub fn new(kind: DeleteSnapshotScheduleErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteSnapshotScheduleErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteSnapshotScheduleErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteSnapshotScheduleErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteSnapshotScheduleErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteSnapshotScheduleErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteSnapshotScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteSnapshotScheduleErrorKind::InternalServerError(inner) => Some(inner),
            DeleteSnapshotScheduleErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteSnapshotScheduleErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteSnapshotScheduleErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteTape` operation
#[derive(Debug)]
pub struct DeleteTapeError {
    pub kind: DeleteTapeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteTape` operation
#[derive(Debug)]
pub enum DeleteTapeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteTapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteTapeErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DeleteTapeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteTapeErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DeleteTapeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteTapeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteTapeError::code(self)
    }
}
impl DeleteTapeError {
    pub fn new(kind: DeleteTapeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteTapeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteTapeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteTapeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteTapeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteTapeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteTapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteTapeErrorKind::InternalServerError(inner) => Some(inner),
            DeleteTapeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteTapeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteTapeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteTapeArchive` operation
#[derive(Debug)]
pub struct DeleteTapeArchiveError {
    pub kind: DeleteTapeArchiveErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteTapeArchive` operation
#[derive(Debug)]
pub enum DeleteTapeArchiveErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteTapeArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteTapeArchiveErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DeleteTapeArchiveErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteTapeArchiveErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteTapeArchiveErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteTapeArchiveError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteTapeArchiveError::code(self)
    }
}
impl DeleteTapeArchiveError {
    pub fn new(kind: DeleteTapeArchiveErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteTapeArchiveErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteTapeArchiveErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteTapeArchiveErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteTapeArchiveErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteTapeArchiveErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteTapeArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteTapeArchiveErrorKind::InternalServerError(inner) => Some(inner),
            DeleteTapeArchiveErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteTapeArchiveErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteTapeArchiveErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteVolume` operation
#[derive(Debug)]
pub struct DeleteVolumeError {
    pub kind: DeleteVolumeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DeleteVolume` operation
#[derive(Debug)]
pub enum DeleteVolumeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DeleteVolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeleteVolumeErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DeleteVolumeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DeleteVolumeErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DeleteVolumeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DeleteVolumeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DeleteVolumeError::code(self)
    }
}
impl DeleteVolumeError {
    pub fn new(kind: DeleteVolumeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteVolumeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteVolumeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteVolumeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteVolumeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DeleteVolumeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DeleteVolumeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteVolumeErrorKind::InternalServerError(inner) => Some(inner),
            DeleteVolumeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DeleteVolumeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DeleteVolumeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeAvailabilityMonitorTest` operation
#[derive(Debug)]
pub struct DescribeAvailabilityMonitorTestError {
    pub kind: DescribeAvailabilityMonitorTestErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeAvailabilityMonitorTest` operation
#[derive(Debug)]
pub enum DescribeAvailabilityMonitorTestErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeAvailabilityMonitorTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeAvailabilityMonitorTestErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeAvailabilityMonitorTestErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeAvailabilityMonitorTestErrorKind::Unhandled(inner) => {
                fmt::Display::fmt(inner, f)
            }
        }
    }
}
impl ProvideErrorKind for DescribeAvailabilityMonitorTestError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeAvailabilityMonitorTestError::code(self)
    }
}
impl DescribeAvailabilityMonitorTestError {
    pub fn new(kind: DescribeAvailabilityMonitorTestErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeAvailabilityMonitorTestErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeAvailabilityMonitorTestErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeAvailabilityMonitorTestErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(
            &self.kind,
            DescribeAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(_)
        )
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeAvailabilityMonitorTestErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeAvailabilityMonitorTestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeAvailabilityMonitorTestErrorKind::InternalServerError(inner) => Some(inner),
            DescribeAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DescribeAvailabilityMonitorTestErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeAvailabilityMonitorTestErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeBandwidthRateLimit` operation
#[derive(Debug)]
pub struct DescribeBandwidthRateLimitError {
    pub kind: DescribeBandwidthRateLimitErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeBandwidthRateLimit` operation
#[derive(Debug)]
pub enum DescribeBandwidthRateLimitErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeBandwidthRateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeBandwidthRateLimitErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeBandwidthRateLimitErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeBandwidthRateLimitErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeBandwidthRateLimitErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeBandwidthRateLimitError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeBandwidthRateLimitError::code(self)
    }
}
impl DescribeBandwidthRateLimitError {
    pub fn new(kind: DescribeBandwidthRateLimitErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeBandwidthRateLimitErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeBandwidthRateLimitErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeBandwidthRateLimitErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeBandwidthRateLimitErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeBandwidthRateLimitErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeBandwidthRateLimitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeBandwidthRateLimitErrorKind::InternalServerError(inner) => Some(inner),
            DescribeBandwidthRateLimitErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DescribeBandwidthRateLimitErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeBandwidthRateLimitErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeCache` operation
#[derive(Debug)]
pub struct DescribeCacheError {
    pub kind: DescribeCacheErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeCache` operation
#[derive(Debug)]
pub enum DescribeCacheErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeCacheErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DescribeCacheErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeCacheErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DescribeCacheErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeCacheError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeCacheError::code(self)
    }
}
impl DescribeCacheError {
    pub fn new(kind: DescribeCacheErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeCacheErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeCacheErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeCacheErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeCacheErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeCacheErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeCacheErrorKind::InternalServerError(inner) => Some(inner),
            DescribeCacheErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeCacheErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeCacheErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeCachediScsiVolumes` operation
#[derive(Debug)]
pub struct DescribeCachediScsiVolumesError {
    pub kind: DescribeCachediScsiVolumesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeCachediScsiVolumes` operation
#[derive(Debug)]
pub enum DescribeCachediScsiVolumesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeCachediScsiVolumesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeCachediScsiVolumesErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeCachediScsiVolumesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeCachediScsiVolumesErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeCachediScsiVolumesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeCachediScsiVolumesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeCachediScsiVolumesError::code(self)
    }
}
impl DescribeCachediScsiVolumesError {
    pub fn new(kind: DescribeCachediScsiVolumesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeCachediScsiVolumesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeCachediScsiVolumesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeCachediScsiVolumesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeCachediScsiVolumesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeCachediScsiVolumesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeCachediScsiVolumesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeCachediScsiVolumesErrorKind::InternalServerError(inner) => Some(inner),
            DescribeCachediScsiVolumesErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DescribeCachediScsiVolumesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeCachediScsiVolumesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeChapCredentials` operation
#[derive(Debug)]
pub struct DescribeChapCredentialsError {
    pub kind: DescribeChapCredentialsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeChapCredentials` operation
#[derive(Debug)]
pub enum DescribeChapCredentialsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeChapCredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeChapCredentialsErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeChapCredentialsErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeChapCredentialsErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeChapCredentialsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeChapCredentialsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeChapCredentialsError::code(self)
    }
}
impl DescribeChapCredentialsError {
    pub fn new(kind: DescribeChapCredentialsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeChapCredentialsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeChapCredentialsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeChapCredentialsErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeChapCredentialsErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeChapCredentialsErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeChapCredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeChapCredentialsErrorKind::InternalServerError(inner) => Some(inner),
            DescribeChapCredentialsErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeChapCredentialsErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeChapCredentialsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeGatewayInformation` operation
#[derive(Debug)]
pub struct DescribeGatewayInformationError {
    pub kind: DescribeGatewayInformationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeGatewayInformation` operation
#[derive(Debug)]
pub enum DescribeGatewayInformationErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeGatewayInformationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeGatewayInformationErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeGatewayInformationErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeGatewayInformationErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeGatewayInformationError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeGatewayInformationError::code(self)
    }
}
impl DescribeGatewayInformationError {
    pub fn new(kind: DescribeGatewayInformationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeGatewayInformationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeGatewayInformationErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeGatewayInformationErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeGatewayInformationErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeGatewayInformationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeGatewayInformationErrorKind::InternalServerError(inner) => Some(inner),
            DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DescribeGatewayInformationErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeGatewayInformationErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeMaintenanceStartTime` operation
#[derive(Debug)]
pub struct DescribeMaintenanceStartTimeError {
    pub kind: DescribeMaintenanceStartTimeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeMaintenanceStartTime` operation
#[derive(Debug)]
pub enum DescribeMaintenanceStartTimeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeMaintenanceStartTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeMaintenanceStartTimeErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeMaintenanceStartTimeErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeMaintenanceStartTimeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeMaintenanceStartTimeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeMaintenanceStartTimeError::code(self)
    }
}
impl DescribeMaintenanceStartTimeError {
    pub fn new(kind: DescribeMaintenanceStartTimeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeMaintenanceStartTimeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeMaintenanceStartTimeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeMaintenanceStartTimeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(
            &self.kind,
            DescribeMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(_)
        )
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeMaintenanceStartTimeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeMaintenanceStartTimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeMaintenanceStartTimeErrorKind::InternalServerError(inner) => Some(inner),
            DescribeMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DescribeMaintenanceStartTimeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeMaintenanceStartTimeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeNfsFileShares` operation
#[derive(Debug)]
pub struct DescribeNfsFileSharesError {
    pub kind: DescribeNfsFileSharesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeNfsFileShares` operation
#[derive(Debug)]
pub enum DescribeNfsFileSharesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeNfsFileSharesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeNfsFileSharesErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeNfsFileSharesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeNfsFileSharesErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeNfsFileSharesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeNfsFileSharesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeNfsFileSharesError::code(self)
    }
}
impl DescribeNfsFileSharesError {
    pub fn new(kind: DescribeNfsFileSharesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeNfsFileSharesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeNfsFileSharesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeNfsFileSharesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeNfsFileSharesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeNfsFileSharesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeNfsFileSharesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeNfsFileSharesErrorKind::InternalServerError(inner) => Some(inner),
            DescribeNfsFileSharesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeNfsFileSharesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeNfsFileSharesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeSmbFileShares` operation
#[derive(Debug)]
pub struct DescribeSmbFileSharesError {
    pub kind: DescribeSmbFileSharesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeSmbFileShares` operation
#[derive(Debug)]
pub enum DescribeSmbFileSharesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeSmbFileSharesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeSmbFileSharesErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSmbFileSharesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSmbFileSharesErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSmbFileSharesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeSmbFileSharesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeSmbFileSharesError::code(self)
    }
}
impl DescribeSmbFileSharesError {
    pub fn new(kind: DescribeSmbFileSharesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeSmbFileSharesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeSmbFileSharesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeSmbFileSharesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeSmbFileSharesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeSmbFileSharesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeSmbFileSharesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeSmbFileSharesErrorKind::InternalServerError(inner) => Some(inner),
            DescribeSmbFileSharesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeSmbFileSharesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeSmbFileSharesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeSmbSettings` operation
#[derive(Debug)]
pub struct DescribeSmbSettingsError {
    pub kind: DescribeSmbSettingsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeSmbSettings` operation
#[derive(Debug)]
pub enum DescribeSmbSettingsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeSmbSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeSmbSettingsErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DescribeSmbSettingsErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSmbSettingsErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSmbSettingsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeSmbSettingsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeSmbSettingsError::code(self)
    }
}
impl DescribeSmbSettingsError {
    pub fn new(kind: DescribeSmbSettingsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeSmbSettingsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeSmbSettingsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeSmbSettingsErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeSmbSettingsErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeSmbSettingsErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeSmbSettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeSmbSettingsErrorKind::InternalServerError(inner) => Some(inner),
            DescribeSmbSettingsErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeSmbSettingsErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeSmbSettingsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeSnapshotSchedule` operation
#[derive(Debug)]
pub struct DescribeSnapshotScheduleError {
    pub kind: DescribeSnapshotScheduleErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeSnapshotSchedule` operation
#[derive(Debug)]
pub enum DescribeSnapshotScheduleErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeSnapshotScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeSnapshotScheduleErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSnapshotScheduleErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSnapshotScheduleErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeSnapshotScheduleErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeSnapshotScheduleError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeSnapshotScheduleError::code(self)
    }
}
impl DescribeSnapshotScheduleError {
    pub fn new(kind: DescribeSnapshotScheduleErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeSnapshotScheduleErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeSnapshotScheduleErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeSnapshotScheduleErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeSnapshotScheduleErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeSnapshotScheduleErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeSnapshotScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeSnapshotScheduleErrorKind::InternalServerError(inner) => Some(inner),
            DescribeSnapshotScheduleErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeSnapshotScheduleErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeSnapshotScheduleErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeStorediScsiVolumes` operation
#[derive(Debug)]
pub struct DescribeStorediScsiVolumesError {
    pub kind: DescribeStorediScsiVolumesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeStorediScsiVolumes` operation
#[derive(Debug)]
pub enum DescribeStorediScsiVolumesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeStorediScsiVolumesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeStorediScsiVolumesErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeStorediScsiVolumesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeStorediScsiVolumesErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeStorediScsiVolumesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeStorediScsiVolumesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeStorediScsiVolumesError::code(self)
    }
}
impl DescribeStorediScsiVolumesError {
    pub fn new(kind: DescribeStorediScsiVolumesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeStorediScsiVolumesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeStorediScsiVolumesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeStorediScsiVolumesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeStorediScsiVolumesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeStorediScsiVolumesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeStorediScsiVolumesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeStorediScsiVolumesErrorKind::InternalServerError(inner) => Some(inner),
            DescribeStorediScsiVolumesErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DescribeStorediScsiVolumesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeStorediScsiVolumesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTapeArchives` operation
#[derive(Debug)]
pub struct DescribeTapeArchivesError {
    pub kind: DescribeTapeArchivesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeTapeArchives` operation
#[derive(Debug)]
pub enum DescribeTapeArchivesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeTapeArchivesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeTapeArchivesErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeTapeArchivesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeTapeArchivesErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeTapeArchivesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeTapeArchivesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeTapeArchivesError::code(self)
    }
}
impl DescribeTapeArchivesError {
    pub fn new(kind: DescribeTapeArchivesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTapeArchivesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTapeArchivesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeTapeArchivesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeTapeArchivesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeTapeArchivesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeTapeArchivesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTapeArchivesErrorKind::InternalServerError(inner) => Some(inner),
            DescribeTapeArchivesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeTapeArchivesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeTapeArchivesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTapeRecoveryPoints` operation
#[derive(Debug)]
pub struct DescribeTapeRecoveryPointsError {
    pub kind: DescribeTapeRecoveryPointsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeTapeRecoveryPoints` operation
#[derive(Debug)]
pub enum DescribeTapeRecoveryPointsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeTapeRecoveryPointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeTapeRecoveryPointsErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeTapeRecoveryPointsErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeTapeRecoveryPointsErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeTapeRecoveryPointsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeTapeRecoveryPointsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeTapeRecoveryPointsError::code(self)
    }
}
impl DescribeTapeRecoveryPointsError {
    pub fn new(kind: DescribeTapeRecoveryPointsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTapeRecoveryPointsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTapeRecoveryPointsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeTapeRecoveryPointsErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeTapeRecoveryPointsErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeTapeRecoveryPointsErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeTapeRecoveryPointsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTapeRecoveryPointsErrorKind::InternalServerError(inner) => Some(inner),
            DescribeTapeRecoveryPointsErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            DescribeTapeRecoveryPointsErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeTapeRecoveryPointsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTapes` operation
#[derive(Debug)]
pub struct DescribeTapesError {
    pub kind: DescribeTapesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeTapes` operation
#[derive(Debug)]
pub enum DescribeTapesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeTapesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeTapesErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DescribeTapesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeTapesErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DescribeTapesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeTapesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeTapesError::code(self)
    }
}
impl DescribeTapesError {
    pub fn new(kind: DescribeTapesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTapesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTapesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeTapesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeTapesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeTapesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeTapesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTapesErrorKind::InternalServerError(inner) => Some(inner),
            DescribeTapesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeTapesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeTapesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeUploadBuffer` operation
#[derive(Debug)]
pub struct DescribeUploadBufferError {
    pub kind: DescribeUploadBufferErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeUploadBuffer` operation
#[derive(Debug)]
pub enum DescribeUploadBufferErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeUploadBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeUploadBufferErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeUploadBufferErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeUploadBufferErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeUploadBufferErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeUploadBufferError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeUploadBufferError::code(self)
    }
}
impl DescribeUploadBufferError {
    pub fn new(kind: DescribeUploadBufferErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeUploadBufferErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeUploadBufferErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeUploadBufferErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeUploadBufferErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeUploadBufferErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeUploadBufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeUploadBufferErrorKind::InternalServerError(inner) => Some(inner),
            DescribeUploadBufferErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeUploadBufferErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeUploadBufferErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeVtlDevices` operation
#[derive(Debug)]
pub struct DescribeVtlDevicesError {
    pub kind: DescribeVtlDevicesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeVtlDevices` operation
#[derive(Debug)]
pub enum DescribeVtlDevicesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeVtlDevicesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeVtlDevicesErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DescribeVtlDevicesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeVtlDevicesErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeVtlDevicesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeVtlDevicesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeVtlDevicesError::code(self)
    }
}
impl DescribeVtlDevicesError {
    pub fn new(kind: DescribeVtlDevicesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeVtlDevicesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeVtlDevicesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeVtlDevicesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeVtlDevicesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeVtlDevicesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeVtlDevicesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeVtlDevicesErrorKind::InternalServerError(inner) => Some(inner),
            DescribeVtlDevicesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeVtlDevicesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeVtlDevicesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeWorkingStorage` operation
#[derive(Debug)]
pub struct DescribeWorkingStorageError {
    pub kind: DescribeWorkingStorageErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DescribeWorkingStorage` operation
#[derive(Debug)]
pub enum DescribeWorkingStorageErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DescribeWorkingStorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DescribeWorkingStorageErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeWorkingStorageErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeWorkingStorageErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DescribeWorkingStorageErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DescribeWorkingStorageError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DescribeWorkingStorageError::code(self)
    }
}
impl DescribeWorkingStorageError {
    pub fn new(kind: DescribeWorkingStorageErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeWorkingStorageErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeWorkingStorageErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeWorkingStorageErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeWorkingStorageErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DescribeWorkingStorageErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DescribeWorkingStorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeWorkingStorageErrorKind::InternalServerError(inner) => Some(inner),
            DescribeWorkingStorageErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DescribeWorkingStorageErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DescribeWorkingStorageErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DetachVolume` operation
#[derive(Debug)]
pub struct DetachVolumeError {
    pub kind: DetachVolumeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DetachVolume` operation
#[derive(Debug)]
pub enum DetachVolumeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DetachVolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DetachVolumeErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DetachVolumeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DetachVolumeErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DetachVolumeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DetachVolumeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DetachVolumeError::code(self)
    }
}
impl DetachVolumeError {
    pub fn new(kind: DetachVolumeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DetachVolumeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DetachVolumeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DetachVolumeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DetachVolumeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DetachVolumeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DetachVolumeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DetachVolumeErrorKind::InternalServerError(inner) => Some(inner),
            DetachVolumeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DetachVolumeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DetachVolumeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `DisableGateway` operation
#[derive(Debug)]
pub struct DisableGatewayError {
    pub kind: DisableGatewayErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `DisableGateway` operation
#[derive(Debug)]
pub enum DisableGatewayErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for DisableGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DisableGatewayErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            DisableGatewayErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            DisableGatewayErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            DisableGatewayErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for DisableGatewayError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        DisableGatewayError::code(self)
    }
}
impl DisableGatewayError {
    pub fn new(kind: DisableGatewayErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DisableGatewayErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DisableGatewayErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DisableGatewayErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, DisableGatewayErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, DisableGatewayErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for DisableGatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DisableGatewayErrorKind::InternalServerError(inner) => Some(inner),
            DisableGatewayErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            DisableGatewayErrorKind::ServiceUnavailableError(inner) => Some(inner),
            DisableGatewayErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `JoinDomain` operation
#[derive(Debug)]
pub struct JoinDomainError {
    pub kind: JoinDomainErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `JoinDomain` operation
#[derive(Debug)]
pub enum JoinDomainErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for JoinDomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            JoinDomainErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            JoinDomainErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            JoinDomainErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            JoinDomainErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for JoinDomainError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        JoinDomainError::code(self)
    }
}
impl JoinDomainError {
    pub fn new(kind: JoinDomainErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: JoinDomainErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: JoinDomainErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, JoinDomainErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, JoinDomainErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, JoinDomainErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for JoinDomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            JoinDomainErrorKind::InternalServerError(inner) => Some(inner),
            JoinDomainErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            JoinDomainErrorKind::ServiceUnavailableError(inner) => Some(inner),
            JoinDomainErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListAutomaticTapeCreationPolicies` operation
#[derive(Debug)]
pub struct ListAutomaticTapeCreationPoliciesError {
    pub kind: ListAutomaticTapeCreationPoliciesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListAutomaticTapeCreationPolicies` operation
#[derive(Debug)]
pub enum ListAutomaticTapeCreationPoliciesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListAutomaticTapeCreationPoliciesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListAutomaticTapeCreationPoliciesErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListAutomaticTapeCreationPoliciesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListAutomaticTapeCreationPoliciesErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListAutomaticTapeCreationPoliciesErrorKind::Unhandled(inner) => {
                fmt::Display::fmt(inner, f)
            }
        }
    }
}
impl ProvideErrorKind for ListAutomaticTapeCreationPoliciesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListAutomaticTapeCreationPoliciesError::code(self)
    }
}
impl ListAutomaticTapeCreationPoliciesError {
    pub fn new(
        kind: ListAutomaticTapeCreationPoliciesErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListAutomaticTapeCreationPoliciesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListAutomaticTapeCreationPoliciesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListAutomaticTapeCreationPoliciesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(
            &self.kind,
            ListAutomaticTapeCreationPoliciesErrorKind::InvalidGatewayRequestException(_)
        )
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListAutomaticTapeCreationPoliciesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListAutomaticTapeCreationPoliciesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListAutomaticTapeCreationPoliciesErrorKind::InternalServerError(inner) => Some(inner),
            ListAutomaticTapeCreationPoliciesErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            ListAutomaticTapeCreationPoliciesErrorKind::ServiceUnavailableError(inner) => {
                Some(inner)
            }
            ListAutomaticTapeCreationPoliciesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListFileShares` operation
#[derive(Debug)]
pub struct ListFileSharesError {
    pub kind: ListFileSharesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListFileShares` operation
#[derive(Debug)]
pub enum ListFileSharesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListFileSharesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListFileSharesErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ListFileSharesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListFileSharesErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ListFileSharesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListFileSharesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListFileSharesError::code(self)
    }
}
impl ListFileSharesError {
    pub fn new(kind: ListFileSharesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListFileSharesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListFileSharesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListFileSharesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListFileSharesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListFileSharesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListFileSharesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListFileSharesErrorKind::InternalServerError(inner) => Some(inner),
            ListFileSharesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListFileSharesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListFileSharesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListGateways` operation
#[derive(Debug)]
pub struct ListGatewaysError {
    pub kind: ListGatewaysErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListGateways` operation
#[derive(Debug)]
pub enum ListGatewaysErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListGatewaysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListGatewaysErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ListGatewaysErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListGatewaysErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ListGatewaysErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListGatewaysError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListGatewaysError::code(self)
    }
}
impl ListGatewaysError {
    pub fn new(kind: ListGatewaysErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListGatewaysErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListGatewaysErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListGatewaysErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListGatewaysErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListGatewaysErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListGatewaysError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListGatewaysErrorKind::InternalServerError(inner) => Some(inner),
            ListGatewaysErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListGatewaysErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListGatewaysErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListLocalDisks` operation
#[derive(Debug)]
pub struct ListLocalDisksError {
    pub kind: ListLocalDisksErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListLocalDisks` operation
#[derive(Debug)]
pub enum ListLocalDisksErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListLocalDisksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListLocalDisksErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ListLocalDisksErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListLocalDisksErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ListLocalDisksErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListLocalDisksError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListLocalDisksError::code(self)
    }
}
impl ListLocalDisksError {
    pub fn new(kind: ListLocalDisksErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListLocalDisksErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListLocalDisksErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListLocalDisksErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListLocalDisksErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListLocalDisksErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListLocalDisksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListLocalDisksErrorKind::InternalServerError(inner) => Some(inner),
            ListLocalDisksErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListLocalDisksErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListLocalDisksErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListTagsForResource` operation
#[derive(Debug)]
pub struct ListTagsForResourceError {
    pub kind: ListTagsForResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListTagsForResource` operation
#[derive(Debug)]
pub enum ListTagsForResourceErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListTagsForResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListTagsForResourceErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ListTagsForResourceErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListTagsForResourceErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListTagsForResourceErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListTagsForResourceError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListTagsForResourceError::code(self)
    }
}
impl ListTagsForResourceError {
    pub fn new(kind: ListTagsForResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTagsForResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTagsForResourceErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListTagsForResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTagsForResourceErrorKind::InternalServerError(inner) => Some(inner),
            ListTagsForResourceErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListTagsForResourceErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListTagsForResourceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListTapes` operation
#[derive(Debug)]
pub struct ListTapesError {
    pub kind: ListTapesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListTapes` operation
#[derive(Debug)]
pub enum ListTapesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListTapesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListTapesErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ListTapesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListTapesErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ListTapesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListTapesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListTapesError::code(self)
    }
}
impl ListTapesError {
    pub fn new(kind: ListTapesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTapesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTapesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListTapesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListTapesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListTapesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListTapesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTapesErrorKind::InternalServerError(inner) => Some(inner),
            ListTapesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListTapesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListTapesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListVolumeInitiators` operation
#[derive(Debug)]
pub struct ListVolumeInitiatorsError {
    pub kind: ListVolumeInitiatorsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListVolumeInitiators` operation
#[derive(Debug)]
pub enum ListVolumeInitiatorsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListVolumeInitiatorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListVolumeInitiatorsErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListVolumeInitiatorsErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListVolumeInitiatorsErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListVolumeInitiatorsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListVolumeInitiatorsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListVolumeInitiatorsError::code(self)
    }
}
impl ListVolumeInitiatorsError {
    pub fn new(kind: ListVolumeInitiatorsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListVolumeInitiatorsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListVolumeInitiatorsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListVolumeInitiatorsErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListVolumeInitiatorsErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListVolumeInitiatorsErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListVolumeInitiatorsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListVolumeInitiatorsErrorKind::InternalServerError(inner) => Some(inner),
            ListVolumeInitiatorsErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListVolumeInitiatorsErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListVolumeInitiatorsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListVolumeRecoveryPoints` operation
#[derive(Debug)]
pub struct ListVolumeRecoveryPointsError {
    pub kind: ListVolumeRecoveryPointsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListVolumeRecoveryPoints` operation
#[derive(Debug)]
pub enum ListVolumeRecoveryPointsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListVolumeRecoveryPointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListVolumeRecoveryPointsErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListVolumeRecoveryPointsErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListVolumeRecoveryPointsErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListVolumeRecoveryPointsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListVolumeRecoveryPointsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListVolumeRecoveryPointsError::code(self)
    }
}
impl ListVolumeRecoveryPointsError {
    pub fn new(kind: ListVolumeRecoveryPointsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListVolumeRecoveryPointsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListVolumeRecoveryPointsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListVolumeRecoveryPointsErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListVolumeRecoveryPointsErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListVolumeRecoveryPointsErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListVolumeRecoveryPointsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListVolumeRecoveryPointsErrorKind::InternalServerError(inner) => Some(inner),
            ListVolumeRecoveryPointsErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListVolumeRecoveryPointsErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListVolumeRecoveryPointsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ListVolumes` operation
#[derive(Debug)]
pub struct ListVolumesError {
    pub kind: ListVolumesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ListVolumes` operation
#[derive(Debug)]
pub enum ListVolumesErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ListVolumesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ListVolumesErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ListVolumesErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ListVolumesErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ListVolumesErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ListVolumesError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ListVolumesError::code(self)
    }
}
impl ListVolumesError {
    pub fn new(kind: ListVolumesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListVolumesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListVolumesErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListVolumesErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ListVolumesErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ListVolumesErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ListVolumesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListVolumesErrorKind::InternalServerError(inner) => Some(inner),
            ListVolumesErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ListVolumesErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ListVolumesErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `NotifyWhenUploaded` operation
#[derive(Debug)]
pub struct NotifyWhenUploadedError {
    pub kind: NotifyWhenUploadedErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `NotifyWhenUploaded` operation
#[derive(Debug)]
pub enum NotifyWhenUploadedErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for NotifyWhenUploadedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NotifyWhenUploadedErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            NotifyWhenUploadedErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            NotifyWhenUploadedErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            NotifyWhenUploadedErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for NotifyWhenUploadedError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        NotifyWhenUploadedError::code(self)
    }
}
impl NotifyWhenUploadedError {
    pub fn new(kind: NotifyWhenUploadedErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: NotifyWhenUploadedErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: NotifyWhenUploadedErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, NotifyWhenUploadedErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, NotifyWhenUploadedErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, NotifyWhenUploadedErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for NotifyWhenUploadedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            NotifyWhenUploadedErrorKind::InternalServerError(inner) => Some(inner),
            NotifyWhenUploadedErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            NotifyWhenUploadedErrorKind::ServiceUnavailableError(inner) => Some(inner),
            NotifyWhenUploadedErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `RefreshCache` operation
#[derive(Debug)]
pub struct RefreshCacheError {
    pub kind: RefreshCacheErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `RefreshCache` operation
#[derive(Debug)]
pub enum RefreshCacheErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for RefreshCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RefreshCacheErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            RefreshCacheErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RefreshCacheErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            RefreshCacheErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for RefreshCacheError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        RefreshCacheError::code(self)
    }
}
impl RefreshCacheError {
    pub fn new(kind: RefreshCacheErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: RefreshCacheErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: RefreshCacheErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, RefreshCacheErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, RefreshCacheErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, RefreshCacheErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for RefreshCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            RefreshCacheErrorKind::InternalServerError(inner) => Some(inner),
            RefreshCacheErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            RefreshCacheErrorKind::ServiceUnavailableError(inner) => Some(inner),
            RefreshCacheErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `RemoveTagsFromResource` operation
#[derive(Debug)]
pub struct RemoveTagsFromResourceError {
    pub kind: RemoveTagsFromResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `RemoveTagsFromResource` operation
#[derive(Debug)]
pub enum RemoveTagsFromResourceErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for RemoveTagsFromResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RemoveTagsFromResourceErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RemoveTagsFromResourceErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RemoveTagsFromResourceErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RemoveTagsFromResourceErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for RemoveTagsFromResourceError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        RemoveTagsFromResourceError::code(self)
    }
}
impl RemoveTagsFromResourceError {
    pub fn new(kind: RemoveTagsFromResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: RemoveTagsFromResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: RemoveTagsFromResourceErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, RemoveTagsFromResourceErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, RemoveTagsFromResourceErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, RemoveTagsFromResourceErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for RemoveTagsFromResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            RemoveTagsFromResourceErrorKind::InternalServerError(inner) => Some(inner),
            RemoveTagsFromResourceErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            RemoveTagsFromResourceErrorKind::ServiceUnavailableError(inner) => Some(inner),
            RemoveTagsFromResourceErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ResetCache` operation
#[derive(Debug)]
pub struct ResetCacheError {
    pub kind: ResetCacheErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ResetCache` operation
#[derive(Debug)]
pub enum ResetCacheErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ResetCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ResetCacheErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ResetCacheErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ResetCacheErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ResetCacheErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ResetCacheError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ResetCacheError::code(self)
    }
}
impl ResetCacheError {
    pub fn new(kind: ResetCacheErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ResetCacheErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ResetCacheErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ResetCacheErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ResetCacheErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ResetCacheErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ResetCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ResetCacheErrorKind::InternalServerError(inner) => Some(inner),
            ResetCacheErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ResetCacheErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ResetCacheErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `RetrieveTapeArchive` operation
#[derive(Debug)]
pub struct RetrieveTapeArchiveError {
    pub kind: RetrieveTapeArchiveErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `RetrieveTapeArchive` operation
#[derive(Debug)]
pub enum RetrieveTapeArchiveErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for RetrieveTapeArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RetrieveTapeArchiveErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            RetrieveTapeArchiveErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RetrieveTapeArchiveErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RetrieveTapeArchiveErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for RetrieveTapeArchiveError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        RetrieveTapeArchiveError::code(self)
    }
}
impl RetrieveTapeArchiveError {
    pub fn new(kind: RetrieveTapeArchiveErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: RetrieveTapeArchiveErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: RetrieveTapeArchiveErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, RetrieveTapeArchiveErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, RetrieveTapeArchiveErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, RetrieveTapeArchiveErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for RetrieveTapeArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            RetrieveTapeArchiveErrorKind::InternalServerError(inner) => Some(inner),
            RetrieveTapeArchiveErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            RetrieveTapeArchiveErrorKind::ServiceUnavailableError(inner) => Some(inner),
            RetrieveTapeArchiveErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `RetrieveTapeRecoveryPoint` operation
#[derive(Debug)]
pub struct RetrieveTapeRecoveryPointError {
    pub kind: RetrieveTapeRecoveryPointErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `RetrieveTapeRecoveryPoint` operation
#[derive(Debug)]
pub enum RetrieveTapeRecoveryPointErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for RetrieveTapeRecoveryPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RetrieveTapeRecoveryPointErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RetrieveTapeRecoveryPointErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RetrieveTapeRecoveryPointErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            RetrieveTapeRecoveryPointErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for RetrieveTapeRecoveryPointError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        RetrieveTapeRecoveryPointError::code(self)
    }
}
impl RetrieveTapeRecoveryPointError {
    pub fn new(kind: RetrieveTapeRecoveryPointErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: RetrieveTapeRecoveryPointErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: RetrieveTapeRecoveryPointErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, RetrieveTapeRecoveryPointErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, RetrieveTapeRecoveryPointErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, RetrieveTapeRecoveryPointErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for RetrieveTapeRecoveryPointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            RetrieveTapeRecoveryPointErrorKind::InternalServerError(inner) => Some(inner),
            RetrieveTapeRecoveryPointErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            RetrieveTapeRecoveryPointErrorKind::ServiceUnavailableError(inner) => Some(inner),
            RetrieveTapeRecoveryPointErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `SetLocalConsolePassword` operation
#[derive(Debug)]
pub struct SetLocalConsolePasswordError {
    pub kind: SetLocalConsolePasswordErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `SetLocalConsolePassword` operation
#[derive(Debug)]
pub enum SetLocalConsolePasswordErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for SetLocalConsolePasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SetLocalConsolePasswordErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            SetLocalConsolePasswordErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            SetLocalConsolePasswordErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            SetLocalConsolePasswordErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for SetLocalConsolePasswordError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        SetLocalConsolePasswordError::code(self)
    }
}
impl SetLocalConsolePasswordError {
    pub fn new(kind: SetLocalConsolePasswordErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: SetLocalConsolePasswordErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: SetLocalConsolePasswordErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, SetLocalConsolePasswordErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, SetLocalConsolePasswordErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, SetLocalConsolePasswordErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for SetLocalConsolePasswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SetLocalConsolePasswordErrorKind::InternalServerError(inner) => Some(inner),
            SetLocalConsolePasswordErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            SetLocalConsolePasswordErrorKind::ServiceUnavailableError(inner) => Some(inner),
            SetLocalConsolePasswordErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `SetSmbGuestPassword` operation
#[derive(Debug)]
pub struct SetSmbGuestPasswordError {
    pub kind: SetSmbGuestPasswordErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `SetSmbGuestPassword` operation
#[derive(Debug)]
pub enum SetSmbGuestPasswordErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for SetSmbGuestPasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SetSmbGuestPasswordErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            SetSmbGuestPasswordErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            SetSmbGuestPasswordErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            SetSmbGuestPasswordErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for SetSmbGuestPasswordError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        SetSmbGuestPasswordError::code(self)
    }
}
impl SetSmbGuestPasswordError {
    pub fn new(kind: SetSmbGuestPasswordErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: SetSmbGuestPasswordErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: SetSmbGuestPasswordErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, SetSmbGuestPasswordErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, SetSmbGuestPasswordErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, SetSmbGuestPasswordErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for SetSmbGuestPasswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SetSmbGuestPasswordErrorKind::InternalServerError(inner) => Some(inner),
            SetSmbGuestPasswordErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            SetSmbGuestPasswordErrorKind::ServiceUnavailableError(inner) => Some(inner),
            SetSmbGuestPasswordErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `ShutdownGateway` operation
#[derive(Debug)]
pub struct ShutdownGatewayError {
    pub kind: ShutdownGatewayErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `ShutdownGateway` operation
#[derive(Debug)]
pub enum ShutdownGatewayErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for ShutdownGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ShutdownGatewayErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            ShutdownGatewayErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            ShutdownGatewayErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            ShutdownGatewayErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for ShutdownGatewayError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        ShutdownGatewayError::code(self)
    }
}
impl ShutdownGatewayError {
    pub fn new(kind: ShutdownGatewayErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ShutdownGatewayErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ShutdownGatewayErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ShutdownGatewayErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, ShutdownGatewayErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, ShutdownGatewayErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for ShutdownGatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ShutdownGatewayErrorKind::InternalServerError(inner) => Some(inner),
            ShutdownGatewayErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            ShutdownGatewayErrorKind::ServiceUnavailableError(inner) => Some(inner),
            ShutdownGatewayErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `StartAvailabilityMonitorTest` operation
#[derive(Debug)]
pub struct StartAvailabilityMonitorTestError {
    pub kind: StartAvailabilityMonitorTestErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `StartAvailabilityMonitorTest` operation
#[derive(Debug)]
pub enum StartAvailabilityMonitorTestErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for StartAvailabilityMonitorTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StartAvailabilityMonitorTestErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            StartAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            StartAvailabilityMonitorTestErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            StartAvailabilityMonitorTestErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for StartAvailabilityMonitorTestError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        StartAvailabilityMonitorTestError::code(self)
    }
}
impl StartAvailabilityMonitorTestError {
    pub fn new(kind: StartAvailabilityMonitorTestErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartAvailabilityMonitorTestErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartAvailabilityMonitorTestErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, StartAvailabilityMonitorTestErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(
            &self.kind,
            StartAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(_)
        )
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, StartAvailabilityMonitorTestErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for StartAvailabilityMonitorTestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartAvailabilityMonitorTestErrorKind::InternalServerError(inner) => Some(inner),
            StartAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            StartAvailabilityMonitorTestErrorKind::ServiceUnavailableError(inner) => Some(inner),
            StartAvailabilityMonitorTestErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `StartGateway` operation
#[derive(Debug)]
pub struct StartGatewayError {
    pub kind: StartGatewayErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `StartGateway` operation
#[derive(Debug)]
pub enum StartGatewayErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for StartGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StartGatewayErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            StartGatewayErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            StartGatewayErrorKind::ServiceUnavailableError(inner) => fmt::Display::fmt(inner, f),
            StartGatewayErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for StartGatewayError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        StartGatewayError::code(self)
    }
}
impl StartGatewayError {
    pub fn new(kind: StartGatewayErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartGatewayErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartGatewayErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, StartGatewayErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, StartGatewayErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, StartGatewayErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for StartGatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartGatewayErrorKind::InternalServerError(inner) => Some(inner),
            StartGatewayErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            StartGatewayErrorKind::ServiceUnavailableError(inner) => Some(inner),
            StartGatewayErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateAutomaticTapeCreationPolicy` operation
#[derive(Debug)]
pub struct UpdateAutomaticTapeCreationPolicyError {
    pub kind: UpdateAutomaticTapeCreationPolicyErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateAutomaticTapeCreationPolicy` operation
#[derive(Debug)]
pub enum UpdateAutomaticTapeCreationPolicyErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateAutomaticTapeCreationPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateAutomaticTapeCreationPolicyErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateAutomaticTapeCreationPolicyErrorKind::Unhandled(inner) => {
                fmt::Display::fmt(inner, f)
            }
        }
    }
}
impl ProvideErrorKind for UpdateAutomaticTapeCreationPolicyError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateAutomaticTapeCreationPolicyError::code(self)
    }
}
impl UpdateAutomaticTapeCreationPolicyError {
    pub fn new(
        kind: UpdateAutomaticTapeCreationPolicyErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateAutomaticTapeCreationPolicyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateAutomaticTapeCreationPolicyErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateAutomaticTapeCreationPolicyErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(
            &self.kind,
            UpdateAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(_)
        )
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateAutomaticTapeCreationPolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateAutomaticTapeCreationPolicyErrorKind::InternalServerError(inner) => Some(inner),
            UpdateAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            UpdateAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(inner) => {
                Some(inner)
            }
            UpdateAutomaticTapeCreationPolicyErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateBandwidthRateLimit` operation
#[derive(Debug)]
pub struct UpdateBandwidthRateLimitError {
    pub kind: UpdateBandwidthRateLimitErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateBandwidthRateLimit` operation
#[derive(Debug)]
pub enum UpdateBandwidthRateLimitErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateBandwidthRateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateBandwidthRateLimitErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateBandwidthRateLimitErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateBandwidthRateLimitErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateBandwidthRateLimitErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateBandwidthRateLimitError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateBandwidthRateLimitError::code(self)
    }
}
impl UpdateBandwidthRateLimitError {
    pub fn new(kind: UpdateBandwidthRateLimitErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateBandwidthRateLimitErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateBandwidthRateLimitErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateBandwidthRateLimitErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateBandwidthRateLimitErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateBandwidthRateLimitErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateBandwidthRateLimitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateBandwidthRateLimitErrorKind::InternalServerError(inner) => Some(inner),
            UpdateBandwidthRateLimitErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateBandwidthRateLimitErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateBandwidthRateLimitErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateChapCredentials` operation
#[derive(Debug)]
pub struct UpdateChapCredentialsError {
    pub kind: UpdateChapCredentialsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateChapCredentials` operation
#[derive(Debug)]
pub enum UpdateChapCredentialsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateChapCredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateChapCredentialsErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateChapCredentialsErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateChapCredentialsErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateChapCredentialsErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateChapCredentialsError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateChapCredentialsError::code(self)
    }
}
impl UpdateChapCredentialsError {
    pub fn new(kind: UpdateChapCredentialsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateChapCredentialsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateChapCredentialsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateChapCredentialsErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateChapCredentialsErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateChapCredentialsErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateChapCredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateChapCredentialsErrorKind::InternalServerError(inner) => Some(inner),
            UpdateChapCredentialsErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateChapCredentialsErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateChapCredentialsErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateGatewayInformation` operation
#[derive(Debug)]
pub struct UpdateGatewayInformationError {
    pub kind: UpdateGatewayInformationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateGatewayInformation` operation
#[derive(Debug)]
pub enum UpdateGatewayInformationErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateGatewayInformationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateGatewayInformationErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateGatewayInformationErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateGatewayInformationErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateGatewayInformationErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateGatewayInformationError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateGatewayInformationError::code(self)
    }
}
impl UpdateGatewayInformationError {
    pub fn new(kind: UpdateGatewayInformationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateGatewayInformationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateGatewayInformationErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateGatewayInformationErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateGatewayInformationErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateGatewayInformationErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateGatewayInformationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateGatewayInformationErrorKind::InternalServerError(inner) => Some(inner),
            UpdateGatewayInformationErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateGatewayInformationErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateGatewayInformationErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateGatewaySoftwareNow` operation
#[derive(Debug)]
pub struct UpdateGatewaySoftwareNowError {
    pub kind: UpdateGatewaySoftwareNowErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateGatewaySoftwareNow` operation
#[derive(Debug)]
pub enum UpdateGatewaySoftwareNowErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateGatewaySoftwareNowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateGatewaySoftwareNowErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateGatewaySoftwareNowErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateGatewaySoftwareNowErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateGatewaySoftwareNowErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateGatewaySoftwareNowError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateGatewaySoftwareNowError::code(self)
    }
}
impl UpdateGatewaySoftwareNowError {
    pub fn new(kind: UpdateGatewaySoftwareNowErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateGatewaySoftwareNowErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateGatewaySoftwareNowErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateGatewaySoftwareNowErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateGatewaySoftwareNowErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateGatewaySoftwareNowErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateGatewaySoftwareNowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateGatewaySoftwareNowErrorKind::InternalServerError(inner) => Some(inner),
            UpdateGatewaySoftwareNowErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateGatewaySoftwareNowErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateGatewaySoftwareNowErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateMaintenanceStartTime` operation
#[derive(Debug)]
pub struct UpdateMaintenanceStartTimeError {
    pub kind: UpdateMaintenanceStartTimeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateMaintenanceStartTime` operation
#[derive(Debug)]
pub enum UpdateMaintenanceStartTimeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateMaintenanceStartTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateMaintenanceStartTimeErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateMaintenanceStartTimeErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateMaintenanceStartTimeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateMaintenanceStartTimeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateMaintenanceStartTimeError::code(self)
    }
}
impl UpdateMaintenanceStartTimeError {
    pub fn new(kind: UpdateMaintenanceStartTimeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateMaintenanceStartTimeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateMaintenanceStartTimeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateMaintenanceStartTimeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateMaintenanceStartTimeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateMaintenanceStartTimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateMaintenanceStartTimeErrorKind::InternalServerError(inner) => Some(inner),
            UpdateMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            UpdateMaintenanceStartTimeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateMaintenanceStartTimeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateNfsFileShare` operation
#[derive(Debug)]
pub struct UpdateNfsFileShareError {
    pub kind: UpdateNfsFileShareErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateNfsFileShare` operation
#[derive(Debug)]
pub enum UpdateNfsFileShareErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateNfsFileShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateNfsFileShareErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            UpdateNfsFileShareErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateNfsFileShareErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateNfsFileShareErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateNfsFileShareError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateNfsFileShareError::code(self)
    }
}
impl UpdateNfsFileShareError {
    pub fn new(kind: UpdateNfsFileShareErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateNfsFileShareErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateNfsFileShareErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateNfsFileShareErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateNfsFileShareErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateNfsFileShareErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateNfsFileShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateNfsFileShareErrorKind::InternalServerError(inner) => Some(inner),
            UpdateNfsFileShareErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateNfsFileShareErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateNfsFileShareErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateSmbFileShare` operation
#[derive(Debug)]
pub struct UpdateSmbFileShareError {
    pub kind: UpdateSmbFileShareErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateSmbFileShare` operation
#[derive(Debug)]
pub enum UpdateSmbFileShareErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateSmbFileShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateSmbFileShareErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            UpdateSmbFileShareErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSmbFileShareErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSmbFileShareErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateSmbFileShareError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateSmbFileShareError::code(self)
    }
}
impl UpdateSmbFileShareError {
    pub fn new(kind: UpdateSmbFileShareErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateSmbFileShareErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateSmbFileShareErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateSmbFileShareErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateSmbFileShareErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateSmbFileShareErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateSmbFileShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateSmbFileShareErrorKind::InternalServerError(inner) => Some(inner),
            UpdateSmbFileShareErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateSmbFileShareErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateSmbFileShareErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateSmbSecurityStrategy` operation
#[derive(Debug)]
pub struct UpdateSmbSecurityStrategyError {
    pub kind: UpdateSmbSecurityStrategyErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateSmbSecurityStrategy` operation
#[derive(Debug)]
pub enum UpdateSmbSecurityStrategyErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateSmbSecurityStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateSmbSecurityStrategyErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSmbSecurityStrategyErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSmbSecurityStrategyErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSmbSecurityStrategyErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateSmbSecurityStrategyError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateSmbSecurityStrategyError::code(self)
    }
}
impl UpdateSmbSecurityStrategyError {
    pub fn new(kind: UpdateSmbSecurityStrategyErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateSmbSecurityStrategyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateSmbSecurityStrategyErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateSmbSecurityStrategyErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateSmbSecurityStrategyErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateSmbSecurityStrategyErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateSmbSecurityStrategyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateSmbSecurityStrategyErrorKind::InternalServerError(inner) => Some(inner),
            UpdateSmbSecurityStrategyErrorKind::InvalidGatewayRequestException(inner) => {
                Some(inner)
            }
            UpdateSmbSecurityStrategyErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateSmbSecurityStrategyErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateSnapshotSchedule` operation
#[derive(Debug)]
pub struct UpdateSnapshotScheduleError {
    pub kind: UpdateSnapshotScheduleErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateSnapshotSchedule` operation
#[derive(Debug)]
pub enum UpdateSnapshotScheduleErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateSnapshotScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateSnapshotScheduleErrorKind::InternalServerError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSnapshotScheduleErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSnapshotScheduleErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateSnapshotScheduleErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateSnapshotScheduleError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateSnapshotScheduleError::code(self)
    }
}
impl UpdateSnapshotScheduleError {
    pub fn new(kind: UpdateSnapshotScheduleErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateSnapshotScheduleErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateSnapshotScheduleErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateSnapshotScheduleErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateSnapshotScheduleErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateSnapshotScheduleErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateSnapshotScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateSnapshotScheduleErrorKind::InternalServerError(inner) => Some(inner),
            UpdateSnapshotScheduleErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateSnapshotScheduleErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateSnapshotScheduleErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateVtlDeviceType` operation
#[derive(Debug)]
pub struct UpdateVtlDeviceTypeError {
    pub kind: UpdateVtlDeviceTypeErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Modeled errors of the `UpdateVtlDeviceType` operation
#[derive(Debug)]
pub enum UpdateVtlDeviceTypeErrorKind {
    InternalServerError(crate::error::InternalServerError),
    InvalidGatewayRequestException(crate::error::InvalidGatewayRequestException),
    ServiceUnavailableError(crate::error::ServiceUnavailableError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl fmt::Display for UpdateVtlDeviceTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            UpdateVtlDeviceTypeErrorKind::InternalServerError(inner) => fmt::Display::fmt(inner, f),
            UpdateVtlDeviceTypeErrorKind::InvalidGatewayRequestException(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateVtlDeviceTypeErrorKind::ServiceUnavailableError(inner) => {
                fmt::Display::fmt(inner, f)
            }
            UpdateVtlDeviceTypeErrorKind::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
impl ProvideErrorKind for UpdateVtlDeviceTypeError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        UpdateVtlDeviceTypeError::code(self)
    }
}
impl UpdateVtlDeviceTypeError {
    pub fn new(kind: UpdateVtlDeviceTypeErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateVtlDeviceTypeErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateVtlDeviceTypeErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateVtlDeviceTypeErrorKind::InternalServerError(_))
    }

    pub fn is_invalid_gateway_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateVtlDeviceTypeErrorKind::InvalidGatewayRequestException(_))
    }

    pub fn is_service_unavailable_error(&self) -> bool {
        matches!(&self.kind, UpdateVtlDeviceTypeErrorKind::ServiceUnavailableError(_))
    }
}
impl std::error::Error for UpdateVtlDeviceTypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateVtlDeviceTypeErrorKind::InternalServerError(inner) => Some(inner),
            UpdateVtlDeviceTypeErrorKind::InvalidGatewayRequestException(inner) => Some(inner),
            UpdateVtlDeviceTypeErrorKind::ServiceUnavailableError(inner) => Some(inner),
            UpdateVtlDeviceTypeErrorKind::Unhandled(inner) => Some(inner.as_ref()),
        }
    }
}

/// An internal server error has occurred during the request.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct InternalServerError {
    /// A human-readable message describing the error that occurred.
    #[serde(rename = "message")]
    pub message: Option<String>,
    /// A `StorageGatewayError` that provides more information about the cause of the error.
    #[serde(rename = "error")]
    pub error: Option<crate::model::StorageGatewayError>,
}
impl InternalServerError {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn error(&self) -> Option<&crate::model::StorageGatewayError> {
        self.error.as_ref()
    }
}
/// See [`InternalServerError`](crate::error::InternalServerError)
pub mod internal_server_error {
    /// A builder for [`InternalServerError`](crate::error::InternalServerError)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
        pub(crate) error: Option<crate::model::StorageGatewayError>,
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
        pub fn error(mut self, input: crate::model::StorageGatewayError) -> Self {
            self.error = Some(input);
            self
        }
        pub fn set_error(mut self, input: Option<crate::model::StorageGatewayError>) -> Self {
            self.error = input;
            self
        }
        /// Consumes the builder and constructs a [`InternalServerError`](crate::error::InternalServerError)
        pub fn build(self) -> crate::error::InternalServerError {
            crate::error::InternalServerError {
                message: self.message,
                error: self.error,
            }
        }
    }
}
impl InternalServerError {
    /// Creates a new builder-style object to manufacture [`InternalServerError`](crate::error::InternalServerError)
    pub fn builder() -> crate::error::internal_server_error::Builder {
        crate::error::internal_server_error::Builder::default()
    }
}
impl fmt::Display for InternalServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternalServerError")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServerError {}


/// An exception occurred because an invalid gateway request was issued to the service.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct InvalidGatewayRequestException {
    /// A human-readable message describing the error that occurred.
    #[serde(rename = "message")]
    pub message: Option<String>,
    /// A `StorageGatewayError` that provides more information about the cause of the error.
    #[serde(rename = "error")]
    pub error: Option<crate::model::StorageGatewayError>,
}
impl InvalidGatewayRequestException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn error(&self) -> Option<&crate::model::StorageGatewayError> {
        self.error.as_ref()
    }
}
/// See [`InvalidGatewayRequestException`](crate::error::InvalidGatewayRequestException)
pub mod invalid_gateway_request_exception {
    /// A builder for [`InvalidGatewayRequestException`](crate::error::InvalidGatewayRequestException)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
        pub(crate) error: Option<crate::model::StorageGatewayError>,
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
        pub fn error(mut self, input: crate::model::StorageGatewayError) -> Self {
            self.error = Some(input);
            self
        }
        pub fn set_error(mut self, input: Option<crate::model::StorageGatewayError>) -> Self {
            self.error = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidGatewayRequestException`](crate::error::InvalidGatewayRequestException)
        pub fn build(self) -> crate::error::InvalidGatewayRequestException {
            crate::error::InvalidGatewayRequestException {
                message: self.message,
                error: self.error,
            }
        }
    }
}
impl InvalidGatewayRequestException {
    /// Creates a new builder-style object to manufacture [`InvalidGatewayRequestException`](crate::error::InvalidGatewayRequestException)
    pub fn builder() -> crate::error::invalid_gateway_request_exception::Builder {
        crate::error::invalid_gateway_request_exception::Builder::default()
    }
}
impl fmt::Display for InvalidGatewayRequestException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidGatewayRequestException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidGatewayRequestException {}


/// An internal server error has occurred because the service is unavailable.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ServiceUnavailableError {
    /// A human-readable message describing the error that occurred.
    #[serde(rename = "message")]
    pub message: Option<String>,
    /// A `StorageGatewayError` that provides more information about the cause of the error.
    #[serde(rename = "error")]
    pub error: Option<crate::model::StorageGatewayError>,
}
impl ServiceUnavailableError {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn error(&self) -> Option<&crate::model::StorageGatewayError> {
        self.error.as_ref()
    }
}
/// See [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
pub mod service_unavailable_error {
    /// A builder for [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) message: Option<String>,
        pub(crate) error: Option<crate::model::StorageGatewayError>,
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
        pub fn error(mut self, input: crate::model::StorageGatewayError) -> Self {
            self.error = Some(input);
            self
        }
        pub fn set_error(mut self, input: Option<crate::model::StorageGatewayError>) -> Self {
            self.error = input;
            self
        }
        /// Consumes the builder and constructs a [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
        pub fn build(self) -> crate::error::ServiceUnavailableError {
            crate::error::ServiceUnavailableError {
                message: self.message,
                error: self.error,
            }
        }
    }
}
impl ServiceUnavailableError {
    /// Creates a new builder-style object to manufacture [`ServiceUnavailableError`](crate::error::ServiceUnavailableError)
    pub fn builder() -> crate::error::service_unavailable_error::Builder {
        crate::error::service_unavailable_error::Builder::default()
    }
}
impl fmt::Display for ServiceUnavailableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceUnavailableError")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceUnavailableError {}
