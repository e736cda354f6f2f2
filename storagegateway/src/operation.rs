/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation handlers: one per Storage Gateway operation

use aws_http::json_errors::parse_generic_error;
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

/// Activates the gateway you previously deployed on your host.
#[derive(Clone, Default, Debug)]
pub struct ActivateGateway {
    _private: (),
}
impl ActivateGateway {
    /// Creates a new builder-style object to manufacture [`ActivateGatewayInput`](crate::input::ActivateGatewayInput)
    pub fn builder() -> crate::input::activate_gateway_input::Builder {
        crate::input::activate_gateway_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ActivateGateway {
    type Output = Result<crate::output::ActivateGatewayOutput, crate::error::ActivateGatewayError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_activate_gateway_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ActivateGatewayError::unhandled)
    }
}

fn parse_activate_gateway_error(
    response: &http::Response<Bytes>,
) -> crate::error::ActivateGatewayError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ActivateGatewayError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ActivateGatewayErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ActivateGatewayError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ActivateGatewayErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ActivateGatewayError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ActivateGatewayErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ActivateGatewayError::unhandled(err),
        },
        _ => return crate::error::ActivateGatewayError::generic(generic),
    };
    crate::error::ActivateGatewayError::new(kind, generic)
}

/// Configures one or more gateway local disks as cache for a gateway.
#[derive(Clone, Default, Debug)]
pub struct AddCache {
    _private: (),
}
impl AddCache {
    /// Creates a new builder-style object to manufacture [`AddCacheInput`](crate::input::AddCacheInput)
    pub fn builder() -> crate::input::add_cache_input::Builder {
        crate::input::add_cache_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for AddCache {
    type Output = Result<crate::output::AddCacheOutput, crate::error::AddCacheError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_add_cache_error(response));
        }
        crate::aws_json::parse_body(response.body()).map_err(crate::error::AddCacheError::unhandled)
    }
}

fn parse_add_cache_error(response: &http::Response<Bytes>) -> crate::error::AddCacheError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::AddCacheError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddCacheErrorKind::InternalServerError(err),
            Err(err) => return crate::error::AddCacheError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddCacheErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::AddCacheError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddCacheErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::AddCacheError::unhandled(err),
        },
        _ => return crate::error::AddCacheError::generic(generic),
    };
    crate::error::AddCacheError::new(kind, generic)
}

/// Adds one or more tags to the specified resource.
#[derive(Clone, Default, Debug)]
pub struct AddTagsToResource {
    _private: (),
}
impl AddTagsToResource {
    /// Creates a new builder-style object to manufacture [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput)
    pub fn builder() -> crate::input::add_tags_to_resource_input::Builder {
        crate::input::add_tags_to_resource_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for AddTagsToResource {
    type Output = Result<
        crate::output::AddTagsToResourceOutput,
        crate::error::AddTagsToResourceError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_add_tags_to_resource_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::AddTagsToResourceError::unhandled)
    }
}

fn parse_add_tags_to_resource_error(
    response: &http::Response<Bytes>,
) -> crate::error::AddTagsToResourceError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::AddTagsToResourceError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddTagsToResourceErrorKind::InternalServerError(err),
            Err(err) => return crate::error::AddTagsToResourceError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::AddTagsToResourceErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::AddTagsToResourceError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddTagsToResourceErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::AddTagsToResourceError::unhandled(err),
        },
        _ => return crate::error::AddTagsToResourceError::generic(generic),
    };
    crate::error::AddTagsToResourceError::new(kind, generic)
}

/// Configures one or more gateway local disks as upload buffer for a specified gateway.
#[derive(Clone, Default, Debug)]
pub struct AddUploadBuffer {
    _private: (),
}
impl AddUploadBuffer {
    /// Creates a new builder-style object to manufacture [`AddUploadBufferInput`](crate::input::AddUploadBufferInput)
    pub fn builder() -> crate::input::add_upload_buffer_input::Builder {
        crate::input::add_upload_buffer_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for AddUploadBuffer {
    type Output = Result<crate::output::AddUploadBufferOutput, crate::error::AddUploadBufferError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_add_upload_buffer_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::AddUploadBufferError::unhandled)
    }
}

fn parse_add_upload_buffer_error(
    response: &http::Response<Bytes>,
) -> crate::error::AddUploadBufferError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::AddUploadBufferError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddUploadBufferErrorKind::InternalServerError(err),
            Err(err) => return crate::error::AddUploadBufferError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddUploadBufferErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::AddUploadBufferError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddUploadBufferErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::AddUploadBufferError::unhandled(err),
        },
        _ => return crate::error::AddUploadBufferError::generic(generic),
    };
    crate::error::AddUploadBufferError::new(kind, generic)
}

/// Configures one or more gateway local disks as working storage for a gateway.
#[derive(Clone, Default, Debug)]
pub struct AddWorkingStorage {
    _private: (),
}
impl AddWorkingStorage {
    /// Creates a new builder-style object to manufacture [`AddWorkingStorageInput`](crate::input::AddWorkingStorageInput)
    pub fn builder() -> crate::input::add_working_storage_input::Builder {
        crate::input::add_working_storage_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for AddWorkingStorage {
    type Output = Result<
        crate::output::AddWorkingStorageOutput,
        crate::error::AddWorkingStorageError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_add_working_storage_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::AddWorkingStorageError::unhandled)
    }
}

fn parse_add_working_storage_error(
    response: &http::Response<Bytes>,
) -> crate::error::AddWorkingStorageError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::AddWorkingStorageError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddWorkingStorageErrorKind::InternalServerError(err),
            Err(err) => return crate::error::AddWorkingStorageError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::AddWorkingStorageErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::AddWorkingStorageError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AddWorkingStorageErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::AddWorkingStorageError::unhandled(err),
        },
        _ => return crate::error::AddWorkingStorageError::generic(generic),
    };
    crate::error::AddWorkingStorageError::new(kind, generic)
}

/// Assigns a tape to a tape pool for archiving.
#[derive(Clone, Default, Debug)]
pub struct AssignTapePool {
    _private: (),
}
impl AssignTapePool {
    /// Creates a new builder-style object to manufacture [`AssignTapePoolInput`](crate::input::AssignTapePoolInput)
    pub fn builder() -> crate::input::assign_tape_pool_input::Builder {
        crate::input::assign_tape_pool_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for AssignTapePool {
    type Output = Result<crate::output::AssignTapePoolOutput, crate::error::AssignTapePoolError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_assign_tape_pool_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::AssignTapePoolError::unhandled)
    }
}

fn parse_assign_tape_pool_error(
    response: &http::Response<Bytes>,
) -> crate::error::AssignTapePoolError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::AssignTapePoolError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AssignTapePoolErrorKind::InternalServerError(err),
            Err(err) => return crate::error::AssignTapePoolError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AssignTapePoolErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::AssignTapePoolError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AssignTapePoolErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::AssignTapePoolError::unhandled(err),
        },
        _ => return crate::error::AssignTapePoolError::generic(generic),
    };
    crate::error::AssignTapePoolError::new(kind, generic)
}

/// Connects a volume to an iSCSI connection and then attaches the volume to the specified gateway.
#[derive(Clone, Default, Debug)]
pub struct AttachVolume {
    _private: (),
}
impl AttachVolume {
    /// Creates a new builder-style object to manufacture [`AttachVolumeInput`](crate::input::AttachVolumeInput)
    pub fn builder() -> crate::input::attach_volume_input::Builder {
        crate::input::attach_volume_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for AttachVolume {
    type Output = Result<crate::output::AttachVolumeOutput, crate::error::AttachVolumeError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_attach_volume_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::AttachVolumeError::unhandled)
    }
}

fn parse_attach_volume_error(response: &http::Response<Bytes>) -> crate::error::AttachVolumeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::AttachVolumeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AttachVolumeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::AttachVolumeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AttachVolumeErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::AttachVolumeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::AttachVolumeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::AttachVolumeError::unhandled(err),
        },
        _ => return crate::error::AttachVolumeError::generic(generic),
    };
    crate::error::AttachVolumeError::new(kind, generic)
}

/// Cancels archiving of a virtual tape to the virtual tape shelf (VTS) after the archiving process is initiated.
#[derive(Clone, Default, Debug)]
pub struct CancelArchival {
    _private: (),
}
impl CancelArchival {
    /// Creates a new builder-style object to manufacture [`CancelArchivalInput`](crate::input::CancelArchivalInput)
    pub fn builder() -> crate::input::cancel_archival_input::Builder {
        crate::input::cancel_archival_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CancelArchival {
    type Output = Result<crate::output::CancelArchivalOutput, crate::error::CancelArchivalError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_cancel_archival_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CancelArchivalError::unhandled)
    }
}

fn parse_cancel_archival_error(
    response: &http::Response<Bytes>,
) -> crate::error::CancelArchivalError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CancelArchivalError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelArchivalErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CancelArchivalError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelArchivalErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::CancelArchivalError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelArchivalErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CancelArchivalError::unhandled(err),
        },
        _ => return crate::error::CancelArchivalError::generic(generic),
    };
    crate::error::CancelArchivalError::new(kind, generic)
}

/// Cancels retrieval of a virtual tape from the virtual tape shelf (VTS) to a gateway after the retrieval process is initiated.
#[derive(Clone, Default, Debug)]
pub struct CancelRetrieval {
    _private: (),
}
impl CancelRetrieval {
    /// Creates a new builder-style object to manufacture [`CancelRetrievalInput`](crate::input::CancelRetrievalInput)
    pub fn builder() -> crate::input::cancel_retrieval_input::Builder {
        crate::input::cancel_retrieval_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CancelRetrieval {
    type Output = Result<crate::output::CancelRetrievalOutput, crate::error::CancelRetrievalError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_cancel_retrieval_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CancelRetrievalError::unhandled)
    }
}

fn parse_cancel_retrieval_error(
    response: &http::Response<Bytes>,
) -> crate::error::CancelRetrievalError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CancelRetrievalError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelRetrievalErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CancelRetrievalError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelRetrievalErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::CancelRetrievalError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelRetrievalErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CancelRetrievalError::unhandled(err),
        },
        _ => return crate::error::CancelRetrievalError::generic(generic),
    };
    crate::error::CancelRetrievalError::new(kind, generic)
}

/// Creates a cached volume on a specified cached volume gateway.
#[derive(Clone, Default, Debug)]
pub struct CreateCachediScsiVolume {
    _private: (),
}
impl CreateCachediScsiVolume {
    /// Creates a new builder-style object to manufacture [`CreateCachediScsiVolumeInput`](crate::input::CreateCachediScsiVolumeInput)
    pub fn builder() -> crate::input::create_cachedi_scsi_volume_input::Builder {
        crate::input::create_cachedi_scsi_volume_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateCachediScsiVolume {
    type Output = Result<
        crate::output::CreateCachediScsiVolumeOutput,
        crate::error::CreateCachediScsiVolumeError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_cachedi_scsi_volume_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateCachediScsiVolumeError::unhandled)
    }
}

fn parse_create_cachedi_scsi_volume_error(
    response: &http::Response<Bytes>,
) -> crate::error::CreateCachediScsiVolumeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateCachediScsiVolumeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateCachediScsiVolumeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CreateCachediScsiVolumeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::CreateCachediScsiVolumeErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::CreateCachediScsiVolumeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateCachediScsiVolumeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CreateCachediScsiVolumeError::unhandled(err),
        },
        _ => return crate::error::CreateCachediScsiVolumeError::generic(generic),
    };
    crate::error::CreateCachediScsiVolumeError::new(kind, generic)
}

/// Creates a Network File System (NFS) file share on an existing file gateway.
#[derive(Clone, Default, Debug)]
pub struct CreateNfsFileShare {
    _private: (),
}
impl CreateNfsFileShare {
    /// Creates a new builder-style object to manufacture [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput)
    pub fn builder() -> crate::input::create_nfs_file_share_input::Builder {
        crate::input::create_nfs_file_share_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateNfsFileShare {
    type Output = Result<
        crate::output::CreateNfsFileShareOutput,
        crate::error::CreateNfsFileShareError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_nfs_file_share_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateNfsFileShareError::unhandled)
    }
}

fn parse_create_nfs_file_share_error(
    response: &http::Response<Bytes>,
) -> crate::error::CreateNfsFileShareError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateNfsFileShareError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateNfsFileShareErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CreateNfsFileShareError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::CreateNfsFileShareErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::CreateNfsFileShareError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateNfsFileShareErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CreateNfsFileShareError::unhandled(err),
        },
        _ => return crate::error::CreateNfsFileShareError::generic(generic),
    };
    crate::error::CreateNfsFileShareError::new(kind, generic)
}

/// Creates a Server Message Block (SMB) file share on an existing file gateway.
#[derive(Clone, Default, Debug)]
pub struct CreateSmbFileShare {
    _private: (),
}
impl CreateSmbFileShare {
    /// Creates a new builder-style object to manufacture [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput)
    pub fn builder() -> crate::input::create_smb_file_share_input::Builder {
        crate::input::create_smb_file_share_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateSmbFileShare {
    type Output = Result<
        crate::output::CreateSmbFileShareOutput,
        crate::error::CreateSmbFileShareError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_smb_file_share_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateSmbFileShareError::unhandled)
    }
}

fn parse_create_smb_file_share_error(
    response: &http::Response<Bytes>,
) -> crate::error::CreateSmbFileShareError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateSmbFileShareError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSmbFileShareErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CreateSmbFileShareError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::CreateSmbFileShareErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::CreateSmbFileShareError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSmbFileShareErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CreateSmbFileShareError::unhandled(err),
        },
        _ => return crate::error::CreateSmbFileShareError::generic(generic),
    };
    crate::error::CreateSmbFileShareError::new(kind, generic)
}

/// Initiates a snapshot of a volume.
#[derive(Clone, Default, Debug)]
pub struct CreateSnapshot {
    _private: (),
}
impl CreateSnapshot {
    /// Creates a new builder-style object to manufacture [`CreateSnapshotInput`](crate::input::CreateSnapshotInput)
    pub fn builder() -> crate::input::create_snapshot_input::Builder {
        crate::input::create_snapshot_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateSnapshot {
    type Output = Result<crate::output::CreateSnapshotOutput, crate::error::CreateSnapshotError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_snapshot_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateSnapshotError::unhandled)
    }
}

fn parse_create_snapshot_error(
    response: &http::Response<Bytes>,
) -> crate::error::CreateSnapshotError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateSnapshotError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSnapshotErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CreateSnapshotError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSnapshotErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::CreateSnapshotError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSnapshotErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CreateSnapshotError::unhandled(err),
        },
        _ => return crate::error::CreateSnapshotError::generic(generic),
    };
    crate::error::CreateSnapshotError::new(kind, generic)
}

/// Initiates a snapshot of a gateway from a volume recovery point.
#[derive(Clone, Default, Debug)]
pub struct CreateSnapshotFromVolumeRecoveryPoint {
    _private: (),
}
impl CreateSnapshotFromVolumeRecoveryPoint {
    /// Creates a new builder-style object to manufacture [`CreateSnapshotFromVolumeRecoveryPointInput`](crate::input::CreateSnapshotFromVolumeRecoveryPointInput)
    pub fn builder() -> crate::input::create_snapshot_from_volume_recovery_point_input::Builder {
        crate::input::create_snapshot_from_volume_recovery_point_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateSnapshotFromVolumeRecoveryPoint {
    type Output = Result<
        crate::output::CreateSnapshotFromVolumeRecoveryPointOutput,
        crate::error::CreateSnapshotFromVolumeRecoveryPointError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_snapshot_from_volume_recovery_point_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateSnapshotFromVolumeRecoveryPointError::unhandled)
    }
}

fn parse_create_snapshot_from_volume_recovery_point_error(
    response: &http::Response<Bytes>,
) -> crate::error::CreateSnapshotFromVolumeRecoveryPointError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateSnapshotFromVolumeRecoveryPointError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSnapshotFromVolumeRecoveryPointErrorKind::InternalServerError(err),
            Err(err) => {
                return crate::error::CreateSnapshotFromVolumeRecoveryPointError::unhandled(err)
            }
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSnapshotFromVolumeRecoveryPointErrorKind::InvalidGatewayRequestException(err),
            Err(err) => {
                return crate::error::CreateSnapshotFromVolumeRecoveryPointError::unhandled(err)
            }
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateSnapshotFromVolumeRecoveryPointErrorKind::ServiceUnavailableError(err),
            Err(err) => {
                return crate::error::CreateSnapshotFromVolumeRecoveryPointError::unhandled(err)
            }
        },
        _ => return crate::error::CreateSnapshotFromVolumeRecoveryPointError::generic(generic),
    };
    crate::error::CreateSnapshotFromVolumeRecoveryPointError::new(kind, generic)
}

/// Creates a volume on a specified gateway.
#[derive(Clone, Default, Debug)]
pub struct CreateStorediScsiVolume {
    _private: (),
}
impl CreateStorediScsiVolume {
    /// Creates a new builder-style object to manufacture [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput)
    pub fn builder() -> crate::input::create_storedi_scsi_volume_input::Builder {
        crate::input::create_storedi_scsi_volume_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateStorediScsiVolume {
    type Output = Result<
        crate::output::CreateStorediScsiVolumeOutput,
        crate::error::CreateStorediScsiVolumeError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_storedi_scsi_volume_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateStorediScsiVolumeError::unhandled)
    }
}

fn parse_create_storedi_scsi_volume_error(
    response: &http::Response<Bytes>,
) -> crate::error::CreateStorediScsiVolumeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateStorediScsiVolumeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateStorediScsiVolumeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CreateStorediScsiVolumeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::CreateStorediScsiVolumeErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::CreateStorediScsiVolumeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateStorediScsiVolumeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CreateStorediScsiVolumeError::unhandled(err),
        },
        _ => return crate::error::CreateStorediScsiVolumeError::generic(generic),
    };
    crate::error::CreateStorediScsiVolumeError::new(kind, generic)
}

/// Creates a virtual tape by using your own barcode.
#[derive(Clone, Default, Debug)]
pub struct CreateTapeWithBarcode {
    _private: (),
}
impl CreateTapeWithBarcode {
    /// Creates a new builder-style object to manufacture [`CreateTapeWithBarcodeInput`](crate::input::CreateTapeWithBarcodeInput)
    pub fn builder() -> crate::input::create_tape_with_barcode_input::Builder {
        crate::input::create_tape_with_barcode_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateTapeWithBarcode {
    type Output = Result<
        crate::output::CreateTapeWithBarcodeOutput,
        crate::error::CreateTapeWithBarcodeError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_tape_with_barcode_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateTapeWithBarcodeError::unhandled)
    }
}

fn parse_create_tape_with_barcode_error(
    response: &http::Response<Bytes>,
) -> crate::error::CreateTapeWithBarcodeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateTapeWithBarcodeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateTapeWithBarcodeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CreateTapeWithBarcodeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::CreateTapeWithBarcodeErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::CreateTapeWithBarcodeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateTapeWithBarcodeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CreateTapeWithBarcodeError::unhandled(err),
        },
        _ => return crate::error::CreateTapeWithBarcodeError::generic(generic),
    };
    crate::error::CreateTapeWithBarcodeError::new(kind, generic)
}

/// Creates one or more virtual tapes.
#[derive(Clone, Default, Debug)]
pub struct CreateTapes {
    _private: (),
}
impl CreateTapes {
    /// Creates a new builder-style object to manufacture [`CreateTapesInput`](crate::input::CreateTapesInput)
    pub fn builder() -> crate::input::create_tapes_input::Builder {
        crate::input::create_tapes_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateTapes {
    type Output = Result<crate::output::CreateTapesOutput, crate::error::CreateTapesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_create_tapes_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::CreateTapesError::unhandled)
    }
}

fn parse_create_tapes_error(response: &http::Response<Bytes>) -> crate::error::CreateTapesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CreateTapesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateTapesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::CreateTapesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateTapesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::CreateTapesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::CreateTapesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::CreateTapesError::unhandled(err),
        },
        _ => return crate::error::CreateTapesError::generic(generic),
    };
    crate::error::CreateTapesError::new(kind, generic)
}

/// Deletes the automatic tape creation policy of a gateway.
#[derive(Clone, Default, Debug)]
pub struct DeleteAutomaticTapeCreationPolicy {
    _private: (),
}
impl DeleteAutomaticTapeCreationPolicy {
    /// Creates a new builder-style object to manufacture [`DeleteAutomaticTapeCreationPolicyInput`](crate::input::DeleteAutomaticTapeCreationPolicyInput)
    pub fn builder() -> crate::input::delete_automatic_tape_creation_policy_input::Builder {
        crate::input::delete_automatic_tape_creation_policy_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteAutomaticTapeCreationPolicy {
    type Output = Result<
        crate::output::DeleteAutomaticTapeCreationPolicyOutput,
        crate::error::DeleteAutomaticTapeCreationPolicyError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_automatic_tape_creation_policy_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteAutomaticTapeCreationPolicyError::unhandled)
    }
}

fn parse_delete_automatic_tape_creation_policy_error(
    response: &http::Response<Bytes>,
) -> crate::error::DeleteAutomaticTapeCreationPolicyError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteAutomaticTapeCreationPolicyError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DeleteAutomaticTapeCreationPolicyErrorKind::InternalServerError(err)
            }
            Err(err) => return crate::error::DeleteAutomaticTapeCreationPolicyError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DeleteAutomaticTapeCreationPolicyError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteAutomaticTapeCreationPolicyError::unhandled(err),
        },
        _ => return crate::error::DeleteAutomaticTapeCreationPolicyError::generic(generic),
    };
    crate::error::DeleteAutomaticTapeCreationPolicyError::new(kind, generic)
}

/// Deletes the bandwidth rate limits of a gateway.
#[derive(Clone, Default, Debug)]
pub struct DeleteBandwidthRateLimit {
    _private: (),
}
impl DeleteBandwidthRateLimit {
    /// Creates a new builder-style object to manufacture [`DeleteBandwidthRateLimitInput`](crate::input::DeleteBandwidthRateLimitInput)
    pub fn builder() -> crate::input::delete_bandwidth_rate_limit_input::Builder {
        crate::input::delete_bandwidth_rate_limit_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteBandwidthRateLimit {
    type Output = Result<
        crate::output::DeleteBandwidthRateLimitOutput,
        crate::error::DeleteBandwidthRateLimitError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_bandwidth_rate_limit_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteBandwidthRateLimitError::unhandled)
    }
}

fn parse_delete_bandwidth_rate_limit_error(
    response: &http::Response<Bytes>,
) -> crate::error::DeleteBandwidthRateLimitError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteBandwidthRateLimitError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteBandwidthRateLimitErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteBandwidthRateLimitError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DeleteBandwidthRateLimitErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DeleteBandwidthRateLimitError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DeleteBandwidthRateLimitErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DeleteBandwidthRateLimitError::unhandled(err),
        },
        _ => return crate::error::DeleteBandwidthRateLimitError::generic(generic),
    };
    crate::error::DeleteBandwidthRateLimitError::new(kind, generic)
}

/// Deletes Challenge-Handshake Authentication Protocol (CHAP) credentials for a specified iSCSI target and initiator pair.
#[derive(Clone, Default, Debug)]
pub struct DeleteChapCredentials {
    _private: (),
}
impl DeleteChapCredentials {
    /// Creates a new builder-style object to manufacture [`DeleteChapCredentialsInput`](crate::input::DeleteChapCredentialsInput)
    pub fn builder() -> crate::input::delete_chap_credentials_input::Builder {
        crate::input::delete_chap_credentials_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteChapCredentials {
    type Output = Result<
        crate::output::DeleteChapCredentialsOutput,
        crate::error::DeleteChapCredentialsError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_chap_credentials_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteChapCredentialsError::unhandled)
    }
}

fn parse_delete_chap_credentials_error(
    response: &http::Response<Bytes>,
) -> crate::error::DeleteChapCredentialsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteChapCredentialsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteChapCredentialsErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteChapCredentialsError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DeleteChapCredentialsErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DeleteChapCredentialsError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteChapCredentialsErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteChapCredentialsError::unhandled(err),
        },
        _ => return crate::error::DeleteChapCredentialsError::generic(generic),
    };
    crate::error::DeleteChapCredentialsError::new(kind, generic)
}

/// Deletes a file share from a file gateway.
#[derive(Clone, Default, Debug)]
pub struct DeleteFileShare {
    _private: (),
}
impl DeleteFileShare {
    /// Creates a new builder-style object to manufacture [`DeleteFileShareInput`](crate::input::DeleteFileShareInput)
    pub fn builder() -> crate::input::delete_file_share_input::Builder {
        crate::input::delete_file_share_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteFileShare {
    type Output = Result<crate::output::DeleteFileShareOutput, crate::error::DeleteFileShareError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_file_share_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteFileShareError::unhandled)
    }
}

fn parse_delete_file_share_error(
    response: &http::Response<Bytes>,
) -> crate::error::DeleteFileShareError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteFileShareError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteFileShareErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteFileShareError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteFileShareErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DeleteFileShareError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteFileShareErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteFileShareError::unhandled(err),
        },
        _ => return crate::error::DeleteFileShareError::generic(generic),
    };
    crate::error::DeleteFileShareError::new(kind, generic)
}

/// Deletes a gateway.
#[derive(Clone, Default, Debug)]
pub struct DeleteGateway {
    _private: (),
}
impl DeleteGateway {
    /// Creates a new builder-style object to manufacture [`DeleteGatewayInput`](crate::input::DeleteGatewayInput)
    pub fn builder() -> crate::input::delete_gateway_input::Builder {
        crate::input::delete_gateway_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteGateway {
    type Output = Result<crate::output::DeleteGatewayOutput, crate::error::DeleteGatewayError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_gateway_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteGatewayError::unhandled)
    }
}

fn parse_delete_gateway_error(
    response: &http::Response<Bytes>,
) -> crate::error::DeleteGatewayError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteGatewayError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteGatewayErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteGatewayError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteGatewayErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DeleteGatewayError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteGatewayErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteGatewayError::unhandled(err),
        },
        _ => return crate::error::DeleteGatewayError::generic(generic),
    };
    crate::error::DeleteGatewayError::new(kind, generic)
}

/// Deletes a snapshot of a volume.
#[derive(Clone, Default, Debug)]
pub struct DeleteSnapshotSchedule {
    _private: (),
}
impl DeleteSnapshotSchedule {
    /// Creates a new builder-style object to manufacture [`DeleteSnapshotScheduleInput`](crate::input::DeleteSnapshotScheduleInput)
    pub fn builder() -> crate::input::delete_snapshot_schedule_input::Builder {
        crate::input::delete_snapshot_schedule_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteSnapshotSchedule {
    type Output = Result<
        crate::output::DeleteSnapshotScheduleOutput,
        crate::error::DeleteSnapshotScheduleError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_snapshot_schedule_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteSnapshotScheduleError::unhandled)
    }
}

fn parse_delete_snapshot_schedule_error(
    response: &http::Response<Bytes>,
) -> crate::error::DeleteSnapshotScheduleError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteSnapshotScheduleError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteSnapshotScheduleErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteSnapshotScheduleError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DeleteSnapshotScheduleErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DeleteSnapshotScheduleError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteSnapshotScheduleErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteSnapshotScheduleError::unhandled(err),
        },
        _ => return crate::error::DeleteSnapshotScheduleError::generic(generic),
    };
    crate::error::DeleteSnapshotScheduleError::new(kind, generic)
}

/// Deletes the specified virtual tape.
#[derive(Clone, Default, Debug)]
pub struct DeleteTape {
    _private: (),
}
impl DeleteTape {
    /// Creates a new builder-style object to manufacture [`DeleteTapeInput`](crate::input::DeleteTapeInput)
    pub fn builder() -> crate::input::delete_tape_input::Builder {
        crate::input::delete_tape_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteTape {
    type Output = Result<crate::output::DeleteTapeOutput, crate::error::DeleteTapeError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_tape_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteTapeError::unhandled)
    }
}

fn parse_delete_tape_error(response: &http::Response<Bytes>) -> crate::error::DeleteTapeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteTapeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteTapeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteTapeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteTapeErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DeleteTapeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteTapeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteTapeError::unhandled(err),
        },
        _ => return crate::error::DeleteTapeError::generic(generic),
    };
    crate::error::DeleteTapeError::new(kind, generic)
}

/// Deletes the specified virtual tape from the virtual tape shelf (VTS).
#[derive(Clone, Default, Debug)]
pub struct DeleteTapeArchive {
    _private: (),
}
impl DeleteTapeArchive {
    /// Creates a new builder-style object to manufacture [`DeleteTapeArchiveInput`](crate::input::DeleteTapeArchiveInput)
    pub fn builder() -> crate::input::delete_tape_archive_input::Builder {
        crate::input::delete_tape_archive_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteTapeArchive {
    type Output = Result<
        crate::output::DeleteTapeArchiveOutput,
        crate::error::DeleteTapeArchiveError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_tape_archive_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteTapeArchiveError::unhandled)
    }
}

fn parse_delete_tape_archive_error(
    response: &http::Response<Bytes>,
) -> crate::error::DeleteTapeArchiveError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteTapeArchiveError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteTapeArchiveErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteTapeArchiveError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DeleteTapeArchiveErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DeleteTapeArchiveError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteTapeArchiveErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteTapeArchiveError::unhandled(err),
        },
        _ => return crate::error::DeleteTapeArchiveError::generic(generic),
    };
    crate::error::DeleteTapeArchiveError::new(kind, generic)
}

/// Deletes the specified storage volume that you previously created using the CreateCachediSCSIVolume or CreateStorediSCSIVolume API. This operation is only supported in the cached volume and stored volume types.
#[derive(Clone, Default, Debug)]
pub struct DeleteVolume {
    _private: (),
}
impl DeleteVolume {
    /// Creates a new builder-style object to manufacture [`DeleteVolumeInput`](crate::input::DeleteVolumeInput)
    pub fn builder() -> crate::input::delete_volume_input::Builder {
        crate::input::delete_volume_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteVolume {
    type Output = Result<crate::output::DeleteVolumeOutput, crate::error::DeleteVolumeError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_delete_volume_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DeleteVolumeError::unhandled)
    }
}

fn parse_delete_volume_error(response: &http::Response<Bytes>) -> crate::error::DeleteVolumeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DeleteVolumeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteVolumeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DeleteVolumeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteVolumeErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DeleteVolumeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DeleteVolumeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DeleteVolumeError::unhandled(err),
        },
        _ => return crate::error::DeleteVolumeError::generic(generic),
    };
    crate::error::DeleteVolumeError::new(kind, generic)
}

/// Returns information about the most recent High Availability monitoring test that was performed on the host in a cluster.
#[derive(Clone, Default, Debug)]
pub struct DescribeAvailabilityMonitorTest {
    _private: (),
}
impl DescribeAvailabilityMonitorTest {
    /// Creates a new builder-style object to manufacture [`DescribeAvailabilityMonitorTestInput`](crate::input::DescribeAvailabilityMonitorTestInput)
    pub fn builder() -> crate::input::describe_availability_monitor_test_input::Builder {
        crate::input::describe_availability_monitor_test_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeAvailabilityMonitorTest {
    type Output = Result<
        crate::output::DescribeAvailabilityMonitorTestOutput,
        crate::error::DescribeAvailabilityMonitorTestError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_availability_monitor_test_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeAvailabilityMonitorTestError::unhandled)
    }
}

fn parse_describe_availability_monitor_test_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeAvailabilityMonitorTestError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeAvailabilityMonitorTestError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeAvailabilityMonitorTestErrorKind::InternalServerError(err)
            }
            Err(err) => return crate::error::DescribeAvailabilityMonitorTestError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeAvailabilityMonitorTestError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeAvailabilityMonitorTestErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeAvailabilityMonitorTestError::unhandled(err),
        },
        _ => return crate::error::DescribeAvailabilityMonitorTestError::generic(generic),
    };
    crate::error::DescribeAvailabilityMonitorTestError::new(kind, generic)
}

/// Returns the bandwidth rate limits of a gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeBandwidthRateLimit {
    _private: (),
}
impl DescribeBandwidthRateLimit {
    /// Creates a new builder-style object to manufacture [`DescribeBandwidthRateLimitInput`](crate::input::DescribeBandwidthRateLimitInput)
    pub fn builder() -> crate::input::describe_bandwidth_rate_limit_input::Builder {
        crate::input::describe_bandwidth_rate_limit_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeBandwidthRateLimit {
    type Output = Result<
        crate::output::DescribeBandwidthRateLimitOutput,
        crate::error::DescribeBandwidthRateLimitError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_bandwidth_rate_limit_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeBandwidthRateLimitError::unhandled)
    }
}

fn parse_describe_bandwidth_rate_limit_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeBandwidthRateLimitError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeBandwidthRateLimitError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeBandwidthRateLimitErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeBandwidthRateLimitError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeBandwidthRateLimitErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeBandwidthRateLimitError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeBandwidthRateLimitErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeBandwidthRateLimitError::unhandled(err),
        },
        _ => return crate::error::DescribeBandwidthRateLimitError::generic(generic),
    };
    crate::error::DescribeBandwidthRateLimitError::new(kind, generic)
}

/// Returns information about the cache of a gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeCache {
    _private: (),
}
impl DescribeCache {
    /// Creates a new builder-style object to manufacture [`DescribeCacheInput`](crate::input::DescribeCacheInput)
    pub fn builder() -> crate::input::describe_cache_input::Builder {
        crate::input::describe_cache_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeCache {
    type Output = Result<crate::output::DescribeCacheOutput, crate::error::DescribeCacheError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_cache_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeCacheError::unhandled)
    }
}

fn parse_describe_cache_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeCacheError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeCacheError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeCacheErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeCacheError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeCacheErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeCacheError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeCacheErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeCacheError::unhandled(err),
        },
        _ => return crate::error::DescribeCacheError::generic(generic),
    };
    crate::error::DescribeCacheError::new(kind, generic)
}

/// Returns a description of the gateway volumes specified in the request.
#[derive(Clone, Default, Debug)]
pub struct DescribeCachediScsiVolumes {
    _private: (),
}
impl DescribeCachediScsiVolumes {
    /// Creates a new builder-style object to manufacture [`DescribeCachediScsiVolumesInput`](crate::input::DescribeCachediScsiVolumesInput)
    pub fn builder() -> crate::input::describe_cachedi_scsi_volumes_input::Builder {
        crate::input::describe_cachedi_scsi_volumes_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeCachediScsiVolumes {
    type Output = Result<
        crate::output::DescribeCachediScsiVolumesOutput,
        crate::error::DescribeCachediScsiVolumesError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_cachedi_scsi_volumes_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeCachediScsiVolumesError::unhandled)
    }
}

fn parse_describe_cachedi_scsi_volumes_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeCachediScsiVolumesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeCachediScsiVolumesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeCachediScsiVolumesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeCachediScsiVolumesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeCachediScsiVolumesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeCachediScsiVolumesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeCachediScsiVolumesErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeCachediScsiVolumesError::unhandled(err),
        },
        _ => return crate::error::DescribeCachediScsiVolumesError::generic(generic),
    };
    crate::error::DescribeCachediScsiVolumesError::new(kind, generic)
}

/// Returns an array of Challenge-Handshake Authentication Protocol (CHAP) credentials information for a specified iSCSI target, one for each target-initiator pair.
#[derive(Clone, Default, Debug)]
pub struct DescribeChapCredentials {
    _private: (),
}
impl DescribeChapCredentials {
    /// Creates a new builder-style object to manufacture [`DescribeChapCredentialsInput`](crate::input::DescribeChapCredentialsInput)
    pub fn builder() -> crate::input::describe_chap_credentials_input::Builder {
        crate::input::describe_chap_credentials_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeChapCredentials {
    type Output = Result<
        crate::output::DescribeChapCredentialsOutput,
        crate::error::DescribeChapCredentialsError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_chap_credentials_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeChapCredentialsError::unhandled)
    }
}

fn parse_describe_chap_credentials_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeChapCredentialsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeChapCredentialsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeChapCredentialsErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeChapCredentialsError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeChapCredentialsErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeChapCredentialsError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeChapCredentialsErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeChapCredentialsError::unhandled(err),
        },
        _ => return crate::error::DescribeChapCredentialsError::generic(generic),
    };
    crate::error::DescribeChapCredentialsError::new(kind, generic)
}

/// Returns metadata about a gateway such as its name, network interfaces, configured time zone, and the state (whether the gateway is running or not).
#[derive(Clone, Default, Debug)]
pub struct DescribeGatewayInformation {
    _private: (),
}
impl DescribeGatewayInformation {
    /// Creates a new builder-style object to manufacture [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
    pub fn builder() -> crate::input::describe_gateway_information_input::Builder {
        crate::input::describe_gateway_information_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeGatewayInformation {
    type Output = Result<
        crate::output::DescribeGatewayInformationOutput,
        crate::error::DescribeGatewayInformationError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_gateway_information_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeGatewayInformationError::unhandled)
    }
}

fn parse_describe_gateway_information_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeGatewayInformationError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeGatewayInformationError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeGatewayInformationErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeGatewayInformationError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeGatewayInformationErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeGatewayInformationError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeGatewayInformationErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeGatewayInformationError::unhandled(err),
        },
        _ => return crate::error::DescribeGatewayInformationError::generic(generic),
    };
    crate::error::DescribeGatewayInformationError::new(kind, generic)
}

/// Returns your gateway's weekly maintenance start time including the day and time of the week.
#[derive(Clone, Default, Debug)]
pub struct DescribeMaintenanceStartTime {
    _private: (),
}
impl DescribeMaintenanceStartTime {
    /// Creates a new builder-style object to manufacture [`DescribeMaintenanceStartTimeInput`](crate::input::DescribeMaintenanceStartTimeInput)
    pub fn builder() -> crate::input::describe_maintenance_start_time_input::Builder {
        crate::input::describe_maintenance_start_time_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeMaintenanceStartTime {
    type Output = Result<
        crate::output::DescribeMaintenanceStartTimeOutput,
        crate::error::DescribeMaintenanceStartTimeError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_maintenance_start_time_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeMaintenanceStartTimeError::unhandled)
    }
}

fn parse_describe_maintenance_start_time_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeMaintenanceStartTimeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeMaintenanceStartTimeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeMaintenanceStartTimeErrorKind::InternalServerError(err)
            }
            Err(err) => return crate::error::DescribeMaintenanceStartTimeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeMaintenanceStartTimeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeMaintenanceStartTimeErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeMaintenanceStartTimeError::unhandled(err),
        },
        _ => return crate::error::DescribeMaintenanceStartTimeError::generic(generic),
    };
    crate::error::DescribeMaintenanceStartTimeError::new(kind, generic)
}

/// Gets a description for one or more Network File System (NFS) file shares from a file gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeNfsFileShares {
    _private: (),
}
impl DescribeNfsFileShares {
    /// Creates a new builder-style object to manufacture [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput)
    pub fn builder() -> crate::input::describe_nfs_file_shares_input::Builder {
        crate::input::describe_nfs_file_shares_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeNfsFileShares {
    type Output = Result<
        crate::output::DescribeNfsFileSharesOutput,
        crate::error::DescribeNfsFileSharesError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_nfs_file_shares_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeNfsFileSharesError::unhandled)
    }
}

fn parse_describe_nfs_file_shares_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeNfsFileSharesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeNfsFileSharesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeNfsFileSharesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeNfsFileSharesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeNfsFileSharesErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeNfsFileSharesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeNfsFileSharesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeNfsFileSharesError::unhandled(err),
        },
        _ => return crate::error::DescribeNfsFileSharesError::generic(generic),
    };
    crate::error::DescribeNfsFileSharesError::new(kind, generic)
}

/// Gets a description for one or more Server Message Block (SMB) file shares from a file gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeSmbFileShares {
    _private: (),
}
impl DescribeSmbFileShares {
    /// Creates a new builder-style object to manufacture [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput)
    pub fn builder() -> crate::input::describe_smb_file_shares_input::Builder {
        crate::input::describe_smb_file_shares_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeSmbFileShares {
    type Output = Result<
        crate::output::DescribeSmbFileSharesOutput,
        crate::error::DescribeSmbFileSharesError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_smb_file_shares_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeSmbFileSharesError::unhandled)
    }
}

fn parse_describe_smb_file_shares_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeSmbFileSharesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeSmbFileSharesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeSmbFileSharesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeSmbFileSharesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeSmbFileSharesErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeSmbFileSharesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeSmbFileSharesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeSmbFileSharesError::unhandled(err),
        },
        _ => return crate::error::DescribeSmbFileSharesError::generic(generic),
    };
    crate::error::DescribeSmbFileSharesError::new(kind, generic)
}

/// Gets a description of a Server Message Block (SMB) file share settings from a file gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeSmbSettings {
    _private: (),
}
impl DescribeSmbSettings {
    /// Creates a new builder-style object to manufacture [`DescribeSmbSettingsInput`](crate::input::DescribeSmbSettingsInput)
    pub fn builder() -> crate::input::describe_smb_settings_input::Builder {
        crate::input::describe_smb_settings_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeSmbSettings {
    type Output = Result<
        crate::output::DescribeSmbSettingsOutput,
        crate::error::DescribeSmbSettingsError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_smb_settings_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeSmbSettingsError::unhandled)
    }
}

fn parse_describe_smb_settings_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeSmbSettingsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeSmbSettingsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeSmbSettingsErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeSmbSettingsError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeSmbSettingsErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeSmbSettingsError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeSmbSettingsErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeSmbSettingsError::unhandled(err),
        },
        _ => return crate::error::DescribeSmbSettingsError::generic(generic),
    };
    crate::error::DescribeSmbSettingsError::new(kind, generic)
}

/// Describes the snapshot schedule for the specified gateway volume.
#[derive(Clone, Default, Debug)]
pub struct DescribeSnapshotSchedule {
    _private: (),
}
impl DescribeSnapshotSchedule {
    /// Creates a new builder-style object to manufacture [`DescribeSnapshotScheduleInput`](crate::input::DescribeSnapshotScheduleInput)
    pub fn builder() -> crate::input::describe_snapshot_schedule_input::Builder {
        crate::input::describe_snapshot_schedule_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeSnapshotSchedule {
    type Output = Result<
        crate::output::DescribeSnapshotScheduleOutput,
        crate::error::DescribeSnapshotScheduleError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_snapshot_schedule_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeSnapshotScheduleError::unhandled)
    }
}

fn parse_describe_snapshot_schedule_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeSnapshotScheduleError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeSnapshotScheduleError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeSnapshotScheduleErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeSnapshotScheduleError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeSnapshotScheduleErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeSnapshotScheduleError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeSnapshotScheduleErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeSnapshotScheduleError::unhandled(err),
        },
        _ => return crate::error::DescribeSnapshotScheduleError::generic(generic),
    };
    crate::error::DescribeSnapshotScheduleError::new(kind, generic)
}

/// Returns the description of the gateway volumes specified in the request.
#[derive(Clone, Default, Debug)]
pub struct DescribeStorediScsiVolumes {
    _private: (),
}
impl DescribeStorediScsiVolumes {
    /// Creates a new builder-style object to manufacture [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput)
    pub fn builder() -> crate::input::describe_storedi_scsi_volumes_input::Builder {
        crate::input::describe_storedi_scsi_volumes_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeStorediScsiVolumes {
    type Output = Result<
        crate::output::DescribeStorediScsiVolumesOutput,
        crate::error::DescribeStorediScsiVolumesError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_storedi_scsi_volumes_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeStorediScsiVolumesError::unhandled)
    }
}

fn parse_describe_storedi_scsi_volumes_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeStorediScsiVolumesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeStorediScsiVolumesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeStorediScsiVolumesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeStorediScsiVolumesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeStorediScsiVolumesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeStorediScsiVolumesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeStorediScsiVolumesErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeStorediScsiVolumesError::unhandled(err),
        },
        _ => return crate::error::DescribeStorediScsiVolumesError::generic(generic),
    };
    crate::error::DescribeStorediScsiVolumesError::new(kind, generic)
}

/// Returns a description of specified virtual tapes in the virtual tape shelf (VTS).
#[derive(Clone, Default, Debug)]
pub struct DescribeTapeArchives {
    _private: (),
}
impl DescribeTapeArchives {
    /// Creates a new builder-style object to manufacture [`DescribeTapeArchivesInput`](crate::input::DescribeTapeArchivesInput)
    pub fn builder() -> crate::input::describe_tape_archives_input::Builder {
        crate::input::describe_tape_archives_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeTapeArchives {
    type Output = Result<
        crate::output::DescribeTapeArchivesOutput,
        crate::error::DescribeTapeArchivesError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_tape_archives_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeTapeArchivesError::unhandled)
    }
}

fn parse_describe_tape_archives_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeTapeArchivesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeTapeArchivesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeTapeArchivesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeTapeArchivesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeTapeArchivesErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeTapeArchivesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeTapeArchivesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeTapeArchivesError::unhandled(err),
        },
        _ => return crate::error::DescribeTapeArchivesError::generic(generic),
    };
    crate::error::DescribeTapeArchivesError::new(kind, generic)
}

/// Returns a list of virtual tape recovery points that are available for the specified tape gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeTapeRecoveryPoints {
    _private: (),
}
impl DescribeTapeRecoveryPoints {
    /// Creates a new builder-style object to manufacture [`DescribeTapeRecoveryPointsInput`](crate::input::DescribeTapeRecoveryPointsInput)
    pub fn builder() -> crate::input::describe_tape_recovery_points_input::Builder {
        crate::input::describe_tape_recovery_points_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeTapeRecoveryPoints {
    type Output = Result<
        crate::output::DescribeTapeRecoveryPointsOutput,
        crate::error::DescribeTapeRecoveryPointsError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_tape_recovery_points_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeTapeRecoveryPointsError::unhandled)
    }
}

fn parse_describe_tape_recovery_points_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeTapeRecoveryPointsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeTapeRecoveryPointsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeTapeRecoveryPointsErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeTapeRecoveryPointsError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeTapeRecoveryPointsErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeTapeRecoveryPointsError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeTapeRecoveryPointsErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::DescribeTapeRecoveryPointsError::unhandled(err),
        },
        _ => return crate::error::DescribeTapeRecoveryPointsError::generic(generic),
    };
    crate::error::DescribeTapeRecoveryPointsError::new(kind, generic)
}

/// Returns a description of the specified Amazon Resource Name (ARN) of virtual tapes.
#[derive(Clone, Default, Debug)]
pub struct DescribeTapes {
    _private: (),
}
impl DescribeTapes {
    /// Creates a new builder-style object to manufacture [`DescribeTapesInput`](crate::input::DescribeTapesInput)
    pub fn builder() -> crate::input::describe_tapes_input::Builder {
        crate::input::describe_tapes_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeTapes {
    type Output = Result<crate::output::DescribeTapesOutput, crate::error::DescribeTapesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_tapes_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeTapesError::unhandled)
    }
}

fn parse_describe_tapes_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeTapesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeTapesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeTapesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeTapesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeTapesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DescribeTapesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeTapesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeTapesError::unhandled(err),
        },
        _ => return crate::error::DescribeTapesError::generic(generic),
    };
    crate::error::DescribeTapesError::new(kind, generic)
}

/// Returns information about the upload buffer of a gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeUploadBuffer {
    _private: (),
}
impl DescribeUploadBuffer {
    /// Creates a new builder-style object to manufacture [`DescribeUploadBufferInput`](crate::input::DescribeUploadBufferInput)
    pub fn builder() -> crate::input::describe_upload_buffer_input::Builder {
        crate::input::describe_upload_buffer_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeUploadBuffer {
    type Output = Result<
        crate::output::DescribeUploadBufferOutput,
        crate::error::DescribeUploadBufferError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_upload_buffer_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeUploadBufferError::unhandled)
    }
}

fn parse_describe_upload_buffer_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeUploadBufferError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeUploadBufferError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeUploadBufferErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeUploadBufferError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeUploadBufferErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeUploadBufferError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeUploadBufferErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeUploadBufferError::unhandled(err),
        },
        _ => return crate::error::DescribeUploadBufferError::generic(generic),
    };
    crate::error::DescribeUploadBufferError::new(kind, generic)
}

/// Returns a description of virtual tape library (VTL) devices for the specified tape gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeVtlDevices {
    _private: (),
}
impl DescribeVtlDevices {
    /// Creates a new builder-style object to manufacture [`DescribeVtlDevicesInput`](crate::input::DescribeVtlDevicesInput)
    pub fn builder() -> crate::input::describe_vtl_devices_input::Builder {
        crate::input::describe_vtl_devices_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeVtlDevices {
    type Output = Result<
        crate::output::DescribeVtlDevicesOutput,
        crate::error::DescribeVtlDevicesError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_vtl_devices_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeVtlDevicesError::unhandled)
    }
}

fn parse_describe_vtl_devices_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeVtlDevicesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeVtlDevicesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeVtlDevicesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeVtlDevicesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeVtlDevicesErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeVtlDevicesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeVtlDevicesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeVtlDevicesError::unhandled(err),
        },
        _ => return crate::error::DescribeVtlDevicesError::generic(generic),
    };
    crate::error::DescribeVtlDevicesError::new(kind, generic)
}

/// Returns information about the working storage of a gateway.
#[derive(Clone, Default, Debug)]
pub struct DescribeWorkingStorage {
    _private: (),
}
impl DescribeWorkingStorage {
    /// Creates a new builder-style object to manufacture [`DescribeWorkingStorageInput`](crate::input::DescribeWorkingStorageInput)
    pub fn builder() -> crate::input::describe_working_storage_input::Builder {
        crate::input::describe_working_storage_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeWorkingStorage {
    type Output = Result<
        crate::output::DescribeWorkingStorageOutput,
        crate::error::DescribeWorkingStorageError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_working_storage_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DescribeWorkingStorageError::unhandled)
    }
}

fn parse_describe_working_storage_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeWorkingStorageError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeWorkingStorageError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeWorkingStorageErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DescribeWorkingStorageError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::DescribeWorkingStorageErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::DescribeWorkingStorageError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeWorkingStorageErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DescribeWorkingStorageError::unhandled(err),
        },
        _ => return crate::error::DescribeWorkingStorageError::generic(generic),
    };
    crate::error::DescribeWorkingStorageError::new(kind, generic)
}

/// Disconnects a volume from an iSCSI connection and then detaches the volume from the specified gateway.
#[derive(Clone, Default, Debug)]
pub struct DetachVolume {
    _private: (),
}
impl DetachVolume {
    /// Creates a new builder-style object to manufacture [`DetachVolumeInput`](crate::input::DetachVolumeInput)
    pub fn builder() -> crate::input::detach_volume_input::Builder {
        crate::input::detach_volume_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DetachVolume {
    type Output = Result<crate::output::DetachVolumeOutput, crate::error::DetachVolumeError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_detach_volume_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DetachVolumeError::unhandled)
    }
}

fn parse_detach_volume_error(response: &http::Response<Bytes>) -> crate::error::DetachVolumeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DetachVolumeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DetachVolumeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DetachVolumeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DetachVolumeErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DetachVolumeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DetachVolumeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DetachVolumeError::unhandled(err),
        },
        _ => return crate::error::DetachVolumeError::generic(generic),
    };
    crate::error::DetachVolumeError::new(kind, generic)
}

/// Disables a tape gateway when the gateway is no longer functioning.
#[derive(Clone, Default, Debug)]
pub struct DisableGateway {
    _private: (),
}
impl DisableGateway {
    /// Creates a new builder-style object to manufacture [`DisableGatewayInput`](crate::input::DisableGatewayInput)
    pub fn builder() -> crate::input::disable_gateway_input::Builder {
        crate::input::disable_gateway_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DisableGateway {
    type Output = Result<crate::output::DisableGatewayOutput, crate::error::DisableGatewayError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_disable_gateway_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::DisableGatewayError::unhandled)
    }
}

fn parse_disable_gateway_error(
    response: &http::Response<Bytes>,
) -> crate::error::DisableGatewayError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DisableGatewayError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DisableGatewayErrorKind::InternalServerError(err),
            Err(err) => return crate::error::DisableGatewayError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DisableGatewayErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::DisableGatewayError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::DisableGatewayErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::DisableGatewayError::unhandled(err),
        },
        _ => return crate::error::DisableGatewayError::generic(generic),
    };
    crate::error::DisableGatewayError::new(kind, generic)
}

/// Adds a file gateway to an Active Directory domain.
#[derive(Clone, Default, Debug)]
pub struct JoinDomain {
    _private: (),
}
impl JoinDomain {
    /// Creates a new builder-style object to manufacture [`JoinDomainInput`](crate::input::JoinDomainInput)
    pub fn builder() -> crate::input::join_domain_input::Builder {
        crate::input::join_domain_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for JoinDomain {
    type Output = Result<crate::output::JoinDomainOutput, crate::error::JoinDomainError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_join_domain_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::JoinDomainError::unhandled)
    }
}

fn parse_join_domain_error(response: &http::Response<Bytes>) -> crate::error::JoinDomainError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::JoinDomainError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::JoinDomainErrorKind::InternalServerError(err),
            Err(err) => return crate::error::JoinDomainError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::JoinDomainErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::JoinDomainError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::JoinDomainErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::JoinDomainError::unhandled(err),
        },
        _ => return crate::error::JoinDomainError::generic(generic),
    };
    crate::error::JoinDomainError::new(kind, generic)
}

/// Lists the automatic tape creation policies for a gateway.
#[derive(Clone, Default, Debug)]
pub struct ListAutomaticTapeCreationPolicies {
    _private: (),
}
impl ListAutomaticTapeCreationPolicies {
    /// Creates a new builder-style object to manufacture [`ListAutomaticTapeCreationPoliciesInput`](crate::input::ListAutomaticTapeCreationPoliciesInput)
    pub fn builder() -> crate::input::list_automatic_tape_creation_policies_input::Builder {
        crate::input::list_automatic_tape_creation_policies_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListAutomaticTapeCreationPolicies {
    type Output = Result<
        crate::output::ListAutomaticTapeCreationPoliciesOutput,
        crate::error::ListAutomaticTapeCreationPoliciesError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_automatic_tape_creation_policies_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListAutomaticTapeCreationPoliciesError::unhandled)
    }
}

fn parse_list_automatic_tape_creation_policies_error(
    response: &http::Response<Bytes>,
) -> crate::error::ListAutomaticTapeCreationPoliciesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListAutomaticTapeCreationPoliciesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::ListAutomaticTapeCreationPoliciesErrorKind::InternalServerError(err)
            }
            Err(err) => return crate::error::ListAutomaticTapeCreationPoliciesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListAutomaticTapeCreationPoliciesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ListAutomaticTapeCreationPoliciesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListAutomaticTapeCreationPoliciesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListAutomaticTapeCreationPoliciesError::unhandled(err),
        },
        _ => return crate::error::ListAutomaticTapeCreationPoliciesError::generic(generic),
    };
    crate::error::ListAutomaticTapeCreationPoliciesError::new(kind, generic)
}

/// Gets a list of the file shares for a specific file gateway, or the list of file shares that belong to the calling user account.
#[derive(Clone, Default, Debug)]
pub struct ListFileShares {
    _private: (),
}
impl ListFileShares {
    /// Creates a new builder-style object to manufacture [`ListFileSharesInput`](crate::input::ListFileSharesInput)
    pub fn builder() -> crate::input::list_file_shares_input::Builder {
        crate::input::list_file_shares_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListFileShares {
    type Output = Result<crate::output::ListFileSharesOutput, crate::error::ListFileSharesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_file_shares_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListFileSharesError::unhandled)
    }
}

fn parse_list_file_shares_error(
    response: &http::Response<Bytes>,
) -> crate::error::ListFileSharesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListFileSharesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListFileSharesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListFileSharesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListFileSharesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ListFileSharesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListFileSharesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListFileSharesError::unhandled(err),
        },
        _ => return crate::error::ListFileSharesError::generic(generic),
    };
    crate::error::ListFileSharesError::new(kind, generic)
}

/// Lists gateways owned by an AWS account in an AWS Region specified in the request.
#[derive(Clone, Default, Debug)]
pub struct ListGateways {
    _private: (),
}
impl ListGateways {
    /// Creates a new builder-style object to manufacture [`ListGatewaysInput`](crate::input::ListGatewaysInput)
    pub fn builder() -> crate::input::list_gateways_input::Builder {
        crate::input::list_gateways_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListGateways {
    type Output = Result<crate::output::ListGatewaysOutput, crate::error::ListGatewaysError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_gateways_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListGatewaysError::unhandled)
    }
}

fn parse_list_gateways_error(response: &http::Response<Bytes>) -> crate::error::ListGatewaysError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListGatewaysError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListGatewaysErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListGatewaysError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListGatewaysErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ListGatewaysError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListGatewaysErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListGatewaysError::unhandled(err),
        },
        _ => return crate::error::ListGatewaysError::generic(generic),
    };
    crate::error::ListGatewaysError::new(kind, generic)
}

/// Returns a list of the gateway's local disks.
#[derive(Clone, Default, Debug)]
pub struct ListLocalDisks {
    _private: (),
}
impl ListLocalDisks {
    /// Creates a new builder-style object to manufacture [`ListLocalDisksInput`](crate::input::ListLocalDisksInput)
    pub fn builder() -> crate::input::list_local_disks_input::Builder {
        crate::input::list_local_disks_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListLocalDisks {
    type Output = Result<crate::output::ListLocalDisksOutput, crate::error::ListLocalDisksError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_local_disks_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListLocalDisksError::unhandled)
    }
}

fn parse_list_local_disks_error(
    response: &http::Response<Bytes>,
) -> crate::error::ListLocalDisksError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListLocalDisksError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListLocalDisksErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListLocalDisksError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListLocalDisksErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ListLocalDisksError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListLocalDisksErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListLocalDisksError::unhandled(err),
        },
        _ => return crate::error::ListLocalDisksError::generic(generic),
    };
    crate::error::ListLocalDisksError::new(kind, generic)
}

/// Lists the tags that have been added to the specified resource.
#[derive(Clone, Default, Debug)]
pub struct ListTagsForResource {
    _private: (),
}
impl ListTagsForResource {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListTagsForResource {
    type Output = Result<
        crate::output::ListTagsForResourceOutput,
        crate::error::ListTagsForResourceError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_tags_for_resource_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListTagsForResourceError::unhandled)
    }
}

fn parse_list_tags_for_resource_error(
    response: &http::Response<Bytes>,
) -> crate::error::ListTagsForResourceError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListTagsForResourceError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListTagsForResourceErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListTagsForResourceError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::ListTagsForResourceErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::ListTagsForResourceError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListTagsForResourceErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListTagsForResourceError::unhandled(err),
        },
        _ => return crate::error::ListTagsForResourceError::generic(generic),
    };
    crate::error::ListTagsForResourceError::new(kind, generic)
}

/// Lists virtual tapes in your virtual tape library (VTL) and your virtual tape shelf (VTS).
#[derive(Clone, Default, Debug)]
pub struct ListTapes {
    _private: (),
}
impl ListTapes {
    /// Creates a new builder-style object to manufacture [`ListTapesInput`](crate::input::ListTapesInput)
    pub fn builder() -> crate::input::list_tapes_input::Builder {
        crate::input::list_tapes_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListTapes {
    type Output = Result<crate::output::ListTapesOutput, crate::error::ListTapesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_tapes_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListTapesError::unhandled)
    }
}

fn parse_list_tapes_error(response: &http::Response<Bytes>) -> crate::error::ListTapesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListTapesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListTapesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListTapesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListTapesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ListTapesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListTapesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListTapesError::unhandled(err),
        },
        _ => return crate::error::ListTapesError::generic(generic),
    };
    crate::error::ListTapesError::new(kind, generic)
}

/// Lists iSCSI initiators that are connected to a volume.
#[derive(Clone, Default, Debug)]
pub struct ListVolumeInitiators {
    _private: (),
}
impl ListVolumeInitiators {
    /// Creates a new builder-style object to manufacture [`ListVolumeInitiatorsInput`](crate::input::ListVolumeInitiatorsInput)
    pub fn builder() -> crate::input::list_volume_initiators_input::Builder {
        crate::input::list_volume_initiators_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListVolumeInitiators {
    type Output = Result<
        crate::output::ListVolumeInitiatorsOutput,
        crate::error::ListVolumeInitiatorsError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_volume_initiators_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListVolumeInitiatorsError::unhandled)
    }
}

fn parse_list_volume_initiators_error(
    response: &http::Response<Bytes>,
) -> crate::error::ListVolumeInitiatorsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListVolumeInitiatorsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListVolumeInitiatorsErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListVolumeInitiatorsError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::ListVolumeInitiatorsErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::ListVolumeInitiatorsError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListVolumeInitiatorsErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListVolumeInitiatorsError::unhandled(err),
        },
        _ => return crate::error::ListVolumeInitiatorsError::generic(generic),
    };
    crate::error::ListVolumeInitiatorsError::new(kind, generic)
}

/// Lists the recovery points for a specified gateway.
#[derive(Clone, Default, Debug)]
pub struct ListVolumeRecoveryPoints {
    _private: (),
}
impl ListVolumeRecoveryPoints {
    /// Creates a new builder-style object to manufacture [`ListVolumeRecoveryPointsInput`](crate::input::ListVolumeRecoveryPointsInput)
    pub fn builder() -> crate::input::list_volume_recovery_points_input::Builder {
        crate::input::list_volume_recovery_points_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListVolumeRecoveryPoints {
    type Output = Result<
        crate::output::ListVolumeRecoveryPointsOutput,
        crate::error::ListVolumeRecoveryPointsError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_volume_recovery_points_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListVolumeRecoveryPointsError::unhandled)
    }
}

fn parse_list_volume_recovery_points_error(
    response: &http::Response<Bytes>,
) -> crate::error::ListVolumeRecoveryPointsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListVolumeRecoveryPointsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListVolumeRecoveryPointsErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListVolumeRecoveryPointsError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::ListVolumeRecoveryPointsErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::ListVolumeRecoveryPointsError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::ListVolumeRecoveryPointsErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::ListVolumeRecoveryPointsError::unhandled(err),
        },
        _ => return crate::error::ListVolumeRecoveryPointsError::generic(generic),
    };
    crate::error::ListVolumeRecoveryPointsError::new(kind, generic)
}

/// Lists the iSCSI stored volumes of a gateway.
#[derive(Clone, Default, Debug)]
pub struct ListVolumes {
    _private: (),
}
impl ListVolumes {
    /// Creates a new builder-style object to manufacture [`ListVolumesInput`](crate::input::ListVolumesInput)
    pub fn builder() -> crate::input::list_volumes_input::Builder {
        crate::input::list_volumes_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListVolumes {
    type Output = Result<crate::output::ListVolumesOutput, crate::error::ListVolumesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_volumes_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ListVolumesError::unhandled)
    }
}

fn parse_list_volumes_error(response: &http::Response<Bytes>) -> crate::error::ListVolumesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListVolumesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListVolumesErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ListVolumesError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListVolumesErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ListVolumesError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListVolumesErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ListVolumesError::unhandled(err),
        },
        _ => return crate::error::ListVolumesError::generic(generic),
    };
    crate::error::ListVolumesError::new(kind, generic)
}

/// Sends you notification through CloudWatch Events when all files written to your file share have been uploaded to Amazon S3. AWS Storage Gateway can send a notification through Amazon CloudWatch Events when all files written to your file share up to that point in time have been uploaded to Amazon S3. These files include files written to the file share up to the time that you make a request for notification.
#[derive(Clone, Default, Debug)]
pub struct NotifyWhenUploaded {
    _private: (),
}
impl NotifyWhenUploaded {
    /// Creates a new builder-style object to manufacture [`NotifyWhenUploadedInput`](crate::input::NotifyWhenUploadedInput)
    pub fn builder() -> crate::input::notify_when_uploaded_input::Builder {
        crate::input::notify_when_uploaded_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for NotifyWhenUploaded {
    type Output = Result<
        crate::output::NotifyWhenUploadedOutput,
        crate::error::NotifyWhenUploadedError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_notify_when_uploaded_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::NotifyWhenUploadedError::unhandled)
    }
}

fn parse_notify_when_uploaded_error(
    response: &http::Response<Bytes>,
) -> crate::error::NotifyWhenUploadedError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::NotifyWhenUploadedError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::NotifyWhenUploadedErrorKind::InternalServerError(err),
            Err(err) => return crate::error::NotifyWhenUploadedError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::NotifyWhenUploadedErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::NotifyWhenUploadedError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::NotifyWhenUploadedErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::NotifyWhenUploadedError::unhandled(err),
        },
        _ => return crate::error::NotifyWhenUploadedError::generic(generic),
    };
    crate::error::NotifyWhenUploadedError::new(kind, generic)
}

/// Refreshes the cache for the specified file share.
#[derive(Clone, Default, Debug)]
pub struct RefreshCache {
    _private: (),
}
impl RefreshCache {
    /// Creates a new builder-style object to manufacture [`RefreshCacheInput`](crate::input::RefreshCacheInput)
    pub fn builder() -> crate::input::refresh_cache_input::Builder {
        crate::input::refresh_cache_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for RefreshCache {
    type Output = Result<crate::output::RefreshCacheOutput, crate::error::RefreshCacheError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_refresh_cache_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::RefreshCacheError::unhandled)
    }
}

fn parse_refresh_cache_error(response: &http::Response<Bytes>) -> crate::error::RefreshCacheError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::RefreshCacheError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RefreshCacheErrorKind::InternalServerError(err),
            Err(err) => return crate::error::RefreshCacheError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RefreshCacheErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::RefreshCacheError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RefreshCacheErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::RefreshCacheError::unhandled(err),
        },
        _ => return crate::error::RefreshCacheError::generic(generic),
    };
    crate::error::RefreshCacheError::new(kind, generic)
}

/// Removes one or more tags from the specified resource.
#[derive(Clone, Default, Debug)]
pub struct RemoveTagsFromResource {
    _private: (),
}
impl RemoveTagsFromResource {
    /// Creates a new builder-style object to manufacture [`RemoveTagsFromResourceInput`](crate::input::RemoveTagsFromResourceInput)
    pub fn builder() -> crate::input::remove_tags_from_resource_input::Builder {
        crate::input::remove_tags_from_resource_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for RemoveTagsFromResource {
    type Output = Result<
        crate::output::RemoveTagsFromResourceOutput,
        crate::error::RemoveTagsFromResourceError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_remove_tags_from_resource_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::RemoveTagsFromResourceError::unhandled)
    }
}

fn parse_remove_tags_from_resource_error(
    response: &http::Response<Bytes>,
) -> crate::error::RemoveTagsFromResourceError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::RemoveTagsFromResourceError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RemoveTagsFromResourceErrorKind::InternalServerError(err),
            Err(err) => return crate::error::RemoveTagsFromResourceError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::RemoveTagsFromResourceErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::RemoveTagsFromResourceError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RemoveTagsFromResourceErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::RemoveTagsFromResourceError::unhandled(err),
        },
        _ => return crate::error::RemoveTagsFromResourceError::generic(generic),
    };
    crate::error::RemoveTagsFromResourceError::new(kind, generic)
}

/// Resets all cache disks that have encountered an error and makes the disks available for reconfiguration as cache storage.
#[derive(Clone, Default, Debug)]
pub struct ResetCache {
    _private: (),
}
impl ResetCache {
    /// Creates a new builder-style object to manufacture [`ResetCacheInput`](crate::input::ResetCacheInput)
    pub fn builder() -> crate::input::reset_cache_input::Builder {
        crate::input::reset_cache_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ResetCache {
    type Output = Result<crate::output::ResetCacheOutput, crate::error::ResetCacheError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_reset_cache_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ResetCacheError::unhandled)
    }
}

fn parse_reset_cache_error(response: &http::Response<Bytes>) -> crate::error::ResetCacheError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ResetCacheError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ResetCacheErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ResetCacheError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ResetCacheErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ResetCacheError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ResetCacheErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ResetCacheError::unhandled(err),
        },
        _ => return crate::error::ResetCacheError::generic(generic),
    };
    crate::error::ResetCacheError::new(kind, generic)
}

/// Retrieves an archived virtual tape from the virtual tape shelf (VTS) to a tape gateway.
#[derive(Clone, Default, Debug)]
pub struct RetrieveTapeArchive {
    _private: (),
}
impl RetrieveTapeArchive {
    /// Creates a new builder-style object to manufacture [`RetrieveTapeArchiveInput`](crate::input::RetrieveTapeArchiveInput)
    pub fn builder() -> crate::input::retrieve_tape_archive_input::Builder {
        crate::input::retrieve_tape_archive_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for RetrieveTapeArchive {
    type Output = Result<
        crate::output::RetrieveTapeArchiveOutput,
        crate::error::RetrieveTapeArchiveError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_retrieve_tape_archive_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::RetrieveTapeArchiveError::unhandled)
    }
}

fn parse_retrieve_tape_archive_error(
    response: &http::Response<Bytes>,
) -> crate::error::RetrieveTapeArchiveError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::RetrieveTapeArchiveError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RetrieveTapeArchiveErrorKind::InternalServerError(err),
            Err(err) => return crate::error::RetrieveTapeArchiveError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::RetrieveTapeArchiveErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::RetrieveTapeArchiveError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RetrieveTapeArchiveErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::RetrieveTapeArchiveError::unhandled(err),
        },
        _ => return crate::error::RetrieveTapeArchiveError::generic(generic),
    };
    crate::error::RetrieveTapeArchiveError::new(kind, generic)
}

/// Retrieves the recovery point for the specified virtual tape.
#[derive(Clone, Default, Debug)]
pub struct RetrieveTapeRecoveryPoint {
    _private: (),
}
impl RetrieveTapeRecoveryPoint {
    /// Creates a new builder-style object to manufacture [`RetrieveTapeRecoveryPointInput`](crate::input::RetrieveTapeRecoveryPointInput)
    pub fn builder() -> crate::input::retrieve_tape_recovery_point_input::Builder {
        crate::input::retrieve_tape_recovery_point_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for RetrieveTapeRecoveryPoint {
    type Output = Result<
        crate::output::RetrieveTapeRecoveryPointOutput,
        crate::error::RetrieveTapeRecoveryPointError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_retrieve_tape_recovery_point_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::RetrieveTapeRecoveryPointError::unhandled)
    }
}

fn parse_retrieve_tape_recovery_point_error(
    response: &http::Response<Bytes>,
) -> crate::error::RetrieveTapeRecoveryPointError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::RetrieveTapeRecoveryPointError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RetrieveTapeRecoveryPointErrorKind::InternalServerError(err),
            Err(err) => return crate::error::RetrieveTapeRecoveryPointError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::RetrieveTapeRecoveryPointErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::RetrieveTapeRecoveryPointError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::RetrieveTapeRecoveryPointErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::RetrieveTapeRecoveryPointError::unhandled(err),
        },
        _ => return crate::error::RetrieveTapeRecoveryPointError::generic(generic),
    };
    crate::error::RetrieveTapeRecoveryPointError::new(kind, generic)
}

/// Sets the password for your VM local console.
#[derive(Clone, Default, Debug)]
pub struct SetLocalConsolePassword {
    _private: (),
}
impl SetLocalConsolePassword {
    /// Creates a new builder-style object to manufacture [`SetLocalConsolePasswordInput`](crate::input::SetLocalConsolePasswordInput)
    pub fn builder() -> crate::input::set_local_console_password_input::Builder {
        crate::input::set_local_console_password_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for SetLocalConsolePassword {
    type Output = Result<
        crate::output::SetLocalConsolePasswordOutput,
        crate::error::SetLocalConsolePasswordError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_set_local_console_password_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::SetLocalConsolePasswordError::unhandled)
    }
}

fn parse_set_local_console_password_error(
    response: &http::Response<Bytes>,
) -> crate::error::SetLocalConsolePasswordError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::SetLocalConsolePasswordError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::SetLocalConsolePasswordErrorKind::InternalServerError(err),
            Err(err) => return crate::error::SetLocalConsolePasswordError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::SetLocalConsolePasswordErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::SetLocalConsolePasswordError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::SetLocalConsolePasswordErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::SetLocalConsolePasswordError::unhandled(err),
        },
        _ => return crate::error::SetLocalConsolePasswordError::generic(generic),
    };
    crate::error::SetLocalConsolePasswordError::new(kind, generic)
}

/// Sets the password for the guest user smbguest.
#[derive(Clone, Default, Debug)]
pub struct SetSmbGuestPassword {
    _private: (),
}
impl SetSmbGuestPassword {
    /// Creates a new builder-style object to manufacture [`SetSmbGuestPasswordInput`](crate::input::SetSmbGuestPasswordInput)
    pub fn builder() -> crate::input::set_smb_guest_password_input::Builder {
        crate::input::set_smb_guest_password_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for SetSmbGuestPassword {
    type Output = Result<
        crate::output::SetSmbGuestPasswordOutput,
        crate::error::SetSmbGuestPasswordError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_set_smb_guest_password_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::SetSmbGuestPasswordError::unhandled)
    }
}

fn parse_set_smb_guest_password_error(
    response: &http::Response<Bytes>,
) -> crate::error::SetSmbGuestPasswordError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::SetSmbGuestPasswordError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::SetSmbGuestPasswordErrorKind::InternalServerError(err),
            Err(err) => return crate::error::SetSmbGuestPasswordError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::SetSmbGuestPasswordErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::SetSmbGuestPasswordError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::SetSmbGuestPasswordErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::SetSmbGuestPasswordError::unhandled(err),
        },
        _ => return crate::error::SetSmbGuestPasswordError::generic(generic),
    };
    crate::error::SetSmbGuestPasswordError::new(kind, generic)
}

/// Shuts down a gateway.
#[derive(Clone, Default, Debug)]
pub struct ShutdownGateway {
    _private: (),
}
impl ShutdownGateway {
    /// Creates a new builder-style object to manufacture [`ShutdownGatewayInput`](crate::input::ShutdownGatewayInput)
    pub fn builder() -> crate::input::shutdown_gateway_input::Builder {
        crate::input::shutdown_gateway_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ShutdownGateway {
    type Output = Result<crate::output::ShutdownGatewayOutput, crate::error::ShutdownGatewayError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_shutdown_gateway_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::ShutdownGatewayError::unhandled)
    }
}

fn parse_shutdown_gateway_error(
    response: &http::Response<Bytes>,
) -> crate::error::ShutdownGatewayError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ShutdownGatewayError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ShutdownGatewayErrorKind::InternalServerError(err),
            Err(err) => return crate::error::ShutdownGatewayError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ShutdownGatewayErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::ShutdownGatewayError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::ShutdownGatewayErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::ShutdownGatewayError::unhandled(err),
        },
        _ => return crate::error::ShutdownGatewayError::generic(generic),
    };
    crate::error::ShutdownGatewayError::new(kind, generic)
}

/// Start a test that verifies that the specified gateway is configured for High Availability monitoring in your host environment.
#[derive(Clone, Default, Debug)]
pub struct StartAvailabilityMonitorTest {
    _private: (),
}
impl StartAvailabilityMonitorTest {
    /// Creates a new builder-style object to manufacture [`StartAvailabilityMonitorTestInput`](crate::input::StartAvailabilityMonitorTestInput)
    pub fn builder() -> crate::input::start_availability_monitor_test_input::Builder {
        crate::input::start_availability_monitor_test_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for StartAvailabilityMonitorTest {
    type Output = Result<
        crate::output::StartAvailabilityMonitorTestOutput,
        crate::error::StartAvailabilityMonitorTestError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_start_availability_monitor_test_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::StartAvailabilityMonitorTestError::unhandled)
    }
}

fn parse_start_availability_monitor_test_error(
    response: &http::Response<Bytes>,
) -> crate::error::StartAvailabilityMonitorTestError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::StartAvailabilityMonitorTestError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::StartAvailabilityMonitorTestErrorKind::InternalServerError(err)
            }
            Err(err) => return crate::error::StartAvailabilityMonitorTestError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartAvailabilityMonitorTestErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::StartAvailabilityMonitorTestError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::StartAvailabilityMonitorTestErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::StartAvailabilityMonitorTestError::unhandled(err),
        },
        _ => return crate::error::StartAvailabilityMonitorTestError::generic(generic),
    };
    crate::error::StartAvailabilityMonitorTestError::new(kind, generic)
}

/// Starts a gateway that you previously shut down (see ShutdownGateway).
#[derive(Clone, Default, Debug)]
pub struct StartGateway {
    _private: (),
}
impl StartGateway {
    /// Creates a new builder-style object to manufacture [`StartGatewayInput`](crate::input::StartGatewayInput)
    pub fn builder() -> crate::input::start_gateway_input::Builder {
        crate::input::start_gateway_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for StartGateway {
    type Output = Result<crate::output::StartGatewayOutput, crate::error::StartGatewayError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_start_gateway_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::StartGatewayError::unhandled)
    }
}

fn parse_start_gateway_error(response: &http::Response<Bytes>) -> crate::error::StartGatewayError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::StartGatewayError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartGatewayErrorKind::InternalServerError(err),
            Err(err) => return crate::error::StartGatewayError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartGatewayErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::StartGatewayError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartGatewayErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::StartGatewayError::unhandled(err),
        },
        _ => return crate::error::StartGatewayError::generic(generic),
    };
    crate::error::StartGatewayError::new(kind, generic)
}

/// Updates the automatic tape creation policy of a gateway.
#[derive(Clone, Default, Debug)]
pub struct UpdateAutomaticTapeCreationPolicy {
    _private: (),
}
impl UpdateAutomaticTapeCreationPolicy {
    /// Creates a new builder-style object to manufacture [`UpdateAutomaticTapeCreationPolicyInput`](crate::input::UpdateAutomaticTapeCreationPolicyInput)
    pub fn builder() -> crate::input::update_automatic_tape_creation_policy_input::Builder {
        crate::input::update_automatic_tape_creation_policy_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateAutomaticTapeCreationPolicy {
    type Output = Result<
        crate::output::UpdateAutomaticTapeCreationPolicyOutput,
        crate::error::UpdateAutomaticTapeCreationPolicyError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_automatic_tape_creation_policy_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateAutomaticTapeCreationPolicyError::unhandled)
    }
}

fn parse_update_automatic_tape_creation_policy_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateAutomaticTapeCreationPolicyError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateAutomaticTapeCreationPolicyError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateAutomaticTapeCreationPolicyErrorKind::InternalServerError(err)
            }
            Err(err) => return crate::error::UpdateAutomaticTapeCreationPolicyError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateAutomaticTapeCreationPolicyErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::UpdateAutomaticTapeCreationPolicyError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateAutomaticTapeCreationPolicyErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::UpdateAutomaticTapeCreationPolicyError::unhandled(err),
        },
        _ => return crate::error::UpdateAutomaticTapeCreationPolicyError::generic(generic),
    };
    crate::error::UpdateAutomaticTapeCreationPolicyError::new(kind, generic)
}

/// Updates the bandwidth rate limits of a gateway.
#[derive(Clone, Default, Debug)]
pub struct UpdateBandwidthRateLimit {
    _private: (),
}
impl UpdateBandwidthRateLimit {
    /// Creates a new builder-style object to manufacture [`UpdateBandwidthRateLimitInput`](crate::input::UpdateBandwidthRateLimitInput)
    pub fn builder() -> crate::input::update_bandwidth_rate_limit_input::Builder {
        crate::input::update_bandwidth_rate_limit_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateBandwidthRateLimit {
    type Output = Result<
        crate::output::UpdateBandwidthRateLimitOutput,
        crate::error::UpdateBandwidthRateLimitError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_bandwidth_rate_limit_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateBandwidthRateLimitError::unhandled)
    }
}

fn parse_update_bandwidth_rate_limit_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateBandwidthRateLimitError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateBandwidthRateLimitError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateBandwidthRateLimitErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateBandwidthRateLimitError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateBandwidthRateLimitErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateBandwidthRateLimitError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateBandwidthRateLimitErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::UpdateBandwidthRateLimitError::unhandled(err),
        },
        _ => return crate::error::UpdateBandwidthRateLimitError::generic(generic),
    };
    crate::error::UpdateBandwidthRateLimitError::new(kind, generic)
}

/// Updates the Challenge-Handshake Authentication Protocol (CHAP) credentials for a specified iSCSI target.
#[derive(Clone, Default, Debug)]
pub struct UpdateChapCredentials {
    _private: (),
}
impl UpdateChapCredentials {
    /// Creates a new builder-style object to manufacture [`UpdateChapCredentialsInput`](crate::input::UpdateChapCredentialsInput)
    pub fn builder() -> crate::input::update_chap_credentials_input::Builder {
        crate::input::update_chap_credentials_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateChapCredentials {
    type Output = Result<
        crate::output::UpdateChapCredentialsOutput,
        crate::error::UpdateChapCredentialsError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_chap_credentials_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateChapCredentialsError::unhandled)
    }
}

fn parse_update_chap_credentials_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateChapCredentialsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateChapCredentialsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateChapCredentialsErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateChapCredentialsError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateChapCredentialsErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateChapCredentialsError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateChapCredentialsErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::UpdateChapCredentialsError::unhandled(err),
        },
        _ => return crate::error::UpdateChapCredentialsError::generic(generic),
    };
    crate::error::UpdateChapCredentialsError::new(kind, generic)
}

/// Updates a gateway's metadata, which includes the gateway's name and time zone.
#[derive(Clone, Default, Debug)]
pub struct UpdateGatewayInformation {
    _private: (),
}
impl UpdateGatewayInformation {
    /// Creates a new builder-style object to manufacture [`UpdateGatewayInformationInput`](crate::input::UpdateGatewayInformationInput)
    pub fn builder() -> crate::input::update_gateway_information_input::Builder {
        crate::input::update_gateway_information_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateGatewayInformation {
    type Output = Result<
        crate::output::UpdateGatewayInformationOutput,
        crate::error::UpdateGatewayInformationError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_gateway_information_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateGatewayInformationError::unhandled)
    }
}

fn parse_update_gateway_information_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateGatewayInformationError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateGatewayInformationError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateGatewayInformationErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateGatewayInformationError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateGatewayInformationErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateGatewayInformationError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateGatewayInformationErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::UpdateGatewayInformationError::unhandled(err),
        },
        _ => return crate::error::UpdateGatewayInformationError::generic(generic),
    };
    crate::error::UpdateGatewayInformationError::new(kind, generic)
}

/// Updates the gateway virtual machine (VM) software.
#[derive(Clone, Default, Debug)]
pub struct UpdateGatewaySoftwareNow {
    _private: (),
}
impl UpdateGatewaySoftwareNow {
    /// Creates a new builder-style object to manufacture [`UpdateGatewaySoftwareNowInput`](crate::input::UpdateGatewaySoftwareNowInput)
    pub fn builder() -> crate::input::update_gateway_software_now_input::Builder {
        crate::input::update_gateway_software_now_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateGatewaySoftwareNow {
    type Output = Result<
        crate::output::UpdateGatewaySoftwareNowOutput,
        crate::error::UpdateGatewaySoftwareNowError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_gateway_software_now_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateGatewaySoftwareNowError::unhandled)
    }
}

fn parse_update_gateway_software_now_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateGatewaySoftwareNowError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateGatewaySoftwareNowError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateGatewaySoftwareNowErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateGatewaySoftwareNowError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateGatewaySoftwareNowErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateGatewaySoftwareNowError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateGatewaySoftwareNowErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::UpdateGatewaySoftwareNowError::unhandled(err),
        },
        _ => return crate::error::UpdateGatewaySoftwareNowError::generic(generic),
    };
    crate::error::UpdateGatewaySoftwareNowError::new(kind, generic)
}

/// Updates a gateway's weekly maintenance start time information, including day and time of the week.
#[derive(Clone, Default, Debug)]
pub struct UpdateMaintenanceStartTime {
    _private: (),
}
impl UpdateMaintenanceStartTime {
    /// Creates a new builder-style object to manufacture [`UpdateMaintenanceStartTimeInput`](crate::input::UpdateMaintenanceStartTimeInput)
    pub fn builder() -> crate::input::update_maintenance_start_time_input::Builder {
        crate::input::update_maintenance_start_time_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateMaintenanceStartTime {
    type Output = Result<
        crate::output::UpdateMaintenanceStartTimeOutput,
        crate::error::UpdateMaintenanceStartTimeError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_maintenance_start_time_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateMaintenanceStartTimeError::unhandled)
    }
}

fn parse_update_maintenance_start_time_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateMaintenanceStartTimeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateMaintenanceStartTimeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateMaintenanceStartTimeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateMaintenanceStartTimeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateMaintenanceStartTimeErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::UpdateMaintenanceStartTimeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateMaintenanceStartTimeErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::UpdateMaintenanceStartTimeError::unhandled(err),
        },
        _ => return crate::error::UpdateMaintenanceStartTimeError::generic(generic),
    };
    crate::error::UpdateMaintenanceStartTimeError::new(kind, generic)
}

/// Updates a Network File System (NFS) file share.
#[derive(Clone, Default, Debug)]
pub struct UpdateNfsFileShare {
    _private: (),
}
impl UpdateNfsFileShare {
    /// Creates a new builder-style object to manufacture [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput)
    pub fn builder() -> crate::input::update_nfs_file_share_input::Builder {
        crate::input::update_nfs_file_share_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateNfsFileShare {
    type Output = Result<
        crate::output::UpdateNfsFileShareOutput,
        crate::error::UpdateNfsFileShareError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_nfs_file_share_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateNfsFileShareError::unhandled)
    }
}

fn parse_update_nfs_file_share_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateNfsFileShareError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateNfsFileShareError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateNfsFileShareErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateNfsFileShareError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateNfsFileShareErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateNfsFileShareError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateNfsFileShareErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::UpdateNfsFileShareError::unhandled(err),
        },
        _ => return crate::error::UpdateNfsFileShareError::generic(generic),
    };
    crate::error::UpdateNfsFileShareError::new(kind, generic)
}

/// Updates a Server Message Block (SMB) file share.
#[derive(Clone, Default, Debug)]
pub struct UpdateSmbFileShare {
    _private: (),
}
impl UpdateSmbFileShare {
    /// Creates a new builder-style object to manufacture [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput)
    pub fn builder() -> crate::input::update_smb_file_share_input::Builder {
        crate::input::update_smb_file_share_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateSmbFileShare {
    type Output = Result<
        crate::output::UpdateSmbFileShareOutput,
        crate::error::UpdateSmbFileShareError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_smb_file_share_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateSmbFileShareError::unhandled)
    }
}

fn parse_update_smb_file_share_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateSmbFileShareError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateSmbFileShareError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateSmbFileShareErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateSmbFileShareError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateSmbFileShareErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateSmbFileShareError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateSmbFileShareErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::UpdateSmbFileShareError::unhandled(err),
        },
        _ => return crate::error::UpdateSmbFileShareError::generic(generic),
    };
    crate::error::UpdateSmbFileShareError::new(kind, generic)
}

/// Updates the SMB security strategy on a file gateway.
#[derive(Clone, Default, Debug)]
pub struct UpdateSmbSecurityStrategy {
    _private: (),
}
impl UpdateSmbSecurityStrategy {
    /// Creates a new builder-style object to manufacture [`UpdateSmbSecurityStrategyInput`](crate::input::UpdateSmbSecurityStrategyInput)
    pub fn builder() -> crate::input::update_smb_security_strategy_input::Builder {
        crate::input::update_smb_security_strategy_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateSmbSecurityStrategy {
    type Output = Result<
        crate::output::UpdateSmbSecurityStrategyOutput,
        crate::error::UpdateSmbSecurityStrategyError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_smb_security_strategy_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateSmbSecurityStrategyError::unhandled)
    }
}

fn parse_update_smb_security_strategy_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateSmbSecurityStrategyError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateSmbSecurityStrategyError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateSmbSecurityStrategyErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateSmbSecurityStrategyError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateSmbSecurityStrategyErrorKind::InvalidGatewayRequestException(err),
            Err(err) => return crate::error::UpdateSmbSecurityStrategyError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateSmbSecurityStrategyErrorKind::ServiceUnavailableError(err)
            }
            Err(err) => return crate::error::UpdateSmbSecurityStrategyError::unhandled(err),
        },
        _ => return crate::error::UpdateSmbSecurityStrategyError::generic(generic),
    };
    crate::error::UpdateSmbSecurityStrategyError::new(kind, generic)
}

/// Updates a snapshot schedule configured for a gateway volume.
#[derive(Clone, Default, Debug)]
pub struct UpdateSnapshotSchedule {
    _private: (),
}
impl UpdateSnapshotSchedule {
    /// Creates a new builder-style object to manufacture [`UpdateSnapshotScheduleInput`](crate::input::UpdateSnapshotScheduleInput)
    pub fn builder() -> crate::input::update_snapshot_schedule_input::Builder {
        crate::input::update_snapshot_schedule_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateSnapshotSchedule {
    type Output = Result<
        crate::output::UpdateSnapshotScheduleOutput,
        crate::error::UpdateSnapshotScheduleError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_snapshot_schedule_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateSnapshotScheduleError::unhandled)
    }
}

fn parse_update_snapshot_schedule_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateSnapshotScheduleError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateSnapshotScheduleError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateSnapshotScheduleErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateSnapshotScheduleError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateSnapshotScheduleErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateSnapshotScheduleError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateSnapshotScheduleErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::UpdateSnapshotScheduleError::unhandled(err),
        },
        _ => return crate::error::UpdateSnapshotScheduleError::generic(generic),
    };
    crate::error::UpdateSnapshotScheduleError::new(kind, generic)
}

/// Updates the type of medium changer in a tape gateway.
#[derive(Clone, Default, Debug)]
pub struct UpdateVtlDeviceType {
    _private: (),
}
impl UpdateVtlDeviceType {
    /// Creates a new builder-style object to manufacture [`UpdateVtlDeviceTypeInput`](crate::input::UpdateVtlDeviceTypeInput)
    pub fn builder() -> crate::input::update_vtl_device_type_input::Builder {
        crate::input::update_vtl_device_type_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for UpdateVtlDeviceType {
    type Output = Result<
        crate::output::UpdateVtlDeviceTypeOutput,
        crate::error::UpdateVtlDeviceTypeError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_update_vtl_device_type_error(response));
        }
        crate::aws_json::parse_body(response.body())
            .map_err(crate::error::UpdateVtlDeviceTypeError::unhandled)
    }
}

fn parse_update_vtl_device_type_error(
    response: &http::Response<Bytes>,
) -> crate::error::UpdateVtlDeviceTypeError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::UpdateVtlDeviceTypeError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "InternalServerError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateVtlDeviceTypeErrorKind::InternalServerError(err),
            Err(err) => return crate::error::UpdateVtlDeviceTypeError::unhandled(err),
        },
        "InvalidGatewayRequestException" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => {
                crate::error::UpdateVtlDeviceTypeErrorKind::InvalidGatewayRequestException(err)
            }
            Err(err) => return crate::error::UpdateVtlDeviceTypeError::unhandled(err),
        },
        "ServiceUnavailableError" => match crate::aws_json::parse_body(response.body()) {
            Ok(err) => crate::error::UpdateVtlDeviceTypeErrorKind::ServiceUnavailableError(err),
            Err(err) => return crate::error::UpdateVtlDeviceTypeError::unhandled(err),
        },
        _ => return crate::error::UpdateVtlDeviceTypeError::generic(generic),
    };
    crate::error::UpdateVtlDeviceTypeError::new(kind, generic)
}
