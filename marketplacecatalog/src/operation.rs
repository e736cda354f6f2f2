/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation handlers: one per Marketplace Catalog operation

use aws_http::json_errors::parse_generic_error;
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

/// Used to cancel an open change request. Must be sent before the status of the request changes to `APPLYING`, the final stage of completing your change request.
#[derive(Clone, Default, Debug)]
pub struct CancelChangeSet {
    _private: (),
}
impl CancelChangeSet {
    /// Creates a new builder-style object to manufacture [`CancelChangeSetInput`](crate::input::CancelChangeSetInput)
    pub fn builder() -> crate::input::cancel_change_set_input::Builder {
        crate::input::cancel_change_set_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CancelChangeSet {
    type Output = Result<crate::output::CancelChangeSetOutput, crate::error::CancelChangeSetError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_cancel_change_set_error(response));
        }
        crate::rest_json::parse_body(response.body())
            .map_err(crate::error::CancelChangeSetError::unhandled)
    }
}

fn parse_cancel_change_set_error(
    response: &http::Response<Bytes>,
) -> crate::error::CancelChangeSetError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::CancelChangeSetError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "AccessDeniedException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelChangeSetErrorKind::AccessDeniedException(err),
            Err(err) => return crate::error::CancelChangeSetError::unhandled(err),
        },
        "InternalServiceException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelChangeSetErrorKind::InternalServiceException(err),
            Err(err) => return crate::error::CancelChangeSetError::unhandled(err),
        },
        "ResourceInUseException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelChangeSetErrorKind::ResourceInUseException(err),
            Err(err) => return crate::error::CancelChangeSetError::unhandled(err),
        },
        "ResourceNotFoundException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelChangeSetErrorKind::ResourceNotFoundException(err),
            Err(err) => return crate::error::CancelChangeSetError::unhandled(err),
        },
        "ThrottlingException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelChangeSetErrorKind::ThrottlingException(err),
            Err(err) => return crate::error::CancelChangeSetError::unhandled(err),
        },
        "ValidationException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::CancelChangeSetErrorKind::ValidationException(err),
            Err(err) => return crate::error::CancelChangeSetError::unhandled(err),
        },
        _ => return crate::error::CancelChangeSetError::generic(generic),
    };
    crate::error::CancelChangeSetError::new(kind, generic)
}

/// Provides information about a given change set.
#[derive(Clone, Default, Debug)]
pub struct DescribeChangeSet {
    _private: (),
}
impl DescribeChangeSet {
    /// Creates a new builder-style object to manufacture [`DescribeChangeSetInput`](crate::input::DescribeChangeSetInput)
    pub fn builder() -> crate::input::describe_change_set_input::Builder {
        crate::input::describe_change_set_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeChangeSet {
    type Output = Result<
        crate::output::DescribeChangeSetOutput,
        crate::error::DescribeChangeSetError,
    >;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_change_set_error(response));
        }
        crate::rest_json::parse_body(response.body())
            .map_err(crate::error::DescribeChangeSetError::unhandled)
    }
}

fn parse_describe_change_set_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeChangeSetError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeChangeSetError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "AccessDeniedException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeChangeSetErrorKind::AccessDeniedException(err),
            Err(err) => return crate::error::DescribeChangeSetError::unhandled(err),
        },
        "InternalServiceException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeChangeSetErrorKind::InternalServiceException(err),
            Err(err) => return crate::error::DescribeChangeSetError::unhandled(err),
        },
        "ResourceNotFoundException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeChangeSetErrorKind::ResourceNotFoundException(err),
            Err(err) => return crate::error::DescribeChangeSetError::unhandled(err),
        },
        "ThrottlingException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeChangeSetErrorKind::ThrottlingException(err),
            Err(err) => return crate::error::DescribeChangeSetError::unhandled(err),
        },
        "ValidationException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeChangeSetErrorKind::ValidationException(err),
            Err(err) => return crate::error::DescribeChangeSetError::unhandled(err),
        },
        _ => return crate::error::DescribeChangeSetError::generic(generic),
    };
    crate::error::DescribeChangeSetError::new(kind, generic)
}

/// Returns the metadata and content of the entity.
#[derive(Clone, Default, Debug)]
pub struct DescribeEntity {
    _private: (),
}
impl DescribeEntity {
    /// Creates a new builder-style object to manufacture [`DescribeEntityInput`](crate::input::DescribeEntityInput)
    pub fn builder() -> crate::input::describe_entity_input::Builder {
        crate::input::describe_entity_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeEntity {
    type Output = Result<crate::output::DescribeEntityOutput, crate::error::DescribeEntityError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_describe_entity_error(response));
        }
        crate::rest_json::parse_body(response.body())
            .map_err(crate::error::DescribeEntityError::unhandled)
    }
}

fn parse_describe_entity_error(
    response: &http::Response<Bytes>,
) -> crate::error::DescribeEntityError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::DescribeEntityError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "AccessDeniedException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeEntityErrorKind::AccessDeniedException(err),
            Err(err) => return crate::error::DescribeEntityError::unhandled(err),
        },
        "InternalServiceException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeEntityErrorKind::InternalServiceException(err),
            Err(err) => return crate::error::DescribeEntityError::unhandled(err),
        },
        "ResourceNotFoundException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeEntityErrorKind::ResourceNotFoundException(err),
            Err(err) => return crate::error::DescribeEntityError::unhandled(err),
        },
        "ResourceNotSupportedException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeEntityErrorKind::ResourceNotSupportedException(err),
            Err(err) => return crate::error::DescribeEntityError::unhandled(err),
        },
        "ThrottlingException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeEntityErrorKind::ThrottlingException(err),
            Err(err) => return crate::error::DescribeEntityError::unhandled(err),
        },
        "ValidationException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::DescribeEntityErrorKind::ValidationException(err),
            Err(err) => return crate::error::DescribeEntityError::unhandled(err),
        },
        _ => return crate::error::DescribeEntityError::generic(generic),
    };
    crate::error::DescribeEntityError::new(kind, generic)
}

/// Returns the list of change sets owned by the account being used to make the call. You can filter this list by providing any combination of `entityId`, `ChangeSetName`, and status. If you provide more than one filter, the API operation applies a logical AND between the filters.
#[derive(Clone, Default, Debug)]
pub struct ListChangeSets {
    _private: (),
}
impl ListChangeSets {
    /// Creates a new builder-style object to manufacture [`ListChangeSetsInput`](crate::input::ListChangeSetsInput)
    pub fn builder() -> crate::input::list_change_sets_input::Builder {
        crate::input::list_change_sets_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListChangeSets {
    type Output = Result<crate::output::ListChangeSetsOutput, crate::error::ListChangeSetsError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_change_sets_error(response));
        }
        crate::rest_json::parse_body(response.body())
            .map_err(crate::error::ListChangeSetsError::unhandled)
    }
}

fn parse_list_change_sets_error(
    response: &http::Response<Bytes>,
) -> crate::error::ListChangeSetsError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListChangeSetsError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "AccessDeniedException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListChangeSetsErrorKind::AccessDeniedException(err),
            Err(err) => return crate::error::ListChangeSetsError::unhandled(err),
        },
        "InternalServiceException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListChangeSetsErrorKind::InternalServiceException(err),
            Err(err) => return crate::error::ListChangeSetsError::unhandled(err),
        },
        "ThrottlingException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListChangeSetsErrorKind::ThrottlingException(err),
            Err(err) => return crate::error::ListChangeSetsError::unhandled(err),
        },
        "ValidationException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListChangeSetsErrorKind::ValidationException(err),
            Err(err) => return crate::error::ListChangeSetsError::unhandled(err),
        },
        _ => return crate::error::ListChangeSetsError::generic(generic),
    };
    crate::error::ListChangeSetsError::new(kind, generic)
}

/// Provides the list of entities of a given type.
#[derive(Clone, Default, Debug)]
pub struct ListEntities {
    _private: (),
}
impl ListEntities {
    /// Creates a new builder-style object to manufacture [`ListEntitiesInput`](crate::input::ListEntitiesInput)
    pub fn builder() -> crate::input::list_entities_input::Builder {
        crate::input::list_entities_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListEntities {
    type Output = Result<crate::output::ListEntitiesOutput, crate::error::ListEntitiesError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_list_entities_error(response));
        }
        crate::rest_json::parse_body(response.body())
            .map_err(crate::error::ListEntitiesError::unhandled)
    }
}

fn parse_list_entities_error(response: &http::Response<Bytes>) -> crate::error::ListEntitiesError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::ListEntitiesError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "AccessDeniedException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListEntitiesErrorKind::AccessDeniedException(err),
            Err(err) => return crate::error::ListEntitiesError::unhandled(err),
        },
        "InternalServiceException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListEntitiesErrorKind::InternalServiceException(err),
            Err(err) => return crate::error::ListEntitiesError::unhandled(err),
        },
        "ResourceNotFoundException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListEntitiesErrorKind::ResourceNotFoundException(err),
            Err(err) => return crate::error::ListEntitiesError::unhandled(err),
        },
        "ThrottlingException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListEntitiesErrorKind::ThrottlingException(err),
            Err(err) => return crate::error::ListEntitiesError::unhandled(err),
        },
        "ValidationException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::ListEntitiesErrorKind::ValidationException(err),
            Err(err) => return crate::error::ListEntitiesError::unhandled(err),
        },
        _ => return crate::error::ListEntitiesError::generic(generic),
    };
    crate::error::ListEntitiesError::new(kind, generic)
}

/// This operation allows you to request changes for your entities. Within a single change set, you cannot start the same change type against the same entity multiple times. Additionally, when a change set is running, all the entities targeted by the different changes are locked until the change set has completed (either succeeded, cancelled, or failed).
#[derive(Clone, Default, Debug)]
pub struct StartChangeSet {
    _private: (),
}
impl StartChangeSet {
    /// Creates a new builder-style object to manufacture [`StartChangeSetInput`](crate::input::StartChangeSetInput)
    pub fn builder() -> crate::input::start_change_set_input::Builder {
        crate::input::start_change_set_input::Builder::default()
    }

    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for StartChangeSet {
    type Output = Result<crate::output::StartChangeSetOutput, crate::error::StartChangeSetError>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_start_change_set_error(response));
        }
        crate::rest_json::parse_body(response.body())
            .map_err(crate::error::StartChangeSetError::unhandled)
    }
}

fn parse_start_change_set_error(
    response: &http::Response<Bytes>,
) -> crate::error::StartChangeSetError {
    let generic = parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return crate::error::StartChangeSetError::generic(generic),
    };
    let kind = match error_code.as_str() {
        "AccessDeniedException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartChangeSetErrorKind::AccessDeniedException(err),
            Err(err) => return crate::error::StartChangeSetError::unhandled(err),
        },
        "InternalServiceException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartChangeSetErrorKind::InternalServiceException(err),
            Err(err) => return crate::error::StartChangeSetError::unhandled(err),
        },
        "ResourceInUseException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartChangeSetErrorKind::ResourceInUseException(err),
            Err(err) => return crate::error::StartChangeSetError::unhandled(err),
        },
        "ResourceNotFoundException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartChangeSetErrorKind::ResourceNotFoundException(err),
            Err(err) => return crate::error::StartChangeSetError::unhandled(err),
        },
        "ServiceQuotaExceededException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartChangeSetErrorKind::ServiceQuotaExceededException(err),
            Err(err) => return crate::error::StartChangeSetError::unhandled(err),
        },
        "ThrottlingException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartChangeSetErrorKind::ThrottlingException(err),
            Err(err) => return crate::error::StartChangeSetError::unhandled(err),
        },
        "ValidationException" => match crate::rest_json::parse_body(response.body()) {
            Ok(err) => crate::error::StartChangeSetErrorKind::ValidationException(err),
            Err(err) => return crate::error::StartChangeSetError::unhandled(err),
        },
        _ => return crate::error::StartChangeSetError::generic(generic),
    };
    crate::error::StartChangeSetError::new(kind, generic)
}
