/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Blocking client
//!
//! Every method sends one request and blocks the calling thread until the response is
//! parsed, retries included.

use crate::config::Config;
use crate::error::*;
use crate::input::*;
use crate::output::*;
use aws_hyper::blocking::{next_token, Paginator};
use aws_hyper::conn::Standard;
use aws_hyper::{BoxError, RetryConfig, SdkError};
use smithy_http::body::SdkBody;
use std::io;
use tower::Service;

/// Blocking AWS Marketplace Catalog client
///
/// ```rust,no_run
/// use marketplacecatalog::blocking::Client;
/// use marketplacecatalog::input::ListEntitiesInput;
///
/// let client = Client::from_env().expect("failed to start the runtime");
/// let entities = ListEntitiesInput::builder()
///     .catalog("AWSMarketplace")
///     .entity_type("AmiProduct");
/// for page in client.list_entities_pages(entities) {
///     println!("{:?}", page.expect("failed to list entities").entity_summary_list);
/// }
/// ```
pub struct Client<S = Standard> {
    inner: aws_hyper::blocking::Client<S>,
    conf: Config,
}

impl Client<Standard> {
    /// A client configured from the environment, see [`Config::from_env`](Config::from_env)
    pub fn from_env() -> Result<Self, io::Error> {
        Self::from_conf(Config::from_env())
    }

    pub fn from_conf(conf: Config) -> Result<Self, io::Error> {
        Ok(Client {
            inner: aws_hyper::blocking::Client::https()?,
            conf,
        })
    }
}

impl<S> Client<S> {
    /// A client that dispatches every request through `conn`
    pub fn from_conf_conn(conf: Config, conn: S) -> Result<Self, io::Error> {
        Ok(Client {
            inner: aws_hyper::blocking::Client::new(conn)?,
            conf,
        })
    }

    pub fn with_retry_config(self, retry_config: RetryConfig) -> Self {
        Client {
            inner: self.inner.with_retry_config(retry_config),
            conf: self.conf,
        }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Used to cancel an open change request. Must be sent before the status of the request changes to `APPLYING`, the final stage of completing your change request.
    pub fn cancel_change_set(
        &self,
        input: impl Into<CancelChangeSetInput>,
    ) -> Result<CancelChangeSetOutput, SdkError<CancelChangeSetError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Provides information about a given change set.
    pub fn describe_change_set(
        &self,
        input: impl Into<DescribeChangeSetInput>,
    ) -> Result<DescribeChangeSetOutput, SdkError<DescribeChangeSetError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns the metadata and content of the entity.
    pub fn describe_entity(
        &self,
        input: impl Into<DescribeEntityInput>,
    ) -> Result<DescribeEntityOutput, SdkError<DescribeEntityError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns the list of change sets owned by the account being used to make the call. You can filter this list by providing any combination of `entityId`, `ChangeSetName`, and status. If you provide more than one filter, the API operation applies a logical AND between the filters.
    pub fn list_change_sets(
        &self,
        input: impl Into<ListChangeSetsInput>,
    ) -> Result<ListChangeSetsOutput, SdkError<ListChangeSetsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`list_change_sets`](Client::list_change_sets)
    ///
    /// `NextToken` is threaded from each response into the next request.
    pub fn list_change_sets_pages(
        &self,
        input: impl Into<ListChangeSetsInput>,
    ) -> Paginator<'_, ListChangeSetsInput, ListChangeSetsOutput, SdkError<ListChangeSetsError>> {
        Paginator::new(
            input.into(),
            move |input| self.list_change_sets(input),
            |input: &ListChangeSetsInput, output: &ListChangeSetsOutput| {
                next_token(input.next_token.as_deref(), output.next_token.as_deref()).map(|token| {
                    ListChangeSetsInput {
                        next_token: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Provides the list of entities of a given type.
    pub fn list_entities(
        &self,
        input: impl Into<ListEntitiesInput>,
    ) -> Result<ListEntitiesOutput, SdkError<ListEntitiesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`list_entities`](Client::list_entities)
    ///
    /// `NextToken` is threaded from each response into the next request.
    pub fn list_entities_pages(
        &self,
        input: impl Into<ListEntitiesInput>,
    ) -> Paginator<'_, ListEntitiesInput, ListEntitiesOutput, SdkError<ListEntitiesError>> {
        Paginator::new(
            input.into(),
            move |input| self.list_entities(input),
            |input: &ListEntitiesInput, output: &ListEntitiesOutput| {
                next_token(input.next_token.as_deref(), output.next_token.as_deref()).map(|token| {
                    ListEntitiesInput {
                        next_token: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// This operation allows you to request changes for your entities. Within a single change set, you cannot start the same change type against the same entity multiple times. Additionally, when a change set is running, all the entities targeted by the different changes are locked until the change set has completed (either succeeded, cancelled, or failed).
    pub fn start_change_set(
        &self,
        input: impl Into<StartChangeSetInput>,
    ) -> Result<StartChangeSetOutput, SdkError<StartChangeSetError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }
}
