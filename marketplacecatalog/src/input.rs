/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs
//!
//! `CancelChangeSet`, `DescribeChangeSet` and `DescribeEntity` bind their members to the query
//! string. The other operations send their input as a JSON body.

use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;

/// Input of [`CancelChangeSet`](crate::operation::CancelChangeSet)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct CancelChangeSetInput {
    /// The catalog related to the request. Fixed value: `AWSMarketplace`.
    ///
    /// Length: 1 - 64
    pub catalog: Option<String>,
    /// Unique identifier for the change set.
    ///
    /// Length: 1 - 255
    pub change_set_id: Option<String>,
}
impl CancelChangeSetInput {
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
    pub fn change_set_id(&self) -> Option<&str> {
        self.change_set_id.as_deref()
    }
}
/// See [`CancelChangeSetInput`](crate::input::CancelChangeSetInput)
pub mod cancel_change_set_input {
    /// A builder for [`CancelChangeSetInput`](crate::input::CancelChangeSetInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) catalog: Option<String>,
        pub(crate) change_set_id: Option<String>,
    }
    impl Builder {
        pub fn catalog(mut self, input: impl Into<String>) -> Self {
            self.catalog = Some(input.into());
            self
        }
        pub fn set_catalog(mut self, input: Option<String>) -> Self {
            self.catalog = input;
            self
        }
        pub fn change_set_id(mut self, input: impl Into<String>) -> Self {
            self.change_set_id = Some(input.into());
            self
        }
        pub fn set_change_set_id(mut self, input: Option<String>) -> Self {
            self.change_set_id = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CancelChangeSet`](crate::operation::CancelChangeSet)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CancelChangeSet,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CancelChangeSetInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CancelChangeSetInput {
        fn from(builder: Builder) -> Self {
            crate::input::CancelChangeSetInput {
                catalog: builder.catalog,
                change_set_id: builder.change_set_id,
            }
        }
    }
}
impl CancelChangeSetInput {
    /// Creates a new builder-style object to manufacture [`CancelChangeSetInput`](crate::input::CancelChangeSetInput)
    pub fn builder() -> crate::input::cancel_change_set_input::Builder {
        crate::input::cancel_change_set_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CancelChangeSet,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        let catalog = self.catalog.as_deref().ok_or(BuildError::MissingField {
            field: "catalog",
            details: "catalog is bound to the query string and must be set",
        })?;
        let change_set_id = self.change_set_id.as_deref().ok_or(BuildError::MissingField {
            field: "change_set_id",
            details: "change_set_id is bound to the query string and must be set",
        })?;
        let mut uri = String::from("/CancelChangeSet");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        query.push_kv("catalog", catalog);
        query.push_kv("changeSetId", change_set_id);
        let request = http::Request::builder()
            .method(http::Method::PATCH)
            .uri(uri)
            .body(SdkBody::empty())?;
        Ok(crate::rest_json::operation(
            request,
            "CancelChangeSet",
            crate::operation::CancelChangeSet::new(),
            config,
        ))
    }
}

/// Input of [`DescribeChangeSet`](crate::operation::DescribeChangeSet)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DescribeChangeSetInput {
    /// The catalog related to the request. Fixed value: `AWSMarketplace`.
    ///
    /// Length: 1 - 64
    pub catalog: Option<String>,
    /// Unique identifier for the change set.
    ///
    /// Length: 1 - 255
    pub change_set_id: Option<String>,
}
impl DescribeChangeSetInput {
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
    pub fn change_set_id(&self) -> Option<&str> {
        self.change_set_id.as_deref()
    }
}
/// See [`DescribeChangeSetInput`](crate::input::DescribeChangeSetInput)
pub mod describe_change_set_input {
    /// A builder for [`DescribeChangeSetInput`](crate::input::DescribeChangeSetInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) catalog: Option<String>,
        pub(crate) change_set_id: Option<String>,
    }
    impl Builder {
        pub fn catalog(mut self, input: impl Into<String>) -> Self {
            self.catalog = Some(input.into());
            self
        }
        pub fn set_catalog(mut self, input: Option<String>) -> Self {
            self.catalog = input;
            self
        }
        pub fn change_set_id(mut self, input: impl Into<String>) -> Self {
            self.change_set_id = Some(input.into());
            self
        }
        pub fn set_change_set_id(mut self, input: Option<String>) -> Self {
            self.change_set_id = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeChangeSet`](crate::operation::DescribeChangeSet)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeChangeSet,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeChangeSetInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeChangeSetInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeChangeSetInput {
                catalog: builder.catalog,
                change_set_id: builder.change_set_id,
            }
        }
    }
}
impl DescribeChangeSetInput {
    /// Creates a new builder-style object to manufacture [`DescribeChangeSetInput`](crate::input::DescribeChangeSetInput)
    pub fn builder() -> crate::input::describe_change_set_input::Builder {
        crate::input::describe_change_set_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeChangeSet,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        let catalog = self.catalog.as_deref().ok_or(BuildError::MissingField {
            field: "catalog",
            details: "catalog is bound to the query string and must be set",
        })?;
        let change_set_id = self.change_set_id.as_deref().ok_or(BuildError::MissingField {
            field: "change_set_id",
            details: "change_set_id is bound to the query string and must be set",
        })?;
        let mut uri = String::from("/DescribeChangeSet");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        query.push_kv("catalog", catalog);
        query.push_kv("changeSetId", change_set_id);
        let request = http::Request::builder()
            .method(http::Method::GET)
            .uri(uri)
            .body(SdkBody::empty())?;
        Ok(crate::rest_json::operation(
            request,
            "DescribeChangeSet",
            crate::operation::DescribeChangeSet::new(),
            config,
        ))
    }
}

/// Input of [`DescribeEntity`](crate::operation::DescribeEntity)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DescribeEntityInput {
    /// The catalog related to the request. Fixed value: `AWSMarketplace`.
    ///
    /// Length: 1 - 64
    pub catalog: Option<String>,
    /// Required. The unique ID of the entity to describe.
    ///
    /// Length: 1 - 255
    pub entity_id: Option<String>,
}
impl DescribeEntityInput {
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }
}
/// See [`DescribeEntityInput`](crate::input::DescribeEntityInput)
pub mod describe_entity_input {
    /// A builder for [`DescribeEntityInput`](crate::input::DescribeEntityInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) catalog: Option<String>,
        pub(crate) entity_id: Option<String>,
    }
    impl Builder {
        pub fn catalog(mut self, input: impl Into<String>) -> Self {
            self.catalog = Some(input.into());
            self
        }
        pub fn set_catalog(mut self, input: Option<String>) -> Self {
            self.catalog = input;
            self
        }
        pub fn entity_id(mut self, input: impl Into<String>) -> Self {
            self.entity_id = Some(input.into());
            self
        }
        pub fn set_entity_id(mut self, input: Option<String>) -> Self {
            self.entity_id = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeEntity`](crate::operation::DescribeEntity)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeEntity,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeEntityInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeEntityInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeEntityInput {
                catalog: builder.catalog,
                entity_id: builder.entity_id,
            }
        }
    }
}
impl DescribeEntityInput {
    /// Creates a new builder-style object to manufacture [`DescribeEntityInput`](crate::input::DescribeEntityInput)
    pub fn builder() -> crate::input::describe_entity_input::Builder {
        crate::input::describe_entity_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeEntity,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        let catalog = self.catalog.as_deref().ok_or(BuildError::MissingField {
            field: "catalog",
            details: "catalog is bound to the query string and must be set",
        })?;
        let entity_id = self.entity_id.as_deref().ok_or(BuildError::MissingField {
            field: "entity_id",
            details: "entity_id is bound to the query string and must be set",
        })?;
        let mut uri = String::from("/DescribeEntity");
        let mut query = smithy_http::query::Writer::new(&mut uri);
        query.push_kv("catalog", catalog);
        query.push_kv("entityId", entity_id);
        let request = http::Request::builder()
            .method(http::Method::GET)
            .uri(uri)
            .body(SdkBody::empty())?;
        Ok(crate::rest_json::operation(
            request,
            "DescribeEntity",
            crate::operation::DescribeEntity::new(),
            config,
        ))
    }
}

/// Input of [`ListChangeSets`](crate::operation::ListChangeSets)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListChangeSetsInput {
    /// The catalog related to the request. Fixed value: `AWSMarketplace`.
    ///
    /// Length: 1 - 64
    #[serde(rename = "Catalog", skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// An array of filter objects.
    #[serde(rename = "FilterList", skip_serializing_if = "Option::is_none")]
    pub filter_list: Option<Vec<crate::model::Filter>>,
    /// An object that contains two attributes, `SortBy` and `SortOrder`.
    #[serde(rename = "Sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<crate::model::Sort>,
    /// The maximum number of results returned by a single call.
    ///
    /// Range: 1 - 50
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// The token value retrieved from a previous call to access the next page of results. Responses carry the token of the next page, absent after the last page.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
impl ListChangeSetsInput {
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
    pub fn filter_list(&self) -> Option<&[crate::model::Filter]> {
        self.filter_list.as_deref()
    }
    pub fn sort(&self) -> Option<&crate::model::Sort> {
        self.sort.as_ref()
    }
    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListChangeSetsInput`](crate::input::ListChangeSetsInput)
pub mod list_change_sets_input {
    /// A builder for [`ListChangeSetsInput`](crate::input::ListChangeSetsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) catalog: Option<String>,
        pub(crate) filter_list: Option<Vec<crate::model::Filter>>,
        pub(crate) sort: Option<crate::model::Sort>,
        pub(crate) max_results: Option<i32>,
        pub(crate) next_token: Option<String>,
    }
    impl Builder {
        pub fn catalog(mut self, input: impl Into<String>) -> Self {
            self.catalog = Some(input.into());
            self
        }
        pub fn set_catalog(mut self, input: Option<String>) -> Self {
            self.catalog = input;
            self
        }
        /// Appends an item to `filter_list`
        pub fn filter_list(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filter_list.unwrap_or_default();
            v.push(input.into());
            self.filter_list = Some(v);
            self
        }
        pub fn set_filter_list(mut self, input: Option<Vec<crate::model::Filter>>) -> Self {
            self.filter_list = input;
            self
        }
        pub fn sort(mut self, input: crate::model::Sort) -> Self {
            self.sort = Some(input);
            self
        }
        pub fn set_sort(mut self, input: Option<crate::model::Sort>) -> Self {
            self.sort = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListChangeSets`](crate::operation::ListChangeSets)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListChangeSets,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListChangeSetsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListChangeSetsInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListChangeSetsInput {
                catalog: builder.catalog,
                filter_list: builder.filter_list,
                sort: builder.sort,
                max_results: builder.max_results,
                next_token: builder.next_token,
            }
        }
    }
}
impl ListChangeSetsInput {
    /// Creates a new builder-style object to manufacture [`ListChangeSetsInput`](crate::input::ListChangeSetsInput)
    pub fn builder() -> crate::input::list_change_sets_input::Builder {
        crate::input::list_change_sets_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListChangeSets,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        let request = crate::rest_json::json_request(http::Method::POST, "/ListChangeSets", self)?;
        Ok(crate::rest_json::operation(
            request,
            "ListChangeSets",
            crate::operation::ListChangeSets::new(),
            config,
        ))
    }
}

/// Input of [`ListEntities`](crate::operation::ListEntities)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListEntitiesInput {
    /// The catalog related to the request. Fixed value: `AWSMarketplace`.
    ///
    /// Length: 1 - 64
    #[serde(rename = "Catalog", skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// The type of entity, e.g. `AmiProduct@1.0`.
    ///
    /// Length: 1 - 255
    #[serde(rename = "EntityType", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// An array of filter objects.
    #[serde(rename = "FilterList", skip_serializing_if = "Option::is_none")]
    pub filter_list: Option<Vec<crate::model::Filter>>,
    /// An object that contains two attributes, `SortBy` and `SortOrder`.
    #[serde(rename = "Sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<crate::model::Sort>,
    /// The token value retrieved from a previous call to access the next page of results. Responses carry the token of the next page, absent after the last page.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// The maximum number of results returned by a single call.
    ///
    /// Range: 1 - 50
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}
impl ListEntitiesInput {
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }
    pub fn filter_list(&self) -> Option<&[crate::model::Filter]> {
        self.filter_list.as_deref()
    }
    pub fn sort(&self) -> Option<&crate::model::Sort> {
        self.sort.as_ref()
    }
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }
}
/// See [`ListEntitiesInput`](crate::input::ListEntitiesInput)
pub mod list_entities_input {
    /// A builder for [`ListEntitiesInput`](crate::input::ListEntitiesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) catalog: Option<String>,
        pub(crate) entity_type: Option<String>,
        pub(crate) filter_list: Option<Vec<crate::model::Filter>>,
        pub(crate) sort: Option<crate::model::Sort>,
        pub(crate) next_token: Option<String>,
        pub(crate) max_results: Option<i32>,
    }
    impl Builder {
        pub fn catalog(mut self, input: impl Into<String>) -> Self {
            self.catalog = Some(input.into());
            self
        }
        pub fn set_catalog(mut self, input: Option<String>) -> Self {
            self.catalog = input;
            self
        }
        pub fn entity_type(mut self, input: impl Into<String>) -> Self {
            self.entity_type = Some(input.into());
            self
        }
        pub fn set_entity_type(mut self, input: Option<String>) -> Self {
            self.entity_type = input;
            self
        }
        /// Appends an item to `filter_list`
        pub fn filter_list(mut self, input: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filter_list.unwrap_or_default();
            v.push(input.into());
            self.filter_list = Some(v);
            self
        }
        pub fn set_filter_list(mut self, input: Option<Vec<crate::model::Filter>>) -> Self {
            self.filter_list = input;
            self
        }
        pub fn sort(mut self, input: crate::model::Sort) -> Self {
            self.sort = Some(input);
            self
        }
        pub fn set_sort(mut self, input: Option<crate::model::Sort>) -> Self {
            self.sort = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListEntities`](crate::operation::ListEntities)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListEntities,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListEntitiesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListEntitiesInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListEntitiesInput {
                catalog: builder.catalog,
                entity_type: builder.entity_type,
                filter_list: builder.filter_list,
                sort: builder.sort,
                next_token: builder.next_token,
                max_results: builder.max_results,
            }
        }
    }
}
impl ListEntitiesInput {
    /// Creates a new builder-style object to manufacture [`ListEntitiesInput`](crate::input::ListEntitiesInput)
    pub fn builder() -> crate::input::list_entities_input::Builder {
        crate::input::list_entities_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListEntities,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        let request = crate::rest_json::json_request(http::Method::POST, "/ListEntities", self)?;
        Ok(crate::rest_json::operation(
            request,
            "ListEntities",
            crate::operation::ListEntities::new(),
            config,
        ))
    }
}

/// Input of [`StartChangeSet`](crate::operation::StartChangeSet)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct StartChangeSetInput {
    /// The catalog related to the request. Fixed value: `AWSMarketplace`.
    ///
    /// Length: 1 - 64
    #[serde(rename = "Catalog", skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(rename = "ChangeSet", skip_serializing_if = "Option::is_none")]
    pub change_set: Option<Vec<crate::model::Change>>,
    /// Optional name for the change set.
    ///
    /// Length: 1 - 100
    #[serde(rename = "ChangeSetName", skip_serializing_if = "Option::is_none")]
    pub change_set_name: Option<String>,
    /// A unique token to identify the request to ensure idempotency. Generated when unset.
    ///
    /// Length: 1 - 36
    #[serde(rename = "ClientRequestToken", skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}
impl StartChangeSetInput {
    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
    pub fn change_set(&self) -> Option<&[crate::model::Change]> {
        self.change_set.as_deref()
    }
    pub fn change_set_name(&self) -> Option<&str> {
        self.change_set_name.as_deref()
    }
    pub fn client_request_token(&self) -> Option<&str> {
        self.client_request_token.as_deref()
    }
}
/// See [`StartChangeSetInput`](crate::input::StartChangeSetInput)
pub mod start_change_set_input {
    /// A builder for [`StartChangeSetInput`](crate::input::StartChangeSetInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) catalog: Option<String>,
        pub(crate) change_set: Option<Vec<crate::model::Change>>,
        pub(crate) change_set_name: Option<String>,
        pub(crate) client_request_token: Option<String>,
    }
    impl Builder {
        pub fn catalog(mut self, input: impl Into<String>) -> Self {
            self.catalog = Some(input.into());
            self
        }
        pub fn set_catalog(mut self, input: Option<String>) -> Self {
            self.catalog = input;
            self
        }
        /// Appends an item to `change_set`
        pub fn change_set(mut self, input: impl Into<crate::model::Change>) -> Self {
            let mut v = self.change_set.unwrap_or_default();
            v.push(input.into());
            self.change_set = Some(v);
            self
        }
        pub fn set_change_set(mut self, input: Option<Vec<crate::model::Change>>) -> Self {
            self.change_set = input;
            self
        }
        pub fn change_set_name(mut self, input: impl Into<String>) -> Self {
            self.change_set_name = Some(input.into());
            self
        }
        pub fn set_change_set_name(mut self, input: Option<String>) -> Self {
            self.change_set_name = input;
            self
        }
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`StartChangeSet`](crate::operation::StartChangeSet)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::StartChangeSet,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::StartChangeSetInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::StartChangeSetInput {
        fn from(builder: Builder) -> Self {
            crate::input::StartChangeSetInput {
                catalog: builder.catalog,
                change_set: builder.change_set,
                change_set_name: builder.change_set_name,
                client_request_token: builder.client_request_token,
            }
        }
    }
}
impl StartChangeSetInput {
    /// Creates a new builder-style object to manufacture [`StartChangeSetInput`](crate::input::StartChangeSetInput)
    pub fn builder() -> crate::input::start_change_set_input::Builder {
        crate::input::start_change_set_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::StartChangeSet,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(config.make_token.make_idempotency_token());
        }
        let request =
            crate::rest_json::json_request(http::Method::POST, "/StartChangeSet", &input)?;
        Ok(crate::rest_json::operation(
            request,
            "StartChangeSet",
            crate::operation::StartChangeSet::new(),
            config,
        ))
    }
}
