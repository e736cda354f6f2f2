/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structures and enumerations shared by Marketplace Catalog operations

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An object that contains the `ChangeType`, `Details`, and `Entity`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Change {
    /// Change types are single string values that describe your intention for the change. Each change type is unique for each `EntityType` provided in the change's scope.
    ///
    /// Length: 1 - 255
    #[serde(rename = "ChangeType", skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    #[serde(rename = "Entity", skip_serializing_if = "Option::is_none")]
    pub entity: Option<crate::model::Entity>,
    /// This object contains details specific to the change type of the requested change.
    ///
    /// Length: 2 - 16384
    #[serde(rename = "Details", skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
impl Change {
    pub fn change_type(&self) -> Option<&str> {
        self.change_type.as_deref()
    }
    pub fn entity(&self) -> Option<&crate::model::Entity> {
        self.entity.as_ref()
    }
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}
/// See [`Change`](crate::model::Change)
pub mod change {
    /// A builder for [`Change`](crate::model::Change)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) change_type: Option<String>,
        pub(crate) entity: Option<crate::model::Entity>,
        pub(crate) details: Option<String>,
    }
    impl Builder {
        pub fn change_type(mut self, input: impl Into<String>) -> Self {
            self.change_type = Some(input.into());
            self
        }
        pub fn set_change_type(mut self, input: Option<String>) -> Self {
            self.change_type = input;
            self
        }
        pub fn entity(mut self, input: crate::model::Entity) -> Self {
            self.entity = Some(input);
            self
        }
        pub fn set_entity(mut self, input: Option<crate::model::Entity>) -> Self {
            self.entity = input;
            self
        }
        pub fn details(mut self, input: impl Into<String>) -> Self {
            self.details = Some(input.into());
            self
        }
        pub fn set_details(mut self, input: Option<String>) -> Self {
            self.details = input;
            self
        }
        /// Consumes the builder and constructs a [`Change`](crate::model::Change)
        pub fn build(self) -> crate::model::Change {
            crate::model::Change {
                change_type: self.change_type,
                entity: self.entity,
                details: self.details,
            }
        }
    }
}
impl Change {
    /// Creates a new builder-style object to manufacture [`Change`](crate::model::Change)
    pub fn builder() -> crate::model::change::Builder {
        crate::model::change::Builder::default()
    }
}

/// A summary of a change set returned in a list of change sets when the `ListChangeSets` action is called.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChangeSetSummaryListItem {
    /// Unique identifier for the change set.
    ///
    /// Length: 1 - 255
    #[serde(rename = "ChangeSetId", skip_serializing_if = "Option::is_none")]
    pub change_set_id: Option<String>,
    /// The ARN associated with the change set.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "ChangeSetArn", skip_serializing_if = "Option::is_none")]
    pub change_set_arn: Option<String>,
    /// Optional name for the change set.
    ///
    /// Length: 1 - 100
    #[serde(rename = "ChangeSetName", skip_serializing_if = "Option::is_none")]
    pub change_set_name: Option<String>,
    /// The date and time, in ISO 8601 format (2018-02-27T13:45:22Z), the request started.
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// The date and time, in ISO 8601 format (2018-02-27T13:45:22Z), the request transitioned to a terminal state.
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// The status of the change request.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<crate::model::ChangeStatus>,
    #[serde(rename = "EntityIdList", skip_serializing_if = "Option::is_none")]
    pub entity_id_list: Option<Vec<String>>,
}
impl ChangeSetSummaryListItem {
    pub fn change_set_id(&self) -> Option<&str> {
        self.change_set_id.as_deref()
    }
    pub fn change_set_arn(&self) -> Option<&str> {
        self.change_set_arn.as_deref()
    }
    pub fn change_set_name(&self) -> Option<&str> {
        self.change_set_name.as_deref()
    }
    pub fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }
    pub fn end_time(&self) -> Option<&str> {
        self.end_time.as_deref()
    }
    pub fn status(&self) -> Option<&crate::model::ChangeStatus> {
        self.status.as_ref()
    }
    pub fn entity_id_list(&self) -> Option<&[String]> {
        self.entity_id_list.as_deref()
    }
}
/// See [`ChangeSetSummaryListItem`](crate::model::ChangeSetSummaryListItem)
pub mod change_set_summary_list_item {
    /// A builder for [`ChangeSetSummaryListItem`](crate::model::ChangeSetSummaryListItem)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) change_set_id: Option<String>,
        pub(crate) change_set_arn: Option<String>,
        pub(crate) change_set_name: Option<String>,
        pub(crate) start_time: Option<String>,
        pub(crate) end_time: Option<String>,
        pub(crate) status: Option<crate::model::ChangeStatus>,
        pub(crate) entity_id_list: Option<Vec<String>>,
    }
    impl Builder {
        pub fn change_set_id(mut self, input: impl Into<String>) -> Self {
            self.change_set_id = Some(input.into());
            self
        }
        pub fn set_change_set_id(mut self, input: Option<String>) -> Self {
            self.change_set_id = input;
            self
        }
        pub fn change_set_arn(mut self, input: impl Into<String>) -> Self {
            self.change_set_arn = Some(input.into());
            self
        }
        pub fn set_change_set_arn(mut self, input: Option<String>) -> Self {
            self.change_set_arn = input;
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
        pub fn start_time(mut self, input: impl Into<String>) -> Self {
            self.start_time = Some(input.into());
            self
        }
        pub fn set_start_time(mut self, input: Option<String>) -> Self {
            self.start_time = input;
            self
        }
        pub fn end_time(mut self, input: impl Into<String>) -> Self {
            self.end_time = Some(input.into());
            self
        }
        pub fn set_end_time(mut self, input: Option<String>) -> Self {
            self.end_time = input;
            self
        }
        pub fn status(mut self, input: crate::model::ChangeStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: Option<crate::model::ChangeStatus>) -> Self {
            self.status = input;
            self
        }
        /// Appends an item to `entity_id_list`
        pub fn entity_id_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.entity_id_list.unwrap_or_default();
            v.push(input.into());
            self.entity_id_list = Some(v);
            self
        }
        pub fn set_entity_id_list(mut self, input: Option<Vec<String>>) -> Self {
            self.entity_id_list = input;
            self
        }
        /// Consumes the builder and constructs a [`ChangeSetSummaryListItem`](crate::model::ChangeSetSummaryListItem)
        pub fn build(self) -> crate::model::ChangeSetSummaryListItem {
            crate::model::ChangeSetSummaryListItem {
                change_set_id: self.change_set_id,
                change_set_arn: self.change_set_arn,
                change_set_name: self.change_set_name,
                start_time: self.start_time,
                end_time: self.end_time,
                status: self.status,
                entity_id_list: self.entity_id_list,
            }
        }
    }
}
impl ChangeSetSummaryListItem {
    /// Creates a new builder-style object to manufacture [`ChangeSetSummaryListItem`](crate::model::ChangeSetSummaryListItem)
    pub fn builder() -> crate::model::change_set_summary_list_item::Builder {
        crate::model::change_set_summary_list_item::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ChangeStatus {
    Preparing,
    Applying,
    Succeeded,
    Cancelled,
    Failed,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for ChangeStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "PREPARING" => ChangeStatus::Preparing,
            "APPLYING" => ChangeStatus::Applying,
            "SUCCEEDED" => ChangeStatus::Succeeded,
            "CANCELLED" => ChangeStatus::Cancelled,
            "FAILED" => ChangeStatus::Failed,
            other => ChangeStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChangeStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ChangeStatus::from(s))
    }
}
impl ChangeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ChangeStatus::Preparing => "PREPARING",
            ChangeStatus::Applying => "APPLYING",
            ChangeStatus::Succeeded => "SUCCEEDED",
            ChangeStatus::Cancelled => "CANCELLED",
            ChangeStatus::Failed => "FAILED",
            ChangeStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "PREPARING",
            "APPLYING",
            "SUCCEEDED",
            "CANCELLED",
            "FAILED",
        ]
    }
}
impl AsRef<str> for ChangeStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for ChangeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ChangeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(ChangeStatus::from(data.as_str()))
    }
}

/// This object is a container for common summary information about the change. The summary doesn't contain the whole change structure.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChangeSummary {
    #[serde(rename = "ChangeType", skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    #[serde(rename = "Entity", skip_serializing_if = "Option::is_none")]
    pub entity: Option<crate::model::Entity>,
    #[serde(rename = "ErrorDetailList", skip_serializing_if = "Option::is_none")]
    pub error_detail_list: Option<Vec<crate::model::ErrorDetail>>,
}
impl ChangeSummary {
    pub fn change_type(&self) -> Option<&str> {
        self.change_type.as_deref()
    }
    pub fn entity(&self) -> Option<&crate::model::Entity> {
        self.entity.as_ref()
    }
    pub fn error_detail_list(&self) -> Option<&[crate::model::ErrorDetail]> {
        self.error_detail_list.as_deref()
    }
}
/// See [`ChangeSummary`](crate::model::ChangeSummary)
pub mod change_summary {
    /// A builder for [`ChangeSummary`](crate::model::ChangeSummary)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) change_type: Option<String>,
        pub(crate) entity: Option<crate::model::Entity>,
        pub(crate) error_detail_list: Option<Vec<crate::model::ErrorDetail>>,
    }
    impl Builder {
        pub fn change_type(mut self, input: impl Into<String>) -> Self {
            self.change_type = Some(input.into());
            self
        }
        pub fn set_change_type(mut self, input: Option<String>) -> Self {
            self.change_type = input;
            self
        }
        pub fn entity(mut self, input: crate::model::Entity) -> Self {
            self.entity = Some(input);
            self
        }
        pub fn set_entity(mut self, input: Option<crate::model::Entity>) -> Self {
            self.entity = input;
            self
        }
        /// Appends an item to `error_detail_list`
        pub fn error_detail_list(mut self, input: impl Into<crate::model::ErrorDetail>) -> Self {
            let mut v = self.error_detail_list.unwrap_or_default();
            v.push(input.into());
            self.error_detail_list = Some(v);
            self
        }
        pub fn set_error_detail_list(
            mut self,
            input: Option<Vec<crate::model::ErrorDetail>>,
        ) -> Self {
            self.error_detail_list = input;
            self
        }
        /// Consumes the builder and constructs a [`ChangeSummary`](crate::model::ChangeSummary)
        pub fn build(self) -> crate::model::ChangeSummary {
            crate::model::ChangeSummary {
                change_type: self.change_type,
                entity: self.entity,
                error_detail_list: self.error_detail_list,
            }
        }
    }
}
impl ChangeSummary {
    /// Creates a new builder-style object to manufacture [`ChangeSummary`](crate::model::ChangeSummary)
    pub fn builder() -> crate::model::change_summary::Builder {
        crate::model::change_summary::Builder::default()
    }
}

/// A product entity contains data that describes your product, its supported features, and how it can be used or launched by your customer.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Entity {
    /// The type of entity.
    ///
    /// Length: 1 - 255
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The identifier for the entity.
    ///
    /// Length: 1 - 255
    #[serde(rename = "Identifier", skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}
impl Entity {
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}
/// See [`Entity`](crate::model::Entity)
pub mod entity {
    /// A builder for [`Entity`](crate::model::Entity)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) r#type: Option<String>,
        pub(crate) identifier: Option<String>,
    }
    impl Builder {
        pub fn r#type(mut self, input: impl Into<String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: Option<String>) -> Self {
            self.r#type = input;
            self
        }
        pub fn identifier(mut self, input: impl Into<String>) -> Self {
            self.identifier = Some(input.into());
            self
        }
        pub fn set_identifier(mut self, input: Option<String>) -> Self {
            self.identifier = input;
            self
        }
        /// Consumes the builder and constructs a [`Entity`](crate::model::Entity)
        pub fn build(self) -> crate::model::Entity {
            crate::model::Entity {
                r#type: self.r#type,
                identifier: self.identifier,
            }
        }
    }
}
impl Entity {
    /// Creates a new builder-style object to manufacture [`Entity`](crate::model::Entity)
    pub fn builder() -> crate::model::entity::Builder {
        crate::model::entity::Builder::default()
    }
}

/// This object is a container for common summary information about the entity. The summary doesn't contain the whole entity structure, but it does contain information common across all entities.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EntitySummary {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The type of entity, e.g. `AmiProduct@1.0`.
    ///
    /// Length: 1 - 255
    #[serde(rename = "EntityType", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Required. The unique ID of the entity to describe.
    ///
    /// Length: 1 - 255
    #[serde(rename = "EntityId", skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// The ARN associated to the unique identifier for the change set referenced in this request.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "EntityArn", skip_serializing_if = "Option::is_none")]
    pub entity_arn: Option<String>,
    /// The last modified date of the entity, in ISO 8601 format (2018-02-27T13:45:22Z).
    #[serde(rename = "LastModifiedDate", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<String>,
    #[serde(rename = "Visibility", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}
impl EntitySummary {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }
    pub fn entity_arn(&self) -> Option<&str> {
        self.entity_arn.as_deref()
    }
    pub fn last_modified_date(&self) -> Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn visibility(&self) -> Option<&str> {
        self.visibility.as_deref()
    }
}
/// See [`EntitySummary`](crate::model::EntitySummary)
pub mod entity_summary {
    /// A builder for [`EntitySummary`](crate::model::EntitySummary)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) name: Option<String>,
        pub(crate) entity_type: Option<String>,
        pub(crate) entity_id: Option<String>,
        pub(crate) entity_arn: Option<String>,
        pub(crate) last_modified_date: Option<String>,
        pub(crate) visibility: Option<String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
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
        pub fn entity_id(mut self, input: impl Into<String>) -> Self {
            self.entity_id = Some(input.into());
            self
        }
        pub fn set_entity_id(mut self, input: Option<String>) -> Self {
            self.entity_id = input;
            self
        }
        pub fn entity_arn(mut self, input: impl Into<String>) -> Self {
            self.entity_arn = Some(input.into());
            self
        }
        pub fn set_entity_arn(mut self, input: Option<String>) -> Self {
            self.entity_arn = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: Option<String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn visibility(mut self, input: impl Into<String>) -> Self {
            self.visibility = Some(input.into());
            self
        }
        pub fn set_visibility(mut self, input: Option<String>) -> Self {
            self.visibility = input;
            self
        }
        /// Consumes the builder and constructs a [`EntitySummary`](crate::model::EntitySummary)
        pub fn build(self) -> crate::model::EntitySummary {
            crate::model::EntitySummary {
                name: self.name,
                entity_type: self.entity_type,
                entity_id: self.entity_id,
                entity_arn: self.entity_arn,
                last_modified_date: self.last_modified_date,
                visibility: self.visibility,
            }
        }
    }
}
impl EntitySummary {
    /// Creates a new builder-style object to manufacture [`EntitySummary`](crate::model::EntitySummary)
    pub fn builder() -> crate::model::entity_summary::Builder {
        crate::model::entity_summary::Builder::default()
    }
}

/// Details about the error.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "ErrorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(rename = "ErrorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
impl ErrorDetail {
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
/// See [`ErrorDetail`](crate::model::ErrorDetail)
pub mod error_detail {
    /// A builder for [`ErrorDetail`](crate::model::ErrorDetail)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) error_code: Option<String>,
        pub(crate) error_message: Option<String>,
    }
    impl Builder {
        pub fn error_code(mut self, input: impl Into<String>) -> Self {
            self.error_code = Some(input.into());
            self
        }
        pub fn set_error_code(mut self, input: Option<String>) -> Self {
            self.error_code = input;
            self
        }
        pub fn error_message(mut self, input: impl Into<String>) -> Self {
            self.error_message = Some(input.into());
            self
        }
        pub fn set_error_message(mut self, input: Option<String>) -> Self {
            self.error_message = input;
            self
        }
        /// Consumes the builder and constructs a [`ErrorDetail`](crate::model::ErrorDetail)
        pub fn build(self) -> crate::model::ErrorDetail {
            crate::model::ErrorDetail {
                error_code: self.error_code,
                error_message: self.error_message,
            }
        }
    }
}
impl ErrorDetail {
    /// Creates a new builder-style object to manufacture [`ErrorDetail`](crate::model::ErrorDetail)
    pub fn builder() -> crate::model::error_detail::Builder {
        crate::model::error_detail::Builder::default()
    }
}

/// A filter object, used to optionally filter results from calls to the `ListEntities` and `ListChangeSets` actions.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Filter {
    /// For `ListEntities`, the supported value is `ProductId`. For `ListChangeSets`, the supported values are `ChangeSetName`, `Status`, `EntityId`, `AfterStartTime`, `BeforeStartTime`, `AfterEndTime` and `BeforeEndTime`.
    ///
    /// Length: 1 - 255
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Values of the filter. Each filter name accepts one value, except `EntityId` which accepts up to ten.
    #[serde(rename = "ValueList", skip_serializing_if = "Option::is_none")]
    pub value_list: Option<Vec<String>>,
}
impl Filter {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn value_list(&self) -> Option<&[String]> {
        self.value_list.as_deref()
    }
}
/// See [`Filter`](crate::model::Filter)
pub mod filter {
    /// A builder for [`Filter`](crate::model::Filter)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) name: Option<String>,
        pub(crate) value_list: Option<Vec<String>>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        /// Appends an item to `value_list`
        pub fn value_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.value_list.unwrap_or_default();
            v.push(input.into());
            self.value_list = Some(v);
            self
        }
        pub fn set_value_list(mut self, input: Option<Vec<String>>) -> Self {
            self.value_list = input;
            self
        }
        /// Consumes the builder and constructs a [`Filter`](crate::model::Filter)
        pub fn build(self) -> crate::model::Filter {
            crate::model::Filter {
                name: self.name,
                value_list: self.value_list,
            }
        }
    }
}
impl Filter {
    /// Creates a new builder-style object to manufacture [`Filter`](crate::model::Filter)
    pub fn builder() -> crate::model::filter::Builder {
        crate::model::filter::Builder::default()
    }
}

/// An object that contains two attributes, `SortBy` and `SortOrder`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Sort {
    /// For `ListEntities`, supported attributes include `LastModifiedDate` (default), `Visibility`, `EntityId`, and `Name`.
    ///
    /// Length: 1 - 255
    #[serde(rename = "SortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "SortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<crate::model::SortOrder>,
}
impl Sort {
    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }
    pub fn sort_order(&self) -> Option<&crate::model::SortOrder> {
        self.sort_order.as_ref()
    }
}
/// See [`Sort`](crate::model::Sort)
pub mod sort {
    /// A builder for [`Sort`](crate::model::Sort)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) sort_by: Option<String>,
        pub(crate) sort_order: Option<crate::model::SortOrder>,
    }
    impl Builder {
        pub fn sort_by(mut self, input: impl Into<String>) -> Self {
            self.sort_by = Some(input.into());
            self
        }
        pub fn set_sort_by(mut self, input: Option<String>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        /// Consumes the builder and constructs a [`Sort`](crate::model::Sort)
        pub fn build(self) -> crate::model::Sort {
            crate::model::Sort {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
            }
        }
    }
}
impl Sort {
    /// Creates a new builder-style object to manufacture [`Sort`](crate::model::Sort)
    pub fn builder() -> crate::model::sort::Builder {
        crate::model::sort::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SortOrder {
    Ascending,
    Descending,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for SortOrder {
    fn from(s: &'a str) -> Self {
        match s {
            "ASCENDING" => SortOrder::Ascending,
            "DESCENDING" => SortOrder::Descending,
            other => SortOrder::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortOrder::from(s))
    }
}
impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Ascending => "ASCENDING",
            SortOrder::Descending => "DESCENDING",
            SortOrder::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "ASCENDING",
            "DESCENDING",
        ]
    }
}
impl AsRef<str> for SortOrder {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(SortOrder::from(data.as_str()))
    }
}
