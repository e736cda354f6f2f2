/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs, deserialized from JSON response bodies

use serde::Deserialize;

/// Output of [`CancelChangeSet`](crate::operation::CancelChangeSet)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CancelChangeSetOutput {
    /// Unique identifier for the change set.
    ///
    /// Length: 1 - 255
    #[serde(rename = "ChangeSetId")]
    pub change_set_id: Option<String>,
    /// The ARN associated with the change set.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "ChangeSetArn")]
    pub change_set_arn: Option<String>,
}
impl CancelChangeSetOutput {
    pub fn change_set_id(&self) -> Option<&str> {
        self.change_set_id.as_deref()
    }
    pub fn change_set_arn(&self) -> Option<&str> {
        self.change_set_arn.as_deref()
    }
}
/// See [`CancelChangeSetOutput`](crate::output::CancelChangeSetOutput)
pub mod cancel_change_set_output {
    /// A builder for [`CancelChangeSetOutput`](crate::output::CancelChangeSetOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) change_set_id: Option<String>,
        pub(crate) change_set_arn: Option<String>,
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
        /// Consumes the builder and constructs a [`CancelChangeSetOutput`](crate::output::CancelChangeSetOutput)
        pub fn build(self) -> crate::output::CancelChangeSetOutput {
            crate::output::CancelChangeSetOutput {
                change_set_id: self.change_set_id,
                change_set_arn: self.change_set_arn,
            }
        }
    }
}
impl CancelChangeSetOutput {
    /// Creates a new builder-style object to manufacture [`CancelChangeSetOutput`](crate::output::CancelChangeSetOutput)
    pub fn builder() -> crate::output::cancel_change_set_output::Builder {
        crate::output::cancel_change_set_output::Builder::default()
    }
}

/// Output of [`DescribeChangeSet`](crate::operation::DescribeChangeSet)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeChangeSetOutput {
    /// Unique identifier for the change set.
    ///
    /// Length: 1 - 255
    #[serde(rename = "ChangeSetId")]
    pub change_set_id: Option<String>,
    /// The ARN associated with the change set.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "ChangeSetArn")]
    pub change_set_arn: Option<String>,
    /// Optional name for the change set.
    ///
    /// Length: 1 - 100
    #[serde(rename = "ChangeSetName")]
    pub change_set_name: Option<String>,
    /// The date and time, in ISO 8601 format (2018-02-27T13:45:22Z), the request started.
    #[serde(rename = "StartTime")]
    pub start_time: Option<String>,
    /// The date and time, in ISO 8601 format (2018-02-27T13:45:22Z), the request transitioned to a terminal state.
    #[serde(rename = "EndTime")]
    pub end_time: Option<String>,
    /// The status of the change request.
    #[serde(rename = "Status")]
    pub status: Option<crate::model::ChangeStatus>,
    #[serde(rename = "FailureDescription")]
    pub failure_description: Option<String>,
    #[serde(rename = "ChangeSet")]
    pub change_set: Option<Vec<crate::model::ChangeSummary>>,
}
impl DescribeChangeSetOutput {
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
    pub fn failure_description(&self) -> Option<&str> {
        self.failure_description.as_deref()
    }
    pub fn change_set(&self) -> Option<&[crate::model::ChangeSummary]> {
        self.change_set.as_deref()
    }
}
/// See [`DescribeChangeSetOutput`](crate::output::DescribeChangeSetOutput)
pub mod describe_change_set_output {
    /// A builder for [`DescribeChangeSetOutput`](crate::output::DescribeChangeSetOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) change_set_id: Option<String>,
        pub(crate) change_set_arn: Option<String>,
        pub(crate) change_set_name: Option<String>,
        pub(crate) start_time: Option<String>,
        pub(crate) end_time: Option<String>,
        pub(crate) status: Option<crate::model::ChangeStatus>,
        pub(crate) failure_description: Option<String>,
        pub(crate) change_set: Option<Vec<crate::model::ChangeSummary>>,
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
        pub fn failure_description(mut self, input: impl Into<String>) -> Self {
            self.failure_description = Some(input.into());
            self
        }
        pub fn set_failure_description(mut self, input: Option<String>) -> Self {
            self.failure_description = input;
            self
        }
        /// Appends an item to `change_set`
        pub fn change_set(mut self, input: impl Into<crate::model::ChangeSummary>) -> Self {
            let mut v = self.change_set.unwrap_or_default();
            v.push(input.into());
            self.change_set = Some(v);
            self
        }
        pub fn set_change_set(mut self, input: Option<Vec<crate::model::ChangeSummary>>) -> Self {
            self.change_set = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeChangeSetOutput`](crate::output::DescribeChangeSetOutput)
        pub fn build(self) -> crate::output::DescribeChangeSetOutput {
            crate::output::DescribeChangeSetOutput {
                change_set_id: self.change_set_id,
                change_set_arn: self.change_set_arn,
                change_set_name: self.change_set_name,
                start_time: self.start_time,
                end_time: self.end_time,
                status: self.status,
                failure_description: self.failure_description,
                change_set: self.change_set,
            }
        }
    }
}
impl DescribeChangeSetOutput {
    /// Creates a new builder-style object to manufacture [`DescribeChangeSetOutput`](crate::output::DescribeChangeSetOutput)
    pub fn builder() -> crate::output::describe_change_set_output::Builder {
        crate::output::describe_change_set_output::Builder::default()
    }
}

/// Output of [`DescribeEntity`](crate::operation::DescribeEntity)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeEntityOutput {
    /// The type of entity, e.g. `AmiProduct@1.0`.
    ///
    /// Length: 1 - 255
    #[serde(rename = "EntityType")]
    pub entity_type: Option<String>,
    #[serde(rename = "EntityIdentifier")]
    pub entity_identifier: Option<String>,
    /// The ARN associated to the unique identifier for the change set referenced in this request.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "EntityArn")]
    pub entity_arn: Option<String>,
    /// The last modified date of the entity, in ISO 8601 format (2018-02-27T13:45:22Z).
    #[serde(rename = "LastModifiedDate")]
    pub last_modified_date: Option<String>,
    #[serde(rename = "Details")]
    pub details: Option<String>,
}
impl DescribeEntityOutput {
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }
    pub fn entity_identifier(&self) -> Option<&str> {
        self.entity_identifier.as_deref()
    }
    pub fn entity_arn(&self) -> Option<&str> {
        self.entity_arn.as_deref()
    }
    pub fn last_modified_date(&self) -> Option<&str> {
        self.last_modified_date.as_deref()
    }
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}
/// See [`DescribeEntityOutput`](crate::output::DescribeEntityOutput)
pub mod describe_entity_output {
    /// A builder for [`DescribeEntityOutput`](crate::output::DescribeEntityOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) entity_type: Option<String>,
        pub(crate) entity_identifier: Option<String>,
        pub(crate) entity_arn: Option<String>,
        pub(crate) last_modified_date: Option<String>,
        pub(crate) details: Option<String>,
    }
    impl Builder {
        pub fn entity_type(mut self, input: impl Into<String>) -> Self {
            self.entity_type = Some(input.into());
            self
        }
        pub fn set_entity_type(mut self, input: Option<String>) -> Self {
            self.entity_type = input;
            self
        }
        pub fn entity_identifier(mut self, input: impl Into<String>) -> Self {
            self.entity_identifier = Some(input.into());
            self
        }
        pub fn set_entity_identifier(mut self, input: Option<String>) -> Self {
            self.entity_identifier = input;
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
        pub fn details(mut self, input: impl Into<String>) -> Self {
            self.details = Some(input.into());
            self
        }
        pub fn set_details(mut self, input: Option<String>) -> Self {
            self.details = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEntityOutput`](crate::output::DescribeEntityOutput)
        pub fn build(self) -> crate::output::DescribeEntityOutput {
            crate::output::DescribeEntityOutput {
                entity_type: self.entity_type,
                entity_identifier: self.entity_identifier,
                entity_arn: self.entity_arn,
                last_modified_date: self.last_modified_date,
                details: self.details,
            }
        }
    }
}
impl DescribeEntityOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEntityOutput`](crate::output::DescribeEntityOutput)
    pub fn builder() -> crate::output::describe_entity_output::Builder {
        crate::output::describe_entity_output::Builder::default()
    }
}

/// Output of [`ListChangeSets`](crate::operation::ListChangeSets)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListChangeSetsOutput {
    #[serde(rename = "ChangeSetSummaryList")]
    pub change_set_summary_list: Option<Vec<crate::model::ChangeSetSummaryListItem>>,
    /// The token value retrieved from a previous call to access the next page of results. Responses carry the token of the next page, absent after the last page.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}
impl ListChangeSetsOutput {
    pub fn change_set_summary_list(&self) -> Option<&[crate::model::ChangeSetSummaryListItem]> {
        self.change_set_summary_list.as_deref()
    }
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListChangeSetsOutput`](crate::output::ListChangeSetsOutput)
pub mod list_change_sets_output {
    /// A builder for [`ListChangeSetsOutput`](crate::output::ListChangeSetsOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) change_set_summary_list: Option<Vec<crate::model::ChangeSetSummaryListItem>>,
        pub(crate) next_token: Option<String>,
    }
    impl Builder {
        /// Appends an item to `change_set_summary_list`
        pub fn change_set_summary_list(
            mut self,
            input: impl Into<crate::model::ChangeSetSummaryListItem>,
        ) -> Self {
            let mut v = self.change_set_summary_list.unwrap_or_default();
            v.push(input.into());
            self.change_set_summary_list = Some(v);
            self
        }
        pub fn set_change_set_summary_list(
            mut self,
            input: Option<Vec<crate::model::ChangeSetSummaryListItem>>,
        ) -> Self {
            self.change_set_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListChangeSetsOutput`](crate::output::ListChangeSetsOutput)
        pub fn build(self) -> crate::output::ListChangeSetsOutput {
            crate::output::ListChangeSetsOutput {
                change_set_summary_list: self.change_set_summary_list,
                next_token: self.next_token,
            }
        }
    }
}
impl ListChangeSetsOutput {
    /// Creates a new builder-style object to manufacture [`ListChangeSetsOutput`](crate::output::ListChangeSetsOutput)
    pub fn builder() -> crate::output::list_change_sets_output::Builder {
        crate::output::list_change_sets_output::Builder::default()
    }
}

/// Output of [`ListEntities`](crate::operation::ListEntities)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListEntitiesOutput {
    #[serde(rename = "EntitySummaryList")]
    pub entity_summary_list: Option<Vec<crate::model::EntitySummary>>,
    /// The token value retrieved from a previous call to access the next page of results. Responses carry the token of the next page, absent after the last page.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}
impl ListEntitiesOutput {
    pub fn entity_summary_list(&self) -> Option<&[crate::model::EntitySummary]> {
        self.entity_summary_list.as_deref()
    }
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListEntitiesOutput`](crate::output::ListEntitiesOutput)
pub mod list_entities_output {
    /// A builder for [`ListEntitiesOutput`](crate::output::ListEntitiesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) entity_summary_list: Option<Vec<crate::model::EntitySummary>>,
        pub(crate) next_token: Option<String>,
    }
    impl Builder {
        /// Appends an item to `entity_summary_list`
        pub fn entity_summary_list(
            mut self,
            input: impl Into<crate::model::EntitySummary>,
        ) -> Self {
            let mut v = self.entity_summary_list.unwrap_or_default();
            v.push(input.into());
            self.entity_summary_list = Some(v);
            self
        }
        pub fn set_entity_summary_list(
            mut self,
            input: Option<Vec<crate::model::EntitySummary>>,
        ) -> Self {
            self.entity_summary_list = input;
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
        /// Consumes the builder and constructs a [`ListEntitiesOutput`](crate::output::ListEntitiesOutput)
        pub fn build(self) -> crate::output::ListEntitiesOutput {
            crate::output::ListEntitiesOutput {
                entity_summary_list: self.entity_summary_list,
                next_token: self.next_token,
            }
        }
    }
}
impl ListEntitiesOutput {
    /// Creates a new builder-style object to manufacture [`ListEntitiesOutput`](crate::output::ListEntitiesOutput)
    pub fn builder() -> crate::output::list_entities_output::Builder {
        crate::output::list_entities_output::Builder::default()
    }
}

/// Output of [`StartChangeSet`](crate::operation::StartChangeSet)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct StartChangeSetOutput {
    /// Unique identifier for the change set.
    ///
    /// Length: 1 - 255
    #[serde(rename = "ChangeSetId")]
    pub change_set_id: Option<String>,
    /// The ARN associated with the change set.
    ///
    /// Length: 1 - 2048
    #[serde(rename = "ChangeSetArn")]
    pub change_set_arn: Option<String>,
}
impl StartChangeSetOutput {
    pub fn change_set_id(&self) -> Option<&str> {
        self.change_set_id.as_deref()
    }
    pub fn change_set_arn(&self) -> Option<&str> {
        self.change_set_arn.as_deref()
    }
}
/// See [`StartChangeSetOutput`](crate::output::StartChangeSetOutput)
pub mod start_change_set_output {
    /// A builder for [`StartChangeSetOutput`](crate::output::StartChangeSetOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) change_set_id: Option<String>,
        pub(crate) change_set_arn: Option<String>,
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
        /// Consumes the builder and constructs a [`StartChangeSetOutput`](crate::output::StartChangeSetOutput)
        pub fn build(self) -> crate::output::StartChangeSetOutput {
            crate::output::StartChangeSetOutput {
                change_set_id: self.change_set_id,
                change_set_arn: self.change_set_arn,
            }
        }
    }
}
impl StartChangeSetOutput {
    /// Creates a new builder-style object to manufacture [`StartChangeSetOutput`](crate::output::StartChangeSetOutput)
    pub fn builder() -> crate::output::start_change_set_output::Builder {
        crate::output::start_change_set_output::Builder::default()
    }
}
