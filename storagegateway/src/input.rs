/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs, serialized as AWS JSON 1.1 request bodies

use serde::Serialize;

/// Input of [`ActivateGateway`](crate::operation::ActivateGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ActivateGatewayInput {
    #[serde(rename = "ActivationKey", skip_serializing_if = "Option::is_none")]
    pub activation_key: Option<String>,
    #[serde(rename = "GatewayName", skip_serializing_if = "Option::is_none")]
    pub gateway_name: Option<String>,
    /// A value that indicates the time zone of the gateway, e.g. `GMT-4:00`.
    #[serde(rename = "GatewayTimezone", skip_serializing_if = "Option::is_none")]
    pub gateway_timezone: Option<String>,
    #[serde(rename = "GatewayRegion", skip_serializing_if = "Option::is_none")]
    pub gateway_region: Option<String>,
    #[serde(rename = "GatewayType", skip_serializing_if = "Option::is_none")]
    pub gateway_type: Option<String>,
    #[serde(rename = "TapeDriveType", skip_serializing_if = "Option::is_none")]
    pub tape_drive_type: Option<String>,
    #[serde(rename = "MediumChangerType", skip_serializing_if = "Option::is_none")]
    pub medium_changer_type: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl ActivateGatewayInput {
    pub fn activation_key(&self) -> Option<&str> {
        self.activation_key.as_deref()
    }
    pub fn gateway_name(&self) -> Option<&str> {
        self.gateway_name.as_deref()
    }
    pub fn gateway_timezone(&self) -> Option<&str> {
        self.gateway_timezone.as_deref()
    }
    pub fn gateway_region(&self) -> Option<&str> {
        self.gateway_region.as_deref()
    }
    pub fn gateway_type(&self) -> Option<&str> {
        self.gateway_type.as_deref()
    }
    pub fn tape_drive_type(&self) -> Option<&str> {
        self.tape_drive_type.as_deref()
    }
    pub fn medium_changer_type(&self) -> Option<&str> {
        self.medium_changer_type.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`ActivateGatewayInput`](crate::input::ActivateGatewayInput)
pub mod activate_gateway_input {
    /// A builder for [`ActivateGatewayInput`](crate::input::ActivateGatewayInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) activation_key: Option<String>,
        pub(crate) gateway_name: Option<String>,
        pub(crate) gateway_timezone: Option<String>,
        pub(crate) gateway_region: Option<String>,
        pub(crate) gateway_type: Option<String>,
        pub(crate) tape_drive_type: Option<String>,
        pub(crate) medium_changer_type: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn activation_key(mut self, input: impl Into<String>) -> Self {
            self.activation_key = Some(input.into());
            self
        }
        pub fn set_activation_key(mut self, input: Option<String>) -> Self {
            self.activation_key = input;
            self
        }
        pub fn gateway_name(mut self, input: impl Into<String>) -> Self {
            self.gateway_name = Some(input.into());
            self
        }
        pub fn set_gateway_name(mut self, input: Option<String>) -> Self {
            self.gateway_name = input;
            self
        }
        pub fn gateway_timezone(mut self, input: impl Into<String>) -> Self {
            self.gateway_timezone = Some(input.into());
            self
        }
        pub fn set_gateway_timezone(mut self, input: Option<String>) -> Self {
            self.gateway_timezone = input;
            self
        }
        pub fn gateway_region(mut self, input: impl Into<String>) -> Self {
            self.gateway_region = Some(input.into());
            self
        }
        pub fn set_gateway_region(mut self, input: Option<String>) -> Self {
            self.gateway_region = input;
            self
        }
        pub fn gateway_type(mut self, input: impl Into<String>) -> Self {
            self.gateway_type = Some(input.into());
            self
        }
        pub fn set_gateway_type(mut self, input: Option<String>) -> Self {
            self.gateway_type = input;
            self
        }
        pub fn tape_drive_type(mut self, input: impl Into<String>) -> Self {
            self.tape_drive_type = Some(input.into());
            self
        }
        pub fn set_tape_drive_type(mut self, input: Option<String>) -> Self {
            self.tape_drive_type = input;
            self
        }
        pub fn medium_changer_type(mut self, input: impl Into<String>) -> Self {
            self.medium_changer_type = Some(input.into());
            self
        }
        pub fn set_medium_changer_type(mut self, input: Option<String>) -> Self {
            self.medium_changer_type = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ActivateGateway`](crate::operation::ActivateGateway)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ActivateGateway,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ActivateGatewayInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ActivateGatewayInput {
        fn from(builder: Builder) -> Self {
            crate::input::ActivateGatewayInput {
                activation_key: builder.activation_key,
                gateway_name: builder.gateway_name,
                gateway_timezone: builder.gateway_timezone,
                gateway_region: builder.gateway_region,
                gateway_type: builder.gateway_type,
                tape_drive_type: builder.tape_drive_type,
                medium_changer_type: builder.medium_changer_type,
                tags: builder.tags,
            }
        }
    }
}
impl ActivateGatewayInput {
    /// Creates a new builder-style object to manufacture [`ActivateGatewayInput`](crate::input::ActivateGatewayInput)
    pub fn builder() -> crate::input::activate_gateway_input::Builder {
        crate::input::activate_gateway_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ActivateGateway,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ActivateGateway",
            crate::operation::ActivateGateway::new(),
            config,
        )
    }
}

/// Input of [`AddCache`](crate::operation::AddCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct AddCacheInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// Disk identifiers, as returned by `ListLocalDisks`.
    #[serde(rename = "DiskIds", skip_serializing_if = "Option::is_none")]
    pub disk_ids: Option<Vec<String>>,
}
impl AddCacheInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disk_ids(&self) -> Option<&[String]> {
        self.disk_ids.as_deref()
    }
}
/// See [`AddCacheInput`](crate::input::AddCacheInput)
pub mod add_cache_input {
    /// A builder for [`AddCacheInput`](crate::input::AddCacheInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disk_ids: Option<Vec<String>>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Appends an item to `disk_ids`
        pub fn disk_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.disk_ids.unwrap_or_default();
            v.push(input.into());
            self.disk_ids = Some(v);
            self
        }
        pub fn set_disk_ids(mut self, input: Option<Vec<String>>) -> Self {
            self.disk_ids = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`AddCache`](crate::operation::AddCache)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::AddCache,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::AddCacheInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::AddCacheInput {
        fn from(builder: Builder) -> Self {
            crate::input::AddCacheInput {
                gateway_arn: builder.gateway_arn,
                disk_ids: builder.disk_ids,
            }
        }
    }
}
impl AddCacheInput {
    /// Creates a new builder-style object to manufacture [`AddCacheInput`](crate::input::AddCacheInput)
    pub fn builder() -> crate::input::add_cache_input::Builder {
        crate::input::add_cache_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::AddCache,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "AddCache",
            crate::operation::AddCache::new(),
            config,
        )
    }
}

/// Input of [`AddTagsToResource`](crate::operation::AddTagsToResource)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct AddTagsToResourceInput {
    /// The Amazon Resource Name (ARN) of the resource.
    ///
    /// Length: 50 - 500
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl AddTagsToResourceInput {
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput)
pub mod add_tags_to_resource_input {
    /// A builder for [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: Option<String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`AddTagsToResource`](crate::operation::AddTagsToResource)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::AddTagsToResource,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::AddTagsToResourceInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::AddTagsToResourceInput {
        fn from(builder: Builder) -> Self {
            crate::input::AddTagsToResourceInput {
                resource_arn: builder.resource_arn,
                tags: builder.tags,
            }
        }
    }
}
impl AddTagsToResourceInput {
    /// Creates a new builder-style object to manufacture [`AddTagsToResourceInput`](crate::input::AddTagsToResourceInput)
    pub fn builder() -> crate::input::add_tags_to_resource_input::Builder {
        crate::input::add_tags_to_resource_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::AddTagsToResource,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "AddTagsToResource",
            crate::operation::AddTagsToResource::new(),
            config,
        )
    }
}

/// Input of [`AddUploadBuffer`](crate::operation::AddUploadBuffer)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct AddUploadBufferInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// Disk identifiers, as returned by `ListLocalDisks`.
    #[serde(rename = "DiskIds", skip_serializing_if = "Option::is_none")]
    pub disk_ids: Option<Vec<String>>,
}
impl AddUploadBufferInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disk_ids(&self) -> Option<&[String]> {
        self.disk_ids.as_deref()
    }
}
/// See [`AddUploadBufferInput`](crate::input::AddUploadBufferInput)
pub mod add_upload_buffer_input {
    /// A builder for [`AddUploadBufferInput`](crate::input::AddUploadBufferInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disk_ids: Option<Vec<String>>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Appends an item to `disk_ids`
        pub fn disk_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.disk_ids.unwrap_or_default();
            v.push(input.into());
            self.disk_ids = Some(v);
            self
        }
        pub fn set_disk_ids(mut self, input: Option<Vec<String>>) -> Self {
            self.disk_ids = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`AddUploadBuffer`](crate::operation::AddUploadBuffer)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::AddUploadBuffer,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::AddUploadBufferInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::AddUploadBufferInput {
        fn from(builder: Builder) -> Self {
            crate::input::AddUploadBufferInput {
                gateway_arn: builder.gateway_arn,
                disk_ids: builder.disk_ids,
            }
        }
    }
}
impl AddUploadBufferInput {
    /// Creates a new builder-style object to manufacture [`AddUploadBufferInput`](crate::input::AddUploadBufferInput)
    pub fn builder() -> crate::input::add_upload_buffer_input::Builder {
        crate::input::add_upload_buffer_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::AddUploadBuffer,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "AddUploadBuffer",
            crate::operation::AddUploadBuffer::new(),
            config,
        )
    }
}

/// Input of [`AddWorkingStorage`](crate::operation::AddWorkingStorage)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct AddWorkingStorageInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// Disk identifiers, as returned by `ListLocalDisks`.
    #[serde(rename = "DiskIds", skip_serializing_if = "Option::is_none")]
    pub disk_ids: Option<Vec<String>>,
}
impl AddWorkingStorageInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disk_ids(&self) -> Option<&[String]> {
        self.disk_ids.as_deref()
    }
}
/// See [`AddWorkingStorageInput`](crate::input::AddWorkingStorageInput)
pub mod add_working_storage_input {
    /// A builder for [`AddWorkingStorageInput`](crate::input::AddWorkingStorageInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disk_ids: Option<Vec<String>>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Appends an item to `disk_ids`
        pub fn disk_ids(mut self, input: impl Into<String>) -> Self {
            let mut v = self.disk_ids.unwrap_or_default();
            v.push(input.into());
            self.disk_ids = Some(v);
            self
        }
        pub fn set_disk_ids(mut self, input: Option<Vec<String>>) -> Self {
            self.disk_ids = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`AddWorkingStorage`](crate::operation::AddWorkingStorage)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::AddWorkingStorage,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::AddWorkingStorageInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::AddWorkingStorageInput {
        fn from(builder: Builder) -> Self {
            crate::input::AddWorkingStorageInput {
                gateway_arn: builder.gateway_arn,
                disk_ids: builder.disk_ids,
            }
        }
    }
}
impl AddWorkingStorageInput {
    /// Creates a new builder-style object to manufacture [`AddWorkingStorageInput`](crate::input::AddWorkingStorageInput)
    pub fn builder() -> crate::input::add_working_storage_input::Builder {
        crate::input::add_working_storage_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::AddWorkingStorage,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "AddWorkingStorage",
            crate::operation::AddWorkingStorage::new(),
            config,
        )
    }
}

/// Input of [`AssignTapePool`](crate::operation::AssignTapePool)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct AssignTapePoolInput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
    /// The ID of the pool that contains the tape: `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 - 100
    #[serde(rename = "PoolId", skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
}
impl AssignTapePoolInput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
    pub fn pool_id(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }
}
/// See [`AssignTapePoolInput`](crate::input::AssignTapePoolInput)
pub mod assign_tape_pool_input {
    /// A builder for [`AssignTapePoolInput`](crate::input::AssignTapePoolInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
        pub(crate) pool_id: Option<String>,
    }
    impl Builder {
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        pub fn set_tape_arn(mut self, input: Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        pub fn pool_id(mut self, input: impl Into<String>) -> Self {
            self.pool_id = Some(input.into());
            self
        }
        pub fn set_pool_id(mut self, input: Option<String>) -> Self {
            self.pool_id = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`AssignTapePool`](crate::operation::AssignTapePool)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::AssignTapePool,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::AssignTapePoolInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::AssignTapePoolInput {
        fn from(builder: Builder) -> Self {
            crate::input::AssignTapePoolInput {
                tape_arn: builder.tape_arn,
                pool_id: builder.pool_id,
            }
        }
    }
}
impl AssignTapePoolInput {
    /// Creates a new builder-style object to manufacture [`AssignTapePoolInput`](crate::input::AssignTapePoolInput)
    pub fn builder() -> crate::input::assign_tape_pool_input::Builder {
        crate::input::assign_tape_pool_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::AssignTapePool,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "AssignTapePool",
            crate::operation::AssignTapePool::new(),
            config,
        )
    }
}

/// Input of [`AttachVolume`](crate::operation::AttachVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct AttachVolumeInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 - 200
    #[serde(rename = "TargetName", skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "DiskId", skip_serializing_if = "Option::is_none")]
    pub disk_id: Option<String>,
}
impl AttachVolumeInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }
    pub fn disk_id(&self) -> Option<&str> {
        self.disk_id.as_deref()
    }
}
/// See [`AttachVolumeInput`](crate::input::AttachVolumeInput)
pub mod attach_volume_input {
    /// A builder for [`AttachVolumeInput`](crate::input::AttachVolumeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) target_name: Option<String>,
        pub(crate) volume_arn: Option<String>,
        pub(crate) network_interface_id: Option<String>,
        pub(crate) disk_id: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn target_name(mut self, input: impl Into<String>) -> Self {
            self.target_name = Some(input.into());
            self
        }
        pub fn set_target_name(mut self, input: Option<String>) -> Self {
            self.target_name = input;
            self
        }
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        pub fn network_interface_id(mut self, input: impl Into<String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        pub fn set_network_interface_id(mut self, input: Option<String>) -> Self {
            self.network_interface_id = input;
            self
        }
        pub fn disk_id(mut self, input: impl Into<String>) -> Self {
            self.disk_id = Some(input.into());
            self
        }
        pub fn set_disk_id(mut self, input: Option<String>) -> Self {
            self.disk_id = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`AttachVolume`](crate::operation::AttachVolume)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::AttachVolume,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::AttachVolumeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::AttachVolumeInput {
        fn from(builder: Builder) -> Self {
            crate::input::AttachVolumeInput {
                gateway_arn: builder.gateway_arn,
                target_name: builder.target_name,
                volume_arn: builder.volume_arn,
                network_interface_id: builder.network_interface_id,
                disk_id: builder.disk_id,
            }
        }
    }
}
impl AttachVolumeInput {
    /// Creates a new builder-style object to manufacture [`AttachVolumeInput`](crate::input::AttachVolumeInput)
    pub fn builder() -> crate::input::attach_volume_input::Builder {
        crate::input::attach_volume_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::AttachVolume,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "AttachVolume",
            crate::operation::AttachVolume::new(),
            config,
        )
    }
}

/// Input of [`CancelArchival`](crate::operation::CancelArchival)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CancelArchivalInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
}
impl CancelArchivalInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`CancelArchivalInput`](crate::input::CancelArchivalInput)
pub mod cancel_archival_input {
    /// A builder for [`CancelArchivalInput`](crate::input::CancelArchivalInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) tape_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        pub fn set_tape_arn(mut self, input: Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CancelArchival`](crate::operation::CancelArchival)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CancelArchival,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CancelArchivalInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CancelArchivalInput {
        fn from(builder: Builder) -> Self {
            crate::input::CancelArchivalInput {
                gateway_arn: builder.gateway_arn,
                tape_arn: builder.tape_arn,
            }
        }
    }
}
impl CancelArchivalInput {
    /// Creates a new builder-style object to manufacture [`CancelArchivalInput`](crate::input::CancelArchivalInput)
    pub fn builder() -> crate::input::cancel_archival_input::Builder {
        crate::input::cancel_archival_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CancelArchival,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CancelArchival",
            crate::operation::CancelArchival::new(),
            config,
        )
    }
}

/// Input of [`CancelRetrieval`](crate::operation::CancelRetrieval)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CancelRetrievalInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
}
impl CancelRetrievalInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`CancelRetrievalInput`](crate::input::CancelRetrievalInput)
pub mod cancel_retrieval_input {
    /// A builder for [`CancelRetrievalInput`](crate::input::CancelRetrievalInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) tape_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        pub fn set_tape_arn(mut self, input: Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CancelRetrieval`](crate::operation::CancelRetrieval)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CancelRetrieval,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CancelRetrievalInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CancelRetrievalInput {
        fn from(builder: Builder) -> Self {
            crate::input::CancelRetrievalInput {
                gateway_arn: builder.gateway_arn,
                tape_arn: builder.tape_arn,
            }
        }
    }
}
impl CancelRetrievalInput {
    /// Creates a new builder-style object to manufacture [`CancelRetrievalInput`](crate::input::CancelRetrievalInput)
    pub fn builder() -> crate::input::cancel_retrieval_input::Builder {
        crate::input::cancel_retrieval_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CancelRetrieval,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CancelRetrieval",
            crate::operation::CancelRetrieval::new(),
            config,
        )
    }
}

/// Input of [`CreateCachediScsiVolume`](crate::operation::CreateCachediScsiVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateCachediScsiVolumeInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "VolumeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_bytes: Option<i64>,
    /// The snapshot ID (e.g. `snap-1122aabb`) of the snapshot to restore as the new volume.
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 - 200
    #[serde(rename = "TargetName", skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(rename = "SourceVolumeARN", skip_serializing_if = "Option::is_none")]
    pub source_volume_arn: Option<String>,
    /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// A unique string used to ensure idempotent creation.
    ///
    /// Length: 5 - 100
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, false to use a key managed by Amazon S3.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateCachediScsiVolumeInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn volume_size_in_bytes(&self) -> Option<i64> {
        self.volume_size_in_bytes
    }
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }
    pub fn source_volume_arn(&self) -> Option<&str> {
        self.source_volume_arn.as_deref()
    }
    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }
    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateCachediScsiVolumeInput`](crate::input::CreateCachediScsiVolumeInput)
pub mod create_cachedi_scsi_volume_input {
    /// A builder for [`CreateCachediScsiVolumeInput`](crate::input::CreateCachediScsiVolumeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) volume_size_in_bytes: Option<i64>,
        pub(crate) snapshot_id: Option<String>,
        pub(crate) target_name: Option<String>,
        pub(crate) source_volume_arn: Option<String>,
        pub(crate) network_interface_id: Option<String>,
        pub(crate) client_token: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn volume_size_in_bytes(mut self, input: i64) -> Self {
            self.volume_size_in_bytes = Some(input);
            self
        }
        pub fn set_volume_size_in_bytes(mut self, input: Option<i64>) -> Self {
            self.volume_size_in_bytes = input;
            self
        }
        pub fn snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        pub fn set_snapshot_id(mut self, input: Option<String>) -> Self {
            self.snapshot_id = input;
            self
        }
        pub fn target_name(mut self, input: impl Into<String>) -> Self {
            self.target_name = Some(input.into());
            self
        }
        pub fn set_target_name(mut self, input: Option<String>) -> Self {
            self.target_name = input;
            self
        }
        pub fn source_volume_arn(mut self, input: impl Into<String>) -> Self {
            self.source_volume_arn = Some(input.into());
            self
        }
        pub fn set_source_volume_arn(mut self, input: Option<String>) -> Self {
            self.source_volume_arn = input;
            self
        }
        pub fn network_interface_id(mut self, input: impl Into<String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        pub fn set_network_interface_id(mut self, input: Option<String>) -> Self {
            self.network_interface_id = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: Option<String>) -> Self {
            self.client_token = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateCachediScsiVolume`](crate::operation::CreateCachediScsiVolume)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateCachediScsiVolume,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateCachediScsiVolumeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateCachediScsiVolumeInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateCachediScsiVolumeInput {
                gateway_arn: builder.gateway_arn,
                volume_size_in_bytes: builder.volume_size_in_bytes,
                snapshot_id: builder.snapshot_id,
                target_name: builder.target_name,
                source_volume_arn: builder.source_volume_arn,
                network_interface_id: builder.network_interface_id,
                client_token: builder.client_token,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                tags: builder.tags,
            }
        }
    }
}
impl CreateCachediScsiVolumeInput {
    /// Creates a new builder-style object to manufacture [`CreateCachediScsiVolumeInput`](crate::input::CreateCachediScsiVolumeInput)
    pub fn builder() -> crate::input::create_cachedi_scsi_volume_input::Builder {
        crate::input::create_cachedi_scsi_volume_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateCachediScsiVolume,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateCachediSCSIVolume",
            crate::operation::CreateCachediScsiVolume::new(),
            config,
        )
    }
}

/// Input of [`CreateNfsFileShare`](crate::operation::CreateNfsFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateNfsFileShareInput {
    /// A unique string used to ensure idempotent creation.
    ///
    /// Length: 5 - 100
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "NFSFileShareDefaults", skip_serializing_if = "Option::is_none")]
    pub nfs_file_share_defaults: Option<crate::model::NfsFileShareDefaults>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, false to use a key managed by Amazon S3.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "LocationARN", skip_serializing_if = "Option::is_none")]
    pub location_arn: Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway: `S3_STANDARD`, `S3_STANDARD_IA` or `S3_ONEZONE_IA`.
    ///
    /// Length: 5 - 50
    #[serde(rename = "DefaultStorageClass", skip_serializing_if = "Option::is_none")]
    pub default_storage_class: Option<String>,
    /// A value that sets the access control list permission for objects in the S3 bucket that a file gateway puts objects into.
    #[serde(rename = "ObjectACL", skip_serializing_if = "Option::is_none")]
    pub object_acl: Option<crate::model::ObjectAcl>,
    #[serde(rename = "ClientList", skip_serializing_if = "Option::is_none")]
    pub client_list: Option<Vec<String>>,
    #[serde(rename = "Squash", skip_serializing_if = "Option::is_none")]
    pub squash: Option<String>,
    #[serde(rename = "ReadOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "Option::is_none")]
    pub guess_mime_type_enabled: Option<bool>,
    #[serde(rename = "RequesterPays", skip_serializing_if = "Option::is_none")]
    pub requester_pays: Option<bool>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateNfsFileShareInput {
    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }
    pub fn nfs_file_share_defaults(&self) -> Option<&crate::model::NfsFileShareDefaults> {
        self.nfs_file_share_defaults.as_ref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
    pub fn location_arn(&self) -> Option<&str> {
        self.location_arn.as_deref()
    }
    pub fn default_storage_class(&self) -> Option<&str> {
        self.default_storage_class.as_deref()
    }
    pub fn object_acl(&self) -> Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }
    pub fn client_list(&self) -> Option<&[String]> {
        self.client_list.as_deref()
    }
    pub fn squash(&self) -> Option<&str> {
        self.squash.as_deref()
    }
    pub fn read_only(&self) -> Option<bool> {
        self.read_only
    }
    pub fn guess_mime_type_enabled(&self) -> Option<bool> {
        self.guess_mime_type_enabled
    }
    pub fn requester_pays(&self) -> Option<bool> {
        self.requester_pays
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput)
pub mod create_nfs_file_share_input {
    /// A builder for [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) client_token: Option<String>,
        pub(crate) nfs_file_share_defaults: Option<crate::model::NfsFileShareDefaults>,
        pub(crate) gateway_arn: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) role: Option<String>,
        pub(crate) location_arn: Option<String>,
        pub(crate) default_storage_class: Option<String>,
        pub(crate) object_acl: Option<crate::model::ObjectAcl>,
        pub(crate) client_list: Option<Vec<String>>,
        pub(crate) squash: Option<String>,
        pub(crate) read_only: Option<bool>,
        pub(crate) guess_mime_type_enabled: Option<bool>,
        pub(crate) requester_pays: Option<bool>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn client_token(mut self, input: impl Into<String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: Option<String>) -> Self {
            self.client_token = input;
            self
        }
        pub fn nfs_file_share_defaults(
            mut self,
            input: crate::model::NfsFileShareDefaults,
        ) -> Self {
            self.nfs_file_share_defaults = Some(input);
            self
        }
        pub fn set_nfs_file_share_defaults(
            mut self,
            input: Option<crate::model::NfsFileShareDefaults>,
        ) -> Self {
            self.nfs_file_share_defaults = input;
            self
        }
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }
        pub fn set_role(mut self, input: Option<String>) -> Self {
            self.role = input;
            self
        }
        pub fn location_arn(mut self, input: impl Into<String>) -> Self {
            self.location_arn = Some(input.into());
            self
        }
        pub fn set_location_arn(mut self, input: Option<String>) -> Self {
            self.location_arn = input;
            self
        }
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        pub fn set_default_storage_class(mut self, input: Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        pub fn object_acl(mut self, input: crate::model::ObjectAcl) -> Self {
            self.object_acl = Some(input);
            self
        }
        pub fn set_object_acl(mut self, input: Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// Appends an item to `client_list`
        pub fn client_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.client_list.unwrap_or_default();
            v.push(input.into());
            self.client_list = Some(v);
            self
        }
        pub fn set_client_list(mut self, input: Option<Vec<String>>) -> Self {
            self.client_list = input;
            self
        }
        pub fn squash(mut self, input: impl Into<String>) -> Self {
            self.squash = Some(input.into());
            self
        }
        pub fn set_squash(mut self, input: Option<String>) -> Self {
            self.squash = input;
            self
        }
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        pub fn set_read_only(mut self, input: Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        pub fn set_guess_mime_type_enabled(mut self, input: Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        pub fn set_requester_pays(mut self, input: Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateNfsFileShare`](crate::operation::CreateNfsFileShare)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateNfsFileShare,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateNfsFileShareInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateNfsFileShareInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateNfsFileShareInput {
                client_token: builder.client_token,
                nfs_file_share_defaults: builder.nfs_file_share_defaults,
                gateway_arn: builder.gateway_arn,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                role: builder.role,
                location_arn: builder.location_arn,
                default_storage_class: builder.default_storage_class,
                object_acl: builder.object_acl,
                client_list: builder.client_list,
                squash: builder.squash,
                read_only: builder.read_only,
                guess_mime_type_enabled: builder.guess_mime_type_enabled,
                requester_pays: builder.requester_pays,
                tags: builder.tags,
            }
        }
    }
}
impl CreateNfsFileShareInput {
    /// Creates a new builder-style object to manufacture [`CreateNfsFileShareInput`](crate::input::CreateNfsFileShareInput)
    pub fn builder() -> crate::input::create_nfs_file_share_input::Builder {
        crate::input::create_nfs_file_share_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateNfsFileShare,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateNFSFileShare",
            crate::operation::CreateNfsFileShare::new(),
            config,
        )
    }
}

/// Input of [`CreateSmbFileShare`](crate::operation::CreateSmbFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateSmbFileShareInput {
    /// A unique string used to ensure idempotent creation.
    ///
    /// Length: 5 - 100
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, false to use a key managed by Amazon S3.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "LocationARN", skip_serializing_if = "Option::is_none")]
    pub location_arn: Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway: `S3_STANDARD`, `S3_STANDARD_IA` or `S3_ONEZONE_IA`.
    ///
    /// Length: 5 - 50
    #[serde(rename = "DefaultStorageClass", skip_serializing_if = "Option::is_none")]
    pub default_storage_class: Option<String>,
    /// A value that sets the access control list permission for objects in the S3 bucket that a file gateway puts objects into.
    #[serde(rename = "ObjectACL", skip_serializing_if = "Option::is_none")]
    pub object_acl: Option<crate::model::ObjectAcl>,
    #[serde(rename = "ReadOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "Option::is_none")]
    pub guess_mime_type_enabled: Option<bool>,
    #[serde(rename = "RequesterPays", skip_serializing_if = "Option::is_none")]
    pub requester_pays: Option<bool>,
    #[serde(rename = "SMBACLEnabled", skip_serializing_if = "Option::is_none")]
    pub smbacl_enabled: Option<bool>,
    #[serde(rename = "AdminUserList", skip_serializing_if = "Option::is_none")]
    pub admin_user_list: Option<Vec<String>>,
    #[serde(rename = "ValidUserList", skip_serializing_if = "Option::is_none")]
    pub valid_user_list: Option<Vec<String>>,
    #[serde(rename = "InvalidUserList", skip_serializing_if = "Option::is_none")]
    pub invalid_user_list: Option<Vec<String>>,
    #[serde(rename = "AuditDestinationARN", skip_serializing_if = "Option::is_none")]
    pub audit_destination_arn: Option<String>,
    #[serde(rename = "Authentication", skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateSmbFileShareInput {
    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
    pub fn location_arn(&self) -> Option<&str> {
        self.location_arn.as_deref()
    }
    pub fn default_storage_class(&self) -> Option<&str> {
        self.default_storage_class.as_deref()
    }
    pub fn object_acl(&self) -> Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }
    pub fn read_only(&self) -> Option<bool> {
        self.read_only
    }
    pub fn guess_mime_type_enabled(&self) -> Option<bool> {
        self.guess_mime_type_enabled
    }
    pub fn requester_pays(&self) -> Option<bool> {
        self.requester_pays
    }
    pub fn smbacl_enabled(&self) -> Option<bool> {
        self.smbacl_enabled
    }
    pub fn admin_user_list(&self) -> Option<&[String]> {
        self.admin_user_list.as_deref()
    }
    pub fn valid_user_list(&self) -> Option<&[String]> {
        self.valid_user_list.as_deref()
    }
    pub fn invalid_user_list(&self) -> Option<&[String]> {
        self.invalid_user_list.as_deref()
    }
    pub fn audit_destination_arn(&self) -> Option<&str> {
        self.audit_destination_arn.as_deref()
    }
    pub fn authentication(&self) -> Option<&str> {
        self.authentication.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput)
pub mod create_smb_file_share_input {
    /// A builder for [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) client_token: Option<String>,
        pub(crate) gateway_arn: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) role: Option<String>,
        pub(crate) location_arn: Option<String>,
        pub(crate) default_storage_class: Option<String>,
        pub(crate) object_acl: Option<crate::model::ObjectAcl>,
        pub(crate) read_only: Option<bool>,
        pub(crate) guess_mime_type_enabled: Option<bool>,
        pub(crate) requester_pays: Option<bool>,
        pub(crate) smbacl_enabled: Option<bool>,
        pub(crate) admin_user_list: Option<Vec<String>>,
        pub(crate) valid_user_list: Option<Vec<String>>,
        pub(crate) invalid_user_list: Option<Vec<String>>,
        pub(crate) audit_destination_arn: Option<String>,
        pub(crate) authentication: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn client_token(mut self, input: impl Into<String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: Option<String>) -> Self {
            self.client_token = input;
            self
        }
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        pub fn role(mut self, input: impl Into<String>) -> Self {
            self.role = Some(input.into());
            self
        }
        pub fn set_role(mut self, input: Option<String>) -> Self {
            self.role = input;
            self
        }
        pub fn location_arn(mut self, input: impl Into<String>) -> Self {
            self.location_arn = Some(input.into());
            self
        }
        pub fn set_location_arn(mut self, input: Option<String>) -> Self {
            self.location_arn = input;
            self
        }
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        pub fn set_default_storage_class(mut self, input: Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        pub fn object_acl(mut self, input: crate::model::ObjectAcl) -> Self {
            self.object_acl = Some(input);
            self
        }
        pub fn set_object_acl(mut self, input: Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        pub fn set_read_only(mut self, input: Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        pub fn set_guess_mime_type_enabled(mut self, input: Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        pub fn set_requester_pays(mut self, input: Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        pub fn smbacl_enabled(mut self, input: bool) -> Self {
            self.smbacl_enabled = Some(input);
            self
        }
        pub fn set_smbacl_enabled(mut self, input: Option<bool>) -> Self {
            self.smbacl_enabled = input;
            self
        }
        /// Appends an item to `admin_user_list`
        pub fn admin_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.admin_user_list.unwrap_or_default();
            v.push(input.into());
            self.admin_user_list = Some(v);
            self
        }
        pub fn set_admin_user_list(mut self, input: Option<Vec<String>>) -> Self {
            self.admin_user_list = input;
            self
        }
        /// Appends an item to `valid_user_list`
        pub fn valid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.valid_user_list.unwrap_or_default();
            v.push(input.into());
            self.valid_user_list = Some(v);
            self
        }
        pub fn set_valid_user_list(mut self, input: Option<Vec<String>>) -> Self {
            self.valid_user_list = input;
            self
        }
        /// Appends an item to `invalid_user_list`
        pub fn invalid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.invalid_user_list.unwrap_or_default();
            v.push(input.into());
            self.invalid_user_list = Some(v);
            self
        }
        pub fn set_invalid_user_list(mut self, input: Option<Vec<String>>) -> Self {
            self.invalid_user_list = input;
            self
        }
        pub fn audit_destination_arn(mut self, input: impl Into<String>) -> Self {
            self.audit_destination_arn = Some(input.into());
            self
        }
        pub fn set_audit_destination_arn(mut self, input: Option<String>) -> Self {
            self.audit_destination_arn = input;
            self
        }
        pub fn authentication(mut self, input: impl Into<String>) -> Self {
            self.authentication = Some(input.into());
            self
        }
        pub fn set_authentication(mut self, input: Option<String>) -> Self {
            self.authentication = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateSmbFileShare`](crate::operation::CreateSmbFileShare)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateSmbFileShare,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateSmbFileShareInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateSmbFileShareInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateSmbFileShareInput {
                client_token: builder.client_token,
                gateway_arn: builder.gateway_arn,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                role: builder.role,
                location_arn: builder.location_arn,
                default_storage_class: builder.default_storage_class,
                object_acl: builder.object_acl,
                read_only: builder.read_only,
                guess_mime_type_enabled: builder.guess_mime_type_enabled,
                requester_pays: builder.requester_pays,
                smbacl_enabled: builder.smbacl_enabled,
                admin_user_list: builder.admin_user_list,
                valid_user_list: builder.valid_user_list,
                invalid_user_list: builder.invalid_user_list,
                audit_destination_arn: builder.audit_destination_arn,
                authentication: builder.authentication,
                tags: builder.tags,
            }
        }
    }
}
impl CreateSmbFileShareInput {
    /// Creates a new builder-style object to manufacture [`CreateSmbFileShareInput`](crate::input::CreateSmbFileShareInput)
    pub fn builder() -> crate::input::create_smb_file_share_input::Builder {
        crate::input::create_smb_file_share_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateSmbFileShare,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateSMBFileShare",
            crate::operation::CreateSmbFileShare::new(),
            config,
        )
    }
}

/// Input of [`CreateSnapshot`](crate::operation::CreateSnapshot)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateSnapshotInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "SnapshotDescription", skip_serializing_if = "Option::is_none")]
    pub snapshot_description: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateSnapshotInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn snapshot_description(&self) -> Option<&str> {
        self.snapshot_description.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateSnapshotInput`](crate::input::CreateSnapshotInput)
pub mod create_snapshot_input {
    /// A builder for [`CreateSnapshotInput`](crate::input::CreateSnapshotInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) snapshot_description: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        pub fn snapshot_description(mut self, input: impl Into<String>) -> Self {
            self.snapshot_description = Some(input.into());
            self
        }
        pub fn set_snapshot_description(mut self, input: Option<String>) -> Self {
            self.snapshot_description = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateSnapshot`](crate::operation::CreateSnapshot)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateSnapshot,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateSnapshotInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateSnapshotInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateSnapshotInput {
                volume_arn: builder.volume_arn,
                snapshot_description: builder.snapshot_description,
                tags: builder.tags,
            }
        }
    }
}
impl CreateSnapshotInput {
    /// Creates a new builder-style object to manufacture [`CreateSnapshotInput`](crate::input::CreateSnapshotInput)
    pub fn builder() -> crate::input::create_snapshot_input::Builder {
        crate::input::create_snapshot_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateSnapshot,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateSnapshot",
            crate::operation::CreateSnapshot::new(),
            config,
        )
    }
}

/// Input of [`CreateSnapshotFromVolumeRecoveryPoint`](crate::operation::CreateSnapshotFromVolumeRecoveryPoint)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateSnapshotFromVolumeRecoveryPointInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "SnapshotDescription", skip_serializing_if = "Option::is_none")]
    pub snapshot_description: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateSnapshotFromVolumeRecoveryPointInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn snapshot_description(&self) -> Option<&str> {
        self.snapshot_description.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateSnapshotFromVolumeRecoveryPointInput`](crate::input::CreateSnapshotFromVolumeRecoveryPointInput)
pub mod create_snapshot_from_volume_recovery_point_input {
    /// A builder for [`CreateSnapshotFromVolumeRecoveryPointInput`](crate::input::CreateSnapshotFromVolumeRecoveryPointInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) snapshot_description: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        pub fn snapshot_description(mut self, input: impl Into<String>) -> Self {
            self.snapshot_description = Some(input.into());
            self
        }
        pub fn set_snapshot_description(mut self, input: Option<String>) -> Self {
            self.snapshot_description = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateSnapshotFromVolumeRecoveryPoint`](crate::operation::CreateSnapshotFromVolumeRecoveryPoint)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateSnapshotFromVolumeRecoveryPoint,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateSnapshotFromVolumeRecoveryPointInput::from(self)
                .make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateSnapshotFromVolumeRecoveryPointInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateSnapshotFromVolumeRecoveryPointInput {
                volume_arn: builder.volume_arn,
                snapshot_description: builder.snapshot_description,
                tags: builder.tags,
            }
        }
    }
}
impl CreateSnapshotFromVolumeRecoveryPointInput {
    /// Creates a new builder-style object to manufacture [`CreateSnapshotFromVolumeRecoveryPointInput`](crate::input::CreateSnapshotFromVolumeRecoveryPointInput)
    pub fn builder() -> crate::input::create_snapshot_from_volume_recovery_point_input::Builder {
        crate::input::create_snapshot_from_volume_recovery_point_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateSnapshotFromVolumeRecoveryPoint,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateSnapshotFromVolumeRecoveryPoint",
            crate::operation::CreateSnapshotFromVolumeRecoveryPoint::new(),
            config,
        )
    }
}

/// Input of [`CreateStorediScsiVolume`](crate::operation::CreateStorediScsiVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateStorediScsiVolumeInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "DiskId", skip_serializing_if = "Option::is_none")]
    pub disk_id: Option<String>,
    /// The snapshot ID (e.g. `snap-1122aabb`) of the snapshot to restore as the new volume.
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(rename = "PreserveExistingData", skip_serializing_if = "Option::is_none")]
    pub preserve_existing_data: Option<bool>,
    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 - 200
    #[serde(rename = "TargetName", skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, false to use a key managed by Amazon S3.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateStorediScsiVolumeInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disk_id(&self) -> Option<&str> {
        self.disk_id.as_deref()
    }
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }
    pub fn preserve_existing_data(&self) -> Option<bool> {
        self.preserve_existing_data
    }
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }
    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput)
pub mod create_storedi_scsi_volume_input {
    /// A builder for [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disk_id: Option<String>,
        pub(crate) snapshot_id: Option<String>,
        pub(crate) preserve_existing_data: Option<bool>,
        pub(crate) target_name: Option<String>,
        pub(crate) network_interface_id: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn disk_id(mut self, input: impl Into<String>) -> Self {
            self.disk_id = Some(input.into());
            self
        }
        pub fn set_disk_id(mut self, input: Option<String>) -> Self {
            self.disk_id = input;
            self
        }
        pub fn snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        pub fn set_snapshot_id(mut self, input: Option<String>) -> Self {
            self.snapshot_id = input;
            self
        }
        pub fn preserve_existing_data(mut self, input: bool) -> Self {
            self.preserve_existing_data = Some(input);
            self
        }
        pub fn set_preserve_existing_data(mut self, input: Option<bool>) -> Self {
            self.preserve_existing_data = input;
            self
        }
        pub fn target_name(mut self, input: impl Into<String>) -> Self {
            self.target_name = Some(input.into());
            self
        }
        pub fn set_target_name(mut self, input: Option<String>) -> Self {
            self.target_name = input;
            self
        }
        pub fn network_interface_id(mut self, input: impl Into<String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        pub fn set_network_interface_id(mut self, input: Option<String>) -> Self {
            self.network_interface_id = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateStorediScsiVolume`](crate::operation::CreateStorediScsiVolume)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateStorediScsiVolume,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateStorediScsiVolumeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateStorediScsiVolumeInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateStorediScsiVolumeInput {
                gateway_arn: builder.gateway_arn,
                disk_id: builder.disk_id,
                snapshot_id: builder.snapshot_id,
                preserve_existing_data: builder.preserve_existing_data,
                target_name: builder.target_name,
                network_interface_id: builder.network_interface_id,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                tags: builder.tags,
            }
        }
    }
}
impl CreateStorediScsiVolumeInput {
    /// Creates a new builder-style object to manufacture [`CreateStorediScsiVolumeInput`](crate::input::CreateStorediScsiVolumeInput)
    pub fn builder() -> crate::input::create_storedi_scsi_volume_input::Builder {
        crate::input::create_storedi_scsi_volume_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateStorediScsiVolume,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateStorediSCSIVolume",
            crate::operation::CreateStorediScsiVolume::new(),
            config,
        )
    }
}

/// Input of [`CreateTapeWithBarcode`](crate::operation::CreateTapeWithBarcode)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateTapeWithBarcodeInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The size, in bytes, of the virtual tape.
    #[serde(rename = "TapeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_size_in_bytes: Option<i64>,
    #[serde(rename = "TapeBarcode", skip_serializing_if = "Option::is_none")]
    pub tape_barcode: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, false to use a key managed by Amazon S3.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// The ID of the pool that contains the tape: `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 - 100
    #[serde(rename = "PoolId", skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateTapeWithBarcodeInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn tape_size_in_bytes(&self) -> Option<i64> {
        self.tape_size_in_bytes
    }
    pub fn tape_barcode(&self) -> Option<&str> {
        self.tape_barcode.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn pool_id(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateTapeWithBarcodeInput`](crate::input::CreateTapeWithBarcodeInput)
pub mod create_tape_with_barcode_input {
    /// A builder for [`CreateTapeWithBarcodeInput`](crate::input::CreateTapeWithBarcodeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) tape_size_in_bytes: Option<i64>,
        pub(crate) tape_barcode: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) pool_id: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn tape_size_in_bytes(mut self, input: i64) -> Self {
            self.tape_size_in_bytes = Some(input);
            self
        }
        pub fn set_tape_size_in_bytes(mut self, input: Option<i64>) -> Self {
            self.tape_size_in_bytes = input;
            self
        }
        pub fn tape_barcode(mut self, input: impl Into<String>) -> Self {
            self.tape_barcode = Some(input.into());
            self
        }
        pub fn set_tape_barcode(mut self, input: Option<String>) -> Self {
            self.tape_barcode = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        pub fn pool_id(mut self, input: impl Into<String>) -> Self {
            self.pool_id = Some(input.into());
            self
        }
        pub fn set_pool_id(mut self, input: Option<String>) -> Self {
            self.pool_id = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateTapeWithBarcode`](crate::operation::CreateTapeWithBarcode)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateTapeWithBarcode,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateTapeWithBarcodeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateTapeWithBarcodeInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateTapeWithBarcodeInput {
                gateway_arn: builder.gateway_arn,
                tape_size_in_bytes: builder.tape_size_in_bytes,
                tape_barcode: builder.tape_barcode,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                pool_id: builder.pool_id,
                tags: builder.tags,
            }
        }
    }
}
impl CreateTapeWithBarcodeInput {
    /// Creates a new builder-style object to manufacture [`CreateTapeWithBarcodeInput`](crate::input::CreateTapeWithBarcodeInput)
    pub fn builder() -> crate::input::create_tape_with_barcode_input::Builder {
        crate::input::create_tape_with_barcode_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateTapeWithBarcode,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateTapeWithBarcode",
            crate::operation::CreateTapeWithBarcode::new(),
            config,
        )
    }
}

/// Input of [`CreateTapes`](crate::operation::CreateTapes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CreateTapesInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The size, in bytes, of the virtual tape.
    #[serde(rename = "TapeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_size_in_bytes: Option<i64>,
    /// A unique string used to ensure idempotent creation.
    ///
    /// Length: 5 - 100
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "NumTapesToCreate", skip_serializing_if = "Option::is_none")]
    pub num_tapes_to_create: Option<i32>,
    #[serde(rename = "TapeBarcodePrefix", skip_serializing_if = "Option::is_none")]
    pub tape_barcode_prefix: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, false to use a key managed by Amazon S3.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// The ID of the pool that contains the tape: `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 - 100
    #[serde(rename = "PoolId", skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl CreateTapesInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn tape_size_in_bytes(&self) -> Option<i64> {
        self.tape_size_in_bytes
    }
    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }
    pub fn num_tapes_to_create(&self) -> Option<i32> {
        self.num_tapes_to_create
    }
    pub fn tape_barcode_prefix(&self) -> Option<&str> {
        self.tape_barcode_prefix.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn pool_id(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateTapesInput`](crate::input::CreateTapesInput)
pub mod create_tapes_input {
    /// A builder for [`CreateTapesInput`](crate::input::CreateTapesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) tape_size_in_bytes: Option<i64>,
        pub(crate) client_token: Option<String>,
        pub(crate) num_tapes_to_create: Option<i32>,
        pub(crate) tape_barcode_prefix: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) pool_id: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn tape_size_in_bytes(mut self, input: i64) -> Self {
            self.tape_size_in_bytes = Some(input);
            self
        }
        pub fn set_tape_size_in_bytes(mut self, input: Option<i64>) -> Self {
            self.tape_size_in_bytes = input;
            self
        }
        pub fn client_token(mut self, input: impl Into<String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: Option<String>) -> Self {
            self.client_token = input;
            self
        }
        pub fn num_tapes_to_create(mut self, input: i32) -> Self {
            self.num_tapes_to_create = Some(input);
            self
        }
        pub fn set_num_tapes_to_create(mut self, input: Option<i32>) -> Self {
            self.num_tapes_to_create = input;
            self
        }
        pub fn tape_barcode_prefix(mut self, input: impl Into<String>) -> Self {
            self.tape_barcode_prefix = Some(input.into());
            self
        }
        pub fn set_tape_barcode_prefix(mut self, input: Option<String>) -> Self {
            self.tape_barcode_prefix = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        pub fn pool_id(mut self, input: impl Into<String>) -> Self {
            self.pool_id = Some(input.into());
            self
        }
        pub fn set_pool_id(mut self, input: Option<String>) -> Self {
            self.pool_id = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`CreateTapes`](crate::operation::CreateTapes)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::CreateTapes,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::CreateTapesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::CreateTapesInput {
        fn from(builder: Builder) -> Self {
            crate::input::CreateTapesInput {
                gateway_arn: builder.gateway_arn,
                tape_size_in_bytes: builder.tape_size_in_bytes,
                client_token: builder.client_token,
                num_tapes_to_create: builder.num_tapes_to_create,
                tape_barcode_prefix: builder.tape_barcode_prefix,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                pool_id: builder.pool_id,
                tags: builder.tags,
            }
        }
    }
}
impl CreateTapesInput {
    /// Creates a new builder-style object to manufacture [`CreateTapesInput`](crate::input::CreateTapesInput)
    pub fn builder() -> crate::input::create_tapes_input::Builder {
        crate::input::create_tapes_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::CreateTapes,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "CreateTapes",
            crate::operation::CreateTapes::new(),
            config,
        )
    }
}

/// Input of [`DeleteAutomaticTapeCreationPolicy`](crate::operation::DeleteAutomaticTapeCreationPolicy)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteAutomaticTapeCreationPolicyInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DeleteAutomaticTapeCreationPolicyInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DeleteAutomaticTapeCreationPolicyInput`](crate::input::DeleteAutomaticTapeCreationPolicyInput)
pub mod delete_automatic_tape_creation_policy_input {
    /// A builder for [`DeleteAutomaticTapeCreationPolicyInput`](crate::input::DeleteAutomaticTapeCreationPolicyInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteAutomaticTapeCreationPolicy`](crate::operation::DeleteAutomaticTapeCreationPolicy)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteAutomaticTapeCreationPolicy,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteAutomaticTapeCreationPolicyInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteAutomaticTapeCreationPolicyInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteAutomaticTapeCreationPolicyInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DeleteAutomaticTapeCreationPolicyInput {
    /// Creates a new builder-style object to manufacture [`DeleteAutomaticTapeCreationPolicyInput`](crate::input::DeleteAutomaticTapeCreationPolicyInput)
    pub fn builder() -> crate::input::delete_automatic_tape_creation_policy_input::Builder {
        crate::input::delete_automatic_tape_creation_policy_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteAutomaticTapeCreationPolicy,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteAutomaticTapeCreationPolicy",
            crate::operation::DeleteAutomaticTapeCreationPolicy::new(),
            config,
        )
    }
}

/// Input of [`DeleteBandwidthRateLimit`](crate::operation::DeleteBandwidthRateLimit)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteBandwidthRateLimitInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "BandwidthType", skip_serializing_if = "Option::is_none")]
    pub bandwidth_type: Option<String>,
}
impl DeleteBandwidthRateLimitInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn bandwidth_type(&self) -> Option<&str> {
        self.bandwidth_type.as_deref()
    }
}
/// See [`DeleteBandwidthRateLimitInput`](crate::input::DeleteBandwidthRateLimitInput)
pub mod delete_bandwidth_rate_limit_input {
    /// A builder for [`DeleteBandwidthRateLimitInput`](crate::input::DeleteBandwidthRateLimitInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) bandwidth_type: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn bandwidth_type(mut self, input: impl Into<String>) -> Self {
            self.bandwidth_type = Some(input.into());
            self
        }
        pub fn set_bandwidth_type(mut self, input: Option<String>) -> Self {
            self.bandwidth_type = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteBandwidthRateLimit`](crate::operation::DeleteBandwidthRateLimit)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteBandwidthRateLimit,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteBandwidthRateLimitInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteBandwidthRateLimitInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteBandwidthRateLimitInput {
                gateway_arn: builder.gateway_arn,
                bandwidth_type: builder.bandwidth_type,
            }
        }
    }
}
impl DeleteBandwidthRateLimitInput {
    /// Creates a new builder-style object to manufacture [`DeleteBandwidthRateLimitInput`](crate::input::DeleteBandwidthRateLimitInput)
    pub fn builder() -> crate::input::delete_bandwidth_rate_limit_input::Builder {
        crate::input::delete_bandwidth_rate_limit_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteBandwidthRateLimit,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteBandwidthRateLimit",
            crate::operation::DeleteBandwidthRateLimit::new(),
            config,
        )
    }
}

/// Input of [`DeleteChapCredentials`](crate::operation::DeleteChapCredentials)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteChapCredentialsInput {
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN", skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 - 255
    #[serde(rename = "InitiatorName", skip_serializing_if = "Option::is_none")]
    pub initiator_name: Option<String>,
}
impl DeleteChapCredentialsInput {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
    pub fn initiator_name(&self) -> Option<&str> {
        self.initiator_name.as_deref()
    }
}
/// See [`DeleteChapCredentialsInput`](crate::input::DeleteChapCredentialsInput)
pub mod delete_chap_credentials_input {
    /// A builder for [`DeleteChapCredentialsInput`](crate::input::DeleteChapCredentialsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) target_arn: Option<String>,
        pub(crate) initiator_name: Option<String>,
    }
    impl Builder {
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        pub fn set_target_arn(mut self, input: Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        pub fn initiator_name(mut self, input: impl Into<String>) -> Self {
            self.initiator_name = Some(input.into());
            self
        }
        pub fn set_initiator_name(mut self, input: Option<String>) -> Self {
            self.initiator_name = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteChapCredentials`](crate::operation::DeleteChapCredentials)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteChapCredentials,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteChapCredentialsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteChapCredentialsInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteChapCredentialsInput {
                target_arn: builder.target_arn,
                initiator_name: builder.initiator_name,
            }
        }
    }
}
impl DeleteChapCredentialsInput {
    /// Creates a new builder-style object to manufacture [`DeleteChapCredentialsInput`](crate::input::DeleteChapCredentialsInput)
    pub fn builder() -> crate::input::delete_chap_credentials_input::Builder {
        crate::input::delete_chap_credentials_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteChapCredentials,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteChapCredentials",
            crate::operation::DeleteChapCredentials::new(),
            config,
        )
    }
}

/// Input of [`DeleteFileShare`](crate::operation::DeleteFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteFileShareInput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
    #[serde(rename = "ForceDelete", skip_serializing_if = "Option::is_none")]
    pub force_delete: Option<bool>,
}
impl DeleteFileShareInput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn force_delete(&self) -> Option<bool> {
        self.force_delete
    }
}
/// See [`DeleteFileShareInput`](crate::input::DeleteFileShareInput)
pub mod delete_file_share_input {
    /// A builder for [`DeleteFileShareInput`](crate::input::DeleteFileShareInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
        pub(crate) force_delete: Option<bool>,
    }
    impl Builder {
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        pub fn force_delete(mut self, input: bool) -> Self {
            self.force_delete = Some(input);
            self
        }
        pub fn set_force_delete(mut self, input: Option<bool>) -> Self {
            self.force_delete = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteFileShare`](crate::operation::DeleteFileShare)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteFileShare,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteFileShareInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteFileShareInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteFileShareInput {
                file_share_arn: builder.file_share_arn,
                force_delete: builder.force_delete,
            }
        }
    }
}
impl DeleteFileShareInput {
    /// Creates a new builder-style object to manufacture [`DeleteFileShareInput`](crate::input::DeleteFileShareInput)
    pub fn builder() -> crate::input::delete_file_share_input::Builder {
        crate::input::delete_file_share_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteFileShare,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteFileShare",
            crate::operation::DeleteFileShare::new(),
            config,
        )
    }
}

/// Input of [`DeleteGateway`](crate::operation::DeleteGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteGatewayInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DeleteGatewayInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DeleteGatewayInput`](crate::input::DeleteGatewayInput)
pub mod delete_gateway_input {
    /// A builder for [`DeleteGatewayInput`](crate::input::DeleteGatewayInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteGateway`](crate::operation::DeleteGateway)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteGateway,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteGatewayInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteGatewayInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteGatewayInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DeleteGatewayInput {
    /// Creates a new builder-style object to manufacture [`DeleteGatewayInput`](crate::input::DeleteGatewayInput)
    pub fn builder() -> crate::input::delete_gateway_input::Builder {
        crate::input::delete_gateway_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteGateway,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteGateway",
            crate::operation::DeleteGateway::new(),
            config,
        )
    }
}

/// Input of [`DeleteSnapshotSchedule`](crate::operation::DeleteSnapshotSchedule)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteSnapshotScheduleInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
}
impl DeleteSnapshotScheduleInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`DeleteSnapshotScheduleInput`](crate::input::DeleteSnapshotScheduleInput)
pub mod delete_snapshot_schedule_input {
    /// A builder for [`DeleteSnapshotScheduleInput`](crate::input::DeleteSnapshotScheduleInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteSnapshotSchedule`](crate::operation::DeleteSnapshotSchedule)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteSnapshotSchedule,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteSnapshotScheduleInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteSnapshotScheduleInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteSnapshotScheduleInput {
                volume_arn: builder.volume_arn,
            }
        }
    }
}
impl DeleteSnapshotScheduleInput {
    /// Creates a new builder-style object to manufacture [`DeleteSnapshotScheduleInput`](crate::input::DeleteSnapshotScheduleInput)
    pub fn builder() -> crate::input::delete_snapshot_schedule_input::Builder {
        crate::input::delete_snapshot_schedule_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteSnapshotSchedule,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteSnapshotSchedule",
            crate::operation::DeleteSnapshotSchedule::new(),
            config,
        )
    }
}

/// Input of [`DeleteTape`](crate::operation::DeleteTape)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteTapeInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
}
impl DeleteTapeInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`DeleteTapeInput`](crate::input::DeleteTapeInput)
pub mod delete_tape_input {
    /// A builder for [`DeleteTapeInput`](crate::input::DeleteTapeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) tape_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        pub fn set_tape_arn(mut self, input: Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteTape`](crate::operation::DeleteTape)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteTape,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteTapeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteTapeInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteTapeInput {
                gateway_arn: builder.gateway_arn,
                tape_arn: builder.tape_arn,
            }
        }
    }
}
impl DeleteTapeInput {
    /// Creates a new builder-style object to manufacture [`DeleteTapeInput`](crate::input::DeleteTapeInput)
    pub fn builder() -> crate::input::delete_tape_input::Builder {
        crate::input::delete_tape_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteTape,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteTape",
            crate::operation::DeleteTape::new(),
            config,
        )
    }
}

/// Input of [`DeleteTapeArchive`](crate::operation::DeleteTapeArchive)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteTapeArchiveInput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
}
impl DeleteTapeArchiveInput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`DeleteTapeArchiveInput`](crate::input::DeleteTapeArchiveInput)
pub mod delete_tape_archive_input {
    /// A builder for [`DeleteTapeArchiveInput`](crate::input::DeleteTapeArchiveInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
    }
    impl Builder {
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        pub fn set_tape_arn(mut self, input: Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteTapeArchive`](crate::operation::DeleteTapeArchive)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteTapeArchive,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteTapeArchiveInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteTapeArchiveInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteTapeArchiveInput {
                tape_arn: builder.tape_arn,
            }
        }
    }
}
impl DeleteTapeArchiveInput {
    /// Creates a new builder-style object to manufacture [`DeleteTapeArchiveInput`](crate::input::DeleteTapeArchiveInput)
    pub fn builder() -> crate::input::delete_tape_archive_input::Builder {
        crate::input::delete_tape_archive_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteTapeArchive,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteTapeArchive",
            crate::operation::DeleteTapeArchive::new(),
            config,
        )
    }
}

/// Input of [`DeleteVolume`](crate::operation::DeleteVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DeleteVolumeInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
}
impl DeleteVolumeInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`DeleteVolumeInput`](crate::input::DeleteVolumeInput)
pub mod delete_volume_input {
    /// A builder for [`DeleteVolumeInput`](crate::input::DeleteVolumeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DeleteVolume`](crate::operation::DeleteVolume)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DeleteVolume,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DeleteVolumeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DeleteVolumeInput {
        fn from(builder: Builder) -> Self {
            crate::input::DeleteVolumeInput {
                volume_arn: builder.volume_arn,
            }
        }
    }
}
impl DeleteVolumeInput {
    /// Creates a new builder-style object to manufacture [`DeleteVolumeInput`](crate::input::DeleteVolumeInput)
    pub fn builder() -> crate::input::delete_volume_input::Builder {
        crate::input::delete_volume_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DeleteVolume,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DeleteVolume",
            crate::operation::DeleteVolume::new(),
            config,
        )
    }
}

/// Input of [`DescribeAvailabilityMonitorTest`](crate::operation::DescribeAvailabilityMonitorTest)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeAvailabilityMonitorTestInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeAvailabilityMonitorTestInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeAvailabilityMonitorTestInput`](crate::input::DescribeAvailabilityMonitorTestInput)
pub mod describe_availability_monitor_test_input {
    /// A builder for [`DescribeAvailabilityMonitorTestInput`](crate::input::DescribeAvailabilityMonitorTestInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeAvailabilityMonitorTest`](crate::operation::DescribeAvailabilityMonitorTest)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeAvailabilityMonitorTest,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeAvailabilityMonitorTestInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeAvailabilityMonitorTestInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeAvailabilityMonitorTestInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeAvailabilityMonitorTestInput {
    /// Creates a new builder-style object to manufacture [`DescribeAvailabilityMonitorTestInput`](crate::input::DescribeAvailabilityMonitorTestInput)
    pub fn builder() -> crate::input::describe_availability_monitor_test_input::Builder {
        crate::input::describe_availability_monitor_test_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeAvailabilityMonitorTest,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeAvailabilityMonitorTest",
            crate::operation::DescribeAvailabilityMonitorTest::new(),
            config,
        )
    }
}

/// Input of [`DescribeBandwidthRateLimit`](crate::operation::DescribeBandwidthRateLimit)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeBandwidthRateLimitInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeBandwidthRateLimitInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeBandwidthRateLimitInput`](crate::input::DescribeBandwidthRateLimitInput)
pub mod describe_bandwidth_rate_limit_input {
    /// A builder for [`DescribeBandwidthRateLimitInput`](crate::input::DescribeBandwidthRateLimitInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeBandwidthRateLimit`](crate::operation::DescribeBandwidthRateLimit)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeBandwidthRateLimit,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeBandwidthRateLimitInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeBandwidthRateLimitInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeBandwidthRateLimitInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeBandwidthRateLimitInput {
    /// Creates a new builder-style object to manufacture [`DescribeBandwidthRateLimitInput`](crate::input::DescribeBandwidthRateLimitInput)
    pub fn builder() -> crate::input::describe_bandwidth_rate_limit_input::Builder {
        crate::input::describe_bandwidth_rate_limit_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeBandwidthRateLimit,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeBandwidthRateLimit",
            crate::operation::DescribeBandwidthRateLimit::new(),
            config,
        )
    }
}

/// Input of [`DescribeCache`](crate::operation::DescribeCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeCacheInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeCacheInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeCacheInput`](crate::input::DescribeCacheInput)
pub mod describe_cache_input {
    /// A builder for [`DescribeCacheInput`](crate::input::DescribeCacheInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeCache`](crate::operation::DescribeCache)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeCache,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeCacheInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeCacheInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeCacheInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeCacheInput {
    /// Creates a new builder-style object to manufacture [`DescribeCacheInput`](crate::input::DescribeCacheInput)
    pub fn builder() -> crate::input::describe_cache_input::Builder {
        crate::input::describe_cache_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeCache,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeCache",
            crate::operation::DescribeCache::new(),
            config,
        )
    }
}

/// Input of [`DescribeCachediScsiVolumes`](crate::operation::DescribeCachediScsiVolumes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeCachediScsiVolumesInput {
    #[serde(rename = "VolumeARNs", skip_serializing_if = "Option::is_none")]
    pub volume_ar_ns: Option<Vec<String>>,
}
impl DescribeCachediScsiVolumesInput {
    pub fn volume_ar_ns(&self) -> Option<&[String]> {
        self.volume_ar_ns.as_deref()
    }
}
/// See [`DescribeCachediScsiVolumesInput`](crate::input::DescribeCachediScsiVolumesInput)
pub mod describe_cachedi_scsi_volumes_input {
    /// A builder for [`DescribeCachediScsiVolumesInput`](crate::input::DescribeCachediScsiVolumesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_ar_ns: Option<Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `volume_ar_ns`
        pub fn volume_ar_ns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.volume_ar_ns.unwrap_or_default();
            v.push(input.into());
            self.volume_ar_ns = Some(v);
            self
        }
        pub fn set_volume_ar_ns(mut self, input: Option<Vec<String>>) -> Self {
            self.volume_ar_ns = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeCachediScsiVolumes`](crate::operation::DescribeCachediScsiVolumes)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeCachediScsiVolumes,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeCachediScsiVolumesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeCachediScsiVolumesInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeCachediScsiVolumesInput {
                volume_ar_ns: builder.volume_ar_ns,
            }
        }
    }
}
impl DescribeCachediScsiVolumesInput {
    /// Creates a new builder-style object to manufacture [`DescribeCachediScsiVolumesInput`](crate::input::DescribeCachediScsiVolumesInput)
    pub fn builder() -> crate::input::describe_cachedi_scsi_volumes_input::Builder {
        crate::input::describe_cachedi_scsi_volumes_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeCachediScsiVolumes,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeCachediSCSIVolumes",
            crate::operation::DescribeCachediScsiVolumes::new(),
            config,
        )
    }
}

/// Input of [`DescribeChapCredentials`](crate::operation::DescribeChapCredentials)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeChapCredentialsInput {
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN", skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
}
impl DescribeChapCredentialsInput {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
}
/// See [`DescribeChapCredentialsInput`](crate::input::DescribeChapCredentialsInput)
pub mod describe_chap_credentials_input {
    /// A builder for [`DescribeChapCredentialsInput`](crate::input::DescribeChapCredentialsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) target_arn: Option<String>,
    }
    impl Builder {
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        pub fn set_target_arn(mut self, input: Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeChapCredentials`](crate::operation::DescribeChapCredentials)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeChapCredentials,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeChapCredentialsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeChapCredentialsInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeChapCredentialsInput {
                target_arn: builder.target_arn,
            }
        }
    }
}
impl DescribeChapCredentialsInput {
    /// Creates a new builder-style object to manufacture [`DescribeChapCredentialsInput`](crate::input::DescribeChapCredentialsInput)
    pub fn builder() -> crate::input::describe_chap_credentials_input::Builder {
        crate::input::describe_chap_credentials_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeChapCredentials,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeChapCredentials",
            crate::operation::DescribeChapCredentials::new(),
            config,
        )
    }
}

/// Input of [`DescribeGatewayInformation`](crate::operation::DescribeGatewayInformation)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeGatewayInformationInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeGatewayInformationInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
pub mod describe_gateway_information_input {
    /// A builder for [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeGatewayInformation`](crate::operation::DescribeGatewayInformation)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeGatewayInformation,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeGatewayInformationInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeGatewayInformationInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeGatewayInformationInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeGatewayInformationInput {
    /// Creates a new builder-style object to manufacture [`DescribeGatewayInformationInput`](crate::input::DescribeGatewayInformationInput)
    pub fn builder() -> crate::input::describe_gateway_information_input::Builder {
        crate::input::describe_gateway_information_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeGatewayInformation,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeGatewayInformation",
            crate::operation::DescribeGatewayInformation::new(),
            config,
        )
    }
}

/// Input of [`DescribeMaintenanceStartTime`](crate::operation::DescribeMaintenanceStartTime)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeMaintenanceStartTimeInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeMaintenanceStartTimeInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeMaintenanceStartTimeInput`](crate::input::DescribeMaintenanceStartTimeInput)
pub mod describe_maintenance_start_time_input {
    /// A builder for [`DescribeMaintenanceStartTimeInput`](crate::input::DescribeMaintenanceStartTimeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeMaintenanceStartTime`](crate::operation::DescribeMaintenanceStartTime)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeMaintenanceStartTime,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeMaintenanceStartTimeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeMaintenanceStartTimeInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeMaintenanceStartTimeInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeMaintenanceStartTimeInput {
    /// Creates a new builder-style object to manufacture [`DescribeMaintenanceStartTimeInput`](crate::input::DescribeMaintenanceStartTimeInput)
    pub fn builder() -> crate::input::describe_maintenance_start_time_input::Builder {
        crate::input::describe_maintenance_start_time_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeMaintenanceStartTime,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeMaintenanceStartTime",
            crate::operation::DescribeMaintenanceStartTime::new(),
            config,
        )
    }
}

/// Input of [`DescribeNfsFileShares`](crate::operation::DescribeNfsFileShares)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeNfsFileSharesInput {
    #[serde(rename = "FileShareARNList", skip_serializing_if = "Option::is_none")]
    pub file_share_arn_list: Option<Vec<String>>,
}
impl DescribeNfsFileSharesInput {
    pub fn file_share_arn_list(&self) -> Option<&[String]> {
        self.file_share_arn_list.as_deref()
    }
}
/// See [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput)
pub mod describe_nfs_file_shares_input {
    /// A builder for [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn_list: Option<Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `file_share_arn_list`
        pub fn file_share_arn_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.file_share_arn_list.unwrap_or_default();
            v.push(input.into());
            self.file_share_arn_list = Some(v);
            self
        }
        pub fn set_file_share_arn_list(mut self, input: Option<Vec<String>>) -> Self {
            self.file_share_arn_list = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeNfsFileShares`](crate::operation::DescribeNfsFileShares)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeNfsFileShares,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeNfsFileSharesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeNfsFileSharesInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeNfsFileSharesInput {
                file_share_arn_list: builder.file_share_arn_list,
            }
        }
    }
}
impl DescribeNfsFileSharesInput {
    /// Creates a new builder-style object to manufacture [`DescribeNfsFileSharesInput`](crate::input::DescribeNfsFileSharesInput)
    pub fn builder() -> crate::input::describe_nfs_file_shares_input::Builder {
        crate::input::describe_nfs_file_shares_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeNfsFileShares,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeNFSFileShares",
            crate::operation::DescribeNfsFileShares::new(),
            config,
        )
    }
}

/// Input of [`DescribeSmbFileShares`](crate::operation::DescribeSmbFileShares)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeSmbFileSharesInput {
    #[serde(rename = "FileShareARNList", skip_serializing_if = "Option::is_none")]
    pub file_share_arn_list: Option<Vec<String>>,
}
impl DescribeSmbFileSharesInput {
    pub fn file_share_arn_list(&self) -> Option<&[String]> {
        self.file_share_arn_list.as_deref()
    }
}
/// See [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput)
pub mod describe_smb_file_shares_input {
    /// A builder for [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn_list: Option<Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `file_share_arn_list`
        pub fn file_share_arn_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.file_share_arn_list.unwrap_or_default();
            v.push(input.into());
            self.file_share_arn_list = Some(v);
            self
        }
        pub fn set_file_share_arn_list(mut self, input: Option<Vec<String>>) -> Self {
            self.file_share_arn_list = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeSmbFileShares`](crate::operation::DescribeSmbFileShares)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeSmbFileShares,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeSmbFileSharesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeSmbFileSharesInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeSmbFileSharesInput {
                file_share_arn_list: builder.file_share_arn_list,
            }
        }
    }
}
impl DescribeSmbFileSharesInput {
    /// Creates a new builder-style object to manufacture [`DescribeSmbFileSharesInput`](crate::input::DescribeSmbFileSharesInput)
    pub fn builder() -> crate::input::describe_smb_file_shares_input::Builder {
        crate::input::describe_smb_file_shares_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeSmbFileShares,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeSMBFileShares",
            crate::operation::DescribeSmbFileShares::new(),
            config,
        )
    }
}

/// Input of [`DescribeSmbSettings`](crate::operation::DescribeSmbSettings)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeSmbSettingsInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeSmbSettingsInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeSmbSettingsInput`](crate::input::DescribeSmbSettingsInput)
pub mod describe_smb_settings_input {
    /// A builder for [`DescribeSmbSettingsInput`](crate::input::DescribeSmbSettingsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeSmbSettings`](crate::operation::DescribeSmbSettings)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeSmbSettings,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeSmbSettingsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeSmbSettingsInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeSmbSettingsInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeSmbSettingsInput {
    /// Creates a new builder-style object to manufacture [`DescribeSmbSettingsInput`](crate::input::DescribeSmbSettingsInput)
    pub fn builder() -> crate::input::describe_smb_settings_input::Builder {
        crate::input::describe_smb_settings_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeSmbSettings,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeSMBSettings",
            crate::operation::DescribeSmbSettings::new(),
            config,
        )
    }
}

/// Input of [`DescribeSnapshotSchedule`](crate::operation::DescribeSnapshotSchedule)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeSnapshotScheduleInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
}
impl DescribeSnapshotScheduleInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`DescribeSnapshotScheduleInput`](crate::input::DescribeSnapshotScheduleInput)
pub mod describe_snapshot_schedule_input {
    /// A builder for [`DescribeSnapshotScheduleInput`](crate::input::DescribeSnapshotScheduleInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeSnapshotSchedule`](crate::operation::DescribeSnapshotSchedule)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeSnapshotSchedule,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeSnapshotScheduleInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeSnapshotScheduleInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeSnapshotScheduleInput {
                volume_arn: builder.volume_arn,
            }
        }
    }
}
impl DescribeSnapshotScheduleInput {
    /// Creates a new builder-style object to manufacture [`DescribeSnapshotScheduleInput`](crate::input::DescribeSnapshotScheduleInput)
    pub fn builder() -> crate::input::describe_snapshot_schedule_input::Builder {
        crate::input::describe_snapshot_schedule_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeSnapshotSchedule,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeSnapshotSchedule",
            crate::operation::DescribeSnapshotSchedule::new(),
            config,
        )
    }
}

/// Input of [`DescribeStorediScsiVolumes`](crate::operation::DescribeStorediScsiVolumes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeStorediScsiVolumesInput {
    #[serde(rename = "VolumeARNs", skip_serializing_if = "Option::is_none")]
    pub volume_ar_ns: Option<Vec<String>>,
}
impl DescribeStorediScsiVolumesInput {
    pub fn volume_ar_ns(&self) -> Option<&[String]> {
        self.volume_ar_ns.as_deref()
    }
}
/// See [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput)
pub mod describe_storedi_scsi_volumes_input {
    /// A builder for [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_ar_ns: Option<Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `volume_ar_ns`
        pub fn volume_ar_ns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.volume_ar_ns.unwrap_or_default();
            v.push(input.into());
            self.volume_ar_ns = Some(v);
            self
        }
        pub fn set_volume_ar_ns(mut self, input: Option<Vec<String>>) -> Self {
            self.volume_ar_ns = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeStorediScsiVolumes`](crate::operation::DescribeStorediScsiVolumes)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeStorediScsiVolumes,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeStorediScsiVolumesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeStorediScsiVolumesInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeStorediScsiVolumesInput {
                volume_ar_ns: builder.volume_ar_ns,
            }
        }
    }
}
impl DescribeStorediScsiVolumesInput {
    /// Creates a new builder-style object to manufacture [`DescribeStorediScsiVolumesInput`](crate::input::DescribeStorediScsiVolumesInput)
    pub fn builder() -> crate::input::describe_storedi_scsi_volumes_input::Builder {
        crate::input::describe_storedi_scsi_volumes_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeStorediScsiVolumes,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeStorediSCSIVolumes",
            crate::operation::DescribeStorediScsiVolumes::new(),
            config,
        )
    }
}

/// Input of [`DescribeTapeArchives`](crate::operation::DescribeTapeArchives)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeTapeArchivesInput {
    #[serde(rename = "TapeARNs", skip_serializing_if = "Option::is_none")]
    pub tape_ar_ns: Option<Vec<String>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl DescribeTapeArchivesInput {
    pub fn tape_ar_ns(&self) -> Option<&[String]> {
        self.tape_ar_ns.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`DescribeTapeArchivesInput`](crate::input::DescribeTapeArchivesInput)
pub mod describe_tape_archives_input {
    /// A builder for [`DescribeTapeArchivesInput`](crate::input::DescribeTapeArchivesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_ar_ns: Option<Vec<String>>,
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        /// Appends an item to `tape_ar_ns`
        pub fn tape_ar_ns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.tape_ar_ns.unwrap_or_default();
            v.push(input.into());
            self.tape_ar_ns = Some(v);
            self
        }
        pub fn set_tape_ar_ns(mut self, input: Option<Vec<String>>) -> Self {
            self.tape_ar_ns = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeTapeArchives`](crate::operation::DescribeTapeArchives)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeTapeArchives,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeTapeArchivesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeTapeArchivesInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeTapeArchivesInput {
                tape_ar_ns: builder.tape_ar_ns,
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl DescribeTapeArchivesInput {
    /// Creates a new builder-style object to manufacture [`DescribeTapeArchivesInput`](crate::input::DescribeTapeArchivesInput)
    pub fn builder() -> crate::input::describe_tape_archives_input::Builder {
        crate::input::describe_tape_archives_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeTapeArchives,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeTapeArchives",
            crate::operation::DescribeTapeArchives::new(),
            config,
        )
    }
}

/// Input of [`DescribeTapeRecoveryPoints`](crate::operation::DescribeTapeRecoveryPoints)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeTapeRecoveryPointsInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl DescribeTapeRecoveryPointsInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`DescribeTapeRecoveryPointsInput`](crate::input::DescribeTapeRecoveryPointsInput)
pub mod describe_tape_recovery_points_input {
    /// A builder for [`DescribeTapeRecoveryPointsInput`](crate::input::DescribeTapeRecoveryPointsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeTapeRecoveryPoints`](crate::operation::DescribeTapeRecoveryPoints)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeTapeRecoveryPoints,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeTapeRecoveryPointsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeTapeRecoveryPointsInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeTapeRecoveryPointsInput {
                gateway_arn: builder.gateway_arn,
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl DescribeTapeRecoveryPointsInput {
    /// Creates a new builder-style object to manufacture [`DescribeTapeRecoveryPointsInput`](crate::input::DescribeTapeRecoveryPointsInput)
    pub fn builder() -> crate::input::describe_tape_recovery_points_input::Builder {
        crate::input::describe_tape_recovery_points_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeTapeRecoveryPoints,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeTapeRecoveryPoints",
            crate::operation::DescribeTapeRecoveryPoints::new(),
            config,
        )
    }
}

/// Input of [`DescribeTapes`](crate::operation::DescribeTapes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeTapesInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "TapeARNs", skip_serializing_if = "Option::is_none")]
    pub tape_ar_ns: Option<Vec<String>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl DescribeTapesInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn tape_ar_ns(&self) -> Option<&[String]> {
        self.tape_ar_ns.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`DescribeTapesInput`](crate::input::DescribeTapesInput)
pub mod describe_tapes_input {
    /// A builder for [`DescribeTapesInput`](crate::input::DescribeTapesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) tape_ar_ns: Option<Vec<String>>,
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Appends an item to `tape_ar_ns`
        pub fn tape_ar_ns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.tape_ar_ns.unwrap_or_default();
            v.push(input.into());
            self.tape_ar_ns = Some(v);
            self
        }
        pub fn set_tape_ar_ns(mut self, input: Option<Vec<String>>) -> Self {
            self.tape_ar_ns = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeTapes`](crate::operation::DescribeTapes)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeTapes,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeTapesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeTapesInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeTapesInput {
                gateway_arn: builder.gateway_arn,
                tape_ar_ns: builder.tape_ar_ns,
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl DescribeTapesInput {
    /// Creates a new builder-style object to manufacture [`DescribeTapesInput`](crate::input::DescribeTapesInput)
    pub fn builder() -> crate::input::describe_tapes_input::Builder {
        crate::input::describe_tapes_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeTapes,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeTapes",
            crate::operation::DescribeTapes::new(),
            config,
        )
    }
}

/// Input of [`DescribeUploadBuffer`](crate::operation::DescribeUploadBuffer)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeUploadBufferInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeUploadBufferInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeUploadBufferInput`](crate::input::DescribeUploadBufferInput)
pub mod describe_upload_buffer_input {
    /// A builder for [`DescribeUploadBufferInput`](crate::input::DescribeUploadBufferInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeUploadBuffer`](crate::operation::DescribeUploadBuffer)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeUploadBuffer,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeUploadBufferInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeUploadBufferInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeUploadBufferInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeUploadBufferInput {
    /// Creates a new builder-style object to manufacture [`DescribeUploadBufferInput`](crate::input::DescribeUploadBufferInput)
    pub fn builder() -> crate::input::describe_upload_buffer_input::Builder {
        crate::input::describe_upload_buffer_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeUploadBuffer,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeUploadBuffer",
            crate::operation::DescribeUploadBuffer::new(),
            config,
        )
    }
}

/// Input of [`DescribeVtlDevices`](crate::operation::DescribeVtlDevices)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeVtlDevicesInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "VTLDeviceARNs", skip_serializing_if = "Option::is_none")]
    pub vtl_device_ar_ns: Option<Vec<String>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl DescribeVtlDevicesInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn vtl_device_ar_ns(&self) -> Option<&[String]> {
        self.vtl_device_ar_ns.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`DescribeVtlDevicesInput`](crate::input::DescribeVtlDevicesInput)
pub mod describe_vtl_devices_input {
    /// A builder for [`DescribeVtlDevicesInput`](crate::input::DescribeVtlDevicesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) vtl_device_ar_ns: Option<Vec<String>>,
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Appends an item to `vtl_device_ar_ns`
        pub fn vtl_device_ar_ns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.vtl_device_ar_ns.unwrap_or_default();
            v.push(input.into());
            self.vtl_device_ar_ns = Some(v);
            self
        }
        pub fn set_vtl_device_ar_ns(mut self, input: Option<Vec<String>>) -> Self {
            self.vtl_device_ar_ns = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeVtlDevices`](crate::operation::DescribeVtlDevices)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeVtlDevices,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeVtlDevicesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeVtlDevicesInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeVtlDevicesInput {
                gateway_arn: builder.gateway_arn,
                vtl_device_ar_ns: builder.vtl_device_ar_ns,
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl DescribeVtlDevicesInput {
    /// Creates a new builder-style object to manufacture [`DescribeVtlDevicesInput`](crate::input::DescribeVtlDevicesInput)
    pub fn builder() -> crate::input::describe_vtl_devices_input::Builder {
        crate::input::describe_vtl_devices_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeVtlDevices,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeVTLDevices",
            crate::operation::DescribeVtlDevices::new(),
            config,
        )
    }
}

/// Input of [`DescribeWorkingStorage`](crate::operation::DescribeWorkingStorage)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DescribeWorkingStorageInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DescribeWorkingStorageInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DescribeWorkingStorageInput`](crate::input::DescribeWorkingStorageInput)
pub mod describe_working_storage_input {
    /// A builder for [`DescribeWorkingStorageInput`](crate::input::DescribeWorkingStorageInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DescribeWorkingStorage`](crate::operation::DescribeWorkingStorage)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DescribeWorkingStorage,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DescribeWorkingStorageInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DescribeWorkingStorageInput {
        fn from(builder: Builder) -> Self {
            crate::input::DescribeWorkingStorageInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DescribeWorkingStorageInput {
    /// Creates a new builder-style object to manufacture [`DescribeWorkingStorageInput`](crate::input::DescribeWorkingStorageInput)
    pub fn builder() -> crate::input::describe_working_storage_input::Builder {
        crate::input::describe_working_storage_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DescribeWorkingStorage,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DescribeWorkingStorage",
            crate::operation::DescribeWorkingStorage::new(),
            config,
        )
    }
}

/// Input of [`DetachVolume`](crate::operation::DetachVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DetachVolumeInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "ForceDetach", skip_serializing_if = "Option::is_none")]
    pub force_detach: Option<bool>,
}
impl DetachVolumeInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn force_detach(&self) -> Option<bool> {
        self.force_detach
    }
}
/// See [`DetachVolumeInput`](crate::input::DetachVolumeInput)
pub mod detach_volume_input {
    /// A builder for [`DetachVolumeInput`](crate::input::DetachVolumeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) force_detach: Option<bool>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        pub fn force_detach(mut self, input: bool) -> Self {
            self.force_detach = Some(input);
            self
        }
        pub fn set_force_detach(mut self, input: Option<bool>) -> Self {
            self.force_detach = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DetachVolume`](crate::operation::DetachVolume)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DetachVolume,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DetachVolumeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DetachVolumeInput {
        fn from(builder: Builder) -> Self {
            crate::input::DetachVolumeInput {
                volume_arn: builder.volume_arn,
                force_detach: builder.force_detach,
            }
        }
    }
}
impl DetachVolumeInput {
    /// Creates a new builder-style object to manufacture [`DetachVolumeInput`](crate::input::DetachVolumeInput)
    pub fn builder() -> crate::input::detach_volume_input::Builder {
        crate::input::detach_volume_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DetachVolume,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DetachVolume",
            crate::operation::DetachVolume::new(),
            config,
        )
    }
}

/// Input of [`DisableGateway`](crate::operation::DisableGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DisableGatewayInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl DisableGatewayInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DisableGatewayInput`](crate::input::DisableGatewayInput)
pub mod disable_gateway_input {
    /// A builder for [`DisableGatewayInput`](crate::input::DisableGatewayInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`DisableGateway`](crate::operation::DisableGateway)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::DisableGateway,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::DisableGatewayInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::DisableGatewayInput {
        fn from(builder: Builder) -> Self {
            crate::input::DisableGatewayInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl DisableGatewayInput {
    /// Creates a new builder-style object to manufacture [`DisableGatewayInput`](crate::input::DisableGatewayInput)
    pub fn builder() -> crate::input::disable_gateway_input::Builder {
        crate::input::disable_gateway_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::DisableGateway,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "DisableGateway",
            crate::operation::DisableGateway::new(),
            config,
        )
    }
}

/// Input of [`JoinDomain`](crate::operation::JoinDomain)
#[non_exhaustive]
#[derive(Clone, PartialEq, Serialize)]
pub struct JoinDomainInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "OrganizationalUnit", skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<String>,
    #[serde(rename = "DomainControllers", skip_serializing_if = "Option::is_none")]
    pub domain_controllers: Option<Vec<String>>,
    #[serde(rename = "TimeoutInSeconds", skip_serializing_if = "Option::is_none")]
    pub timeout_in_seconds: Option<i32>,
    #[serde(rename = "UserName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// The password of the Active Directory user or SMB guest. Redacted from `Debug` output.
    ///
    /// Length: 6 - 512
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
impl JoinDomainInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }
    pub fn organizational_unit(&self) -> Option<&str> {
        self.organizational_unit.as_deref()
    }
    pub fn domain_controllers(&self) -> Option<&[String]> {
        self.domain_controllers.as_deref()
    }
    pub fn timeout_in_seconds(&self) -> Option<i32> {
        self.timeout_in_seconds
    }
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
impl std::fmt::Debug for JoinDomainInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JoinDomainInput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("domain_name", &self.domain_name);
        formatter.field("organizational_unit", &self.organizational_unit);
        formatter.field("domain_controllers", &self.domain_controllers);
        formatter.field("timeout_in_seconds", &self.timeout_in_seconds);
        formatter.field("user_name", &self.user_name);
        formatter.field("password", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`JoinDomainInput`](crate::input::JoinDomainInput)
pub mod join_domain_input {
    /// A builder for [`JoinDomainInput`](crate::input::JoinDomainInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) domain_name: Option<String>,
        pub(crate) organizational_unit: Option<String>,
        pub(crate) domain_controllers: Option<Vec<String>>,
        pub(crate) timeout_in_seconds: Option<i32>,
        pub(crate) user_name: Option<String>,
        pub(crate) password: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn domain_name(mut self, input: impl Into<String>) -> Self {
            self.domain_name = Some(input.into());
            self
        }
        pub fn set_domain_name(mut self, input: Option<String>) -> Self {
            self.domain_name = input;
            self
        }
        pub fn organizational_unit(mut self, input: impl Into<String>) -> Self {
            self.organizational_unit = Some(input.into());
            self
        }
        pub fn set_organizational_unit(mut self, input: Option<String>) -> Self {
            self.organizational_unit = input;
            self
        }
        /// Appends an item to `domain_controllers`
        pub fn domain_controllers(mut self, input: impl Into<String>) -> Self {
            let mut v = self.domain_controllers.unwrap_or_default();
            v.push(input.into());
            self.domain_controllers = Some(v);
            self
        }
        pub fn set_domain_controllers(mut self, input: Option<Vec<String>>) -> Self {
            self.domain_controllers = input;
            self
        }
        pub fn timeout_in_seconds(mut self, input: i32) -> Self {
            self.timeout_in_seconds = Some(input);
            self
        }
        pub fn set_timeout_in_seconds(mut self, input: Option<i32>) -> Self {
            self.timeout_in_seconds = input;
            self
        }
        pub fn user_name(mut self, input: impl Into<String>) -> Self {
            self.user_name = Some(input.into());
            self
        }
        pub fn set_user_name(mut self, input: Option<String>) -> Self {
            self.user_name = input;
            self
        }
        pub fn password(mut self, input: impl Into<String>) -> Self {
            self.password = Some(input.into());
            self
        }
        pub fn set_password(mut self, input: Option<String>) -> Self {
            self.password = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`JoinDomain`](crate::operation::JoinDomain)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::JoinDomain,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::JoinDomainInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::JoinDomainInput {
        fn from(builder: Builder) -> Self {
            crate::input::JoinDomainInput {
                gateway_arn: builder.gateway_arn,
                domain_name: builder.domain_name,
                organizational_unit: builder.organizational_unit,
                domain_controllers: builder.domain_controllers,
                timeout_in_seconds: builder.timeout_in_seconds,
                user_name: builder.user_name,
                password: builder.password,
            }
        }
    }
    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("gateway_arn", &self.gateway_arn);
            formatter.field("domain_name", &self.domain_name);
            formatter.field("organizational_unit", &self.organizational_unit);
            formatter.field("domain_controllers", &self.domain_controllers);
            formatter.field("timeout_in_seconds", &self.timeout_in_seconds);
            formatter.field("user_name", &self.user_name);
            formatter.field("password", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}
impl JoinDomainInput {
    /// Creates a new builder-style object to manufacture [`JoinDomainInput`](crate::input::JoinDomainInput)
    pub fn builder() -> crate::input::join_domain_input::Builder {
        crate::input::join_domain_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::JoinDomain,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "JoinDomain",
            crate::operation::JoinDomain::new(),
            config,
        )
    }
}

/// Input of [`ListAutomaticTapeCreationPolicies`](crate::operation::ListAutomaticTapeCreationPolicies)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListAutomaticTapeCreationPoliciesInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl ListAutomaticTapeCreationPoliciesInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ListAutomaticTapeCreationPoliciesInput`](crate::input::ListAutomaticTapeCreationPoliciesInput)
pub mod list_automatic_tape_creation_policies_input {
    /// A builder for [`ListAutomaticTapeCreationPoliciesInput`](crate::input::ListAutomaticTapeCreationPoliciesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListAutomaticTapeCreationPolicies`](crate::operation::ListAutomaticTapeCreationPolicies)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListAutomaticTapeCreationPolicies,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListAutomaticTapeCreationPoliciesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListAutomaticTapeCreationPoliciesInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListAutomaticTapeCreationPoliciesInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl ListAutomaticTapeCreationPoliciesInput {
    /// Creates a new builder-style object to manufacture [`ListAutomaticTapeCreationPoliciesInput`](crate::input::ListAutomaticTapeCreationPoliciesInput)
    pub fn builder() -> crate::input::list_automatic_tape_creation_policies_input::Builder {
        crate::input::list_automatic_tape_creation_policies_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListAutomaticTapeCreationPolicies,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListAutomaticTapeCreationPolicies",
            crate::operation::ListAutomaticTapeCreationPolicies::new(),
            config,
        )
    }
}

/// Input of [`ListFileShares`](crate::operation::ListFileShares)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListFileSharesInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}
impl ListFileSharesInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}
/// See [`ListFileSharesInput`](crate::input::ListFileSharesInput)
pub mod list_file_shares_input {
    /// A builder for [`ListFileSharesInput`](crate::input::ListFileSharesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) limit: Option<i32>,
        pub(crate) marker: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListFileShares`](crate::operation::ListFileShares)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListFileShares,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListFileSharesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListFileSharesInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListFileSharesInput {
                gateway_arn: builder.gateway_arn,
                limit: builder.limit,
                marker: builder.marker,
            }
        }
    }
}
impl ListFileSharesInput {
    /// Creates a new builder-style object to manufacture [`ListFileSharesInput`](crate::input::ListFileSharesInput)
    pub fn builder() -> crate::input::list_file_shares_input::Builder {
        crate::input::list_file_shares_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListFileShares,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListFileShares",
            crate::operation::ListFileShares::new(),
            config,
        )
    }
}

/// Input of [`ListGateways`](crate::operation::ListGateways)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListGatewaysInput {
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl ListGatewaysInput {
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`ListGatewaysInput`](crate::input::ListGatewaysInput)
pub mod list_gateways_input {
    /// A builder for [`ListGatewaysInput`](crate::input::ListGatewaysInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListGateways`](crate::operation::ListGateways)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListGateways,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListGatewaysInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListGatewaysInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListGatewaysInput {
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl ListGatewaysInput {
    /// Creates a new builder-style object to manufacture [`ListGatewaysInput`](crate::input::ListGatewaysInput)
    pub fn builder() -> crate::input::list_gateways_input::Builder {
        crate::input::list_gateways_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListGateways,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListGateways",
            crate::operation::ListGateways::new(),
            config,
        )
    }
}

/// Input of [`ListLocalDisks`](crate::operation::ListLocalDisks)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListLocalDisksInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl ListLocalDisksInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ListLocalDisksInput`](crate::input::ListLocalDisksInput)
pub mod list_local_disks_input {
    /// A builder for [`ListLocalDisksInput`](crate::input::ListLocalDisksInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListLocalDisks`](crate::operation::ListLocalDisks)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListLocalDisks,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListLocalDisksInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListLocalDisksInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListLocalDisksInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl ListLocalDisksInput {
    /// Creates a new builder-style object to manufacture [`ListLocalDisksInput`](crate::input::ListLocalDisksInput)
    pub fn builder() -> crate::input::list_local_disks_input::Builder {
        crate::input::list_local_disks_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListLocalDisks,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListLocalDisks",
            crate::operation::ListLocalDisks::new(),
            config,
        )
    }
}

/// Input of [`ListTagsForResource`](crate::operation::ListTagsForResource)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListTagsForResourceInput {
    /// The Amazon Resource Name (ARN) of the resource.
    ///
    /// Length: 50 - 500
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl ListTagsForResourceInput {
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
pub mod list_tags_for_resource_input {
    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: Option<String>,
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: Option<String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListTagsForResource`](crate::operation::ListTagsForResource)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListTagsForResource,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListTagsForResourceInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListTagsForResourceInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListTagsForResourceInput {
                resource_arn: builder.resource_arn,
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl ListTagsForResourceInput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListTagsForResource,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListTagsForResource",
            crate::operation::ListTagsForResource::new(),
            config,
        )
    }
}

/// Input of [`ListTapes`](crate::operation::ListTapes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListTapesInput {
    #[serde(rename = "TapeARNs", skip_serializing_if = "Option::is_none")]
    pub tape_ar_ns: Option<Vec<String>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl ListTapesInput {
    pub fn tape_ar_ns(&self) -> Option<&[String]> {
        self.tape_ar_ns.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`ListTapesInput`](crate::input::ListTapesInput)
pub mod list_tapes_input {
    /// A builder for [`ListTapesInput`](crate::input::ListTapesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_ar_ns: Option<Vec<String>>,
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        /// Appends an item to `tape_ar_ns`
        pub fn tape_ar_ns(mut self, input: impl Into<String>) -> Self {
            let mut v = self.tape_ar_ns.unwrap_or_default();
            v.push(input.into());
            self.tape_ar_ns = Some(v);
            self
        }
        pub fn set_tape_ar_ns(mut self, input: Option<Vec<String>>) -> Self {
            self.tape_ar_ns = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListTapes`](crate::operation::ListTapes)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListTapes,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListTapesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListTapesInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListTapesInput {
                tape_ar_ns: builder.tape_ar_ns,
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl ListTapesInput {
    /// Creates a new builder-style object to manufacture [`ListTapesInput`](crate::input::ListTapesInput)
    pub fn builder() -> crate::input::list_tapes_input::Builder {
        crate::input::list_tapes_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListTapes,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListTapes",
            crate::operation::ListTapes::new(),
            config,
        )
    }
}

/// Input of [`ListVolumeInitiators`](crate::operation::ListVolumeInitiators)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListVolumeInitiatorsInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
}
impl ListVolumeInitiatorsInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`ListVolumeInitiatorsInput`](crate::input::ListVolumeInitiatorsInput)
pub mod list_volume_initiators_input {
    /// A builder for [`ListVolumeInitiatorsInput`](crate::input::ListVolumeInitiatorsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListVolumeInitiators`](crate::operation::ListVolumeInitiators)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListVolumeInitiators,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListVolumeInitiatorsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListVolumeInitiatorsInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListVolumeInitiatorsInput {
                volume_arn: builder.volume_arn,
            }
        }
    }
}
impl ListVolumeInitiatorsInput {
    /// Creates a new builder-style object to manufacture [`ListVolumeInitiatorsInput`](crate::input::ListVolumeInitiatorsInput)
    pub fn builder() -> crate::input::list_volume_initiators_input::Builder {
        crate::input::list_volume_initiators_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListVolumeInitiators,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListVolumeInitiators",
            crate::operation::ListVolumeInitiators::new(),
            config,
        )
    }
}

/// Input of [`ListVolumeRecoveryPoints`](crate::operation::ListVolumeRecoveryPoints)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListVolumeRecoveryPointsInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl ListVolumeRecoveryPointsInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ListVolumeRecoveryPointsInput`](crate::input::ListVolumeRecoveryPointsInput)
pub mod list_volume_recovery_points_input {
    /// A builder for [`ListVolumeRecoveryPointsInput`](crate::input::ListVolumeRecoveryPointsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListVolumeRecoveryPoints`](crate::operation::ListVolumeRecoveryPoints)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListVolumeRecoveryPoints,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListVolumeRecoveryPointsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListVolumeRecoveryPointsInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListVolumeRecoveryPointsInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl ListVolumeRecoveryPointsInput {
    /// Creates a new builder-style object to manufacture [`ListVolumeRecoveryPointsInput`](crate::input::ListVolumeRecoveryPointsInput)
    pub fn builder() -> crate::input::list_volume_recovery_points_input::Builder {
        crate::input::list_volume_recovery_points_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListVolumeRecoveryPoints,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListVolumeRecoveryPoints",
            crate::operation::ListVolumeRecoveryPoints::new(),
            config,
        )
    }
}

/// Input of [`ListVolumes`](crate::operation::ListVolumes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ListVolumesInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Limits the number of items returned in the response.
    ///
    /// Range: 1 -
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}
impl ListVolumesInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn limit(&self) -> Option<i32> {
        self.limit
    }
}
/// See [`ListVolumesInput`](crate::input::ListVolumesInput)
pub mod list_volumes_input {
    /// A builder for [`ListVolumesInput`](crate::input::ListVolumesInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) marker: Option<String>,
        pub(crate) limit: Option<i32>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
            self
        }
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: Option<i32>) -> Self {
            self.limit = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ListVolumes`](crate::operation::ListVolumes)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ListVolumes,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ListVolumesInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ListVolumesInput {
        fn from(builder: Builder) -> Self {
            crate::input::ListVolumesInput {
                gateway_arn: builder.gateway_arn,
                marker: builder.marker,
                limit: builder.limit,
            }
        }
    }
}
impl ListVolumesInput {
    /// Creates a new builder-style object to manufacture [`ListVolumesInput`](crate::input::ListVolumesInput)
    pub fn builder() -> crate::input::list_volumes_input::Builder {
        crate::input::list_volumes_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ListVolumes,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ListVolumes",
            crate::operation::ListVolumes::new(),
            config,
        )
    }
}

/// Input of [`NotifyWhenUploaded`](crate::operation::NotifyWhenUploaded)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct NotifyWhenUploadedInput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
}
impl NotifyWhenUploadedInput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
}
/// See [`NotifyWhenUploadedInput`](crate::input::NotifyWhenUploadedInput)
pub mod notify_when_uploaded_input {
    /// A builder for [`NotifyWhenUploadedInput`](crate::input::NotifyWhenUploadedInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
    }
    impl Builder {
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`NotifyWhenUploaded`](crate::operation::NotifyWhenUploaded)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::NotifyWhenUploaded,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::NotifyWhenUploadedInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::NotifyWhenUploadedInput {
        fn from(builder: Builder) -> Self {
            crate::input::NotifyWhenUploadedInput {
                file_share_arn: builder.file_share_arn,
            }
        }
    }
}
impl NotifyWhenUploadedInput {
    /// Creates a new builder-style object to manufacture [`NotifyWhenUploadedInput`](crate::input::NotifyWhenUploadedInput)
    pub fn builder() -> crate::input::notify_when_uploaded_input::Builder {
        crate::input::notify_when_uploaded_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::NotifyWhenUploaded,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "NotifyWhenUploaded",
            crate::operation::NotifyWhenUploaded::new(),
            config,
        )
    }
}

/// Input of [`RefreshCache`](crate::operation::RefreshCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RefreshCacheInput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
    #[serde(rename = "FolderList", skip_serializing_if = "Option::is_none")]
    pub folder_list: Option<Vec<String>>,
    #[serde(rename = "Recursive", skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
}
impl RefreshCacheInput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn folder_list(&self) -> Option<&[String]> {
        self.folder_list.as_deref()
    }
    pub fn recursive(&self) -> Option<bool> {
        self.recursive
    }
}
/// See [`RefreshCacheInput`](crate::input::RefreshCacheInput)
pub mod refresh_cache_input {
    /// A builder for [`RefreshCacheInput`](crate::input::RefreshCacheInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
        pub(crate) folder_list: Option<Vec<String>>,
        pub(crate) recursive: Option<bool>,
    }
    impl Builder {
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        /// Appends an item to `folder_list`
        pub fn folder_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.folder_list.unwrap_or_default();
            v.push(input.into());
            self.folder_list = Some(v);
            self
        }
        pub fn set_folder_list(mut self, input: Option<Vec<String>>) -> Self {
            self.folder_list = input;
            self
        }
        pub fn recursive(mut self, input: bool) -> Self {
            self.recursive = Some(input);
            self
        }
        pub fn set_recursive(mut self, input: Option<bool>) -> Self {
            self.recursive = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`RefreshCache`](crate::operation::RefreshCache)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::RefreshCache,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::RefreshCacheInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::RefreshCacheInput {
        fn from(builder: Builder) -> Self {
            crate::input::RefreshCacheInput {
                file_share_arn: builder.file_share_arn,
                folder_list: builder.folder_list,
                recursive: builder.recursive,
            }
        }
    }
}
impl RefreshCacheInput {
    /// Creates a new builder-style object to manufacture [`RefreshCacheInput`](crate::input::RefreshCacheInput)
    pub fn builder() -> crate::input::refresh_cache_input::Builder {
        crate::input::refresh_cache_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::RefreshCache,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "RefreshCache",
            crate::operation::RefreshCache::new(),
            config,
        )
    }
}

/// Input of [`RemoveTagsFromResource`](crate::operation::RemoveTagsFromResource)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RemoveTagsFromResourceInput {
    /// The Amazon Resource Name (ARN) of the resource.
    ///
    /// Length: 50 - 500
    #[serde(rename = "ResourceARN", skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,
    #[serde(rename = "TagKeys", skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}
impl RemoveTagsFromResourceInput {
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }
    pub fn tag_keys(&self) -> Option<&[String]> {
        self.tag_keys.as_deref()
    }
}
/// See [`RemoveTagsFromResourceInput`](crate::input::RemoveTagsFromResourceInput)
pub mod remove_tags_from_resource_input {
    /// A builder for [`RemoveTagsFromResourceInput`](crate::input::RemoveTagsFromResourceInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: Option<String>,
        pub(crate) tag_keys: Option<Vec<String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: Option<String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Appends an item to `tag_keys`
        pub fn tag_keys(mut self, input: impl Into<String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(mut self, input: Option<Vec<String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`RemoveTagsFromResource`](crate::operation::RemoveTagsFromResource)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::RemoveTagsFromResource,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::RemoveTagsFromResourceInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::RemoveTagsFromResourceInput {
        fn from(builder: Builder) -> Self {
            crate::input::RemoveTagsFromResourceInput {
                resource_arn: builder.resource_arn,
                tag_keys: builder.tag_keys,
            }
        }
    }
}
impl RemoveTagsFromResourceInput {
    /// Creates a new builder-style object to manufacture [`RemoveTagsFromResourceInput`](crate::input::RemoveTagsFromResourceInput)
    pub fn builder() -> crate::input::remove_tags_from_resource_input::Builder {
        crate::input::remove_tags_from_resource_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::RemoveTagsFromResource,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "RemoveTagsFromResource",
            crate::operation::RemoveTagsFromResource::new(),
            config,
        )
    }
}

/// Input of [`ResetCache`](crate::operation::ResetCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ResetCacheInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl ResetCacheInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ResetCacheInput`](crate::input::ResetCacheInput)
pub mod reset_cache_input {
    /// A builder for [`ResetCacheInput`](crate::input::ResetCacheInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ResetCache`](crate::operation::ResetCache)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ResetCache,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ResetCacheInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ResetCacheInput {
        fn from(builder: Builder) -> Self {
            crate::input::ResetCacheInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl ResetCacheInput {
    /// Creates a new builder-style object to manufacture [`ResetCacheInput`](crate::input::ResetCacheInput)
    pub fn builder() -> crate::input::reset_cache_input::Builder {
        crate::input::reset_cache_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ResetCache,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ResetCache",
            crate::operation::ResetCache::new(),
            config,
        )
    }
}

/// Input of [`RetrieveTapeArchive`](crate::operation::RetrieveTapeArchive)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RetrieveTapeArchiveInput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl RetrieveTapeArchiveInput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`RetrieveTapeArchiveInput`](crate::input::RetrieveTapeArchiveInput)
pub mod retrieve_tape_archive_input {
    /// A builder for [`RetrieveTapeArchiveInput`](crate::input::RetrieveTapeArchiveInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        pub fn set_tape_arn(mut self, input: Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`RetrieveTapeArchive`](crate::operation::RetrieveTapeArchive)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::RetrieveTapeArchive,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::RetrieveTapeArchiveInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::RetrieveTapeArchiveInput {
        fn from(builder: Builder) -> Self {
            crate::input::RetrieveTapeArchiveInput {
                tape_arn: builder.tape_arn,
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl RetrieveTapeArchiveInput {
    /// Creates a new builder-style object to manufacture [`RetrieveTapeArchiveInput`](crate::input::RetrieveTapeArchiveInput)
    pub fn builder() -> crate::input::retrieve_tape_archive_input::Builder {
        crate::input::retrieve_tape_archive_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::RetrieveTapeArchive,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "RetrieveTapeArchive",
            crate::operation::RetrieveTapeArchive::new(),
            config,
        )
    }
}

/// Input of [`RetrieveTapeRecoveryPoint`](crate::operation::RetrieveTapeRecoveryPoint)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RetrieveTapeRecoveryPointInput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl RetrieveTapeRecoveryPointInput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`RetrieveTapeRecoveryPointInput`](crate::input::RetrieveTapeRecoveryPointInput)
pub mod retrieve_tape_recovery_point_input {
    /// A builder for [`RetrieveTapeRecoveryPointInput`](crate::input::RetrieveTapeRecoveryPointInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn tape_arn(mut self, input: impl Into<String>) -> Self {
            self.tape_arn = Some(input.into());
            self
        }
        pub fn set_tape_arn(mut self, input: Option<String>) -> Self {
            self.tape_arn = input;
            self
        }
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`RetrieveTapeRecoveryPoint`](crate::operation::RetrieveTapeRecoveryPoint)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::RetrieveTapeRecoveryPoint,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::RetrieveTapeRecoveryPointInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::RetrieveTapeRecoveryPointInput {
        fn from(builder: Builder) -> Self {
            crate::input::RetrieveTapeRecoveryPointInput {
                tape_arn: builder.tape_arn,
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl RetrieveTapeRecoveryPointInput {
    /// Creates a new builder-style object to manufacture [`RetrieveTapeRecoveryPointInput`](crate::input::RetrieveTapeRecoveryPointInput)
    pub fn builder() -> crate::input::retrieve_tape_recovery_point_input::Builder {
        crate::input::retrieve_tape_recovery_point_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::RetrieveTapeRecoveryPoint,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "RetrieveTapeRecoveryPoint",
            crate::operation::RetrieveTapeRecoveryPoint::new(),
            config,
        )
    }
}

/// Input of [`SetLocalConsolePassword`](crate::operation::SetLocalConsolePassword)
#[non_exhaustive]
#[derive(Clone, PartialEq, Serialize)]
pub struct SetLocalConsolePasswordInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The password you want to set for your VM local console. Redacted from `Debug` output.
    ///
    /// Length: 6 - 512
    #[serde(rename = "LocalConsolePassword", skip_serializing_if = "Option::is_none")]
    pub local_console_password: Option<String>,
}
impl SetLocalConsolePasswordInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn local_console_password(&self) -> Option<&str> {
        self.local_console_password.as_deref()
    }
}
impl std::fmt::Debug for SetLocalConsolePasswordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SetLocalConsolePasswordInput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("local_console_password", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`SetLocalConsolePasswordInput`](crate::input::SetLocalConsolePasswordInput)
pub mod set_local_console_password_input {
    /// A builder for [`SetLocalConsolePasswordInput`](crate::input::SetLocalConsolePasswordInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) local_console_password: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn local_console_password(mut self, input: impl Into<String>) -> Self {
            self.local_console_password = Some(input.into());
            self
        }
        pub fn set_local_console_password(mut self, input: Option<String>) -> Self {
            self.local_console_password = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`SetLocalConsolePassword`](crate::operation::SetLocalConsolePassword)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::SetLocalConsolePassword,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::SetLocalConsolePasswordInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::SetLocalConsolePasswordInput {
        fn from(builder: Builder) -> Self {
            crate::input::SetLocalConsolePasswordInput {
                gateway_arn: builder.gateway_arn,
                local_console_password: builder.local_console_password,
            }
        }
    }
    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("gateway_arn", &self.gateway_arn);
            formatter.field("local_console_password", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}
impl SetLocalConsolePasswordInput {
    /// Creates a new builder-style object to manufacture [`SetLocalConsolePasswordInput`](crate::input::SetLocalConsolePasswordInput)
    pub fn builder() -> crate::input::set_local_console_password_input::Builder {
        crate::input::set_local_console_password_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::SetLocalConsolePassword,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "SetLocalConsolePassword",
            crate::operation::SetLocalConsolePassword::new(),
            config,
        )
    }
}

/// Input of [`SetSmbGuestPassword`](crate::operation::SetSmbGuestPassword)
#[non_exhaustive]
#[derive(Clone, PartialEq, Serialize)]
pub struct SetSmbGuestPasswordInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The password of the Active Directory user or SMB guest. Redacted from `Debug` output.
    ///
    /// Length: 6 - 512
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
impl SetSmbGuestPasswordInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}
impl std::fmt::Debug for SetSmbGuestPasswordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SetSmbGuestPasswordInput");
        formatter.field("gateway_arn", &self.gateway_arn);
        formatter.field("password", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`SetSmbGuestPasswordInput`](crate::input::SetSmbGuestPasswordInput)
pub mod set_smb_guest_password_input {
    /// A builder for [`SetSmbGuestPasswordInput`](crate::input::SetSmbGuestPasswordInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) password: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn password(mut self, input: impl Into<String>) -> Self {
            self.password = Some(input.into());
            self
        }
        pub fn set_password(mut self, input: Option<String>) -> Self {
            self.password = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`SetSmbGuestPassword`](crate::operation::SetSmbGuestPassword)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::SetSmbGuestPassword,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::SetSmbGuestPasswordInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::SetSmbGuestPasswordInput {
        fn from(builder: Builder) -> Self {
            crate::input::SetSmbGuestPasswordInput {
                gateway_arn: builder.gateway_arn,
                password: builder.password,
            }
        }
    }
    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("gateway_arn", &self.gateway_arn);
            formatter.field("password", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}
impl SetSmbGuestPasswordInput {
    /// Creates a new builder-style object to manufacture [`SetSmbGuestPasswordInput`](crate::input::SetSmbGuestPasswordInput)
    pub fn builder() -> crate::input::set_smb_guest_password_input::Builder {
        crate::input::set_smb_guest_password_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::SetSmbGuestPassword,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "SetSMBGuestPassword",
            crate::operation::SetSmbGuestPassword::new(),
            config,
        )
    }
}

/// Input of [`ShutdownGateway`](crate::operation::ShutdownGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ShutdownGatewayInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl ShutdownGatewayInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ShutdownGatewayInput`](crate::input::ShutdownGatewayInput)
pub mod shutdown_gateway_input {
    /// A builder for [`ShutdownGatewayInput`](crate::input::ShutdownGatewayInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`ShutdownGateway`](crate::operation::ShutdownGateway)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::ShutdownGateway,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::ShutdownGatewayInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::ShutdownGatewayInput {
        fn from(builder: Builder) -> Self {
            crate::input::ShutdownGatewayInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl ShutdownGatewayInput {
    /// Creates a new builder-style object to manufacture [`ShutdownGatewayInput`](crate::input::ShutdownGatewayInput)
    pub fn builder() -> crate::input::shutdown_gateway_input::Builder {
        crate::input::shutdown_gateway_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::ShutdownGateway,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "ShutdownGateway",
            crate::operation::ShutdownGateway::new(),
            config,
        )
    }
}

/// Input of [`StartAvailabilityMonitorTest`](crate::operation::StartAvailabilityMonitorTest)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct StartAvailabilityMonitorTestInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl StartAvailabilityMonitorTestInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`StartAvailabilityMonitorTestInput`](crate::input::StartAvailabilityMonitorTestInput)
pub mod start_availability_monitor_test_input {
    /// A builder for [`StartAvailabilityMonitorTestInput`](crate::input::StartAvailabilityMonitorTestInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`StartAvailabilityMonitorTest`](crate::operation::StartAvailabilityMonitorTest)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::StartAvailabilityMonitorTest,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::StartAvailabilityMonitorTestInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::StartAvailabilityMonitorTestInput {
        fn from(builder: Builder) -> Self {
            crate::input::StartAvailabilityMonitorTestInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl StartAvailabilityMonitorTestInput {
    /// Creates a new builder-style object to manufacture [`StartAvailabilityMonitorTestInput`](crate::input::StartAvailabilityMonitorTestInput)
    pub fn builder() -> crate::input::start_availability_monitor_test_input::Builder {
        crate::input::start_availability_monitor_test_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::StartAvailabilityMonitorTest,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "StartAvailabilityMonitorTest",
            crate::operation::StartAvailabilityMonitorTest::new(),
            config,
        )
    }
}

/// Input of [`StartGateway`](crate::operation::StartGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct StartGatewayInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl StartGatewayInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`StartGatewayInput`](crate::input::StartGatewayInput)
pub mod start_gateway_input {
    /// A builder for [`StartGatewayInput`](crate::input::StartGatewayInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`StartGateway`](crate::operation::StartGateway)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::StartGateway,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::StartGatewayInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::StartGatewayInput {
        fn from(builder: Builder) -> Self {
            crate::input::StartGatewayInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl StartGatewayInput {
    /// Creates a new builder-style object to manufacture [`StartGatewayInput`](crate::input::StartGatewayInput)
    pub fn builder() -> crate::input::start_gateway_input::Builder {
        crate::input::start_gateway_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::StartGateway,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "StartGateway",
            crate::operation::StartGateway::new(),
            config,
        )
    }
}

/// Input of [`UpdateAutomaticTapeCreationPolicy`](crate::operation::UpdateAutomaticTapeCreationPolicy)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateAutomaticTapeCreationPolicyInput {
    #[serde(rename = "AutomaticTapeCreationRules", skip_serializing_if = "Option::is_none")]
    pub automatic_tape_creation_rules: Option<Vec<crate::model::AutomaticTapeCreationRule>>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl UpdateAutomaticTapeCreationPolicyInput {
    pub fn automatic_tape_creation_rules(
        &self,
    ) -> Option<&[crate::model::AutomaticTapeCreationRule]> {
        self.automatic_tape_creation_rules.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`UpdateAutomaticTapeCreationPolicyInput`](crate::input::UpdateAutomaticTapeCreationPolicyInput)
pub mod update_automatic_tape_creation_policy_input {
    /// A builder for [`UpdateAutomaticTapeCreationPolicyInput`](crate::input::UpdateAutomaticTapeCreationPolicyInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) automatic_tape_creation_rules:
            Option<Vec<crate::model::AutomaticTapeCreationRule>>,
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        /// Appends an item to `automatic_tape_creation_rules`
        pub fn automatic_tape_creation_rules(
            mut self,
            input: impl Into<crate::model::AutomaticTapeCreationRule>,
        ) -> Self {
            let mut v = self.automatic_tape_creation_rules.unwrap_or_default();
            v.push(input.into());
            self.automatic_tape_creation_rules = Some(v);
            self
        }
        pub fn set_automatic_tape_creation_rules(
            mut self,
            input: Option<Vec<crate::model::AutomaticTapeCreationRule>>,
        ) -> Self {
            self.automatic_tape_creation_rules = input;
            self
        }
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateAutomaticTapeCreationPolicy`](crate::operation::UpdateAutomaticTapeCreationPolicy)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateAutomaticTapeCreationPolicy,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateAutomaticTapeCreationPolicyInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateAutomaticTapeCreationPolicyInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateAutomaticTapeCreationPolicyInput {
                automatic_tape_creation_rules: builder.automatic_tape_creation_rules,
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl UpdateAutomaticTapeCreationPolicyInput {
    /// Creates a new builder-style object to manufacture [`UpdateAutomaticTapeCreationPolicyInput`](crate::input::UpdateAutomaticTapeCreationPolicyInput)
    pub fn builder() -> crate::input::update_automatic_tape_creation_policy_input::Builder {
        crate::input::update_automatic_tape_creation_policy_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateAutomaticTapeCreationPolicy,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateAutomaticTapeCreationPolicy",
            crate::operation::UpdateAutomaticTapeCreationPolicy::new(),
            config,
        )
    }
}

/// Input of [`UpdateBandwidthRateLimit`](crate::operation::UpdateBandwidthRateLimit)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateBandwidthRateLimitInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "AverageUploadRateLimitInBitsPerSec", skip_serializing_if = "Option::is_none")]
    pub average_upload_rate_limit_in_bits_per_sec: Option<i64>,
    #[serde(
        rename = "AverageDownloadRateLimitInBitsPerSec",
        skip_serializing_if = "Option::is_none",
    )]
    pub average_download_rate_limit_in_bits_per_sec: Option<i64>,
}
impl UpdateBandwidthRateLimitInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn average_upload_rate_limit_in_bits_per_sec(&self) -> Option<i64> {
        self.average_upload_rate_limit_in_bits_per_sec
    }
    pub fn average_download_rate_limit_in_bits_per_sec(&self) -> Option<i64> {
        self.average_download_rate_limit_in_bits_per_sec
    }
}
/// See [`UpdateBandwidthRateLimitInput`](crate::input::UpdateBandwidthRateLimitInput)
pub mod update_bandwidth_rate_limit_input {
    /// A builder for [`UpdateBandwidthRateLimitInput`](crate::input::UpdateBandwidthRateLimitInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) average_upload_rate_limit_in_bits_per_sec: Option<i64>,
        pub(crate) average_download_rate_limit_in_bits_per_sec: Option<i64>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn average_upload_rate_limit_in_bits_per_sec(mut self, input: i64) -> Self {
            self.average_upload_rate_limit_in_bits_per_sec = Some(input);
            self
        }
        pub fn set_average_upload_rate_limit_in_bits_per_sec(mut self, input: Option<i64>) -> Self {
            self.average_upload_rate_limit_in_bits_per_sec = input;
            self
        }
        pub fn average_download_rate_limit_in_bits_per_sec(mut self, input: i64) -> Self {
            self.average_download_rate_limit_in_bits_per_sec = Some(input);
            self
        }
        pub fn set_average_download_rate_limit_in_bits_per_sec(
            mut self,
            input: Option<i64>,
        ) -> Self {
            self.average_download_rate_limit_in_bits_per_sec = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateBandwidthRateLimit`](crate::operation::UpdateBandwidthRateLimit)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateBandwidthRateLimit,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateBandwidthRateLimitInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateBandwidthRateLimitInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateBandwidthRateLimitInput {
                gateway_arn: builder.gateway_arn,
                average_upload_rate_limit_in_bits_per_sec:
                    builder.average_upload_rate_limit_in_bits_per_sec,
                average_download_rate_limit_in_bits_per_sec:
                    builder.average_download_rate_limit_in_bits_per_sec,
            }
        }
    }
}
impl UpdateBandwidthRateLimitInput {
    /// Creates a new builder-style object to manufacture [`UpdateBandwidthRateLimitInput`](crate::input::UpdateBandwidthRateLimitInput)
    pub fn builder() -> crate::input::update_bandwidth_rate_limit_input::Builder {
        crate::input::update_bandwidth_rate_limit_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateBandwidthRateLimit,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateBandwidthRateLimit",
            crate::operation::UpdateBandwidthRateLimit::new(),
            config,
        )
    }
}

/// Input of [`UpdateChapCredentials`](crate::operation::UpdateChapCredentials)
#[non_exhaustive]
#[derive(Clone, PartialEq, Serialize)]
pub struct UpdateChapCredentialsInput {
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN", skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
    /// The secret key that the initiator must provide to authenticate the target. Redacted from `Debug` output.
    ///
    /// Length: 1 - 100
    #[serde(rename = "SecretToAuthenticateInitiator", skip_serializing_if = "Option::is_none")]
    pub secret_to_authenticate_initiator: Option<String>,
    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 - 255
    #[serde(rename = "InitiatorName", skip_serializing_if = "Option::is_none")]
    pub initiator_name: Option<String>,
    /// The secret key that the target must provide to authenticate the initiator, for mutual CHAP. Redacted from `Debug` output.
    ///
    /// Length: 1 - 100
    #[serde(rename = "SecretToAuthenticateTarget", skip_serializing_if = "Option::is_none")]
    pub secret_to_authenticate_target: Option<String>,
}
impl UpdateChapCredentialsInput {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
    pub fn secret_to_authenticate_initiator(&self) -> Option<&str> {
        self.secret_to_authenticate_initiator.as_deref()
    }
    pub fn initiator_name(&self) -> Option<&str> {
        self.initiator_name.as_deref()
    }
    pub fn secret_to_authenticate_target(&self) -> Option<&str> {
        self.secret_to_authenticate_target.as_deref()
    }
}
impl std::fmt::Debug for UpdateChapCredentialsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateChapCredentialsInput");
        formatter.field("target_arn", &self.target_arn);
        formatter.field("secret_to_authenticate_initiator", &"*** Sensitive Data Redacted ***");
        formatter.field("initiator_name", &self.initiator_name);
        formatter.field("secret_to_authenticate_target", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`UpdateChapCredentialsInput`](crate::input::UpdateChapCredentialsInput)
pub mod update_chap_credentials_input {
    /// A builder for [`UpdateChapCredentialsInput`](crate::input::UpdateChapCredentialsInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq)]
    pub struct Builder {
        pub(crate) target_arn: Option<String>,
        pub(crate) secret_to_authenticate_initiator: Option<String>,
        pub(crate) initiator_name: Option<String>,
        pub(crate) secret_to_authenticate_target: Option<String>,
    }
    impl Builder {
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        pub fn set_target_arn(mut self, input: Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        pub fn secret_to_authenticate_initiator(mut self, input: impl Into<String>) -> Self {
            self.secret_to_authenticate_initiator = Some(input.into());
            self
        }
        pub fn set_secret_to_authenticate_initiator(mut self, input: Option<String>) -> Self {
            self.secret_to_authenticate_initiator = input;
            self
        }
        pub fn initiator_name(mut self, input: impl Into<String>) -> Self {
            self.initiator_name = Some(input.into());
            self
        }
        pub fn set_initiator_name(mut self, input: Option<String>) -> Self {
            self.initiator_name = input;
            self
        }
        pub fn secret_to_authenticate_target(mut self, input: impl Into<String>) -> Self {
            self.secret_to_authenticate_target = Some(input.into());
            self
        }
        pub fn set_secret_to_authenticate_target(mut self, input: Option<String>) -> Self {
            self.secret_to_authenticate_target = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateChapCredentials`](crate::operation::UpdateChapCredentials)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateChapCredentials,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateChapCredentialsInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateChapCredentialsInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateChapCredentialsInput {
                target_arn: builder.target_arn,
                secret_to_authenticate_initiator: builder.secret_to_authenticate_initiator,
                initiator_name: builder.initiator_name,
                secret_to_authenticate_target: builder.secret_to_authenticate_target,
            }
        }
    }
    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("target_arn", &self.target_arn);
            formatter.field("secret_to_authenticate_initiator", &"*** Sensitive Data Redacted ***");
            formatter.field("initiator_name", &self.initiator_name);
            formatter.field("secret_to_authenticate_target", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}
impl UpdateChapCredentialsInput {
    /// Creates a new builder-style object to manufacture [`UpdateChapCredentialsInput`](crate::input::UpdateChapCredentialsInput)
    pub fn builder() -> crate::input::update_chap_credentials_input::Builder {
        crate::input::update_chap_credentials_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateChapCredentials,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateChapCredentials",
            crate::operation::UpdateChapCredentials::new(),
            config,
        )
    }
}

/// Input of [`UpdateGatewayInformation`](crate::operation::UpdateGatewayInformation)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateGatewayInformationInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "GatewayName", skip_serializing_if = "Option::is_none")]
    pub gateway_name: Option<String>,
    /// A value that indicates the time zone of the gateway, e.g. `GMT-4:00`.
    #[serde(rename = "GatewayTimezone", skip_serializing_if = "Option::is_none")]
    pub gateway_timezone: Option<String>,
    #[serde(rename = "CloudWatchLogGroupARN", skip_serializing_if = "Option::is_none")]
    pub cloud_watch_log_group_arn: Option<String>,
}
impl UpdateGatewayInformationInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn gateway_name(&self) -> Option<&str> {
        self.gateway_name.as_deref()
    }
    pub fn gateway_timezone(&self) -> Option<&str> {
        self.gateway_timezone.as_deref()
    }
    pub fn cloud_watch_log_group_arn(&self) -> Option<&str> {
        self.cloud_watch_log_group_arn.as_deref()
    }
}
/// See [`UpdateGatewayInformationInput`](crate::input::UpdateGatewayInformationInput)
pub mod update_gateway_information_input {
    /// A builder for [`UpdateGatewayInformationInput`](crate::input::UpdateGatewayInformationInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) gateway_name: Option<String>,
        pub(crate) gateway_timezone: Option<String>,
        pub(crate) cloud_watch_log_group_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn gateway_name(mut self, input: impl Into<String>) -> Self {
            self.gateway_name = Some(input.into());
            self
        }
        pub fn set_gateway_name(mut self, input: Option<String>) -> Self {
            self.gateway_name = input;
            self
        }
        pub fn gateway_timezone(mut self, input: impl Into<String>) -> Self {
            self.gateway_timezone = Some(input.into());
            self
        }
        pub fn set_gateway_timezone(mut self, input: Option<String>) -> Self {
            self.gateway_timezone = input;
            self
        }
        pub fn cloud_watch_log_group_arn(mut self, input: impl Into<String>) -> Self {
            self.cloud_watch_log_group_arn = Some(input.into());
            self
        }
        pub fn set_cloud_watch_log_group_arn(mut self, input: Option<String>) -> Self {
            self.cloud_watch_log_group_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateGatewayInformation`](crate::operation::UpdateGatewayInformation)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateGatewayInformation,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateGatewayInformationInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateGatewayInformationInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateGatewayInformationInput {
                gateway_arn: builder.gateway_arn,
                gateway_name: builder.gateway_name,
                gateway_timezone: builder.gateway_timezone,
                cloud_watch_log_group_arn: builder.cloud_watch_log_group_arn,
            }
        }
    }
}
impl UpdateGatewayInformationInput {
    /// Creates a new builder-style object to manufacture [`UpdateGatewayInformationInput`](crate::input::UpdateGatewayInformationInput)
    pub fn builder() -> crate::input::update_gateway_information_input::Builder {
        crate::input::update_gateway_information_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateGatewayInformation,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateGatewayInformation",
            crate::operation::UpdateGatewayInformation::new(),
            config,
        )
    }
}

/// Input of [`UpdateGatewaySoftwareNow`](crate::operation::UpdateGatewaySoftwareNow)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateGatewaySoftwareNowInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl UpdateGatewaySoftwareNowInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`UpdateGatewaySoftwareNowInput`](crate::input::UpdateGatewaySoftwareNowInput)
pub mod update_gateway_software_now_input {
    /// A builder for [`UpdateGatewaySoftwareNowInput`](crate::input::UpdateGatewaySoftwareNowInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateGatewaySoftwareNow`](crate::operation::UpdateGatewaySoftwareNow)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateGatewaySoftwareNow,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateGatewaySoftwareNowInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateGatewaySoftwareNowInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateGatewaySoftwareNowInput {
                gateway_arn: builder.gateway_arn,
            }
        }
    }
}
impl UpdateGatewaySoftwareNowInput {
    /// Creates a new builder-style object to manufacture [`UpdateGatewaySoftwareNowInput`](crate::input::UpdateGatewaySoftwareNowInput)
    pub fn builder() -> crate::input::update_gateway_software_now_input::Builder {
        crate::input::update_gateway_software_now_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateGatewaySoftwareNow,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateGatewaySoftwareNow",
            crate::operation::UpdateGatewaySoftwareNow::new(),
            config,
        )
    }
}

/// Input of [`UpdateMaintenanceStartTime`](crate::operation::UpdateMaintenanceStartTime)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateMaintenanceStartTimeInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "HourOfDay", skip_serializing_if = "Option::is_none")]
    pub hour_of_day: Option<i32>,
    #[serde(rename = "MinuteOfHour", skip_serializing_if = "Option::is_none")]
    pub minute_of_hour: Option<i32>,
    #[serde(rename = "DayOfWeek", skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<i32>,
    #[serde(rename = "DayOfMonth", skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i32>,
}
impl UpdateMaintenanceStartTimeInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn hour_of_day(&self) -> Option<i32> {
        self.hour_of_day
    }
    pub fn minute_of_hour(&self) -> Option<i32> {
        self.minute_of_hour
    }
    pub fn day_of_week(&self) -> Option<i32> {
        self.day_of_week
    }
    pub fn day_of_month(&self) -> Option<i32> {
        self.day_of_month
    }
}
/// See [`UpdateMaintenanceStartTimeInput`](crate::input::UpdateMaintenanceStartTimeInput)
pub mod update_maintenance_start_time_input {
    /// A builder for [`UpdateMaintenanceStartTimeInput`](crate::input::UpdateMaintenanceStartTimeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) hour_of_day: Option<i32>,
        pub(crate) minute_of_hour: Option<i32>,
        pub(crate) day_of_week: Option<i32>,
        pub(crate) day_of_month: Option<i32>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn hour_of_day(mut self, input: i32) -> Self {
            self.hour_of_day = Some(input);
            self
        }
        pub fn set_hour_of_day(mut self, input: Option<i32>) -> Self {
            self.hour_of_day = input;
            self
        }
        pub fn minute_of_hour(mut self, input: i32) -> Self {
            self.minute_of_hour = Some(input);
            self
        }
        pub fn set_minute_of_hour(mut self, input: Option<i32>) -> Self {
            self.minute_of_hour = input;
            self
        }
        pub fn day_of_week(mut self, input: i32) -> Self {
            self.day_of_week = Some(input);
            self
        }
        pub fn set_day_of_week(mut self, input: Option<i32>) -> Self {
            self.day_of_week = input;
            self
        }
        pub fn day_of_month(mut self, input: i32) -> Self {
            self.day_of_month = Some(input);
            self
        }
        pub fn set_day_of_month(mut self, input: Option<i32>) -> Self {
            self.day_of_month = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateMaintenanceStartTime`](crate::operation::UpdateMaintenanceStartTime)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateMaintenanceStartTime,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateMaintenanceStartTimeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateMaintenanceStartTimeInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateMaintenanceStartTimeInput {
                gateway_arn: builder.gateway_arn,
                hour_of_day: builder.hour_of_day,
                minute_of_hour: builder.minute_of_hour,
                day_of_week: builder.day_of_week,
                day_of_month: builder.day_of_month,
            }
        }
    }
}
impl UpdateMaintenanceStartTimeInput {
    /// Creates a new builder-style object to manufacture [`UpdateMaintenanceStartTimeInput`](crate::input::UpdateMaintenanceStartTimeInput)
    pub fn builder() -> crate::input::update_maintenance_start_time_input::Builder {
        crate::input::update_maintenance_start_time_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateMaintenanceStartTime,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateMaintenanceStartTime",
            crate::operation::UpdateMaintenanceStartTime::new(),
            config,
        )
    }
}

/// Input of [`UpdateNfsFileShare`](crate::operation::UpdateNfsFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateNfsFileShareInput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, false to use a key managed by Amazon S3.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    #[serde(rename = "NFSFileShareDefaults", skip_serializing_if = "Option::is_none")]
    pub nfs_file_share_defaults: Option<crate::model::NfsFileShareDefaults>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway: `S3_STANDARD`, `S3_STANDARD_IA` or `S3_ONEZONE_IA`.
    ///
    /// Length: 5 - 50
    #[serde(rename = "DefaultStorageClass", skip_serializing_if = "Option::is_none")]
    pub default_storage_class: Option<String>,
    /// A value that sets the access control list permission for objects in the S3 bucket that a file gateway puts objects into.
    #[serde(rename = "ObjectACL", skip_serializing_if = "Option::is_none")]
    pub object_acl: Option<crate::model::ObjectAcl>,
    #[serde(rename = "ClientList", skip_serializing_if = "Option::is_none")]
    pub client_list: Option<Vec<String>>,
    #[serde(rename = "Squash", skip_serializing_if = "Option::is_none")]
    pub squash: Option<String>,
    #[serde(rename = "ReadOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "Option::is_none")]
    pub guess_mime_type_enabled: Option<bool>,
    #[serde(rename = "RequesterPays", skip_serializing_if = "Option::is_none")]
    pub requester_pays: Option<bool>,
}
impl UpdateNfsFileShareInput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn nfs_file_share_defaults(&self) -> Option<&crate::model::NfsFileShareDefaults> {
        self.nfs_file_share_defaults.as_ref()
    }
    pub fn default_storage_class(&self) -> Option<&str> {
        self.default_storage_class.as_deref()
    }
    pub fn object_acl(&self) -> Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }
    pub fn client_list(&self) -> Option<&[String]> {
        self.client_list.as_deref()
    }
    pub fn squash(&self) -> Option<&str> {
        self.squash.as_deref()
    }
    pub fn read_only(&self) -> Option<bool> {
        self.read_only
    }
    pub fn guess_mime_type_enabled(&self) -> Option<bool> {
        self.guess_mime_type_enabled
    }
    pub fn requester_pays(&self) -> Option<bool> {
        self.requester_pays
    }
}
/// See [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput)
pub mod update_nfs_file_share_input {
    /// A builder for [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) nfs_file_share_defaults: Option<crate::model::NfsFileShareDefaults>,
        pub(crate) default_storage_class: Option<String>,
        pub(crate) object_acl: Option<crate::model::ObjectAcl>,
        pub(crate) client_list: Option<Vec<String>>,
        pub(crate) squash: Option<String>,
        pub(crate) read_only: Option<bool>,
        pub(crate) guess_mime_type_enabled: Option<bool>,
        pub(crate) requester_pays: Option<bool>,
    }
    impl Builder {
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        pub fn nfs_file_share_defaults(
            mut self,
            input: crate::model::NfsFileShareDefaults,
        ) -> Self {
            self.nfs_file_share_defaults = Some(input);
            self
        }
        pub fn set_nfs_file_share_defaults(
            mut self,
            input: Option<crate::model::NfsFileShareDefaults>,
        ) -> Self {
            self.nfs_file_share_defaults = input;
            self
        }
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        pub fn set_default_storage_class(mut self, input: Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        pub fn object_acl(mut self, input: crate::model::ObjectAcl) -> Self {
            self.object_acl = Some(input);
            self
        }
        pub fn set_object_acl(mut self, input: Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        /// Appends an item to `client_list`
        pub fn client_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.client_list.unwrap_or_default();
            v.push(input.into());
            self.client_list = Some(v);
            self
        }
        pub fn set_client_list(mut self, input: Option<Vec<String>>) -> Self {
            self.client_list = input;
            self
        }
        pub fn squash(mut self, input: impl Into<String>) -> Self {
            self.squash = Some(input.into());
            self
        }
        pub fn set_squash(mut self, input: Option<String>) -> Self {
            self.squash = input;
            self
        }
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        pub fn set_read_only(mut self, input: Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        pub fn set_guess_mime_type_enabled(mut self, input: Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        pub fn set_requester_pays(mut self, input: Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateNfsFileShare`](crate::operation::UpdateNfsFileShare)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateNfsFileShare,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateNfsFileShareInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateNfsFileShareInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateNfsFileShareInput {
                file_share_arn: builder.file_share_arn,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                nfs_file_share_defaults: builder.nfs_file_share_defaults,
                default_storage_class: builder.default_storage_class,
                object_acl: builder.object_acl,
                client_list: builder.client_list,
                squash: builder.squash,
                read_only: builder.read_only,
                guess_mime_type_enabled: builder.guess_mime_type_enabled,
                requester_pays: builder.requester_pays,
            }
        }
    }
}
impl UpdateNfsFileShareInput {
    /// Creates a new builder-style object to manufacture [`UpdateNfsFileShareInput`](crate::input::UpdateNfsFileShareInput)
    pub fn builder() -> crate::input::update_nfs_file_share_input::Builder {
        crate::input::update_nfs_file_share_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateNfsFileShare,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateNFSFileShare",
            crate::operation::UpdateNfsFileShare::new(),
            config,
        )
    }
}

/// Input of [`UpdateSmbFileShare`](crate::operation::UpdateSmbFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateSmbFileShareInput {
    /// The ARN of the SMB file share that you want to update.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
    /// Set to true to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3. Optional.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    ///
    /// Length: 5 - 50
    #[serde(rename = "DefaultStorageClass", skip_serializing_if = "Option::is_none")]
    pub default_storage_class: Option<String>,
    /// A value that sets the access control list (ACL) permission for objects in the S3 bucket that a file gateway puts objects into.
    ///
    /// Allowed values: `private`, `public-read`, `public-read-write`, `authenticated-read`, `bucket-owner-read`, `bucket-owner-full-control`, `aws-exec-read`
    #[serde(rename = "ObjectACL", skip_serializing_if = "Option::is_none")]
    pub object_acl: Option<crate::model::ObjectAcl>,
    /// A value that sets the write status of a file share.
    #[serde(rename = "ReadOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "Option::is_none")]
    pub guess_mime_type_enabled: Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    #[serde(rename = "RequesterPays", skip_serializing_if = "Option::is_none")]
    pub requester_pays: Option<bool>,
    /// Set this value to true to enable access control list (ACL) on the SMB file share.
    #[serde(rename = "SMBACLEnabled", skip_serializing_if = "Option::is_none")]
    pub smbacl_enabled: Option<bool>,
    /// A list of users in the Active Directory that have administrator rights to the file share.
    #[serde(rename = "AdminUserList", skip_serializing_if = "Option::is_none")]
    pub admin_user_list: Option<Vec<String>>,
    /// A list of users or groups in the Active Directory that are allowed to access the file share.
    #[serde(rename = "ValidUserList", skip_serializing_if = "Option::is_none")]
    pub valid_user_list: Option<Vec<String>>,
    /// A list of users or groups in the Active Directory that are not allowed to access the file share.
    #[serde(rename = "InvalidUserList", skip_serializing_if = "Option::is_none")]
    pub invalid_user_list: Option<Vec<String>>,
    /// The Amazon Resource Name (ARN) of the storage used for the audit logs.
    ///
    /// Length: - 1024
    #[serde(rename = "AuditDestinationARN", skip_serializing_if = "Option::is_none")]
    pub audit_destination_arn: Option<String>,
}
impl UpdateSmbFileShareInput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn kms_encrypted(&self) -> Option<bool> {
        self.kms_encrypted
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn default_storage_class(&self) -> Option<&str> {
        self.default_storage_class.as_deref()
    }
    pub fn object_acl(&self) -> Option<&crate::model::ObjectAcl> {
        self.object_acl.as_ref()
    }
    pub fn read_only(&self) -> Option<bool> {
        self.read_only
    }
    pub fn guess_mime_type_enabled(&self) -> Option<bool> {
        self.guess_mime_type_enabled
    }
    pub fn requester_pays(&self) -> Option<bool> {
        self.requester_pays
    }
    pub fn smbacl_enabled(&self) -> Option<bool> {
        self.smbacl_enabled
    }
    pub fn admin_user_list(&self) -> Option<&[String]> {
        self.admin_user_list.as_deref()
    }
    pub fn valid_user_list(&self) -> Option<&[String]> {
        self.valid_user_list.as_deref()
    }
    pub fn invalid_user_list(&self) -> Option<&[String]> {
        self.invalid_user_list.as_deref()
    }
    pub fn audit_destination_arn(&self) -> Option<&str> {
        self.audit_destination_arn.as_deref()
    }
}
/// See [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput)
pub mod update_smb_file_share_input {
    /// A builder for [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) default_storage_class: Option<String>,
        pub(crate) object_acl: Option<crate::model::ObjectAcl>,
        pub(crate) read_only: Option<bool>,
        pub(crate) guess_mime_type_enabled: Option<bool>,
        pub(crate) requester_pays: Option<bool>,
        pub(crate) smbacl_enabled: Option<bool>,
        pub(crate) admin_user_list: Option<Vec<String>>,
        pub(crate) valid_user_list: Option<Vec<String>>,
        pub(crate) invalid_user_list: Option<Vec<String>>,
        pub(crate) audit_destination_arn: Option<String>,
    }
    impl Builder {
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        pub fn kms_encrypted(mut self, input: bool) -> Self {
            self.kms_encrypted = Some(input);
            self
        }
        pub fn set_kms_encrypted(mut self, input: Option<bool>) -> Self {
            self.kms_encrypted = input;
            self
        }
        pub fn kms_key(mut self, input: impl Into<String>) -> Self {
            self.kms_key = Some(input.into());
            self
        }
        pub fn set_kms_key(mut self, input: Option<String>) -> Self {
            self.kms_key = input;
            self
        }
        pub fn default_storage_class(mut self, input: impl Into<String>) -> Self {
            self.default_storage_class = Some(input.into());
            self
        }
        pub fn set_default_storage_class(mut self, input: Option<String>) -> Self {
            self.default_storage_class = input;
            self
        }
        pub fn object_acl(mut self, input: crate::model::ObjectAcl) -> Self {
            self.object_acl = Some(input);
            self
        }
        pub fn set_object_acl(mut self, input: Option<crate::model::ObjectAcl>) -> Self {
            self.object_acl = input;
            self
        }
        pub fn read_only(mut self, input: bool) -> Self {
            self.read_only = Some(input);
            self
        }
        pub fn set_read_only(mut self, input: Option<bool>) -> Self {
            self.read_only = input;
            self
        }
        pub fn guess_mime_type_enabled(mut self, input: bool) -> Self {
            self.guess_mime_type_enabled = Some(input);
            self
        }
        pub fn set_guess_mime_type_enabled(mut self, input: Option<bool>) -> Self {
            self.guess_mime_type_enabled = input;
            self
        }
        pub fn requester_pays(mut self, input: bool) -> Self {
            self.requester_pays = Some(input);
            self
        }
        pub fn set_requester_pays(mut self, input: Option<bool>) -> Self {
            self.requester_pays = input;
            self
        }
        pub fn smbacl_enabled(mut self, input: bool) -> Self {
            self.smbacl_enabled = Some(input);
            self
        }
        pub fn set_smbacl_enabled(mut self, input: Option<bool>) -> Self {
            self.smbacl_enabled = input;
            self
        }
        /// Appends an item to `admin_user_list`
        pub fn admin_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.admin_user_list.unwrap_or_default();
            v.push(input.into());
            self.admin_user_list = Some(v);
            self
        }
        pub fn set_admin_user_list(mut self, input: Option<Vec<String>>) -> Self {
            self.admin_user_list = input;
            self
        }
        /// Appends an item to `valid_user_list`
        pub fn valid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.valid_user_list.unwrap_or_default();
            v.push(input.into());
            self.valid_user_list = Some(v);
            self
        }
        pub fn set_valid_user_list(mut self, input: Option<Vec<String>>) -> Self {
            self.valid_user_list = input;
            self
        }
        /// Appends an item to `invalid_user_list`
        pub fn invalid_user_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.invalid_user_list.unwrap_or_default();
            v.push(input.into());
            self.invalid_user_list = Some(v);
            self
        }
        pub fn set_invalid_user_list(mut self, input: Option<Vec<String>>) -> Self {
            self.invalid_user_list = input;
            self
        }
        pub fn audit_destination_arn(mut self, input: impl Into<String>) -> Self {
            self.audit_destination_arn = Some(input.into());
            self
        }
        pub fn set_audit_destination_arn(mut self, input: Option<String>) -> Self {
            self.audit_destination_arn = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateSmbFileShare`](crate::operation::UpdateSmbFileShare)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateSmbFileShare,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateSmbFileShareInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateSmbFileShareInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateSmbFileShareInput {
                file_share_arn: builder.file_share_arn,
                kms_encrypted: builder.kms_encrypted,
                kms_key: builder.kms_key,
                default_storage_class: builder.default_storage_class,
                object_acl: builder.object_acl,
                read_only: builder.read_only,
                guess_mime_type_enabled: builder.guess_mime_type_enabled,
                requester_pays: builder.requester_pays,
                smbacl_enabled: builder.smbacl_enabled,
                admin_user_list: builder.admin_user_list,
                valid_user_list: builder.valid_user_list,
                invalid_user_list: builder.invalid_user_list,
                audit_destination_arn: builder.audit_destination_arn,
            }
        }
    }
}
impl UpdateSmbFileShareInput {
    /// Creates a new builder-style object to manufacture [`UpdateSmbFileShareInput`](crate::input::UpdateSmbFileShareInput)
    pub fn builder() -> crate::input::update_smb_file_share_input::Builder {
        crate::input::update_smb_file_share_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateSmbFileShare,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateSMBFileShare",
            crate::operation::UpdateSmbFileShare::new(),
            config,
        )
    }
}

/// Input of [`UpdateSmbSecurityStrategy`](crate::operation::UpdateSmbSecurityStrategy)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateSmbSecurityStrategyInput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "SMBSecurityStrategy", skip_serializing_if = "Option::is_none")]
    pub smb_security_strategy: Option<crate::model::SmbSecurityStrategy>,
}
impl UpdateSmbSecurityStrategyInput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn smb_security_strategy(&self) -> Option<&crate::model::SmbSecurityStrategy> {
        self.smb_security_strategy.as_ref()
    }
}
/// See [`UpdateSmbSecurityStrategyInput`](crate::input::UpdateSmbSecurityStrategyInput)
pub mod update_smb_security_strategy_input {
    /// A builder for [`UpdateSmbSecurityStrategyInput`](crate::input::UpdateSmbSecurityStrategyInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) smb_security_strategy: Option<crate::model::SmbSecurityStrategy>,
    }
    impl Builder {
        pub fn gateway_arn(mut self, input: impl Into<String>) -> Self {
            self.gateway_arn = Some(input.into());
            self
        }
        pub fn set_gateway_arn(mut self, input: Option<String>) -> Self {
            self.gateway_arn = input;
            self
        }
        pub fn smb_security_strategy(mut self, input: crate::model::SmbSecurityStrategy) -> Self {
            self.smb_security_strategy = Some(input);
            self
        }
        pub fn set_smb_security_strategy(
            mut self,
            input: Option<crate::model::SmbSecurityStrategy>,
        ) -> Self {
            self.smb_security_strategy = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateSmbSecurityStrategy`](crate::operation::UpdateSmbSecurityStrategy)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateSmbSecurityStrategy,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateSmbSecurityStrategyInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateSmbSecurityStrategyInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateSmbSecurityStrategyInput {
                gateway_arn: builder.gateway_arn,
                smb_security_strategy: builder.smb_security_strategy,
            }
        }
    }
}
impl UpdateSmbSecurityStrategyInput {
    /// Creates a new builder-style object to manufacture [`UpdateSmbSecurityStrategyInput`](crate::input::UpdateSmbSecurityStrategyInput)
    pub fn builder() -> crate::input::update_smb_security_strategy_input::Builder {
        crate::input::update_smb_security_strategy_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateSmbSecurityStrategy,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateSMBSecurityStrategy",
            crate::operation::UpdateSmbSecurityStrategy::new(),
            config,
        )
    }
}

/// Input of [`UpdateSnapshotSchedule`](crate::operation::UpdateSnapshotSchedule)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateSnapshotScheduleInput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "StartAt", skip_serializing_if = "Option::is_none")]
    pub start_at: Option<i32>,
    #[serde(rename = "RecurrenceInHours", skip_serializing_if = "Option::is_none")]
    pub recurrence_in_hours: Option<i32>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl UpdateSnapshotScheduleInput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn start_at(&self) -> Option<i32> {
        self.start_at
    }
    pub fn recurrence_in_hours(&self) -> Option<i32> {
        self.recurrence_in_hours
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`UpdateSnapshotScheduleInput`](crate::input::UpdateSnapshotScheduleInput)
pub mod update_snapshot_schedule_input {
    /// A builder for [`UpdateSnapshotScheduleInput`](crate::input::UpdateSnapshotScheduleInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) start_at: Option<i32>,
        pub(crate) recurrence_in_hours: Option<i32>,
        pub(crate) description: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn volume_arn(mut self, input: impl Into<String>) -> Self {
            self.volume_arn = Some(input.into());
            self
        }
        pub fn set_volume_arn(mut self, input: Option<String>) -> Self {
            self.volume_arn = input;
            self
        }
        pub fn start_at(mut self, input: i32) -> Self {
            self.start_at = Some(input);
            self
        }
        pub fn set_start_at(mut self, input: Option<i32>) -> Self {
            self.start_at = input;
            self
        }
        pub fn recurrence_in_hours(mut self, input: i32) -> Self {
            self.recurrence_in_hours = Some(input);
            self
        }
        pub fn set_recurrence_in_hours(mut self, input: Option<i32>) -> Self {
            self.recurrence_in_hours = input;
            self
        }
        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: Option<String>) -> Self {
            self.description = input;
            self
        }
        /// Appends an item to `tags`
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: Option<Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateSnapshotSchedule`](crate::operation::UpdateSnapshotSchedule)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateSnapshotSchedule,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateSnapshotScheduleInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateSnapshotScheduleInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateSnapshotScheduleInput {
                volume_arn: builder.volume_arn,
                start_at: builder.start_at,
                recurrence_in_hours: builder.recurrence_in_hours,
                description: builder.description,
                tags: builder.tags,
            }
        }
    }
}
impl UpdateSnapshotScheduleInput {
    /// Creates a new builder-style object to manufacture [`UpdateSnapshotScheduleInput`](crate::input::UpdateSnapshotScheduleInput)
    pub fn builder() -> crate::input::update_snapshot_schedule_input::Builder {
        crate::input::update_snapshot_schedule_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateSnapshotSchedule,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateSnapshotSchedule",
            crate::operation::UpdateSnapshotSchedule::new(),
            config,
        )
    }
}

/// Input of [`UpdateVtlDeviceType`](crate::operation::UpdateVtlDeviceType)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct UpdateVtlDeviceTypeInput {
    #[serde(rename = "VTLDeviceARN", skip_serializing_if = "Option::is_none")]
    pub vtl_device_arn: Option<String>,
    #[serde(rename = "DeviceType", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}
impl UpdateVtlDeviceTypeInput {
    pub fn vtl_device_arn(&self) -> Option<&str> {
        self.vtl_device_arn.as_deref()
    }
    pub fn device_type(&self) -> Option<&str> {
        self.device_type.as_deref()
    }
}
/// See [`UpdateVtlDeviceTypeInput`](crate::input::UpdateVtlDeviceTypeInput)
pub mod update_vtl_device_type_input {
    /// A builder for [`UpdateVtlDeviceTypeInput`](crate::input::UpdateVtlDeviceTypeInput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) vtl_device_arn: Option<String>,
        pub(crate) device_type: Option<String>,
    }
    impl Builder {
        pub fn vtl_device_arn(mut self, input: impl Into<String>) -> Self {
            self.vtl_device_arn = Some(input.into());
            self
        }
        pub fn set_vtl_device_arn(mut self, input: Option<String>) -> Self {
            self.vtl_device_arn = input;
            self
        }
        pub fn device_type(mut self, input: impl Into<String>) -> Self {
            self.device_type = Some(input.into());
            self
        }
        pub fn set_device_type(mut self, input: Option<String>) -> Self {
            self.device_type = input;
            self
        }
        /// Consumes the builder and constructs an operation for
        /// [`UpdateVtlDeviceType`](crate::operation::UpdateVtlDeviceType)
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> Result<
            smithy_http::operation::Operation<
                crate::operation::UpdateVtlDeviceType,
                aws_http::AwsErrorRetryPolicy,
            >,
            smithy_http::operation::BuildError,
        > {
            crate::input::UpdateVtlDeviceTypeInput::from(self).make_operation(config)
        }
    }
    impl From<Builder> for crate::input::UpdateVtlDeviceTypeInput {
        fn from(builder: Builder) -> Self {
            crate::input::UpdateVtlDeviceTypeInput {
                vtl_device_arn: builder.vtl_device_arn,
                device_type: builder.device_type,
            }
        }
    }
}
impl UpdateVtlDeviceTypeInput {
    /// Creates a new builder-style object to manufacture [`UpdateVtlDeviceTypeInput`](crate::input::UpdateVtlDeviceTypeInput)
    pub fn builder() -> crate::input::update_vtl_device_type_input::Builder {
        crate::input::update_vtl_device_type_input::Builder::default()
    }

    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> Result<
        smithy_http::operation::Operation<
            crate::operation::UpdateVtlDeviceType,
            aws_http::AwsErrorRetryPolicy,
        >,
        smithy_http::operation::BuildError,
    > {
        crate::aws_json::build_operation(
            self,
            "UpdateVTLDeviceType",
            crate::operation::UpdateVtlDeviceType::new(),
            config,
        )
    }
}
