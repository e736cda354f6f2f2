/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs, deserialized from AWS JSON 1.1 response bodies

use serde::Deserialize;

/// Output of [`ActivateGateway`](crate::operation::ActivateGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ActivateGatewayOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl ActivateGatewayOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput)
pub mod activate_gateway_output {
    /// A builder for [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput)
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
        /// Consumes the builder and constructs a [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput)
        pub fn build(self) -> crate::output::ActivateGatewayOutput {
            crate::output::ActivateGatewayOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl ActivateGatewayOutput {
    /// Creates a new builder-style object to manufacture [`ActivateGatewayOutput`](crate::output::ActivateGatewayOutput)
    pub fn builder() -> crate::output::activate_gateway_output::Builder {
        crate::output::activate_gateway_output::Builder::default()
    }
}

/// Output of [`AddCache`](crate::operation::AddCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AddCacheOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl AddCacheOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`AddCacheOutput`](crate::output::AddCacheOutput)
pub mod add_cache_output {
    /// A builder for [`AddCacheOutput`](crate::output::AddCacheOutput)
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
        /// Consumes the builder and constructs a [`AddCacheOutput`](crate::output::AddCacheOutput)
        pub fn build(self) -> crate::output::AddCacheOutput {
            crate::output::AddCacheOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl AddCacheOutput {
    /// Creates a new builder-style object to manufacture [`AddCacheOutput`](crate::output::AddCacheOutput)
    pub fn builder() -> crate::output::add_cache_output::Builder {
        crate::output::add_cache_output::Builder::default()
    }
}

/// Output of [`AddTagsToResource`](crate::operation::AddTagsToResource)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AddTagsToResourceOutput {
    /// The Amazon Resource Name (ARN) of the resource.
    ///
    /// Length: 50 - 500
    #[serde(rename = "ResourceARN")]
    pub resource_arn: Option<String>,
}
impl AddTagsToResourceOutput {
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }
}
/// See [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput)
pub mod add_tags_to_resource_output {
    /// A builder for [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: Option<String>,
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
        /// Consumes the builder and constructs a [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput)
        pub fn build(self) -> crate::output::AddTagsToResourceOutput {
            crate::output::AddTagsToResourceOutput {
                resource_arn: self.resource_arn,
            }
        }
    }
}
impl AddTagsToResourceOutput {
    /// Creates a new builder-style object to manufacture [`AddTagsToResourceOutput`](crate::output::AddTagsToResourceOutput)
    pub fn builder() -> crate::output::add_tags_to_resource_output::Builder {
        crate::output::add_tags_to_resource_output::Builder::default()
    }
}

/// Output of [`AddUploadBuffer`](crate::operation::AddUploadBuffer)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AddUploadBufferOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl AddUploadBufferOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`AddUploadBufferOutput`](crate::output::AddUploadBufferOutput)
pub mod add_upload_buffer_output {
    /// A builder for [`AddUploadBufferOutput`](crate::output::AddUploadBufferOutput)
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
        /// Consumes the builder and constructs a [`AddUploadBufferOutput`](crate::output::AddUploadBufferOutput)
        pub fn build(self) -> crate::output::AddUploadBufferOutput {
            crate::output::AddUploadBufferOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl AddUploadBufferOutput {
    /// Creates a new builder-style object to manufacture [`AddUploadBufferOutput`](crate::output::AddUploadBufferOutput)
    pub fn builder() -> crate::output::add_upload_buffer_output::Builder {
        crate::output::add_upload_buffer_output::Builder::default()
    }
}

/// Output of [`AddWorkingStorage`](crate::operation::AddWorkingStorage)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AddWorkingStorageOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl AddWorkingStorageOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`AddWorkingStorageOutput`](crate::output::AddWorkingStorageOutput)
pub mod add_working_storage_output {
    /// A builder for [`AddWorkingStorageOutput`](crate::output::AddWorkingStorageOutput)
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
        /// Consumes the builder and constructs a [`AddWorkingStorageOutput`](crate::output::AddWorkingStorageOutput)
        pub fn build(self) -> crate::output::AddWorkingStorageOutput {
            crate::output::AddWorkingStorageOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl AddWorkingStorageOutput {
    /// Creates a new builder-style object to manufacture [`AddWorkingStorageOutput`](crate::output::AddWorkingStorageOutput)
    pub fn builder() -> crate::output::add_working_storage_output::Builder {
        crate::output::add_working_storage_output::Builder::default()
    }
}

/// Output of [`AssignTapePool`](crate::operation::AssignTapePool)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AssignTapePoolOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl AssignTapePoolOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`AssignTapePoolOutput`](crate::output::AssignTapePoolOutput)
pub mod assign_tape_pool_output {
    /// A builder for [`AssignTapePoolOutput`](crate::output::AssignTapePoolOutput)
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
        /// Consumes the builder and constructs a [`AssignTapePoolOutput`](crate::output::AssignTapePoolOutput)
        pub fn build(self) -> crate::output::AssignTapePoolOutput {
            crate::output::AssignTapePoolOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl AssignTapePoolOutput {
    /// Creates a new builder-style object to manufacture [`AssignTapePoolOutput`](crate::output::AssignTapePoolOutput)
    pub fn builder() -> crate::output::assign_tape_pool_output::Builder {
        crate::output::assign_tape_pool_output::Builder::default()
    }
}

/// Output of [`AttachVolume`](crate::operation::AttachVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct AttachVolumeOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN")]
    pub target_arn: Option<String>,
}
impl AttachVolumeOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
}
/// See [`AttachVolumeOutput`](crate::output::AttachVolumeOutput)
pub mod attach_volume_output {
    /// A builder for [`AttachVolumeOutput`](crate::output::AttachVolumeOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) target_arn: Option<String>,
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
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        pub fn set_target_arn(mut self, input: Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`AttachVolumeOutput`](crate::output::AttachVolumeOutput)
        pub fn build(self) -> crate::output::AttachVolumeOutput {
            crate::output::AttachVolumeOutput {
                volume_arn: self.volume_arn,
                target_arn: self.target_arn,
            }
        }
    }
}
impl AttachVolumeOutput {
    /// Creates a new builder-style object to manufacture [`AttachVolumeOutput`](crate::output::AttachVolumeOutput)
    pub fn builder() -> crate::output::attach_volume_output::Builder {
        crate::output::attach_volume_output::Builder::default()
    }
}

/// Output of [`CancelArchival`](crate::operation::CancelArchival)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CancelArchivalOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl CancelArchivalOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`CancelArchivalOutput`](crate::output::CancelArchivalOutput)
pub mod cancel_archival_output {
    /// A builder for [`CancelArchivalOutput`](crate::output::CancelArchivalOutput)
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
        /// Consumes the builder and constructs a [`CancelArchivalOutput`](crate::output::CancelArchivalOutput)
        pub fn build(self) -> crate::output::CancelArchivalOutput {
            crate::output::CancelArchivalOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl CancelArchivalOutput {
    /// Creates a new builder-style object to manufacture [`CancelArchivalOutput`](crate::output::CancelArchivalOutput)
    pub fn builder() -> crate::output::cancel_archival_output::Builder {
        crate::output::cancel_archival_output::Builder::default()
    }
}

/// Output of [`CancelRetrieval`](crate::operation::CancelRetrieval)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CancelRetrievalOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl CancelRetrievalOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`CancelRetrievalOutput`](crate::output::CancelRetrievalOutput)
pub mod cancel_retrieval_output {
    /// A builder for [`CancelRetrievalOutput`](crate::output::CancelRetrievalOutput)
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
        /// Consumes the builder and constructs a [`CancelRetrievalOutput`](crate::output::CancelRetrievalOutput)
        pub fn build(self) -> crate::output::CancelRetrievalOutput {
            crate::output::CancelRetrievalOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl CancelRetrievalOutput {
    /// Creates a new builder-style object to manufacture [`CancelRetrievalOutput`](crate::output::CancelRetrievalOutput)
    pub fn builder() -> crate::output::cancel_retrieval_output::Builder {
        crate::output::cancel_retrieval_output::Builder::default()
    }
}

/// Output of [`CreateCachediScsiVolume`](crate::operation::CreateCachediScsiVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateCachediScsiVolumeOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN")]
    pub target_arn: Option<String>,
}
impl CreateCachediScsiVolumeOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
}
/// See [`CreateCachediScsiVolumeOutput`](crate::output::CreateCachediScsiVolumeOutput)
pub mod create_cachedi_scsi_volume_output {
    /// A builder for [`CreateCachediScsiVolumeOutput`](crate::output::CreateCachediScsiVolumeOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) target_arn: Option<String>,
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
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        pub fn set_target_arn(mut self, input: Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCachediScsiVolumeOutput`](crate::output::CreateCachediScsiVolumeOutput)
        pub fn build(self) -> crate::output::CreateCachediScsiVolumeOutput {
            crate::output::CreateCachediScsiVolumeOutput {
                volume_arn: self.volume_arn,
                target_arn: self.target_arn,
            }
        }
    }
}
impl CreateCachediScsiVolumeOutput {
    /// Creates a new builder-style object to manufacture [`CreateCachediScsiVolumeOutput`](crate::output::CreateCachediScsiVolumeOutput)
    pub fn builder() -> crate::output::create_cachedi_scsi_volume_output::Builder {
        crate::output::create_cachedi_scsi_volume_output::Builder::default()
    }
}

/// Output of [`CreateNfsFileShare`](crate::operation::CreateNfsFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateNfsFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN")]
    pub file_share_arn: Option<String>,
}
impl CreateNfsFileShareOutput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
}
/// See [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput)
pub mod create_nfs_file_share_output {
    /// A builder for [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput)
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
        /// Consumes the builder and constructs a [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput)
        pub fn build(self) -> crate::output::CreateNfsFileShareOutput {
            crate::output::CreateNfsFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl CreateNfsFileShareOutput {
    /// Creates a new builder-style object to manufacture [`CreateNfsFileShareOutput`](crate::output::CreateNfsFileShareOutput)
    pub fn builder() -> crate::output::create_nfs_file_share_output::Builder {
        crate::output::create_nfs_file_share_output::Builder::default()
    }
}

/// Output of [`CreateSmbFileShare`](crate::operation::CreateSmbFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateSmbFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN")]
    pub file_share_arn: Option<String>,
}
impl CreateSmbFileShareOutput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
}
/// See [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput)
pub mod create_smb_file_share_output {
    /// A builder for [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput)
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
        /// Consumes the builder and constructs a [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput)
        pub fn build(self) -> crate::output::CreateSmbFileShareOutput {
            crate::output::CreateSmbFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl CreateSmbFileShareOutput {
    /// Creates a new builder-style object to manufacture [`CreateSmbFileShareOutput`](crate::output::CreateSmbFileShareOutput)
    pub fn builder() -> crate::output::create_smb_file_share_output::Builder {
        crate::output::create_smb_file_share_output::Builder::default()
    }
}

/// Output of [`CreateSnapshot`](crate::operation::CreateSnapshot)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateSnapshotOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
    /// The snapshot ID (e.g. `snap-1122aabb`) of the snapshot to restore as the new volume.
    #[serde(rename = "SnapshotId")]
    pub snapshot_id: Option<String>,
}
impl CreateSnapshotOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }
}
/// See [`CreateSnapshotOutput`](crate::output::CreateSnapshotOutput)
pub mod create_snapshot_output {
    /// A builder for [`CreateSnapshotOutput`](crate::output::CreateSnapshotOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) snapshot_id: Option<String>,
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
        pub fn snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        pub fn set_snapshot_id(mut self, input: Option<String>) -> Self {
            self.snapshot_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSnapshotOutput`](crate::output::CreateSnapshotOutput)
        pub fn build(self) -> crate::output::CreateSnapshotOutput {
            crate::output::CreateSnapshotOutput {
                volume_arn: self.volume_arn,
                snapshot_id: self.snapshot_id,
            }
        }
    }
}
impl CreateSnapshotOutput {
    /// Creates a new builder-style object to manufacture [`CreateSnapshotOutput`](crate::output::CreateSnapshotOutput)
    pub fn builder() -> crate::output::create_snapshot_output::Builder {
        crate::output::create_snapshot_output::Builder::default()
    }
}

/// Output of [`CreateSnapshotFromVolumeRecoveryPoint`](crate::operation::CreateSnapshotFromVolumeRecoveryPoint)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateSnapshotFromVolumeRecoveryPointOutput {
    /// The snapshot ID (e.g. `snap-1122aabb`) of the snapshot to restore as the new volume.
    #[serde(rename = "SnapshotId")]
    pub snapshot_id: Option<String>,
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
    #[serde(rename = "VolumeRecoveryPointTime")]
    pub volume_recovery_point_time: Option<String>,
}
impl CreateSnapshotFromVolumeRecoveryPointOutput {
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn volume_recovery_point_time(&self) -> Option<&str> {
        self.volume_recovery_point_time.as_deref()
    }
}
/// See [`CreateSnapshotFromVolumeRecoveryPointOutput`](crate::output::CreateSnapshotFromVolumeRecoveryPointOutput)
pub mod create_snapshot_from_volume_recovery_point_output {
    /// A builder for [`CreateSnapshotFromVolumeRecoveryPointOutput`](crate::output::CreateSnapshotFromVolumeRecoveryPointOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) snapshot_id: Option<String>,
        pub(crate) volume_arn: Option<String>,
        pub(crate) volume_recovery_point_time: Option<String>,
    }
    impl Builder {
        pub fn snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.snapshot_id = Some(input.into());
            self
        }
        pub fn set_snapshot_id(mut self, input: Option<String>) -> Self {
            self.snapshot_id = input;
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
        pub fn volume_recovery_point_time(mut self, input: impl Into<String>) -> Self {
            self.volume_recovery_point_time = Some(input.into());
            self
        }
        pub fn set_volume_recovery_point_time(mut self, input: Option<String>) -> Self {
            self.volume_recovery_point_time = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSnapshotFromVolumeRecoveryPointOutput`](crate::output::CreateSnapshotFromVolumeRecoveryPointOutput)
        pub fn build(self) -> crate::output::CreateSnapshotFromVolumeRecoveryPointOutput {
            crate::output::CreateSnapshotFromVolumeRecoveryPointOutput {
                snapshot_id: self.snapshot_id,
                volume_arn: self.volume_arn,
                volume_recovery_point_time: self.volume_recovery_point_time,
            }
        }
    }
}
impl CreateSnapshotFromVolumeRecoveryPointOutput {
    /// Creates a new builder-style object to manufacture [`CreateSnapshotFromVolumeRecoveryPointOutput`](crate::output::CreateSnapshotFromVolumeRecoveryPointOutput)
    pub fn builder() -> crate::output::create_snapshot_from_volume_recovery_point_output::Builder {
        crate::output::create_snapshot_from_volume_recovery_point_output::Builder::default()
    }
}

/// Output of [`CreateStorediScsiVolume`](crate::operation::CreateStorediScsiVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateStorediScsiVolumeOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
    #[serde(rename = "VolumeSizeInBytes")]
    pub volume_size_in_bytes: Option<i64>,
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN")]
    pub target_arn: Option<String>,
}
impl CreateStorediScsiVolumeOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn volume_size_in_bytes(&self) -> Option<i64> {
        self.volume_size_in_bytes
    }
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
}
/// See [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput)
pub mod create_storedi_scsi_volume_output {
    /// A builder for [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) volume_size_in_bytes: Option<i64>,
        pub(crate) target_arn: Option<String>,
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
        pub fn volume_size_in_bytes(mut self, input: i64) -> Self {
            self.volume_size_in_bytes = Some(input);
            self
        }
        pub fn set_volume_size_in_bytes(mut self, input: Option<i64>) -> Self {
            self.volume_size_in_bytes = input;
            self
        }
        pub fn target_arn(mut self, input: impl Into<String>) -> Self {
            self.target_arn = Some(input.into());
            self
        }
        pub fn set_target_arn(mut self, input: Option<String>) -> Self {
            self.target_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput)
        pub fn build(self) -> crate::output::CreateStorediScsiVolumeOutput {
            crate::output::CreateStorediScsiVolumeOutput {
                volume_arn: self.volume_arn,
                volume_size_in_bytes: self.volume_size_in_bytes,
                target_arn: self.target_arn,
            }
        }
    }
}
impl CreateStorediScsiVolumeOutput {
    /// Creates a new builder-style object to manufacture [`CreateStorediScsiVolumeOutput`](crate::output::CreateStorediScsiVolumeOutput)
    pub fn builder() -> crate::output::create_storedi_scsi_volume_output::Builder {
        crate::output::create_storedi_scsi_volume_output::Builder::default()
    }
}

/// Output of [`CreateTapeWithBarcode`](crate::operation::CreateTapeWithBarcode)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateTapeWithBarcodeOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl CreateTapeWithBarcodeOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`CreateTapeWithBarcodeOutput`](crate::output::CreateTapeWithBarcodeOutput)
pub mod create_tape_with_barcode_output {
    /// A builder for [`CreateTapeWithBarcodeOutput`](crate::output::CreateTapeWithBarcodeOutput)
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
        /// Consumes the builder and constructs a [`CreateTapeWithBarcodeOutput`](crate::output::CreateTapeWithBarcodeOutput)
        pub fn build(self) -> crate::output::CreateTapeWithBarcodeOutput {
            crate::output::CreateTapeWithBarcodeOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl CreateTapeWithBarcodeOutput {
    /// Creates a new builder-style object to manufacture [`CreateTapeWithBarcodeOutput`](crate::output::CreateTapeWithBarcodeOutput)
    pub fn builder() -> crate::output::create_tape_with_barcode_output::Builder {
        crate::output::create_tape_with_barcode_output::Builder::default()
    }
}

/// Output of [`CreateTapes`](crate::operation::CreateTapes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CreateTapesOutput {
    #[serde(rename = "TapeARNs")]
    pub tape_ar_ns: Option<Vec<String>>,
}
impl CreateTapesOutput {
    pub fn tape_ar_ns(&self) -> Option<&[String]> {
        self.tape_ar_ns.as_deref()
    }
}
/// See [`CreateTapesOutput`](crate::output::CreateTapesOutput)
pub mod create_tapes_output {
    /// A builder for [`CreateTapesOutput`](crate::output::CreateTapesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_ar_ns: Option<Vec<String>>,
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
        /// Consumes the builder and constructs a [`CreateTapesOutput`](crate::output::CreateTapesOutput)
        pub fn build(self) -> crate::output::CreateTapesOutput {
            crate::output::CreateTapesOutput {
                tape_ar_ns: self.tape_ar_ns,
            }
        }
    }
}
impl CreateTapesOutput {
    /// Creates a new builder-style object to manufacture [`CreateTapesOutput`](crate::output::CreateTapesOutput)
    pub fn builder() -> crate::output::create_tapes_output::Builder {
        crate::output::create_tapes_output::Builder::default()
    }
}

/// Output of [`DeleteAutomaticTapeCreationPolicy`](crate::operation::DeleteAutomaticTapeCreationPolicy)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteAutomaticTapeCreationPolicyOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl DeleteAutomaticTapeCreationPolicyOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DeleteAutomaticTapeCreationPolicyOutput`](crate::output::DeleteAutomaticTapeCreationPolicyOutput)
pub mod delete_automatic_tape_creation_policy_output {
    /// A builder for [`DeleteAutomaticTapeCreationPolicyOutput`](crate::output::DeleteAutomaticTapeCreationPolicyOutput)
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
        /// Consumes the builder and constructs a [`DeleteAutomaticTapeCreationPolicyOutput`](crate::output::DeleteAutomaticTapeCreationPolicyOutput)
        pub fn build(self) -> crate::output::DeleteAutomaticTapeCreationPolicyOutput {
            crate::output::DeleteAutomaticTapeCreationPolicyOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl DeleteAutomaticTapeCreationPolicyOutput {
    /// Creates a new builder-style object to manufacture [`DeleteAutomaticTapeCreationPolicyOutput`](crate::output::DeleteAutomaticTapeCreationPolicyOutput)
    pub fn builder() -> crate::output::delete_automatic_tape_creation_policy_output::Builder {
        crate::output::delete_automatic_tape_creation_policy_output::Builder::default()
    }
}

/// Output of [`DeleteBandwidthRateLimit`](crate::operation::DeleteBandwidthRateLimit)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteBandwidthRateLimitOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl DeleteBandwidthRateLimitOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DeleteBandwidthRateLimitOutput`](crate::output::DeleteBandwidthRateLimitOutput)
pub mod delete_bandwidth_rate_limit_output {
    /// A builder for [`DeleteBandwidthRateLimitOutput`](crate::output::DeleteBandwidthRateLimitOutput)
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
        /// Consumes the builder and constructs a [`DeleteBandwidthRateLimitOutput`](crate::output::DeleteBandwidthRateLimitOutput)
        pub fn build(self) -> crate::output::DeleteBandwidthRateLimitOutput {
            crate::output::DeleteBandwidthRateLimitOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl DeleteBandwidthRateLimitOutput {
    /// Creates a new builder-style object to manufacture [`DeleteBandwidthRateLimitOutput`](crate::output::DeleteBandwidthRateLimitOutput)
    pub fn builder() -> crate::output::delete_bandwidth_rate_limit_output::Builder {
        crate::output::delete_bandwidth_rate_limit_output::Builder::default()
    }
}

/// Output of [`DeleteChapCredentials`](crate::operation::DeleteChapCredentials)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteChapCredentialsOutput {
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN")]
    pub target_arn: Option<String>,
    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 - 255
    #[serde(rename = "InitiatorName")]
    pub initiator_name: Option<String>,
}
impl DeleteChapCredentialsOutput {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
    pub fn initiator_name(&self) -> Option<&str> {
        self.initiator_name.as_deref()
    }
}
/// See [`DeleteChapCredentialsOutput`](crate::output::DeleteChapCredentialsOutput)
pub mod delete_chap_credentials_output {
    /// A builder for [`DeleteChapCredentialsOutput`](crate::output::DeleteChapCredentialsOutput)
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
        /// Consumes the builder and constructs a [`DeleteChapCredentialsOutput`](crate::output::DeleteChapCredentialsOutput)
        pub fn build(self) -> crate::output::DeleteChapCredentialsOutput {
            crate::output::DeleteChapCredentialsOutput {
                target_arn: self.target_arn,
                initiator_name: self.initiator_name,
            }
        }
    }
}
impl DeleteChapCredentialsOutput {
    /// Creates a new builder-style object to manufacture [`DeleteChapCredentialsOutput`](crate::output::DeleteChapCredentialsOutput)
    pub fn builder() -> crate::output::delete_chap_credentials_output::Builder {
        crate::output::delete_chap_credentials_output::Builder::default()
    }
}

/// Output of [`DeleteFileShare`](crate::operation::DeleteFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN")]
    pub file_share_arn: Option<String>,
}
impl DeleteFileShareOutput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
}
/// See [`DeleteFileShareOutput`](crate::output::DeleteFileShareOutput)
pub mod delete_file_share_output {
    /// A builder for [`DeleteFileShareOutput`](crate::output::DeleteFileShareOutput)
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
        /// Consumes the builder and constructs a [`DeleteFileShareOutput`](crate::output::DeleteFileShareOutput)
        pub fn build(self) -> crate::output::DeleteFileShareOutput {
            crate::output::DeleteFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl DeleteFileShareOutput {
    /// Creates a new builder-style object to manufacture [`DeleteFileShareOutput`](crate::output::DeleteFileShareOutput)
    pub fn builder() -> crate::output::delete_file_share_output::Builder {
        crate::output::delete_file_share_output::Builder::default()
    }
}

/// Output of [`DeleteGateway`](crate::operation::DeleteGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteGatewayOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl DeleteGatewayOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DeleteGatewayOutput`](crate::output::DeleteGatewayOutput)
pub mod delete_gateway_output {
    /// A builder for [`DeleteGatewayOutput`](crate::output::DeleteGatewayOutput)
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
        /// Consumes the builder and constructs a [`DeleteGatewayOutput`](crate::output::DeleteGatewayOutput)
        pub fn build(self) -> crate::output::DeleteGatewayOutput {
            crate::output::DeleteGatewayOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl DeleteGatewayOutput {
    /// Creates a new builder-style object to manufacture [`DeleteGatewayOutput`](crate::output::DeleteGatewayOutput)
    pub fn builder() -> crate::output::delete_gateway_output::Builder {
        crate::output::delete_gateway_output::Builder::default()
    }
}

/// Output of [`DeleteSnapshotSchedule`](crate::operation::DeleteSnapshotSchedule)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteSnapshotScheduleOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
}
impl DeleteSnapshotScheduleOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`DeleteSnapshotScheduleOutput`](crate::output::DeleteSnapshotScheduleOutput)
pub mod delete_snapshot_schedule_output {
    /// A builder for [`DeleteSnapshotScheduleOutput`](crate::output::DeleteSnapshotScheduleOutput)
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
        /// Consumes the builder and constructs a [`DeleteSnapshotScheduleOutput`](crate::output::DeleteSnapshotScheduleOutput)
        pub fn build(self) -> crate::output::DeleteSnapshotScheduleOutput {
            crate::output::DeleteSnapshotScheduleOutput {
                volume_arn: self.volume_arn,
            }
        }
    }
}
impl DeleteSnapshotScheduleOutput {
    /// Creates a new builder-style object to manufacture [`DeleteSnapshotScheduleOutput`](crate::output::DeleteSnapshotScheduleOutput)
    pub fn builder() -> crate::output::delete_snapshot_schedule_output::Builder {
        crate::output::delete_snapshot_schedule_output::Builder::default()
    }
}

/// Output of [`DeleteTape`](crate::operation::DeleteTape)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteTapeOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl DeleteTapeOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`DeleteTapeOutput`](crate::output::DeleteTapeOutput)
pub mod delete_tape_output {
    /// A builder for [`DeleteTapeOutput`](crate::output::DeleteTapeOutput)
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
        /// Consumes the builder and constructs a [`DeleteTapeOutput`](crate::output::DeleteTapeOutput)
        pub fn build(self) -> crate::output::DeleteTapeOutput {
            crate::output::DeleteTapeOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl DeleteTapeOutput {
    /// Creates a new builder-style object to manufacture [`DeleteTapeOutput`](crate::output::DeleteTapeOutput)
    pub fn builder() -> crate::output::delete_tape_output::Builder {
        crate::output::delete_tape_output::Builder::default()
    }
}

/// Output of [`DeleteTapeArchive`](crate::operation::DeleteTapeArchive)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteTapeArchiveOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl DeleteTapeArchiveOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`DeleteTapeArchiveOutput`](crate::output::DeleteTapeArchiveOutput)
pub mod delete_tape_archive_output {
    /// A builder for [`DeleteTapeArchiveOutput`](crate::output::DeleteTapeArchiveOutput)
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
        /// Consumes the builder and constructs a [`DeleteTapeArchiveOutput`](crate::output::DeleteTapeArchiveOutput)
        pub fn build(self) -> crate::output::DeleteTapeArchiveOutput {
            crate::output::DeleteTapeArchiveOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl DeleteTapeArchiveOutput {
    /// Creates a new builder-style object to manufacture [`DeleteTapeArchiveOutput`](crate::output::DeleteTapeArchiveOutput)
    pub fn builder() -> crate::output::delete_tape_archive_output::Builder {
        crate::output::delete_tape_archive_output::Builder::default()
    }
}

/// Output of [`DeleteVolume`](crate::operation::DeleteVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeleteVolumeOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
}
impl DeleteVolumeOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`DeleteVolumeOutput`](crate::output::DeleteVolumeOutput)
pub mod delete_volume_output {
    /// A builder for [`DeleteVolumeOutput`](crate::output::DeleteVolumeOutput)
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
        /// Consumes the builder and constructs a [`DeleteVolumeOutput`](crate::output::DeleteVolumeOutput)
        pub fn build(self) -> crate::output::DeleteVolumeOutput {
            crate::output::DeleteVolumeOutput {
                volume_arn: self.volume_arn,
            }
        }
    }
}
impl DeleteVolumeOutput {
    /// Creates a new builder-style object to manufacture [`DeleteVolumeOutput`](crate::output::DeleteVolumeOutput)
    pub fn builder() -> crate::output::delete_volume_output::Builder {
        crate::output::delete_volume_output::Builder::default()
    }
}

/// Output of [`DescribeAvailabilityMonitorTest`](crate::operation::DescribeAvailabilityMonitorTest)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeAvailabilityMonitorTestOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<crate::model::AvailabilityMonitorTestStatus>,
    #[serde(rename = "StartTime", default, with = "smithy_types::instant::epoch_seconds")]
    pub start_time: Option<smithy_types::Instant>,
}
impl DescribeAvailabilityMonitorTestOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn status(&self) -> Option<&crate::model::AvailabilityMonitorTestStatus> {
        self.status.as_ref()
    }
    pub fn start_time(&self) -> Option<smithy_types::Instant> {
        self.start_time
    }
}
/// See [`DescribeAvailabilityMonitorTestOutput`](crate::output::DescribeAvailabilityMonitorTestOutput)
pub mod describe_availability_monitor_test_output {
    /// A builder for [`DescribeAvailabilityMonitorTestOutput`](crate::output::DescribeAvailabilityMonitorTestOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) status: Option<crate::model::AvailabilityMonitorTestStatus>,
        pub(crate) start_time: Option<smithy_types::Instant>,
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
        pub fn status(mut self, input: crate::model::AvailabilityMonitorTestStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(
            mut self,
            input: Option<crate::model::AvailabilityMonitorTestStatus>,
        ) -> Self {
            self.status = input;
            self
        }
        pub fn start_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: Option<smithy_types::Instant>) -> Self {
            self.start_time = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAvailabilityMonitorTestOutput`](crate::output::DescribeAvailabilityMonitorTestOutput)
        pub fn build(self) -> crate::output::DescribeAvailabilityMonitorTestOutput {
            crate::output::DescribeAvailabilityMonitorTestOutput {
                gateway_arn: self.gateway_arn,
                status: self.status,
                start_time: self.start_time,
            }
        }
    }
}
impl DescribeAvailabilityMonitorTestOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAvailabilityMonitorTestOutput`](crate::output::DescribeAvailabilityMonitorTestOutput)
    pub fn builder() -> crate::output::describe_availability_monitor_test_output::Builder {
        crate::output::describe_availability_monitor_test_output::Builder::default()
    }
}

/// Output of [`DescribeBandwidthRateLimit`](crate::operation::DescribeBandwidthRateLimit)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeBandwidthRateLimitOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "AverageUploadRateLimitInBitsPerSec")]
    pub average_upload_rate_limit_in_bits_per_sec: Option<i64>,
    #[serde(rename = "AverageDownloadRateLimitInBitsPerSec")]
    pub average_download_rate_limit_in_bits_per_sec: Option<i64>,
}
impl DescribeBandwidthRateLimitOutput {
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
/// See [`DescribeBandwidthRateLimitOutput`](crate::output::DescribeBandwidthRateLimitOutput)
pub mod describe_bandwidth_rate_limit_output {
    /// A builder for [`DescribeBandwidthRateLimitOutput`](crate::output::DescribeBandwidthRateLimitOutput)
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
        /// Consumes the builder and constructs a [`DescribeBandwidthRateLimitOutput`](crate::output::DescribeBandwidthRateLimitOutput)
        pub fn build(self) -> crate::output::DescribeBandwidthRateLimitOutput {
            crate::output::DescribeBandwidthRateLimitOutput {
                gateway_arn: self.gateway_arn,
                average_upload_rate_limit_in_bits_per_sec:
                    self.average_upload_rate_limit_in_bits_per_sec,
                average_download_rate_limit_in_bits_per_sec:
                    self.average_download_rate_limit_in_bits_per_sec,
            }
        }
    }
}
impl DescribeBandwidthRateLimitOutput {
    /// Creates a new builder-style object to manufacture [`DescribeBandwidthRateLimitOutput`](crate::output::DescribeBandwidthRateLimitOutput)
    pub fn builder() -> crate::output::describe_bandwidth_rate_limit_output::Builder {
        crate::output::describe_bandwidth_rate_limit_output::Builder::default()
    }
}

/// Output of [`DescribeCache`](crate::operation::DescribeCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeCacheOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    /// Disk identifiers, as returned by `ListLocalDisks`.
    #[serde(rename = "DiskIds")]
    pub disk_ids: Option<Vec<String>>,
    #[serde(rename = "CacheAllocatedInBytes")]
    pub cache_allocated_in_bytes: Option<i64>,
    #[serde(rename = "CacheUsedPercentage")]
    pub cache_used_percentage: Option<f64>,
    #[serde(rename = "CacheDirtyPercentage")]
    pub cache_dirty_percentage: Option<f64>,
    #[serde(rename = "CacheHitPercentage")]
    pub cache_hit_percentage: Option<f64>,
    #[serde(rename = "CacheMissPercentage")]
    pub cache_miss_percentage: Option<f64>,
}
impl DescribeCacheOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disk_ids(&self) -> Option<&[String]> {
        self.disk_ids.as_deref()
    }
    pub fn cache_allocated_in_bytes(&self) -> Option<i64> {
        self.cache_allocated_in_bytes
    }
    pub fn cache_used_percentage(&self) -> Option<f64> {
        self.cache_used_percentage
    }
    pub fn cache_dirty_percentage(&self) -> Option<f64> {
        self.cache_dirty_percentage
    }
    pub fn cache_hit_percentage(&self) -> Option<f64> {
        self.cache_hit_percentage
    }
    pub fn cache_miss_percentage(&self) -> Option<f64> {
        self.cache_miss_percentage
    }
}
/// See [`DescribeCacheOutput`](crate::output::DescribeCacheOutput)
pub mod describe_cache_output {
    /// A builder for [`DescribeCacheOutput`](crate::output::DescribeCacheOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disk_ids: Option<Vec<String>>,
        pub(crate) cache_allocated_in_bytes: Option<i64>,
        pub(crate) cache_used_percentage: Option<f64>,
        pub(crate) cache_dirty_percentage: Option<f64>,
        pub(crate) cache_hit_percentage: Option<f64>,
        pub(crate) cache_miss_percentage: Option<f64>,
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
        pub fn cache_allocated_in_bytes(mut self, input: i64) -> Self {
            self.cache_allocated_in_bytes = Some(input);
            self
        }
        pub fn set_cache_allocated_in_bytes(mut self, input: Option<i64>) -> Self {
            self.cache_allocated_in_bytes = input;
            self
        }
        pub fn cache_used_percentage(mut self, input: f64) -> Self {
            self.cache_used_percentage = Some(input);
            self
        }
        pub fn set_cache_used_percentage(mut self, input: Option<f64>) -> Self {
            self.cache_used_percentage = input;
            self
        }
        pub fn cache_dirty_percentage(mut self, input: f64) -> Self {
            self.cache_dirty_percentage = Some(input);
            self
        }
        pub fn set_cache_dirty_percentage(mut self, input: Option<f64>) -> Self {
            self.cache_dirty_percentage = input;
            self
        }
        pub fn cache_hit_percentage(mut self, input: f64) -> Self {
            self.cache_hit_percentage = Some(input);
            self
        }
        pub fn set_cache_hit_percentage(mut self, input: Option<f64>) -> Self {
            self.cache_hit_percentage = input;
            self
        }
        pub fn cache_miss_percentage(mut self, input: f64) -> Self {
            self.cache_miss_percentage = Some(input);
            self
        }
        pub fn set_cache_miss_percentage(mut self, input: Option<f64>) -> Self {
            self.cache_miss_percentage = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeCacheOutput`](crate::output::DescribeCacheOutput)
        pub fn build(self) -> crate::output::DescribeCacheOutput {
            crate::output::DescribeCacheOutput {
                gateway_arn: self.gateway_arn,
                disk_ids: self.disk_ids,
                cache_allocated_in_bytes: self.cache_allocated_in_bytes,
                cache_used_percentage: self.cache_used_percentage,
                cache_dirty_percentage: self.cache_dirty_percentage,
                cache_hit_percentage: self.cache_hit_percentage,
                cache_miss_percentage: self.cache_miss_percentage,
            }
        }
    }
}
impl DescribeCacheOutput {
    /// Creates a new builder-style object to manufacture [`DescribeCacheOutput`](crate::output::DescribeCacheOutput)
    pub fn builder() -> crate::output::describe_cache_output::Builder {
        crate::output::describe_cache_output::Builder::default()
    }
}

/// Output of [`DescribeCachediScsiVolumes`](crate::operation::DescribeCachediScsiVolumes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeCachediScsiVolumesOutput {
    #[serde(rename = "CachediSCSIVolumes")]
    pub cachedi_scsi_volumes: Option<Vec<crate::model::CachediScsiVolume>>,
}
impl DescribeCachediScsiVolumesOutput {
    pub fn cachedi_scsi_volumes(&self) -> Option<&[crate::model::CachediScsiVolume]> {
        self.cachedi_scsi_volumes.as_deref()
    }
}
/// See [`DescribeCachediScsiVolumesOutput`](crate::output::DescribeCachediScsiVolumesOutput)
pub mod describe_cachedi_scsi_volumes_output {
    /// A builder for [`DescribeCachediScsiVolumesOutput`](crate::output::DescribeCachediScsiVolumesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) cachedi_scsi_volumes: Option<Vec<crate::model::CachediScsiVolume>>,
    }
    impl Builder {
        /// Appends an item to `cachedi_scsi_volumes`
        pub fn cachedi_scsi_volumes(
            mut self,
            input: impl Into<crate::model::CachediScsiVolume>,
        ) -> Self {
            let mut v = self.cachedi_scsi_volumes.unwrap_or_default();
            v.push(input.into());
            self.cachedi_scsi_volumes = Some(v);
            self
        }
        pub fn set_cachedi_scsi_volumes(
            mut self,
            input: Option<Vec<crate::model::CachediScsiVolume>>,
        ) -> Self {
            self.cachedi_scsi_volumes = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeCachediScsiVolumesOutput`](crate::output::DescribeCachediScsiVolumesOutput)
        pub fn build(self) -> crate::output::DescribeCachediScsiVolumesOutput {
            crate::output::DescribeCachediScsiVolumesOutput {
                cachedi_scsi_volumes: self.cachedi_scsi_volumes,
            }
        }
    }
}
impl DescribeCachediScsiVolumesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeCachediScsiVolumesOutput`](crate::output::DescribeCachediScsiVolumesOutput)
    pub fn builder() -> crate::output::describe_cachedi_scsi_volumes_output::Builder {
        crate::output::describe_cachedi_scsi_volumes_output::Builder::default()
    }
}

/// Output of [`DescribeChapCredentials`](crate::operation::DescribeChapCredentials)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeChapCredentialsOutput {
    #[serde(rename = "ChapCredentials")]
    pub chap_credentials: Option<Vec<crate::model::ChapInfo>>,
}
impl DescribeChapCredentialsOutput {
    pub fn chap_credentials(&self) -> Option<&[crate::model::ChapInfo]> {
        self.chap_credentials.as_deref()
    }
}
/// See [`DescribeChapCredentialsOutput`](crate::output::DescribeChapCredentialsOutput)
pub mod describe_chap_credentials_output {
    /// A builder for [`DescribeChapCredentialsOutput`](crate::output::DescribeChapCredentialsOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) chap_credentials: Option<Vec<crate::model::ChapInfo>>,
    }
    impl Builder {
        /// Appends an item to `chap_credentials`
        pub fn chap_credentials(mut self, input: impl Into<crate::model::ChapInfo>) -> Self {
            let mut v = self.chap_credentials.unwrap_or_default();
            v.push(input.into());
            self.chap_credentials = Some(v);
            self
        }
        pub fn set_chap_credentials(mut self, input: Option<Vec<crate::model::ChapInfo>>) -> Self {
            self.chap_credentials = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeChapCredentialsOutput`](crate::output::DescribeChapCredentialsOutput)
        pub fn build(self) -> crate::output::DescribeChapCredentialsOutput {
            crate::output::DescribeChapCredentialsOutput {
                chap_credentials: self.chap_credentials,
            }
        }
    }
}
impl DescribeChapCredentialsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeChapCredentialsOutput`](crate::output::DescribeChapCredentialsOutput)
    pub fn builder() -> crate::output::describe_chap_credentials_output::Builder {
        crate::output::describe_chap_credentials_output::Builder::default()
    }
}

/// Output of [`DescribeGatewayInformation`](crate::operation::DescribeGatewayInformation)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeGatewayInformationOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "GatewayId")]
    pub gateway_id: Option<String>,
    #[serde(rename = "GatewayName")]
    pub gateway_name: Option<String>,
    /// A value that indicates the time zone of the gateway, e.g. `GMT-4:00`.
    #[serde(rename = "GatewayTimezone")]
    pub gateway_timezone: Option<String>,
    #[serde(rename = "GatewayState")]
    pub gateway_state: Option<String>,
    #[serde(rename = "GatewayNetworkInterfaces")]
    pub gateway_network_interfaces: Option<Vec<crate::model::NetworkInterface>>,
    #[serde(rename = "GatewayType")]
    pub gateway_type: Option<String>,
    #[serde(rename = "NextUpdateAvailabilityDate")]
    pub next_update_availability_date: Option<String>,
    #[serde(rename = "LastSoftwareUpdate")]
    pub last_software_update: Option<String>,
    #[serde(rename = "Ec2InstanceId")]
    pub ec2_instance_id: Option<String>,
    #[serde(rename = "Ec2InstanceRegion")]
    pub ec2_instance_region: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags")]
    pub tags: Option<Vec<crate::model::Tag>>,
    #[serde(rename = "VPCEndpoint")]
    pub vpc_endpoint: Option<String>,
    #[serde(rename = "CloudWatchLogGroupARN")]
    pub cloud_watch_log_group_arn: Option<String>,
    #[serde(rename = "HostEnvironment")]
    pub host_environment: Option<crate::model::HostEnvironment>,
}
impl DescribeGatewayInformationOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn gateway_id(&self) -> Option<&str> {
        self.gateway_id.as_deref()
    }
    pub fn gateway_name(&self) -> Option<&str> {
        self.gateway_name.as_deref()
    }
    pub fn gateway_timezone(&self) -> Option<&str> {
        self.gateway_timezone.as_deref()
    }
    pub fn gateway_state(&self) -> Option<&str> {
        self.gateway_state.as_deref()
    }
    pub fn gateway_network_interfaces(&self) -> Option<&[crate::model::NetworkInterface]> {
        self.gateway_network_interfaces.as_deref()
    }
    pub fn gateway_type(&self) -> Option<&str> {
        self.gateway_type.as_deref()
    }
    pub fn next_update_availability_date(&self) -> Option<&str> {
        self.next_update_availability_date.as_deref()
    }
    pub fn last_software_update(&self) -> Option<&str> {
        self.last_software_update.as_deref()
    }
    pub fn ec2_instance_id(&self) -> Option<&str> {
        self.ec2_instance_id.as_deref()
    }
    pub fn ec2_instance_region(&self) -> Option<&str> {
        self.ec2_instance_region.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
    pub fn vpc_endpoint(&self) -> Option<&str> {
        self.vpc_endpoint.as_deref()
    }
    pub fn cloud_watch_log_group_arn(&self) -> Option<&str> {
        self.cloud_watch_log_group_arn.as_deref()
    }
    pub fn host_environment(&self) -> Option<&crate::model::HostEnvironment> {
        self.host_environment.as_ref()
    }
}
/// See [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
pub mod describe_gateway_information_output {
    /// A builder for [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) gateway_id: Option<String>,
        pub(crate) gateway_name: Option<String>,
        pub(crate) gateway_timezone: Option<String>,
        pub(crate) gateway_state: Option<String>,
        pub(crate) gateway_network_interfaces: Option<Vec<crate::model::NetworkInterface>>,
        pub(crate) gateway_type: Option<String>,
        pub(crate) next_update_availability_date: Option<String>,
        pub(crate) last_software_update: Option<String>,
        pub(crate) ec2_instance_id: Option<String>,
        pub(crate) ec2_instance_region: Option<String>,
        pub(crate) tags: Option<Vec<crate::model::Tag>>,
        pub(crate) vpc_endpoint: Option<String>,
        pub(crate) cloud_watch_log_group_arn: Option<String>,
        pub(crate) host_environment: Option<crate::model::HostEnvironment>,
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
        pub fn gateway_id(mut self, input: impl Into<String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        pub fn set_gateway_id(mut self, input: Option<String>) -> Self {
            self.gateway_id = input;
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
        pub fn gateway_state(mut self, input: impl Into<String>) -> Self {
            self.gateway_state = Some(input.into());
            self
        }
        pub fn set_gateway_state(mut self, input: Option<String>) -> Self {
            self.gateway_state = input;
            self
        }
        /// Appends an item to `gateway_network_interfaces`
        pub fn gateway_network_interfaces(
            mut self,
            input: impl Into<crate::model::NetworkInterface>,
        ) -> Self {
            let mut v = self.gateway_network_interfaces.unwrap_or_default();
            v.push(input.into());
            self.gateway_network_interfaces = Some(v);
            self
        }
        pub fn set_gateway_network_interfaces(
            mut self,
            input: Option<Vec<crate::model::NetworkInterface>>,
        ) -> Self {
            self.gateway_network_interfaces = input;
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
        pub fn next_update_availability_date(mut self, input: impl Into<String>) -> Self {
            self.next_update_availability_date = Some(input.into());
            self
        }
        pub fn set_next_update_availability_date(mut self, input: Option<String>) -> Self {
            self.next_update_availability_date = input;
            self
        }
        pub fn last_software_update(mut self, input: impl Into<String>) -> Self {
            self.last_software_update = Some(input.into());
            self
        }
        pub fn set_last_software_update(mut self, input: Option<String>) -> Self {
            self.last_software_update = input;
            self
        }
        pub fn ec2_instance_id(mut self, input: impl Into<String>) -> Self {
            self.ec2_instance_id = Some(input.into());
            self
        }
        pub fn set_ec2_instance_id(mut self, input: Option<String>) -> Self {
            self.ec2_instance_id = input;
            self
        }
        pub fn ec2_instance_region(mut self, input: impl Into<String>) -> Self {
            self.ec2_instance_region = Some(input.into());
            self
        }
        pub fn set_ec2_instance_region(mut self, input: Option<String>) -> Self {
            self.ec2_instance_region = input;
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
        pub fn vpc_endpoint(mut self, input: impl Into<String>) -> Self {
            self.vpc_endpoint = Some(input.into());
            self
        }
        pub fn set_vpc_endpoint(mut self, input: Option<String>) -> Self {
            self.vpc_endpoint = input;
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
        pub fn host_environment(mut self, input: crate::model::HostEnvironment) -> Self {
            self.host_environment = Some(input);
            self
        }
        pub fn set_host_environment(
            mut self,
            input: Option<crate::model::HostEnvironment>,
        ) -> Self {
            self.host_environment = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
        pub fn build(self) -> crate::output::DescribeGatewayInformationOutput {
            crate::output::DescribeGatewayInformationOutput {
                gateway_arn: self.gateway_arn,
                gateway_id: self.gateway_id,
                gateway_name: self.gateway_name,
                gateway_timezone: self.gateway_timezone,
                gateway_state: self.gateway_state,
                gateway_network_interfaces: self.gateway_network_interfaces,
                gateway_type: self.gateway_type,
                next_update_availability_date: self.next_update_availability_date,
                last_software_update: self.last_software_update,
                ec2_instance_id: self.ec2_instance_id,
                ec2_instance_region: self.ec2_instance_region,
                tags: self.tags,
                vpc_endpoint: self.vpc_endpoint,
                cloud_watch_log_group_arn: self.cloud_watch_log_group_arn,
                host_environment: self.host_environment,
            }
        }
    }
}
impl DescribeGatewayInformationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeGatewayInformationOutput`](crate::output::DescribeGatewayInformationOutput)
    pub fn builder() -> crate::output::describe_gateway_information_output::Builder {
        crate::output::describe_gateway_information_output::Builder::default()
    }
}

/// Output of [`DescribeMaintenanceStartTime`](crate::operation::DescribeMaintenanceStartTime)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeMaintenanceStartTimeOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "HourOfDay")]
    pub hour_of_day: Option<i32>,
    #[serde(rename = "MinuteOfHour")]
    pub minute_of_hour: Option<i32>,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: Option<i32>,
    #[serde(rename = "DayOfMonth")]
    pub day_of_month: Option<i32>,
    #[serde(rename = "Timezone")]
    pub timezone: Option<String>,
}
impl DescribeMaintenanceStartTimeOutput {
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
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}
/// See [`DescribeMaintenanceStartTimeOutput`](crate::output::DescribeMaintenanceStartTimeOutput)
pub mod describe_maintenance_start_time_output {
    /// A builder for [`DescribeMaintenanceStartTimeOutput`](crate::output::DescribeMaintenanceStartTimeOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) hour_of_day: Option<i32>,
        pub(crate) minute_of_hour: Option<i32>,
        pub(crate) day_of_week: Option<i32>,
        pub(crate) day_of_month: Option<i32>,
        pub(crate) timezone: Option<String>,
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
        pub fn timezone(mut self, input: impl Into<String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: Option<String>) -> Self {
            self.timezone = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeMaintenanceStartTimeOutput`](crate::output::DescribeMaintenanceStartTimeOutput)
        pub fn build(self) -> crate::output::DescribeMaintenanceStartTimeOutput {
            crate::output::DescribeMaintenanceStartTimeOutput {
                gateway_arn: self.gateway_arn,
                hour_of_day: self.hour_of_day,
                minute_of_hour: self.minute_of_hour,
                day_of_week: self.day_of_week,
                day_of_month: self.day_of_month,
                timezone: self.timezone,
            }
        }
    }
}
impl DescribeMaintenanceStartTimeOutput {
    /// Creates a new builder-style object to manufacture [`DescribeMaintenanceStartTimeOutput`](crate::output::DescribeMaintenanceStartTimeOutput)
    pub fn builder() -> crate::output::describe_maintenance_start_time_output::Builder {
        crate::output::describe_maintenance_start_time_output::Builder::default()
    }
}

/// Output of [`DescribeNfsFileShares`](crate::operation::DescribeNfsFileShares)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeNfsFileSharesOutput {
    #[serde(rename = "NFSFileShareInfoList")]
    pub nfs_file_share_info_list: Option<Vec<crate::model::NfsFileShareInfo>>,
}
impl DescribeNfsFileSharesOutput {
    pub fn nfs_file_share_info_list(&self) -> Option<&[crate::model::NfsFileShareInfo]> {
        self.nfs_file_share_info_list.as_deref()
    }
}
/// See [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput)
pub mod describe_nfs_file_shares_output {
    /// A builder for [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) nfs_file_share_info_list: Option<Vec<crate::model::NfsFileShareInfo>>,
    }
    impl Builder {
        /// Appends an item to `nfs_file_share_info_list`
        pub fn nfs_file_share_info_list(
            mut self,
            input: impl Into<crate::model::NfsFileShareInfo>,
        ) -> Self {
            let mut v = self.nfs_file_share_info_list.unwrap_or_default();
            v.push(input.into());
            self.nfs_file_share_info_list = Some(v);
            self
        }
        pub fn set_nfs_file_share_info_list(
            mut self,
            input: Option<Vec<crate::model::NfsFileShareInfo>>,
        ) -> Self {
            self.nfs_file_share_info_list = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput)
        pub fn build(self) -> crate::output::DescribeNfsFileSharesOutput {
            crate::output::DescribeNfsFileSharesOutput {
                nfs_file_share_info_list: self.nfs_file_share_info_list,
            }
        }
    }
}
impl DescribeNfsFileSharesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeNfsFileSharesOutput`](crate::output::DescribeNfsFileSharesOutput)
    pub fn builder() -> crate::output::describe_nfs_file_shares_output::Builder {
        crate::output::describe_nfs_file_shares_output::Builder::default()
    }
}

/// Output of [`DescribeSmbFileShares`](crate::operation::DescribeSmbFileShares)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeSmbFileSharesOutput {
    #[serde(rename = "SMBFileShareInfoList")]
    pub smb_file_share_info_list: Option<Vec<crate::model::SmbFileShareInfo>>,
}
impl DescribeSmbFileSharesOutput {
    pub fn smb_file_share_info_list(&self) -> Option<&[crate::model::SmbFileShareInfo]> {
        self.smb_file_share_info_list.as_deref()
    }
}
/// See [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput)
pub mod describe_smb_file_shares_output {
    /// A builder for [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) smb_file_share_info_list: Option<Vec<crate::model::SmbFileShareInfo>>,
    }
    impl Builder {
        /// Appends an item to `smb_file_share_info_list`
        pub fn smb_file_share_info_list(
            mut self,
            input: impl Into<crate::model::SmbFileShareInfo>,
        ) -> Self {
            let mut v = self.smb_file_share_info_list.unwrap_or_default();
            v.push(input.into());
            self.smb_file_share_info_list = Some(v);
            self
        }
        pub fn set_smb_file_share_info_list(
            mut self,
            input: Option<Vec<crate::model::SmbFileShareInfo>>,
        ) -> Self {
            self.smb_file_share_info_list = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput)
        pub fn build(self) -> crate::output::DescribeSmbFileSharesOutput {
            crate::output::DescribeSmbFileSharesOutput {
                smb_file_share_info_list: self.smb_file_share_info_list,
            }
        }
    }
}
impl DescribeSmbFileSharesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSmbFileSharesOutput`](crate::output::DescribeSmbFileSharesOutput)
    pub fn builder() -> crate::output::describe_smb_file_shares_output::Builder {
        crate::output::describe_smb_file_shares_output::Builder::default()
    }
}

/// Output of [`DescribeSmbSettings`](crate::operation::DescribeSmbSettings)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeSmbSettingsOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "DomainName")]
    pub domain_name: Option<String>,
    #[serde(rename = "ActiveDirectoryStatus")]
    pub active_directory_status: Option<crate::model::ActiveDirectoryStatus>,
    #[serde(rename = "SMBGuestPasswordSet")]
    pub smb_guest_password_set: Option<bool>,
    #[serde(rename = "SMBSecurityStrategy")]
    pub smb_security_strategy: Option<crate::model::SmbSecurityStrategy>,
}
impl DescribeSmbSettingsOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }
    pub fn active_directory_status(&self) -> Option<&crate::model::ActiveDirectoryStatus> {
        self.active_directory_status.as_ref()
    }
    pub fn smb_guest_password_set(&self) -> Option<bool> {
        self.smb_guest_password_set
    }
    pub fn smb_security_strategy(&self) -> Option<&crate::model::SmbSecurityStrategy> {
        self.smb_security_strategy.as_ref()
    }
}
/// See [`DescribeSmbSettingsOutput`](crate::output::DescribeSmbSettingsOutput)
pub mod describe_smb_settings_output {
    /// A builder for [`DescribeSmbSettingsOutput`](crate::output::DescribeSmbSettingsOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) domain_name: Option<String>,
        pub(crate) active_directory_status: Option<crate::model::ActiveDirectoryStatus>,
        pub(crate) smb_guest_password_set: Option<bool>,
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
        pub fn domain_name(mut self, input: impl Into<String>) -> Self {
            self.domain_name = Some(input.into());
            self
        }
        pub fn set_domain_name(mut self, input: Option<String>) -> Self {
            self.domain_name = input;
            self
        }
        pub fn active_directory_status(
            mut self,
            input: crate::model::ActiveDirectoryStatus,
        ) -> Self {
            self.active_directory_status = Some(input);
            self
        }
        pub fn set_active_directory_status(
            mut self,
            input: Option<crate::model::ActiveDirectoryStatus>,
        ) -> Self {
            self.active_directory_status = input;
            self
        }
        pub fn smb_guest_password_set(mut self, input: bool) -> Self {
            self.smb_guest_password_set = Some(input);
            self
        }
        pub fn set_smb_guest_password_set(mut self, input: Option<bool>) -> Self {
            self.smb_guest_password_set = input;
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
        /// Consumes the builder and constructs a [`DescribeSmbSettingsOutput`](crate::output::DescribeSmbSettingsOutput)
        pub fn build(self) -> crate::output::DescribeSmbSettingsOutput {
            crate::output::DescribeSmbSettingsOutput {
                gateway_arn: self.gateway_arn,
                domain_name: self.domain_name,
                active_directory_status: self.active_directory_status,
                smb_guest_password_set: self.smb_guest_password_set,
                smb_security_strategy: self.smb_security_strategy,
            }
        }
    }
}
impl DescribeSmbSettingsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSmbSettingsOutput`](crate::output::DescribeSmbSettingsOutput)
    pub fn builder() -> crate::output::describe_smb_settings_output::Builder {
        crate::output::describe_smb_settings_output::Builder::default()
    }
}

/// Output of [`DescribeSnapshotSchedule`](crate::operation::DescribeSnapshotSchedule)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeSnapshotScheduleOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
    #[serde(rename = "StartAt")]
    pub start_at: Option<i32>,
    #[serde(rename = "RecurrenceInHours")]
    pub recurrence_in_hours: Option<i32>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Timezone")]
    pub timezone: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl DescribeSnapshotScheduleOutput {
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
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`DescribeSnapshotScheduleOutput`](crate::output::DescribeSnapshotScheduleOutput)
pub mod describe_snapshot_schedule_output {
    /// A builder for [`DescribeSnapshotScheduleOutput`](crate::output::DescribeSnapshotScheduleOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) start_at: Option<i32>,
        pub(crate) recurrence_in_hours: Option<i32>,
        pub(crate) description: Option<String>,
        pub(crate) timezone: Option<String>,
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
        pub fn timezone(mut self, input: impl Into<String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: Option<String>) -> Self {
            self.timezone = input;
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
        /// Consumes the builder and constructs a [`DescribeSnapshotScheduleOutput`](crate::output::DescribeSnapshotScheduleOutput)
        pub fn build(self) -> crate::output::DescribeSnapshotScheduleOutput {
            crate::output::DescribeSnapshotScheduleOutput {
                volume_arn: self.volume_arn,
                start_at: self.start_at,
                recurrence_in_hours: self.recurrence_in_hours,
                description: self.description,
                timezone: self.timezone,
                tags: self.tags,
            }
        }
    }
}
impl DescribeSnapshotScheduleOutput {
    /// Creates a new builder-style object to manufacture [`DescribeSnapshotScheduleOutput`](crate::output::DescribeSnapshotScheduleOutput)
    pub fn builder() -> crate::output::describe_snapshot_schedule_output::Builder {
        crate::output::describe_snapshot_schedule_output::Builder::default()
    }
}

/// Output of [`DescribeStorediScsiVolumes`](crate::operation::DescribeStorediScsiVolumes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeStorediScsiVolumesOutput {
    #[serde(rename = "StorediSCSIVolumes")]
    pub storedi_scsi_volumes: Option<Vec<crate::model::StorediScsiVolume>>,
}
impl DescribeStorediScsiVolumesOutput {
    pub fn storedi_scsi_volumes(&self) -> Option<&[crate::model::StorediScsiVolume]> {
        self.storedi_scsi_volumes.as_deref()
    }
}
/// See [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput)
pub mod describe_storedi_scsi_volumes_output {
    /// A builder for [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) storedi_scsi_volumes: Option<Vec<crate::model::StorediScsiVolume>>,
    }
    impl Builder {
        /// Appends an item to `storedi_scsi_volumes`
        pub fn storedi_scsi_volumes(
            mut self,
            input: impl Into<crate::model::StorediScsiVolume>,
        ) -> Self {
            let mut v = self.storedi_scsi_volumes.unwrap_or_default();
            v.push(input.into());
            self.storedi_scsi_volumes = Some(v);
            self
        }
        pub fn set_storedi_scsi_volumes(
            mut self,
            input: Option<Vec<crate::model::StorediScsiVolume>>,
        ) -> Self {
            self.storedi_scsi_volumes = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput)
        pub fn build(self) -> crate::output::DescribeStorediScsiVolumesOutput {
            crate::output::DescribeStorediScsiVolumesOutput {
                storedi_scsi_volumes: self.storedi_scsi_volumes,
            }
        }
    }
}
impl DescribeStorediScsiVolumesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeStorediScsiVolumesOutput`](crate::output::DescribeStorediScsiVolumesOutput)
    pub fn builder() -> crate::output::describe_storedi_scsi_volumes_output::Builder {
        crate::output::describe_storedi_scsi_volumes_output::Builder::default()
    }
}

/// Output of [`DescribeTapeArchives`](crate::operation::DescribeTapeArchives)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeTapeArchivesOutput {
    #[serde(rename = "TapeArchives")]
    pub tape_archives: Option<Vec<crate::model::TapeArchive>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
}
impl DescribeTapeArchivesOutput {
    pub fn tape_archives(&self) -> Option<&[crate::model::TapeArchive]> {
        self.tape_archives.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}
/// See [`DescribeTapeArchivesOutput`](crate::output::DescribeTapeArchivesOutput)
pub mod describe_tape_archives_output {
    /// A builder for [`DescribeTapeArchivesOutput`](crate::output::DescribeTapeArchivesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_archives: Option<Vec<crate::model::TapeArchive>>,
        pub(crate) marker: Option<String>,
    }
    impl Builder {
        /// Appends an item to `tape_archives`
        pub fn tape_archives(mut self, input: impl Into<crate::model::TapeArchive>) -> Self {
            let mut v = self.tape_archives.unwrap_or_default();
            v.push(input.into());
            self.tape_archives = Some(v);
            self
        }
        pub fn set_tape_archives(mut self, input: Option<Vec<crate::model::TapeArchive>>) -> Self {
            self.tape_archives = input;
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
        /// Consumes the builder and constructs a [`DescribeTapeArchivesOutput`](crate::output::DescribeTapeArchivesOutput)
        pub fn build(self) -> crate::output::DescribeTapeArchivesOutput {
            crate::output::DescribeTapeArchivesOutput {
                tape_archives: self.tape_archives,
                marker: self.marker,
            }
        }
    }
}
impl DescribeTapeArchivesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTapeArchivesOutput`](crate::output::DescribeTapeArchivesOutput)
    pub fn builder() -> crate::output::describe_tape_archives_output::Builder {
        crate::output::describe_tape_archives_output::Builder::default()
    }
}

/// Output of [`DescribeTapeRecoveryPoints`](crate::operation::DescribeTapeRecoveryPoints)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeTapeRecoveryPointsOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "TapeRecoveryPointInfos")]
    pub tape_recovery_point_infos: Option<Vec<crate::model::TapeRecoveryPointInfo>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
}
impl DescribeTapeRecoveryPointsOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn tape_recovery_point_infos(&self) -> Option<&[crate::model::TapeRecoveryPointInfo]> {
        self.tape_recovery_point_infos.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}
/// See [`DescribeTapeRecoveryPointsOutput`](crate::output::DescribeTapeRecoveryPointsOutput)
pub mod describe_tape_recovery_points_output {
    /// A builder for [`DescribeTapeRecoveryPointsOutput`](crate::output::DescribeTapeRecoveryPointsOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) tape_recovery_point_infos: Option<Vec<crate::model::TapeRecoveryPointInfo>>,
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
        /// Appends an item to `tape_recovery_point_infos`
        pub fn tape_recovery_point_infos(
            mut self,
            input: impl Into<crate::model::TapeRecoveryPointInfo>,
        ) -> Self {
            let mut v = self.tape_recovery_point_infos.unwrap_or_default();
            v.push(input.into());
            self.tape_recovery_point_infos = Some(v);
            self
        }
        pub fn set_tape_recovery_point_infos(
            mut self,
            input: Option<Vec<crate::model::TapeRecoveryPointInfo>>,
        ) -> Self {
            self.tape_recovery_point_infos = input;
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
        /// Consumes the builder and constructs a [`DescribeTapeRecoveryPointsOutput`](crate::output::DescribeTapeRecoveryPointsOutput)
        pub fn build(self) -> crate::output::DescribeTapeRecoveryPointsOutput {
            crate::output::DescribeTapeRecoveryPointsOutput {
                gateway_arn: self.gateway_arn,
                tape_recovery_point_infos: self.tape_recovery_point_infos,
                marker: self.marker,
            }
        }
    }
}
impl DescribeTapeRecoveryPointsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTapeRecoveryPointsOutput`](crate::output::DescribeTapeRecoveryPointsOutput)
    pub fn builder() -> crate::output::describe_tape_recovery_points_output::Builder {
        crate::output::describe_tape_recovery_points_output::Builder::default()
    }
}

/// Output of [`DescribeTapes`](crate::operation::DescribeTapes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeTapesOutput {
    #[serde(rename = "Tapes")]
    pub tapes: Option<Vec<crate::model::Tape>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
}
impl DescribeTapesOutput {
    pub fn tapes(&self) -> Option<&[crate::model::Tape]> {
        self.tapes.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}
/// See [`DescribeTapesOutput`](crate::output::DescribeTapesOutput)
pub mod describe_tapes_output {
    /// A builder for [`DescribeTapesOutput`](crate::output::DescribeTapesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tapes: Option<Vec<crate::model::Tape>>,
        pub(crate) marker: Option<String>,
    }
    impl Builder {
        /// Appends an item to `tapes`
        pub fn tapes(mut self, input: impl Into<crate::model::Tape>) -> Self {
            let mut v = self.tapes.unwrap_or_default();
            v.push(input.into());
            self.tapes = Some(v);
            self
        }
        pub fn set_tapes(mut self, input: Option<Vec<crate::model::Tape>>) -> Self {
            self.tapes = input;
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
        /// Consumes the builder and constructs a [`DescribeTapesOutput`](crate::output::DescribeTapesOutput)
        pub fn build(self) -> crate::output::DescribeTapesOutput {
            crate::output::DescribeTapesOutput {
                tapes: self.tapes,
                marker: self.marker,
            }
        }
    }
}
impl DescribeTapesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTapesOutput`](crate::output::DescribeTapesOutput)
    pub fn builder() -> crate::output::describe_tapes_output::Builder {
        crate::output::describe_tapes_output::Builder::default()
    }
}

/// Output of [`DescribeUploadBuffer`](crate::operation::DescribeUploadBuffer)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeUploadBufferOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    /// Disk identifiers, as returned by `ListLocalDisks`.
    #[serde(rename = "DiskIds")]
    pub disk_ids: Option<Vec<String>>,
    #[serde(rename = "UploadBufferUsedInBytes")]
    pub upload_buffer_used_in_bytes: Option<i64>,
    #[serde(rename = "UploadBufferAllocatedInBytes")]
    pub upload_buffer_allocated_in_bytes: Option<i64>,
}
impl DescribeUploadBufferOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disk_ids(&self) -> Option<&[String]> {
        self.disk_ids.as_deref()
    }
    pub fn upload_buffer_used_in_bytes(&self) -> Option<i64> {
        self.upload_buffer_used_in_bytes
    }
    pub fn upload_buffer_allocated_in_bytes(&self) -> Option<i64> {
        self.upload_buffer_allocated_in_bytes
    }
}
/// See [`DescribeUploadBufferOutput`](crate::output::DescribeUploadBufferOutput)
pub mod describe_upload_buffer_output {
    /// A builder for [`DescribeUploadBufferOutput`](crate::output::DescribeUploadBufferOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disk_ids: Option<Vec<String>>,
        pub(crate) upload_buffer_used_in_bytes: Option<i64>,
        pub(crate) upload_buffer_allocated_in_bytes: Option<i64>,
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
        pub fn upload_buffer_used_in_bytes(mut self, input: i64) -> Self {
            self.upload_buffer_used_in_bytes = Some(input);
            self
        }
        pub fn set_upload_buffer_used_in_bytes(mut self, input: Option<i64>) -> Self {
            self.upload_buffer_used_in_bytes = input;
            self
        }
        pub fn upload_buffer_allocated_in_bytes(mut self, input: i64) -> Self {
            self.upload_buffer_allocated_in_bytes = Some(input);
            self
        }
        pub fn set_upload_buffer_allocated_in_bytes(mut self, input: Option<i64>) -> Self {
            self.upload_buffer_allocated_in_bytes = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeUploadBufferOutput`](crate::output::DescribeUploadBufferOutput)
        pub fn build(self) -> crate::output::DescribeUploadBufferOutput {
            crate::output::DescribeUploadBufferOutput {
                gateway_arn: self.gateway_arn,
                disk_ids: self.disk_ids,
                upload_buffer_used_in_bytes: self.upload_buffer_used_in_bytes,
                upload_buffer_allocated_in_bytes: self.upload_buffer_allocated_in_bytes,
            }
        }
    }
}
impl DescribeUploadBufferOutput {
    /// Creates a new builder-style object to manufacture [`DescribeUploadBufferOutput`](crate::output::DescribeUploadBufferOutput)
    pub fn builder() -> crate::output::describe_upload_buffer_output::Builder {
        crate::output::describe_upload_buffer_output::Builder::default()
    }
}

/// Output of [`DescribeVtlDevices`](crate::operation::DescribeVtlDevices)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeVtlDevicesOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "VTLDevices")]
    pub vtl_devices: Option<Vec<crate::model::VtlDevice>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
}
impl DescribeVtlDevicesOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn vtl_devices(&self) -> Option<&[crate::model::VtlDevice]> {
        self.vtl_devices.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}
/// See [`DescribeVtlDevicesOutput`](crate::output::DescribeVtlDevicesOutput)
pub mod describe_vtl_devices_output {
    /// A builder for [`DescribeVtlDevicesOutput`](crate::output::DescribeVtlDevicesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) vtl_devices: Option<Vec<crate::model::VtlDevice>>,
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
        /// Appends an item to `vtl_devices`
        pub fn vtl_devices(mut self, input: impl Into<crate::model::VtlDevice>) -> Self {
            let mut v = self.vtl_devices.unwrap_or_default();
            v.push(input.into());
            self.vtl_devices = Some(v);
            self
        }
        pub fn set_vtl_devices(mut self, input: Option<Vec<crate::model::VtlDevice>>) -> Self {
            self.vtl_devices = input;
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
        /// Consumes the builder and constructs a [`DescribeVtlDevicesOutput`](crate::output::DescribeVtlDevicesOutput)
        pub fn build(self) -> crate::output::DescribeVtlDevicesOutput {
            crate::output::DescribeVtlDevicesOutput {
                gateway_arn: self.gateway_arn,
                vtl_devices: self.vtl_devices,
                marker: self.marker,
            }
        }
    }
}
impl DescribeVtlDevicesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeVtlDevicesOutput`](crate::output::DescribeVtlDevicesOutput)
    pub fn builder() -> crate::output::describe_vtl_devices_output::Builder {
        crate::output::describe_vtl_devices_output::Builder::default()
    }
}

/// Output of [`DescribeWorkingStorage`](crate::operation::DescribeWorkingStorage)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DescribeWorkingStorageOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    /// Disk identifiers, as returned by `ListLocalDisks`.
    #[serde(rename = "DiskIds")]
    pub disk_ids: Option<Vec<String>>,
    #[serde(rename = "WorkingStorageUsedInBytes")]
    pub working_storage_used_in_bytes: Option<i64>,
    #[serde(rename = "WorkingStorageAllocatedInBytes")]
    pub working_storage_allocated_in_bytes: Option<i64>,
}
impl DescribeWorkingStorageOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disk_ids(&self) -> Option<&[String]> {
        self.disk_ids.as_deref()
    }
    pub fn working_storage_used_in_bytes(&self) -> Option<i64> {
        self.working_storage_used_in_bytes
    }
    pub fn working_storage_allocated_in_bytes(&self) -> Option<i64> {
        self.working_storage_allocated_in_bytes
    }
}
/// See [`DescribeWorkingStorageOutput`](crate::output::DescribeWorkingStorageOutput)
pub mod describe_working_storage_output {
    /// A builder for [`DescribeWorkingStorageOutput`](crate::output::DescribeWorkingStorageOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disk_ids: Option<Vec<String>>,
        pub(crate) working_storage_used_in_bytes: Option<i64>,
        pub(crate) working_storage_allocated_in_bytes: Option<i64>,
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
        pub fn working_storage_used_in_bytes(mut self, input: i64) -> Self {
            self.working_storage_used_in_bytes = Some(input);
            self
        }
        pub fn set_working_storage_used_in_bytes(mut self, input: Option<i64>) -> Self {
            self.working_storage_used_in_bytes = input;
            self
        }
        pub fn working_storage_allocated_in_bytes(mut self, input: i64) -> Self {
            self.working_storage_allocated_in_bytes = Some(input);
            self
        }
        pub fn set_working_storage_allocated_in_bytes(mut self, input: Option<i64>) -> Self {
            self.working_storage_allocated_in_bytes = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeWorkingStorageOutput`](crate::output::DescribeWorkingStorageOutput)
        pub fn build(self) -> crate::output::DescribeWorkingStorageOutput {
            crate::output::DescribeWorkingStorageOutput {
                gateway_arn: self.gateway_arn,
                disk_ids: self.disk_ids,
                working_storage_used_in_bytes: self.working_storage_used_in_bytes,
                working_storage_allocated_in_bytes: self.working_storage_allocated_in_bytes,
            }
        }
    }
}
impl DescribeWorkingStorageOutput {
    /// Creates a new builder-style object to manufacture [`DescribeWorkingStorageOutput`](crate::output::DescribeWorkingStorageOutput)
    pub fn builder() -> crate::output::describe_working_storage_output::Builder {
        crate::output::describe_working_storage_output::Builder::default()
    }
}

/// Output of [`DetachVolume`](crate::operation::DetachVolume)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DetachVolumeOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
}
impl DetachVolumeOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`DetachVolumeOutput`](crate::output::DetachVolumeOutput)
pub mod detach_volume_output {
    /// A builder for [`DetachVolumeOutput`](crate::output::DetachVolumeOutput)
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
        /// Consumes the builder and constructs a [`DetachVolumeOutput`](crate::output::DetachVolumeOutput)
        pub fn build(self) -> crate::output::DetachVolumeOutput {
            crate::output::DetachVolumeOutput {
                volume_arn: self.volume_arn,
            }
        }
    }
}
impl DetachVolumeOutput {
    /// Creates a new builder-style object to manufacture [`DetachVolumeOutput`](crate::output::DetachVolumeOutput)
    pub fn builder() -> crate::output::detach_volume_output::Builder {
        crate::output::detach_volume_output::Builder::default()
    }
}

/// Output of [`DisableGateway`](crate::operation::DisableGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DisableGatewayOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl DisableGatewayOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`DisableGatewayOutput`](crate::output::DisableGatewayOutput)
pub mod disable_gateway_output {
    /// A builder for [`DisableGatewayOutput`](crate::output::DisableGatewayOutput)
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
        /// Consumes the builder and constructs a [`DisableGatewayOutput`](crate::output::DisableGatewayOutput)
        pub fn build(self) -> crate::output::DisableGatewayOutput {
            crate::output::DisableGatewayOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl DisableGatewayOutput {
    /// Creates a new builder-style object to manufacture [`DisableGatewayOutput`](crate::output::DisableGatewayOutput)
    pub fn builder() -> crate::output::disable_gateway_output::Builder {
        crate::output::disable_gateway_output::Builder::default()
    }
}

/// Output of [`JoinDomain`](crate::operation::JoinDomain)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct JoinDomainOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "ActiveDirectoryStatus")]
    pub active_directory_status: Option<crate::model::ActiveDirectoryStatus>,
}
impl JoinDomainOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn active_directory_status(&self) -> Option<&crate::model::ActiveDirectoryStatus> {
        self.active_directory_status.as_ref()
    }
}
/// See [`JoinDomainOutput`](crate::output::JoinDomainOutput)
pub mod join_domain_output {
    /// A builder for [`JoinDomainOutput`](crate::output::JoinDomainOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) active_directory_status: Option<crate::model::ActiveDirectoryStatus>,
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
        pub fn active_directory_status(
            mut self,
            input: crate::model::ActiveDirectoryStatus,
        ) -> Self {
            self.active_directory_status = Some(input);
            self
        }
        pub fn set_active_directory_status(
            mut self,
            input: Option<crate::model::ActiveDirectoryStatus>,
        ) -> Self {
            self.active_directory_status = input;
            self
        }
        /// Consumes the builder and constructs a [`JoinDomainOutput`](crate::output::JoinDomainOutput)
        pub fn build(self) -> crate::output::JoinDomainOutput {
            crate::output::JoinDomainOutput {
                gateway_arn: self.gateway_arn,
                active_directory_status: self.active_directory_status,
            }
        }
    }
}
impl JoinDomainOutput {
    /// Creates a new builder-style object to manufacture [`JoinDomainOutput`](crate::output::JoinDomainOutput)
    pub fn builder() -> crate::output::join_domain_output::Builder {
        crate::output::join_domain_output::Builder::default()
    }
}

/// Output of [`ListAutomaticTapeCreationPolicies`](crate::operation::ListAutomaticTapeCreationPolicies)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListAutomaticTapeCreationPoliciesOutput {
    #[serde(rename = "AutomaticTapeCreationPolicyInfos")]
    pub automatic_tape_creation_policy_infos:
        Option<Vec<crate::model::AutomaticTapeCreationPolicyInfo>>,
}
impl ListAutomaticTapeCreationPoliciesOutput {
    pub fn automatic_tape_creation_policy_infos(
        &self,
    ) -> Option<&[crate::model::AutomaticTapeCreationPolicyInfo]> {
        self.automatic_tape_creation_policy_infos.as_deref()
    }
}
/// See [`ListAutomaticTapeCreationPoliciesOutput`](crate::output::ListAutomaticTapeCreationPoliciesOutput)
pub mod list_automatic_tape_creation_policies_output {
    /// A builder for [`ListAutomaticTapeCreationPoliciesOutput`](crate::output::ListAutomaticTapeCreationPoliciesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) automatic_tape_creation_policy_infos:
            Option<Vec<crate::model::AutomaticTapeCreationPolicyInfo>>,
    }
    impl Builder {
        /// Appends an item to `automatic_tape_creation_policy_infos`
        pub fn automatic_tape_creation_policy_infos(
            mut self,
            input: impl Into<crate::model::AutomaticTapeCreationPolicyInfo>,
        ) -> Self {
            let mut v = self.automatic_tape_creation_policy_infos.unwrap_or_default();
            v.push(input.into());
            self.automatic_tape_creation_policy_infos = Some(v);
            self
        }
        pub fn set_automatic_tape_creation_policy_infos(
            mut self,
            input: Option<Vec<crate::model::AutomaticTapeCreationPolicyInfo>>,
        ) -> Self {
            self.automatic_tape_creation_policy_infos = input;
            self
        }
        /// Consumes the builder and constructs a [`ListAutomaticTapeCreationPoliciesOutput`](crate::output::ListAutomaticTapeCreationPoliciesOutput)
        pub fn build(self) -> crate::output::ListAutomaticTapeCreationPoliciesOutput {
            crate::output::ListAutomaticTapeCreationPoliciesOutput {
                automatic_tape_creation_policy_infos: self.automatic_tape_creation_policy_infos,
            }
        }
    }
}
impl ListAutomaticTapeCreationPoliciesOutput {
    /// Creates a new builder-style object to manufacture [`ListAutomaticTapeCreationPoliciesOutput`](crate::output::ListAutomaticTapeCreationPoliciesOutput)
    pub fn builder() -> crate::output::list_automatic_tape_creation_policies_output::Builder {
        crate::output::list_automatic_tape_creation_policies_output::Builder::default()
    }
}

/// Output of [`ListFileShares`](crate::operation::ListFileShares)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListFileSharesOutput {
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
    /// The marker of the next page of file shares, absent after the last page.
    #[serde(rename = "NextMarker")]
    pub next_marker: Option<String>,
    #[serde(rename = "FileShareInfoList")]
    pub file_share_info_list: Option<Vec<crate::model::FileShareInfo>>,
}
impl ListFileSharesOutput {
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn next_marker(&self) -> Option<&str> {
        self.next_marker.as_deref()
    }
    pub fn file_share_info_list(&self) -> Option<&[crate::model::FileShareInfo]> {
        self.file_share_info_list.as_deref()
    }
}
/// See [`ListFileSharesOutput`](crate::output::ListFileSharesOutput)
pub mod list_file_shares_output {
    /// A builder for [`ListFileSharesOutput`](crate::output::ListFileSharesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) marker: Option<String>,
        pub(crate) next_marker: Option<String>,
        pub(crate) file_share_info_list: Option<Vec<crate::model::FileShareInfo>>,
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
        pub fn next_marker(mut self, input: impl Into<String>) -> Self {
            self.next_marker = Some(input.into());
            self
        }
        pub fn set_next_marker(mut self, input: Option<String>) -> Self {
            self.next_marker = input;
            self
        }
        /// Appends an item to `file_share_info_list`
        pub fn file_share_info_list(
            mut self,
            input: impl Into<crate::model::FileShareInfo>,
        ) -> Self {
            let mut v = self.file_share_info_list.unwrap_or_default();
            v.push(input.into());
            self.file_share_info_list = Some(v);
            self
        }
        pub fn set_file_share_info_list(
            mut self,
            input: Option<Vec<crate::model::FileShareInfo>>,
        ) -> Self {
            self.file_share_info_list = input;
            self
        }
        /// Consumes the builder and constructs a [`ListFileSharesOutput`](crate::output::ListFileSharesOutput)
        pub fn build(self) -> crate::output::ListFileSharesOutput {
            crate::output::ListFileSharesOutput {
                marker: self.marker,
                next_marker: self.next_marker,
                file_share_info_list: self.file_share_info_list,
            }
        }
    }
}
impl ListFileSharesOutput {
    /// Creates a new builder-style object to manufacture [`ListFileSharesOutput`](crate::output::ListFileSharesOutput)
    pub fn builder() -> crate::output::list_file_shares_output::Builder {
        crate::output::list_file_shares_output::Builder::default()
    }
}

/// Output of [`ListGateways`](crate::operation::ListGateways)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListGatewaysOutput {
    #[serde(rename = "Gateways")]
    pub gateways: Option<Vec<crate::model::GatewayInfo>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
}
impl ListGatewaysOutput {
    pub fn gateways(&self) -> Option<&[crate::model::GatewayInfo]> {
        self.gateways.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}
/// See [`ListGatewaysOutput`](crate::output::ListGatewaysOutput)
pub mod list_gateways_output {
    /// A builder for [`ListGatewaysOutput`](crate::output::ListGatewaysOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateways: Option<Vec<crate::model::GatewayInfo>>,
        pub(crate) marker: Option<String>,
    }
    impl Builder {
        /// Appends an item to `gateways`
        pub fn gateways(mut self, input: impl Into<crate::model::GatewayInfo>) -> Self {
            let mut v = self.gateways.unwrap_or_default();
            v.push(input.into());
            self.gateways = Some(v);
            self
        }
        pub fn set_gateways(mut self, input: Option<Vec<crate::model::GatewayInfo>>) -> Self {
            self.gateways = input;
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
        /// Consumes the builder and constructs a [`ListGatewaysOutput`](crate::output::ListGatewaysOutput)
        pub fn build(self) -> crate::output::ListGatewaysOutput {
            crate::output::ListGatewaysOutput {
                gateways: self.gateways,
                marker: self.marker,
            }
        }
    }
}
impl ListGatewaysOutput {
    /// Creates a new builder-style object to manufacture [`ListGatewaysOutput`](crate::output::ListGatewaysOutput)
    pub fn builder() -> crate::output::list_gateways_output::Builder {
        crate::output::list_gateways_output::Builder::default()
    }
}

/// Output of [`ListLocalDisks`](crate::operation::ListLocalDisks)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListLocalDisksOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "Disks")]
    pub disks: Option<Vec<crate::model::Disk>>,
}
impl ListLocalDisksOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn disks(&self) -> Option<&[crate::model::Disk]> {
        self.disks.as_deref()
    }
}
/// See [`ListLocalDisksOutput`](crate::output::ListLocalDisksOutput)
pub mod list_local_disks_output {
    /// A builder for [`ListLocalDisksOutput`](crate::output::ListLocalDisksOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) disks: Option<Vec<crate::model::Disk>>,
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
        /// Appends an item to `disks`
        pub fn disks(mut self, input: impl Into<crate::model::Disk>) -> Self {
            let mut v = self.disks.unwrap_or_default();
            v.push(input.into());
            self.disks = Some(v);
            self
        }
        pub fn set_disks(mut self, input: Option<Vec<crate::model::Disk>>) -> Self {
            self.disks = input;
            self
        }
        /// Consumes the builder and constructs a [`ListLocalDisksOutput`](crate::output::ListLocalDisksOutput)
        pub fn build(self) -> crate::output::ListLocalDisksOutput {
            crate::output::ListLocalDisksOutput {
                gateway_arn: self.gateway_arn,
                disks: self.disks,
            }
        }
    }
}
impl ListLocalDisksOutput {
    /// Creates a new builder-style object to manufacture [`ListLocalDisksOutput`](crate::output::ListLocalDisksOutput)
    pub fn builder() -> crate::output::list_local_disks_output::Builder {
        crate::output::list_local_disks_output::Builder::default()
    }
}

/// Output of [`ListTagsForResource`](crate::operation::ListTagsForResource)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListTagsForResourceOutput {
    /// The Amazon Resource Name (ARN) of the resource.
    ///
    /// Length: 50 - 500
    #[serde(rename = "ResourceARN")]
    pub resource_arn: Option<String>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
    /// A list of up to 50 tags assigned to the resource. Each tag is a key-value pair.
    #[serde(rename = "Tags")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl ListTagsForResourceOutput {
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn tags(&self) -> Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
pub mod list_tags_for_resource_output {
    /// A builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: Option<String>,
        pub(crate) marker: Option<String>,
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
        pub fn marker(mut self, input: impl Into<String>) -> Self {
            self.marker = Some(input.into());
            self
        }
        pub fn set_marker(mut self, input: Option<String>) -> Self {
            self.marker = input;
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
        /// Consumes the builder and constructs a [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
        pub fn build(self) -> crate::output::ListTagsForResourceOutput {
            crate::output::ListTagsForResourceOutput {
                resource_arn: self.resource_arn,
                marker: self.marker,
                tags: self.tags,
            }
        }
    }
}
impl ListTagsForResourceOutput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    pub fn builder() -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder::default()
    }
}

/// Output of [`ListTapes`](crate::operation::ListTapes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListTapesOutput {
    #[serde(rename = "TapeInfos")]
    pub tape_infos: Option<Vec<crate::model::TapeInfo>>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
}
impl ListTapesOutput {
    pub fn tape_infos(&self) -> Option<&[crate::model::TapeInfo]> {
        self.tape_infos.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
}
/// See [`ListTapesOutput`](crate::output::ListTapesOutput)
pub mod list_tapes_output {
    /// A builder for [`ListTapesOutput`](crate::output::ListTapesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_infos: Option<Vec<crate::model::TapeInfo>>,
        pub(crate) marker: Option<String>,
    }
    impl Builder {
        /// Appends an item to `tape_infos`
        pub fn tape_infos(mut self, input: impl Into<crate::model::TapeInfo>) -> Self {
            let mut v = self.tape_infos.unwrap_or_default();
            v.push(input.into());
            self.tape_infos = Some(v);
            self
        }
        pub fn set_tape_infos(mut self, input: Option<Vec<crate::model::TapeInfo>>) -> Self {
            self.tape_infos = input;
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
        /// Consumes the builder and constructs a [`ListTapesOutput`](crate::output::ListTapesOutput)
        pub fn build(self) -> crate::output::ListTapesOutput {
            crate::output::ListTapesOutput {
                tape_infos: self.tape_infos,
                marker: self.marker,
            }
        }
    }
}
impl ListTapesOutput {
    /// Creates a new builder-style object to manufacture [`ListTapesOutput`](crate::output::ListTapesOutput)
    pub fn builder() -> crate::output::list_tapes_output::Builder {
        crate::output::list_tapes_output::Builder::default()
    }
}

/// Output of [`ListVolumeInitiators`](crate::operation::ListVolumeInitiators)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListVolumeInitiatorsOutput {
    #[serde(rename = "Initiators")]
    pub initiators: Option<Vec<String>>,
}
impl ListVolumeInitiatorsOutput {
    pub fn initiators(&self) -> Option<&[String]> {
        self.initiators.as_deref()
    }
}
/// See [`ListVolumeInitiatorsOutput`](crate::output::ListVolumeInitiatorsOutput)
pub mod list_volume_initiators_output {
    /// A builder for [`ListVolumeInitiatorsOutput`](crate::output::ListVolumeInitiatorsOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) initiators: Option<Vec<String>>,
    }
    impl Builder {
        /// Appends an item to `initiators`
        pub fn initiators(mut self, input: impl Into<String>) -> Self {
            let mut v = self.initiators.unwrap_or_default();
            v.push(input.into());
            self.initiators = Some(v);
            self
        }
        pub fn set_initiators(mut self, input: Option<Vec<String>>) -> Self {
            self.initiators = input;
            self
        }
        /// Consumes the builder and constructs a [`ListVolumeInitiatorsOutput`](crate::output::ListVolumeInitiatorsOutput)
        pub fn build(self) -> crate::output::ListVolumeInitiatorsOutput {
            crate::output::ListVolumeInitiatorsOutput {
                initiators: self.initiators,
            }
        }
    }
}
impl ListVolumeInitiatorsOutput {
    /// Creates a new builder-style object to manufacture [`ListVolumeInitiatorsOutput`](crate::output::ListVolumeInitiatorsOutput)
    pub fn builder() -> crate::output::list_volume_initiators_output::Builder {
        crate::output::list_volume_initiators_output::Builder::default()
    }
}

/// Output of [`ListVolumeRecoveryPoints`](crate::operation::ListVolumeRecoveryPoints)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListVolumeRecoveryPointsOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "VolumeRecoveryPointInfos")]
    pub volume_recovery_point_infos: Option<Vec<crate::model::VolumeRecoveryPointInfo>>,
}
impl ListVolumeRecoveryPointsOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn volume_recovery_point_infos(&self) -> Option<&[crate::model::VolumeRecoveryPointInfo]> {
        self.volume_recovery_point_infos.as_deref()
    }
}
/// See [`ListVolumeRecoveryPointsOutput`](crate::output::ListVolumeRecoveryPointsOutput)
pub mod list_volume_recovery_points_output {
    /// A builder for [`ListVolumeRecoveryPointsOutput`](crate::output::ListVolumeRecoveryPointsOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) volume_recovery_point_infos: Option<Vec<crate::model::VolumeRecoveryPointInfo>>,
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
        /// Appends an item to `volume_recovery_point_infos`
        pub fn volume_recovery_point_infos(
            mut self,
            input: impl Into<crate::model::VolumeRecoveryPointInfo>,
        ) -> Self {
            let mut v = self.volume_recovery_point_infos.unwrap_or_default();
            v.push(input.into());
            self.volume_recovery_point_infos = Some(v);
            self
        }
        pub fn set_volume_recovery_point_infos(
            mut self,
            input: Option<Vec<crate::model::VolumeRecoveryPointInfo>>,
        ) -> Self {
            self.volume_recovery_point_infos = input;
            self
        }
        /// Consumes the builder and constructs a [`ListVolumeRecoveryPointsOutput`](crate::output::ListVolumeRecoveryPointsOutput)
        pub fn build(self) -> crate::output::ListVolumeRecoveryPointsOutput {
            crate::output::ListVolumeRecoveryPointsOutput {
                gateway_arn: self.gateway_arn,
                volume_recovery_point_infos: self.volume_recovery_point_infos,
            }
        }
    }
}
impl ListVolumeRecoveryPointsOutput {
    /// Creates a new builder-style object to manufacture [`ListVolumeRecoveryPointsOutput`](crate::output::ListVolumeRecoveryPointsOutput)
    pub fn builder() -> crate::output::list_volume_recovery_points_output::Builder {
        crate::output::list_volume_recovery_points_output::Builder::default()
    }
}

/// Output of [`ListVolumes`](crate::operation::ListVolumes)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ListVolumesOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    /// An opaque string that indicates the position at which to begin the returned list. Responses carry the marker of the next page, absent after the last page.
    ///
    /// Length: 1 - 1000
    #[serde(rename = "Marker")]
    pub marker: Option<String>,
    #[serde(rename = "VolumeInfos")]
    pub volume_infos: Option<Vec<crate::model::VolumeInfo>>,
}
impl ListVolumesOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }
    pub fn volume_infos(&self) -> Option<&[crate::model::VolumeInfo]> {
        self.volume_infos.as_deref()
    }
}
/// See [`ListVolumesOutput`](crate::output::ListVolumesOutput)
pub mod list_volumes_output {
    /// A builder for [`ListVolumesOutput`](crate::output::ListVolumesOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) marker: Option<String>,
        pub(crate) volume_infos: Option<Vec<crate::model::VolumeInfo>>,
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
        /// Appends an item to `volume_infos`
        pub fn volume_infos(mut self, input: impl Into<crate::model::VolumeInfo>) -> Self {
            let mut v = self.volume_infos.unwrap_or_default();
            v.push(input.into());
            self.volume_infos = Some(v);
            self
        }
        pub fn set_volume_infos(mut self, input: Option<Vec<crate::model::VolumeInfo>>) -> Self {
            self.volume_infos = input;
            self
        }
        /// Consumes the builder and constructs a [`ListVolumesOutput`](crate::output::ListVolumesOutput)
        pub fn build(self) -> crate::output::ListVolumesOutput {
            crate::output::ListVolumesOutput {
                gateway_arn: self.gateway_arn,
                marker: self.marker,
                volume_infos: self.volume_infos,
            }
        }
    }
}
impl ListVolumesOutput {
    /// Creates a new builder-style object to manufacture [`ListVolumesOutput`](crate::output::ListVolumesOutput)
    pub fn builder() -> crate::output::list_volumes_output::Builder {
        crate::output::list_volumes_output::Builder::default()
    }
}

/// Output of [`NotifyWhenUploaded`](crate::operation::NotifyWhenUploaded)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct NotifyWhenUploadedOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN")]
    pub file_share_arn: Option<String>,
    #[serde(rename = "NotificationId")]
    pub notification_id: Option<String>,
}
impl NotifyWhenUploadedOutput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn notification_id(&self) -> Option<&str> {
        self.notification_id.as_deref()
    }
}
/// See [`NotifyWhenUploadedOutput`](crate::output::NotifyWhenUploadedOutput)
pub mod notify_when_uploaded_output {
    /// A builder for [`NotifyWhenUploadedOutput`](crate::output::NotifyWhenUploadedOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
        pub(crate) notification_id: Option<String>,
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
        pub fn notification_id(mut self, input: impl Into<String>) -> Self {
            self.notification_id = Some(input.into());
            self
        }
        pub fn set_notification_id(mut self, input: Option<String>) -> Self {
            self.notification_id = input;
            self
        }
        /// Consumes the builder and constructs a [`NotifyWhenUploadedOutput`](crate::output::NotifyWhenUploadedOutput)
        pub fn build(self) -> crate::output::NotifyWhenUploadedOutput {
            crate::output::NotifyWhenUploadedOutput {
                file_share_arn: self.file_share_arn,
                notification_id: self.notification_id,
            }
        }
    }
}
impl NotifyWhenUploadedOutput {
    /// Creates a new builder-style object to manufacture [`NotifyWhenUploadedOutput`](crate::output::NotifyWhenUploadedOutput)
    pub fn builder() -> crate::output::notify_when_uploaded_output::Builder {
        crate::output::notify_when_uploaded_output::Builder::default()
    }
}

/// Output of [`RefreshCache`](crate::operation::RefreshCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct RefreshCacheOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN")]
    pub file_share_arn: Option<String>,
    #[serde(rename = "NotificationId")]
    pub notification_id: Option<String>,
}
impl RefreshCacheOutput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn notification_id(&self) -> Option<&str> {
        self.notification_id.as_deref()
    }
}
/// See [`RefreshCacheOutput`](crate::output::RefreshCacheOutput)
pub mod refresh_cache_output {
    /// A builder for [`RefreshCacheOutput`](crate::output::RefreshCacheOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
        pub(crate) notification_id: Option<String>,
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
        pub fn notification_id(mut self, input: impl Into<String>) -> Self {
            self.notification_id = Some(input.into());
            self
        }
        pub fn set_notification_id(mut self, input: Option<String>) -> Self {
            self.notification_id = input;
            self
        }
        /// Consumes the builder and constructs a [`RefreshCacheOutput`](crate::output::RefreshCacheOutput)
        pub fn build(self) -> crate::output::RefreshCacheOutput {
            crate::output::RefreshCacheOutput {
                file_share_arn: self.file_share_arn,
                notification_id: self.notification_id,
            }
        }
    }
}
impl RefreshCacheOutput {
    /// Creates a new builder-style object to manufacture [`RefreshCacheOutput`](crate::output::RefreshCacheOutput)
    pub fn builder() -> crate::output::refresh_cache_output::Builder {
        crate::output::refresh_cache_output::Builder::default()
    }
}

/// Output of [`RemoveTagsFromResource`](crate::operation::RemoveTagsFromResource)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct RemoveTagsFromResourceOutput {
    /// The Amazon Resource Name (ARN) of the resource.
    ///
    /// Length: 50 - 500
    #[serde(rename = "ResourceARN")]
    pub resource_arn: Option<String>,
}
impl RemoveTagsFromResourceOutput {
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }
}
/// See [`RemoveTagsFromResourceOutput`](crate::output::RemoveTagsFromResourceOutput)
pub mod remove_tags_from_resource_output {
    /// A builder for [`RemoveTagsFromResourceOutput`](crate::output::RemoveTagsFromResourceOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) resource_arn: Option<String>,
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
        /// Consumes the builder and constructs a [`RemoveTagsFromResourceOutput`](crate::output::RemoveTagsFromResourceOutput)
        pub fn build(self) -> crate::output::RemoveTagsFromResourceOutput {
            crate::output::RemoveTagsFromResourceOutput {
                resource_arn: self.resource_arn,
            }
        }
    }
}
impl RemoveTagsFromResourceOutput {
    /// Creates a new builder-style object to manufacture [`RemoveTagsFromResourceOutput`](crate::output::RemoveTagsFromResourceOutput)
    pub fn builder() -> crate::output::remove_tags_from_resource_output::Builder {
        crate::output::remove_tags_from_resource_output::Builder::default()
    }
}

/// Output of [`ResetCache`](crate::operation::ResetCache)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ResetCacheOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl ResetCacheOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ResetCacheOutput`](crate::output::ResetCacheOutput)
pub mod reset_cache_output {
    /// A builder for [`ResetCacheOutput`](crate::output::ResetCacheOutput)
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
        /// Consumes the builder and constructs a [`ResetCacheOutput`](crate::output::ResetCacheOutput)
        pub fn build(self) -> crate::output::ResetCacheOutput {
            crate::output::ResetCacheOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl ResetCacheOutput {
    /// Creates a new builder-style object to manufacture [`ResetCacheOutput`](crate::output::ResetCacheOutput)
    pub fn builder() -> crate::output::reset_cache_output::Builder {
        crate::output::reset_cache_output::Builder::default()
    }
}

/// Output of [`RetrieveTapeArchive`](crate::operation::RetrieveTapeArchive)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct RetrieveTapeArchiveOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl RetrieveTapeArchiveOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`RetrieveTapeArchiveOutput`](crate::output::RetrieveTapeArchiveOutput)
pub mod retrieve_tape_archive_output {
    /// A builder for [`RetrieveTapeArchiveOutput`](crate::output::RetrieveTapeArchiveOutput)
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
        /// Consumes the builder and constructs a [`RetrieveTapeArchiveOutput`](crate::output::RetrieveTapeArchiveOutput)
        pub fn build(self) -> crate::output::RetrieveTapeArchiveOutput {
            crate::output::RetrieveTapeArchiveOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl RetrieveTapeArchiveOutput {
    /// Creates a new builder-style object to manufacture [`RetrieveTapeArchiveOutput`](crate::output::RetrieveTapeArchiveOutput)
    pub fn builder() -> crate::output::retrieve_tape_archive_output::Builder {
        crate::output::retrieve_tape_archive_output::Builder::default()
    }
}

/// Output of [`RetrieveTapeRecoveryPoint`](crate::operation::RetrieveTapeRecoveryPoint)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct RetrieveTapeRecoveryPointOutput {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
}
impl RetrieveTapeRecoveryPointOutput {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
}
/// See [`RetrieveTapeRecoveryPointOutput`](crate::output::RetrieveTapeRecoveryPointOutput)
pub mod retrieve_tape_recovery_point_output {
    /// A builder for [`RetrieveTapeRecoveryPointOutput`](crate::output::RetrieveTapeRecoveryPointOutput)
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
        /// Consumes the builder and constructs a [`RetrieveTapeRecoveryPointOutput`](crate::output::RetrieveTapeRecoveryPointOutput)
        pub fn build(self) -> crate::output::RetrieveTapeRecoveryPointOutput {
            crate::output::RetrieveTapeRecoveryPointOutput {
                tape_arn: self.tape_arn,
            }
        }
    }
}
impl RetrieveTapeRecoveryPointOutput {
    /// Creates a new builder-style object to manufacture [`RetrieveTapeRecoveryPointOutput`](crate::output::RetrieveTapeRecoveryPointOutput)
    pub fn builder() -> crate::output::retrieve_tape_recovery_point_output::Builder {
        crate::output::retrieve_tape_recovery_point_output::Builder::default()
    }
}

/// Output of [`SetLocalConsolePassword`](crate::operation::SetLocalConsolePassword)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SetLocalConsolePasswordOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl SetLocalConsolePasswordOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`SetLocalConsolePasswordOutput`](crate::output::SetLocalConsolePasswordOutput)
pub mod set_local_console_password_output {
    /// A builder for [`SetLocalConsolePasswordOutput`](crate::output::SetLocalConsolePasswordOutput)
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
        /// Consumes the builder and constructs a [`SetLocalConsolePasswordOutput`](crate::output::SetLocalConsolePasswordOutput)
        pub fn build(self) -> crate::output::SetLocalConsolePasswordOutput {
            crate::output::SetLocalConsolePasswordOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl SetLocalConsolePasswordOutput {
    /// Creates a new builder-style object to manufacture [`SetLocalConsolePasswordOutput`](crate::output::SetLocalConsolePasswordOutput)
    pub fn builder() -> crate::output::set_local_console_password_output::Builder {
        crate::output::set_local_console_password_output::Builder::default()
    }
}

/// Output of [`SetSmbGuestPassword`](crate::operation::SetSmbGuestPassword)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SetSmbGuestPasswordOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl SetSmbGuestPasswordOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`SetSmbGuestPasswordOutput`](crate::output::SetSmbGuestPasswordOutput)
pub mod set_smb_guest_password_output {
    /// A builder for [`SetSmbGuestPasswordOutput`](crate::output::SetSmbGuestPasswordOutput)
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
        /// Consumes the builder and constructs a [`SetSmbGuestPasswordOutput`](crate::output::SetSmbGuestPasswordOutput)
        pub fn build(self) -> crate::output::SetSmbGuestPasswordOutput {
            crate::output::SetSmbGuestPasswordOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl SetSmbGuestPasswordOutput {
    /// Creates a new builder-style object to manufacture [`SetSmbGuestPasswordOutput`](crate::output::SetSmbGuestPasswordOutput)
    pub fn builder() -> crate::output::set_smb_guest_password_output::Builder {
        crate::output::set_smb_guest_password_output::Builder::default()
    }
}

/// Output of [`ShutdownGateway`](crate::operation::ShutdownGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ShutdownGatewayOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl ShutdownGatewayOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`ShutdownGatewayOutput`](crate::output::ShutdownGatewayOutput)
pub mod shutdown_gateway_output {
    /// A builder for [`ShutdownGatewayOutput`](crate::output::ShutdownGatewayOutput)
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
        /// Consumes the builder and constructs a [`ShutdownGatewayOutput`](crate::output::ShutdownGatewayOutput)
        pub fn build(self) -> crate::output::ShutdownGatewayOutput {
            crate::output::ShutdownGatewayOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl ShutdownGatewayOutput {
    /// Creates a new builder-style object to manufacture [`ShutdownGatewayOutput`](crate::output::ShutdownGatewayOutput)
    pub fn builder() -> crate::output::shutdown_gateway_output::Builder {
        crate::output::shutdown_gateway_output::Builder::default()
    }
}

/// Output of [`StartAvailabilityMonitorTest`](crate::operation::StartAvailabilityMonitorTest)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct StartAvailabilityMonitorTestOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl StartAvailabilityMonitorTestOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`StartAvailabilityMonitorTestOutput`](crate::output::StartAvailabilityMonitorTestOutput)
pub mod start_availability_monitor_test_output {
    /// A builder for [`StartAvailabilityMonitorTestOutput`](crate::output::StartAvailabilityMonitorTestOutput)
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
        /// Consumes the builder and constructs a [`StartAvailabilityMonitorTestOutput`](crate::output::StartAvailabilityMonitorTestOutput)
        pub fn build(self) -> crate::output::StartAvailabilityMonitorTestOutput {
            crate::output::StartAvailabilityMonitorTestOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl StartAvailabilityMonitorTestOutput {
    /// Creates a new builder-style object to manufacture [`StartAvailabilityMonitorTestOutput`](crate::output::StartAvailabilityMonitorTestOutput)
    pub fn builder() -> crate::output::start_availability_monitor_test_output::Builder {
        crate::output::start_availability_monitor_test_output::Builder::default()
    }
}

/// Output of [`StartGateway`](crate::operation::StartGateway)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct StartGatewayOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl StartGatewayOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`StartGatewayOutput`](crate::output::StartGatewayOutput)
pub mod start_gateway_output {
    /// A builder for [`StartGatewayOutput`](crate::output::StartGatewayOutput)
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
        /// Consumes the builder and constructs a [`StartGatewayOutput`](crate::output::StartGatewayOutput)
        pub fn build(self) -> crate::output::StartGatewayOutput {
            crate::output::StartGatewayOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl StartGatewayOutput {
    /// Creates a new builder-style object to manufacture [`StartGatewayOutput`](crate::output::StartGatewayOutput)
    pub fn builder() -> crate::output::start_gateway_output::Builder {
        crate::output::start_gateway_output::Builder::default()
    }
}

/// Output of [`UpdateAutomaticTapeCreationPolicy`](crate::operation::UpdateAutomaticTapeCreationPolicy)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateAutomaticTapeCreationPolicyOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl UpdateAutomaticTapeCreationPolicyOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`UpdateAutomaticTapeCreationPolicyOutput`](crate::output::UpdateAutomaticTapeCreationPolicyOutput)
pub mod update_automatic_tape_creation_policy_output {
    /// A builder for [`UpdateAutomaticTapeCreationPolicyOutput`](crate::output::UpdateAutomaticTapeCreationPolicyOutput)
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
        /// Consumes the builder and constructs a [`UpdateAutomaticTapeCreationPolicyOutput`](crate::output::UpdateAutomaticTapeCreationPolicyOutput)
        pub fn build(self) -> crate::output::UpdateAutomaticTapeCreationPolicyOutput {
            crate::output::UpdateAutomaticTapeCreationPolicyOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl UpdateAutomaticTapeCreationPolicyOutput {
    /// Creates a new builder-style object to manufacture [`UpdateAutomaticTapeCreationPolicyOutput`](crate::output::UpdateAutomaticTapeCreationPolicyOutput)
    pub fn builder() -> crate::output::update_automatic_tape_creation_policy_output::Builder {
        crate::output::update_automatic_tape_creation_policy_output::Builder::default()
    }
}

/// Output of [`UpdateBandwidthRateLimit`](crate::operation::UpdateBandwidthRateLimit)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateBandwidthRateLimitOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl UpdateBandwidthRateLimitOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`UpdateBandwidthRateLimitOutput`](crate::output::UpdateBandwidthRateLimitOutput)
pub mod update_bandwidth_rate_limit_output {
    /// A builder for [`UpdateBandwidthRateLimitOutput`](crate::output::UpdateBandwidthRateLimitOutput)
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
        /// Consumes the builder and constructs a [`UpdateBandwidthRateLimitOutput`](crate::output::UpdateBandwidthRateLimitOutput)
        pub fn build(self) -> crate::output::UpdateBandwidthRateLimitOutput {
            crate::output::UpdateBandwidthRateLimitOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl UpdateBandwidthRateLimitOutput {
    /// Creates a new builder-style object to manufacture [`UpdateBandwidthRateLimitOutput`](crate::output::UpdateBandwidthRateLimitOutput)
    pub fn builder() -> crate::output::update_bandwidth_rate_limit_output::Builder {
        crate::output::update_bandwidth_rate_limit_output::Builder::default()
    }
}

/// Output of [`UpdateChapCredentials`](crate::operation::UpdateChapCredentials)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateChapCredentialsOutput {
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN")]
    pub target_arn: Option<String>,
    /// The iSCSI initiator that connects to the target.
    ///
    /// Length: 1 - 255
    #[serde(rename = "InitiatorName")]
    pub initiator_name: Option<String>,
}
impl UpdateChapCredentialsOutput {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
    pub fn initiator_name(&self) -> Option<&str> {
        self.initiator_name.as_deref()
    }
}
/// See [`UpdateChapCredentialsOutput`](crate::output::UpdateChapCredentialsOutput)
pub mod update_chap_credentials_output {
    /// A builder for [`UpdateChapCredentialsOutput`](crate::output::UpdateChapCredentialsOutput)
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
        /// Consumes the builder and constructs a [`UpdateChapCredentialsOutput`](crate::output::UpdateChapCredentialsOutput)
        pub fn build(self) -> crate::output::UpdateChapCredentialsOutput {
            crate::output::UpdateChapCredentialsOutput {
                target_arn: self.target_arn,
                initiator_name: self.initiator_name,
            }
        }
    }
}
impl UpdateChapCredentialsOutput {
    /// Creates a new builder-style object to manufacture [`UpdateChapCredentialsOutput`](crate::output::UpdateChapCredentialsOutput)
    pub fn builder() -> crate::output::update_chap_credentials_output::Builder {
        crate::output::update_chap_credentials_output::Builder::default()
    }
}

/// Output of [`UpdateGatewayInformation`](crate::operation::UpdateGatewayInformation)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateGatewayInformationOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "GatewayName")]
    pub gateway_name: Option<String>,
}
impl UpdateGatewayInformationOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn gateway_name(&self) -> Option<&str> {
        self.gateway_name.as_deref()
    }
}
/// See [`UpdateGatewayInformationOutput`](crate::output::UpdateGatewayInformationOutput)
pub mod update_gateway_information_output {
    /// A builder for [`UpdateGatewayInformationOutput`](crate::output::UpdateGatewayInformationOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_arn: Option<String>,
        pub(crate) gateway_name: Option<String>,
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
        /// Consumes the builder and constructs a [`UpdateGatewayInformationOutput`](crate::output::UpdateGatewayInformationOutput)
        pub fn build(self) -> crate::output::UpdateGatewayInformationOutput {
            crate::output::UpdateGatewayInformationOutput {
                gateway_arn: self.gateway_arn,
                gateway_name: self.gateway_name,
            }
        }
    }
}
impl UpdateGatewayInformationOutput {
    /// Creates a new builder-style object to manufacture [`UpdateGatewayInformationOutput`](crate::output::UpdateGatewayInformationOutput)
    pub fn builder() -> crate::output::update_gateway_information_output::Builder {
        crate::output::update_gateway_information_output::Builder::default()
    }
}

/// Output of [`UpdateGatewaySoftwareNow`](crate::operation::UpdateGatewaySoftwareNow)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateGatewaySoftwareNowOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl UpdateGatewaySoftwareNowOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`UpdateGatewaySoftwareNowOutput`](crate::output::UpdateGatewaySoftwareNowOutput)
pub mod update_gateway_software_now_output {
    /// A builder for [`UpdateGatewaySoftwareNowOutput`](crate::output::UpdateGatewaySoftwareNowOutput)
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
        /// Consumes the builder and constructs a [`UpdateGatewaySoftwareNowOutput`](crate::output::UpdateGatewaySoftwareNowOutput)
        pub fn build(self) -> crate::output::UpdateGatewaySoftwareNowOutput {
            crate::output::UpdateGatewaySoftwareNowOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl UpdateGatewaySoftwareNowOutput {
    /// Creates a new builder-style object to manufacture [`UpdateGatewaySoftwareNowOutput`](crate::output::UpdateGatewaySoftwareNowOutput)
    pub fn builder() -> crate::output::update_gateway_software_now_output::Builder {
        crate::output::update_gateway_software_now_output::Builder::default()
    }
}

/// Output of [`UpdateMaintenanceStartTime`](crate::operation::UpdateMaintenanceStartTime)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateMaintenanceStartTimeOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl UpdateMaintenanceStartTimeOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`UpdateMaintenanceStartTimeOutput`](crate::output::UpdateMaintenanceStartTimeOutput)
pub mod update_maintenance_start_time_output {
    /// A builder for [`UpdateMaintenanceStartTimeOutput`](crate::output::UpdateMaintenanceStartTimeOutput)
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
        /// Consumes the builder and constructs a [`UpdateMaintenanceStartTimeOutput`](crate::output::UpdateMaintenanceStartTimeOutput)
        pub fn build(self) -> crate::output::UpdateMaintenanceStartTimeOutput {
            crate::output::UpdateMaintenanceStartTimeOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl UpdateMaintenanceStartTimeOutput {
    /// Creates a new builder-style object to manufacture [`UpdateMaintenanceStartTimeOutput`](crate::output::UpdateMaintenanceStartTimeOutput)
    pub fn builder() -> crate::output::update_maintenance_start_time_output::Builder {
        crate::output::update_maintenance_start_time_output::Builder::default()
    }
}

/// Output of [`UpdateNfsFileShare`](crate::operation::UpdateNfsFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateNfsFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN")]
    pub file_share_arn: Option<String>,
}
impl UpdateNfsFileShareOutput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
}
/// See [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput)
pub mod update_nfs_file_share_output {
    /// A builder for [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput)
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
        /// Consumes the builder and constructs a [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput)
        pub fn build(self) -> crate::output::UpdateNfsFileShareOutput {
            crate::output::UpdateNfsFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl UpdateNfsFileShareOutput {
    /// Creates a new builder-style object to manufacture [`UpdateNfsFileShareOutput`](crate::output::UpdateNfsFileShareOutput)
    pub fn builder() -> crate::output::update_nfs_file_share_output::Builder {
        crate::output::update_nfs_file_share_output::Builder::default()
    }
}

/// Output of [`UpdateSmbFileShare`](crate::operation::UpdateSmbFileShare)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateSmbFileShareOutput {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN")]
    pub file_share_arn: Option<String>,
}
impl UpdateSmbFileShareOutput {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
}
/// See [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput)
pub mod update_smb_file_share_output {
    /// A builder for [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput)
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
        /// Consumes the builder and constructs a [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput)
        pub fn build(self) -> crate::output::UpdateSmbFileShareOutput {
            crate::output::UpdateSmbFileShareOutput {
                file_share_arn: self.file_share_arn,
            }
        }
    }
}
impl UpdateSmbFileShareOutput {
    /// Creates a new builder-style object to manufacture [`UpdateSmbFileShareOutput`](crate::output::UpdateSmbFileShareOutput)
    pub fn builder() -> crate::output::update_smb_file_share_output::Builder {
        crate::output::update_smb_file_share_output::Builder::default()
    }
}

/// Output of [`UpdateSmbSecurityStrategy`](crate::operation::UpdateSmbSecurityStrategy)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateSmbSecurityStrategyOutput {
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN")]
    pub gateway_arn: Option<String>,
}
impl UpdateSmbSecurityStrategyOutput {
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`UpdateSmbSecurityStrategyOutput`](crate::output::UpdateSmbSecurityStrategyOutput)
pub mod update_smb_security_strategy_output {
    /// A builder for [`UpdateSmbSecurityStrategyOutput`](crate::output::UpdateSmbSecurityStrategyOutput)
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
        /// Consumes the builder and constructs a [`UpdateSmbSecurityStrategyOutput`](crate::output::UpdateSmbSecurityStrategyOutput)
        pub fn build(self) -> crate::output::UpdateSmbSecurityStrategyOutput {
            crate::output::UpdateSmbSecurityStrategyOutput {
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl UpdateSmbSecurityStrategyOutput {
    /// Creates a new builder-style object to manufacture [`UpdateSmbSecurityStrategyOutput`](crate::output::UpdateSmbSecurityStrategyOutput)
    pub fn builder() -> crate::output::update_smb_security_strategy_output::Builder {
        crate::output::update_smb_security_strategy_output::Builder::default()
    }
}

/// Output of [`UpdateSnapshotSchedule`](crate::operation::UpdateSnapshotSchedule)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateSnapshotScheduleOutput {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN")]
    pub volume_arn: Option<String>,
}
impl UpdateSnapshotScheduleOutput {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
}
/// See [`UpdateSnapshotScheduleOutput`](crate::output::UpdateSnapshotScheduleOutput)
pub mod update_snapshot_schedule_output {
    /// A builder for [`UpdateSnapshotScheduleOutput`](crate::output::UpdateSnapshotScheduleOutput)
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
        /// Consumes the builder and constructs a [`UpdateSnapshotScheduleOutput`](crate::output::UpdateSnapshotScheduleOutput)
        pub fn build(self) -> crate::output::UpdateSnapshotScheduleOutput {
            crate::output::UpdateSnapshotScheduleOutput {
                volume_arn: self.volume_arn,
            }
        }
    }
}
impl UpdateSnapshotScheduleOutput {
    /// Creates a new builder-style object to manufacture [`UpdateSnapshotScheduleOutput`](crate::output::UpdateSnapshotScheduleOutput)
    pub fn builder() -> crate::output::update_snapshot_schedule_output::Builder {
        crate::output::update_snapshot_schedule_output::Builder::default()
    }
}

/// Output of [`UpdateVtlDeviceType`](crate::operation::UpdateVtlDeviceType)
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct UpdateVtlDeviceTypeOutput {
    #[serde(rename = "VTLDeviceARN")]
    pub vtl_device_arn: Option<String>,
}
impl UpdateVtlDeviceTypeOutput {
    pub fn vtl_device_arn(&self) -> Option<&str> {
        self.vtl_device_arn.as_deref()
    }
}
/// See [`UpdateVtlDeviceTypeOutput`](crate::output::UpdateVtlDeviceTypeOutput)
pub mod update_vtl_device_type_output {
    /// A builder for [`UpdateVtlDeviceTypeOutput`](crate::output::UpdateVtlDeviceTypeOutput)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) vtl_device_arn: Option<String>,
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
        /// Consumes the builder and constructs a [`UpdateVtlDeviceTypeOutput`](crate::output::UpdateVtlDeviceTypeOutput)
        pub fn build(self) -> crate::output::UpdateVtlDeviceTypeOutput {
            crate::output::UpdateVtlDeviceTypeOutput {
                vtl_device_arn: self.vtl_device_arn,
            }
        }
    }
}
impl UpdateVtlDeviceTypeOutput {
    /// Creates a new builder-style object to manufacture [`UpdateVtlDeviceTypeOutput`](crate::output::UpdateVtlDeviceTypeOutput)
    pub fn builder() -> crate::output::update_vtl_device_type_output::Builder {
        crate::output::update_vtl_device_type_output::Builder::default()
    }
}
