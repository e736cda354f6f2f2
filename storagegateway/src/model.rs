/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Structures and enumerations shared by Storage Gateway operations

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ActiveDirectoryStatus {
    AccessDenied,
    Detached,
    Joined,
    Joining,
    NetworkError,
    Timeout,
    UnknownError,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for ActiveDirectoryStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "ACCESS_DENIED" => ActiveDirectoryStatus::AccessDenied,
            "DETACHED" => ActiveDirectoryStatus::Detached,
            "JOINED" => ActiveDirectoryStatus::Joined,
            "JOINING" => ActiveDirectoryStatus::Joining,
            "NETWORK_ERROR" => ActiveDirectoryStatus::NetworkError,
            "TIMEOUT" => ActiveDirectoryStatus::Timeout,
            "UNKNOWN_ERROR" => ActiveDirectoryStatus::UnknownError,
            other => ActiveDirectoryStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ActiveDirectoryStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActiveDirectoryStatus::from(s))
    }
}
impl ActiveDirectoryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ActiveDirectoryStatus::AccessDenied => "ACCESS_DENIED",
            ActiveDirectoryStatus::Detached => "DETACHED",
            ActiveDirectoryStatus::Joined => "JOINED",
            ActiveDirectoryStatus::Joining => "JOINING",
            ActiveDirectoryStatus::NetworkError => "NETWORK_ERROR",
            ActiveDirectoryStatus::Timeout => "TIMEOUT",
            ActiveDirectoryStatus::UnknownError => "UNKNOWN_ERROR",
            ActiveDirectoryStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "ACCESS_DENIED",
            "DETACHED",
            "JOINED",
            "JOINING",
            "NETWORK_ERROR",
            "TIMEOUT",
            "UNKNOWN_ERROR",
        ]
    }
}
impl AsRef<str> for ActiveDirectoryStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for ActiveDirectoryStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ActiveDirectoryStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(ActiveDirectoryStatus::from(data.as_str()))
    }
}

/// Information about the gateway's automatic tape creation policies.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AutomaticTapeCreationPolicyInfo {
    #[serde(rename = "AutomaticTapeCreationRules", skip_serializing_if = "Option::is_none")]
    pub automatic_tape_creation_rules: Option<Vec<crate::model::AutomaticTapeCreationRule>>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl AutomaticTapeCreationPolicyInfo {
    pub fn automatic_tape_creation_rules(
        &self,
    ) -> Option<&[crate::model::AutomaticTapeCreationRule]> {
        self.automatic_tape_creation_rules.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`AutomaticTapeCreationPolicyInfo`](crate::model::AutomaticTapeCreationPolicyInfo)
pub mod automatic_tape_creation_policy_info {
    /// A builder for [`AutomaticTapeCreationPolicyInfo`](crate::model::AutomaticTapeCreationPolicyInfo)
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
        /// Consumes the builder and constructs a [`AutomaticTapeCreationPolicyInfo`](crate::model::AutomaticTapeCreationPolicyInfo)
        pub fn build(self) -> crate::model::AutomaticTapeCreationPolicyInfo {
            crate::model::AutomaticTapeCreationPolicyInfo {
                automatic_tape_creation_rules: self.automatic_tape_creation_rules,
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl AutomaticTapeCreationPolicyInfo {
    /// Creates a new builder-style object to manufacture [`AutomaticTapeCreationPolicyInfo`](crate::model::AutomaticTapeCreationPolicyInfo)
    pub fn builder() -> crate::model::automatic_tape_creation_policy_info::Builder {
        crate::model::automatic_tape_creation_policy_info::Builder::default()
    }
}

/// A rule that keeps a minimum number of available virtual tapes on the gateway.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AutomaticTapeCreationRule {
    #[serde(rename = "TapeBarcodePrefix", skip_serializing_if = "Option::is_none")]
    pub tape_barcode_prefix: Option<String>,
    /// The ID of the pool that contains the tape: `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 - 100
    #[serde(rename = "PoolId", skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    /// The size, in bytes, of the virtual tape.
    #[serde(rename = "TapeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_size_in_bytes: Option<i64>,
    #[serde(rename = "MinimumNumTapes", skip_serializing_if = "Option::is_none")]
    pub minimum_num_tapes: Option<i32>,
}
impl AutomaticTapeCreationRule {
    pub fn tape_barcode_prefix(&self) -> Option<&str> {
        self.tape_barcode_prefix.as_deref()
    }
    pub fn pool_id(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }
    pub fn tape_size_in_bytes(&self) -> Option<i64> {
        self.tape_size_in_bytes
    }
    pub fn minimum_num_tapes(&self) -> Option<i32> {
        self.minimum_num_tapes
    }
}
/// See [`AutomaticTapeCreationRule`](crate::model::AutomaticTapeCreationRule)
pub mod automatic_tape_creation_rule {
    /// A builder for [`AutomaticTapeCreationRule`](crate::model::AutomaticTapeCreationRule)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_barcode_prefix: Option<String>,
        pub(crate) pool_id: Option<String>,
        pub(crate) tape_size_in_bytes: Option<i64>,
        pub(crate) minimum_num_tapes: Option<i32>,
    }
    impl Builder {
        pub fn tape_barcode_prefix(mut self, input: impl Into<String>) -> Self {
            self.tape_barcode_prefix = Some(input.into());
            self
        }
        pub fn set_tape_barcode_prefix(mut self, input: Option<String>) -> Self {
            self.tape_barcode_prefix = input;
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
        pub fn tape_size_in_bytes(mut self, input: i64) -> Self {
            self.tape_size_in_bytes = Some(input);
            self
        }
        pub fn set_tape_size_in_bytes(mut self, input: Option<i64>) -> Self {
            self.tape_size_in_bytes = input;
            self
        }
        pub fn minimum_num_tapes(mut self, input: i32) -> Self {
            self.minimum_num_tapes = Some(input);
            self
        }
        pub fn set_minimum_num_tapes(mut self, input: Option<i32>) -> Self {
            self.minimum_num_tapes = input;
            self
        }
        /// Consumes the builder and constructs a [`AutomaticTapeCreationRule`](crate::model::AutomaticTapeCreationRule)
        pub fn build(self) -> crate::model::AutomaticTapeCreationRule {
            crate::model::AutomaticTapeCreationRule {
                tape_barcode_prefix: self.tape_barcode_prefix,
                pool_id: self.pool_id,
                tape_size_in_bytes: self.tape_size_in_bytes,
                minimum_num_tapes: self.minimum_num_tapes,
            }
        }
    }
}
impl AutomaticTapeCreationRule {
    /// Creates a new builder-style object to manufacture [`AutomaticTapeCreationRule`](crate::model::AutomaticTapeCreationRule)
    pub fn builder() -> crate::model::automatic_tape_creation_rule::Builder {
        crate::model::automatic_tape_creation_rule::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AvailabilityMonitorTestStatus {
    Complete,
    Failed,
    Pending,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for AvailabilityMonitorTestStatus {
    fn from(s: &'a str) -> Self {
        match s {
            "COMPLETE" => AvailabilityMonitorTestStatus::Complete,
            "FAILED" => AvailabilityMonitorTestStatus::Failed,
            "PENDING" => AvailabilityMonitorTestStatus::Pending,
            other => AvailabilityMonitorTestStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AvailabilityMonitorTestStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AvailabilityMonitorTestStatus::from(s))
    }
}
impl AvailabilityMonitorTestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AvailabilityMonitorTestStatus::Complete => "COMPLETE",
            AvailabilityMonitorTestStatus::Failed => "FAILED",
            AvailabilityMonitorTestStatus::Pending => "PENDING",
            AvailabilityMonitorTestStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "COMPLETE",
            "FAILED",
            "PENDING",
        ]
    }
}
impl AsRef<str> for AvailabilityMonitorTestStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for AvailabilityMonitorTestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for AvailabilityMonitorTestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(AvailabilityMonitorTestStatus::from(data.as_str()))
    }
}

/// Describes an iSCSI cached volume.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CachediScsiVolume {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    #[serde(rename = "VolumeStatus", skip_serializing_if = "Option::is_none")]
    pub volume_status: Option<String>,
    #[serde(rename = "VolumeAttachmentStatus", skip_serializing_if = "Option::is_none")]
    pub volume_attachment_status: Option<String>,
    #[serde(rename = "VolumeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_bytes: Option<i64>,
    #[serde(rename = "VolumeProgress", skip_serializing_if = "Option::is_none")]
    pub volume_progress: Option<f64>,
    #[serde(rename = "SourceSnapshotId", skip_serializing_if = "Option::is_none")]
    pub source_snapshot_id: Option<String>,
    #[serde(rename = "VolumeiSCSIAttributes", skip_serializing_if = "Option::is_none")]
    pub volumei_scsi_attributes: Option<crate::model::VolumeiScsiAttributes>,
    #[serde(
        rename = "CreatedDate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "smithy_types::instant::epoch_seconds",
    )]
    pub created_date: Option<smithy_types::Instant>,
    #[serde(rename = "VolumeUsedInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_used_in_bytes: Option<i64>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 - 200
    #[serde(rename = "TargetName", skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}
impl CachediScsiVolume {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }
    pub fn volume_type(&self) -> Option<&str> {
        self.volume_type.as_deref()
    }
    pub fn volume_status(&self) -> Option<&str> {
        self.volume_status.as_deref()
    }
    pub fn volume_attachment_status(&self) -> Option<&str> {
        self.volume_attachment_status.as_deref()
    }
    pub fn volume_size_in_bytes(&self) -> Option<i64> {
        self.volume_size_in_bytes
    }
    pub fn volume_progress(&self) -> Option<f64> {
        self.volume_progress
    }
    pub fn source_snapshot_id(&self) -> Option<&str> {
        self.source_snapshot_id.as_deref()
    }
    pub fn volumei_scsi_attributes(&self) -> Option<&crate::model::VolumeiScsiAttributes> {
        self.volumei_scsi_attributes.as_ref()
    }
    pub fn created_date(&self) -> Option<smithy_types::Instant> {
        self.created_date
    }
    pub fn volume_used_in_bytes(&self) -> Option<i64> {
        self.volume_used_in_bytes
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }
}
/// See [`CachediScsiVolume`](crate::model::CachediScsiVolume)
pub mod cachedi_scsi_volume {
    /// A builder for [`CachediScsiVolume`](crate::model::CachediScsiVolume)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) volume_id: Option<String>,
        pub(crate) volume_type: Option<String>,
        pub(crate) volume_status: Option<String>,
        pub(crate) volume_attachment_status: Option<String>,
        pub(crate) volume_size_in_bytes: Option<i64>,
        pub(crate) volume_progress: Option<f64>,
        pub(crate) source_snapshot_id: Option<String>,
        pub(crate) volumei_scsi_attributes: Option<crate::model::VolumeiScsiAttributes>,
        pub(crate) created_date: Option<smithy_types::Instant>,
        pub(crate) volume_used_in_bytes: Option<i64>,
        pub(crate) kms_key: Option<String>,
        pub(crate) target_name: Option<String>,
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
        pub fn volume_id(mut self, input: impl Into<String>) -> Self {
            self.volume_id = Some(input.into());
            self
        }
        pub fn set_volume_id(mut self, input: Option<String>) -> Self {
            self.volume_id = input;
            self
        }
        pub fn volume_type(mut self, input: impl Into<String>) -> Self {
            self.volume_type = Some(input.into());
            self
        }
        pub fn set_volume_type(mut self, input: Option<String>) -> Self {
            self.volume_type = input;
            self
        }
        pub fn volume_status(mut self, input: impl Into<String>) -> Self {
            self.volume_status = Some(input.into());
            self
        }
        pub fn set_volume_status(mut self, input: Option<String>) -> Self {
            self.volume_status = input;
            self
        }
        pub fn volume_attachment_status(mut self, input: impl Into<String>) -> Self {
            self.volume_attachment_status = Some(input.into());
            self
        }
        pub fn set_volume_attachment_status(mut self, input: Option<String>) -> Self {
            self.volume_attachment_status = input;
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
        pub fn volume_progress(mut self, input: f64) -> Self {
            self.volume_progress = Some(input);
            self
        }
        pub fn set_volume_progress(mut self, input: Option<f64>) -> Self {
            self.volume_progress = input;
            self
        }
        pub fn source_snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.source_snapshot_id = Some(input.into());
            self
        }
        pub fn set_source_snapshot_id(mut self, input: Option<String>) -> Self {
            self.source_snapshot_id = input;
            self
        }
        pub fn volumei_scsi_attributes(
            mut self,
            input: crate::model::VolumeiScsiAttributes,
        ) -> Self {
            self.volumei_scsi_attributes = Some(input);
            self
        }
        pub fn set_volumei_scsi_attributes(
            mut self,
            input: Option<crate::model::VolumeiScsiAttributes>,
        ) -> Self {
            self.volumei_scsi_attributes = input;
            self
        }
        pub fn created_date(mut self, input: smithy_types::Instant) -> Self {
            self.created_date = Some(input);
            self
        }
        pub fn set_created_date(mut self, input: Option<smithy_types::Instant>) -> Self {
            self.created_date = input;
            self
        }
        pub fn volume_used_in_bytes(mut self, input: i64) -> Self {
            self.volume_used_in_bytes = Some(input);
            self
        }
        pub fn set_volume_used_in_bytes(mut self, input: Option<i64>) -> Self {
            self.volume_used_in_bytes = input;
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
        pub fn target_name(mut self, input: impl Into<String>) -> Self {
            self.target_name = Some(input.into());
            self
        }
        pub fn set_target_name(mut self, input: Option<String>) -> Self {
            self.target_name = input;
            self
        }
        /// Consumes the builder and constructs a [`CachediScsiVolume`](crate::model::CachediScsiVolume)
        pub fn build(self) -> crate::model::CachediScsiVolume {
            crate::model::CachediScsiVolume {
                volume_arn: self.volume_arn,
                volume_id: self.volume_id,
                volume_type: self.volume_type,
                volume_status: self.volume_status,
                volume_attachment_status: self.volume_attachment_status,
                volume_size_in_bytes: self.volume_size_in_bytes,
                volume_progress: self.volume_progress,
                source_snapshot_id: self.source_snapshot_id,
                volumei_scsi_attributes: self.volumei_scsi_attributes,
                created_date: self.created_date,
                volume_used_in_bytes: self.volume_used_in_bytes,
                kms_key: self.kms_key,
                target_name: self.target_name,
            }
        }
    }
}
impl CachediScsiVolume {
    /// Creates a new builder-style object to manufacture [`CachediScsiVolume`](crate::model::CachediScsiVolume)
    pub fn builder() -> crate::model::cachedi_scsi_volume::Builder {
        crate::model::cachedi_scsi_volume::Builder::default()
    }
}

/// Describes Challenge-Handshake Authentication Protocol (CHAP) information that supports authentication between your gateway and iSCSI initiators.
#[non_exhaustive]
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapInfo {
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
impl ChapInfo {
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
impl std::fmt::Debug for ChapInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ChapInfo");
        formatter.field("target_arn", &self.target_arn);
        formatter.field("secret_to_authenticate_initiator", &"*** Sensitive Data Redacted ***");
        formatter.field("initiator_name", &self.initiator_name);
        formatter.field("secret_to_authenticate_target", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}
/// See [`ChapInfo`](crate::model::ChapInfo)
pub mod chap_info {
    /// A builder for [`ChapInfo`](crate::model::ChapInfo)
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
        /// Consumes the builder and constructs a [`ChapInfo`](crate::model::ChapInfo)
        pub fn build(self) -> crate::model::ChapInfo {
            crate::model::ChapInfo {
                target_arn: self.target_arn,
                secret_to_authenticate_initiator: self.secret_to_authenticate_initiator,
                initiator_name: self.initiator_name,
                secret_to_authenticate_target: self.secret_to_authenticate_target,
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
impl ChapInfo {
    /// Creates a new builder-style object to manufacture [`ChapInfo`](crate::model::ChapInfo)
    pub fn builder() -> crate::model::chap_info::Builder {
        crate::model::chap_info::Builder::default()
    }
}

/// Lists iSCSI information about a VTL device.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DeviceiScsiAttributes {
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN", skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
    /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "NetworkInterfacePort", skip_serializing_if = "Option::is_none")]
    pub network_interface_port: Option<i32>,
    #[serde(rename = "ChapEnabled", skip_serializing_if = "Option::is_none")]
    pub chap_enabled: Option<bool>,
}
impl DeviceiScsiAttributes {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }
    pub fn network_interface_port(&self) -> Option<i32> {
        self.network_interface_port
    }
    pub fn chap_enabled(&self) -> Option<bool> {
        self.chap_enabled
    }
}
/// See [`DeviceiScsiAttributes`](crate::model::DeviceiScsiAttributes)
pub mod devicei_scsi_attributes {
    /// A builder for [`DeviceiScsiAttributes`](crate::model::DeviceiScsiAttributes)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) target_arn: Option<String>,
        pub(crate) network_interface_id: Option<String>,
        pub(crate) network_interface_port: Option<i32>,
        pub(crate) chap_enabled: Option<bool>,
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
        pub fn network_interface_id(mut self, input: impl Into<String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        pub fn set_network_interface_id(mut self, input: Option<String>) -> Self {
            self.network_interface_id = input;
            self
        }
        pub fn network_interface_port(mut self, input: i32) -> Self {
            self.network_interface_port = Some(input);
            self
        }
        pub fn set_network_interface_port(mut self, input: Option<i32>) -> Self {
            self.network_interface_port = input;
            self
        }
        pub fn chap_enabled(mut self, input: bool) -> Self {
            self.chap_enabled = Some(input);
            self
        }
        pub fn set_chap_enabled(mut self, input: Option<bool>) -> Self {
            self.chap_enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`DeviceiScsiAttributes`](crate::model::DeviceiScsiAttributes)
        pub fn build(self) -> crate::model::DeviceiScsiAttributes {
            crate::model::DeviceiScsiAttributes {
                target_arn: self.target_arn,
                network_interface_id: self.network_interface_id,
                network_interface_port: self.network_interface_port,
                chap_enabled: self.chap_enabled,
            }
        }
    }
}
impl DeviceiScsiAttributes {
    /// Creates a new builder-style object to manufacture [`DeviceiScsiAttributes`](crate::model::DeviceiScsiAttributes)
    pub fn builder() -> crate::model::devicei_scsi_attributes::Builder {
        crate::model::devicei_scsi_attributes::Builder::default()
    }
}

/// Represents a gateway's local disk.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Disk {
    #[serde(rename = "DiskId", skip_serializing_if = "Option::is_none")]
    pub disk_id: Option<String>,
    #[serde(rename = "DiskPath", skip_serializing_if = "Option::is_none")]
    pub disk_path: Option<String>,
    #[serde(rename = "DiskNode", skip_serializing_if = "Option::is_none")]
    pub disk_node: Option<String>,
    #[serde(rename = "DiskStatus", skip_serializing_if = "Option::is_none")]
    pub disk_status: Option<String>,
    #[serde(rename = "DiskSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub disk_size_in_bytes: Option<i64>,
    #[serde(rename = "DiskAllocationType", skip_serializing_if = "Option::is_none")]
    pub disk_allocation_type: Option<String>,
    #[serde(rename = "DiskAllocationResource", skip_serializing_if = "Option::is_none")]
    pub disk_allocation_resource: Option<String>,
    #[serde(rename = "DiskAttributeList", skip_serializing_if = "Option::is_none")]
    pub disk_attribute_list: Option<Vec<String>>,
}
impl Disk {
    pub fn disk_id(&self) -> Option<&str> {
        self.disk_id.as_deref()
    }
    pub fn disk_path(&self) -> Option<&str> {
        self.disk_path.as_deref()
    }
    pub fn disk_node(&self) -> Option<&str> {
        self.disk_node.as_deref()
    }
    pub fn disk_status(&self) -> Option<&str> {
        self.disk_status.as_deref()
    }
    pub fn disk_size_in_bytes(&self) -> Option<i64> {
        self.disk_size_in_bytes
    }
    pub fn disk_allocation_type(&self) -> Option<&str> {
        self.disk_allocation_type.as_deref()
    }
    pub fn disk_allocation_resource(&self) -> Option<&str> {
        self.disk_allocation_resource.as_deref()
    }
    pub fn disk_attribute_list(&self) -> Option<&[String]> {
        self.disk_attribute_list.as_deref()
    }
}
/// See [`Disk`](crate::model::Disk)
pub mod disk {
    /// A builder for [`Disk`](crate::model::Disk)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) disk_id: Option<String>,
        pub(crate) disk_path: Option<String>,
        pub(crate) disk_node: Option<String>,
        pub(crate) disk_status: Option<String>,
        pub(crate) disk_size_in_bytes: Option<i64>,
        pub(crate) disk_allocation_type: Option<String>,
        pub(crate) disk_allocation_resource: Option<String>,
        pub(crate) disk_attribute_list: Option<Vec<String>>,
    }
    impl Builder {
        pub fn disk_id(mut self, input: impl Into<String>) -> Self {
            self.disk_id = Some(input.into());
            self
        }
        pub fn set_disk_id(mut self, input: Option<String>) -> Self {
            self.disk_id = input;
            self
        }
        pub fn disk_path(mut self, input: impl Into<String>) -> Self {
            self.disk_path = Some(input.into());
            self
        }
        pub fn set_disk_path(mut self, input: Option<String>) -> Self {
            self.disk_path = input;
            self
        }
        pub fn disk_node(mut self, input: impl Into<String>) -> Self {
            self.disk_node = Some(input.into());
            self
        }
        pub fn set_disk_node(mut self, input: Option<String>) -> Self {
            self.disk_node = input;
            self
        }
        pub fn disk_status(mut self, input: impl Into<String>) -> Self {
            self.disk_status = Some(input.into());
            self
        }
        pub fn set_disk_status(mut self, input: Option<String>) -> Self {
            self.disk_status = input;
            self
        }
        pub fn disk_size_in_bytes(mut self, input: i64) -> Self {
            self.disk_size_in_bytes = Some(input);
            self
        }
        pub fn set_disk_size_in_bytes(mut self, input: Option<i64>) -> Self {
            self.disk_size_in_bytes = input;
            self
        }
        pub fn disk_allocation_type(mut self, input: impl Into<String>) -> Self {
            self.disk_allocation_type = Some(input.into());
            self
        }
        pub fn set_disk_allocation_type(mut self, input: Option<String>) -> Self {
            self.disk_allocation_type = input;
            self
        }
        pub fn disk_allocation_resource(mut self, input: impl Into<String>) -> Self {
            self.disk_allocation_resource = Some(input.into());
            self
        }
        pub fn set_disk_allocation_resource(mut self, input: Option<String>) -> Self {
            self.disk_allocation_resource = input;
            self
        }
        /// Appends an item to `disk_attribute_list`
        pub fn disk_attribute_list(mut self, input: impl Into<String>) -> Self {
            let mut v = self.disk_attribute_list.unwrap_or_default();
            v.push(input.into());
            self.disk_attribute_list = Some(v);
            self
        }
        pub fn set_disk_attribute_list(mut self, input: Option<Vec<String>>) -> Self {
            self.disk_attribute_list = input;
            self
        }
        /// Consumes the builder and constructs a [`Disk`](crate::model::Disk)
        pub fn build(self) -> crate::model::Disk {
            crate::model::Disk {
                disk_id: self.disk_id,
                disk_path: self.disk_path,
                disk_node: self.disk_node,
                disk_status: self.disk_status,
                disk_size_in_bytes: self.disk_size_in_bytes,
                disk_allocation_type: self.disk_allocation_type,
                disk_allocation_resource: self.disk_allocation_resource,
                disk_attribute_list: self.disk_attribute_list,
            }
        }
    }
}
impl Disk {
    /// Creates a new builder-style object to manufacture [`Disk`](crate::model::Disk)
    pub fn builder() -> crate::model::disk::Builder {
        crate::model::disk::Builder::default()
    }
}

/// Describes a file share.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FileShareInfo {
    #[serde(rename = "FileShareType", skip_serializing_if = "Option::is_none")]
    pub file_share_type: Option<crate::model::FileShareType>,
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
    #[serde(rename = "FileShareId", skip_serializing_if = "Option::is_none")]
    pub file_share_id: Option<String>,
    #[serde(rename = "FileShareStatus", skip_serializing_if = "Option::is_none")]
    pub file_share_status: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
}
impl FileShareInfo {
    pub fn file_share_type(&self) -> Option<&crate::model::FileShareType> {
        self.file_share_type.as_ref()
    }
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn file_share_id(&self) -> Option<&str> {
        self.file_share_id.as_deref()
    }
    pub fn file_share_status(&self) -> Option<&str> {
        self.file_share_status.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
}
/// See [`FileShareInfo`](crate::model::FileShareInfo)
pub mod file_share_info {
    /// A builder for [`FileShareInfo`](crate::model::FileShareInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_type: Option<crate::model::FileShareType>,
        pub(crate) file_share_arn: Option<String>,
        pub(crate) file_share_id: Option<String>,
        pub(crate) file_share_status: Option<String>,
        pub(crate) gateway_arn: Option<String>,
    }
    impl Builder {
        pub fn file_share_type(mut self, input: crate::model::FileShareType) -> Self {
            self.file_share_type = Some(input);
            self
        }
        pub fn set_file_share_type(mut self, input: Option<crate::model::FileShareType>) -> Self {
            self.file_share_type = input;
            self
        }
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        pub fn file_share_id(mut self, input: impl Into<String>) -> Self {
            self.file_share_id = Some(input.into());
            self
        }
        pub fn set_file_share_id(mut self, input: Option<String>) -> Self {
            self.file_share_id = input;
            self
        }
        pub fn file_share_status(mut self, input: impl Into<String>) -> Self {
            self.file_share_status = Some(input.into());
            self
        }
        pub fn set_file_share_status(mut self, input: Option<String>) -> Self {
            self.file_share_status = input;
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
        /// Consumes the builder and constructs a [`FileShareInfo`](crate::model::FileShareInfo)
        pub fn build(self) -> crate::model::FileShareInfo {
            crate::model::FileShareInfo {
                file_share_type: self.file_share_type,
                file_share_arn: self.file_share_arn,
                file_share_id: self.file_share_id,
                file_share_status: self.file_share_status,
                gateway_arn: self.gateway_arn,
            }
        }
    }
}
impl FileShareInfo {
    /// Creates a new builder-style object to manufacture [`FileShareInfo`](crate::model::FileShareInfo)
    pub fn builder() -> crate::model::file_share_info::Builder {
        crate::model::file_share_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FileShareType {
    Nfs,
    Smb,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for FileShareType {
    fn from(s: &'a str) -> Self {
        match s {
            "NFS" => FileShareType::Nfs,
            "SMB" => FileShareType::Smb,
            other => FileShareType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FileShareType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FileShareType::from(s))
    }
}
impl FileShareType {
    pub fn as_str(&self) -> &str {
        match self {
            FileShareType::Nfs => "NFS",
            FileShareType::Smb => "SMB",
            FileShareType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "NFS",
            "SMB",
        ]
    }
}
impl AsRef<str> for FileShareType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for FileShareType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for FileShareType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(FileShareType::from(data.as_str()))
    }
}

/// Describes a gateway object.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GatewayInfo {
    #[serde(rename = "GatewayId", skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "GatewayType", skip_serializing_if = "Option::is_none")]
    pub gateway_type: Option<String>,
    #[serde(rename = "GatewayOperationalState", skip_serializing_if = "Option::is_none")]
    pub gateway_operational_state: Option<String>,
    #[serde(rename = "GatewayName", skip_serializing_if = "Option::is_none")]
    pub gateway_name: Option<String>,
    #[serde(rename = "Ec2InstanceId", skip_serializing_if = "Option::is_none")]
    pub ec2_instance_id: Option<String>,
    #[serde(rename = "Ec2InstanceRegion", skip_serializing_if = "Option::is_none")]
    pub ec2_instance_region: Option<String>,
}
impl GatewayInfo {
    pub fn gateway_id(&self) -> Option<&str> {
        self.gateway_id.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn gateway_type(&self) -> Option<&str> {
        self.gateway_type.as_deref()
    }
    pub fn gateway_operational_state(&self) -> Option<&str> {
        self.gateway_operational_state.as_deref()
    }
    pub fn gateway_name(&self) -> Option<&str> {
        self.gateway_name.as_deref()
    }
    pub fn ec2_instance_id(&self) -> Option<&str> {
        self.ec2_instance_id.as_deref()
    }
    pub fn ec2_instance_region(&self) -> Option<&str> {
        self.ec2_instance_region.as_deref()
    }
}
/// See [`GatewayInfo`](crate::model::GatewayInfo)
pub mod gateway_info {
    /// A builder for [`GatewayInfo`](crate::model::GatewayInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) gateway_id: Option<String>,
        pub(crate) gateway_arn: Option<String>,
        pub(crate) gateway_type: Option<String>,
        pub(crate) gateway_operational_state: Option<String>,
        pub(crate) gateway_name: Option<String>,
        pub(crate) ec2_instance_id: Option<String>,
        pub(crate) ec2_instance_region: Option<String>,
    }
    impl Builder {
        pub fn gateway_id(mut self, input: impl Into<String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        pub fn set_gateway_id(mut self, input: Option<String>) -> Self {
            self.gateway_id = input;
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
        pub fn gateway_type(mut self, input: impl Into<String>) -> Self {
            self.gateway_type = Some(input.into());
            self
        }
        pub fn set_gateway_type(mut self, input: Option<String>) -> Self {
            self.gateway_type = input;
            self
        }
        pub fn gateway_operational_state(mut self, input: impl Into<String>) -> Self {
            self.gateway_operational_state = Some(input.into());
            self
        }
        pub fn set_gateway_operational_state(mut self, input: Option<String>) -> Self {
            self.gateway_operational_state = input;
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
        /// Consumes the builder and constructs a [`GatewayInfo`](crate::model::GatewayInfo)
        pub fn build(self) -> crate::model::GatewayInfo {
            crate::model::GatewayInfo {
                gateway_id: self.gateway_id,
                gateway_arn: self.gateway_arn,
                gateway_type: self.gateway_type,
                gateway_operational_state: self.gateway_operational_state,
                gateway_name: self.gateway_name,
                ec2_instance_id: self.ec2_instance_id,
                ec2_instance_region: self.ec2_instance_region,
            }
        }
    }
}
impl GatewayInfo {
    /// Creates a new builder-style object to manufacture [`GatewayInfo`](crate::model::GatewayInfo)
    pub fn builder() -> crate::model::gateway_info::Builder {
        crate::model::gateway_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum HostEnvironment {
    Vmware,
    HyperV,
    Ec2,
    Kvm,
    Other,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for HostEnvironment {
    fn from(s: &'a str) -> Self {
        match s {
            "VMWARE" => HostEnvironment::Vmware,
            "HYPER-V" => HostEnvironment::HyperV,
            "EC2" => HostEnvironment::Ec2,
            "KVM" => HostEnvironment::Kvm,
            "OTHER" => HostEnvironment::Other,
            other => HostEnvironment::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for HostEnvironment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HostEnvironment::from(s))
    }
}
impl HostEnvironment {
    pub fn as_str(&self) -> &str {
        match self {
            HostEnvironment::Vmware => "VMWARE",
            HostEnvironment::HyperV => "HYPER-V",
            HostEnvironment::Ec2 => "EC2",
            HostEnvironment::Kvm => "KVM",
            HostEnvironment::Other => "OTHER",
            HostEnvironment::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "VMWARE",
            "HYPER-V",
            "EC2",
            "KVM",
            "OTHER",
        ]
    }
}
impl AsRef<str> for HostEnvironment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for HostEnvironment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for HostEnvironment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(HostEnvironment::from(data.as_str()))
    }
}

/// Describes a gateway's network interface.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NetworkInterface {
    #[serde(rename = "Ipv4Address", skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    #[serde(rename = "MacAddress", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(rename = "Ipv6Address", skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}
impl NetworkInterface {
    pub fn ipv4_address(&self) -> Option<&str> {
        self.ipv4_address.as_deref()
    }
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }
    pub fn ipv6_address(&self) -> Option<&str> {
        self.ipv6_address.as_deref()
    }
}
/// See [`NetworkInterface`](crate::model::NetworkInterface)
pub mod network_interface {
    /// A builder for [`NetworkInterface`](crate::model::NetworkInterface)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) ipv4_address: Option<String>,
        pub(crate) mac_address: Option<String>,
        pub(crate) ipv6_address: Option<String>,
    }
    impl Builder {
        pub fn ipv4_address(mut self, input: impl Into<String>) -> Self {
            self.ipv4_address = Some(input.into());
            self
        }
        pub fn set_ipv4_address(mut self, input: Option<String>) -> Self {
            self.ipv4_address = input;
            self
        }
        pub fn mac_address(mut self, input: impl Into<String>) -> Self {
            self.mac_address = Some(input.into());
            self
        }
        pub fn set_mac_address(mut self, input: Option<String>) -> Self {
            self.mac_address = input;
            self
        }
        pub fn ipv6_address(mut self, input: impl Into<String>) -> Self {
            self.ipv6_address = Some(input.into());
            self
        }
        pub fn set_ipv6_address(mut self, input: Option<String>) -> Self {
            self.ipv6_address = input;
            self
        }
        /// Consumes the builder and constructs a [`NetworkInterface`](crate::model::NetworkInterface)
        pub fn build(self) -> crate::model::NetworkInterface {
            crate::model::NetworkInterface {
                ipv4_address: self.ipv4_address,
                mac_address: self.mac_address,
                ipv6_address: self.ipv6_address,
            }
        }
    }
}
impl NetworkInterface {
    /// Creates a new builder-style object to manufacture [`NetworkInterface`](crate::model::NetworkInterface)
    pub fn builder() -> crate::model::network_interface::Builder {
        crate::model::network_interface::Builder::default()
    }
}

/// Describes Network File System (NFS) file share default values. Files and folders stored as Amazon S3 objects in S3 buckets don't, by default, have Unix file permissions assigned to them.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NfsFileShareDefaults {
    #[serde(rename = "FileMode", skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<String>,
    #[serde(rename = "DirectoryMode", skip_serializing_if = "Option::is_none")]
    pub directory_mode: Option<String>,
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}
impl NfsFileShareDefaults {
    pub fn file_mode(&self) -> Option<&str> {
        self.file_mode.as_deref()
    }
    pub fn directory_mode(&self) -> Option<&str> {
        self.directory_mode.as_deref()
    }
    pub fn group_id(&self) -> Option<i64> {
        self.group_id
    }
    pub fn owner_id(&self) -> Option<i64> {
        self.owner_id
    }
}
/// See [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults)
pub mod nfs_file_share_defaults {
    /// A builder for [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_mode: Option<String>,
        pub(crate) directory_mode: Option<String>,
        pub(crate) group_id: Option<i64>,
        pub(crate) owner_id: Option<i64>,
    }
    impl Builder {
        pub fn file_mode(mut self, input: impl Into<String>) -> Self {
            self.file_mode = Some(input.into());
            self
        }
        pub fn set_file_mode(mut self, input: Option<String>) -> Self {
            self.file_mode = input;
            self
        }
        pub fn directory_mode(mut self, input: impl Into<String>) -> Self {
            self.directory_mode = Some(input.into());
            self
        }
        pub fn set_directory_mode(mut self, input: Option<String>) -> Self {
            self.directory_mode = input;
            self
        }
        pub fn group_id(mut self, input: i64) -> Self {
            self.group_id = Some(input);
            self
        }
        pub fn set_group_id(mut self, input: Option<i64>) -> Self {
            self.group_id = input;
            self
        }
        pub fn owner_id(mut self, input: i64) -> Self {
            self.owner_id = Some(input);
            self
        }
        pub fn set_owner_id(mut self, input: Option<i64>) -> Self {
            self.owner_id = input;
            self
        }
        /// Consumes the builder and constructs a [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults)
        pub fn build(self) -> crate::model::NfsFileShareDefaults {
            crate::model::NfsFileShareDefaults {
                file_mode: self.file_mode,
                directory_mode: self.directory_mode,
                group_id: self.group_id,
                owner_id: self.owner_id,
            }
        }
    }
}
impl NfsFileShareDefaults {
    /// Creates a new builder-style object to manufacture [`NfsFileShareDefaults`](crate::model::NfsFileShareDefaults)
    pub fn builder() -> crate::model::nfs_file_share_defaults::Builder {
        crate::model::nfs_file_share_defaults::Builder::default()
    }
}

/// The Unix file permissions and ownership information assigned, by default, to native S3 objects when file gateway discovers them in S3 buckets. This operation is only supported in file gateways.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NfsFileShareInfo {
    /// The Unix file permissions and ownership information assigned, by default, to native S3 objects when file gateway discovers them in S3 buckets.
    #[serde(rename = "NFSFileShareDefaults", skip_serializing_if = "Option::is_none")]
    pub nfs_file_share_defaults: Option<crate::model::NfsFileShareDefaults>,
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
    /// The ID of the file share.
    ///
    /// Length: 12 - 30
    #[serde(rename = "FileShareId", skip_serializing_if = "Option::is_none")]
    pub file_share_id: Option<String>,
    /// The status of the file share.
    ///
    /// Length: 3 - 50
    #[serde(rename = "FileShareStatus", skip_serializing_if = "Option::is_none")]
    pub file_share_status: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3. Optional.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of the AWS KMS key used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// The file share path used by the NFS client to identify the mount point.
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The ARN of the IAM role that file gateway assumes when it accesses the underlying storage.
    ///
    /// Length: 20 - 2048
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The ARN of the backend storage used for storing file data.
    ///
    /// Length: 16 - 310
    #[serde(rename = "LocationARN", skip_serializing_if = "Option::is_none")]
    pub location_arn: Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    ///
    /// Length: 5 - 20
    #[serde(rename = "DefaultStorageClass", skip_serializing_if = "Option::is_none")]
    pub default_storage_class: Option<String>,
    /// A value that sets the access control list permission for objects in the S3 bucket that a file gateway puts objects into.
    ///
    /// Allowed values: `private`, `public-read`, `public-read-write`, `authenticated-read`, `bucket-owner-read`, `bucket-owner-full-control`, `aws-exec-read`
    #[serde(rename = "ObjectACL", skip_serializing_if = "Option::is_none")]
    pub object_acl: Option<crate::model::ObjectAcl>,
    /// The list of clients that are allowed to access the file gateway.
    #[serde(rename = "ClientList", skip_serializing_if = "Option::is_none")]
    pub client_list: Option<Vec<String>>,
    /// The user mapped to anonymous user.
    ///
    /// Length: 5 - 15
    #[serde(rename = "Squash", skip_serializing_if = "Option::is_none")]
    pub squash: Option<String>,
    /// A value that sets the write status of a file share.
    #[serde(rename = "ReadOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// A value that enables guessing of the MIME type for uploaded objects based on file extensions.
    #[serde(rename = "GuessMIMETypeEnabled", skip_serializing_if = "Option::is_none")]
    pub guess_mime_type_enabled: Option<bool>,
    /// A value that sets who pays the cost of the request and the cost associated with data download from the S3 bucket.
    #[serde(rename = "RequesterPays", skip_serializing_if = "Option::is_none")]
    pub requester_pays: Option<bool>,
    /// A list of up to 50 tags assigned to the NFS file share, sorted alphabetically by key name.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl NfsFileShareInfo {
    pub fn nfs_file_share_defaults(&self) -> Option<&crate::model::NfsFileShareDefaults> {
        self.nfs_file_share_defaults.as_ref()
    }
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn file_share_id(&self) -> Option<&str> {
        self.file_share_id.as_deref()
    }
    pub fn file_share_status(&self) -> Option<&str> {
        self.file_share_status.as_deref()
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
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
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
/// See [`NfsFileShareInfo`](crate::model::NfsFileShareInfo)
pub mod nfs_file_share_info {
    /// A builder for [`NfsFileShareInfo`](crate::model::NfsFileShareInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) nfs_file_share_defaults: Option<crate::model::NfsFileShareDefaults>,
        pub(crate) file_share_arn: Option<String>,
        pub(crate) file_share_id: Option<String>,
        pub(crate) file_share_status: Option<String>,
        pub(crate) gateway_arn: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) path: Option<String>,
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
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        pub fn file_share_id(mut self, input: impl Into<String>) -> Self {
            self.file_share_id = Some(input.into());
            self
        }
        pub fn set_file_share_id(mut self, input: Option<String>) -> Self {
            self.file_share_id = input;
            self
        }
        pub fn file_share_status(mut self, input: impl Into<String>) -> Self {
            self.file_share_status = Some(input.into());
            self
        }
        pub fn set_file_share_status(mut self, input: Option<String>) -> Self {
            self.file_share_status = input;
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
        pub fn path(mut self, input: impl Into<String>) -> Self {
            self.path = Some(input.into());
            self
        }
        pub fn set_path(mut self, input: Option<String>) -> Self {
            self.path = input;
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
        /// Consumes the builder and constructs a [`NfsFileShareInfo`](crate::model::NfsFileShareInfo)
        pub fn build(self) -> crate::model::NfsFileShareInfo {
            crate::model::NfsFileShareInfo {
                nfs_file_share_defaults: self.nfs_file_share_defaults,
                file_share_arn: self.file_share_arn,
                file_share_id: self.file_share_id,
                file_share_status: self.file_share_status,
                gateway_arn: self.gateway_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                path: self.path,
                role: self.role,
                location_arn: self.location_arn,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                client_list: self.client_list,
                squash: self.squash,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
                tags: self.tags,
            }
        }
    }
}
impl NfsFileShareInfo {
    /// Creates a new builder-style object to manufacture [`NfsFileShareInfo`](crate::model::NfsFileShareInfo)
    pub fn builder() -> crate::model::nfs_file_share_info::Builder {
        crate::model::nfs_file_share_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ObjectAcl {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    BucketOwnerRead,
    BucketOwnerFullControl,
    AwsExecRead,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for ObjectAcl {
    fn from(s: &'a str) -> Self {
        match s {
            "private" => ObjectAcl::Private,
            "public-read" => ObjectAcl::PublicRead,
            "public-read-write" => ObjectAcl::PublicReadWrite,
            "authenticated-read" => ObjectAcl::AuthenticatedRead,
            "bucket-owner-read" => ObjectAcl::BucketOwnerRead,
            "bucket-owner-full-control" => ObjectAcl::BucketOwnerFullControl,
            "aws-exec-read" => ObjectAcl::AwsExecRead,
            other => ObjectAcl::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ObjectAcl {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ObjectAcl::from(s))
    }
}
impl ObjectAcl {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectAcl::Private => "private",
            ObjectAcl::PublicRead => "public-read",
            ObjectAcl::PublicReadWrite => "public-read-write",
            ObjectAcl::AuthenticatedRead => "authenticated-read",
            ObjectAcl::BucketOwnerRead => "bucket-owner-read",
            ObjectAcl::BucketOwnerFullControl => "bucket-owner-full-control",
            ObjectAcl::AwsExecRead => "aws-exec-read",
            ObjectAcl::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "private",
            "public-read",
            "public-read-write",
            "authenticated-read",
            "bucket-owner-read",
            "bucket-owner-full-control",
            "aws-exec-read",
        ]
    }
}
impl AsRef<str> for ObjectAcl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for ObjectAcl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for ObjectAcl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(ObjectAcl::from(data.as_str()))
    }
}

/// The Windows file permissions and ownership information assigned, by default, to native S3 objects when file gateway discovers them in S3 buckets. This operation is only supported for file gateways.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SmbFileShareInfo {
    /// The Amazon Resource Name (ARN) of the file share.
    ///
    /// Length: 50 - 500
    #[serde(rename = "FileShareARN", skip_serializing_if = "Option::is_none")]
    pub file_share_arn: Option<String>,
    /// The ID of the file share.
    ///
    /// Length: 12 - 30
    #[serde(rename = "FileShareId", skip_serializing_if = "Option::is_none")]
    pub file_share_id: Option<String>,
    /// The status of the file share.
    ///
    /// Length: 3 - 50
    #[serde(rename = "FileShareStatus", skip_serializing_if = "Option::is_none")]
    pub file_share_status: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// True to use Amazon S3 server-side encryption with your own AWS KMS key, or false to use a key managed by Amazon S3. Optional.
    #[serde(rename = "KMSEncrypted", skip_serializing_if = "Option::is_none")]
    pub kms_encrypted: Option<bool>,
    /// The Amazon Resource Name (ARN) of the AWS KMS key used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// The file share path used by the SMB client to identify the mount point.
    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The ARN of the IAM role that file gateway assumes when it accesses the underlying storage.
    ///
    /// Length: 20 - 2048
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The ARN of the backend storage used for storing file data.
    ///
    /// Length: 16 - 310
    #[serde(rename = "LocationARN", skip_serializing_if = "Option::is_none")]
    pub location_arn: Option<String>,
    /// The default storage class for objects put into an Amazon S3 bucket by the file gateway.
    ///
    /// Length: 5 - 50
    #[serde(rename = "DefaultStorageClass", skip_serializing_if = "Option::is_none")]
    pub default_storage_class: Option<String>,
    /// A value that sets the access control list permission for objects in the S3 bucket that a file gateway puts objects into.
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
    /// If this value is set to "true", indicates that ACL (access control list) is enabled on the SMB file share.
    #[serde(rename = "SMBACLEnabled", skip_serializing_if = "Option::is_none")]
    pub smbacl_enabled: Option<bool>,
    /// A list of users or groups in the Active Directory that have administrator rights to the file share.
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
    /// The authentication method of the file share.
    ///
    /// Length: 5 - 15
    #[serde(rename = "Authentication", skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
    /// A list of up to 50 tags assigned to the SMB file share, sorted alphabetically by key name.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<crate::model::Tag>>,
}
impl SmbFileShareInfo {
    pub fn file_share_arn(&self) -> Option<&str> {
        self.file_share_arn.as_deref()
    }
    pub fn file_share_id(&self) -> Option<&str> {
        self.file_share_id.as_deref()
    }
    pub fn file_share_status(&self) -> Option<&str> {
        self.file_share_status.as_deref()
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
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
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
/// See [`SmbFileShareInfo`](crate::model::SmbFileShareInfo)
pub mod smb_file_share_info {
    /// A builder for [`SmbFileShareInfo`](crate::model::SmbFileShareInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) file_share_arn: Option<String>,
        pub(crate) file_share_id: Option<String>,
        pub(crate) file_share_status: Option<String>,
        pub(crate) gateway_arn: Option<String>,
        pub(crate) kms_encrypted: Option<bool>,
        pub(crate) kms_key: Option<String>,
        pub(crate) path: Option<String>,
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
        pub fn file_share_arn(mut self, input: impl Into<String>) -> Self {
            self.file_share_arn = Some(input.into());
            self
        }
        pub fn set_file_share_arn(mut self, input: Option<String>) -> Self {
            self.file_share_arn = input;
            self
        }
        pub fn file_share_id(mut self, input: impl Into<String>) -> Self {
            self.file_share_id = Some(input.into());
            self
        }
        pub fn set_file_share_id(mut self, input: Option<String>) -> Self {
            self.file_share_id = input;
            self
        }
        pub fn file_share_status(mut self, input: impl Into<String>) -> Self {
            self.file_share_status = Some(input.into());
            self
        }
        pub fn set_file_share_status(mut self, input: Option<String>) -> Self {
            self.file_share_status = input;
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
        pub fn path(mut self, input: impl Into<String>) -> Self {
            self.path = Some(input.into());
            self
        }
        pub fn set_path(mut self, input: Option<String>) -> Self {
            self.path = input;
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
        /// Consumes the builder and constructs a [`SmbFileShareInfo`](crate::model::SmbFileShareInfo)
        pub fn build(self) -> crate::model::SmbFileShareInfo {
            crate::model::SmbFileShareInfo {
                file_share_arn: self.file_share_arn,
                file_share_id: self.file_share_id,
                file_share_status: self.file_share_status,
                gateway_arn: self.gateway_arn,
                kms_encrypted: self.kms_encrypted,
                kms_key: self.kms_key,
                path: self.path,
                role: self.role,
                location_arn: self.location_arn,
                default_storage_class: self.default_storage_class,
                object_acl: self.object_acl,
                read_only: self.read_only,
                guess_mime_type_enabled: self.guess_mime_type_enabled,
                requester_pays: self.requester_pays,
                smbacl_enabled: self.smbacl_enabled,
                admin_user_list: self.admin_user_list,
                valid_user_list: self.valid_user_list,
                invalid_user_list: self.invalid_user_list,
                audit_destination_arn: self.audit_destination_arn,
                authentication: self.authentication,
                tags: self.tags,
            }
        }
    }
}
impl SmbFileShareInfo {
    /// Creates a new builder-style object to manufacture [`SmbFileShareInfo`](crate::model::SmbFileShareInfo)
    pub fn builder() -> crate::model::smb_file_share_info::Builder {
        crate::model::smb_file_share_info::Builder::default()
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SmbSecurityStrategy {
    ClientSpecified,
    MandatorySigning,
    MandatoryEncryption,
    /// A value added to the service after this client was generated
    Unknown(String),
}
impl<'a> From<&'a str> for SmbSecurityStrategy {
    fn from(s: &'a str) -> Self {
        match s {
            "ClientSpecified" => SmbSecurityStrategy::ClientSpecified,
            "MandatorySigning" => SmbSecurityStrategy::MandatorySigning,
            "MandatoryEncryption" => SmbSecurityStrategy::MandatoryEncryption,
            other => SmbSecurityStrategy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SmbSecurityStrategy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SmbSecurityStrategy::from(s))
    }
}
impl SmbSecurityStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            SmbSecurityStrategy::ClientSpecified => "ClientSpecified",
            SmbSecurityStrategy::MandatorySigning => "MandatorySigning",
            SmbSecurityStrategy::MandatoryEncryption => "MandatoryEncryption",
            SmbSecurityStrategy::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this client
    pub fn values() -> &'static [&'static str] {
        &[
            "ClientSpecified",
            "MandatorySigning",
            "MandatoryEncryption",
        ]
    }
}
impl AsRef<str> for SmbSecurityStrategy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl Serialize for SmbSecurityStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> Deserialize<'de> for SmbSecurityStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = String::deserialize(deserializer)?;
        Ok(SmbSecurityStrategy::from(data.as_str()))
    }
}

/// Provides additional information about an error that was returned by the service.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StorageGatewayError {
    /// Additional information about the error.
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human-readable text that provides detail about the error that occurred.
    #[serde(rename = "errorDetails", skip_serializing_if = "Option::is_none")]
    pub error_details: Option<std::collections::HashMap<String, String>>,
}
impl StorageGatewayError {
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }
    pub fn error_details(&self) -> Option<&std::collections::HashMap<String, String>> {
        self.error_details.as_ref()
    }
}
/// See [`StorageGatewayError`](crate::model::StorageGatewayError)
pub mod storage_gateway_error {
    /// A builder for [`StorageGatewayError`](crate::model::StorageGatewayError)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) error_code: Option<String>,
        pub(crate) error_details: Option<std::collections::HashMap<String, String>>,
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
        /// Adds a key-value pair to `error_details`
        pub fn error_details(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.error_details.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.error_details = Some(hash_map);
            self
        }
        pub fn set_error_details(
            mut self,
            input: Option<std::collections::HashMap<String, String>>,
        ) -> Self {
            self.error_details = input;
            self
        }
        /// Consumes the builder and constructs a [`StorageGatewayError`](crate::model::StorageGatewayError)
        pub fn build(self) -> crate::model::StorageGatewayError {
            crate::model::StorageGatewayError {
                error_code: self.error_code,
                error_details: self.error_details,
            }
        }
    }
}
impl StorageGatewayError {
    /// Creates a new builder-style object to manufacture [`StorageGatewayError`](crate::model::StorageGatewayError)
    pub fn builder() -> crate::model::storage_gateway_error::Builder {
        crate::model::storage_gateway_error::Builder::default()
    }
}

/// Describes an iSCSI stored volume.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StorediScsiVolume {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    #[serde(rename = "VolumeStatus", skip_serializing_if = "Option::is_none")]
    pub volume_status: Option<String>,
    #[serde(rename = "VolumeAttachmentStatus", skip_serializing_if = "Option::is_none")]
    pub volume_attachment_status: Option<String>,
    #[serde(rename = "VolumeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_bytes: Option<i64>,
    #[serde(rename = "VolumeProgress", skip_serializing_if = "Option::is_none")]
    pub volume_progress: Option<f64>,
    #[serde(rename = "VolumeDiskId", skip_serializing_if = "Option::is_none")]
    pub volume_disk_id: Option<String>,
    #[serde(rename = "SourceSnapshotId", skip_serializing_if = "Option::is_none")]
    pub source_snapshot_id: Option<String>,
    #[serde(rename = "PreservedExistingData", skip_serializing_if = "Option::is_none")]
    pub preserved_existing_data: Option<bool>,
    #[serde(rename = "VolumeiSCSIAttributes", skip_serializing_if = "Option::is_none")]
    pub volumei_scsi_attributes: Option<crate::model::VolumeiScsiAttributes>,
    #[serde(
        rename = "CreatedDate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "smithy_types::instant::epoch_seconds",
    )]
    pub created_date: Option<smithy_types::Instant>,
    #[serde(rename = "VolumeUsedInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_used_in_bytes: Option<i64>,
    /// The Amazon Resource Name (ARN) of a symmetric customer master key (CMK) used for Amazon S3 server-side encryption.
    ///
    /// Length: 7 - 2048
    #[serde(rename = "KMSKey", skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    /// The name of the iSCSI target used by an initiator to connect to a volume.
    ///
    /// Length: 1 - 200
    #[serde(rename = "TargetName", skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}
impl StorediScsiVolume {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }
    pub fn volume_type(&self) -> Option<&str> {
        self.volume_type.as_deref()
    }
    pub fn volume_status(&self) -> Option<&str> {
        self.volume_status.as_deref()
    }
    pub fn volume_attachment_status(&self) -> Option<&str> {
        self.volume_attachment_status.as_deref()
    }
    pub fn volume_size_in_bytes(&self) -> Option<i64> {
        self.volume_size_in_bytes
    }
    pub fn volume_progress(&self) -> Option<f64> {
        self.volume_progress
    }
    pub fn volume_disk_id(&self) -> Option<&str> {
        self.volume_disk_id.as_deref()
    }
    pub fn source_snapshot_id(&self) -> Option<&str> {
        self.source_snapshot_id.as_deref()
    }
    pub fn preserved_existing_data(&self) -> Option<bool> {
        self.preserved_existing_data
    }
    pub fn volumei_scsi_attributes(&self) -> Option<&crate::model::VolumeiScsiAttributes> {
        self.volumei_scsi_attributes.as_ref()
    }
    pub fn created_date(&self) -> Option<smithy_types::Instant> {
        self.created_date
    }
    pub fn volume_used_in_bytes(&self) -> Option<i64> {
        self.volume_used_in_bytes
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }
}
/// See [`StorediScsiVolume`](crate::model::StorediScsiVolume)
pub mod storedi_scsi_volume {
    /// A builder for [`StorediScsiVolume`](crate::model::StorediScsiVolume)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) volume_id: Option<String>,
        pub(crate) volume_type: Option<String>,
        pub(crate) volume_status: Option<String>,
        pub(crate) volume_attachment_status: Option<String>,
        pub(crate) volume_size_in_bytes: Option<i64>,
        pub(crate) volume_progress: Option<f64>,
        pub(crate) volume_disk_id: Option<String>,
        pub(crate) source_snapshot_id: Option<String>,
        pub(crate) preserved_existing_data: Option<bool>,
        pub(crate) volumei_scsi_attributes: Option<crate::model::VolumeiScsiAttributes>,
        pub(crate) created_date: Option<smithy_types::Instant>,
        pub(crate) volume_used_in_bytes: Option<i64>,
        pub(crate) kms_key: Option<String>,
        pub(crate) target_name: Option<String>,
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
        pub fn volume_id(mut self, input: impl Into<String>) -> Self {
            self.volume_id = Some(input.into());
            self
        }
        pub fn set_volume_id(mut self, input: Option<String>) -> Self {
            self.volume_id = input;
            self
        }
        pub fn volume_type(mut self, input: impl Into<String>) -> Self {
            self.volume_type = Some(input.into());
            self
        }
        pub fn set_volume_type(mut self, input: Option<String>) -> Self {
            self.volume_type = input;
            self
        }
        pub fn volume_status(mut self, input: impl Into<String>) -> Self {
            self.volume_status = Some(input.into());
            self
        }
        pub fn set_volume_status(mut self, input: Option<String>) -> Self {
            self.volume_status = input;
            self
        }
        pub fn volume_attachment_status(mut self, input: impl Into<String>) -> Self {
            self.volume_attachment_status = Some(input.into());
            self
        }
        pub fn set_volume_attachment_status(mut self, input: Option<String>) -> Self {
            self.volume_attachment_status = input;
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
        pub fn volume_progress(mut self, input: f64) -> Self {
            self.volume_progress = Some(input);
            self
        }
        pub fn set_volume_progress(mut self, input: Option<f64>) -> Self {
            self.volume_progress = input;
            self
        }
        pub fn volume_disk_id(mut self, input: impl Into<String>) -> Self {
            self.volume_disk_id = Some(input.into());
            self
        }
        pub fn set_volume_disk_id(mut self, input: Option<String>) -> Self {
            self.volume_disk_id = input;
            self
        }
        pub fn source_snapshot_id(mut self, input: impl Into<String>) -> Self {
            self.source_snapshot_id = Some(input.into());
            self
        }
        pub fn set_source_snapshot_id(mut self, input: Option<String>) -> Self {
            self.source_snapshot_id = input;
            self
        }
        pub fn preserved_existing_data(mut self, input: bool) -> Self {
            self.preserved_existing_data = Some(input);
            self
        }
        pub fn set_preserved_existing_data(mut self, input: Option<bool>) -> Self {
            self.preserved_existing_data = input;
            self
        }
        pub fn volumei_scsi_attributes(
            mut self,
            input: crate::model::VolumeiScsiAttributes,
        ) -> Self {
            self.volumei_scsi_attributes = Some(input);
            self
        }
        pub fn set_volumei_scsi_attributes(
            mut self,
            input: Option<crate::model::VolumeiScsiAttributes>,
        ) -> Self {
            self.volumei_scsi_attributes = input;
            self
        }
        pub fn created_date(mut self, input: smithy_types::Instant) -> Self {
            self.created_date = Some(input);
            self
        }
        pub fn set_created_date(mut self, input: Option<smithy_types::Instant>) -> Self {
            self.created_date = input;
            self
        }
        pub fn volume_used_in_bytes(mut self, input: i64) -> Self {
            self.volume_used_in_bytes = Some(input);
            self
        }
        pub fn set_volume_used_in_bytes(mut self, input: Option<i64>) -> Self {
            self.volume_used_in_bytes = input;
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
        pub fn target_name(mut self, input: impl Into<String>) -> Self {
            self.target_name = Some(input.into());
            self
        }
        pub fn set_target_name(mut self, input: Option<String>) -> Self {
            self.target_name = input;
            self
        }
        /// Consumes the builder and constructs a [`StorediScsiVolume`](crate::model::StorediScsiVolume)
        pub fn build(self) -> crate::model::StorediScsiVolume {
            crate::model::StorediScsiVolume {
                volume_arn: self.volume_arn,
                volume_id: self.volume_id,
                volume_type: self.volume_type,
                volume_status: self.volume_status,
                volume_attachment_status: self.volume_attachment_status,
                volume_size_in_bytes: self.volume_size_in_bytes,
                volume_progress: self.volume_progress,
                volume_disk_id: self.volume_disk_id,
                source_snapshot_id: self.source_snapshot_id,
                preserved_existing_data: self.preserved_existing_data,
                volumei_scsi_attributes: self.volumei_scsi_attributes,
                created_date: self.created_date,
                volume_used_in_bytes: self.volume_used_in_bytes,
                kms_key: self.kms_key,
                target_name: self.target_name,
            }
        }
    }
}
impl StorediScsiVolume {
    /// Creates a new builder-style object to manufacture [`StorediScsiVolume`](crate::model::StorediScsiVolume)
    pub fn builder() -> crate::model::storedi_scsi_volume::Builder {
        crate::model::storedi_scsi_volume::Builder::default()
    }
}

/// A key-value pair that helps you manage, filter, and search for your resource.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
impl Tag {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) key: Option<String>,
        pub(crate) value: Option<String>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: Option<String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

/// Describes a virtual tape object.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tape {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
    #[serde(rename = "TapeBarcode", skip_serializing_if = "Option::is_none")]
    pub tape_barcode: Option<String>,
    #[serde(
        rename = "TapeCreatedDate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "smithy_types::instant::epoch_seconds",
    )]
    pub tape_created_date: Option<smithy_types::Instant>,
    /// The size, in bytes, of the virtual tape.
    #[serde(rename = "TapeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_size_in_bytes: Option<i64>,
    #[serde(rename = "TapeStatus", skip_serializing_if = "Option::is_none")]
    pub tape_status: Option<String>,
    #[serde(rename = "VTLDevice", skip_serializing_if = "Option::is_none")]
    pub vtl_device: Option<String>,
    #[serde(rename = "Progress", skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(rename = "TapeUsedInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_used_in_bytes: Option<i64>,
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
}
impl Tape {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
    pub fn tape_barcode(&self) -> Option<&str> {
        self.tape_barcode.as_deref()
    }
    pub fn tape_created_date(&self) -> Option<smithy_types::Instant> {
        self.tape_created_date
    }
    pub fn tape_size_in_bytes(&self) -> Option<i64> {
        self.tape_size_in_bytes
    }
    pub fn tape_status(&self) -> Option<&str> {
        self.tape_status.as_deref()
    }
    pub fn vtl_device(&self) -> Option<&str> {
        self.vtl_device.as_deref()
    }
    pub fn progress(&self) -> Option<f64> {
        self.progress
    }
    pub fn tape_used_in_bytes(&self) -> Option<i64> {
        self.tape_used_in_bytes
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn pool_id(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }
}
/// See [`Tape`](crate::model::Tape)
pub mod tape {
    /// A builder for [`Tape`](crate::model::Tape)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
        pub(crate) tape_barcode: Option<String>,
        pub(crate) tape_created_date: Option<smithy_types::Instant>,
        pub(crate) tape_size_in_bytes: Option<i64>,
        pub(crate) tape_status: Option<String>,
        pub(crate) vtl_device: Option<String>,
        pub(crate) progress: Option<f64>,
        pub(crate) tape_used_in_bytes: Option<i64>,
        pub(crate) kms_key: Option<String>,
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
        pub fn tape_barcode(mut self, input: impl Into<String>) -> Self {
            self.tape_barcode = Some(input.into());
            self
        }
        pub fn set_tape_barcode(mut self, input: Option<String>) -> Self {
            self.tape_barcode = input;
            self
        }
        pub fn tape_created_date(mut self, input: smithy_types::Instant) -> Self {
            self.tape_created_date = Some(input);
            self
        }
        pub fn set_tape_created_date(mut self, input: Option<smithy_types::Instant>) -> Self {
            self.tape_created_date = input;
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
        pub fn tape_status(mut self, input: impl Into<String>) -> Self {
            self.tape_status = Some(input.into());
            self
        }
        pub fn set_tape_status(mut self, input: Option<String>) -> Self {
            self.tape_status = input;
            self
        }
        pub fn vtl_device(mut self, input: impl Into<String>) -> Self {
            self.vtl_device = Some(input.into());
            self
        }
        pub fn set_vtl_device(mut self, input: Option<String>) -> Self {
            self.vtl_device = input;
            self
        }
        pub fn progress(mut self, input: f64) -> Self {
            self.progress = Some(input);
            self
        }
        pub fn set_progress(mut self, input: Option<f64>) -> Self {
            self.progress = input;
            self
        }
        pub fn tape_used_in_bytes(mut self, input: i64) -> Self {
            self.tape_used_in_bytes = Some(input);
            self
        }
        pub fn set_tape_used_in_bytes(mut self, input: Option<i64>) -> Self {
            self.tape_used_in_bytes = input;
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
        /// Consumes the builder and constructs a [`Tape`](crate::model::Tape)
        pub fn build(self) -> crate::model::Tape {
            crate::model::Tape {
                tape_arn: self.tape_arn,
                tape_barcode: self.tape_barcode,
                tape_created_date: self.tape_created_date,
                tape_size_in_bytes: self.tape_size_in_bytes,
                tape_status: self.tape_status,
                vtl_device: self.vtl_device,
                progress: self.progress,
                tape_used_in_bytes: self.tape_used_in_bytes,
                kms_key: self.kms_key,
                pool_id: self.pool_id,
            }
        }
    }
}
impl Tape {
    /// Creates a new builder-style object to manufacture [`Tape`](crate::model::Tape)
    pub fn builder() -> crate::model::tape::Builder {
        crate::model::tape::Builder::default()
    }
}

/// Represents a virtual tape that is archived in the virtual tape shelf (VTS).
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TapeArchive {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
    #[serde(rename = "TapeBarcode", skip_serializing_if = "Option::is_none")]
    pub tape_barcode: Option<String>,
    #[serde(
        rename = "TapeCreatedDate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "smithy_types::instant::epoch_seconds",
    )]
    pub tape_created_date: Option<smithy_types::Instant>,
    /// The size, in bytes, of the virtual tape.
    #[serde(rename = "TapeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_size_in_bytes: Option<i64>,
    #[serde(
        rename = "CompletionTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "smithy_types::instant::epoch_seconds",
    )]
    pub completion_time: Option<smithy_types::Instant>,
    #[serde(rename = "RetrievedTo", skip_serializing_if = "Option::is_none")]
    pub retrieved_to: Option<String>,
    #[serde(rename = "TapeStatus", skip_serializing_if = "Option::is_none")]
    pub tape_status: Option<String>,
    #[serde(rename = "TapeUsedInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_used_in_bytes: Option<i64>,
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
}
impl TapeArchive {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
    pub fn tape_barcode(&self) -> Option<&str> {
        self.tape_barcode.as_deref()
    }
    pub fn tape_created_date(&self) -> Option<smithy_types::Instant> {
        self.tape_created_date
    }
    pub fn tape_size_in_bytes(&self) -> Option<i64> {
        self.tape_size_in_bytes
    }
    pub fn completion_time(&self) -> Option<smithy_types::Instant> {
        self.completion_time
    }
    pub fn retrieved_to(&self) -> Option<&str> {
        self.retrieved_to.as_deref()
    }
    pub fn tape_status(&self) -> Option<&str> {
        self.tape_status.as_deref()
    }
    pub fn tape_used_in_bytes(&self) -> Option<i64> {
        self.tape_used_in_bytes
    }
    pub fn kms_key(&self) -> Option<&str> {
        self.kms_key.as_deref()
    }
    pub fn pool_id(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }
}
/// See [`TapeArchive`](crate::model::TapeArchive)
pub mod tape_archive {
    /// A builder for [`TapeArchive`](crate::model::TapeArchive)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
        pub(crate) tape_barcode: Option<String>,
        pub(crate) tape_created_date: Option<smithy_types::Instant>,
        pub(crate) tape_size_in_bytes: Option<i64>,
        pub(crate) completion_time: Option<smithy_types::Instant>,
        pub(crate) retrieved_to: Option<String>,
        pub(crate) tape_status: Option<String>,
        pub(crate) tape_used_in_bytes: Option<i64>,
        pub(crate) kms_key: Option<String>,
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
        pub fn tape_barcode(mut self, input: impl Into<String>) -> Self {
            self.tape_barcode = Some(input.into());
            self
        }
        pub fn set_tape_barcode(mut self, input: Option<String>) -> Self {
            self.tape_barcode = input;
            self
        }
        pub fn tape_created_date(mut self, input: smithy_types::Instant) -> Self {
            self.tape_created_date = Some(input);
            self
        }
        pub fn set_tape_created_date(mut self, input: Option<smithy_types::Instant>) -> Self {
            self.tape_created_date = input;
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
        pub fn completion_time(mut self, input: smithy_types::Instant) -> Self {
            self.completion_time = Some(input);
            self
        }
        pub fn set_completion_time(mut self, input: Option<smithy_types::Instant>) -> Self {
            self.completion_time = input;
            self
        }
        pub fn retrieved_to(mut self, input: impl Into<String>) -> Self {
            self.retrieved_to = Some(input.into());
            self
        }
        pub fn set_retrieved_to(mut self, input: Option<String>) -> Self {
            self.retrieved_to = input;
            self
        }
        pub fn tape_status(mut self, input: impl Into<String>) -> Self {
            self.tape_status = Some(input.into());
            self
        }
        pub fn set_tape_status(mut self, input: Option<String>) -> Self {
            self.tape_status = input;
            self
        }
        pub fn tape_used_in_bytes(mut self, input: i64) -> Self {
            self.tape_used_in_bytes = Some(input);
            self
        }
        pub fn set_tape_used_in_bytes(mut self, input: Option<i64>) -> Self {
            self.tape_used_in_bytes = input;
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
        /// Consumes the builder and constructs a [`TapeArchive`](crate::model::TapeArchive)
        pub fn build(self) -> crate::model::TapeArchive {
            crate::model::TapeArchive {
                tape_arn: self.tape_arn,
                tape_barcode: self.tape_barcode,
                tape_created_date: self.tape_created_date,
                tape_size_in_bytes: self.tape_size_in_bytes,
                completion_time: self.completion_time,
                retrieved_to: self.retrieved_to,
                tape_status: self.tape_status,
                tape_used_in_bytes: self.tape_used_in_bytes,
                kms_key: self.kms_key,
                pool_id: self.pool_id,
            }
        }
    }
}
impl TapeArchive {
    /// Creates a new builder-style object to manufacture [`TapeArchive`](crate::model::TapeArchive)
    pub fn builder() -> crate::model::tape_archive::Builder {
        crate::model::tape_archive::Builder::default()
    }
}

/// Describes a virtual tape.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TapeInfo {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
    #[serde(rename = "TapeBarcode", skip_serializing_if = "Option::is_none")]
    pub tape_barcode: Option<String>,
    /// The size, in bytes, of the virtual tape.
    #[serde(rename = "TapeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_size_in_bytes: Option<i64>,
    #[serde(rename = "TapeStatus", skip_serializing_if = "Option::is_none")]
    pub tape_status: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    /// The ID of the pool that contains the tape: `GLACIER` or `DEEP_ARCHIVE`.
    ///
    /// Length: 1 - 100
    #[serde(rename = "PoolId", skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
}
impl TapeInfo {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
    pub fn tape_barcode(&self) -> Option<&str> {
        self.tape_barcode.as_deref()
    }
    pub fn tape_size_in_bytes(&self) -> Option<i64> {
        self.tape_size_in_bytes
    }
    pub fn tape_status(&self) -> Option<&str> {
        self.tape_status.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn pool_id(&self) -> Option<&str> {
        self.pool_id.as_deref()
    }
}
/// See [`TapeInfo`](crate::model::TapeInfo)
pub mod tape_info {
    /// A builder for [`TapeInfo`](crate::model::TapeInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
        pub(crate) tape_barcode: Option<String>,
        pub(crate) tape_size_in_bytes: Option<i64>,
        pub(crate) tape_status: Option<String>,
        pub(crate) gateway_arn: Option<String>,
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
        pub fn tape_barcode(mut self, input: impl Into<String>) -> Self {
            self.tape_barcode = Some(input.into());
            self
        }
        pub fn set_tape_barcode(mut self, input: Option<String>) -> Self {
            self.tape_barcode = input;
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
        pub fn tape_status(mut self, input: impl Into<String>) -> Self {
            self.tape_status = Some(input.into());
            self
        }
        pub fn set_tape_status(mut self, input: Option<String>) -> Self {
            self.tape_status = input;
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
        pub fn pool_id(mut self, input: impl Into<String>) -> Self {
            self.pool_id = Some(input.into());
            self
        }
        pub fn set_pool_id(mut self, input: Option<String>) -> Self {
            self.pool_id = input;
            self
        }
        /// Consumes the builder and constructs a [`TapeInfo`](crate::model::TapeInfo)
        pub fn build(self) -> crate::model::TapeInfo {
            crate::model::TapeInfo {
                tape_arn: self.tape_arn,
                tape_barcode: self.tape_barcode,
                tape_size_in_bytes: self.tape_size_in_bytes,
                tape_status: self.tape_status,
                gateway_arn: self.gateway_arn,
                pool_id: self.pool_id,
            }
        }
    }
}
impl TapeInfo {
    /// Creates a new builder-style object to manufacture [`TapeInfo`](crate::model::TapeInfo)
    pub fn builder() -> crate::model::tape_info::Builder {
        crate::model::tape_info::Builder::default()
    }
}

/// Describes a recovery point.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TapeRecoveryPointInfo {
    /// The Amazon Resource Name (ARN) of the virtual tape.
    ///
    /// Length: 50 - 500
    #[serde(rename = "TapeARN", skip_serializing_if = "Option::is_none")]
    pub tape_arn: Option<String>,
    #[serde(
        rename = "TapeRecoveryPointTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "smithy_types::instant::epoch_seconds",
    )]
    pub tape_recovery_point_time: Option<smithy_types::Instant>,
    /// The size, in bytes, of the virtual tape.
    #[serde(rename = "TapeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub tape_size_in_bytes: Option<i64>,
    #[serde(rename = "TapeStatus", skip_serializing_if = "Option::is_none")]
    pub tape_status: Option<String>,
}
impl TapeRecoveryPointInfo {
    pub fn tape_arn(&self) -> Option<&str> {
        self.tape_arn.as_deref()
    }
    pub fn tape_recovery_point_time(&self) -> Option<smithy_types::Instant> {
        self.tape_recovery_point_time
    }
    pub fn tape_size_in_bytes(&self) -> Option<i64> {
        self.tape_size_in_bytes
    }
    pub fn tape_status(&self) -> Option<&str> {
        self.tape_status.as_deref()
    }
}
/// See [`TapeRecoveryPointInfo`](crate::model::TapeRecoveryPointInfo)
pub mod tape_recovery_point_info {
    /// A builder for [`TapeRecoveryPointInfo`](crate::model::TapeRecoveryPointInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) tape_arn: Option<String>,
        pub(crate) tape_recovery_point_time: Option<smithy_types::Instant>,
        pub(crate) tape_size_in_bytes: Option<i64>,
        pub(crate) tape_status: Option<String>,
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
        pub fn tape_recovery_point_time(mut self, input: smithy_types::Instant) -> Self {
            self.tape_recovery_point_time = Some(input);
            self
        }
        pub fn set_tape_recovery_point_time(
            mut self,
            input: Option<smithy_types::Instant>,
        ) -> Self {
            self.tape_recovery_point_time = input;
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
        pub fn tape_status(mut self, input: impl Into<String>) -> Self {
            self.tape_status = Some(input.into());
            self
        }
        pub fn set_tape_status(mut self, input: Option<String>) -> Self {
            self.tape_status = input;
            self
        }
        /// Consumes the builder and constructs a [`TapeRecoveryPointInfo`](crate::model::TapeRecoveryPointInfo)
        pub fn build(self) -> crate::model::TapeRecoveryPointInfo {
            crate::model::TapeRecoveryPointInfo {
                tape_arn: self.tape_arn,
                tape_recovery_point_time: self.tape_recovery_point_time,
                tape_size_in_bytes: self.tape_size_in_bytes,
                tape_status: self.tape_status,
            }
        }
    }
}
impl TapeRecoveryPointInfo {
    /// Creates a new builder-style object to manufacture [`TapeRecoveryPointInfo`](crate::model::TapeRecoveryPointInfo)
    pub fn builder() -> crate::model::tape_recovery_point_info::Builder {
        crate::model::tape_recovery_point_info::Builder::default()
    }
}

/// Describes a storage volume object.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct VolumeInfo {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
    /// The Amazon Resource Name (ARN) of the gateway. Use the `ListGateways` operation to return a list of gateways for your account and AWS Region.
    ///
    /// Length: 50 - 500
    #[serde(rename = "GatewayARN", skip_serializing_if = "Option::is_none")]
    pub gateway_arn: Option<String>,
    #[serde(rename = "GatewayId", skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    #[serde(rename = "VolumeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_bytes: Option<i64>,
    #[serde(rename = "VolumeAttachmentStatus", skip_serializing_if = "Option::is_none")]
    pub volume_attachment_status: Option<String>,
}
impl VolumeInfo {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }
    pub fn gateway_arn(&self) -> Option<&str> {
        self.gateway_arn.as_deref()
    }
    pub fn gateway_id(&self) -> Option<&str> {
        self.gateway_id.as_deref()
    }
    pub fn volume_type(&self) -> Option<&str> {
        self.volume_type.as_deref()
    }
    pub fn volume_size_in_bytes(&self) -> Option<i64> {
        self.volume_size_in_bytes
    }
    pub fn volume_attachment_status(&self) -> Option<&str> {
        self.volume_attachment_status.as_deref()
    }
}
/// See [`VolumeInfo`](crate::model::VolumeInfo)
pub mod volume_info {
    /// A builder for [`VolumeInfo`](crate::model::VolumeInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) volume_id: Option<String>,
        pub(crate) gateway_arn: Option<String>,
        pub(crate) gateway_id: Option<String>,
        pub(crate) volume_type: Option<String>,
        pub(crate) volume_size_in_bytes: Option<i64>,
        pub(crate) volume_attachment_status: Option<String>,
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
        pub fn volume_id(mut self, input: impl Into<String>) -> Self {
            self.volume_id = Some(input.into());
            self
        }
        pub fn set_volume_id(mut self, input: Option<String>) -> Self {
            self.volume_id = input;
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
        pub fn gateway_id(mut self, input: impl Into<String>) -> Self {
            self.gateway_id = Some(input.into());
            self
        }
        pub fn set_gateway_id(mut self, input: Option<String>) -> Self {
            self.gateway_id = input;
            self
        }
        pub fn volume_type(mut self, input: impl Into<String>) -> Self {
            self.volume_type = Some(input.into());
            self
        }
        pub fn set_volume_type(mut self, input: Option<String>) -> Self {
            self.volume_type = input;
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
        pub fn volume_attachment_status(mut self, input: impl Into<String>) -> Self {
            self.volume_attachment_status = Some(input.into());
            self
        }
        pub fn set_volume_attachment_status(mut self, input: Option<String>) -> Self {
            self.volume_attachment_status = input;
            self
        }
        /// Consumes the builder and constructs a [`VolumeInfo`](crate::model::VolumeInfo)
        pub fn build(self) -> crate::model::VolumeInfo {
            crate::model::VolumeInfo {
                volume_arn: self.volume_arn,
                volume_id: self.volume_id,
                gateway_arn: self.gateway_arn,
                gateway_id: self.gateway_id,
                volume_type: self.volume_type,
                volume_size_in_bytes: self.volume_size_in_bytes,
                volume_attachment_status: self.volume_attachment_status,
            }
        }
    }
}
impl VolumeInfo {
    /// Creates a new builder-style object to manufacture [`VolumeInfo`](crate::model::VolumeInfo)
    pub fn builder() -> crate::model::volume_info::Builder {
        crate::model::volume_info::Builder::default()
    }
}

/// Describes a storage volume recovery point object.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct VolumeRecoveryPointInfo {
    /// The Amazon Resource Name (ARN) of the volume.
    ///
    /// Length: 50 - 500
    #[serde(rename = "VolumeARN", skip_serializing_if = "Option::is_none")]
    pub volume_arn: Option<String>,
    #[serde(rename = "VolumeSizeInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_bytes: Option<i64>,
    #[serde(rename = "VolumeUsageInBytes", skip_serializing_if = "Option::is_none")]
    pub volume_usage_in_bytes: Option<i64>,
    #[serde(rename = "VolumeRecoveryPointTime", skip_serializing_if = "Option::is_none")]
    pub volume_recovery_point_time: Option<String>,
}
impl VolumeRecoveryPointInfo {
    pub fn volume_arn(&self) -> Option<&str> {
        self.volume_arn.as_deref()
    }
    pub fn volume_size_in_bytes(&self) -> Option<i64> {
        self.volume_size_in_bytes
    }
    pub fn volume_usage_in_bytes(&self) -> Option<i64> {
        self.volume_usage_in_bytes
    }
    pub fn volume_recovery_point_time(&self) -> Option<&str> {
        self.volume_recovery_point_time.as_deref()
    }
}
/// See [`VolumeRecoveryPointInfo`](crate::model::VolumeRecoveryPointInfo)
pub mod volume_recovery_point_info {
    /// A builder for [`VolumeRecoveryPointInfo`](crate::model::VolumeRecoveryPointInfo)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) volume_arn: Option<String>,
        pub(crate) volume_size_in_bytes: Option<i64>,
        pub(crate) volume_usage_in_bytes: Option<i64>,
        pub(crate) volume_recovery_point_time: Option<String>,
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
        pub fn volume_usage_in_bytes(mut self, input: i64) -> Self {
            self.volume_usage_in_bytes = Some(input);
            self
        }
        pub fn set_volume_usage_in_bytes(mut self, input: Option<i64>) -> Self {
            self.volume_usage_in_bytes = input;
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
        /// Consumes the builder and constructs a [`VolumeRecoveryPointInfo`](crate::model::VolumeRecoveryPointInfo)
        pub fn build(self) -> crate::model::VolumeRecoveryPointInfo {
            crate::model::VolumeRecoveryPointInfo {
                volume_arn: self.volume_arn,
                volume_size_in_bytes: self.volume_size_in_bytes,
                volume_usage_in_bytes: self.volume_usage_in_bytes,
                volume_recovery_point_time: self.volume_recovery_point_time,
            }
        }
    }
}
impl VolumeRecoveryPointInfo {
    /// Creates a new builder-style object to manufacture [`VolumeRecoveryPointInfo`](crate::model::VolumeRecoveryPointInfo)
    pub fn builder() -> crate::model::volume_recovery_point_info::Builder {
        crate::model::volume_recovery_point_info::Builder::default()
    }
}

/// Lists iSCSI information about a volume.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct VolumeiScsiAttributes {
    /// The Amazon Resource Name (ARN) of the iSCSI volume target.
    ///
    /// Length: 50 - 800
    #[serde(rename = "TargetARN", skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,
    /// The network interface of the gateway on which to expose the iSCSI target. Only IPv4 addresses are accepted.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "NetworkInterfacePort", skip_serializing_if = "Option::is_none")]
    pub network_interface_port: Option<i32>,
    #[serde(rename = "LunNumber", skip_serializing_if = "Option::is_none")]
    pub lun_number: Option<i32>,
    #[serde(rename = "ChapEnabled", skip_serializing_if = "Option::is_none")]
    pub chap_enabled: Option<bool>,
}
impl VolumeiScsiAttributes {
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }
    pub fn network_interface_port(&self) -> Option<i32> {
        self.network_interface_port
    }
    pub fn lun_number(&self) -> Option<i32> {
        self.lun_number
    }
    pub fn chap_enabled(&self) -> Option<bool> {
        self.chap_enabled
    }
}
/// See [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes)
pub mod volumei_scsi_attributes {
    /// A builder for [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) target_arn: Option<String>,
        pub(crate) network_interface_id: Option<String>,
        pub(crate) network_interface_port: Option<i32>,
        pub(crate) lun_number: Option<i32>,
        pub(crate) chap_enabled: Option<bool>,
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
        pub fn network_interface_id(mut self, input: impl Into<String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        pub fn set_network_interface_id(mut self, input: Option<String>) -> Self {
            self.network_interface_id = input;
            self
        }
        pub fn network_interface_port(mut self, input: i32) -> Self {
            self.network_interface_port = Some(input);
            self
        }
        pub fn set_network_interface_port(mut self, input: Option<i32>) -> Self {
            self.network_interface_port = input;
            self
        }
        pub fn lun_number(mut self, input: i32) -> Self {
            self.lun_number = Some(input);
            self
        }
        pub fn set_lun_number(mut self, input: Option<i32>) -> Self {
            self.lun_number = input;
            self
        }
        pub fn chap_enabled(mut self, input: bool) -> Self {
            self.chap_enabled = Some(input);
            self
        }
        pub fn set_chap_enabled(mut self, input: Option<bool>) -> Self {
            self.chap_enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes)
        pub fn build(self) -> crate::model::VolumeiScsiAttributes {
            crate::model::VolumeiScsiAttributes {
                target_arn: self.target_arn,
                network_interface_id: self.network_interface_id,
                network_interface_port: self.network_interface_port,
                lun_number: self.lun_number,
                chap_enabled: self.chap_enabled,
            }
        }
    }
}
impl VolumeiScsiAttributes {
    /// Creates a new builder-style object to manufacture [`VolumeiScsiAttributes`](crate::model::VolumeiScsiAttributes)
    pub fn builder() -> crate::model::volumei_scsi_attributes::Builder {
        crate::model::volumei_scsi_attributes::Builder::default()
    }
}

/// Represents a device object associated with a tape gateway.
#[non_exhaustive]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct VtlDevice {
    #[serde(rename = "VTLDeviceARN", skip_serializing_if = "Option::is_none")]
    pub vtl_device_arn: Option<String>,
    #[serde(rename = "VTLDeviceType", skip_serializing_if = "Option::is_none")]
    pub vtl_device_type: Option<String>,
    #[serde(rename = "VTLDeviceVendor", skip_serializing_if = "Option::is_none")]
    pub vtl_device_vendor: Option<String>,
    #[serde(rename = "VTLDeviceProductIdentifier", skip_serializing_if = "Option::is_none")]
    pub vtl_device_product_identifier: Option<String>,
    #[serde(rename = "DeviceiSCSIAttributes", skip_serializing_if = "Option::is_none")]
    pub devicei_scsi_attributes: Option<crate::model::DeviceiScsiAttributes>,
}
impl VtlDevice {
    pub fn vtl_device_arn(&self) -> Option<&str> {
        self.vtl_device_arn.as_deref()
    }
    pub fn vtl_device_type(&self) -> Option<&str> {
        self.vtl_device_type.as_deref()
    }
    pub fn vtl_device_vendor(&self) -> Option<&str> {
        self.vtl_device_vendor.as_deref()
    }
    pub fn vtl_device_product_identifier(&self) -> Option<&str> {
        self.vtl_device_product_identifier.as_deref()
    }
    pub fn devicei_scsi_attributes(&self) -> Option<&crate::model::DeviceiScsiAttributes> {
        self.devicei_scsi_attributes.as_ref()
    }
}
/// See [`VtlDevice`](crate::model::VtlDevice)
pub mod vtl_device {
    /// A builder for [`VtlDevice`](crate::model::VtlDevice)
    #[non_exhaustive]
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) vtl_device_arn: Option<String>,
        pub(crate) vtl_device_type: Option<String>,
        pub(crate) vtl_device_vendor: Option<String>,
        pub(crate) vtl_device_product_identifier: Option<String>,
        pub(crate) devicei_scsi_attributes: Option<crate::model::DeviceiScsiAttributes>,
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
        pub fn vtl_device_type(mut self, input: impl Into<String>) -> Self {
            self.vtl_device_type = Some(input.into());
            self
        }
        pub fn set_vtl_device_type(mut self, input: Option<String>) -> Self {
            self.vtl_device_type = input;
            self
        }
        pub fn vtl_device_vendor(mut self, input: impl Into<String>) -> Self {
            self.vtl_device_vendor = Some(input.into());
            self
        }
        pub fn set_vtl_device_vendor(mut self, input: Option<String>) -> Self {
            self.vtl_device_vendor = input;
            self
        }
        pub fn vtl_device_product_identifier(mut self, input: impl Into<String>) -> Self {
            self.vtl_device_product_identifier = Some(input.into());
            self
        }
        pub fn set_vtl_device_product_identifier(mut self, input: Option<String>) -> Self {
            self.vtl_device_product_identifier = input;
            self
        }
        pub fn devicei_scsi_attributes(
            mut self,
            input: crate::model::DeviceiScsiAttributes,
        ) -> Self {
            self.devicei_scsi_attributes = Some(input);
            self
        }
        pub fn set_devicei_scsi_attributes(
            mut self,
            input: Option<crate::model::DeviceiScsiAttributes>,
        ) -> Self {
            self.devicei_scsi_attributes = input;
            self
        }
        /// Consumes the builder and constructs a [`VtlDevice`](crate::model::VtlDevice)
        pub fn build(self) -> crate::model::VtlDevice {
            crate::model::VtlDevice {
                vtl_device_arn: self.vtl_device_arn,
                vtl_device_type: self.vtl_device_type,
                vtl_device_vendor: self.vtl_device_vendor,
                vtl_device_product_identifier: self.vtl_device_product_identifier,
                devicei_scsi_attributes: self.devicei_scsi_attributes,
            }
        }
    }
}
impl VtlDevice {
    /// Creates a new builder-style object to manufacture [`VtlDevice`](crate::model::VtlDevice)
    pub fn builder() -> crate::model::vtl_device::Builder {
        crate::model::vtl_device::Builder::default()
    }
}
