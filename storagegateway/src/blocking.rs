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

/// Blocking AWS Storage Gateway client
///
/// ```rust,no_run
/// use storagegateway::blocking::Client;
/// use storagegateway::input::ListGatewaysInput;
///
/// let client = Client::from_env().expect("failed to start the runtime");
/// for page in client.list_gateways_pages(ListGatewaysInput::builder().limit(10)) {
///     let page = page.expect("failed to list gateways");
///     for gateway in page.gateways.unwrap_or_default() {
///         println!("{:?}", gateway.gateway_arn);
///     }
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
    /// Activates the gateway you previously deployed on your host.
    pub fn activate_gateway(
        &self,
        input: impl Into<ActivateGatewayInput>,
    ) -> Result<ActivateGatewayOutput, SdkError<ActivateGatewayError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Configures one or more gateway local disks as cache for a gateway.
    pub fn add_cache(
        &self,
        input: impl Into<AddCacheInput>,
    ) -> Result<AddCacheOutput, SdkError<AddCacheError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Adds one or more tags to the specified resource.
    pub fn add_tags_to_resource(
        &self,
        input: impl Into<AddTagsToResourceInput>,
    ) -> Result<AddTagsToResourceOutput, SdkError<AddTagsToResourceError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Configures one or more gateway local disks as upload buffer for a specified gateway.
    pub fn add_upload_buffer(
        &self,
        input: impl Into<AddUploadBufferInput>,
    ) -> Result<AddUploadBufferOutput, SdkError<AddUploadBufferError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Configures one or more gateway local disks as working storage for a gateway.
    pub fn add_working_storage(
        &self,
        input: impl Into<AddWorkingStorageInput>,
    ) -> Result<AddWorkingStorageOutput, SdkError<AddWorkingStorageError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Assigns a tape to a tape pool for archiving.
    pub fn assign_tape_pool(
        &self,
        input: impl Into<AssignTapePoolInput>,
    ) -> Result<AssignTapePoolOutput, SdkError<AssignTapePoolError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Connects a volume to an iSCSI connection and then attaches the volume to the specified gateway.
    pub fn attach_volume(
        &self,
        input: impl Into<AttachVolumeInput>,
    ) -> Result<AttachVolumeOutput, SdkError<AttachVolumeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Cancels archiving of a virtual tape to the virtual tape shelf (VTS) after the archiving process is initiated.
    pub fn cancel_archival(
        &self,
        input: impl Into<CancelArchivalInput>,
    ) -> Result<CancelArchivalOutput, SdkError<CancelArchivalError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Cancels retrieval of a virtual tape from the virtual tape shelf (VTS) to a gateway after the retrieval process is initiated.
    pub fn cancel_retrieval(
        &self,
        input: impl Into<CancelRetrievalInput>,
    ) -> Result<CancelRetrievalOutput, SdkError<CancelRetrievalError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Creates a cached volume on a specified cached volume gateway.
    pub fn create_cachedi_scsi_volume(
        &self,
        input: impl Into<CreateCachediScsiVolumeInput>,
    ) -> Result<CreateCachediScsiVolumeOutput, SdkError<CreateCachediScsiVolumeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Creates a Network File System (NFS) file share on an existing file gateway.
    pub fn create_nfs_file_share(
        &self,
        input: impl Into<CreateNfsFileShareInput>,
    ) -> Result<CreateNfsFileShareOutput, SdkError<CreateNfsFileShareError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Creates a Server Message Block (SMB) file share on an existing file gateway.
    pub fn create_smb_file_share(
        &self,
        input: impl Into<CreateSmbFileShareInput>,
    ) -> Result<CreateSmbFileShareOutput, SdkError<CreateSmbFileShareError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Initiates a snapshot of a volume.
    pub fn create_snapshot(
        &self,
        input: impl Into<CreateSnapshotInput>,
    ) -> Result<CreateSnapshotOutput, SdkError<CreateSnapshotError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Initiates a snapshot of a gateway from a volume recovery point.
    pub fn create_snapshot_from_volume_recovery_point(
        &self,
        input: impl Into<CreateSnapshotFromVolumeRecoveryPointInput>,
    ) -> Result<
        CreateSnapshotFromVolumeRecoveryPointOutput,
        SdkError<CreateSnapshotFromVolumeRecoveryPointError>,
    > {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Creates a volume on a specified gateway.
    pub fn create_storedi_scsi_volume(
        &self,
        input: impl Into<CreateStorediScsiVolumeInput>,
    ) -> Result<CreateStorediScsiVolumeOutput, SdkError<CreateStorediScsiVolumeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Creates a virtual tape by using your own barcode.
    pub fn create_tape_with_barcode(
        &self,
        input: impl Into<CreateTapeWithBarcodeInput>,
    ) -> Result<CreateTapeWithBarcodeOutput, SdkError<CreateTapeWithBarcodeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Creates one or more virtual tapes.
    pub fn create_tapes(
        &self,
        input: impl Into<CreateTapesInput>,
    ) -> Result<CreateTapesOutput, SdkError<CreateTapesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes the automatic tape creation policy of a gateway.
    pub fn delete_automatic_tape_creation_policy(
        &self,
        input: impl Into<DeleteAutomaticTapeCreationPolicyInput>,
    ) -> Result<
        DeleteAutomaticTapeCreationPolicyOutput,
        SdkError<DeleteAutomaticTapeCreationPolicyError>,
    > {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes the bandwidth rate limits of a gateway.
    pub fn delete_bandwidth_rate_limit(
        &self,
        input: impl Into<DeleteBandwidthRateLimitInput>,
    ) -> Result<DeleteBandwidthRateLimitOutput, SdkError<DeleteBandwidthRateLimitError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes Challenge-Handshake Authentication Protocol (CHAP) credentials for a specified iSCSI target and initiator pair.
    pub fn delete_chap_credentials(
        &self,
        input: impl Into<DeleteChapCredentialsInput>,
    ) -> Result<DeleteChapCredentialsOutput, SdkError<DeleteChapCredentialsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes a file share from a file gateway.
    pub fn delete_file_share(
        &self,
        input: impl Into<DeleteFileShareInput>,
    ) -> Result<DeleteFileShareOutput, SdkError<DeleteFileShareError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes a gateway.
    pub fn delete_gateway(
        &self,
        input: impl Into<DeleteGatewayInput>,
    ) -> Result<DeleteGatewayOutput, SdkError<DeleteGatewayError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes a snapshot of a volume.
    pub fn delete_snapshot_schedule(
        &self,
        input: impl Into<DeleteSnapshotScheduleInput>,
    ) -> Result<DeleteSnapshotScheduleOutput, SdkError<DeleteSnapshotScheduleError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes the specified virtual tape.
    pub fn delete_tape(
        &self,
        input: impl Into<DeleteTapeInput>,
    ) -> Result<DeleteTapeOutput, SdkError<DeleteTapeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes the specified virtual tape from the virtual tape shelf (VTS).
    pub fn delete_tape_archive(
        &self,
        input: impl Into<DeleteTapeArchiveInput>,
    ) -> Result<DeleteTapeArchiveOutput, SdkError<DeleteTapeArchiveError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Deletes the specified storage volume that you previously created using the CreateCachediSCSIVolume or CreateStorediSCSIVolume API. This operation is only supported in the cached volume and stored volume types.
    pub fn delete_volume(
        &self,
        input: impl Into<DeleteVolumeInput>,
    ) -> Result<DeleteVolumeOutput, SdkError<DeleteVolumeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns information about the most recent High Availability monitoring test that was performed on the host in a cluster.
    pub fn describe_availability_monitor_test(
        &self,
        input: impl Into<DescribeAvailabilityMonitorTestInput>,
    ) -> Result<
        DescribeAvailabilityMonitorTestOutput,
        SdkError<DescribeAvailabilityMonitorTestError>,
    > {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns the bandwidth rate limits of a gateway.
    pub fn describe_bandwidth_rate_limit(
        &self,
        input: impl Into<DescribeBandwidthRateLimitInput>,
    ) -> Result<DescribeBandwidthRateLimitOutput, SdkError<DescribeBandwidthRateLimitError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns information about the cache of a gateway.
    pub fn describe_cache(
        &self,
        input: impl Into<DescribeCacheInput>,
    ) -> Result<DescribeCacheOutput, SdkError<DescribeCacheError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns a description of the gateway volumes specified in the request.
    pub fn describe_cachedi_scsi_volumes(
        &self,
        input: impl Into<DescribeCachediScsiVolumesInput>,
    ) -> Result<DescribeCachediScsiVolumesOutput, SdkError<DescribeCachediScsiVolumesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns an array of Challenge-Handshake Authentication Protocol (CHAP) credentials information for a specified iSCSI target, one for each target-initiator pair.
    pub fn describe_chap_credentials(
        &self,
        input: impl Into<DescribeChapCredentialsInput>,
    ) -> Result<DescribeChapCredentialsOutput, SdkError<DescribeChapCredentialsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns metadata about a gateway such as its name, network interfaces, configured time zone, and the state (whether the gateway is running or not).
    pub fn describe_gateway_information(
        &self,
        input: impl Into<DescribeGatewayInformationInput>,
    ) -> Result<DescribeGatewayInformationOutput, SdkError<DescribeGatewayInformationError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns your gateway's weekly maintenance start time including the day and time of the week.
    pub fn describe_maintenance_start_time(
        &self,
        input: impl Into<DescribeMaintenanceStartTimeInput>,
    ) -> Result<DescribeMaintenanceStartTimeOutput, SdkError<DescribeMaintenanceStartTimeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Gets a description for one or more Network File System (NFS) file shares from a file gateway.
    pub fn describe_nfs_file_shares(
        &self,
        input: impl Into<DescribeNfsFileSharesInput>,
    ) -> Result<DescribeNfsFileSharesOutput, SdkError<DescribeNfsFileSharesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Gets a description for one or more Server Message Block (SMB) file shares from a file gateway.
    pub fn describe_smb_file_shares(
        &self,
        input: impl Into<DescribeSmbFileSharesInput>,
    ) -> Result<DescribeSmbFileSharesOutput, SdkError<DescribeSmbFileSharesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Gets a description of a Server Message Block (SMB) file share settings from a file gateway.
    pub fn describe_smb_settings(
        &self,
        input: impl Into<DescribeSmbSettingsInput>,
    ) -> Result<DescribeSmbSettingsOutput, SdkError<DescribeSmbSettingsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Describes the snapshot schedule for the specified gateway volume.
    pub fn describe_snapshot_schedule(
        &self,
        input: impl Into<DescribeSnapshotScheduleInput>,
    ) -> Result<DescribeSnapshotScheduleOutput, SdkError<DescribeSnapshotScheduleError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns the description of the gateway volumes specified in the request.
    pub fn describe_storedi_scsi_volumes(
        &self,
        input: impl Into<DescribeStorediScsiVolumesInput>,
    ) -> Result<DescribeStorediScsiVolumesOutput, SdkError<DescribeStorediScsiVolumesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns a description of specified virtual tapes in the virtual tape shelf (VTS).
    pub fn describe_tape_archives(
        &self,
        input: impl Into<DescribeTapeArchivesInput>,
    ) -> Result<DescribeTapeArchivesOutput, SdkError<DescribeTapeArchivesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`describe_tape_archives`](Client::describe_tape_archives)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn describe_tape_archives_pages(
        &self,
        input: impl Into<DescribeTapeArchivesInput>,
    ) -> Paginator<
        '_,
        DescribeTapeArchivesInput,
        DescribeTapeArchivesOutput,
        SdkError<DescribeTapeArchivesError>,
    > {
        Paginator::new(
            input.into(),
            move |input| self.describe_tape_archives(input),
            |input: &DescribeTapeArchivesInput, output: &DescribeTapeArchivesOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    DescribeTapeArchivesInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Returns a list of virtual tape recovery points that are available for the specified tape gateway.
    pub fn describe_tape_recovery_points(
        &self,
        input: impl Into<DescribeTapeRecoveryPointsInput>,
    ) -> Result<DescribeTapeRecoveryPointsOutput, SdkError<DescribeTapeRecoveryPointsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`describe_tape_recovery_points`](Client::describe_tape_recovery_points)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn describe_tape_recovery_points_pages(
        &self,
        input: impl Into<DescribeTapeRecoveryPointsInput>,
    ) -> Paginator<
        '_,
        DescribeTapeRecoveryPointsInput,
        DescribeTapeRecoveryPointsOutput,
        SdkError<DescribeTapeRecoveryPointsError>,
    > {
        Paginator::new(
            input.into(),
            move |input| self.describe_tape_recovery_points(input),
            |input: &DescribeTapeRecoveryPointsInput, output: &DescribeTapeRecoveryPointsOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    DescribeTapeRecoveryPointsInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Returns a description of the specified Amazon Resource Name (ARN) of virtual tapes.
    pub fn describe_tapes(
        &self,
        input: impl Into<DescribeTapesInput>,
    ) -> Result<DescribeTapesOutput, SdkError<DescribeTapesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`describe_tapes`](Client::describe_tapes)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn describe_tapes_pages(
        &self,
        input: impl Into<DescribeTapesInput>,
    ) -> Paginator<'_, DescribeTapesInput, DescribeTapesOutput, SdkError<DescribeTapesError>> {
        Paginator::new(
            input.into(),
            move |input| self.describe_tapes(input),
            |input: &DescribeTapesInput, output: &DescribeTapesOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    DescribeTapesInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Returns information about the upload buffer of a gateway.
    pub fn describe_upload_buffer(
        &self,
        input: impl Into<DescribeUploadBufferInput>,
    ) -> Result<DescribeUploadBufferOutput, SdkError<DescribeUploadBufferError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Returns a description of virtual tape library (VTL) devices for the specified tape gateway.
    pub fn describe_vtl_devices(
        &self,
        input: impl Into<DescribeVtlDevicesInput>,
    ) -> Result<DescribeVtlDevicesOutput, SdkError<DescribeVtlDevicesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`describe_vtl_devices`](Client::describe_vtl_devices)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn describe_vtl_devices_pages(
        &self,
        input: impl Into<DescribeVtlDevicesInput>,
    ) -> Paginator<
        '_,
        DescribeVtlDevicesInput,
        DescribeVtlDevicesOutput,
        SdkError<DescribeVtlDevicesError>,
    > {
        Paginator::new(
            input.into(),
            move |input| self.describe_vtl_devices(input),
            |input: &DescribeVtlDevicesInput, output: &DescribeVtlDevicesOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    DescribeVtlDevicesInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Returns information about the working storage of a gateway.
    pub fn describe_working_storage(
        &self,
        input: impl Into<DescribeWorkingStorageInput>,
    ) -> Result<DescribeWorkingStorageOutput, SdkError<DescribeWorkingStorageError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Disconnects a volume from an iSCSI connection and then detaches the volume from the specified gateway.
    pub fn detach_volume(
        &self,
        input: impl Into<DetachVolumeInput>,
    ) -> Result<DetachVolumeOutput, SdkError<DetachVolumeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Disables a tape gateway when the gateway is no longer functioning.
    pub fn disable_gateway(
        &self,
        input: impl Into<DisableGatewayInput>,
    ) -> Result<DisableGatewayOutput, SdkError<DisableGatewayError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Adds a file gateway to an Active Directory domain.
    pub fn join_domain(
        &self,
        input: impl Into<JoinDomainInput>,
    ) -> Result<JoinDomainOutput, SdkError<JoinDomainError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Lists the automatic tape creation policies for a gateway.
    pub fn list_automatic_tape_creation_policies(
        &self,
        input: impl Into<ListAutomaticTapeCreationPoliciesInput>,
    ) -> Result<
        ListAutomaticTapeCreationPoliciesOutput,
        SdkError<ListAutomaticTapeCreationPoliciesError>,
    > {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Gets a list of the file shares for a specific file gateway, or the list of file shares that belong to the calling user account.
    pub fn list_file_shares(
        &self,
        input: impl Into<ListFileSharesInput>,
    ) -> Result<ListFileSharesOutput, SdkError<ListFileSharesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`list_file_shares`](Client::list_file_shares)
    ///
    /// `NextMarker` is threaded from each response into the next request.
    pub fn list_file_shares_pages(
        &self,
        input: impl Into<ListFileSharesInput>,
    ) -> Paginator<'_, ListFileSharesInput, ListFileSharesOutput, SdkError<ListFileSharesError>> {
        Paginator::new(
            input.into(),
            move |input| self.list_file_shares(input),
            |input: &ListFileSharesInput, output: &ListFileSharesOutput| {
                next_token(input.marker.as_deref(), output.next_marker.as_deref()).map(|token| {
                    ListFileSharesInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Lists gateways owned by an AWS account in an AWS Region specified in the request.
    pub fn list_gateways(
        &self,
        input: impl Into<ListGatewaysInput>,
    ) -> Result<ListGatewaysOutput, SdkError<ListGatewaysError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`list_gateways`](Client::list_gateways)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn list_gateways_pages(
        &self,
        input: impl Into<ListGatewaysInput>,
    ) -> Paginator<'_, ListGatewaysInput, ListGatewaysOutput, SdkError<ListGatewaysError>> {
        Paginator::new(
            input.into(),
            move |input| self.list_gateways(input),
            |input: &ListGatewaysInput, output: &ListGatewaysOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    ListGatewaysInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Returns a list of the gateway's local disks.
    pub fn list_local_disks(
        &self,
        input: impl Into<ListLocalDisksInput>,
    ) -> Result<ListLocalDisksOutput, SdkError<ListLocalDisksError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Lists the tags that have been added to the specified resource.
    pub fn list_tags_for_resource(
        &self,
        input: impl Into<ListTagsForResourceInput>,
    ) -> Result<ListTagsForResourceOutput, SdkError<ListTagsForResourceError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`list_tags_for_resource`](Client::list_tags_for_resource)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn list_tags_for_resource_pages(
        &self,
        input: impl Into<ListTagsForResourceInput>,
    ) -> Paginator<
        '_,
        ListTagsForResourceInput,
        ListTagsForResourceOutput,
        SdkError<ListTagsForResourceError>,
    > {
        Paginator::new(
            input.into(),
            move |input| self.list_tags_for_resource(input),
            |input: &ListTagsForResourceInput, output: &ListTagsForResourceOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    ListTagsForResourceInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Lists virtual tapes in your virtual tape library (VTL) and your virtual tape shelf (VTS).
    pub fn list_tapes(
        &self,
        input: impl Into<ListTapesInput>,
    ) -> Result<ListTapesOutput, SdkError<ListTapesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`list_tapes`](Client::list_tapes)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn list_tapes_pages(
        &self,
        input: impl Into<ListTapesInput>,
    ) -> Paginator<'_, ListTapesInput, ListTapesOutput, SdkError<ListTapesError>> {
        Paginator::new(
            input.into(),
            move |input| self.list_tapes(input),
            |input: &ListTapesInput, output: &ListTapesOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    ListTapesInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Lists iSCSI initiators that are connected to a volume.
    pub fn list_volume_initiators(
        &self,
        input: impl Into<ListVolumeInitiatorsInput>,
    ) -> Result<ListVolumeInitiatorsOutput, SdkError<ListVolumeInitiatorsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Lists the recovery points for a specified gateway.
    pub fn list_volume_recovery_points(
        &self,
        input: impl Into<ListVolumeRecoveryPointsInput>,
    ) -> Result<ListVolumeRecoveryPointsOutput, SdkError<ListVolumeRecoveryPointsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Lists the iSCSI stored volumes of a gateway.
    pub fn list_volumes(
        &self,
        input: impl Into<ListVolumesInput>,
    ) -> Result<ListVolumesOutput, SdkError<ListVolumesError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Iterates over every page of [`list_volumes`](Client::list_volumes)
    ///
    /// `Marker` is threaded from each response into the next request.
    pub fn list_volumes_pages(
        &self,
        input: impl Into<ListVolumesInput>,
    ) -> Paginator<'_, ListVolumesInput, ListVolumesOutput, SdkError<ListVolumesError>> {
        Paginator::new(
            input.into(),
            move |input| self.list_volumes(input),
            |input: &ListVolumesInput, output: &ListVolumesOutput| {
                next_token(input.marker.as_deref(), output.marker.as_deref()).map(|token| {
                    ListVolumesInput {
                        marker: Some(token),
                        ..input.clone()
                    }
                })
            },
        )
    }

    /// Sends you notification through CloudWatch Events when all files written to your file share have been uploaded to Amazon S3. AWS Storage Gateway can send a notification through Amazon CloudWatch Events when all files written to your file share up to that point in time have been uploaded to Amazon S3. These files include files written to the file share up to the time that you make a request for notification.
    pub fn notify_when_uploaded(
        &self,
        input: impl Into<NotifyWhenUploadedInput>,
    ) -> Result<NotifyWhenUploadedOutput, SdkError<NotifyWhenUploadedError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Refreshes the cache for the specified file share.
    pub fn refresh_cache(
        &self,
        input: impl Into<RefreshCacheInput>,
    ) -> Result<RefreshCacheOutput, SdkError<RefreshCacheError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Removes one or more tags from the specified resource.
    pub fn remove_tags_from_resource(
        &self,
        input: impl Into<RemoveTagsFromResourceInput>,
    ) -> Result<RemoveTagsFromResourceOutput, SdkError<RemoveTagsFromResourceError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Resets all cache disks that have encountered an error and makes the disks available for reconfiguration as cache storage.
    pub fn reset_cache(
        &self,
        input: impl Into<ResetCacheInput>,
    ) -> Result<ResetCacheOutput, SdkError<ResetCacheError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Retrieves an archived virtual tape from the virtual tape shelf (VTS) to a tape gateway.
    pub fn retrieve_tape_archive(
        &self,
        input: impl Into<RetrieveTapeArchiveInput>,
    ) -> Result<RetrieveTapeArchiveOutput, SdkError<RetrieveTapeArchiveError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Retrieves the recovery point for the specified virtual tape.
    pub fn retrieve_tape_recovery_point(
        &self,
        input: impl Into<RetrieveTapeRecoveryPointInput>,
    ) -> Result<RetrieveTapeRecoveryPointOutput, SdkError<RetrieveTapeRecoveryPointError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Sets the password for your VM local console.
    pub fn set_local_console_password(
        &self,
        input: impl Into<SetLocalConsolePasswordInput>,
    ) -> Result<SetLocalConsolePasswordOutput, SdkError<SetLocalConsolePasswordError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Sets the password for the guest user smbguest.
    pub fn set_smb_guest_password(
        &self,
        input: impl Into<SetSmbGuestPasswordInput>,
    ) -> Result<SetSmbGuestPasswordOutput, SdkError<SetSmbGuestPasswordError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Shuts down a gateway.
    pub fn shutdown_gateway(
        &self,
        input: impl Into<ShutdownGatewayInput>,
    ) -> Result<ShutdownGatewayOutput, SdkError<ShutdownGatewayError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Start a test that verifies that the specified gateway is configured for High Availability monitoring in your host environment.
    pub fn start_availability_monitor_test(
        &self,
        input: impl Into<StartAvailabilityMonitorTestInput>,
    ) -> Result<StartAvailabilityMonitorTestOutput, SdkError<StartAvailabilityMonitorTestError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Starts a gateway that you previously shut down (see ShutdownGateway).
    pub fn start_gateway(
        &self,
        input: impl Into<StartGatewayInput>,
    ) -> Result<StartGatewayOutput, SdkError<StartGatewayError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates the automatic tape creation policy of a gateway.
    pub fn update_automatic_tape_creation_policy(
        &self,
        input: impl Into<UpdateAutomaticTapeCreationPolicyInput>,
    ) -> Result<
        UpdateAutomaticTapeCreationPolicyOutput,
        SdkError<UpdateAutomaticTapeCreationPolicyError>,
    > {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates the bandwidth rate limits of a gateway.
    pub fn update_bandwidth_rate_limit(
        &self,
        input: impl Into<UpdateBandwidthRateLimitInput>,
    ) -> Result<UpdateBandwidthRateLimitOutput, SdkError<UpdateBandwidthRateLimitError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates the Challenge-Handshake Authentication Protocol (CHAP) credentials for a specified iSCSI target.
    pub fn update_chap_credentials(
        &self,
        input: impl Into<UpdateChapCredentialsInput>,
    ) -> Result<UpdateChapCredentialsOutput, SdkError<UpdateChapCredentialsError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates a gateway's metadata, which includes the gateway's name and time zone.
    pub fn update_gateway_information(
        &self,
        input: impl Into<UpdateGatewayInformationInput>,
    ) -> Result<UpdateGatewayInformationOutput, SdkError<UpdateGatewayInformationError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates the gateway virtual machine (VM) software.
    pub fn update_gateway_software_now(
        &self,
        input: impl Into<UpdateGatewaySoftwareNowInput>,
    ) -> Result<UpdateGatewaySoftwareNowOutput, SdkError<UpdateGatewaySoftwareNowError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates a gateway's weekly maintenance start time information, including day and time of the week.
    pub fn update_maintenance_start_time(
        &self,
        input: impl Into<UpdateMaintenanceStartTimeInput>,
    ) -> Result<UpdateMaintenanceStartTimeOutput, SdkError<UpdateMaintenanceStartTimeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates a Network File System (NFS) file share.
    pub fn update_nfs_file_share(
        &self,
        input: impl Into<UpdateNfsFileShareInput>,
    ) -> Result<UpdateNfsFileShareOutput, SdkError<UpdateNfsFileShareError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates a Server Message Block (SMB) file share.
    pub fn update_smb_file_share(
        &self,
        input: impl Into<UpdateSmbFileShareInput>,
    ) -> Result<UpdateSmbFileShareOutput, SdkError<UpdateSmbFileShareError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates the SMB security strategy on a file gateway.
    pub fn update_smb_security_strategy(
        &self,
        input: impl Into<UpdateSmbSecurityStrategyInput>,
    ) -> Result<UpdateSmbSecurityStrategyOutput, SdkError<UpdateSmbSecurityStrategyError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates a snapshot schedule configured for a gateway volume.
    pub fn update_snapshot_schedule(
        &self,
        input: impl Into<UpdateSnapshotScheduleInput>,
    ) -> Result<UpdateSnapshotScheduleOutput, SdkError<UpdateSnapshotScheduleError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }

    /// Updates the type of medium changer in a tape gateway.
    pub fn update_vtl_device_type(
        &self,
        input: impl Into<UpdateVtlDeviceTypeInput>,
    ) -> Result<UpdateVtlDeviceTypeOutput, SdkError<UpdateVtlDeviceTypeError>> {
        let op = input
            .into()
            .make_operation(&self.conf)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        self.inner.call(op)
    }
}
