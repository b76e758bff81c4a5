use crate::{Tag, TagSpecification};
use ec2_types::{Timestamp, VolumeAttachmentState, VolumeState, VolumeType};

shape! {
    pub struct CreateVolumeRequest {
        availability_zone: Scalar<String> = "AvailabilityZone",
        encrypted: Scalar<bool> = "Encrypted",
        /// Required for `io1` volumes.
        iops: Scalar<i32> = "Iops",
        kms_key_id: Scalar<String> = "KmsKeyId",
        outpost_arn: Scalar<String> = "OutpostArn",
        /// Size in GiB. Required unless `SnapshotId` is given.
        size: Scalar<i32> = "Size",
        snapshot_id: Scalar<String> = "SnapshotId",
        volume_type: Scalar<VolumeType> = "VolumeType",
        dry_run: Scalar<bool> = "DryRun",
        tag_specifications: List<TagSpecification> = "TagSpecifications",
        /// Allows attaching to up to 16 Nitro instances in one zone. `io1` only.
        multi_attach_enabled: Scalar<bool> = "MultiAttachEnabled",
    }
}

shape! {
    /// An EBS volume.
    pub struct Volume {
        attachments: List<VolumeAttachment> = "Attachments",
        availability_zone: Scalar<String> = "AvailabilityZone",
        create_time: Scalar<Timestamp> = "CreateTime",
        encrypted: Scalar<bool> = "Encrypted",
        kms_key_id: Scalar<String> = "KmsKeyId",
        outpost_arn: Scalar<String> = "OutpostArn",
        size: Scalar<i32> = "Size",
        snapshot_id: Scalar<String> = "SnapshotId",
        state: Scalar<VolumeState> = "State",
        volume_id: Scalar<String> = "VolumeId",
        iops: Scalar<i32> = "Iops",
        tags: List<Tag> = "Tags",
        volume_type: Scalar<VolumeType> = "VolumeType",
        fast_restored: Scalar<bool> = "FastRestored",
        multi_attach_enabled: Scalar<bool> = "MultiAttachEnabled",
    }
}

shape! {
    pub struct VolumeAttachment {
        attach_time: Scalar<Timestamp> = "AttachTime",
        device: Scalar<String> = "Device",
        instance_id: Scalar<String> = "InstanceId",
        state: Scalar<VolumeAttachmentState> = "State",
        volume_id: Scalar<String> = "VolumeId",
        delete_on_termination: Scalar<bool> = "DeleteOnTermination",
    }
}

ec2_request!(CreateVolumeRequest => Volume, "CreateVolume", dry_run);
