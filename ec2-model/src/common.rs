//! Structures shared by many actions: tags, filters, block devices.

use ec2_types::{Double, ProductCodeValues, ResourceType, VolumeType};

shape! {
    /// A key/value label attached to a resource.
    pub struct Tag {
        /// Tag key, at most 127 Unicode characters. May not begin with `aws:`.
        key: Scalar<String> = "Key",
        /// Tag value, at most 255 Unicode characters.
        value: Scalar<String> = "Value",
    }
}

impl Tag {
    /// Shorthand for `Tag::new().with_key(key).with_value(value)`.
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}

shape! {
    /// Tags to apply to a resource while it is being created.
    pub struct TagSpecification {
        /// Type of resource to tag.
        resource_type: Scalar<ResourceType> = "ResourceType",
        tags: List<Tag> = "Tags",
    }
}

shape! {
    /// A name and values used to narrow down a `Describe*` result.
    ///
    /// Values within a filter are OR-ed; separate filters are AND-ed.
    pub struct Filter {
        name: Scalar<String> = "Name",
        values: List<String> = "Values",
    }
}

shape! {
    /// Why a resource last changed state.
    pub struct StateReason {
        /// Reason code, e.g. `Server.SpotInstanceTermination`.
        code: Scalar<String> = "Code",
        message: Scalar<String> = "Message",
    }
}

shape! {
    /// A security group reference.
    pub struct GroupIdentifier {
        group_name: Scalar<String> = "GroupName",
        group_id: Scalar<String> = "GroupId",
    }
}

shape! {
    /// A product code attached to an instance or AMI.
    pub struct ProductCode {
        product_code_id: Scalar<String> = "ProductCodeId",
        product_code_type: Scalar<ProductCodeValues> = "ProductCodeType",
    }
}

shape! {
    /// EBS parameters of a block device mapping.
    pub struct EbsBlockDevice {
        delete_on_termination: Scalar<bool> = "DeleteOnTermination",
        /// Provisioned IOPS. Required for `io1`, ignored otherwise.
        iops: Scalar<i32> = "Iops",
        snapshot_id: Scalar<String> = "SnapshotId",
        /// Size in GiB.
        volume_size: Scalar<i32> = "VolumeSize",
        volume_type: Scalar<VolumeType> = "VolumeType",
        kms_key_id: Scalar<String> = "KmsKeyId",
        /// Throughput in MiB/s.
        throughput: Scalar<i32> = "Throughput",
        encrypted: Scalar<bool> = "Encrypted",
    }
}

shape! {
    /// A device exposed to an instance at launch.
    pub struct BlockDeviceMapping {
        /// Device name, e.g. `/dev/sdh` or `xvdh`.
        device_name: Scalar<String> = "DeviceName",
        /// Instance store volume, e.g. `ephemeral0`.
        virtual_name: Scalar<String> = "VirtualName",
        ebs: Scalar<EbsBlockDevice> = "Ebs",
        /// Suppresses the device included in the AMI's mapping.
        no_device: Scalar<String> = "NoDevice",
    }
}

shape! {
    /// Hourly price and currency of a reservation, as reported by the service.
    pub struct PriceSchedule {
        price: Scalar<Double> = "Price",
        currency_code: Scalar<String> = "CurrencyCode",
        term: Scalar<i64> = "Term",
        active: Scalar<bool> = "Active",
    }
}
