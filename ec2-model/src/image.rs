use crate::{BlockDeviceMapping, Filter, ProductCode, StateReason, Tag};
use ec2_types::{
    ArchitectureValues, DeviceType, HypervisorType, ImageState, ImageTypeValues, PlatformValues,
    VirtualizationType,
};

shape! {
    pub struct DescribeImagesRequest {
        /// Account IDs (or `self`, `all`) with explicit launch permission.
        executable_users: List<String> = "ExecutableUsers",
        filters: List<Filter> = "Filters",
        image_ids: List<String> = "ImageIds",
        /// Account IDs or `self`, `amazon`, `aws-marketplace`.
        owners: List<String> = "Owners",
        dry_run: Scalar<bool> = "DryRun",
    }
}

shape! {
    pub struct DescribeImagesResult {
        images: List<Image> = "Images",
    }
}

shape! {
    /// An Amazon Machine Image.
    pub struct Image {
        architecture: Scalar<ArchitectureValues> = "Architecture",
        /// ISO 8601 string as returned by the service.
        creation_date: Scalar<String> = "CreationDate",
        image_id: Scalar<String> = "ImageId",
        image_location: Scalar<String> = "ImageLocation",
        image_type: Scalar<ImageTypeValues> = "ImageType",
        /// True when the launch permissions are public.
        public: Scalar<bool> = "Public",
        kernel_id: Scalar<String> = "KernelId",
        owner_id: Scalar<String> = "OwnerId",
        platform: Scalar<PlatformValues> = "Platform",
        platform_details: Scalar<String> = "PlatformDetails",
        usage_operation: Scalar<String> = "UsageOperation",
        product_codes: List<ProductCode> = "ProductCodes",
        ramdisk_id: Scalar<String> = "RamdiskId",
        state: Scalar<ImageState> = "State",
        block_device_mappings: List<BlockDeviceMapping> = "BlockDeviceMappings",
        description: Scalar<String> = "Description",
        ena_support: Scalar<bool> = "EnaSupport",
        hypervisor: Scalar<HypervisorType> = "Hypervisor",
        image_owner_alias: Scalar<String> = "ImageOwnerAlias",
        name: Scalar<String> = "Name",
        root_device_name: Scalar<String> = "RootDeviceName",
        root_device_type: Scalar<DeviceType> = "RootDeviceType",
        sriov_net_support: Scalar<String> = "SriovNetSupport",
        state_reason: Scalar<StateReason> = "StateReason",
        tags: List<Tag> = "Tags",
        virtualization_type: Scalar<VirtualizationType> = "VirtualizationType",
    }
}

ec2_request!(DescribeImagesRequest => DescribeImagesResult, "DescribeImages", dry_run);
