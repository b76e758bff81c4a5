//! Instances, reservations and the RunInstances / DescribeInstances actions.

use crate::{
    BlockDeviceMapping, Filter, GroupIdentifier, Placement, ProductCode, StateReason, Tag,
    TagSpecification,
};
use ec2_types::{
    ArchitectureValues, DeviceType, HypervisorType, InstanceLifecycleType, InstanceStateName,
    InstanceType, MonitoringState, PlatformValues, ShutdownBehavior, Timestamp,
    VirtualizationType,
};

shape! {
    /// A running or recently terminated instance.
    pub struct Instance {
        /// Index of this instance within its launch group.
        ami_launch_index: Scalar<i32> = "AmiLaunchIndex",
        image_id: Scalar<String> = "ImageId",
        instance_id: Scalar<String> = "InstanceId",
        instance_type: Scalar<InstanceType> = "InstanceType",
        kernel_id: Scalar<String> = "KernelId",
        key_name: Scalar<String> = "KeyName",
        launch_time: Scalar<Timestamp> = "LaunchTime",
        monitoring: Scalar<Monitoring> = "Monitoring",
        placement: Scalar<Placement> = "Placement",
        /// `Windows` for Windows instances, absent otherwise.
        platform: Scalar<PlatformValues> = "Platform",
        private_dns_name: Scalar<String> = "PrivateDnsName",
        private_ip_address: Scalar<String> = "PrivateIpAddress",
        product_codes: List<ProductCode> = "ProductCodes",
        public_dns_name: Scalar<String> = "PublicDnsName",
        public_ip_address: Scalar<String> = "PublicIpAddress",
        ramdisk_id: Scalar<String> = "RamdiskId",
        state: Scalar<InstanceState> = "State",
        state_transition_reason: Scalar<String> = "StateTransitionReason",
        subnet_id: Scalar<String> = "SubnetId",
        vpc_id: Scalar<String> = "VpcId",
        architecture: Scalar<ArchitectureValues> = "Architecture",
        block_device_mappings: List<BlockDeviceMapping> = "BlockDeviceMappings",
        client_token: Scalar<String> = "ClientToken",
        ebs_optimized: Scalar<bool> = "EbsOptimized",
        ena_support: Scalar<bool> = "EnaSupport",
        hypervisor: Scalar<HypervisorType> = "Hypervisor",
        /// `spot` or `scheduled`; absent for on-demand instances.
        instance_lifecycle: Scalar<InstanceLifecycleType> = "InstanceLifecycle",
        outpost_arn: Scalar<String> = "OutpostArn",
        root_device_name: Scalar<String> = "RootDeviceName",
        root_device_type: Scalar<DeviceType> = "RootDeviceType",
        security_groups: List<GroupIdentifier> = "SecurityGroups",
        source_dest_check: Scalar<bool> = "SourceDestCheck",
        spot_instance_request_id: Scalar<String> = "SpotInstanceRequestId",
        sriov_net_support: Scalar<String> = "SriovNetSupport",
        state_reason: Scalar<StateReason> = "StateReason",
        tags: List<Tag> = "Tags",
        virtualization_type: Scalar<VirtualizationType> = "VirtualizationType",
        capacity_reservation_id: Scalar<String> = "CapacityReservationId",
    }
}

shape! {
    /// Current state of an instance.
    pub struct InstanceState {
        /// Low byte is the state, high byte is internal. E.g. 16 = running.
        code: Scalar<i32> = "Code",
        name: Scalar<InstanceStateName> = "Name",
    }
}

shape! {
    /// Whether detailed monitoring is enabled.
    pub struct Monitoring {
        state: Scalar<MonitoringState> = "State",
    }
}

shape! {
    /// Detailed monitoring toggle passed to RunInstances.
    pub struct RunInstancesMonitoringEnabled {
        enabled: Scalar<bool> = "Enabled",
    }
}

shape! {
    /// Instances launched together by a single RunInstances call.
    pub struct Reservation {
        groups: List<GroupIdentifier> = "Groups",
        instances: List<Instance> = "Instances",
        owner_id: Scalar<String> = "OwnerId",
        /// Set when a service (e.g. Auto Scaling) launched on the owner's behalf.
        requester_id: Scalar<String> = "RequesterId",
        reservation_id: Scalar<String> = "ReservationId",
    }
}

shape! {
    pub struct DescribeInstancesRequest {
        filters: List<Filter> = "Filters",
        instance_ids: List<String> = "InstanceIds",
        dry_run: Scalar<bool> = "DryRun",
        /// Page size, 5 to 1000. Cannot be combined with `InstanceIds`.
        max_results: Scalar<i32> = "MaxResults",
        next_token: Scalar<String> = "NextToken",
    }
}

shape! {
    pub struct DescribeInstancesResult {
        reservations: List<Reservation> = "Reservations",
        /// Absent on the last page.
        next_token: Scalar<String> = "NextToken",
    }
}

shape! {
    /// Launches `MinCount..=MaxCount` instances of an AMI.
    pub struct RunInstancesRequest {
        block_device_mappings: List<BlockDeviceMapping> = "BlockDeviceMappings",
        image_id: Scalar<String> = "ImageId",
        instance_type: Scalar<InstanceType> = "InstanceType",
        kernel_id: Scalar<String> = "KernelId",
        key_name: Scalar<String> = "KeyName",
        max_count: Scalar<i32> = "MaxCount",
        min_count: Scalar<i32> = "MinCount",
        monitoring: Scalar<RunInstancesMonitoringEnabled> = "Monitoring",
        placement: Scalar<Placement> = "Placement",
        ramdisk_id: Scalar<String> = "RamdiskId",
        security_group_ids: List<String> = "SecurityGroupIds",
        /// Group names, default VPC only.
        security_groups: List<String> = "SecurityGroups",
        subnet_id: Scalar<String> = "SubnetId",
        /// Base64-encoded user data.
        user_data: Scalar<String> = "UserData",
        additional_info: Scalar<String> = "AdditionalInfo",
        /// Idempotency token, up to 64 ASCII characters.
        client_token: Scalar<String> = "ClientToken",
        disable_api_termination: Scalar<bool> = "DisableApiTermination",
        dry_run: Scalar<bool> = "DryRun",
        ebs_optimized: Scalar<bool> = "EbsOptimized",
        instance_initiated_shutdown_behavior: Scalar<ShutdownBehavior> = "InstanceInitiatedShutdownBehavior",
        private_ip_address: Scalar<String> = "PrivateIpAddress",
        tag_specifications: List<TagSpecification> = "TagSpecifications",
    }
}

ec2_request!(DescribeInstancesRequest => DescribeInstancesResult, "DescribeInstances", dry_run);
ec2_request!(RunInstancesRequest => Reservation, "RunInstances", dry_run, idempotent);
