//! Placement groups and instance placement.

use crate::{Filter, Tag, TagSpecification};
use ec2_types::{PlacementGroupState, PlacementStrategy, Tenancy};

shape! {
    pub struct CreatePlacementGroupRequest {
        /// Group name, unique within the account. Up to 255 ASCII characters.
        group_name: Scalar<String> = "GroupName",
        strategy: Scalar<PlacementStrategy> = "Strategy",
        /// Number of partitions. Valid only with the `partition` strategy.
        partition_count: Scalar<i32> = "PartitionCount",
        tag_specifications: List<TagSpecification> = "TagSpecifications",
        /// Checks permissions without creating the group.
        dry_run: Scalar<bool> = "DryRun",
    }
}

shape! {
    pub struct CreatePlacementGroupResult {
        placement_group: Scalar<PlacementGroup> = "PlacementGroup",
    }
}

shape! {
    /// A logical grouping of instances that shapes how they share hardware.
    pub struct PlacementGroup {
        group_name: Scalar<String> = "GroupName",
        state: Scalar<PlacementGroupState> = "State",
        strategy: Scalar<PlacementStrategy> = "Strategy",
        partition_count: Scalar<i32> = "PartitionCount",
        group_id: Scalar<String> = "GroupId",
        tags: List<Tag> = "Tags",
    }
}

shape! {
    /// Where an instance runs.
    pub struct Placement {
        availability_zone: Scalar<String> = "AvailabilityZone",
        /// Affinity setting for a Dedicated Host.
        affinity: Scalar<String> = "Affinity",
        group_name: Scalar<String> = "GroupName",
        /// Partition number, only for `partition` groups.
        partition_number: Scalar<i32> = "PartitionNumber",
        host_id: Scalar<String> = "HostId",
        tenancy: Scalar<Tenancy> = "Tenancy",
        spread_domain: Scalar<String> = "SpreadDomain",
        host_resource_group_arn: Scalar<String> = "HostResourceGroupArn",
    }
}

shape! {
    pub struct DescribePlacementGroupsRequest {
        /// Filters such as `group-name`, `state` and `strategy`.
        filters: List<Filter> = "Filters",
        dry_run: Scalar<bool> = "DryRun",
        group_names: List<String> = "GroupNames",
        group_ids: List<String> = "GroupIds",
    }
}

shape! {
    pub struct DescribePlacementGroupsResult {
        placement_groups: List<PlacementGroup> = "PlacementGroups",
    }
}

shape! {
    pub struct DeletePlacementGroupRequest {
        dry_run: Scalar<bool> = "DryRun",
        group_name: Scalar<String> = "GroupName",
    }
}

shape! {
    /// DeletePlacementGroup returns no members.
    pub struct DeletePlacementGroupResult {}
}

ec2_request!(CreatePlacementGroupRequest => CreatePlacementGroupResult, "CreatePlacementGroup", dry_run);
ec2_request!(DescribePlacementGroupsRequest => DescribePlacementGroupsResult, "DescribePlacementGroups", dry_run);
ec2_request!(DeletePlacementGroupRequest => DeletePlacementGroupResult, "DeletePlacementGroup", dry_run);
