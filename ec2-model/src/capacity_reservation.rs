use crate::{Tag, TagSpecification};
use ec2_types::{
    CapacityReservationInstancePlatform, CapacityReservationState, CapacityReservationTenancy,
    EndDateType, InstanceMatchCriteria, InstanceType, Timestamp,
};

shape! {
    pub struct CreateCapacityReservationRequest {
        /// Idempotency token, up to 64 ASCII characters.
        client_token: Scalar<String> = "ClientToken",
        instance_type: Scalar<InstanceType> = "InstanceType",
        instance_platform: Scalar<CapacityReservationInstancePlatform> = "InstancePlatform",
        availability_zone: Scalar<String> = "AvailabilityZone",
        availability_zone_id: Scalar<String> = "AvailabilityZoneId",
        tenancy: Scalar<CapacityReservationTenancy> = "Tenancy",
        instance_count: Scalar<i32> = "InstanceCount",
        ebs_optimized: Scalar<bool> = "EbsOptimized",
        ephemeral_storage: Scalar<bool> = "EphemeralStorage",
        /// Required when `EndDateType` is `limited`, omitted otherwise.
        end_date: Scalar<Timestamp> = "EndDate",
        end_date_type: Scalar<EndDateType> = "EndDateType",
        instance_match_criteria: Scalar<InstanceMatchCriteria> = "InstanceMatchCriteria",
        tag_specifications: List<TagSpecification> = "TagSpecifications",
        dry_run: Scalar<bool> = "DryRun",
    }
}

shape! {
    pub struct CreateCapacityReservationResult {
        capacity_reservation: Scalar<CapacityReservation> = "CapacityReservation",
    }
}

shape! {
    /// Reserved capacity for one instance type in one zone.
    pub struct CapacityReservation {
        capacity_reservation_id: Scalar<String> = "CapacityReservationId",
        owner_id: Scalar<String> = "OwnerId",
        capacity_reservation_arn: Scalar<String> = "CapacityReservationArn",
        availability_zone_id: Scalar<String> = "AvailabilityZoneId",
        instance_type: Scalar<InstanceType> = "InstanceType",
        instance_platform: Scalar<CapacityReservationInstancePlatform> = "InstancePlatform",
        availability_zone: Scalar<String> = "AvailabilityZone",
        tenancy: Scalar<CapacityReservationTenancy> = "Tenancy",
        total_instance_count: Scalar<i32> = "TotalInstanceCount",
        available_instance_count: Scalar<i32> = "AvailableInstanceCount",
        ebs_optimized: Scalar<bool> = "EbsOptimized",
        ephemeral_storage: Scalar<bool> = "EphemeralStorage",
        state: Scalar<CapacityReservationState> = "State",
        end_date: Scalar<Timestamp> = "EndDate",
        end_date_type: Scalar<EndDateType> = "EndDateType",
        instance_match_criteria: Scalar<InstanceMatchCriteria> = "InstanceMatchCriteria",
        create_date: Scalar<Timestamp> = "CreateDate",
        tags: List<Tag> = "Tags",
    }
}

ec2_request!(
    CreateCapacityReservationRequest => CreateCapacityReservationResult,
    "CreateCapacityReservation",
    dry_run,
    idempotent
);
