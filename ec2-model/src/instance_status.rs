use crate::{Filter, InstanceState};
use ec2_types::{EventCode, StatusName, StatusType, SummaryStatus, Timestamp};

shape! {
    /// Status checks and scheduled events of one instance.
    pub struct InstanceStatus {
        availability_zone: Scalar<String> = "AvailabilityZone",
        outpost_arn: Scalar<String> = "OutpostArn",
        events: List<InstanceStatusEvent> = "Events",
        instance_id: Scalar<String> = "InstanceId",
        instance_state: Scalar<InstanceState> = "InstanceState",
        /// Instance-level checks (software and network configuration).
        instance_status: Scalar<InstanceStatusSummary> = "InstanceStatus",
        /// Host-level checks (hardware and AWS network).
        system_status: Scalar<InstanceStatusSummary> = "SystemStatus",
    }
}

shape! {
    pub struct InstanceStatusSummary {
        details: List<InstanceStatusDetails> = "Details",
        status: Scalar<SummaryStatus> = "Status",
    }
}

shape! {
    pub struct InstanceStatusDetails {
        /// When the check started failing. Absent while passing.
        impaired_since: Scalar<Timestamp> = "ImpairedSince",
        name: Scalar<StatusName> = "Name",
        status: Scalar<StatusType> = "Status",
    }
}

shape! {
    /// A scheduled maintenance event.
    pub struct InstanceStatusEvent {
        instance_event_id: Scalar<String> = "InstanceEventId",
        code: Scalar<EventCode> = "Code",
        /// Prefixed with `[Completed]` or `[Canceled]` once finished.
        description: Scalar<String> = "Description",
        not_after: Scalar<Timestamp> = "NotAfter",
        not_before: Scalar<Timestamp> = "NotBefore",
        not_before_deadline: Scalar<Timestamp> = "NotBeforeDeadline",
    }
}

shape! {
    pub struct DescribeInstanceStatusRequest {
        filters: List<Filter> = "Filters",
        instance_ids: List<String> = "InstanceIds",
        max_results: Scalar<i32> = "MaxResults",
        next_token: Scalar<String> = "NextToken",
        dry_run: Scalar<bool> = "DryRun",
        /// Include stopped instances. Defaults to running only.
        include_all_instances: Scalar<bool> = "IncludeAllInstances",
    }
}

shape! {
    pub struct DescribeInstanceStatusResult {
        instance_statuses: List<InstanceStatus> = "InstanceStatuses",
        next_token: Scalar<String> = "NextToken",
    }
}

ec2_request!(DescribeInstanceStatusRequest => DescribeInstanceStatusResult, "DescribeInstanceStatus", dry_run);
