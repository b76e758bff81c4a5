use crate::TagSpecification;
use ec2_types::{FlowLogsResourceType, LogDestinationType, TrafficType};

shape! {
    /// Publishes IP traffic logs of VPCs, subnets or network interfaces.
    pub struct CreateFlowLogsRequest {
        dry_run: Scalar<bool> = "DryRun",
        client_token: Scalar<String> = "ClientToken",
        /// IAM role that may publish to CloudWatch Logs.
        deliver_logs_permission_arn: Scalar<String> = "DeliverLogsPermissionArn",
        log_group_name: Scalar<String> = "LogGroupName",
        resource_ids: List<String> = "ResourceIds",
        resource_type: Scalar<FlowLogsResourceType> = "ResourceType",
        traffic_type: Scalar<TrafficType> = "TrafficType",
        log_destination_type: Scalar<LogDestinationType> = "LogDestinationType",
        /// Log group or S3 bucket ARN.
        log_destination: Scalar<String> = "LogDestination",
        /// Space-separated `${field}` list.
        log_format: Scalar<String> = "LogFormat",
        tag_specifications: List<TagSpecification> = "TagSpecifications",
        /// Seconds, 60 or 600.
        max_aggregation_interval: Scalar<i32> = "MaxAggregationInterval",
    }
}

shape! {
    pub struct CreateFlowLogsResult {
        client_token: Scalar<String> = "ClientToken",
        flow_log_ids: List<String> = "FlowLogIds",
        /// Resources the flow log could not be created for.
        unsuccessful: List<UnsuccessfulItem> = "Unsuccessful",
    }
}

shape! {
    pub struct UnsuccessfulItem {
        error: Scalar<UnsuccessfulItemError> = "Error",
        resource_id: Scalar<String> = "ResourceId",
    }
}

shape! {
    pub struct UnsuccessfulItemError {
        code: Scalar<String> = "Code",
        message: Scalar<String> = "Message",
    }
}

ec2_request!(CreateFlowLogsRequest => CreateFlowLogsResult, "CreateFlowLogs", dry_run, idempotent);
