ec2_enum! {
    /// Resource kind a `TagSpecification` applies to.
    pub enum ResourceType {
        CapacityReservation = "capacity-reservation",
        Image = "image",
        Instance = "instance",
        LaunchTemplate = "launch-template",
        NetworkInterface = "network-interface",
        PlacementGroup = "placement-group",
        SecurityGroup = "security-group",
        Snapshot = "snapshot",
        SpotInstancesRequest = "spot-instances-request",
        Subnet = "subnet",
        Volume = "volume",
        Vpc = "vpc",
        VpcFlowLog = "vpc-flow-log",
    }
}

ec2_enum! {
    /// Which packets a flow log records.
    pub enum TrafficType {
        Accept = "ACCEPT",
        Reject = "REJECT",
        All = "ALL",
    }
}

ec2_enum! {
    /// What a flow log is attached to.
    pub enum FlowLogsResourceType {
        Vpc = "VPC",
        Subnet = "Subnet",
        NetworkInterface = "NetworkInterface",
    }
}

ec2_enum! {
    pub enum LogDestinationType {
        CloudWatchLogs = "cloud-watch-logs",
        S3 = "s3",
    }
}
