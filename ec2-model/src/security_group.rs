use crate::{Filter, Tag};

shape! {
    /// A security group and its rules.
    pub struct SecurityGroup {
        description: Scalar<String> = "Description",
        group_name: Scalar<String> = "GroupName",
        /// Inbound rules.
        ip_permissions: List<IpPermission> = "IpPermissions",
        owner_id: Scalar<String> = "OwnerId",
        group_id: Scalar<String> = "GroupId",
        /// Outbound rules.
        ip_permissions_egress: List<IpPermission> = "IpPermissionsEgress",
        tags: List<Tag> = "Tags",
        vpc_id: Scalar<String> = "VpcId",
    }
}

shape! {
    /// One rule of a security group.
    pub struct IpPermission {
        /// Start of the port range, or ICMP type. `-1` means all.
        from_port: Scalar<i32> = "FromPort",
        /// `tcp`, `udp`, `icmp`, `icmpv6`, a protocol number, or `-1` for all.
        ip_protocol: Scalar<String> = "IpProtocol",
        ip_ranges: List<IpRange> = "IpRanges",
        ipv6_ranges: List<Ipv6Range> = "Ipv6Ranges",
        prefix_list_ids: List<PrefixListId> = "PrefixListIds",
        to_port: Scalar<i32> = "ToPort",
        user_id_group_pairs: List<UserIdGroupPair> = "UserIdGroupPairs",
    }
}

shape! {
    pub struct IpRange {
        cidr_ip: Scalar<String> = "CidrIp",
        description: Scalar<String> = "Description",
    }
}

shape! {
    pub struct Ipv6Range {
        cidr_ipv6: Scalar<String> = "CidrIpv6",
        description: Scalar<String> = "Description",
    }
}

shape! {
    pub struct PrefixListId {
        description: Scalar<String> = "Description",
        prefix_list_id: Scalar<String> = "PrefixListId",
    }
}

shape! {
    /// A security group referenced from a rule, possibly in a peered VPC.
    pub struct UserIdGroupPair {
        description: Scalar<String> = "Description",
        group_id: Scalar<String> = "GroupId",
        group_name: Scalar<String> = "GroupName",
        peering_status: Scalar<String> = "PeeringStatus",
        user_id: Scalar<String> = "UserId",
        vpc_id: Scalar<String> = "VpcId",
        vpc_peering_connection_id: Scalar<String> = "VpcPeeringConnectionId",
    }
}

shape! {
    pub struct DescribeSecurityGroupsRequest {
        filters: List<Filter> = "Filters",
        group_ids: List<String> = "GroupIds",
        /// Default VPC only; use `group-name` filters elsewhere.
        group_names: List<String> = "GroupNames",
        dry_run: Scalar<bool> = "DryRun",
        next_token: Scalar<String> = "NextToken",
        max_results: Scalar<i32> = "MaxResults",
    }
}

shape! {
    pub struct DescribeSecurityGroupsResult {
        security_groups: List<SecurityGroup> = "SecurityGroups",
        next_token: Scalar<String> = "NextToken",
    }
}

ec2_request!(DescribeSecurityGroupsRequest => DescribeSecurityGroupsResult, "DescribeSecurityGroups", dry_run);
