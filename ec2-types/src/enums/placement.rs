ec2_enum! {
    /// How instances in a placement group are laid out on hardware.
    pub enum PlacementStrategy {
        /// Packed close together in one Availability Zone.
        Cluster = "cluster",
        /// Each instance on distinct hardware.
        Spread = "spread",
        /// Spread across logical partitions that share no racks.
        Partition = "partition",
    }
}

ec2_enum! {
    /// Lifecycle state of a placement group.
    pub enum PlacementGroupState {
        Pending = "pending",
        Available = "available",
        Deleting = "deleting",
        Deleted = "deleted",
    }
}

ec2_enum! {
    /// Hardware tenancy of an instance.
    pub enum Tenancy {
        Default = "default",
        Dedicated = "dedicated",
        Host = "host",
    }
}
