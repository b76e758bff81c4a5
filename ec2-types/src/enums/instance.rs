ec2_enum! {
    /// Lifecycle state of an instance, as reported in `InstanceState.Name`.
    pub enum InstanceStateName {
        Pending = "pending",
        Running = "running",
        ShuttingDown = "shutting-down",
        Terminated = "terminated",
        Stopping = "stopping",
        Stopped = "stopped",
    }
}

ec2_enum! {
    /// Detailed monitoring state.
    pub enum MonitoringState {
        Disabled = "disabled",
        Disabling = "disabling",
        Enabled = "enabled",
        Pending = "pending",
    }
}

ec2_enum! {
    /// Instance type.
    ///
    /// The service adds types faster than any client ships; types not listed
    /// here round-trip through `Other`.
    pub enum InstanceType {
        T1Micro = "t1.micro",
        T2Nano = "t2.nano",
        T2Micro = "t2.micro",
        T2Small = "t2.small",
        T2Medium = "t2.medium",
        T2Large = "t2.large",
        T3Nano = "t3.nano",
        T3Micro = "t3.micro",
        T3Small = "t3.small",
        T3Medium = "t3.medium",
        T3Large = "t3.large",
        M4Large = "m4.large",
        M4Xlarge = "m4.xlarge",
        M5Large = "m5.large",
        M5Xlarge = "m5.xlarge",
        M52xlarge = "m5.2xlarge",
        M54xlarge = "m5.4xlarge",
        M5Metal = "m5.metal",
        C5Large = "c5.large",
        C5Xlarge = "c5.xlarge",
        C52xlarge = "c5.2xlarge",
        C54xlarge = "c5.4xlarge",
        C5nXlarge = "c5n.xlarge",
        R5Large = "r5.large",
        R5Xlarge = "r5.xlarge",
        I3Large = "i3.large",
        I3Metal = "i3.metal",
        Z1dLarge = "z1d.large",
        A1Medium = "a1.medium",
        A1Large = "a1.large",
        A1Metal = "a1.metal",
        P32xlarge = "p3.2xlarge",
        G4dnXlarge = "g4dn.xlarge",
    }
}

ec2_enum! {
    /// CPU architecture of an instance or image.
    pub enum ArchitectureValues {
        I386 = "i386",
        X8664 = "x86_64",
        Arm64 = "arm64",
    }
}

ec2_enum! {
    /// Root device type of an instance or image.
    pub enum DeviceType {
        Ebs = "ebs",
        InstanceStore = "instance-store",
    }
}

ec2_enum! {
    pub enum VirtualizationType {
        Hvm = "hvm",
        Paravirtual = "paravirtual",
    }
}

ec2_enum! {
    pub enum HypervisorType {
        Ovm = "ovm",
        Xen = "xen",
    }
}

ec2_enum! {
    /// Platform marker; absent for Linux.
    pub enum PlatformValues {
        Windows = "Windows",
    }
}

ec2_enum! {
    /// Whether an instance is a Spot or Scheduled instance.
    pub enum InstanceLifecycleType {
        Spot = "spot",
        Scheduled = "scheduled",
    }
}

ec2_enum! {
    /// What happens when an instance shuts itself down.
    pub enum ShutdownBehavior {
        Stop = "stop",
        Terminate = "terminate",
    }
}

ec2_enum! {
    pub enum ProductCodeValues {
        Devpay = "devpay",
        Marketplace = "marketplace",
    }
}
