ec2_enum! {
    /// Overall result of an instance or system status check.
    pub enum SummaryStatus {
        Ok = "ok",
        Impaired = "impaired",
        InsufficientData = "insufficient-data",
        NotApplicable = "not-applicable",
        Initializing = "initializing",
    }
}

ec2_enum! {
    /// Name of an individual status check.
    pub enum StatusName {
        Reachability = "reachability",
    }
}

ec2_enum! {
    /// Result of an individual status check.
    pub enum StatusType {
        Passed = "passed",
        Failed = "failed",
        InsufficientData = "insufficient-data",
        Initializing = "initializing",
    }
}

ec2_enum! {
    /// Kind of scheduled event affecting an instance.
    pub enum EventCode {
        InstanceReboot = "instance-reboot",
        SystemReboot = "system-reboot",
        SystemMaintenance = "system-maintenance",
        InstanceRetirement = "instance-retirement",
        InstanceStop = "instance-stop",
    }
}
