ec2_enum! {
    /// Operating system a Capacity Reservation is for.
    pub enum CapacityReservationInstancePlatform {
        LinuxUnix = "Linux/UNIX",
        RedHatEnterpriseLinux = "Red Hat Enterprise Linux",
        SuseLinux = "SUSE Linux",
        Windows = "Windows",
        WindowsWithSqlServer = "Windows with SQL Server",
        WindowsWithSqlServerEnterprise = "Windows with SQL Server Enterprise",
        WindowsWithSqlServerStandard = "Windows with SQL Server Standard",
        WindowsWithSqlServerWeb = "Windows with SQL Server Web",
        LinuxWithSqlServerStandard = "Linux with SQL Server Standard",
        LinuxWithSqlServerWeb = "Linux with SQL Server Web",
        LinuxWithSqlServerEnterprise = "Linux with SQL Server Enterprise",
    }
}

ec2_enum! {
    /// Capacity Reservations support a subset of instance tenancies.
    pub enum CapacityReservationTenancy {
        Default = "default",
        Dedicated = "dedicated",
    }
}

ec2_enum! {
    pub enum CapacityReservationState {
        Active = "active",
        Expired = "expired",
        Cancelled = "cancelled",
        Pending = "pending",
        Failed = "failed",
    }
}

ec2_enum! {
    /// Whether a Capacity Reservation ends on its own.
    pub enum EndDateType {
        /// Active until explicitly cancelled.
        Unlimited = "unlimited",
        /// Expires at `EndDate`.
        Limited = "limited",
    }
}

ec2_enum! {
    /// Which instances may consume a Capacity Reservation.
    pub enum InstanceMatchCriteria {
        /// Any instance with matching attributes.
        Open = "open",
        /// Only instances that target the reservation explicitly.
        Targeted = "targeted",
    }
}
