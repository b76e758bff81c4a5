//! Closed-set enums, grouped by the part of the API that uses them.

mod capacity;
mod image;
mod instance;
mod network;
mod placement;
mod status;
mod volume;

pub use capacity::{
    CapacityReservationInstancePlatform, CapacityReservationState, CapacityReservationTenancy,
    EndDateType, InstanceMatchCriteria,
};
pub use image::{ImageState, ImageTypeValues};
pub use instance::{
    ArchitectureValues, DeviceType, HypervisorType, InstanceLifecycleType, InstanceStateName,
    InstanceType, MonitoringState, PlatformValues, ProductCodeValues, ShutdownBehavior,
    VirtualizationType,
};
pub use network::{FlowLogsResourceType, LogDestinationType, ResourceType, TrafficType};
pub use placement::{PlacementGroupState, PlacementStrategy, Tenancy};
pub use status::{EventCode, StatusName, StatusType, SummaryStatus};
pub use volume::{VolumeAttachmentState, VolumeState, VolumeType};
