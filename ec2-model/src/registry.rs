//! Name-based dispatch over every shipped shape.
//!
//! Tools that only know a shape by name (the `ec2-inspect` CLI, fixtures)
//! go through here instead of matching on types themselves.

use crate::error::{ModelError, Result};
use crate::*;
use serde::Serialize;

/// A shape parsed from JSON and rendered back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub shape: &'static str,
    /// The `{Name: value,...}` diagnostic form.
    pub display: String,
    /// Wire names of the members present in the input.
    pub present: Vec<&'static str>,
    /// Canonical JSON: wire names, declaration order, absent members dropped.
    pub json: String,
}

/// What a request shape is sent as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
    pub action: &'static str,
    pub response: &'static str,
}

struct Entry {
    name: &'static str,
    schema: fn() -> ShapeSchema,
    render: fn(&str) -> Result<Rendered>,
    request: Option<RequestEntry>,
}

struct RequestEntry {
    info: RequestInfo,
    dry_run: fn(&str) -> Result<String>,
}

fn render<S: Shape>(json: &str) -> Result<Rendered> {
    let value: S = serde_json::from_str(json)?;
    let present = value.present_members();
    tracing::debug!(shape = S::NAME, present = present.len(), "parsed shape");
    Ok(Rendered {
        shape: S::NAME,
        display: value.to_string(),
        present,
        json: serde_json::to_string_pretty(&value)?,
    })
}

fn dry_run<R: DryRunSupported>(json: &str) -> Result<String> {
    let request: R = serde_json::from_str(json)?;
    if request.is_dry_run() {
        tracing::debug!(action = R::ACTION, "request already marked DryRun");
    }
    Ok(serde_json::to_string_pretty(&request.dry_run_request())?)
}

macro_rules! registry {
    (
        requests { $($request:ident),* $(,)? }
        shapes { $($shape:ident),* $(,)? }
    ) => {
        static ENTRIES: &[Entry] = &[
            $(
                Entry {
                    name: <$request as Shape>::NAME,
                    schema: <$request as Shape>::schema,
                    render: render::<$request>,
                    request: Some(RequestEntry {
                        info: RequestInfo {
                            action: <$request as Ec2Request>::ACTION,
                            response: <<$request as Ec2Request>::Response as Shape>::NAME,
                        },
                        dry_run: dry_run::<$request>,
                    }),
                },
            )*
            $(
                Entry {
                    name: <$shape as Shape>::NAME,
                    schema: <$shape as Shape>::schema,
                    render: render::<$shape>,
                    request: None,
                },
            )*
        ];

        /// Every shipped shape, requests first, each group in alphabetical order.
        pub const SHAPE_NAMES: &[&str] = &[
            $( stringify!($request), )*
            $( stringify!($shape), )*
        ];
    };
}

registry! {
    requests {
        CreateCapacityReservationRequest,
        CreateFlowLogsRequest,
        CreatePlacementGroupRequest,
        CreateVolumeRequest,
        DeletePlacementGroupRequest,
        DescribeImagesRequest,
        DescribeInstanceStatusRequest,
        DescribeInstancesRequest,
        DescribePlacementGroupsRequest,
        DescribeSecurityGroupsRequest,
        RunInstancesRequest,
    }
    shapes {
        BlockDeviceMapping,
        CapacityReservation,
        CreateCapacityReservationResult,
        CreateFlowLogsResult,
        CreatePlacementGroupResult,
        DeletePlacementGroupResult,
        DescribeImagesResult,
        DescribeInstanceStatusResult,
        DescribeInstancesResult,
        DescribePlacementGroupsResult,
        DescribeSecurityGroupsResult,
        EbsBlockDevice,
        Filter,
        GroupIdentifier,
        Image,
        Instance,
        InstanceState,
        InstanceStatus,
        InstanceStatusDetails,
        InstanceStatusEvent,
        InstanceStatusSummary,
        IpPermission,
        IpRange,
        Ipv6Range,
        Monitoring,
        Placement,
        PlacementGroup,
        PrefixListId,
        PriceSchedule,
        ProductCode,
        Reservation,
        RunInstancesMonitoringEnabled,
        SecurityGroup,
        StateReason,
        Tag,
        TagSpecification,
        UnsuccessfulItem,
        UnsuccessfulItemError,
        UserIdGroupPair,
        Volume,
        VolumeAttachment,
    }
}

fn entry(name: &str) -> Result<&'static Entry> {
    ENTRIES.iter().find(|e| e.name == name).ok_or_else(|| {
        tracing::debug!(shape = name, "no such shape");
        ModelError::UnknownShape(name.to_string())
    })
}

/// Static schema of the named shape.
pub fn schema_of(name: &str) -> Result<ShapeSchema> {
    Ok((entry(name)?.schema)())
}

/// Action and response of the named request, `None` for non-request shapes.
pub fn request_info(name: &str) -> Result<Option<RequestInfo>> {
    Ok(entry(name)?.request.as_ref().map(|r| r.info))
}

/// Parses `json` as the named shape and renders it.
pub fn render_json(name: &str, json: &str) -> Result<Rendered> {
    (entry(name)?.render)(json)
}

/// Parses `json` as the named request and returns it with `DryRun=true`.
pub fn dry_run_json(name: &str, json: &str) -> Result<String> {
    let entry = entry(name)?;
    let request = entry
        .request
        .as_ref()
        .ok_or_else(|| ModelError::NotARequest(name.to_string()))?;
    (request.dry_run)(json)
}
