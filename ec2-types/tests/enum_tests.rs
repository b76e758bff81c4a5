use ec2_types::{
    CapacityReservationInstancePlatform, Ec2Enum, Error, FieldType, InstanceStateName,
    InstanceType, Member, PlacementStrategy, TrafficType, VolumeType,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

// ── Wire strings ──────────────────────────────────────────────────

#[test]
fn as_str_is_wire_value() {
    assert_eq!(PlacementStrategy::Cluster.as_str(), "cluster");
    assert_eq!(PlacementStrategy::Partition.as_str(), "partition");
    assert_eq!(InstanceStateName::ShuttingDown.as_str(), "shutting-down");
    assert_eq!(TrafficType::Accept.as_str(), "ACCEPT");
    assert_eq!(
        CapacityReservationInstancePlatform::LinuxUnix.as_str(),
        "Linux/UNIX"
    );
}

#[test]
fn display_matches_as_str() {
    assert_eq!(VolumeType::Gp2.to_string(), "gp2");
    assert_eq!(InstanceType::T2Micro.to_string(), "t2.micro");
}

#[test]
fn values_in_declaration_order() {
    assert_eq!(PlacementStrategy::VALUES, &["cluster", "spread", "partition"]);
    assert_eq!(PlacementStrategy::NAME, "PlacementStrategy");
}

// ── Lenient conversion ────────────────────────────────────────────

#[test]
fn from_str_ref_maps_documented_values() {
    assert_eq!(PlacementStrategy::from("spread"), PlacementStrategy::Spread);
    assert_eq!(
        InstanceStateName::from(String::from("running")),
        InstanceStateName::Running
    );
}

#[test]
fn from_keeps_undocumented_values() {
    let value = InstanceType::from("x9.hyperlarge");
    assert_eq!(value, InstanceType::Other("x9.hyperlarge".into()));
    assert_eq!(value.as_str(), "x9.hyperlarge");
    assert!(!value.is_known());
}

#[test]
fn matching_is_case_sensitive() {
    let value = PlacementStrategy::from("Cluster");
    assert!(!value.is_known());
    assert_ne!(value, PlacementStrategy::Cluster);
}

#[test]
fn other_with_documented_string_equals_variant() {
    let other = PlacementStrategy::Other("partition".into());
    assert_eq!(other, PlacementStrategy::Partition);
    assert!(other.is_known());

    let mut set = HashSet::new();
    set.insert(other);
    set.insert(PlacementStrategy::Partition);
    assert_eq!(set.len(), 1);
}

#[test]
fn compares_with_plain_strings() {
    assert!(PlacementStrategy::Cluster == "cluster");
    assert!(VolumeType::Io1 == "io1");
}

// ── Strict parsing ────────────────────────────────────────────────

#[test]
fn parse_accepts_documented_values() {
    let parsed: VolumeType = "st1".parse().unwrap();
    assert_eq!(parsed, VolumeType::St1);
}

#[test]
fn parse_rejects_undocumented_values() {
    let err = "gp9".parse::<VolumeType>().unwrap_err();
    match err {
        Error::UnknownEnumValue { enum_name, value } => {
            assert_eq!(enum_name, "VolumeType");
            assert_eq!(value, "gp9");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_error_message_names_enum() {
    let err = "nope".parse::<PlacementStrategy>().unwrap_err();
    assert_eq!(err.to_string(), "unknown PlacementStrategy value: \"nope\"");
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn serializes_as_wire_string() {
    let json = serde_json::to_string(&InstanceStateName::Stopped).unwrap();
    assert_eq!(json, "\"stopped\"");
}

#[test]
fn deserializes_documented_and_undocumented() {
    let known: InstanceStateName = serde_json::from_str("\"pending\"").unwrap();
    assert_eq!(known, InstanceStateName::Pending);

    let unknown: InstanceStateName = serde_json::from_str("\"hibernating\"").unwrap();
    assert_eq!(unknown, InstanceStateName::Other("hibernating".into()));
}

// ── Member ────────────────────────────────────────────────────────

#[test]
fn member_metadata_lists_allowed_values() {
    assert_eq!(<TrafficType as Member>::FIELD_TYPE, FieldType::Enum);
    assert_eq!(
        <TrafficType as Member>::ALLOWED_VALUES,
        &["ACCEPT", "REJECT", "ALL"]
    );
}

#[test]
fn member_view_borrows() {
    let value = TrafficType::Reject;
    let view: &TrafficType = value.view();
    assert_eq!(view, &TrafficType::Reject);
}
