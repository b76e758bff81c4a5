use ec2_model::{
    CreatePlacementGroupRequest, DescribeInstancesRequest, Filter, Instance, InstanceState,
    Placement, PriceSchedule, Shape, Tag, TagSpecification,
};
use ec2_types::{InstanceStateName, PlacementStrategy, ResourceType};
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn placement_group_request() -> CreatePlacementGroupRequest {
    CreatePlacementGroupRequest::new()
        .with_group_name("pg1")
        .with_strategy(PlacementStrategy::Partition)
        .with_partition_count(3)
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_shape_has_every_member_absent() {
    let request = CreatePlacementGroupRequest::new();
    assert!(request.group_name().is_none());
    assert!(request.strategy().is_none());
    assert!(request.partition_count().is_none());
    assert!(request.tag_specifications().is_none());
    assert!(request.dry_run().is_none());
    assert!(request.is_empty());
    assert_eq!(request.to_string(), "{}");
}

#[test]
fn new_equals_default() {
    assert_eq!(Instance::new(), Instance::default());
}

// ── Placement group scenario ─────────────────────────────────────

#[test]
fn placement_group_request_getters() {
    let request = placement_group_request();
    assert_eq!(request.group_name(), Some("pg1"));
    assert_eq!(request.strategy().map(|s| s.as_str()), Some("partition"));
    assert_eq!(request.strategy(), Some(&PlacementStrategy::Partition));
    assert_eq!(request.partition_count(), Some(3));
}

#[test]
fn placement_group_request_display_omits_absent_dry_run() {
    let request = placement_group_request();
    assert_eq!(
        request.to_string(),
        "{GroupName: pg1,Strategy: partition,PartitionCount: 3}"
    );
    assert!(!request.to_string().contains("DryRun"));
}

#[test]
fn present_members_follow_declaration_order() {
    let request = placement_group_request().with_dry_run(false);
    assert_eq!(
        request.present_members(),
        vec!["GroupName", "Strategy", "PartitionCount", "DryRun"]
    );
}

// ── Absent versus present-default ────────────────────────────────

#[test]
fn false_is_not_absent() {
    let absent = CreatePlacementGroupRequest::new();
    let present = CreatePlacementGroupRequest::new().with_dry_run(false);
    assert_ne!(absent, present);
    assert_eq!(present.dry_run(), Some(false));
    assert_eq!(present.to_string(), "{DryRun: false}");
}

#[test]
fn zero_is_not_absent() {
    let present = CreatePlacementGroupRequest::new().with_partition_count(0);
    assert_ne!(present, CreatePlacementGroupRequest::new());
    assert_eq!(present.to_string(), "{PartitionCount: 0}");
}

#[test]
fn empty_list_is_not_absent() {
    let mut filter = Filter::new();
    filter.set_values(Some(Vec::new()));
    assert_eq!(filter.values(), Some(&[][..]));
    assert_ne!(filter, Filter::new());
    assert_eq!(filter.to_string(), "{Values: []}");
}

#[test]
fn setting_none_clears_a_member() {
    let mut request = placement_group_request();
    request.set_strategy(None);
    request.set_partition_count(None);
    assert_eq!(request.to_string(), "{GroupName: pg1}");
}

// ── Lists ────────────────────────────────────────────────────────

#[test]
fn with_appends_to_list() {
    let filter = Filter::new()
        .with_name("instance-state-name")
        .with_values(["running"])
        .with_values(["stopped"]);
    assert_eq!(filter.values(), Some(&["running".to_string(), "stopped".to_string()][..]));
}

#[test]
fn set_replaces_list() {
    let mut filter = Filter::new().with_values(["running", "stopped"]);
    filter.set_values(Some(vec!["pending".to_string()]));
    assert_eq!(filter.values(), Some(&["pending".to_string()][..]));
}

#[test]
fn with_accepts_empty_iterator_and_creates_list() {
    let filter = Filter::new().with_values(Vec::<String>::new());
    assert_eq!(filter.values().map(<[String]>::len), Some(0));
}

#[test]
fn stored_list_is_independent_of_caller_vec() {
    let mut ids = vec!["i-1".to_string(), "i-2".to_string()];
    let request = DescribeInstancesRequest::new().with_instance_ids(ids.clone());
    ids.push("i-3".to_string());
    ids[0] = "i-changed".to_string();
    assert_eq!(
        request.instance_ids(),
        Some(&["i-1".to_string(), "i-2".to_string()][..])
    );
}

#[test]
fn with_from_borrowed_shapes_copies() {
    let mut tags = vec![Tag::pair("Name", "web")];
    let specification = TagSpecification::new()
        .with_resource_type(ResourceType::Instance)
        .with_tags(&tags);
    tags[0].set_value(Some("db".to_string()));
    assert_eq!(specification.tags(), Some(&[Tag::pair("Name", "web")][..]));
}

#[test]
fn cloned_shape_does_not_alias() {
    let original = Filter::new().with_values(["a"]);
    let mut copy = original.clone();
    copy.set_values(Some(vec!["b".to_string()]));
    assert_eq!(original.values(), Some(&["a".to_string()][..]));
}

// ── Enum members ─────────────────────────────────────────────────

#[test]
fn enum_and_string_setters_agree() {
    let typed = CreatePlacementGroupRequest::new().with_strategy(PlacementStrategy::Spread);
    let raw = CreatePlacementGroupRequest::new().with_strategy("spread");
    assert_eq!(typed, raw);
    assert_eq!(typed.to_string(), raw.to_string());
    assert_eq!(hash_of(&typed), hash_of(&raw));
}

#[test]
fn undocumented_enum_string_is_kept() {
    let request = CreatePlacementGroupRequest::new().with_strategy("host-affinity");
    let strategy = request.strategy().cloned();
    assert_eq!(strategy, Some(PlacementStrategy::Other("host-affinity".into())));
    assert!(!request.strategy().is_some_and(|s| s.is_known()));
    assert_eq!(request.to_string(), "{Strategy: host-affinity}");
}

// ── Nested shapes and Display ────────────────────────────────────

#[test]
fn nested_shapes_render_recursively() {
    let instance = Instance::new()
        .with_instance_id("i-0abc")
        .with_placement(Placement::new().with_availability_zone("us-east-1a"))
        .with_state(
            InstanceState::new()
                .with_code(16)
                .with_name(InstanceStateName::Running),
        )
        .with_tags([Tag::pair("Name", "web"), Tag::pair("env", "prod")]);
    assert_eq!(
        instance.to_string(),
        "{InstanceId: i-0abc,Placement: {AvailabilityZone: us-east-1a},\
         State: {Code: 16,Name: running},Tags: [{Key: Name,Value: web}, {Key: env,Value: prod}]}"
    );
}

#[test]
fn nested_getter_borrows_value() {
    let instance = Instance::new().with_state(InstanceState::new().with_code(80));
    assert_eq!(instance.state().and_then(InstanceState::code), Some(80));
}

#[test]
fn double_member_displays_fraction() {
    let price = PriceSchedule::new().with_price(1.0).with_term(12).with_active(true);
    assert_eq!(price.to_string(), "{Price: 1.0,Term: 12,Active: true}");
    assert_eq!(price.price().map(f64::from), Some(1.0));
}

#[test]
fn timestamp_member_displays_utc() {
    use chrono::{TimeZone, Utc};
    let launched = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let instance = Instance::new().with_launch_time(launched);
    assert_eq!(instance.launch_time(), Some(launched));
    assert_eq!(instance.to_string(), "{LaunchTime: 2024-01-02 03:04:05 UTC}");
}

// ── Equality and hashing ─────────────────────────────────────────

#[test]
fn equal_shapes_hash_equally() {
    let a = placement_group_request();
    let b = placement_group_request();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn any_member_difference_breaks_equality() {
    let base = placement_group_request();
    assert_ne!(base, base.clone().with_partition_count(4));
    assert_ne!(base, base.clone().with_dry_run(true));
    assert_ne!(base, base.clone().with_group_name("pg2"));
}

#[test]
fn list_order_matters_for_equality() {
    let a = Filter::new().with_values(["a", "b"]);
    let b = Filter::new().with_values(["b", "a"]);
    assert_ne!(a, b);
}

#[test]
fn mutation_after_construction_is_allowed() {
    let mut request = placement_group_request();
    request.set_group_name(Some("renamed".into()));
    assert_eq!(request.group_name(), Some("renamed"));
}
