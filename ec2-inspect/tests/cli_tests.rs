use clap::Parser;
use ec2_inspect::{Args, Command, run};
use pretty_assertions::assert_eq;
use std::io::Write;

fn run_to_string(command: &Command, stdin: &str) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(command, &mut stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn parse(args: &[&str]) -> Command {
    Args::try_parse_from(args).unwrap().command
}

// ── Argument parsing ─────────────────────────────────────────────

#[test]
fn parses_show_with_input_file() {
    let command = parse(&["ec2-inspect", "show", "Tag", "--input", "tag.json"]);
    assert_eq!(
        command,
        Command::Show {
            shape: "Tag".to_string(),
            input: Some("tag.json".into()),
            json: false,
        }
    );
}

#[test]
fn verbose_is_global() {
    let args = Args::try_parse_from(["ec2-inspect", "shapes", "--verbose"]).unwrap();
    assert!(args.verbose);
}

#[test]
fn schema_requires_shape_name() {
    assert!(Args::try_parse_from(["ec2-inspect", "schema"]).is_err());
}

// ── shapes ───────────────────────────────────────────────────────

#[test]
fn shapes_lists_everything() {
    let out = run_to_string(&parse(&["ec2-inspect", "shapes"]), "").unwrap();
    let names: Vec<&str> = out.lines().collect();
    assert_eq!(names, ec2_model::SHAPE_NAMES);
}

#[test]
fn shapes_can_list_requests_only() {
    let out = run_to_string(&parse(&["ec2-inspect", "shapes", "--requests"]), "").unwrap();
    assert!(out.lines().all(|name| name.ends_with("Request")));
    assert!(out.lines().any(|name| name == "CreatePlacementGroupRequest"));
    assert!(!out.lines().any(|name| name == "Reservation"));
    assert!(out.lines().any(|name| name == "CreateCapacityReservationRequest"));
}

// ── schema ───────────────────────────────────────────────────────

#[test]
fn schema_prints_member_table() {
    let out = run_to_string(
        &parse(&["ec2-inspect", "schema", "CreatePlacementGroupRequest"]),
        "",
    )
    .unwrap();
    assert_eq!(
        out,
        "CreatePlacementGroupRequest (CreatePlacementGroup -> CreatePlacementGroupResult)\n\
         \x20 GroupName          string\n\
         \x20 Strategy           PlacementStrategy  [cluster | spread | partition]\n\
         \x20 PartitionCount     integer\n\
         \x20 TagSpecifications  list<TagSpecification>\n\
         \x20 DryRun             boolean\n"
    );
}

#[test]
fn schema_as_json() {
    let out = run_to_string(&parse(&["ec2-inspect", "schema", "Tag", "--json"]), "").unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["name"], "Tag");
    assert_eq!(json["members"][0]["name"], "Key");
    assert_eq!(json["members"][1]["field_type"], "string");
}

#[test]
fn schema_of_unknown_shape_fails() {
    let err = run_to_string(&parse(&["ec2-inspect", "schema", "Nope"]), "").unwrap_err();
    assert!(err.to_string().contains("unknown shape: Nope"));
}

// ── show ─────────────────────────────────────────────────────────

#[test]
fn show_reads_stdin() {
    let out = run_to_string(
        &parse(&["ec2-inspect", "show", "CreatePlacementGroupRequest"]),
        r#"{"GroupName": "pg1", "Strategy": "partition", "PartitionCount": 3}"#,
    )
    .unwrap();
    assert_eq!(
        out,
        "{GroupName: pg1,Strategy: partition,PartitionCount: 3}\n\
         present: GroupName, Strategy, PartitionCount\n"
    );
}

#[test]
fn show_reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Key": "Name", "Value": "web"}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let out = run_to_string(&parse(&["ec2-inspect", "show", "Tag", "-i", &path]), "").unwrap();
    assert_eq!(out, "{Key: Name,Value: web}\npresent: Key, Value\n");
}

#[test]
fn show_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let command = Command::Show {
        shape: "Tag".to_string(),
        input: Some(path.clone()),
        json: false,
    };
    let err = run_to_string(&command, "").unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn show_as_json() {
    let out = run_to_string(
        &parse(&["ec2-inspect", "show", "Filter", "--json"]),
        r#"{"Name": "vpc-id", "Values": ["vpc-1"]}"#,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["shape"], "Filter");
    assert_eq!(json["display"], "{Name: vpc-id,Values: [vpc-1]}");
    assert_eq!(json["present"], serde_json::json!(["Name", "Values"]));
}

#[test]
fn show_rejects_malformed_json() {
    let err = run_to_string(&parse(&["ec2-inspect", "show", "Tag"]), "{not json").unwrap_err();
    assert!(err.to_string().contains("Failed to parse Tag"));
}

// ── dry-run ──────────────────────────────────────────────────────

#[test]
fn dry_run_sets_flag_on_request() {
    let out = run_to_string(
        &parse(&["ec2-inspect", "dry-run", "CreateVolumeRequest"]),
        r#"{"AvailabilityZone": "us-east-1a", "Size": 8}"#,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"AvailabilityZone": "us-east-1a", "Size": 8, "DryRun": true})
    );
}

#[test]
fn dry_run_of_response_shape_fails() {
    let err = run_to_string(&parse(&["ec2-inspect", "dry-run", "Volume"]), "{}").unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Volume is not a request shape"));
}
