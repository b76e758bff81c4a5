use ec2_types::FieldType;
use serde::Serialize;

/// Static description of a shape: its name and members in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeSchema {
    pub name: &'static str,
    pub members: &'static [MemberSchema],
}

impl ShapeSchema {
    /// Looks a member up by its wire name (e.g. `"GroupName"`).
    pub fn member(&self, name: &str) -> Option<&'static MemberSchema> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Wire names of all members in declaration order.
    pub fn member_names(&self) -> Vec<&'static str> {
        self.members.iter().map(|m| m.name).collect()
    }

    /// True when the shape carries a `DryRun` member.
    pub fn supports_dry_run(&self) -> bool {
        self.member("DryRun").is_some()
    }
}

/// One member of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemberSchema {
    /// Wire name, e.g. `"PartitionCount"`.
    pub name: &'static str,
    /// Rust field name, e.g. `"partition_count"`.
    pub field: &'static str,
    pub kind: MemberKind,
    pub field_type: FieldType,
    /// Documented values. Only non-empty for enum members.
    pub allowed_values: &'static [&'static str],
    /// Rust type of a single element, e.g. `"String"` or `"Tag"`.
    pub target: &'static str,
}

impl MemberSchema {
    /// True when `value` is one of the documented values, or the member is
    /// not an enum.
    pub fn allows(&self, value: &str) -> bool {
        self.allowed_values.is_empty() || self.allowed_values.contains(&value)
    }
}

/// Whether a member holds one value or an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Scalar,
    List,
}
