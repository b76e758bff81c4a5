//! Member value types and their accessor views.

use crate::Double;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time carried by timestamp members (e.g. `LaunchTime`).
pub type Timestamp = DateTime<Utc>;

/// The wire type of a shape member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Boolean,
    Integer,
    Long,
    Double,
    Timestamp,
    Enum,
    Structure,
}

impl FieldType {
    /// Lower-case name as shown in schema listings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Double => "double",
            Self::Timestamp => "timestamp",
            Self::Enum => "enum",
            Self::Structure => "structure",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type that can be stored in a shape member.
///
/// `Ref` is what the member getter hands out: strings as `&str`, small
/// scalars by value, enums and nested shapes by reference.
pub trait Member {
    type Ref<'a>
    where
        Self: 'a;

    /// Wire type reported in the shape schema.
    const FIELD_TYPE: FieldType;

    /// Documented values, only non-empty for enums.
    const ALLOWED_VALUES: &'static [&'static str] = &[];

    /// Borrowed view returned by getters.
    fn view(&self) -> Self::Ref<'_>;
}

impl Member for String {
    type Ref<'a> = &'a str;
    const FIELD_TYPE: FieldType = FieldType::String;

    fn view(&self) -> &str {
        self
    }
}

macro_rules! copy_member {
    ($($ty:ty => $field_type:ident),+ $(,)?) => {
        $(
            impl Member for $ty {
                type Ref<'a> = $ty;
                const FIELD_TYPE: FieldType = FieldType::$field_type;

                fn view(&self) -> $ty {
                    *self
                }
            }
        )+
    };
}

copy_member! {
    bool => Boolean,
    i32 => Integer,
    i64 => Long,
    Double => Double,
    Timestamp => Timestamp,
}
