//! Closed-set string enums.
//!
//! The EC2 wire format only knows strings. Each enumerated member gets a Rust
//! enum whose variants carry the documented strings, plus an `Other` variant
//! that keeps anything the service sends (or the caller passes) verbatim.
//!
//! Conversions come in two flavors:
//! - `From<&str>` / `From<String>` never fail; undocumented values land in
//!   `Other`.
//! - `FromStr` (`str::parse`) is strict and rejects undocumented values with
//!   [`Error::UnknownEnumValue`](crate::Error::UnknownEnumValue).

use std::fmt;
use std::str::FromStr;

/// Common interface of every generated enum.
pub trait Ec2Enum:
    Clone + fmt::Debug + fmt::Display + FromStr<Err = crate::Error> + for<'a> From<&'a str>
{
    /// Rust name of the enum, used in error messages.
    const NAME: &'static str;

    /// Documented wire values in declaration order.
    const VALUES: &'static [&'static str];

    /// Returns the wire string for this value.
    fn as_str(&self) -> &str;

    /// Returns false for values outside the documented set.
    fn is_known(&self) -> bool;
}

/// Declares a closed-set string enum with a trailing `Other(String)` variant.
///
/// Generates `as_str`, `is_known`, `Display`, lenient `From<&str>` and
/// `From<String>`, strict `FromStr`, string-valued serde, `Member`, and
/// equality/hashing over the wire string.
macro_rules! ec2_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the documented set, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Returns the wire string for this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Returns false for values outside the documented set.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_)) || Self::documented(self.as_str()).is_some()
            }

            fn documented(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn undocumented(value: String) -> Self {
                tracing::debug!(
                    enum_name = stringify!($name),
                    value = %value,
                    "keeping undocumented enum value verbatim"
                );
                Self::Other(value)
            }
        }

        impl $crate::Ec2Enum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$($value),+];

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::documented(value).unwrap_or_else(|| Self::undocumented(value.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match Self::documented(&value) {
                    Some(known) => known,
                    None => Self::undocumented(value),
                }
            }
        }

        impl From<&$name> for $name {
            fn from(value: &$name) -> Self {
                value.clone()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::documented(s).ok_or_else(|| $crate::Error::UnknownEnumValue {
                    enum_name: stringify!($name),
                    value: s.to_owned(),
                })
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl $crate::Member for $name {
            type Ref<'a> = &'a $name;
            const FIELD_TYPE: $crate::FieldType = $crate::FieldType::Enum;
            const ALLOWED_VALUES: &'static [&'static str] = &[$($value),+];

            fn view(&self) -> &$name {
                self
            }
        }
    };
}
