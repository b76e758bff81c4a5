//! The `shape!` generator and the [`Shape`] trait it implements.
//!
//! Every request, response and nested structure is declared once:
//!
//! ```ignore
//! shape! {
//!     /// A key/value label.
//!     pub struct Tag {
//!         key: Scalar<String> = "Key",
//!         value: Scalar<String> = "Value",
//!     }
//! }
//! ```
//!
//! Members are `Scalar<T>` (one optional value) or `List<T>` (an optional,
//! ordered sequence). Every member starts absent. Absent is distinct from a
//! present zero, `false` or empty list, and absent members never show up in
//! `Display` or serialized output.
//!
//! Per member the macro emits a getter, `set_*` (replace or clear) and
//! `with_*` (chainable). For lists `with_*` appends and creates the list on
//! first use, while `set_*` replaces it wholesale.

use crate::schema::{MemberSchema, ShapeSchema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::hash::Hash;

/// Storage of a single-valued member.
pub type Scalar<T> = T;

/// Storage of a list member.
pub type List<T> = Vec<T>;

/// A generated value object.
pub trait Shape:
    Clone + Default + PartialEq + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned
{
    /// Shape name as used by the service (e.g. `CreatePlacementGroupRequest`).
    const NAME: &'static str;

    /// Members in declaration order.
    const MEMBERS: &'static [MemberSchema];

    /// Wire names of the members currently set, in declaration order.
    fn present_members(&self) -> Vec<&'static str>;

    /// Static description of this shape.
    fn schema() -> ShapeSchema {
        ShapeSchema {
            name: Self::NAME,
            members: Self::MEMBERS,
        }
    }

    /// True when no member is set.
    fn is_empty(&self) -> bool {
        self.present_members().is_empty()
    }
}

/// Writes the `{Name: value,Name: value}` diagnostic form.
///
/// Used by the `Display` impls that `shape!` generates.
#[doc(hidden)]
pub struct MemberWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> MemberWriter<'a, 'b> {
    /// Opens the brace.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    fn name(&mut self, name: &str) -> fmt::Result {
        if !self.first {
            self.f.write_str(",")?;
        }
        self.first = false;
        write!(self.f, "{name}: ")
    }

    /// Writes `Name: value`.
    pub fn scalar<T: fmt::Display>(&mut self, name: &str, value: &T) -> fmt::Result {
        self.name(name)?;
        write!(self.f, "{value}")
    }

    /// Writes `Name: [a, b]`.
    pub fn list<T: fmt::Display>(&mut self, name: &str, values: &[T]) -> fmt::Result {
        self.name(name)?;
        self.f.write_str("[")?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            write!(self.f, "{value}")?;
        }
        self.f.write_str("]")
    }

    /// Closes the brace.
    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

macro_rules! shape_accessors {
    (Scalar, $field:ident, $ty:ty, { $(#[$doc:meta])* }) => {
        paste::paste! {
            $(#[$doc])*
            #[must_use]
            pub fn $field(&self) -> Option<<$ty as ec2_types::Member>::Ref<'_>> {
                self.$field.as_ref().map(<$ty as ec2_types::Member>::view)
            }

            /// Replaces the member. `None` clears it.
            pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                self.$field = value;
            }

            /// Sets the member and returns `self` for chaining.
            #[must_use]
            pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        }
    };
    (List, $field:ident, $ty:ty, { $(#[$doc:meta])* }) => {
        paste::paste! {
            $(#[$doc])*
            #[must_use]
            pub fn $field(&self) -> Option<&[$ty]> {
                self.$field.as_deref()
            }

            /// Replaces the whole list. `None` clears it.
            pub fn [<set_ $field>](&mut self, values: Option<Vec<$ty>>) {
                self.$field = values;
            }

            /// Appends to the list, creating it if absent, and returns `self`.
            #[must_use]
            pub fn [<with_ $field>]<I>(mut self, values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$ty>,
            {
                self.$field
                    .get_or_insert_with(Vec::new)
                    .extend(values.into_iter().map(Into::into));
                self
            }
        }
    };
}

macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident<$ty:ty> = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: Option<$crate::shape::$kind<$ty>>,
            )*
        }

        impl $name {
            /// Creates an instance with every member absent.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $( shape_accessors!($kind, $field, $ty, { $(#[$fmeta])* }); )*
        }

        impl $crate::Shape for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [$crate::MemberSchema] = &[
                $(
                    $crate::MemberSchema {
                        name: $wire,
                        field: stringify!($field),
                        kind: $crate::MemberKind::$kind,
                        field_type: <$ty as ec2_types::Member>::FIELD_TYPE,
                        allowed_values: <$ty as ec2_types::Member>::ALLOWED_VALUES,
                        target: stringify!($ty),
                    },
                )*
            ];

            fn present_members(&self) -> Vec<&'static str> {
                let members: Vec<Option<&'static str>> = vec![
                    $( self.$field.as_ref().map(|_| $wire), )*
                ];
                members.into_iter().flatten().collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut members = $crate::shape::MemberWriter::new(f)?;
                $(
                    if let Some(value) = &self.$field {
                        paste::paste! { members.[<$kind:lower>]($wire, value)?; }
                    }
                )*
                members.finish()
            }
        }

        impl ec2_types::Member for $name {
            type Ref<'a> = &'a $name;
            const FIELD_TYPE: ec2_types::FieldType = ec2_types::FieldType::Structure;

            fn view(&self) -> &$name {
                self
            }
        }

        impl From<&$name> for $name {
            fn from(value: &$name) -> Self {
                value.clone()
            }
        }
    };
}
