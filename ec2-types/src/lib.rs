//! Primitive member types for the EC2 model.
//!
//! This crate defines the building blocks every generated shape is made of:
//! - Closed-set string enums with a forward-compatible `Other` variant
//! - [`Double`] and [`Timestamp`] scalars with value semantics
//! - [`ClientToken`] idempotency tokens (UUID v4)
//! - The [`Member`] trait that maps stored values to accessor views
//!
//! Shapes themselves (requests, responses, nested structures) live in
//! `ec2-model`, not here.

#[macro_use]
mod enum_value;
mod double;
mod enums;
mod member;
mod token;

pub use double::Double;
pub use enum_value::Ec2Enum;
pub use enums::*;
pub use member::{FieldType, Member, Timestamp};
pub use token::ClientToken;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when converting member values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown {enum_name} value: {value:?}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("invalid client token: {0}")]
    InvalidClientToken(#[from] uuid::Error),
}
