//! EC2 request, response and structure shapes.
//!
//! Every shape is a plain value object:
//! - every member optional and absent until set
//! - getter / `set_*` / chainable `with_*` accessors (lists append on `with_*`)
//! - `Display` as `{Name: value,Name: value}` with absent members omitted
//! - structural `Eq` and `Hash` over all members
//! - serde with the service's wire member names
//!
//! Requests additionally implement [`Ec2Request`], and where applicable
//! [`DryRunSupported`] and [`Idempotent`]. The [`registry`] module dispatches
//! over all shipped shapes by name.

#[macro_use]
pub mod shape;
#[macro_use]
mod request;
mod error;
pub mod registry;
mod schema;

mod capacity_reservation;
mod common;
mod flow_log;
mod image;
mod instance;
mod instance_status;
mod placement;
mod security_group;
mod volume;

pub use error::{ModelError, Result};
pub use registry::{
    Rendered, RequestInfo, SHAPE_NAMES, dry_run_json, render_json, request_info, schema_of,
};
pub use request::{DryRunSupported, Ec2Request, Idempotent};
pub use schema::{MemberKind, MemberSchema, ShapeSchema};
pub use shape::Shape;

pub use capacity_reservation::*;
pub use common::*;
pub use flow_log::*;
pub use image::*;
pub use instance::*;
pub use instance_status::*;
pub use placement::*;
pub use security_group::*;
pub use volume::*;
