//! Record layout description.
//!
//! Responsibilities:
//! - describe the binary footprint of one field (`FieldShape`)
//! - let value types report their shape and bytes (`Describe`, `Mappable`)
//! - collect field shapes into an ordered record description (`RecordSchema`)
//! - resolve per-field byte offsets and the record stride (`BlockLayout`)

pub(crate) mod block;
mod describe;
mod schema;
mod shape;

pub use block::{BlockLayout, FieldSlot};
pub use describe::{Describe, Mappable};
pub use schema::RecordSchema;
pub use shape::{FieldKind, FieldShape};
