//! Stride engine crate.
//!
//! Packs heterogeneous, caller-declared fields into one interleaved, strided
//! byte buffer ready to hand to a rendering backend.
//!
//! Flow:
//! - build a [`RecordSchema`] from field shapes
//! - apply it to a [`RecordBuffer`] (fixes stride, allocates zeroed storage)
//! - fill columns with [`RecordBuffer::load_field`]
//! - [`RecordBuffer::externalize`] the packed bytes, and describe them with
//!   [`backend::VertexLayout`]

pub mod backend;
pub mod buffer;
pub mod bytes;
pub mod coords;
pub mod layout;
pub mod logging;

mod error;

pub use buffer::RecordBuffer;
pub use bytes::ByteView;
pub use error::{PackError, Result};
pub use layout::{BlockLayout, Describe, FieldKind, FieldShape, FieldSlot, Mappable, RecordSchema};
