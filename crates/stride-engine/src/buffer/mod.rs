//! Packed record storage.
//!
//! A `RecordBuffer` owns one contiguous byte region holding `record_count`
//! interleaved records. Each record is laid out by the applied schema; field
//! columns are filled independently through [`RecordBuffer::load_field`].
//!
//! Lifecycle:
//! - created unconfigured (no schema, stride 0, no storage)
//! - `apply_schema` fixes the stride and allocates zeroed storage
//! - resizing and re-applying keep it configured

mod record_buffer;

pub use record_buffer::RecordBuffer;
