//! Fixed-length owned byte sequences.
//!
//! `ByteView` carries the materialized bytes of one field value and the
//! snapshot handed to the rendering backend.

mod view;

pub use view::ByteView;
