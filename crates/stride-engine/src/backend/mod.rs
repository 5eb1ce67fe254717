//! Rendering backend boundary.
//!
//! Translates a packed buffer's layout into wgpu's vertex-input vocabulary so
//! a renderer can bind the externalized bytes directly. Nothing here touches a
//! device or queue; pipelines and GPU buffers stay with the renderer.

mod vertex;

pub use vertex::{vertex_format, VertexLayout, VertexLayoutInit};
