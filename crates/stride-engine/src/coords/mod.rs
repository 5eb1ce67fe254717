//! Small `#[repr(C)]` value types usable as record fields.
//!
//! These carry no math beyond construction; they exist so vertex-style records
//! can be declared with named types instead of bare arrays. Each one is
//! structurally equal to the matching float array (`Vec2` and `[f32; 2]`).

mod color;
mod vec2;
mod vec3;

pub use color::Color;
pub use vec2::Vec2;
pub use vec3::Vec3;
