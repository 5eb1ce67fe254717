use bytemuck::{Pod, Zeroable};

use crate::bytes::ByteView;
use crate::layout::{Describe, FieldKind, FieldShape, Mappable};

/// 3D vector, three packed `f32` components (no padding to 16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Describe for Vec3 {
    #[inline]
    fn describe() -> FieldShape {
        FieldShape::new(3, 4, FieldKind::Float)
    }
}

impl Mappable for Vec3 {
    #[inline]
    fn materialize(&self) -> ByteView {
        ByteView::from_slice(bytemuck::bytes_of(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn named_vectors_match_float_arrays() {
        assert_eq!(Vec2::describe(), <[f32; 2]>::describe());
        assert_eq!(Vec3::describe(), <[f32; 3]>::describe());
    }

    #[test]
    fn bytes_follow_field_order() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.materialize().as_slice(), [1.0f32, 2.0, 3.0].materialize().as_slice());
    }
}
