use bytemuck::{Pod, Zeroable};

use crate::bytes::ByteView;
use crate::layout::{Describe, FieldKind, FieldShape, Mappable};

/// 2D vector, two packed `f32` components.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Describe for Vec2 {
    #[inline]
    fn describe() -> FieldShape {
        FieldShape::new(2, 4, FieldKind::Float)
    }
}

impl Mappable for Vec2 {
    #[inline]
    fn materialize(&self) -> ByteView {
        ByteView::from_slice(bytemuck::bytes_of(self))
    }
}
