use bytemuck::{Pod, Zeroable};

use crate::bytes::ByteView;
use crate::layout::{Describe, FieldKind, FieldShape, Mappable};

/// Linear premultiplied RGBA color, packed as four `f32`.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Creates a premultiplied color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}

impl Describe for Color {
    #[inline]
    fn describe() -> FieldShape {
        FieldShape::new(4, 4, FieldKind::Float)
    }
}

impl Mappable for Color {
    #[inline]
    fn materialize(&self) -> ByteView {
        ByteView::from_slice(bytemuck::bytes_of(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn from_u8_opaque_keeps_channels() {
        let c = Color::from_u8(255, 0, 255, 255);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn packs_as_four_floats() {
        let c = Color::from_premul(0.1, 0.2, 0.3, 1.0);
        assert_eq!(Color::describe().mapped_size(), 16);
        assert_eq!(c.materialize().as_slice(), bytemuck::bytes_of(&[0.1f32, 0.2, 0.3, 1.0]));
    }
}
