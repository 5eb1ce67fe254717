use crate::bytes::ByteView;

use super::{FieldKind, FieldShape};

/// Reports the field shape of a storable type.
///
/// Must be deterministic: the same type always yields the same shape.
pub trait Describe {
    fn describe() -> FieldShape;
}

/// Renders a value as exactly `Self::describe().mapped_size()` bytes.
pub trait Mappable: Describe {
    fn materialize(&self) -> ByteView;
}

// Scalars and small arrays map through bytemuck in native byte order.
macro_rules! impl_pod_field {
    ($($ty:ty => $scalar:ty, $count:literal, $kind:ident;)*) => {$(
        impl Describe for $ty {
            #[inline]
            fn describe() -> FieldShape {
                FieldShape::new($count, std::mem::size_of::<$scalar>() as u32, FieldKind::$kind)
            }
        }

        impl Mappable for $ty {
            #[inline]
            fn materialize(&self) -> ByteView {
                ByteView::from_slice(bytemuck::bytes_of(self))
            }
        }
    )*};
}

impl_pod_field! {
    f32 => f32, 1, Float;
    [f32; 2] => f32, 2, Float;
    [f32; 3] => f32, 3, Float;
    [f32; 4] => f32, 4, Float;

    f64 => f64, 1, Double;
    [f64; 2] => f64, 2, Double;
    [f64; 3] => f64, 3, Double;
    [f64; 4] => f64, 4, Double;

    i32 => i32, 1, Integer;
    [i32; 2] => i32, 2, Integer;
    [i32; 3] => i32, 3, Integer;
    [i32; 4] => i32, 4, Integer;
    u32 => u32, 1, Integer;
    [u32; 2] => u32, 2, Integer;
    [u32; 3] => u32, 3, Integer;
    [u32; 4] => u32, 4, Integer;

    [i16; 2] => i16, 2, Integer;
    [i16; 4] => i16, 4, Integer;
    [u16; 2] => u16, 2, Integer;
    [u16; 4] => u16, 4, Integer;

    [i8; 2] => i8, 2, Integer;
    [i8; 4] => i8, 4, Integer;
    [u8; 2] => u8, 2, Integer;
    [u8; 4] => u8, 4, Integer;
}
