use std::fmt;

use super::Describe;

/// Coarse numeric class of a field's components.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Float,
    Integer,
    Double,
    Other,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Float => "float",
            FieldKind::Integer => "integer",
            FieldKind::Double => "double",
            FieldKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Binary footprint of one field: `component_count` components of
/// `component_width` bytes each.
///
/// Equality is structural. Two shapes produced by different Rust types compare
/// equal when count, width and kind all match (`[f32; 3]` and `Vec3`, say).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldShape {
    pub component_count: u32,
    /// Bytes per component.
    pub component_width: u32,
    pub kind: FieldKind,
}

impl FieldShape {
    #[inline]
    pub const fn new(component_count: u32, component_width: u32, kind: FieldKind) -> Self {
        Self { component_count, component_width, kind }
    }

    /// Shape reported by `T`.
    #[inline]
    pub fn of<T: Describe>() -> Self {
        T::describe()
    }

    /// Bytes occupied by one value of this shape inside a record.
    #[inline]
    pub const fn mapped_size(self) -> usize {
        self.component_count as usize * self.component_width as usize
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}B {}", self.component_count, self.component_width, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_size_is_count_times_width() {
        assert_eq!(FieldShape::new(3, 4, FieldKind::Float).mapped_size(), 12);
        assert_eq!(FieldShape::new(4, 8, FieldKind::Double).mapped_size(), 32);
        assert_eq!(FieldShape::new(0, 4, FieldKind::Other).mapped_size(), 0);
    }

    #[test]
    fn equality_needs_all_three_attributes() {
        let base = FieldShape::new(2, 4, FieldKind::Float);
        assert_eq!(base, FieldShape::new(2, 4, FieldKind::Float));
        assert_ne!(base, FieldShape::new(3, 4, FieldKind::Float));
        assert_ne!(base, FieldShape::new(2, 8, FieldKind::Float));
        assert_ne!(base, FieldShape::new(2, 4, FieldKind::Integer));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(FieldShape::new(2, 4, FieldKind::Integer).to_string(), "2 x 4B integer");
    }
}
