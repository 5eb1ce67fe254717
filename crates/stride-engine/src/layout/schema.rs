use crate::error::Result;

use super::block::stride_of;
use super::{BlockLayout, Describe, FieldShape};

/// Ordered description of one record ("block").
///
/// Insertion order defines field indices and therefore byte offsets.
/// Duplicate shapes are fine (two 3-float fields, for instance).
///
/// ```ignore
/// let mut schema = RecordSchema::new();
/// schema.attribute_of::<[f32; 2]>().attribute_of::<[f32; 3]>();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSchema {
    fields: Vec<FieldShape>,
}

impl RecordSchema {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of `prototype` and returns `self` for chaining.
    #[inline]
    pub fn attribute(&mut self, prototype: FieldShape) -> &mut Self {
        self.fields.push(prototype);
        self
    }

    /// Appends the shape of `T`.
    #[inline]
    pub fn attribute_of<T: Describe>(&mut self) -> &mut Self {
        self.attribute(T::describe())
    }

    /// By-value variant of [`attribute`](Self::attribute).
    #[inline]
    pub fn with(mut self, prototype: FieldShape) -> Self {
        self.fields.push(prototype);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&FieldShape> {
        self.fields.get(index)
    }

    /// Iterates `(index, shape)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FieldShape)> {
        self.fields.iter().enumerate()
    }

    #[inline]
    pub fn shapes(&self) -> &[FieldShape] {
        &self.fields
    }

    /// Bytes per record under this schema.
    ///
    /// Fails with `StrideOverflow` when the field sizes do not sum within `usize`.
    #[inline]
    pub fn stride(&self) -> Result<usize> {
        stride_of(&self.fields)
    }

    pub fn layout(&self) -> Result<BlockLayout> {
        BlockLayout::from_shapes(&self.fields)
    }
}

impl FromIterator<FieldShape> for RecordSchema {
    fn from_iter<I: IntoIterator<Item = FieldShape>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FieldKind;

    #[test]
    fn builder_preserves_insertion_order() {
        let mut schema = RecordSchema::new();
        schema
            .attribute_of::<[f32; 2]>()
            .attribute_of::<u32>()
            .attribute_of::<[f32; 2]>();

        let shapes: Vec<FieldShape> = schema.iter().map(|(_, s)| *s).collect();
        assert_eq!(
            shapes,
            vec![
                FieldShape::new(2, 4, FieldKind::Float),
                FieldShape::new(1, 4, FieldKind::Integer),
                FieldShape::new(2, 4, FieldKind::Float),
            ]
        );
        assert_eq!(schema.iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn stride_sums_mapped_sizes() {
        let schema = RecordSchema::new()
            .with(FieldShape::new(2, 4, FieldKind::Float))
            .with(FieldShape::new(3, 4, FieldKind::Float));
        assert_eq!(schema.stride(), Ok(20));
        assert_eq!(schema.layout().unwrap().stride, 20);
    }

    #[test]
    fn empty_schema_is_legal() {
        let schema = RecordSchema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.stride(), Ok(0));
        assert!(schema.get(0).is_none());
    }

    #[test]
    fn collects_from_iterator() {
        let schema: RecordSchema =
            (1..=4).map(|n| FieldShape::new(n, 4, FieldKind::Float)).collect();
        assert_eq!(schema.len(), 4);
        assert_eq!(schema.stride(), Ok(40));
    }
}
