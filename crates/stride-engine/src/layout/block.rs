use crate::error::{PackError, Result};

use super::FieldShape;

/// One field's position inside a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    /// Byte offset from the start of the record.
    pub offset: usize,
    pub shape: FieldShape,
}

/// Resolved record layout: stride plus per-field offsets, in field order.
///
/// This is what a rendering backend needs to describe a packed buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockLayout {
    pub stride: usize,
    pub fields: Vec<FieldSlot>,
}

impl BlockLayout {
    /// Lays `shapes` out back to back with no padding.
    ///
    /// Fails with `StrideOverflow` when the summed sizes do not fit in `usize`.
    pub fn from_shapes(shapes: &[FieldShape]) -> Result<Self> {
        let mut fields = Vec::with_capacity(shapes.len());
        let mut offset = 0usize;
        for (field, &shape) in shapes.iter().enumerate() {
            fields.push(FieldSlot { offset, shape });
            offset = offset
                .checked_add(shape.mapped_size())
                .ok_or(PackError::StrideOverflow { field })?;
        }
        Ok(Self { stride: offset, fields })
    }

    /// Offset of field `index`, if it exists.
    #[inline]
    pub fn offset(&self, index: usize) -> Option<usize> {
        self.fields.get(index).map(|slot| slot.offset)
    }

    #[inline]
    pub fn field(&self, index: usize) -> Option<&FieldSlot> {
        self.fields.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Record stride for `shapes`: the sum of their mapped sizes.
pub(crate) fn stride_of(shapes: &[FieldShape]) -> Result<usize> {
    shapes.iter().enumerate().try_fold(0usize, |sum, (field, shape)| {
        sum.checked_add(shape.mapped_size())
            .ok_or(PackError::StrideOverflow { field })
    })
}
