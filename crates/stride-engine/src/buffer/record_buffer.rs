use crate::bytes::ByteView;
use crate::error::{PackError, Result};
use crate::layout::{BlockLayout, FieldShape, Mappable, RecordSchema};

/// Interleaved array of fixed-size records.
///
/// Invariants while a schema is applied:
/// - `storage.len() == record_count * stride`
/// - `stride` is the sum of the schema's mapped sizes
/// - field `i` starts `sum(mapped_size of fields 0..i)` bytes into each record
///
/// Every operation validates before it mutates, so a returned error means the
/// buffer is unchanged.
#[derive(Debug, Clone, Default)]
pub struct RecordBuffer {
    record_count: usize,
    schema: Vec<FieldShape>,

    /// Stride and field offsets, resolved once per applied schema.
    layout: BlockLayout,

    /// `None` until a schema is applied.
    storage: Option<Vec<u8>>,

    /// Set by `externalize`, cleared by any change to layout or contents.
    externalized: bool,
}

impl RecordBuffer {
    /// Creates an unconfigured buffer that will hold `record_count` records
    /// once a schema is applied.
    #[inline]
    pub fn new(record_count: usize) -> Self {
        Self {
            record_count,
            ..Self::default()
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Bytes per record. Zero until a schema is applied.
    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride
    }

    /// Field shapes in field order. Empty until a schema is applied.
    #[inline]
    pub fn schema(&self) -> &[FieldShape] {
        &self.schema
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.schema.len()
    }

    #[inline]
    pub fn is_schema_applied(&self) -> bool {
        self.storage.is_some()
    }

    /// `true` when the current contents were handed out by [`externalize`](Self::externalize)
    /// and nothing changed since.
    #[inline]
    pub fn is_externalized(&self) -> bool {
        self.externalized
    }

    /// Storage length in bytes (0 when unconfigured).
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.storage.as_ref().map_or(0, Vec::len)
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Replaces the schema and reallocates storage.
    ///
    /// Destructive: storage is zero-filled and all previously loaded field data
    /// is discarded, even when the new schema equals the old one. A schema with
    /// no fields is legal and yields a zero-length storage.
    ///
    /// Fails with `StrideOverflow` when the field sizes do not sum within
    /// `usize`, or `SizeOverflow` when `record_count * stride` bytes cannot be
    /// allocated; the buffer is untouched in both cases.
    pub fn apply_schema(&mut self, schema: &RecordSchema) -> Result<()> {
        let layout = schema.layout()?;
        let len = storage_len(self.record_count, layout.stride)?;

        log::debug!(
            "record buffer: applied schema ({} fields, stride {}, {len} bytes)",
            layout.len(),
            layout.stride
        );
        self.schema = schema.shapes().to_vec();
        self.layout = layout;
        self.storage = Some(vec![0u8; len]);
        self.externalized = false;
        Ok(())
    }

    /// Resizes to `record_count` records.
    ///
    /// The first `min(old, new)` records keep their bytes; records past the old
    /// count start zeroed.
    pub fn set_record_count(&mut self, record_count: usize) -> Result<()> {
        let Some(storage) = self.storage.as_mut() else {
            log::debug!("record buffer: resize to {record_count} rejected, no schema applied");
            return Err(PackError::SchemaNotApplied);
        };
        let len = storage_len(record_count, self.layout.stride)?;

        storage.resize(len, 0);
        log::debug!(
            "record buffer: resized {} -> {record_count} records ({len} bytes)",
            self.record_count
        );
        self.record_count = record_count;
        self.externalized = false;
        Ok(())
    }

    /// Adds `extra` records at the end, zero-filled.
    pub fn grow_record_count(&mut self, extra: usize) -> Result<()> {
        let record_count = self.record_count.checked_add(extra).ok_or(
            PackError::RecordCountOverflow { record_count: self.record_count, extra },
        )?;
        self.set_record_count(record_count)
    }

    /// Byte offset of field `index` within a record.
    pub fn attribute_offset(&self, index: usize) -> Result<usize> {
        self.layout
            .offset(index)
            .ok_or(PackError::FieldIndexOutOfRange {
                index,
                field_count: self.schema.len(),
            })
    }

    /// Stride and per-field offsets, for describing the storage to a backend.
    pub fn layout(&self) -> Result<BlockLayout> {
        self.storage_ref()?;
        Ok(self.layout.clone())
    }

    // ── loading ───────────────────────────────────────────────────────────

    /// Writes `values[i]` into field `index` of record `i`.
    ///
    /// Supplying fewer values than there are records is a partial fill: records
    /// at or past `values.len()` are left as they are. Bytes of other fields are
    /// never touched.
    ///
    /// Errors, checked in this order and before any byte is written:
    /// - `SchemaNotApplied`
    /// - `FieldIndexOutOfRange`
    /// - `ShapeMismatch` when `V`'s shape differs from the declared field
    /// - `CapacityExceeded` when `values.len() > record_count`
    /// - `MaterializedLength` when a value renders to the wrong byte count
    pub fn load_field<V: Mappable>(&mut self, index: usize, values: &[V]) -> Result<()> {
        self.storage_ref()?;
        self.check_field_index(index)?;

        let expected = self.schema[index];
        let actual = V::describe();
        if expected != actual {
            log::debug!("record buffer: field {index} rejected {actual}, declared {expected}");
            return Err(PackError::ShapeMismatch { expected, actual });
        }

        if values.len() > self.record_count {
            log::debug!(
                "record buffer: field {index} rejected {} values for {} records",
                values.len(),
                self.record_count
            );
            return Err(PackError::CapacityExceeded {
                supplied: values.len(),
                record_count: self.record_count,
            });
        }

        let size = expected.mapped_size();
        let mut rendered = Vec::with_capacity(values.len());
        for value in values {
            let bytes = value.materialize();
            if bytes.len() != size {
                return Err(PackError::MaterializedLength {
                    expected: size,
                    actual: bytes.len(),
                });
            }
            rendered.push(bytes);
        }

        let offset = self.attribute_offset(index)?;
        let stride = self.layout.stride;
        let storage = self.storage_mut()?;
        for (record, bytes) in rendered.iter().enumerate() {
            let base = record * stride + offset;
            storage[base..base + size].copy_from_slice(bytes);
        }
        self.externalized = false;

        log::trace!("record buffer: loaded {} values into field {index}", values.len());
        Ok(())
    }

    // ── reading ───────────────────────────────────────────────────────────

    /// Borrows the whole packed storage.
    #[inline]
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.storage_ref()
    }

    /// Bytes of record `record`.
    pub fn record_bytes(&self, record: usize) -> Result<&[u8]> {
        let storage = self.storage_ref()?;
        self.check_record(record)?;
        let stride = self.layout.stride;
        let base = record * stride;
        Ok(&storage[base..base + stride])
    }

    /// Bytes of field `index` in record `record`.
    pub fn field_bytes(&self, index: usize, record: usize) -> Result<&[u8]> {
        let storage = self.storage_ref()?;
        let offset = self.attribute_offset(index)?;
        self.check_record(record)?;
        let base = record * self.layout.stride + offset;
        Ok(&storage[base..base + self.schema[index].mapped_size()])
    }

    /// Hands a snapshot of the packed storage to the rendering backend.
    ///
    /// The returned view is a copy; later loads do not affect it. Marks the
    /// buffer as externalized until the next mutation.
    pub fn externalize(&mut self) -> Result<ByteView> {
        let snapshot = ByteView::from_slice(self.storage_ref()?);
        self.externalized = true;
        log::trace!("record buffer: externalized {} bytes", snapshot.len());
        Ok(snapshot)
    }

    // ── checks ────────────────────────────────────────────────────────────

    fn storage_ref(&self) -> Result<&[u8]> {
        self.storage.as_deref().ok_or(PackError::SchemaNotApplied)
    }

    fn storage_mut(&mut self) -> Result<&mut [u8]> {
        self.storage.as_deref_mut().ok_or(PackError::SchemaNotApplied)
    }

    fn check_field_index(&self, index: usize) -> Result<()> {
        if index < self.schema.len() {
            Ok(())
        } else {
            Err(PackError::FieldIndexOutOfRange { index, field_count: self.schema.len() })
        }
    }

    fn check_record(&self, record: usize) -> Result<()> {
        if record < self.record_count {
            Ok(())
        } else {
            Err(PackError::OutOfRange { index: record, len: self.record_count })
        }
    }
}

/// Storage bytes for `record_count` records. Allocations are capped at
/// `isize::MAX` bytes.
fn storage_len(record_count: usize, stride: usize) -> Result<usize> {
    record_count
        .checked_mul(stride)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(PackError::SizeOverflow { record_count, stride })
}
