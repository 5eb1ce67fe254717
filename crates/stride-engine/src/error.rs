use std::fmt;

use crate::layout::FieldShape;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, PackError>;

/// Recoverable failure reported by the packing engine.
///
/// Every failing call leaves the buffer exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The operation needs a schema but `apply_schema` has not been called yet.
    SchemaNotApplied,
    /// Field index past the end of the applied schema.
    FieldIndexOutOfRange { index: usize, field_count: usize },
    /// Supplied values do not have the shape declared for the field.
    ShapeMismatch { expected: FieldShape, actual: FieldShape },
    /// More values supplied than the buffer has records.
    CapacityExceeded { supplied: usize, record_count: usize },
    /// A `Mappable` impl produced a different byte count than its shape declares.
    MaterializedLength { expected: usize, actual: usize },
    /// Byte or record index past the end of a fixed-length sequence.
    OutOfRange { index: usize, len: usize },
    /// `record_count * stride` bytes cannot be allocated (more than `isize::MAX`).
    SizeOverflow { record_count: usize, stride: usize },
    /// The sum of field sizes up to and including `field` does not fit in `usize`.
    StrideOverflow { field: usize },
    /// `record_count + extra` does not fit in `usize`.
    RecordCountOverflow { record_count: usize, extra: usize },
    /// The rendering backend has no vertex format for this shape.
    UnsupportedFormat { shape: FieldShape },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::SchemaNotApplied => write!(f, "no schema has been applied to the buffer"),
            PackError::FieldIndexOutOfRange { index, field_count } => write!(
                f,
                "field index {index} out of range (schema has {field_count} fields)"
            ),
            PackError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: field expects {expected}, values are {actual}")
            }
            PackError::CapacityExceeded { supplied, record_count } => write!(
                f,
                "{supplied} values supplied but buffer holds only {record_count} records"
            ),
            PackError::MaterializedLength { expected, actual } => write!(
                f,
                "value materialized to {actual} bytes, field shape needs {expected}"
            ),
            PackError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            PackError::SizeOverflow { record_count, stride } => write!(
                f,
                "{record_count} records of {stride} bytes overflow the address space"
            ),
            PackError::StrideOverflow { field } => {
                write!(f, "record stride overflows at field {field}")
            }
            PackError::RecordCountOverflow { record_count, extra } => {
                write!(f, "cannot grow {record_count} records by {extra}: count overflows")
            }
            PackError::UnsupportedFormat { shape } => {
                write!(f, "no vertex format for field shape {shape}")
            }
        }
    }
}

impl std::error::Error for PackError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FieldKind;

    #[test]
    fn shape_mismatch_reports_both_shapes() {
        let err = PackError::ShapeMismatch {
            expected: FieldShape::new(3, 4, FieldKind::Float),
            actual: FieldShape::new(2, 4, FieldKind::Float),
        };
        let msg = err.to_string();
        assert!(msg.contains("3 x 4B float"), "{msg}");
        assert!(msg.contains("2 x 4B float"), "{msg}");
    }

    #[test]
    fn capacity_message_carries_counts() {
        let err = PackError::CapacityExceeded { supplied: 9, record_count: 4 };
        assert_eq!(err.to_string(), "9 values supplied but buffer holds only 4 records");
    }

    #[test]
    fn record_count_overflow_names_both_operands() {
        let err = PackError::RecordCountOverflow { record_count: 3, extra: usize::MAX };
        assert_eq!(
            err.to_string(),
            format!("cannot grow 3 records by {}: count overflows", usize::MAX)
        );
    }
}
