use crate::buffer::RecordBuffer;
use crate::bytes::ByteView;
use crate::error::{PackError, Result};
use crate::layout::{BlockLayout, FieldKind, FieldShape};

/// Parameters for [`VertexLayout`].
#[derive(Debug, Clone)]
pub struct VertexLayoutInit {
    /// Per-vertex or per-instance stepping.
    pub step_mode: wgpu::VertexStepMode,

    /// Shader location of field 0; later fields take consecutive locations.
    ///
    /// Instance buffers usually start after the locations used by the
    /// per-vertex buffer bound alongside them.
    pub first_shader_location: u32,
}

impl Default for VertexLayoutInit {
    fn default() -> Self {
        Self {
            step_mode: wgpu::VertexStepMode::Vertex,
            first_shader_location: 0,
        }
    }
}

/// Vertex format for a field shape.
///
/// Integer fields map to signed formats; shaders that want unsigned values
/// reinterpret them.
pub fn vertex_format(shape: &FieldShape) -> Result<wgpu::VertexFormat> {
    use wgpu::VertexFormat as F;

    let format = match (shape.kind, shape.component_width, shape.component_count) {
        (FieldKind::Float, 4, 1) => F::Float32,
        (FieldKind::Float, 4, 2) => F::Float32x2,
        (FieldKind::Float, 4, 3) => F::Float32x3,
        (FieldKind::Float, 4, 4) => F::Float32x4,

        (FieldKind::Double, 8, 1) => F::Float64,
        (FieldKind::Double, 8, 2) => F::Float64x2,
        (FieldKind::Double, 8, 3) => F::Float64x3,
        (FieldKind::Double, 8, 4) => F::Float64x4,

        (FieldKind::Integer, 4, 1) => F::Sint32,
        (FieldKind::Integer, 4, 2) => F::Sint32x2,
        (FieldKind::Integer, 4, 3) => F::Sint32x3,
        (FieldKind::Integer, 4, 4) => F::Sint32x4,
        (FieldKind::Integer, 2, 2) => F::Sint16x2,
        (FieldKind::Integer, 2, 4) => F::Sint16x4,
        (FieldKind::Integer, 1, 2) => F::Sint8x2,
        (FieldKind::Integer, 1, 4) => F::Sint8x4,

        _ => return Err(PackError::UnsupportedFormat { shape: *shape }),
    };
    Ok(format)
}

/// Owned description of a packed buffer as one wgpu vertex buffer.
#[derive(Debug, Clone)]
pub struct VertexLayout {
    array_stride: wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode,
    attributes: Vec<wgpu::VertexAttribute>,
}

impl VertexLayout {
    /// Builds attributes for every field of `layout`, in field order.
    ///
    /// Fails with `UnsupportedFormat` on the first field wgpu cannot express.
    pub fn from_layout(layout: &BlockLayout, init: VertexLayoutInit) -> Result<Self> {
        let mut attributes = Vec::with_capacity(layout.len());
        for (i, slot) in layout.fields.iter().enumerate() {
            attributes.push(wgpu::VertexAttribute {
                format: vertex_format(&slot.shape)?,
                offset: slot.offset as wgpu::BufferAddress,
                shader_location: init.first_shader_location + i as u32,
            });
        }

        Ok(Self {
            array_stride: layout.stride as wgpu::BufferAddress,
            step_mode: init.step_mode,
            attributes,
        })
    }

    /// Describes `buffer`'s current schema. Requires an applied schema.
    pub fn for_buffer(buffer: &RecordBuffer, init: VertexLayoutInit) -> Result<Self> {
        Self::from_layout(&buffer.layout()?, init)
    }

    #[inline]
    pub fn array_stride(&self) -> wgpu::BufferAddress {
        self.array_stride
    }

    #[inline]
    pub fn attributes(&self) -> &[wgpu::VertexAttribute] {
        &self.attributes
    }

    /// Borrowed form accepted by `wgpu::VertexState::buffers`.
    pub fn as_buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.array_stride,
            step_mode: self.step_mode,
            attributes: &self.attributes,
        }
    }

    /// Init descriptor for uploading an externalized snapshot as a vertex buffer.
    pub fn buffer_init<'a>(
        label: Option<&'a str>,
        snapshot: &'a ByteView,
    ) -> wgpu::util::BufferInitDescriptor<'a> {
        wgpu::util::BufferInitDescriptor {
            label,
            contents: snapshot.as_slice(),
            usage: wgpu::BufferUsages::VERTEX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Color;
    use crate::layout::RecordSchema;

    fn pos_color_buffer() -> RecordBuffer {
        let mut schema = RecordSchema::new();
        schema.attribute_of::<[f32; 2]>().attribute_of::<[f32; 3]>();
        let mut buf = RecordBuffer::new(4);
        buf.apply_schema(&schema).unwrap();
        buf
    }

    // ── vertex_format ─────────────────────────────────────────────────────

    #[test]
    fn format_sizes_match_mapped_sizes() {
        let shapes = [
            FieldShape::new(3, 4, FieldKind::Float),
            FieldShape::new(2, 8, FieldKind::Double),
            FieldShape::new(4, 4, FieldKind::Integer),
            FieldShape::new(2, 2, FieldKind::Integer),
            FieldShape::new(4, 1, FieldKind::Integer),
        ];
        for shape in shapes {
            let format = vertex_format(&shape).unwrap();
            assert_eq!(format.size() as usize, shape.mapped_size(), "{shape}");
        }
    }

    #[test]
    fn unsupported_shapes_are_reported() {
        let odd = FieldShape::new(3, 1, FieldKind::Integer);
        assert_eq!(vertex_format(&odd), Err(PackError::UnsupportedFormat { shape: odd }));
        let other = FieldShape::new(1, 4, FieldKind::Other);
        assert!(vertex_format(&other).is_err());
    }

    // ── VertexLayout ──────────────────────────────────────────────────────

    #[test]
    fn layout_mirrors_buffer_offsets() {
        let buf = pos_color_buffer();
        let vl = VertexLayout::for_buffer(&buf, VertexLayoutInit::default()).unwrap();

        assert_eq!(vl.array_stride(), 20);
        let attrs = vl.attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[1].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(attrs[1].offset, 8);
        assert_eq!(attrs[1].shader_location, 1);
    }

    #[test]
    fn instance_layout_starts_at_requested_location() {
        let mut schema = RecordSchema::new();
        schema
            .attribute_of::<[f32; 2]>()
            .attribute_of::<[f32; 2]>()
            .attribute_of::<Color>();
        let layout = schema.layout().unwrap();

        let init = VertexLayoutInit {
            step_mode: wgpu::VertexStepMode::Instance,
            first_shader_location: 1,
        };
        let vl = VertexLayout::from_layout(&layout, init).unwrap();
        let locations: Vec<u32> =
            vl.attributes().iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![1, 2, 3]);

        let wl = vl.as_buffer_layout();
        assert_eq!(wl.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(wl.array_stride, 32);
    }

    #[test]
    fn unconfigured_buffer_has_no_layout() {
        let buf = RecordBuffer::new(4);
        assert!(matches!(
            VertexLayout::for_buffer(&buf, VertexLayoutInit::default()),
            Err(PackError::SchemaNotApplied)
        ));
    }

    #[test]
    fn buffer_init_wraps_snapshot() {
        let mut buf = pos_color_buffer();
        let snapshot = buf.externalize().unwrap();
        let desc = VertexLayout::buffer_init(Some("points"), &snapshot);
        assert_eq!(desc.contents.len(), 80);
        assert_eq!(desc.usage, wgpu::BufferUsages::VERTEX);
    }
}
